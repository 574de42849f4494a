// src/db/repository.rs

use std::collections::HashMap;
use std::marker::PhantomData;

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool, Row};
use uuid::Uuid;

use crate::{
    common::{
        error::AppError,
        helper::escape_like,
        query::{bind_named, bind_query, bind_query_as, seal_secrets, SqlValue},
    },
    db::{
        patch::{build_patch, build_update},
        schema::Schema,
    },
    models::common::{GetListRequest, ListPage},
};

/// Operações de armazenamento de uma entidade. O serviço depende só disto,
/// o que permite trocar o Postgres por um dublê nos testes.
#[async_trait]
pub trait Repository<S: Schema>: Send + Sync {
    /// Insere e devolve apenas o id gerado.
    async fn create(&self, input: &S::Create) -> Result<Uuid, AppError>;

    async fn get_by_id(&self, id: Uuid) -> Result<S::Record, AppError>;

    async fn get_list(&self, req: &GetListRequest) -> Result<ListPage<S::Record>, AppError>;

    /// Devolve o número de linhas afetadas.
    async fn update(&self, id: Uuid, input: &S::Update) -> Result<u64, AppError>;

    async fn update_patch(
        &self,
        id: Uuid,
        fields: Vec<(S::Column, SqlValue)>,
    ) -> Result<u64, AppError>;

    /// Idempotente: apagar algo que não existe não é erro.
    async fn delete(&self, id: Uuid) -> Result<(), AppError>;
}

// Linha do GetList com o total vindo do COUNT(*) OVER()
struct Counted<T> {
    total: i64,
    record: T,
}

impl<'r, T: FromRow<'r, PgRow>> FromRow<'r, PgRow> for Counted<T> {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            total: row.try_get("total_count")?,
            record: T::from_row(row)?,
        })
    }
}

// O repositório genérico, responsável pelas interações com a tabela de `S`
pub struct PgRepository<S> {
    pool: PgPool,
    _schema: PhantomData<fn() -> S>,
}

impl<S> Clone for PgRepository<S> {
    fn clone(&self) -> Self {
        Self { pool: self.pool.clone(), _schema: PhantomData }
    }
}

impl<S: Schema> PgRepository<S> {
    pub fn new(pool: PgPool) -> Self {
        Self { pool, _schema: PhantomData }
    }

    // Filtro + parâmetros compartilhados pela página e pelo COUNT de fallback
    fn list_filter(req: &GetListRequest) -> (String, HashMap<&'static str, SqlValue>) {
        let mut filter = String::from(" WHERE TRUE ");
        let mut params: HashMap<&'static str, SqlValue> = HashMap::new();

        if let Some(term) = req.search_term() {
            filter.push_str(&format!(" AND {} ILIKE '%' || :search || '%' ", S::SEARCH_COLUMN));
            params.insert("search", SqlValue::from(escape_like(term)));
        }

        (filter, params)
    }

    async fn execute(&self, sql: &str, args: Vec<SqlValue>) -> Result<u64, AppError> {
        let args = seal_secrets(args).await?;
        let result = bind_query(sqlx::query(sql), args).execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    async fn count(&self, req: &GetListRequest) -> Result<i64, AppError> {
        let (filter, params) = Self::list_filter(req);
        let template = format!("SELECT COUNT(*) FROM {}{}", S::FROM, filter);
        let (sql, args) = bind_named(&template, &params)?;

        let row = bind_query(sqlx::query(&sql), args).fetch_one(&self.pool).await?;
        Ok(row.try_get::<i64, _>(0)?)
    }
}

#[async_trait]
impl<S: Schema> Repository<S> for PgRepository<S> {
    async fn create(&self, input: &S::Create) -> Result<Uuid, AppError> {
        let id = Uuid::new_v4();
        let values = S::insert_values(input);

        let mut columns = vec!["id"];
        let mut placeholders = vec![":id".to_string()];
        let mut params: HashMap<&str, SqlValue> = HashMap::new();
        params.insert("id", SqlValue::from(id));

        for (column, value) in values {
            columns.push(column);
            placeholders.push(format!(":{column}"));
            params.insert(column, value);
        }

        // created_at e updated_at saem do mesmo NOW() da transação
        let template = format!(
            r#"INSERT INTO "{}" ({}, created_at, updated_at) VALUES ({}, NOW(), NOW())"#,
            S::TABLE,
            columns.join(", "),
            placeholders.join(", "),
        );

        let (sql, args) = bind_named(&template, &params)?;
        self.execute(&sql, args).await?;

        tracing::debug!(entity = S::ENTITY, %id, "registro criado");
        Ok(id)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<S::Record, AppError> {
        let template = format!(
            "SELECT {} FROM {} WHERE {} = :id",
            S::SELECT_COLUMNS,
            S::FROM,
            S::ID_COLUMN
        );
        let params = HashMap::from([("id", SqlValue::from(id))]);
        let (sql, args) = bind_named(&template, &params)?;

        bind_query_as(sqlx::query_as::<_, S::Record>(&sql), args)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("{} {} not found", S::ENTITY, id)))
    }

    async fn get_list(&self, req: &GetListRequest) -> Result<ListPage<S::Record>, AppError> {
        let (filter, mut params) = Self::list_filter(req);

        let mut template = format!(
            "SELECT COUNT(*) OVER() AS total_count, {} FROM {}{} ORDER BY {} DESC, {} DESC OFFSET :offset",
            S::SELECT_COLUMNS,
            S::FROM,
            filter,
            S::CREATED_AT_COLUMN,
            S::ID_COLUMN,
        );
        params.insert("offset", SqlValue::BigInt(req.effective_offset()));

        if let Some(limit) = req.effective_limit() {
            template.push_str(" LIMIT :limit");
            params.insert("limit", SqlValue::BigInt(limit));
        }

        let (sql, args) = bind_named(&template, &params)?;
        let rows = bind_query_as(sqlx::query_as::<_, Counted<S::Record>>(&sql), args)
            .fetch_all(&self.pool)
            .await?;

        let count = match rows.first() {
            Some(first) => first.total,
            // Página vazia além do fim: o OVER() não tem linha para contar
            None if req.effective_offset() > 0 => self.count(req).await?,
            None => 0,
        };

        Ok(ListPage {
            count,
            items: rows.into_iter().map(|r| r.record).collect(),
        })
    }

    async fn update(&self, id: Uuid, input: &S::Update) -> Result<u64, AppError> {
        let (sql, args) = build_update(S::TABLE, id, S::update_values(input))?;
        self.execute(&sql, args).await
    }

    async fn update_patch(
        &self,
        id: Uuid,
        fields: Vec<(S::Column, SqlValue)>,
    ) -> Result<u64, AppError> {
        let (sql, args) = build_patch(S::TABLE, id, fields)?;
        self.execute(&sql, args).await
    }

    async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let sql = format!(r#"DELETE FROM "{}" WHERE id = $1"#, S::TABLE);
        sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        Ok(())
    }
}
