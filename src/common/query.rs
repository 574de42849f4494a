// src/common/query.rs

use std::collections::HashMap;
use std::fmt;

use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::{Query, QueryAs};
use sqlx::Postgres;
use uuid::Uuid;

use crate::common::{error::AppError, helper::hash_password};

/// Valor tipado que será enviado ao Postgres como parâmetro posicional.
///
/// Os NULLs carregam o tipo da coluna (`Text(None)`, `Integer(None)`...) para
/// que o Postgres não precise adivinhar o tipo do parâmetro.
#[derive(Clone, PartialEq)]
pub enum SqlValue {
    Text(Option<String>),
    Integer(Option<i32>),
    BigInt(i64),
    Uuid(Option<Uuid>),
    /// Texto puro que vira hash bcrypt em `seal_secrets`, antes do bind.
    Secret(String),
}

// Nunca imprimir segredos nos logs
impl fmt::Debug for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlValue::Text(v) => f.debug_tuple("Text").field(v).finish(),
            SqlValue::Integer(v) => f.debug_tuple("Integer").field(v).finish(),
            SqlValue::BigInt(v) => f.debug_tuple("BigInt").field(v).finish(),
            SqlValue::Uuid(v) => f.debug_tuple("Uuid").field(v).finish(),
            SqlValue::Secret(_) => f.write_str("Secret(***)"),
        }
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        SqlValue::Text(Some(value.to_string()))
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        SqlValue::Text(Some(value))
    }
}

impl From<Option<String>> for SqlValue {
    fn from(value: Option<String>) -> Self {
        SqlValue::Text(value)
    }
}

impl From<i32> for SqlValue {
    fn from(value: i32) -> Self {
        SqlValue::Integer(Some(value))
    }
}

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        SqlValue::BigInt(value)
    }
}

impl From<Uuid> for SqlValue {
    fn from(value: Uuid) -> Self {
        SqlValue::Uuid(Some(value))
    }
}

/// Reescreve `:nome` em `$n` e devolve os argumentos na mesma ordem.
///
/// As posições saem de uma única passada pelo texto do template, na ordem em
/// que os nomes aparecem; repetir um nome reaproveita a posição já atribuída.
/// Casts (`::text`) e literais entre aspas simples ficam intactos.
pub fn bind_named(
    template: &str,
    params: &HashMap<&str, SqlValue>,
) -> Result<(String, Vec<SqlValue>), AppError> {
    let mut query = String::with_capacity(template.len());
    let mut args: Vec<SqlValue> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    let bytes = template.as_bytes();
    let mut in_literal = false;
    let mut i = 0;

    while i < bytes.len() {
        let c = bytes[i];

        if c == b'\'' {
            in_literal = !in_literal;
            query.push('\'');
            i += 1;
            continue;
        }

        if in_literal || c != b':' {
            // Copia o caractere inteiro (pode ser multibyte)
            let ch = template[i..].chars().next().unwrap_or_default();
            query.push(ch);
            i += ch.len_utf8().max(1);
            continue;
        }

        // `::tipo` é cast do Postgres, não placeholder
        if bytes.get(i + 1) == Some(&b':') {
            query.push_str("::");
            i += 2;
            continue;
        }

        let start = i + 1;
        let mut end = start;
        while end < bytes.len() && (bytes[end].is_ascii_alphanumeric() || bytes[end] == b'_') {
            end += 1;
        }

        if end == start {
            query.push(':');
            i += 1;
            continue;
        }

        let name = &template[start..end];
        let position = match positions.get(name) {
            Some(position) => *position,
            None => {
                let value = params
                    .get(name)
                    .ok_or_else(|| AppError::UnboundParameter(name.to_string()))?;
                args.push(value.clone());
                positions.insert(name, args.len());
                args.len()
            }
        };

        query.push('$');
        query.push_str(&position.to_string());
        i = end;
    }

    Ok((query, args))
}

/// Troca cada `SqlValue::Secret` pelo hash bcrypt correspondente.
pub async fn seal_secrets(args: Vec<SqlValue>) -> Result<Vec<SqlValue>, AppError> {
    let mut sealed = Vec::with_capacity(args.len());
    for arg in args {
        sealed.push(match arg {
            SqlValue::Secret(plain) => SqlValue::Text(Some(hash_password(plain).await?)),
            other => other,
        });
    }
    Ok(sealed)
}

pub fn bind_query<'q>(
    mut query: Query<'q, Postgres, PgArguments>,
    args: Vec<SqlValue>,
) -> Query<'q, Postgres, PgArguments> {
    for arg in args {
        query = match arg {
            SqlValue::Text(v) => query.bind(v),
            SqlValue::Integer(v) => query.bind(v),
            SqlValue::BigInt(v) => query.bind(v),
            SqlValue::Uuid(v) => query.bind(v),
            // `seal_secrets` roda antes; se chegar aqui, nunca mandamos o texto puro
            SqlValue::Secret(_) => query.bind(None::<String>),
        };
    }
    query
}

pub fn bind_query_as<'q, O>(
    mut query: QueryAs<'q, Postgres, O, PgArguments>,
    args: Vec<SqlValue>,
) -> QueryAs<'q, Postgres, O, PgArguments>
where
    O: for<'r> sqlx::FromRow<'r, PgRow>,
{
    for arg in args {
        query = match arg {
            SqlValue::Text(v) => query.bind(v),
            SqlValue::Integer(v) => query.bind(v),
            SqlValue::BigInt(v) => query.bind(v),
            SqlValue::Uuid(v) => query.bind(v),
            SqlValue::Secret(_) => query.bind(None::<String>),
        };
    }
    query
}
