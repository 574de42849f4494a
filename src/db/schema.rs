// src/db/schema.rs

use std::fmt::Debug;

use serde::Serialize;
use serde_json::{Map, Value};
use sqlx::postgres::PgRow;
use sqlx::FromRow;
use uuid::Uuid;

use crate::common::{error::AppError, query::SqlValue};

/// Tipo de dado de uma coluna editável; decide como o JSON vira `SqlValue`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Text,
    Integer,
    Uuid,
    // Senha: aceita texto e é gravada como hash bcrypt
    Secret,
}

/// Enum fechado das colunas que um UpdatePatch pode tocar.
///
/// Nada fora deste enum chega ao SQL como identificador, então `id`,
/// `created_at` e `updated_at` nunca são editáveis por patch.
pub trait Column: Copy + Debug + Send + Sync + 'static {
    const ALL: &'static [Self];

    fn name(self) -> &'static str;
    fn kind(self) -> ColumnKind;

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.name() == name)
    }
}

/// Descritor de uma entidade: tabela, SELECT com os joins e como os requests
/// viram valores de coluna. O repositório e o serviço genéricos só conhecem isso.
pub trait Schema: Send + Sync + 'static {
    /// Nome usado em logs e mensagens ("Filial", "Staff"...)
    const ENTITY: &'static str;
    const TABLE: &'static str;

    /// Lista do SELECT, com aliases batendo com os campos do `Record`
    const SELECT_COLUMNS: &'static str;
    /// FROM + joins com a tabela pai
    const FROM: &'static str;
    const ID_COLUMN: &'static str;
    const SEARCH_COLUMN: &'static str;
    const CREATED_AT_COLUMN: &'static str;

    type Column: Column;
    type Record: for<'r> FromRow<'r, PgRow> + Serialize + Debug + Clone + Send + Sync + Unpin;
    type Create: Debug + Send + Sync;
    type Update: Debug + Send + Sync;

    fn insert_values(input: &Self::Create) -> Vec<(&'static str, SqlValue)>;
    fn update_values(input: &Self::Update) -> Vec<(&'static str, SqlValue)>;
}

/// Valida as chaves do mapa contra o enum de colunas e converte cada valor
/// para o tipo da coluna.
pub fn parse_patch_fields<C: Column>(
    fields: &Map<String, Value>,
) -> Result<Vec<(C, SqlValue)>, AppError> {
    let mut parsed = Vec::with_capacity(fields.len());

    for (key, value) in fields {
        let column = C::from_name(key)
            .ok_or_else(|| AppError::InvalidArgument(format!("unknown field: {}", key)))?;
        parsed.push((column, coerce(column, key, value)?));
    }

    Ok(parsed)
}

fn coerce<C: Column>(column: C, key: &str, value: &Value) -> Result<SqlValue, AppError> {
    let mismatch = |expected: &str| {
        AppError::InvalidArgument(format!("field {} expects {}", key, expected))
    };

    match (column.kind(), value) {
        (ColumnKind::Text, Value::Null) => Ok(SqlValue::Text(None)),
        (ColumnKind::Text, Value::String(s)) => Ok(SqlValue::Text(Some(s.clone()))),
        (ColumnKind::Text, _) => Err(mismatch("a string")),

        (ColumnKind::Integer, Value::Null) => Ok(SqlValue::Integer(None)),
        (ColumnKind::Integer, Value::Number(n)) => {
            // Números que chegam como double (2.0) também valem
            let as_int = n
                .as_i64()
                .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64));
            as_int
                .and_then(|i| i32::try_from(i).ok())
                .map(|i| SqlValue::Integer(Some(i)))
                .ok_or_else(|| mismatch("an integer"))
        }
        (ColumnKind::Integer, _) => Err(mismatch("an integer")),

        (ColumnKind::Uuid, Value::Null) => Ok(SqlValue::Uuid(None)),
        (ColumnKind::Uuid, Value::String(s)) => Uuid::parse_str(s)
            .map(|id| SqlValue::Uuid(Some(id)))
            .map_err(|_| mismatch("a uuid")),
        (ColumnKind::Uuid, _) => Err(mismatch("a uuid")),

        (ColumnKind::Secret, Value::String(s)) if !s.is_empty() => Ok(SqlValue::Secret(s.clone())),
        (ColumnKind::Secret, _) => Err(mismatch("a non-empty string")),
    }
}
