// src/db/patch.rs

use std::collections::HashMap;

use uuid::Uuid;

use crate::common::{
    error::AppError,
    query::{bind_named, SqlValue},
};
use crate::db::schema::Column;

// Chave reservada para o identificador no mapa de parâmetros
const ID_KEY: &str = "id";

/// Monta `UPDATE "<tabela>" SET a = :a, ..., updated_at = now() WHERE id = :id`
/// já reescrito para parâmetros posicionais.
///
/// Os nomes de coluna vêm sempre de código (`&'static str`), nunca do cliente.
pub fn build_update(
    table: &str,
    id: Uuid,
    assignments: Vec<(&'static str, SqlValue)>,
) -> Result<(String, Vec<SqlValue>), AppError> {
    if assignments.is_empty() {
        return Err(AppError::InvalidArgument("no updates provided".to_string()));
    }

    let set = assignments
        .iter()
        .map(|(column, _)| format!("{column} = :{column}"))
        .collect::<Vec<_>>()
        .join(", ");

    let template = format!(
        r#"UPDATE "{table}" SET {set}, updated_at = now() WHERE id = :{ID_KEY}"#
    );

    let mut params: HashMap<&str, SqlValue> = assignments.into_iter().collect();
    params.insert(ID_KEY, SqlValue::Uuid(Some(id)));

    bind_named(&template, &params)
}

/// Patch parcial: só as colunas pedidas. Patch vazio é erro, não no-op.
pub fn build_patch<C: Column>(
    table: &str,
    id: Uuid,
    fields: Vec<(C, SqlValue)>,
) -> Result<(String, Vec<SqlValue>), AppError> {
    let assignments = fields
        .into_iter()
        .map(|(column, value)| (column.name(), value))
        .collect();

    build_update(table, id, assignments)
}
