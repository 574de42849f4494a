// src/models/provider.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Provider {
    pub id: Uuid,

    #[schema(example = "Acme Supplies")]
    pub name: String,

    #[schema(example = "555-0199")]
    pub phone: Option<String>,

    // Enum inteiro (1 = ativo por padrão no banco)
    #[schema(example = 1)]
    pub status: i32,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProvider {
    #[validate(length(min = 1, message = "name is required"))]
    #[schema(example = "Acme Supplies")]
    pub name: String,

    pub phone: Option<String>,

    // Ausente = default da coluna
    #[validate(range(min = 0, message = "status must not be negative"))]
    pub status: Option<i32>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProvider {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    pub phone: Option<String>,
    #[validate(range(min = 0, message = "status must not be negative"))]
    pub status: i32,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetListProviderResponse {
    pub count: i64,
    pub providers: Vec<Provider>,
}
