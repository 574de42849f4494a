// src/models/magazin.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

// Magazin = loja, sempre ligada a uma filial
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Magazin {
    pub id: Uuid,

    #[schema(example = "Store A")]
    pub name: String,

    pub filial_id: Uuid,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMagazin {
    #[validate(length(min = 1, message = "name is required"))]
    #[schema(example = "Store A")]
    pub name: String,

    pub filial_id: Uuid,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMagazin {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    pub filial_id: Uuid,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetListMagazinResponse {
    pub count: i64,
    pub magazins: Vec<Magazin>,
}
