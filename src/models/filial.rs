// src/models/filial.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

// Filial = agência/filial da organização
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Filial {
    pub id: Uuid,

    // Gerado a partir do nome na criação ("North Branch" -> "NB")
    #[schema(example = "NB")]
    pub filial_code: String,

    #[schema(example = "North Branch")]
    pub name: String,

    #[schema(example = "1 Main St")]
    pub address: Option<String>,

    #[schema(example = "555-0100")]
    pub phone: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateFilial {
    #[validate(length(min = 1, message = "name is required"))]
    #[schema(example = "North Branch")]
    pub name: String,

    #[schema(example = "1 Main St")]
    pub address: Option<String>,

    #[schema(example = "555-0100")]
    pub phone: Option<String>,
}

// O filial_code não entra aqui: só muda via UpdatePatch
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFilial {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetListFilialResponse {
    pub count: i64,
    pub filials: Vec<Filial>,
}
