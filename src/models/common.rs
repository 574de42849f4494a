// src/models/common.rs

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::{IntoParams, ToSchema};

// Query string do GetList: ?search=&limit=&offset=
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GetListRequest {
    /// Busca por substring, sem diferenciar maiúsculas
    pub search: Option<String>,
    /// Sem limite quando ausente ou <= 0
    pub limit: Option<i64>,
    /// 0 quando ausente ou <= 0
    pub offset: Option<i64>,
}

impl GetListRequest {
    pub fn search_term(&self) -> Option<&str> {
        self.search.as_deref().filter(|s| !s.is_empty())
    }

    pub fn effective_limit(&self) -> Option<i64> {
        self.limit.filter(|l| *l > 0)
    }

    pub fn effective_offset(&self) -> i64 {
        self.offset.filter(|o| *o > 0).unwrap_or(0)
    }
}

/// Corpo do UpdatePatch: só os campos que devem mudar.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdatePatchPayload {
    #[schema(value_type = Object, example = json!({"name": "Novo nome"}))]
    pub fields: Map<String, Value>,
}

// Página genérica devolvida pelos repositórios
#[derive(Debug, Clone, Serialize)]
pub struct ListPage<T> {
    pub count: i64,
    pub items: Vec<T>,
}
