// src/handlers/provider.rs

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::{
        error::{ApiError, AppError},
        extract::{ApiJson, ApiPath, ApiQuery},
    },
    config::AppState,
    models::{
        common::{GetListRequest, UpdatePatchPayload},
        provider::{CreateProvider, Provider, GetListProviderResponse, UpdateProvider},
    },
};

// POST /api/providers
#[utoipa::path(
    post,
    path = "/api/providers",
    tag = "Provider",
    request_body = CreateProvider,
    responses(
        (status = 201, description = "Fornecedor criado (releitura completa)", body = Provider),
        (status = 400, description = "Dados inválidos", body = ApiError)
    )
)]
pub async fn create_provider(
    State(app_state): State<AppState>,
    ApiJson(payload): ApiJson<CreateProvider>,
) -> Result<impl IntoResponse, ApiError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let provider = app_state.provider_service.create(payload).await?;

    Ok((StatusCode::CREATED, Json(provider)))
}

// GET /api/providers/{id}
#[utoipa::path(
    get,
    path = "/api/providers/{id}",
    tag = "Provider",
    params(("id" = Uuid, Path, description = "ID do fornecedor")),
    responses(
        (status = 200, description = "Fornecedor encontrado", body = Provider),
        (status = 404, description = "Fornecedor não encontrado", body = ApiError)
    )
)]
pub async fn get_provider_by_id(
    State(app_state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let provider = app_state.provider_service.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(provider)))
}

// GET /api/providers?search=&limit=&offset=
#[utoipa::path(
    get,
    path = "/api/providers",
    tag = "Provider",
    params(GetListRequest),
    responses(
        (status = 200, description = "Página de fornecedores (busca por nome)", body = GetListProviderResponse)
    )
)]
pub async fn get_provider_list(
    State(app_state): State<AppState>,
    ApiQuery(req): ApiQuery<GetListRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let page = app_state.provider_service.get_list(req).await?;

    Ok((
        StatusCode::OK,
        Json(GetListProviderResponse { count: page.count, providers: page.items }),
    ))
}

// PUT /api/providers/{id}
#[utoipa::path(
    put,
    path = "/api/providers/{id}",
    tag = "Provider",
    params(("id" = Uuid, Path, description = "ID do fornecedor")),
    request_body = UpdateProvider,
    responses(
        (status = 200, description = "Fornecedor atualizado", body = Provider),
        (status = 400, description = "Dados inválidos ou nenhuma linha afetada", body = ApiError),
        (status = 404, description = "Falha ao reler o fornecedor", body = ApiError)
    )
)]
pub async fn update_provider(
    State(app_state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(payload): ApiJson<UpdateProvider>,
) -> Result<impl IntoResponse, ApiError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let provider = app_state.provider_service.update(id, payload).await?;

    Ok((StatusCode::OK, Json(provider)))
}

// PATCH /api/providers/{id}
#[utoipa::path(
    patch,
    path = "/api/providers/{id}",
    tag = "Provider",
    params(("id" = Uuid, Path, description = "ID do fornecedor")),
    request_body = UpdatePatchPayload,
    responses(
        (status = 200, description = "Fornecedor atualizado", body = Provider),
        (status = 400, description = "Campo desconhecido, patch vazio ou nenhuma linha afetada", body = ApiError),
        (status = 404, description = "Falha ao reler o fornecedor", body = ApiError)
    )
)]
pub async fn update_patch_provider(
    State(app_state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(payload): ApiJson<UpdatePatchPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let provider = app_state.provider_service.update_patch(id, payload.fields).await?;

    Ok((StatusCode::OK, Json(provider)))
}

// DELETE /api/providers/{id}
#[utoipa::path(
    delete,
    path = "/api/providers/{id}",
    tag = "Provider",
    params(("id" = Uuid, Path, description = "ID do fornecedor")),
    responses(
        (status = 204, description = "Removido (ou já não existia)")
    )
)]
pub async fn delete_provider(
    State(app_state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    app_state.provider_service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
