// src/handlers/filial.rs

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
        filial::{CreateFilial, Filial, GetListFilialResponse, UpdateFilial},
    },
};

// POST /api/filials
#[utoipa::path(
    post,
    path = "/api/filials",
    tag = "Filial",
    request_body = CreateFilial,
    responses(
        (status = 201, description = "Filial criada (releitura completa)", body = Filial),
        (status = 400, description = "Dados inválidos", body = ApiError)
    )
)]
pub async fn create_filial(
    State(app_state): State<AppState>,
    ApiJson(payload): ApiJson<CreateFilial>,
) -> Result<impl IntoResponse, ApiError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let filial = app_state.filial_service.create(payload).await?;

    Ok((StatusCode::CREATED, Json(filial)))
}

// GET /api/filials/{id}
#[utoipa::path(
    get,
    path = "/api/filials/{id}",
    tag = "Filial",
    params(("id" = Uuid, Path, description = "ID da filial")),
    responses(
        (status = 200, description = "Filial encontrada", body = Filial),
        (status = 404, description = "Filial não encontrada", body = ApiError)
    )
)]
pub async fn get_filial_by_id(
    State(app_state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let filial = app_state.filial_service.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(filial)))
}

// GET /api/filials?search=&limit=&offset=
#[utoipa::path(
    get,
    path = "/api/filials",
    tag = "Filial",
    params(GetListRequest),
    responses(
        (status = 200, description = "Página de filiais (busca pelo código)", body = GetListFilialResponse)
    )
)]
pub async fn get_filial_list(
    State(app_state): State<AppState>,
    ApiQuery(req): ApiQuery<GetListRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let page = app_state.filial_service.get_list(req).await?;

    Ok((
        StatusCode::OK,
        Json(GetListFilialResponse { count: page.count, filials: page.items }),
    ))
}

// PUT /api/filials/{id}
#[utoipa::path(
    put,
    path = "/api/filials/{id}",
    tag = "Filial",
    params(("id" = Uuid, Path, description = "ID da filial")),
    request_body = UpdateFilial,
    responses(
        (status = 200, description = "Filial atualizada", body = Filial),
        (status = 400, description = "Dados inválidos ou nenhuma linha afetada", body = ApiError),
        (status = 404, description = "Falha ao reler a filial", body = ApiError)
    )
)]
pub async fn update_filial(
    State(app_state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(payload): ApiJson<UpdateFilial>,
) -> Result<impl IntoResponse, ApiError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let filial = app_state.filial_service.update(id, payload).await?;

    Ok((StatusCode::OK, Json(filial)))
}

// PATCH /api/filials/{id}
#[utoipa::path(
    patch,
    path = "/api/filials/{id}",
    tag = "Filial",
    params(("id" = Uuid, Path, description = "ID da filial")),
    request_body = UpdatePatchPayload,
    responses(
        (status = 200, description = "Filial atualizada", body = Filial),
        (status = 400, description = "Campo desconhecido, patch vazio ou nenhuma linha afetada", body = ApiError),
        (status = 404, description = "Falha ao reler a filial", body = ApiError)
    )
)]
pub async fn update_patch_filial(
    State(app_state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(payload): ApiJson<UpdatePatchPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let filial = app_state.filial_service.update_patch(id, payload.fields).await?;

    Ok((StatusCode::OK, Json(filial)))
}

// DELETE /api/filials/{id}
#[utoipa::path(
    delete,
    path = "/api/filials/{id}",
    tag = "Filial",
    params(("id" = Uuid, Path, description = "ID da filial")),
    responses(
        (status = 204, description = "Removida (ou já não existia)")
    )
)]
pub async fn delete_filial(
    State(app_state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    app_state.filial_service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
