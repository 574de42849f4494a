// src/handlers/magazin.rs

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
        magazin::{CreateMagazin, Magazin, GetListMagazinResponse, UpdateMagazin},
    },
};

// POST /api/magazins
#[utoipa::path(
    post,
    path = "/api/magazins",
    tag = "Magazin",
    request_body = CreateMagazin,
    responses(
        (status = 201, description = "Loja criada (releitura completa)", body = Magazin),
        (status = 400, description = "Dados inválidos", body = ApiError)
    )
)]
pub async fn create_magazin(
    State(app_state): State<AppState>,
    ApiJson(payload): ApiJson<CreateMagazin>,
) -> Result<impl IntoResponse, ApiError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let magazin = app_state.magazin_service.create(payload).await?;

    Ok((StatusCode::CREATED, Json(magazin)))
}

// GET /api/magazins/{id}
#[utoipa::path(
    get,
    path = "/api/magazins/{id}",
    tag = "Magazin",
    params(("id" = Uuid, Path, description = "ID da loja")),
    responses(
        (status = 200, description = "Loja encontrada", body = Magazin),
        (status = 404, description = "Loja não encontrada", body = ApiError)
    )
)]
pub async fn get_magazin_by_id(
    State(app_state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let magazin = app_state.magazin_service.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(magazin)))
}

// GET /api/magazins?search=&limit=&offset=
#[utoipa::path(
    get,
    path = "/api/magazins",
    tag = "Magazin",
    params(GetListRequest),
    responses(
        (status = 200, description = "Página de lojas (busca por nome)", body = GetListMagazinResponse)
    )
)]
pub async fn get_magazin_list(
    State(app_state): State<AppState>,
    ApiQuery(req): ApiQuery<GetListRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let page = app_state.magazin_service.get_list(req).await?;

    Ok((
        StatusCode::OK,
        Json(GetListMagazinResponse { count: page.count, magazins: page.items }),
    ))
}

// PUT /api/magazins/{id}
#[utoipa::path(
    put,
    path = "/api/magazins/{id}",
    tag = "Magazin",
    params(("id" = Uuid, Path, description = "ID da loja")),
    request_body = UpdateMagazin,
    responses(
        (status = 200, description = "Loja atualizada", body = Magazin),
        (status = 400, description = "Dados inválidos ou nenhuma linha afetada", body = ApiError),
        (status = 404, description = "Falha ao reler a loja", body = ApiError)
    )
)]
pub async fn update_magazin(
    State(app_state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(payload): ApiJson<UpdateMagazin>,
) -> Result<impl IntoResponse, ApiError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let magazin = app_state.magazin_service.update(id, payload).await?;

    Ok((StatusCode::OK, Json(magazin)))
}

// PATCH /api/magazins/{id}
#[utoipa::path(
    patch,
    path = "/api/magazins/{id}",
    tag = "Magazin",
    params(("id" = Uuid, Path, description = "ID da loja")),
    request_body = UpdatePatchPayload,
    responses(
        (status = 200, description = "Loja atualizada", body = Magazin),
        (status = 400, description = "Campo desconhecido, patch vazio ou nenhuma linha afetada", body = ApiError),
        (status = 404, description = "Falha ao reler a loja", body = ApiError)
    )
)]
pub async fn update_patch_magazin(
    State(app_state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(payload): ApiJson<UpdatePatchPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let magazin = app_state.magazin_service.update_patch(id, payload.fields).await?;

    Ok((StatusCode::OK, Json(magazin)))
}

// DELETE /api/magazins/{id}
#[utoipa::path(
    delete,
    path = "/api/magazins/{id}",
    tag = "Magazin",
    params(("id" = Uuid, Path, description = "ID da loja")),
    responses(
        (status = 204, description = "Removida (ou já não existia)")
    )
)]
pub async fn delete_magazin(
    State(app_state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    app_state.magazin_service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
