// src/handlers/staff.rs

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
        staff::{CreateStaff, Staff, GetListStaffResponse, UpdateStaff},
    },
};

// POST /api/staffs
#[utoipa::path(
    post,
    path = "/api/staffs",
    tag = "Staff",
    request_body = CreateStaff,
    responses(
        (status = 201, description = "Funcionário criado (releitura completa)", body = Staff),
        (status = 400, description = "Dados inválidos", body = ApiError)
    )
)]
pub async fn create_staff(
    State(app_state): State<AppState>,
    ApiJson(payload): ApiJson<CreateStaff>,
) -> Result<impl IntoResponse, ApiError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let staff = app_state.staff_service.create(payload).await?;

    Ok((StatusCode::CREATED, Json(staff)))
}

// GET /api/staffs/{id}
#[utoipa::path(
    get,
    path = "/api/staffs/{id}",
    tag = "Staff",
    params(("id" = Uuid, Path, description = "ID do funcionário")),
    responses(
        (status = 200, description = "Funcionário encontrado", body = Staff),
        (status = 404, description = "Funcionário não encontrado", body = ApiError)
    )
)]
pub async fn get_staff_by_id(
    State(app_state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let staff = app_state.staff_service.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(staff)))
}

// GET /api/staffs?search=&limit=&offset=
#[utoipa::path(
    get,
    path = "/api/staffs",
    tag = "Staff",
    params(GetListRequest),
    responses(
        (status = 200, description = "Página de funcionários (busca por primeiro nome)", body = GetListStaffResponse)
    )
)]
pub async fn get_staff_list(
    State(app_state): State<AppState>,
    ApiQuery(req): ApiQuery<GetListRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let page = app_state.staff_service.get_list(req).await?;

    Ok((
        StatusCode::OK,
        Json(GetListStaffResponse { count: page.count, staffs: page.items }),
    ))
}

// PUT /api/staffs/{id}
#[utoipa::path(
    put,
    path = "/api/staffs/{id}",
    tag = "Staff",
    params(("id" = Uuid, Path, description = "ID do funcionário")),
    request_body = UpdateStaff,
    responses(
        (status = 200, description = "Funcionário atualizado", body = Staff),
        (status = 400, description = "Dados inválidos ou nenhuma linha afetada", body = ApiError),
        (status = 404, description = "Falha ao reler o funcionário", body = ApiError)
    )
)]
pub async fn update_staff(
    State(app_state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(payload): ApiJson<UpdateStaff>,
) -> Result<impl IntoResponse, ApiError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let staff = app_state.staff_service.update(id, payload).await?;

    Ok((StatusCode::OK, Json(staff)))
}

// PATCH /api/staffs/{id}
#[utoipa::path(
    patch,
    path = "/api/staffs/{id}",
    tag = "Staff",
    params(("id" = Uuid, Path, description = "ID do funcionário")),
    request_body = UpdatePatchPayload,
    responses(
        (status = 200, description = "Funcionário atualizado", body = Staff),
        (status = 400, description = "Campo desconhecido, patch vazio ou nenhuma linha afetada", body = ApiError),
        (status = 404, description = "Falha ao reler o funcionário", body = ApiError)
    )
)]
pub async fn update_patch_staff(
    State(app_state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(payload): ApiJson<UpdatePatchPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let staff = app_state.staff_service.update_patch(id, payload.fields).await?;

    Ok((StatusCode::OK, Json(staff)))
}

// DELETE /api/staffs/{id}
#[utoipa::path(
    delete,
    path = "/api/staffs/{id}",
    tag = "Staff",
    params(("id" = Uuid, Path, description = "ID do funcionário")),
    responses(
        (status = 204, description = "Removido (ou já não existia)")
    )
)]
pub async fn delete_staff(
    State(app_state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    app_state.staff_service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
