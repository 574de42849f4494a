// src/app.rs

use axum::{routing::get, Router};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{config::AppState, docs::ApiDoc, handlers};

// Monta o router completo; fica fora do main para os testes usarem
pub fn build_router(app_state: AppState) -> Router {
    let filial_routes = Router::new()
        .route("/api/filials"
               ,get(handlers::filial::get_filial_list)
               .post(handlers::filial::create_filial)
        )
        .route("/api/filials/{id}"
               ,get(handlers::filial::get_filial_by_id)
               .put(handlers::filial::update_filial)
               .patch(handlers::filial::update_patch_filial)
               .delete(handlers::filial::delete_filial)
        );

    let magazin_routes = Router::new()
        .route("/api/magazins"
               ,get(handlers::magazin::get_magazin_list)
               .post(handlers::magazin::create_magazin)
        )
        .route("/api/magazins/{id}"
               ,get(handlers::magazin::get_magazin_by_id)
               .put(handlers::magazin::update_magazin)
               .patch(handlers::magazin::update_patch_magazin)
               .delete(handlers::magazin::delete_magazin)
        );

    let provider_routes = Router::new()
        .route("/api/providers"
               ,get(handlers::provider::get_provider_list)
               .post(handlers::provider::create_provider)
        )
        .route("/api/providers/{id}"
               ,get(handlers::provider::get_provider_by_id)
               .put(handlers::provider::update_provider)
               .patch(handlers::provider::update_patch_provider)
               .delete(handlers::provider::delete_provider)
        );

    let staff_routes = Router::new()
        .route("/api/staffs"
               ,get(handlers::staff::get_staff_list)
               .post(handlers::staff::create_staff)
        )
        .route("/api/staffs/{id}"
               ,get(handlers::staff::get_staff_by_id)
               .put(handlers::staff::update_staff)
               .patch(handlers::staff::update_patch_staff)
               .delete(handlers::staff::delete_staff)
        );

    // Combina tudo no router principal
    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .merge(filial_routes)
        .merge(magazin_routes)
        .merge(provider_routes)
        .merge(staff_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(app_state)
}
