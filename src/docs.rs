// src/docs.rs

use utoipa::OpenApi;
use crate::common;
use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Filial ---
        handlers::filial::create_filial,
        handlers::filial::get_filial_by_id,
        handlers::filial::get_filial_list,
        handlers::filial::update_filial,
        handlers::filial::update_patch_filial,
        handlers::filial::delete_filial,

        // --- Magazin ---
        handlers::magazin::create_magazin,
        handlers::magazin::get_magazin_by_id,
        handlers::magazin::get_magazin_list,
        handlers::magazin::update_magazin,
        handlers::magazin::update_patch_magazin,
        handlers::magazin::delete_magazin,

        // --- Provider ---
        handlers::provider::create_provider,
        handlers::provider::get_provider_by_id,
        handlers::provider::get_provider_list,
        handlers::provider::update_provider,
        handlers::provider::update_patch_provider,
        handlers::provider::delete_provider,

        // --- Staff ---
        handlers::staff::create_staff,
        handlers::staff::get_staff_by_id,
        handlers::staff::get_staff_list,
        handlers::staff::update_staff,
        handlers::staff::update_patch_staff,
        handlers::staff::delete_staff,
    ),
    components(
        schemas(
            // --- Comuns ---
            common::error::Code,
            common::error::ApiError,
            models::common::UpdatePatchPayload,

            // --- Filial ---
            models::filial::Filial,
            models::filial::CreateFilial,
            models::filial::UpdateFilial,
            models::filial::GetListFilialResponse,

            // --- Magazin ---
            models::magazin::Magazin,
            models::magazin::CreateMagazin,
            models::magazin::UpdateMagazin,
            models::magazin::GetListMagazinResponse,

            // --- Provider ---
            models::provider::Provider,
            models::provider::CreateProvider,
            models::provider::UpdateProvider,
            models::provider::GetListProviderResponse,

            // --- Staff ---
            models::staff::Staff,
            models::staff::CreateStaff,
            models::staff::UpdateStaff,
            models::staff::GetListStaffResponse,
        )
    ),
    tags(
        (name = "Filial", description = "Filiais da organização"),
        (name = "Magazin", description = "Lojas, cada uma ligada a uma filial"),
        (name = "Provider", description = "Fornecedores"),
        (name = "Staff", description = "Funcionários das lojas")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_entity_exposes_its_six_operations() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        for entity in ["filials", "magazins", "providers", "staffs"] {
            let collection = paths.get(&format!("/api/{entity}")).expect("collection path");
            assert!(collection.get.is_some() && collection.post.is_some(), "{entity}");

            let item = paths.get(&format!("/api/{entity}/{{id}}")).expect("item path");
            assert!(item.get.is_some(), "{entity}");
            assert!(item.put.is_some(), "{entity}");
            assert!(item.patch.is_some(), "{entity}");
            assert!(item.delete.is_some(), "{entity}");
        }
    }
}
