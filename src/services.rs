pub mod entity_service;
pub use entity_service::EntityService;

use crate::db::{FilialSchema, MagazinSchema, ProviderSchema, StaffSchema};

pub type FilialService = EntityService<FilialSchema>;
pub type MagazinService = EntityService<MagazinSchema>;
pub type ProviderService = EntityService<ProviderSchema>;
pub type StaffService = EntityService<StaffSchema>;
