pub mod patch;
pub mod repository;
pub mod schema;

pub mod filial_repo;
pub use filial_repo::{FilialRepository, FilialSchema};
pub mod magazin_repo;
pub use magazin_repo::{MagazinRepository, MagazinSchema};
pub mod provider_repo;
pub use provider_repo::{ProviderRepository, ProviderSchema};
pub mod staff_repo;
pub use staff_repo::{StaffRepository, StaffSchema};

pub use repository::{PgRepository, Repository};
