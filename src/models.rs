pub mod common;
pub mod filial;
pub mod magazin;
pub mod provider;
pub mod staff;
