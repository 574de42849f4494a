pub mod error;
pub mod extract;
pub mod helper;
pub mod query;
