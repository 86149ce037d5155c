// ==========================================
// Invoicing Platform - Domain Layer
// ==========================================
// Entities written by the import layer plus the import result types
// shared with the transport boundary.
// ==========================================

pub mod customer;
pub mod import;
pub mod product;
pub mod types;

pub use customer::NewCustomer;
pub use import::{ImportOutcome, ImportResponse, ValidationError};
pub use product::NewProduct;
pub use types::EntityKind;
