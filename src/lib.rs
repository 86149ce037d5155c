// ==========================================
// Invoicing Platform - Bulk Import Core
// ==========================================
// Ingests customer/product spreadsheets (CSV / Excel), normalizes
// messy human-produced headers, validates every row with accumulated
// row-addressable errors, and commits valid batches atomically.
// Stack: rusqlite + calamine/csv + tracing
// ==========================================

// ==========================================
// Module declarations
// ==========================================

// Domain layer - entities and result types
pub mod domain;

// Import layer - decode, classify, validate, orchestrate
pub mod importer;

// Repository layer - atomic commit gateway
pub mod repository;

// Database infrastructure (connection init / PRAGMA / schema)
pub mod db;

// Logging
pub mod logging;

// ==========================================
// Re-export core types
// ==========================================

pub use domain::{EntityKind, ImportOutcome, ImportResponse, NewCustomer, NewProduct, ValidationError};
pub use importer::{ImportError, ImportPipeline, ImportResult, ImportService};
pub use repository::{ImportRepository, SqliteImportRepository};

// ==========================================
// Constants
// ==========================================

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const APP_NAME: &str = "invoicing-import";
