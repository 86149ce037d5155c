// ==========================================
// Invoicing Platform - Import Layer
// ==========================================
// Generic tabular import & validation pipeline:
// file bytes -> raw rows -> Cell Decoder -> Row Classifier ->
// Field Validators -> Orchestrator -> (caller) Atomic Commit.
// ==========================================

pub mod error;
pub mod field_schema;
pub mod file_parser;
pub mod header_map;
pub mod import_service;
pub mod pipeline;
pub mod row_classifier;
pub mod schema;
pub mod validators;

// Re-export core types
pub use error::{ImportError, ImportResult};
pub use field_schema::{CoercedRow, FieldKind, FieldSchema, FieldValue};
pub use file_parser::{CsvParser, ExcelParser, FileParser, RawRow, UniversalFileParser};
pub use import_service::ImportService;
pub use pipeline::ImportPipeline;
pub use row_classifier::RowDisposition;
pub use schema::{CustomerSchema, EntitySchema, ProductSchema};
