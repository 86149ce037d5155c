// ==========================================
// Invoicing Platform - Entity Import Schemas
// ==========================================
// One module per entity kind: alias table + field schema + record
// builder, all static data behind a single trait seam.
// ==========================================

pub mod customers;
pub mod products;

pub use customers::CustomerSchema;
pub use products::ProductSchema;

use crate::domain::import::ValidationError;
use crate::domain::types::EntityKind;
use crate::importer::field_schema::{CoercedRow, FieldSchema};
use crate::importer::validators;
use std::collections::HashMap;

// ==========================================
// EntitySchema Trait
// ==========================================
// Implementors: CustomerSchema, ProductSchema
pub trait EntitySchema: Send + Sync + 'static {
    /// Typed record produced for rows that pass every rule.
    type Record: Send + Clone;

    const KIND: EntityKind;

    /// Alias lookup for an already-normalized (lower-cased, trimmed)
    /// header. None means the header has no canonical mapping.
    fn canonical_field(normalized_header: &str) -> Option<&'static str>;

    /// Header-repeat literals that make the Row Classifier skip a row.
    fn name_sentinels() -> &'static [&'static str];

    /// Field rules in validation order; the first failure wins per row.
    fn fields() -> &'static [FieldSchema];

    /// Build the typed record from a fully coerced row.
    fn build_record(coerced: CoercedRow) -> Self::Record;
}

/// Validate every field of a decoded row in schema order, stopping at
/// the first error, and build the typed record on success.
pub fn validate_row<S: EntitySchema>(
    decoded: &HashMap<String, String>,
    row_number: usize,
) -> Result<S::Record, ValidationError> {
    let mut coerced = CoercedRow::new();
    for field in S::fields() {
        let value = validators::validate_field(decoded, field, row_number)?;
        coerced.insert(field.canonical, value);
    }
    Ok(S::build_record(coerced))
}
