// ==========================================
// Invoicing Platform - Cell Decoder
// ==========================================
// Renames raw spreadsheet headers to canonical field names via the
// entity's alias table. Matching is case-insensitive and trimmed.
// No validation happens here; this stage only renames and trims.
// Unmapped headers pass through under their normalized key and are
// ignored downstream (no validator consumes them).
// ==========================================

use crate::importer::schema::EntitySchema;
use std::collections::HashMap;

/// Lower-cased, trimmed form used for alias lookup.
pub fn normalize_header(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Decode one raw row into canonical-field -> trimmed-string form.
pub fn decode_row<S: EntitySchema>(raw: &HashMap<String, String>) -> HashMap<String, String> {
    let mut decoded = HashMap::with_capacity(raw.len());
    for (header, value) in raw {
        let normalized = normalize_header(header);
        let key = match S::canonical_field(&normalized) {
            Some(canonical) => canonical.to_string(),
            None => normalized,
        };
        decoded.insert(key, value.trim().to_string());
    }
    decoded
}
