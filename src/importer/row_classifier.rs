// ==========================================
// Invoicing Platform - Row Classifier
// ==========================================
// Detects rows that should be silently dropped before any field rule
// runs: blank rows that survived upstream filtering and header rows
// duplicated mid-sheet (template leftovers). Tolerance over exhaustive
// reporting: a real record whose name collides with a sentinel literal
// is dropped too.
// ==========================================

use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowDisposition {
    /// Row proceeds to field validation.
    Continue,
    /// Row is discarded without an error.
    Skip,
}

/// Classify a decoded row by its primary `name` field.
pub fn classify(
    decoded: &HashMap<String, String>,
    name_sentinels: &[&str],
) -> RowDisposition {
    let name = decoded
        .get("name")
        .map(String::as_str)
        .unwrap_or("")
        .trim();

    if name.is_empty() || name_sentinels.contains(&name) {
        RowDisposition::Skip
    } else {
        RowDisposition::Continue
    }
}
