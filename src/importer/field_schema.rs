// ==========================================
// Invoicing Platform - Field Schema
// ==========================================
// Static, per-entity field definitions driving the validators.
// Schemas are plain const data: adding an entity kind means adding a
// table, not a type hierarchy.
// ==========================================

use std::collections::HashMap;

// ==========================================
// FieldKind - validation rule selector
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    /// Non-empty after trim, otherwise "{label} is required".
    RequiredText,

    /// Kept verbatim when present, None when blank.
    OptionalText,

    /// Optional; when present (and not a header sentinel) must look like
    /// an email address: one '@', no whitespace, a '.' in the domain.
    Email,

    /// True iff the lower-cased trimmed token is one of
    /// {true, yes, 1, y}; any other token is false, never an error.
    Boolean,

    /// Required decimal with an inclusive lower bound. Currency symbols
    /// are stripped before parsing; unparseable or below-min values are
    /// format errors, missing values are required-field errors.
    RequiredDecimal { min: f64 },

    /// Optional decimal with an inclusive range and a default.
    /// Out-of-range parsed values error; unparseable values silently
    /// fall back to the default (intentional leniency, see DESIGN.md).
    OptionalDecimal { min: f64, max: f64, default: f64 },

    /// Optional text substituted with a default when blank. An empty
    /// result after substitution is still an error.
    TextWithDefault { default: &'static str },
}

// ==========================================
// FieldSchema - one canonical field of one entity kind
// ==========================================
#[derive(Debug, Clone, Copy)]
pub struct FieldSchema {
    /// Canonical field name the Cell Decoder produced ("taxRate").
    pub canonical: &'static str,
    /// User-facing label used in error messages ("Tax rate").
    pub label: &'static str,
    pub kind: FieldKind,
    /// Leftover header/example literals treated as absent values for
    /// this column ("Price", "Email Address").
    pub sentinels: &'static [&'static str],
}

impl FieldSchema {
    pub const fn new(
        canonical: &'static str,
        label: &'static str,
        kind: FieldKind,
        sentinels: &'static [&'static str],
    ) -> Self {
        Self {
            canonical,
            label,
            kind,
            sentinels,
        }
    }
}

// ==========================================
// FieldValue - coerced cell value
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(Option<String>),
    Bool(bool),
    Number(f64),
}

// ==========================================
// CoercedRow - canonical field -> coerced value
// ==========================================
// Built only for rows where every field validated; the entity schema
// drains it into a typed record.
#[derive(Debug, Default)]
pub struct CoercedRow {
    values: HashMap<&'static str, FieldValue>,
}

impl CoercedRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, canonical: &'static str, value: FieldValue) {
        self.values.insert(canonical, value);
    }

    /// Take an optional text field; absent or non-text values become None.
    pub fn take_text(&mut self, canonical: &str) -> Option<String> {
        match self.values.remove(canonical) {
            Some(FieldValue::Text(value)) => value,
            _ => None,
        }
    }

    /// Take a required text field. Validation guarantees presence; the
    /// empty-string fallback only guards against schema drift.
    pub fn take_required_text(&mut self, canonical: &str) -> String {
        self.take_text(canonical).unwrap_or_default()
    }

    pub fn take_bool(&mut self, canonical: &str) -> bool {
        matches!(self.values.remove(canonical), Some(FieldValue::Bool(true)))
    }

    pub fn take_number(&mut self, canonical: &str) -> f64 {
        match self.values.remove(canonical) {
            Some(FieldValue::Number(value)) => value,
            _ => 0.0,
        }
    }
}
