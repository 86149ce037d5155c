// ==========================================
// Invoicing Platform - Field Validators
// ==========================================
// Pure per-field rules: (decoded row, FieldSchema) -> Ok(coerced value)
// or Err(ValidationError). The first Err wins for a row; control flow
// is a tagged-result chain, never an exception.
// ==========================================

use crate::domain::import::ValidationError;
use crate::importer::field_schema::{FieldKind, FieldSchema, FieldValue};
use std::collections::HashMap;

/// Validate one field of one decoded row.
///
/// # Parameters
/// - decoded: canonical field -> trimmed cell text (Cell Decoder output)
/// - field: the static schema entry for this field
/// - row_number: 1-based spreadsheet row (first data row is 2)
pub fn validate_field(
    decoded: &HashMap<String, String>,
    field: &FieldSchema,
    row_number: usize,
) -> Result<FieldValue, ValidationError> {
    let raw = decoded
        .get(field.canonical)
        .map(String::as_str)
        .unwrap_or("")
        .trim();

    match field.kind {
        FieldKind::RequiredText => required_text(raw, field, row_number),
        FieldKind::OptionalText => Ok(optional_text(raw)),
        FieldKind::Email => email(raw, field, row_number),
        FieldKind::Boolean => Ok(FieldValue::Bool(parse_boolean(raw))),
        FieldKind::RequiredDecimal { min } => required_decimal(raw, field, min, row_number),
        FieldKind::OptionalDecimal { min, max, default } => {
            optional_decimal(raw, field, min, max, default, row_number)
        }
        FieldKind::TextWithDefault { default } => text_with_default(raw, field, default, row_number),
    }
}

// ===== Rule implementations =====

fn required_text(
    raw: &str,
    field: &FieldSchema,
    row_number: usize,
) -> Result<FieldValue, ValidationError> {
    if raw.is_empty() {
        return Err(ValidationError::new(
            row_number,
            field.canonical,
            format!("{} is required", field.label),
        ));
    }
    Ok(FieldValue::Text(Some(raw.to_string())))
}

fn optional_text(raw: &str) -> FieldValue {
    if raw.is_empty() {
        FieldValue::Text(None)
    } else {
        FieldValue::Text(Some(raw.to_string()))
    }
}

fn email(
    raw: &str,
    field: &FieldSchema,
    row_number: usize,
) -> Result<FieldValue, ValidationError> {
    // Header-repeat sentinels count as absent, not invalid.
    if raw.is_empty() || field.sentinels.contains(&raw) {
        return Ok(FieldValue::Text(None));
    }
    if !is_valid_email(raw) {
        return Err(ValidationError::new(
            row_number,
            field.canonical,
            format!("Invalid email format: \"{}\"", raw),
        ));
    }
    Ok(FieldValue::Text(Some(raw.to_string())))
}

/// Permissive email shape: one '@' with non-empty sides, no whitespace,
/// and a '.' inside the domain with characters on both sides.
fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = value.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let domain = match parts.next() {
        Some(domain) => domain,
        None => return false,
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// True iff the token is one of {true, yes, 1, y} after lower-casing.
/// Any other token (including garbage) is false by design.
pub fn parse_boolean(raw: &str) -> bool {
    matches!(raw.to_lowercase().trim(), "true" | "yes" | "1" | "y")
}

fn required_decimal(
    raw: &str,
    field: &FieldSchema,
    min: f64,
    row_number: usize,
) -> Result<FieldValue, ValidationError> {
    // Sentinel literals are required-field errors, not format errors.
    if raw.is_empty() || field.sentinels.contains(&raw) {
        return Err(ValidationError::new(
            row_number,
            field.canonical,
            format!("{} is required", field.label),
        ));
    }

    match parse_decimal(raw) {
        Some(value) if value >= min => Ok(FieldValue::Number(value)),
        _ => Err(ValidationError::new(
            row_number,
            field.canonical,
            format!(
                "Valid {} is required (must be a number >= {}). Received: \"{}\"",
                field.label.to_lowercase(),
                min,
                raw
            ),
        )),
    }
}

fn optional_decimal(
    raw: &str,
    field: &FieldSchema,
    min: f64,
    max: f64,
    default: f64,
    row_number: usize,
) -> Result<FieldValue, ValidationError> {
    if raw.is_empty() {
        return Ok(FieldValue::Number(default));
    }
    match parse_decimal(raw) {
        Some(value) => {
            if value < min || value > max {
                return Err(ValidationError::new(
                    row_number,
                    field.canonical,
                    format!("{} must be between {} and {}", field.label, min, max),
                ));
            }
            Ok(FieldValue::Number(value))
        }
        // Unparseable values silently fall back to the default. This is
        // deliberately lenient where the required-decimal rule is strict.
        None => Ok(FieldValue::Number(default)),
    }
}

fn text_with_default(
    raw: &str,
    field: &FieldSchema,
    default: &'static str,
    row_number: usize,
) -> Result<FieldValue, ValidationError> {
    let value = if raw.is_empty() { default } else { raw };
    // Only reachable when the default itself is overridden to empty.
    if value.is_empty() {
        return Err(ValidationError::new(
            row_number,
            field.canonical,
            format!("{} cannot be empty", field.label),
        ));
    }
    Ok(FieldValue::Text(Some(value.to_string())))
}

/// Locale-agnostic ASCII decimal parse: strip everything except digits,
/// '.' and '-', then parse ("$99.99" -> 99.99). No thousands separators.
pub fn parse_decimal(raw: &str) -> Option<f64> {
    let stripped: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    stripped.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::importer::field_schema::FieldSchema;

    const NAME: FieldSchema = FieldSchema::new("name", "Name", FieldKind::RequiredText, &[]);
    const EMAIL: FieldSchema = FieldSchema::new(
        "email",
        "Email",
        FieldKind::Email,
        &["Email", "Email Address"],
    );
    const PRICE: FieldSchema = FieldSchema::new(
        "price",
        "Price",
        FieldKind::RequiredDecimal { min: 0.0 },
        &["Price"],
    );
    const TAX_RATE: FieldSchema = FieldSchema::new(
        "taxRate",
        "Tax rate",
        FieldKind::OptionalDecimal {
            min: 0.0,
            max: 100.0,
            default: 0.0,
        },
        &[],
    );
    const UNIT: FieldSchema = FieldSchema::new(
        "unit",
        "Unit",
        FieldKind::TextWithDefault { default: "piece" },
        &[],
    );

    fn row(field: &str, value: &str) -> HashMap<String, String> {
        let mut decoded = HashMap::new();
        decoded.insert(field.to_string(), value.to_string());
        decoded
    }

    #[test]
    fn test_required_text_empty_errors() {
        let err = validate_field(&row("name", "  "), &NAME, 2).unwrap_err();
        assert_eq!(err.message, "Name is required");
        assert_eq!(err.field, "name");
        assert_eq!(err.row, 2);
    }

    #[test]
    fn test_required_text_trims() {
        let value = validate_field(&row("name", " Jane Doe "), &NAME, 2).unwrap();
        assert_eq!(value, FieldValue::Text(Some("Jane Doe".to_string())));
    }

    #[test]
    fn test_email_valid_formats() {
        for candidate in ["jane@x.com", "a.b@sub.domain.org", "x+tag@y.co"] {
            let value = validate_field(&row("email", candidate), &EMAIL, 2).unwrap();
            assert_eq!(value, FieldValue::Text(Some(candidate.to_string())));
        }
    }

    #[test]
    fn test_email_invalid_formats() {
        for candidate in ["not-an-email", "two@@x.com", "a b@x.com", "a@x", "a@.com"] {
            let err = validate_field(&row("email", candidate), &EMAIL, 4).unwrap_err();
            assert_eq!(
                err.message,
                format!("Invalid email format: \"{}\"", candidate)
            );
        }
    }

    #[test]
    fn test_email_sentinel_and_empty_are_absent() {
        for candidate in ["", "Email", "Email Address"] {
            let value = validate_field(&row("email", candidate), &EMAIL, 2).unwrap();
            assert_eq!(value, FieldValue::Text(None));
        }
    }

    #[test]
    fn test_boolean_coercion_table() {
        for truthy in ["true", "Yes", "1", "y", " TRUE "] {
            assert!(parse_boolean(truthy.trim()), "{truthy} should be true");
        }
        for falsy in ["false", "", "no", "maybe", "0", "2"] {
            assert!(!parse_boolean(falsy), "{falsy} should be false");
        }
    }

    #[test]
    fn test_price_currency_symbol_stripped() {
        let value = validate_field(&row("price", "$99.99"), &PRICE, 2).unwrap();
        assert_eq!(value, FieldValue::Number(99.99));
    }

    #[test]
    fn test_price_negative_errors() {
        let err = validate_field(&row("price", "$-5.00"), &PRICE, 3).unwrap_err();
        assert_eq!(
            err.message,
            "Valid price is required (must be a number >= 0). Received: \"$-5.00\""
        );
    }

    #[test]
    fn test_price_unparseable_errors() {
        let err = validate_field(&row("price", "abc"), &PRICE, 3).unwrap_err();
        assert!(err.message.starts_with("Valid price is required"));
    }

    #[test]
    fn test_price_missing_is_required_error() {
        for candidate in ["", "Price"] {
            let err = validate_field(&row("price", candidate), &PRICE, 5).unwrap_err();
            assert_eq!(err.message, "Price is required");
        }
    }

    #[test]
    fn test_tax_rate_out_of_range_errors() {
        let err = validate_field(&row("taxRate", "150"), &TAX_RATE, 2).unwrap_err();
        assert_eq!(err.message, "Tax rate must be between 0 and 100");
    }

    #[test]
    fn test_tax_rate_unparseable_defaults_silently() {
        // Leniency asymmetry vs price: no error, default 0.
        let value = validate_field(&row("taxRate", "abc"), &TAX_RATE, 2).unwrap();
        assert_eq!(value, FieldValue::Number(0.0));
    }

    #[test]
    fn test_tax_rate_empty_defaults() {
        let value = validate_field(&row("taxRate", ""), &TAX_RATE, 2).unwrap();
        assert_eq!(value, FieldValue::Number(0.0));
    }

    #[test]
    fn test_unit_defaults_to_piece() {
        let value = validate_field(&row("unit", ""), &UNIT, 2).unwrap();
        assert_eq!(value, FieldValue::Text(Some("piece".to_string())));
    }

    #[test]
    fn test_unit_override_kept() {
        let value = validate_field(&row("unit", "box"), &UNIT, 2).unwrap();
        assert_eq!(value, FieldValue::Text(Some("box".to_string())));
    }

    #[test]
    fn test_unit_empty_default_errors() {
        let empty_default =
            FieldSchema::new("unit", "Unit", FieldKind::TextWithDefault { default: "" }, &[]);
        let err = validate_field(&row("unit", ""), &empty_default, 2).unwrap_err();
        assert_eq!(err.message, "Unit cannot be empty");
    }

    #[test]
    fn test_parse_decimal_edge_cases() {
        assert_eq!(parse_decimal("10.00"), Some(10.0));
        assert_eq!(parse_decimal("USD 12.50"), Some(12.5));
        assert_eq!(parse_decimal("-3"), Some(-3.0));
        assert_eq!(parse_decimal("abc"), None);
        assert_eq!(parse_decimal(""), None);
    }

    #[test]
    fn test_multi_dot_numbers_rejected_not_truncated() {
        // full-string parse: "10.5.3" is not a number, never 10.5
        assert_eq!(parse_decimal("10.5.3"), None);

        let err = validate_field(&row("price", "10.5.3"), &PRICE, 2).unwrap_err();
        assert!(err.message.starts_with("Valid price is required"));

        // the lenient optional decimal takes its default instead
        let value = validate_field(&row("taxRate", "10.5.3"), &TAX_RATE, 2).unwrap();
        assert_eq!(value, FieldValue::Number(0.0));
    }
}
