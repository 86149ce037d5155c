// ==========================================
// Invoicing Platform - Customer Import Schema
// ==========================================
// Alias table and field rules for customer sheets. The alias table
// must tolerate common human header variants ("Tax ID" / "VAT" / "EIN").
// ==========================================

use crate::domain::customer::NewCustomer;
use crate::domain::types::EntityKind;
use crate::importer::field_schema::{CoercedRow, FieldKind, FieldSchema};
use crate::importer::schema::EntitySchema;

// Validation order matters: name first, then email; the remaining
// fields cannot fail.
static CUSTOMER_FIELDS: [FieldSchema; 7] = [
    FieldSchema::new("name", "Name", FieldKind::RequiredText, &[]),
    FieldSchema::new(
        "email",
        "Email",
        FieldKind::Email,
        &["Email", "Email Address"],
    ),
    FieldSchema::new("taxExempt", "Tax exempt", FieldKind::Boolean, &[]),
    FieldSchema::new("phone", "Phone", FieldKind::OptionalText, &[]),
    FieldSchema::new("address", "Address", FieldKind::OptionalText, &[]),
    FieldSchema::new(
        "taxExemptionReason",
        "Tax exemption reason",
        FieldKind::OptionalText,
        &[],
    ),
    FieldSchema::new("taxId", "Tax ID", FieldKind::OptionalText, &[]),
];

pub struct CustomerSchema;

impl EntitySchema for CustomerSchema {
    type Record = NewCustomer;

    const KIND: EntityKind = EntityKind::Customers;

    fn canonical_field(normalized_header: &str) -> Option<&'static str> {
        match normalized_header {
            "customer name" | "name" | "customer" => Some("name"),
            "email" | "email address" => Some("email"),
            "phone" | "phone number" | "tel" => Some("phone"),
            "address" => Some("address"),
            "tax exempt" | "taxexempt" => Some("taxExempt"),
            "tax exemption reason" | "exemption reason" => Some("taxExemptionReason"),
            "tax id" | "taxid" | "vat" | "ein" => Some("taxId"),
            _ => None,
        }
    }

    fn name_sentinels() -> &'static [&'static str] {
        &["Customer Name", "Name"]
    }

    fn fields() -> &'static [FieldSchema] {
        &CUSTOMER_FIELDS
    }

    fn build_record(mut coerced: CoercedRow) -> NewCustomer {
        NewCustomer {
            name: coerced.take_required_text("name"),
            email: coerced.take_text("email"),
            phone: coerced.take_text("phone"),
            address: coerced.take_text("address"),
            tax_exempt: coerced.take_bool("taxExempt"),
            tax_exemption_reason: coerced.take_text("taxExemptionReason"),
            tax_id: coerced.take_text("taxId"),
        }
    }
}
