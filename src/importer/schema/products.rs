// ==========================================
// Invoicing Platform - Product Import Schema
// ==========================================

use crate::domain::product::NewProduct;
use crate::domain::types::EntityKind;
use crate::importer::field_schema::{CoercedRow, FieldKind, FieldSchema};
use crate::importer::schema::EntitySchema;

static PRODUCT_FIELDS: [FieldSchema; 6] = [
    FieldSchema::new("name", "Name", FieldKind::RequiredText, &[]),
    FieldSchema::new(
        "price",
        "Price",
        FieldKind::RequiredDecimal { min: 0.0 },
        &["Price"],
    ),
    FieldSchema::new(
        "taxRate",
        "Tax rate",
        FieldKind::OptionalDecimal {
            min: 0.0,
            max: 100.0,
            default: 0.0,
        },
        &[],
    ),
    FieldSchema::new(
        "unit",
        "Unit",
        FieldKind::TextWithDefault { default: "piece" },
        &[],
    ),
    FieldSchema::new("description", "Description", FieldKind::OptionalText, &[]),
    FieldSchema::new("imageUrl", "Image URL", FieldKind::OptionalText, &[]),
];

pub struct ProductSchema;

impl EntitySchema for ProductSchema {
    type Record = NewProduct;

    const KIND: EntityKind = EntityKind::Products;

    fn canonical_field(normalized_header: &str) -> Option<&'static str> {
        match normalized_header {
            "product name" | "name" | "product" => Some("name"),
            "description" | "desc" => Some("description"),
            "price" | "cost" => Some("price"),
            "tax rate (%)" | "tax rate" | "tax" => Some("taxRate"),
            "unit" => Some("unit"),
            "image url" | "image" | "imageurl" => Some("imageUrl"),
            _ => None,
        }
    }

    fn name_sentinels() -> &'static [&'static str] {
        &["Product Name", "Name"]
    }

    fn fields() -> &'static [FieldSchema] {
        &PRODUCT_FIELDS
    }

    fn build_record(mut coerced: CoercedRow) -> NewProduct {
        NewProduct {
            name: coerced.take_required_text("name"),
            description: coerced.take_text("description"),
            price: coerced.take_number("price"),
            tax_rate: coerced.take_number("taxRate"),
            unit: coerced.take_required_text("unit"),
            image_url: coerced.take_text("imageUrl"),
        }
    }
}
