// ==========================================
// Invoicing Platform - Product Domain Model
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// NewProduct - validated import record
// ==========================================
// price is a non-negative decimal; tax_rate is a percentage in [0, 100];
// unit defaults to "piece" when the sheet leaves it blank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub tax_rate: f64,
    pub unit: String,
    pub image_url: Option<String>,
}
