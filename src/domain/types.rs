// ==========================================
// Invoicing Platform - Shared Domain Types
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// EntityKind - importable business entity
// ==========================================
// Each kind owns its header-alias table and field schema;
// adding a kind means adding a schema module, not a subclass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Customers,
    Products,
}

impl EntityKind {
    /// Singular noun used in user-facing messages ("customer(s)").
    pub fn noun(&self) -> &'static str {
        match self {
            EntityKind::Customers => "customer",
            EntityKind::Products => "product",
        }
    }

    /// Parse the kind declared alongside an upload ("customers" | "products").
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "customers" | "customer" => Some(EntityKind::Customers),
            "products" | "product" => Some(EntityKind::Products),
            _ => None,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Customers => write!(f, "customers"),
            EntityKind::Products => write!(f, "products"),
        }
    }
}
