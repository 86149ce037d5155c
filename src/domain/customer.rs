// ==========================================
// Invoicing Platform - Customer Domain Model
// ==========================================
// Written by the import layer; the invoicing engine reads it back
// through its own repositories.
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// NewCustomer - validated import record
// ==========================================
// Created only for spreadsheet rows that passed every field rule.
// Lifecycle: one import invocation, then persisted (or dropped).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCustomer {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub tax_exempt: bool,
    pub tax_exemption_reason: Option<String>,
    pub tax_id: Option<String>,
}
