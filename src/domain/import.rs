// ==========================================
// Invoicing Platform - Import Result Types
// ==========================================
// Purpose: row-addressable error reports and the all-or-nothing
// outcome contract consumed by the transport layer.
// ==========================================

use crate::domain::types::EntityKind;
use serde::{Deserialize, Serialize};

// ==========================================
// ValidationError - one row, one field, one message
// ==========================================
// A row stops accumulating further field errors once one is found
// (short-circuit per row, not per batch).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub row: usize,
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(row: usize, field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            row,
            field: field.into(),
            message: message.into(),
        }
    }
}

// ==========================================
// ImportOutcome - result of one validation pass
// ==========================================
// Invariant: committed == true implies errors.is_empty() and
// committed_count == valid_records.len(). The orchestrator always
// returns committed = false; the caller marks the commit.
#[derive(Debug, Clone)]
pub struct ImportOutcome<R> {
    pub errors: Vec<ValidationError>,
    pub valid_records: Vec<R>,
    pub committed: bool,
    pub committed_count: usize,
}

impl<R> ImportOutcome<R> {
    pub fn new(errors: Vec<ValidationError>, valid_records: Vec<R>) -> Self {
        Self {
            errors,
            valid_records,
            committed: false,
            committed_count: 0,
        }
    }

    /// Record a successful atomic commit of every valid record.
    ///
    /// Must only be called with an empty error list and with the count
    /// returned by the persistence layer.
    pub fn mark_committed(&mut self, count: usize) {
        debug_assert!(self.errors.is_empty());
        debug_assert_eq!(count, self.valid_records.len());
        self.committed = true;
        self.committed_count = count;
    }
}

// ==========================================
// ImportResponse - boundary payload
// ==========================================
// Serialized shape mirrors the transport JSON contract:
// success  -> { "success": true, "message": ..., "count": n }
// failure  -> { "error": "Validation errors found", "errors": [...],
//               "validCount": v, "errorCount": e }
// Structural and commit failures travel as ImportError instead.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ImportResponse {
    Success {
        success: bool,
        message: String,
        count: usize,
    },
    ValidationFailed {
        error: String,
        errors: Vec<ValidationError>,
        #[serde(rename = "validCount")]
        valid_count: usize,
        #[serde(rename = "errorCount")]
        error_count: usize,
    },
}

impl ImportResponse {
    pub fn success(kind: EntityKind, count: usize) -> Self {
        ImportResponse::Success {
            success: true,
            message: format!("Successfully imported {} {}(s)", count, kind.noun()),
            count,
        }
    }

    pub fn validation_failed(errors: Vec<ValidationError>, valid_count: usize) -> Self {
        let error_count = errors.len();
        ImportResponse::ValidationFailed {
            error: "Validation errors found".to_string(),
            errors,
            valid_count,
            error_count,
        }
    }

    /// Shape the boundary payload from a finished outcome: a committed
    /// outcome reports its committed count, anything else reports the
    /// accumulated validation errors.
    pub fn from_outcome<R>(kind: EntityKind, outcome: &ImportOutcome<R>) -> Self {
        if outcome.committed {
            Self::success(kind, outcome.committed_count)
        } else {
            Self::validation_failed(outcome.errors.clone(), outcome.valid_records.len())
        }
    }
}
