// ==========================================
// Invoicing Platform - Import Error Types
// ==========================================
// Tooling: thiserror derive macros
// Taxonomy: structural errors stop the pipeline before any row runs;
// database errors surface an already-validated batch that storage
// rejected. Per-row validation problems are NOT errors here - they
// travel as ValidationError values inside the ImportOutcome.
// ==========================================

use thiserror::Error;

/// Import pipeline error type
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== Structural errors (pipeline never runs) =====
    #[error("Invalid file type. Please upload a CSV or Excel file.")]
    InvalidFileType { extension: String },

    #[error("Failed to parse file. Please ensure it is a valid CSV or Excel file.")]
    UndecodableFile(String),

    #[error("File is empty or contains no data")]
    EmptyFile,

    // ===== Commit / database errors (batch rolled back) =====
    #[error("Unique constraint violated: {0}")]
    UniqueConstraintViolation(String),

    #[error("Foreign key constraint violated: {0}")]
    ForeignKeyViolation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Database lock acquisition failed: {0}")]
    Lock(String),

    // ===== Generic =====
    #[error("Internal error: {0}")]
    Internal(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ImportError {
    /// True for errors reported before any per-row processing began.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            ImportError::InvalidFileType { .. }
                | ImportError::UndecodableFile(_)
                | ImportError::EmptyFile
        )
    }
}

impl From<rusqlite::Error> for ImportError {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::SqliteFailure(_, Some(msg)) => {
                if msg.contains("UNIQUE") {
                    ImportError::UniqueConstraintViolation(msg)
                } else if msg.contains("FOREIGN KEY") {
                    ImportError::ForeignKeyViolation(msg)
                } else {
                    ImportError::Database(msg)
                }
            }
            _ => ImportError::Database(err.to_string()),
        }
    }
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::UndecodableFile(err.to_string())
    }
}

impl From<calamine::Error> for ImportError {
    fn from(err: calamine::Error) -> Self {
        ImportError::UndecodableFile(err.to_string())
    }
}

/// Result type alias
pub type ImportResult<T> = Result<T, ImportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_classification() {
        assert!(ImportError::EmptyFile.is_structural());
        assert!(ImportError::InvalidFileType {
            extension: "pdf".to_string()
        }
        .is_structural());
        assert!(!ImportError::Database("busy".to_string()).is_structural());
    }

    #[test]
    fn test_display_uses_transport_wording() {
        let err = ImportError::InvalidFileType {
            extension: "pdf".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid file type. Please upload a CSV or Excel file."
        );
        assert_eq!(
            ImportError::EmptyFile.to_string(),
            "File is empty or contains no data"
        );
    }
}
