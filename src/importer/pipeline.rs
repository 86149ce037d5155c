// ==========================================
// Invoicing Platform - Import Orchestrator
// ==========================================
// Drives decode -> classify -> validate over every raw row, in row
// order. Each row contributes to exactly one of `errors` (first
// failing field) or `valid_records`; processing never stops early, so
// the user sees every row's problem in one pass. Commit is the
// caller's decision - the pipeline always returns committed = false.
// ==========================================

use crate::domain::import::ImportOutcome;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::file_parser::RawRow;
use crate::importer::header_map;
use crate::importer::row_classifier::{self, RowDisposition};
use crate::importer::schema::{self, EntitySchema};
use std::marker::PhantomData;
use tracing::debug;

// Data rows start at spreadsheet row 2 (row 1 is the header).
const FIRST_DATA_ROW: usize = 2;

pub struct ImportPipeline<S: EntitySchema> {
    _schema: PhantomData<S>,
}

impl<S: EntitySchema> Default for ImportPipeline<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: EntitySchema> ImportPipeline<S> {
    pub fn new() -> Self {
        Self {
            _schema: PhantomData,
        }
    }

    /// Validate a full parsed sheet.
    ///
    /// # Returns
    /// - Ok(ImportOutcome): errors and valid records in ascending row
    ///   order, committed = false
    /// - Err(ImportError::EmptyFile): zero data rows, nothing processed
    pub fn run(&self, raw_rows: &[RawRow]) -> ImportResult<ImportOutcome<S::Record>> {
        if raw_rows.is_empty() {
            return Err(ImportError::EmptyFile);
        }

        let mut errors = Vec::new();
        let mut valid_records = Vec::new();
        let mut skipped = 0usize;

        for (idx, raw) in raw_rows.iter().enumerate() {
            let row_number = idx + FIRST_DATA_ROW;

            let decoded = header_map::decode_row::<S>(raw);

            if row_classifier::classify(&decoded, S::name_sentinels()) == RowDisposition::Skip {
                skipped += 1;
                continue;
            }

            match schema::validate_row::<S>(&decoded, row_number) {
                Ok(record) => valid_records.push(record),
                Err(error) => errors.push(error),
            }
        }

        debug!(
            kind = %S::KIND,
            total = raw_rows.len(),
            valid = valid_records.len(),
            errors = errors.len(),
            skipped,
            "row validation finished"
        );

        Ok(ImportOutcome::new(errors, valid_records))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::importer::schema::{CustomerSchema, ProductSchema};

    fn raw_row(pairs: &[(&str, &str)]) -> RawRow {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_empty_sheet_is_structural_error() {
        let pipeline = ImportPipeline::<CustomerSchema>::new();
        let result = pipeline.run(&[]);
        assert!(matches!(result, Err(ImportError::EmptyFile)));
    }

    #[test]
    fn test_blank_and_header_rows_skipped_silently() {
        let pipeline = ImportPipeline::<CustomerSchema>::new();
        let rows = vec![
            raw_row(&[("Customer Name", "Jane Doe"), ("Email", "jane@x.com")]),
            raw_row(&[("Customer Name", ""), ("Email", "")]),
            raw_row(&[("Customer Name", "Customer Name"), ("Email", "Email")]),
        ];

        let outcome = pipeline.run(&rows).unwrap();
        assert!(outcome.errors.is_empty());
        assert_eq!(outcome.valid_records.len(), 1);
        assert_eq!(outcome.valid_records[0].name, "Jane Doe");
        assert!(!outcome.committed);
    }

    #[test]
    fn test_errors_keep_row_numbers_in_order() {
        let pipeline = ImportPipeline::<ProductSchema>::new();
        let rows = vec![
            raw_row(&[("Name", "A"), ("Price", "bad")]),   // row 2
            raw_row(&[("Name", "B"), ("Price", "1.00")]),  // row 3
            raw_row(&[("Name", "C"), ("Price", "-1")]),    // row 4
        ];

        let outcome = pipeline.run(&rows).unwrap();
        assert_eq!(outcome.valid_records.len(), 1);
        let error_rows: Vec<usize> = outcome.errors.iter().map(|e| e.row).collect();
        assert_eq!(error_rows, vec![2, 4]);
    }

    #[test]
    fn test_processing_continues_past_failures() {
        let pipeline = ImportPipeline::<ProductSchema>::new();
        let rows = vec![
            raw_row(&[("Name", "Widget"), ("Price", "10.00")]), // row 2 ok
            raw_row(&[("Name", "Gadget"), ("Price", "-3")]),    // row 3 error
            raw_row(&[("Name", "Sprocket"), ("Price", "2.50")]), // row 4 ok
        ];

        let outcome = pipeline.run(&rows).unwrap();
        assert_eq!(outcome.valid_records.len(), 2);
        assert_eq!(outcome.errors.len(), 1);
        assert_eq!(outcome.errors[0].row, 3);
        assert_eq!(outcome.errors[0].field, "price");
    }

    #[test]
    fn test_row_lands_in_exactly_one_bucket() {
        let pipeline = ImportPipeline::<CustomerSchema>::new();
        let rows = vec![
            raw_row(&[("Name", "Jane"), ("Email", "broken")]),
        ];
        let outcome = pipeline.run(&rows).unwrap();
        assert_eq!(outcome.errors.len(), 1);
        assert!(outcome.valid_records.is_empty());
    }
}
