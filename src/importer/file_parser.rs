// ==========================================
// Invoicing Platform - File Decoder
// ==========================================
// Turns an uploaded byte buffer into ordered raw rows
// (header -> cell text). Supports CSV and Excel (.xlsx/.xls).
// Only the first sheet of a workbook is read; fully blank rows are
// dropped here, before row numbering.
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use calamine::{open_workbook_auto_from_rs, Reader};
use csv::ReaderBuilder;
use std::collections::HashMap;
use std::io::Cursor;

/// One physical spreadsheet row, keyed by its raw header text.
pub type RawRow = HashMap<String, String>;

// ==========================================
// FileParser Trait
// ==========================================
pub trait FileParser: Send + Sync {
    /// Decode a byte buffer into ordered raw rows.
    fn parse_bytes(&self, bytes: &[u8]) -> ImportResult<Vec<RawRow>>;
}

// ==========================================
// CSV decoder
// ==========================================
pub struct CsvParser;

impl FileParser for CsvParser {
    fn parse_bytes(&self, bytes: &[u8]) -> ImportResult<Vec<RawRow>> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // tolerate ragged row lengths
            .from_reader(bytes);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut records = Vec::new();
        for result in reader.records() {
            let record = result?;
            let mut row_map = RawRow::new();

            for (col_idx, value) in record.iter().enumerate() {
                if let Some(header) = headers.get(col_idx) {
                    row_map.insert(header.clone(), value.trim().to_string());
                }
            }

            // drop fully blank rows
            if row_map.values().all(|v| v.is_empty()) {
                continue;
            }

            records.push(row_map);
        }

        Ok(records)
    }
}

// ==========================================
// Excel decoder
// ==========================================
pub struct ExcelParser;

impl FileParser for ExcelParser {
    fn parse_bytes(&self, bytes: &[u8]) -> ImportResult<Vec<RawRow>> {
        // The workbook format is detected from the container magic, not
        // the extension: ZIP archives open as .xlsx, OLE/BIFF binaries
        // as legacy .xls.
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;

        // first sheet only
        let sheet_names = workbook.sheet_names();
        let sheet_name = match sheet_names.first() {
            Some(name) => name.clone(),
            None => {
                return Err(ImportError::UndecodableFile(
                    "workbook has no sheets".to_string(),
                ))
            }
        };

        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| ImportError::UndecodableFile(e.to_string()))?;

        let mut rows = range.rows();
        let header_row = match rows.next() {
            Some(row) => row,
            // a sheet without even a header row has zero data rows
            None => return Ok(Vec::new()),
        };

        let headers: Vec<String> = header_row
            .iter()
            .map(|cell| cell.to_string().trim().to_string())
            .collect();

        let mut records = Vec::new();
        for data_row in rows {
            let mut row_map = RawRow::new();

            for (col_idx, cell) in data_row.iter().enumerate() {
                if let Some(header) = headers.get(col_idx) {
                    row_map.insert(header.clone(), cell.to_string().trim().to_string());
                }
            }

            if row_map.values().all(|v| v.is_empty()) {
                continue;
            }

            records.push(row_map);
        }

        Ok(records)
    }
}

// ==========================================
// Universal decoder - picks by file extension
// ==========================================
pub struct UniversalFileParser;

impl UniversalFileParser {
    /// Decode `bytes` according to the extension of `file_name`.
    ///
    /// # Errors
    /// - InvalidFileType for anything but .csv/.xlsx/.xls
    /// - UndecodableFile when the buffer does not match its extension
    pub fn parse(&self, file_name: &str, bytes: &[u8]) -> ImportResult<Vec<RawRow>> {
        let ext = file_name
            .rsplit('.')
            .next()
            .unwrap_or("")
            .trim()
            .to_lowercase();

        match ext.as_str() {
            "csv" => CsvParser.parse_bytes(bytes),
            "xlsx" | "xls" => ExcelParser.parse_bytes(bytes),
            _ => Err(ImportError::InvalidFileType { extension: ext }),
        }
    }
}
