use crate::domain::error::{AppError, Result};
use crate::domain::table::{Cell, DataTable};
use calamine::{open_workbook_auto_from_rs, Data, Reader};
use std::io::Cursor;

/// Parse XLSX/XLS bytes: the workbook format is auto-detected, the first
/// worksheet is used and its first row supplies the headers.
pub fn parse_workbook(bytes: &[u8]) -> Result<DataTable> {
    let cursor = Cursor::new(bytes);
    let mut workbook = open_workbook_auto_from_rs(cursor)
        .map_err(|e| AppError::LoadError(format!("failed to open workbook: {}", e)))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| AppError::LoadError("workbook has no worksheets".to_string()))?
        .map_err(|e| AppError::LoadError(format!("failed to read worksheet: {}", e)))?;

    let mut sheet_rows = range.rows();
    let headers: Vec<String> = match sheet_rows.next() {
        Some(row) => row.iter().map(header_cell).collect(),
        None => return Ok(DataTable::new(Vec::new(), Vec::new())),
    };

    let rows: Vec<Vec<Cell>> = sheet_rows
        .map(|row| row.iter().map(convert_cell).collect())
        .collect();

    Ok(DataTable::new(headers, rows))
}

fn header_cell(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn convert_cell(cell: &Data) -> Cell {
    match cell {
        Data::Empty => Cell::Empty,
        Data::Int(value) => Cell::Number(*value as f64),
        Data::Float(value) if value.is_finite() => Cell::Number(*value),
        Data::Float(_) => Cell::Empty,
        Data::Bool(value) => Cell::Text(value.to_string()),
        // String cells go through the same coercion as CSV values so
        // "$1,234" behaves identically across formats.
        Data::String(text) => Cell::parse(text),
        // Dates and durations stay text: a serial number would otherwise
        // masquerade as a numeric column and skew the statistics.
        Data::DateTime(value) => Cell::Text(value.to_string()),
        Data::DateTimeIso(text) => Cell::Text(text.clone()),
        Data::DurationIso(text) => Cell::Text(text.clone()),
        // Cell errors (#DIV/0! and friends) are treated as missing.
        Data::Error(_) => Cell::Empty,
    }
}
