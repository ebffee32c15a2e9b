// ============================================================
// TABULAR DATA TYPES
// ============================================================
// In-memory representation of a parsed statement spreadsheet.
// No I/O, no async; parsing lives in the infrastructure layer.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// Grouped-thousands form ("1,234,567.89") or a plain run of digits.
// Plain f64 syntax is tried before this ever runs.
static GROUPED_NUMBER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?\d{1,3}(,\d{3})*(\.\d+)?$|^-?\d+(\.\d+)?$").unwrap());

/// A single cell value. Numeric cells are coerced at parse time so the
/// rest of the pipeline never re-inspects raw strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Number(f64),
    Text(String),
    Empty,
}

impl Cell {
    /// Coerce a raw string into a cell. Blank values become `Empty`,
    /// anything that reads as a number (including financial forms like
    /// "$1,234" or "(2,500.00)") becomes `Number`, the rest stays text.
    pub fn parse(raw: &str) -> Cell {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Cell::Empty;
        }
        match parse_financial_number(trimmed) {
            Some(value) => Cell::Number(value),
            None => Cell::Text(trimmed.to_string()),
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(value) => Some(*value),
            _ => None,
        }
    }
}

/// Parse a number the way finance spreadsheets write them: optional
/// leading currency symbol, thousands separators, and accountant-style
/// parenthesized negatives. Returns `None` for anything else, including
/// non-finite values, which must never reach the serialized output.
pub fn parse_financial_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(value) = trimmed.parse::<f64>() {
        return value.is_finite().then_some(value);
    }

    let (body, negative) = match trimmed
        .strip_prefix('(')
        .and_then(|inner| inner.strip_suffix(')'))
    {
        Some(inner) => (inner.trim(), true),
        None => (trimmed, false),
    };

    let body = body
        .strip_prefix(['$', '€', '£'])
        .map(str::trim_start)
        .unwrap_or(body);

    if !GROUPED_NUMBER_PATTERN.is_match(body) {
        return None;
    }

    let cleaned: String = body.chars().filter(|c| *c != ',').collect();
    cleaned
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .map(|value| if negative { -value } else { value })
}

/// Descriptive statistics for one numeric column, matching the usual
/// `describe` layout: count, mean, sample std, min, quartiles, max.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnStats {
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (n-1); absent for a single observation.
    pub std: Option<f64>,
    pub min: f64,
    #[serde(rename = "25%")]
    pub q25: f64,
    #[serde(rename = "50%")]
    pub median: f64,
    #[serde(rename = "75%")]
    pub q75: f64,
    pub max: f64,
}

impl ColumnStats {
    /// Compute stats over the observed (non-empty) values of a column.
    /// Returns `None` when there is nothing to describe.
    pub fn describe(values: &[f64]) -> Option<ColumnStats> {
        if values.is_empty() {
            return None;
        }

        let count = values.len();
        let mean = values.iter().sum::<f64>() / count as f64;
        let std = if count > 1 {
            let variance = values
                .iter()
                .map(|value| (value - mean).powi(2))
                .sum::<f64>()
                / (count - 1) as f64;
            Some(variance.sqrt())
        } else {
            None
        };

        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        Some(ColumnStats {
            count,
            mean,
            std,
            min: sorted[0],
            q25: percentile(&sorted, 0.25),
            median: percentile(&sorted, 0.5),
            q75: percentile(&sorted, 0.75),
            max: sorted[count - 1],
        })
    }
}

/// Percentile with linear interpolation between closest ranks.
fn percentile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

/// Ordered rows over named columns. Column names are unique after
/// trimming: blank headers are replaced positionally and duplicates are
/// disambiguated with a numeric suffix, the way spreadsheet tools do.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataTable {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl DataTable {
    /// Build a table from raw headers and rows. Rows are padded or
    /// truncated to the header width so every row has the same shape.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        let columns = normalize_headers(headers);
        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, Cell::Empty);
                row
            })
            .collect();

        Self { columns, rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// First `n` rows (or fewer when the table is smaller).
    pub fn head(&self, n: usize) -> &[Vec<Cell>] {
        &self.rows[..self.rows.len().min(n)]
    }

    /// Indices of numeric columns: at least one number and no text.
    /// Empty cells are tolerated, mirroring how dataframe libraries
    /// treat missing values inside a numeric column.
    pub fn numeric_columns(&self) -> Vec<usize> {
        (0..self.columns.len())
            .filter(|&idx| {
                let mut has_number = false;
                for row in &self.rows {
                    match &row[idx] {
                        Cell::Number(_) => has_number = true,
                        Cell::Text(_) => return false,
                        Cell::Empty => {}
                    }
                }
                has_number
            })
            .collect()
    }

    /// Observed numeric values of a column, skipping empty cells.
    pub fn column_values(&self, idx: usize) -> Vec<f64> {
        self.rows
            .iter()
            .filter_map(|row| row.get(idx).and_then(Cell::as_number))
            .collect()
    }

    /// One point per row for a column; empty cells become gaps.
    pub fn column_points(&self, idx: usize) -> Vec<Option<f64>> {
        self.rows
            .iter()
            .map(|row| row.get(idx).and_then(Cell::as_number))
            .collect()
    }
}

fn normalize_headers(raw: Vec<String>) -> Vec<String> {
    let mut used = HashSet::new();
    let mut columns = Vec::with_capacity(raw.len());

    for (idx, header) in raw.into_iter().enumerate() {
        let trimmed = header.trim();
        let base = if trimmed.is_empty() {
            format!("column_{}", idx + 1)
        } else {
            trimmed.to_string()
        };

        let mut name = base.clone();
        let mut suffix = 2;
        while !used.insert(name.clone()) {
            name = format!("{}_{}", base, suffix);
            suffix += 1;
        }
        columns.push(name);
    }

    columns
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_from_strings(headers: &[&str], rows: &[&[&str]]) -> DataTable {
        DataTable::new(
            headers.iter().map(|h| h.to_string()).collect(),
            rows.iter()
                .map(|row| row.iter().map(|value| Cell::parse(value)).collect())
                .collect(),
        )
    }

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(Cell::parse("42"), Cell::Number(42.0));
        assert_eq!(Cell::parse("-3.5"), Cell::Number(-3.5));
        assert_eq!(Cell::parse("  7 "), Cell::Number(7.0));
    }

    #[test]
    fn test_parse_financial_forms() {
        assert_eq!(parse_financial_number("1,234"), Some(1234.0));
        assert_eq!(parse_financial_number("$1,234.56"), Some(1234.56));
        assert_eq!(parse_financial_number("€ 2,000"), Some(2000.0));
        assert_eq!(parse_financial_number("£500"), Some(500.0));
        assert_eq!(parse_financial_number("(2,500.00)"), Some(-2500.0));
        assert_eq!(parse_financial_number("($1,000)"), Some(-1000.0));
        assert_eq!(parse_financial_number("$1234567"), Some(1234567.0));
    }

    #[test]
    fn test_parse_rejects_non_numbers() {
        assert_eq!(parse_financial_number("Total Assets"), None);
        assert_eq!(parse_financial_number("12,34"), None);
        assert_eq!(parse_financial_number("(123"), None);
        assert_eq!(parse_financial_number("1.2.3"), None);
        assert_eq!(parse_financial_number(""), None);
    }

    #[test]
    fn test_parse_rejects_non_finite() {
        // "NaN" and "inf" satisfy f64 syntax but must never become cells,
        // since they cannot be serialized to JSON.
        assert_eq!(parse_financial_number("NaN"), None);
        assert_eq!(parse_financial_number("inf"), None);
        assert_eq!(Cell::parse("NaN"), Cell::Text("NaN".to_string()));
    }

    #[test]
    fn test_blank_cell_is_empty() {
        assert_eq!(Cell::parse(""), Cell::Empty);
        assert_eq!(Cell::parse("   "), Cell::Empty);
    }

    #[test]
    fn test_header_trimming_and_blanks() {
        let table = table_from_strings(&["  Asset ", "", "Value"], &[&["Cash", "x", "100"]]);
        assert_eq!(table.columns(), &["Asset", "column_2", "Value"]);
    }

    #[test]
    fn test_duplicate_headers_get_suffixes() {
        let table = table_from_strings(
            &["Value", "Value", "Value_2"],
            &[&["1", "2", "3"]],
        );
        assert_eq!(table.columns(), &["Value", "Value_2", "Value_2_2"]);
    }

    #[test]
    fn test_rows_padded_to_header_width() {
        let table = table_from_strings(&["a", "b", "c"], &[&["1"], &["1", "2", "3", "4"]]);
        assert_eq!(table.column_count(), 3);
        assert!(table.rows().iter().all(|row| row.len() == 3));
        assert_eq!(table.rows()[0][1], Cell::Empty);
    }

    #[test]
    fn test_numeric_column_detection() {
        let table = table_from_strings(
            &["Item", "Amount", "Note", "Sparse"],
            &[
                &["Cash", "100", "ok", ""],
                &["Debt", "50", "2 loans", "7"],
                &["Equity", "50", "", ""],
            ],
        );
        // "Note" mixes a number-looking value with text and is excluded;
        // "Sparse" is numeric despite the empty cells.
        assert_eq!(table.numeric_columns(), vec![1, 3]);
        assert_eq!(table.column_values(3), vec![7.0]);
        assert_eq!(table.column_points(3), vec![None, Some(7.0), None]);
    }

    #[test]
    fn test_describe_matches_known_values() {
        let stats = ColumnStats::describe(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(stats.count, 4);
        assert!((stats.mean - 2.5).abs() < 1e-9);
        // Sample std of 1..4 is sqrt(5/3).
        assert!((stats.std.unwrap() - (5.0f64 / 3.0).sqrt()).abs() < 1e-9);
        assert_eq!(stats.min, 1.0);
        assert!((stats.q25 - 1.75).abs() < 1e-9);
        assert!((stats.median - 2.5).abs() < 1e-9);
        assert!((stats.q75 - 3.25).abs() < 1e-9);
        assert_eq!(stats.max, 4.0);
    }

    #[test]
    fn test_describe_single_value_has_no_std() {
        let stats = ColumnStats::describe(&[5.0]).unwrap();
        assert_eq!(stats.count, 1);
        assert_eq!(stats.std, None);
        assert_eq!(stats.q25, 5.0);
        assert_eq!(stats.max, 5.0);
    }

    #[test]
    fn test_describe_empty_is_none() {
        assert!(ColumnStats::describe(&[]).is_none());
    }

    #[test]
    fn test_cell_serializes_untagged() {
        assert_eq!(
            serde_json::to_string(&Cell::Number(1.5)).unwrap(),
            "1.5"
        );
        assert_eq!(
            serde_json::to_string(&Cell::Text("Cash".to_string())).unwrap(),
            "\"Cash\""
        );
        assert_eq!(serde_json::to_string(&Cell::Empty).unwrap(), "null");
    }
}
