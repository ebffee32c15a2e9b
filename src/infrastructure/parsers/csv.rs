use crate::domain::error::{AppError, Result};
use crate::domain::table::{Cell, DataTable};
use csv::{ReaderBuilder, Trim};

/// Parse CSV bytes into a table. The first record supplies the headers;
/// the delimiter is detected from a sample of the content. Rows shorter
/// than the header pad with empty cells; rows wider than it are an error.
pub fn parse_csv(bytes: &[u8]) -> Result<DataTable> {
    let content = decode_text(bytes);
    let delimiter = detect_delimiter(&content);

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .trim(Trim::All)
        .flexible(true) // Uneven row lengths are handled below
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| AppError::LoadError(format!("failed to read CSV headers: {}", e)))?
        .iter()
        .map(|header| header.to_string())
        .collect();

    let mut rows = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let record = result.map_err(|e| {
            AppError::LoadError(format!("failed to parse CSV row {}: {}", index + 1, e))
        })?;

        if record.len() > headers.len() {
            return Err(AppError::LoadError(format!(
                "CSV row {} has {} fields, expected {}",
                index + 1,
                record.len(),
                headers.len()
            )));
        }

        let cells = (0..headers.len())
            .map(|idx| Cell::parse(record.get(idx).unwrap_or("")))
            .collect();
        rows.push(cells);
    }

    Ok(DataTable::new(headers, rows))
}

/// Decode upload bytes as UTF-8, falling back to Windows-1252 for
/// Excel-exported CSVs. A leading BOM is stripped so it cannot leak
/// into the first header.
fn decode_text(bytes: &[u8]) -> String {
    let content = match String::from_utf8(bytes.to_vec()) {
        Ok(text) => text,
        Err(err) => {
            let bytes = err.into_bytes();
            let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(&bytes);
            decoded.into_owned()
        }
    };

    match content.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_string(),
        None => content,
    }
}

/// Detect the delimiter (comma, semicolon, tab, pipe) by scoring each
/// candidate over a sample: frequency rewarded, inconsistency across
/// lines penalized.
fn detect_delimiter(content: &str) -> u8 {
    let candidates = [b',', b';', b'\t', b'|'];
    let sample_lines: Vec<_> = content.lines().take(10).collect();

    let mut best_delimiter = b',';
    let mut best_score = 0.0f32;

    for &delimiter in &candidates {
        if sample_lines.is_empty() {
            continue;
        }

        let field_counts: Vec<usize> = sample_lines
            .iter()
            .map(|line| line.bytes().filter(|&b| b == delimiter).count())
            .collect();

        let avg = field_counts.iter().sum::<usize>() as f32 / field_counts.len() as f32;
        let variance = field_counts
            .iter()
            .map(|&count| (count as f32 - avg).powi(2))
            .sum::<f32>()
            / field_counts.len() as f32;

        let score = avg / (1.0 + variance.sqrt());
        if score > best_score {
            best_score = score;
            best_delimiter = delimiter;
        }
    }

    best_delimiter
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_csv() {
        let table = parse_csv(b"Asset,Value\nCash,100\nDebt,50\nEquity,50\n").unwrap();
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.columns(), &["Asset", "Value"]);
        assert_eq!(table.rows()[0][0], Cell::Text("Cash".to_string()));
        assert_eq!(table.rows()[0][1], Cell::Number(100.0));
    }

    #[test]
    fn test_detect_delimiter() {
        assert_eq!(detect_delimiter("a,b,c\nd,e,f"), b',');
        assert_eq!(detect_delimiter("a;b;c\nd;e;f"), b';');
        assert_eq!(detect_delimiter("a\tb\tc\nd\te\tf"), b'\t');
        assert_eq!(detect_delimiter("a|b|c\nd|e|f"), b'|');
    }

    #[test]
    fn test_semicolon_csv_parses() {
        let table = parse_csv(b"Item;Amount\nRevenue;1200\nCosts;800\n").unwrap();
        assert_eq!(table.columns(), &["Item", "Amount"]);
        assert_eq!(table.rows()[1][1], Cell::Number(800.0));
    }

    #[test]
    fn test_empty_content_yields_empty_table() {
        let table = parse_csv(b"").unwrap();
        assert_eq!(table.row_count(), 0);
        assert_eq!(table.column_count(), 0);
    }

    #[test]
    fn test_header_only_yields_zero_rows() {
        let table = parse_csv(b"Asset,Value\n").unwrap();
        assert_eq!(table.row_count(), 0);
        assert_eq!(table.column_count(), 2);
    }

    #[test]
    fn test_short_rows_are_padded() {
        let table = parse_csv(b"a,b,c\n1,2\n").unwrap();
        assert_eq!(table.rows()[0][2], Cell::Empty);
    }

    #[test]
    fn test_overlong_rows_are_rejected() {
        let err = parse_csv(b"a,b\n1,2,99\n").unwrap_err();
        assert!(matches!(err, AppError::LoadError(_)));
        assert!(err.to_string().contains("row 1 has 3 fields, expected 2"));
    }

    #[test]
    fn test_windows_1252_fallback() {
        // "Trésorerie" with a Windows-1252 encoded é (0xE9).
        let bytes = b"Poste,Valeur\nTr\xE9sorerie,42\n";
        let table = parse_csv(bytes).unwrap();
        assert_eq!(table.rows()[0][0], Cell::Text("Trésorerie".to_string()));
    }

    #[test]
    fn test_bom_is_stripped_from_first_header() {
        let bytes = b"\xEF\xBB\xBFAsset,Value\nCash,1\n";
        let table = parse_csv(bytes).unwrap();
        assert_eq!(table.columns()[0], "Asset");
    }

    #[test]
    fn test_values_are_trimmed() {
        let table = parse_csv(b"Asset,Value\n  Cash  ,  100 \n").unwrap();
        assert_eq!(table.rows()[0][0], Cell::Text("Cash".to_string()));
        assert_eq!(table.rows()[0][1], Cell::Number(100.0));
    }
}
