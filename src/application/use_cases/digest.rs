use crate::domain::table::{Cell, ColumnStats, DataTable};
use serde::Serialize;
use std::collections::BTreeMap;

/// Rows included in the prompt sample. Keeps the prompt bounded no
/// matter how large the uploaded statement is.
const SAMPLE_ROW_LIMIT: usize = 10;

/// Compact description of a parsed table for prompting: shape, column
/// names, the leading rows, and per-column statistics.
#[derive(Debug, Serialize)]
pub struct TableDigest {
    pub shape: (usize, usize),
    pub columns: Vec<String>,
    pub sample_rows: Vec<Vec<Cell>>,
    pub summary_stats: BTreeMap<String, ColumnStats>,
}

impl TableDigest {
    pub fn from_table(table: &DataTable) -> Self {
        let summary_stats = table
            .numeric_columns()
            .into_iter()
            .filter_map(|idx| {
                ColumnStats::describe(&table.column_values(idx))
                    .map(|stats| (table.columns()[idx].clone(), stats))
            })
            .collect();

        Self {
            shape: (table.row_count(), table.column_count()),
            columns: table.columns().to_vec(),
            sample_rows: table.head(SAMPLE_ROW_LIMIT).to_vec(),
            summary_stats,
        }
    }

    /// Digest as pretty-printed JSON, the form embedded into prompts.
    pub fn to_prompt_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered_table(rows: usize) -> DataTable {
        DataTable::new(
            vec!["label".to_string(), "amount".to_string()],
            (1..=rows)
                .map(|n| {
                    vec![
                        Cell::Text(format!("row_{}", n)),
                        Cell::Number(n as f64 * 100.0),
                    ]
                })
                .collect(),
        )
    }

    #[test]
    fn test_sample_is_capped_at_ten_rows() {
        let digest = TableDigest::from_table(&numbered_table(12));
        assert_eq!(digest.shape, (12, 2));
        assert_eq!(digest.sample_rows.len(), 10);

        let json = digest.to_prompt_json();
        assert!(json.contains("row_1"));
        assert!(json.contains("row_10"));
        assert!(!json.contains("row_11"));
        assert!(!json.contains("row_12"));
    }

    #[test]
    fn test_small_table_is_sampled_whole() {
        let digest = TableDigest::from_table(&numbered_table(3));
        assert_eq!(digest.sample_rows.len(), 3);
    }

    #[test]
    fn test_stats_cover_numeric_columns_only() {
        let digest = TableDigest::from_table(&numbered_table(4));
        assert_eq!(digest.summary_stats.len(), 1);
        let stats = digest.summary_stats.get("amount").expect("amount stats");
        assert_eq!(stats.count, 4);
        assert_eq!(stats.min, 100.0);
        assert_eq!(stats.max, 400.0);
    }

    #[test]
    fn test_prompt_json_carries_column_names() {
        let json = TableDigest::from_table(&numbered_table(2)).to_prompt_json();
        assert!(json.contains("\"label\""));
        assert!(json.contains("\"amount\""));
        assert!(json.contains("\"shape\""));
    }
}
