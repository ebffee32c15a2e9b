// Response model for one analysis pass. The service emits declarative
// chart payloads; rendering them is the page's job, so the plotting
// backend stays swappable.

use crate::domain::statement::StatementKind;
use crate::domain::table::{Cell, ColumnStats, DataTable};
use serde::{Deserialize, Serialize};

/// The parsed table, serialized for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableView {
    pub columns: Vec<String>,
    pub row_count: usize,
    pub column_count: usize,
    pub rows: Vec<Vec<Cell>>,
}

impl TableView {
    pub fn from_table(table: &DataTable) -> Self {
        Self {
            columns: table.columns().to_vec(),
            row_count: table.row_count(),
            column_count: table.column_count(),
            rows: table.rows().to_vec(),
        }
    }
}

/// One line-chart series, indexed by row. Gaps are `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartSeries {
    pub name: String,
    pub points: Vec<Option<f64>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineChart {
    pub title: String,
    pub series: Vec<ChartSeries>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BarChart {
    pub title: String,
    pub column: String,
    pub values: Vec<Option<f64>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsRow {
    pub column: String,
    pub stats: ColumnStats,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartSet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<LineChart>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bar: Option<BarChart>,
    pub stats: Vec<StatsRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Per-statement block of the report. A slot that failed to load keeps
/// its identity and carries the error message instead of results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatementSection {
    pub kind: StatementKind,
    pub display_name: String,
    pub file_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<TableView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charts: Option<ChartSet>,
}

/// Aggregate block shown when more than one statement was analyzed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutiveSummary {
    pub documents_analyzed: usize,
    /// Sum of rows x columns across the analyzed statements.
    pub total_data_points: usize,
    pub completion: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BannerStatus {
    Success,
    Failure,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Banner {
    pub status: BannerStatus,
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub report_id: String,
    pub generated_at: chrono::DateTime<chrono::Utc>,
    pub sections: Vec<StatementSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub executive_summary: Option<ExecutiveSummary>,
    pub banner: Banner,
}
