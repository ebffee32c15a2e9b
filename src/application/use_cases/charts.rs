use crate::domain::report::{BarChart, ChartSeries, ChartSet, LineChart, StatsRow};
use crate::domain::table::{ColumnStats, DataTable};

/// Series cap for the trend chart.
const LINE_SERIES_LIMIT: usize = 5;
/// Leading rows included in the bar chart.
const BAR_ROW_LIMIT: usize = 10;

pub struct ChartsUseCase;

impl ChartsUseCase {
    pub fn new() -> Self {
        Self
    }

    /// Derive the chart payloads for one parsed statement. A table with
    /// no numeric columns yields no charts and a note saying so; a trend
    /// chart additionally requires at least two numeric columns.
    pub fn execute(&self, display_name: &str, table: &DataTable) -> ChartSet {
        let numeric = table.numeric_columns();

        if numeric.is_empty() {
            return ChartSet {
                line: None,
                bar: None,
                stats: Vec::new(),
                note: Some(format!(
                    "No numeric data found in {} for visualization.",
                    display_name
                )),
            };
        }

        let line = if numeric.len() >= 2 {
            Some(LineChart {
                title: format!("{} - Trend Analysis", display_name),
                series: numeric
                    .iter()
                    .take(LINE_SERIES_LIMIT)
                    .map(|&idx| ChartSeries {
                        name: table.columns()[idx].clone(),
                        points: table.column_points(idx),
                    })
                    .collect(),
            })
        } else {
            None
        };

        let bar_idx = numeric[0];
        let bar = Some(BarChart {
            title: format!("{} - Top 10 Values", display_name),
            column: table.columns()[bar_idx].clone(),
            values: table
                .head(BAR_ROW_LIMIT)
                .iter()
                .map(|row| row[bar_idx].as_number())
                .collect(),
        });

        let stats = numeric
            .iter()
            .filter_map(|&idx| {
                ColumnStats::describe(&table.column_values(idx)).map(|stats| StatsRow {
                    column: table.columns()[idx].clone(),
                    stats,
                })
            })
            .collect();

        ChartSet {
            line,
            bar,
            stats,
            note: None,
        }
    }
}
