use crate::application::use_cases::charts::ChartsUseCase;
use crate::application::use_cases::insight::InsightUseCase;
use crate::application::use_cases::load_statement::LoadStatementUseCase;
use crate::domain::error::{AppError, Result};
use crate::domain::options::AnalysisOptions;
use crate::domain::report::{
    AnalysisReport, Banner, BannerStatus, ExecutiveSummary, StatementSection, TableView,
};
use crate::domain::statement::{Statement, StatementUpload};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

/// Runs the full pipeline over the supplied statement slots and
/// assembles the report. A slot that fails to load becomes an error
/// section; it never aborts the other slots.
pub struct AnalyzeUseCase {
    loader: LoadStatementUseCase,
    insight: InsightUseCase,
    charts: ChartsUseCase,
}

impl AnalyzeUseCase {
    pub fn new(
        loader: LoadStatementUseCase,
        insight: InsightUseCase,
        charts: ChartsUseCase,
    ) -> Self {
        Self {
            loader,
            insight,
            charts,
        }
    }

    pub async fn execute(
        &self,
        uploads: Vec<StatementUpload>,
        options: &AnalysisOptions,
    ) -> Result<AnalysisReport> {
        if uploads.is_empty() {
            return Err(AppError::ValidationError(
                "No statement files were supplied.".to_string(),
            ));
        }

        let report_id = Uuid::new_v4().to_string();
        info!(
            report_id = %report_id,
            slots = uploads.len(),
            include_charts = options.include_charts,
            depth = ?options.analysis_depth,
            "analysis started"
        );

        let mut sections = Vec::with_capacity(uploads.len());
        let mut parsed = 0usize;
        let mut total_data_points = 0usize;

        for upload in uploads {
            let display_name = upload.kind.display_name().to_string();
            match self.loader.execute(&upload.file_name, &upload.content) {
                Ok(table) => {
                    info!(
                        kind = %display_name,
                        file_name = %upload.file_name,
                        rows = table.row_count(),
                        columns = table.column_count(),
                        "statement loaded"
                    );
                    parsed += 1;
                    total_data_points += table.row_count() * table.column_count();

                    let mut statement = Statement::new(upload.kind, upload.file_name, table);
                    statement.insight =
                        Some(self.insight.execute(statement.kind, &statement.table).await);
                    let charts = if options.include_charts {
                        Some(self.charts.execute(&display_name, &statement.table))
                    } else {
                        None
                    };
                    let table_view = TableView::from_table(&statement.table);

                    sections.push(StatementSection {
                        kind: statement.kind,
                        display_name,
                        file_name: statement.file_name,
                        error: None,
                        insight: statement.insight,
                        table: Some(table_view),
                        charts,
                    });
                }
                Err(err) => {
                    warn!(
                        kind = %display_name,
                        file_name = %upload.file_name,
                        error = %err,
                        "statement failed to load"
                    );
                    sections.push(StatementSection {
                        kind: upload.kind,
                        display_name,
                        file_name: upload.file_name,
                        error: Some(err.to_string()),
                        insight: None,
                        table: None,
                        charts: None,
                    });
                }
            }
        }

        // The aggregate block only makes sense across statements, so it
        // needs at least two parsed tables.
        let executive_summary = if parsed > 1 {
            Some(ExecutiveSummary {
                documents_analyzed: parsed,
                total_data_points,
                completion: "100%".to_string(),
            })
        } else {
            None
        };

        let banner = if parsed > 0 {
            Banner {
                status: BannerStatus::Success,
                title: "Analysis Complete!".to_string(),
                message: "Your financial analysis has been generated successfully. \
                          Review the insights above for key findings and recommendations."
                    .to_string(),
            }
        } else {
            Banner {
                status: BannerStatus::Failure,
                title: "Analysis Failed".to_string(),
                message: "None of the uploaded files could be analyzed. \
                          Review the errors above and try again."
                    .to_string(),
            }
        };

        info!(
            report_id = %report_id,
            parsed,
            sections = sections.len(),
            "analysis finished"
        );

        Ok(AnalysisReport {
            report_id,
            generated_at: Utc::now(),
            sections,
            executive_summary,
            banner,
        })
    }
}
