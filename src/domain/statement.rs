use crate::domain::table::DataTable;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// The three statement kinds the service understands. The wire name is
/// the snake_case tag used by the analyze endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatementKind {
    BalanceSheet,
    ProfitLoss,
    CashFlow,
}

impl StatementKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            StatementKind::BalanceSheet => "Balance Sheet",
            StatementKind::ProfitLoss => "Profit & Loss Statement",
            StatementKind::CashFlow => "Cash Flow Statement",
        }
    }
}

/// One uploaded file, not yet parsed.
#[derive(Debug, Clone)]
pub struct StatementUpload {
    pub kind: StatementKind,
    pub file_name: String,
    pub content: Vec<u8>,
}

/// A parsed statement. The insight text is absent until the generation
/// step has run; the whole object lives only for one analysis request.
#[derive(Debug, Clone)]
pub struct Statement {
    pub kind: StatementKind,
    pub file_name: String,
    pub table: Arc<DataTable>,
    pub insight: Option<String>,
}

impl Statement {
    pub fn new(kind: StatementKind, file_name: String, table: Arc<DataTable>) -> Self {
        Self {
            kind,
            file_name,
            table,
            insight: None,
        }
    }
}
