pub mod use_cases;

pub use use_cases::analyze::AnalyzeUseCase;
pub use use_cases::charts::ChartsUseCase;
pub use use_cases::insight::InsightUseCase;
pub use use_cases::load_statement::LoadStatementUseCase;
