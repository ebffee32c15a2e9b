pub mod analyze;
pub mod charts;
pub mod digest;
pub mod insight;
pub mod load_statement;
pub mod prompts;
