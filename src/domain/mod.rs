pub mod error;
pub mod options;
pub mod report;
pub mod statement;
pub mod table;
