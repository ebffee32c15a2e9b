use crate::domain::error::{AppError, Result};
use crate::domain::table::DataTable;
use crate::infrastructure::cache::ParseCache;
use crate::infrastructure::parsers::{parse_statement, FileFormat};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

pub struct LoadStatementUseCase {
    cache: Arc<ParseCache>,
}

impl LoadStatementUseCase {
    pub fn new(cache: Arc<ParseCache>) -> Self {
        Self { cache }
    }

    /// Parse an uploaded file into a table. The format is chosen by the
    /// declared extension; identical content parses once and is served
    /// from the cache afterwards. Tables with zero data rows are
    /// rejected, so downstream steps always see at least one row.
    pub fn execute(&self, file_name: &str, content: &[u8]) -> Result<Arc<DataTable>> {
        let format = file_format(file_name)?;
        let key = ParseCache::content_key(format.extension(), content);

        if let Some(table) = self.cache.get(&key) {
            debug!(file_name, "parse cache hit");
            return Ok(table);
        }

        let table = parse_statement(format, content)?;
        if table.row_count() == 0 {
            return Err(AppError::EmptyInput(format!(
                "The uploaded file '{}' is empty.",
                file_name
            )));
        }

        let table = Arc::new(table);
        self.cache.insert(key, Arc::clone(&table));
        Ok(table)
    }
}

fn file_format(file_name: &str) -> Result<FileFormat> {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .and_then(|ext| FileFormat::from_extension(&ext))
        .ok_or_else(|| {
            AppError::UnsupportedFormat(format!(
                "'{}': please upload CSV or Excel files.",
                file_name
            ))
        })
}
