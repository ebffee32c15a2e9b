// ============================================================
// STATEMENT PARSERS
// ============================================================
// Turn uploaded bytes into a DataTable. Format dispatch happens on the
// declared file extension; the bytes are never sniffed for unsupported
// extensions.

mod csv;
mod xlsx;

use crate::domain::error::Result;
use crate::domain::table::DataTable;

pub use csv::parse_csv;
pub use xlsx::parse_workbook;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Csv,
    Xlsx,
    Xls,
}

impl FileFormat {
    /// Map a lowercased extension onto a supported format.
    pub fn from_extension(ext: &str) -> Option<FileFormat> {
        match ext {
            "csv" => Some(FileFormat::Csv),
            "xlsx" => Some(FileFormat::Xlsx),
            "xls" => Some(FileFormat::Xls),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            FileFormat::Csv => "csv",
            FileFormat::Xlsx => "xlsx",
            FileFormat::Xls => "xls",
        }
    }
}

pub fn parse_statement(format: FileFormat, bytes: &[u8]) -> Result<DataTable> {
    match format {
        FileFormat::Csv => parse_csv(bytes),
        FileFormat::Xlsx | FileFormat::Xls => parse_workbook(bytes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_mapping() {
        assert_eq!(FileFormat::from_extension("csv"), Some(FileFormat::Csv));
        assert_eq!(FileFormat::from_extension("xlsx"), Some(FileFormat::Xlsx));
        assert_eq!(FileFormat::from_extension("xls"), Some(FileFormat::Xls));
        assert_eq!(FileFormat::from_extension("pdf"), None);
        assert_eq!(FileFormat::from_extension(""), None);
    }
}
