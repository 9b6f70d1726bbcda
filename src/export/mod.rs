// src/export/mod.rs

pub mod columns;
pub mod csv;
pub mod dispatch;
mod fs_utils;
pub mod pdf;
pub mod pdf_export;
pub mod project;
pub mod record;
pub mod route;

pub use columns::{ColumnSet, ExportKind, Quoting};
pub use dispatch::{Delivery, ExportContext, ExportRequest, RenderedExport, render_export};
pub use fs_utils::{ensure_writable, stage_in_scratch};
pub use record::{Cell, ExportRecord};
pub use route::{ExportResponse, handle};

use crate::errors::{AppError, AppResult};

/// Message returned for a missing or unsupported `format`.
pub const FORMAT_ERROR: &str = "Format must be 'pdf' or 'csv'";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Pdf,
}

impl ExportFormat {
    /// Accepts exactly `csv` or `pdf`; anything else is a client error.
    pub fn parse(s: Option<&str>) -> AppResult<Self> {
        match s {
            Some("csv") => Ok(ExportFormat::Csv),
            Some("pdf") => Ok(ExportFormat::Pdf),
            _ => Err(AppError::Validation(FORMAT_ERROR.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Pdf => "pdf",
        }
    }

    pub fn media_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv",
            ExportFormat::Pdf => "application/pdf",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_is_strict() {
        assert_eq!(ExportFormat::parse(Some("csv")).unwrap(), ExportFormat::Csv);
        assert_eq!(ExportFormat::parse(Some("pdf")).unwrap(), ExportFormat::Pdf);
        for bad in [None, Some(""), Some("CSV"), Some("xlsx")] {
            let err = ExportFormat::parse(bad).unwrap_err();
            assert_eq!(err.to_string(), FORMAT_ERROR);
            assert_eq!(err.status_code(), 400);
        }
    }
}
