pub mod config;
pub mod export;
pub mod get;
pub mod import;
pub mod init;
pub mod preview;
pub mod report;

use crate::errors::{AppError, AppResult};
use crate::export::ensure_writable;
use crate::ui::messages::success;
use crate::utils::path::{expand_tilde, is_absolute};
use std::fs;
use std::io::{self, Write};

/// Writes an export body to an absolute output path.
pub(crate) fn write_output(file: &str, force: bool, body: &[u8], label: &str) -> AppResult<()> {
    if !is_absolute(file) {
        return Err(AppError::Validation(format!(
            "Output file path must be absolute: {file}"
        )));
    }

    let path = expand_tilde(file);
    ensure_writable(&path, force)?;
    fs::write(&path, body)?;

    success(format!("{label} export completed: {}", path.display()));
    Ok(())
}

/// Writes an export body to stdout unchanged.
pub(crate) fn write_stdout(body: &[u8]) -> AppResult<()> {
    let mut out = io::stdout().lock();
    out.write_all(body)?;
    out.flush()?;
    Ok(())
}
