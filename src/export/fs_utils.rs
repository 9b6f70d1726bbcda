// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Checks whether an output file may be created or overwritten.
///
/// - missing file → Ok
/// - existing file with `force` → Ok
/// - existing file without `force` → asks for confirmation on stdin.
pub fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));

    eprint!("Overwrite? [y/N]: ");
    io::stderr().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let ans = answer.trim().to_ascii_lowercase();

    if ans == "y" || ans == "yes" {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::Validation(
            "Export cancelled: existing file not overwritten".to_string(),
        ))
    }
}

/// Runs `write` against a file inside a fresh scratch directory and returns
/// the bytes it produced.
///
/// The directory is removed when this returns, on success and on every
/// error path, including a failing `write`.
pub fn stage_in_scratch<F>(file_name: &str, write: F) -> AppResult<Vec<u8>>
where
    F: FnOnce(&Path) -> AppResult<()>,
{
    let dir = tempfile::Builder::new().prefix("vreport-").tempdir()?;
    let path = dir.path().join(file_name);

    log::debug!("staging {file_name} in {}", dir.path().display());
    write(&path)?;
    let bytes = fs::read(&path)?;

    dir.close()?;
    Ok(bytes)
}
