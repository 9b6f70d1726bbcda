//! Path helpers for config and output files.

use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Output files must be given as absolute paths (after `~` expansion).
pub fn is_absolute(path: &str) -> bool {
    expand_tilde(path).is_absolute()
}
