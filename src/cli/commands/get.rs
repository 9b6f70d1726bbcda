use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::{ExportContext, handle as handle_target};
use crate::ui::messages::{response_head, success};
use crate::utils::path::expand_tilde;
use std::fs;

/// Runs an export target and prints the response.
///
/// A non-2xx status makes the command fail after the body was printed.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Get { target, out } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let response = handle_target(
            &mut pool,
            target,
            &ExportContext::now(cfg.report_title.clone()),
        );

        response_head(response.status, &response.headers());

        match out {
            Some(file) => {
                let path = expand_tilde(file);
                fs::write(&path, &response.body)?;
                success(format!("Body written to {}", path.display()));
            }
            None => super::write_stdout(&response.body)?,
        }

        if response.status >= 400 {
            return Err(AppError::Other(format!("request failed with status {}", response.status)));
        }
    }
    Ok(())
}
