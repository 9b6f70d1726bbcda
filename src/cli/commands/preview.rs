use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::{ExportContext, ExportRequest, render_export};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Preview { entity } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let out = render_export(
            &mut pool,
            &ExportRequest::preview((*entity).into()),
            &ExportContext::now(None),
        )?;
        super::write_stdout(&out.body)?;
    }
    Ok(())
}
