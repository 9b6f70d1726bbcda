use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::{ExportContext, ExportFormat, ExportKind, ExportRequest, render_export};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        format,
        file,
        force,
    } = cmd
    {
        let format = ExportFormat::parse(Some(format.as_str()))?;
        let mut pool = DbPool::new(&cfg.database)?;

        let out = render_export(
            &mut pool,
            &ExportRequest::download(ExportKind::Report, format),
            &ExportContext::now(cfg.report_title.clone()),
        )?;

        super::write_output(file, *force, &out.body, &format.as_str().to_uppercase())?;
    }
    Ok(())
}
