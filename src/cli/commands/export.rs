use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::HistoryOrder;
use crate::errors::{AppError, AppResult};
use crate::export::{ExportContext, ExportFormat, ExportRequest, render_export};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        entity,
        format,
        file,
        sort,
        force,
    } = cmd
    {
        let format = ExportFormat::parse(Some(format.as_str()))?;
        let order = match sort.as_deref() {
            None => HistoryOrder::default(),
            Some(key) => HistoryOrder::parse(key)
                .ok_or_else(|| AppError::Validation(format!("Unsupported sort key: {key}")))?,
        };

        let req = ExportRequest::download((*entity).into(), format).with_history_order(order);
        let mut pool = DbPool::new(&cfg.database)?;
        let out = render_export(&mut pool, &req, &ExportContext::now(cfg.report_title.clone()))?;

        super::write_output(file, *force, &out.body, &format.as_str().to_uppercase())?;
    }
    Ok(())
}
