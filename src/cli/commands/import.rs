use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::initialize::open_initialized;
use crate::db::queries::import_dataset;
use crate::errors::AppResult;
use crate::models::Dataset;
use crate::ui::messages::{success, warning};
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file } = cmd {
        let ds = Dataset::from_path(&expand_tilde(file))?;
        if ds.is_empty() {
            warning("Dataset is empty: nothing imported.");
            return Ok(());
        }

        let mut pool = open_initialized(&cfg.database)?;
        let written = import_dataset(&mut pool, &ds)?;

        success(format!(
            "Imported {written} rows ({} accounts, {} profiles, {} events, {} history)",
            ds.accounts.len(),
            ds.profiles.len(),
            ds.events.len(),
            ds.history.len()
        ));
    }
    Ok(())
}
