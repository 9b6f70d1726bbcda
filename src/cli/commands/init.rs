use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::open_initialized;
use crate::db::migrate::current_version;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite database and its schema migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.as_deref(), cli.test)?;

    info("Initializing vreport…");
    if !cli.test {
        info(format!("Config file : {}", Config::config_file().display()));
    }
    info(format!("Database    : {}", cfg.database));

    let pool = open_initialized(&cfg.database)?;

    success(format!(
        "Database initialized at {} (schema v{})",
        cfg.database,
        current_version(&pool.conn)?
    ));
    Ok(())
}
