use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Overrides the title of the participation report document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_title: Option<String>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            log_level: default_log_level(),
            report_title: None,
        }
    }
}

impl Config {
    /// Standard configuration directory (`~/.vreport`, or `%APPDATA%\vreport`).
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("vreport")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".vreport")
        }
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("vreport.conf")
    }

    pub fn database_file() -> PathBuf {
        Self::config_dir().join("vreport.sqlite")
    }

    /// Loads the configuration file, falling back to defaults when it is absent.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))?;
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    /// A relative `--db` path lives next to the config file.
    pub fn resolve_database(name: &str) -> String {
        let p = Path::new(name);
        if p.is_absolute() {
            p.to_string_lossy().to_string()
        } else {
            Self::config_dir().join(p).to_string_lossy().to_string()
        }
    }

    /// Writes the config file (unless `is_test`) and returns the effective config.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<Self> {
        let mut cfg = Self::default();

        if let Some(name) = custom_db {
            cfg.database = Self::resolve_database(name);
        }

        if !is_test {
            cfg.save_to(&Self::config_file())?;
        }
        Ok(cfg)
    }
}
