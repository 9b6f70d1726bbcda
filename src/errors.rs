//! Unified application error type.
//! Every layer (db, report, export, cli) returns AppError so failures can be
//! classified once, at the boundary, into a user message and a status code.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Request errors (user-correctable)
    // ---------------------------
    #[error("{0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    // ---------------------------
    // Pipeline errors
    // ---------------------------
    #[error("Failed to read {collection}: {source}")]
    Fetch {
        collection: &'static str,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Render error: {0}")]
    Render(String),

    // ---------------------------
    // Config / import errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Import error: {0}")]
    Import(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// Wraps a read failure on one of the source collections.
    pub fn fetch(collection: &'static str, source: rusqlite::Error) -> Self {
        AppError::Fetch { collection, source }
    }

    /// HTTP-style status for the export boundary.
    pub fn status_code(&self) -> u16 {
        match self {
            AppError::Validation(_) => 400,
            AppError::NotFound(_) => 404,
            _ => 500,
        }
    }

    /// True for failures the caller can fix by changing the request.
    pub fn is_client_error(&self) -> bool {
        self.status_code() < 500
    }
}

pub type AppResult<T> = Result<T, AppError>;
