use crate::errors::{AppError, AppResult};
use std::collections::HashMap;
use std::fmt;

/// One exported value. Numbers are never quoted by the tabular encoder.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    Count(usize),
}

impl Cell {
    pub fn text(s: impl Into<String>) -> Self {
        Cell::Text(s.into())
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(s) => f.write_str(s),
            Cell::Number(n) => write!(f, "{n}"),
            Cell::Count(n) => write!(f, "{n}"),
        }
    }
}

/// Flat record keyed by column title.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExportRecord {
    cells: HashMap<&'static str, Cell>,
}

impl ExportRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, column: &'static str, cell: Cell) -> Self {
        self.cells.insert(column, cell);
        self
    }

    pub fn get(&self, column: &str) -> Option<&Cell> {
        self.cells.get(column)
    }

    /// Like `get`, but a missing column is a render failure.
    pub fn require(&self, column: &str) -> AppResult<&Cell> {
        self.get(column)
            .ok_or_else(|| AppError::Render(format!("record is missing column '{column}'")))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
