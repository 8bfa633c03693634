use std::path::{Path, PathBuf};

pub mod histogram;
pub mod normalize;
pub mod reader;

use thiserror::Error;

use crate::model::record::Record;
use normalize::normalize_rows;
use reader::read_rows;

/// The loaded, normalized catalog. Read-only for the process lifetime.
#[derive(Debug, Clone)]
pub struct MovieTable {
    pub path: PathBuf,
    pub records: Vec<Record>,
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("input file has no data rows")]
    EmptyTable,
    #[error(
        "{} row(s) failed type validation; first: {}",
        .0.len(),
        .0.first().map(|e| e.to_string()).unwrap_or_default()
    )]
    InvalidRows(Vec<RowError>),
}

/// One entry of the structured error list surfaced by the validating parse
/// pass. Only `year` produces these; list-valued and histogram fields are
/// parsed leniently instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("row {row}: field `{field}` has non-numeric value {value:?}")]
pub struct RowError {
    pub row: u64,
    pub field: &'static str,
    pub value: String,
}

pub fn load_table(path: &Path) -> Result<MovieTable, InputError> {
    let rows = read_rows(path)?;
    if rows.is_empty() {
        return Err(InputError::EmptyTable);
    }
    let records = normalize_rows(rows)?;

    tracing::info!(
        path = %path.display(),
        records = records.len(),
        rated = records.iter().filter(|r| r.is_rated()).count(),
        "catalog loaded"
    );

    Ok(MovieTable {
        path: path.to_path_buf(),
        records,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
