use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use serde::Deserialize;

use crate::input::InputError;

/// One raw CSV row before type validation. Unknown columns are ignored;
/// empty cells deserialize to None.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRow {
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub director: Option<String>,
    #[serde(default)]
    pub genres: Option<String>,
    #[serde(default)]
    pub themes: Option<String>,
    #[serde(default)]
    pub histogram: Option<String>,
}

pub fn open_maybe_gz(path: &Path) -> Result<Box<dyn Read>, InputError> {
    let file = File::open(path)?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(MultiGzDecoder::new(BufReader::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Reads all data rows, pairing each with its 1-based row number in the file
/// (the header is row 1).
pub fn read_rows(path: &Path) -> Result<Vec<(u64, RawRow)>, InputError> {
    let reader = open_maybe_gz(path)?;
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let mut rows = Vec::new();
    for (idx, result) in csv_reader.records().enumerate() {
        let record = result?;
        let row: RawRow = record.deserialize(Some(&headers))?;
        rows.push((idx as u64 + 2, row));
    }
    Ok(rows)
}
