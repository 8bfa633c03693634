use crate::input::histogram::parse_histogram;
use crate::input::reader::RawRow;
use crate::input::{InputError, RowError};
use crate::model::record::{HISTOGRAM_BUCKETS, Record};

/// Splits a comma-separated cell into trimmed, non-empty segments. Absent or
/// empty text yields an empty list, never an error.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn decade_of(year: i32) -> i32 {
    year.div_euclid(10) * 10
}

/// The validating parse pass. List-valued fields and the histogram are
/// normalized leniently; a non-numeric `year` is a row-level type error.
/// All bad rows are collected so the whole error list surfaces at once.
pub fn normalize_rows(rows: Vec<(u64, RawRow)>) -> Result<Vec<Record>, InputError> {
    let mut records = Vec::with_capacity(rows.len());
    let mut errors = Vec::new();

    for (row_no, row) in rows {
        let year_raw = row.year.as_deref().unwrap_or("").trim().to_string();
        let year = match year_raw.parse::<i32>() {
            Ok(year) => year,
            Err(_) => {
                errors.push(RowError {
                    row: row_no,
                    field: "year",
                    value: year_raw,
                });
                continue;
            }
        };

        let histogram = match row.histogram.as_deref().map(str::trim) {
            None | Some("") => Vec::new(),
            Some(raw) => match parse_histogram(raw) {
                Some(counts) => {
                    if !counts.is_empty() && counts.len() != HISTOGRAM_BUCKETS {
                        tracing::warn!(
                            row = row_no,
                            len = counts.len(),
                            "histogram does not have {HISTOGRAM_BUCKETS} buckets"
                        );
                    }
                    counts
                }
                None => {
                    tracing::warn!(row = row_no, "malformed histogram cell; treating as unrated");
                    Vec::new()
                }
            },
        };

        records.push(Record {
            year,
            decade: decade_of(year),
            director: row.director.as_deref().unwrap_or("").trim().to_string(),
            genres: split_list(row.genres.as_deref().unwrap_or("")),
            themes: split_list(row.themes.as_deref().unwrap_or("")),
            histogram,
        });
    }

    if !errors.is_empty() {
        return Err(InputError::InvalidRows(errors));
    }
    Ok(records)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/normalize.rs"]
mod tests;
