use std::collections::{BTreeMap, HashMap};

use crate::input::MovieTable;

/// Records per genre, descending by count, ties ascending by name. A record
/// contributes once per genre it carries; records with no genres contribute
/// nothing.
pub fn genre_distribution(table: &MovieTable) -> Vec<(String, usize)> {
    value_counts(table.records.iter().flat_map(|r| r.genres.iter()))
}

/// Records per theme word, same ordering as `genre_distribution`. This is the
/// frequency input of the theme word-cloud.
pub fn theme_frequencies(table: &MovieTable) -> Vec<(String, usize)> {
    value_counts(table.records.iter().flat_map(|r| r.themes.iter()))
}

/// Records per director, descending by count, limited to `limit` entries.
/// Ties rank by first appearance in the input, so the cut at `limit` is
/// deterministic. Records with an empty director name are skipped.
pub fn director_ranking(table: &MovieTable, limit: usize) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();

    for record in &table.records {
        let name = record.director.as_str();
        if name.is_empty() {
            continue;
        }
        let count = counts.entry(name).or_insert(0);
        if *count == 0 {
            order.push(name);
        }
        *count += 1;
    }

    // sort_by_key is stable, so equal counts keep input order
    order.sort_by_key(|name| std::cmp::Reverse(counts[name]));
    order
        .into_iter()
        .take(limit)
        .map(|name| (name.to_string(), counts[name]))
        .collect()
}

/// Records per year, ascending by year.
pub fn yearly_trends(table: &MovieTable) -> Vec<(i32, usize)> {
    let mut counts: BTreeMap<i32, usize> = BTreeMap::new();
    for record in &table.records {
        *counts.entry(record.year).or_insert(0) += 1;
    }
    counts.into_iter().collect()
}

fn value_counts<'a>(values: impl Iterator<Item = &'a String>) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for value in values {
        *counts.entry(value.as_str()).or_insert(0) += 1;
    }
    let mut entries: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries
}

#[cfg(test)]
#[path = "../../tests/src_inline/analysis/counts.rs"]
mod tests;
