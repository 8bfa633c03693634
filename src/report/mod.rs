pub mod json;
pub mod text;

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::Serialize;
use thiserror::Error;

use crate::analysis::counts::{
    director_ranking, genre_distribution, theme_frequencies, yearly_trends,
};
use crate::analysis::histogram::average_histograms;
use crate::analysis::TOP_DIRECTORS;
use crate::input::MovieTable;
use crate::model::group::GroupBy;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize)]
pub struct CountEntry {
    pub key: String,
    pub count: usize,
}

/// A bar/line chart as data: entries in presentation order plus axis labels.
#[derive(Debug, Clone, Serialize)]
pub struct CountChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub entries: Vec<CountEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HistogramPanel {
    pub key: String,
    pub members: usize,
    pub average: Vec<f64>,
}

/// The average-histogram chart grid: one panel per group.
#[derive(Debug, Clone, Serialize)]
pub struct HistogramChart {
    pub title: String,
    pub group_by: String,
    pub panels: Vec<HistogramPanel>,
}

/// Table-level overview written alongside the charts.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogSummary {
    pub source: String,
    pub records: usize,
    pub rated_records: usize,
    pub year_min: Option<i32>,
    pub year_max: Option<i32>,
    pub distinct_genres: usize,
    pub distinct_directors: usize,
    pub distinct_themes: usize,
    pub mean_rating: Option<f64>,
}

fn count_entries(counts: Vec<(String, usize)>) -> Vec<CountEntry> {
    counts
        .into_iter()
        .map(|(key, count)| CountEntry { key, count })
        .collect()
}

pub fn genre_chart(table: &MovieTable) -> CountChart {
    CountChart {
        title: "Genre Distribution".to_string(),
        x_label: "Genres".to_string(),
        y_label: "Counts".to_string(),
        entries: count_entries(genre_distribution(table)),
    }
}

pub fn theme_chart(table: &MovieTable) -> CountChart {
    CountChart {
        title: "Theme Analysis".to_string(),
        x_label: "Themes".to_string(),
        y_label: "Counts".to_string(),
        entries: count_entries(theme_frequencies(table)),
    }
}

pub fn director_chart(table: &MovieTable) -> CountChart {
    CountChart {
        title: "Top 10 Directors".to_string(),
        x_label: "Directors".to_string(),
        y_label: "Counts".to_string(),
        entries: count_entries(director_ranking(table, TOP_DIRECTORS)),
    }
}

pub fn yearly_chart(table: &MovieTable) -> CountChart {
    CountChart {
        title: "Yearly Trends".to_string(),
        x_label: "Year".to_string(),
        y_label: "Number of Movies".to_string(),
        entries: yearly_trends(table)
            .into_iter()
            .map(|(year, count)| CountEntry {
                key: year.to_string(),
                count,
            })
            .collect(),
    }
}

pub fn histogram_chart(table: &MovieTable, group_by: GroupBy) -> HistogramChart {
    HistogramChart {
        title: "Average Histogram by Group".to_string(),
        group_by: group_by.label().to_string(),
        panels: average_histograms(table, group_by)
            .into_iter()
            .map(|g| HistogramPanel {
                key: g.key.to_string(),
                members: g.members,
                average: g.average.to_vec(),
            })
            .collect(),
    }
}

pub fn catalog_summary(table: &MovieTable) -> CatalogSummary {
    let records = &table.records;
    let mut genres = BTreeSet::new();
    let mut directors = BTreeSet::new();
    let mut themes = BTreeSet::new();
    let mut total_ratings = 0u64;
    let mut weighted = 0u64;
    let mut rated = 0usize;

    for record in records {
        genres.extend(record.genres.iter().cloned());
        themes.extend(record.themes.iter().cloned());
        if !record.director.is_empty() {
            directors.insert(record.director.clone());
        }
        if record.is_rated() {
            rated += 1;
        }
        for (bucket, &count) in record.histogram.iter().enumerate() {
            total_ratings += count as u64;
            weighted += (bucket as u64 + 1) * count as u64;
        }
    }

    CatalogSummary {
        source: table.path.display().to_string(),
        records: records.len(),
        rated_records: rated,
        year_min: records.iter().map(|r| r.year).min(),
        year_max: records.iter().map(|r| r.year).max(),
        distinct_genres: genres.len(),
        distinct_directors: directors.len(),
        distinct_themes: themes.len(),
        mean_rating: if total_ratings == 0 {
            None
        } else {
            Some(weighted as f64 / total_ratings as f64)
        },
    }
}

/// Writes the full report set: one JSON document per chart plus a text
/// rendering of everything.
pub fn write_reports(table: &MovieTable, out_dir: &Path) -> Result<(), ReportError> {
    fs::create_dir_all(out_dir)?;

    let charts = [
        ("genre_distribution.json", json::render_json(&genre_chart(table))?),
        ("theme_analysis.json", json::render_json(&theme_chart(table))?),
        ("director_analysis.json", json::render_json(&director_chart(table))?),
        ("yearly_trends.json", json::render_json(&yearly_chart(table))?),
        (
            "average_histogram_by_genres.json",
            json::render_json(&histogram_chart(table, GroupBy::Genres))?,
        ),
        (
            "average_histogram_by_decades.json",
            json::render_json(&histogram_chart(table, GroupBy::Decades))?,
        ),
        (
            "average_histogram_by_directors.json",
            json::render_json(&histogram_chart(table, GroupBy::Directors))?,
        ),
        ("summary.json", json::render_json(&catalog_summary(table))?),
    ];
    for (name, body) in &charts {
        fs::write(out_dir.join(name), body)?;
    }

    let mut text = String::new();
    text.push_str(&text::render_summary(&catalog_summary(table)));
    text.push('\n');
    text.push_str(&text::render_count_chart(&genre_chart(table)));
    text.push('\n');
    text.push_str(&text::render_count_chart(&theme_chart(table)));
    text.push('\n');
    text.push_str(&text::render_count_chart(&director_chart(table)));
    text.push('\n');
    text.push_str(&text::render_count_chart(&yearly_chart(table)));
    for group_by in [GroupBy::Genres, GroupBy::Decades, GroupBy::Directors] {
        text.push('\n');
        text.push_str(&text::render_histogram_chart(&histogram_chart(table, group_by)));
    }
    fs::write(out_dir.join("report.txt"), text)?;

    tracing::info!(
        out_dir = %out_dir.display(),
        files = charts.len() + 1,
        "report set written"
    );
    Ok(())
}

pub fn format_f64_6(v: f64) -> String {
    format!("{v:.6}")
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/tests.rs"]
mod tests;
