use crate::report::{CatalogSummary, CountChart, HistogramChart, format_f64_6};

const BAR_WIDTH: usize = 40;

pub fn render_summary(summary: &CatalogSummary) -> String {
    let mut out = String::new();

    out.push_str("Movie Catalog Summary\n");
    out.push_str("=====================\n");
    out.push_str(&format!("Source: {}\n", summary.source));
    out.push_str(&format!("Records: {}\n", summary.records));
    out.push_str(&format!("Rated records: {}\n", summary.rated_records));
    match (summary.year_min, summary.year_max) {
        (Some(min), Some(max)) => out.push_str(&format!("Year span: {min}-{max}\n")),
        _ => out.push_str("Year span: n/a\n"),
    }
    out.push_str(&format!("Distinct genres: {}\n", summary.distinct_genres));
    out.push_str(&format!(
        "Distinct directors: {}\n",
        summary.distinct_directors
    ));
    out.push_str(&format!("Distinct themes: {}\n", summary.distinct_themes));
    match summary.mean_rating {
        Some(mean) => out.push_str(&format!("Mean rating: {}\n", format_f64_6(mean))),
        None => out.push_str("Mean rating: n/a\n"),
    }

    out
}

/// Renders a count chart as an aligned table with a proportional bar column,
/// the textual stand-in for the dashboard's bar/line charts.
pub fn render_count_chart(chart: &CountChart) -> String {
    let mut out = String::new();

    out.push_str(&chart.title);
    out.push('\n');
    out.push_str(&"-".repeat(chart.title.len()));
    out.push('\n');

    if chart.entries.is_empty() {
        out.push_str("(no data)\n");
        return out;
    }

    let key_width = chart
        .entries
        .iter()
        .map(|e| e.key.len())
        .max()
        .unwrap_or(0)
        .max(chart.x_label.len());
    let max_count = chart.entries.iter().map(|e| e.count).max().unwrap_or(0);

    out.push_str(&format!(
        "{:<key_width$}  {:>8}\n",
        chart.x_label, chart.y_label
    ));
    for entry in &chart.entries {
        out.push_str(&format!(
            "{:<key_width$}  {:>8}  {}\n",
            entry.key,
            entry.count,
            bar(entry.count as f64, max_count as f64)
        ));
    }

    out
}

/// One panel per group: the group key, member count, and a bar per rating
/// bucket 1..=10.
pub fn render_histogram_chart(chart: &HistogramChart) -> String {
    let mut out = String::new();

    let heading = format!("{} ({})", chart.title, chart.group_by);
    out.push_str(&heading);
    out.push('\n');
    out.push_str(&"-".repeat(heading.len()));
    out.push('\n');

    if chart.panels.is_empty() {
        out.push_str("(no data)\n");
        return out;
    }

    for panel in &chart.panels {
        out.push_str(&format!("{} ({} movies)\n", panel.key, panel.members));
        let max = panel.average.iter().cloned().fold(0.0f64, f64::max);
        for (bucket, &value) in panel.average.iter().enumerate() {
            out.push_str(&format!(
                "  {:>2}  {:>12}  {}\n",
                bucket + 1,
                format_f64_6(value),
                bar(value, max)
            ));
        }
        out.push('\n');
    }

    out
}

fn bar(value: f64, max: f64) -> String {
    if max <= 0.0 || value <= 0.0 {
        return String::new();
    }
    let len = ((value / max) * BAR_WIDTH as f64).round() as usize;
    "#".repeat(len.max(1))
}
