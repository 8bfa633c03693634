mod analysis;
mod input;
mod model;
mod report;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use crate::input::{MovieTable, load_table};
use crate::model::group::GroupBy;
use crate::report::{
    director_chart, genre_chart, histogram_chart, theme_chart, write_reports, yearly_chart,
};

#[derive(Parser)]
#[command(name = "filmscope")]
#[command(about = "Descriptive analysis of movie-catalog CSV exports", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one analysis and print chart-ready data
    Analyze {
        /// Path to the catalog CSV (.csv or .csv.gz)
        #[arg(short, long)]
        input: PathBuf,

        /// Which chart to compute
        #[arg(short, long, value_enum)]
        chart: ChartKind,

        /// Grouping axis for the average-histogram chart
        #[arg(short, long, value_enum, default_value_t = GroupKind::Genres)]
        group_by: GroupKind,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Compute every chart and write the full report set to a directory
    Report {
        /// Path to the catalog CSV (.csv or .csv.gz)
        #[arg(short, long)]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, default_value = "report")]
        out: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ChartKind {
    GenreDistribution,
    ThemeAnalysis,
    DirectorAnalysis,
    YearlyTrends,
    AverageHistogram,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum GroupKind {
    Genres,
    Decades,
    Directors,
}

impl From<GroupKind> for GroupBy {
    fn from(kind: GroupKind) -> Self {
        match kind {
            GroupKind::Genres => GroupBy::Genres,
            GroupKind::Decades => GroupBy::Decades,
            GroupKind::Directors => GroupBy::Directors,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<(), String> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            input,
            chart,
            group_by,
            format,
        } => {
            let table = load_table(&input).map_err(|e| e.to_string())?;
            let rendered = render_chart(&table, chart, group_by.into(), format)
                .map_err(|e| e.to_string())?;
            print!("{rendered}");
        }
        Commands::Report { input, out } => {
            let table = load_table(&input).map_err(|e| e.to_string())?;
            write_reports(&table, &out).map_err(|e| e.to_string())?;
        }
    }

    Ok(())
}

fn render_chart(
    table: &MovieTable,
    chart: ChartKind,
    group_by: GroupBy,
    format: OutputFormat,
) -> Result<String, report::ReportError> {
    tracing::info!(chart = ?chart, "running analysis");
    match (chart, format) {
        (ChartKind::GenreDistribution, OutputFormat::Text) => {
            Ok(report::text::render_count_chart(&genre_chart(table)))
        }
        (ChartKind::GenreDistribution, OutputFormat::Json) => {
            report::json::render_json(&genre_chart(table))
        }
        (ChartKind::ThemeAnalysis, OutputFormat::Text) => {
            Ok(report::text::render_count_chart(&theme_chart(table)))
        }
        (ChartKind::ThemeAnalysis, OutputFormat::Json) => {
            report::json::render_json(&theme_chart(table))
        }
        (ChartKind::DirectorAnalysis, OutputFormat::Text) => {
            Ok(report::text::render_count_chart(&director_chart(table)))
        }
        (ChartKind::DirectorAnalysis, OutputFormat::Json) => {
            report::json::render_json(&director_chart(table))
        }
        (ChartKind::YearlyTrends, OutputFormat::Text) => {
            Ok(report::text::render_count_chart(&yearly_chart(table)))
        }
        (ChartKind::YearlyTrends, OutputFormat::Json) => {
            report::json::render_json(&yearly_chart(table))
        }
        (ChartKind::AverageHistogram, OutputFormat::Text) => Ok(
            report::text::render_histogram_chart(&histogram_chart(table, group_by)),
        ),
        (ChartKind::AverageHistogram, OutputFormat::Json) => {
            report::json::render_json(&histogram_chart(table, group_by))
        }
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
