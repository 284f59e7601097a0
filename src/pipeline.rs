//! Pipeline
//! Load, clean, summarize, then aggregate and render one view at a time.

use crate::charts::{ChartDefinition, StaticChartRenderer};
use crate::config::Config;
use crate::data::{titles_to_dataframe, DataCleaner, DataLoader, LoaderError};
use crate::report::SummaryReport;
use crate::stats::{Aggregator, ViewKind};
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// Run the whole pipeline, writing the run report to `out`, and return the
/// paths of the written charts.
pub fn run(config: &Config, out: &mut impl Write) -> anyhow::Result<Vec<PathBuf>> {
    let mut loader = DataLoader::new();
    loader.load_csv(&config.input_path)?;
    info!(
        path = ?loader.get_file_path(),
        rows = loader.get_row_count(),
        "titles file ready"
    );
    writeln!(out, "Dataset loaded successfully!")?;

    let titles = DataCleaner::clean(loader.raw_titles()?)?;
    let df = titles_to_dataframe(&titles)?;

    writeln!(out, "\nDataset after cleaning:")?;
    writeln!(out, "First {} rows:", config.preview_rows)?;
    writeln!(out, "{}", SummaryReport::preview(&df, config.preview_rows))?;
    writeln!(out, "\nDataset Information after cleaning:")?;
    writeln!(out, "{}", SummaryReport::info(&df))?;
    writeln!(out, "\nMissing values after cleaning:")?;
    writeln!(out, "{}", SummaryReport::missing_values(&df))?;

    fs::create_dir_all(&config.output_dir)?;

    let mut written = Vec::with_capacity(ViewKind::ALL.len());
    for kind in ViewKind::ALL {
        let definition = ChartDefinition::for_view(kind);
        let view = Aggregator::compute(kind, &titles, config.top_n);
        let path = config.output_path(definition.file_name);
        StaticChartRenderer::render(&definition, &view, &path)?;
        writeln!(out, "Generated: {}", definition.file_name)?;
        written.push(path);
    }

    info!(charts = written.len(), "pipeline finished");
    Ok(written)
}

/// The single line shown to the user when a run fails.
pub fn failure_message(err: &anyhow::Error, config: &Config) -> String {
    match err.downcast_ref::<LoaderError>() {
        Some(e) if e.is_not_found() => format!(
            "Error: {} not found. Make sure it's in the same directory as the program.",
            config.input_name()
        ),
        _ => format!("An error occurred: {err}"),
    }
}
