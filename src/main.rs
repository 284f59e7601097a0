//! Netflix EDA - titles cleaning & static chart generation
//!
//! Reads `netflix_titles.csv` from the working directory and writes the charts next to it.

use netflix_eda::{pipeline, Config};
use std::io::Write;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // Logs go to stderr; stdout carries the run report.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "netflix_eda=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::default();
    let mut out = std::io::stdout().lock();
    if let Err(err) = pipeline::run(&config, &mut out) {
        tracing::debug!(error = ?err, "run failed");
        let _ = writeln!(out, "{}", pipeline::failure_message(&err, &config));
    }
}
