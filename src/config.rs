//! Run configuration.
//! The binary always runs with the defaults; tests point the pipeline elsewhere.

use std::path::PathBuf;

/// Input file looked up in the working directory.
pub const DEFAULT_INPUT: &str = "netflix_titles.csv";

/// Number of entries kept by the top-N views.
pub const DEFAULT_TOP_N: usize = 10;

/// Rows shown in the cleaned-table preview.
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

/// Paths and limits for one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input_path: PathBuf,
    pub output_dir: PathBuf,
    pub top_n: usize,
    pub preview_rows: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT),
            output_dir: PathBuf::from("."),
            top_n: DEFAULT_TOP_N,
            preview_rows: DEFAULT_PREVIEW_ROWS,
        }
    }
}

impl Config {
    /// Config reading `input_path` and writing charts into `output_dir`.
    pub fn with_paths(input_path: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }

    /// Destination of a chart file.
    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }

    /// File name of the input, as shown in user-facing messages.
    pub fn input_name(&self) -> String {
        self.input_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.input_path.display().to_string())
    }
}
