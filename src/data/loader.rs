//! CSV Data Loader Module
//! Handles CSV file loading and raw row extraction using Polars.

use crate::data::RawTitle;
use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Columns the titles file must provide.
pub const REQUIRED_COLUMNS: [&str; 12] = [
    "show_id",
    "type",
    "title",
    "director",
    "cast",
    "country",
    "date_added",
    "release_year",
    "rating",
    "duration",
    "listed_in",
    "description",
];

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("{} not found", .0.display())]
    NotFound(PathBuf),
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
    #[error("Missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("No data loaded")]
    NoData,
}

impl LoaderError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, LoaderError::NotFound(_))
    }
}

/// Handles CSV file loading with Polars.
pub struct DataLoader {
    df: Option<DataFrame>,
    file_path: Option<PathBuf>,
}

impl Default for DataLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DataLoader {
    pub fn new() -> Self {
        Self {
            df: None,
            file_path: None,
        }
    }

    /// Load a CSV file using Polars.
    ///
    /// Schema inference is disabled so every column arrives as text and
    /// empty fields arrive as nulls.
    pub fn load_csv(&mut self, file_path: &Path) -> Result<&DataFrame, LoaderError> {
        if !file_path.is_file() {
            return Err(LoaderError::NotFound(file_path.to_path_buf()));
        }
        self.file_path = Some(file_path.to_path_buf());

        let df = LazyCsvReader::new(file_path)
            .with_has_header(true)
            .with_infer_schema_length(Some(0))
            .finish()?
            .collect()?;

        for name in REQUIRED_COLUMNS {
            if df.column(name).is_err() {
                return Err(LoaderError::MissingColumn(name));
            }
        }

        debug!(columns = df.width(), "parsed titles file");
        self.df = Some(df);
        self.df.as_ref().ok_or(LoaderError::NoData)
    }

    /// Convert the loaded DataFrame into raw rows.
    pub fn raw_titles(&self) -> Result<Vec<RawTitle>, LoaderError> {
        let df = self.df.as_ref().ok_or(LoaderError::NoData)?;

        let columns = REQUIRED_COLUMNS
            .iter()
            .map(|name| Self::text_column(df, name))
            .collect::<Result<Vec<_>, _>>()?;
        // Indices follow REQUIRED_COLUMNS.
        let field = |col: usize, row: usize| columns[col][row].clone();

        let rows: Vec<RawTitle> = (0..df.height())
            .map(|i| RawTitle {
                show_id: field(0, i),
                kind: field(1, i),
                title: field(2, i),
                director: field(3, i),
                cast: field(4, i),
                country: field(5, i),
                date_added: field(6, i),
                release_year: field(7, i),
                rating: field(8, i),
                duration: field(9, i),
                listed_in: field(10, i),
                description: field(11, i),
            })
            .collect();

        debug!(rows = rows.len(), "extracted raw titles");
        Ok(rows)
    }

    /// Read one column as optional strings; empty strings count as missing.
    fn text_column(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>, LoaderError> {
        let column = df.column(name)?.cast(&DataType::String)?;
        let values = column
            .str()?
            .into_iter()
            .map(|v| v.filter(|s| !s.is_empty()).map(str::to_string))
            .collect();
        Ok(values)
    }

    /// Get the number of rows in the DataFrame.
    pub fn get_row_count(&self) -> usize {
        self.df.as_ref().map(|df| df.height()).unwrap_or(0)
    }

    /// Get file path.
    pub fn get_file_path(&self) -> Option<&PathBuf> {
        self.file_path.as_ref()
    }
}
