//! Title records
//! Raw rows as read from the CSV and the typed rows produced by cleaning.

use chrono::{Datelike, NaiveDate};
use polars::prelude::*;

/// Placeholder written into missing categorical fields.
pub const UNKNOWN: &str = "Unknown";

/// Kind of title, taken from the `type` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    Movie,
    TvShow,
}

impl ContentType {
    /// Parse the exact labels used by the dataset.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Movie" => Some(Self::Movie),
            "TV Show" => Some(Self::TvShow),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Movie => "Movie",
            Self::TvShow => "TV Show",
        }
    }
}

/// One row exactly as loaded: every field is optional text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTitle {
    pub show_id: Option<String>,
    pub kind: Option<String>,
    pub title: Option<String>,
    pub director: Option<String>,
    pub cast: Option<String>,
    pub country: Option<String>,
    pub date_added: Option<String>,
    pub release_year: Option<String>,
    pub rating: Option<String>,
    pub duration: Option<String>,
    pub listed_in: Option<String>,
    pub description: Option<String>,
}

/// One cleaned row.
#[derive(Debug, Clone, PartialEq)]
pub struct Title {
    pub show_id: Option<String>,
    pub kind: ContentType,
    pub title: Option<String>,
    pub director: String,
    pub cast: String,
    pub country: String,
    pub date_added: NaiveDate,
    pub release_year: Option<i32>,
    pub rating: String,
    /// Set for movies only.
    pub duration_minutes: Option<f64>,
    /// Set for TV shows only.
    pub duration_seasons: Option<f64>,
    pub listed_in: Option<String>,
    pub description: Option<String>,
}

impl Title {
    pub fn year_added(&self) -> i32 {
        self.date_added.year()
    }
}

/// Build the cleaned table as a DataFrame for the console summary.
///
/// Column order follows the source layout, with `duration` replaced by
/// `duration_minutes`/`duration_seasons` and `year_added` appended.
pub fn titles_to_dataframe(titles: &[Title]) -> PolarsResult<DataFrame> {
    let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap_or_default();
    let days: Vec<i32> = titles
        .iter()
        .map(|t| (t.date_added - epoch).num_days() as i32)
        .collect();
    let date_added = Column::new("date_added".into(), days).cast(&DataType::Date)?;

    DataFrame::new(vec![
        Column::new(
            "show_id".into(),
            titles.iter().map(|t| t.show_id.clone()).collect::<Vec<_>>(),
        ),
        Column::new(
            "type".into(),
            titles.iter().map(|t| t.kind.label()).collect::<Vec<_>>(),
        ),
        Column::new(
            "title".into(),
            titles.iter().map(|t| t.title.clone()).collect::<Vec<_>>(),
        ),
        Column::new(
            "director".into(),
            titles.iter().map(|t| t.director.clone()).collect::<Vec<_>>(),
        ),
        Column::new(
            "cast".into(),
            titles.iter().map(|t| t.cast.clone()).collect::<Vec<_>>(),
        ),
        Column::new(
            "country".into(),
            titles.iter().map(|t| t.country.clone()).collect::<Vec<_>>(),
        ),
        date_added,
        Column::new(
            "release_year".into(),
            titles.iter().map(|t| t.release_year).collect::<Vec<_>>(),
        ),
        Column::new(
            "rating".into(),
            titles.iter().map(|t| t.rating.clone()).collect::<Vec<_>>(),
        ),
        Column::new(
            "duration_minutes".into(),
            titles.iter().map(|t| t.duration_minutes).collect::<Vec<_>>(),
        ),
        Column::new(
            "listed_in".into(),
            titles.iter().map(|t| t.listed_in.clone()).collect::<Vec<_>>(),
        ),
        Column::new(
            "description".into(),
            titles.iter().map(|t| t.description.clone()).collect::<Vec<_>>(),
        ),
        Column::new(
            "duration_seasons".into(),
            titles.iter().map(|t| t.duration_seasons).collect::<Vec<_>>(),
        ),
        Column::new(
            "year_added".into(),
            titles.iter().map(|t| t.year_added()).collect::<Vec<_>>(),
        ),
    ])
}
