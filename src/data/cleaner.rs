//! Data Cleaner Module
//! Fills missing values, drops undated rows and types the remaining columns.

use crate::data::{ContentType, RawTitle, Title, UNKNOWN};
use chrono::NaiveDate;
use statrs::statistics::Statistics;
use std::collections::HashMap;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Formats accepted for `date_added`, tried in order.
const DATE_FORMATS: [&str; 3] = ["%B %d, %Y", "%b %d, %Y", "%Y-%m-%d"];

#[derive(Error, Debug)]
pub enum CleanError {
    #[error("No rating present to fill missing ratings")]
    NoRatings,
    #[error("Could not convert duration '{value}' of title {show_id} to a number")]
    Duration { show_id: String, value: String },
    #[error("Could not parse date_added '{value}' of title {show_id}")]
    DateAdded { show_id: String, value: String },
    #[error("Could not convert release_year '{value}' of title {show_id} to a number")]
    ReleaseYear { show_id: String, value: String },
}

/// Handles the cleaning pass over the loaded rows.
pub struct DataCleaner;

impl DataCleaner {
    /// Run every cleaning step and return the cleaned table.
    ///
    /// Rows come back as all movies followed by all TV shows, each group in
    /// input order.
    pub fn clean(rows: Vec<RawTitle>) -> Result<Vec<Title>, CleanError> {
        let loaded = rows.len();

        let mut rows = Self::fill_unknown(rows);
        rows.retain(|row| row.date_added.is_some());
        if rows.len() < loaded {
            debug!(dropped = loaded - rows.len(), "dropped rows without date_added");
        }

        Self::fill_rating(&mut rows)?;

        let (movies, tv_shows): (Vec<RawTitle>, Vec<RawTitle>) = rows
            .into_iter()
            .filter(|row| {
                let known = row.kind.as_deref().and_then(ContentType::parse).is_some();
                if !known {
                    warn!(show_id = ?row.show_id, kind = ?row.kind, "skipping title of unknown type");
                }
                known
            })
            .partition(|row| row.kind.as_deref() == Some(ContentType::Movie.label()));

        let minutes = Self::fill_durations(&movies, Self::parse_minutes)?;
        let seasons = Self::fill_durations(&tv_shows, Self::parse_seasons)?;

        let mut titles = Vec::with_capacity(movies.len() + tv_shows.len());
        for (row, duration) in movies.into_iter().zip(minutes) {
            titles.push(Self::to_title(row, ContentType::Movie, duration)?);
        }
        for (row, duration) in tv_shows.into_iter().zip(seasons) {
            titles.push(Self::to_title(row, ContentType::TvShow, duration)?);
        }

        info!(loaded, cleaned = titles.len(), "cleaned titles");
        Ok(titles)
    }

    /// Replace missing director, cast and country with the sentinel.
    pub fn fill_unknown(mut rows: Vec<RawTitle>) -> Vec<RawTitle> {
        for row in &mut rows {
            for field in [&mut row.director, &mut row.cast, &mut row.country] {
                field.get_or_insert_with(|| UNKNOWN.to_string());
            }
        }
        rows
    }

    /// Most frequent value; ties go to the value seen first.
    pub fn mode<'a>(values: impl IntoIterator<Item = &'a str>) -> Option<&'a str> {
        let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
        for (position, value) in values.into_iter().enumerate() {
            counts.entry(value).or_insert((0, position)).0 += 1;
        }
        counts
            .into_iter()
            .max_by(|(_, (count_a, first_a)), (_, (count_b, first_b))| {
                count_a.cmp(count_b).then(first_b.cmp(first_a))
            })
            .map(|(value, _)| value)
    }

    /// Fill missing ratings with the most frequent rating.
    fn fill_rating(rows: &mut [RawTitle]) -> Result<(), CleanError> {
        if rows.iter().all(|row| row.rating.is_some()) {
            return Ok(());
        }
        let mode = Self::mode(rows.iter().filter_map(|row| row.rating.as_deref()))
            .map(str::to_string)
            .ok_or(CleanError::NoRatings)?;
        debug!(rating = %mode, "filling missing ratings");
        for row in rows.iter_mut() {
            row.rating.get_or_insert_with(|| mode.clone());
        }
        Ok(())
    }

    /// Minutes of a movie duration such as "90 min".
    pub fn parse_minutes(value: &str) -> Option<f64> {
        let value = value.trim();
        let number = value.strip_suffix(" min").unwrap_or(value);
        number.trim().parse().ok()
    }

    /// Seasons of a TV show duration such as "1 Season" or "2 Seasons".
    pub fn parse_seasons(value: &str) -> Option<f64> {
        let value = value.trim();
        let number = value
            .strip_suffix(" Seasons")
            .or_else(|| value.strip_suffix(" Season"))
            .unwrap_or(value);
        number.trim().parse().ok()
    }

    /// Parse each row's duration and fill the gaps with the partition mean.
    ///
    /// A present but unparseable duration is an error. If nothing in the
    /// partition parses, missing durations stay missing.
    fn fill_durations(
        rows: &[RawTitle],
        parse: fn(&str) -> Option<f64>,
    ) -> Result<Vec<Option<f64>>, CleanError> {
        let parsed = rows
            .iter()
            .map(|row| match row.duration.as_deref() {
                None => Ok(None),
                Some(value) => parse(value).map(Some).ok_or_else(|| CleanError::Duration {
                    show_id: Self::id_of(row),
                    value: value.to_string(),
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mean = parsed.iter().flatten().mean();
        let fill = (!mean.is_nan()).then_some(mean);
        Ok(parsed.into_iter().map(|d| d.or(fill)).collect())
    }

    /// Parse `date_added` against the accepted formats.
    pub fn parse_date(value: &str) -> Option<NaiveDate> {
        let value = value.trim();
        DATE_FORMATS
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
    }

    fn to_title(row: RawTitle, kind: ContentType, duration: Option<f64>) -> Result<Title, CleanError> {
        let show_id = Self::id_of(&row);
        let raw_date = row.date_added.unwrap_or_default();
        let date_added = Self::parse_date(&raw_date).ok_or_else(|| CleanError::DateAdded {
            show_id: show_id.clone(),
            value: raw_date.clone(),
        })?;
        let release_year = row
            .release_year
            .map(|value| {
                value.trim().parse::<i32>().map_err(|_| CleanError::ReleaseYear {
                    show_id: show_id.clone(),
                    value: value.clone(),
                })
            })
            .transpose()?;

        let (duration_minutes, duration_seasons) = match kind {
            ContentType::Movie => (duration, None),
            ContentType::TvShow => (None, duration),
        };

        Ok(Title {
            show_id: row.show_id,
            kind,
            title: row.title,
            director: row.director.unwrap_or_else(|| UNKNOWN.to_string()),
            cast: row.cast.unwrap_or_else(|| UNKNOWN.to_string()),
            country: row.country.unwrap_or_else(|| UNKNOWN.to_string()),
            date_added,
            release_year,
            rating: row.rating.unwrap_or_default(),
            duration_minutes,
            duration_seasons,
            listed_in: row.listed_in,
            description: row.description,
        })
    }

    fn id_of(row: &RawTitle) -> String {
        row.show_id.clone().unwrap_or_else(|| "<no id>".to_string())
    }
}
