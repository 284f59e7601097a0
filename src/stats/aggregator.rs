//! Aggregation Module
//! Group-by counts over the cleaned titles, one view per chart.

use crate::data::{Title, UNKNOWN};
use std::collections::{BTreeMap, HashMap};

/// Separator used by the multi-valued `cast` and `listed_in` fields.
pub const LIST_SEPARATOR: &str = ", ";

/// Count of titles sharing one label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    pub label: String,
    pub count: u32,
}

/// Count of titles for one year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearCount {
    pub year: i32,
    pub count: u32,
}

/// Release and added counts on a shared year axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearComparison {
    pub year: i32,
    pub release_count: u32,
    pub added_count: u32,
}

/// The eight fixed views, in the order they are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    ContentTypes,
    AddedOverTime,
    TopCountries,
    TopDirectors,
    TopActors,
    Ratings,
    TopGenres,
    ReleaseVsAdded,
}

impl ViewKind {
    pub const ALL: [ViewKind; 8] = [
        ViewKind::ContentTypes,
        ViewKind::AddedOverTime,
        ViewKind::TopCountries,
        ViewKind::TopDirectors,
        ViewKind::TopActors,
        ViewKind::Ratings,
        ViewKind::TopGenres,
        ViewKind::ReleaseVsAdded,
    ];
}

/// Aggregated data behind one chart.
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Categories(Vec<CategoryCount>),
    Years(Vec<YearCount>),
    YearComparison(Vec<YearComparison>),
}

impl View {
    pub fn is_empty(&self) -> bool {
        match self {
            View::Categories(v) => v.is_empty(),
            View::Years(v) => v.is_empty(),
            View::YearComparison(v) => v.is_empty(),
        }
    }
}

/// Computes the views. Nothing is cached; each call walks the table.
pub struct Aggregator;

impl Aggregator {
    /// Compute one view over the cleaned titles.
    pub fn compute(kind: ViewKind, titles: &[Title], top_n: usize) -> View {
        match kind {
            ViewKind::ContentTypes => View::Categories(Self::count_by_type(titles)),
            ViewKind::AddedOverTime => View::Years(Self::count_by_year_added(titles)),
            ViewKind::TopCountries => View::Categories(Self::top_countries(titles, top_n)),
            ViewKind::TopDirectors => View::Categories(Self::top_directors(titles, top_n)),
            ViewKind::TopActors => View::Categories(Self::top_actors(titles, top_n)),
            ViewKind::Ratings => View::Categories(Self::count_by_rating(titles)),
            ViewKind::TopGenres => View::Categories(Self::top_genres(titles, top_n)),
            ViewKind::ReleaseVsAdded => View::YearComparison(Self::release_vs_added(titles)),
        }
    }

    /// Count identical values, largest count first.
    ///
    /// Equal counts keep the order in which values were first seen.
    pub fn value_counts<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<CategoryCount> {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut counts: Vec<CategoryCount> = Vec::new();
        for value in values {
            match index.get(value) {
                Some(&i) => counts[i].count += 1,
                None => {
                    index.insert(value, counts.len());
                    counts.push(CategoryCount {
                        label: value.to_string(),
                        count: 1,
                    });
                }
            }
        }
        // Stable sort keeps first-seen order among ties.
        counts.sort_by(|a, b| b.count.cmp(&a.count));
        counts
    }

    fn top_known<'a>(values: impl IntoIterator<Item = &'a str>, n: usize) -> Vec<CategoryCount> {
        let mut counts = Self::value_counts(values.into_iter().filter(|v| *v != UNKNOWN));
        counts.truncate(n);
        counts
    }

    fn split_list(field: &str) -> impl Iterator<Item = &str> {
        field.split(LIST_SEPARATOR).filter(|item| !item.is_empty())
    }

    fn count_by_year(years: impl IntoIterator<Item = i32>) -> BTreeMap<i32, u32> {
        let mut counts = BTreeMap::new();
        for year in years {
            *counts.entry(year).or_insert(0) += 1;
        }
        counts
    }

    pub fn count_by_type(titles: &[Title]) -> Vec<CategoryCount> {
        Self::value_counts(titles.iter().map(|t| t.kind.label()))
    }

    /// Titles added per year, ascending by year.
    pub fn count_by_year_added(titles: &[Title]) -> Vec<YearCount> {
        Self::count_by_year(titles.iter().map(Title::year_added))
            .into_iter()
            .map(|(year, count)| YearCount { year, count })
            .collect()
    }

    /// Country fields are counted whole, so co-productions form their own label.
    pub fn top_countries(titles: &[Title], n: usize) -> Vec<CategoryCount> {
        Self::top_known(titles.iter().map(|t| t.country.as_str()), n)
    }

    pub fn top_directors(titles: &[Title], n: usize) -> Vec<CategoryCount> {
        Self::top_known(titles.iter().map(|t| t.director.as_str()), n)
    }

    pub fn top_actors(titles: &[Title], n: usize) -> Vec<CategoryCount> {
        Self::top_known(titles.iter().flat_map(|t| Self::split_list(&t.cast)), n)
    }

    /// Every rating, largest count first.
    pub fn count_by_rating(titles: &[Title]) -> Vec<CategoryCount> {
        Self::value_counts(titles.iter().map(|t| t.rating.as_str()))
    }

    pub fn top_genres(titles: &[Title], n: usize) -> Vec<CategoryCount> {
        let genres = titles
            .iter()
            .filter_map(|t| t.listed_in.as_deref())
            .flat_map(Self::split_list);
        let mut counts = Self::value_counts(genres);
        counts.truncate(n);
        counts
    }

    /// Outer join of release-year and added-year counts.
    ///
    /// The axis holds every year present in either series; a missing side
    /// counts as zero.
    pub fn release_vs_added(titles: &[Title]) -> Vec<YearComparison> {
        let released = Self::count_by_year(titles.iter().filter_map(|t| t.release_year));
        let added = Self::count_by_year(titles.iter().map(Title::year_added));

        let mut years: Vec<i32> = released.keys().chain(added.keys()).copied().collect();
        years.sort_unstable();
        years.dedup();

        years
            .into_iter()
            .map(|year| YearComparison {
                year,
                release_count: released.get(&year).copied().unwrap_or(0),
                added_count: added.get(&year).copied().unwrap_or(0),
            })
            .collect()
    }
}
