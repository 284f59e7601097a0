//! Chart definitions
//! Fixed file name, titles, axis labels and canvas size of each chart.

use crate::stats::ViewKind;

/// How a view is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartStyle {
    /// Categories along x, counts up the y axis.
    VerticalBars,
    /// Categories down the y axis, largest at the top.
    HorizontalBars,
    /// One series of yearly counts with point markers.
    Line,
    /// Release and added counts as two marked lines with a legend.
    DualLine,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartDefinition {
    pub file_name: &'static str,
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub size: (u32, u32),
    pub style: ChartStyle,
    /// Category labels are drawn rotated to fit long or many ticks.
    pub rotate_x_labels: bool,
}

impl ChartDefinition {
    pub fn for_view(kind: ViewKind) -> Self {
        match kind {
            ViewKind::ContentTypes => Self {
                file_name: "content_type_distribution.png",
                title: "Distribution of Content Types",
                x_label: "Content Type",
                y_label: "Count",
                size: (800, 600),
                style: ChartStyle::VerticalBars,
                rotate_x_labels: false,
            },
            ViewKind::AddedOverTime => Self {
                file_name: "content_added_over_time.png",
                title: "Number of Content Added Over Time",
                x_label: "Year Added",
                y_label: "Number of Titles",
                size: (1200, 600),
                style: ChartStyle::Line,
                rotate_x_labels: false,
            },
            ViewKind::TopCountries => Self {
                file_name: "top_countries.png",
                title: "Top 10 Content-Producing Countries",
                x_label: "Number of Titles",
                y_label: "Country",
                size: (1200, 700),
                style: ChartStyle::HorizontalBars,
                rotate_x_labels: false,
            },
            ViewKind::TopDirectors => Self {
                file_name: "top_directors.png",
                title: "Top 10 Directors on Netflix",
                x_label: "Number of Titles",
                y_label: "Director",
                size: (1200, 700),
                style: ChartStyle::HorizontalBars,
                rotate_x_labels: false,
            },
            ViewKind::TopActors => Self {
                file_name: "top_actors.png",
                title: "Top 10 Actors on Netflix",
                x_label: "Number of Titles",
                y_label: "Actor",
                size: (1200, 700),
                style: ChartStyle::HorizontalBars,
                rotate_x_labels: false,
            },
            ViewKind::Ratings => Self {
                file_name: "content_ratings_distribution.png",
                title: "Distribution of Content Ratings",
                x_label: "Rating",
                y_label: "Count",
                size: (1000, 600),
                style: ChartStyle::VerticalBars,
                rotate_x_labels: true,
            },
            ViewKind::TopGenres => Self {
                file_name: "top_genres.png",
                title: "Top 10 Genres/Categories on Netflix",
                x_label: "Number of Titles",
                y_label: "Genre/Category",
                size: (1200, 700),
                style: ChartStyle::HorizontalBars,
                rotate_x_labels: false,
            },
            ViewKind::ReleaseVsAdded => Self {
                file_name: "release_vs_added_year.png",
                title: "Content Release Year vs. Content Added Year",
                x_label: "Year",
                y_label: "Number of Titles",
                size: (1500, 700),
                style: ChartStyle::DualLine,
                rotate_x_labels: false,
            },
        }
    }
}

/// File names of every chart, in production order.
pub fn chart_file_names() -> Vec<&'static str> {
    ViewKind::ALL
        .iter()
        .map(|kind| ChartDefinition::for_view(*kind).file_name)
        .collect()
}
