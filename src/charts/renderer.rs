//! Static Chart Renderer
//! Draws each aggregated view into a PNG file with Plotters.
//!
//! Styles:
//! - Vertical bars: one bar per category, counts on the y axis
//! - Horizontal bars: top-N rankings, largest bar at the top
//! - Line: yearly counts with point markers over a grid
//! - Dual line: release vs. added counts with a legend

use crate::charts::{ChartDefinition, ChartStyle};
use crate::stats::{CategoryCount, View, YearComparison, YearCount};
use plotters::prelude::*;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

// Colors (RGB)
const BAR_COLOR: RGBColor = RGBColor(91, 155, 213);
const LINE_COLOR: RGBColor = RGBColor(52, 152, 219);
const RELEASE_COLOR: RGBColor = RGBColor(52, 152, 219);
const ADDED_COLOR: RGBColor = RGBColor(237, 125, 49);

const FONT: &str = "sans-serif";
const TITLE_SIZE: i32 = 26;
const EMPTY_NOTE: &str = "No data";

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to draw {file}: {message}")]
    Draw { file: String, message: String },
}

type DrawResult = Result<(), Box<dyn std::error::Error>>;

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Draw `view` as described by `definition` into `path`, replacing any
    /// existing file.
    pub fn render(definition: &ChartDefinition, view: &View, path: &Path) -> Result<(), RenderError> {
        let result = match (definition.style, view) {
            (_, view) if view.is_empty() => Self::draw_empty(definition, path),
            (ChartStyle::VerticalBars, View::Categories(counts)) => {
                Self::draw_vertical_bars(definition, counts, path)
            }
            (ChartStyle::HorizontalBars, View::Categories(counts)) => {
                Self::draw_horizontal_bars(definition, counts, path)
            }
            (ChartStyle::Line, View::Years(points)) => Self::draw_line(definition, points, path),
            (ChartStyle::DualLine, View::YearComparison(points)) => {
                Self::draw_dual_line(definition, points, path)
            }
            (style, _) => Err(format!("{style:?} chart does not accept this view").into()),
        };

        result.map_err(|e| RenderError::Draw {
            file: definition.file_name.to_string(),
            message: e.to_string(),
        })?;
        debug!(file = %path.display(), "chart written");
        Ok(())
    }

    /// Upper bound of the count axis with some headroom above the tallest bar.
    fn count_ceiling(counts: impl IntoIterator<Item = u32>) -> u32 {
        let max = counts.into_iter().max().unwrap_or(0);
        max + (max / 10).max(1)
    }

    /// Year axis padded by one year on both sides.
    fn year_range(years: impl IntoIterator<Item = i32> + Clone) -> std::ops::Range<i32> {
        let min = years.clone().into_iter().min().unwrap_or(0);
        let max = years.into_iter().max().unwrap_or(0);
        (min - 1)..(max + 1)
    }

    fn segment_label(value: &SegmentValue<&String>) -> String {
        match value {
            SegmentValue::Exact(label) | SegmentValue::CenterOf(label) => label.to_string(),
            SegmentValue::Last => String::new(),
        }
    }

    fn draw_vertical_bars(
        definition: &ChartDefinition,
        counts: &[CategoryCount],
        path: &Path,
    ) -> DrawResult {
        let root = BitMapBackend::new(path, definition.size).into_drawing_area();
        root.fill(&WHITE)?;

        let labels: Vec<String> = counts.iter().map(|c| c.label.clone()).collect();
        let y_max = Self::count_ceiling(counts.iter().map(|c| c.count));

        let x_label_area = if definition.rotate_x_labels { 90 } else { 50 };

        let mut chart = ChartBuilder::on(&root)
            .caption(definition.title, (FONT, TITLE_SIZE).into_font())
            .margin(20)
            .x_label_area_size(x_label_area)
            .y_label_area_size(70)
            .build_cartesian_2d(labels.as_slice().into_segmented(), 0u32..y_max)?;

        let formatter = Self::segment_label;
        {
            let mut mesh = chart.configure_mesh();
            mesh.disable_x_mesh()
                .x_labels(labels.len())
                .x_label_formatter(&formatter)
                .x_desc(definition.x_label)
                .y_desc(definition.y_label);
            if definition.rotate_x_labels {
                mesh.x_label_style((FONT, 14).into_font().transform(FontTransform::Rotate90));
            }
            mesh.draw()?;
        }

        chart.draw_series(
            Histogram::vertical(&chart)
                .style(BAR_COLOR.filled())
                .margin(12)
                .data(labels.iter().zip(counts).map(|(label, c)| (label, c.count))),
        )?;

        root.present()?;
        Ok(())
    }

    fn draw_horizontal_bars(
        definition: &ChartDefinition,
        counts: &[CategoryCount],
        path: &Path,
    ) -> DrawResult {
        let root = BitMapBackend::new(path, definition.size).into_drawing_area();
        root.fill(&WHITE)?;

        // The segmented axis grows upwards, so the largest count goes last.
        let ranked: Vec<&CategoryCount> = counts.iter().rev().collect();
        let labels: Vec<String> = ranked.iter().map(|c| c.label.clone()).collect();
        let x_max = Self::count_ceiling(counts.iter().map(|c| c.count));

        let mut chart = ChartBuilder::on(&root)
            .caption(definition.title, (FONT, TITLE_SIZE).into_font())
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(260)
            .build_cartesian_2d(0u32..x_max, labels.as_slice().into_segmented())?;

        chart
            .configure_mesh()
            .disable_y_mesh()
            .y_labels(labels.len())
            .y_label_formatter(&Self::segment_label)
            .x_desc(definition.x_label)
            .y_desc(definition.y_label)
            .draw()?;

        chart.draw_series(
            Histogram::horizontal(&chart)
                .style(BAR_COLOR.filled())
                .margin(8)
                .data(labels.iter().zip(ranked).map(|(label, c)| (label, c.count))),
        )?;

        root.present()?;
        Ok(())
    }

    fn draw_line(definition: &ChartDefinition, points: &[YearCount], path: &Path) -> DrawResult {
        let root = BitMapBackend::new(path, definition.size).into_drawing_area();
        root.fill(&WHITE)?;

        let x_range = Self::year_range(points.iter().map(|p| p.year));
        let y_max = Self::count_ceiling(points.iter().map(|p| p.count));

        let mut chart = ChartBuilder::on(&root)
            .caption(definition.title, (FONT, TITLE_SIZE).into_font())
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(70)
            .build_cartesian_2d(x_range, 0u32..y_max)?;

        chart
            .configure_mesh()
            .x_desc(definition.x_label)
            .y_desc(definition.y_label)
            .draw()?;

        chart.draw_series(LineSeries::new(
            points.iter().map(|p| (p.year, p.count)),
            LINE_COLOR.stroke_width(2),
        ))?;
        chart.draw_series(
            points
                .iter()
                .map(|p| Circle::new((p.year, p.count), 4, LINE_COLOR.filled())),
        )?;

        root.present()?;
        Ok(())
    }

    fn draw_dual_line(
        definition: &ChartDefinition,
        points: &[YearComparison],
        path: &Path,
    ) -> DrawResult {
        let root = BitMapBackend::new(path, definition.size).into_drawing_area();
        root.fill(&WHITE)?;

        let x_range = Self::year_range(points.iter().map(|p| p.year));
        let y_max = Self::count_ceiling(
            points
                .iter()
                .flat_map(|p| [p.release_count, p.added_count]),
        );

        let mut chart = ChartBuilder::on(&root)
            .caption(definition.title, (FONT, TITLE_SIZE).into_font())
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(70)
            .build_cartesian_2d(x_range, 0u32..y_max)?;

        chart
            .configure_mesh()
            .x_desc(definition.x_label)
            .y_desc(definition.y_label)
            .draw()?;

        chart
            .draw_series(LineSeries::new(
                points.iter().map(|p| (p.year, p.release_count)),
                RELEASE_COLOR.stroke_width(2),
            ))?
            .label("Release Count")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RELEASE_COLOR));
        chart.draw_series(
            points
                .iter()
                .map(|p| Circle::new((p.year, p.release_count), 4, RELEASE_COLOR.filled())),
        )?;

        chart
            .draw_series(LineSeries::new(
                points.iter().map(|p| (p.year, p.added_count)),
                ADDED_COLOR.stroke_width(2),
            ))?
            .label("Added Count")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], ADDED_COLOR));
        chart.draw_series(
            points
                .iter()
                .map(|p| Cross::new((p.year, p.added_count), 5, ADDED_COLOR.stroke_width(2))),
        )?;

        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()?;

        root.present()?;
        Ok(())
    }

    /// Titled canvas with a note, used when a view has no rows.
    fn draw_empty(definition: &ChartDefinition, path: &Path) -> DrawResult {
        let root = BitMapBackend::new(path, definition.size).into_drawing_area();
        root.fill(&WHITE)?;

        let body = root.titled(definition.title, (FONT, TITLE_SIZE).into_font())?;
        let (width, height) = body.dim_in_pixel();
        body.draw(&Text::new(
            EMPTY_NOTE,
            (width as i32 / 2 - 30, height as i32 / 2),
            (FONT, 18).into_font(),
        ))?;

        root.present()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::ViewKind;

    #[test]
    fn count_ceiling_leaves_headroom() {
        assert_eq!(StaticChartRenderer::count_ceiling([0]), 1);
        assert_eq!(StaticChartRenderer::count_ceiling([3, 9]), 10);
        assert_eq!(StaticChartRenderer::count_ceiling([250]), 275);
        assert_eq!(StaticChartRenderer::count_ceiling(Vec::new()), 1);
    }

    #[test]
    fn year_range_pads_single_year() {
        assert_eq!(StaticChartRenderer::year_range(vec![2020]), 2019..2021);
        assert_eq!(StaticChartRenderer::year_range(vec![2008, 2021]), 2007..2022);
    }

    #[test]
    fn mismatched_view_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let definition = ChartDefinition::for_view(ViewKind::AddedOverTime);
        let view = View::Categories(vec![CategoryCount {
            label: "Movie".to_string(),
            count: 1,
        }]);
        let err = StaticChartRenderer::render(&definition, &view, &dir.path().join("x.png"))
            .unwrap_err();
        assert!(err.to_string().contains("content_added_over_time.png"));
    }

    #[test]
    fn renders_rotated_rating_labels_to_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("content_ratings_distribution.png");
        let definition = ChartDefinition::for_view(ViewKind::Ratings);
        assert!(definition.rotate_x_labels);
        let view = View::Categories(vec![
            CategoryCount { label: "TV-MA".to_string(), count: 7 },
            CategoryCount { label: "TV-14".to_string(), count: 5 },
            CategoryCount { label: "PG-13".to_string(), count: 2 },
        ]);

        StaticChartRenderer::render(&definition, &view, &path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
    }

    #[test]
    fn renders_horizontal_bars_to_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("top_genres.png");
        let definition = ChartDefinition::for_view(ViewKind::TopGenres);
        let view = View::Categories(vec![
            CategoryCount { label: "Dramas".to_string(), count: 4 },
            CategoryCount { label: "Comedies".to_string(), count: 2 },
        ]);

        StaticChartRenderer::render(&definition, &view, &path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
    }
}
