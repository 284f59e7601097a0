//! Charts module - Static chart rendering

mod definition;
mod renderer;

pub use definition::{chart_file_names, ChartDefinition, ChartStyle};
pub use renderer::{RenderError, StaticChartRenderer};
