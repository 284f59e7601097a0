//! Netflix EDA - titles cleaning & static chart generation
//!
//! Loads `netflix_titles.csv`, cleans it and writes eight descriptive charts.

pub mod charts;
pub mod config;
pub mod data;
pub mod pipeline;
pub mod report;
pub mod stats;

pub use config::Config;
