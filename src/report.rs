//! Console summary of the cleaned table.

use polars::prelude::*;

/// Text blocks printed after cleaning.
pub struct SummaryReport;

impl SummaryReport {
    /// First `rows` rows as rendered by Polars.
    pub fn preview(df: &DataFrame, rows: usize) -> String {
        df.head(Some(rows)).to_string()
    }

    /// Entry count, column count and per-column non-null count and dtype.
    pub fn info(df: &DataFrame) -> String {
        let mut lines = vec![
            format!("{} entries", df.height()),
            format!("Data columns (total {} columns):", df.width()),
            format!(" #   {:<18} {:<16} Dtype", "Column", "Non-Null Count"),
            format!("---  {:<18} {:<16} -----", "------", "--------------"),
        ];
        for (i, column) in df.get_columns().iter().enumerate() {
            let non_null = column.len() - column.null_count();
            lines.push(format!(
                "{:>2}   {:<18} {:<16} {}",
                i,
                column.name().as_str(),
                format!("{non_null} non-null"),
                column.dtype()
            ));
        }
        lines.join("\n")
    }

    /// Null count of every column.
    pub fn missing_values(df: &DataFrame) -> String {
        df.get_columns()
            .iter()
            .map(|column| format!("{:<18} {}", column.name().as_str(), column.null_count()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
