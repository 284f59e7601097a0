//! Stats module - Group-by aggregations

mod aggregator;

pub use aggregator::{
    Aggregator, CategoryCount, View, ViewKind, YearComparison, YearCount, LIST_SEPARATOR,
};
