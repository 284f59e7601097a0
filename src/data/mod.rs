//! Data module - CSV loading and cleaning

mod cleaner;
mod loader;
mod title;

pub use cleaner::{CleanError, DataCleaner};
pub use loader::{DataLoader, LoaderError, REQUIRED_COLUMNS};
pub use title::{titles_to_dataframe, ContentType, RawTitle, Title, UNKNOWN};
