mod config;
mod error;

pub use config::{CollectionConfig, DataSource};
pub use error::{CollectionError, ErrorEntry, Result};
