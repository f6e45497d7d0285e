//! Shared data model and configuration for the share-of-voice analyzer.
//!
//! Holds the unified item record produced by collectors, the ordered brand
//! set, and the YAML project config with its validation pass.

pub mod brands;
pub mod config;
pub mod error;
pub mod item;

pub use brands::{BrandSet, BrandsConfig};
pub use config::{load_config, OutputConfig, ProjectConfig, SentimentConfig};
pub use error::ConfigError;
pub use item::{parse_published_at, Item};
