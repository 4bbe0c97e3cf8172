//! # pubcite
//!
//! Query PubMed for all publications by a named author and populate the YAML
//! data file of a Jekyll-style static site.
//!
//! ## Architecture
//!
//! The library is a linear pipeline organized into several modules:
//!
//! - [`source`]: the PubMed E-utilities query layer behind a mockable trait
//! - [`extract`]: per-record field extraction with fallback policies
//! - [`models`]: the normalized [`Citation`] record
//! - [`output`]: YAML serialization and verbose console display
//! - [`pipeline`]: the run loop tying search, fetch and extraction together
//! - [`config`]: the per-run configuration passed into the pipeline

pub mod config;
pub mod extract;
pub mod models;
pub mod output;
pub mod pipeline;
pub mod source;
pub mod utils;

// Re-export commonly used types
pub use config::RunConfig;
pub use models::Citation;
pub use source::{PubMedSource, Source};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
