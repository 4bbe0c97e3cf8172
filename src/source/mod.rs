//! The bibliographic query layer.
//!
//! This module defines the narrow [`Source`] trait the pipeline depends on:
//! search an author for record identifiers, then resolve each identifier to a
//! raw record payload. Keeping the seam this small lets tests swap the live
//! E-utilities client for [`MockSource`] without a network dependency.

pub mod mock;
mod pubmed;
pub mod record;

pub use mock::MockSource;
pub use pubmed::PubMedSource;
pub use record::RawRecord;

use async_trait::async_trait;

/// The interface the pipeline expects from a bibliographic record service.
#[async_trait]
pub trait Source: Send + Sync + std::fmt::Debug {
    /// Unique identifier for this source (e.g., "pubmed")
    fn id(&self) -> &str;

    /// Human-readable name of this source
    fn name(&self) -> &str;

    /// Return up to `max` record identifiers matching the author, in the
    /// order the service reports them.
    async fn search(&self, author: &str, max: usize) -> Result<Vec<String>, SourceError>;

    /// Resolve one record identifier to its full payload.
    async fn fetch(&self, id: &str) -> Result<RawRecord, SourceError>;
}

/// Errors that can occur when querying a source.
///
/// All of these are fatal to the run: failures are surfaced to the caller
/// without retry.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Network or HTTP error
    #[error("Network error: {0}")]
    Network(String),

    /// Parsing error in a service response
    #[error("Parse error: {0}")]
    Parse(String),

    /// Invalid request parameters
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Record not found
    #[error("Record not found: {0}")]
    NotFound(String),

    /// API error from the source
    #[error("API error: {0}")]
    Api(String),
}

impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        SourceError::Network(err.to_string())
    }
}

impl From<quick_xml::DeError> for SourceError {
    fn from(err: quick_xml::DeError) -> Self {
        SourceError::Parse(format!("XML: {}", err))
    }
}
