//! The run loop: search for identifiers, then fetch and extract each record.

use crate::config::RunConfig;
use crate::extract;
use crate::models::Citation;
use crate::source::{Source, SourceError};

/// Collect citations for the configured author.
///
/// Records are fetched and extracted one at a time, in the order the source
/// reports them; any source failure aborts the run before output is written.
pub async fn collect_citations(
    source: &dyn Source,
    config: &RunConfig,
) -> Result<Vec<Citation>, SourceError> {
    if config.author.trim().is_empty() {
        return Err(SourceError::InvalidRequest(
            "author must not be empty".to_string(),
        ));
    }

    let ids = source.search(&config.author, config.max).await?;
    tracing::info!(count = ids.len(), source = source.name(), "matched records");

    let mut citations = Vec::with_capacity(ids.len());
    for id in &ids {
        tracing::debug!(id = %id, "fetching record");
        let record = source.fetch(id).await?;
        citations.push(extract::citation(&record, config.verbose));
    }
    Ok(citations)
}
