//! Mock source for testing purposes.

use async_trait::async_trait;

use crate::source::record::{
    ArticleInfo, AuthorInfo, AuthorList, MedlineCitation, RawRecord, TextElement,
};
use crate::source::{Source, SourceError};

/// A mock source serving a fixed, ordered set of records from memory.
#[derive(Debug, Default)]
pub struct MockSource {
    records: Vec<(String, RawRecord)>,
    fail_search: bool,
}

impl MockSource {
    /// Create an empty mock source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record under the given identifier.
    pub fn push(&mut self, id: impl Into<String>, record: RawRecord) {
        self.records.push((id.into(), record));
    }

    /// Make every search fail with a network error.
    pub fn fail_searches(&mut self) {
        self.fail_search = true;
    }
}

#[async_trait]
impl Source for MockSource {
    fn id(&self) -> &str {
        "mock"
    }

    fn name(&self) -> &str {
        "Mock Source"
    }

    async fn search(&self, _author: &str, max: usize) -> Result<Vec<String>, SourceError> {
        if self.fail_search {
            return Err(SourceError::Network("mock source offline".to_string()));
        }
        Ok(self
            .records
            .iter()
            .take(max)
            .map(|(id, _)| id.clone())
            .collect())
    }

    async fn fetch(&self, id: &str) -> Result<RawRecord, SourceError> {
        self.records
            .iter()
            .find(|(record_id, _)| record_id == id)
            .map(|(_, record)| record.clone())
            .ok_or_else(|| SourceError::NotFound(format!("no record for id {}", id)))
    }
}

/// Build a minimal record with a title and ("LastName", "Initials") author
/// pairs; callers mutate the article for anything richer.
pub fn make_record(title: &str, authors: &[(&str, &str)]) -> RawRecord {
    RawRecord {
        citation: Some(MedlineCitation {
            article: Some(ArticleInfo {
                title: Some(TextElement::new(title)),
                author_list: Some(AuthorList {
                    authors: authors
                        .iter()
                        .map(|(last, initials)| AuthorInfo {
                            last_name: Some((*last).to_string()),
                            initials: Some((*initials).to_string()),
                            ..AuthorInfo::default()
                        })
                        .collect(),
                }),
                ..ArticleInfo::default()
            }),
            ..MedlineCitation::default()
        }),
    }
}
