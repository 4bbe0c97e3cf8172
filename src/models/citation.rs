//! Citation model representing one normalized publication.

use serde::{Deserialize, Serialize};

/// One publication, normalized for the site's data file.
///
/// Fields that are sometimes missing from PubMed payloads are optional so the
/// serialized form can omit them entirely rather than carry empty strings. A
/// record is immutable once built; each run produces a fresh sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    /// "Last Initials" per author; collapsed to the first author when the
    /// record lists more than four.
    pub authors: Vec<String>,

    /// Set when `authors` was collapsed. Display-only, never serialized.
    #[serde(skip)]
    pub et_al: bool,

    /// Article title, trimmed. Empty when the record lacks one.
    pub title: String,

    /// ISO journal abbreviation.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub journal_abbrev: Option<String>,

    /// Journal issue volume.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub volume: Option<String>,

    /// Journal issue number.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub issue: Option<String>,

    /// MEDLINE pagination, e.g. "1021-9".
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub pages: Option<String>,

    /// Publication year.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub year: Option<String>,

    /// Resolvable DOI link, present only when the record carries one.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub identifier_link: Option<String>,

    /// Abstract text, populated in verbose mode only. Display-only, never
    /// serialized.
    #[serde(skip)]
    pub abstract_text: Option<String>,
}

impl Citation {
    /// Create a citation with the given title and no other fields.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// The authors joined for display, with the "et al." marker when the
    /// list was collapsed.
    pub fn author_line(&self) -> String {
        let joined = self.authors.join(", ");
        if self.et_al {
            format!("{} et al.", joined)
        } else {
            joined
        }
    }

    /// Whether the record carries a resolvable external identifier.
    pub fn has_identifier(&self) -> bool {
        self.identifier_link.is_some()
    }
}
