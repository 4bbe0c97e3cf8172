//! The raw record payload returned by the service for one identifier.
//!
//! The structs mirror the MEDLINE citation XML closely enough to deserialize
//! with quick-xml; every field the extraction stage does not read is simply
//! not modeled. All fields are optional: sparse payloads are normal, not an
//! error.

use serde::Deserialize;

/// One `<PubmedArticle>` element, prior to extraction.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "MedlineCitation")]
    pub citation: Option<MedlineCitation>,
}

/// The `<MedlineCitation>` wrapper around the article proper.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MedlineCitation {
    #[serde(rename = "PMID")]
    pub pmid: Option<TextElement>,

    #[serde(rename = "Article")]
    pub article: Option<ArticleInfo>,
}

/// The `<Article>` element carrying every field the pipeline extracts.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArticleInfo {
    #[serde(rename = "Journal")]
    pub journal: Option<JournalInfo>,

    #[serde(rename = "ArticleTitle")]
    pub title: Option<TextElement>,

    #[serde(rename = "Pagination")]
    pub pagination: Option<Pagination>,

    /// Electronic location identifiers; a DOI lives here when present.
    #[serde(rename = "ELocationID", default)]
    pub elocation_ids: Vec<ELocationId>,

    #[serde(rename = "Abstract")]
    pub abstract_info: Option<AbstractInfo>,

    #[serde(rename = "AuthorList")]
    pub author_list: Option<AuthorList>,

    /// Electronic publication dates, preferred over the journal issue date.
    #[serde(rename = "ArticleDate", default)]
    pub article_dates: Vec<ArticleDate>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct JournalInfo {
    #[serde(rename = "ISOAbbreviation")]
    pub iso_abbreviation: Option<String>,

    #[serde(rename = "JournalIssue")]
    pub issue: Option<JournalIssue>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct JournalIssue {
    #[serde(rename = "Volume")]
    pub volume: Option<String>,

    #[serde(rename = "Issue")]
    pub issue: Option<String>,

    #[serde(rename = "PubDate")]
    pub pub_date: Option<PubDate>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PubDate {
    #[serde(rename = "Year")]
    pub year: Option<String>,

    /// Free-form date for issues without a plain year, e.g. "2019 Nov-Dec".
    #[serde(rename = "MedlineDate")]
    pub medline_date: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Pagination {
    #[serde(rename = "MedlinePgn")]
    pub medline_pgn: Option<String>,
}

/// An `<ELocationID>` element, e.g. `<ELocationID EIdType="doi">...`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ELocationId {
    #[serde(rename = "@EIdType")]
    pub id_type: Option<String>,

    #[serde(rename = "$text")]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AbstractInfo {
    #[serde(rename = "AbstractText", default)]
    pub sections: Vec<AbstractSection>,
}

/// One `<AbstractText>` section; structured abstracts carry a label.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AbstractSection {
    #[serde(rename = "@Label")]
    pub label: Option<String>,

    #[serde(rename = "$text")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthorList {
    #[serde(rename = "Author", default)]
    pub authors: Vec<AuthorInfo>,
}

/// One `<Author>` entry. Group authorships carry a collective name instead
/// of a person's name parts.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthorInfo {
    #[serde(rename = "LastName")]
    pub last_name: Option<String>,

    #[serde(rename = "ForeName")]
    pub fore_name: Option<String>,

    #[serde(rename = "Initials")]
    pub initials: Option<String>,

    #[serde(rename = "CollectiveName")]
    pub collective_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArticleDate {
    #[serde(rename = "Year")]
    pub year: Option<String>,
}

/// Element content wrapper for MEDLINE elements that carry attributes
/// alongside their text, like `<PMID Version="1">`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TextElement {
    #[serde(rename = "$text")]
    pub value: Option<String>,
}

impl TextElement {
    /// Wrap a plain string value.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }
}
