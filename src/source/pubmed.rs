//! PubMed record source backed by the NCBI E-utilities API.

use async_trait::async_trait;
use quick_xml::de::from_str;
use serde::Deserialize;

use crate::source::record::RawRecord;
use crate::source::{Source, SourceError};
use crate::utils::HttpClient;

/// E-utilities API base URL
const EUTILS_BASE_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils";

/// Tool name sent with every request, per E-utilities etiquette
const TOOL_NAME: &str = env!("CARGO_PKG_NAME");

/// PubMed record source
///
/// Uses the NCBI E-utilities API: `esearch` to resolve an author to PMIDs,
/// `efetch` to resolve a PMID to its full MEDLINE record. Every request
/// carries the caller's contact email as NCBI asks.
#[derive(Debug, Clone)]
pub struct PubMedSource {
    client: HttpClient,
    base_url: String,
    email: String,
}

impl PubMedSource {
    /// Create a source talking to the live E-utilities endpoint.
    pub fn new(email: impl Into<String>) -> Self {
        Self::with_base_url(email, EUTILS_BASE_URL)
    }

    /// Create a source with a custom base URL (for testing).
    pub fn with_base_url(email: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: HttpClient::new(),
            base_url: base_url.into(),
            email: email.into(),
        }
    }

    /// Build the `esearch` URL for an author query.
    fn build_search_url(&self, author: &str, max: usize) -> String {
        format!(
            "{}/esearch.fcgi?db=pubmed&term={}&retmax={}&retmode=xml&tool={}&email={}",
            self.base_url,
            urlencoding::encode(&format!("{}[Author]", author)),
            max,
            TOOL_NAME,
            urlencoding::encode(&self.email),
        )
    }

    /// Build the `efetch` URL for one record identifier.
    fn build_fetch_url(&self, id: &str) -> String {
        format!(
            "{}/efetch.fcgi?db=pubmed&id={}&retmode=xml&tool={}&email={}",
            self.base_url,
            urlencoding::encode(id),
            TOOL_NAME,
            urlencoding::encode(&self.email),
        )
    }

    /// Parse an `esearch` response into the ordered identifier list.
    fn parse_search_response(xml: &str) -> Result<Vec<String>, SourceError> {
        #[derive(Debug, Deserialize)]
        struct ESearchResult {
            #[serde(rename = "IdList", default)]
            id_list: IdList,
        }

        #[derive(Debug, Default, Deserialize)]
        struct IdList {
            #[serde(rename = "Id", default)]
            ids: Vec<String>,
        }

        let result: ESearchResult = from_str(xml)
            .map_err(|e| SourceError::Parse(format!("Failed to parse PubMed search XML: {}", e)))?;

        Ok(result.id_list.ids)
    }

    /// Parse an `efetch` response into its records.
    fn parse_fetch_response(xml: &str) -> Result<Vec<RawRecord>, SourceError> {
        #[derive(Debug, Deserialize)]
        struct PubmedArticleSet {
            #[serde(rename = "PubmedArticle", default)]
            articles: Vec<RawRecord>,
        }

        let result: PubmedArticleSet = from_str(xml)
            .map_err(|e| SourceError::Parse(format!("Failed to parse PubMed fetch XML: {}", e)))?;

        Ok(result.articles)
    }

    /// Issue one GET and return the response body.
    async fn get_text(&self, url: &str) -> Result<String, SourceError> {
        tracing::debug!(url = %url, "requesting E-utilities");

        let response = self
            .client
            .client()
            .get(url)
            .send()
            .await
            .map_err(|e| SourceError::Network(format!("Failed to reach PubMed: {}", e)))?;

        if !response.status().is_success() {
            return Err(SourceError::Api(format!(
                "PubMed API returned status: {}",
                response.status()
            )));
        }

        response
            .text()
            .await
            .map_err(|e| SourceError::Network(format!("Failed to read response: {}", e)))
    }
}

#[async_trait]
impl Source for PubMedSource {
    fn id(&self) -> &str {
        "pubmed"
    }

    fn name(&self) -> &str {
        "PubMed"
    }

    async fn search(&self, author: &str, max: usize) -> Result<Vec<String>, SourceError> {
        let url = self.build_search_url(author, max);
        let xml = self.get_text(&url).await?;
        Self::parse_search_response(&xml)
    }

    async fn fetch(&self, id: &str) -> Result<RawRecord, SourceError> {
        let url = self.build_fetch_url(id);
        let xml = self.get_text(&url).await?;

        let mut records = Self::parse_fetch_response(&xml)?;
        if records.is_empty() {
            return Err(SourceError::NotFound(format!(
                "PubMed returned no record for id {}",
                id
            )));
        }
        Ok(records.remove(0))
    }
}
