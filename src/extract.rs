//! Field extraction from raw MEDLINE payloads.
//!
//! Extraction never fails: a record missing expected structure is emitted
//! with the absent fields omitted, and the run continues.

use crate::models::Citation;
use crate::source::record::{ArticleInfo, AuthorInfo, RawRecord};

/// Author lists longer than this collapse to the first author.
const MAX_LISTED_AUTHORS: usize = 4;

/// Map one raw record to a citation.
///
/// The abstract is only pulled out when `include_abstract` is set, since it
/// is never persisted and can be large.
pub fn citation(record: &RawRecord, include_abstract: bool) -> Citation {
    let article = record
        .citation
        .as_ref()
        .and_then(|citation| citation.article.as_ref());

    let (authors, et_al) = article
        .and_then(|a| a.author_list.as_ref())
        .map(|list| abbreviate_authors(&list.authors))
        .unwrap_or_default();

    let title = article
        .and_then(|a| a.title.as_ref())
        .and_then(|t| t.value.as_deref())
        .unwrap_or_default()
        .trim()
        .to_string();

    let journal = article.and_then(|a| a.journal.as_ref());
    let issue = journal.and_then(|j| j.issue.as_ref());

    Citation {
        authors,
        et_al,
        title,
        journal_abbrev: journal.and_then(|j| j.iso_abbreviation.clone()),
        volume: issue.and_then(|i| i.volume.clone()),
        issue: issue.and_then(|i| i.issue.clone()),
        pages: article
            .and_then(|a| a.pagination.as_ref())
            .and_then(|p| p.medline_pgn.clone()),
        year: article.and_then(extract_year),
        identifier_link: article.and_then(identifier_link),
        abstract_text: if include_abstract {
            article.and_then(abstract_text)
        } else {
            None
        },
    }
}

/// Apply the abbreviation rule: up to [`MAX_LISTED_AUTHORS`] authors are all
/// listed; longer lists collapse to the first author with the flag set.
fn abbreviate_authors(authors: &[AuthorInfo]) -> (Vec<String>, bool) {
    if authors.len() <= MAX_LISTED_AUTHORS {
        (authors.iter().filter_map(format_author).collect(), false)
    } else {
        (
            authors.iter().take(1).filter_map(format_author).collect(),
            true,
        )
    }
}

/// "LastName Initials", or a collective name verbatim. Entries with neither
/// a last name nor a collective name are skipped.
fn format_author(author: &AuthorInfo) -> Option<String> {
    if let Some(collective) = author.collective_name.as_deref() {
        let collective = collective.trim();
        if !collective.is_empty() {
            return Some(collective.to_string());
        }
    }

    let last = author
        .last_name
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())?;

    let initials = match author
        .initials
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
    {
        Some(initials) => initials.to_string(),
        None => derive_initials(author.fore_name.as_deref().unwrap_or_default()),
    };

    if initials.is_empty() {
        Some(last.to_string())
    } else {
        Some(format!("{} {}", last, initials))
    }
}

/// Fall back to the forename when the record has no `<Initials>` element:
/// "Anna B" becomes "AB".
fn derive_initials(fore_name: &str) -> String {
    fore_name
        .split_whitespace()
        .filter_map(|part| part.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Electronic article date first, then the journal issue date, then a
/// leading year in the free-form MEDLINE date.
fn extract_year(article: &ArticleInfo) -> Option<String> {
    if let Some(year) = article.article_dates.first().and_then(|d| d.year.as_deref()) {
        return Some(year.to_string());
    }

    let pub_date = article.journal.as_ref()?.issue.as_ref()?.pub_date.as_ref()?;
    if let Some(year) = pub_date.year.as_deref() {
        return Some(year.to_string());
    }
    pub_date.medline_date.as_deref().and_then(leading_year)
}

fn leading_year(date: &str) -> Option<String> {
    let digits: String = date.chars().take_while(char::is_ascii_digit).collect();
    (digits.len() == 4).then_some(digits)
}

/// A resolvable URL for the first DOI-type electronic location identifier.
fn identifier_link(article: &ArticleInfo) -> Option<String> {
    article
        .elocation_ids
        .iter()
        .find(|e| e.id_type.as_deref() == Some("doi"))
        .and_then(|e| e.value.as_deref())
        .map(|doi| format!("https://doi.org/{}", doi.trim()))
}

/// All abstract sections joined with a single space.
fn abstract_text(article: &ArticleInfo) -> Option<String> {
    let joined = article
        .abstract_info
        .as_ref()?
        .sections
        .iter()
        .filter_map(|section| section.text.as_deref())
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    (!joined.is_empty()).then_some(joined)
}
