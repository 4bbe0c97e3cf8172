//! Verbose console rendering of citation records.

use std::fmt::Write as _;

use crate::models::Citation;

/// Render one citation the way verbose mode prints it.
pub fn format_record(citation: &Citation) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "author: {}", citation.author_line());
    if let Some(year) = &citation.year {
        let _ = writeln!(out, "year: {}", year);
    }
    let _ = writeln!(out, "title: {}", citation.title);
    if let Some(journal) = journal_line(citation) {
        let _ = writeln!(out, "journal: {}", journal);
    }
    if let Some(abstract_text) = &citation.abstract_text {
        let _ = writeln!(out, "abstract: {}", abstract_text);
    }
    if let Some(link) = &citation.identifier_link {
        let _ = writeln!(out, "link: {}", link);
    }
    out
}

/// Journal abbreviation, volume, issue and pages joined the way a reference
/// list would print them, e.g. "J Mol Biol, 12, 3, 1021-9".
fn journal_line(citation: &Citation) -> Option<String> {
    let parts: Vec<&str> = [
        citation.journal_abbrev.as_deref(),
        citation.volume.as_deref(),
        citation.issue.as_deref(),
        citation.pages.as_deref(),
    ]
    .into_iter()
    .flatten()
    .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}

/// Print every record, one blank-line-separated block each.
pub fn print_records(citations: &[Citation]) {
    for citation in citations {
        println!("{}", format_record(citation));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_includes_abstract_and_et_al() {
        let citation = Citation {
            authors: vec!["Smith AB".to_string()],
            et_al: true,
            year: Some("2020".to_string()),
            journal_abbrev: Some("J Mol Biol".to_string()),
            volume: Some("12".to_string()),
            abstract_text: Some("Gene X does things.".to_string()),
            ..Citation::new("Gene X Regulation")
        };

        let text = format_record(&citation);
        assert!(text.contains("author: Smith AB et al."));
        assert!(text.contains("year: 2020"));
        assert!(text.contains("journal: J Mol Biol, 12"));
        assert!(text.contains("abstract: Gene X does things."));
        assert!(!text.contains("link:"));
    }

    #[test]
    fn test_format_omits_absent_lines() {
        let citation = Citation {
            authors: vec!["Smith AB".to_string()],
            ..Citation::new("Bare")
        };

        let text = format_record(&citation);
        assert!(text.contains("author: Smith AB"));
        assert!(text.contains("title: Bare"));
        assert!(!text.contains("year:"));
        assert!(!text.contains("journal:"));
        assert!(!text.contains("abstract:"));
    }

    #[test]
    fn test_journal_line_skips_missing_parts() {
        let citation = Citation {
            journal_abbrev: Some("J Mol Biol".to_string()),
            pages: Some("1021-9".to_string()),
            ..Citation::new("Test")
        };
        assert_eq!(journal_line(&citation).as_deref(), Some("J Mol Biol, 1021-9"));
    }
}
