//! Hand-rolled YAML emission for the data file.
//!
//! The file is a sequence of mappings, one per citation, in the order the
//! records were fetched. Absent fields are omitted entirely (never written
//! as null or empty) so site templates can test for key presence. The
//! abstract and the "et al." flag are display-only and never land here.

use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::Path;

use crate::models::Citation;

/// Render the citations as a YAML sequence of mappings.
pub fn render(citations: &[Citation]) -> String {
    if citations.is_empty() {
        return "[]\n".to_string();
    }

    let mut out = String::new();
    for citation in citations {
        render_citation(&mut out, citation);
    }
    out
}

fn render_citation(out: &mut String, citation: &Citation) {
    if citation.authors.is_empty() {
        let _ = writeln!(out, "- authors: []");
    } else {
        let _ = writeln!(out, "- authors:");
        for author in &citation.authors {
            let _ = writeln!(out, "    - {}", quote(author));
        }
    }
    let _ = writeln!(out, "  title: {}", quote(&citation.title));
    write_optional(out, "journal_abbrev", citation.journal_abbrev.as_deref());
    write_optional(out, "volume", citation.volume.as_deref());
    write_optional(out, "issue", citation.issue.as_deref());
    write_optional(out, "pages", citation.pages.as_deref());
    write_optional(out, "year", citation.year.as_deref());
    write_optional(out, "identifier_link", citation.identifier_link.as_deref());
}

fn write_optional(out: &mut String, key: &str, value: Option<&str>) {
    if let Some(value) = value {
        let _ = writeln!(out, "  {}: {}", key, quote(value));
    }
}

/// Single-quote a scalar, doubling embedded quotes.
fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// Write the data file, creating the parent directory when missing and
/// replacing any prior content in a single dump.
pub fn write_data_file(citations: &[Citation], path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, render(citations))
}
