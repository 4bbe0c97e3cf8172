//! End-to-end pipeline tests over the in-memory mock source.

use std::collections::BTreeSet;
use std::fs;

use pubcite::config::RunConfig;
use pubcite::models::Citation;
use pubcite::output::{self, display, yaml};
use pubcite::pipeline::collect_citations;
use pubcite::source::mock::{make_record, MockSource};
use pubcite::source::record::{
    AbstractInfo, AbstractSection, ELocationId, JournalInfo, JournalIssue, PubDate,
};
use pubcite::source::SourceError;

fn config(max: usize) -> RunConfig {
    RunConfig::new("someone@example.com", "Smith AB", max)
}

/// A two-source-record mock: one full citation, one sparse.
fn seeded_source() -> MockSource {
    let mut source = MockSource::new();

    let mut full = make_record("Gene X Regulation", &[("Smith", "AB"), ("Jones", "CD")]);
    let article = full.citation.as_mut().unwrap().article.as_mut().unwrap();
    article.journal = Some(JournalInfo {
        iso_abbreviation: Some("J Mol Biol".to_string()),
        issue: Some(JournalIssue {
            volume: Some("12".to_string()),
            issue: Some("3".to_string()),
            pub_date: Some(PubDate {
                year: Some("2020".to_string()),
                medline_date: None,
            }),
        }),
    });
    article.abstract_info = Some(AbstractInfo {
        sections: vec![AbstractSection {
            label: None,
            text: Some("Gene X does things.".to_string()),
        }],
    });
    source.push("31452104", full);

    source.push("29276345", make_record("A Sparse Paper", &[("Brown", "EF")]));
    source
}

#[tokio::test]
async fn pipeline_preserves_source_order() {
    let source = seeded_source();
    let citations = collect_citations(&source, &config(10)).await.unwrap();

    assert_eq!(citations.len(), 2);
    assert_eq!(citations[0].title, "Gene X Regulation");
    assert_eq!(citations[1].title, "A Sparse Paper");
}

#[tokio::test]
async fn scenario_two_coauthors_without_identifier() {
    let source = seeded_source();
    let citations = collect_citations(&source, &config(10)).await.unwrap();

    let record = &citations[0];
    assert_eq!(record.authors, vec!["Smith AB", "Jones CD"]);
    assert_eq!(record.journal_abbrev.as_deref(), Some("J Mol Biol"));
    assert_eq!(record.year.as_deref(), Some("2020"));
    assert!(record.identifier_link.is_none());

    let rendered = yaml::render(&citations);
    assert!(!rendered.contains("identifier_link"));
}

#[tokio::test]
async fn author_lists_longer_than_four_collapse() {
    let mut source = MockSource::new();
    source.push(
        "1",
        make_record(
            "Crowded Paper",
            &[
                ("Smith", "AB"),
                ("Jones", "CD"),
                ("Brown", "EF"),
                ("Green", "GH"),
                ("White", "IJ"),
            ],
        ),
    );

    let citations = collect_citations(&source, &config(10)).await.unwrap();
    assert_eq!(citations[0].authors, vec!["Smith AB"]);
    assert!(citations[0].et_al);
}

#[tokio::test]
async fn max_zero_yields_empty_sequence() {
    let source = seeded_source();
    let citations = collect_citations(&source, &config(0)).await.unwrap();

    assert!(citations.is_empty());
    assert_eq!(yaml::render(&citations), "[]\n");
}

#[tokio::test]
async fn max_caps_the_record_count() {
    let source = seeded_source();
    let citations = collect_citations(&source, &config(1)).await.unwrap();

    assert_eq!(citations.len(), 1);
    assert_eq!(citations[0].title, "Gene X Regulation");
}

#[tokio::test]
async fn empty_author_is_rejected() {
    let source = seeded_source();
    let config = RunConfig::new("someone@example.com", "   ", 10);

    let result = collect_citations(&source, &config).await;
    assert!(matches!(result, Err(SourceError::InvalidRequest(_))));
}

#[tokio::test]
async fn search_failure_aborts_the_run() {
    let mut source = seeded_source();
    source.fail_searches();

    let result = collect_citations(&source, &config(10)).await;
    assert!(matches!(result, Err(SourceError::Network(_))));
}

#[tokio::test]
async fn do_not_populate_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("_data").join("papers.yml");

    let source = seeded_source();
    let config = config(10)
        .verbose(true)
        .do_not_populate(true)
        .data_file(&path);

    let citations = collect_citations(&source, &config).await.unwrap();
    output::emit(&citations, &config).unwrap();

    assert!(!path.exists());
}

#[tokio::test]
async fn populate_writes_the_data_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("_data").join("papers.yml");

    let source = seeded_source();
    let config = config(10).data_file(&path);

    let citations = collect_citations(&source, &config).await.unwrap();
    output::emit(&citations, &config).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.contains("title: 'Gene X Regulation'"));
    assert!(written.contains("title: 'A Sparse Paper'"));
}

#[tokio::test]
async fn abstract_shows_in_verbose_output_but_never_in_the_file() {
    let source = seeded_source();
    let config = config(10).verbose(true);

    let citations = collect_citations(&source, &config).await.unwrap();
    assert_eq!(
        citations[0].abstract_text.as_deref(),
        Some("Gene X does things.")
    );

    let console = display::format_record(&citations[0]);
    assert!(console.contains("abstract: Gene X does things."));

    let rendered = yaml::render(&citations);
    assert!(!rendered.contains("Gene X does things."));
}

#[tokio::test]
async fn abstract_skipped_without_verbose() {
    let source = seeded_source();
    let citations = collect_citations(&source, &config(10)).await.unwrap();
    assert!(citations[0].abstract_text.is_none());
}

/// Key set of each mapping in the rendered YAML sequence.
fn rendered_field_sets(rendered: &str) -> Vec<BTreeSet<String>> {
    let mut records: Vec<BTreeSet<String>> = Vec::new();
    for line in rendered.lines() {
        let (depth, rest) = if let Some(rest) = line.strip_prefix("- ") {
            records.push(BTreeSet::new());
            (0, rest)
        } else if let Some(rest) = line.strip_prefix("  ") {
            (1, rest)
        } else {
            continue;
        };
        // nested sequence items are values, not keys
        if depth == 1 && (rest.starts_with(' ') || rest.starts_with('-')) {
            continue;
        }
        if let Some((key, _)) = rest.split_once(':') {
            if let Some(record) = records.last_mut() {
                record.insert(key.trim().to_string());
            }
        }
    }
    records
}

/// Key set serde would persist for one citation.
fn citation_field_set(citation: &Citation) -> BTreeSet<String> {
    serde_json::to_value(citation)
        .unwrap()
        .as_object()
        .unwrap()
        .keys()
        .cloned()
        .collect()
}

#[tokio::test]
async fn round_trip_preserves_field_sets() {
    let mut source = seeded_source();

    let mut with_doi = make_record("Linked Paper", &[("Green", "GH")]);
    with_doi
        .citation
        .as_mut()
        .unwrap()
        .article
        .as_mut()
        .unwrap()
        .elocation_ids = vec![ELocationId {
        id_type: Some("doi".to_string()),
        value: Some("10.1000/x".to_string()),
    }];
    source.push("11111111", with_doi);

    let citations = collect_citations(&source, &config(10)).await.unwrap();
    let parsed = rendered_field_sets(&yaml::render(&citations));

    assert_eq!(parsed.len(), citations.len());
    for (citation, keys) in citations.iter().zip(&parsed) {
        assert_eq!(keys, &citation_field_set(citation));
    }
}
