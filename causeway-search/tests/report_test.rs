mod common;

use std::collections::HashSet;
use std::sync::Arc;

use causeway_core::errors::ReportError;
use causeway_core::{CausewayError, ExperimentData, Polarity, ProteinSite, RelationType, Sign};
use causeway_search::report::{CHANGE_COLUMNS, CORRELATION_COLUMNS, RELATION_COLUMNS};
use causeway_search::{CausalitySearcher, ComparisonDetector, PearsonDetector};

use common::*;

fn render(searcher: &CausalitySearcher) -> String {
    let mut out: Vec<u8> = Vec::new();
    searcher.write_report(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn change_report_lists_each_evidence_pair() {
    let a = gene("A", vec![ExperimentData::activity("a1", "A").with_change(1.0)]);
    let b = gene(
        "B",
        vec![ExperimentData::protein("b1", "B")
            .with_change(2.0)
            .with_significance(0.01)],
    );
    let rel = relation(&a, &b, RelationType::AffectsTotalProtein, Sign::Positive);

    let mut cs = CausalitySearcher::new(Polarity::Causal, Arc::new(ComparisonDetector::default()));
    cs.run(&set([rel]));

    let report = render(&cs);
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], format!("{RELATION_COLUMNS}{CHANGE_COLUMNS}"));
    assert_eq!(lines[1], "A\tupregulates-expression\tB\t\ta1\t1\t\tb1\t2\t0.01");
}

#[test]
fn correlation_report_uses_correlation_columns() {
    let a = gene(
        "A",
        vec![ExperimentData::activity("a1", "A").with_values(vec![1.0, 2.0, 3.0, 4.0])],
    );
    let b = gene(
        "B",
        vec![ExperimentData::protein("b1", "B").with_values(vec![2.0, 4.0, 6.0, 8.0])],
    );
    let rel = relation(&a, &b, RelationType::AffectsTotalProtein, Sign::Positive);

    let mut cs = CausalitySearcher::new(Polarity::Causal, Arc::new(PearsonDetector::default()));
    assert!(cs.run(&set([rel.clone()])).contains(&rel));

    let report = render(&cs);
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines[0], format!("{RELATION_COLUMNS}{CORRELATION_COLUMNS}"));
    assert_eq!(lines[1], "A\tupregulates-expression\tB\t\ta1\tb1\t1\t0");
}

#[test]
fn report_rows_are_sorted_and_carry_sites() {
    let a = gene("A", vec![ExperimentData::activity("a1", "A")]);
    let b = gene(
        "B",
        vec![
            ExperimentData::phospho("b_s2", "B", vec![phospho_site("B", 'S', 2)], Sign::Positive),
            ExperimentData::phospho("b_s1", "B", vec![phospho_site("B", 'S', 1)], Sign::Positive),
        ],
    );
    let rel = relation(&a, &b, RelationType::AffectsPhosphoSite, Sign::Negative)
        .with_sites([ProteinSite::new('S', 2), ProteinSite::new('S', 1)]);

    let mut cs = CausalitySearcher::new(Polarity::Causal, Arc::new(FixedDetector(Sign::Negative)));
    cs.run(&set([rel]));

    let report = render(&cs);
    let rows: Vec<&str> = report.lines().skip(1).collect();
    assert_eq!(rows.len(), 2);
    assert!(rows[0].starts_with("A\tdephosphorylates\tB\tS1;S2\ta1\t"));
    assert!(rows[0].contains("\tb_s1\t"));
    assert!(rows[1].contains("\tb_s2\t"));
}

#[test]
fn empty_evidence_writes_nothing() {
    let mut cs = CausalitySearcher::new(Polarity::Causal, Arc::new(FixedDetector(Sign::Zero)));
    cs.run(&HashSet::new());

    let mut out: Vec<u8> = Vec::new();
    assert_eq!(cs.write_report(&mut out).unwrap(), 0);
    assert!(out.is_empty());
}

#[test]
fn write_results_skips_file_without_evidence() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("causative.tsv");

    let cs = CausalitySearcher::new(Polarity::Causal, Arc::new(FixedDetector(Sign::Positive)));
    assert!(!cs.write_results(&path).unwrap());
    assert!(!path.exists());
}

#[test]
fn write_results_creates_report_file() {
    let a = gene("A", vec![ExperimentData::activity("a1", "A")]);
    let b = gene("B", vec![ExperimentData::activity("b1", "B")]);
    let rel = relation(&a, &b, RelationType::AffectsGtpaseActivity, Sign::Positive);

    let mut cs = CausalitySearcher::new(Polarity::Causal, Arc::new(FixedDetector(Sign::Positive)));
    cs.run(&set([rel]));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("causative.tsv");
    assert!(cs.write_results(&path).unwrap());

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, render(&cs));
    assert!(written.contains("\tactivates-gtpase\t"));
}

#[test]
fn report_requires_evidence_collection() {
    let cs = CausalitySearcher::new(Polarity::Causal, Arc::new(FixedDetector(Sign::Positive)));
    let fork = cs.fork();

    let err = fork.write_report(&mut Vec::<u8>::new()).unwrap_err();
    assert!(matches!(
        err,
        CausewayError::Report(ReportError::EvidenceNotCollected)
    ));

    let dir = tempfile::tempdir().unwrap();
    assert!(fork.write_results(dir.path().join("x.tsv")).is_err());
}
