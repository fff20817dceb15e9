//! Tab-separated evidence report: one row per (relation, evidence pair).

use std::collections::{HashMap, HashSet};
use std::io::Write;

use causeway_core::errors::ReportError;
use causeway_core::{ChangeDetector, ExperimentData, Relation};

use crate::ledger::EvidencePair;

pub const RELATION_COLUMNS: &str = "Source\tRelation\tTarget\tSites\t";
pub const CORRELATION_COLUMNS: &str = "Source data ID\tTarget data ID\tCorrelation\tCorrelation pval";
pub const CHANGE_COLUMNS: &str =
    "Source data ID\tSource change\tSource change pval\tTarget data ID\tTarget change\tTarget change pval";

/// Write the evidence report. Correlation columns are used when the detector
/// is correlation-based, per-datum change columns otherwise.
///
/// Rows are sorted so output is stable. Returns the number of rows; writes
/// nothing, not even the header, when there are none.
pub fn write_report<W: Write>(
    writer: &mut W,
    evidence: &HashMap<Relation, HashSet<EvidencePair>>,
    detector: &dyn ChangeDetector,
) -> Result<usize, ReportError> {
    let mut rows: Vec<(&Relation, &EvidencePair)> = evidence
        .iter()
        .flat_map(|(rel, pairs)| pairs.iter().map(move |pair| (rel, pair)))
        .collect();
    if rows.is_empty() {
        return Ok(0);
    }
    rows.sort_by_cached_key(|&(rel, pair)| row_key(rel, pair));

    let correlation = detector.as_correlation();
    let value_columns = if correlation.is_some() {
        CORRELATION_COLUMNS
    } else {
        CHANGE_COLUMNS
    };
    writeln!(writer, "{RELATION_COLUMNS}{value_columns}")?;

    for (rel, pair) in &rows {
        write!(
            writer,
            "{}\t{}\t{}\t{}\t",
            rel.source_symbol(),
            rel.type_name(),
            rel.target_symbol(),
            rel.sites_in_string()
        )?;

        match correlation {
            Some(det) => {
                let corr = det.correlation(&pair.source, &pair.target);
                writeln!(
                    writer,
                    "{}\t{}\t{}\t{}",
                    pair.source.id, pair.target.id, corr.value, corr.p_value
                )?;
            }
            None => {
                writeln!(writer, "{}\t{}", change_cells(&pair.source), change_cells(&pair.target))?;
            }
        }
    }
    Ok(rows.len())
}

/// `id \t change \t pval`, with an empty p-value when none was assigned.
fn change_cells(datum: &ExperimentData) -> String {
    let p_value = datum
        .significance
        .map(|p| p.to_string())
        .unwrap_or_default();
    format!("{}\t{}\t{}", datum.id, datum.change_value, p_value)
}

type RowKey<'a> = (&'a str, &'static str, &'a str, String, &'a str, &'a str);

fn row_key<'a>(rel: &'a Relation, pair: &'a EvidencePair) -> RowKey<'a> {
    (
        rel.source_symbol(),
        rel.type_name(),
        rel.target_symbol(),
        rel.sites_in_string(),
        pair.source.id.as_str(),
        pair.target.id.as_str(),
    )
}
