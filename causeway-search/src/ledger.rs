//! Per-run bookkeeping: which data supported which relation, and which data
//! lacked the effect annotation needed to decide.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use causeway_core::{ExperimentData, Relation};

/// A (source datum, target datum) pair that satisfied a relation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EvidencePair {
    pub source: Arc<ExperimentData>,
    pub target: Arc<ExperimentData>,
}

/// Bookkeeping owned by one searcher and rebuilt on every run.
///
/// Keys are always relations of the current run.
#[derive(Debug, Clone, Default)]
pub struct InferenceLedger {
    data_used: HashMap<Relation, HashSet<Arc<ExperimentData>>>,
    pairs_used: HashMap<Relation, HashSet<EvidencePair>>,
    needs_annotation: HashSet<Arc<ExperimentData>>,
}

impl InferenceLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.data_used.clear();
        self.pairs_used.clear();
        self.needs_annotation.clear();
    }

    pub fn record_pair(
        &mut self,
        relation: &Relation,
        source: &Arc<ExperimentData>,
        target: &Arc<ExperimentData>,
    ) {
        let data = self.data_used.entry(relation.clone()).or_default();
        data.insert(Arc::clone(source));
        data.insert(Arc::clone(target));

        self.pairs_used
            .entry(relation.clone())
            .or_default()
            .insert(EvidencePair {
                source: Arc::clone(source),
                target: Arc::clone(target),
            });
    }

    /// Record a phosphosite datum whose unknown effect kept a pair from
    /// being judged.
    pub fn record_missing_effect(&mut self, datum: &Arc<ExperimentData>) {
        self.needs_annotation.insert(Arc::clone(datum));
    }

    /// Drop entries for relations not in `keep`. Returns how many were dropped.
    pub fn retain_relations(&mut self, keep: &HashSet<Relation>) -> usize {
        let before = self.data_used.len();
        self.data_used.retain(|rel, _| keep.contains(rel));
        self.pairs_used.retain(|rel, _| keep.contains(rel));
        before - self.data_used.len()
    }

    /// Data used for each relation.
    pub fn inference_units(&self) -> &HashMap<Relation, HashSet<Arc<ExperimentData>>> {
        &self.data_used
    }

    /// Evidence pairs for each relation.
    pub fn evidence_pairs(&self) -> &HashMap<Relation, HashSet<EvidencePair>> {
        &self.pairs_used
    }

    /// All data used, across relations.
    pub fn data_used(&self) -> HashSet<Arc<ExperimentData>> {
        self.data_used.values().flatten().cloned().collect()
    }

    /// All evidence pairs, across relations.
    pub fn pairs_used(&self) -> HashSet<EvidencePair> {
        self.pairs_used.values().flatten().cloned().collect()
    }

    pub fn needs_annotation(&self) -> &HashSet<Arc<ExperimentData>> {
        &self.needs_annotation
    }

    pub fn relation_count(&self) -> usize {
        self.pairs_used.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data_used.is_empty() && self.pairs_used.is_empty() && self.needs_annotation.is_empty()
    }
}
