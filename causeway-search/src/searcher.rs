//! CausalitySearcher: matches experiment data with prior-knowledge relations
//! and detects potential causality or conflict.

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use causeway_core::errors::{CausewayResult, ReportError};
use causeway_core::{
    ChangeDetector, DataType, ExperimentData, GeneWithData, GraphFilter, Polarity, Relation,
    SearchConfig,
};

use crate::eligibility;
use crate::ledger::{EvidencePair, InferenceLedger};
use crate::report;

/// How a single (source, target) pair relates to a relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PairOutcome {
    Compatible,
    /// A phosphosite with unknown effect whose change would otherwise count.
    MissingEffect,
    Incompatible,
}

/// The causality search engine.
///
/// Configuration is fixed during a run. Bookkeeping belongs to this instance
/// only; use [`CausalitySearcher::fork`] to get an independent copy for
/// parallel work.
#[derive(Debug)]
pub struct CausalitySearcher {
    config: SearchConfig,
    /// Judges whether a source and a target datum changed together.
    detector: Arc<dyn ChangeDetector>,
    /// Applied once to the accepted relations at the end of a run.
    graph_filter: Option<Arc<dyn GraphFilter>>,
    ledger: InferenceLedger,
}

impl CausalitySearcher {
    /// Create a searcher with default settings and the given polarity.
    pub fn new(polarity: Polarity, detector: Arc<dyn ChangeDetector>) -> Self {
        Self::with_config(SearchConfig::with_polarity(polarity), detector)
    }

    pub fn with_config(config: SearchConfig, detector: Arc<dyn ChangeDetector>) -> Self {
        Self {
            config,
            detector,
            graph_filter: None,
            ledger: InferenceLedger::new(),
        }
    }

    /// Copy the configuration into a new searcher with empty bookkeeping.
    ///
    /// The copy does not collect evidence or missing-effect data; turn those
    /// back on explicitly if needed. The detector and graph filter are shared
    /// read-only.
    pub fn fork(&self) -> Self {
        let mut config = self.config.clone();
        config.collect_data_used_for_inference = false;
        config.collect_data_with_missing_effect = false;
        Self {
            config,
            detector: Arc::clone(&self.detector),
            graph_filter: self.graph_filter.clone(),
            ledger: InferenceLedger::new(),
        }
    }

    // --- Configuration ---

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn detector(&self) -> &dyn ChangeDetector {
        self.detector.as_ref()
    }

    pub fn polarity(&self) -> Polarity {
        self.config.polarity
    }

    pub fn set_polarity(&mut self, polarity: Polarity) {
        self.config.polarity = polarity;
    }

    pub fn set_force_site_matching(&mut self, force: bool) {
        self.config.force_site_matching = force;
    }

    pub fn set_site_proximity_threshold(&mut self, threshold: u32) {
        self.config.site_proximity_threshold = threshold;
    }

    pub fn set_collect_data_with_missing_effect(&mut self, collect: bool) {
        self.config.collect_data_with_missing_effect = collect;
    }

    pub fn set_collect_data_used_for_inference(&mut self, collect: bool) {
        self.config.collect_data_used_for_inference = collect;
    }

    pub fn set_mandate_activity_data_upstream_of_expression(&mut self, mandate: bool) {
        self.config.mandate_activity_data_upstream_of_expression = mandate;
    }

    pub fn set_use_strongest_proteomics_data_for_activity(&mut self, strongest: bool) {
        self.config.use_strongest_proteomics_data_for_activity = strongest;
    }

    pub fn add_general_activity_indicator(&mut self, data_type: DataType) {
        self.config.general_activity_indicators.insert(data_type);
    }

    pub fn set_expression_evidence(&mut self, types: Vec<DataType>) {
        self.config.expression_evidence = Some(types);
    }

    pub fn set_graph_filter(&mut self, filter: Option<Arc<dyn GraphFilter>>) {
        self.graph_filter = filter;
    }

    pub fn has_graph_filter(&self) -> bool {
        self.graph_filter.is_some()
    }

    pub fn graph_filter(&self) -> Option<&dyn GraphFilter> {
        self.graph_filter.as_deref()
    }

    // --- Search ---

    /// Find the relations that explain (or conflict with) the data.
    ///
    /// Bookkeeping from any previous run is discarded first. The result is
    /// always a subset of `relations`.
    #[instrument(skip_all, fields(relations = relations.len(), polarity = ?self.config.polarity))]
    pub fn run(&mut self, relations: &HashSet<Relation>) -> HashSet<Relation> {
        self.ledger.clear();

        let mut accepted: HashSet<Relation> = relations
            .iter()
            .filter(|rel| self.satisfies_criteria(rel))
            .cloned()
            .collect();

        debug!(accepted = accepted.len(), "relations matched");

        if let Some(filter) = self.graph_filter.clone() {
            let mut filtered = filter.filter(accepted.clone());

            let before = filtered.len();
            filtered.retain(|rel| accepted.contains(rel));
            if filtered.len() < before {
                warn!(
                    added = before - filtered.len(),
                    "graph filter returned relations it was not given; dropped them"
                );
            }

            let pruned = self.ledger.retain_relations(&filtered);
            debug!(
                kept = filtered.len(),
                removed = accepted.len() - filtered.len(),
                ledger_pruned = pruned,
                "graph filter applied"
            );
            accepted = filtered;
        }

        info!(
            accepted = accepted.len(),
            evidence_relations = self.ledger.relation_count(),
            needs_annotation = self.ledger.needs_annotation().len(),
            "causality search finished"
        );
        accepted
    }

    /// Whether the relation explains (or conflicts with) its data.
    pub fn satisfies_criteria(&mut self, rel: &Relation) -> bool {
        let targets = self.explainable_target_data(rel);
        if targets.is_empty() {
            return false;
        }

        let sources = self.affecting_source_data(rel);
        if sources.is_empty() {
            return false;
        }

        self.any_pair_satisfies(rel, &sources, &targets)
    }

    /// Whether both sides of the relation have eligible data, without
    /// looking at values or effects.
    pub fn has_considerable_data(&self, rel: &Relation) -> bool {
        !self.explainable_target_data(rel).is_empty()
            && !self.affecting_source_data(rel).is_empty()
    }

    /// Source data that form a satisfying pair with the given target datum.
    /// Bookkeeping is not touched.
    pub fn satisfying_source_data(
        &self,
        rel: &Relation,
        target: &Arc<ExperimentData>,
    ) -> Vec<Arc<ExperimentData>> {
        self.affecting_source_data(rel)
            .into_iter()
            .filter(|source| self.pair_outcome(rel, source, target) == PairOutcome::Compatible)
            .collect()
    }

    /// One satisfying pair is enough to accept the relation. While either
    /// kind of bookkeeping is on, every pair is still evaluated so that the
    /// bookkeeping is complete.
    fn any_pair_satisfies(
        &mut self,
        rel: &Relation,
        sources: &[Arc<ExperimentData>],
        targets: &[Arc<ExperimentData>],
    ) -> bool {
        let exhaustive = self.config.collect_data_used_for_inference
            || self.config.collect_data_with_missing_effect;
        let mut satisfied = false;

        for source in sources {
            for target in targets {
                if self.judge_pair(rel, source, target) {
                    if !exhaustive {
                        return true;
                    }
                    satisfied = true;
                }
            }
        }
        satisfied
    }

    /// Judge a pair and record the outcome in the ledger as configured.
    fn judge_pair(
        &mut self,
        rel: &Relation,
        source: &Arc<ExperimentData>,
        target: &Arc<ExperimentData>,
    ) -> bool {
        match self.pair_outcome(rel, source, target) {
            PairOutcome::Compatible => {
                if self.config.collect_data_used_for_inference {
                    self.ledger.record_pair(rel, source, target);
                }
                true
            }
            PairOutcome::MissingEffect => {
                if self.config.collect_data_with_missing_effect {
                    self.ledger.record_missing_effect(source);
                }
                false
            }
            PairOutcome::Incompatible => false,
        }
    }

    fn pair_outcome(
        &self,
        rel: &Relation,
        source: &ExperimentData,
        target: &ExperimentData,
    ) -> PairOutcome {
        let e = self.detector.change_sign(source, target) * rel.sign();

        if !e.is_zero()
            && source.effect.is_zero()
            && source.data_type() == DataType::PhosphoProtein
        {
            // Would have mattered had the site effect been known.
            return PairOutcome::MissingEffect;
        }

        if source.effect * e == self.config.polarity.target_sign() {
            PairOutcome::Compatible
        } else {
            PairOutcome::Incompatible
        }
    }

    // --- Eligibility ---

    pub fn explainable_target_data(&self, rel: &Relation) -> Vec<Arc<ExperimentData>> {
        eligibility::explainable_target_data(&self.config, rel)
    }

    pub fn affecting_source_data(&self, rel: &Relation) -> Vec<Arc<ExperimentData>> {
        eligibility::affecting_source_data(&self.config, rel)
    }

    pub fn is_phospho_target_compatible(&self, rel: &Relation, target: &ExperimentData) -> bool {
        eligibility::is_phospho_target_compatible(&self.config, rel, target)
    }

    pub fn general_activation_evidence(&self, gene: &GeneWithData) -> Vec<Arc<ExperimentData>> {
        eligibility::general_activation_evidence(&self.config, gene)
    }

    // --- Bookkeeping ---

    pub fn ledger(&self) -> &InferenceLedger {
        &self.ledger
    }

    pub fn data_needs_annotation(&self) -> &HashSet<Arc<ExperimentData>> {
        self.ledger.needs_annotation()
    }

    pub fn data_used_for_inference(&self) -> HashSet<Arc<ExperimentData>> {
        self.ledger.data_used()
    }

    pub fn pairs_used_for_inference(&self) -> HashSet<EvidencePair> {
        self.ledger.pairs_used()
    }

    pub fn inference_units(&self) -> &HashMap<Relation, HashSet<Arc<ExperimentData>>> {
        self.ledger.inference_units()
    }

    // --- Reporting ---

    /// Write the evidence report of the last run. Returns the number of rows;
    /// nothing at all is written when there is no evidence.
    pub fn write_report<W: Write>(&self, writer: &mut W) -> CausewayResult<usize> {
        if !self.config.collect_data_used_for_inference {
            return Err(ReportError::EvidenceNotCollected.into());
        }
        let rows = report::write_report(writer, self.ledger.evidence_pairs(), self.detector())?;
        Ok(rows)
    }

    /// Write the evidence report to a file. No file is created when there is
    /// no evidence; returns whether one was written.
    pub fn write_results(&self, path: impl AsRef<Path>) -> CausewayResult<bool> {
        if !self.config.collect_data_used_for_inference {
            return Err(ReportError::EvidenceNotCollected.into());
        }
        if self.ledger.evidence_pairs().is_empty() {
            return Ok(false);
        }

        let path = path.as_ref();
        let file = File::create(path).map_err(ReportError::from)?;
        let mut writer = BufWriter::new(file);
        let rows = self.write_report(&mut writer)?;
        writer.flush().map_err(ReportError::from)?;

        info!(path = %path.display(), rows, "evidence report written");
        Ok(true)
    }
}
