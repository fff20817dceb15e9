use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::data::DataType;
use crate::sign::Polarity;

/// Causality search configuration. Fixed for the duration of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Whether to look for explanations or contradictions.
    pub polarity: Polarity,
    /// Phospho-affecting relations must name a site observed in the data.
    pub force_site_matching: bool,
    /// Largest residue offset still counted as the same site. 0 is exact.
    pub site_proximity_threshold: u32,
    /// Collect source data whose unknown effect blocked a decision.
    pub collect_data_with_missing_effect: bool,
    /// Record which data and data pairs supported each accepted relation.
    pub collect_data_used_for_inference: bool,
    /// Only activity data may sit upstream of an expression relation.
    pub mandate_activity_data_upstream_of_expression: bool,
    /// Keep only the strongest changing total protein datum as activity evidence.
    pub use_strongest_proteomics_data_for_activity: bool,
    /// Data types that indicate a change in a gene's activity.
    pub general_activity_indicators: BTreeSet<DataType>,
    /// Data types counted as expression change. `None` means total protein only.
    pub expression_evidence: Option<Vec<DataType>>,
}

impl SearchConfig {
    /// Defaults with the given polarity.
    pub fn with_polarity(polarity: Polarity) -> Self {
        Self {
            polarity,
            ..Self::default()
        }
    }

    /// Expression evidence types in effect, falling back to the default.
    pub fn expression_evidence_types(&self) -> &[DataType] {
        match &self.expression_evidence {
            Some(types) => types.as_slice(),
            None => defaults::DEFAULT_EXPRESSION_EVIDENCE,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            polarity: Polarity::Causal,
            force_site_matching: defaults::DEFAULT_FORCE_SITE_MATCHING,
            site_proximity_threshold: defaults::DEFAULT_SITE_PROXIMITY_THRESHOLD,
            collect_data_with_missing_effect: defaults::DEFAULT_COLLECT_DATA_WITH_MISSING_EFFECT,
            collect_data_used_for_inference: defaults::DEFAULT_COLLECT_DATA_USED_FOR_INFERENCE,
            mandate_activity_data_upstream_of_expression:
                defaults::DEFAULT_MANDATE_ACTIVITY_UPSTREAM_OF_EXPRESSION,
            use_strongest_proteomics_data_for_activity:
                defaults::DEFAULT_USE_STRONGEST_PROTEOMICS_FOR_ACTIVITY,
            general_activity_indicators: defaults::DEFAULT_GENERAL_ACTIVITY_INDICATORS
                .into_iter()
                .collect(),
            expression_evidence: None,
        }
    }
}
