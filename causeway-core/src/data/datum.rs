use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::data_type::DataType;
use super::site::SiteRef;
use crate::sign::Sign;

/// Variant-specific payload of a datum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DataKind {
    Protein,
    Rna,
    PhosphoProtein { sites: Vec<SiteRef> },
    Activity,
}

impl DataKind {
    pub fn data_type(&self) -> DataType {
        match self {
            Self::Protein => DataType::Protein,
            Self::Rna => DataType::Rna,
            Self::PhosphoProtein { .. } => DataType::PhosphoProtein,
            Self::Activity => DataType::Activity,
        }
    }
}

/// One measured or annotated value attached to a gene.
///
/// Identity is the `id`: two records with the same id are the same datum,
/// whatever their values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperimentData {
    pub id: String,
    /// Symbol of the gene this datum was measured on.
    pub gene: String,
    /// What an increase of this datum does to the gene's activity.
    /// `Zero` when unknown, e.g. an unannotated phosphosite.
    pub effect: Sign,
    /// Detected change, signed. Zero when no change was called.
    pub change_value: f64,
    /// P-value of the change when the per-datum detector is a significance test.
    #[serde(default)]
    pub significance: Option<f64>,
    /// Per-sample measurements, used by correlation detectors.
    #[serde(default)]
    pub values: Vec<f64>,
    pub kind: DataKind,
}

impl ExperimentData {
    fn new(id: impl Into<String>, gene: impl Into<String>, effect: Sign, kind: DataKind) -> Self {
        Self {
            id: id.into(),
            gene: gene.into(),
            effect,
            change_value: 0.0,
            significance: None,
            values: Vec::new(),
            kind,
        }
    }

    /// Total protein abundance. Effect is positive.
    pub fn protein(id: impl Into<String>, gene: impl Into<String>) -> Self {
        Self::new(id, gene, Sign::Positive, DataKind::Protein)
    }

    /// Transcript abundance. Effect is positive.
    pub fn rna(id: impl Into<String>, gene: impl Into<String>) -> Self {
        Self::new(id, gene, Sign::Positive, DataKind::Rna)
    }

    /// Activity state. Effect is positive.
    pub fn activity(id: impl Into<String>, gene: impl Into<String>) -> Self {
        Self::new(id, gene, Sign::Positive, DataKind::Activity)
    }

    /// Phosphosite abundance with the given site effect.
    pub fn phospho(
        id: impl Into<String>,
        gene: impl Into<String>,
        sites: Vec<SiteRef>,
        effect: Sign,
    ) -> Self {
        Self::new(id, gene, effect, DataKind::PhosphoProtein { sites })
    }

    pub fn with_change(mut self, change_value: f64) -> Self {
        self.change_value = change_value;
        self
    }

    pub fn with_effect(mut self, effect: Sign) -> Self {
        self.effect = effect;
        self
    }

    pub fn with_significance(mut self, p_value: f64) -> Self {
        self.significance = Some(p_value);
        self
    }

    pub fn with_values(mut self, values: Vec<f64>) -> Self {
        self.values = values;
        self
    }

    pub fn data_type(&self) -> DataType {
        self.kind.data_type()
    }

    /// Observed sites. Empty for anything but phosphoprotein data.
    pub fn sites(&self) -> &[SiteRef] {
        match &self.kind {
            DataKind::PhosphoProtein { sites } => sites,
            _ => &[],
        }
    }

    /// Direction of the detected change.
    pub fn change_sign(&self) -> Sign {
        Sign::from_value(self.change_value)
    }

    pub fn is_total_protein(&self) -> bool {
        matches!(self.kind, DataKind::Protein)
    }
}

impl PartialEq for ExperimentData {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ExperimentData {}

impl Hash for ExperimentData {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl std::fmt::Display for ExperimentData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.id)
    }
}
