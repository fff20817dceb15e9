use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use super::data_type::DataType;
use super::datum::ExperimentData;
use crate::errors::ModelError;

/// A gene and the experiment data measured on it, grouped by data type.
///
/// Data keep their insertion order within a type so that eligibility and
/// tie-breaking are reproducible.
#[derive(Debug, Clone)]
pub struct GeneWithData {
    symbol: String,
    data: HashMap<DataType, Vec<Arc<ExperimentData>>>,
}

impl GeneWithData {
    pub fn new(symbol: impl Into<String>) -> Result<Self, ModelError> {
        let symbol = symbol.into();
        if symbol.trim().is_empty() {
            return Err(ModelError::EmptyGeneSymbol);
        }
        Ok(Self {
            symbol,
            data: HashMap::new(),
        })
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Add a datum measured on this gene.
    pub fn add(&mut self, datum: ExperimentData) -> Result<Arc<ExperimentData>, ModelError> {
        if datum.gene != self.symbol {
            return Err(ModelError::ForeignDatum {
                id: datum.id,
                datum_gene: datum.gene,
                gene: self.symbol.clone(),
            });
        }
        let datum = Arc::new(datum);
        self.attach(Arc::clone(&datum));
        Ok(datum)
    }

    /// Attach an existing datum, possibly shared with other genes (a peptide
    /// mapping to paralogs). A datum already attached is not added twice.
    pub fn attach(&mut self, datum: Arc<ExperimentData>) {
        let list = self.data.entry(datum.data_type()).or_default();
        if !list.iter().any(|d| d.id == datum.id) {
            list.push(datum);
        }
    }

    /// Data of one type, in insertion order.
    pub fn data(&self, data_type: DataType) -> &[Arc<ExperimentData>] {
        self.data.get(&data_type).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Data of several types, in argument order, without duplicates.
    pub fn data_of(&self, types: &[DataType]) -> Vec<Arc<ExperimentData>> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for data_type in types {
            for datum in self.data(*data_type) {
                if seen.insert(datum.id.as_str()) {
                    out.push(Arc::clone(datum));
                }
            }
        }
        out
    }

    pub fn has_data(&self, data_type: DataType) -> bool {
        !self.data(data_type).is_empty()
    }

    /// Number of data across all types.
    pub fn len(&self) -> usize {
        self.data.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
