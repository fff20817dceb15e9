use std::collections::HashSet;

use causeway_core::{GraphFilter, Relation};

/// Keeps relations that touch at least one gene of interest.
#[derive(Debug, Clone, Default)]
pub struct GeneFocusFilter {
    genes: HashSet<String>,
}

impl GeneFocusFilter {
    pub fn new<I, S>(genes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            genes: genes.into_iter().map(Into::into).collect(),
        }
    }

    pub fn genes(&self) -> &HashSet<String> {
        &self.genes
    }
}

impl GraphFilter for GeneFocusFilter {
    fn filter(&self, accepted: HashSet<Relation>) -> HashSet<Relation> {
        accepted
            .into_iter()
            .filter(|rel| {
                self.genes.contains(rel.source_symbol()) || self.genes.contains(rel.target_symbol())
            })
            .collect()
    }
}
