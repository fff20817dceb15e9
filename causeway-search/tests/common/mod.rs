//! Shared builders for causeway-search integration tests.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use causeway_core::{
    ChangeDetector, ExperimentData, GeneWithData, ProteinSite, Relation, RelationType, Sign,
    SiteRef,
};

/// Reports the same co-change for every pair.
#[derive(Debug, Clone, Copy)]
pub struct FixedDetector(pub Sign);

impl ChangeDetector for FixedDetector {
    fn change_sign(&self, _source: &ExperimentData, _target: &ExperimentData) -> Sign {
        self.0
    }
}

/// Reports a co-change per (source id, target id), zero for unknown pairs.
#[derive(Debug, Clone, Default)]
pub struct TableDetector(pub HashMap<(String, String), Sign>);

impl TableDetector {
    pub fn with(mut self, source: &str, target: &str, sign: Sign) -> Self {
        self.0.insert((source.to_string(), target.to_string()), sign);
        self
    }
}

impl ChangeDetector for TableDetector {
    fn change_sign(&self, source: &ExperimentData, target: &ExperimentData) -> Sign {
        self.0
            .get(&(source.id.clone(), target.id.clone()))
            .copied()
            .unwrap_or(Sign::Zero)
    }
}

pub fn gene(symbol: &str, data: Vec<ExperimentData>) -> Arc<GeneWithData> {
    let mut g = GeneWithData::new(symbol).unwrap();
    for datum in data {
        g.add(datum).unwrap();
    }
    Arc::new(g)
}

pub fn relation(
    source: &Arc<GeneWithData>,
    target: &Arc<GeneWithData>,
    rel_type: RelationType,
    sign: Sign,
) -> Relation {
    Relation::new(Arc::clone(source), Arc::clone(target), rel_type, sign).unwrap()
}

pub fn phospho_site(gene: &str, residue: char, position: u32) -> SiteRef {
    SiteRef::new(gene, ProteinSite::new(residue, position))
}

pub fn set(relations: impl IntoIterator<Item = Relation>) -> HashSet<Relation> {
    relations.into_iter().collect()
}

pub fn ids<'a>(data: impl IntoIterator<Item = &'a Arc<ExperimentData>>) -> Vec<String> {
    let mut ids: Vec<String> = data.into_iter().map(|d| d.id.clone()).collect();
    ids.sort();
    ids
}

/// A small random world for property tests: six genes, each datum shape is
/// (gene, kind, change, effect, site position), each relation shape is
/// (source, target, type, activating, site position).
pub type DatumShape = (usize, u8, i8, i8, u32);
pub type RelationShape = (usize, usize, u8, bool, u32);

pub const WORLD_GENES: usize = 6;

pub fn build_world(data: &[DatumShape], relations: &[RelationShape]) -> HashSet<Relation> {
    let mut genes: Vec<GeneWithData> = (0..WORLD_GENES)
        .map(|i| GeneWithData::new(format!("G{i}")).unwrap())
        .collect();

    for (i, &(g, kind, change, effect, pos)) in data.iter().enumerate() {
        let g = g % WORLD_GENES;
        let symbol = format!("G{g}");
        let id = format!("d{i}");
        let effect = Sign::from_i8(effect.clamp(-1, 1)).unwrap();
        let datum = match kind % 4 {
            0 => ExperimentData::protein(id, &symbol).with_effect(effect),
            1 => ExperimentData::phospho(
                id,
                &symbol,
                vec![phospho_site(&symbol, 'S', pos)],
                effect,
            ),
            2 => ExperimentData::activity(id, &symbol),
            _ => ExperimentData::rna(id, &symbol),
        };
        genes[g].add(datum.with_change(f64::from(change))).unwrap();
    }

    let genes: Vec<Arc<GeneWithData>> = genes.into_iter().map(Arc::new).collect();

    relations
        .iter()
        .map(|&(s, t, ty, activating, pos)| {
            let rel_type = RelationType::ALL[usize::from(ty) % 3];
            let sign = if activating { Sign::Positive } else { Sign::Negative };
            let rel = relation(&genes[s % WORLD_GENES], &genes[t % WORLD_GENES], rel_type, sign);
            if rel_type.affects_phospho_site() {
                rel.with_sites([ProteinSite::new('S', pos)])
            } else {
                rel
            }
        })
        .collect()
}
