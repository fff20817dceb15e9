use std::cmp::Reverse;
use std::collections::HashSet;

use petgraph::graphmap::DiGraphMap;
use petgraph::Direction;

use causeway_core::{GraphFilter, Relation};

/// For each target gene, keeps only relations from its top-ranked upstream
/// genes.
///
/// Upstream genes are ranked by how many distinct genes they reach in the
/// accepted graph (out-degree), ties broken by symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopUpstreamFilter {
    pub per_target: usize,
}

impl TopUpstreamFilter {
    pub fn new(per_target: usize) -> Self {
        Self { per_target }
    }

    fn kept_edges(&self, accepted: &HashSet<Relation>) -> HashSet<(String, String)> {
        let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();
        for rel in accepted {
            graph.add_edge(rel.source_symbol(), rel.target_symbol(), ());
        }

        let mut kept = HashSet::new();
        for target in graph.nodes() {
            let mut upstream: Vec<&str> = graph
                .neighbors_directed(target, Direction::Incoming)
                .collect();
            upstream.sort_by_key(|source| {
                let out_degree = graph
                    .neighbors_directed(*source, Direction::Outgoing)
                    .count();
                (Reverse(out_degree), *source)
            });

            for source in upstream.into_iter().take(self.per_target) {
                kept.insert((source.to_string(), target.to_string()));
            }
        }
        kept
    }
}

impl GraphFilter for TopUpstreamFilter {
    fn filter(&self, accepted: HashSet<Relation>) -> HashSet<Relation> {
        let kept = self.kept_edges(&accepted);
        accepted
            .into_iter()
            .filter(|rel| {
                kept.contains(&(
                    rel.source_symbol().to_string(),
                    rel.target_symbol().to_string(),
                ))
            })
            .collect()
    }
}
