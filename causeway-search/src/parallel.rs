//! Partitioned runs over independent searcher forks.

use std::collections::HashSet;

use rayon::prelude::*;
use tracing::{debug, instrument};

use causeway_core::Relation;

use crate::searcher::CausalitySearcher;

/// Run the search over `partitions` disjoint chunks of `relations` in
/// parallel, each on its own fork of `searcher`.
///
/// The searcher's graph filter, if any, is applied once to the union.
/// Forks do not collect evidence, so `searcher`'s bookkeeping is untouched.
#[instrument(skip_all, fields(relations = relations.len(), partitions = partitions))]
pub fn run_partitioned(
    searcher: &CausalitySearcher,
    relations: &HashSet<Relation>,
    partitions: usize,
) -> HashSet<Relation> {
    let all: Vec<&Relation> = relations.iter().collect();
    let chunk_size = all.len().div_ceil(partitions.max(1)).max(1);

    let accepted = all
        .par_chunks(chunk_size)
        .map(|chunk| {
            let mut fork = searcher.fork();
            fork.set_graph_filter(None);
            let part: HashSet<Relation> = chunk.iter().map(|rel| (*rel).clone()).collect();
            fork.run(&part)
        })
        .reduce(HashSet::new, |mut acc, part| {
            acc.extend(part);
            acc
        });

    debug!(accepted = accepted.len(), "partitions merged");

    match searcher.graph_filter() {
        Some(filter) => {
            let mut filtered = filter.filter(accepted.clone());
            filtered.retain(|rel| accepted.contains(rel));
            filtered
        }
        None => accepted,
    }
}
