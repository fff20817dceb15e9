use std::collections::HashSet;

use crate::relation::Relation;

/// Post-processing applied once per search run to the accepted relations.
///
/// Implementations may only drop relations. Anything returned that was not
/// in `accepted` is discarded by the searcher.
pub trait GraphFilter: Send + Sync + std::fmt::Debug {
    fn filter(&self, accepted: HashSet<Relation>) -> HashSet<Relation>;
}
