//! # causeway-search
//!
//! The matching engine. Walks every candidate relation, picks the data that
//! may act as its source and target evidence, checks sign compatibility, and
//! records which data pairs support which relation.

pub mod detectors;
pub mod eligibility;
pub mod filters;
pub mod ledger;
pub mod parallel;
pub mod report;
pub mod searcher;

pub use detectors::{ComparisonDetector, PearsonDetector};
pub use filters::{GeneFocusFilter, TopUpstreamFilter};
pub use ledger::{EvidencePair, InferenceLedger};
pub use parallel::run_partitioned;
pub use searcher::CausalitySearcher;
