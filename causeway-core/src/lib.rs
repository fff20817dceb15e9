//! # causeway-core
//!
//! Foundation crate for the Causeway causality search.
//! Defines sign arithmetic, the experiment data and relation models,
//! collaborator traits, errors, config, and tracing setup.
//! The search crate depends on this.

pub mod config;
pub mod data;
pub mod errors;
pub mod relation;
pub mod sign;
pub mod tracing_setup;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{CausewayConfig, SearchConfig};
pub use data::{DataKind, DataType, ExperimentData, GeneWithData, ProteinSite, SiteRef};
pub use errors::{CausewayError, CausewayResult};
pub use relation::{Relation, RelationType};
pub use sign::{Polarity, Sign};
pub use traits::{ChangeDetector, Correlation, CorrelationDetector, GraphFilter};
