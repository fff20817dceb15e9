//! Built-in change detectors. Both consume change calls and sample values
//! already carried by the data; neither detects change from replicates.

mod comparison;
mod correlation;

pub use comparison::ComparisonDetector;
pub use correlation::{pearson, PearsonDetector};
