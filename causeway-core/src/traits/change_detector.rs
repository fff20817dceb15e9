use serde::{Deserialize, Serialize};

use crate::data::ExperimentData;
use crate::sign::Sign;

/// Decides whether two data moved together.
pub trait ChangeDetector: Send + Sync + std::fmt::Debug {
    /// `Positive` if the data changed in the same direction, `Negative` if
    /// opposite, `Zero` if undetermined.
    fn change_sign(&self, source: &ExperimentData, target: &ExperimentData) -> Sign;

    /// The correlation view of this detector, if it has one.
    fn as_correlation(&self) -> Option<&dyn CorrelationDetector> {
        None
    }
}

/// A correlation coefficient with its p-value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Correlation {
    pub value: f64,
    pub p_value: f64,
}

/// A change detector that judges co-change by correlating per-sample values.
pub trait CorrelationDetector: ChangeDetector {
    fn correlation(&self, source: &ExperimentData, target: &ExperimentData) -> Correlation;
}
