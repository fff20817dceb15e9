use causeway_core::{ChangeDetector, ExperimentData, Sign};

/// Co-change from the signs of the two detected changes.
///
/// Changes smaller than `min_magnitude` count as no change.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ComparisonDetector {
    pub min_magnitude: f64,
}

impl ComparisonDetector {
    pub fn new(min_magnitude: f64) -> Self {
        Self { min_magnitude }
    }

    fn called_sign(&self, datum: &ExperimentData) -> Sign {
        if datum.change_value.abs() < self.min_magnitude {
            Sign::Zero
        } else {
            datum.change_sign()
        }
    }
}

impl ChangeDetector for ComparisonDetector {
    fn change_sign(&self, source: &ExperimentData, target: &ExperimentData) -> Sign {
        self.called_sign(source) * self.called_sign(target)
    }
}
