//! Pearson correlation over paired sample values.
//!
//! P-values are two-sided, from the T-distribution via `statrs`.

use statrs::distribution::{ContinuousCDF, StudentsT};

use causeway_core::{ChangeDetector, Correlation, CorrelationDetector, ExperimentData, Sign};

/// Default p-value cutoff for calling a correlation.
pub const DEFAULT_P_VALUE_THRESHOLD: f64 = 0.05;

/// Fewest paired samples a correlation is computed on.
pub const DEFAULT_MIN_SAMPLES: usize = 3;

/// Calls co-change from significant correlation of per-sample values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PearsonDetector {
    pub p_value_threshold: f64,
    pub min_samples: usize,
}

impl PearsonDetector {
    pub fn new(p_value_threshold: f64) -> Self {
        Self {
            p_value_threshold,
            ..Self::default()
        }
    }
}

impl Default for PearsonDetector {
    fn default() -> Self {
        Self {
            p_value_threshold: DEFAULT_P_VALUE_THRESHOLD,
            min_samples: DEFAULT_MIN_SAMPLES,
        }
    }
}

impl ChangeDetector for PearsonDetector {
    fn change_sign(&self, source: &ExperimentData, target: &ExperimentData) -> Sign {
        let corr = self.correlation(source, target);
        if corr.p_value <= self.p_value_threshold {
            Sign::from_value(corr.value)
        } else {
            Sign::Zero
        }
    }

    fn as_correlation(&self) -> Option<&dyn CorrelationDetector> {
        Some(self)
    }
}

impl CorrelationDetector for PearsonDetector {
    fn correlation(&self, source: &ExperimentData, target: &ExperimentData) -> Correlation {
        let (xs, ys): (Vec<f64>, Vec<f64>) = source
            .values
            .iter()
            .zip(&target.values)
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .map(|(x, y)| (*x, *y))
            .unzip();

        if xs.len() < self.min_samples.max(DEFAULT_MIN_SAMPLES) {
            return Correlation {
                value: 0.0,
                p_value: 1.0,
            };
        }
        pearson(&xs, &ys)
    }
}

/// Pearson's r with its two-sided p-value. Degenerate input (fewer than 3
/// points, or zero variance) gives r = 0, p = 1.
pub fn pearson(xs: &[f64], ys: &[f64]) -> Correlation {
    let none = Correlation {
        value: 0.0,
        p_value: 1.0,
    };

    let n = xs.len().min(ys.len());
    if n < 3 {
        return none;
    }

    let n_f = n as f64;
    let mean_x = xs[..n].iter().sum::<f64>() / n_f;
    let mean_y = ys[..n].iter().sum::<f64>() / n_f;

    let mut sxy = 0.0;
    let mut sxx = 0.0;
    let mut syy = 0.0;
    for (x, y) in xs[..n].iter().zip(&ys[..n]) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }

    let denom = (sxx * syy).sqrt();
    if !denom.is_finite() || denom <= 0.0 {
        return none;
    }

    let r = (sxy / denom).clamp(-1.0, 1.0);
    let df = n_f - 2.0;

    if (1.0 - r.abs()) <= f64::EPSILON {
        return Correlation {
            value: r,
            p_value: 0.0,
        };
    }

    let t = r * (df / (1.0 - r * r)).sqrt();
    let p_value = match StudentsT::new(0.0, 1.0, df) {
        Ok(dist) => (2.0 * (1.0 - dist.cdf(t.abs()))).clamp(0.0, 1.0),
        Err(_) => 1.0,
    };

    Correlation { value: r, p_value }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfect_positive_correlation() {
        let c = pearson(&[1.0, 2.0, 3.0, 4.0], &[2.0, 4.0, 6.0, 8.0]);
        assert!((c.value - 1.0).abs() < 1e-12);
        assert_eq!(c.p_value, 0.0);
    }

    #[test]
    fn perfect_negative_correlation() {
        let c = pearson(&[1.0, 2.0, 3.0, 4.0], &[8.0, 6.0, 4.0, 2.0]);
        assert!((c.value + 1.0).abs() < 1e-12);
    }

    #[test]
    fn constant_series_is_degenerate() {
        let c = pearson(&[1.0, 1.0, 1.0, 1.0], &[2.0, 4.0, 6.0, 8.0]);
        assert_eq!(c.value, 0.0);
        assert_eq!(c.p_value, 1.0);
    }

    #[test]
    fn weak_correlation_has_large_p_value() {
        let c = pearson(&[1.0, 2.0, 3.0, 4.0, 5.0], &[2.0, 1.0, 4.0, 3.0, 2.5]);
        assert!(c.value > 0.0 && c.value < 0.6);
        assert!(c.p_value > 0.05);
    }

    #[test]
    fn too_few_points() {
        let c = pearson(&[1.0, 2.0], &[1.0, 2.0]);
        assert_eq!(c.p_value, 1.0);
    }
}
