// analysis.rs
// Summary statistics over a magnitude field

use serde::Serialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct FieldStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub samples: usize,
}

impl FieldStats {
    /// Statistics of `magnitudes`; an empty slice gives all zeros.
    pub fn from_magnitudes(magnitudes: &[f64]) -> Self {
        if magnitudes.is_empty() {
            return Self::default();
        }

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        for &m in magnitudes {
            min = min.min(m);
            max = max.max(m);
            sum += m;
        }

        Self {
            min,
            max,
            mean: sum / magnitudes.len() as f64,
            samples: magnitudes.len(),
        }
    }
}

impl std::fmt::Display for FieldStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "E_magnitude: Min={:.2e}, Max={:.2e}, Mean={:.2e}",
            self.min, self.max, self.mean
        )
    }
}
