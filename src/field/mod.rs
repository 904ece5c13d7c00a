// field/mod.rs
// Vector field buffers and the per-source evaluators that fill them

pub mod point;
pub mod shell;
pub mod superpose;

#[cfg(test)]
mod tests;

pub use point::{coulomb_field, field_at, Charge};
pub use shell::{field_outside, ShellDistribution};
pub use superpose::{magnitudes, superpose};

use crate::config::FieldConfig;
use crate::error::{FieldError, FieldResult};
use crate::grid::{AxisSpec, SampleGrid};
use rayon::prelude::*;
use serde::Serialize;
use ultraviolet::DVec3;

/// One (Ex, Ey, Ez) per sample point of the grid it was computed on.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VectorField {
    extents: [AxisSpec; 3],
    vectors: Vec<DVec3>,
}

impl VectorField {
    /// Zero field matching `grid`.
    pub fn zeros(grid: &SampleGrid) -> Self {
        Self::zeros_over(grid.extents())
    }

    pub(crate) fn zeros_over(extents: [AxisSpec; 3]) -> Self {
        Self {
            extents,
            vectors: vec![DVec3::zero(); extents.iter().map(|a| a.resolution).product()],
        }
    }

    /// Evaluate `f` at every point of `grid`.
    ///
    /// Large grids are split over the rayon pool. Each vector depends only on its
    /// own sample point and `collect` keeps grid order, so both paths produce
    /// identical buffers.
    pub fn from_fn<F>(grid: &SampleGrid, config: &FieldConfig, f: F) -> Self
    where
        F: Fn(DVec3) -> DVec3 + Sync + Send,
    {
        let vectors: Vec<DVec3> = if grid.len() >= config.parallel_threshold {
            grid.points().par_iter().map(|&p| f(p)).collect()
        } else {
            grid.points().iter().map(|&p| f(p)).collect()
        };
        Self {
            extents: grid.extents(),
            vectors,
        }
    }

    /// Samples per axis of the grid this field belongs to.
    pub fn shape(&self) -> [usize; 3] {
        self.extents.map(|a| a.resolution)
    }

    /// Axis specs of the grid this field was sampled on.
    pub fn extents(&self) -> [AxisSpec; 3] {
        self.extents
    }

    /// Fail unless `other` was sampled on a grid with the same shape and bounds.
    pub fn check_same_grid(&self, other: &VectorField) -> FieldResult<()> {
        if other.shape() != self.shape() || other.vectors.len() != self.vectors.len() {
            return Err(FieldError::ShapeMismatch {
                expected: self.shape(),
                actual: other.shape(),
            });
        }
        if other.extents != self.extents {
            return Err(FieldError::GridMismatch {
                expected: self.extents.map(|a| a.bounds),
                actual: other.extents.map(|a| a.bounds),
            });
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    pub fn vectors(&self) -> &[DVec3] {
        &self.vectors
    }

    pub fn get(&self, index: usize) -> Option<DVec3> {
        self.vectors.get(index).copied()
    }

    /// Add `other` into this field component-wise.
    pub fn accumulate(&mut self, other: &VectorField) -> FieldResult<()> {
        self.check_same_grid(other)?;
        for (acc, v) in self.vectors.iter_mut().zip(&other.vectors) {
            *acc += *v;
        }
        Ok(())
    }

    /// Split into the three component arrays, the layout plotting tools expect.
    pub fn components(&self) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
        let ex = self.vectors.iter().map(|v| v.x).collect();
        let ey = self.vectors.iter().map(|v| v.y).collect();
        let ez = self.vectors.iter().map(|v| v.z).collect();
        (ex, ey, ez)
    }
}
