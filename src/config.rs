// Centralized configuration for field evaluation parameters

use crate::error::FieldResult;
use crate::grid::{make_grid_with_axes, AxisSpec, SampleGrid};
use crate::units::{self, ChargeScale};
use serde::{Deserialize, Serialize};

// ====================
// Coulomb Evaluation
// ====================
/// Regularization added to the cubed distance so the field stays finite at a source.
pub const REGULARIZATION_EPSILON: f64 = 1.0e-10;
/// Grids with at least this many points are evaluated on the rayon pool.
pub const PARALLEL_THRESHOLD: usize = 4096;

// ====================
// Electrode Geometry
// ====================
/// Radius of the reference sphere the electrodes sit on (m).
pub const REFERENCE_RADIUS: f64 = 0.1;
/// Half-width of the sampling box around the electrodes (m).
pub const ELECTRODE_GRID_BOUNDS: f64 = 0.5;
/// Samples per axis.
pub const GRID_RESOLUTION: usize = 20;

// ====================
// Uniform Sphere
// ====================
pub const SHELL_RADIUS: f64 = 0.2; // Default sphere radius (m)
pub const SHELL_TOTAL_CHARGE: f64 = 1.0; // Nominal charge, scaled by ChargeScale::Pico
/// The sphere view samples a box twice the sphere radius on each side.
pub const SHELL_GRID_BOUNDS_FACTOR: f64 = 2.0;

// ====================
// Sphere Mesh
// ====================
/// Angular step used to tessellate the reference sphere for display.
pub const SPHERE_MESH_STEP: f64 = std::f64::consts::PI / 32.0;
/// Finest step accepted for the sphere mesh; smaller steps are clamped to it.
pub const MIN_SPHERE_MESH_STEP: f64 = std::f64::consts::PI / 1024.0;

/// Coulomb parameters shared by every evaluator in one computation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Coulomb's constant k
    pub coulomb_constant: f64,
    /// Conversion from nominal charge to coulombs
    pub charge_scale: ChargeScale,
    /// Added to r³ in the field denominator
    pub epsilon: f64,
    /// Minimum grid size before per-point work is spread over threads
    pub parallel_threshold: usize,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            coulomb_constant: units::COULOMB_CONSTANT,
            charge_scale: ChargeScale::DeciNano,
            epsilon: REGULARIZATION_EPSILON,
            parallel_threshold: PARALLEL_THRESHOLD,
        }
    }
}

impl FieldConfig {
    /// Same parameters with a different charge scale.
    pub fn with_charge_scale(mut self, charge_scale: ChargeScale) -> Self {
        self.charge_scale = charge_scale;
        self
    }

    /// k·q for a nominal charge, in SI units.
    #[inline]
    pub fn source_strength(&self, nominal_charge: f64) -> f64 {
        self.coulomb_constant * self.charge_scale.to_coulombs(nominal_charge)
    }
}

/// Grid layout requested by a scenario.
///
/// Every axis uses `bounds`/`resolution` unless an explicit per-axis override is given.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Half-width of the sampling box; axes span [-bounds, +bounds]
    pub bounds: f64,
    /// Samples per axis
    pub resolution: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<AxisSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<AxisSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<AxisSpec>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::uniform(ELECTRODE_GRID_BOUNDS, GRID_RESOLUTION)
    }
}

impl GridConfig {
    pub fn uniform(bounds: f64, resolution: usize) -> Self {
        Self {
            bounds,
            resolution,
            x: None,
            y: None,
            z: None,
        }
    }

    /// Build the sampling lattice described by this configuration.
    pub fn build(&self) -> FieldResult<SampleGrid> {
        let base = AxisSpec::new(self.bounds, self.resolution);
        make_grid_with_axes(
            self.x.unwrap_or(base),
            self.y.unwrap_or(base),
            self.z.unwrap_or(base),
        )
    }
}
