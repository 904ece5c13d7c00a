use super::VectorField;
use crate::config::FieldConfig;
use crate::grid::SampleGrid;
use crate::placement::{place, place_degrees};
use crate::profile_scope;
use serde::{Deserialize, Serialize};
use ultraviolet::DVec3;

/// A point charge placed on a sphere around the origin.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Charge {
    /// Signed nominal charge; converted to coulombs by the active `ChargeScale`
    pub magnitude: f64,
    /// Polar angle from +Z (radians)
    pub theta: f64,
    /// Azimuth from +X (radians)
    pub phi: f64,
    /// Distance from the origin
    pub shell_radius: f64,
}

impl Charge {
    pub fn new(magnitude: f64, theta: f64, phi: f64, shell_radius: f64) -> Self {
        Self {
            magnitude,
            theta,
            phi,
            shell_radius,
        }
    }

    /// Build from slider angles in degrees.
    pub fn from_degrees(magnitude: f64, theta_deg: f64, phi_deg: f64, shell_radius: f64) -> Self {
        Self::new(
            magnitude,
            theta_deg.to_radians(),
            phi_deg.to_radians(),
            shell_radius,
        )
    }

    pub fn position(&self) -> DVec3 {
        place(self.theta, self.phi, self.shell_radius)
    }

    /// Field of this charge over `grid`.
    pub fn field(&self, grid: &SampleGrid, config: &FieldConfig) -> VectorField {
        field_at(self.position(), self.magnitude, grid, config)
    }
}

/// Regularized Coulomb field at `point` of a source at `source` with strength
/// `k·q` (already in SI units).
///
/// `E = k·q·d / (|d|³ + ε)` with `d = point - source`. At the source itself `d`
/// vanishes and so does the field, instead of diverging.
#[inline]
pub fn coulomb_field(point: DVec3, source: DVec3, strength: f64, epsilon: f64) -> DVec3 {
    let d = point - source;
    let r = d.mag();
    d * (strength / (r * r * r + epsilon))
}

/// Field of one point charge of nominal `magnitude` at `position`, sampled over `grid`.
pub fn field_at(
    position: DVec3,
    magnitude: f64,
    grid: &SampleGrid,
    config: &FieldConfig,
) -> VectorField {
    profile_scope!("field_point");
    let strength = config.source_strength(magnitude);
    let epsilon = config.epsilon;
    VectorField::from_fn(grid, config, |p| coulomb_field(p, position, strength, epsilon))
}

/// Convenience for callers holding slider values: place by degrees, then evaluate.
pub fn field_at_degrees(
    theta_deg: f64,
    phi_deg: f64,
    radius: f64,
    magnitude: f64,
    grid: &SampleGrid,
    config: &FieldConfig,
) -> VectorField {
    field_at(place_degrees(theta_deg, phi_deg, radius), magnitude, grid, config)
}
