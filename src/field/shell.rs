use super::point::coulomb_field;
use super::VectorField;
use crate::config::FieldConfig;
use crate::grid::SampleGrid;
use crate::profile_scope;
use serde::{Deserialize, Serialize};
use ultraviolet::DVec3;

/// A uniformly charged sphere.
///
/// There is no surface discretisation: the field follows from the shell theorem,
/// zero inside and that of a central point charge outside.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShellDistribution {
    /// Nominal charge spread over the sphere
    pub total_charge: f64,
    pub radius: f64,
    #[serde(default = "origin")]
    pub center: DVec3,
}

fn origin() -> DVec3 {
    DVec3::zero()
}

impl ShellDistribution {
    /// Sphere centered at the origin.
    pub fn new(total_charge: f64, radius: f64) -> Self {
        Self {
            total_charge,
            radius,
            center: origin(),
        }
    }

    pub fn with_center(mut self, center: DVec3) -> Self {
        self.center = center;
        self
    }

    /// Field at a single point.
    #[inline]
    pub fn field_at_point(&self, point: DVec3, strength: f64, epsilon: f64) -> DVec3 {
        let distance = (point - self.center).mag();
        if distance < self.radius {
            DVec3::zero()
        } else {
            coulomb_field(point, self.center, strength, epsilon)
        }
    }

    pub fn field(&self, grid: &SampleGrid, config: &FieldConfig) -> VectorField {
        field_outside(self, grid, config)
    }
}

/// Field of `shell` over `grid`: zero for samples inside the sphere, a point
/// charge of `total_charge` at the center for samples on or outside it.
pub fn field_outside(
    shell: &ShellDistribution,
    grid: &SampleGrid,
    config: &FieldConfig,
) -> VectorField {
    profile_scope!("field_shell");
    let strength = config.source_strength(shell.total_charge);
    let epsilon = config.epsilon;
    VectorField::from_fn(grid, config, |p| shell.field_at_point(p, strength, epsilon))
}
