//! One-shot field evaluation.
//!
//! Builds the grid, evaluates every source on it, superposes the contributions
//! and packages the result with what a renderer needs to draw it. Nothing is
//! cached between calls; identical inputs always give identical reports.

use crate::analysis::FieldStats;
use crate::config::{FieldConfig, SPHERE_MESH_STEP};
use crate::error::{ConfigResult, FieldResult};
use crate::field::{magnitudes, superpose, Charge, ShellDistribution, VectorField};
use crate::grid::SampleGrid;
use crate::placement::sphere_surface;
use crate::profile_scope;
use crate::scenario::Scenario;
use serde::Serialize;
use tracing::{debug, warn};
use ultraviolet::DVec3;

/// Where a point charge sits, for drawing a marker.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChargeMarker {
    pub label: String,
    pub position: DVec3,
    pub magnitude: f64,
}

/// Everything handed to the presentation layer after an evaluation.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FieldReport {
    pub grid: SampleGrid,
    pub field: VectorField,
    pub magnitudes: Vec<f64>,
    pub markers: Vec<ChargeMarker>,
    pub reference_radius: f64,
    /// Tessellation of the reference sphere; empty when the radius is zero
    pub reference_sphere: Vec<DVec3>,
    pub stats: FieldStats,
}

/// Superposed field of `charges` and `shells` over `grid`.
pub fn evaluate_sources(
    grid: &SampleGrid,
    charges: &[Charge],
    shells: &[ShellDistribution],
    config: &FieldConfig,
) -> FieldResult<VectorField> {
    profile_scope!("evaluate_sources");
    let contributions: Vec<VectorField> = charges
        .iter()
        .map(|c| c.field(grid, config))
        .chain(shells.iter().map(|s| s.field(grid, config)))
        .collect();
    superpose(&contributions)
}

/// Evaluate a scenario end to end.
pub fn evaluate(scenario: &Scenario) -> ConfigResult<FieldReport> {
    scenario.validate()?;
    let grid = scenario.grid.build()?;
    let charges = scenario.resolved_charges();
    let shells = scenario.shell_distributions();

    debug!(
        points = grid.len(),
        charges = charges.len(),
        shells = shells.len(),
        scale = scenario.field.charge_scale.factor(),
        "evaluating field"
    );

    let field = evaluate_sources(&grid, &charges, &shells, &scenario.field)?;
    let magnitudes = magnitudes(&field);
    let stats = FieldStats::from_magnitudes(&magnitudes);
    if stats.max == 0.0 {
        warn!("field is zero everywhere on the grid");
    }
    debug!(min = stats.min, max = stats.max, mean = stats.mean, "field evaluated");

    let markers = scenario
        .charges
        .iter()
        .zip(&charges)
        .map(|(cfg, charge)| ChargeMarker {
            label: cfg.label.clone(),
            position: charge.position(),
            magnitude: charge.magnitude,
        })
        .collect();

    let reference_sphere = if scenario.reference_radius > 0.0 {
        sphere_surface(scenario.reference_radius, SPHERE_MESH_STEP)
    } else {
        Vec::new()
    };

    Ok(FieldReport {
        grid,
        field,
        magnitudes,
        markers,
        reference_radius: scenario.reference_radius,
        reference_sphere,
        stats,
    })
}
