// scenario.rs
// Loading, validating and resolving field scenarios from TOML files

use crate::config::{
    FieldConfig, GridConfig, ELECTRODE_GRID_BOUNDS, GRID_RESOLUTION, REFERENCE_RADIUS,
    SHELL_GRID_BOUNDS_FACTOR, SHELL_RADIUS, SHELL_TOTAL_CHARGE,
};
use crate::error::{ConfigError, ConfigResult};
use crate::field::{Charge, ShellDistribution};
use crate::units::ChargeScale;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info};
use ultraviolet::DVec3;

/// Slider defaults of the four-electrode view, (theta, phi) in degrees for
/// P1A, P1B, P2A and P2B.
pub const DEFAULT_ELECTRODE_ANGLES: [(f64, f64); 4] =
    [(45.0, 180.0), (180.0, 45.0), (90.0, 0.0), (0.0, 90.0)];

/// Everything needed for one field evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Radius of the reference sphere; charges without an explicit radius sit on it
    #[serde(default = "default_reference_radius")]
    pub reference_radius: f64,
    #[serde(default)]
    pub field: FieldConfig,
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub charges: Vec<ChargeConfig>,
    #[serde(default)]
    pub shells: Vec<ShellConfig>,
}

fn default_reference_radius() -> f64 {
    REFERENCE_RADIUS
}

/// A point charge as entered by the user: angles in degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChargeConfig {
    #[serde(default)]
    pub label: String,
    pub magnitude: f64,
    pub theta_deg: f64,
    pub phi_deg: f64,
    /// Overrides the scenario's reference radius
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShellConfig {
    #[serde(default)]
    pub label: String,
    pub total_charge: f64,
    pub radius: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center: Option<[f64; 3]>,
}

impl ChargeConfig {
    pub fn to_charge(&self, reference_radius: f64) -> Charge {
        Charge::from_degrees(
            self.magnitude,
            self.theta_deg,
            self.phi_deg,
            self.radius.unwrap_or(reference_radius),
        )
    }
}

impl ShellConfig {
    pub fn to_shell(&self) -> ShellDistribution {
        let shell = ShellDistribution::new(self.total_charge, self.radius);
        match self.center {
            Some([x, y, z]) => shell.with_center(DVec3::new(x, y, z)),
            None => shell,
        }
    }
}

fn invalid(message: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        message: message.into(),
    }
}

impl Scenario {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let scenario = Self::from_toml_str(&content)?;
        info!(
            path = %path.display(),
            charges = scenario.charges.len(),
            shells = scenario.shells.len(),
            "loaded scenario"
        );
        Ok(scenario)
    }

    /// Parse and validate a scenario.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let scenario: Scenario = toml::from_str(content)?;
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> ConfigResult<()> {
        fs::write(path.as_ref(), self.to_toml_string()?)?;
        debug!(path = %path.as_ref().display(), "wrote scenario");
        Ok(())
    }

    /// Reject scenarios the core would evaluate to nonsense.
    ///
    /// Grid parameters are checked when the grid is built.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.charges.is_empty() && self.shells.is_empty() {
            return Err(invalid("scenario has no charges and no shells"));
        }
        if !(self.reference_radius >= 0.0 && self.reference_radius.is_finite()) {
            return Err(invalid(format!(
                "reference_radius must be non-negative, got {}",
                self.reference_radius
            )));
        }
        if !(self.field.epsilon > 0.0 && self.field.coulomb_constant.is_finite()) {
            return Err(invalid("epsilon must be positive and the Coulomb constant finite"));
        }
        if !self.field.charge_scale.factor().is_finite() {
            return Err(invalid("charge scale must be finite"));
        }

        for (i, c) in self.charges.iter().enumerate() {
            let finite = [c.magnitude, c.theta_deg, c.phi_deg]
                .iter()
                .all(|v| v.is_finite());
            if !finite {
                return Err(invalid(format!("charge {} has a non-finite value", i)));
            }
            if let Some(r) = c.radius {
                if !(r >= 0.0 && r.is_finite()) {
                    return Err(invalid(format!(
                        "charge {} radius must be non-negative, got {}",
                        i, r
                    )));
                }
            }
        }

        for (i, s) in self.shells.iter().enumerate() {
            if !(s.radius > 0.0 && s.radius.is_finite()) {
                return Err(invalid(format!(
                    "shell {} radius must be positive, got {}",
                    i, s.radius
                )));
            }
            if !s.total_charge.is_finite() {
                return Err(invalid(format!("shell {} has a non-finite charge", i)));
            }
            if let Some(center) = s.center {
                if !center.iter().all(|v| v.is_finite()) {
                    return Err(invalid(format!("shell {} center must be finite", i)));
                }
            }
        }
        Ok(())
    }

    /// Point charges with positions resolved against the reference radius.
    pub fn resolved_charges(&self) -> Vec<Charge> {
        self.charges
            .iter()
            .map(|c| c.to_charge(self.reference_radius))
            .collect()
    }

    pub fn shell_distributions(&self) -> Vec<ShellDistribution> {
        self.shells.iter().map(ShellConfig::to_shell).collect()
    }

    /// Two electrode pairs on the reference sphere: P1A(+), P1B(-), P2A(+), P2B(-).
    ///
    /// `angles_deg` holds (theta, phi) in degrees per electrode in that order.
    pub fn four_point(angles_deg: [(f64, f64); 4]) -> Self {
        let labels = ["P1A (+)", "P1B (-)", "P2A (+)", "P2B (-)"];
        let signs = [1.0, -1.0, 1.0, -1.0];

        let charges = labels
            .iter()
            .zip(signs)
            .zip(angles_deg)
            .map(|((label, magnitude), (theta_deg, phi_deg))| ChargeConfig {
                label: label.to_string(),
                magnitude,
                theta_deg,
                phi_deg,
                radius: None,
            })
            .collect();

        Self {
            reference_radius: REFERENCE_RADIUS,
            field: FieldConfig::default().with_charge_scale(ChargeScale::DeciNano),
            grid: GridConfig::uniform(ELECTRODE_GRID_BOUNDS, GRID_RESOLUTION),
            charges,
            shells: Vec::new(),
        }
    }

    /// Uniformly charged sphere of `radius` sampled over twice its radius.
    pub fn uniform_sphere(radius: f64) -> Self {
        Self {
            reference_radius: radius,
            field: FieldConfig::default().with_charge_scale(ChargeScale::Pico),
            grid: GridConfig::uniform(SHELL_GRID_BOUNDS_FACTOR * radius, GRID_RESOLUTION),
            charges: Vec::new(),
            shells: vec![ShellConfig {
                label: "Sphere".to_string(),
                total_charge: SHELL_TOTAL_CHARGE,
                radius,
                center: None,
            }],
        }
    }
}

impl Default for Scenario {
    fn default() -> Self {
        Self::four_point(DEFAULT_ELECTRODE_ANGLES)
    }
}

/// Scenario shipped with the binary for `preset shell`.
pub fn default_shell_scenario() -> Scenario {
    Scenario::uniform_sphere(SHELL_RADIUS)
}
