//! Physical constants and charge-unit conversions.
//!
//! Base units are SI throughout:
//! - Length: meter (m)
//! - Charge: coulomb (C)
//! - Field: volt per meter (V/m)
//!
//! The slider inputs of the presentation layer are unitless "nominal" charges;
//! a [`ChargeScale`] turns them into coulombs.

use serde::{Deserialize, Serialize};

/// Coulomb's constant k = 1/(4πε₀) in N⋅m²/C², rounded to three digits.
pub const COULOMB_CONSTANT: f64 = 8.99e9;
/// One "deci-nano" unit of nominal charge in coulombs (point-charge electrodes).
pub const DECI_NANO_COULOMB: f64 = 1.0e-10;
/// One picocoulomb (uniformly charged sphere).
pub const PICO_COULOMB: f64 = 1.0e-12;

/// Conversion from the nominal charge entered by a caller to coulombs.
///
/// The electrode and sphere views historically used different sub-unit factors
/// for the same nominal input. Both are kept as named policies; a single
/// evaluation always applies one of them to every source.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum ChargeScale {
    /// 1 nominal unit = 1e-10 C.
    #[default]
    DeciNano,
    /// 1 nominal unit = 1e-12 C.
    Pico,
    /// Caller-supplied coulombs per nominal unit.
    Custom(f64),
}

impl ChargeScale {
    /// Coulombs per nominal unit.
    pub fn factor(self) -> f64 {
        match self {
            ChargeScale::DeciNano => DECI_NANO_COULOMB,
            ChargeScale::Pico => PICO_COULOMB,
            ChargeScale::Custom(factor) => factor,
        }
    }

    /// Convert a nominal charge into coulombs.
    #[inline]
    pub fn to_coulombs(self, nominal: f64) -> f64 {
        nominal * self.factor()
    }
}

/// Convert degrees to radians.
#[inline]
pub fn deg_to_rad(degrees: f64) -> f64 {
    degrees.to_radians()
}
