//! Spherical placement of charges on and around the reference sphere.
//!
//! Angles follow the physics convention: `theta` is the polar angle measured
//! from +Z and `phi` the azimuth measured from +X towards +Y, both in radians.
//! Out-of-range angles are not rejected; the trigonometric identities give a
//! well-defined position for any finite input.

use crate::config::MIN_SPHERE_MESH_STEP;
use crate::units::deg_to_rad;
use std::f64::consts::{PI, TAU};
use ultraviolet::DVec3;

/// Cartesian position of the point at (`theta`, `phi`) on a sphere of `radius`
/// centered at the origin.
#[inline]
pub fn place(theta: f64, phi: f64, radius: f64) -> DVec3 {
    let (sin_theta, cos_theta) = theta.sin_cos();
    let (sin_phi, cos_phi) = phi.sin_cos();
    DVec3::new(
        radius * sin_theta * cos_phi,
        radius * sin_theta * sin_phi,
        radius * cos_theta,
    )
}

/// Same as [`place`] for angles given in degrees, as entered on the sliders.
#[inline]
pub fn place_degrees(theta_deg: f64, phi_deg: f64, radius: f64) -> DVec3 {
    place(deg_to_rad(theta_deg), deg_to_rad(phi_deg), radius)
}

/// Points tessellating a sphere of `radius` for the renderer's sphere mesh.
///
/// Theta runs over [0, π] inclusive and phi over [0, 2π) in increments of
/// `step`, theta-major. A non-positive or non-finite step yields no points;
/// steps finer than [`MIN_SPHERE_MESH_STEP`] are clamped to it.
pub fn sphere_surface(radius: f64, step: f64) -> Vec<DVec3> {
    if !(step > 0.0 && step.is_finite()) {
        return Vec::new();
    }
    let step = step.max(MIN_SPHERE_MESH_STEP);

    // Small slack so that theta = π survives accumulated rounding in i * step.
    let theta_count = ((PI + step) / step - 1.0e-9).ceil() as usize;
    let phi_count = (TAU / step - 1.0e-9).ceil() as usize;

    let mut points = Vec::with_capacity(theta_count * phi_count);
    for i in 0..theta_count {
        let theta = i as f64 * step;
        for j in 0..phi_count {
            points.push(place(theta, j as f64 * step, radius));
        }
    }
    points
}
