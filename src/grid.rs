// grid.rs
// Regular 3D sampling lattice the field is evaluated on

use crate::error::{FieldError, FieldResult};
use serde::{Deserialize, Serialize};
use ultraviolet::DVec3;

/// Extent and sample count of one grid axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxisSpec {
    /// The axis spans [-bounds, +bounds]
    pub bounds: f64,
    pub resolution: usize,
}

impl AxisSpec {
    pub fn new(bounds: f64, resolution: usize) -> Self {
        Self { bounds, resolution }
    }

    fn validate(&self) -> FieldResult<()> {
        if self.resolution == 0 {
            return Err(FieldError::InvalidResolution {
                resolution: self.resolution,
            });
        }
        if !(self.bounds > 0.0 && self.bounds.is_finite()) {
            return Err(FieldError::InvalidBounds {
                bounds: self.bounds,
            });
        }
        Ok(())
    }

    /// Evenly spaced coordinates from -bounds to +bounds, both ends included.
    /// A single sample sits at -bounds.
    pub fn coordinates(&self) -> Vec<f64> {
        linspace(-self.bounds, self.bounds, self.resolution)
    }
}

fn linspace(start: f64, stop: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (count - 1) as f64;
            let mut values: Vec<f64> = (0..count).map(|i| start + i as f64 * step).collect();
            // Pin the endpoint so it does not drift by accumulated rounding.
            values[count - 1] = stop;
            values
        }
    }
}

/// An immutable lattice of sample points.
///
/// Points are stored in meshgrid order: the y index varies slowest, then x,
/// with z varying fastest.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SampleGrid {
    extents: [AxisSpec; 3],
    axes: [Vec<f64>; 3],
    points: Vec<DVec3>,
}

impl SampleGrid {
    /// Samples per axis as `[nx, ny, nz]`.
    pub fn shape(&self) -> [usize; 3] {
        [self.axes[0].len(), self.axes[1].len(), self.axes[2].len()]
    }

    /// The axis specs this grid was built from, in x, y, z order.
    pub fn extents(&self) -> [AxisSpec; 3] {
        self.extents
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[DVec3] {
        &self.points
    }

    /// Coordinates along axis `n` (0 = x, 1 = y, 2 = z).
    pub fn axis(&self, n: usize) -> &[f64] {
        &self.axes[n]
    }

    /// Flat index of the sample at axis indices (`ix`, `iy`, `iz`).
    #[inline]
    pub fn index(&self, ix: usize, iy: usize, iz: usize) -> usize {
        let [nx, _, nz] = self.shape();
        (iy * nx + ix) * nz + iz
    }

    pub fn point(&self, ix: usize, iy: usize, iz: usize) -> DVec3 {
        self.points[self.index(ix, iy, iz)]
    }
}

/// Cubic grid with `resolution` samples per axis over [-bounds, +bounds]³.
pub fn make_grid(bounds: f64, resolution: usize) -> FieldResult<SampleGrid> {
    let axis = AxisSpec::new(bounds, resolution);
    make_grid_with_axes(axis, axis, axis)
}

/// Grid with independently configured axes.
pub fn make_grid_with_axes(x: AxisSpec, y: AxisSpec, z: AxisSpec) -> FieldResult<SampleGrid> {
    x.validate()?;
    y.validate()?;
    z.validate()?;

    let xs = x.coordinates();
    let ys = y.coordinates();
    let zs = z.coordinates();

    let mut points = Vec::with_capacity(xs.len() * ys.len() * zs.len());
    for &py in &ys {
        for &px in &xs {
            for &pz in &zs {
                points.push(DVec3::new(px, py, pz));
            }
        }
    }

    Ok(SampleGrid {
        extents: [x, y, z],
        axes: [xs, ys, zs],
        points,
    })
}
