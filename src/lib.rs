pub mod analysis;
pub mod config;
pub mod error;
pub mod evaluation;
pub mod export;
pub mod field;
pub mod grid;
pub mod placement;
pub mod profiler;
pub mod scenario;
pub mod units;

pub use error::{ConfigError, ConfigResult, FieldError, FieldResult};
pub use evaluation::{evaluate, evaluate_sources, ChargeMarker, FieldReport};
pub use field::{field_at, field_outside, magnitudes, superpose, Charge, ShellDistribution, VectorField};
pub use grid::{make_grid, make_grid_with_axes, AxisSpec, SampleGrid};
pub use placement::place;
pub use scenario::Scenario;

#[cfg(feature = "profiling")]
use once_cell::sync::Lazy;
#[cfg(feature = "profiling")]
use parking_lot::Mutex;

#[cfg(feature = "profiling")]
pub static PROFILER: Lazy<Mutex<profiler::Profiler>> =
    Lazy::new(|| Mutex::new(profiler::Profiler::new()));
