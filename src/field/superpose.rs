use super::VectorField;
use crate::error::{FieldError, FieldResult};
use crate::profile_scope;

/// Sum field contributions computed over the same grid.
///
/// Every contribution must share the grid shape and bounds of the first one. The result is
/// accumulated into a fresh zero buffer in the given order; nothing is returned
/// unless every contribution matches.
pub fn superpose(contributions: &[VectorField]) -> FieldResult<VectorField> {
    profile_scope!("superpose");
    let first = contributions.first().ok_or(FieldError::NoContributions)?;
    for contribution in &contributions[1..] {
        first.check_same_grid(contribution)?;
    }

    let mut total = VectorField::zeros_over(first.extents());
    for contribution in contributions {
        total.accumulate(contribution)?;
    }
    Ok(total)
}

/// |E| per sample point. Display/statistics only.
pub fn magnitudes(field: &VectorField) -> Vec<f64> {
    field.vectors().iter().map(|v| v.mag()).collect()
}
