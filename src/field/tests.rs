// field/tests.rs
// Physics checks for the point, shell and superposition evaluators

use super::*;
use crate::config::FieldConfig;
use crate::grid::{make_grid, SampleGrid};
use crate::units::{ChargeScale, COULOMB_CONSTANT};
use approx::assert_abs_diff_eq;
use approx::assert_relative_eq;
use ultraviolet::DVec3;

/// Grid whose spacing is exact in binary, so the center sample is exactly the origin.
fn exact_grid() -> SampleGrid {
    make_grid(0.5, 5).unwrap()
}

fn origin_index(grid: &SampleGrid) -> usize {
    grid.points()
        .iter()
        .position(|p| *p == DVec3::zero())
        .expect("grid has a sample at the origin")
}

fn assert_fields_close(a: &VectorField, b: &VectorField) {
    assert_eq!(a.shape(), b.shape());
    let scale = magnitudes(a).into_iter().fold(0.0f64, f64::max).max(1.0);
    for (va, vb) in a.vectors().iter().zip(b.vectors()) {
        assert_abs_diff_eq!(va.x, vb.x, epsilon = scale * 1e-12);
        assert_abs_diff_eq!(va.y, vb.y, epsilon = scale * 1e-12);
        assert_abs_diff_eq!(va.z, vb.z, epsilon = scale * 1e-12);
    }
}

mod point_charge {
    use super::*;

    #[test]
    fn magnitude_follows_inverse_square() {
        let config = FieldConfig::default();
        let grid = exact_grid();
        let field = field_at(DVec3::zero(), 1.0, &grid, &config);
        let kq = COULOMB_CONSTANT * 1.0e-10;

        for (p, e) in grid.points().iter().zip(field.vectors()) {
            let r = p.mag();
            if r == 0.0 {
                continue;
            }
            assert_relative_eq!(e.mag(), kq / (r * r), max_relative = 1e-6);
        }
    }

    #[test]
    fn positive_charge_points_away_negative_points_towards() {
        let config = FieldConfig::default();
        let grid = exact_grid();
        let positive = field_at(DVec3::zero(), 2.0, &grid, &config);
        let negative = field_at(DVec3::zero(), -2.0, &grid, &config);

        for ((p, ep), en) in grid
            .points()
            .iter()
            .zip(positive.vectors())
            .zip(negative.vectors())
        {
            if p.mag() == 0.0 {
                continue;
            }
            let radial = p.normalized();
            assert_relative_eq!(ep.normalized().dot(radial), 1.0, epsilon = 1e-9);
            assert_relative_eq!(en.normalized().dot(radial), -1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn coincident_sample_is_finite() {
        let config = FieldConfig::default();
        let grid = exact_grid();
        let field = field_at(DVec3::zero(), 1.0, &grid, &config);
        let at_source = field.get(origin_index(&grid)).unwrap();
        assert_eq!(at_source, DVec3::zero());
        assert!(field
            .vectors()
            .iter()
            .all(|v| v.x.is_finite() && v.y.is_finite() && v.z.is_finite()));
    }

    #[test]
    fn near_coincident_sample_is_bounded() {
        let e = coulomb_field(DVec3::new(1.0e-6, 0.0, 0.0), DVec3::zero(), 0.899, 1.0e-10);
        assert!(e.x.is_finite());
        // Denominator is dominated by epsilon this close to the source.
        assert_relative_eq!(e.x, 0.899 * 1.0e-6 / (1.0e-18 + 1.0e-10), max_relative = 1e-9);
    }

    #[test]
    fn charge_scale_changes_strength_linearly() {
        let grid = exact_grid();
        let deci = field_at(DVec3::zero(), 1.0, &grid, &FieldConfig::default());
        let pico = field_at(
            DVec3::zero(),
            1.0,
            &grid,
            &FieldConfig::default().with_charge_scale(ChargeScale::Pico),
        );
        for (a, b) in deci.vectors().iter().zip(pico.vectors()) {
            assert_relative_eq!(a.x * 1.0e-2, b.x, max_relative = 1e-12);
        }
    }

    #[test]
    fn charge_position_comes_from_placement() {
        let charge = Charge::from_degrees(1.0, 90.0, 0.0, 0.1);
        let pos = charge.position();
        assert_abs_diff_eq!(pos.x, 0.1, epsilon = 1e-15);
        assert_abs_diff_eq!(pos.z, 0.0, epsilon = 1e-15);

        let grid = exact_grid();
        let config = FieldConfig::default();
        let direct = field_at(pos, 1.0, &grid, &config);
        assert_eq!(charge.field(&grid, &config), direct);
        assert_eq!(
            point::field_at_degrees(90.0, 0.0, 0.1, 1.0, &grid, &config),
            direct
        );
    }

    #[test]
    fn parallel_and_sequential_paths_are_identical() {
        let grid = make_grid(0.5, 20).unwrap();
        let sequential = FieldConfig {
            parallel_threshold: usize::MAX,
            ..FieldConfig::default()
        };
        let parallel = FieldConfig {
            parallel_threshold: 0,
            ..FieldConfig::default()
        };
        let pos = DVec3::new(0.03, -0.07, 0.05);
        assert_eq!(
            field_at(pos, -1.0, &grid, &sequential),
            field_at(pos, -1.0, &grid, &parallel)
        );
    }

    #[test]
    fn repeated_evaluation_is_bit_identical() {
        let grid = make_grid(0.5, 20).unwrap();
        let config = FieldConfig::default();
        let charge = Charge::from_degrees(1.0, 45.0, 180.0, 0.1);
        assert_eq!(charge.field(&grid, &config), charge.field(&grid, &config));
    }
}

mod shell {
    use super::*;

    #[test]
    fn interior_field_is_exactly_zero() {
        let r0 = 0.2;
        let shell = ShellDistribution::new(1.0, r0);
        let grid = make_grid(2.0 * r0, 21).unwrap();
        let config = FieldConfig::default().with_charge_scale(ChargeScale::Pico);
        let field = field_outside(&shell, &grid, &config);

        let mut inside = 0;
        for (p, e) in grid.points().iter().zip(field.vectors()) {
            if p.mag() < r0 {
                inside += 1;
                assert_eq!(*e, DVec3::zero());
            }
        }
        assert!(inside > 0);
    }

    #[test]
    fn exterior_matches_point_charge_at_twice_the_radius() {
        let r0 = 0.25;
        let shell = ShellDistribution::new(3.0, r0);
        // Samples at 0, ±0.5 on each axis.
        let grid = make_grid(2.0 * r0, 3).unwrap();
        let config = FieldConfig::default().with_charge_scale(ChargeScale::Pico);
        let shell_field = field_outside(&shell, &grid, &config);
        let point_field = field_at(DVec3::zero(), 3.0, &grid, &config);

        let on_axis = grid.index(2, 1, 1);
        assert_eq!(grid.points()[on_axis], DVec3::new(0.5, 0.0, 0.0));

        let e = shell_field.get(on_axis).unwrap();
        let expected = point_field.get(on_axis).unwrap();
        assert_relative_eq!(e.x, expected.x, max_relative = 1e-12);
        let kq = COULOMB_CONSTANT * 3.0e-12;
        assert_relative_eq!(e.mag(), kq / (0.5 * 0.5), max_relative = 1e-6);

        // Center sample is inside.
        assert_eq!(shell_field.get(grid.index(1, 1, 1)).unwrap(), DVec3::zero());
    }

    #[test]
    fn surface_counts_as_exterior() {
        let shell = ShellDistribution::new(1.0, 0.5);
        let on_surface = DVec3::new(0.5, 0.0, 0.0);
        let e = shell.field_at_point(on_surface, 1.0, 1.0e-10);
        assert!(e.x > 0.0);
    }

    #[test]
    fn offset_center_measures_from_center() {
        let center = DVec3::new(0.25, 0.0, 0.0);
        let shell = ShellDistribution::new(1.0, 0.1).with_center(center);
        assert_eq!(shell.field_at_point(center, 1.0, 1.0e-10), DVec3::zero());
        assert_eq!(
            shell.field_at_point(DVec3::zero(), 1.0, 1.0e-10),
            coulomb_field(DVec3::zero(), center, 1.0, 1.0e-10)
        );
    }
}

mod superposition {
    use super::*;
    use crate::error::FieldError;

    fn four_electrodes() -> Vec<Charge> {
        vec![
            Charge::from_degrees(1.0, 45.0, 180.0, 0.1),
            Charge::from_degrees(-1.0, 180.0, 45.0, 0.1),
            Charge::from_degrees(1.0, 90.0, 0.0, 0.1),
            Charge::from_degrees(-1.0, 0.0, 90.0, 0.1),
        ]
    }

    #[test]
    fn result_is_independent_of_charge_order() {
        let grid = make_grid(0.5, 12).unwrap();
        let config = FieldConfig::default();
        let charges = four_electrodes();

        let forward: Vec<_> = charges.iter().map(|c| c.field(&grid, &config)).collect();
        let mut reversed = forward.clone();
        reversed.reverse();
        let mut rotated = forward.clone();
        rotated.rotate_left(1);

        let a = superpose(&forward).unwrap();
        assert_fields_close(&a, &superpose(&reversed).unwrap());
        assert_fields_close(&a, &superpose(&rotated).unwrap());
    }

    #[test]
    fn total_is_componentwise_sum() {
        let grid = exact_grid();
        let config = FieldConfig::default();
        let a = field_at(DVec3::new(0.1, 0.0, 0.0), 1.0, &grid, &config);
        let b = field_at(DVec3::new(0.0, 0.1, 0.0), -1.0, &grid, &config);
        let total = superpose(&[a.clone(), b.clone()]).unwrap();
        for i in 0..grid.len() {
            assert_eq!(total.get(i).unwrap(), a.get(i).unwrap() + b.get(i).unwrap());
        }
    }

    #[test]
    fn like_charges_at_antipodes_cancel_at_center() {
        let grid = exact_grid();
        let config = FieldConfig::default();
        let a = DVec3::new(0.06, -0.03, 0.07);
        let total = superpose(&[
            field_at(a, 1.0, &grid, &config),
            field_at(-a, 1.0, &grid, &config),
        ])
        .unwrap();
        assert_eq!(total.get(origin_index(&grid)).unwrap(), DVec3::zero());
    }

    #[test]
    fn placed_antipodes_cancel_within_rounding() {
        let grid = exact_grid();
        let config = FieldConfig::default();
        let north = Charge::new(1.0, 0.0, 0.0, 0.1);
        let south = Charge::new(1.0, std::f64::consts::PI, 0.0, 0.1);
        let total = superpose(&[north.field(&grid, &config), south.field(&grid, &config)]).unwrap();
        let single = north.field(&grid, &config).get(origin_index(&grid)).unwrap().mag();
        let e = total.get(origin_index(&grid)).unwrap();
        assert!(e.mag() < single * 1e-12, "residual {:?}", e);
    }

    #[test]
    fn opposite_charges_at_antipodes_form_a_dipole_at_center() {
        let grid = exact_grid();
        let config = FieldConfig::default();
        let a = DVec3::new(0.0, 0.0, 0.1);
        let total = superpose(&[
            field_at(a, 1.0, &grid, &config),
            field_at(-a, -1.0, &grid, &config),
        ])
        .unwrap();
        let e = total.get(origin_index(&grid)).unwrap();
        let kq = COULOMB_CONSTANT * 1.0e-10;
        // Points from the positive charge towards the negative one.
        assert_eq!(e.x, 0.0);
        assert_eq!(e.y, 0.0);
        assert_relative_eq!(e.z, -2.0 * kq / (0.1 * 0.1), max_relative = 1e-6);
    }

    #[test]
    fn mismatched_grids_are_rejected() {
        let config = FieldConfig::default();
        let small = field_at(DVec3::zero(), 1.0, &make_grid(0.5, 4).unwrap(), &config);
        let large = field_at(DVec3::zero(), 1.0, &make_grid(0.5, 5).unwrap(), &config);
        assert_eq!(
            superpose(&[small.clone(), large]),
            Err(FieldError::ShapeMismatch {
                expected: [4, 4, 4],
                actual: [5, 5, 5],
            })
        );
        let mut acc = VectorField::zeros(&make_grid(0.5, 5).unwrap());
        assert!(acc.accumulate(&small).is_err());
    }

    #[test]
    fn same_shape_on_different_bounds_is_rejected() {
        let config = FieldConfig::default();
        let narrow = field_at(DVec3::zero(), 1.0, &make_grid(0.5, 4).unwrap(), &config);
        let wide = field_at(DVec3::zero(), 1.0, &make_grid(1.0, 4).unwrap(), &config);
        assert_eq!(narrow.shape(), wide.shape());
        assert_eq!(
            superpose(&[narrow.clone(), wide.clone()]),
            Err(FieldError::GridMismatch {
                expected: [0.5, 0.5, 0.5],
                actual: [1.0, 1.0, 1.0],
            })
        );
        let mut acc = VectorField::zeros(&make_grid(1.0, 4).unwrap());
        assert!(matches!(
            acc.accumulate(&narrow),
            Err(FieldError::GridMismatch { .. })
        ));
        assert!(acc.accumulate(&wide).is_ok());
    }

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(superpose(&[]), Err(FieldError::NoContributions));
    }

    #[test]
    fn magnitude_is_euclidean_norm() {
        let grid = exact_grid();
        let field = field_at(DVec3::new(0.1, 0.2, -0.1), 1.0, &grid, &FieldConfig::default());
        let mags = magnitudes(&field);
        assert_eq!(mags.len(), grid.len());
        for (m, v) in mags.iter().zip(field.vectors()) {
            assert_relative_eq!(*m, (v.x * v.x + v.y * v.y + v.z * v.z).sqrt());
        }
        let (ex, ey, ez) = field.components();
        assert_eq!(ex.len(), grid.len());
        assert_eq!(ey[3], field.vectors()[3].y);
        assert_eq!(ez[7], field.vectors()[7].z);
    }
}
