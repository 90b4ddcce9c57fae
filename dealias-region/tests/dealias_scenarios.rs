//! End-to-end dealiasing tests over small synthetic sweeps.

use dealias_model::{SweepGrid, VelocitySweep};
use dealias_region::{dealias_sweep, dealias_sweeps, DealiasOptions, Error};

const NYQUIST: f32 = 10.0;
const INTERVAL: f32 = 2.0 * NYQUIST;

fn no_exclusions(ray_count: usize, gate_count: usize) -> SweepGrid<bool> {
    SweepGrid::filled(ray_count, gate_count, false)
}

/// Folds a true velocity into the measured interval `[-nyquist, nyquist)`.
fn fold(velocity: f32, nyquist: f32) -> f32 {
    (velocity + nyquist).rem_euclid(2.0 * nyquist) - nyquist
}

#[test]
fn test_single_region_passes_through() {
    let velocities = SweepGrid::filled(4, 4, 5.0f32);
    let exclude = no_exclusions(4, 4);

    let corrected = dealias_sweep(&velocities, &exclude, NYQUIST, &DealiasOptions::new()).unwrap();

    assert_eq!(corrected.values(), velocities.values());
}

#[test]
fn test_two_regions_one_fold_apart() {
    // Left half +9 m/s, right half -9 m/s: the right half is +11 folded once.
    let mut velocities = SweepGrid::filled(4, 4, 9.0f32);
    for ray in 0..4 {
        for gate in 2..4 {
            *velocities.get_mut(ray, gate) = -9.0;
        }
    }
    let exclude = no_exclusions(4, 4);

    let corrected = dealias_sweep(&velocities, &exclude, NYQUIST, &DealiasOptions::new()).unwrap();

    // The two equal-size nodes merge with the earlier-labeled -9 region as
    // the base, folding the +9 half down to -11; the centering offset of
    // -8/16 folds rounds to zero and leaves the result alone.
    for ray in 0..4 {
        for gate in 0..2 {
            assert_eq!(*corrected.get(ray, gate), -11.0);
        }
        for gate in 2..4 {
            assert_eq!(*corrected.get(ray, gate), -9.0);
        }
    }
}

#[test]
fn test_two_regions_continuity_regardless_of_centering() {
    let mut velocities = SweepGrid::filled(4, 4, 9.0f32);
    for ray in 0..4 {
        for gate in 2..4 {
            *velocities.get_mut(ray, gate) = -9.0;
        }
    }
    let exclude = no_exclusions(4, 4);

    for centered in [false, true] {
        let options = DealiasOptions::new().with_centering(centered);
        let corrected = dealias_sweep(&velocities, &exclude, NYQUIST, &options).unwrap();

        // Whatever global offset is chosen, the seam must be healed: the
        // halves end up 2 m/s apart instead of 18.
        let left = *corrected.get(0, 0);
        let right = *corrected.get(0, 3);
        assert!((right - left - 2.0).abs() < 1e-3);
    }
}

#[test]
fn test_wrap_around_connects_first_and_last_rays() {
    let velocities = SweepGrid::new(
        8,
        1,
        vec![9.0, 9.0, 9.0, 9.0, -9.0, -9.0, -9.0, -9.0],
    );
    let exclude = no_exclusions(8, 1);

    let options = DealiasOptions::new().with_rays_wrap_around(true);
    let corrected = dealias_sweep(&velocities, &exclude, NYQUIST, &options).unwrap();

    assert_eq!(
        corrected.values(),
        &[-11.0, -11.0, -11.0, -11.0, -9.0, -9.0, -9.0, -9.0]
    );
}

#[test]
fn test_gap_jump_heals_fold_across_excluded_gates() {
    let velocities = SweepGrid::new(1, 6, vec![9.0, 9.0, 9.0, 0.0, 0.0, -9.0]);
    let mut exclude = no_exclusions(1, 6);
    *exclude.get_mut(0, 3) = true;
    *exclude.get_mut(0, 4) = true;

    let options = DealiasOptions::new().with_skip_along_ray(2);
    let corrected = dealias_sweep(&velocities, &exclude, NYQUIST, &options).unwrap();

    // The small -9 region unfolds up to +11; excluded gates keep their
    // measured values under the default keep_original policy.
    assert_eq!(corrected.values(), &[9.0, 9.0, 9.0, 0.0, 0.0, 11.0]);
}

#[test]
fn test_excluded_gates_become_nan_without_keep_original() {
    let velocities = SweepGrid::new(1, 6, vec![9.0, 9.0, 9.0, 0.0, 0.0, -9.0]);
    let mut exclude = no_exclusions(1, 6);
    *exclude.get_mut(0, 3) = true;
    *exclude.get_mut(0, 4) = true;

    let options = DealiasOptions::new()
        .with_skip_along_ray(2)
        .with_keep_original(false);
    let corrected = dealias_sweep(&velocities, &exclude, NYQUIST, &options).unwrap();

    assert_eq!(corrected.values()[..3], [9.0, 9.0, 9.0]);
    assert!(corrected.values()[3].is_nan());
    assert!(corrected.values()[4].is_nan());
    assert_eq!(corrected.values()[5], 11.0);
}

#[test]
fn test_exact_half_fold_tie_rounds_to_even() {
    // The two regions sit exactly half a Nyquist interval apart, so the
    // banker's-rounded fold is 0 and the merge changes nothing.
    let velocities = SweepGrid::new(1, 2, vec![5.0, -5.0]);
    let exclude = no_exclusions(1, 2);

    let corrected = dealias_sweep(&velocities, &exclude, NYQUIST, &DealiasOptions::new()).unwrap();

    assert_eq!(corrected.values(), &[5.0, -5.0]);
}

#[test]
fn test_regions_beyond_gap_budget_stay_unconnected() {
    let velocities = SweepGrid::new(1, 7, vec![9.0, 9.0, 9.0, 0.0, 0.0, 0.0, -9.0]);
    let mut exclude = no_exclusions(1, 7);
    for gate in 3..6 {
        *exclude.get_mut(0, gate) = true;
    }

    let options = DealiasOptions::new()
        .with_skip_along_ray(2)
        .with_skip_between_rays(2);
    let corrected = dealias_sweep(&velocities, &exclude, NYQUIST, &options).unwrap();

    // Three excluded gates exceed the budget of two: no edge, no unfolding.
    assert_eq!(corrected.values(), velocities.values());
}

#[test]
fn test_round_trip_recovers_field_up_to_uniform_offset() {
    // A field sweeping 0..30 m/s across rays, folded against a 10 m/s
    // Nyquist velocity. Dealiasing must recover the true field up to a
    // single whole-sweep fold offset.
    let (ray_count, gate_count) = (6, 8);
    let mut true_field = SweepGrid::filled(ray_count, gate_count, 0.0f32);
    let mut measured = SweepGrid::filled(ray_count, gate_count, 0.0f32);
    for ray in 0..ray_count {
        let velocity = 6.0 * ray as f32;
        for gate in 0..gate_count {
            *true_field.get_mut(ray, gate) = velocity;
            *measured.get_mut(ray, gate) = fold(velocity, NYQUIST);
        }
    }
    let exclude = no_exclusions(ray_count, gate_count);

    let options = DealiasOptions::new().with_rays_wrap_around(false);
    let corrected = dealias_sweep(&measured, &exclude, NYQUIST, &options).unwrap();

    let offset = (*corrected.get(0, 0) - *true_field.get(0, 0)) / INTERVAL;
    assert!(
        (offset - offset.round()).abs() < 1e-3,
        "offset {offset} is not a whole number of folds"
    );
    for ray in 0..ray_count {
        for gate in 0..gate_count {
            let expected = *true_field.get(ray, gate) + offset * INTERVAL;
            assert!(
                (*corrected.get(ray, gate) - expected).abs() < 1e-3,
                "gate ({ray}, {gate}) broke the uniform offset"
            );
        }
    }
}

#[test]
fn test_every_correction_is_a_whole_fold() {
    let (ray_count, gate_count) = (6, 8);
    let mut measured = SweepGrid::filled(ray_count, gate_count, 0.0f32);
    for ray in 0..ray_count {
        for gate in 0..gate_count {
            *measured.get_mut(ray, gate) = fold(6.0 * ray as f32, NYQUIST);
        }
    }
    let exclude = no_exclusions(ray_count, gate_count);

    let options = DealiasOptions::new().with_rays_wrap_around(false);
    let corrected = dealias_sweep(&measured, &exclude, NYQUIST, &options).unwrap();

    let mut total_folds = 0.0f32;
    for (output, input) in corrected.values().iter().zip(measured.values()) {
        let folds = (output - input) / INTERVAL;
        assert!(
            (folds - folds.round()).abs() < 1e-3,
            "correction {folds} is not an integer fold count"
        );
        total_folds += folds.round();
    }

    // Centering keeps the gate-weighted fold total within half the gates.
    assert!(total_folds.abs() <= (ray_count * gate_count) as f32 / 2.0);
}

#[test]
fn test_degenerate_nyquist_returns_input() {
    let velocities = SweepGrid::new(2, 2, vec![9.0, -9.0, 9.0, -9.0]);
    let exclude = no_exclusions(2, 2);

    let corrected = dealias_sweep(&velocities, &exclude, 0.0, &DealiasOptions::new()).unwrap();

    assert_eq!(corrected.values(), velocities.values());
}

#[test]
fn test_fully_excluded_sweep_returns_input() {
    let velocities = SweepGrid::new(2, 2, vec![9.0, -9.0, 9.0, -9.0]);
    let exclude = SweepGrid::filled(2, 2, true);

    let corrected = dealias_sweep(&velocities, &exclude, NYQUIST, &DealiasOptions::new()).unwrap();

    assert_eq!(corrected.values(), velocities.values());
}

#[test]
fn test_shape_mismatch_rejected() {
    let velocities = SweepGrid::filled(2, 3, 0.0f32);
    let exclude = SweepGrid::filled(2, 2, false);

    let result = dealias_sweep(&velocities, &exclude, NYQUIST, &DealiasOptions::new());

    assert_eq!(
        result,
        Err(Error::ShapeMismatch {
            velocity_rays: 2,
            velocity_gates: 3,
            exclude_rays: 2,
            exclude_gates: 2,
        })
    );
}

#[test]
fn test_explicit_limits_must_cover_nyquist_interval() {
    let velocities = SweepGrid::filled(2, 2, 0.0f32);
    let exclude = no_exclusions(2, 2);

    let options = DealiasOptions::new().with_interval_limits(vec![-5.0, 5.0]);
    let result = dealias_sweep(&velocities, &exclude, NYQUIST, &options);

    assert!(matches!(result, Err(Error::IntervalLimitsCoverage { .. })));
}

#[test]
fn test_explicit_limits_match_equivalent_splits() {
    let velocities = SweepGrid::new(1, 4, vec![8.0, 9.0, -9.0, -8.0]);
    let exclude = no_exclusions(1, 4);

    let by_splits = DealiasOptions::new().with_interval_splits(2);
    let by_limits = DealiasOptions::new().with_interval_limits(vec![-10.0, 0.0, 10.0]);

    let split_result = dealias_sweep(&velocities, &exclude, NYQUIST, &by_splits).unwrap();
    let limit_result = dealias_sweep(&velocities, &exclude, NYQUIST, &by_limits).unwrap();

    assert_eq!(split_result.values(), limit_result.values());
}

#[test]
fn test_multi_sweep_dealias_with_invalid_gates() {
    let first = VelocitySweep::new(
        SweepGrid::new(1, 4, vec![9.0, 9.0, -9.0, f32::NAN]),
        NYQUIST,
    );
    let second = VelocitySweep::new(SweepGrid::new(1, 2, vec![1.0, 2.0]), 5.0);

    let corrected = dealias_sweeps(&[first, second], &DealiasOptions::new()).unwrap();

    assert_eq!(corrected.len(), 2);
    // First sweep: the -9 gate unfolds to 11 against its 9 m/s neighbors;
    // the invalid gate is excluded and keeps its (NaN) measured value.
    assert_eq!(corrected[0].values()[..3], [9.0, 9.0, 11.0]);
    assert!(corrected[0].values()[3].is_nan());
    // Second sweep is already continuous under its own Nyquist velocity.
    assert_eq!(corrected[1].values(), &[1.0, 2.0]);
}
