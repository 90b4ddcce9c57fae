//! Dealias a synthetic folded sweep and print a summary.
//!
//! This example demonstrates using the facade API to build a sweep, filter
//! invalid gates, and recover folded velocities.
//!
//! Run with:
//! ```bash
//! RUST_LOG=debug cargo run --example dealias_synthetic
//! ```

use dealias::prelude::*;
use log::info;

const NYQUIST: f32 = 26.4;
const RAY_COUNT: usize = 360;
const GATE_COUNT: usize = 200;

fn main() -> dealias::Result<()> {
    env_logger::init();

    let sweep = synthetic_sweep();
    info!(
        "Built synthetic sweep: {} rays x {} gates, nyquist {} m/s",
        sweep.ray_count(),
        sweep.gate_count(),
        sweep.nyquist_velocity()
    );

    let exclude = GateFilter::from_sweep(&sweep).into_mask();
    let corrected = dealias_sweep(
        sweep.velocities(),
        &exclude,
        sweep.nyquist_velocity(),
        &DealiasOptions::new(),
    )?;

    let folded = count_folded(&sweep, &corrected);
    let (min, max) = velocity_span(&corrected);

    println!("=== Dealiasing Summary ===");
    println!("Sweep: {} rays x {} gates", RAY_COUNT, GATE_COUNT);
    println!("Nyquist velocity: {} m/s", NYQUIST);
    println!("Gates unfolded: {}", folded);
    println!("Corrected span: {:.1} to {:.1} m/s", min, max);

    Ok(())
}

/// A rotating velocity couplet strong enough to fold against the Nyquist
/// velocity, with a few spokes of invalid gates.
fn synthetic_sweep() -> VelocitySweep {
    let mut velocities = SweepGrid::filled(RAY_COUNT, GATE_COUNT, 0.0f32);

    for ray in 0..RAY_COUNT {
        let azimuth = ray as f32 / RAY_COUNT as f32 * std::f32::consts::TAU;
        for gate in 0..GATE_COUNT {
            let range = gate as f32 / GATE_COUNT as f32;
            let true_velocity = 1.6 * NYQUIST * azimuth.sin() * (1.0 - 0.5 * range);

            *velocities.get_mut(ray, gate) = if ray % 45 == 0 && gate % 4 == 0 {
                f32::NAN
            } else {
                (true_velocity + NYQUIST).rem_euclid(2.0 * NYQUIST) - NYQUIST
            };
        }
    }

    VelocitySweep::new(velocities, NYQUIST).with_elevation_deg(0.5)
}

/// Counts gates whose velocity changed, i.e. gates that were unfolded.
fn count_folded(sweep: &VelocitySweep, corrected: &SweepGrid<f32>) -> usize {
    sweep
        .velocities()
        .values()
        .iter()
        .zip(corrected.values())
        .filter(|(before, after)| before != after && after.is_finite())
        .count()
}

/// The finite min and max of the corrected field.
fn velocity_span(corrected: &SweepGrid<f32>) -> (f32, f32) {
    corrected
        .values()
        .iter()
        .filter(|value| value.is_finite())
        .fold((f32::MAX, f32::MIN), |(min, max), &value| {
            (min.min(value), max.max(value))
        })
}
