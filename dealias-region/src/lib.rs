//! Region-based Doppler velocity dealiasing for weather radar sweeps.
//!
//! Pulsed-Doppler radars measure radial velocity modulo the Nyquist interval
//! `[-v_n, +v_n)`; true velocities outside the interval alias back into it.
//! This crate recovers an integer fold count per gate by finding regions of
//! similar folded velocity, connecting neighboring regions into a weighted
//! network, and greedily merging the most strongly connected pair of regions
//! after unfolding one relative to the other, until the network is reduced
//! to isolated nodes.
//!
//! # Example
//!
//! ```
//! use dealias_model::SweepGrid;
//! use dealias_region::{dealias_sweep, DealiasOptions};
//!
//! // One ray whose outer gates folded once past the 10 m/s Nyquist velocity
//! let velocities = SweepGrid::new(1, 4, vec![8.0, 9.0, -9.0, -8.0]);
//! let exclude = SweepGrid::filled(1, 4, false);
//!
//! let corrected = dealias_sweep(&velocities, &exclude, 10.0, &DealiasOptions::new())?;
//!
//! // The seam between 9 and -9 is healed; the field is continuous.
//! assert_eq!(corrected.values(), &[-12.0, -11.0, -9.0, -8.0]);
//! # Ok::<(), dealias_region::result::Error>(())
//! ```
//!
//! # Crate Boundaries
//!
//! This crate provides **dealiasing computation** with the following
//! responsibilities and constraints:
//!
//! ## Responsibilities
//!
//! - Recover per-gate fold counts for a sweep of measured velocities
//! - Consume `dealias-model` types ([`SweepGrid`], [`VelocitySweep`])
//!
//! ## Constraints
//!
//! - **No data access or network operations**
//! - **No gate filtering policy** - callers provide the exclusion mask,
//!   typically built with [`dealias_model::GateFilter`]
//!
//! Sweeps are independent: the engine holds no cross-sweep state, and the
//! optional `parallel` feature dealiases the sweeps of
//! [`dealias_sweeps`] concurrently with rayon.

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::correctness)]
#![deny(missing_docs)]

use dealias_model::{GateFilter, SweepGrid, VelocitySweep};
use log::{debug, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

mod edges;
mod label;
mod network;
mod region;

pub mod options;
pub mod result;

pub use options::DealiasOptions;
pub use result::{Error, Result};

use network::EdgeTracker;
use region::RegionTracker;

/// Dealiases a single sweep of Doppler velocities.
///
/// Gates marked `true` in `exclude` take no part in dealiasing; whether they
/// keep their measured velocity in the output or become `f32::NAN` is
/// controlled by [`DealiasOptions::keep_original`].
///
/// Degenerate sweeps - a non-positive Nyquist velocity, every gate excluded,
/// or no two regions adjacent within the configured gap budgets - come back
/// unchanged rather than failing.
///
/// # Errors
///
/// Returns an error if:
/// - The velocity and exclusion grids have different shapes
/// - Explicit interval limits are too short, not strictly increasing, or do
///   not cover the Nyquist interval
/// - `interval_splits` is zero
pub fn dealias_sweep(
    velocities: &SweepGrid<f32>,
    exclude: &SweepGrid<bool>,
    nyquist_velocity: f32,
    options: &DealiasOptions,
) -> Result<SweepGrid<f32>> {
    if velocities.shape() != exclude.shape() {
        let (velocity_rays, velocity_gates) = velocities.shape();
        let (exclude_rays, exclude_gates) = exclude.shape();
        return Err(Error::ShapeMismatch {
            velocity_rays,
            velocity_gates,
            exclude_rays,
            exclude_gates,
        });
    }
    options.validate()?;

    if nyquist_velocity <= 0.0 {
        return Ok(velocities.clone());
    }

    let limits = interval_limits(nyquist_velocity, options)?;
    let (labels, region_count) = label::find_regions(velocities, exclude, &limits);

    let mut region_sizes = vec![0usize; region_count + 1];
    for &label in labels.values() {
        region_sizes[label as usize] += 1;
    }
    debug_assert_eq!(region_sizes.iter().sum::<usize>(), velocities.data_count());

    let pairs = edges::collect_gate_pairs(
        &labels,
        velocities,
        options.rays_wrap_around,
        options.skip_between_rays,
        options.skip_along_ray,
    );

    let (ray_count, gate_count) = velocities.shape();
    debug!(
        "sweep {}x{}: {} regions, {} excluded gates, {} boundary gate pairs",
        ray_count,
        gate_count,
        region_count,
        region_sizes[0],
        pairs.len()
    );

    let nyquist_interval = 2.0 * f64::from(nyquist_velocity);
    let mut edge_tracker = EdgeTracker::from_gate_pairs(&pairs, nyquist_interval, region_count + 1);
    let mut region_tracker = RegionTracker::new(&region_sizes[1..]);

    // Reduce the network one merge at a time until no live edges remain.
    let mut merges = 0usize;
    loop {
        if combine_regions(&mut region_tracker, &mut edge_tracker) {
            break;
        }
        merges += 1;
    }
    debug!("network reduced with {merges} merges");

    if options.centered {
        center_sweep(&mut region_tracker, &region_sizes);
    }

    let mut corrected = velocities.clone();
    let unwrap_numbers = region_tracker.unwrap_numbers();
    for (value, &label) in corrected.values_mut().iter_mut().zip(labels.values()) {
        let folds = unwrap_numbers[label as usize];
        if label != 0 && folds != 0 {
            *value += folds as f32 * nyquist_interval as f32;
        }
    }

    if !options.keep_original {
        for (value, &excluded) in corrected.values_mut().iter_mut().zip(exclude.values()) {
            if excluded {
                *value = f32::NAN;
            }
        }
    }

    Ok(corrected)
}

/// Dealiases a series of sweeps in the caller's order.
///
/// Each sweep is dealiased independently against its own Nyquist velocity,
/// with invalid (non-finite) measurements excluded. Callers needing other
/// exclusions, such as thresholding on a second moment, should build a
/// [`GateFilter`] themselves and call [`dealias_sweep`] per sweep.
///
/// With the `parallel` feature enabled the sweeps are processed concurrently.
///
/// # Errors
///
/// Returns the first error produced by [`dealias_sweep`].
pub fn dealias_sweeps(
    sweeps: &[VelocitySweep],
    options: &DealiasOptions,
) -> Result<Vec<SweepGrid<f32>>> {
    dealias_each(sweeps, options)
}

#[cfg(not(feature = "parallel"))]
fn dealias_each(sweeps: &[VelocitySweep], options: &DealiasOptions) -> Result<Vec<SweepGrid<f32>>> {
    sweeps
        .iter()
        .map(|sweep| dealias_filtered(sweep, options))
        .collect()
}

#[cfg(feature = "parallel")]
fn dealias_each(sweeps: &[VelocitySweep], options: &DealiasOptions) -> Result<Vec<SweepGrid<f32>>> {
    sweeps
        .par_iter()
        .map(|sweep| dealias_filtered(sweep, options))
        .collect()
}

fn dealias_filtered(sweep: &VelocitySweep, options: &DealiasOptions) -> Result<SweepGrid<f32>> {
    let exclude = GateFilter::from_sweep(sweep).into_mask();
    dealias_sweep(
        sweep.velocities(),
        &exclude,
        sweep.nyquist_velocity(),
        options,
    )
}

/// The velocity limits segmenting the Nyquist interval for region finding.
fn interval_limits(nyquist_velocity: f32, options: &DealiasOptions) -> Result<Vec<f32>> {
    match &options.interval_limits {
        Some(limits) => {
            let lo = limits[0];
            let hi = limits[limits.len() - 1];
            if lo > -nyquist_velocity || hi < nyquist_velocity {
                return Err(Error::IntervalLimitsCoverage {
                    lo,
                    hi,
                    nyquist_velocity,
                });
            }
            Ok(limits.clone())
        }
        None => {
            let splits = options.interval_splits;
            let interval = 2.0 * nyquist_velocity;
            Ok((0..=splits)
                .map(|split| -nyquist_velocity + interval * split as f32 / splits as f32)
                .collect())
        }
    }
}

/// Pops the heaviest edge and merges its two nodes, unfolding the smaller
/// node by the rounded average fold difference. Returns true once no live
/// edge remains.
fn combine_regions(region_tracker: &mut RegionTracker, edge_tracker: &mut EdgeTracker) -> bool {
    let Some(popped) = edge_tracker.pop_edge() else {
        return true;
    };
    let mut folds = round_half_even(popped.average_diff) as i32;

    // The smaller node merges into the larger. The average difference is
    // signed with node1 on the left, so unfolding node1 negates it.
    let (base_node, merge_node) =
        if region_tracker.node_size(popped.node1) > region_tracker.node_size(popped.node2) {
            (popped.node1, popped.node2)
        } else {
            folds = -folds;
            (popped.node2, popped.node1)
        };

    trace!("merging node {merge_node} into {base_node}, unfolding by {folds}");

    if folds != 0 {
        region_tracker.unwrap_node(merge_node, folds);
        edge_tracker.unwrap_node(merge_node, folds);
    }

    region_tracker.merge_nodes(base_node, merge_node);
    edge_tracker.merge_nodes(base_node, merge_node, popped.edge);

    false
}

/// Shifts the whole sweep by a uniform fold count so the gate-weighted
/// average number of unfoldings lands near zero.
fn center_sweep(region_tracker: &mut RegionTracker, region_sizes: &[usize]) {
    let dealiased_gates: usize = region_sizes[1..].iter().sum();
    if dealiased_gates == 0 {
        return;
    }

    let total_folds: i64 = region_sizes[1..]
        .iter()
        .zip(&region_tracker.unwrap_numbers()[1..])
        .map(|(&size, &folds)| size as i64 * i64::from(folds))
        .sum();

    let offset = round_half_even(total_folds as f64 / dealiased_gates as f64);
    if offset != 0 {
        debug!("centering sweep by {offset} folds");
        region_tracker.apply_sweep_offset(offset as i32);
    }
}

/// Rounds to the nearest integer, ties to the even neighbor.
fn round_half_even(value: f64) -> i64 {
    let floor = value.floor();
    let fraction = value - floor;
    let below = floor as i64;
    if fraction > 0.5 {
        below + 1
    } else if fraction < 0.5 {
        below
    } else if below % 2 == 0 {
        below
    } else {
        below + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_even() {
        assert_eq!(round_half_even(0.4), 0);
        assert_eq!(round_half_even(0.6), 1);
        assert_eq!(round_half_even(-0.4), 0);
        assert_eq!(round_half_even(-0.6), -1);
        assert_eq!(round_half_even(2.0), 2);
        assert_eq!(round_half_even(-3.0), -3);
    }

    #[test]
    fn test_round_half_even_ties() {
        assert_eq!(round_half_even(0.5), 0);
        assert_eq!(round_half_even(1.5), 2);
        assert_eq!(round_half_even(2.5), 2);
        assert_eq!(round_half_even(-0.5), 0);
        assert_eq!(round_half_even(-1.5), -2);
        assert_eq!(round_half_even(-2.5), -2);
    }

    #[test]
    fn test_default_interval_limits_span_nyquist() {
        let options = DealiasOptions::new().with_interval_splits(4);
        let Ok(limits) = interval_limits(10.0, &options) else {
            panic!("default limits are always valid");
        };

        assert_eq!(limits.len(), 5);
        assert!((limits[0] + 10.0).abs() < 1e-6);
        assert!((limits[2]).abs() < 1e-6);
        assert!((limits[4] - 10.0).abs() < 1e-6);
    }

    #[test]
    fn test_explicit_interval_limits_must_cover_nyquist() {
        let options = DealiasOptions::new().with_interval_limits(vec![-5.0, 0.0, 5.0]);

        let result = interval_limits(10.0, &options);
        assert_eq!(
            result,
            Err(Error::IntervalLimitsCoverage {
                lo: -5.0,
                hi: 5.0,
                nyquist_velocity: 10.0,
            })
        );
    }
}
