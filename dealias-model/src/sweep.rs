//! Velocity sweep type pairing a grid with its Nyquist velocity.

use crate::SweepGrid;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single sweep of measured Doppler radial velocities.
///
/// Pulsed-Doppler radars measure radial velocity modulo the Nyquist interval
/// `[-v_n, +v_n)` where `v_n` is the Nyquist velocity; velocities outside
/// this interval alias back into it. The Nyquist velocity is a per-sweep
/// property, so it travels with the grid.
///
/// Velocities are in m/s. Invalid measurements are `f32::NAN`.
///
/// # Example
///
/// ```
/// use dealias_model::{SweepGrid, VelocitySweep};
///
/// let grid = SweepGrid::filled(360, 100, 0.0f32);
/// let sweep = VelocitySweep::new(grid, 26.4).with_elevation_deg(0.5);
///
/// assert_eq!(sweep.nyquist_velocity(), 26.4);
/// assert_eq!(sweep.nyquist_interval(), 52.8);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VelocitySweep {
    velocities: SweepGrid<f32>,
    nyquist_velocity: f32,
    elevation_deg: Option<f32>,
}

impl VelocitySweep {
    /// Creates a new velocity sweep with the given Nyquist velocity in m/s.
    pub fn new(velocities: SweepGrid<f32>, nyquist_velocity: f32) -> Self {
        Self {
            velocities,
            nyquist_velocity,
            elevation_deg: None,
        }
    }

    /// Sets the elevation angle in degrees above horizontal.
    pub fn with_elevation_deg(mut self, elevation_deg: f32) -> Self {
        self.elevation_deg = Some(elevation_deg);
        self
    }

    /// The measured velocity grid.
    pub fn velocities(&self) -> &SweepGrid<f32> {
        &self.velocities
    }

    /// The Nyquist velocity in m/s.
    pub fn nyquist_velocity(&self) -> f32 {
        self.nyquist_velocity
    }

    /// The width of the Nyquist interval in m/s, twice the Nyquist velocity.
    /// Aliased velocities fold by integer multiples of this value.
    pub fn nyquist_interval(&self) -> f32 {
        2.0 * self.nyquist_velocity
    }

    /// Optional elevation angle in degrees above horizontal.
    pub fn elevation_deg(&self) -> Option<f32> {
        self.elevation_deg
    }

    /// Number of rays in the sweep.
    pub fn ray_count(&self) -> usize {
        self.velocities.ray_count()
    }

    /// Number of gates per ray.
    pub fn gate_count(&self) -> usize {
        self.velocities.gate_count()
    }

    /// Consumes the sweep and returns the velocity grid.
    pub fn into_velocities(self) -> SweepGrid<f32> {
        self.velocities
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_velocity_sweep_accessors() {
        let sweep = VelocitySweep::new(SweepGrid::filled(4, 8, 1.5f32), 10.0);

        assert_eq!(sweep.ray_count(), 4);
        assert_eq!(sweep.gate_count(), 8);
        assert_eq!(sweep.nyquist_velocity(), 10.0);
        assert_eq!(sweep.nyquist_interval(), 20.0);
        assert_eq!(sweep.elevation_deg(), None);
    }

    #[test]
    fn test_velocity_sweep_elevation() {
        let sweep = VelocitySweep::new(SweepGrid::filled(1, 1, 0.0f32), 8.0).with_elevation_deg(1.5);

        assert_eq!(sweep.elevation_deg(), Some(1.5));
    }
}
