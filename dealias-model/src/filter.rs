//! Gate filter for excluding gates from processing.

use crate::{ModelError, SweepGrid, VelocitySweep};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A builder for the boolean gate-exclusion mask consumed by processing
/// algorithms. A gate marked `true` is excluded.
///
/// A fresh filter includes every gate. Exclusion methods accumulate: a gate
/// excluded by any call stays excluded. Threshold methods compare against a
/// co-located field of the same geometry, such as cross-correlation ratio or
/// signal-to-noise, so contaminated gates can be kept out of the dealiaser.
///
/// # Example
///
/// ```
/// use dealias_model::{GateFilter, SweepGrid, VelocitySweep};
///
/// let velocities = SweepGrid::new(1, 3, vec![5.0, f32::NAN, -3.0]);
/// let sweep = VelocitySweep::new(velocities, 26.4);
///
/// let filter = GateFilter::from_sweep(&sweep);
/// assert!(!filter.is_excluded(0, 0));
/// assert!(filter.is_excluded(0, 1));
/// assert_eq!(filter.excluded_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GateFilter {
    excluded: SweepGrid<bool>,
}

impl GateFilter {
    /// Creates a filter of the given shape with every gate included.
    pub fn all_included(ray_count: usize, gate_count: usize) -> Self {
        Self {
            excluded: SweepGrid::filled(ray_count, gate_count, false),
        }
    }

    /// Creates a filter for a velocity sweep with invalid (non-finite)
    /// measurements excluded.
    pub fn from_sweep(sweep: &VelocitySweep) -> Self {
        let mut filter = Self::all_included(sweep.ray_count(), sweep.gate_count());
        // Shapes match by construction.
        let _ = filter.exclude_invalid(sweep.velocities());
        filter
    }

    /// Excludes gates whose value in `field` is not finite (NaN or infinite).
    pub fn exclude_invalid(&mut self, field: &SweepGrid<f32>) -> Result<(), ModelError> {
        self.check_shape(field.shape())?;
        for (excluded, value) in self.excluded.values_mut().iter_mut().zip(field.values()) {
            if !value.is_finite() {
                *excluded = true;
            }
        }
        Ok(())
    }

    /// Excludes gates marked `true` in an existing mask.
    pub fn exclude_masked(&mut self, mask: &SweepGrid<bool>) -> Result<(), ModelError> {
        self.check_shape(mask.shape())?;
        for (excluded, masked) in self.excluded.values_mut().iter_mut().zip(mask.values()) {
            if *masked {
                *excluded = true;
            }
        }
        Ok(())
    }

    /// Excludes gates whose value in `field` is below `threshold`.
    pub fn exclude_below(
        &mut self,
        field: &SweepGrid<f32>,
        threshold: f32,
    ) -> Result<(), ModelError> {
        self.check_shape(field.shape())?;
        for (excluded, value) in self.excluded.values_mut().iter_mut().zip(field.values()) {
            if *value < threshold {
                *excluded = true;
            }
        }
        Ok(())
    }

    /// Excludes gates whose value in `field` is above `threshold`.
    pub fn exclude_above(
        &mut self,
        field: &SweepGrid<f32>,
        threshold: f32,
    ) -> Result<(), ModelError> {
        self.check_shape(field.shape())?;
        for (excluded, value) in self.excluded.values_mut().iter_mut().zip(field.values()) {
            if *value > threshold {
                *excluded = true;
            }
        }
        Ok(())
    }

    /// Whether the gate at (ray, gate) is excluded.
    pub fn is_excluded(&self, ray: usize, gate: usize) -> bool {
        *self.excluded.get(ray, gate)
    }

    /// Number of excluded gates.
    pub fn excluded_count(&self) -> usize {
        self.excluded.values().iter().filter(|&&e| e).count()
    }

    /// The exclusion mask as a grid, `true` meaning excluded.
    pub fn excluded(&self) -> &SweepGrid<bool> {
        &self.excluded
    }

    /// Consumes the filter and returns the exclusion mask.
    pub fn into_mask(self) -> SweepGrid<bool> {
        self.excluded
    }

    fn check_shape(&self, found: (usize, usize)) -> Result<(), ModelError> {
        let expected = self.excluded.shape();
        if expected != found {
            return Err(ModelError::ShapeMismatch {
                expected_rays: expected.0,
                expected_gates: expected.1,
                found_rays: found.0,
                found_gates: found.1,
            });
        }
        Ok(())
    }
}
