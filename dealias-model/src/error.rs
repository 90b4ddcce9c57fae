//! Error types for model operations.

use thiserror::Error as ThisError;

/// Errors that can occur constructing or combining model types.
#[derive(ThisError, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// Two grids that must share a geometry have different shapes.
    #[error(
        "grid shape mismatch: expected {expected_rays}x{expected_gates}, \
         found {found_rays}x{found_gates}"
    )]
    ShapeMismatch {
        /// Expected number of rays.
        expected_rays: usize,
        /// Expected number of gates per ray.
        expected_gates: usize,
        /// Found number of rays.
        found_rays: usize,
        /// Found number of gates per ray.
        found_gates: usize,
    },

    /// Values array size does not match the grid geometry.
    #[error("values length {actual} does not match {ray_count} rays x {gate_count} gates")]
    ValuesSizeMismatch {
        /// Number of rays in the grid.
        ray_count: usize,
        /// Number of gates per ray.
        gate_count: usize,
        /// Actual number of values provided.
        actual: usize,
    },
}
