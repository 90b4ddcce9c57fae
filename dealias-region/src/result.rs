//!
//! Contains the Result and Error types for dealiasing operations.
//!

use thiserror::Error as ThisError;

/// A result type for dealiasing operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during dealiasing.
#[derive(ThisError, Debug, Clone, PartialEq)]
pub enum Error {
    /// The velocity and exclusion grids have different shapes.
    #[error(
        "velocity grid is {velocity_rays}x{velocity_gates} but exclusion grid \
         is {exclude_rays}x{exclude_gates}"
    )]
    ShapeMismatch {
        /// Rays in the velocity grid.
        velocity_rays: usize,
        /// Gates per ray in the velocity grid.
        velocity_gates: usize,
        /// Rays in the exclusion grid.
        exclude_rays: usize,
        /// Gates per ray in the exclusion grid.
        exclude_gates: usize,
    },

    /// The Nyquist interval must be split into at least one segment.
    #[error("interval_splits must be at least 1")]
    NoIntervalSplits,

    /// Explicit interval limits need at least two points to form a segment.
    #[error("interval limits need at least 2 points, found {found}")]
    IntervalLimitsTooShort {
        /// Number of limit points provided.
        found: usize,
    },

    /// Explicit interval limits must be strictly increasing.
    #[error("interval limits must be strictly increasing, violated at index {index}")]
    IntervalLimitsNotIncreasing {
        /// Index of the first limit that is not greater than its predecessor.
        index: usize,
    },

    /// Explicit interval limits must cover the full Nyquist interval.
    #[error(
        "interval limits [{lo}, {hi}] do not cover the nyquist interval \
         [-{nyquist_velocity}, {nyquist_velocity}]"
    )]
    IntervalLimitsCoverage {
        /// First interval limit.
        lo: f32,
        /// Last interval limit.
        hi: f32,
        /// Nyquist velocity for the sweep.
        nyquist_velocity: f32,
    },

    /// Error from the model layer.
    #[error("model error: {0}")]
    Model(#[from] dealias_model::ModelError),
}
