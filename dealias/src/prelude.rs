//! Convenient re-exports for common usage patterns.
//!
//! # Example
//!
//! ```ignore
//! use dealias::prelude::*;
//!
//! let sweep = VelocitySweep::new(velocities, nyquist_velocity);
//! let exclude = GateFilter::from_sweep(&sweep).into_mask();
//! let corrected = dealias_sweep(
//!     sweep.velocities(),
//!     &exclude,
//!     sweep.nyquist_velocity(),
//!     &DealiasOptions::new(),
//! )?;
//! ```
//!
//! # Terminology
//!
//! | Term | Description |
//! |------|-------------|
//! | `SweepGrid` | Rays-by-gates grid of per-gate values |
//! | `VelocitySweep` | Velocity grid with its Nyquist velocity |
//! | `GateFilter` | Builder for the gate-exclusion mask |
//! | `DealiasOptions` | Configuration for the region-based dealiaser |

pub use crate::{Error, Result};

#[cfg(feature = "model")]
pub use dealias_model::{GateFilter, SweepGrid, VelocitySweep};

#[cfg(feature = "region")]
pub use dealias_region::{dealias_sweep, dealias_sweeps, DealiasOptions};
