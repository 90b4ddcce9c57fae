#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::correctness)]

//! # dealias
//!
//! Doppler velocity dealiasing for weather radar data.
//!
//! This facade crate ties together the interchange model and the
//! region-based dealiasing engine behind feature flags:
//!
//! - `model`: interchange types ([`SweepGrid`](dealias_model::SweepGrid),
//!   [`VelocitySweep`](dealias_model::VelocitySweep),
//!   [`GateFilter`](dealias_model::GateFilter))
//! - `region`: the region-based dealiaser (implies `model`)
//! - `serde`: serialization support for the model types
//! - `parallel`: multi-sweep dealiasing with rayon
//!
//! All core features are enabled by default.
//!
//! # Example
//!
//! ```
//! use dealias::prelude::*;
//!
//! let velocities = SweepGrid::new(1, 4, vec![8.0, 9.0, -9.0, -8.0]);
//! let sweep = VelocitySweep::new(velocities, 10.0);
//! let exclude = GateFilter::from_sweep(&sweep).into_mask();
//!
//! let corrected = dealias_sweep(
//!     sweep.velocities(),
//!     &exclude,
//!     sweep.nyquist_velocity(),
//!     &DealiasOptions::new(),
//! )?;
//! assert_eq!(corrected.gate_count(), 4);
//! # Ok::<(), dealias::Error>(())
//! ```

pub mod prelude;
pub mod result;

pub use result::{Error, Result};

/// Interchange model types.
#[cfg(feature = "model")]
pub use dealias_model as model;

/// The region-based dealiasing engine.
#[cfg(feature = "region")]
pub use dealias_region as region;

// Top-level functions for dealiasing sweeps
#[cfg(feature = "region")]
pub use dealias_region::{dealias_sweep, dealias_sweeps, DealiasOptions};
