//!
//! # dealias-model
//! Interchange types for Doppler velocity dealiasing. Provides uniform grid
//! structures for per-gate radar data along with a gate filter for excluding
//! invalid or contaminated measurements before processing.
//!
//! # Types
//!
//! - [`SweepGrid<T>`] - Rectangular rays-by-gates grid of per-gate values
//! - [`VelocitySweep`] - Velocity grid paired with its Nyquist velocity
//! - [`GateFilter`] - Builder for the boolean gate-exclusion mask
//!
//! # Invalid Values
//!
//! Invalid measurements (below threshold, range folded, etc.) are represented
//! as `f32::NAN` in value grids. [`GateFilter::exclude_invalid`] marks such
//! gates for exclusion.
//!
//! An optional `serde` feature implements `serde::Serialize` and
//! `serde::Deserialize` for all models.
//!

#![forbid(unsafe_code)]
#![warn(clippy::correctness)]

mod error;
mod filter;
mod grid;
mod sweep;

pub use error::ModelError;
pub use filter::GateFilter;
pub use grid::SweepGrid;
pub use sweep::VelocitySweep;
