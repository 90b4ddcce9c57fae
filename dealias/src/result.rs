//!
//! Unified error types for the dealias facade crate.
//!
//! This module provides a unified error type [`Error`] that consolidates
//! errors from the sub-crates (dealias-model, dealias-region) into a single
//! error surface for users of the facade crate.
//!
//! All sub-crate error types automatically convert to the unified [`Error`]
//! type via [`From`] trait implementations, enabling seamless error
//! propagation with the `?` operator. Error variants are conditionally
//! compiled based on the enabled features.
//!

use thiserror::Error as ThisError;

/// A unified result type using the facade-level [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the dealias facade crate.
///
/// Each variant wraps the error type from the corresponding sub-crate,
/// preserving the full error information and source chain.
#[derive(ThisError, Debug)]
pub enum Error {
    /// Error from the interchange model layer (dealias-model).
    ///
    /// This variant is available when the `model` feature is enabled
    /// (default). Model errors typically indicate mismatched grid shapes
    /// when combining fields and filters.
    #[cfg(feature = "model")]
    #[error("model error: {0}")]
    Model(#[from] dealias_model::ModelError),

    /// Error from the dealiasing engine (dealias-region).
    ///
    /// This variant is available when the `region` feature is enabled
    /// (default). Engine errors indicate invalid configuration, such as
    /// interval limits that do not cover the Nyquist interval, or
    /// mismatched input grids.
    #[cfg(feature = "region")]
    #[error("dealiasing error: {0}")]
    Region(#[from] dealias_region::result::Error),
}
