//! # Mesh Errors
//!
//! Error types for sprite mesh generation. Degenerate geometry never fails a
//! build; only inputs that break the host contract are reported here.

use thiserror::Error;

/// Errors that can occur when a build request violates the input contract.
#[derive(Debug, Error, PartialEq)]
pub enum MeshError {
    /// Fill origin outside 0..=3
    #[error("Invalid fill origin: {origin} (expected 0..=3)")]
    InvalidFillOrigin { origin: u8 },

    /// Fill amount is NaN or infinite
    #[error("Invalid fill amount: {amount}")]
    InvalidFillAmount { amount: f64 },

    /// Pixels-per-unit factor is zero, negative or not finite
    #[error("Invalid pixels per unit: {value}")]
    InvalidPixelsPerUnit { value: f64 },

    /// A rect, sprite or color component is not finite
    #[error("Non-finite input: {message}")]
    NonFinite { message: String },
}

impl MeshError {
    /// Creates a non-finite input error.
    pub fn non_finite(message: impl Into<String>) -> Self {
        Self::NonFinite {
            message: message.into(),
        }
    }
}

/// Result type alias for mesh builds.
pub type MeshResult<T> = Result<T, MeshError>;
