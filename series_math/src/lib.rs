//! # Series Math
//!
//! Numeric primitives shared by the energy series synthesizer, the forecast
//! engine and the evaluation engine. Everything here is a pure function of
//! its inputs; randomness lives in the callers.

use thiserror::Error;

pub mod accuracy;
pub mod patterns;
pub mod regression;

pub use accuracy::{mean_absolute_error, mean_absolute_percentage_error, root_mean_squared_error};
pub use patterns::{linspace, sine_pattern, tile};
pub use regression::{elementwise_mean, LinearFit};

/// Errors that can occur in series calculations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("Insufficient data for calculation: {0}")]
    InsufficientData(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Calculation error: {0}")]
    CalculationError(String),
}

/// Result type for series math operations
pub type Result<T> = std::result::Result<T, MathError>;
