//! Error types for the energy_forecast crate

use series_math::MathError;
use thiserror::Error;

/// Custom error types for the energy_forecast crate
///
/// The selection and duration variants are input-validation failures. They
/// are raised before any random draw happens, so a failed request never
/// leaves partial output behind.
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Retrospective span that resolves to fewer than one sample
    #[error("Invalid span: {0}")]
    InvalidSpan(String),

    /// Forecast horizon outside the supported month counts
    #[error("Invalid horizon: {0} months (supported: 24, 60, 120)")]
    InvalidHorizon(u32),

    /// Evaluation test period that resolves to fewer than one sample
    #[error("Invalid test period: {0}")]
    InvalidTestPeriod(String),

    /// Model selection outside the registered models, or an empty selection
    #[error("Unknown model: {0}")]
    UnknownModel(String),

    /// Metric selection outside the supported metrics, or an empty selection
    #[error("Unknown metric: {0}")]
    UnknownMetric(String),

    /// Forecast target outside the supported targets
    #[error("Unknown target: {0}")]
    UnknownTarget(String),

    /// Data source outside the supported signal classes
    #[error("Unknown signal: {0}")]
    UnknownSignal(String),

    /// Error from series math operations
    #[error("Math error: {0}")]
    Math(#[from] MathError),

    /// Error building a sampling distribution
    #[error("Distribution error: {0}")]
    Distribution(#[from] rand_distr::NormalError),

    /// Error from IO operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error writing CSV output
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Error serializing output
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Error loading or validating configuration
    #[error("Config error: {0}")]
    Config(String),

    /// A pending run was cancelled before it produced a result
    #[error("Run cancelled before completion")]
    Cancelled,

    /// A background run failed without producing a result
    #[error("Run failed: {0}")]
    TaskFailed(String),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ForecastError>;

impl From<toml::de::Error> for ForecastError {
    fn from(err: toml::de::Error) -> Self {
        ForecastError::Config(err.to_string())
    }
}

impl ForecastError {
    /// Whether the error rejects the caller's selection rather than a
    /// failure during computation or output
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            ForecastError::InvalidSpan(_)
                | ForecastError::InvalidHorizon(_)
                | ForecastError::InvalidTestPeriod(_)
                | ForecastError::UnknownModel(_)
                | ForecastError::UnknownMetric(_)
                | ForecastError::UnknownTarget(_)
                | ForecastError::UnknownSignal(_)
        )
    }
}
