//! # Energy Forecast Workspace
//!
//! Umbrella crate for the energy forecasting workspace. It re-exports the
//! engine crate and the numeric helpers it is built on.
//!
//! ## Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use energy_forecast_workspace::forecast::{EvaluationEngine, MetricKind, ModelId, TestPeriod};
//!
//! let engine = EvaluationEngine::new(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap());
//! let matrix = engine
//!     .evaluate_seeded(&ModelId::ALL, &MetricKind::ALL, TestPeriod::LastYear.span(), Some(1))
//!     .unwrap();
//! assert_eq!(matrix.cells().count(), 12);
//! ```

/// Series synthesis, forecasting and evaluation
pub use energy_forecast as forecast;

/// Accuracy measures, pattern builders and trend fitting
pub use series_math as math;
