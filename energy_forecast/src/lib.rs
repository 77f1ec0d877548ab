//! # Energy Forecast
//!
//! Synthetic time-series generation, multi-model forecasting and comparative
//! evaluation for regional electricity demand and price.
//!
//! ## Features
//!
//! - Demand, temperature and economic-index series built from a base level,
//!   daily and seasonal oscillation, trend and Gaussian noise
//! - Monthly demand and price forecasts with uncertainty bands from ARIMA,
//!   XGBoost and LSTM profiles, plus an ensemble that averages them
//! - Model × metric accuracy matrices (RMSE, MAE, MAPE) and
//!   actual-versus-predicted diagnostics
//! - Cancellable background runs that simulate model-fitting latency
//!
//! Every engine takes its random generator from the caller, so a seed fixes
//! the output bit for bit and concurrent calls never share generator state.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use energy_forecast::{ForecastEngine, ForecastTarget, ModelId};
//!
//! let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
//! let engine = ForecastEngine::new(now);
//!
//! let result = engine
//!     .forecast_seeded(ForecastTarget::Demand, ModelId::Ensemble, 24, Some(7))
//!     .unwrap();
//!
//! assert_eq!(result.horizon(), 24);
//! assert!(result.lower()[0] <= result.values()[0]);
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod evaluation;
pub mod forecast;
pub mod metrics;
pub mod models;
pub mod periods;
pub mod presentation;
pub mod runner;
pub mod signal;
pub mod synth;
pub mod target;

// Re-export commonly used types
pub use crate::config::EngineConfig;
pub use crate::data::{Granularity, TimeSeries};
pub use crate::error::{ForecastError, Result};
pub use crate::evaluation::{ComparisonSeries, EvaluationEngine, EvaluationMatrix};
pub use crate::forecast::{ForecastEngine, ForecastResult, ForecastSummary};
pub use crate::metrics::{AccuracyReport, MetricKind};
pub use crate::models::{ForecastModel, ModelId};
pub use crate::periods::{ForecastHorizon, RetrospectivePeriod, TestPeriod};
pub use crate::presentation::{select_view, EvaluationView};
pub use crate::runner::{ModelRunner, PendingRun};
pub use crate::signal::SignalClass;
pub use crate::synth::{request_rng, SeriesSynthesizer};
pub use crate::target::ForecastTarget;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
