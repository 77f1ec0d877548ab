//! Forecasting models and their error profiles
//!
//! Models are a closed set of identifiers. Each identifier maps to a row in
//! a static table instead of being branched on throughout the engines, and
//! forecasting goes through the [`ForecastModel`] trait so a fitted backend
//! can replace a synthetic profile without changing callers.

use crate::error::{ForecastError, Result};
use crate::metrics::MetricKind;
use crate::target::ForecastTarget;
use rand::RngCore;
use serde::Serialize;
use std::fmt::{self, Debug};
use std::str::FromStr;

pub mod ensemble;
pub mod profile;

pub use ensemble::EnsembleModel;
pub use profile::ProfileModel;

/// UI alias for the ensemble model
pub const ENSEMBLE_ALIAS: &str = "ARIMA + LSTM + XGBoost";

/// Registered model identifiers, in canonical order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum ModelId {
    Arima,
    XgBoost,
    Lstm,
    Ensemble,
}

/// Mean and spread of a model's score under one metric
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ErrorProfile {
    pub mean: f64,
    pub std_dev: f64,
}

/// How a single (non-ensemble) model perturbs a forecast
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ForecastProfile {
    /// Multiplier on the target's level noise
    pub noise_scale: f64,
    /// Multiplier on the target's band width
    pub band_scale: f64,
}

/// Historical-accuracy stand-in used by evaluation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EvaluationProfile {
    /// Relative spread of predicted around actual values
    pub comparison_error_factor: f64,
    pub rmse: ErrorProfile,
    pub mae: ErrorProfile,
    pub mape: ErrorProfile,
}

impl EvaluationProfile {
    pub fn metric(&self, metric: MetricKind) -> ErrorProfile {
        match metric {
            MetricKind::Rmse => self.rmse,
            MetricKind::Mae => self.mae,
            MetricKind::Mape => self.mape,
        }
    }
}

const fn err(mean: f64, std_dev: f64) -> ErrorProfile {
    ErrorProfile { mean, std_dev }
}

static FORECAST_PROFILES: [(ModelId, ForecastProfile); 3] = [
    (
        ModelId::Arima,
        ForecastProfile {
            noise_scale: 1.0,
            band_scale: 1.0,
        },
    ),
    (
        ModelId::XgBoost,
        ForecastProfile {
            noise_scale: 0.9,
            band_scale: 0.95,
        },
    ),
    (
        ModelId::Lstm,
        ForecastProfile {
            noise_scale: 0.8,
            band_scale: 0.9,
        },
    ),
];

// Indexed by `ModelId` discriminant
static EVALUATION_PROFILES: [EvaluationProfile; 4] = [
    EvaluationProfile {
        comparison_error_factor: 0.12,
        rmse: err(500.0, 50.0),
        mae: err(400.0, 30.0),
        mape: err(8.0, 0.8),
    },
    EvaluationProfile {
        comparison_error_factor: 0.09,
        rmse: err(450.0, 40.0),
        mae: err(350.0, 25.0),
        mape: err(7.0, 0.7),
    },
    EvaluationProfile {
        comparison_error_factor: 0.07,
        rmse: err(400.0, 30.0),
        mae: err(300.0, 20.0),
        mape: err(6.0, 0.6),
    },
    EvaluationProfile {
        comparison_error_factor: 0.05,
        rmse: err(350.0, 20.0),
        mae: err(250.0, 15.0),
        mape: err(5.0, 0.5),
    },
];

impl ModelId {
    pub const ALL: [ModelId; 4] = [
        ModelId::Arima,
        ModelId::XgBoost,
        ModelId::Lstm,
        ModelId::Ensemble,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ModelId::Arima => "ARIMA",
            ModelId::XgBoost => "XGBoost",
            ModelId::Lstm => "LSTM",
            ModelId::Ensemble => "Ensemble",
        }
    }

    /// Models blended by this one, empty for single models
    pub fn constituents(self) -> &'static [ModelId] {
        match self {
            ModelId::Ensemble => &[ModelId::Arima, ModelId::XgBoost, ModelId::Lstm],
            _ => &[],
        }
    }

    pub fn is_ensemble(self) -> bool {
        !self.constituents().is_empty()
    }

    /// Forecast perturbation for a single model, `None` for the ensemble
    pub fn forecast_profile(self) -> Option<&'static ForecastProfile> {
        FORECAST_PROFILES
            .iter()
            .find(|(id, _)| *id == self)
            .map(|(_, profile)| profile)
    }

    pub fn evaluation_profile(self) -> &'static EvaluationProfile {
        &EVALUATION_PROFILES[self as usize]
    }

    /// Instantiate the forecasting model registered for this identifier
    pub fn model(self) -> Result<Box<dyn ForecastModel>> {
        if self.is_ensemble() {
            let members = self
                .constituents()
                .iter()
                .map(|id| ProfileModel::new(*id))
                .collect::<Result<Vec<_>>>()?;
            Ok(Box::new(EnsembleModel::new(members)?))
        } else {
            Ok(Box::new(ProfileModel::new(self)?))
        }
    }
}

impl FromStr for ModelId {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case(ENSEMBLE_ALIAS) {
            return Ok(ModelId::Ensemble);
        }

        Self::ALL
            .into_iter()
            .find(|m| m.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| ForecastError::UnknownModel(s.to_string()))
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Common interface for forecasting models
pub trait ForecastModel: Debug + Send + Sync {
    /// Name of the model
    fn name(&self) -> &str;

    /// Relative half-width of the uncertainty band for `target`
    fn band_width(&self, target: ForecastTarget) -> f64;

    /// Point forecasts for `horizon` consecutive months
    fn point_forecast(
        &self,
        target: ForecastTarget,
        horizon: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<f64>>;
}
