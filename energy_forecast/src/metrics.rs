//! Accuracy metrics for comparing predicted values with actual values

use crate::error::{ForecastError, Result};
use serde::Serialize;
use series_math::{mean_absolute_error, mean_absolute_percentage_error, root_mean_squared_error};
use std::fmt;
use std::str::FromStr;

/// Selection label that expands to every metric
pub const ALL_METRICS_LABEL: &str = "All Metrics";

/// Supported accuracy metrics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum MetricKind {
    /// Root Mean Squared Error
    Rmse,
    /// Mean Absolute Error
    Mae,
    /// Mean Absolute Percentage Error, in percent
    Mape,
}

impl MetricKind {
    pub const ALL: [MetricKind; 3] = [MetricKind::Rmse, MetricKind::Mae, MetricKind::Mape];

    pub fn label(self) -> &'static str {
        match self {
            MetricKind::Rmse => "RMSE",
            MetricKind::Mae => "MAE",
            MetricKind::Mape => "MAPE",
        }
    }

    /// Every supported metric is an error measure, so smaller scores win
    pub fn lower_is_better(self) -> bool {
        true
    }

    /// Whether score `a` beats score `b` under this metric's polarity
    pub fn is_better(self, a: f64, b: f64) -> bool {
        if self.lower_is_better() {
            a < b
        } else {
            a > b
        }
    }

    /// Parse a metric selection, expanding "All Metrics" to every metric
    pub fn parse_selection(s: &str) -> Result<Vec<MetricKind>> {
        if s.trim().eq_ignore_ascii_case(ALL_METRICS_LABEL) {
            Ok(Self::ALL.to_vec())
        } else {
            Ok(vec![s.parse()?])
        }
    }
}

impl FromStr for MetricKind {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|m| m.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| ForecastError::UnknownMetric(s.to_string()))
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Realized accuracy of a predicted series against its actual values
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AccuracyReport {
    pub rmse: f64,
    pub mae: f64,
    pub mape: f64,
}

impl AccuracyReport {
    /// Score `predicted` against `actual`
    pub fn compute(actual: &[f64], predicted: &[f64]) -> Result<Self> {
        Ok(Self {
            rmse: root_mean_squared_error(actual, predicted)?,
            mae: mean_absolute_error(actual, predicted)?,
            mape: mean_absolute_percentage_error(actual, predicted)?,
        })
    }

    pub fn score(&self, metric: MetricKind) -> f64 {
        match metric {
            MetricKind::Rmse => self.rmse,
            MetricKind::Mae => self.mae,
            MetricKind::Mape => self.mape,
        }
    }
}

impl fmt::Display for AccuracyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Forecast Accuracy Metrics:")?;
        writeln!(f, "  RMSE:  {:.4}", self.rmse)?;
        writeln!(f, "  MAE:   {:.4}", self.mae)?;
        writeln!(f, "  MAPE:  {:.4}%", self.mape)?;
        Ok(())
    }
}
