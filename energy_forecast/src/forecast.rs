//! Forward-looking forecasts with uncertainty bands

use crate::data::{write_columns, Granularity, TimeSeries};
use crate::error::Result;
use crate::models::{ForecastModel, ModelId};
use crate::periods::ForecastHorizon;
use crate::synth::request_rng;
use crate::target::ForecastTarget;
use chrono::{DateTime, Utc};
use rand::RngCore;
use serde::Serialize;
use series_math::MathError;
use statrs::statistics::Statistics;
use std::fmt;
use std::io::Write;
use tracing::{debug, info};

/// Point forecasts with lower and upper bounds on a shared monthly axis
///
/// `lower[i] <= forecast[i] <= upper[i]` holds at every index. The band is a
/// fixed multiple of the point value: `forecast * (1 - w)` and
/// `forecast * (1 + w)`, ordered so the invariant survives negative values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastResult {
    target: ForecastTarget,
    model: String,
    forecast: TimeSeries,
    lower: Vec<f64>,
    upper: Vec<f64>,
    band_width: f64,
}

/// One row of a forecast table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ForecastPoint {
    pub timestamp: DateTime<Utc>,
    pub forecast: f64,
    pub lower: f64,
    pub upper: f64,
}

/// Headline figures for a forecast
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ForecastSummary {
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

impl ForecastResult {
    /// Wrap a point forecast and derive its band from `band_width`
    pub fn new(
        target: ForecastTarget,
        model: impl Into<String>,
        forecast: TimeSeries,
        band_width: f64,
    ) -> Result<Self> {
        if !band_width.is_finite() || !(0.0..1.0).contains(&band_width) {
            return Err(MathError::InvalidInput(format!(
                "Band width must be in [0, 1), got {}",
                band_width
            ))
            .into());
        }

        let (lower, upper): (Vec<f64>, Vec<f64>) = forecast
            .values()
            .iter()
            .map(|&v| {
                let low = v * (1.0 - band_width);
                let high = v * (1.0 + band_width);
                if low <= high {
                    (low, high)
                } else {
                    (high, low)
                }
            })
            .unzip();

        Ok(Self {
            target,
            model: model.into(),
            forecast,
            lower,
            upper,
            band_width,
        })
    }

    pub fn target(&self) -> ForecastTarget {
        self.target
    }

    /// Name of the model that produced the forecast
    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn forecast(&self) -> &TimeSeries {
        &self.forecast
    }

    pub fn values(&self) -> &[f64] {
        self.forecast.values()
    }

    pub fn timestamps(&self) -> &[DateTime<Utc>] {
        self.forecast.timestamps()
    }

    pub fn lower(&self) -> &[f64] {
        &self.lower
    }

    pub fn upper(&self) -> &[f64] {
        &self.upper
    }

    /// Relative half-width used for the band
    pub fn band_width(&self) -> f64 {
        self.band_width
    }

    /// Number of months forecasted
    pub fn horizon(&self) -> usize {
        self.forecast.len()
    }

    pub fn points(&self) -> impl Iterator<Item = ForecastPoint> + '_ {
        self.forecast
            .iter()
            .zip(self.lower.iter().zip(&self.upper))
            .map(|((timestamp, forecast), (&lower, &upper))| ForecastPoint {
                timestamp,
                forecast,
                lower,
                upper,
            })
    }

    pub fn summary(&self) -> ForecastSummary {
        let values = self.forecast.values();
        ForecastSummary {
            mean: values.iter().mean(),
            min: Statistics::min(values.iter()),
            max: Statistics::max(values.iter()),
        }
    }

    /// Write the forecast table as CSV
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        write_columns(
            writer,
            self.forecast.timestamps(),
            &[self.target.unit(), "Lower Bound", "Upper Bound"],
            &[
                self.forecast.values(),
                self.lower.as_slice(),
                self.upper.as_slice(),
            ],
        )
    }

    /// Serialize the forecast to JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl fmt::Display for ForecastSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Mean Forecast:    {:.2}", self.mean)?;
        writeln!(f, "Maximum Forecast: {:.2}", self.max)?;
        writeln!(f, "Minimum Forecast: {:.2}", self.min)?;
        Ok(())
    }
}

/// Produces monthly forecasts starting at a fixed reference instant
#[derive(Debug, Clone, Copy)]
pub struct ForecastEngine {
    reference: DateTime<Utc>,
}

impl ForecastEngine {
    pub fn new(reference: DateTime<Utc>) -> Self {
        Self { reference }
    }

    pub fn reference(&self) -> DateTime<Utc> {
        self.reference
    }

    /// Forecast `target` with a registered model over `horizon_months`
    ///
    /// `horizon_months` must be 24, 60 or 120, otherwise `InvalidHorizon`.
    pub fn forecast<R: RngCore>(
        &self,
        target: ForecastTarget,
        model: ModelId,
        horizon_months: u32,
        rng: &mut R,
    ) -> Result<ForecastResult> {
        let horizon = ForecastHorizon::try_from(horizon_months)?;
        let backend = model.model()?;
        self.forecast_with(target, backend.as_ref(), horizon, rng)
    }

    /// Same as [`forecast`](Self::forecast) with a generator built from `seed`
    pub fn forecast_seeded(
        &self,
        target: ForecastTarget,
        model: ModelId,
        horizon_months: u32,
        seed: Option<u64>,
    ) -> Result<ForecastResult> {
        self.forecast(target, model, horizon_months, &mut request_rng(seed))
    }

    /// Forecast with any model implementation
    pub fn forecast_with<R: RngCore>(
        &self,
        target: ForecastTarget,
        model: &dyn ForecastModel,
        horizon: ForecastHorizon,
        rng: &mut R,
    ) -> Result<ForecastResult> {
        let months = horizon.months() as usize;
        debug!(model = model.name(), %target, months, "running forecast");

        let timestamps = Granularity::Monthly.timestamps_starting_at(self.reference, months)?;
        let values = model.point_forecast(target, months, rng)?;
        let series = TimeSeries::new(Granularity::Monthly, timestamps, values)?;
        let result = ForecastResult::new(target, model.name(), series, model.band_width(target))?;

        info!(
            model = model.name(),
            %target,
            months,
            band_width = result.band_width(),
            "forecast complete"
        );
        Ok(result)
    }
}
