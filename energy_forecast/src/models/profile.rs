//! Single-model forecasts driven by a static profile

use crate::error::{ForecastError, Result};
use crate::models::{ForecastModel, ForecastProfile, ModelId};
use crate::target::ForecastTarget;
use rand::RngCore;
use rand_distr::{Distribution, Normal};
use series_math::linspace;
use std::f64::consts::PI;

/// Months in one seasonal cycle of a forecast
pub const SEASONAL_PERIOD: f64 = 12.0;

/// Synthetic stand-in for one fitted model
///
/// Point forecast at month `i` is the target's base level plus level noise
/// scaled by the model, a linear trend from zero to the target's cap, and a
/// 12-month sine.
#[derive(Debug, Clone)]
pub struct ProfileModel {
    id: ModelId,
    profile: &'static ForecastProfile,
}

impl ProfileModel {
    /// Create the profile model for a single (non-ensemble) identifier
    pub fn new(id: ModelId) -> Result<Self> {
        let profile = id.forecast_profile().ok_or_else(|| {
            ForecastError::UnknownModel(format!("{} has no single-model profile", id))
        })?;

        Ok(Self { id, profile })
    }

    pub fn id(&self) -> ModelId {
        self.id
    }
}

impl ForecastModel for ProfileModel {
    fn name(&self) -> &str {
        self.id.label()
    }

    fn band_width(&self, target: ForecastTarget) -> f64 {
        target.profile().band_width * self.profile.band_scale
    }

    fn point_forecast(
        &self,
        target: ForecastTarget,
        horizon: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<f64>> {
        let tp = target.profile();
        let noise = Normal::new(0.0, tp.base_noise_std * self.profile.noise_scale)?;
        let trend = linspace(0.0, tp.trend_cap, horizon);

        let mut forecasts = Vec::with_capacity(horizon);
        for (i, trend) in trend.into_iter().enumerate() {
            let level = tp.base + noise.sample(rng);
            let seasonal = tp.seasonal_amplitude * (2.0 * PI * i as f64 / SEASONAL_PERIOD).sin();
            forecasts.push(level + trend + seasonal);
        }

        Ok(forecasts)
    }
}
