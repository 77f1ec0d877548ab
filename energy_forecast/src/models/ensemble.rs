//! Ensemble of single-model forecasts

use crate::error::{ForecastError, Result};
use crate::models::{ForecastModel, ProfileModel};
use crate::target::ForecastTarget;
use rand::RngCore;
use series_math::elementwise_mean;

/// Averages its members' point forecasts
///
/// Members forecast independently, in order, from the same generator. The
/// ensemble point value is the arithmetic mean across members at each month
/// and its band is the narrowest member band.
#[derive(Debug, Clone)]
pub struct EnsembleModel {
    members: Vec<ProfileModel>,
}

impl EnsembleModel {
    pub fn new(members: Vec<ProfileModel>) -> Result<Self> {
        if members.is_empty() {
            return Err(ForecastError::UnknownModel(
                "ensemble needs at least one member".to_string(),
            ));
        }

        Ok(Self { members })
    }

    pub fn members(&self) -> &[ProfileModel] {
        &self.members
    }
}

impl ForecastModel for EnsembleModel {
    fn name(&self) -> &str {
        "Ensemble"
    }

    fn band_width(&self, target: ForecastTarget) -> f64 {
        self.members
            .iter()
            .map(|m| m.band_width(target))
            .fold(f64::INFINITY, f64::min)
    }

    fn point_forecast(
        &self,
        target: ForecastTarget,
        horizon: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<f64>> {
        let mut forecasts = Vec::with_capacity(self.members.len());
        for member in &self.members {
            forecasts.push(member.point_forecast(target, horizon, rng)?);
        }

        Ok(elementwise_mean(&forecasts)?)
    }
}
