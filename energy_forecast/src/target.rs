//! Forecast targets and their level, trend and band parameters

use crate::error::{ForecastError, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Quantity a forecast is produced for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ForecastTarget {
    /// Electricity demand, in MW
    Demand,
    /// Electricity price, in $/MWh
    Price,
}

/// Level, trend, seasonality and band parameters of a target
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TargetProfile {
    pub base: f64,
    /// Standard deviation of the level noise before model scaling
    pub base_noise_std: f64,
    /// Value the linear trend reaches at the final month
    pub trend_cap: f64,
    /// Amplitude of the 12-month oscillation
    pub seasonal_amplitude: f64,
    /// Relative half-width of the uncertainty band before model scaling
    pub band_width: f64,
}

const DEMAND: TargetProfile = TargetProfile {
    base: 18_000.0,
    base_noise_std: 100.0,
    trend_cap: 2_000.0,
    seasonal_amplitude: 3_000.0,
    band_width: 0.10,
};

const PRICE: TargetProfile = TargetProfile {
    base: 50.0,
    base_noise_std: 5.0,
    trend_cap: 20.0,
    seasonal_amplitude: 15.0,
    band_width: 0.15,
};

impl ForecastTarget {
    pub const ALL: [ForecastTarget; 2] = [ForecastTarget::Demand, ForecastTarget::Price];

    pub fn profile(self) -> &'static TargetProfile {
        match self {
            ForecastTarget::Demand => &DEMAND,
            ForecastTarget::Price => &PRICE,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ForecastTarget::Demand => "Electricity Demand",
            ForecastTarget::Price => "Price",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            ForecastTarget::Demand => "Forecast (MW)",
            ForecastTarget::Price => "Forecast ($/MWh)",
        }
    }
}

impl FromStr for ForecastTarget {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "electricity demand" | "demand" => Ok(ForecastTarget::Demand),
            "price" | "electricity price" => Ok(ForecastTarget::Price),
            _ => Err(ForecastError::UnknownTarget(s.trim().to_string())),
        }
    }
}

impl fmt::Display for ForecastTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
