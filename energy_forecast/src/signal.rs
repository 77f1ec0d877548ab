//! Signal classes and the parameters that shape their synthetic series

use crate::error::{ForecastError, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Points in one daily oscillation pattern
pub const DAILY_PATTERN_LEN: usize = 24;

/// Points in one annual oscillation pattern
pub const ANNUAL_PATTERN_LEN: usize = 365;

/// Domain series that can be synthesized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum SignalClass {
    /// Grid electricity demand, in MW
    Demand,
    /// Air temperature, in degrees Celsius
    Temperature,
    /// Composite economic indicator
    EconomicIndex,
}

/// Shape of the slow oscillation added to a signal
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Seasonality {
    /// A 365-point sine pattern tiled over the span
    Annual { amplitude: f64 },
    /// A sine completing `cycles` full periods across the whole span
    SpanCycles { amplitude: f64, cycles: f64 },
}

/// Composition parameters for one signal class
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SignalProfile {
    /// Constant level the other components are added to
    pub base: f64,
    /// Amplitude of the 24-point daily pattern, zero when absent
    pub daily_amplitude: f64,
    pub seasonality: Seasonality,
    /// Value reached by the linear trend at the last sample, zero when absent
    pub trend_end: f64,
    /// Standard deviation of the zero-mean Gaussian noise
    pub noise_std: f64,
}

const DEMAND: SignalProfile = SignalProfile {
    base: 18_000.0,
    daily_amplitude: 3_000.0,
    seasonality: Seasonality::Annual { amplitude: 3_000.0 },
    trend_end: 0.0,
    noise_std: 1_000.0,
};

const TEMPERATURE: SignalProfile = SignalProfile {
    base: 10.0,
    daily_amplitude: 0.0,
    seasonality: Seasonality::Annual { amplitude: 15.0 },
    trend_end: 0.0,
    noise_std: 5.0,
};

const ECONOMIC_INDEX: SignalProfile = SignalProfile {
    base: 100.0,
    daily_amplitude: 0.0,
    seasonality: Seasonality::SpanCycles {
        amplitude: 5.0,
        cycles: 4.0,
    },
    trend_end: 20.0,
    noise_std: 3.0,
};

impl SignalClass {
    pub const ALL: [SignalClass; 3] = [
        SignalClass::Demand,
        SignalClass::Temperature,
        SignalClass::EconomicIndex,
    ];

    pub fn profile(self) -> &'static SignalProfile {
        match self {
            SignalClass::Demand => &DEMAND,
            SignalClass::Temperature => &TEMPERATURE,
            SignalClass::EconomicIndex => &ECONOMIC_INDEX,
        }
    }

    /// Data-source label shown to end users
    pub fn label(self) -> &'static str {
        match self {
            SignalClass::Demand => "IESO Historical Data",
            SignalClass::Temperature => "Weather Data",
            SignalClass::EconomicIndex => "Economic Indicators",
        }
    }

    /// Axis label for the series values
    pub fn unit(self) -> &'static str {
        match self {
            SignalClass::Demand => "Energy Demand (MW)",
            SignalClass::Temperature => "Temperature (°C)",
            SignalClass::EconomicIndex => "Index Value",
        }
    }

    fn short_name(self) -> &'static str {
        match self {
            SignalClass::Demand => "Demand",
            SignalClass::Temperature => "Temperature",
            SignalClass::EconomicIndex => "Economic Index",
        }
    }
}

impl FromStr for SignalClass {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(s) || c.short_name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ForecastError::UnknownSignal(s.to_string()))
    }
}

impl fmt::Display for SignalClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}
