//! Closed sets of duration presets offered to callers
//!
//! Retrospective views, forecast horizons and evaluation test periods each
//! have their own preset list. Labels match the selection text shown to end
//! users, and parsing anything else fails with the matching input error.

use crate::error::{ForecastError, Result};
use chrono::Duration;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Spans offered for historical visualization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RetrospectivePeriod {
    LastMonth,
    LastSixMonths,
    LastYear,
    LastFiveYears,
}

impl RetrospectivePeriod {
    pub const ALL: [RetrospectivePeriod; 4] = [
        RetrospectivePeriod::LastMonth,
        RetrospectivePeriod::LastSixMonths,
        RetrospectivePeriod::LastYear,
        RetrospectivePeriod::LastFiveYears,
    ];

    pub fn days(self) -> i64 {
        match self {
            RetrospectivePeriod::LastMonth => 30,
            RetrospectivePeriod::LastSixMonths => 180,
            RetrospectivePeriod::LastYear => 365,
            RetrospectivePeriod::LastFiveYears => 1825,
        }
    }

    pub fn span(self) -> Duration {
        Duration::days(self.days())
    }

    pub fn label(self) -> &'static str {
        match self {
            RetrospectivePeriod::LastMonth => "Last Month",
            RetrospectivePeriod::LastSixMonths => "Last 6 Months",
            RetrospectivePeriod::LastYear => "Last Year",
            RetrospectivePeriod::LastFiveYears => "Last 5 Years",
        }
    }
}

impl FromStr for RetrospectivePeriod {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ForecastError::InvalidSpan(format!("unsupported period '{}'", s)))
    }
}

impl fmt::Display for RetrospectivePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Forecast lengths, in months
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ForecastHorizon {
    TwoYears,
    FiveYears,
    TenYears,
}

impl ForecastHorizon {
    pub const ALL: [ForecastHorizon; 3] = [
        ForecastHorizon::TwoYears,
        ForecastHorizon::FiveYears,
        ForecastHorizon::TenYears,
    ];

    pub fn months(self) -> u32 {
        match self {
            ForecastHorizon::TwoYears => 24,
            ForecastHorizon::FiveYears => 60,
            ForecastHorizon::TenYears => 120,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ForecastHorizon::TwoYears => "2 Years",
            ForecastHorizon::FiveYears => "5 Years",
            ForecastHorizon::TenYears => "10 Years",
        }
    }
}

impl TryFrom<u32> for ForecastHorizon {
    type Error = ForecastError;

    fn try_from(months: u32) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|h| h.months() == months)
            .ok_or(ForecastError::InvalidHorizon(months))
    }
}

impl FromStr for ForecastHorizon {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Some(horizon) = Self::ALL
            .into_iter()
            .find(|h| h.label().eq_ignore_ascii_case(s))
        {
            return Ok(horizon);
        }

        // Bare month counts are accepted too, but still only the presets
        match s.parse::<u32>() {
            Ok(months) => Self::try_from(months),
            Err(_) => Err(ForecastError::InvalidHorizon(0)),
        }
    }
}

impl fmt::Display for ForecastHorizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Held-out windows offered for model evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TestPeriod {
    LastThreeMonths,
    LastSixMonths,
    LastYear,
}

impl TestPeriod {
    pub const ALL: [TestPeriod; 3] = [
        TestPeriod::LastThreeMonths,
        TestPeriod::LastSixMonths,
        TestPeriod::LastYear,
    ];

    pub fn days(self) -> i64 {
        match self {
            TestPeriod::LastThreeMonths => 90,
            TestPeriod::LastSixMonths => 180,
            TestPeriod::LastYear => 365,
        }
    }

    pub fn span(self) -> Duration {
        Duration::days(self.days())
    }

    pub fn label(self) -> &'static str {
        match self {
            TestPeriod::LastThreeMonths => "Last 3 Months",
            TestPeriod::LastSixMonths => "Last 6 Months",
            TestPeriod::LastYear => "Last Year",
        }
    }
}

impl FromStr for TestPeriod {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                ForecastError::InvalidTestPeriod(format!("unsupported test period '{}'", s))
            })
    }
}

impl fmt::Display for TestPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
