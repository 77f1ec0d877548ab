//! Engine configuration loaded from TOML
//!
//! ```toml
//! seed = 42
//! simulated_latency_ms = 0
//! reference = "2025-01-01T00:00:00Z"
//! ```
//!
//! Every key is optional. `reference` must be a quoted RFC 3339 string.

use crate::error::Result;
use crate::evaluation::EvaluationEngine;
use crate::forecast::ForecastEngine;
use crate::synth::{request_rng, SeriesSynthesizer};
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct EngineConfig {
    /// Seed for reproducible runs, fresh randomness when absent
    #[serde(default)]
    pub seed: Option<u64>,
    /// Artificial model-fitting delay applied to background runs
    #[serde(default = "default_latency_ms")]
    pub simulated_latency_ms: u64,
    /// Fixed "now" for series anchoring, the wall clock when absent
    #[serde(default)]
    pub reference: Option<DateTime<Utc>>,
}

fn default_latency_ms() -> u64 {
    2_000
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            simulated_latency_ms: default_latency_ms(),
            reference: None,
        }
    }
}

impl EngineConfig {
    /// Load configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Fresh generator for one request
    pub fn rng(&self) -> StdRng {
        request_rng(self.seed)
    }

    pub fn reference_instant(&self) -> DateTime<Utc> {
        self.reference.unwrap_or_else(Utc::now)
    }

    pub fn simulated_latency(&self) -> Duration {
        Duration::from_millis(self.simulated_latency_ms)
    }

    pub fn synthesizer(&self) -> SeriesSynthesizer {
        SeriesSynthesizer::new(self.reference_instant())
    }

    pub fn forecast_engine(&self) -> ForecastEngine {
        ForecastEngine::new(self.reference_instant())
    }

    pub fn evaluation_engine(&self) -> EvaluationEngine {
        EvaluationEngine::new(self.reference_instant())
    }
}
