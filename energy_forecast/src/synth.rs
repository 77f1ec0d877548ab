//! Synthetic series generation
//!
//! A series is the sum of a constant base, a tiled 24-point daily sine, a
//! slow seasonal sine, an optional linear trend and Gaussian noise. The
//! deterministic components come from `series_math`; the only randomness is
//! the noise, drawn from the generator the caller passes in.

use crate::data::{Granularity, TimeSeries};
use crate::error::{ForecastError, Result};
use crate::signal::{Seasonality, SignalClass, SignalProfile, ANNUAL_PATTERN_LEN, DAILY_PATTERN_LEN};
use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use series_math::{linspace, sine_pattern, tile};
use std::f64::consts::PI;
use tracing::debug;

/// Generator for a seeded request, or an entropy-seeded one without a seed
pub fn request_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Produces retrospective series ending at a fixed reference instant
#[derive(Debug, Clone, Copy)]
pub struct SeriesSynthesizer {
    reference: DateTime<Utc>,
}

impl SeriesSynthesizer {
    /// Create a synthesizer whose series end at `reference`
    pub fn new(reference: DateTime<Utc>) -> Self {
        Self { reference }
    }

    pub fn reference(&self) -> DateTime<Utc> {
        self.reference
    }

    /// Generate `signal` over `span`, sampled at `granularity`
    ///
    /// Fails with `InvalidSpan` when the span holds less than one sample.
    pub fn generate<R: Rng>(
        &self,
        signal: SignalClass,
        span: Duration,
        granularity: Granularity,
        rng: &mut R,
    ) -> Result<TimeSeries> {
        let count = granularity.sample_count(span).ok_or_else(|| {
            ForecastError::InvalidSpan(format!(
                "{} days holds no {:?} samples",
                span.num_days(),
                granularity
            ))
        })?;

        debug!(%signal, count, ?granularity, "synthesizing series");

        let timestamps = granularity.timestamps_ending_at(self.reference, count)?;
        let values = synthesize_values(signal.profile(), count, rng)?;
        TimeSeries::new(granularity, timestamps, values)
    }

    /// Same as [`generate`](Self::generate) with a generator built from `seed`
    ///
    /// Identical seeds give bit-identical series; no seed gives a fresh
    /// exploratory series on every call.
    pub fn generate_seeded(
        &self,
        signal: SignalClass,
        span: Duration,
        granularity: Granularity,
        seed: Option<u64>,
    ) -> Result<TimeSeries> {
        self.generate(signal, span, granularity, &mut request_rng(seed))
    }
}

/// Compose `count` values for `profile`, drawing one noise sample per value
pub(crate) fn synthesize_values<R: Rng + ?Sized>(
    profile: &SignalProfile,
    count: usize,
    rng: &mut R,
) -> Result<Vec<f64>> {
    let noise = Normal::new(0.0, profile.noise_std)?;

    let daily = tile(&sine_pattern(2.0 * PI, DAILY_PATTERN_LEN), count)?;
    let seasonal = match profile.seasonality {
        Seasonality::Annual { amplitude } => {
            scaled(tile(&sine_pattern(2.0 * PI, ANNUAL_PATTERN_LEN), count)?, amplitude)
        }
        Seasonality::SpanCycles { amplitude, cycles } => {
            scaled(sine_pattern(2.0 * PI * cycles, count), amplitude)
        }
    };
    let trend = linspace(0.0, profile.trend_end, count);

    let mut values = Vec::with_capacity(count);
    for i in 0..count {
        values.push(
            profile.base
                + profile.daily_amplitude * daily[i]
                + seasonal[i]
                + trend[i]
                + noise.sample(rng),
        );
    }

    Ok(values)
}

fn scaled(values: Vec<f64>, amplitude: f64) -> Vec<f64> {
    values.into_iter().map(|v| v * amplitude).collect()
}
