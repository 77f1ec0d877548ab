//! Comparative model evaluation
//!
//! Two operations: an accuracy matrix of model × metric scores drawn from
//! each model's error profile, and an actual-versus-predicted series for
//! inspecting a single model's errors over a test window.

use crate::data::{write_columns, Granularity, TimeSeries};
use crate::error::{ForecastError, Result};
use crate::metrics::{AccuracyReport, MetricKind};
use crate::models::ModelId;
use crate::signal::SignalClass;
use crate::synth::{request_rng, SeriesSynthesizer};
use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use series_math::MathError;
use std::collections::BTreeSet;
use std::fmt;
use std::io::Write;
use tracing::{debug, info};

/// Scores for every requested (model, metric) pair
///
/// Models and metrics are held in canonical order without duplicates. The
/// matrix is built once per request and never modified.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationMatrix {
    models: Vec<ModelId>,
    metrics: Vec<MetricKind>,
    // Row-major: one row per model
    scores: Vec<f64>,
    test_period_days: i64,
}

impl EvaluationMatrix {
    pub fn models(&self) -> &[ModelId] {
        &self.models
    }

    pub fn metrics(&self) -> &[MetricKind] {
        &self.metrics
    }

    pub fn test_period_days(&self) -> i64 {
        self.test_period_days
    }

    pub fn score(&self, model: ModelId, metric: MetricKind) -> Option<f64> {
        let row = self.models.iter().position(|m| *m == model)?;
        let col = self.metrics.iter().position(|m| *m == metric)?;
        self.scores.get(row * self.metrics.len() + col).copied()
    }

    /// Every metric's score for `model`
    pub fn row(&self, model: ModelId) -> Option<Vec<(MetricKind, f64)>> {
        let row = self.models.iter().position(|m| *m == model)?;
        let start = row * self.metrics.len();
        Some(
            self.metrics
                .iter()
                .copied()
                .zip(self.scores[start..start + self.metrics.len()].iter().copied())
                .collect(),
        )
    }

    /// Every model's score under `metric`
    pub fn column(&self, metric: MetricKind) -> Option<Vec<(ModelId, f64)>> {
        let col = self.metrics.iter().position(|m| *m == metric)?;
        Some(
            self.models
                .iter()
                .enumerate()
                .map(|(row, model)| (*model, self.scores[row * self.metrics.len() + col]))
                .collect(),
        )
    }

    /// Model with the best score under `metric`, honoring its polarity
    pub fn best_model(&self, metric: MetricKind) -> Option<(ModelId, f64)> {
        self.column(metric)?
            .into_iter()
            .reduce(|best, candidate| {
                if metric.is_better(candidate.1, best.1) {
                    candidate
                } else {
                    best
                }
            })
    }

    /// Iterate over `(model, metric, score)` cells, row by row
    pub fn cells(&self) -> impl Iterator<Item = (ModelId, MetricKind, f64)> + '_ {
        self.models.iter().enumerate().flat_map(move |(row, model)| {
            self.metrics.iter().enumerate().map(move |(col, metric)| {
                (*model, *metric, self.scores[row * self.metrics.len() + col])
            })
        })
    }

    /// Serialize the matrix to JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl fmt::Display for EvaluationMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<10}", "Model")?;
        for metric in &self.metrics {
            write!(f, "{:>10}", metric.label())?;
        }
        writeln!(f)?;

        for model in &self.models {
            write!(f, "{:<10}", model.label())?;
            for (_, score) in self.row(*model).unwrap_or_default() {
                write!(f, "{:>10.2}", score)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Actual and predicted values on one daily axis
///
/// The error series is derived on demand as `predicted - actual` and is
/// never stored separately.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonSeries {
    model: ModelId,
    actual: TimeSeries,
    predicted: TimeSeries,
}

impl ComparisonSeries {
    pub fn new(model: ModelId, actual: TimeSeries, predicted: TimeSeries) -> Result<Self> {
        if actual.timestamps() != predicted.timestamps() {
            return Err(MathError::InvalidInput(
                "Actual and predicted series must share one timestamp axis".to_string(),
            )
            .into());
        }

        Ok(Self {
            model,
            actual,
            predicted,
        })
    }

    pub fn model(&self) -> ModelId {
        self.model
    }

    pub fn actual(&self) -> &TimeSeries {
        &self.actual
    }

    pub fn predicted(&self) -> &TimeSeries {
        &self.predicted
    }

    pub fn timestamps(&self) -> &[DateTime<Utc>] {
        self.actual.timestamps()
    }

    pub fn len(&self) -> usize {
        self.actual.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actual.is_empty()
    }

    fn error_values(&self) -> Vec<f64> {
        self.predicted
            .values()
            .iter()
            .zip(self.actual.values())
            .map(|(p, a)| p - a)
            .collect()
    }

    /// Per-point `predicted - actual`
    pub fn error(&self) -> Result<TimeSeries> {
        self.actual.with_values(self.error_values())
    }

    /// Realized RMSE, MAE and MAPE of the predictions
    pub fn accuracy(&self) -> Result<AccuracyReport> {
        AccuracyReport::compute(self.actual.values(), self.predicted.values())
    }

    /// Write `Date,Actual,Predicted,Error` rows as CSV
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let error = self.error_values();
        write_columns(
            writer,
            self.actual.timestamps(),
            &["Actual", "Predicted", "Error"],
            &[self.actual.values(), self.predicted.values(), error.as_slice()],
        )
    }

    /// Serialize the comparison, including the derived error, to JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Serialize for ComparisonSeries {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ComparisonSeries", 4)?;
        state.serialize_field("model", &self.model)?;
        state.serialize_field("actual", &self.actual)?;
        state.serialize_field("predicted", &self.predicted)?;
        state.serialize_field("error", &self.error_values())?;
        state.end()
    }
}

/// Scores models against held-out windows ending at a reference instant
#[derive(Debug, Clone, Copy)]
pub struct EvaluationEngine {
    reference: DateTime<Utc>,
}

impl EvaluationEngine {
    pub fn new(reference: DateTime<Utc>) -> Self {
        Self { reference }
    }

    pub fn reference(&self) -> DateTime<Utc> {
        self.reference
    }

    /// Score every requested model under every requested metric
    ///
    /// Each cell is the model's profile mean for the metric plus one
    /// Gaussian draw with the profile's spread. Cells are drawn row by row
    /// in canonical order. An empty model selection fails with
    /// `UnknownModel` and an empty metric selection with `UnknownMetric`.
    pub fn evaluate<R: Rng>(
        &self,
        models: &[ModelId],
        metrics: &[MetricKind],
        test_period: Duration,
        rng: &mut R,
    ) -> Result<EvaluationMatrix> {
        let (models, metrics) = validate_selection(models, metrics, test_period)?;
        debug!(
            models = models.len(),
            metrics = metrics.len(),
            days = test_period.num_days(),
            "evaluating models"
        );

        let mut distributions = Vec::with_capacity(models.len() * metrics.len());
        for model in &models {
            let profile = model.evaluation_profile();
            for metric in &metrics {
                let error = profile.metric(*metric);
                distributions.push((error.mean, Normal::new(0.0, error.std_dev)?));
            }
        }

        let scores = distributions
            .iter()
            .map(|(mean, spread)| mean + spread.sample(&mut *rng))
            .collect();

        info!(
            models = models.len(),
            metrics = metrics.len(),
            "evaluation complete"
        );
        Ok(EvaluationMatrix {
            models,
            metrics,
            scores,
            test_period_days: test_period.num_days(),
        })
    }

    /// Same as [`evaluate`](Self::evaluate) with a generator built from `seed`
    pub fn evaluate_seeded(
        &self,
        models: &[ModelId],
        metrics: &[MetricKind],
        test_period: Duration,
        seed: Option<u64>,
    ) -> Result<EvaluationMatrix> {
        self.evaluate(models, metrics, test_period, &mut request_rng(seed))
    }

    /// Synthesize actual demand over `test_period` and a prediction of it
    ///
    /// Each predicted value is `actual * (1 + e)` with `e` drawn from a
    /// zero-mean Gaussian whose spread is the model's comparison error
    /// factor.
    pub fn compare_actual_vs_predicted<R: Rng>(
        &self,
        model: ModelId,
        test_period: Duration,
        rng: &mut R,
    ) -> Result<ComparisonSeries> {
        validate_test_period(test_period)?;
        let error_factor = model.evaluation_profile().comparison_error_factor;
        let relative_error = Normal::new(0.0, error_factor)?;

        let actual = SeriesSynthesizer::new(self.reference).generate(
            SignalClass::Demand,
            test_period,
            Granularity::Daily,
            rng,
        )?;

        let mut predicted = Vec::with_capacity(actual.len());
        for &value in actual.values() {
            predicted.push(value * (1.0 + relative_error.sample(rng)));
        }
        let predicted = actual.with_values(predicted)?;

        info!(%model, days = actual.len(), error_factor, "comparison series ready");
        ComparisonSeries::new(model, actual, predicted)
    }

    /// Same as [`compare_actual_vs_predicted`](Self::compare_actual_vs_predicted)
    /// with a generator built from `seed`
    pub fn compare_seeded(
        &self,
        model: ModelId,
        test_period: Duration,
        seed: Option<u64>,
    ) -> Result<ComparisonSeries> {
        self.compare_actual_vs_predicted(model, test_period, &mut request_rng(seed))
    }
}

fn validate_test_period(test_period: Duration) -> Result<usize> {
    Granularity::Daily.sample_count(test_period).ok_or_else(|| {
        ForecastError::InvalidTestPeriod(format!(
            "{} days holds no daily samples",
            test_period.num_days()
        ))
    })
}

/// Check an evaluation request and put its selections in canonical order
pub(crate) fn validate_selection(
    models: &[ModelId],
    metrics: &[MetricKind],
    test_period: Duration,
) -> Result<(Vec<ModelId>, Vec<MetricKind>)> {
    if models.is_empty() {
        return Err(ForecastError::UnknownModel("no model selected".to_string()));
    }
    if metrics.is_empty() {
        return Err(ForecastError::UnknownMetric("no metric selected".to_string()));
    }
    validate_test_period(test_period)?;

    let models: BTreeSet<ModelId> = models.iter().copied().collect();
    let metrics: BTreeSet<MetricKind> = metrics.iter().copied().collect();
    Ok((models.into_iter().collect(), metrics.into_iter().collect()))
}

pub(crate) fn validate_comparison(test_period: Duration) -> Result<()> {
    validate_test_period(test_period).map(|_| ())
}
