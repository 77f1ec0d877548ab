//! Background model runs with simulated latency and cancellation
//!
//! Requests are validated on the calling thread; only valid requests are
//! spawned. A spawned run waits out the configured latency, then computes
//! its whole result in one step, so a cancelled run never yields partial
//! output. Every run builds its own generator from the configured seed.
//!
//! `spawn_*` must be called from within a tokio runtime.

use crate::config::EngineConfig;
use crate::error::{ForecastError, Result};
use crate::evaluation::{validate_comparison, validate_selection, ComparisonSeries, EvaluationMatrix};
use crate::forecast::ForecastResult;
use crate::metrics::MetricKind;
use crate::models::ModelId;
use crate::periods::ForecastHorizon;
use crate::synth::request_rng;
use crate::target::ForecastTarget;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::warn;

/// Handle to a run in progress
#[derive(Debug)]
pub struct PendingRun<T> {
    cancel: Option<oneshot::Sender<()>>,
    handle: JoinHandle<Result<T>>,
}

impl<T: Send + 'static> PendingRun<T> {
    fn spawn<F>(latency: Duration, compute: F) -> Self
    where
        F: FnOnce() -> Result<T> + Send + 'static,
    {
        let (cancel_tx, cancel_rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(async move {
            tokio::select! {
                biased;
                // A dropped sender counts as a cancellation too
                _ = cancel_rx => {
                    warn!("model run cancelled");
                    Err(ForecastError::Cancelled)
                }
                _ = tokio::time::sleep(latency) => compute(),
            }
        });

        Self {
            cancel: Some(cancel_tx),
            handle,
        }
    }

    /// Request cancellation; a run that already finished keeps its result
    pub fn cancel(&mut self) {
        if let Some(tx) = self.cancel.take() {
            let _ = tx.send(());
        }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the complete result
    pub async fn wait(self) -> Result<T> {
        let PendingRun { cancel, handle } = self;
        let outcome = handle.await;
        drop(cancel);

        match outcome {
            Ok(result) => result,
            Err(err) if err.is_cancelled() => Err(ForecastError::Cancelled),
            Err(err) => Err(ForecastError::TaskFailed(err.to_string())),
        }
    }
}

/// Spawns forecast and evaluation runs under one configuration
#[derive(Debug, Clone)]
pub struct ModelRunner {
    config: EngineConfig,
}

impl ModelRunner {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn spawn_forecast(
        &self,
        target: ForecastTarget,
        model: ModelId,
        horizon_months: u32,
    ) -> Result<PendingRun<ForecastResult>> {
        let horizon = ForecastHorizon::try_from(horizon_months)?;
        let backend = model.model()?;
        let engine = self.config.forecast_engine();
        let seed = self.config.seed;

        Ok(PendingRun::spawn(self.config.simulated_latency(), move || {
            engine.forecast_with(target, backend.as_ref(), horizon, &mut request_rng(seed))
        }))
    }

    pub fn spawn_evaluation(
        &self,
        models: &[ModelId],
        metrics: &[MetricKind],
        test_period: chrono::Duration,
    ) -> Result<PendingRun<EvaluationMatrix>> {
        let (models, metrics) = validate_selection(models, metrics, test_period)?;
        let engine = self.config.evaluation_engine();
        let seed = self.config.seed;

        Ok(PendingRun::spawn(self.config.simulated_latency(), move || {
            engine.evaluate(&models, &metrics, test_period, &mut request_rng(seed))
        }))
    }

    pub fn spawn_comparison(
        &self,
        model: ModelId,
        test_period: chrono::Duration,
    ) -> Result<PendingRun<ComparisonSeries>> {
        validate_comparison(test_period)?;
        let engine = self.config.evaluation_engine();
        let seed = self.config.seed;

        Ok(PendingRun::spawn(self.config.simulated_latency(), move || {
            engine.compare_actual_vs_predicted(model, test_period, &mut request_rng(seed))
        }))
    }
}
