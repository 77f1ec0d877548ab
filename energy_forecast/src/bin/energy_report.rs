//! Text report over every engine, for eyeballing outputs from a shell.
//!
//! Usage: `energy_report [config.toml]`

use energy_forecast::{
    select_view, EngineConfig, EvaluationView, ForecastError, ForecastHorizon, ForecastTarget,
    Granularity, MetricKind, ModelId, ModelRunner, RetrospectivePeriod, SignalClass, TestPeriod,
};
use std::io::{self, Write};

#[tokio::main]
async fn main() -> Result<(), ForecastError> {
    tracing_subscriber::fmt::init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            tracing::info!("Loading configuration from {}", path);
            EngineConfig::load(path)?
        }
        None => EngineConfig::default(),
    };
    tracing::info!("Seed: {:?}", config.seed);

    // Unlocked handle: engine logs share stdout from worker threads
    let mut out = io::stdout();

    // Historical views
    let synthesizer = config.synthesizer();
    for signal in SignalClass::ALL {
        let series = synthesizer.generate(
            signal,
            RetrospectivePeriod::LastYear.span(),
            Granularity::Daily,
            &mut config.rng(),
        )?;
        let trend = series.trend_line()?;
        writeln!(
            out,
            "{} ({} samples, trend {:+.4}/day)",
            signal.label(),
            series.len(),
            trend.slope
        )?;
        series.head(5).write_csv(&mut out, signal.unit())?;
        writeln!(out)?;
    }

    // Forecasts
    let runner = ModelRunner::new(config.clone());
    for model in ModelId::ALL {
        let result = runner
            .spawn_forecast(
                ForecastTarget::Demand,
                model,
                ForecastHorizon::TwoYears.months(),
            )?
            .wait()
            .await?;
        writeln!(out, "{} forecast, band ±{:.1}%", model, result.band_width() * 100.0)?;
        write!(out, "{}", result.summary())?;
        writeln!(out)?;
    }

    // Evaluation
    let test_period = TestPeriod::LastYear;
    let matrix = runner
        .spawn_evaluation(&ModelId::ALL, &MetricKind::ALL, test_period.span())?
        .wait()
        .await?;
    let view = select_view(&matrix);
    writeln!(out, "{}", view.title(test_period.label()))?;
    if let EvaluationView::Matrix(matrix) = view {
        write!(out, "{}", matrix)?;
    }
    for metric in MetricKind::ALL {
        if let Some((model, score)) = matrix.best_model(metric) {
            writeln!(out, "Best {}: {} ({:.2})", metric, model, score)?;
        }
    }
    writeln!(out)?;

    let comparison = runner
        .spawn_comparison(ModelId::Ensemble, test_period.span())?
        .wait()
        .await?;
    writeln!(out, "Actual vs Predicted ({})", comparison.model())?;
    write!(out, "{}", comparison.accuracy()?)?;

    Ok(())
}
