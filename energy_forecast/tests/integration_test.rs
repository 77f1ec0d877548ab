use chrono::{TimeZone, Utc};
use energy_forecast::{
    select_view, EngineConfig, EvaluationView, ForecastTarget, Granularity, MetricKind, ModelId,
    ModelRunner, RetrospectivePeriod, SignalClass, TestPeriod,
};
use std::fs;
use tempfile::tempdir;

#[tokio::test]
async fn test_full_dashboard_workflow() {
    // 1. Load configuration from disk
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("engine.toml");
    fs::write(
        &config_path,
        "seed = 5\nsimulated_latency_ms = 0\nreference = \"2025-02-01T00:00:00Z\"\n",
    )
    .unwrap();
    let config = EngineConfig::load(&config_path).unwrap();

    // 2. Historical view of every data source
    let synthesizer = config.synthesizer();
    for signal in SignalClass::ALL {
        let series = synthesizer
            .generate(
                signal,
                RetrospectivePeriod::LastFiveYears.span(),
                Granularity::Monthly,
                &mut config.rng(),
            )
            .unwrap();
        assert_eq!(series.len(), 60);
        assert_eq!(series.timestamps().last().copied(), config.reference);
    }

    // 3. Forecast demand in the background and export it
    let runner = ModelRunner::new(config.clone());
    let forecast = runner
        .spawn_forecast(ForecastTarget::Demand, ModelId::Ensemble, 120)
        .unwrap()
        .wait()
        .await
        .unwrap();
    assert_eq!(forecast.horizon(), 120);
    assert!(forecast
        .points()
        .all(|p| p.lower <= p.forecast && p.forecast <= p.upper));

    let csv_path = dir.path().join("forecast.csv");
    forecast
        .write_csv(fs::File::create(&csv_path).unwrap())
        .unwrap();
    let exported = fs::read_to_string(&csv_path).unwrap();
    assert_eq!(exported.lines().count(), 121);
    assert!(exported.starts_with("Date,Forecast (MW),Lower Bound,Upper Bound"));

    // 4. Evaluate every model and pick the view shape
    let matrix = runner
        .spawn_evaluation(&ModelId::ALL, &[MetricKind::Mape], TestPeriod::LastYear.span())
        .unwrap()
        .wait()
        .await
        .unwrap();
    let view = select_view(&matrix);
    assert!(matches!(view, EvaluationView::MetricComparison { .. }));
    assert_eq!(view.title("Last Year"), "MAPE Comparison for Last Year");

    // 5. Inspect the best model's errors
    let (best, _) = matrix.best_model(MetricKind::Mape).unwrap();
    let comparison = runner
        .spawn_comparison(best, TestPeriod::LastThreeMonths.span())
        .unwrap()
        .wait()
        .await
        .unwrap();
    let accuracy = comparison.accuracy().unwrap();
    assert!(accuracy.rmse >= accuracy.mae);
    assert!(accuracy.mape > 0.0);
    assert_eq!(
        comparison.timestamps().last().copied(),
        Some(Utc.with_ymd_and_hms(2025, 2, 1, 0, 0, 0).unwrap())
    );
}
