use chrono::{TimeZone, Utc};
use energy_forecast::{EngineConfig, ForecastError, ForecastTarget, ModelId, SignalClass};
use pretty_assertions::assert_eq;
use rand::Rng;
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn test_full_config_from_toml() {
    let config = EngineConfig::from_toml_str(
        r#"
seed = 42
simulated_latency_ms = 250
reference = "2025-01-01T00:00:00Z"
"#,
    )
    .unwrap();

    assert_eq!(config.seed, Some(42));
    assert_eq!(config.simulated_latency(), Duration::from_millis(250));
    assert_eq!(
        config.reference_instant(),
        Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
    );
}

#[test]
fn test_missing_keys_use_defaults() {
    let config = EngineConfig::from_toml_str("").unwrap();

    assert_eq!(config, EngineConfig::default());
    assert_eq!(config.seed, None);
    assert_eq!(config.simulated_latency(), Duration::from_secs(2));
    assert!(config.reference.is_none());
}

#[test]
fn test_invalid_toml_is_config_error() {
    let malformed = EngineConfig::from_toml_str("seed = ");
    assert!(matches!(malformed, Err(ForecastError::Config(_))));

    let wrong_type = EngineConfig::from_toml_str("simulated_latency_ms = \"fast\"");
    assert!(matches!(wrong_type, Err(ForecastError::Config(_))));

    let bad_date = EngineConfig::from_toml_str("reference = \"next tuesday\"");
    assert!(matches!(bad_date, Err(ForecastError::Config(_))));
}

#[test]
fn test_load_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("engine.toml");
    fs::write(&path, "seed = 7\nsimulated_latency_ms = 0\n").unwrap();

    let config = EngineConfig::load(&path).unwrap();
    assert_eq!(config.seed, Some(7));
    assert_eq!(config.simulated_latency_ms, 0);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let result = EngineConfig::load(dir.path().join("absent.toml"));
    assert!(matches!(result, Err(ForecastError::IoError(_))));
}

#[test]
fn test_seeded_config_is_reproducible() {
    let config = EngineConfig {
        seed: Some(11),
        simulated_latency_ms: 0,
        reference: Some(Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()),
    };

    let a: u64 = config.rng().gen();
    let b: u64 = config.rng().gen();
    assert_eq!(a, b);

    let series = |config: &EngineConfig| {
        config
            .synthesizer()
            .generate(
                SignalClass::Temperature,
                chrono::Duration::days(30),
                energy_forecast::Granularity::Daily,
                &mut config.rng(),
            )
            .unwrap()
    };
    assert_eq!(series(&config), series(&config));

    let forecast = config
        .forecast_engine()
        .forecast(ForecastTarget::Price, ModelId::Lstm, 60, &mut config.rng())
        .unwrap();
    assert_eq!(forecast.timestamps()[0], config.reference_instant());
}
