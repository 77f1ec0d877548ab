use approx::assert_abs_diff_eq;
use chrono::{DateTime, Duration, TimeZone, Utc};
use energy_forecast::{
    EvaluationEngine, ForecastError, Granularity, ModelId, SeriesSynthesizer, SignalClass,
    TestPeriod, TimeSeries,
};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::tempdir;

fn day(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
}

fn daily(start: DateTime<Utc>, values: Vec<f64>) -> TimeSeries {
    let timestamps = (0..values.len())
        .map(|i| start + Duration::days(i as i64))
        .collect();
    TimeSeries::new(Granularity::Daily, timestamps, values).unwrap()
}

#[test]
fn test_mismatched_lengths_are_rejected() {
    let result = TimeSeries::new(
        Granularity::Daily,
        vec![day(2024, 1, 1), day(2024, 1, 2)],
        vec![1.0],
    );
    assert!(matches!(result, Err(ForecastError::Math(_))));
}

#[test]
fn test_unordered_timestamps_are_rejected() {
    let repeated = TimeSeries::new(
        Granularity::Daily,
        vec![day(2024, 1, 1), day(2024, 1, 1)],
        vec![1.0, 2.0],
    );
    let backwards = TimeSeries::new(
        Granularity::Daily,
        vec![day(2024, 1, 2), day(2024, 1, 1)],
        vec![1.0, 2.0],
    );

    assert!(repeated.is_err());
    assert!(backwards.is_err());
}

#[test]
fn test_head_is_clamped_to_length() {
    let series = daily(day(2024, 1, 1), vec![1.0, 2.0, 3.0]);

    assert_eq!(series.head(2).values(), &[1.0, 2.0]);
    assert_eq!(series.head(10), series);
    assert!(series.head(0).is_empty());
}

#[test]
fn test_monthly_means_bucket_by_calendar_month() {
    // 31 days of January at 1.0, then 29 days of February 2024 at 4.0
    let mut values = vec![1.0; 31];
    values.extend(vec![4.0; 29]);
    let series = daily(day(2024, 1, 1), values);

    let monthly = series.monthly_means().unwrap();

    assert_eq!(monthly.granularity(), Granularity::Monthly);
    assert_eq!(monthly.timestamps(), &[day(2024, 1, 1), day(2024, 2, 1)]);
    assert_eq!(monthly.values(), &[1.0, 4.0]);
}

#[test]
fn test_monthly_means_of_synthetic_year() {
    let reference = Utc.with_ymd_and_hms(2024, 12, 31, 12, 0, 0).unwrap();
    let series = SeriesSynthesizer::new(reference)
        .generate_seeded(
            SignalClass::Demand,
            Duration::days(365),
            Granularity::Daily,
            Some(17),
        )
        .unwrap();

    let monthly = series.monthly_means().unwrap();
    assert!(monthly.len() == 12 || monthly.len() == 13);
    assert_eq!(monthly.timestamps().last().copied(), Some(day(2024, 12, 1)));
}

#[test]
fn test_trend_line_recovers_linear_series() {
    let series = daily(day(2024, 1, 1), (0..50).map(|i| 3.0 + 0.5 * i as f64).collect());
    let fit = series.trend_line().unwrap();

    assert_abs_diff_eq!(fit.slope, 0.5, epsilon = 1e-9);
    assert_abs_diff_eq!(fit.intercept, 3.0, epsilon = 1e-9);
}

#[test]
fn test_trend_line_needs_two_points() {
    let series = daily(day(2024, 1, 1), vec![1.0]);
    assert!(series.trend_line().is_err());
}

#[test]
fn test_series_csv_export() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("demand.csv");
    let series = daily(day(2024, 3, 1), vec![18000.5, 18100.0]);

    series
        .write_csv(fs::File::create(&path).unwrap(), "Demand (MW)")
        .unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "Date,Demand (MW)");
    assert!(lines[1].starts_with("2024-03-01T00:00:00"));
    assert!(lines[1].ends_with(",18000.5"));
}

#[test]
fn test_comparison_csv_export() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("comparison.csv");
    let comparison = EvaluationEngine::new(day(2025, 1, 1))
        .compare_seeded(ModelId::Arima, TestPeriod::LastThreeMonths.span(), Some(2))
        .unwrap();

    comparison
        .write_csv(fs::File::create(&path).unwrap())
        .unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let headers = reader.headers().unwrap().clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        vec!["Date", "Actual", "Predicted", "Error"]
    );

    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 90);
    for row in &rows {
        let actual: f64 = row[1].parse().unwrap();
        let predicted: f64 = row[2].parse().unwrap();
        let error: f64 = row[3].parse().unwrap();
        assert_eq!(error, predicted - actual);
    }
}

#[test]
fn test_comparison_json_includes_error() {
    let comparison = EvaluationEngine::new(day(2025, 1, 1))
        .compare_seeded(ModelId::Lstm, Duration::days(5), Some(2))
        .unwrap();

    let json: serde_json::Value = serde_json::from_str(&comparison.to_json().unwrap()).unwrap();
    assert_eq!(json["model"], "Lstm");
    assert_eq!(json["error"].as_array().map(|e| e.len()), Some(5));
    assert_eq!(json["actual"]["values"].as_array().map(|v| v.len()), Some(5));
}
