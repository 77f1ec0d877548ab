use chrono::{Duration, Months, TimeZone, Utc};
use energy_forecast::{
    ForecastError, Granularity, RetrospectivePeriod, SeriesSynthesizer, SignalClass,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn reference() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 15, 12, 0, 0).unwrap()
}

#[rstest]
#[case(RetrospectivePeriod::LastMonth, 30)]
#[case(RetrospectivePeriod::LastSixMonths, 180)]
#[case(RetrospectivePeriod::LastYear, 365)]
#[case(RetrospectivePeriod::LastFiveYears, 1825)]
fn test_daily_series_matches_preset_length(
    #[case] period: RetrospectivePeriod,
    #[case] expected: usize,
    #[values(SignalClass::Demand, SignalClass::Temperature, SignalClass::EconomicIndex)]
    signal: SignalClass,
) {
    let synthesizer = SeriesSynthesizer::new(reference());
    let series = synthesizer
        .generate_seeded(signal, period.span(), Granularity::Daily, Some(11))
        .unwrap();

    assert_eq!(series.len(), expected);
    assert_eq!(series.timestamps().last().copied(), Some(reference()));

    // Uniform one-day spacing, strictly increasing
    for pair in series.timestamps().windows(2) {
        assert_eq!(pair[1] - pair[0], Duration::days(1));
    }
}

#[rstest]
#[case(RetrospectivePeriod::LastMonth, 1)]
#[case(RetrospectivePeriod::LastSixMonths, 6)]
#[case(RetrospectivePeriod::LastYear, 12)]
#[case(RetrospectivePeriod::LastFiveYears, 60)]
fn test_monthly_series_steps_calendar_months(
    #[case] period: RetrospectivePeriod,
    #[case] expected: usize,
) {
    let synthesizer = SeriesSynthesizer::new(reference());
    let series = synthesizer
        .generate_seeded(SignalClass::Demand, period.span(), Granularity::Monthly, Some(3))
        .unwrap();

    assert_eq!(series.len(), expected);
    assert_eq!(series.granularity(), Granularity::Monthly);

    let timestamps = series.timestamps();
    assert_eq!(timestamps[expected - 1], reference());
    for (i, ts) in timestamps.iter().enumerate() {
        let back = Months::new((expected - 1 - i) as u32);
        assert_eq!(Some(*ts), reference().checked_sub_months(back));
    }
}

#[rstest]
#[case(Duration::days(0), Granularity::Daily)]
#[case(Duration::hours(20), Granularity::Daily)]
#[case(Duration::days(-30), Granularity::Daily)]
#[case(Duration::days(29), Granularity::Monthly)]
fn test_spans_without_samples_are_rejected(
    #[case] span: Duration,
    #[case] granularity: Granularity,
) {
    let synthesizer = SeriesSynthesizer::new(reference());
    let result = synthesizer.generate_seeded(SignalClass::Temperature, span, granularity, Some(1));

    assert!(matches!(result, Err(ForecastError::InvalidSpan(_))));
}

#[test]
fn test_seeded_generation_is_reproducible() {
    let synthesizer = SeriesSynthesizer::new(reference());
    let span = RetrospectivePeriod::LastYear.span();

    let a = synthesizer
        .generate_seeded(SignalClass::Demand, span, Granularity::Daily, Some(42))
        .unwrap();
    let b = synthesizer
        .generate_seeded(SignalClass::Demand, span, Granularity::Daily, Some(42))
        .unwrap();
    let c = synthesizer
        .generate_seeded(SignalClass::Demand, span, Granularity::Daily, Some(43))
        .unwrap();

    assert_eq!(a, b);
    for (x, y) in a.values().iter().zip(b.values()) {
        assert_eq!(x.to_bits(), y.to_bits());
    }
    assert_ne!(a.values(), c.values());
}

#[test]
fn test_unseeded_generation_varies() {
    let synthesizer = SeriesSynthesizer::new(reference());
    let span = RetrospectivePeriod::LastMonth.span();

    let a = synthesizer
        .generate_seeded(SignalClass::Demand, span, Granularity::Daily, None)
        .unwrap();
    let b = synthesizer
        .generate_seeded(SignalClass::Demand, span, Granularity::Daily, None)
        .unwrap();

    assert_ne!(a.values(), b.values());
}

#[test]
fn test_demand_centers_on_base_level() {
    let synthesizer = SeriesSynthesizer::new(reference());
    let series = synthesizer
        .generate_seeded(
            SignalClass::Demand,
            RetrospectivePeriod::LastFiveYears.span(),
            Granularity::Daily,
            Some(5),
        )
        .unwrap();

    let mean = series.values().iter().sum::<f64>() / series.len() as f64;
    assert!((mean - 18_000.0).abs() < 300.0, "mean was {}", mean);
}

#[test]
fn test_economic_index_trends_upward() {
    let synthesizer = SeriesSynthesizer::new(reference());
    let series = synthesizer
        .generate_seeded(
            SignalClass::EconomicIndex,
            RetrospectivePeriod::LastYear.span(),
            Granularity::Daily,
            Some(8),
        )
        .unwrap();

    let trend = series.trend_line().unwrap();
    assert!(trend.slope > 0.02, "slope was {}", trend.slope);
}

#[test]
fn test_temperature_has_no_trend_component() {
    let synthesizer = SeriesSynthesizer::new(reference());
    let series = synthesizer
        .generate_seeded(
            SignalClass::Temperature,
            RetrospectivePeriod::LastFiveYears.span(),
            Granularity::Daily,
            Some(21),
        )
        .unwrap();

    // Five whole annual cycles cancel out, leaving the base level
    let mean = series.values().iter().sum::<f64>() / series.len() as f64;
    assert!((mean - 10.0).abs() < 1.0, "mean was {}", mean);
}
