use chrono::Utc;
use energy_forecast::{
    ForecastEngine, ForecastHorizon, ForecastTarget, Granularity, ModelId, RetrospectivePeriod,
    SeriesSynthesizer, SignalClass,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Energy Forecast: Basic Forecasting Example");
    println!("==========================================\n");

    let now = Utc::now();
    let seed = Some(42);

    // Historical context for each data source
    let synthesizer = SeriesSynthesizer::new(now);
    for signal in SignalClass::ALL {
        let series = synthesizer.generate_seeded(
            signal,
            RetrospectivePeriod::LastYear.span(),
            Granularity::Daily,
            seed,
        )?;
        let monthly = series.monthly_means()?;
        println!(
            "{} ({}): {} daily points, {} monthly means, trend {:+.3}/day",
            signal.label(),
            signal.unit(),
            series.len(),
            monthly.len(),
            series.trend_line()?.slope
        );
    }
    println!();

    // One forecast per model and target
    let engine = ForecastEngine::new(now);
    for target in ForecastTarget::ALL {
        println!("{} forecast, {}:", target.label(), ForecastHorizon::FiveYears);
        for model in ModelId::ALL {
            let result =
                engine.forecast_seeded(target, model, ForecastHorizon::FiveYears.months(), seed)?;
            let summary = result.summary();
            println!(
                "  {:<10} mean {:>10.2}  range [{:.2}, {:.2}]  band ±{:.1}%",
                model.label(),
                summary.mean,
                summary.min,
                summary.max,
                result.band_width() * 100.0
            );
        }
        println!();
    }

    // First few months of the ensemble demand forecast
    let ensemble = engine.forecast_seeded(ForecastTarget::Demand, ModelId::Ensemble, 24, seed)?;
    println!("Ensemble demand, first 6 months:");
    for point in ensemble.points().take(6) {
        println!(
            "  {}  {:>10.2}  [{:.2}, {:.2}]",
            point.timestamp.format("%Y-%m"),
            point.forecast,
            point.lower,
            point.upper
        );
    }

    Ok(())
}
