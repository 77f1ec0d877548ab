use chrono::Utc;
use energy_forecast::{select_view, EvaluationEngine, MetricKind, ModelId, TestPeriod};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Energy Forecast: Model Evaluation Example");
    println!("=========================================\n");

    let engine = EvaluationEngine::new(Utc::now());
    let period = TestPeriod::LastSixMonths;

    let matrix = engine.evaluate_seeded(&ModelId::ALL, &MetricKind::ALL, period.span(), Some(7))?;
    println!("{}", select_view(&matrix).title(period.label()));
    println!("{}", matrix);

    for metric in MetricKind::ALL {
        if let Some((model, score)) = matrix.best_model(metric) {
            println!("Best {}: {} ({:.2})", metric, model, score);
        }
    }
    println!();

    // Single model, single metric collapses to a scalar view
    let scalar = engine.evaluate_seeded(&[ModelId::Lstm], &[MetricKind::Mae], period.span(), Some(7))?;
    println!("{:?}\n", select_view(&scalar));

    let comparison = engine.compare_seeded(ModelId::Ensemble, TestPeriod::LastThreeMonths.span(), Some(7))?;
    println!("{}", comparison.accuracy()?);

    println!("First week of actual vs predicted:");
    let mut preview = Vec::new();
    comparison.write_csv(&mut preview)?;
    for line in String::from_utf8_lossy(&preview).lines().take(8) {
        println!("  {}", line);
    }

    Ok(())
}
