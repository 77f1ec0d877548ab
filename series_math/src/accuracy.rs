//! Point-accuracy measures for predicted-versus-actual series
//!
//! All functions take `(actual, predicted)` and reject empty or
//! mismatched inputs. MAPE is reported in percent and skips points whose
//! actual value is zero.

use crate::{MathError, Result};

fn check_lengths(actual: &[f64], predicted: &[f64]) -> Result<()> {
    if actual.is_empty() || actual.len() != predicted.len() {
        return Err(MathError::InvalidInput(format!(
            "Actual and predicted values must have the same non-zero length ({} vs {})",
            actual.len(),
            predicted.len()
        )));
    }
    Ok(())
}

/// Root mean squared error
pub fn root_mean_squared_error(actual: &[f64], predicted: &[f64]) -> Result<f64> {
    check_lengths(actual, predicted)?;

    let mse = actual
        .iter()
        .zip(predicted)
        .map(|(a, p)| (p - a).powi(2))
        .sum::<f64>()
        / actual.len() as f64;

    Ok(mse.sqrt())
}

/// Mean absolute error
pub fn mean_absolute_error(actual: &[f64], predicted: &[f64]) -> Result<f64> {
    check_lengths(actual, predicted)?;

    Ok(actual
        .iter()
        .zip(predicted)
        .map(|(a, p)| (p - a).abs())
        .sum::<f64>()
        / actual.len() as f64)
}

/// Mean absolute percentage error, in percent
pub fn mean_absolute_percentage_error(actual: &[f64], predicted: &[f64]) -> Result<f64> {
    check_lengths(actual, predicted)?;

    let terms: Vec<f64> = actual
        .iter()
        .zip(predicted)
        .filter(|(a, _)| **a != 0.0)
        .map(|(a, p)| ((p - a) / a).abs() * 100.0)
        .collect();

    if terms.is_empty() {
        return Err(MathError::CalculationError(
            "MAPE is undefined when every actual value is zero".to_string(),
        ));
    }

    Ok(terms.iter().sum::<f64>() / terms.len() as f64)
}
