//! Least-squares trend fitting and series aggregation

use crate::{MathError, Result};
use serde::Serialize;

/// Straight line `slope * index + intercept` fitted over sample indices
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinearFit {
    /// Change per sample
    pub slope: f64,
    /// Value at index zero
    pub intercept: f64,
}

impl LinearFit {
    /// Fit a line to `values` against their indices `0..n`
    pub fn fit(values: &[f64]) -> Result<Self> {
        if values.len() < 2 {
            return Err(MathError::InsufficientData(format!(
                "Need at least 2 points for a linear fit, have {}",
                values.len()
            )));
        }

        let n = values.len() as f64;
        let x_mean = (n - 1.0) / 2.0;
        let y_mean = values.iter().sum::<f64>() / n;

        let mut numerator = 0.0;
        let mut denominator = 0.0;

        for (i, &y) in values.iter().enumerate() {
            let x = i as f64;
            numerator += (x - x_mean) * (y - y_mean);
            denominator += (x - x_mean) * (x - x_mean);
        }

        if denominator.abs() < 1e-10 {
            return Err(MathError::CalculationError(
                "Cannot calculate slope: x values are too similar".to_string(),
            ));
        }

        let slope = numerator / denominator;
        Ok(Self {
            slope,
            intercept: y_mean - slope * x_mean,
        })
    }

    /// Value of the fitted line at `index`
    pub fn value_at(&self, index: usize) -> f64 {
        self.slope * index as f64 + self.intercept
    }

    /// Fitted values for indices `0..len`
    pub fn values(&self, len: usize) -> Vec<f64> {
        (0..len).map(|i| self.value_at(i)).collect()
    }
}

/// Arithmetic mean across equal-length series, taken point by point.
///
/// Values are summed in the order the series are given, then divided by
/// the number of series.
pub fn elementwise_mean(series: &[Vec<f64>]) -> Result<Vec<f64>> {
    let first = series.first().ok_or_else(|| {
        MathError::InsufficientData("Need at least one series to average".to_string())
    })?;

    let len = first.len();
    if let Some(bad) = series.iter().find(|s| s.len() != len) {
        return Err(MathError::InvalidInput(format!(
            "Series lengths differ: expected {}, found {}",
            len,
            bad.len()
        )));
    }

    let count = series.len() as f64;
    Ok((0..len)
        .map(|i| series.iter().fold(0.0, |acc, s| acc + s[i]) / count)
        .collect())
}
