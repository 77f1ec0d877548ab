//! Deterministic building blocks for synthetic signals
//!
//! - `linspace`: evenly spaced values with both endpoints included
//! - `sine_pattern`: one sine sweep sampled on a `linspace` grid
//! - `tile`: repeat a fixed-length pattern and cut it to an exact length

use crate::{MathError, Result};

/// Return `count` evenly spaced values from `start` to `end`, both included.
///
/// A single sample yields `[start]`; zero samples yield an empty vector.
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            (0..count)
                .map(|i| {
                    // Pin the last sample so rounding never overshoots `end`
                    if i == count - 1 {
                        end
                    } else {
                        start + step * i as f64
                    }
                })
                .collect()
        }
    }
}

/// Sample `sin(x)` for `x` in `linspace(0, phase_end, count)`.
pub fn sine_pattern(phase_end: f64, count: usize) -> Vec<f64> {
    linspace(0.0, phase_end, count)
        .into_iter()
        .map(f64::sin)
        .collect()
}

/// Repeat `pattern` end to end and truncate to exactly `len` values.
///
/// The final repetition is partial when `len` is not a multiple of the
/// pattern length. No resampling happens: value `i` is always
/// `pattern[i % pattern.len()]`.
pub fn tile(pattern: &[f64], len: usize) -> Result<Vec<f64>> {
    if pattern.is_empty() {
        return Err(MathError::InvalidInput(
            "Cannot tile an empty pattern".to_string(),
        ));
    }

    Ok(pattern.iter().copied().cycle().take(len).collect())
}
