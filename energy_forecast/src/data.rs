//! Time series containers and sampling granularity

use crate::error::{ForecastError, Result};
use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, TimeZone, Utc};
use serde::Serialize;
use series_math::{LinearFit, MathError};
use std::collections::BTreeMap;
use std::io::Write;

/// Spacing between consecutive samples of a series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Granularity {
    /// One sample per day
    Daily,
    /// One sample per calendar month
    Monthly,
}

impl Granularity {
    /// Days covered by one sample when converting a span into a sample count
    pub fn days_per_sample(self) -> i64 {
        match self {
            Granularity::Daily => 1,
            Granularity::Monthly => 30,
        }
    }

    /// Number of whole samples in `span`, or `None` when it holds less than one
    pub fn sample_count(self, span: Duration) -> Option<usize> {
        let count = span.num_days() / self.days_per_sample();
        if count >= 1 {
            usize::try_from(count).ok()
        } else {
            None
        }
    }

    /// `count` timestamps in increasing order, the last one equal to `reference`
    pub fn timestamps_ending_at(
        self,
        reference: DateTime<Utc>,
        count: usize,
    ) -> Result<Vec<DateTime<Utc>>> {
        (0..count)
            .rev()
            .map(|steps_back| self.step(reference, -(steps_back as i64)))
            .collect()
    }

    /// `count` timestamps in increasing order, the first one equal to `reference`
    pub fn timestamps_starting_at(
        self,
        reference: DateTime<Utc>,
        count: usize,
    ) -> Result<Vec<DateTime<Utc>>> {
        (0..count)
            .map(|steps| self.step(reference, steps as i64))
            .collect()
    }

    fn step(self, reference: DateTime<Utc>, steps: i64) -> Result<DateTime<Utc>> {
        let shifted = match self {
            Granularity::Daily => reference.checked_add_signed(Duration::days(steps)),
            Granularity::Monthly => {
                let months = Months::new(u32::try_from(steps.unsigned_abs()).map_err(|_| {
                    MathError::InvalidInput(format!("Too many monthly steps: {}", steps))
                })?);
                if steps >= 0 {
                    reference.checked_add_months(months)
                } else {
                    reference.checked_sub_months(months)
                }
            }
        };

        shifted.ok_or_else(|| {
            ForecastError::Math(MathError::CalculationError(format!(
                "Timestamp out of range {} {:?} steps from {}",
                steps, self, reference
            )))
        })
    }
}

/// Ordered `(timestamp, value)` samples on a fixed granularity
///
/// Timestamps are strictly increasing and there is exactly one value per
/// timestamp. A series is immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeries {
    granularity: Granularity,
    timestamps: Vec<DateTime<Utc>>,
    values: Vec<f64>,
}

impl TimeSeries {
    /// Create a new time series, checking length and ordering
    pub fn new(
        granularity: Granularity,
        timestamps: Vec<DateTime<Utc>>,
        values: Vec<f64>,
    ) -> Result<Self> {
        if timestamps.len() != values.len() {
            return Err(MathError::InvalidInput(format!(
                "Timestamps length ({}) doesn't match values length ({})",
                timestamps.len(),
                values.len()
            ))
            .into());
        }

        if let Some(pair) = timestamps.windows(2).find(|w| w[0] >= w[1]) {
            return Err(MathError::InvalidInput(format!(
                "Timestamps must be strictly increasing ({} is followed by {})",
                pair[0], pair[1]
            ))
            .into());
        }

        Ok(Self {
            granularity,
            timestamps,
            values,
        })
    }

    /// Build a series on the same timestamp axis with different values
    pub fn with_values(&self, values: Vec<f64>) -> Result<Self> {
        Self::new(self.granularity, self.timestamps.clone(), values)
    }

    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    pub fn timestamps(&self) -> &[DateTime<Utc>] {
        &self.timestamps
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over `(timestamp, value)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (DateTime<Utc>, f64)> + '_ {
        self.timestamps.iter().copied().zip(self.values.iter().copied())
    }

    /// First `n` samples, for data previews
    pub fn head(&self, n: usize) -> Self {
        let n = n.min(self.len());
        Self {
            granularity: self.granularity,
            timestamps: self.timestamps[..n].to_vec(),
            values: self.values[..n].to_vec(),
        }
    }

    /// Average of the samples falling in each calendar month
    ///
    /// Each output point is stamped at midnight UTC on the first day of its
    /// month.
    pub fn monthly_means(&self) -> Result<Self> {
        let mut buckets: BTreeMap<(i32, u32), (f64, usize)> = BTreeMap::new();
        for (ts, value) in self.iter() {
            let entry = buckets.entry((ts.year(), ts.month())).or_insert((0.0, 0));
            entry.0 += value;
            entry.1 += 1;
        }

        let mut timestamps = Vec::with_capacity(buckets.len());
        let mut values = Vec::with_capacity(buckets.len());
        for ((year, month), (sum, count)) in buckets {
            let month_start = NaiveDate::from_ymd_opt(year, month, 1)
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .ok_or_else(|| {
                    MathError::CalculationError(format!("Invalid month {}-{}", year, month))
                })?;
            timestamps.push(Utc.from_utc_datetime(&month_start));
            values.push(sum / count as f64);
        }

        Self::new(Granularity::Monthly, timestamps, values)
    }

    /// Least-squares trend over sample index
    pub fn trend_line(&self) -> Result<LinearFit> {
        Ok(LinearFit::fit(&self.values)?)
    }

    /// Write the series as a two-column CSV table
    pub fn write_csv<W: Write>(&self, writer: W, value_header: &str) -> Result<()> {
        write_columns(writer, &self.timestamps, &[value_header], &[self.values.as_slice()])
    }

    /// Serialize the series to JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Write a `Date` column followed by parallel value columns
pub(crate) fn write_columns<W: Write>(
    writer: W,
    timestamps: &[DateTime<Utc>],
    headers: &[&str],
    columns: &[&[f64]],
) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    let mut header_row = Vec::with_capacity(headers.len() + 1);
    header_row.push("Date");
    header_row.extend_from_slice(headers);
    csv_writer.write_record(&header_row)?;

    for (i, ts) in timestamps.iter().enumerate() {
        let mut record = Vec::with_capacity(columns.len() + 1);
        record.push(ts.to_rfc3339());
        record.extend(columns.iter().map(|column| column[i].to_string()));
        csv_writer.write_record(&record)?;
    }

    csv_writer.flush()?;
    Ok(())
}
