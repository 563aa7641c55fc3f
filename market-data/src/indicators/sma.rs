//! SMA (Simple Moving Average) indicator

use crate::error::DataError;
use crate::indicators::Indicator;
use crate::Result;
use ta::indicators::SimpleMovingAverage;
use ta::{Next, Reset};

/// SMA indicator wrapper
#[derive(Debug)]
pub struct SMA {
    inner: SimpleMovingAverage,
    period: usize,
    update_count: usize,
    last_value: Option<f64>,
}

impl SMA {
    /// Create new SMA indicator
    pub fn new(period: usize) -> Result<Self> {
        let inner = SimpleMovingAverage::new(period).map_err(|_| DataError::InvalidPeriod)?;
        Ok(Self {
            inner,
            period,
            update_count: 0,
            last_value: None,
        })
    }

    /// Get SMA period
    pub fn period(&self) -> usize {
        self.period
    }
}

impl Indicator for SMA {
    fn name(&self) -> &str {
        "SMA"
    }

    fn update(&mut self, value: f64) {
        let sma_value = self.inner.next(value);
        self.update_count += 1;
        if self.update_count >= self.period {
            self.last_value = Some(sma_value);
        }
    }

    fn value(&self) -> Option<f64> {
        self.last_value
    }

    fn is_ready(&self) -> bool {
        self.update_count >= self.period
    }

    fn reset(&mut self) {
        self.inner.reset();
        self.update_count = 0;
        self.last_value = None;
    }
}

/// Calculate a trailing SMA over a series with gaps.
///
/// A window that contains a missing value has no average, so a gap restarts
/// the window: the next `period` present values are needed again.
pub fn calculate_sma(values: &[Option<f64>], period: usize) -> Result<Vec<Option<f64>>> {
    let mut sma = SMA::new(period)?;
    let mut results = Vec::with_capacity(values.len());

    for value in values {
        match value {
            Some(v) => {
                sma.update(*v);
                results.push(sma.value());
            }
            None => {
                sma.reset();
                results.push(None);
            }
        }
    }

    Ok(results)
}
