//! Trailing time-interval selection

use crate::data::{Dataset, Observation};
use crate::error::DataError;
use std::fmt;
use std::str::FromStr;

/// Display window over the most recent rows of the dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Interval {
    #[default]
    OneDay,
    OneWeek,
    OneYear,
    FiveYears,
    Max,
}

impl Interval {
    /// Every interval in selector order
    pub const ALL: [Interval; 5] = [
        Interval::OneDay,
        Interval::OneWeek,
        Interval::OneYear,
        Interval::FiveYears,
        Interval::Max,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Interval::OneDay => "1D",
            Interval::OneWeek => "1W",
            Interval::OneYear => "1Y",
            Interval::FiveYears => "5Y",
            Interval::Max => "Max",
        }
    }

    /// Number of trailing rows covered, `None` for the whole dataset
    pub fn rows(&self) -> Option<usize> {
        match self {
            Interval::OneDay => Some(1),
            Interval::OneWeek => Some(7),
            Interval::OneYear => Some(365),
            Interval::FiveYears => Some(1825),
            Interval::Max => None,
        }
    }

    /// Select the trailing rows of `dataset` covered by this interval
    pub fn filter<'a>(&self, dataset: &'a Dataset) -> &'a [Observation] {
        let rows = dataset.rows();
        match self.rows() {
            Some(n) => &rows[rows.len().saturating_sub(n)..],
            None => rows,
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Interval {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Interval::ALL
            .into_iter()
            .find(|i| i.label() == s)
            .ok_or_else(|| DataError::UnknownInterval(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::RawObservation;

    fn dataset(len: usize) -> Dataset {
        let raw = (0..len + 99)
            .map(|i| RawObservation::new(i.to_string(), 100.0 + i as f64, 1.0, 2.0, 3.0))
            .collect();
        Dataset::from_raw(raw).unwrap()
    }

    #[test]
    fn test_labels_round_trip() {
        for interval in Interval::ALL {
            assert_eq!(interval.label().parse::<Interval>().unwrap(), interval);
        }
        assert!("1M".parse::<Interval>().is_err());
        assert!("max".parse::<Interval>().is_err());
    }

    #[test]
    fn test_default_is_first_option() {
        assert_eq!(Interval::default(), Interval::ALL[0]);
    }

    #[test]
    fn test_short_dataset_returns_everything() {
        let data = dataset(5);
        assert_eq!(Interval::OneWeek.filter(&data).len(), 5);
        assert_eq!(Interval::OneDay.filter(&data).len(), 1);
    }

    #[test]
    fn test_empty_dataset() {
        let data = Dataset::default();
        for interval in Interval::ALL {
            assert!(interval.filter(&data).is_empty());
        }
    }
}
