//! Loading and cleaning of the research dataset

use crate::data::{Column, Observation, RawObservation, SOURCE_COLUMNS};
use crate::error::DataError;
use crate::indicators::calculate_sma;
use crate::Result;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Short moving-average window
pub const SMA_SHORT_PERIOD: usize = 50;
/// Long moving-average window
pub const SMA_LONG_PERIOD: usize = 100;

/// Cell contents read as a missing value, matched exactly
pub const NA_VALUES: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

fn is_missing(cell: &str) -> bool {
    NA_VALUES.contains(&cell)
}

/// Cleaned, immutable dataset in source (chronological) order.
///
/// A row's index is its position, so indices always form `0..len()`.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    rows: Vec<Observation>,
}

impl Dataset {
    /// Load and clean a CSV file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::info!("Loading dataset from {}", path.display());
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Load and clean CSV content from any reader.
    ///
    /// The header row is skipped and the five columns are named by position.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let found = reader.headers()?.len();
        if found != SOURCE_COLUMNS.len() {
            return Err(DataError::ColumnCount {
                expected: SOURCE_COLUMNS.len(),
                found,
            });
        }

        let mut raw = Vec::new();
        for result in reader.records() {
            let record = result?;
            let line = record.position().map(|p| p.line()).unwrap_or_default();

            raw.push(RawObservation {
                date: Some(&record[0]).filter(|d| !is_missing(d)).map(str::to_string),
                nasdaq100_price: parse_cell(&record[1], line, SOURCE_COLUMNS[1])?,
                crude_price: parse_cell(&record[2], line, SOURCE_COLUMNS[2])?,
                gdp: parse_cell(&record[3], line, SOURCE_COLUMNS[3])?,
                fed_rate: parse_cell(&record[4], line, SOURCE_COLUMNS[4])?,
            });
        }

        Self::from_raw(raw)
    }

    /// Derive SMA 50 / SMA 100 over the index price, then drop every row
    /// with a missing value.
    pub fn from_raw(raw: Vec<RawObservation>) -> Result<Self> {
        let prices: Vec<Option<f64>> = raw.iter().map(|r| r.nasdaq100_price).collect();
        let sma_short = calculate_sma(&prices, SMA_SHORT_PERIOD)?;
        let sma_long = calculate_sma(&prices, SMA_LONG_PERIOD)?;

        let total = raw.len();
        let rows: Vec<Observation> = raw
            .into_iter()
            .zip(sma_short.into_iter().zip(sma_long))
            .filter_map(|(r, (sma_50, sma_100))| {
                Some(Observation {
                    date: r.date?,
                    nasdaq100_price: r.nasdaq100_price?,
                    crude_price: r.crude_price?,
                    gdp: r.gdp?,
                    fed_rate: r.fed_rate?,
                    sma_50: sma_50?,
                    sma_100: sma_100?,
                })
            })
            .collect();

        tracing::info!(
            "Dataset ready: {} rows kept, {} dropped during cleaning",
            rows.len(),
            total - rows.len()
        );

        Ok(Self { rows })
    }

    /// Get number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if dataset is empty
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get all rows
    pub fn rows(&self) -> &[Observation] {
        &self.rows
    }

    /// Get row at index
    pub fn get(&self, index: usize) -> Option<&Observation> {
        self.rows.get(index)
    }

    /// Get last row
    pub fn last(&self) -> Option<&Observation> {
        self.rows.last()
    }

    /// First `n` rows, or fewer when the dataset is shorter
    pub fn head(&self, n: usize) -> &[Observation] {
        &self.rows[..n.min(self.rows.len())]
    }

    /// Get dates as vector
    pub fn dates(&self) -> Vec<String> {
        self.rows.iter().map(|r| r.date.clone()).collect()
    }

    /// Get one numeric column as vector
    pub fn column(&self, column: Column) -> Vec<f64> {
        self.rows.iter().map(|r| column.value(r)).collect()
    }
}

fn parse_cell(cell: &str, line: u64, column: &'static str) -> Result<Option<f64>> {
    if is_missing(cell) {
        return Ok(None);
    }
    cell.parse::<f64>()
        .map(|v| Some(v).filter(|v| !v.is_nan()))
        .map_err(|_| DataError::Parse {
            line,
            column,
            value: cell.to_string(),
        })
}
