//! Row types of the research dataset

/// Column names applied by position to the five CSV columns
pub const SOURCE_COLUMNS: [&str; 5] = ["Date", "Nasdaq100_price", "crude_price", "GDP", "FED rate"];

/// A row as read from the CSV, before cleaning
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawObservation {
    pub date: Option<String>,
    pub nasdaq100_price: Option<f64>,
    pub crude_price: Option<f64>,
    pub gdp: Option<f64>,
    pub fed_rate: Option<f64>,
}

impl RawObservation {
    /// Create a fully populated raw row
    pub fn new(date: impl Into<String>, nasdaq100_price: f64, crude_price: f64, gdp: f64, fed_rate: f64) -> Self {
        Self {
            date: Some(date.into()),
            nasdaq100_price: Some(nasdaq100_price),
            crude_price: Some(crude_price),
            gdp: Some(gdp),
            fed_rate: Some(fed_rate),
        }
    }
}

/// A cleaned row: every column, derived ones included, is present
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    /// Date exactly as written in the source file
    pub date: String,
    pub nasdaq100_price: f64,
    pub crude_price: f64,
    pub gdp: f64,
    pub fed_rate: f64,
    pub sma_50: f64,
    pub sma_100: f64,
}

/// Numeric columns of a cleaned row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Nasdaq100Price,
    CrudePrice,
    Gdp,
    FedRate,
    Sma50,
    Sma100,
}

impl Column {
    /// Every numeric column in table order
    pub const ALL: [Column; 6] = [
        Column::Nasdaq100Price,
        Column::CrudePrice,
        Column::Gdp,
        Column::FedRate,
        Column::Sma50,
        Column::Sma100,
    ];

    /// The numeric columns among the five source columns
    pub const SOURCE: [Column; 4] = [
        Column::Nasdaq100Price,
        Column::CrudePrice,
        Column::Gdp,
        Column::FedRate,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Column::Nasdaq100Price => "Nasdaq100_price",
            Column::CrudePrice => "crude_price",
            Column::Gdp => "GDP",
            Column::FedRate => "FED rate",
            Column::Sma50 => "SMA_50",
            Column::Sma100 => "SMA_100",
        }
    }

    /// Read this column from a row
    pub fn value(&self, row: &Observation) -> f64 {
        match self {
            Column::Nasdaq100Price => row.nasdaq100_price,
            Column::CrudePrice => row.crude_price,
            Column::Gdp => row.gdp,
            Column::FedRate => row.fed_rate,
            Column::Sma50 => row.sma_50,
            Column::Sma100 => row.sma_100,
        }
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
