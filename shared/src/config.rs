use anyhow::Context;
use dotenv::dotenv;

pub struct Config {
    pub data_path: String,
    pub bind_addr: String,
    pub sneak_peek_rows: usize,
    pub log_filter: String,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenv().ok();

        Ok(Config {
            data_path: std::env::var("DATA_PATH")
                .unwrap_or_else(|_| "Nasdaq100_interpolate.csv".to_string()),
            bind_addr: std::env::var("BIND_ADDR")
                .unwrap_or_else(|_| "0.0.0.0:8501".to_string()),
            sneak_peek_rows: std::env::var("SNEAK_PEEK_ROWS")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .context("SNEAK_PEEK_ROWS must be a non-negative integer")?,
            log_filter: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
