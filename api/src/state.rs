use anyhow::Context;
use chrono::Utc;
use market_data::analysis::{correlation_matrix, Interval};
use market_data::data::{Column, Dataset};
use shared::charts::{correlation_heatmap, time_series_figure};
use shared::{Config, ModelEntry, MODELS};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Selections remembered between requests
#[derive(Debug, Clone, Copy)]
pub struct Session {
    pub interval: Interval,
    pub model: &'static ModelEntry,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            interval: Interval::default(),
            model: &MODELS[0],
        }
    }
}

/// Everything derived from the dataset that does not depend on user input
pub struct StaticFigures {
    pub time_series_json: String,
    pub heatmap_json: String,
}

#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
    pub figures: Arc<StaticFigures>,
    pub session: Arc<RwLock<Session>>,
    pub sneak_peek_rows: usize,
    pub loaded_at: Arc<str>,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self, anyhow::Error> {
        let dataset = Dataset::load(&config.data_path)
            .with_context(|| format!("failed to load dataset from {}", config.data_path))?;
        Self::from_dataset(dataset, config.sneak_peek_rows)
    }

    pub fn from_dataset(dataset: Dataset, sneak_peek_rows: usize) -> Result<Self, anyhow::Error> {
        if dataset.is_empty() {
            tracing::warn!("Dataset has no rows left after cleaning");
        }

        let matrix = correlation_matrix(&dataset, &Column::SOURCE);
        let figures = StaticFigures {
            time_series_json: time_series_figure(&dataset).to_script_json()?,
            heatmap_json: correlation_heatmap(&matrix).to_script_json()?,
        };
        tracing::info!("Precomputed overview figures for {} rows", dataset.len());

        Ok(AppState {
            dataset: Arc::new(dataset),
            figures: Arc::new(figures),
            session: Arc::new(RwLock::new(Session::default())),
            sneak_peek_rows,
            loaded_at: Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string().into(),
        })
    }
}
