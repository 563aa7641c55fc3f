use askama::Template;
use market_data::analysis::Interval;
use market_data::data::Observation;
use pulldown_cmark::{html, Options, Parser};

use crate::models::ModelEntry;

pub const APP_TITLE: &str = "Stock Market Trend Prediction Using Neural Networks";
pub const APP_TAGLINE: &str = "This app helps you compare different machine learning models.";
pub const MISSING_DATA_WARNING: &str = "Data is not yet loaded. Please check your data import.";

const INTRODUCTION: &str = "\
This application is designed to provide insights into the performance of various machine learning models.
It allows you to explore the data used to train these models, compare their accuracy, and gain a better understanding of their strengths and weaknesses.";

const DATA_COLLECTION: &str = "\
* **Stock Prices:** Nasdaq 100 index price and crude oil price were obtained via the yfinance API.
* **Economic Indicators:** US GDP and Fed rate data were retrieved from fred.stlouisfed.org.";

const DATA_PREPROCESSING: &str = "\
* **Interpolation:** US GDP and Fed rate data have different update frequencies. To ensure consistent time steps for modeling, an interpolation function was applied to fill in missing values. It's important to note that this assumes a linear relationship between data points, which may not always be perfectly accurate.
* **Missing Value Removal:** Any remaining missing values in the data were identified and removed.
* **Scaling:** The data was scaled to a common range to improve the performance of machine learning models.
* **Time Series Segmentation:** The data was transformed into a format suitable for LSTM models. This typically involves creating sequences or \"windows\" of past observations to predict future values.";

const ABOUT: &str = "This app is developed by Jigyanshu Singh✌️.";

/// Convert markdown text to HTML
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_SMART_PUNCTUATION);

    let parser = Parser::new_ext(markdown, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);

    html_output
}

/// Interval chart revealed by the "Explore Nasdaq 100 Chart" button
pub struct ExploreSection {
    pub selected: Interval,
    pub figure_json: String,
}

#[derive(Template)]
#[template(path = "data.html")]
pub struct DataPage<'a> {
    pub app_title: &'static str,
    pub app_tagline: &'static str,
    pub introduction_html: String,
    pub collection_html: String,
    pub preprocessing_html: String,
    pub warning: &'static str,
    pub head: &'a [Observation],
    pub has_data: bool,
    pub time_series_json: &'a str,
    pub heatmap_json: &'a str,
    pub intervals: &'static [Interval],
    pub explore: Option<ExploreSection>,
    pub loaded_at: &'a str,
}

impl<'a> DataPage<'a> {
    pub fn new(
        head: &'a [Observation],
        has_data: bool,
        time_series_json: &'a str,
        heatmap_json: &'a str,
        explore: Option<ExploreSection>,
        loaded_at: &'a str,
    ) -> Self {
        Self {
            app_title: APP_TITLE,
            app_tagline: APP_TAGLINE,
            introduction_html: markdown_to_html(INTRODUCTION),
            collection_html: markdown_to_html(DATA_COLLECTION),
            preprocessing_html: markdown_to_html(DATA_PREPROCESSING),
            warning: MISSING_DATA_WARNING,
            head,
            has_data,
            time_series_json,
            heatmap_json,
            intervals: &Interval::ALL,
            explore,
            loaded_at,
        }
    }
}

#[derive(Template)]
#[template(path = "model.html")]
pub struct ModelPage {
    pub app_title: &'static str,
    pub app_tagline: &'static str,
    pub models: &'static [ModelEntry],
    pub selected: &'static ModelEntry,
}

impl ModelPage {
    pub fn new(models: &'static [ModelEntry], selected: &'static ModelEntry) -> Self {
        Self {
            app_title: APP_TITLE,
            app_tagline: APP_TAGLINE,
            models,
            selected,
        }
    }
}

#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutPage {
    pub app_title: &'static str,
    pub app_tagline: &'static str,
    pub about_html: String,
}

impl AboutPage {
    pub fn new() -> Self {
        Self {
            app_title: APP_TITLE,
            app_tagline: APP_TAGLINE,
            about_html: markdown_to_html(ABOUT),
        }
    }
}

impl Default for AboutPage {
    fn default() -> Self {
        Self::new()
    }
}
