use askama::Template;
use axum::{
    extract::{Path, Query, State},
    response::{Html, Redirect},
    routing::get,
    Json, Router,
};
use market_data::analysis::Interval;
use serde::Deserialize;
use serde_json::{json, Value};
use shared::charts::{interval_figure, Figure};
use shared::templates::ExploreSection;
use shared::{find_model, AboutPage, DataPage, ModelPage, MODELS};

use crate::error::ApiError;
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to("/data") }))
        .route("/data", get(data_tab))
        .route("/model", get(model_tab))
        .route("/about", get(about_tab))
        .route("/api/chart/:interval", get(interval_chart))
        .route("/health", get(health_check))
        .with_state(state)
}

#[derive(Debug, Default, Deserialize)]
pub struct DataQuery {
    #[serde(default)]
    pub explore: bool,
    pub interval: Option<String>,
}

async fn data_tab(
    State(state): State<AppState>,
    Query(query): Query<DataQuery>,
) -> Result<Html<String>, ApiError> {
    let selected = match query.interval.as_deref() {
        Some(label) => {
            let interval: Interval = label.parse()?;
            state.session.write().await.interval = interval;
            tracing::info!("Selected interval {}", interval);
            interval
        }
        None => state.session.read().await.interval,
    };

    let explore = if query.explore {
        let rows = selected.filter(&state.dataset);
        Some(ExploreSection {
            selected,
            figure_json: interval_figure(rows, selected).to_script_json()?,
        })
    } else {
        None
    };

    let page = DataPage::new(
        state.dataset.head(state.sneak_peek_rows),
        !state.dataset.is_empty(),
        &state.figures.time_series_json,
        &state.figures.heatmap_json,
        explore,
        &state.loaded_at,
    );

    Ok(Html(page.render()?))
}

#[derive(Debug, Default, Deserialize)]
pub struct ModelQuery {
    pub model: Option<String>,
}

async fn model_tab(
    State(state): State<AppState>,
    Query(query): Query<ModelQuery>,
) -> Result<Html<String>, ApiError> {
    let selected = match query.model {
        Some(name) => {
            let model = find_model(&name).ok_or(ApiError::UnknownModel(name))?;
            state.session.write().await.model = model;
            model
        }
        None => state.session.read().await.model,
    };

    Ok(Html(ModelPage::new(&MODELS, selected).render()?))
}

async fn about_tab() -> Result<Html<String>, ApiError> {
    Ok(Html(AboutPage::new().render()?))
}

/// Only the interval chart, for clients that redraw it in place
async fn interval_chart(
    State(state): State<AppState>,
    Path(label): Path<String>,
) -> Result<Json<Figure>, ApiError> {
    let interval: Interval = label.parse()?;
    let rows = interval.filter(&state.dataset);
    Ok(Json(interval_figure(rows, interval)))
}

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use market_data::data::{Dataset, RawObservation};
    use tower::ServiceExt;

    fn test_state(raw_rows: usize) -> AppState {
        let raw = (0..raw_rows)
            .map(|i| RawObservation::new(format!("2020-{i:05}"), 100.0 + i as f64, 60.0 + (i % 9) as f64, 21_000.0 + i as f64, 1.5))
            .collect();
        AppState::from_dataset(Dataset::from_raw(raw).unwrap(), 5).unwrap()
    }

    async fn fetch(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = fetch(router(test_state(120)), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, r#"{"status":"ok"}"#);
    }

    #[tokio::test]
    async fn test_root_redirects_to_data() {
        let response = router(test_state(120))
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()["location"], "/data");
    }

    #[tokio::test]
    async fn test_chart_endpoint_one_week() {
        let (status, body) = fetch(router(test_state(200)), "/api/chart/1W").await;
        assert_eq!(status, StatusCode::OK);

        let figure: Value = serde_json::from_str(&body).unwrap();
        let traces = figure["data"].as_array().unwrap();
        assert_eq!(traces.len(), 3);
        for trace in traces {
            assert_eq!(trace["x"].as_array().unwrap().len(), 7);
        }
        assert_eq!(traces[0]["x"][6], "2020-00199");
    }

    #[tokio::test]
    async fn test_unknown_interval_is_bad_request() {
        let (status, _) = fetch(router(test_state(120)), "/api/chart/2W").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = fetch(router(test_state(120)), "/data?explore=true&interval=3D").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_interval_selection_is_remembered() {
        let state = test_state(150);
        let app = router(state.clone());

        let (status, body) = fetch(app.clone(), "/data?explore=true&interval=1Y").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("value=\"1Y\" checked"));
        assert_eq!(state.session.read().await.interval, Interval::OneYear);

        let (_, body) = fetch(app, "/data?explore=true").await;
        assert!(body.contains("value=\"1Y\" checked"));
    }

    #[tokio::test]
    async fn test_data_tab_hides_chart_until_explored() {
        let (status, body) = fetch(router(test_state(120)), "/data").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Data Sneak Peek"));
        assert!(body.contains("Explore Nasdaq 100 Chart"));
        assert!(!body.contains("Select Time Interval:"));
    }

    #[tokio::test]
    async fn test_data_tab_warns_on_empty_dataset() {
        let (status, body) = fetch(router(test_state(50)), "/data").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Data is not yet loaded. Please check your data import."));
    }

    #[tokio::test]
    async fn test_model_selection() {
        let state = test_state(120);
        let app = router(state.clone());

        let (status, body) = fetch(app.clone(), "/model?model=Model%20B").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<option value=\"Model B\" selected>"));
        assert_eq!(state.session.read().await.model.name, "Model B");

        let (status, _) = fetch(app, "/model?model=Model%20Z").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_about_tab() {
        let (status, body) = fetch(router(test_state(120)), "/about").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Jigyanshu Singh"));
    }
}
