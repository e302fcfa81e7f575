use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::get,
    Form, Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

use crate::config::AppConfig;
use crate::error::PipelineError;
use crate::page::{render_page, PageOutcome};
use crate::services::Pipeline;

pub struct AppState {
    pub pipeline: Pipeline,
    pub config: AppConfig,
}

#[derive(Deserialize)]
pub struct TickerParams {
    #[serde(default)]
    ticker: String,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index).post(submit))
        .route("/api/insights", get(get_insights))
        .route("/health", get(health))
        .with_state(state)
}

pub async fn run_server(state: Arc<AppState>) -> std::io::Result<()> {
    let bind_addr = state.config.server.bind_addr.clone();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!("API Server listening on {}", bind_addr);
    axum::serve(listener, router(state)).await
}

async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(render_page(&state.config.default_ticker, PageOutcome::Blank))
}

async fn submit(
    State(state): State<Arc<AppState>>,
    Form(params): Form<TickerParams>,
) -> impl IntoResponse {
    let ticker = params.ticker;
    let page = match state.pipeline.run(&ticker).await {
        Ok(report) => render_page(&ticker, PageOutcome::Success(&report)),
        Err(e @ PipelineError::InvalidTicker) => {
            render_page(&ticker, PageOutcome::Warning(&e.to_string()))
        }
        Err(e) => render_page(&ticker, PageOutcome::Error(&e.to_string())),
    };
    Html(page)
}

async fn get_insights(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TickerParams>,
) -> impl IntoResponse {
    match state.pipeline.run(&params.ticker).await {
        Ok(report) => Json(report).into_response(),
        Err(e) => {
            let status = match e {
                PipelineError::InvalidTicker => StatusCode::BAD_REQUEST,
                PipelineError::FetchFailed(_) | PipelineError::InsightFailed(_) => {
                    StatusCode::BAD_GATEWAY
                }
            };
            (status, Json(json!({"error": e.to_string()}))).into_response()
        }
    }
}

async fn health() -> impl IntoResponse {
    Json(json!({"status": "ok"}))
}
