use std::net::SocketAddr;

use anyhow::Result;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::advisor::{Advice, AdviceRequest, Advisor, AdvisorConfig};
use crate::error::AdvisorError;

/// Upper bound on per-request trials accepted over HTTP.
pub const MAX_TRIALS: u32 = 1_000_000;

#[derive(Clone)]
struct AppState {
    defaults: AdvisorConfig,
}

#[derive(Debug, Deserialize)]
struct AdviceBody {
    #[serde(flatten)]
    request: AdviceRequest,
    trials: Option<u32>,
    seed: Option<u64>,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Debug, thiserror::Error)]
enum ApiError {
    #[error(transparent)]
    Advisor(#[from] AdvisorError),
    #[error("trials must not exceed {max}, got {requested}")]
    TooManyTrials { requested: u32, max: u32 },
    #[error("simulation task failed")]
    Worker(#[from] tokio::task::JoinError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Advisor(_) | ApiError::TooManyTrials { .. } => StatusCode::BAD_REQUEST,
            ApiError::Worker(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}

pub async fn serve(addr: SocketAddr, defaults: AdvisorConfig) -> Result<()> {
    let app = build_router(AppState { defaults });
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: AppState) -> Router {
    let api = Router::new().route("/advice", post(advise));

    Router::new()
        .route("/healthz", get(health))
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub fn router(defaults: AdvisorConfig) -> Router {
    build_router(AppState { defaults })
}

async fn health() -> &'static str {
    "ok"
}

async fn advise(
    State(state): State<AppState>,
    Json(body): Json<AdviceBody>,
) -> Result<Json<Advice>, ApiError> {
    let trials = body.trials.unwrap_or(state.defaults.trials);
    if trials > MAX_TRIALS {
        return Err(ApiError::TooManyTrials {
            requested: trials,
            max: MAX_TRIALS,
        });
    }
    let config = AdvisorConfig {
        trials,
        seed: body.seed.or(state.defaults.seed),
        ..state.defaults.clone()
    };
    // CPU-bound
    let advice =
        tokio::task::spawn_blocking(move || Advisor::new(config).advise(&body.request)).await??;
    Ok(Json(advice))
}
