//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::transport::TransportError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/stations", get(list_stations))
        .route("/trains", get(search_trains))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List every station name.
async fn list_stations(
    State(state): State<AppState>,
) -> Result<Json<StationListResponse>, AppError> {
    let stations = state.rail.list_stations().await?;
    Ok(Json(StationListResponse { stations }))
}

/// Search for trains from an origin to a destination.
async fn search_trains(
    State(state): State<AppState>,
    Query(req): Query<TrainSearchRequest>,
) -> Result<Json<TrainSearchResponse>, AppError> {
    if req.origin.is_empty() {
        return Err(AppError::BadRequest {
            message: "origin must not be empty".to_string(),
        });
    }

    let result = state
        .rail
        .search_trains(&req.origin, &req.destination)
        .await?;

    Ok(Json(TrainSearchResponse::from(&result)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Upstream { status: StatusCode, message: String },
}

impl From<TransportError> for AppError {
    fn from(e: TransportError) -> Self {
        let status = match e {
            TransportError::NoConnection => StatusCode::SERVICE_UNAVAILABLE,
            TransportError::NoData | TransportError::NetworkingFailure(_) => {
                StatusCode::BAD_GATEWAY
            }
            TransportError::Canceled => StatusCode::INTERNAL_SERVER_ERROR,
        };
        AppError::Upstream {
            status,
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Upstream { status, message } => (status, message),
        };

        warn!(status = %status, error = %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
