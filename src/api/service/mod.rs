pub mod endpoints;
pub mod router;
pub mod types;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::db;

#[derive(Clone, Copy)]
pub struct QueryConfig {
    pub nearby_radius_m: f64,
}

#[derive(Clone)]
pub struct State {
    pub db: db::Database,
    pub query: QueryConfig,
}

impl State {
    pub fn new(db: crate::db::Database, query: QueryConfig) -> Self {
        Self { db, query }
    }
}

impl axum::extract::FromRef<State> for db::Database {
    fn from_ref(input: &State) -> Self {
        input.db.clone()
    }
}

impl axum::extract::FromRef<State> for QueryConfig {
    fn from_ref(input: &State) -> Self {
        input.query
    }
}

/// Request failures, mapped onto transport status codes at this boundary.
/// Validation failures never reach the store; store and internal failures
/// surface with an opaque message and are not retried here.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("db returned error: {0}")]
    Store(#[from] sqlx::Error),

    #[error("unexpected error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Store(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(types::ErrorResponse { error: self.to_string() })).into_response()
    }
}
