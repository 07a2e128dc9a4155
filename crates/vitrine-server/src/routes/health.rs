// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Health HTTP handler.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use vitrine_server_db::ping;

pub use vitrine_server_api::health::*;

use crate::api::AppState;

#[utoipa::path(
	get,
	path = "/health",
	responses(
		(status = 200, description = "Server and database are healthy", body = HealthResponse),
		(status = 503, description = "Database is unreachable", body = HealthResponse)
	),
	tag = "health"
)]
/// GET /health - database reachability.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
	let database_error = ping(&state.pool).await.err().map(|e| {
		tracing::warn!(error = %e, "database health check failed");
		e.to_string()
	});

	let response = HealthResponse::new(env!("CARGO_PKG_VERSION"), database_error);
	let status = if response.is_healthy() {
		StatusCode::OK
	} else {
		StatusCode::SERVICE_UNAVAILABLE
	};
	(status, Json(response))
}
