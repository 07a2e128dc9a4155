// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use axum::{extract::State, response::IntoResponse, Json};

pub use vitrine_server_api::dashboard::*;
pub use vitrine_server_api::ErrorResponse;

use crate::{
	api::AppState,
	auth_middleware::RequireAuth,
	error::ServerError,
	i18n::RequestLanguage,
};

#[utoipa::path(
	get,
	path = "/api/dashboard",
	responses(
		(status = 200, description = "Content counts and recent activity", body = DashboardResponse),
		(status = 401, description = "Not authenticated", body = ErrorResponse)
	),
	tag = "dashboard"
)]
#[tracing::instrument(skip(state, _user))]
pub async fn get_dashboard(
	RequireAuth(_user): RequireAuth,
	State(state): State<AppState>,
	RequestLanguage(lang): RequestLanguage,
) -> Result<impl IntoResponse, ServerError> {
	let stats = state
		.dashboard_repo
		.stats()
		.await
		.map_err(|e| ServerError::internal(lang, e))?;
	Ok(Json(DashboardResponse::from(&stats)))
}
