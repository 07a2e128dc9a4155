// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use axum::{
	extract::{Query, State},
	response::IntoResponse,
	Json,
};

pub use vitrine_server_api::audit::*;
pub use vitrine_server_api::ErrorResponse;

use crate::{
	api::AppState,
	auth_middleware::RequireAuth,
	error::ServerError,
	i18n::RequestLanguage,
};

#[utoipa::path(
	get,
	path = "/api/audit",
	params(ListAuditLogsParams),
	responses(
		(status = 200, description = "Audit entries, newest first", body = ListAuditLogsResponse),
		(status = 401, description = "Not authenticated", body = ErrorResponse)
	),
	tag = "audit"
)]
#[tracing::instrument(skip(state, _user))]
pub async fn list_audit_logs(
	RequireAuth(_user): RequireAuth,
	State(state): State<AppState>,
	RequestLanguage(lang): RequestLanguage,
	Query(params): Query<ListAuditLogsParams>,
) -> Result<impl IntoResponse, ServerError> {
	let page = state
		.audit_repo
		.query(&params.to_query())
		.await
		.map_err(|e| ServerError::internal(lang, e))?;
	Ok(Json(ListAuditLogsResponse::from(&page)))
}
