// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use axum::{
	extract::{Path, State},
	http::StatusCode,
	response::IntoResponse,
	Json,
};
use chrono::Utc;
use vitrine_content_core::FaqId;
use vitrine_server_audit::{AuditAction, AuditEntityType};

pub use vitrine_server_api::faq::*;
pub use vitrine_server_api::{ErrorResponse, LangQuery, SuccessResponse};

use super::{audit_entry, parse_id};
use crate::{
	api::AppState,
	auth_middleware::{require_admin, RequireAuth},
	error::{Resource, ServerError},
	i18n::RequestLanguage,
};

#[utoipa::path(
	get,
	path = "/api/faq/public",
	params(LangQuery),
	responses(
		(status = 200, description = "Active questions in display order", body = Vec<PublicFaqResponse>)
	),
	tag = "faq"
)]
#[tracing::instrument(skip(state))]
pub async fn list_public_faq(
	State(state): State<AppState>,
	RequestLanguage(lang): RequestLanguage,
) -> Result<impl IntoResponse, ServerError> {
	let faqs = state
		.faq_repo
		.list_active()
		.await
		.map_err(|e| ServerError::from_db(lang, Resource::Faq, e))?;

	let localized: Vec<_> = faqs
		.iter()
		.map(|faq| PublicFaqResponse::localized(faq, Some(lang.code())))
		.collect();
	Ok(Json(localized))
}

#[utoipa::path(
	get,
	path = "/api/faq",
	responses(
		(status = 200, description = "All live questions", body = Vec<FaqResponse>),
		(status = 401, description = "Not authenticated", body = ErrorResponse)
	),
	tag = "faq"
)]
#[tracing::instrument(skip(state, _user))]
pub async fn list_faq(
	RequireAuth(_user): RequireAuth,
	State(state): State<AppState>,
	RequestLanguage(lang): RequestLanguage,
) -> Result<impl IntoResponse, ServerError> {
	let faqs = state
		.faq_repo
		.list()
		.await
		.map_err(|e| ServerError::from_db(lang, Resource::Faq, e))?;
	Ok(Json(faqs.iter().map(FaqResponse::from).collect::<Vec<_>>()))
}

#[utoipa::path(
	get,
	path = "/api/faq/{id}",
	params(("id" = String, Path, description = "FAQ ID")),
	responses(
		(status = 200, description = "Question", body = FaqResponse),
		(status = 401, description = "Not authenticated", body = ErrorResponse),
		(status = 404, description = "Question not found", body = ErrorResponse)
	),
	tag = "faq"
)]
#[tracing::instrument(skip(state, _user))]
pub async fn get_faq(
	RequireAuth(_user): RequireAuth,
	State(state): State<AppState>,
	RequestLanguage(lang): RequestLanguage,
	Path(id): Path<String>,
) -> Result<impl IntoResponse, ServerError> {
	let id: FaqId = parse_id(&id, lang)?;
	let faq = state
		.faq_repo
		.get(&id)
		.await
		.map_err(|e| ServerError::from_db(lang, Resource::Faq, e))?
		.ok_or_else(|| ServerError::not_found(lang, Resource::Faq))?;
	Ok(Json(FaqResponse::from(&faq)))
}

#[utoipa::path(
	post,
	path = "/api/faq",
	request_body = CreateFaqRequest,
	responses(
		(status = 201, description = "Question created", body = FaqResponse),
		(status = 400, description = "Invalid request", body = ErrorResponse),
		(status = 401, description = "Not authenticated", body = ErrorResponse)
	),
	tag = "faq"
)]
#[tracing::instrument(skip(state, user, payload), fields(user_id = %user.id))]
pub async fn create_faq(
	RequireAuth(user): RequireAuth,
	State(state): State<AppState>,
	RequestLanguage(lang): RequestLanguage,
	Json(payload): Json<CreateFaqRequest>,
) -> Result<impl IntoResponse, ServerError> {
	let mut faq = payload
		.into_faq()
		.map_err(|e| ServerError::from_content(lang, e))?;
	faq.created_by = Some(user.id.clone());
	faq.updated_by = Some(user.id.clone());

	state
		.faq_repo
		.create(&faq)
		.await
		.map_err(|e| ServerError::from_db(lang, Resource::Faq, e))?;

	state.audit(audit_entry(
		AuditAction::Create,
		AuditEntityType::Faq,
		faq.id,
		&user,
		faq.audit_name(),
	));

	Ok((StatusCode::CREATED, Json(FaqResponse::from(&faq))))
}

#[utoipa::path(
	put,
	path = "/api/faq/{id}",
	params(("id" = String, Path, description = "FAQ ID")),
	request_body = UpdateFaqRequest,
	responses(
		(status = 200, description = "Question updated", body = FaqResponse),
		(status = 400, description = "Invalid request", body = ErrorResponse),
		(status = 401, description = "Not authenticated", body = ErrorResponse),
		(status = 404, description = "Question not found", body = ErrorResponse)
	),
	tag = "faq"
)]
#[tracing::instrument(skip(state, user, payload), fields(user_id = %user.id))]
pub async fn update_faq(
	RequireAuth(user): RequireAuth,
	State(state): State<AppState>,
	RequestLanguage(lang): RequestLanguage,
	Path(id): Path<String>,
	Json(payload): Json<UpdateFaqRequest>,
) -> Result<impl IntoResponse, ServerError> {
	let id: FaqId = parse_id(&id, lang)?;
	let mut faq = state
		.faq_repo
		.get(&id)
		.await
		.map_err(|e| ServerError::from_db(lang, Resource::Faq, e))?
		.ok_or_else(|| ServerError::not_found(lang, Resource::Faq))?;

	payload
		.apply(&mut faq)
		.map_err(|e| ServerError::from_content(lang, e))?;
	faq.updated_by = Some(user.id.clone());
	faq.updated_at = Utc::now();

	state
		.faq_repo
		.update(&faq)
		.await
		.map_err(|e| ServerError::from_db(lang, Resource::Faq, e))?;

	state.audit(audit_entry(
		AuditAction::Update,
		AuditEntityType::Faq,
		faq.id,
		&user,
		faq.audit_name(),
	));

	Ok(Json(FaqResponse::from(&faq)))
}

#[utoipa::path(
	delete,
	path = "/api/faq/{id}",
	params(("id" = String, Path, description = "FAQ ID")),
	responses(
		(status = 200, description = "Question deleted", body = SuccessResponse),
		(status = 401, description = "Not authenticated", body = ErrorResponse),
		(status = 403, description = "Admin role required", body = ErrorResponse),
		(status = 404, description = "Question not found", body = ErrorResponse)
	),
	tag = "faq"
)]
#[tracing::instrument(skip(state, user), fields(user_id = %user.id))]
pub async fn delete_faq(
	RequireAuth(user): RequireAuth,
	State(state): State<AppState>,
	RequestLanguage(lang): RequestLanguage,
	Path(id): Path<String>,
) -> Result<impl IntoResponse, ServerError> {
	require_admin(&user, lang)?;
	let id: FaqId = parse_id(&id, lang)?;
	let faq = state
		.faq_repo
		.get(&id)
		.await
		.map_err(|e| ServerError::from_db(lang, Resource::Faq, e))?
		.ok_or_else(|| ServerError::not_found(lang, Resource::Faq))?;

	state
		.faq_repo
		.soft_delete(&id)
		.await
		.map_err(|e| ServerError::from_db(lang, Resource::Faq, e))?;

	state.audit(audit_entry(
		AuditAction::Delete,
		AuditEntityType::Faq,
		id,
		&user,
		faq.audit_name(),
	));

	Ok(Json(SuccessResponse {
		message: Resource::Faq.message(lang, "deleted"),
	}))
}
