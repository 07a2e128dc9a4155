// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use axum::{
	extract::{Path, State},
	http::StatusCode,
	response::IntoResponse,
	Json,
};
use chrono::Utc;
use vitrine_content_core::TestimonialId;
use vitrine_server_audit::{AuditAction, AuditEntityType};

pub use vitrine_server_api::testimonials::*;
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
	path = "/api/testimonials/public",
	params(LangQuery),
	responses(
		(status = 200, description = "Active testimonials in display order", body = Vec<PublicTestimonialResponse>)
	),
	tag = "testimonials"
)]
#[tracing::instrument(skip(state))]
pub async fn list_public_testimonials(
	State(state): State<AppState>,
	RequestLanguage(lang): RequestLanguage,
) -> Result<impl IntoResponse, ServerError> {
	let testimonials = state
		.testimonial_repo
		.list_active()
		.await
		.map_err(|e| ServerError::from_db(lang, Resource::Testimonial, e))?;

	let localized: Vec<_> = testimonials
		.iter()
		.map(|testimonial| PublicTestimonialResponse::localized(testimonial, Some(lang.code())))
		.collect();
	Ok(Json(localized))
}

#[utoipa::path(
	get,
	path = "/api/testimonials",
	responses(
		(status = 200, description = "All live testimonials", body = Vec<TestimonialResponse>),
		(status = 401, description = "Not authenticated", body = ErrorResponse)
	),
	tag = "testimonials"
)]
#[tracing::instrument(skip(state, _user))]
pub async fn list_testimonials(
	RequireAuth(_user): RequireAuth,
	State(state): State<AppState>,
	RequestLanguage(lang): RequestLanguage,
) -> Result<impl IntoResponse, ServerError> {
	let testimonials = state
		.testimonial_repo
		.list()
		.await
		.map_err(|e| ServerError::from_db(lang, Resource::Testimonial, e))?;
	Ok(Json(
		testimonials
			.iter()
			.map(TestimonialResponse::from)
			.collect::<Vec<_>>(),
	))
}

#[utoipa::path(
	get,
	path = "/api/testimonials/{id}",
	params(("id" = String, Path, description = "Testimonial ID")),
	responses(
		(status = 200, description = "Testimonial", body = TestimonialResponse),
		(status = 401, description = "Not authenticated", body = ErrorResponse),
		(status = 404, description = "Testimonial not found", body = ErrorResponse)
	),
	tag = "testimonials"
)]
#[tracing::instrument(skip(state, _user))]
pub async fn get_testimonial(
	RequireAuth(_user): RequireAuth,
	State(state): State<AppState>,
	RequestLanguage(lang): RequestLanguage,
	Path(id): Path<String>,
) -> Result<impl IntoResponse, ServerError> {
	let id: TestimonialId = parse_id(&id, lang)?;
	let testimonial = state
		.testimonial_repo
		.get(&id)
		.await
		.map_err(|e| ServerError::from_db(lang, Resource::Testimonial, e))?
		.ok_or_else(|| ServerError::not_found(lang, Resource::Testimonial))?;
	Ok(Json(TestimonialResponse::from(&testimonial)))
}

#[utoipa::path(
	post,
	path = "/api/testimonials",
	request_body = CreateTestimonialRequest,
	responses(
		(status = 201, description = "Testimonial created", body = TestimonialResponse),
		(status = 400, description = "Invalid request", body = ErrorResponse),
		(status = 401, description = "Not authenticated", body = ErrorResponse)
	),
	tag = "testimonials"
)]
#[tracing::instrument(skip(state, user, payload), fields(user_id = %user.id))]
pub async fn create_testimonial(
	RequireAuth(user): RequireAuth,
	State(state): State<AppState>,
	RequestLanguage(lang): RequestLanguage,
	Json(payload): Json<CreateTestimonialRequest>,
) -> Result<impl IntoResponse, ServerError> {
	let mut testimonial = payload
		.into_testimonial()
		.map_err(|e| ServerError::from_content(lang, e))?;
	testimonial.created_by = Some(user.id.clone());
	testimonial.updated_by = Some(user.id.clone());

	state
		.testimonial_repo
		.create(&testimonial)
		.await
		.map_err(|e| ServerError::from_db(lang, Resource::Testimonial, e))?;

	state.audit(audit_entry(
		AuditAction::Create,
		AuditEntityType::Testimonial,
		testimonial.id,
		&user,
		testimonial.name.as_str(),
	));

	Ok((
		StatusCode::CREATED,
		Json(TestimonialResponse::from(&testimonial)),
	))
}

#[utoipa::path(
	put,
	path = "/api/testimonials/{id}",
	params(("id" = String, Path, description = "Testimonial ID")),
	request_body = UpdateTestimonialRequest,
	responses(
		(status = 200, description = "Testimonial updated", body = TestimonialResponse),
		(status = 400, description = "Invalid request", body = ErrorResponse),
		(status = 401, description = "Not authenticated", body = ErrorResponse),
		(status = 404, description = "Testimonial not found", body = ErrorResponse)
	),
	tag = "testimonials"
)]
#[tracing::instrument(skip(state, user, payload), fields(user_id = %user.id))]
pub async fn update_testimonial(
	RequireAuth(user): RequireAuth,
	State(state): State<AppState>,
	RequestLanguage(lang): RequestLanguage,
	Path(id): Path<String>,
	Json(payload): Json<UpdateTestimonialRequest>,
) -> Result<impl IntoResponse, ServerError> {
	let id: TestimonialId = parse_id(&id, lang)?;
	let mut testimonial = state
		.testimonial_repo
		.get(&id)
		.await
		.map_err(|e| ServerError::from_db(lang, Resource::Testimonial, e))?
		.ok_or_else(|| ServerError::not_found(lang, Resource::Testimonial))?;

	payload
		.apply(&mut testimonial)
		.map_err(|e| ServerError::from_content(lang, e))?;
	testimonial.updated_by = Some(user.id.clone());
	testimonial.updated_at = Utc::now();

	state
		.testimonial_repo
		.update(&testimonial)
		.await
		.map_err(|e| ServerError::from_db(lang, Resource::Testimonial, e))?;

	state.audit(audit_entry(
		AuditAction::Update,
		AuditEntityType::Testimonial,
		testimonial.id,
		&user,
		testimonial.name.as_str(),
	));

	Ok(Json(TestimonialResponse::from(&testimonial)))
}

#[utoipa::path(
	delete,
	path = "/api/testimonials/{id}",
	params(("id" = String, Path, description = "Testimonial ID")),
	responses(
		(status = 200, description = "Testimonial deleted", body = SuccessResponse),
		(status = 401, description = "Not authenticated", body = ErrorResponse),
		(status = 403, description = "Admin role required", body = ErrorResponse),
		(status = 404, description = "Testimonial not found", body = ErrorResponse)
	),
	tag = "testimonials"
)]
#[tracing::instrument(skip(state, user), fields(user_id = %user.id))]
pub async fn delete_testimonial(
	RequireAuth(user): RequireAuth,
	State(state): State<AppState>,
	RequestLanguage(lang): RequestLanguage,
	Path(id): Path<String>,
) -> Result<impl IntoResponse, ServerError> {
	require_admin(&user, lang)?;
	let id: TestimonialId = parse_id(&id, lang)?;
	let testimonial = state
		.testimonial_repo
		.get(&id)
		.await
		.map_err(|e| ServerError::from_db(lang, Resource::Testimonial, e))?
		.ok_or_else(|| ServerError::not_found(lang, Resource::Testimonial))?;

	state
		.testimonial_repo
		.soft_delete(&id)
		.await
		.map_err(|e| ServerError::from_db(lang, Resource::Testimonial, e))?;

	state.audit(audit_entry(
		AuditAction::Delete,
		AuditEntityType::Testimonial,
		id,
		&user,
		testimonial.name,
	));

	Ok(Json(SuccessResponse {
		message: Resource::Testimonial.message(lang, "deleted"),
	}))
}
