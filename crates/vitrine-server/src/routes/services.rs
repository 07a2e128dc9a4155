// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use axum::{
	extract::{Path, State},
	http::StatusCode,
	response::IntoResponse,
	Json,
};
use chrono::Utc;
use vitrine_content_core::ServiceId;
use vitrine_server_audit::{AuditAction, AuditEntityType};

pub use vitrine_server_api::services::*;
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
	path = "/api/services/public",
	params(LangQuery),
	responses(
		(status = 200, description = "Active services in display order", body = Vec<PublicServiceSummary>)
	),
	tag = "services"
)]
#[tracing::instrument(skip(state))]
pub async fn list_public_services(
	State(state): State<AppState>,
	RequestLanguage(lang): RequestLanguage,
) -> Result<impl IntoResponse, ServerError> {
	let services = state
		.service_repo
		.list_active()
		.await
		.map_err(|e| ServerError::from_db(lang, Resource::Service, e))?;

	let summaries: Vec<_> = services
		.iter()
		.map(|service| PublicServiceSummary::localized(service, Some(lang.code())))
		.collect();
	Ok(Json(summaries))
}

#[utoipa::path(
	get,
	path = "/api/services/public/{slug}",
	params(
		("slug" = String, Path, description = "Service slug"),
		LangQuery
	),
	responses(
		(status = 200, description = "Localized service", body = PublicServiceResponse),
		(status = 404, description = "No active service with this slug", body = ErrorResponse)
	),
	tag = "services"
)]
#[tracing::instrument(skip(state))]
pub async fn get_public_service(
	State(state): State<AppState>,
	RequestLanguage(lang): RequestLanguage,
	Path(slug): Path<String>,
) -> Result<impl IntoResponse, ServerError> {
	let service = state
		.service_repo
		.get_active_by_slug(&slug)
		.await
		.map_err(|e| ServerError::from_db(lang, Resource::Service, e))?
		.ok_or_else(|| ServerError::not_found(lang, Resource::Service))?;

	Ok(Json(PublicServiceResponse::localized(&service, Some(lang.code()))))
}

#[utoipa::path(
	get,
	path = "/api/services",
	responses(
		(status = 200, description = "All live services", body = Vec<ServiceResponse>),
		(status = 401, description = "Not authenticated", body = ErrorResponse)
	),
	tag = "services"
)]
#[tracing::instrument(skip(state, _user))]
pub async fn list_services(
	RequireAuth(_user): RequireAuth,
	State(state): State<AppState>,
	RequestLanguage(lang): RequestLanguage,
) -> Result<impl IntoResponse, ServerError> {
	let services = state
		.service_repo
		.list()
		.await
		.map_err(|e| ServerError::from_db(lang, Resource::Service, e))?;
	Ok(Json(services.iter().map(ServiceResponse::from).collect::<Vec<_>>()))
}

#[utoipa::path(
	get,
	path = "/api/services/{id}",
	params(("id" = String, Path, description = "Service ID")),
	responses(
		(status = 200, description = "Service", body = ServiceResponse),
		(status = 401, description = "Not authenticated", body = ErrorResponse),
		(status = 404, description = "Service not found", body = ErrorResponse)
	),
	tag = "services"
)]
#[tracing::instrument(skip(state, _user))]
pub async fn get_service(
	RequireAuth(_user): RequireAuth,
	State(state): State<AppState>,
	RequestLanguage(lang): RequestLanguage,
	Path(id): Path<String>,
) -> Result<impl IntoResponse, ServerError> {
	let id: ServiceId = parse_id(&id, lang)?;
	let service = state
		.service_repo
		.get(&id)
		.await
		.map_err(|e| ServerError::from_db(lang, Resource::Service, e))?
		.ok_or_else(|| ServerError::not_found(lang, Resource::Service))?;
	Ok(Json(ServiceResponse::from(&service)))
}

#[utoipa::path(
	post,
	path = "/api/services",
	request_body = CreateServiceRequest,
	responses(
		(status = 201, description = "Service created", body = ServiceResponse),
		(status = 400, description = "Invalid request", body = ErrorResponse),
		(status = 401, description = "Not authenticated", body = ErrorResponse),
		(status = 409, description = "Slug already in use", body = ErrorResponse)
	),
	tag = "services"
)]
#[tracing::instrument(skip(state, user, payload), fields(user_id = %user.id, slug = %payload.slug))]
pub async fn create_service(
	RequireAuth(user): RequireAuth,
	State(state): State<AppState>,
	RequestLanguage(lang): RequestLanguage,
	Json(payload): Json<CreateServiceRequest>,
) -> Result<impl IntoResponse, ServerError> {
	let mut service = payload
		.into_service()
		.map_err(|e| ServerError::from_content(lang, e))?;
	service.created_by = Some(user.id.clone());
	service.updated_by = Some(user.id.clone());

	state
		.service_repo
		.create(&service)
		.await
		.map_err(|e| ServerError::from_db(lang, Resource::Service, e))?;

	tracing::info!(service_id = %service.id, "service created");
	state.audit(audit_entry(
		AuditAction::Create,
		AuditEntityType::Service,
		service.id,
		&user,
		service.title.base(),
	));

	Ok((StatusCode::CREATED, Json(ServiceResponse::from(&service))))
}

#[utoipa::path(
	put,
	path = "/api/services/{id}",
	params(("id" = String, Path, description = "Service ID")),
	request_body = UpdateServiceRequest,
	responses(
		(status = 200, description = "Service updated", body = ServiceResponse),
		(status = 400, description = "Invalid request", body = ErrorResponse),
		(status = 401, description = "Not authenticated", body = ErrorResponse),
		(status = 404, description = "Service not found", body = ErrorResponse),
		(status = 409, description = "Slug already in use", body = ErrorResponse)
	),
	tag = "services"
)]
#[tracing::instrument(skip(state, user, payload), fields(user_id = %user.id))]
pub async fn update_service(
	RequireAuth(user): RequireAuth,
	State(state): State<AppState>,
	RequestLanguage(lang): RequestLanguage,
	Path(id): Path<String>,
	Json(payload): Json<UpdateServiceRequest>,
) -> Result<impl IntoResponse, ServerError> {
	let id: ServiceId = parse_id(&id, lang)?;
	let mut service = state
		.service_repo
		.get(&id)
		.await
		.map_err(|e| ServerError::from_db(lang, Resource::Service, e))?
		.ok_or_else(|| ServerError::not_found(lang, Resource::Service))?;

	payload
		.apply(&mut service)
		.map_err(|e| ServerError::from_content(lang, e))?;
	service.updated_by = Some(user.id.clone());
	service.updated_at = Utc::now();

	state
		.service_repo
		.update(&service)
		.await
		.map_err(|e| ServerError::from_db(lang, Resource::Service, e))?;

	state.audit(audit_entry(
		AuditAction::Update,
		AuditEntityType::Service,
		service.id,
		&user,
		service.title.base(),
	));

	Ok(Json(ServiceResponse::from(&service)))
}

#[utoipa::path(
	delete,
	path = "/api/services/{id}",
	params(("id" = String, Path, description = "Service ID")),
	responses(
		(status = 200, description = "Service deleted", body = SuccessResponse),
		(status = 401, description = "Not authenticated", body = ErrorResponse),
		(status = 403, description = "Admin role required", body = ErrorResponse),
		(status = 404, description = "Service not found", body = ErrorResponse)
	),
	tag = "services"
)]
#[tracing::instrument(skip(state, user), fields(user_id = %user.id))]
pub async fn delete_service(
	RequireAuth(user): RequireAuth,
	State(state): State<AppState>,
	RequestLanguage(lang): RequestLanguage,
	Path(id): Path<String>,
) -> Result<impl IntoResponse, ServerError> {
	require_admin(&user, lang)?;
	let id: ServiceId = parse_id(&id, lang)?;
	let service = state
		.service_repo
		.get(&id)
		.await
		.map_err(|e| ServerError::from_db(lang, Resource::Service, e))?
		.ok_or_else(|| ServerError::not_found(lang, Resource::Service))?;

	state
		.service_repo
		.soft_delete(&id)
		.await
		.map_err(|e| ServerError::from_db(lang, Resource::Service, e))?;

	state.audit(audit_entry(
		AuditAction::Delete,
		AuditEntityType::Service,
		id,
		&user,
		service.title.base(),
	));

	Ok(Json(SuccessResponse {
		message: Resource::Service.message(lang, "deleted"),
	}))
}
