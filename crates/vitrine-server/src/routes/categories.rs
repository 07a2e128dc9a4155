// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use axum::{
	extract::{Path, State},
	http::StatusCode,
	response::IntoResponse,
	Json,
};
use chrono::Utc;
use vitrine_content_core::CategoryId;
use vitrine_server_audit::{AuditAction, AuditEntityType};

pub use vitrine_server_api::categories::*;
pub use vitrine_server_api::{ErrorResponse, SuccessResponse};

use super::{audit_entry, parse_id};
use crate::{
	api::AppState,
	auth_middleware::{require_admin, RequireAuth},
	error::{Resource, ServerError},
	i18n::RequestLanguage,
};

#[utoipa::path(
	get,
	path = "/api/categories",
	responses(
		(status = 200, description = "Live categories with their media counts", body = Vec<CategoryResponse>),
		(status = 401, description = "Not authenticated", body = ErrorResponse)
	),
	tag = "categories"
)]
#[tracing::instrument(skip(state, _user))]
pub async fn list_categories(
	RequireAuth(_user): RequireAuth,
	State(state): State<AppState>,
	RequestLanguage(lang): RequestLanguage,
) -> Result<impl IntoResponse, ServerError> {
	let categories = state
		.category_repo
		.list_with_media_count()
		.await
		.map_err(|e| ServerError::from_db(lang, Resource::Category, e))?;
	Ok(Json(
		categories.iter().map(CategoryResponse::from).collect::<Vec<_>>(),
	))
}

#[utoipa::path(
	get,
	path = "/api/categories/{id}",
	params(("id" = String, Path, description = "Category ID")),
	responses(
		(status = 200, description = "Category with its media", body = CategoryResponse),
		(status = 401, description = "Not authenticated", body = ErrorResponse),
		(status = 404, description = "Category not found", body = ErrorResponse)
	),
	tag = "categories"
)]
#[tracing::instrument(skip(state, _user))]
pub async fn get_category(
	RequireAuth(_user): RequireAuth,
	State(state): State<AppState>,
	RequestLanguage(lang): RequestLanguage,
	Path(id): Path<String>,
) -> Result<impl IntoResponse, ServerError> {
	let id: CategoryId = parse_id(&id, lang)?;
	let category = state
		.category_repo
		.get(&id)
		.await
		.map_err(|e| ServerError::from_db(lang, Resource::Category, e))?
		.ok_or_else(|| ServerError::not_found(lang, Resource::Category))?;
	let media = state
		.media_repo
		.list(Some(&id))
		.await
		.map_err(|e| ServerError::from_db(lang, Resource::Media, e))?;

	Ok(Json(CategoryResponse::from(&category).with_media(&media)))
}

#[utoipa::path(
	post,
	path = "/api/categories",
	request_body = CreateCategoryRequest,
	responses(
		(status = 201, description = "Category created", body = CategoryResponse),
		(status = 400, description = "Invalid request", body = ErrorResponse),
		(status = 401, description = "Not authenticated", body = ErrorResponse),
		(status = 409, description = "Slug already in use", body = ErrorResponse)
	),
	tag = "categories"
)]
#[tracing::instrument(skip(state, user, payload), fields(user_id = %user.id, slug = %payload.slug))]
pub async fn create_category(
	RequireAuth(user): RequireAuth,
	State(state): State<AppState>,
	RequestLanguage(lang): RequestLanguage,
	Json(payload): Json<CreateCategoryRequest>,
) -> Result<impl IntoResponse, ServerError> {
	let category = payload
		.into_category()
		.map_err(|e| ServerError::from_content(lang, e))?;

	state
		.category_repo
		.create(&category)
		.await
		.map_err(|e| ServerError::from_db(lang, Resource::Category, e))?;

	tracing::info!(category_id = %category.id, "category created");
	state.audit(audit_entry(
		AuditAction::Create,
		AuditEntityType::Category,
		category.id,
		&user,
		category.name.base(),
	));

	Ok((StatusCode::CREATED, Json(CategoryResponse::from(&category))))
}

#[utoipa::path(
	put,
	path = "/api/categories/{id}",
	params(("id" = String, Path, description = "Category ID")),
	request_body = UpdateCategoryRequest,
	responses(
		(status = 200, description = "Category updated", body = CategoryResponse),
		(status = 400, description = "Invalid request", body = ErrorResponse),
		(status = 401, description = "Not authenticated", body = ErrorResponse),
		(status = 404, description = "Category not found", body = ErrorResponse),
		(status = 409, description = "Slug already in use", body = ErrorResponse)
	),
	tag = "categories"
)]
#[tracing::instrument(skip(state, user, payload), fields(user_id = %user.id))]
pub async fn update_category(
	RequireAuth(user): RequireAuth,
	State(state): State<AppState>,
	RequestLanguage(lang): RequestLanguage,
	Path(id): Path<String>,
	Json(payload): Json<UpdateCategoryRequest>,
) -> Result<impl IntoResponse, ServerError> {
	let id: CategoryId = parse_id(&id, lang)?;
	let mut category = state
		.category_repo
		.get(&id)
		.await
		.map_err(|e| ServerError::from_db(lang, Resource::Category, e))?
		.ok_or_else(|| ServerError::not_found(lang, Resource::Category))?;

	payload
		.apply(&mut category)
		.map_err(|e| ServerError::from_content(lang, e))?;
	category.updated_at = Utc::now();

	state
		.category_repo
		.update(&category)
		.await
		.map_err(|e| ServerError::from_db(lang, Resource::Category, e))?;

	state.audit(audit_entry(
		AuditAction::Update,
		AuditEntityType::Category,
		category.id,
		&user,
		category.name.base(),
	));

	Ok(Json(CategoryResponse::from(&category)))
}

#[utoipa::path(
	delete,
	path = "/api/categories/{id}",
	params(("id" = String, Path, description = "Category ID")),
	responses(
		(status = 200, description = "Category deleted", body = SuccessResponse),
		(status = 401, description = "Not authenticated", body = ErrorResponse),
		(status = 403, description = "Admin role required", body = ErrorResponse),
		(status = 404, description = "Category not found", body = ErrorResponse)
	),
	tag = "categories"
)]
#[tracing::instrument(skip(state, user), fields(user_id = %user.id))]
pub async fn delete_category(
	RequireAuth(user): RequireAuth,
	State(state): State<AppState>,
	RequestLanguage(lang): RequestLanguage,
	Path(id): Path<String>,
) -> Result<impl IntoResponse, ServerError> {
	require_admin(&user, lang)?;
	let id: CategoryId = parse_id(&id, lang)?;
	let category = state
		.category_repo
		.get(&id)
		.await
		.map_err(|e| ServerError::from_db(lang, Resource::Category, e))?
		.ok_or_else(|| ServerError::not_found(lang, Resource::Category))?;

	state
		.category_repo
		.soft_delete(&id)
		.await
		.map_err(|e| ServerError::from_db(lang, Resource::Category, e))?;

	state.audit(audit_entry(
		AuditAction::Delete,
		AuditEntityType::Category,
		id,
		&user,
		category.name.base(),
	));

	Ok(Json(SuccessResponse {
		message: Resource::Category.message(lang, "deleted"),
	}))
}
