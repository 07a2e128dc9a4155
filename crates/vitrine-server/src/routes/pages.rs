// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Page handlers: public localized reads and admin CRUD.

use axum::{
	extract::{Path, State},
	http::StatusCode,
	response::IntoResponse,
	Json,
};
use chrono::Utc;
use vitrine_content_core::PageId;
use vitrine_server_audit::{AuditAction, AuditEntityType};

pub use vitrine_server_api::pages::*;
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
	path = "/api/pages/public",
	params(LangQuery),
	responses(
		(status = 200, description = "Published pages, newest first", body = Vec<PublicPageSummary>)
	),
	tag = "pages"
)]
#[tracing::instrument(skip(state))]
pub async fn list_public_pages(
	State(state): State<AppState>,
	RequestLanguage(lang): RequestLanguage,
) -> Result<impl IntoResponse, ServerError> {
	let pages = state
		.page_repo
		.list_published()
		.await
		.map_err(|e| ServerError::from_db(lang, Resource::Page, e))?;

	let summaries: Vec<_> = pages
		.iter()
		.map(|page| PublicPageSummary::localized(page, Some(lang.code())))
		.collect();
	Ok(Json(summaries))
}

#[utoipa::path(
	get,
	path = "/api/pages/public/{slug}",
	params(
		("slug" = String, Path, description = "Page slug"),
		LangQuery
	),
	responses(
		(status = 200, description = "Localized page", body = PublicPageResponse),
		(status = 404, description = "No published page with this slug", body = ErrorResponse)
	),
	tag = "pages"
)]
#[tracing::instrument(skip(state))]
pub async fn get_public_page(
	State(state): State<AppState>,
	RequestLanguage(lang): RequestLanguage,
	Path(slug): Path<String>,
) -> Result<impl IntoResponse, ServerError> {
	let page = state
		.page_repo
		.get_published_by_slug(&slug)
		.await
		.map_err(|e| ServerError::from_db(lang, Resource::Page, e))?
		.ok_or_else(|| ServerError::not_found(lang, Resource::Page))?;

	Ok(Json(PublicPageResponse::localized(&page, Some(lang.code()))))
}

#[utoipa::path(
	get,
	path = "/api/pages",
	responses(
		(status = 200, description = "All live pages", body = Vec<PageResponse>),
		(status = 401, description = "Not authenticated", body = ErrorResponse)
	),
	tag = "pages"
)]
#[tracing::instrument(skip(state, _user))]
pub async fn list_pages(
	RequireAuth(_user): RequireAuth,
	State(state): State<AppState>,
	RequestLanguage(lang): RequestLanguage,
) -> Result<impl IntoResponse, ServerError> {
	let pages = state
		.page_repo
		.list()
		.await
		.map_err(|e| ServerError::from_db(lang, Resource::Page, e))?;
	Ok(Json(pages.iter().map(PageResponse::from).collect::<Vec<_>>()))
}

#[utoipa::path(
	get,
	path = "/api/pages/{id}",
	params(("id" = String, Path, description = "Page ID")),
	responses(
		(status = 200, description = "Page", body = PageResponse),
		(status = 400, description = "Malformed id", body = ErrorResponse),
		(status = 401, description = "Not authenticated", body = ErrorResponse),
		(status = 404, description = "Page not found", body = ErrorResponse)
	),
	tag = "pages"
)]
#[tracing::instrument(skip(state, _user))]
pub async fn get_page(
	RequireAuth(_user): RequireAuth,
	State(state): State<AppState>,
	RequestLanguage(lang): RequestLanguage,
	Path(id): Path<String>,
) -> Result<impl IntoResponse, ServerError> {
	let id: PageId = parse_id(&id, lang)?;
	let page = state
		.page_repo
		.get(&id)
		.await
		.map_err(|e| ServerError::from_db(lang, Resource::Page, e))?
		.ok_or_else(|| ServerError::not_found(lang, Resource::Page))?;
	Ok(Json(PageResponse::from(&page)))
}

#[utoipa::path(
	post,
	path = "/api/pages",
	request_body = CreatePageRequest,
	responses(
		(status = 201, description = "Page created", body = PageResponse),
		(status = 400, description = "Invalid request", body = ErrorResponse),
		(status = 401, description = "Not authenticated", body = ErrorResponse),
		(status = 409, description = "Slug already in use", body = ErrorResponse)
	),
	tag = "pages"
)]
#[tracing::instrument(skip(state, user, payload), fields(user_id = %user.id, slug = %payload.slug))]
pub async fn create_page(
	RequireAuth(user): RequireAuth,
	State(state): State<AppState>,
	RequestLanguage(lang): RequestLanguage,
	Json(payload): Json<CreatePageRequest>,
) -> Result<impl IntoResponse, ServerError> {
	let mut page = payload
		.into_page()
		.map_err(|e| ServerError::from_content(lang, e))?;
	page.created_by = Some(user.id.clone());
	page.updated_by = Some(user.id.clone());

	state
		.page_repo
		.create(&page)
		.await
		.map_err(|e| ServerError::from_db(lang, Resource::Page, e))?;

	tracing::info!(page_id = %page.id, "page created");
	state.audit(audit_entry(
		AuditAction::Create,
		AuditEntityType::Page,
		page.id,
		&user,
		page.title.base(),
	));

	Ok((StatusCode::CREATED, Json(PageResponse::from(&page))))
}

#[utoipa::path(
	put,
	path = "/api/pages/{id}",
	params(("id" = String, Path, description = "Page ID")),
	request_body = UpdatePageRequest,
	responses(
		(status = 200, description = "Page updated", body = PageResponse),
		(status = 400, description = "Invalid request", body = ErrorResponse),
		(status = 401, description = "Not authenticated", body = ErrorResponse),
		(status = 404, description = "Page not found", body = ErrorResponse),
		(status = 409, description = "Slug already in use", body = ErrorResponse)
	),
	tag = "pages"
)]
#[tracing::instrument(skip(state, user, payload), fields(user_id = %user.id))]
pub async fn update_page(
	RequireAuth(user): RequireAuth,
	State(state): State<AppState>,
	RequestLanguage(lang): RequestLanguage,
	Path(id): Path<String>,
	Json(payload): Json<UpdatePageRequest>,
) -> Result<impl IntoResponse, ServerError> {
	let id: PageId = parse_id(&id, lang)?;
	let mut page = state
		.page_repo
		.get(&id)
		.await
		.map_err(|e| ServerError::from_db(lang, Resource::Page, e))?
		.ok_or_else(|| ServerError::not_found(lang, Resource::Page))?;

	payload
		.apply(&mut page)
		.map_err(|e| ServerError::from_content(lang, e))?;
	page.updated_by = Some(user.id.clone());
	page.updated_at = Utc::now();

	state
		.page_repo
		.update(&page)
		.await
		.map_err(|e| ServerError::from_db(lang, Resource::Page, e))?;

	state.audit(audit_entry(
		AuditAction::Update,
		AuditEntityType::Page,
		page.id,
		&user,
		page.title.base(),
	));

	Ok(Json(PageResponse::from(&page)))
}

#[utoipa::path(
	delete,
	path = "/api/pages/{id}",
	params(("id" = String, Path, description = "Page ID")),
	responses(
		(status = 200, description = "Page deleted", body = SuccessResponse),
		(status = 401, description = "Not authenticated", body = ErrorResponse),
		(status = 403, description = "Admin role required", body = ErrorResponse),
		(status = 404, description = "Page not found", body = ErrorResponse)
	),
	tag = "pages"
)]
#[tracing::instrument(skip(state, user), fields(user_id = %user.id))]
pub async fn delete_page(
	RequireAuth(user): RequireAuth,
	State(state): State<AppState>,
	RequestLanguage(lang): RequestLanguage,
	Path(id): Path<String>,
) -> Result<impl IntoResponse, ServerError> {
	require_admin(&user, lang)?;
	let id: PageId = parse_id(&id, lang)?;
	let page = state
		.page_repo
		.get(&id)
		.await
		.map_err(|e| ServerError::from_db(lang, Resource::Page, e))?
		.ok_or_else(|| ServerError::not_found(lang, Resource::Page))?;

	state
		.page_repo
		.soft_delete(&id)
		.await
		.map_err(|e| ServerError::from_db(lang, Resource::Page, e))?;

	state.audit(audit_entry(
		AuditAction::Delete,
		AuditEntityType::Page,
		id,
		&user,
		page.title.base(),
	));

	Ok(Json(SuccessResponse {
		message: Resource::Page.message(lang, "deleted"),
	}))
}
