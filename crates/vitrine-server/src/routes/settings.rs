// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Site settings handlers.
//!
//! Settings are loaded from the store on every request and passed to the
//! lookup and branding functions as a snapshot. Branding returned after a
//! bulk update is derived from the snapshot read back after the commit.

use std::collections::BTreeMap;

use axum::{
	extract::{Path, Query, State},
	response::IntoResponse,
	Json,
};
use vitrine_branding_core::{resolve_logo, BrandingConfig, LogoPresentation};
use vitrine_common_i18n::Language;
use vitrine_content_core::{localized_map, settings_for_group, SettingId, SiteSetting};
use vitrine_server_audit::{AuditAction, AuditEntityType, AuditLogEntry};

pub use vitrine_server_api::settings::*;
pub use vitrine_server_api::{ErrorResponse, LangQuery};

use super::{audit_entry, parse_id};
use crate::{
	api::AppState,
	auth_middleware::RequireAuth,
	error::{Resource, ServerError},
	i18n::RequestLanguage,
};

const BULK_AUDIT_ID: &str = "bulk";
const BULK_AUDIT_NAME: &str = "עדכון הגדרות";

async fn load_settings(state: &AppState, lang: Language) -> Result<Vec<SiteSetting>, ServerError> {
	state
		.settings_repo
		.list()
		.await
		.map_err(|e| ServerError::from_db(lang, Resource::Setting, e))
}

#[utoipa::path(
	get,
	path = "/api/settings/public",
	params(LangQuery),
	responses(
		(status = 200, description = "Setting values by key, localized", body = BTreeMap<String, String>)
	),
	tag = "settings"
)]
#[tracing::instrument(skip(state))]
pub async fn get_public_settings(
	State(state): State<AppState>,
	RequestLanguage(lang): RequestLanguage,
) -> Result<impl IntoResponse, ServerError> {
	let settings = load_settings(&state, lang).await?;
	Ok(Json(localized_map(&settings, Some(lang.code()))))
}

#[utoipa::path(
	get,
	path = "/api/settings/public/logo",
	params(LogoQuery),
	responses(
		(status = 200, description = "Logo to draw in the requested context", body = LogoPresentation)
	),
	tag = "settings"
)]
#[tracing::instrument(skip(state))]
pub async fn get_public_logo(
	State(state): State<AppState>,
	RequestLanguage(lang): RequestLanguage,
	Query(query): Query<LogoQuery>,
) -> Result<impl IntoResponse, ServerError> {
	let settings = load_settings(&state, lang).await?;
	let config = BrandingConfig::from_settings(&settings);
	Ok(Json(resolve_logo(&config, query.render_context())))
}

#[utoipa::path(
	get,
	path = "/api/settings",
	responses(
		(status = 200, description = "All settings by group and order", body = Vec<SettingResponse>),
		(status = 401, description = "Not authenticated", body = ErrorResponse)
	),
	tag = "settings"
)]
#[tracing::instrument(skip(state, _user))]
pub async fn list_settings(
	RequireAuth(_user): RequireAuth,
	State(state): State<AppState>,
	RequestLanguage(lang): RequestLanguage,
) -> Result<impl IntoResponse, ServerError> {
	let settings = load_settings(&state, lang).await?;
	Ok(Json(
		settings.iter().map(SettingResponse::from).collect::<Vec<_>>(),
	))
}

#[utoipa::path(
	get,
	path = "/api/settings/group/{group}",
	params(
		("group" = String, Path, description = "Settings group"),
		GroupQuery
	),
	responses(
		(status = 200, description = "Settings of the group by order", body = Vec<SettingResponse>),
		(status = 401, description = "Not authenticated", body = ErrorResponse)
	),
	tag = "settings"
)]
#[tracing::instrument(skip(state, _user))]
pub async fn list_settings_group(
	RequireAuth(_user): RequireAuth,
	State(state): State<AppState>,
	RequestLanguage(lang): RequestLanguage,
	Path(group): Path<String>,
	Query(query): Query<GroupQuery>,
) -> Result<impl IntoResponse, ServerError> {
	let settings = state
		.settings_repo
		.list_group(&group)
		.await
		.map_err(|e| ServerError::from_db(lang, Resource::Setting, e))?;

	let selected: Vec<_> = settings_for_group(&settings, &group, query.hide_branding)
		.into_iter()
		.map(SettingResponse::from)
		.collect();
	Ok(Json(selected))
}

#[utoipa::path(
	get,
	path = "/api/settings/branding",
	responses(
		(status = 200, description = "Branding settings and the logo for every context", body = BrandingResponse),
		(status = 401, description = "Not authenticated", body = ErrorResponse)
	),
	tag = "settings"
)]
#[tracing::instrument(skip(state, _user))]
pub async fn get_branding(
	RequireAuth(_user): RequireAuth,
	State(state): State<AppState>,
	RequestLanguage(lang): RequestLanguage,
) -> Result<impl IntoResponse, ServerError> {
	let settings = load_settings(&state, lang).await?;
	Ok(Json(BrandingResponse::from_snapshot(&settings)))
}

#[utoipa::path(
	put,
	path = "/api/settings/{id}",
	params(("id" = String, Path, description = "Setting ID")),
	request_body = UpdateSettingRequest,
	responses(
		(status = 200, description = "Setting updated", body = SettingResponse),
		(status = 400, description = "Malformed id", body = ErrorResponse),
		(status = 401, description = "Not authenticated", body = ErrorResponse),
		(status = 404, description = "Setting not found", body = ErrorResponse)
	),
	tag = "settings"
)]
#[tracing::instrument(skip(state, user, payload), fields(user_id = %user.id))]
pub async fn update_setting(
	RequireAuth(user): RequireAuth,
	State(state): State<AppState>,
	RequestLanguage(lang): RequestLanguage,
	Path(id): Path<String>,
	Json(payload): Json<UpdateSettingRequest>,
) -> Result<impl IntoResponse, ServerError> {
	let id: SettingId = parse_id(&id, lang)?;
	let setting = state
		.settings_repo
		.update_value(&payload.into_update(id), Some(&user.id))
		.await
		.map_err(|e| ServerError::from_db(lang, Resource::Setting, e))?;

	state.audit(audit_entry(
		AuditAction::Update,
		AuditEntityType::Setting,
		setting.id,
		&user,
		setting.label.as_str(),
	));

	Ok(Json(SettingResponse::from(&setting)))
}

#[utoipa::path(
	put,
	path = "/api/settings/bulk/update",
	request_body = BulkUpdateSettingsRequest,
	responses(
		(status = 200, description = "All settings updated", body = BulkUpdateSettingsResponse),
		(status = 400, description = "Malformed setting id", body = ErrorResponse),
		(status = 401, description = "Not authenticated", body = ErrorResponse),
		(status = 404, description = "Unknown setting id; nothing was changed", body = ErrorResponse)
	),
	tag = "settings"
)]
#[tracing::instrument(skip(state, user, payload), fields(user_id = %user.id, count = payload.settings.len()))]
pub async fn bulk_update_settings(
	RequireAuth(user): RequireAuth,
	State(state): State<AppState>,
	RequestLanguage(lang): RequestLanguage,
	Json(payload): Json<BulkUpdateSettingsRequest>,
) -> Result<impl IntoResponse, ServerError> {
	let updates = payload
		.into_updates()
		.map_err(|_| ServerError::invalid_id(lang))?;

	let applied = state
		.settings_repo
		.bulk_update(&updates, Some(&user.id))
		.await
		.map_err(|e| ServerError::from_db(lang, Resource::Setting, e))?;

	let snapshot = load_settings(&state, lang).await?;

	state.audit(
		AuditLogEntry::builder(AuditAction::Update, AuditEntityType::Setting, BULK_AUDIT_ID)
			.actor(&user)
			.entity_name(BULK_AUDIT_NAME)
			.details(format!("{} settings", applied.len()))
			.build(),
	);

	Ok(Json(BulkUpdateSettingsResponse {
		message: Resource::Setting.message(lang, "bulk_updated"),
		settings: snapshot.iter().map(SettingResponse::from).collect(),
		branding: BrandingResponse::from_snapshot(&snapshot),
	}))
}
