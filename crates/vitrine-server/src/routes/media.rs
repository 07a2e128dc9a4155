// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Media library handlers.
//!
//! Uploaded files are written to the uploads directory under their generated
//! name and served back from `/uploads/<filename>`. Deleting a media record
//! is a soft delete; the file stays on disk.

use axum::{
	extract::{multipart::MultipartError, Multipart, Path, Query, State},
	http::StatusCode,
	response::IntoResponse,
	Json,
};
use vitrine_common_i18n::{t, Language};
use vitrine_content_core::{CategoryId, MediaAsset, MediaId};
use vitrine_server_audit::{AuditAction, AuditEntityType};

pub use vitrine_server_api::media::*;
pub use vitrine_server_api::{ErrorResponse, SuccessResponse};

use super::{audit_entry, parse_id};
use crate::{
	api::AppState,
	auth_middleware::{require_admin, RequireAuth},
	error::{Resource, ServerError},
	i18n::RequestLanguage,
};

const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

struct UploadedFile {
	name: String,
	mime_type: String,
	data: Vec<u8>,
}

fn multipart_error(language: Language, error: MultipartError) -> ServerError {
	if error.status() == StatusCode::PAYLOAD_TOO_LARGE {
		return ServerError::PayloadTooLarge(t(language, "server.api.media.too_large"));
	}
	ServerError::invalid_request(language, error.body_text())
}

/// `None` leaves the category alone, `Some(None)` detaches it.
fn parse_category_change(
	raw: Option<&str>,
	language: Language,
) -> Result<Option<Option<CategoryId>>, ServerError> {
	match raw.map(str::trim) {
		None => Ok(None),
		Some("") => Ok(Some(None)),
		Some(raw) => parse_id(raw, language).map(|id| Some(Some(id))),
	}
}

async fn ensure_category_exists(
	state: &AppState,
	id: &CategoryId,
	language: Language,
) -> Result<(), ServerError> {
	state
		.category_repo
		.get(id)
		.await
		.map_err(|e| ServerError::from_db(language, Resource::Category, e))?
		.map(|_| ())
		.ok_or_else(|| ServerError::not_found(language, Resource::Category))
}

#[utoipa::path(
	get,
	path = "/api/media",
	params(MediaListQuery),
	responses(
		(status = 200, description = "Live media, newest first", body = Vec<MediaResponse>),
		(status = 400, description = "Malformed category id", body = ErrorResponse),
		(status = 401, description = "Not authenticated", body = ErrorResponse)
	),
	tag = "media"
)]
#[tracing::instrument(skip(state, _user))]
pub async fn list_media(
	RequireAuth(_user): RequireAuth,
	State(state): State<AppState>,
	RequestLanguage(lang): RequestLanguage,
	Query(query): Query<MediaListQuery>,
) -> Result<impl IntoResponse, ServerError> {
	let category_id: Option<CategoryId> = match query.category_id.as_deref().map(str::trim) {
		None | Some("") => None,
		Some(raw) => Some(parse_id(raw, lang)?),
	};

	let media = state
		.media_repo
		.list(category_id.as_ref())
		.await
		.map_err(|e| ServerError::from_db(lang, Resource::Media, e))?;
	Ok(Json(media.iter().map(MediaResponse::from).collect::<Vec<_>>()))
}

#[utoipa::path(
	get,
	path = "/api/media/{id}",
	params(("id" = String, Path, description = "Media ID")),
	responses(
		(status = 200, description = "Media record", body = MediaResponse),
		(status = 401, description = "Not authenticated", body = ErrorResponse),
		(status = 404, description = "Media not found", body = ErrorResponse)
	),
	tag = "media"
)]
#[tracing::instrument(skip(state, _user))]
pub async fn get_media(
	RequireAuth(_user): RequireAuth,
	State(state): State<AppState>,
	RequestLanguage(lang): RequestLanguage,
	Path(id): Path<String>,
) -> Result<impl IntoResponse, ServerError> {
	let id: MediaId = parse_id(&id, lang)?;
	let asset = state
		.media_repo
		.get(&id)
		.await
		.map_err(|e| ServerError::from_db(lang, Resource::Media, e))?
		.ok_or_else(|| ServerError::not_found(lang, Resource::Media))?;
	Ok(Json(MediaResponse::from(&asset)))
}

#[utoipa::path(
	post,
	path = "/api/media",
	request_body(content = UploadMediaForm, content_type = "multipart/form-data"),
	responses(
		(status = 201, description = "File uploaded", body = MediaResponse),
		(status = 400, description = "Missing file or unsupported type", body = ErrorResponse),
		(status = 401, description = "Not authenticated", body = ErrorResponse),
		(status = 404, description = "Category not found", body = ErrorResponse),
		(status = 413, description = "File too large", body = ErrorResponse)
	),
	tag = "media"
)]
#[tracing::instrument(skip(state, user, multipart), fields(user_id = %user.id))]
pub async fn upload_media(
	RequireAuth(user): RequireAuth,
	State(state): State<AppState>,
	RequestLanguage(lang): RequestLanguage,
	mut multipart: Multipart,
) -> Result<impl IntoResponse, ServerError> {
	let mut file: Option<UploadedFile> = None;
	let mut alt: Option<String> = None;
	let mut category: Option<String> = None;

	while let Some(field) = multipart
		.next_field()
		.await
		.map_err(|e| multipart_error(lang, e))?
	{
		match field.name() {
			Some("file") => {
				let name = field.file_name().unwrap_or_default().to_string();
				let mime_type = field
					.content_type()
					.unwrap_or(FALLBACK_MIME_TYPE)
					.to_string();
				let data = field.bytes().await.map_err(|e| multipart_error(lang, e))?;
				file = Some(UploadedFile {
					name,
					mime_type,
					data: data.to_vec(),
				});
			}
			Some("alt") => {
				alt = Some(field.text().await.map_err(|e| multipart_error(lang, e))?);
			}
			Some("category_id") => {
				category = Some(field.text().await.map_err(|e| multipart_error(lang, e))?);
			}
			other => tracing::debug!(field = ?other, "ignoring multipart field"),
		}
	}

	let file = file.ok_or_else(|| {
		ServerError::bad_request("missing_file", t(lang, "server.api.media.missing_file"))
	})?;

	let mut asset = MediaAsset::from_upload(
		&file.name,
		&file.mime_type,
		file.data.len() as u64,
		state.uploads.max_bytes,
	)
	.map_err(|e| ServerError::from_content(lang, e))?;
	asset.alt = alt.map(|a| a.trim().to_string()).filter(|a| !a.is_empty());
	asset.created_by = Some(user.id.clone());
	if let Some(Some(category_id)) = parse_category_change(category.as_deref(), lang)? {
		ensure_category_exists(&state, &category_id, lang).await?;
		asset.category_id = Some(category_id);
	}

	tokio::fs::create_dir_all(&state.uploads.dir)
		.await
		.map_err(|e| ServerError::internal(lang, e))?;
	let path = state.uploads.dir.join(&asset.filename);
	tokio::fs::write(&path, &file.data)
		.await
		.map_err(|e| ServerError::internal(lang, e))?;

	if let Err(e) = state.media_repo.create(&asset).await {
		if let Err(remove_err) = tokio::fs::remove_file(&path).await {
			tracing::warn!(error = %remove_err, path = %path.display(), "failed to remove orphaned upload");
		}
		return Err(ServerError::from_db(lang, Resource::Media, e));
	}

	tracing::info!(media_id = %asset.id, size = asset.size, "media uploaded");
	state.audit(audit_entry(
		AuditAction::Create,
		AuditEntityType::Media,
		asset.id,
		&user,
		asset.original_name.as_str(),
	));

	Ok((StatusCode::CREATED, Json(MediaResponse::from(&asset))))
}

#[utoipa::path(
	put,
	path = "/api/media/{id}",
	params(("id" = String, Path, description = "Media ID")),
	request_body = UpdateMediaRequest,
	responses(
		(status = 200, description = "Media updated", body = MediaResponse),
		(status = 400, description = "Malformed id", body = ErrorResponse),
		(status = 401, description = "Not authenticated", body = ErrorResponse),
		(status = 404, description = "Media or category not found", body = ErrorResponse)
	),
	tag = "media"
)]
#[tracing::instrument(skip(state, user, payload), fields(user_id = %user.id))]
pub async fn update_media(
	RequireAuth(user): RequireAuth,
	State(state): State<AppState>,
	RequestLanguage(lang): RequestLanguage,
	Path(id): Path<String>,
	Json(payload): Json<UpdateMediaRequest>,
) -> Result<impl IntoResponse, ServerError> {
	let id: MediaId = parse_id(&id, lang)?;
	let category_change = parse_category_change(payload.category_id.as_deref(), lang)?;
	if let Some(Some(category_id)) = &category_change {
		ensure_category_exists(&state, category_id, lang).await?;
	}

	let mut asset = state
		.media_repo
		.get(&id)
		.await
		.map_err(|e| ServerError::from_db(lang, Resource::Media, e))?
		.ok_or_else(|| ServerError::not_found(lang, Resource::Media))?;

	payload.apply(&mut asset, category_change);
	state
		.media_repo
		.update(&asset)
		.await
		.map_err(|e| ServerError::from_db(lang, Resource::Media, e))?;

	state.audit(audit_entry(
		AuditAction::Update,
		AuditEntityType::Media,
		asset.id,
		&user,
		asset.original_name.as_str(),
	));

	Ok(Json(MediaResponse::from(&asset)))
}

#[utoipa::path(
	delete,
	path = "/api/media/{id}",
	params(("id" = String, Path, description = "Media ID")),
	responses(
		(status = 200, description = "Media deleted", body = SuccessResponse),
		(status = 401, description = "Not authenticated", body = ErrorResponse),
		(status = 403, description = "Admin role required", body = ErrorResponse),
		(status = 404, description = "Media not found", body = ErrorResponse)
	),
	tag = "media"
)]
#[tracing::instrument(skip(state, user), fields(user_id = %user.id))]
pub async fn delete_media(
	RequireAuth(user): RequireAuth,
	State(state): State<AppState>,
	RequestLanguage(lang): RequestLanguage,
	Path(id): Path<String>,
) -> Result<impl IntoResponse, ServerError> {
	require_admin(&user, lang)?;
	let id: MediaId = parse_id(&id, lang)?;
	let asset = state
		.media_repo
		.get(&id)
		.await
		.map_err(|e| ServerError::from_db(lang, Resource::Media, e))?
		.ok_or_else(|| ServerError::not_found(lang, Resource::Media))?;

	state
		.media_repo
		.soft_delete(&id)
		.await
		.map_err(|e| ServerError::from_db(lang, Resource::Media, e))?;

	state.audit(audit_entry(
		AuditAction::Delete,
		AuditEntityType::Media,
		id,
		&user,
		asset.original_name.as_str(),
	));

	Ok(Json(SuccessResponse {
		message: Resource::Media.message(lang, "deleted"),
	}))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_category_change_parsing() {
		assert_eq!(parse_category_change(None, Language::En).unwrap(), None);
		assert_eq!(parse_category_change(Some(" "), Language::En).unwrap(), Some(None));

		let id = CategoryId::generate();
		assert_eq!(
			parse_category_change(Some(&id.to_string()), Language::En).unwrap(),
			Some(Some(id))
		);
		assert!(parse_category_change(Some("nope"), Language::En).is_err());
	}
}
