// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Contact form submissions and their admin inbox.

use axum::{
	extract::{Path, State},
	http::StatusCode,
	response::IntoResponse,
	Json,
};
use vitrine_content_core::ContactId;
use vitrine_server_audit::{AuditAction, AuditEntityType};

pub use vitrine_server_api::contacts::*;
pub use vitrine_server_api::{ErrorResponse, SuccessResponse};

use super::{audit_entry, parse_id};
use crate::{
	api::AppState,
	auth_middleware::{require_admin, RequireAuth},
	error::{Resource, ServerError},
	i18n::RequestLanguage,
};

/// Audit label for contact messages. Sender details stay out of the log.
const CONTACT_AUDIT_NAME: &str = "פנייה";

#[utoipa::path(
	post,
	path = "/api/contacts/public",
	request_body = SubmitContactRequest,
	responses(
		(status = 201, description = "Message received", body = SuccessResponse),
		(status = 400, description = "Missing field or invalid email", body = ErrorResponse)
	),
	tag = "contacts"
)]
#[tracing::instrument(skip(state, payload))]
pub async fn submit_contact(
	State(state): State<AppState>,
	RequestLanguage(lang): RequestLanguage,
	Json(payload): Json<SubmitContactRequest>,
) -> Result<impl IntoResponse, ServerError> {
	let message = payload
		.into_message()
		.map_err(|e| ServerError::from_content(lang, e))?;

	state
		.contact_repo
		.create(&message)
		.await
		.map_err(|e| ServerError::from_db(lang, Resource::Contact, e))?;

	tracing::info!(contact_id = %message.id, "contact message received");
	Ok((
		StatusCode::CREATED,
		Json(SuccessResponse {
			message: Resource::Contact.message(lang, "sent"),
		}),
	))
}

#[utoipa::path(
	get,
	path = "/api/contacts",
	responses(
		(status = 200, description = "Messages, newest first", body = Vec<ContactResponse>),
		(status = 401, description = "Not authenticated", body = ErrorResponse)
	),
	tag = "contacts"
)]
#[tracing::instrument(skip(state, _user))]
pub async fn list_contacts(
	RequireAuth(_user): RequireAuth,
	State(state): State<AppState>,
	RequestLanguage(lang): RequestLanguage,
) -> Result<impl IntoResponse, ServerError> {
	let messages = state
		.contact_repo
		.list()
		.await
		.map_err(|e| ServerError::from_db(lang, Resource::Contact, e))?;
	Ok(Json(
		messages.iter().map(ContactResponse::from).collect::<Vec<_>>(),
	))
}

#[utoipa::path(
	get,
	path = "/api/contacts/{id}",
	params(("id" = String, Path, description = "Message ID")),
	responses(
		(status = 200, description = "Message", body = ContactResponse),
		(status = 401, description = "Not authenticated", body = ErrorResponse),
		(status = 404, description = "Message not found", body = ErrorResponse)
	),
	tag = "contacts"
)]
#[tracing::instrument(skip(state, _user))]
pub async fn get_contact(
	RequireAuth(_user): RequireAuth,
	State(state): State<AppState>,
	RequestLanguage(lang): RequestLanguage,
	Path(id): Path<String>,
) -> Result<impl IntoResponse, ServerError> {
	let id: ContactId = parse_id(&id, lang)?;
	let message = state
		.contact_repo
		.get(&id)
		.await
		.map_err(|e| ServerError::from_db(lang, Resource::Contact, e))?
		.ok_or_else(|| ServerError::not_found(lang, Resource::Contact))?;
	Ok(Json(ContactResponse::from(&message)))
}

#[utoipa::path(
	put,
	path = "/api/contacts/{id}/read",
	params(("id" = String, Path, description = "Message ID")),
	responses(
		(status = 200, description = "Message marked as read", body = ContactResponse),
		(status = 401, description = "Not authenticated", body = ErrorResponse),
		(status = 404, description = "Message not found", body = ErrorResponse)
	),
	tag = "contacts"
)]
#[tracing::instrument(skip(state, user), fields(user_id = %user.id))]
pub async fn mark_contact_read(
	RequireAuth(user): RequireAuth,
	State(state): State<AppState>,
	RequestLanguage(lang): RequestLanguage,
	Path(id): Path<String>,
) -> Result<impl IntoResponse, ServerError> {
	let id: ContactId = parse_id(&id, lang)?;
	let message = state
		.contact_repo
		.mark_read(&id)
		.await
		.map_err(|e| ServerError::from_db(lang, Resource::Contact, e))?;

	state.audit(audit_entry(
		AuditAction::Update,
		AuditEntityType::Contact,
		id,
		&user,
		CONTACT_AUDIT_NAME,
	));

	Ok(Json(ContactResponse::from(&message)))
}

#[utoipa::path(
	delete,
	path = "/api/contacts/{id}",
	params(("id" = String, Path, description = "Message ID")),
	responses(
		(status = 200, description = "Message deleted", body = SuccessResponse),
		(status = 401, description = "Not authenticated", body = ErrorResponse),
		(status = 403, description = "Admin role required", body = ErrorResponse),
		(status = 404, description = "Message not found", body = ErrorResponse)
	),
	tag = "contacts"
)]
#[tracing::instrument(skip(state, user), fields(user_id = %user.id))]
pub async fn delete_contact(
	RequireAuth(user): RequireAuth,
	State(state): State<AppState>,
	RequestLanguage(lang): RequestLanguage,
	Path(id): Path<String>,
) -> Result<impl IntoResponse, ServerError> {
	require_admin(&user, lang)?;
	let id: ContactId = parse_id(&id, lang)?;
	state
		.contact_repo
		.delete(&id)
		.await
		.map_err(|e| ServerError::from_db(lang, Resource::Contact, e))?;

	state.audit(audit_entry(
		AuditAction::Delete,
		AuditEntityType::Contact,
		id,
		&user,
		CONTACT_AUDIT_NAME,
	));

	Ok(Json(SuccessResponse {
		message: Resource::Contact.message(lang, "deleted"),
	}))
}
