// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Server error types and HTTP response conversions.
//!
//! Messages are rendered from the catalog when the error is built, in the
//! language of the request that produced it.

use axum::{
	http::StatusCode,
	response::{IntoResponse, Response},
	Json,
};
use vitrine_common_i18n::{t, t_fmt, Language};
use vitrine_content_core::ContentError;
use vitrine_server_api::ErrorResponse;
use vitrine_server_db::DbError;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
	#[error("Invalid request: {message}")]
	BadRequest { code: &'static str, message: String },

	#[error("Unauthorized: {0}")]
	Unauthorized(String),

	#[error("Forbidden: {0}")]
	Forbidden(String),

	#[error("Not found: {0}")]
	NotFound(String),

	#[error("Conflict: {0}")]
	Conflict(String),

	#[error("Payload too large: {0}")]
	PayloadTooLarge(String),

	#[error("Internal error: {message}")]
	Internal { message: String, source_message: String },
}

/// Kind of record a request operates on. Selects the catalog keys used for
/// not-found and conflict messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
	Page,
	Service,
	Category,
	Media,
	Testimonial,
	Faq,
	Contact,
	Setting,
}

impl Resource {
	fn key(self) -> &'static str {
		match self {
			Resource::Page => "page",
			Resource::Service => "service",
			Resource::Category => "category",
			Resource::Media => "media",
			Resource::Testimonial => "testimonial",
			Resource::Faq => "faq",
			Resource::Contact => "contact",
			Resource::Setting => "setting",
		}
	}

	pub fn message(self, language: Language, suffix: &str) -> String {
		t(language, &format!("server.api.{}.{suffix}", self.key()))
	}
}

impl ServerError {
	pub fn bad_request(code: &'static str, message: impl Into<String>) -> Self {
		ServerError::BadRequest {
			code,
			message: message.into(),
		}
	}

	pub fn unauthorized(language: Language) -> Self {
		ServerError::Unauthorized(t(language, "server.api.error.unauthorized"))
	}

	pub fn admin_only(language: Language) -> Self {
		ServerError::Forbidden(t(language, "server.api.error.admin_only"))
	}

	pub fn invalid_id(language: Language) -> Self {
		Self::bad_request("invalid_id", t(language, "server.api.error.invalid_id"))
	}

	pub fn invalid_request(language: Language, detail: impl std::fmt::Display) -> Self {
		tracing::debug!(error = %detail, "malformed request");
		Self::bad_request(
			"invalid_request",
			t(language, "server.api.error.invalid_request"),
		)
	}

	pub fn not_found(language: Language, resource: Resource) -> Self {
		ServerError::NotFound(resource.message(language, "not_found"))
	}

	pub fn internal(language: Language, source: impl std::fmt::Display) -> Self {
		ServerError::Internal {
			message: t(language, "server.api.error.internal"),
			source_message: source.to_string(),
		}
	}

	/// Map a storage error for `resource`. Unique violations only happen on
	/// slugs.
	pub fn from_db(language: Language, resource: Resource, error: DbError) -> Self {
		match error {
			DbError::NotFound(_) => Self::not_found(language, resource),
			DbError::Conflict(_) => ServerError::Conflict(resource.message(language, "slug_taken")),
			other => Self::internal(language, other),
		}
	}

	pub fn from_content(language: Language, error: ContentError) -> Self {
		match error {
			ContentError::Required(field) => Self::bad_request(
				"required_field",
				t_fmt(language, "server.api.error.required_field", &[("field", field)]),
			),
			ContentError::InvalidSlug(_) => {
				Self::bad_request("invalid_slug", t(language, "server.api.error.invalid_slug"))
			}
			ContentError::InvalidEmail(_) => Self::bad_request(
				"invalid_email",
				t(language, "server.api.contact.invalid_email"),
			),
			ContentError::InvalidStatus(_) => Self::bad_request(
				"invalid_status",
				t(language, "server.api.error.invalid_status"),
			),
			ContentError::InvalidSettingType(_) => Self::bad_request(
				"invalid_setting_type",
				t(language, "server.api.error.invalid_setting_type"),
			),
			ContentError::UnsupportedMediaType(_) => Self::bad_request(
				"unsupported_media_type",
				t(language, "server.api.media.unsupported_type"),
			),
			ContentError::FileTooLarge { .. } => {
				ServerError::PayloadTooLarge(t(language, "server.api.media.too_large"))
			}
		}
	}

	pub fn status(&self) -> StatusCode {
		match self {
			ServerError::BadRequest { .. } => StatusCode::BAD_REQUEST,
			ServerError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
			ServerError::Forbidden(_) => StatusCode::FORBIDDEN,
			ServerError::NotFound(_) => StatusCode::NOT_FOUND,
			ServerError::Conflict(_) => StatusCode::CONFLICT,
			ServerError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
			ServerError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}
}

impl IntoResponse for ServerError {
	fn into_response(self) -> Response {
		let status = self.status();
		let (error, message) = match self {
			ServerError::BadRequest { code, message } => (code, message),
			ServerError::Unauthorized(message) => {
				tracing::debug!("request without identity");
				("unauthorized", message)
			}
			ServerError::Forbidden(message) => {
				tracing::warn!(error = %message, "forbidden");
				("forbidden", message)
			}
			ServerError::NotFound(message) => ("not_found", message),
			ServerError::Conflict(message) => ("conflict", message),
			ServerError::PayloadTooLarge(message) => ("payload_too_large", message),
			ServerError::Internal {
				message,
				source_message,
			} => {
				tracing::error!(error = %source_message, "internal error");
				("internal_error", message)
			}
		};

		(
			status,
			Json(ErrorResponse {
				error: error.to_string(),
				message,
			}),
		)
			.into_response()
	}
}
