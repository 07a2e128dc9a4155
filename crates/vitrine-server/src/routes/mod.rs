// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! HTTP route handlers.

pub mod audit;
pub mod categories;
pub mod contacts;
pub mod dashboard;
pub mod faq;
pub mod health;
pub mod media;
pub mod pages;
pub mod services;
pub mod settings;
pub mod testimonials;

use std::fmt::Display;
use std::str::FromStr;

use vitrine_common_i18n::Language;
use vitrine_server_audit::{AuditAction, AuditEntityType, AuditLogEntry};
use vitrine_server_auth::CurrentUser;

use crate::error::ServerError;

/// Parse a path id, answering malformed ids with a localized 400.
pub(crate) fn parse_id<T: FromStr>(raw: &str, language: Language) -> Result<T, ServerError> {
	raw.parse().map_err(|_| {
		tracing::debug!(id = raw, "malformed id");
		ServerError::invalid_id(language)
	})
}

pub(crate) fn audit_entry(
	action: AuditAction,
	entity_type: AuditEntityType,
	entity_id: impl Display,
	user: &CurrentUser,
	entity_name: impl Into<String>,
) -> AuditLogEntry {
	AuditLogEntry::builder(action, entity_type, entity_id.to_string())
		.actor(user)
		.entity_name(entity_name)
		.build()
}
