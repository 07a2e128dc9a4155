// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Identity extraction for request processing.
//!
//! Authentication happens upstream. The identity provider forwards the
//! authenticated user as trusted headers:
//!
//! ```text
//! x-user-id:   <stable user id>      (required)
//! x-user-name: <display name>        (optional, falls back to the id)
//! x-user-role: admin | editor        (optional, defaults to editor)
//! ```
//!
//! A request without `x-user-id` is unauthenticated unless dev mode is on,
//! in which case it acts as a local admin.

use http::HeaderMap;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::types::Role;

pub const USER_ID_HEADER: &str = "x-user-id";
pub const USER_NAME_HEADER: &str = "x-user-name";
pub const USER_ROLE_HEADER: &str = "x-user-role";

/// Identity used for every request while dev mode is enabled.
pub const DEV_USER_ID: &str = "dev-admin";

/// The currently authenticated user, extracted from request context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
	pub id: String,
	pub name: String,
	pub role: Role,
}

impl CurrentUser {
	pub fn new(id: impl Into<String>, name: impl Into<String>, role: Role) -> Self {
		Self {
			id: id.into(),
			name: name.into(),
			role,
		}
	}

	pub fn dev_admin() -> Self {
		Self::new(DEV_USER_ID, "Developer", Role::Admin)
	}

	pub fn is_admin(&self) -> bool {
		self.role.is_admin()
	}

	/// Require the admin role.
	pub fn require_admin(&self) -> Result<(), AdminRequired> {
		if self.is_admin() {
			Ok(())
		} else {
			Err(AdminRequired)
		}
	}
}

/// Authentication context for request processing.
#[derive(Debug, Clone, Default)]
pub struct AuthContext {
	pub current_user: Option<CurrentUser>,
}

impl AuthContext {
	pub fn unauthenticated() -> Self {
		Self { current_user: None }
	}

	pub fn authenticated(current_user: CurrentUser) -> Self {
		Self {
			current_user: Some(current_user),
		}
	}

	pub fn is_authenticated(&self) -> bool {
		self.current_user.is_some()
	}

	pub fn user(&self) -> Option<&CurrentUser> {
		self.current_user.as_ref()
	}

	/// Require authentication, returning the current user or an error.
	pub fn require_user(&self) -> Result<&CurrentUser, AuthRequired> {
		self.current_user.as_ref().ok_or(AuthRequired)
	}
}

/// Error returned when authentication is required but not present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthRequired;

impl std::fmt::Display for AuthRequired {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "authentication required")
	}
}

impl std::error::Error for AuthRequired {}

/// Error returned when an operation is reserved for administrators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdminRequired;

impl std::fmt::Display for AdminRequired {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "admin role required")
	}
}

impl std::error::Error for AdminRequired {}

/// Configuration for authentication middleware.
#[derive(Debug, Clone, Default)]
pub struct AuthConfig {
	/// Treat anonymous requests as [`CurrentUser::dev_admin`].
	pub dev_mode: bool,
}

impl AuthConfig {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_dev_mode(mut self, enabled: bool) -> Self {
		self.dev_mode = enabled;
		self
	}
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
	headers
		.get(name)?
		.to_str()
		.ok()
		.map(str::trim)
		.filter(|v| !v.is_empty())
}

/// Read the forwarded identity headers.
///
/// Returns `None` when the user id header is missing or not valid text.
/// The display name falls back to the id.
#[instrument(level = "trace", skip_all, fields(has_user_header))]
pub fn extract_identity(headers: &HeaderMap) -> Option<CurrentUser> {
	let id = header_str(headers, USER_ID_HEADER);
	tracing::Span::current().record("has_user_header", id.is_some());
	let id = id?;
	let name = header_str(headers, USER_NAME_HEADER).unwrap_or(id);
	let role = header_str(headers, USER_ROLE_HEADER)
		.map(Role::from_claim)
		.unwrap_or_default();
	Some(CurrentUser::new(id, name, role))
}

/// Build the auth context for a request.
pub fn authenticate(headers: &HeaderMap, config: &AuthConfig) -> AuthContext {
	match extract_identity(headers) {
		Some(user) => AuthContext::authenticated(user),
		None if config.dev_mode => {
			tracing::debug!("no identity headers, using dev mode admin");
			AuthContext::authenticated(CurrentUser::dev_admin())
		}
		None => AuthContext::unauthenticated(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use http::HeaderValue;

	fn headers(pairs: &[(&'static str, &str)]) -> HeaderMap {
		let mut map = HeaderMap::new();
		for (name, value) in pairs {
			map.insert(*name, HeaderValue::from_str(value).unwrap());
		}
		map
	}

	#[test]
	fn test_full_identity() {
		let user = extract_identity(&headers(&[
			(USER_ID_HEADER, "u-1"),
			(USER_NAME_HEADER, "Dana"),
			(USER_ROLE_HEADER, "admin"),
		]))
		.unwrap();
		assert_eq!(user, CurrentUser::new("u-1", "Dana", Role::Admin));
	}

	#[test]
	fn test_missing_role_is_editor_and_name_falls_back() {
		let user = extract_identity(&headers(&[(USER_ID_HEADER, "u-2")])).unwrap();
		assert_eq!(user.name, "u-2");
		assert_eq!(user.role, Role::Editor);
		assert!(user.require_admin().is_err());
	}

	#[test]
	fn test_blank_user_id_is_anonymous() {
		assert!(extract_identity(&headers(&[(USER_ID_HEADER, "  ")])).is_none());
		assert!(extract_identity(&HeaderMap::new()).is_none());
	}

	#[test]
	fn test_dev_mode_only_applies_to_anonymous_requests() {
		let dev = AuthConfig::new().with_dev_mode(true);
		let ctx = authenticate(&HeaderMap::new(), &dev);
		assert_eq!(ctx.user(), Some(&CurrentUser::dev_admin()));

		let ctx = authenticate(&headers(&[(USER_ID_HEADER, "u-3")]), &dev);
		assert_eq!(ctx.require_user().unwrap().role, Role::Editor);
	}

	#[test]
	fn test_anonymous_without_dev_mode() {
		let ctx = authenticate(&HeaderMap::new(), &AuthConfig::default());
		assert!(!ctx.is_authenticated());
		assert_eq!(ctx.require_user(), Err(AuthRequired));
	}
}
