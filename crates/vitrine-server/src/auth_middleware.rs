// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Authentication middleware for Axum.
//!
//! [`auth_layer`] reads the forwarded identity headers on every request and
//! stores an [`AuthContext`] as a request extension. Admin handlers take the
//! [`RequireAuth`] extractor, which rejects anonymous requests with a
//! localized 401.
//!
//! ```ignore
//! async fn protected_handler(RequireAuth(user): RequireAuth) -> impl IntoResponse {
//!     format!("Hello, {}!", user.name)
//! }
//! ```

use axum::{
	body::Body,
	extract::{FromRequestParts, State},
	http::{request::Parts, Request},
	middleware::Next,
	response::{IntoResponse, Response},
};
use tracing::instrument;
use vitrine_common_i18n::Language;
use vitrine_server_auth::{authenticate, AuthContext, CurrentUser};

use crate::{api::AppState, error::ServerError, i18n::language_of};

/// Attach the [`AuthContext`] for the request's identity headers.
#[instrument(
	name = "auth_layer",
	skip(state, request, next),
	fields(user_id = tracing::field::Empty)
)]
pub async fn auth_layer(
	State(state): State<AppState>,
	mut request: Request<Body>,
	next: Next,
) -> Response {
	let auth_ctx = authenticate(request.headers(), &state.auth_config);
	if let Some(user) = auth_ctx.user() {
		tracing::Span::current().record("user_id", tracing::field::display(&user.id));
	}
	request.extensions_mut().insert(auth_ctx);
	next.run(request).await
}

/// Extractor that requires an authenticated user.
pub struct RequireAuth(pub CurrentUser);

impl<S> FromRequestParts<S> for RequireAuth
where
	S: Send + Sync,
{
	type Rejection = Response;

	#[instrument(name = "RequireAuth::from_request_parts", skip_all)]
	async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
		let auth_ctx = parts
			.extensions
			.get::<AuthContext>()
			.cloned()
			.unwrap_or_else(AuthContext::unauthenticated);

		match auth_ctx.current_user {
			Some(user) => {
				tracing::debug!(user_id = %user.id, "Authentication required: success");
				Ok(RequireAuth(user))
			}
			None => {
				tracing::debug!("Authentication required: no user");
				Err(ServerError::unauthorized(language_of(parts)).into_response())
			}
		}
	}
}

/// Reject non-admin users.
pub fn require_admin(user: &CurrentUser, language: Language) -> Result<(), ServerError> {
	user.require_admin().map_err(|_| {
		tracing::debug!(user_id = %user.id, role = %user.role, "admin role required");
		ServerError::admin_only(language)
	})
}
