// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Language of a request.
//!
//! Only the `lang` query parameter selects a language. A missing or
//! unsupported value means Hebrew, the base language of every record, so
//! browser headers such as `Accept-Language` never change what is served.

use std::convert::Infallible;

use axum::{
	extract::{FromRequestParts, Query},
	http::request::Parts,
};
use vitrine_common_i18n::{resolve_language, Language};
use vitrine_server_api::LangQuery;

pub use vitrine_common_i18n::{t, t_fmt};

/// Extractor for the response language. Never rejects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestLanguage(pub Language);

impl<S> FromRequestParts<S> for RequestLanguage
where
	S: Send + Sync,
{
	type Rejection = Infallible;

	async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
		Ok(RequestLanguage(language_of(parts)))
	}
}

pub fn language_of(parts: &Parts) -> Language {
	let requested = Query::<LangQuery>::try_from_uri(&parts.uri)
		.ok()
		.and_then(|Query(q)| q.lang);
	resolve_language(requested.as_deref())
}

#[cfg(test)]
mod tests {
	use super::*;
	use axum::http::{header::ACCEPT_LANGUAGE, Request};
	use proptest::prelude::*;

	fn parts(uri: &str, accept: Option<&str>) -> Parts {
		let mut builder = Request::builder().uri(uri);
		if let Some(accept) = accept {
			builder = builder.header(ACCEPT_LANGUAGE, accept);
		}
		builder.body(()).unwrap().into_parts().0
	}

	#[test]
	fn test_query_parameter_selects_language() {
		assert_eq!(language_of(&parts("/x?lang=pt", Some("en-US"))), Language::Pt);
		assert_eq!(language_of(&parts("/x?lang=en", None)), Language::En);
	}

	#[test]
	fn test_unsupported_query_is_default() {
		assert_eq!(language_of(&parts("/x?lang=fr", Some("en"))), Language::He);
		assert_eq!(language_of(&parts("/x?lang=", None)), Language::He);
	}

	#[test]
	fn test_accept_language_is_ignored() {
		assert_eq!(language_of(&parts("/x", Some("en-US,en;q=0.9"))), Language::He);
		assert_eq!(language_of(&parts("/x?other=1", Some("pt-BR"))), Language::He);
		assert_eq!(language_of(&parts("/x", None)), Language::He);
	}

	proptest! {
		#[test]
		fn query_language_is_supported_or_hebrew(raw in "[a-zA-Z-]{0,8}") {
			let language = language_of(&parts(&format!("/x?lang={raw}"), Some("en")));
			match raw.as_str() {
				"he" | "en" | "pt" => prop_assert_eq!(language.code(), raw.as_str()),
				_ => prop_assert_eq!(language, Language::He),
			}
		}
	}
}
