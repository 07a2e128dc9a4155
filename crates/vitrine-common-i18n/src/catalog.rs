// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Gettext catalogs for server messages.
//!
//! Sources live in `locales/<code>/messages.po` and are compiled into the
//! crate by the build script.

use std::collections::HashMap;
use std::sync::LazyLock;

use gettext::Catalog;

use crate::locale::{Language, DEFAULT_LANGUAGE};

const HE_MO: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/he.mo"));
const EN_MO: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/en.mo"));
const PT_MO: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/pt.mo"));

static CATALOGS: LazyLock<HashMap<Language, Catalog>> = LazyLock::new(|| {
	let mut map = HashMap::new();

	let sources = [
		(Language::He, HE_MO),
		(Language::En, EN_MO),
		(Language::Pt, PT_MO),
	];
	for (language, bytes) in sources {
		match Catalog::parse(bytes) {
			Ok(catalog) => {
				map.insert(language, catalog);
			}
			Err(e) => {
				tracing::error!(language = language.code(), error = %e, "failed to parse translation catalog");
			}
		}
	}

	map
});

fn lookup(language: Language, key: &str) -> Option<String> {
	let translated = CATALOGS.get(&language)?.gettext(key);
	(translated != key).then(|| translated.to_string())
}

/// Translate a message key into `language`.
///
/// Falls back to the Hebrew catalog, then to the key itself so a missing
/// entry is visible rather than silent.
pub fn t(language: Language, key: &str) -> String {
	if let Some(message) = lookup(language, key) {
		return message;
	}

	if language != DEFAULT_LANGUAGE {
		if let Some(message) = lookup(DEFAULT_LANGUAGE, key) {
			return message;
		}
	}

	tracing::debug!(key, "missing translation");
	key.to_string()
}

/// Translate a message key and substitute `{name}` placeholders.
pub fn t_fmt(language: Language, key: &str, args: &[(&str, &str)]) -> String {
	let mut message = t(language, key);
	for (name, value) in args {
		message = message.replace(&format!("{{{name}}}"), value);
	}
	message
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::locale::LANGUAGES;

	#[test]
	fn test_every_language_has_a_catalog() {
		for language in LANGUAGES {
			assert!(CATALOGS.contains_key(&language), "{language:?}");
		}
	}

	#[test]
	fn test_translates_per_language() {
		assert_eq!(t(Language::En, "server.api.page.not_found"), "Page not found");
		assert_eq!(t(Language::He, "server.api.page.not_found"), "דף לא נמצא");
		assert_eq!(t(Language::Pt, "server.api.page.not_found"), "Página não encontrada");
	}

	#[test]
	fn test_unknown_key_returned_verbatim() {
		assert_eq!(t(Language::En, "server.api.nope"), "server.api.nope");
	}

	#[test]
	fn test_placeholder_substitution() {
		let message = t_fmt(
			Language::En,
			"server.api.error.required_field",
			&[("field", "title")],
		);
		assert_eq!(message, "Field title is required");
	}

	#[test]
	fn test_catalogs_cover_the_same_keys() {
		let keys = [
			"server.api.contact.sent",
			"server.api.setting.bulk_updated",
			"server.api.media.too_large",
		];
		for key in keys {
			for language in LANGUAGES {
				assert_ne!(t(language, key), key, "{key} missing for {language:?}");
			}
		}
	}
}
