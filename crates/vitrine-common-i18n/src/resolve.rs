// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Language parameter resolution.

use crate::locale::{Language, DEFAULT_LANGUAGE};

/// Resolve the effective language for an untrusted `lang` parameter.
///
/// Absent, empty, or unsupported codes silently resolve to the default
/// language. This never fails: an unknown code is treated exactly like no
/// code at all.
///
/// # Example
///
/// ```
/// use vitrine_common_i18n::{resolve_language, Language};
///
/// assert_eq!(resolve_language(Some("en")), Language::En);
/// assert_eq!(resolve_language(Some("fr")), Language::He);
/// assert_eq!(resolve_language(None), Language::He);
/// ```
pub fn resolve_language(requested: Option<&str>) -> Language {
	requested
		.and_then(Language::from_code)
		.unwrap_or(DEFAULT_LANGUAGE)
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn test_supported_codes() {
		assert_eq!(resolve_language(Some("he")), Language::He);
		assert_eq!(resolve_language(Some("en")), Language::En);
		assert_eq!(resolve_language(Some("pt")), Language::Pt);
	}

	#[test]
	fn test_missing_and_empty_fall_back() {
		assert_eq!(resolve_language(None), Language::He);
		assert_eq!(resolve_language(Some("")), Language::He);
	}

	proptest! {
		#[test]
		fn unsupported_codes_behave_like_absent(code in "[a-zA-Z_-]{0,8}") {
			prop_assume!(!["he", "en", "pt"].contains(&code.as_str()));
			prop_assert_eq!(resolve_language(Some(&code)), resolve_language(None));
		}
	}
}
