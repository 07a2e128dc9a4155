// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Input validation shared by every write path.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::ContentError;

static SLUG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-z0-9-]+$").unwrap());

static EMAIL_REGEX: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Slugs contain only lowercase ASCII letters, digits and hyphens.
pub fn validate_slug(slug: &str) -> Result<(), ContentError> {
	if SLUG_REGEX.is_match(slug) {
		Ok(())
	} else {
		Err(ContentError::InvalidSlug(slug.to_string()))
	}
}

pub fn validate_email(email: &str) -> Result<(), ContentError> {
	if EMAIL_REGEX.is_match(email) {
		Ok(())
	} else {
		Err(ContentError::InvalidEmail(email.to_string()))
	}
}

/// Sanitize an email address by trimming whitespace and lowercasing.
pub fn sanitize_email(email: &str) -> String {
	email.trim().to_lowercase()
}

/// Reject empty (or whitespace-only) required text.
pub fn require_non_empty(field: &'static str, value: &str) -> Result<(), ContentError> {
	if value.trim().is_empty() {
		Err(ContentError::Required(field))
	} else {
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn test_valid_slugs() {
		assert!(validate_slug("about").is_ok());
		assert!(validate_slug("services-real-estate").is_ok());
		assert!(validate_slug("2024").is_ok());
	}

	#[test]
	fn test_invalid_slugs() {
		assert!(validate_slug("").is_err());
		assert!(validate_slug("About").is_err());
		assert!(validate_slug("a b").is_err());
		assert!(validate_slug("אודות").is_err());
		assert!(validate_slug("a_b").is_err());
	}

	#[test]
	fn test_email_validation() {
		assert!(validate_email("office@example.com").is_ok());
		assert!(validate_email("no-at-sign").is_err());
		assert!(validate_email("a@b").is_err());
		assert!(validate_email("with space@example.com").is_err());
	}

	#[test]
	fn test_sanitize_email() {
		assert_eq!(sanitize_email("  Me@Example.COM "), "me@example.com");
	}

	#[test]
	fn test_require_non_empty() {
		assert_eq!(require_non_empty("title", "  "), Err(ContentError::Required("title")));
		assert!(require_non_empty("title", "x").is_ok());
	}

	proptest! {
		#[test]
		fn generated_slugs_validate(slug in "[a-z0-9-]{1,40}") {
			prop_assert!(validate_slug(&slug).is_ok());
		}

		#[test]
		fn uppercase_never_validates(slug in "[a-z]{0,5}[A-Z][a-z]{0,5}") {
			prop_assert!(validate_slug(&slug).is_err());
		}
	}
}
