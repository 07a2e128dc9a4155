// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ContentError;
use crate::ids::ContactId;
use crate::validation::{require_non_empty, sanitize_email, validate_email};

/// A message submitted through the public contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
	pub id: ContactId,
	pub name: String,
	pub email: String,
	pub phone: Option<String>,
	pub message: String,
	pub is_read: bool,
	pub created_at: DateTime<Utc>,
}

impl ContactMessage {
	/// Validate a submission and build an unread message from it.
	pub fn submit(
		name: &str,
		email: &str,
		phone: Option<&str>,
		message: &str,
	) -> Result<Self, ContentError> {
		require_non_empty("name", name)?;
		require_non_empty("message", message)?;
		let email = sanitize_email(email);
		validate_email(&email)?;

		Ok(Self {
			id: ContactId::generate(),
			name: name.trim().to_string(),
			email,
			phone: phone
				.map(str::trim)
				.filter(|p| !p.is_empty())
				.map(str::to_string),
			message: message.trim().to_string(),
			is_read: false,
			created_at: Utc::now(),
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_submit_normalizes_input() {
		let msg = ContactMessage::submit(" Dana ", " Dana@Example.com", Some("  "), " Hi ").unwrap();
		assert_eq!(msg.name, "Dana");
		assert_eq!(msg.email, "dana@example.com");
		assert_eq!(msg.phone, None);
		assert_eq!(msg.message, "Hi");
		assert!(!msg.is_read);
	}

	#[test]
	fn test_submit_rejects_bad_email() {
		let err = ContactMessage::submit("Dana", "dana", None, "Hi").unwrap_err();
		assert!(matches!(err, ContentError::InvalidEmail(_)));
	}

	#[test]
	fn test_submit_requires_message() {
		let err = ContactMessage::submit("Dana", "dana@example.com", None, "").unwrap_err();
		assert_eq!(err, ContentError::Required("message"));
	}
}
