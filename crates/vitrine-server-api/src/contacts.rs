// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use vitrine_content_core::{ContactMessage, ContentError};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct ContactResponse {
	pub id: String,
	pub name: String,
	pub email: String,
	pub phone: Option<String>,
	pub message: String,
	pub is_read: bool,
	pub created_at: DateTime<Utc>,
}

impl From<&ContactMessage> for ContactResponse {
	fn from(message: &ContactMessage) -> Self {
		Self {
			id: message.id.to_string(),
			name: message.name.clone(),
			email: message.email.clone(),
			phone: message.phone.clone(),
			message: message.message.clone(),
			is_read: message.is_read,
			created_at: message.created_at,
		}
	}
}

/// Public contact form submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct SubmitContactRequest {
	#[serde(default)]
	pub name: String,
	#[serde(default)]
	pub email: String,
	pub phone: Option<String>,
	#[serde(default)]
	pub message: String,
}

impl SubmitContactRequest {
	pub fn into_message(self) -> Result<ContactMessage, ContentError> {
		ContactMessage::submit(&self.name, &self.email, self.phone.as_deref(), &self.message)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_submission_is_sanitized() {
		let request: SubmitContactRequest = serde_json::from_value(serde_json::json!({
			"name": " Dana ",
			"email": " Dana@Example.COM ",
			"phone": "",
			"message": "שלום",
		}))
		.unwrap();
		let message = request.into_message().unwrap();
		let response = ContactResponse::from(&message);

		assert_eq!(response.name, "Dana");
		assert_eq!(response.email, "dana@example.com");
		assert!(response.phone.is_none());
		assert!(!response.is_read);
	}

	#[test]
	fn test_missing_fields_are_rejected() {
		let request: SubmitContactRequest =
			serde_json::from_value(serde_json::json!({ "email": "a@b.co" })).unwrap();
		assert_eq!(request.into_message(), Err(ContentError::Required("name")));

		let request: SubmitContactRequest = serde_json::from_value(serde_json::json!({
			"name": "Dana",
			"email": "not-an-email",
			"message": "hi",
		}))
		.unwrap();
		assert!(matches!(request.into_message(), Err(ContentError::InvalidEmail(_))));
	}
}
