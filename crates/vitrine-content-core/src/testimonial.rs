// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use vitrine_common_i18n::Translated;

use crate::ids::TestimonialId;
use crate::localizable::impl_localizable;

/// A client quote. The person's name is not translated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
	pub id: TestimonialId,
	pub name: String,
	pub role: Translated,
	pub company: Translated,
	pub content: Translated,
	pub image_url: Option<String>,
	pub order: i64,
	pub is_active: bool,
	pub created_by: Option<String>,
	pub updated_by: Option<String>,
	pub created_at: DateTime<Utc>,
	pub updated_at: DateTime<Utc>,
}

impl_localizable!(Testimonial {
	role,
	company,
	content
});

impl Testimonial {
	pub fn new(name: impl Into<String>, content: Translated) -> Self {
		let now = Utc::now();
		Self {
			id: TestimonialId::generate(),
			name: name.into(),
			role: Translated::default(),
			company: Translated::default(),
			content,
			image_url: None,
			order: 0,
			is_active: true,
			created_by: None,
			updated_by: None,
			created_at: now,
			updated_at: now,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use vitrine_common_i18n::{localize, Language};

	#[test]
	fn test_name_is_never_localized() {
		let mut testimonial = Testimonial::new(
			"דני כהן",
			Translated::new("מצוין").with_variant(Language::En, "Excellent"),
		);
		testimonial.role = Translated::new("מנכ״ל").with_variant(Language::En, "CEO");

		let localized = localize(&testimonial, Some("en"));
		assert_eq!(localized.name, "דני כהן");
		assert_eq!(localized.role.base(), "CEO");
		assert_eq!(localized.content.base(), "Excellent");
		assert_eq!(localized.company.base(), "");
	}
}
