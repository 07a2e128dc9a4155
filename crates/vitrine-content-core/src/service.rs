// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use vitrine_common_i18n::Translated;

use crate::ids::ServiceId;
use crate::localizable::impl_localizable;

pub const DEFAULT_SERVICE_ICON: &str = "Briefcase";

/// An offered service, listed on the public site in `order`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
	pub id: ServiceId,
	pub slug: String,
	pub title: Translated,
	pub short_description: Translated,
	pub full_content: Translated,
	pub icon: String,
	pub image_url: Option<String>,
	pub order: i64,
	pub is_active: bool,
	pub created_by: Option<String>,
	pub updated_by: Option<String>,
	pub created_at: DateTime<Utc>,
	pub updated_at: DateTime<Utc>,
}

impl_localizable!(Service {
	title,
	short_description,
	full_content
});

impl Service {
	pub fn new(slug: impl Into<String>, title: Translated) -> Self {
		let now = Utc::now();
		Self {
			id: ServiceId::generate(),
			slug: slug.into(),
			title,
			short_description: Translated::default(),
			full_content: Translated::default(),
			icon: DEFAULT_SERVICE_ICON.to_string(),
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

/// The public service list omits the long-form content.
pub const SERVICE_LIST_FIELDS: &[&str] = &["title", "short_description"];

#[cfg(test)]
mod tests {
	use super::*;
	use vitrine_common_i18n::{resolve_record, Language};

	#[test]
	fn test_new_service_defaults() {
		let service = Service::new("strategy", Translated::new("ייעוץ"));
		assert_eq!(service.icon, DEFAULT_SERVICE_ICON);
		assert!(service.is_active);
	}

	#[test]
	fn test_list_localization() {
		let mut service = Service::new(
			"strategy",
			Translated::new("ייעוץ אסטרטגי").with_variant(Language::En, "Strategy"),
		);
		service.full_content = Translated::new("תוכן").with_variant(Language::En, "Body");
		let localized = resolve_record(&service, SERVICE_LIST_FIELDS, Some("en"));
		assert_eq!(localized.title.base(), "Strategy");
		assert_eq!(localized.full_content.base(), "תוכן");
	}
}
