// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use vitrine_common_i18n::Translated;

use crate::error::ContentError;
use crate::ids::PageId;
use crate::localizable::impl_localizable;

/// Publication state of a page. Only published pages are visible publicly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum PageStatus {
	#[default]
	Draft,
	Published,
}

impl fmt::Display for PageStatus {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			PageStatus::Draft => write!(f, "draft"),
			PageStatus::Published => write!(f, "published"),
		}
	}
}

impl FromStr for PageStatus {
	type Err = ContentError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"draft" => Ok(PageStatus::Draft),
			"published" => Ok(PageStatus::Published),
			other => Err(ContentError::InvalidStatus(other.to_string())),
		}
	}
}

/// A CMS page addressed publicly by its slug.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
	pub id: PageId,
	pub slug: String,
	pub title: Translated,
	pub content: Translated,
	pub meta_title: Translated,
	pub meta_description: Translated,
	pub status: PageStatus,
	pub created_by: Option<String>,
	pub updated_by: Option<String>,
	pub created_at: DateTime<Utc>,
	pub updated_at: DateTime<Utc>,
}

impl_localizable!(Page {
	title,
	content,
	meta_title,
	meta_description
});

impl Page {
	pub fn new(slug: impl Into<String>, title: Translated) -> Self {
		let now = Utc::now();
		Self {
			id: PageId::generate(),
			slug: slug.into(),
			title,
			content: Translated::default(),
			meta_title: Translated::default(),
			meta_description: Translated::default(),
			status: PageStatus::Draft,
			created_by: None,
			updated_by: None,
			created_at: now,
			updated_at: now,
		}
	}

	pub fn is_published(&self) -> bool {
		self.status == PageStatus::Published
	}
}

/// Fields the public page list localizes; the full body is left out of list
/// views.
pub const PAGE_LIST_FIELDS: &[&str] = &["title", "meta_title"];

#[cfg(test)]
mod tests {
	use super::*;
	use vitrine_common_i18n::{localize, resolve_field, resolve_record, Language, Localizable};

	fn about_page() -> Page {
		let mut page = Page::new(
			"about",
			Translated::new("אודות")
				.with_variant(Language::En, "")
				.with_variant(Language::Pt, "Sobre"),
		);
		page.content = Translated::new("תוכן").with_variant(Language::En, "Content");
		page.status = PageStatus::Published;
		page
	}

	#[test]
	fn test_fields_cover_every_translatable_attribute() {
		assert_eq!(
			Page::FIELDS,
			&["title", "content", "meta_title", "meta_description"]
		);
	}

	#[test]
	fn test_title_localization() {
		let page = about_page();
		assert_eq!(resolve_field(&page, "title", Some("en")), "אודות");
		assert_eq!(resolve_field(&page, "title", Some("pt")), "Sobre");
		assert_eq!(resolve_field(&page, "title", None), "אודות");
	}

	#[test]
	fn test_list_fields_leave_content_alone() {
		let page = about_page();
		let localized = resolve_record(&page, PAGE_LIST_FIELDS, Some("en"));
		assert_eq!(localized.content.base(), "תוכן");
	}

	#[test]
	fn test_full_localization_replaces_content() {
		let page = about_page();
		let localized = localize(&page, Some("en"));
		assert_eq!(localized.content.base(), "Content");
		assert_eq!(localized.slug, "about");
	}

	#[test]
	fn test_status_parse() {
		assert_eq!("published".parse::<PageStatus>().unwrap(), PageStatus::Published);
		assert_eq!("draft".parse::<PageStatus>().unwrap(), PageStatus::Draft);
		assert!("archived".parse::<PageStatus>().is_err());
	}
}
