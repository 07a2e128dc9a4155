// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use vitrine_common_i18n::{localize, resolve_record};
use vitrine_content_core::{
	require_non_empty, validate_slug, ContentError, Page, PageStatus, PAGE_LIST_FIELDS,
};

use crate::common::{en, patch_translated, pt, translated};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Admin view of a page with every language column.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct PageResponse {
	pub id: String,
	pub slug: String,
	pub title: String,
	pub title_en: Option<String>,
	pub title_pt: Option<String>,
	pub content: String,
	pub content_en: Option<String>,
	pub content_pt: Option<String>,
	pub meta_title: String,
	pub meta_title_en: Option<String>,
	pub meta_title_pt: Option<String>,
	pub meta_description: String,
	pub meta_description_en: Option<String>,
	pub meta_description_pt: Option<String>,
	pub status: PageStatus,
	pub created_by: Option<String>,
	pub updated_by: Option<String>,
	pub created_at: DateTime<Utc>,
	pub updated_at: DateTime<Utc>,
}

impl From<&Page> for PageResponse {
	fn from(page: &Page) -> Self {
		Self {
			id: page.id.to_string(),
			slug: page.slug.clone(),
			title: page.title.base().to_string(),
			title_en: en(&page.title),
			title_pt: pt(&page.title),
			content: page.content.base().to_string(),
			content_en: en(&page.content),
			content_pt: pt(&page.content),
			meta_title: page.meta_title.base().to_string(),
			meta_title_en: en(&page.meta_title),
			meta_title_pt: pt(&page.meta_title),
			meta_description: page.meta_description.base().to_string(),
			meta_description_en: en(&page.meta_description),
			meta_description_pt: pt(&page.meta_description),
			status: page.status,
			created_by: page.created_by.clone(),
			updated_by: page.updated_by.clone(),
			created_at: page.created_at,
			updated_at: page.updated_at,
		}
	}
}

/// A published page as the public site renders it, in one language.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct PublicPageResponse {
	pub slug: String,
	pub title: String,
	pub content: String,
	pub meta_title: String,
	pub meta_description: String,
	pub updated_at: DateTime<Utc>,
}

impl PublicPageResponse {
	pub fn localized(page: &Page, lang: Option<&str>) -> Self {
		let page = localize(page, lang);
		Self {
			slug: page.slug.clone(),
			title: page.title.base().to_string(),
			content: page.content.base().to_string(),
			meta_title: page.meta_title.base().to_string(),
			meta_description: page.meta_description.base().to_string(),
			updated_at: page.updated_at,
		}
	}
}

/// Entry of the public page index.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct PublicPageSummary {
	pub slug: String,
	pub title: String,
	pub meta_title: String,
}

impl PublicPageSummary {
	pub fn localized(page: &Page, lang: Option<&str>) -> Self {
		let page = resolve_record(page, PAGE_LIST_FIELDS, lang);
		Self {
			slug: page.slug.clone(),
			title: page.title.base().to_string(),
			meta_title: page.meta_title.base().to_string(),
		}
	}
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct CreatePageRequest {
	pub slug: String,
	pub title: String,
	pub title_en: Option<String>,
	pub title_pt: Option<String>,
	#[serde(default)]
	pub content: String,
	pub content_en: Option<String>,
	pub content_pt: Option<String>,
	#[serde(default)]
	pub meta_title: String,
	pub meta_title_en: Option<String>,
	pub meta_title_pt: Option<String>,
	#[serde(default)]
	pub meta_description: String,
	pub meta_description_en: Option<String>,
	pub meta_description_pt: Option<String>,
	#[serde(default)]
	pub status: PageStatus,
}

impl CreatePageRequest {
	pub fn into_page(self) -> Result<Page, ContentError> {
		validate_slug(&self.slug)?;
		require_non_empty("title", &self.title)?;

		let mut page = Page::new(
			self.slug,
			translated(self.title, self.title_en, self.title_pt),
		);
		page.content = translated(self.content, self.content_en, self.content_pt);
		page.meta_title = translated(self.meta_title, self.meta_title_en, self.meta_title_pt);
		page.meta_description = translated(
			self.meta_description,
			self.meta_description_en,
			self.meta_description_pt,
		);
		page.status = self.status;
		Ok(page)
	}
}

/// Partial update. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct UpdatePageRequest {
	pub slug: Option<String>,
	pub title: Option<String>,
	pub title_en: Option<String>,
	pub title_pt: Option<String>,
	pub content: Option<String>,
	pub content_en: Option<String>,
	pub content_pt: Option<String>,
	pub meta_title: Option<String>,
	pub meta_title_en: Option<String>,
	pub meta_title_pt: Option<String>,
	pub meta_description: Option<String>,
	pub meta_description_en: Option<String>,
	pub meta_description_pt: Option<String>,
	pub status: Option<PageStatus>,
}

impl UpdatePageRequest {
	pub fn apply(self, page: &mut Page) -> Result<(), ContentError> {
		if let Some(slug) = &self.slug {
			validate_slug(slug)?;
		}
		if let Some(title) = &self.title {
			require_non_empty("title", title)?;
		}

		if let Some(slug) = self.slug {
			page.slug = slug;
		}
		patch_translated(&mut page.title, self.title, self.title_en, self.title_pt);
		patch_translated(&mut page.content, self.content, self.content_en, self.content_pt);
		patch_translated(
			&mut page.meta_title,
			self.meta_title,
			self.meta_title_en,
			self.meta_title_pt,
		);
		patch_translated(
			&mut page.meta_description,
			self.meta_description,
			self.meta_description_en,
			self.meta_description_pt,
		);
		if let Some(status) = self.status {
			page.status = status;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	fn create_request() -> CreatePageRequest {
		CreatePageRequest {
			slug: "about".to_string(),
			title: "אודות".to_string(),
			title_en: Some(String::new()),
			title_pt: Some("Sobre".to_string()),
			status: PageStatus::Published,
			..Default::default()
		}
	}

	#[test]
	fn test_public_page_falls_back_for_empty_translation() {
		let page = create_request().into_page().unwrap();

		assert_eq!(PublicPageResponse::localized(&page, Some("en")).title, "אודות");
		assert_eq!(PublicPageResponse::localized(&page, Some("pt")).title, "Sobre");
		assert_eq!(PublicPageResponse::localized(&page, Some("xx")).title, "אודות");
		assert_eq!(PublicPageSummary::localized(&page, Some("pt")).title, "Sobre");
	}

	#[test]
	fn test_admin_response_exposes_columns() {
		let page = create_request().into_page().unwrap();
		let response = PageResponse::from(&page);
		assert_eq!(response.title, "אודות");
		assert_eq!(response.title_en, None);
		assert_eq!(response.title_pt.as_deref(), Some("Sobre"));

		let json = serde_json::to_value(&response).unwrap();
		assert_eq!(json["status"], "published");
	}

	#[test]
	fn test_create_validates() {
		let mut bad_slug = create_request();
		bad_slug.slug = "About Us".to_string();
		assert!(matches!(bad_slug.into_page(), Err(ContentError::InvalidSlug(_))));

		let mut no_title = create_request();
		no_title.title = "  ".to_string();
		assert!(matches!(no_title.into_page(), Err(ContentError::Required("title"))));
	}

	#[test]
	fn test_update_applies_only_present_fields() {
		let mut page = create_request().into_page().unwrap();
		let update: UpdatePageRequest =
			serde_json::from_value(serde_json::json!({ "title_en": "About", "status": "draft" }))
				.unwrap();
		update.apply(&mut page).unwrap();

		assert_eq!(page.slug, "about");
		assert_eq!(page.title.base(), "אודות");
		assert_eq!(PublicPageResponse::localized(&page, Some("en")).title, "About");
		assert_eq!(page.status, PageStatus::Draft);
	}

	#[test]
	fn test_invalid_update_leaves_page_untouched() {
		let mut page = create_request().into_page().unwrap();
		let before = page.clone();
		let update = UpdatePageRequest {
			slug: Some("Bad Slug".to_string()),
			title_pt: Some("Outro".to_string()),
			..Default::default()
		};
		assert!(update.apply(&mut page).is_err());
		assert_eq!(page, before);
	}

	proptest! {
		#[test]
		fn unsupported_lang_renders_hebrew(code in "[a-z]{0,4}") {
			prop_assume!(!matches!(code.as_str(), "en" | "pt"));
			let page = create_request().into_page().unwrap();
			let localized = PublicPageResponse::localized(&page, Some(&code));
			prop_assert_eq!(localized.title, "אודות");
		}
	}
}
