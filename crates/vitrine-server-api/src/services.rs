// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use vitrine_common_i18n::{localize, resolve_record};
use vitrine_content_core::{
	require_non_empty, validate_slug, ContentError, Service, DEFAULT_SERVICE_ICON,
	SERVICE_LIST_FIELDS,
};

use crate::common::{en, patch_translated, pt, translated};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct ServiceResponse {
	pub id: String,
	pub slug: String,
	pub title: String,
	pub title_en: Option<String>,
	pub title_pt: Option<String>,
	pub short_description: String,
	pub short_description_en: Option<String>,
	pub short_description_pt: Option<String>,
	pub full_content: String,
	pub full_content_en: Option<String>,
	pub full_content_pt: Option<String>,
	pub icon: String,
	pub image_url: Option<String>,
	pub order: i64,
	pub is_active: bool,
	pub created_by: Option<String>,
	pub updated_by: Option<String>,
	pub created_at: DateTime<Utc>,
	pub updated_at: DateTime<Utc>,
}

impl From<&Service> for ServiceResponse {
	fn from(service: &Service) -> Self {
		Self {
			id: service.id.to_string(),
			slug: service.slug.clone(),
			title: service.title.base().to_string(),
			title_en: en(&service.title),
			title_pt: pt(&service.title),
			short_description: service.short_description.base().to_string(),
			short_description_en: en(&service.short_description),
			short_description_pt: pt(&service.short_description),
			full_content: service.full_content.base().to_string(),
			full_content_en: en(&service.full_content),
			full_content_pt: pt(&service.full_content),
			icon: service.icon.clone(),
			image_url: service.image_url.clone(),
			order: service.order,
			is_active: service.is_active,
			created_by: service.created_by.clone(),
			updated_by: service.updated_by.clone(),
			created_at: service.created_at,
			updated_at: service.updated_at,
		}
	}
}

/// Service card on the public site.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct PublicServiceSummary {
	pub slug: String,
	pub title: String,
	pub short_description: String,
	pub icon: String,
	pub image_url: Option<String>,
	pub order: i64,
}

impl PublicServiceSummary {
	pub fn localized(service: &Service, lang: Option<&str>) -> Self {
		let service = resolve_record(service, SERVICE_LIST_FIELDS, lang);
		Self {
			slug: service.slug.clone(),
			title: service.title.base().to_string(),
			short_description: service.short_description.base().to_string(),
			icon: service.icon.clone(),
			image_url: service.image_url.clone(),
			order: service.order,
		}
	}
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct PublicServiceResponse {
	pub slug: String,
	pub title: String,
	pub short_description: String,
	pub full_content: String,
	pub icon: String,
	pub image_url: Option<String>,
}

impl PublicServiceResponse {
	pub fn localized(service: &Service, lang: Option<&str>) -> Self {
		let service = localize(service, lang);
		Self {
			slug: service.slug.clone(),
			title: service.title.base().to_string(),
			short_description: service.short_description.base().to_string(),
			full_content: service.full_content.base().to_string(),
			icon: service.icon.clone(),
			image_url: service.image_url.clone(),
		}
	}
}

fn default_active() -> bool {
	true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct CreateServiceRequest {
	pub slug: String,
	pub title: String,
	pub title_en: Option<String>,
	pub title_pt: Option<String>,
	#[serde(default)]
	pub short_description: String,
	pub short_description_en: Option<String>,
	pub short_description_pt: Option<String>,
	#[serde(default)]
	pub full_content: String,
	pub full_content_en: Option<String>,
	pub full_content_pt: Option<String>,
	pub icon: Option<String>,
	pub image_url: Option<String>,
	#[serde(default)]
	pub order: i64,
	#[serde(default = "default_active")]
	pub is_active: bool,
}

impl CreateServiceRequest {
	pub fn into_service(self) -> Result<Service, ContentError> {
		validate_slug(&self.slug)?;
		require_non_empty("title", &self.title)?;

		let mut service = Service::new(
			self.slug,
			translated(self.title, self.title_en, self.title_pt),
		);
		service.short_description = translated(
			self.short_description,
			self.short_description_en,
			self.short_description_pt,
		);
		service.full_content =
			translated(self.full_content, self.full_content_en, self.full_content_pt);
		service.icon = self
			.icon
			.filter(|icon| !icon.trim().is_empty())
			.unwrap_or_else(|| DEFAULT_SERVICE_ICON.to_string());
		service.image_url = self.image_url.filter(|url| !url.is_empty());
		service.order = self.order;
		service.is_active = self.is_active;
		Ok(service)
	}
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct UpdateServiceRequest {
	pub slug: Option<String>,
	pub title: Option<String>,
	pub title_en: Option<String>,
	pub title_pt: Option<String>,
	pub short_description: Option<String>,
	pub short_description_en: Option<String>,
	pub short_description_pt: Option<String>,
	pub full_content: Option<String>,
	pub full_content_en: Option<String>,
	pub full_content_pt: Option<String>,
	pub icon: Option<String>,
	/// An empty string removes the image.
	pub image_url: Option<String>,
	pub order: Option<i64>,
	pub is_active: Option<bool>,
}

impl UpdateServiceRequest {
	pub fn apply(self, service: &mut Service) -> Result<(), ContentError> {
		if let Some(slug) = &self.slug {
			validate_slug(slug)?;
		}
		if let Some(title) = &self.title {
			require_non_empty("title", title)?;
		}

		if let Some(slug) = self.slug {
			service.slug = slug;
		}
		patch_translated(&mut service.title, self.title, self.title_en, self.title_pt);
		patch_translated(
			&mut service.short_description,
			self.short_description,
			self.short_description_en,
			self.short_description_pt,
		);
		patch_translated(
			&mut service.full_content,
			self.full_content,
			self.full_content_en,
			self.full_content_pt,
		);
		if let Some(icon) = self.icon.filter(|icon| !icon.trim().is_empty()) {
			service.icon = icon;
		}
		if let Some(url) = self.image_url {
			service.image_url = (!url.is_empty()).then_some(url);
		}
		if let Some(order) = self.order {
			service.order = order;
		}
		if let Some(is_active) = self.is_active {
			service.is_active = is_active;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn request(json: serde_json::Value) -> CreateServiceRequest {
		serde_json::from_value(json).unwrap()
	}

	#[test]
	fn test_create_defaults() {
		let service = request(serde_json::json!({ "slug": "tax", "title": "מיסוי" }))
			.into_service()
			.unwrap();
		assert_eq!(service.icon, DEFAULT_SERVICE_ICON);
		assert!(service.is_active);
		assert_eq!(service.order, 0);
		assert!(service.image_url.is_none());
	}

	#[test]
	fn test_summary_localizes_list_fields_only() {
		let service = request(serde_json::json!({
			"slug": "tax",
			"title": "מיסוי",
			"title_en": "Taxation",
			"short_description": "ייעוץ",
			"short_description_en": "Advice",
			"full_content": "תוכן",
			"full_content_en": "Content",
		}))
		.into_service()
		.unwrap();

		let summary = PublicServiceSummary::localized(&service, Some("en"));
		assert_eq!(summary.title, "Taxation");
		assert_eq!(summary.short_description, "Advice");

		let full = PublicServiceResponse::localized(&service, Some("en"));
		assert_eq!(full.full_content, "Content");
		let hebrew = PublicServiceResponse::localized(&service, None);
		assert_eq!(hebrew.full_content, "תוכן");
	}

	#[test]
	fn test_update_clears_image() {
		let mut service = request(serde_json::json!({
			"slug": "tax",
			"title": "מיסוי",
			"image_url": "/uploads/a.png",
		}))
		.into_service()
		.unwrap();

		UpdateServiceRequest {
			image_url: Some(String::new()),
			is_active: Some(false),
			..Default::default()
		}
		.apply(&mut service)
		.unwrap();

		assert!(service.image_url.is_none());
		assert!(!service.is_active);
		assert_eq!(ServiceResponse::from(&service).slug, "tax");
	}
}
