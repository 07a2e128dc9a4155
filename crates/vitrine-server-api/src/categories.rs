// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use vitrine_content_core::{require_non_empty, validate_slug, Category, ContentError, MediaAsset};
use vitrine_server_db::CategoryWithCount;

use crate::common::{en, patch_translated, pt, translated};
use crate::media::MediaResponse;

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct CategoryResponse {
	pub id: String,
	pub slug: String,
	pub name: String,
	pub name_en: Option<String>,
	pub name_pt: Option<String>,
	pub description: String,
	pub description_en: Option<String>,
	pub description_pt: Option<String>,
	pub order: i64,
	pub is_active: bool,
	/// Present on list responses only.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub media_count: Option<i64>,
	/// Present on single-category responses only.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub media: Option<Vec<MediaResponse>>,
	pub created_at: DateTime<Utc>,
	pub updated_at: DateTime<Utc>,
}

impl From<&Category> for CategoryResponse {
	fn from(category: &Category) -> Self {
		Self {
			id: category.id.to_string(),
			slug: category.slug.clone(),
			name: category.name.base().to_string(),
			name_en: en(&category.name),
			name_pt: pt(&category.name),
			description: category.description.base().to_string(),
			description_en: en(&category.description),
			description_pt: pt(&category.description),
			order: category.order,
			is_active: category.is_active,
			media_count: None,
			media: None,
			created_at: category.created_at,
			updated_at: category.updated_at,
		}
	}
}

impl From<&CategoryWithCount> for CategoryResponse {
	fn from(row: &CategoryWithCount) -> Self {
		Self {
			media_count: Some(row.media_count),
			..Self::from(&row.category)
		}
	}
}

impl CategoryResponse {
	pub fn with_media(mut self, media: &[MediaAsset]) -> Self {
		self.media = Some(media.iter().map(MediaResponse::from).collect());
		self
	}
}

fn default_active() -> bool {
	true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct CreateCategoryRequest {
	pub slug: String,
	pub name: String,
	pub name_en: Option<String>,
	pub name_pt: Option<String>,
	#[serde(default)]
	pub description: String,
	pub description_en: Option<String>,
	pub description_pt: Option<String>,
	#[serde(default)]
	pub order: i64,
	#[serde(default = "default_active")]
	pub is_active: bool,
}

impl CreateCategoryRequest {
	pub fn into_category(self) -> Result<Category, ContentError> {
		validate_slug(&self.slug)?;
		require_non_empty("name", &self.name)?;

		let mut category = Category::new(self.slug, translated(self.name, self.name_en, self.name_pt));
		category.description =
			translated(self.description, self.description_en, self.description_pt);
		category.order = self.order;
		category.is_active = self.is_active;
		Ok(category)
	}
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct UpdateCategoryRequest {
	pub slug: Option<String>,
	pub name: Option<String>,
	pub name_en: Option<String>,
	pub name_pt: Option<String>,
	pub description: Option<String>,
	pub description_en: Option<String>,
	pub description_pt: Option<String>,
	pub order: Option<i64>,
	pub is_active: Option<bool>,
}

impl UpdateCategoryRequest {
	pub fn apply(self, category: &mut Category) -> Result<(), ContentError> {
		if let Some(slug) = &self.slug {
			validate_slug(slug)?;
		}
		if let Some(name) = &self.name {
			require_non_empty("name", name)?;
		}

		if let Some(slug) = self.slug {
			category.slug = slug;
		}
		patch_translated(&mut category.name, self.name, self.name_en, self.name_pt);
		patch_translated(
			&mut category.description,
			self.description,
			self.description_en,
			self.description_pt,
		);
		if let Some(order) = self.order {
			category.order = order;
		}
		if let Some(is_active) = self.is_active {
			category.is_active = is_active;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_list_response_carries_count() {
		let category = CreateCategoryRequest {
			slug: "logos".to_string(),
			name: "לוגואים".to_string(),
			name_en: Some("Logos".to_string()),
			name_pt: None,
			description: String::new(),
			description_en: None,
			description_pt: None,
			order: 2,
			is_active: true,
		}
		.into_category()
		.unwrap();

		let single = serde_json::to_value(CategoryResponse::from(&category)).unwrap();
		assert!(single.get("media_count").is_none());
		assert!(single.get("media").is_none());

		let detail = CategoryResponse::from(&category).with_media(&[]);
		assert_eq!(detail.media.map(|m| m.len()), Some(0));

		let listed = CategoryResponse::from(&CategoryWithCount {
			category,
			media_count: 4,
		});
		assert_eq!(listed.media_count, Some(4));
		assert_eq!(listed.name_en.as_deref(), Some("Logos"));
	}

	#[test]
	fn test_update_rejects_empty_name() {
		let mut category = Category::new("logos", "לוגואים".into());
		let result = UpdateCategoryRequest {
			name: Some(String::new()),
			..Default::default()
		}
		.apply(&mut category);
		assert_eq!(result, Err(ContentError::Required("name")));
	}
}
