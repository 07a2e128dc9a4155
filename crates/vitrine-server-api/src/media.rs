// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use vitrine_content_core::{CategoryId, MediaAsset};

#[cfg(feature = "openapi")]
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct MediaResponse {
	pub id: String,
	pub filename: String,
	pub original_name: String,
	pub mime_type: String,
	pub size: i64,
	pub url: String,
	pub alt: Option<String>,
	pub category_id: Option<String>,
	pub created_by: Option<String>,
	pub created_at: DateTime<Utc>,
}

impl From<&MediaAsset> for MediaResponse {
	fn from(asset: &MediaAsset) -> Self {
		Self {
			id: asset.id.to_string(),
			filename: asset.filename.clone(),
			original_name: asset.original_name.clone(),
			mime_type: asset.mime_type.clone(),
			size: asset.size,
			url: asset.url.clone(),
			alt: asset.alt.clone(),
			category_id: asset.category_id.map(|id| id.to_string()),
			created_by: asset.created_by.clone(),
			created_at: asset.created_at,
		}
	}
}

#[derive(Debug, Clone, Default, Deserialize)]
#[cfg_attr(feature = "openapi", derive(IntoParams))]
pub struct MediaListQuery {
	pub category_id: Option<String>,
}

/// Only the descriptive fields of an upload can change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct UpdateMediaRequest {
	/// An empty string removes the alt text.
	pub alt: Option<String>,
	/// An empty string detaches the file from its category.
	pub category_id: Option<String>,
}

impl UpdateMediaRequest {
	/// Apply to `asset`. The category id is parsed by the caller so it can
	/// reject malformed ids before touching the record.
	pub fn apply(self, asset: &mut MediaAsset, category_id: Option<Option<CategoryId>>) {
		if let Some(alt) = self.alt {
			asset.alt = (!alt.is_empty()).then_some(alt);
		}
		if let Some(category_id) = category_id {
			asset.category_id = category_id;
		}
	}
}

/// Schema of the multipart upload form, for the API document only.
#[cfg(feature = "openapi")]
#[derive(Debug, ToSchema)]
pub struct UploadMediaForm {
	#[schema(value_type = String)]
	pub file: Vec<u8>,
	pub alt: Option<String>,
	pub category_id: Option<String>,
}

#[cfg(test)]
mod tests {
	use super::*;
	use vitrine_content_core::DEFAULT_MAX_UPLOAD_BYTES;

	fn asset() -> MediaAsset {
		MediaAsset::from_upload("Logo.PNG", "image/png", 1024, DEFAULT_MAX_UPLOAD_BYTES).unwrap()
	}

	#[test]
	fn test_response_uses_public_url() {
		let asset = asset();
		let response = MediaResponse::from(&asset);
		assert!(response.url.starts_with("/uploads/"));
		assert!(response.filename.ends_with(".png"));
		assert_eq!(response.original_name, "Logo.PNG");
		assert!(response.category_id.is_none());
	}

	#[test]
	fn test_update_sets_and_clears() {
		let mut asset = asset();
		let category = CategoryId::generate();

		UpdateMediaRequest {
			alt: Some("Main logo".to_string()),
			category_id: None,
		}
		.apply(&mut asset, Some(Some(category)));
		assert_eq!(asset.alt.as_deref(), Some("Main logo"));
		assert_eq!(asset.category_id, Some(category));

		UpdateMediaRequest {
			alt: Some(String::new()),
			category_id: None,
		}
		.apply(&mut asset, None);
		assert!(asset.alt.is_none());
		assert_eq!(asset.category_id, Some(category));

		UpdateMediaRequest::default().apply(&mut asset, Some(None));
		assert!(asset.category_id.is_none());
	}
}
