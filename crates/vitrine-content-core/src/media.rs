// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Media library records and upload rules.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ContentError;
use crate::ids::{CategoryId, MediaId};

/// Public path prefix under which stored files are served.
pub const UPLOADS_URL_PREFIX: &str = "/uploads";

pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

pub const ALLOWED_MIME_TYPES: &[&str] = &[
	"image/jpeg",
	"image/png",
	"image/gif",
	"image/webp",
	"image/svg+xml",
	"application/pdf",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaAsset {
	pub id: MediaId,
	/// Name of the stored file inside the uploads directory.
	pub filename: String,
	pub original_name: String,
	pub mime_type: String,
	pub size: i64,
	pub url: String,
	pub alt: Option<String>,
	pub category_id: Option<CategoryId>,
	pub created_by: Option<String>,
	pub created_at: DateTime<Utc>,
}

impl MediaAsset {
	/// Validate an incoming upload and describe where it will be stored.
	///
	/// The stored filename is a fresh UUID plus the original extension, so
	/// uploaded names never reach the filesystem.
	pub fn from_upload(
		original_name: &str,
		mime_type: &str,
		size: u64,
		max_bytes: u64,
	) -> Result<Self, ContentError> {
		if !is_allowed_mime_type(mime_type) {
			return Err(ContentError::UnsupportedMediaType(mime_type.to_string()));
		}
		if size > max_bytes {
			return Err(ContentError::FileTooLarge {
				size,
				limit: max_bytes,
			});
		}

		let filename = format!("{}{}", Uuid::new_v4(), extension_of(original_name));
		Ok(Self {
			id: MediaId::generate(),
			url: public_url(&filename),
			filename,
			original_name: original_name.to_string(),
			mime_type: mime_type.to_string(),
			size: i64::try_from(size).unwrap_or(i64::MAX),
			alt: None,
			category_id: None,
			created_by: None,
			created_at: Utc::now(),
		})
	}
}

pub fn is_allowed_mime_type(mime_type: &str) -> bool {
	ALLOWED_MIME_TYPES.contains(&mime_type)
}

pub fn public_url(filename: &str) -> String {
	format!("{UPLOADS_URL_PREFIX}/{filename}")
}

/// Lowercased extension including the dot, restricted to ASCII alphanumerics.
fn extension_of(name: &str) -> String {
	match name.rsplit_once('.') {
		Some((stem, ext))
			if !stem.is_empty()
				&& !ext.is_empty()
				&& ext.len() <= 8
				&& ext.chars().all(|c| c.is_ascii_alphanumeric()) =>
		{
			format!(".{}", ext.to_ascii_lowercase())
		}
		_ => String::new(),
	}
}
