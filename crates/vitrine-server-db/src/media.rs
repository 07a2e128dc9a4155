// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use chrono::Utc;
use sqlx::sqlite::SqlitePool;
use vitrine_content_core::{CategoryId, MediaAsset, MediaId};

use crate::error::{DbError, Result};
use crate::row::{parse_id, parse_optional_id, parse_timestamp};

const MEDIA_COLUMNS: &str = r#"
	id, filename, original_name, mime_type, size, url, alt, category_id, created_by, created_at
"#;

#[derive(Clone)]
pub struct MediaRepository {
	pool: SqlitePool,
}

impl MediaRepository {
	pub fn new(pool: SqlitePool) -> Self {
		Self { pool }
	}

	#[tracing::instrument(skip(self, asset), fields(media_id = %asset.id, mime_type = %asset.mime_type))]
	pub async fn create(&self, asset: &MediaAsset) -> Result<()> {
		sqlx::query(
			r#"
			INSERT INTO media_assets (
				id, filename, original_name, mime_type, size, url, alt, category_id,
				created_by, created_at
			)
			VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
			"#,
		)
		.bind(asset.id.to_string())
		.bind(&asset.filename)
		.bind(&asset.original_name)
		.bind(&asset.mime_type)
		.bind(asset.size)
		.bind(&asset.url)
		.bind(&asset.alt)
		.bind(asset.category_id.map(|id| id.to_string()))
		.bind(&asset.created_by)
		.bind(asset.created_at.to_rfc3339())
		.execute(&self.pool)
		.await?;

		Ok(())
	}

	#[tracing::instrument(skip(self), fields(media_id = %id))]
	pub async fn get(&self, id: &MediaId) -> Result<Option<MediaAsset>> {
		let row = sqlx::query(&format!(
			"SELECT {MEDIA_COLUMNS} FROM media_assets WHERE id = ? AND deleted_at IS NULL"
		))
		.bind(id.to_string())
		.fetch_optional(&self.pool)
		.await?;

		row.map(|r| row_to_media(&r)).transpose()
	}

	/// Live assets, newest first, optionally restricted to one category.
	#[tracing::instrument(skip(self))]
	pub async fn list(&self, category_id: Option<&CategoryId>) -> Result<Vec<MediaAsset>> {
		let rows = match category_id {
			Some(category_id) => {
				sqlx::query(&format!(
					r#"
					SELECT {MEDIA_COLUMNS} FROM media_assets
					WHERE category_id = ? AND deleted_at IS NULL
					ORDER BY created_at DESC
					"#
				))
				.bind(category_id.to_string())
				.fetch_all(&self.pool)
				.await?
			}
			None => {
				sqlx::query(&format!(
					r#"
					SELECT {MEDIA_COLUMNS} FROM media_assets
					WHERE deleted_at IS NULL
					ORDER BY created_at DESC
					"#
				))
				.fetch_all(&self.pool)
				.await?
			}
		};

		rows.iter().map(row_to_media).collect()
	}

	/// Update the editable metadata: alt text and category.
	#[tracing::instrument(skip(self, asset), fields(media_id = %asset.id))]
	pub async fn update(&self, asset: &MediaAsset) -> Result<()> {
		let result = sqlx::query(
			r#"
			UPDATE media_assets SET alt = ?, category_id = ?
			WHERE id = ? AND deleted_at IS NULL
			"#,
		)
		.bind(&asset.alt)
		.bind(asset.category_id.map(|id| id.to_string()))
		.bind(asset.id.to_string())
		.execute(&self.pool)
		.await?;

		if result.rows_affected() == 0 {
			return Err(DbError::NotFound(format!("media {}", asset.id)));
		}
		Ok(())
	}

	/// Soft delete the record. The stored file is left on disk.
	#[tracing::instrument(skip(self), fields(media_id = %id))]
	pub async fn soft_delete(&self, id: &MediaId) -> Result<()> {
		let result = sqlx::query(
			r#"
			UPDATE media_assets SET deleted_at = ?
			WHERE id = ? AND deleted_at IS NULL
			"#,
		)
		.bind(Utc::now().to_rfc3339())
		.bind(id.to_string())
		.execute(&self.pool)
		.await?;

		if result.rows_affected() == 0 {
			return Err(DbError::NotFound(format!("media {id}")));
		}
		Ok(())
	}
}

fn row_to_media(row: &sqlx::sqlite::SqliteRow) -> Result<MediaAsset> {
	use sqlx::Row;

	Ok(MediaAsset {
		id: parse_id(row, "id")?,
		filename: row.get("filename"),
		original_name: row.get("original_name"),
		mime_type: row.get("mime_type"),
		size: row.get("size"),
		url: row.get("url"),
		alt: row.get("alt"),
		category_id: parse_optional_id(row, "category_id")?,
		created_by: row.get("created_by"),
		created_at: parse_timestamp(row, "created_at")?,
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::category::CategoryRepository;
	use crate::testing::create_test_pool;
	use vitrine_common_i18n::Translated;
	use vitrine_content_core::{Category, DEFAULT_MAX_UPLOAD_BYTES};

	fn upload(name: &str, mime: &str) -> MediaAsset {
		MediaAsset::from_upload(name, mime, 2048, DEFAULT_MAX_UPLOAD_BYTES).unwrap()
	}

	#[tokio::test]
	async fn test_create_and_get() {
		let repo = MediaRepository::new(create_test_pool().await);
		let mut asset = upload("Brochure.PDF", "application/pdf");
		asset.alt = Some("חוברת".to_string());
		asset.created_by = Some("u-1".to_string());
		repo.create(&asset).await.unwrap();

		let fetched = repo.get(&asset.id).await.unwrap().unwrap();
		assert_eq!(fetched, MediaAsset { created_at: fetched.created_at, ..asset.clone() });
		assert!(fetched.url.starts_with("/uploads/"));
		assert!(fetched.filename.ends_with(".pdf"));
	}

	#[tokio::test]
	async fn test_list_filters_by_category() {
		let pool = create_test_pool().await;
		let categories = CategoryRepository::new(pool.clone());
		let repo = MediaRepository::new(pool);

		let branding = Category::new("branding", Translated::new("מיתוג"));
		categories.create(&branding).await.unwrap();

		let mut logo = upload("logo.svg", "image/svg+xml");
		logo.category_id = Some(branding.id);
		repo.create(&logo).await.unwrap();
		repo.create(&upload("photo.jpg", "image/jpeg")).await.unwrap();

		assert_eq!(repo.list(None).await.unwrap().len(), 2);
		let filtered = repo.list(Some(&branding.id)).await.unwrap();
		assert_eq!(filtered.len(), 1);
		assert_eq!(filtered[0].id, logo.id);
	}

	#[tokio::test]
	async fn test_update_metadata_and_delete() {
		let repo = MediaRepository::new(create_test_pool().await);
		let mut asset = upload("photo.webp", "image/webp");
		repo.create(&asset).await.unwrap();

		asset.alt = Some("Team".to_string());
		repo.update(&asset).await.unwrap();
		let fetched = repo.get(&asset.id).await.unwrap().unwrap();
		assert_eq!(fetched.alt.as_deref(), Some("Team"));

		repo.soft_delete(&asset.id).await.unwrap();
		assert!(repo.get(&asset.id).await.unwrap().is_none());
		assert!(matches!(repo.soft_delete(&asset.id).await, Err(DbError::NotFound(_))));
	}
}
