// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use chrono::Utc;
use sqlx::sqlite::SqlitePool;
use vitrine_content_core::{Category, CategoryId};

use crate::error::{unique_violation, DbError, Result};
use crate::row::{parse_id, parse_timestamp, translated, BindTranslated};

/// A category together with the number of live media assets filed under it.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryWithCount {
	pub category: Category,
	pub media_count: i64,
}

#[derive(Clone)]
pub struct CategoryRepository {
	pool: SqlitePool,
}

impl CategoryRepository {
	pub fn new(pool: SqlitePool) -> Self {
		Self { pool }
	}

	#[tracing::instrument(skip(self, category), fields(category_id = %category.id, slug = %category.slug))]
	pub async fn create(&self, category: &Category) -> Result<()> {
		sqlx::query(
			r#"
			INSERT INTO categories (
				id, slug,
				name, name_en, name_pt,
				description, description_en, description_pt,
				sort_order, is_active, created_at, updated_at
			)
			VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
			"#,
		)
		.bind(category.id.to_string())
		.bind(&category.slug)
		.bind_translated(&category.name)
		.bind_translated(&category.description)
		.bind(category.order)
		.bind(category.is_active)
		.bind(category.created_at.to_rfc3339())
		.bind(category.updated_at.to_rfc3339())
		.execute(&self.pool)
		.await
		.map_err(|e| {
			unique_violation(e, || format!("category slug '{}' already exists", category.slug))
		})?;

		Ok(())
	}

	#[tracing::instrument(skip(self), fields(category_id = %id))]
	pub async fn get(&self, id: &CategoryId) -> Result<Option<Category>> {
		let row = sqlx::query(
			r#"
			SELECT id, slug, name, name_en, name_pt, description, description_en, description_pt,
				sort_order, is_active, created_at, updated_at
			FROM categories
			WHERE id = ? AND deleted_at IS NULL
			"#,
		)
		.bind(id.to_string())
		.fetch_optional(&self.pool)
		.await?;

		row.map(|r| row_to_category(&r)).transpose()
	}

	/// Live categories in display order, each with its live media count.
	#[tracing::instrument(skip(self))]
	pub async fn list_with_media_count(&self) -> Result<Vec<CategoryWithCount>> {
		let rows = sqlx::query(
			r#"
			SELECT c.id, c.slug, c.name, c.name_en, c.name_pt,
				c.description, c.description_en, c.description_pt,
				c.sort_order, c.is_active, c.created_at, c.updated_at,
				(
					SELECT COUNT(*) FROM media_assets m
					WHERE m.category_id = c.id AND m.deleted_at IS NULL
				) AS media_count
			FROM categories c
			WHERE c.deleted_at IS NULL
			ORDER BY c.sort_order ASC, c.created_at ASC
			"#,
		)
		.fetch_all(&self.pool)
		.await?;

		rows.iter()
			.map(|row| {
				use sqlx::Row;
				Ok(CategoryWithCount {
					category: row_to_category(row)?,
					media_count: row.get("media_count"),
				})
			})
			.collect()
	}

	#[tracing::instrument(skip(self, category), fields(category_id = %category.id))]
	pub async fn update(&self, category: &Category) -> Result<()> {
		let result = sqlx::query(
			r#"
			UPDATE categories SET
				slug = ?,
				name = ?, name_en = ?, name_pt = ?,
				description = ?, description_en = ?, description_pt = ?,
				sort_order = ?, is_active = ?, updated_at = ?
			WHERE id = ? AND deleted_at IS NULL
			"#,
		)
		.bind(&category.slug)
		.bind_translated(&category.name)
		.bind_translated(&category.description)
		.bind(category.order)
		.bind(category.is_active)
		.bind(category.updated_at.to_rfc3339())
		.bind(category.id.to_string())
		.execute(&self.pool)
		.await
		.map_err(|e| {
			unique_violation(e, || format!("category slug '{}' already exists", category.slug))
		})?;

		if result.rows_affected() == 0 {
			return Err(DbError::NotFound(format!("category {}", category.id)));
		}
		Ok(())
	}

	/// Soft delete a category. Media filed under it keep their reference and
	/// stay visible in the library.
	#[tracing::instrument(skip(self), fields(category_id = %id))]
	pub async fn soft_delete(&self, id: &CategoryId) -> Result<()> {
		let now = Utc::now().to_rfc3339();
		let result = sqlx::query(
			r#"
			UPDATE categories SET deleted_at = ?, updated_at = ?
			WHERE id = ? AND deleted_at IS NULL
			"#,
		)
		.bind(&now)
		.bind(&now)
		.bind(id.to_string())
		.execute(&self.pool)
		.await?;

		if result.rows_affected() == 0 {
			return Err(DbError::NotFound(format!("category {id}")));
		}
		Ok(())
	}
}

fn row_to_category(row: &sqlx::sqlite::SqliteRow) -> Result<Category> {
	use sqlx::Row;

	Ok(Category {
		id: parse_id(row, "id")?,
		slug: row.get("slug"),
		name: translated(row, "name"),
		description: translated(row, "description"),
		order: row.get("sort_order"),
		is_active: row.get("is_active"),
		created_at: parse_timestamp(row, "created_at")?,
		updated_at: parse_timestamp(row, "updated_at")?,
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::media::MediaRepository;
	use crate::testing::create_test_pool;
	use vitrine_common_i18n::{Language, Translated};
	use vitrine_content_core::{MediaAsset, DEFAULT_MAX_UPLOAD_BYTES};

	fn media_in(category: &Category) -> MediaAsset {
		let mut asset =
			MediaAsset::from_upload("logo.png", "image/png", 1024, DEFAULT_MAX_UPLOAD_BYTES).unwrap();
		asset.category_id = Some(category.id);
		asset
	}

	#[tokio::test]
	async fn test_media_count_ignores_deleted_media() {
		let pool = create_test_pool().await;
		let categories = CategoryRepository::new(pool.clone());
		let media = MediaRepository::new(pool);

		let branding = Category::new(
			"branding",
			Translated::new("מיתוג").with_variant(Language::En, "Branding"),
		);
		let general = Category::new("general", Translated::new("כללי"));
		categories.create(&branding).await.unwrap();
		categories.create(&general).await.unwrap();

		let kept = media_in(&branding);
		let removed = media_in(&branding);
		media.create(&kept).await.unwrap();
		media.create(&removed).await.unwrap();
		media.soft_delete(&removed.id).await.unwrap();

		let listed = categories.list_with_media_count().await.unwrap();
		let count_of = |slug: &str| {
			listed
				.iter()
				.find(|c| c.category.slug == slug)
				.map(|c| c.media_count)
		};
		assert_eq!(count_of("branding"), Some(1));
		assert_eq!(count_of("general"), Some(0));
	}

	#[tokio::test]
	async fn test_duplicate_slug_conflicts() {
		let repo = CategoryRepository::new(create_test_pool().await);
		repo.create(&Category::new("general", Translated::new("כללי"))).await.unwrap();
		let err = repo
			.create(&Category::new("general", Translated::new("אחר")))
			.await
			.unwrap_err();
		assert!(matches!(err, DbError::Conflict(_)));
	}

	#[tokio::test]
	async fn test_update_and_soft_delete() {
		let repo = CategoryRepository::new(create_test_pool().await);
		let mut category = Category::new("images", Translated::new("תמונות"));
		repo.create(&category).await.unwrap();

		category.description = Translated::new("תמונות לאתר");
		category.order = 3;
		repo.update(&category).await.unwrap();
		let fetched = repo.get(&category.id).await.unwrap().unwrap();
		assert_eq!(fetched.description.base(), "תמונות לאתר");
		assert_eq!(fetched.order, 3);

		repo.soft_delete(&category.id).await.unwrap();
		assert!(repo.get(&category.id).await.unwrap().is_none());
		assert!(matches!(repo.update(&category).await, Err(DbError::NotFound(_))));
	}
}
