// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use chrono::Utc;
use sqlx::sqlite::SqlitePool;
use vitrine_content_core::{Page, PageId, PageStatus};

use crate::error::{unique_violation, DbError, Result};
use crate::row::{parse_enum, parse_id, parse_timestamp, translated, BindTranslated};

const PAGE_COLUMNS: &str = r#"
	id, slug,
	title, title_en, title_pt,
	content, content_en, content_pt,
	meta_title, meta_title_en, meta_title_pt,
	meta_description, meta_description_en, meta_description_pt,
	status, created_by, updated_by, created_at, updated_at
"#;

#[derive(Clone)]
pub struct PageRepository {
	pool: SqlitePool,
}

impl PageRepository {
	pub fn new(pool: SqlitePool) -> Self {
		Self { pool }
	}

	/// Insert a new page.
	///
	/// # Errors
	/// Returns `DbError::Conflict` if a live page already uses the slug.
	#[tracing::instrument(skip(self, page), fields(page_id = %page.id, slug = %page.slug))]
	pub async fn create(&self, page: &Page) -> Result<()> {
		sqlx::query(
			r#"
			INSERT INTO pages (
				id, slug,
				title, title_en, title_pt,
				content, content_en, content_pt,
				meta_title, meta_title_en, meta_title_pt,
				meta_description, meta_description_en, meta_description_pt,
				status, created_by, updated_by, created_at, updated_at
			)
			VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
			"#,
		)
		.bind(page.id.to_string())
		.bind(&page.slug)
		.bind_translated(&page.title)
		.bind_translated(&page.content)
		.bind_translated(&page.meta_title)
		.bind_translated(&page.meta_description)
		.bind(page.status.to_string())
		.bind(&page.created_by)
		.bind(&page.updated_by)
		.bind(page.created_at.to_rfc3339())
		.bind(page.updated_at.to_rfc3339())
		.execute(&self.pool)
		.await
		.map_err(|e| unique_violation(e, || format!("page slug '{}' already exists", page.slug)))?;

		Ok(())
	}

	#[tracing::instrument(skip(self), fields(page_id = %id))]
	pub async fn get(&self, id: &PageId) -> Result<Option<Page>> {
		let row = sqlx::query(&format!(
			"SELECT {PAGE_COLUMNS} FROM pages WHERE id = ? AND deleted_at IS NULL"
		))
		.bind(id.to_string())
		.fetch_optional(&self.pool)
		.await?;

		row.map(|r| row_to_page(&r)).transpose()
	}

	/// All live pages, most recently updated first.
	#[tracing::instrument(skip(self))]
	pub async fn list(&self) -> Result<Vec<Page>> {
		let rows = sqlx::query(&format!(
			"SELECT {PAGE_COLUMNS} FROM pages WHERE deleted_at IS NULL ORDER BY updated_at DESC"
		))
		.fetch_all(&self.pool)
		.await?;

		rows.iter().map(row_to_page).collect()
	}

	/// Live published pages, most recently updated first.
	#[tracing::instrument(skip(self))]
	pub async fn list_published(&self) -> Result<Vec<Page>> {
		let rows = sqlx::query(&format!(
			r#"
			SELECT {PAGE_COLUMNS} FROM pages
			WHERE status = ? AND deleted_at IS NULL
			ORDER BY updated_at DESC
			"#
		))
		.bind(PageStatus::Published.to_string())
		.fetch_all(&self.pool)
		.await?;

		rows.iter().map(row_to_page).collect()
	}

	#[tracing::instrument(skip(self))]
	pub async fn get_published_by_slug(&self, slug: &str) -> Result<Option<Page>> {
		let row = sqlx::query(&format!(
			r#"
			SELECT {PAGE_COLUMNS} FROM pages
			WHERE slug = ? AND status = ? AND deleted_at IS NULL
			"#
		))
		.bind(slug)
		.bind(PageStatus::Published.to_string())
		.fetch_optional(&self.pool)
		.await?;

		row.map(|r| row_to_page(&r)).transpose()
	}

	/// Write every column of an existing live page.
	#[tracing::instrument(skip(self, page), fields(page_id = %page.id))]
	pub async fn update(&self, page: &Page) -> Result<()> {
		let result = sqlx::query(
			r#"
			UPDATE pages SET
				slug = ?,
				title = ?, title_en = ?, title_pt = ?,
				content = ?, content_en = ?, content_pt = ?,
				meta_title = ?, meta_title_en = ?, meta_title_pt = ?,
				meta_description = ?, meta_description_en = ?, meta_description_pt = ?,
				status = ?, updated_by = ?, updated_at = ?
			WHERE id = ? AND deleted_at IS NULL
			"#,
		)
		.bind(&page.slug)
		.bind_translated(&page.title)
		.bind_translated(&page.content)
		.bind_translated(&page.meta_title)
		.bind_translated(&page.meta_description)
		.bind(page.status.to_string())
		.bind(&page.updated_by)
		.bind(page.updated_at.to_rfc3339())
		.bind(page.id.to_string())
		.execute(&self.pool)
		.await
		.map_err(|e| unique_violation(e, || format!("page slug '{}' already exists", page.slug)))?;

		if result.rows_affected() == 0 {
			return Err(DbError::NotFound(format!("page {}", page.id)));
		}
		Ok(())
	}

	#[tracing::instrument(skip(self), fields(page_id = %id))]
	pub async fn soft_delete(&self, id: &PageId) -> Result<()> {
		let now = Utc::now().to_rfc3339();
		let result = sqlx::query(
			r#"
			UPDATE pages SET deleted_at = ?, updated_at = ?
			WHERE id = ? AND deleted_at IS NULL
			"#,
		)
		.bind(&now)
		.bind(&now)
		.bind(id.to_string())
		.execute(&self.pool)
		.await?;

		if result.rows_affected() == 0 {
			return Err(DbError::NotFound(format!("page {id}")));
		}
		Ok(())
	}
}

fn row_to_page(row: &sqlx::sqlite::SqliteRow) -> Result<Page> {
	use sqlx::Row;

	Ok(Page {
		id: parse_id(row, "id")?,
		slug: row.get("slug"),
		title: translated(row, "title"),
		content: translated(row, "content"),
		meta_title: translated(row, "meta_title"),
		meta_description: translated(row, "meta_description"),
		status: parse_enum(row, "status")?,
		created_by: row.get("created_by"),
		updated_by: row.get("updated_by"),
		created_at: parse_timestamp(row, "created_at")?,
		updated_at: parse_timestamp(row, "updated_at")?,
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::testing::create_test_pool;
	use vitrine_common_i18n::{localize, Language, Translated};

	async fn make_repo() -> PageRepository {
		PageRepository::new(create_test_pool().await)
	}

	fn published(slug: &str, title: Translated) -> Page {
		let mut page = Page::new(slug, title);
		page.status = PageStatus::Published;
		page
	}

	#[tokio::test]
	async fn test_create_and_get_keeps_variants() {
		let repo = make_repo().await;
		let page = Page::new(
			"about",
			Translated::new("אודות")
				.with_variant(Language::En, "About")
				.with_variant(Language::Pt, "Sobre"),
		);
		repo.create(&page).await.unwrap();

		let fetched = repo.get(&page.id).await.unwrap().unwrap();
		assert_eq!(fetched.slug, "about");
		assert_eq!(fetched.title, page.title);
		assert_eq!(fetched.status, PageStatus::Draft);
		assert!(fetched.content.base().is_empty());
	}

	#[tokio::test]
	async fn test_empty_variant_is_stored_as_missing() {
		let repo = make_repo().await;
		let mut page = published(
			"about",
			Translated::new("אודות").with_variant(Language::Pt, "Sobre"),
		);
		page.title.set_variant(Language::En, Some(String::new()));
		repo.create(&page).await.unwrap();

		let fetched = repo.get_published_by_slug("about").await.unwrap().unwrap();
		assert_eq!(fetched.title.variant(Language::En), None);
		assert_eq!(localize(&fetched, Some("en")).title.base(), "אודות");
		assert_eq!(localize(&fetched, Some("pt")).title.base(), "Sobre");
		assert_eq!(localize(&fetched, None).title.base(), "אודות");
	}

	#[tokio::test]
	async fn test_duplicate_slug_conflicts() {
		let repo = make_repo().await;
		repo.create(&Page::new("home", Translated::new("בית"))).await.unwrap();

		let err = repo
			.create(&Page::new("home", Translated::new("בית 2")))
			.await
			.unwrap_err();
		assert!(matches!(err, DbError::Conflict(_)));
	}

	#[tokio::test]
	async fn test_slug_is_reusable_after_soft_delete() {
		let repo = make_repo().await;
		let first = Page::new("home", Translated::new("בית"));
		repo.create(&first).await.unwrap();
		repo.soft_delete(&first.id).await.unwrap();

		repo.create(&Page::new("home", Translated::new("בית חדש"))).await.unwrap();
		assert_eq!(repo.list().await.unwrap().len(), 1);
	}

	#[tokio::test]
	async fn test_soft_deleted_pages_are_hidden() {
		let repo = make_repo().await;
		let page = published("terms", Translated::new("תנאים"));
		repo.create(&page).await.unwrap();
		repo.soft_delete(&page.id).await.unwrap();

		assert!(repo.get(&page.id).await.unwrap().is_none());
		assert!(repo.get_published_by_slug("terms").await.unwrap().is_none());
		assert!(repo.list().await.unwrap().is_empty());

		let err = repo.soft_delete(&page.id).await.unwrap_err();
		assert!(matches!(err, DbError::NotFound(_)));
	}

	#[tokio::test]
	async fn test_drafts_are_not_public() {
		let repo = make_repo().await;
		repo.create(&Page::new("draft", Translated::new("טיוטה"))).await.unwrap();
		repo.create(&published("live", Translated::new("חי"))).await.unwrap();

		let public = repo.list_published().await.unwrap();
		assert_eq!(public.len(), 1);
		assert_eq!(public[0].slug, "live");
		assert!(repo.get_published_by_slug("draft").await.unwrap().is_none());
		assert_eq!(repo.list().await.unwrap().len(), 2);
	}

	#[tokio::test]
	async fn test_update_rewrites_row() {
		let repo = make_repo().await;
		let mut page = Page::new("services", Translated::new("שירותים"));
		repo.create(&page).await.unwrap();

		page.status = PageStatus::Published;
		page.title.set_variant(Language::En, Some("Services".to_string()));
		page.updated_by = Some("u-2".to_string());
		page.updated_at = Utc::now();
		repo.update(&page).await.unwrap();

		let fetched = repo.get(&page.id).await.unwrap().unwrap();
		assert!(fetched.is_published());
		assert_eq!(fetched.title.variant(Language::En), Some("Services"));
		assert_eq!(fetched.updated_by.as_deref(), Some("u-2"));
	}

	#[tokio::test]
	async fn test_update_missing_page_is_not_found() {
		let repo = make_repo().await;
		let page = Page::new("ghost", Translated::new("רוח"));
		let err = repo.update(&page).await.unwrap_err();
		assert!(matches!(err, DbError::NotFound(_)));
	}
}
