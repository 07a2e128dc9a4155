// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use chrono::Utc;
use sqlx::sqlite::SqlitePool;
use vitrine_content_core::{Testimonial, TestimonialId};

use crate::error::{DbError, Result};
use crate::row::{parse_id, parse_timestamp, translated, BindTranslated};

const TESTIMONIAL_COLUMNS: &str = r#"
	id, name,
	role, role_en, role_pt,
	company, company_en, company_pt,
	content, content_en, content_pt,
	image_url, sort_order, is_active,
	created_by, updated_by, created_at, updated_at
"#;

#[derive(Clone)]
pub struct TestimonialRepository {
	pool: SqlitePool,
}

impl TestimonialRepository {
	pub fn new(pool: SqlitePool) -> Self {
		Self { pool }
	}

	#[tracing::instrument(skip(self, testimonial), fields(testimonial_id = %testimonial.id))]
	pub async fn create(&self, testimonial: &Testimonial) -> Result<()> {
		sqlx::query(
			r#"
			INSERT INTO testimonials (
				id, name,
				role, role_en, role_pt,
				company, company_en, company_pt,
				content, content_en, content_pt,
				image_url, sort_order, is_active,
				created_by, updated_by, created_at, updated_at
			)
			VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
			"#,
		)
		.bind(testimonial.id.to_string())
		.bind(&testimonial.name)
		.bind_translated(&testimonial.role)
		.bind_translated(&testimonial.company)
		.bind_translated(&testimonial.content)
		.bind(&testimonial.image_url)
		.bind(testimonial.order)
		.bind(testimonial.is_active)
		.bind(&testimonial.created_by)
		.bind(&testimonial.updated_by)
		.bind(testimonial.created_at.to_rfc3339())
		.bind(testimonial.updated_at.to_rfc3339())
		.execute(&self.pool)
		.await?;

		Ok(())
	}

	#[tracing::instrument(skip(self), fields(testimonial_id = %id))]
	pub async fn get(&self, id: &TestimonialId) -> Result<Option<Testimonial>> {
		let row = sqlx::query(&format!(
			"SELECT {TESTIMONIAL_COLUMNS} FROM testimonials WHERE id = ? AND deleted_at IS NULL"
		))
		.bind(id.to_string())
		.fetch_optional(&self.pool)
		.await?;

		row.map(|r| row_to_testimonial(&r)).transpose()
	}

	#[tracing::instrument(skip(self))]
	pub async fn list(&self) -> Result<Vec<Testimonial>> {
		let rows = sqlx::query(&format!(
			r#"
			SELECT {TESTIMONIAL_COLUMNS} FROM testimonials
			WHERE deleted_at IS NULL
			ORDER BY sort_order ASC, created_at ASC
			"#
		))
		.fetch_all(&self.pool)
		.await?;

		rows.iter().map(row_to_testimonial).collect()
	}

	#[tracing::instrument(skip(self))]
	pub async fn list_active(&self) -> Result<Vec<Testimonial>> {
		let rows = sqlx::query(&format!(
			r#"
			SELECT {TESTIMONIAL_COLUMNS} FROM testimonials
			WHERE is_active = 1 AND deleted_at IS NULL
			ORDER BY sort_order ASC, created_at ASC
			"#
		))
		.fetch_all(&self.pool)
		.await?;

		rows.iter().map(row_to_testimonial).collect()
	}

	/// Live testimonial by the quoted person's name.
	pub async fn find_by_name(&self, name: &str) -> Result<Option<Testimonial>> {
		let row = sqlx::query(&format!(
			r#"
			SELECT {TESTIMONIAL_COLUMNS} FROM testimonials
			WHERE name = ? AND deleted_at IS NULL
			LIMIT 1
			"#
		))
		.bind(name)
		.fetch_optional(&self.pool)
		.await?;

		row.map(|r| row_to_testimonial(&r)).transpose()
	}

	#[tracing::instrument(skip(self, testimonial), fields(testimonial_id = %testimonial.id))]
	pub async fn update(&self, testimonial: &Testimonial) -> Result<()> {
		let result = sqlx::query(
			r#"
			UPDATE testimonials SET
				name = ?,
				role = ?, role_en = ?, role_pt = ?,
				company = ?, company_en = ?, company_pt = ?,
				content = ?, content_en = ?, content_pt = ?,
				image_url = ?, sort_order = ?, is_active = ?,
				updated_by = ?, updated_at = ?
			WHERE id = ? AND deleted_at IS NULL
			"#,
		)
		.bind(&testimonial.name)
		.bind_translated(&testimonial.role)
		.bind_translated(&testimonial.company)
		.bind_translated(&testimonial.content)
		.bind(&testimonial.image_url)
		.bind(testimonial.order)
		.bind(testimonial.is_active)
		.bind(&testimonial.updated_by)
		.bind(testimonial.updated_at.to_rfc3339())
		.bind(testimonial.id.to_string())
		.execute(&self.pool)
		.await?;

		if result.rows_affected() == 0 {
			return Err(DbError::NotFound(format!("testimonial {}", testimonial.id)));
		}
		Ok(())
	}

	#[tracing::instrument(skip(self), fields(testimonial_id = %id))]
	pub async fn soft_delete(&self, id: &TestimonialId) -> Result<()> {
		let now = Utc::now().to_rfc3339();
		let result = sqlx::query(
			r#"
			UPDATE testimonials SET deleted_at = ?, updated_at = ?
			WHERE id = ? AND deleted_at IS NULL
			"#,
		)
		.bind(&now)
		.bind(&now)
		.bind(id.to_string())
		.execute(&self.pool)
		.await?;

		if result.rows_affected() == 0 {
			return Err(DbError::NotFound(format!("testimonial {id}")));
		}
		Ok(())
	}
}

fn row_to_testimonial(row: &sqlx::sqlite::SqliteRow) -> Result<Testimonial> {
	use sqlx::Row;

	Ok(Testimonial {
		id: parse_id(row, "id")?,
		name: row.get("name"),
		role: translated(row, "role"),
		company: translated(row, "company"),
		content: translated(row, "content"),
		image_url: row.get("image_url"),
		order: row.get("sort_order"),
		is_active: row.get("is_active"),
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

	async fn make_repo() -> TestimonialRepository {
		TestimonialRepository::new(create_test_pool().await)
	}

	#[tokio::test]
	async fn test_public_list_localizes_role_and_company() {
		let repo = make_repo().await;
		let mut t = Testimonial::new("דני כהן", Translated::new("ליווי מצוין"));
		t.role = Translated::new("סמנכ״ל טכנולוגיות").with_variant(Language::En, "VP Technology");
		t.company = Translated::new("טק סולושנס").with_variant(Language::En, "Tech Solutions Ltd.");
		repo.create(&t).await.unwrap();

		let active = repo.list_active().await.unwrap();
		let english = localize(&active[0], Some("en"));
		assert_eq!(english.name, "דני כהן");
		assert_eq!(english.role.base(), "VP Technology");
		assert_eq!(english.company.base(), "Tech Solutions Ltd.");
		assert_eq!(english.content.base(), "ליווי מצוין");
	}

	#[tokio::test]
	async fn test_inactive_and_deleted_are_hidden_from_public() {
		let repo = make_repo().await;
		let mut inactive = Testimonial::new("שרה לוי", Translated::new("תודה"));
		inactive.is_active = false;
		let deleted = Testimonial::new("יוסי", Translated::new("מעולה"));
		repo.create(&inactive).await.unwrap();
		repo.create(&deleted).await.unwrap();
		repo.soft_delete(&deleted.id).await.unwrap();

		assert!(repo.list_active().await.unwrap().is_empty());
		assert_eq!(repo.list().await.unwrap().len(), 1);
		assert!(repo.find_by_name("יוסי").await.unwrap().is_none());
		assert!(repo.find_by_name("שרה לוי").await.unwrap().is_some());
	}

	#[tokio::test]
	async fn test_update() {
		let repo = make_repo().await;
		let mut t = Testimonial::new("דני כהן", Translated::new("טוב"));
		repo.create(&t).await.unwrap();

		t.order = 5;
		t.content.set_variant(Language::Pt, Some("Bom".to_string()));
		repo.update(&t).await.unwrap();

		let fetched = repo.get(&t.id).await.unwrap().unwrap();
		assert_eq!(fetched.order, 5);
		assert_eq!(fetched.content.variant(Language::Pt), Some("Bom"));
	}
}
