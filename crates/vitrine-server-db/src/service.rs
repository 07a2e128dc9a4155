// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use chrono::Utc;
use sqlx::sqlite::SqlitePool;
use vitrine_content_core::{Service, ServiceId};

use crate::error::{unique_violation, DbError, Result};
use crate::row::{parse_id, parse_timestamp, translated, BindTranslated};

const SERVICE_COLUMNS: &str = r#"
	id, slug,
	title, title_en, title_pt,
	short_description, short_description_en, short_description_pt,
	full_content, full_content_en, full_content_pt,
	icon, image_url, sort_order, is_active,
	created_by, updated_by, created_at, updated_at
"#;

#[derive(Clone)]
pub struct ServiceRepository {
	pool: SqlitePool,
}

impl ServiceRepository {
	pub fn new(pool: SqlitePool) -> Self {
		Self { pool }
	}

	#[tracing::instrument(skip(self, service), fields(service_id = %service.id, slug = %service.slug))]
	pub async fn create(&self, service: &Service) -> Result<()> {
		sqlx::query(
			r#"
			INSERT INTO services (
				id, slug,
				title, title_en, title_pt,
				short_description, short_description_en, short_description_pt,
				full_content, full_content_en, full_content_pt,
				icon, image_url, sort_order, is_active,
				created_by, updated_by, created_at, updated_at
			)
			VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
			"#,
		)
		.bind(service.id.to_string())
		.bind(&service.slug)
		.bind_translated(&service.title)
		.bind_translated(&service.short_description)
		.bind_translated(&service.full_content)
		.bind(&service.icon)
		.bind(&service.image_url)
		.bind(service.order)
		.bind(service.is_active)
		.bind(&service.created_by)
		.bind(&service.updated_by)
		.bind(service.created_at.to_rfc3339())
		.bind(service.updated_at.to_rfc3339())
		.execute(&self.pool)
		.await
		.map_err(|e| {
			unique_violation(e, || format!("service slug '{}' already exists", service.slug))
		})?;

		Ok(())
	}

	#[tracing::instrument(skip(self), fields(service_id = %id))]
	pub async fn get(&self, id: &ServiceId) -> Result<Option<Service>> {
		let row = sqlx::query(&format!(
			"SELECT {SERVICE_COLUMNS} FROM services WHERE id = ? AND deleted_at IS NULL"
		))
		.bind(id.to_string())
		.fetch_optional(&self.pool)
		.await?;

		row.map(|r| row_to_service(&r)).transpose()
	}

	/// All live services in display order.
	#[tracing::instrument(skip(self))]
	pub async fn list(&self) -> Result<Vec<Service>> {
		let rows = sqlx::query(&format!(
			r#"
			SELECT {SERVICE_COLUMNS} FROM services
			WHERE deleted_at IS NULL
			ORDER BY sort_order ASC, created_at ASC
			"#
		))
		.fetch_all(&self.pool)
		.await?;

		rows.iter().map(row_to_service).collect()
	}

	/// Live services shown on the public site, in display order.
	#[tracing::instrument(skip(self))]
	pub async fn list_active(&self) -> Result<Vec<Service>> {
		let rows = sqlx::query(&format!(
			r#"
			SELECT {SERVICE_COLUMNS} FROM services
			WHERE is_active = 1 AND deleted_at IS NULL
			ORDER BY sort_order ASC, created_at ASC
			"#
		))
		.fetch_all(&self.pool)
		.await?;

		rows.iter().map(row_to_service).collect()
	}

	#[tracing::instrument(skip(self))]
	pub async fn get_active_by_slug(&self, slug: &str) -> Result<Option<Service>> {
		let row = sqlx::query(&format!(
			r#"
			SELECT {SERVICE_COLUMNS} FROM services
			WHERE slug = ? AND is_active = 1 AND deleted_at IS NULL
			"#
		))
		.bind(slug)
		.fetch_optional(&self.pool)
		.await?;

		row.map(|r| row_to_service(&r)).transpose()
	}

	#[tracing::instrument(skip(self, service), fields(service_id = %service.id))]
	pub async fn update(&self, service: &Service) -> Result<()> {
		let result = sqlx::query(
			r#"
			UPDATE services SET
				slug = ?,
				title = ?, title_en = ?, title_pt = ?,
				short_description = ?, short_description_en = ?, short_description_pt = ?,
				full_content = ?, full_content_en = ?, full_content_pt = ?,
				icon = ?, image_url = ?, sort_order = ?, is_active = ?,
				updated_by = ?, updated_at = ?
			WHERE id = ? AND deleted_at IS NULL
			"#,
		)
		.bind(&service.slug)
		.bind_translated(&service.title)
		.bind_translated(&service.short_description)
		.bind_translated(&service.full_content)
		.bind(&service.icon)
		.bind(&service.image_url)
		.bind(service.order)
		.bind(service.is_active)
		.bind(&service.updated_by)
		.bind(service.updated_at.to_rfc3339())
		.bind(service.id.to_string())
		.execute(&self.pool)
		.await
		.map_err(|e| {
			unique_violation(e, || format!("service slug '{}' already exists", service.slug))
		})?;

		if result.rows_affected() == 0 {
			return Err(DbError::NotFound(format!("service {}", service.id)));
		}
		Ok(())
	}

	#[tracing::instrument(skip(self), fields(service_id = %id))]
	pub async fn soft_delete(&self, id: &ServiceId) -> Result<()> {
		let now = Utc::now().to_rfc3339();
		let result = sqlx::query(
			r#"
			UPDATE services SET deleted_at = ?, updated_at = ?
			WHERE id = ? AND deleted_at IS NULL
			"#,
		)
		.bind(&now)
		.bind(&now)
		.bind(id.to_string())
		.execute(&self.pool)
		.await?;

		if result.rows_affected() == 0 {
			return Err(DbError::NotFound(format!("service {id}")));
		}
		Ok(())
	}
}

fn row_to_service(row: &sqlx::sqlite::SqliteRow) -> Result<Service> {
	use sqlx::Row;

	Ok(Service {
		id: parse_id(row, "id")?,
		slug: row.get("slug"),
		title: translated(row, "title"),
		short_description: translated(row, "short_description"),
		full_content: translated(row, "full_content"),
		icon: row.get("icon"),
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
	use vitrine_common_i18n::{Language, Translated};

	async fn make_repo() -> ServiceRepository {
		ServiceRepository::new(create_test_pool().await)
	}

	fn service(slug: &str, order: i64) -> Service {
		let mut s = Service::new(slug, Translated::new(format!("שירות {slug}")));
		s.order = order;
		s
	}

	#[tokio::test]
	async fn test_list_is_in_display_order() {
		let repo = make_repo().await;
		repo.create(&service("real-estate", 3)).await.unwrap();
		repo.create(&service("strategy", 1)).await.unwrap();
		repo.create(&service("coaching", 2)).await.unwrap();

		let slugs: Vec<_> = repo.list().await.unwrap().into_iter().map(|s| s.slug).collect();
		assert_eq!(slugs, vec!["strategy", "coaching", "real-estate"]);
	}

	#[tokio::test]
	async fn test_inactive_services_are_not_public() {
		let repo = make_repo().await;
		let mut hidden = service("hidden", 1);
		hidden.is_active = false;
		repo.create(&hidden).await.unwrap();
		repo.create(&service("shown", 2)).await.unwrap();

		let active = repo.list_active().await.unwrap();
		assert_eq!(active.len(), 1);
		assert_eq!(active[0].slug, "shown");
		assert!(repo.get_active_by_slug("hidden").await.unwrap().is_none());
		assert!(repo.get(&hidden.id).await.unwrap().is_some());
	}

	#[tokio::test]
	async fn test_round_trip_keeps_icon_and_variants() {
		let repo = make_repo().await;
		let mut s = service("coaching", 2);
		s.icon = "Users".to_string();
		s.short_description = Translated::new("אימון").with_variant(Language::En, "Coaching");
		repo.create(&s).await.unwrap();

		let fetched = repo.get_active_by_slug("coaching").await.unwrap().unwrap();
		assert_eq!(fetched.icon, "Users");
		assert_eq!(fetched.short_description, s.short_description);
		assert_eq!(fetched.image_url, None);
	}

	#[tokio::test]
	async fn test_update_to_taken_slug_conflicts() {
		let repo = make_repo().await;
		repo.create(&service("strategy", 1)).await.unwrap();
		let mut other = service("coaching", 2);
		repo.create(&other).await.unwrap();

		other.slug = "strategy".to_string();
		let err = repo.update(&other).await.unwrap_err();
		assert!(matches!(err, DbError::Conflict(_)));
	}

	#[tokio::test]
	async fn test_soft_delete() {
		let repo = make_repo().await;
		let s = service("strategy", 1);
		repo.create(&s).await.unwrap();
		repo.soft_delete(&s.id).await.unwrap();

		assert!(repo.get(&s.id).await.unwrap().is_none());
		assert!(repo.list_active().await.unwrap().is_empty());
	}
}
