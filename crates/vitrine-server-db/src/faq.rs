// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use chrono::Utc;
use sqlx::sqlite::SqlitePool;
use vitrine_content_core::{Faq, FaqId};

use crate::error::{DbError, Result};
use crate::row::{parse_id, parse_timestamp, translated, BindTranslated};

const FAQ_COLUMNS: &str = r#"
	id,
	question, question_en, question_pt,
	answer, answer_en, answer_pt,
	sort_order, is_active, created_by, updated_by, created_at, updated_at
"#;

#[derive(Clone)]
pub struct FaqRepository {
	pool: SqlitePool,
}

impl FaqRepository {
	pub fn new(pool: SqlitePool) -> Self {
		Self { pool }
	}

	#[tracing::instrument(skip(self, faq), fields(faq_id = %faq.id))]
	pub async fn create(&self, faq: &Faq) -> Result<()> {
		sqlx::query(
			r#"
			INSERT INTO faqs (
				id,
				question, question_en, question_pt,
				answer, answer_en, answer_pt,
				sort_order, is_active, created_by, updated_by, created_at, updated_at
			)
			VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
			"#,
		)
		.bind(faq.id.to_string())
		.bind_translated(&faq.question)
		.bind_translated(&faq.answer)
		.bind(faq.order)
		.bind(faq.is_active)
		.bind(&faq.created_by)
		.bind(&faq.updated_by)
		.bind(faq.created_at.to_rfc3339())
		.bind(faq.updated_at.to_rfc3339())
		.execute(&self.pool)
		.await?;

		Ok(())
	}

	#[tracing::instrument(skip(self), fields(faq_id = %id))]
	pub async fn get(&self, id: &FaqId) -> Result<Option<Faq>> {
		let row = sqlx::query(&format!(
			"SELECT {FAQ_COLUMNS} FROM faqs WHERE id = ? AND deleted_at IS NULL"
		))
		.bind(id.to_string())
		.fetch_optional(&self.pool)
		.await?;

		row.map(|r| row_to_faq(&r)).transpose()
	}

	#[tracing::instrument(skip(self))]
	pub async fn list(&self) -> Result<Vec<Faq>> {
		let rows = sqlx::query(&format!(
			r#"
			SELECT {FAQ_COLUMNS} FROM faqs
			WHERE deleted_at IS NULL
			ORDER BY sort_order ASC, created_at ASC
			"#
		))
		.fetch_all(&self.pool)
		.await?;

		rows.iter().map(row_to_faq).collect()
	}

	#[tracing::instrument(skip(self))]
	pub async fn list_active(&self) -> Result<Vec<Faq>> {
		let rows = sqlx::query(&format!(
			r#"
			SELECT {FAQ_COLUMNS} FROM faqs
			WHERE is_active = 1 AND deleted_at IS NULL
			ORDER BY sort_order ASC, created_at ASC
			"#
		))
		.fetch_all(&self.pool)
		.await?;

		rows.iter().map(row_to_faq).collect()
	}

	/// Live entry whose base question matches exactly.
	pub async fn find_by_question(&self, question: &str) -> Result<Option<Faq>> {
		let row = sqlx::query(&format!(
			"SELECT {FAQ_COLUMNS} FROM faqs WHERE question = ? AND deleted_at IS NULL LIMIT 1"
		))
		.bind(question)
		.fetch_optional(&self.pool)
		.await?;

		row.map(|r| row_to_faq(&r)).transpose()
	}

	#[tracing::instrument(skip(self, faq), fields(faq_id = %faq.id))]
	pub async fn update(&self, faq: &Faq) -> Result<()> {
		let result = sqlx::query(
			r#"
			UPDATE faqs SET
				question = ?, question_en = ?, question_pt = ?,
				answer = ?, answer_en = ?, answer_pt = ?,
				sort_order = ?, is_active = ?, updated_by = ?, updated_at = ?
			WHERE id = ? AND deleted_at IS NULL
			"#,
		)
		.bind_translated(&faq.question)
		.bind_translated(&faq.answer)
		.bind(faq.order)
		.bind(faq.is_active)
		.bind(&faq.updated_by)
		.bind(faq.updated_at.to_rfc3339())
		.bind(faq.id.to_string())
		.execute(&self.pool)
		.await?;

		if result.rows_affected() == 0 {
			return Err(DbError::NotFound(format!("faq {}", faq.id)));
		}
		Ok(())
	}

	#[tracing::instrument(skip(self), fields(faq_id = %id))]
	pub async fn soft_delete(&self, id: &FaqId) -> Result<()> {
		let now = Utc::now().to_rfc3339();
		let result = sqlx::query(
			r#"
			UPDATE faqs SET deleted_at = ?, updated_at = ?
			WHERE id = ? AND deleted_at IS NULL
			"#,
		)
		.bind(&now)
		.bind(&now)
		.bind(id.to_string())
		.execute(&self.pool)
		.await?;

		if result.rows_affected() == 0 {
			return Err(DbError::NotFound(format!("faq {id}")));
		}
		Ok(())
	}
}

fn row_to_faq(row: &sqlx::sqlite::SqliteRow) -> Result<Faq> {
	use sqlx::Row;

	Ok(Faq {
		id: parse_id(row, "id")?,
		question: translated(row, "question"),
		answer: translated(row, "answer"),
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

	fn faq(question: &str, order: i64) -> Faq {
		let mut f = Faq::new(Translated::new(question), Translated::new("תשובה"));
		f.order = order;
		f
	}

	#[tokio::test]
	async fn test_active_list_is_ordered_and_localizable() {
		let repo = FaqRepository::new(create_test_pool().await);
		let mut second = faq("שאלה שנייה", 2);
		second.answer = Translated::new("כן").with_variant(Language::Pt, "Sim");
		repo.create(&second).await.unwrap();
		repo.create(&faq("שאלה ראשונה", 1)).await.unwrap();

		let active = repo.list_active().await.unwrap();
		assert_eq!(active.len(), 2);
		assert_eq!(active[0].question.base(), "שאלה ראשונה");
		assert_eq!(localize(&active[1], Some("pt")).answer.base(), "Sim");
		assert_eq!(localize(&active[1], Some("en")).answer.base(), "כן");
	}

	#[tokio::test]
	async fn test_find_by_question_and_delete() {
		let repo = FaqRepository::new(create_test_pool().await);
		let f = faq("כמה זמן?", 1);
		repo.create(&f).await.unwrap();

		assert_eq!(repo.find_by_question("כמה זמן?").await.unwrap().map(|f| f.id), Some(f.id));
		repo.soft_delete(&f.id).await.unwrap();
		assert!(repo.find_by_question("כמה זמן?").await.unwrap().is_none());
		assert!(matches!(repo.update(&f).await, Err(DbError::NotFound(_))));
	}
}
