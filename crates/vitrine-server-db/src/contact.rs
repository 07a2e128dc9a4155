// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use sqlx::sqlite::SqlitePool;
use vitrine_content_core::{ContactId, ContactMessage};

use crate::error::{DbError, Result};
use crate::row::{parse_id, parse_timestamp};

/// Contact form submissions. Messages are removed with a hard delete.
#[derive(Clone)]
pub struct ContactRepository {
	pool: SqlitePool,
}

impl ContactRepository {
	pub fn new(pool: SqlitePool) -> Self {
		Self { pool }
	}

	#[tracing::instrument(skip(self, message), fields(contact_id = %message.id))]
	pub async fn create(&self, message: &ContactMessage) -> Result<()> {
		sqlx::query(
			r#"
			INSERT INTO contact_messages (id, name, email, phone, message, is_read, created_at)
			VALUES (?, ?, ?, ?, ?, ?, ?)
			"#,
		)
		.bind(message.id.to_string())
		.bind(&message.name)
		.bind(&message.email)
		.bind(&message.phone)
		.bind(&message.message)
		.bind(message.is_read)
		.bind(message.created_at.to_rfc3339())
		.execute(&self.pool)
		.await?;

		Ok(())
	}

	#[tracing::instrument(skip(self), fields(contact_id = %id))]
	pub async fn get(&self, id: &ContactId) -> Result<Option<ContactMessage>> {
		let row = sqlx::query(
			r#"
			SELECT id, name, email, phone, message, is_read, created_at
			FROM contact_messages
			WHERE id = ?
			"#,
		)
		.bind(id.to_string())
		.fetch_optional(&self.pool)
		.await?;

		row.map(|r| row_to_contact(&r)).transpose()
	}

	/// All messages, newest first.
	#[tracing::instrument(skip(self))]
	pub async fn list(&self) -> Result<Vec<ContactMessage>> {
		let rows = sqlx::query(
			r#"
			SELECT id, name, email, phone, message, is_read, created_at
			FROM contact_messages
			ORDER BY created_at DESC
			"#,
		)
		.fetch_all(&self.pool)
		.await?;

		rows.iter().map(row_to_contact).collect()
	}

	#[tracing::instrument(skip(self), fields(contact_id = %id))]
	pub async fn mark_read(&self, id: &ContactId) -> Result<ContactMessage> {
		let result = sqlx::query("UPDATE contact_messages SET is_read = 1 WHERE id = ?")
			.bind(id.to_string())
			.execute(&self.pool)
			.await?;

		if result.rows_affected() == 0 {
			return Err(DbError::NotFound(format!("contact message {id}")));
		}

		self.get(id)
			.await?
			.ok_or_else(|| DbError::NotFound(format!("contact message {id}")))
	}

	#[tracing::instrument(skip(self), fields(contact_id = %id))]
	pub async fn delete(&self, id: &ContactId) -> Result<()> {
		let result = sqlx::query("DELETE FROM contact_messages WHERE id = ?")
			.bind(id.to_string())
			.execute(&self.pool)
			.await?;

		if result.rows_affected() == 0 {
			return Err(DbError::NotFound(format!("contact message {id}")));
		}
		Ok(())
	}

	pub async fn count(&self) -> Result<i64> {
		let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM contact_messages")
			.fetch_one(&self.pool)
			.await?;
		Ok(count)
	}
}

fn row_to_contact(row: &sqlx::sqlite::SqliteRow) -> Result<ContactMessage> {
	use sqlx::Row;

	Ok(ContactMessage {
		id: parse_id(row, "id")?,
		name: row.get("name"),
		email: row.get("email"),
		phone: row.get("phone"),
		message: row.get("message"),
		is_read: row.get("is_read"),
		created_at: parse_timestamp(row, "created_at")?,
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::testing::create_test_pool;

	async fn make_repo() -> ContactRepository {
		ContactRepository::new(create_test_pool().await)
	}

	#[tokio::test]
	async fn test_submit_then_mark_read() {
		let repo = make_repo().await;
		let msg = ContactMessage::submit("ישראל", "israel@example.com", Some("050-9876543"), "שלום")
			.unwrap();
		repo.create(&msg).await.unwrap();

		let listed = repo.list().await.unwrap();
		assert_eq!(listed.len(), 1);
		assert!(!listed[0].is_read);
		assert_eq!(listed[0].phone.as_deref(), Some("050-9876543"));

		let read = repo.mark_read(&msg.id).await.unwrap();
		assert!(read.is_read);
	}

	#[tokio::test]
	async fn test_delete_is_permanent() {
		let repo = make_repo().await;
		let msg = ContactMessage::submit("Dana", "dana@example.com", None, "Hi").unwrap();
		repo.create(&msg).await.unwrap();

		repo.delete(&msg.id).await.unwrap();
		assert_eq!(repo.count().await.unwrap(), 0);
		assert!(matches!(repo.delete(&msg.id).await, Err(DbError::NotFound(_))));
		assert!(matches!(repo.mark_read(&msg.id).await, Err(DbError::NotFound(_))));
	}
}
