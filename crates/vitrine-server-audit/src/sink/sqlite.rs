// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::error::AuditSinkError;
use crate::event::AuditLogEntry;
use crate::sink::AuditSink;

/// Persists entries to the `audit_logs` table.
pub struct SqliteAuditSink {
	pool: SqlitePool,
}

impl SqliteAuditSink {
	pub fn new(pool: SqlitePool) -> Self {
		Self { pool }
	}
}

#[async_trait]
impl AuditSink for SqliteAuditSink {
	fn name(&self) -> &str {
		"sqlite"
	}

	async fn publish(&self, entry: Arc<AuditLogEntry>) -> Result<(), AuditSinkError> {
		sqlx::query(
			r#"
			INSERT INTO audit_logs (
				id, created_at, user_id, user_name, user_role,
				action, entity_type, entity_id, entity_name, details
			) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
			"#,
		)
		.bind(entry.id.to_string())
		.bind(entry.timestamp.to_rfc3339())
		.bind(&entry.user_id)
		.bind(&entry.user_name)
		.bind(&entry.user_role)
		.bind(entry.action.as_str())
		.bind(entry.entity_type.as_str())
		.bind(&entry.entity_id)
		.bind(&entry.entity_name)
		.bind(&entry.details)
		.execute(&self.pool)
		.await
		.map_err(|e| {
			if is_transient_error(&e) {
				AuditSinkError::Transient(format!("database error: {e}"))
			} else {
				AuditSinkError::Permanent(format!("database error: {e}"))
			}
		})?;

		Ok(())
	}

	async fn health_check(&self) -> Result<(), AuditSinkError> {
		sqlx::query("SELECT 1")
			.execute(&self.pool)
			.await
			.map_err(|e| AuditSinkError::Transient(format!("health check failed: {e}")))?;
		Ok(())
	}
}

fn is_transient_error(e: &sqlx::Error) -> bool {
	match e {
		sqlx::Error::Io(_) | sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => true,
		sqlx::Error::Database(db_err) => {
			let msg = db_err.message().to_lowercase();
			msg.contains("busy") || msg.contains("locked")
		}
		_ => false,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::event::{AuditAction, AuditEntityType};
	use sqlx::sqlite::SqlitePoolOptions;
	use sqlx::Row;

	async fn pool_with_table() -> SqlitePool {
		let pool = SqlitePoolOptions::new()
			.max_connections(1)
			.connect("sqlite::memory:")
			.await
			.unwrap();
		sqlx::query(
			r#"
			CREATE TABLE audit_logs (
				id TEXT PRIMARY KEY,
				created_at TEXT NOT NULL,
				user_id TEXT NOT NULL,
				user_name TEXT NOT NULL,
				user_role TEXT,
				action TEXT NOT NULL,
				entity_type TEXT NOT NULL,
				entity_id TEXT NOT NULL,
				entity_name TEXT,
				details TEXT
			)
			"#,
		)
		.execute(&pool)
		.await
		.unwrap();
		pool
	}

	#[tokio::test]
	async fn test_publish_inserts_row() {
		let pool = pool_with_table().await;
		let sink = SqliteAuditSink::new(pool.clone());
		let entry = AuditLogEntry::builder(AuditAction::Create, AuditEntityType::Faq, "f-1")
			.entity_name("Why?")
			.build();

		sink.publish(Arc::new(entry)).await.unwrap();

		let row = sqlx::query("SELECT entity_type, action, entity_name FROM audit_logs")
			.fetch_one(&pool)
			.await
			.unwrap();
		assert_eq!(row.get::<String, _>("entity_type"), "faq");
		assert_eq!(row.get::<String, _>("action"), "create");
		assert_eq!(row.get::<Option<String>, _>("entity_name").as_deref(), Some("Why?"));
	}

	#[tokio::test]
	async fn test_missing_table_is_permanent_error() {
		let pool = SqlitePoolOptions::new()
			.max_connections(1)
			.connect("sqlite::memory:")
			.await
			.unwrap();
		let sink = SqliteAuditSink::new(pool);
		let entry =
			AuditLogEntry::builder(AuditAction::Update, AuditEntityType::Setting, "bulk").build();

		let err = sink.publish(Arc::new(entry)).await.unwrap_err();
		assert!(matches!(err, AuditSinkError::Permanent(_)));
		assert!(sink.health_check().await.is_ok());
	}
}
