// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Read side of the audit log. Entries are written by the audit pipeline's
//! SQLite sink.

use sqlx::sqlite::{SqlitePool, SqliteRow};
use sqlx::Row;
use uuid::Uuid;
use vitrine_server_audit::{AuditEntityType, AuditLogEntry};

use crate::error::{DbError, Result};
use crate::row::{parse_enum, parse_timestamp};

pub const DEFAULT_AUDIT_LIMIT: i64 = 50;
pub const MAX_AUDIT_LIMIT: i64 = 200;

/// Filter and paging for the audit log listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditLogQuery {
	pub limit: Option<i64>,
	pub offset: Option<i64>,
	pub entity_type: Option<AuditEntityType>,
}

/// One page of audit entries plus the total number of matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditLogPage {
	pub logs: Vec<AuditLogEntry>,
	pub total: i64,
	pub limit: i64,
	pub offset: i64,
}

#[derive(Clone)]
pub struct AuditLogRepository {
	pool: SqlitePool,
}

impl AuditLogRepository {
	pub fn new(pool: SqlitePool) -> Self {
		Self { pool }
	}

	/// Entries newest first. The limit defaults to 50 and is capped at 200.
	#[tracing::instrument(skip(self))]
	pub async fn query(&self, query: &AuditLogQuery) -> Result<AuditLogPage> {
		let limit = query
			.limit
			.filter(|l| *l > 0)
			.unwrap_or(DEFAULT_AUDIT_LIMIT)
			.min(MAX_AUDIT_LIMIT);
		let offset = query.offset.unwrap_or(0).max(0);

		let mut conditions = vec!["1=1"];
		if query.entity_type.is_some() {
			conditions.push("entity_type = ?");
		}
		let where_clause = conditions.join(" AND ");

		let count_sql = format!("SELECT COUNT(*) as cnt FROM audit_logs WHERE {where_clause}");
		let mut count_query = sqlx::query(&count_sql);
		if let Some(entity_type) = query.entity_type {
			count_query = count_query.bind(entity_type.as_str());
		}
		let total: i64 = count_query.fetch_one(&self.pool).await?.get("cnt");

		let data_sql = format!(
			"SELECT id, created_at, user_id, user_name, user_role, action, entity_type, \
			 entity_id, entity_name, details \
			 FROM audit_logs WHERE {where_clause} ORDER BY created_at DESC LIMIT ? OFFSET ?"
		);
		let mut data_query = sqlx::query(&data_sql);
		if let Some(entity_type) = query.entity_type {
			data_query = data_query.bind(entity_type.as_str());
		}
		let rows = data_query
			.bind(limit)
			.bind(offset)
			.fetch_all(&self.pool)
			.await?;

		let logs = rows.iter().map(row_to_entry).collect::<Result<Vec<_>>>()?;
		Ok(AuditLogPage {
			logs,
			total,
			limit,
			offset,
		})
	}

	/// The `limit` most recent entries.
	#[tracing::instrument(skip(self))]
	pub async fn recent(&self, limit: i64) -> Result<Vec<AuditLogEntry>> {
		let rows = sqlx::query(
			r#"
			SELECT id, created_at, user_id, user_name, user_role, action, entity_type,
				entity_id, entity_name, details
			FROM audit_logs
			ORDER BY created_at DESC
			LIMIT ?
			"#,
		)
		.bind(limit)
		.fetch_all(&self.pool)
		.await?;

		rows.iter().map(row_to_entry).collect()
	}
}

fn row_to_entry(row: &SqliteRow) -> Result<AuditLogEntry> {
	let id: String = row.get("id");
	Ok(AuditLogEntry {
		id: Uuid::parse_str(&id).map_err(|e| DbError::Internal(e.to_string()))?,
		timestamp: parse_timestamp(row, "created_at")?,
		user_id: row.get("user_id"),
		user_name: row.get("user_name"),
		user_role: row.get("user_role"),
		action: parse_enum(row, "action")?,
		entity_type: parse_enum(row, "entity_type")?,
		entity_id: row.get("entity_id"),
		entity_name: row.get("entity_name"),
		details: row.get("details"),
	})
}
