// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Column helpers shared by the repositories.

use chrono::{DateTime, Utc};
use sqlx::query::Query;
use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::{Row, Sqlite};
use uuid::Uuid;
use vitrine_common_i18n::{Language, Translated};

use crate::error::DbError;

pub(crate) type SqliteQuery<'q> = Query<'q, Sqlite, SqliteArguments<'q>>;

/// Bind a translatable field as its `<field>`, `<field>_en`, `<field>_pt`
/// columns, in that order.
pub(crate) trait BindTranslated {
	fn bind_translated(self, field: &Translated) -> Self;
}

impl BindTranslated for SqliteQuery<'_> {
	fn bind_translated(self, field: &Translated) -> Self {
		self.bind(field.base().to_string())
			.bind(field.variant_column(Language::En))
			.bind(field.variant_column(Language::Pt))
	}
}

pub(crate) fn translated(row: &SqliteRow, column: &str) -> Translated {
	let en = format!("{column}_en");
	let pt = format!("{column}_pt");
	Translated::from_columns(
		row.get(column),
		row.get(en.as_str()),
		row.get(pt.as_str()),
	)
}

pub(crate) fn parse_id<T: From<Uuid>>(row: &SqliteRow, column: &str) -> Result<T, DbError> {
	let raw: String = row.get(column);
	Uuid::parse_str(&raw)
		.map(T::from)
		.map_err(|e| DbError::Internal(format!("invalid {column}: {e}")))
}

pub(crate) fn parse_optional_id<T: From<Uuid>>(
	row: &SqliteRow,
	column: &str,
) -> Result<Option<T>, DbError> {
	let raw: Option<String> = row.get(column);
	raw.map(|s| {
		Uuid::parse_str(&s)
			.map(T::from)
			.map_err(|e| DbError::Internal(format!("invalid {column}: {e}")))
	})
	.transpose()
}

pub(crate) fn parse_timestamp(row: &SqliteRow, column: &str) -> Result<DateTime<Utc>, DbError> {
	let raw: String = row.get(column);
	DateTime::parse_from_rfc3339(&raw)
		.map(|d| d.with_timezone(&Utc))
		.map_err(|e| DbError::Internal(format!("invalid {column}: {e}")))
}

pub(crate) fn parse_enum<T: std::str::FromStr>(row: &SqliteRow, column: &str) -> Result<T, DbError>
where
	T::Err: std::fmt::Display,
{
	let raw: String = row.get(column);
	raw.parse()
		.map_err(|e: T::Err| DbError::Internal(format!("invalid {column}: {e}")))
}
