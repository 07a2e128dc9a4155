// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use chrono::Utc;
use sqlx::sqlite::{SqlitePool, SqliteRow};
use sqlx::{Sqlite, Transaction};
use vitrine_common_i18n::Language;
use vitrine_content_core::{SettingDefinition, SettingId, SiteSetting};

use crate::error::{DbError, Result};
use crate::row::{parse_enum, parse_id, parse_timestamp, translated, BindTranslated};

const SETTING_COLUMNS: &str = r#"
	id, setting_key, value, value_en, value_pt,
	setting_group, label, setting_type, sort_order, updated_by, updated_at
"#;

/// New value for one setting.
///
/// A `None` translation keeps the stored one; `Some("")` clears it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingValueUpdate {
	pub id: SettingId,
	pub value: String,
	pub value_en: Option<String>,
	pub value_pt: Option<String>,
}

impl SettingValueUpdate {
	pub fn new(id: SettingId, value: impl Into<String>) -> Self {
		Self {
			id,
			value: value.into(),
			value_en: None,
			value_pt: None,
		}
	}

	pub fn apply(&self, setting: &mut SiteSetting) {
		let mut value = setting.value().clone();
		value.set_base(self.value.clone());
		if let Some(en) = &self.value_en {
			value.set_variant(Language::En, Some(en.clone()));
		}
		if let Some(pt) = &self.value_pt {
			value.set_variant(Language::Pt, Some(pt.clone()));
		}
		setting.set_value(value);
	}
}

#[derive(Clone)]
pub struct SettingsRepository {
	pool: SqlitePool,
}

impl SettingsRepository {
	pub fn new(pool: SqlitePool) -> Self {
		Self { pool }
	}

	/// Every setting, ordered by group then display order.
	#[tracing::instrument(skip(self))]
	pub async fn list(&self) -> Result<Vec<SiteSetting>> {
		let rows = sqlx::query(&format!(
			"SELECT {SETTING_COLUMNS} FROM site_settings ORDER BY setting_group ASC, sort_order ASC"
		))
		.fetch_all(&self.pool)
		.await?;

		rows.iter().map(row_to_setting).collect()
	}

	#[tracing::instrument(skip(self))]
	pub async fn list_group(&self, group: &str) -> Result<Vec<SiteSetting>> {
		let rows = sqlx::query(&format!(
			"SELECT {SETTING_COLUMNS} FROM site_settings WHERE setting_group = ? ORDER BY sort_order ASC"
		))
		.bind(group)
		.fetch_all(&self.pool)
		.await?;

		rows.iter().map(row_to_setting).collect()
	}

	#[tracing::instrument(skip(self), fields(setting_id = %id))]
	pub async fn get(&self, id: &SettingId) -> Result<Option<SiteSetting>> {
		let row = sqlx::query(&format!("SELECT {SETTING_COLUMNS} FROM site_settings WHERE id = ?"))
			.bind(id.to_string())
			.fetch_optional(&self.pool)
			.await?;

		row.map(|r| row_to_setting(&r)).transpose()
	}

	#[tracing::instrument(skip(self))]
	pub async fn get_by_key(&self, key: &str) -> Result<Option<SiteSetting>> {
		let row = sqlx::query(&format!(
			"SELECT {SETTING_COLUMNS} FROM site_settings WHERE setting_key = ?"
		))
		.bind(key)
		.fetch_optional(&self.pool)
		.await?;

		row.map(|r| row_to_setting(&r)).transpose()
	}

	/// Apply one value update and return the stored setting.
	#[tracing::instrument(skip(self, update), fields(setting_id = %update.id))]
	pub async fn update_value(
		&self,
		update: &SettingValueUpdate,
		updated_by: Option<&str>,
	) -> Result<SiteSetting> {
		let mut tx = self.pool.begin().await?;
		let setting = apply_in_tx(&mut tx, update, updated_by).await?;
		tx.commit().await?;
		Ok(setting)
	}

	/// Apply a batch of value updates atomically.
	///
	/// # Errors
	/// Returns `DbError::NotFound` and leaves every setting untouched if any
	/// id is unknown.
	#[tracing::instrument(skip(self, updates), fields(count = updates.len()))]
	pub async fn bulk_update(
		&self,
		updates: &[SettingValueUpdate],
		updated_by: Option<&str>,
	) -> Result<Vec<SiteSetting>> {
		let mut tx = self.pool.begin().await?;
		let mut applied = Vec::with_capacity(updates.len());
		for update in updates {
			applied.push(apply_in_tx(&mut tx, update, updated_by).await?);
		}
		tx.commit().await?;

		tracing::debug!(count = applied.len(), "settings updated");
		Ok(applied)
	}

	/// Insert a seeded setting, or refresh the metadata of an existing one.
	///
	/// Label, group, type and order follow the definition; the stored value
	/// is never overwritten.
	#[tracing::instrument(skip(self, definition), fields(key = definition.key))]
	pub async fn upsert_definition(&self, definition: &SettingDefinition) -> Result<()> {
		let setting = definition.to_setting();
		sqlx::query(
			r#"
			INSERT INTO site_settings (
				id, setting_key, value, value_en, value_pt,
				setting_group, label, setting_type, sort_order, updated_by, updated_at
			)
			VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
			ON CONFLICT(setting_key) DO UPDATE SET
				setting_group = excluded.setting_group,
				label = excluded.label,
				setting_type = excluded.setting_type,
				sort_order = excluded.sort_order
			"#,
		)
		.bind(setting.id.to_string())
		.bind(&setting.key)
		.bind_translated(setting.value())
		.bind(&setting.group)
		.bind(&setting.label)
		.bind(setting.setting_type.as_str())
		.bind(setting.order)
		.bind(&setting.updated_by)
		.bind(setting.updated_at.to_rfc3339())
		.execute(&self.pool)
		.await?;

		Ok(())
	}
}

async fn apply_in_tx(
	tx: &mut Transaction<'_, Sqlite>,
	update: &SettingValueUpdate,
	updated_by: Option<&str>,
) -> Result<SiteSetting> {
	let row = sqlx::query(&format!("SELECT {SETTING_COLUMNS} FROM site_settings WHERE id = ?"))
		.bind(update.id.to_string())
		.fetch_optional(&mut **tx)
		.await?
		.ok_or_else(|| DbError::NotFound(format!("setting {}", update.id)))?;

	let mut setting = row_to_setting(&row)?;
	update.apply(&mut setting);
	setting.updated_by = updated_by.map(str::to_string);
	setting.updated_at = Utc::now();

	sqlx::query(
		r#"
		UPDATE site_settings SET
			value = ?, value_en = ?, value_pt = ?,
			updated_by = ?, updated_at = ?
		WHERE id = ?
		"#,
	)
	.bind_translated(setting.value())
	.bind(&setting.updated_by)
	.bind(setting.updated_at.to_rfc3339())
	.bind(setting.id.to_string())
	.execute(&mut **tx)
	.await?;

	Ok(setting)
}

fn row_to_setting(row: &SqliteRow) -> Result<SiteSetting> {
	use sqlx::Row;

	let mut setting = SiteSetting::new(
		row.get::<String, _>("setting_key"),
		row.get::<String, _>("setting_group"),
		row.get::<String, _>("label"),
		parse_enum(row, "setting_type")?,
		row.get("sort_order"),
		translated(row, "value"),
	);
	setting.id = parse_id(row, "id")?;
	setting.updated_by = row.get("updated_by");
	setting.updated_at = parse_timestamp(row, "updated_at")?;
	Ok(setting)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::testing::create_test_pool;
	use vitrine_branding_core::{resolve_logo, BrandingConfig, LogoPresentation, RenderContext};
	use vitrine_content_core::{find_setting_by_key, localized_map, SETTING_DEFINITIONS};

	async fn seeded_repo() -> SettingsRepository {
		let repo = SettingsRepository::new(create_test_pool().await);
		for definition in SETTING_DEFINITIONS {
			repo.upsert_definition(definition).await.unwrap();
		}
		repo
	}

	async fn id_of(repo: &SettingsRepository, key: &str) -> SettingId {
		repo.get_by_key(key).await.unwrap().unwrap().id
	}

	#[tokio::test]
	async fn test_list_is_grouped_and_ordered() {
		let repo = seeded_repo().await;
		let all = repo.list().await.unwrap();
		assert_eq!(all.len(), SETTING_DEFINITIONS.len());

		let keys: Vec<_> = all.iter().map(|s| (s.group.as_str(), s.order)).collect();
		let mut sorted = keys.clone();
		sorted.sort();
		assert_eq!(keys, sorted);

		let branding = repo.list_group("branding").await.unwrap();
		assert_eq!(branding.first().map(|s| s.key.as_str()), Some("logo_prefix"));
	}

	#[tokio::test]
	async fn test_lookup_by_key_and_id_agree() {
		let repo = seeded_repo().await;
		let by_key = repo.get_by_key("logo_size").await.unwrap().unwrap();
		let by_id = repo.get(&by_key.id).await.unwrap().unwrap();
		assert_eq!(by_key, by_id);
		assert_eq!(by_id.value().base(), "160");
	}

	#[tokio::test]
	async fn test_reseeding_keeps_edited_values() {
		let repo = seeded_repo().await;
		let id = id_of(&repo, "site_name").await;
		repo.update_value(&SettingValueUpdate::new(id, "ACME"), Some("u-1"))
			.await
			.unwrap();

		for definition in SETTING_DEFINITIONS {
			repo.upsert_definition(definition).await.unwrap();
		}

		let setting = repo.get_by_key("site_name").await.unwrap().unwrap();
		assert_eq!(setting.id, id);
		assert_eq!(setting.value().base(), "ACME");
		assert_eq!(setting.updated_by.as_deref(), Some("u-1"));
	}

	#[tokio::test]
	async fn test_update_keeps_unspecified_translations() {
		let repo = seeded_repo().await;
		let id = id_of(&repo, "hero_title").await;
		let before = repo.get(&id).await.unwrap().unwrap();
		assert!(before.value().variant(Language::En).is_some());

		let mut update = SettingValueUpdate::new(id, "כותרת חדשה");
		update.value_pt = Some(String::new());
		let after = repo.update_value(&update, None).await.unwrap();

		assert_eq!(after.value().base(), "כותרת חדשה");
		assert_eq!(after.value().variant(Language::En), before.value().variant(Language::En));
		assert_eq!(after.value().variant(Language::Pt), None);
	}

	#[tokio::test]
	async fn test_non_text_settings_never_store_translations() {
		let repo = seeded_repo().await;
		let id = id_of(&repo, "logo_size").await;
		let mut update = SettingValueUpdate::new(id, "200");
		update.value_en = Some("999".to_string());
		repo.update_value(&update, None).await.unwrap();

		let stored = repo.get(&id).await.unwrap().unwrap();
		assert_eq!(stored.value().base(), "200");
		assert_eq!(stored.value().variant(Language::En), None);
	}

	#[tokio::test]
	async fn test_bulk_update_rolls_back_on_unknown_id() {
		let repo = seeded_repo().await;
		let id = id_of(&repo, "logo_prefix").await;
		let updates = vec![
			SettingValueUpdate::new(id, "CHANGED"),
			SettingValueUpdate::new(SettingId::generate(), "x"),
		];

		let err = repo.bulk_update(&updates, None).await.unwrap_err();
		assert!(matches!(err, DbError::NotFound(_)));
		let prefix = repo.get(&id).await.unwrap().unwrap();
		assert_eq!(prefix.value().base(), "GROUP");
	}

	#[tokio::test]
	async fn test_bulk_footer_prefix_feeds_branding() {
		let repo = seeded_repo().await;
		let id = id_of(&repo, "footer_logo_prefix").await;
		repo.bulk_update(&[SettingValueUpdate::new(id, "FOOT")], Some("u-1"))
			.await
			.unwrap();

		let snapshot = repo.list().await.unwrap();
		let config = BrandingConfig::from_settings(&snapshot);
		assert_eq!(
			resolve_logo(&config, RenderContext::Footer),
			LogoPresentation::Text {
				prefix: "FOOT".to_string(),
				suffix: String::new(),
				font_size_px: 45,
			}
		);
		assert_eq!(
			resolve_logo(&config, RenderContext::Navbar),
			LogoPresentation::Text {
				prefix: "GROUP".to_string(),
				suffix: "CONSULT".to_string(),
				font_size_px: 45,
			}
		);
	}

	#[tokio::test]
	async fn test_public_map_localizes_text_settings() {
		let repo = seeded_repo().await;
		let snapshot = repo.list().await.unwrap();

		let english = localized_map(&snapshot, Some("en"));
		let hebrew = localized_map(&snapshot, Some("klingon"));
		let address = find_setting_by_key(&snapshot, "address").unwrap();
		assert_eq!(english.get("address").map(String::as_str), address.value().variant(Language::En));
		assert_eq!(hebrew.get("address").map(String::as_str), Some(address.value().base()));
		assert_eq!(english.get("logo_size").map(String::as_str), Some("160"));
	}
}
