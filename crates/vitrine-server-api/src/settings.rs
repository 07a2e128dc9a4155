// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use vitrine_branding_core::{resolve_all, BrandingConfig, LogoPresentation, RenderContext};
use vitrine_content_core::{settings_for_group, SettingId, SettingType, SiteSetting, BRANDING_GROUP};
use vitrine_server_db::SettingValueUpdate;

use crate::common::{en, pt};

#[cfg(feature = "openapi")]
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct SettingResponse {
	pub id: String,
	pub key: String,
	pub value: String,
	pub value_en: Option<String>,
	pub value_pt: Option<String>,
	pub group: String,
	pub label: String,
	pub setting_type: SettingType,
	pub order: i64,
	pub updated_by: Option<String>,
	pub updated_at: DateTime<Utc>,
}

impl From<&SiteSetting> for SettingResponse {
	fn from(setting: &SiteSetting) -> Self {
		Self {
			id: setting.id.to_string(),
			key: setting.key.clone(),
			value: setting.value().base().to_string(),
			value_en: en(setting.value()),
			value_pt: pt(setting.value()),
			group: setting.group.clone(),
			label: setting.label.clone(),
			setting_type: setting.setting_type,
			order: setting.order,
			updated_by: setting.updated_by.clone(),
			updated_at: setting.updated_at,
		}
	}
}

#[derive(Debug, Clone, Default, Deserialize)]
#[cfg_attr(feature = "openapi", derive(IntoParams))]
pub struct GroupQuery {
	/// Leave the logo and favicon keys out of the group.
	#[serde(default)]
	pub hide_branding: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[cfg_attr(feature = "openapi", derive(IntoParams))]
pub struct LogoQuery {
	/// `navbar`, `sidebar` or `footer`. Anything else is the navbar.
	pub context: Option<String>,
}

impl LogoQuery {
	pub fn render_context(&self) -> RenderContext {
		RenderContext::from_param(self.context.as_deref())
	}
}

/// New value for a single setting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct UpdateSettingRequest {
	pub value: String,
	pub value_en: Option<String>,
	pub value_pt: Option<String>,
}

impl UpdateSettingRequest {
	pub fn into_update(self, id: SettingId) -> SettingValueUpdate {
		SettingValueUpdate {
			id,
			value: self.value,
			value_en: self.value_en,
			value_pt: self.value_pt,
		}
	}
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct BulkSettingItem {
	pub id: String,
	pub value: String,
	pub value_en: Option<String>,
	pub value_pt: Option<String>,
}

impl BulkSettingItem {
	pub fn into_update(self) -> Result<SettingValueUpdate, <SettingId as FromStr>::Err> {
		let id = self.id.parse()?;
		Ok(SettingValueUpdate {
			id,
			value: self.value,
			value_en: self.value_en,
			value_pt: self.value_pt,
		})
	}
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct BulkUpdateSettingsRequest {
	pub settings: Vec<BulkSettingItem>,
}

impl BulkUpdateSettingsRequest {
	/// Parse every id up front so a malformed one rejects the whole batch.
	pub fn into_updates(self) -> Result<Vec<SettingValueUpdate>, <SettingId as FromStr>::Err> {
		self.settings
			.into_iter()
			.map(BulkSettingItem::into_update)
			.collect()
	}
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct ContextLogo {
	pub context: RenderContext,
	pub logo: LogoPresentation,
}

/// Branding settings plus what each part of the site chrome should draw.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct BrandingResponse {
	pub settings: Vec<SettingResponse>,
	pub config: BrandingConfig,
	pub logos: Vec<ContextLogo>,
}

impl BrandingResponse {
	/// Derive branding from a complete settings snapshot.
	pub fn from_snapshot(settings: &[SiteSetting]) -> Self {
		let config = BrandingConfig::from_settings(settings);
		let logos = resolve_all(&config)
			.into_iter()
			.map(|(context, logo)| ContextLogo { context, logo })
			.collect();
		Self {
			settings: settings_for_group(settings, BRANDING_GROUP, false)
				.into_iter()
				.map(SettingResponse::from)
				.collect(),
			config,
			logos,
		}
	}
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct BulkUpdateSettingsResponse {
	pub message: String,
	pub settings: Vec<SettingResponse>,
	pub branding: BrandingResponse,
}

#[cfg(test)]
mod tests {
	use super::*;
	use vitrine_common_i18n::Translated;
	use vitrine_content_core::{default_settings, find_setting_by_key};

	#[test]
	fn test_branding_from_seeded_snapshot() {
		let branding = BrandingResponse::from_snapshot(&default_settings());

		assert_eq!(branding.settings.len(), 9);
		assert_eq!(branding.settings[0].key, "logo_prefix");
		assert_eq!(branding.logos.len(), 3);
		assert_eq!(branding.logos[0].context, RenderContext::Navbar);
		assert_eq!(
			branding.logos[0].logo,
			LogoPresentation::Text {
				prefix: "GROUP".to_string(),
				suffix: "CONSULT".to_string(),
				font_size_px: 45,
			}
		);
	}

	#[test]
	fn test_branding_reflects_footer_override() {
		let mut settings = default_settings();
		for s in settings.iter_mut().filter(|s| s.key == "footer_logo_prefix") {
			s.set_value(Translated::new("FOOT"));
		}
		let branding = BrandingResponse::from_snapshot(&settings);
		let footer = branding
			.logos
			.iter()
			.find(|l| l.context == RenderContext::Footer)
			.map(|l| l.logo.clone());
		assert_eq!(
			footer,
			Some(LogoPresentation::Text {
				prefix: "FOOT".to_string(),
				suffix: String::new(),
				font_size_px: 45,
			})
		);
	}

	#[test]
	fn test_bulk_request_rejects_bad_id() {
		let settings = default_settings();
		let id = find_setting_by_key(&settings, "logo_size").unwrap().id;
		let ok = BulkUpdateSettingsRequest {
			settings: vec![BulkSettingItem {
				id: id.to_string(),
				value: "200".to_string(),
				value_en: None,
				value_pt: None,
			}],
		};
		let updates = ok.into_updates().unwrap();
		assert_eq!(updates, vec![SettingValueUpdate::new(id, "200")]);

		let bad = BulkUpdateSettingsRequest {
			settings: vec![BulkSettingItem {
				id: "not-a-uuid".to_string(),
				value: "x".to_string(),
				value_en: None,
				value_pt: None,
			}],
		};
		assert!(bad.into_updates().is_err());
	}

	#[test]
	fn test_logo_query_is_lenient() {
		let query = LogoQuery {
			context: Some("sidebar".to_string()),
		};
		assert_eq!(query.render_context(), RenderContext::Sidebar);
		assert_eq!(LogoQuery::default().render_context(), RenderContext::Navbar);
	}
}
