// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Key and group lookups over a flat settings snapshot.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use vitrine_common_i18n::resolve_language;

use crate::ids::SettingId;
use crate::setting::SiteSetting;

/// Setting group holding the logo and favicon keys.
pub const BRANDING_GROUP: &str = "branding";

/// The closed set of settings that drive the site's branding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum BrandingKey {
	LogoUrl,
	LogoPrefix,
	LogoSuffix,
	LogoSize,
	FooterLogoUrl,
	FooterLogoPrefix,
	FooterLogoSuffix,
	FooterLogoSize,
	FaviconUrl,
}

impl BrandingKey {
	pub const ALL: [BrandingKey; 9] = [
		BrandingKey::LogoUrl,
		BrandingKey::LogoPrefix,
		BrandingKey::LogoSuffix,
		BrandingKey::LogoSize,
		BrandingKey::FooterLogoUrl,
		BrandingKey::FooterLogoPrefix,
		BrandingKey::FooterLogoSuffix,
		BrandingKey::FooterLogoSize,
		BrandingKey::FaviconUrl,
	];

	pub fn as_str(self) -> &'static str {
		match self {
			BrandingKey::LogoUrl => "logo_url",
			BrandingKey::LogoPrefix => "logo_prefix",
			BrandingKey::LogoSuffix => "logo_suffix",
			BrandingKey::LogoSize => "logo_size",
			BrandingKey::FooterLogoUrl => "footer_logo_url",
			BrandingKey::FooterLogoPrefix => "footer_logo_prefix",
			BrandingKey::FooterLogoSuffix => "footer_logo_suffix",
			BrandingKey::FooterLogoSize => "footer_logo_size",
			BrandingKey::FaviconUrl => "favicon_url",
		}
	}

	pub fn is_branding_key(key: &str) -> bool {
		key.parse::<BrandingKey>().is_ok()
	}
}

impl fmt::Display for BrandingKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownBrandingKey(pub String);

impl fmt::Display for UnknownBrandingKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "unknown branding key '{}'", self.0)
	}
}

impl std::error::Error for UnknownBrandingKey {}

impl FromStr for BrandingKey {
	type Err = UnknownBrandingKey;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		BrandingKey::ALL
			.into_iter()
			.find(|k| k.as_str() == s)
			.ok_or_else(|| UnknownBrandingKey(s.to_string()))
	}
}

pub fn find_setting_by_key<'a>(settings: &'a [SiteSetting], key: &str) -> Option<&'a SiteSetting> {
	settings.iter().find(|s| s.key == key)
}

pub fn find_setting_by_id<'a>(settings: &'a [SiteSetting], id: &SettingId) -> Option<&'a SiteSetting> {
	settings.iter().find(|s| &s.id == id)
}

/// Base value for `key`, or an empty string when the key is missing.
pub fn get_value(settings: &[SiteSetting], key: &str) -> String {
	find_setting_by_key(settings, key)
		.map(|s| s.value().base().to_string())
		.unwrap_or_default()
}

/// Lookup restricted to the branding keys. Anything outside that set is
/// reported as not found.
pub fn find_branding_setting<'a>(settings: &'a [SiteSetting], key: &str) -> Option<&'a SiteSetting> {
	let key: BrandingKey = key.parse().ok()?;
	find_setting_by_key(settings, key.as_str())
}

pub fn branding_value(settings: &[SiteSetting], key: BrandingKey) -> String {
	get_value(settings, key.as_str())
}

/// Settings of one group sorted by `order`. With `hide_branding` the branding
/// keys are left out.
pub fn settings_for_group<'a>(
	settings: &'a [SiteSetting],
	group: &str,
	hide_branding: bool,
) -> Vec<&'a SiteSetting> {
	let mut matched: Vec<&SiteSetting> = settings
		.iter()
		.filter(|s| s.group == group)
		.filter(|s| !(hide_branding && BrandingKey::is_branding_key(&s.key)))
		.collect();
	matched.sort_by_key(|s| s.order);
	matched
}

/// Map of key to effective value in the requested language.
pub fn localized_map(settings: &[SiteSetting], requested: Option<&str>) -> BTreeMap<String, String> {
	let language = resolve_language(requested);
	settings
		.iter()
		.map(|s| (s.key.clone(), s.resolved_value(language).to_string()))
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::setting::default_settings;

	#[test]
	fn test_get_value_missing_key_is_empty() {
		assert_eq!(get_value(&[], "logo_prefix"), "");
		assert_eq!(get_value(&default_settings(), "nope"), "");
	}

	#[test]
	fn test_key_and_id_resolve_to_same_record() {
		let settings = default_settings();
		let by_key = find_setting_by_key(&settings, "site_name").unwrap();
		let by_id = find_setting_by_id(&settings, &by_key.id).unwrap();
		assert_eq!(by_key, by_id);
	}

	#[test]
	fn test_branding_lookup_is_closed() {
		let settings = default_settings();
		assert!(find_branding_setting(&settings, "logo_prefix").is_some());
		assert!(find_branding_setting(&settings, "site_name").is_none());
		assert!(find_branding_setting(&settings, "logo_color").is_none());
	}

	#[test]
	fn test_group_hides_branding_keys() {
		let settings = default_settings();
		assert_eq!(settings_for_group(&settings, BRANDING_GROUP, false).len(), 9);
		assert!(settings_for_group(&settings, BRANDING_GROUP, true).is_empty());

		let general = settings_for_group(&settings, "general", true);
		let keys: Vec<_> = general.iter().map(|s| s.key.as_str()).collect();
		assert_eq!(keys, ["site_name", "site_description", "hero_title", "hero_subtitle"]);
	}

	#[test]
	fn test_localized_map_uses_language() {
		let settings = default_settings();
		let en = localized_map(&settings, Some("en"));
		assert_eq!(en["address"], "Israel | Portugal");
		let fallback = localized_map(&settings, Some("fr"));
		assert_eq!(fallback["address"], "ישראל | פורטוגל");
		assert_eq!(fallback.len(), settings.len());
	}

	#[test]
	fn test_branding_key_round_trip() {
		for key in BrandingKey::ALL {
			assert_eq!(key.as_str().parse::<BrandingKey>().unwrap(), key);
		}
	}
}
