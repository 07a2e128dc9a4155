// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use serde::{Deserialize, Serialize};
use vitrine_content_core::{branding_value, BrandingKey, SiteSetting};

pub const DEFAULT_LOGO_PREFIX: &str = "GROUP";
pub const DEFAULT_LOGO_SUFFIX: &str = "CONSULT";
pub const DEFAULT_LOGO_SIZE: u32 = 160;

/// Raw values of one logo group as stored in the settings table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct LogoSettings {
	pub url: String,
	pub prefix: String,
	pub suffix: String,
	pub size: String,
}

impl LogoSettings {
	/// Size in pixels. Missing, unparseable and non-positive values fall back
	/// to [`DEFAULT_LOGO_SIZE`].
	pub fn size_px(&self) -> u32 {
		parse_size(&self.size)
	}
}

/// Branding derived from a settings snapshot: the main logo and the optional
/// footer override.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct BrandingConfig {
	pub main: LogoSettings,
	pub footer: LogoSettings,
}

impl BrandingConfig {
	pub fn from_settings(settings: &[SiteSetting]) -> Self {
		let value = |key| branding_value(settings, key);
		Self {
			main: LogoSettings {
				url: value(BrandingKey::LogoUrl),
				prefix: value(BrandingKey::LogoPrefix),
				suffix: value(BrandingKey::LogoSuffix),
				size: value(BrandingKey::LogoSize),
			},
			footer: LogoSettings {
				url: value(BrandingKey::FooterLogoUrl),
				prefix: value(BrandingKey::FooterLogoPrefix),
				suffix: value(BrandingKey::FooterLogoSuffix),
				size: value(BrandingKey::FooterLogoSize),
			},
		}
	}

	/// The footer has its own identity once any of its url, prefix or suffix
	/// is set.
	pub fn footer_override_active(&self) -> bool {
		!self.footer.url.is_empty() || !self.footer.prefix.is_empty() || !self.footer.suffix.is_empty()
	}
}

pub fn parse_size(raw: &str) -> u32 {
	let raw = raw.trim();
	let parsed = match raw.parse::<i64>() {
		Ok(n) => Some(n),
		Err(_) => raw
			.parse::<f64>()
			.ok()
			.filter(|f| f.is_finite())
			.map(|f| f.trunc() as i64),
	};
	match parsed {
		Some(n) if n > 0 => u32::try_from(n).unwrap_or(u32::MAX),
		_ => {
			if !raw.is_empty() {
				tracing::debug!(raw, "invalid logo size, using default");
			}
			DEFAULT_LOGO_SIZE
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use vitrine_common_i18n::Translated;
	use vitrine_content_core::{default_settings, SettingType};

	#[test]
	fn test_parse_size() {
		assert_eq!(parse_size("200"), 200);
		assert_eq!(parse_size(" 90 "), 90);
		assert_eq!(parse_size("150.7"), 150);
		assert_eq!(parse_size(""), DEFAULT_LOGO_SIZE);
		assert_eq!(parse_size("big"), DEFAULT_LOGO_SIZE);
		assert_eq!(parse_size("NaN"), DEFAULT_LOGO_SIZE);
		assert_eq!(parse_size("0"), DEFAULT_LOGO_SIZE);
		assert_eq!(parse_size("-20"), DEFAULT_LOGO_SIZE);
	}

	#[test]
	fn test_seeded_settings_have_no_footer_override() {
		let config = BrandingConfig::from_settings(&default_settings());
		assert_eq!(config.main.prefix, "GROUP");
		assert_eq!(config.main.suffix, "CONSULT");
		assert_eq!(config.main.size_px(), 160);
		assert!(!config.footer_override_active());
	}

	#[test]
	fn test_any_footer_text_activates_override() {
		let mut settings = default_settings();
		for s in settings.iter_mut().filter(|s| s.key == "footer_logo_suffix") {
			s.set_value(Translated::new("END"));
		}
		assert!(BrandingConfig::from_settings(&settings).footer_override_active());
	}

	#[test]
	fn test_empty_snapshot_is_empty_config() {
		let config = BrandingConfig::from_settings(&[]);
		assert_eq!(config, BrandingConfig::default());

		let unrelated = vec![SiteSetting::new(
			"site_name",
			"general",
			"name",
			SettingType::Text,
			1,
			Translated::new("X"),
		)];
		assert_eq!(BrandingConfig::from_settings(&unrelated), BrandingConfig::default());
	}
}
