// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Site settings: a fixed, seeded set of key/value records edited from the
//! admin panel.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use vitrine_common_i18n::{Language, Localizable, Translated};

use crate::error::ContentError;
use crate::ids::SettingId;

/// Editor kind of a setting. Only text kinds carry translations; the others
/// hold one language-agnostic value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum SettingType {
	Text,
	Textarea,
	Image,
	Range,
	Email,
	Phone,
	Url,
}

impl SettingType {
	pub fn is_translatable(self) -> bool {
		matches!(self, SettingType::Text | SettingType::Textarea)
	}

	pub fn as_str(self) -> &'static str {
		match self {
			SettingType::Text => "text",
			SettingType::Textarea => "textarea",
			SettingType::Image => "image",
			SettingType::Range => "range",
			SettingType::Email => "email",
			SettingType::Phone => "phone",
			SettingType::Url => "url",
		}
	}
}

impl fmt::Display for SettingType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for SettingType {
	type Err = ContentError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"text" => Ok(SettingType::Text),
			"textarea" => Ok(SettingType::Textarea),
			"image" => Ok(SettingType::Image),
			"range" => Ok(SettingType::Range),
			"email" => Ok(SettingType::Email),
			"phone" => Ok(SettingType::Phone),
			"url" => Ok(SettingType::Url),
			other => Err(ContentError::InvalidSettingType(other.to_string())),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteSetting {
	pub id: SettingId,
	pub key: String,
	value: Translated,
	pub group: String,
	pub label: String,
	pub setting_type: SettingType,
	pub order: i64,
	pub updated_by: Option<String>,
	pub updated_at: DateTime<Utc>,
}

impl SiteSetting {
	pub fn new(
		key: impl Into<String>,
		group: impl Into<String>,
		label: impl Into<String>,
		setting_type: SettingType,
		order: i64,
		value: Translated,
	) -> Self {
		let mut setting = Self {
			id: SettingId::generate(),
			key: key.into(),
			value: Translated::default(),
			group: group.into(),
			label: label.into(),
			setting_type,
			order,
			updated_by: None,
			updated_at: Utc::now(),
		};
		setting.set_value(value);
		setting
	}

	pub fn value(&self) -> &Translated {
		&self.value
	}

	/// Replace the stored value. Variants are dropped for non-text kinds.
	pub fn set_value(&mut self, value: Translated) {
		self.value = if self.setting_type.is_translatable() {
			value
		} else {
			Translated::new(value.base())
		};
	}

	/// Effective display value for `language`.
	pub fn resolved_value(&self, language: Language) -> &str {
		self.value.resolve(language)
	}
}

impl Localizable for SiteSetting {
	const FIELDS: &'static [&'static str] = &["value"];

	fn translated(&self, field: &str) -> Option<&Translated> {
		(field == "value").then_some(&self.value)
	}

	fn translated_mut(&mut self, field: &str) -> Option<&mut Translated> {
		(field == "value").then_some(&mut self.value)
	}
}

/// A row of the seeded settings table.
#[derive(Debug, Clone, Copy)]
pub struct SettingDefinition {
	pub key: &'static str,
	pub group: &'static str,
	pub label: &'static str,
	pub setting_type: SettingType,
	pub order: i64,
	pub value: &'static str,
	pub value_en: Option<&'static str>,
	pub value_pt: Option<&'static str>,
}

impl SettingDefinition {
	pub fn to_setting(&self) -> SiteSetting {
		let mut value = Translated::new(self.value);
		value.set_variant(Language::En, self.value_en.map(str::to_string));
		value.set_variant(Language::Pt, self.value_pt.map(str::to_string));
		SiteSetting::new(
			self.key,
			self.group,
			self.label,
			self.setting_type,
			self.order,
			value,
		)
	}
}

const fn def(
	key: &'static str,
	group: &'static str,
	label: &'static str,
	setting_type: SettingType,
	order: i64,
	value: &'static str,
	translations: Option<(&'static str, &'static str)>,
) -> SettingDefinition {
	let (value_en, value_pt) = match translations {
		Some((en, pt)) => (Some(en), Some(pt)),
		None => (None, None),
	};
	SettingDefinition {
		key,
		group,
		label,
		setting_type,
		order,
		value,
		value_en,
		value_pt,
	}
}

/// The complete, closed set of site settings.
pub const SETTING_DEFINITIONS: &[SettingDefinition] = &[
	def(
		"site_name",
		"general",
		"שם האתר",
		SettingType::Text,
		1,
		"GROUPCONSULT",
		Some(("GROUPCONSULT", "GROUPCONSULT")),
	),
	def(
		"site_description",
		"general",
		"תיאור האתר",
		SettingType::Textarea,
		2,
		"שילוב של אסטרטגיה, ניהול והקצאת הון לראייה עסקית שלמה ומדידה",
		Some((
			"A combination of strategy, management and capital allocation for a complete and measurable business perspective",
			"Uma combinacao de estrategia, gestao e alocacao de capital para uma perspectiva empresarial completa e mensuravel",
		)),
	),
	def(
		"hero_title",
		"general",
		"כותרת ראשית (Hero)",
		SettingType::Text,
		3,
		"אסטרטגיה, ניהול והקצאת הון: ראייה אחת אינטגרטיבית",
		Some((
			"Strategy, Management & Capital Allocation: One Integrative Vision",
			"Estrategia, Gestao e Alocacao de Capital: Uma Visao Integrativa",
		)),
	),
	def(
		"hero_subtitle",
		"general",
		"תת-כותרת (Hero)",
		SettingType::Textarea,
		4,
		"אנחנו מלווים ארגונים ומנהלים בתהליכי צמיחה, שיפור ביצועים והשקעות הון, תוך דגש על יישום פרקטי ומדיד בשטח.",
		Some((
			"We partner with organizations and executives through growth, performance improvement and capital investment processes, with a focus on practical, measurable implementation.",
			"Acompanhamos organizacoes e executivos em processos de crescimento, melhoria de desempenho e investimento de capital, com foco em implementacao pratica e mensuravel.",
		)),
	),
	def("phone", "contact", "טלפון", SettingType::Phone, 1, "050-1234567", None),
	def(
		"email",
		"contact",
		"דוא״ל",
		SettingType::Email,
		2,
		"office@groupconsult.co.il",
		None,
	),
	def(
		"address",
		"contact",
		"כתובת / מוקדי פעילות",
		SettingType::Text,
		3,
		"ישראל | פורטוגל",
		Some(("Israel | Portugal", "Israel | Portugal")),
	),
	def(
		"meta_title",
		"seo",
		"כותרת SEO",
		SettingType::Text,
		1,
		"קבוצת ייעוץ - אסטרטגיה, ניהול והקצאת הון",
		Some((
			"Consulting Group - Strategy, Management & Capital Allocation",
			"Grupo de Consultoria - Estrategia, Gestao e Alocacao de Capital",
		)),
	),
	def(
		"meta_description",
		"seo",
		"תיאור SEO",
		SettingType::Textarea,
		2,
		"קבוצת ייעוץ המתמחה בייעוץ אסטרטגי, ליווי מנהלים והשקעות נדל״ן",
		Some((
			"A consulting group specializing in strategic consulting, executive coaching and real estate investment",
			"Um grupo de consultoria especializado em consultoria estrategica, coaching executivo e investimento imobiliario",
		)),
	),
	def(
		"logo_prefix",
		"branding",
		"לוגו - חלק ראשון (צבע בהיר)",
		SettingType::Text,
		1,
		"GROUP",
		None,
	),
	def(
		"logo_suffix",
		"branding",
		"לוגו - חלק שני (צבע כהה)",
		SettingType::Text,
		2,
		"CONSULT",
		None,
	),
	def(
		"logo_url",
		"branding",
		"לוגו תמונה (URL) - אופציונלי, מחליף טקסט",
		SettingType::Image,
		3,
		"",
		None,
	),
	def(
		"logo_size",
		"branding",
		"גודל לוגו ניווט",
		SettingType::Range,
		4,
		"160",
		None,
	),
	def(
		"footer_logo_prefix",
		"branding",
		"לוגו פוטר - חלק ראשון (צבע בהיר)",
		SettingType::Text,
		5,
		"",
		None,
	),
	def(
		"footer_logo_suffix",
		"branding",
		"לוגו פוטר - חלק שני (צבע כהה)",
		SettingType::Text,
		6,
		"",
		None,
	),
	def(
		"footer_logo_url",
		"branding",
		"לוגו פוטר תמונה (URL) - אופציונלי",
		SettingType::Image,
		7,
		"",
		None,
	),
	def(
		"footer_logo_size",
		"branding",
		"גודל לוגו פוטר",
		SettingType::Range,
		8,
		"160",
		None,
	),
	def(
		"favicon_url",
		"branding",
		"Favicon (URL)",
		SettingType::Image,
		9,
		"",
		None,
	),
];

/// The seeded settings as records.
pub fn default_settings() -> Vec<SiteSetting> {
	SETTING_DEFINITIONS.iter().map(SettingDefinition::to_setting).collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashSet;
	use vitrine_common_i18n::localize;

	#[test]
	fn test_definition_keys_unique() {
		let keys: HashSet<_> = SETTING_DEFINITIONS.iter().map(|d| d.key).collect();
		assert_eq!(keys.len(), SETTING_DEFINITIONS.len());
	}

	#[test]
	fn test_non_text_settings_drop_variants() {
		let setting = SiteSetting::new(
			"logo_size",
			"branding",
			"size",
			SettingType::Range,
			4,
			Translated::new("160").with_variant(Language::En, "999"),
		);
		assert_eq!(setting.resolved_value(Language::En), "160");
		assert_eq!(localize(&setting, Some("en")).value().base(), "160");
	}

	#[test]
	fn test_text_settings_localize() {
		let settings = default_settings();
		let address = settings.iter().find(|s| s.key == "address").unwrap();
		assert_eq!(address.resolved_value(Language::En), "Israel | Portugal");
		assert_eq!(address.resolved_value(Language::He), "ישראל | פורטוגל");
	}

	#[test]
	fn test_setting_type_round_trip() {
		for ty in [
			SettingType::Text,
			SettingType::Textarea,
			SettingType::Image,
			SettingType::Range,
			SettingType::Email,
			SettingType::Phone,
			SettingType::Url,
		] {
			assert_eq!(ty.as_str().parse::<SettingType>().unwrap(), ty);
		}
		assert!("color".parse::<SettingType>().is_err());
	}
}
