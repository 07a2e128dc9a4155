// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! A single translatable attribute: an authoritative base value plus optional
//! per-language variants.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::locale::Language;

/// A translatable attribute.
///
/// The base value holds the default-language text and is always present
/// (possibly empty). Variants are keyed by non-default language; empty
/// variants are never stored, so "missing", "null" and "empty" are the same
/// state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Translated {
	base: String,
	#[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
	variants: BTreeMap<Language, String>,
}

impl Translated {
	pub fn new(base: impl Into<String>) -> Self {
		Self {
			base: base.into(),
			variants: BTreeMap::new(),
		}
	}

	/// Build from the storage columns `F`, `F_en`, `F_pt`.
	///
	/// A missing base column yields an empty base rather than an error.
	pub fn from_columns(base: Option<String>, en: Option<String>, pt: Option<String>) -> Self {
		let mut field = Self::new(base.unwrap_or_default());
		field.set_variant(Language::En, en);
		field.set_variant(Language::Pt, pt);
		field
	}

	pub fn with_variant(mut self, language: Language, value: impl Into<String>) -> Self {
		self.set_variant(language, Some(value.into()));
		self
	}

	pub fn base(&self) -> &str {
		&self.base
	}

	pub fn set_base(&mut self, value: impl Into<String>) {
		self.base = value.into();
	}

	/// The stored variant for `language`. Always `None` for the default
	/// language, whose text lives in the base value.
	pub fn variant(&self, language: Language) -> Option<&str> {
		self.variants.get(&language).map(String::as_str)
	}

	/// Set or clear a variant. `None` and empty strings clear it. Writes for
	/// the default language are ignored.
	pub fn set_variant(&mut self, language: Language, value: Option<String>) {
		if language.is_default() {
			return;
		}
		match value.filter(|v| !v.is_empty()) {
			Some(v) => {
				self.variants.insert(language, v);
			}
			None => {
				self.variants.remove(&language);
			}
		}
	}

	/// Storage value for the `F_<lang>` column.
	pub fn variant_column(&self, language: Language) -> Option<String> {
		self.variant(language).map(str::to_string)
	}

	/// Effective display value for `language`: the variant when present,
	/// otherwise the base.
	pub fn resolve(&self, language: Language) -> &str {
		if language.is_default() {
			return &self.base;
		}
		self.variant(language).unwrap_or(&self.base)
	}

	/// Replace the base with the effective value for `language`, keeping the
	/// variants. Applying it twice yields the same value as applying it once.
	pub fn localize(&mut self, language: Language) {
		if language.is_default() {
			return;
		}
		if let Some(v) = self.variants.get(&language) {
			self.base = v.clone();
		}
	}
}

impl From<&str> for Translated {
	fn from(base: &str) -> Self {
		Self::new(base)
	}
}

impl From<String> for Translated {
	fn from(base: String) -> Self {
		Self::new(base)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn test_default_language_reads_base() {
		let field = Translated::new("שלום").with_variant(Language::En, "Hello");
		assert_eq!(field.resolve(Language::He), "שלום");
	}

	#[test]
	fn test_variant_used_when_present() {
		let field = Translated::new("שלום").with_variant(Language::En, "Hello");
		assert_eq!(field.resolve(Language::En), "Hello");
		assert_eq!(field.resolve(Language::Pt), "שלום");
	}

	#[test]
	fn test_empty_variant_is_absent() {
		let field = Translated::from_columns(
			Some("אודות".to_string()),
			Some(String::new()),
			Some("Sobre".to_string()),
		);
		assert_eq!(field.variant(Language::En), None);
		assert_eq!(field.resolve(Language::En), "אודות");
		assert_eq!(field.resolve(Language::Pt), "Sobre");
	}

	#[test]
	fn test_missing_base_is_empty() {
		let field = Translated::from_columns(None, None, None);
		assert_eq!(field.resolve(Language::En), "");
		assert_eq!(field.resolve(Language::He), "");
	}

	#[test]
	fn test_default_language_variant_ignored() {
		let field = Translated::new("base").with_variant(Language::He, "other");
		assert_eq!(field.variant(Language::He), None);
		assert_eq!(field.resolve(Language::He), "base");
	}

	#[test]
	fn test_clearing_variant() {
		let mut field = Translated::new("base").with_variant(Language::En, "en");
		field.set_variant(Language::En, None);
		assert_eq!(field.variant_column(Language::En), None);
	}

	fn any_language() -> impl Strategy<Value = Language> {
		prop_oneof![Just(Language::He), Just(Language::En), Just(Language::Pt)]
	}

	proptest! {
		#[test]
		fn localize_is_idempotent(
			base in ".{0,12}",
			en in proptest::option::of(".{0,12}"),
			pt in proptest::option::of(".{0,12}"),
			lang in any_language(),
		) {
			let field = Translated::from_columns(Some(base), en, pt);
			let mut once = field.clone();
			once.localize(lang);
			let mut twice = once.clone();
			twice.localize(lang);
			prop_assert_eq!(&once, &twice);
			prop_assert_eq!(once.base(), field.resolve(lang));
		}

		#[test]
		fn resolve_falls_back_to_base_when_variant_empty(base in ".{0,12}", lang in any_language()) {
			let field = Translated::from_columns(Some(base.clone()), Some(String::new()), None);
			prop_assert_eq!(field.resolve(lang), base.as_str());
		}
	}
}
