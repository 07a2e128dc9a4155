// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The closed set of languages the site is published in.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A supported content language.
///
/// Hebrew is the authoring language: every translatable field stores its
/// Hebrew text as the base value and the other languages as optional variants.
#[derive(
	Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
	#[default]
	He,
	En,
	Pt,
}

pub const DEFAULT_LANGUAGE: Language = Language::He;

/// Every supported language, default first.
pub const LANGUAGES: [Language; 3] = [Language::He, Language::En, Language::Pt];

impl Language {
	/// The two-letter code used in query parameters and column suffixes.
	pub fn code(self) -> &'static str {
		match self {
			Language::He => "he",
			Language::En => "en",
			Language::Pt => "pt",
		}
	}

	/// Parse an exact language code. Codes are case-sensitive, matching the
	/// values the site emits in its own links.
	pub fn from_code(code: &str) -> Option<Self> {
		match code {
			"he" => Some(Language::He),
			"en" => Some(Language::En),
			"pt" => Some(Language::Pt),
			_ => None,
		}
	}

	pub fn is_default(self) -> bool {
		self == DEFAULT_LANGUAGE
	}

	/// Languages that are stored as variants next to the base value.
	pub fn variants() -> impl Iterator<Item = Language> {
		LANGUAGES.into_iter().filter(|l| !l.is_default())
	}
}

impl fmt::Display for Language {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.code())
	}
}
