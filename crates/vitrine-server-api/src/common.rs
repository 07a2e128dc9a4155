// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use serde::{Deserialize, Serialize};
use vitrine_common_i18n::{Language, Translated};

#[cfg(feature = "openapi")]
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct ErrorResponse {
	pub error: String,
	pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct SuccessResponse {
	pub message: String,
}

/// `?lang=` on public endpoints. Unsupported codes behave like no code.
#[derive(Debug, Clone, Default, Deserialize)]
#[cfg_attr(feature = "openapi", derive(IntoParams))]
pub struct LangQuery {
	pub lang: Option<String>,
}

/// Build a translatable value from its request columns.
pub fn translated(base: String, en: Option<String>, pt: Option<String>) -> Translated {
	Translated::from_columns(Some(base), en, pt)
}

/// Apply the provided columns to a translatable value. `None` keeps the
/// stored column; an empty translation clears it.
pub fn patch_translated(
	field: &mut Translated,
	base: Option<String>,
	en: Option<String>,
	pt: Option<String>,
) {
	if let Some(base) = base {
		field.set_base(base);
	}
	if en.is_some() {
		field.set_variant(Language::En, en);
	}
	if pt.is_some() {
		field.set_variant(Language::Pt, pt);
	}
}

pub(crate) fn en(field: &Translated) -> Option<String> {
	field.variant_column(Language::En)
}

pub(crate) fn pt(field: &Translated) -> Option<String> {
	field.variant_column(Language::Pt)
}
