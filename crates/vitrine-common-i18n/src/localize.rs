// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Field- and record-level localization.

use std::borrow::Cow;

use crate::field::Translated;
use crate::resolve::resolve_language;

/// A record with a fixed set of translatable attributes.
///
/// `FIELDS` lists the logical names of every attribute that has a base value.
/// Callers localize with this list (or a subset of it) so a field without a
/// base can never be requested.
pub trait Localizable: Clone {
	const FIELDS: &'static [&'static str];

	fn translated(&self, field: &str) -> Option<&Translated>;

	fn translated_mut(&mut self, field: &str) -> Option<&mut Translated>;
}

/// Effective value of one field for the requested language.
///
/// Unknown field names resolve to an empty string.
pub fn resolve_field<R: Localizable>(record: &R, field: &str, requested: Option<&str>) -> String {
	let language = resolve_language(requested);
	match record.translated(field) {
		Some(value) => value.resolve(language).to_string(),
		None => {
			tracing::warn!(field, "requested field is not translatable");
			String::new()
		}
	}
}

/// Copy of `record` with each listed field replaced by its effective value.
///
/// Unlisted attributes and all variants pass through unchanged. For the
/// default language (or any unsupported code) the record is returned as is.
pub fn resolve_record<'a, R: Localizable>(
	record: &'a R,
	fields: &[&str],
	requested: Option<&str>,
) -> Cow<'a, R> {
	let language = resolve_language(requested);
	if language.is_default() {
		return Cow::Borrowed(record);
	}

	let mut localized = record.clone();
	for field in fields {
		match localized.translated_mut(field) {
			Some(value) => value.localize(language),
			None => tracing::warn!(field = *field, "skipping non-translatable field"),
		}
	}
	Cow::Owned(localized)
}

/// [`resolve_record`] over every declared field of the record type.
pub fn localize<'a, R: Localizable>(record: &'a R, requested: Option<&str>) -> Cow<'a, R> {
	resolve_record(record, R::FIELDS, requested)
}
