// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

/// Implement [`vitrine_common_i18n::Localizable`] for a record whose
/// translatable attributes are plain [`vitrine_common_i18n::Translated`]
/// fields. The field list doubles as the record's `FIELDS` declaration.
macro_rules! impl_localizable {
	($ty:ty { $($field:ident),+ $(,)? }) => {
		impl vitrine_common_i18n::Localizable for $ty {
			const FIELDS: &'static [&'static str] = &[$(stringify!($field)),+];

			fn translated(&self, field: &str) -> Option<&vitrine_common_i18n::Translated> {
				match field {
					$(stringify!($field) => Some(&self.$field),)+
					_ => None,
				}
			}

			fn translated_mut(
				&mut self,
				field: &str,
			) -> Option<&mut vitrine_common_i18n::Translated> {
				match field {
					$(stringify!($field) => Some(&mut self.$field),)+
					_ => None,
				}
			}
		}
	};
}

pub(crate) use impl_localizable;
