// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Internationalization support for Vitrine.
//!
//! Content is authored in Hebrew and optionally translated to English and
//! Portuguese. Every translatable attribute is a [`Translated`] value: the
//! Hebrew base plus per-language variants. Reading an attribute for a
//! requested language falls back to the base whenever the variant is missing
//! or empty, and any language code outside the supported set behaves as if
//! no language was requested.
//!
//! Server messages (API errors and confirmations) are looked up by key with
//! [`t`] and [`t_fmt`] in gettext catalogs kept under `locales/<code>/`.
//!
//! # Example
//!
//! ```
//! use vitrine_common_i18n::{resolve_language, Language, Translated};
//!
//! let title = Translated::new("אודות").with_variant(Language::Pt, "Sobre");
//!
//! assert_eq!(title.resolve(resolve_language(Some("pt"))), "Sobre");
//! assert_eq!(title.resolve(resolve_language(Some("en"))), "אודות");
//! assert_eq!(title.resolve(resolve_language(Some("xx"))), "אודות");
//! ```

mod catalog;
mod field;
mod locale;
mod localize;
mod resolve;

pub use catalog::{t, t_fmt};
pub use field::Translated;
pub use locale::{Language, DEFAULT_LANGUAGE, LANGUAGES};
pub use localize::{localize, resolve_field, resolve_record, Localizable};
pub use resolve::resolve_language;
