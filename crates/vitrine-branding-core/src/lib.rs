// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Logo presentation for the Vitrine site chrome.
//!
//! A [`BrandingConfig`] is read from a settings snapshot and passed to
//! [`resolve_logo`] together with the [`RenderContext`] being drawn. The
//! footer uses its own logo group when any footer value is set and inherits
//! the main logo otherwise.
//!
//! ```
//! use vitrine_branding_core::{resolve_logo, BrandingConfig, LogoPresentation, RenderContext};
//!
//! let config = BrandingConfig::default();
//! let logo = resolve_logo(&config, RenderContext::Navbar);
//! assert_eq!(
//! 	logo,
//! 	LogoPresentation::Text {
//! 		prefix: "GROUP".into(),
//! 		suffix: "CONSULT".into(),
//! 		font_size_px: 45,
//! 	}
//! );
//! ```

mod config;
mod context;
mod logo;

pub use config::{
	parse_size, BrandingConfig, LogoSettings, DEFAULT_LOGO_PREFIX, DEFAULT_LOGO_SIZE,
	DEFAULT_LOGO_SUFFIX,
};
pub use context::{RenderContext, UnknownContext};
pub use logo::{resolve_all, resolve_logo, LogoPresentation, FONT_SIZE_RATIO};
