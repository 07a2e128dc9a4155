// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use serde::{Deserialize, Serialize};

use crate::config::{BrandingConfig, LogoSettings, DEFAULT_LOGO_PREFIX, DEFAULT_LOGO_SUFFIX};
use crate::context::RenderContext;

/// Text logos are drawn at this fraction of the logo size.
pub const FONT_SIZE_RATIO: f64 = 0.28;

/// What a renderer should draw for a logo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum LogoPresentation {
	/// Image with a fixed width. The height follows the image's aspect ratio.
	Image {
		url: String,
		width_px: u32,
		alt: String,
	},
	/// Two-tone wordmark.
	Text {
		prefix: String,
		suffix: String,
		font_size_px: u32,
	},
	/// The footer logo was explicitly blanked.
	None,
}

impl LogoPresentation {
	pub fn is_none(&self) -> bool {
		matches!(self, LogoPresentation::None)
	}
}

/// Compute the logo for one context.
///
/// Pure in `config`: results for different contexts never depend on each
/// other and may be computed in any order.
pub fn resolve_logo(config: &BrandingConfig, context: RenderContext) -> LogoPresentation {
	let use_footer = context == RenderContext::Footer && config.footer_override_active();

	let (group, prefix, suffix) = if use_footer {
		let group = &config.footer;
		if group.url.trim().is_empty()
			&& group.prefix.trim().is_empty()
			&& group.suffix.trim().is_empty()
		{
			return LogoPresentation::None;
		}
		(group, group.prefix.clone(), group.suffix.clone())
	} else {
		let group = &config.main;
		(
			group,
			or_default(&group.prefix, DEFAULT_LOGO_PREFIX),
			or_default(&group.suffix, DEFAULT_LOGO_SUFFIX),
		)
	};

	let size = context_size(group, context);
	let url = group.url.trim();
	if !url.is_empty() {
		return LogoPresentation::Image {
			url: url.to_string(),
			width_px: size,
			alt: alt_text(&prefix, &suffix),
		};
	}

	LogoPresentation::Text {
		prefix,
		suffix,
		font_size_px: (f64::from(size) * FONT_SIZE_RATIO).round() as u32,
	}
}

/// Presentation for every context, in [`RenderContext::ALL`] order.
pub fn resolve_all(config: &BrandingConfig) -> [(RenderContext, LogoPresentation); 3] {
	RenderContext::ALL.map(|context| (context, resolve_logo(config, context)))
}

fn context_size(group: &LogoSettings, context: RenderContext) -> u32 {
	let scaled = (f64::from(group.size_px()) * context.scale()).round() as u32;
	scaled.min(context.cap_px())
}

fn or_default(value: &str, default: &str) -> String {
	if value.trim().is_empty() {
		default.to_string()
	} else {
		value.to_string()
	}
}

fn alt_text(prefix: &str, suffix: &str) -> String {
	let alt = format!("{prefix}{suffix}");
	if alt.trim().is_empty() {
		"Logo".to_string()
	} else {
		alt
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	fn main_only(url: &str, prefix: &str, suffix: &str, size: &str) -> BrandingConfig {
		BrandingConfig {
			main: LogoSettings {
				url: url.to_string(),
				prefix: prefix.to_string(),
				suffix: suffix.to_string(),
				size: size.to_string(),
			},
			footer: LogoSettings::default(),
		}
	}

	fn text(prefix: &str, suffix: &str, font_size_px: u32) -> LogoPresentation {
		LogoPresentation::Text {
			prefix: prefix.to_string(),
			suffix: suffix.to_string(),
			font_size_px,
		}
	}

	#[test]
	fn test_default_text_logo_in_every_context() {
		let config = main_only("", "GROUP", "CONSULT", "160");
		// 160 * 0.28 = 44.8
		assert_eq!(resolve_logo(&config, RenderContext::Navbar), text("GROUP", "CONSULT", 45));
		// 160 * 0.7 = 112, 112 * 0.28 = 31.36
		assert_eq!(resolve_logo(&config, RenderContext::Sidebar), text("GROUP", "CONSULT", 31));
		assert_eq!(resolve_logo(&config, RenderContext::Footer), text("GROUP", "CONSULT", 45));
	}

	#[test]
	fn test_empty_settings_fall_back_to_defaults() {
		let config = BrandingConfig::default();
		assert_eq!(resolve_logo(&config, RenderContext::Navbar), text("GROUP", "CONSULT", 45));
	}

	#[test]
	fn test_oversized_logo_is_capped() {
		let config = main_only("/uploads/logo.png", "", "", "500");
		for context in RenderContext::ALL {
			match resolve_logo(&config, context) {
				LogoPresentation::Image { width_px, .. } => assert_eq!(width_px, context.cap_px()),
				other => panic!("expected image, got {other:?}"),
			}
		}
	}

	#[test]
	fn test_image_logo_uses_configured_width() {
		let config = main_only("/uploads/logo.svg", "GROUP", "CONSULT", "120");
		assert_eq!(
			resolve_logo(&config, RenderContext::Navbar),
			LogoPresentation::Image {
				url: "/uploads/logo.svg".to_string(),
				width_px: 120,
				alt: "GROUPCONSULT".to_string(),
			}
		);
		match resolve_logo(&config, RenderContext::Sidebar) {
			LogoPresentation::Image { width_px, .. } => assert_eq!(width_px, 84),
			other => panic!("expected image, got {other:?}"),
		}
	}

	#[test]
	fn test_footer_inherits_main_logo() {
		let config = main_only("", "ACME", "LABS", "180");
		assert_eq!(resolve_logo(&config, RenderContext::Footer), text("ACME", "LABS", 50));
	}

	#[test]
	fn test_footer_override_prefix_only() {
		let mut config = main_only("", "GROUP", "CONSULT", "160");
		config.footer.prefix = "FOOT".to_string();

		assert_eq!(resolve_logo(&config, RenderContext::Footer), text("FOOT", "", 45));
		assert_eq!(resolve_logo(&config, RenderContext::Navbar), text("GROUP", "CONSULT", 45));
	}

	#[test]
	fn test_footer_override_uses_own_size() {
		let mut config = main_only("/uploads/main.png", "", "", "160");
		config.footer.url = "/uploads/footer.png".to_string();
		config.footer.size = "90".to_string();

		match resolve_logo(&config, RenderContext::Footer) {
			LogoPresentation::Image { url, width_px, .. } => {
				assert_eq!(url, "/uploads/footer.png");
				assert_eq!(width_px, 90);
			}
			other => panic!("expected image, got {other:?}"),
		}
	}

	#[test]
	fn test_blank_footer_override_renders_nothing() {
		let mut config = main_only("", "GROUP", "CONSULT", "160");
		config.footer.prefix = "   ".to_string();
		assert!(resolve_logo(&config, RenderContext::Footer).is_none());
		assert!(!resolve_logo(&config, RenderContext::Navbar).is_none());
	}

	#[test]
	fn test_presentation_json_is_tagged() {
		let json = serde_json::to_value(text("A", "B", 10)).unwrap();
		assert_eq!(json["kind"], "text");
		assert_eq!(json["font_size_px"], 10);
		let none = serde_json::to_value(LogoPresentation::None).unwrap();
		assert_eq!(none, serde_json::json!({ "kind": "none" }));
	}

	fn logo_settings() -> impl Strategy<Value = LogoSettings> {
		(
			prop_oneof![Just(String::new()), "/uploads/[a-z]{1,8}\\.png"],
			prop_oneof![Just(String::new()), "[A-Z]{1,8}"],
			prop_oneof![Just(String::new()), "[A-Z]{1,8}"],
			prop_oneof![Just(String::new()), "-?[0-9]{1,4}", "[a-z]{1,3}"],
		)
			.prop_map(|(url, prefix, suffix, size)| LogoSettings {
				url,
				prefix,
				suffix,
				size,
			})
	}

	fn dimension(presentation: &LogoPresentation) -> Option<u32> {
		match presentation {
			LogoPresentation::Image { width_px, .. } => Some(*width_px),
			LogoPresentation::Text { font_size_px, .. } => Some(*font_size_px),
			LogoPresentation::None => None,
		}
	}

	proptest! {
		#[test]
		fn footer_settings_never_affect_navbar_or_sidebar(
			main in logo_settings(),
			footer_a in logo_settings(),
			footer_b in logo_settings(),
		) {
			let a = BrandingConfig { main: main.clone(), footer: footer_a };
			let b = BrandingConfig { main, footer: footer_b };
			for context in [RenderContext::Navbar, RenderContext::Sidebar] {
				prop_assert_eq!(resolve_logo(&a, context), resolve_logo(&b, context));
			}
		}

		#[test]
		fn inactive_footer_matches_navbar_identity(main in logo_settings()) {
			let config = BrandingConfig { main, footer: LogoSettings::default() };
			let navbar = resolve_logo(&config, RenderContext::Navbar);
			let footer = resolve_logo(&config, RenderContext::Footer);
			match (navbar, footer) {
				(
					LogoPresentation::Image { url: a, alt: alt_a, .. },
					LogoPresentation::Image { url: b, alt: alt_b, .. },
				) => {
					prop_assert_eq!(a, b);
					prop_assert_eq!(alt_a, alt_b);
				}
				(
					LogoPresentation::Text { prefix: pa, suffix: sa, .. },
					LogoPresentation::Text { prefix: pb, suffix: sb, .. },
				) => {
					prop_assert_eq!(pa, pb);
					prop_assert_eq!(sa, sb);
				}
				(a, b) => prop_assert!(false, "mode differs: {:?} vs {:?}", a, b),
			}
		}

		#[test]
		fn dimensions_stay_within_caps(main in logo_settings(), footer in logo_settings()) {
			let config = BrandingConfig { main, footer };
			for (context, presentation) in resolve_all(&config) {
				if let Some(px) = dimension(&presentation) {
					prop_assert!(px <= context.cap_px());
				}
			}
		}

		#[test]
		fn resolution_is_repeatable(main in logo_settings(), footer in logo_settings()) {
			let config = BrandingConfig { main, footer };
			let first = resolve_all(&config);
			let reversed: Vec<_> = RenderContext::ALL
				.iter()
				.rev()
				.map(|c| (*c, resolve_logo(&config, *c)))
				.collect();
			for (context, presentation) in first {
				let again = reversed.iter().find(|(c, _)| *c == context).map(|(_, p)| p.clone());
				prop_assert_eq!(Some(presentation), again);
			}
		}
	}
}
