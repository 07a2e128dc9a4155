// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Place in the site chrome where a logo is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum RenderContext {
	#[default]
	Navbar,
	Sidebar,
	Footer,
}

impl RenderContext {
	pub const ALL: [RenderContext; 3] = [
		RenderContext::Navbar,
		RenderContext::Sidebar,
		RenderContext::Footer,
	];

	/// Largest logo dimension, in pixels, the context's chrome can hold.
	pub fn cap_px(self) -> u32 {
		match self {
			RenderContext::Navbar => 240,
			RenderContext::Sidebar => 160,
			RenderContext::Footer => 200,
		}
	}

	/// Factor applied to the configured size before capping.
	pub fn scale(self) -> f64 {
		match self {
			RenderContext::Sidebar => 0.7,
			RenderContext::Navbar | RenderContext::Footer => 1.0,
		}
	}

	pub fn as_str(self) -> &'static str {
		match self {
			RenderContext::Navbar => "navbar",
			RenderContext::Sidebar => "sidebar",
			RenderContext::Footer => "footer",
		}
	}

	/// Lenient parse for request parameters: anything unrecognised is the
	/// navbar.
	pub fn from_param(param: Option<&str>) -> Self {
		param.and_then(|p| p.parse().ok()).unwrap_or_default()
	}
}

impl fmt::Display for RenderContext {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownContext(pub String);

impl fmt::Display for UnknownContext {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "unknown render context '{}'", self.0)
	}
}

impl std::error::Error for UnknownContext {}

impl FromStr for RenderContext {
	type Err = UnknownContext;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"navbar" => Ok(RenderContext::Navbar),
			"sidebar" => Ok(RenderContext::Sidebar),
			"footer" => Ok(RenderContext::Footer),
			other => Err(UnknownContext(other.to_string())),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_sidebar_is_only_scaled_context() {
		assert!(RenderContext::Sidebar.scale() < 1.0);
		assert_eq!(RenderContext::Navbar.scale(), 1.0);
		assert_eq!(RenderContext::Footer.scale(), 1.0);
	}

	#[test]
	fn test_from_param_defaults_to_navbar() {
		assert_eq!(RenderContext::from_param(None), RenderContext::Navbar);
		assert_eq!(RenderContext::from_param(Some("header")), RenderContext::Navbar);
		assert_eq!(RenderContext::from_param(Some("Footer")), RenderContext::Navbar);
		assert_eq!(RenderContext::from_param(Some("footer")), RenderContext::Footer);
	}
}
