// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Partial configuration produced by a single source.

use serde::Deserialize;

use crate::sections::{
	AuditConfigLayer, AuthConfigLayer, DatabaseConfigLayer, HttpConfigLayer, LoggingConfigLayer,
	UploadsConfigLayer,
};

/// Every section is optional so a source only contributes what it sets.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerConfigLayer {
	#[serde(default)]
	pub http: Option<HttpConfigLayer>,
	#[serde(default)]
	pub database: Option<DatabaseConfigLayer>,
	#[serde(default)]
	pub auth: Option<AuthConfigLayer>,
	#[serde(default)]
	pub logging: Option<LoggingConfigLayer>,
	#[serde(default)]
	pub audit: Option<AuditConfigLayer>,
	#[serde(default)]
	pub uploads: Option<UploadsConfigLayer>,
}

macro_rules! merge_section {
	($self:ident, $other:ident, $($field:ident),+) => {
		$(
			if let Some(incoming) = $other.$field {
				match $self.$field.as_mut() {
					Some(existing) => existing.merge(incoming),
					None => $self.$field = Some(incoming),
				}
			}
		)+
	};
}

impl ServerConfigLayer {
	/// Merge `other` on top of `self`; values set in `other` win.
	pub fn merge(&mut self, other: ServerConfigLayer) {
		merge_section!(self, other, http, database, auth, logging, audit, uploads);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_merge_is_field_wise() {
		let mut base: ServerConfigLayer = toml::from_str(
			r#"
			[http]
			host = "127.0.0.1"
			port = 7000
			"#,
		)
		.unwrap();
		let overlay: ServerConfigLayer = toml::from_str(
			r#"
			[http]
			port = 8000

			[database]
			url = "sqlite::memory:"
			"#,
		)
		.unwrap();

		base.merge(overlay);
		let http = base.http.unwrap().finalize();
		assert_eq!(http.host, "127.0.0.1");
		assert_eq!(http.port, 8000);
		assert_eq!(base.database.unwrap().finalize().url, "sqlite::memory:");
	}

	#[test]
	fn test_empty_overlay_changes_nothing() {
		let mut base: ServerConfigLayer = toml::from_str("[logging]\nlevel = \"debug\"").unwrap();
		base.merge(ServerConfigLayer::default());
		assert_eq!(base.logging.unwrap().finalize().level, "debug");
	}
}
