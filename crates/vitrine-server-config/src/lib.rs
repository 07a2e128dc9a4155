// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration for the Vitrine server.
//!
//! Sources are layered by precedence (defaults, then the TOML file, then
//! `VITRINE_SERVER_*` environment variables) and resolved into a
//! [`ServerConfig`].
//!
//! ```ignore
//! use vitrine_server_config::load_config;
//!
//! let config = load_config()?;
//! println!("listening on {}", config.socket_addr());
//! ```

pub mod error;
pub mod layer;
pub mod sections;
pub mod sources;

pub use error::ConfigError;
pub use layer::ServerConfigLayer;
pub use sections::*;
pub use sources::{ConfigSource, DefaultsSource, EnvSource, Precedence, TomlSource};

use tracing::{debug, info};

/// Fully resolved server configuration.
#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
	pub http: HttpConfig,
	pub database: DatabaseConfig,
	pub auth: AuthConfig,
	pub logging: LoggingConfig,
	pub audit: AuditConfig,
	pub uploads: UploadsConfig,
}

impl ServerConfig {
	/// Get the socket address string for binding.
	pub fn socket_addr(&self) -> String {
		format!("{}:{}", self.http.host, self.http.port)
	}
}

/// Load configuration from all sources with standard precedence.
///
/// Precedence (highest to lowest):
/// 1. Environment variables (`VITRINE_SERVER_*`)
/// 2. Config file (`/etc/vitrine/server.toml`)
/// 3. Built-in defaults
pub fn load_config() -> Result<ServerConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::system()),
		Box::new(EnvSource),
	])
}

/// Load configuration with a custom config file path.
pub fn load_config_with_file(
	config_path: impl Into<std::path::PathBuf>,
) -> Result<ServerConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::new(config_path)),
		Box::new(EnvSource),
	])
}

/// Merge the given sources in precedence order and resolve the result.
pub fn load_from_sources(
	mut sources: Vec<Box<dyn ConfigSource>>,
) -> Result<ServerConfig, ConfigError> {
	sources.sort_by_key(|s| s.precedence());

	let mut merged = ServerConfigLayer::default();
	for source in sources {
		debug!(source = source.name(), "loading configuration source");
		let layer = source.load()?;
		merged.merge(layer);
	}

	finalize(merged)
}

/// Finalize configuration layer into resolved config.
fn finalize(layer: ServerConfigLayer) -> Result<ServerConfig, ConfigError> {
	let http = layer.http.unwrap_or_default().finalize();
	let database = layer.database.unwrap_or_default().finalize();
	let auth = layer.auth.unwrap_or_default().finalize();
	let logging = layer.logging.unwrap_or_default().finalize();
	let audit = layer.audit.unwrap_or_default().finalize();
	let uploads = layer.uploads.unwrap_or_default().finalize();

	validate_config(&auth)?;

	info!(
		host = %http.host,
		port = http.port,
		database = %database.url,
		environment = %auth.environment,
		dev_mode = auth.dev_mode,
		audit_enabled = audit.enabled,
		uploads_dir = %uploads.dir.display(),
		"Server configuration loaded"
	);

	Ok(ServerConfig {
		http,
		database,
		auth,
		logging,
		audit,
		uploads,
	})
}

/// Validate cross-field configuration rules.
fn validate_config(auth: &AuthConfig) -> Result<(), ConfigError> {
	if auth.dev_mode && auth.is_production() {
		return Err(ConfigError::Validation(
			"VITRINE_SERVER_AUTH_DEV_MODE=1 is set while VITRINE_SERVER_ENV=production. \
			 This is a security risk. Remove VITRINE_SERVER_AUTH_DEV_MODE or set \
			 VITRINE_SERVER_ENV to a non-production value."
				.to_string(),
		));
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	struct StaticSource {
		precedence: Precedence,
		toml: &'static str,
	}

	impl ConfigSource for StaticSource {
		fn name(&self) -> &'static str {
			"static"
		}

		fn precedence(&self) -> Precedence {
			self.precedence
		}

		fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
			Ok(toml::from_str(self.toml).unwrap())
		}
	}

	#[test]
	fn test_dev_mode_production_validation() {
		let auth = AuthConfig {
			dev_mode: true,
			environment: "production".to_string(),
		};
		let result = validate_config(&auth);
		assert!(result.unwrap_err().to_string().contains("security risk"));
	}

	#[test]
	fn test_dev_mode_development_ok() {
		let auth = AuthConfig {
			dev_mode: true,
			environment: "development".to_string(),
		};
		assert!(validate_config(&auth).is_ok());
	}

	#[test]
	fn test_socket_addr() {
		let mut config = ServerConfig::default();
		config.http.host = "127.0.0.1".to_string();
		config.http.port = 9000;
		assert_eq!(config.socket_addr(), "127.0.0.1:9000");
	}

	#[test]
	fn test_higher_precedence_wins_regardless_of_order() {
		let config = load_from_sources(vec![
			Box::new(StaticSource {
				precedence: Precedence::Environment,
				toml: "[http]\nport = 9100",
			}),
			Box::new(StaticSource {
				precedence: Precedence::ConfigFile,
				toml: "[http]\nport = 9000\nhost = \"127.0.0.1\"",
			}),
		])
		.unwrap();
		assert_eq!(config.http.port, 9100);
		assert_eq!(config.http.host, "127.0.0.1");
	}

	#[test]
	fn test_production_dev_mode_rejected_when_loading() {
		let result = load_from_sources(vec![Box::new(StaticSource {
			precedence: Precedence::ConfigFile,
			toml: "[auth]\ndev_mode = true\nenvironment = \"production\"",
		})]);
		assert!(matches!(result, Err(ConfigError::Validation(_))));
	}

	proptest! {
		#[test]
		fn dev_mode_only_rejected_in_production(dev_mode: bool, env in "[a-z]{0,12}") {
			let auth = AuthConfig { dev_mode, environment: env.clone() };
			let rejected = validate_config(&auth).is_err();
			prop_assert_eq!(rejected, dev_mode && env == "production");
		}
	}
}
