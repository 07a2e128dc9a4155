// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Media upload storage configuration.

use std::path::PathBuf;

use serde::Deserialize;

const DEFAULT_UPLOADS_DIR: &str = "./uploads";
const DEFAULT_MAX_BYTES: u64 = 10 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct UploadsConfig {
	/// Directory stored files are written to and served from.
	pub dir: PathBuf,
	pub max_bytes: u64,
}

impl Default for UploadsConfig {
	fn default() -> Self {
		UploadsConfigLayer::default().finalize()
	}
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UploadsConfigLayer {
	#[serde(default)]
	pub dir: Option<String>,
	#[serde(default)]
	pub max_bytes: Option<u64>,
}

impl UploadsConfigLayer {
	pub fn merge(&mut self, other: UploadsConfigLayer) {
		if other.dir.is_some() {
			self.dir = other.dir;
		}
		if other.max_bytes.is_some() {
			self.max_bytes = other.max_bytes;
		}
	}

	pub fn finalize(self) -> UploadsConfig {
		UploadsConfig {
			dir: PathBuf::from(self.dir.unwrap_or_else(|| DEFAULT_UPLOADS_DIR.to_string())),
			max_bytes: self.max_bytes.unwrap_or(DEFAULT_MAX_BYTES),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_defaults() {
		let config = UploadsConfig::default();
		assert_eq!(config.dir, PathBuf::from("./uploads"));
		assert_eq!(config.max_bytes, 10 * 1024 * 1024);
	}
}
