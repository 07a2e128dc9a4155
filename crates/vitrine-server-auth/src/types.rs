// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::fmt;

use serde::{Deserialize, Serialize};

/// Role of an authenticated CMS user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
	Admin,
	#[default]
	Editor,
}

impl Role {
	/// Parse a role string from the identity provider. Anything that is not
	/// exactly `admin` is an editor.
	pub fn from_claim(value: &str) -> Self {
		match value.trim() {
			"admin" => Role::Admin,
			_ => Role::Editor,
		}
	}

	pub fn as_str(self) -> &'static str {
		match self {
			Role::Admin => "admin",
			Role::Editor => "editor",
		}
	}

	pub fn is_admin(self) -> bool {
		self == Role::Admin
	}
}

impl fmt::Display for Role {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn test_role_from_claim() {
		assert_eq!(Role::from_claim("admin"), Role::Admin);
		assert_eq!(Role::from_claim(" admin "), Role::Admin);
		assert_eq!(Role::from_claim("editor"), Role::Editor);
		assert_eq!(Role::from_claim("Admin"), Role::Editor);
		assert_eq!(Role::from_claim(""), Role::Editor);
	}

	#[test]
	fn test_role_serde() {
		assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
	}

	proptest! {
		#[test]
		fn only_admin_claim_grants_admin(claim in "\\PC{0,12}") {
			prop_assert_eq!(Role::from_claim(&claim).is_admin(), claim.trim() == "admin");
		}
	}
}
