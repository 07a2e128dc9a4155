// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Type-safe identifiers for every stored record.
//!
//! All ids are UUIDv4 values stored as strings and serialized transparently.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! define_id_type {
	($name:ident, $doc:expr) => {
		#[doc = $doc]
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
		#[serde(transparent)]
		pub struct $name(Uuid);

		impl $name {
			pub fn new(id: Uuid) -> Self {
				Self(id)
			}

			/// Generate a new random ID.
			pub fn generate() -> Self {
				Self(Uuid::new_v4())
			}

			pub fn into_inner(self) -> Uuid {
				self.0
			}

			pub fn as_uuid(&self) -> &Uuid {
				&self.0
			}
		}

		impl fmt::Display for $name {
			fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				write!(f, "{}", self.0)
			}
		}

		impl FromStr for $name {
			type Err = uuid::Error;

			fn from_str(s: &str) -> Result<Self, Self::Err> {
				Uuid::parse_str(s).map(Self)
			}
		}

		impl From<Uuid> for $name {
			fn from(id: Uuid) -> Self {
				Self(id)
			}
		}

		impl From<$name> for Uuid {
			fn from(id: $name) -> Self {
				id.0
			}
		}
	};
}

define_id_type!(PageId, "Unique identifier for a page.");
define_id_type!(ServiceId, "Unique identifier for a service.");
define_id_type!(CategoryId, "Unique identifier for a media category.");
define_id_type!(MediaId, "Unique identifier for an uploaded media asset.");
define_id_type!(TestimonialId, "Unique identifier for a testimonial.");
define_id_type!(FaqId, "Unique identifier for an FAQ entry.");
define_id_type!(ContactId, "Unique identifier for a contact message.");
define_id_type!(SettingId, "Unique identifier for a site setting.");

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_and_display_agree() {
		let id = PageId::generate();
		let parsed: PageId = id.to_string().parse().unwrap();
		assert_eq!(id, parsed);
	}

	#[test]
	fn test_parse_rejects_garbage() {
		assert!("not-a-uuid".parse::<SettingId>().is_err());
	}

	#[test]
	fn test_generated_ids_differ() {
		assert_ne!(FaqId::generate(), FaqId::generate());
	}
}
