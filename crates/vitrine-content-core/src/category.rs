// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use vitrine_common_i18n::Translated;

use crate::ids::CategoryId;
use crate::localizable::impl_localizable;

/// A media library folder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
	pub id: CategoryId,
	pub slug: String,
	pub name: Translated,
	pub description: Translated,
	pub order: i64,
	pub is_active: bool,
	pub created_at: DateTime<Utc>,
	pub updated_at: DateTime<Utc>,
}

impl_localizable!(Category { name, description });

impl Category {
	pub fn new(slug: impl Into<String>, name: Translated) -> Self {
		let now = Utc::now();
		Self {
			id: CategoryId::generate(),
			slug: slug.into(),
			name,
			description: Translated::default(),
			order: 0,
			is_active: true,
			created_at: now,
			updated_at: now,
		}
	}
}
