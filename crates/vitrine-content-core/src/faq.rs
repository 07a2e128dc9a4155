// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use vitrine_common_i18n::Translated;

use crate::ids::FaqId;
use crate::localizable::impl_localizable;

const AUDIT_NAME_MAX_CHARS: usize = 50;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Faq {
	pub id: FaqId,
	pub question: Translated,
	pub answer: Translated,
	pub order: i64,
	pub is_active: bool,
	pub created_by: Option<String>,
	pub updated_by: Option<String>,
	pub created_at: DateTime<Utc>,
	pub updated_at: DateTime<Utc>,
}

impl_localizable!(Faq { question, answer });

impl Faq {
	pub fn new(question: Translated, answer: Translated) -> Self {
		let now = Utc::now();
		Self {
			id: FaqId::generate(),
			question,
			answer,
			order: 0,
			is_active: true,
			created_by: None,
			updated_by: None,
			created_at: now,
			updated_at: now,
		}
	}

	/// Short label for audit entries: the question, cut at 50 characters.
	pub fn audit_name(&self) -> String {
		self.question
			.base()
			.chars()
			.take(AUDIT_NAME_MAX_CHARS)
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_audit_name_truncates_on_char_boundary() {
		let question = "ש".repeat(80);
		let faq = Faq::new(Translated::new(question), Translated::new("תשובה"));
		assert_eq!(faq.audit_name().chars().count(), 50);
	}

	#[test]
	fn test_audit_name_keeps_short_questions() {
		let faq = Faq::new(Translated::new("Why?"), Translated::new("Because"));
		assert_eq!(faq.audit_name(), "Why?");
	}
}
