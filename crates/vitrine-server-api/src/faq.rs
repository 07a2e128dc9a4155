// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use vitrine_common_i18n::localize;
use vitrine_content_core::{require_non_empty, ContentError, Faq};

use crate::common::{en, patch_translated, pt, translated};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct FaqResponse {
	pub id: String,
	pub question: String,
	pub question_en: Option<String>,
	pub question_pt: Option<String>,
	pub answer: String,
	pub answer_en: Option<String>,
	pub answer_pt: Option<String>,
	pub order: i64,
	pub is_active: bool,
	pub created_at: DateTime<Utc>,
	pub updated_at: DateTime<Utc>,
}

impl From<&Faq> for FaqResponse {
	fn from(faq: &Faq) -> Self {
		Self {
			id: faq.id.to_string(),
			question: faq.question.base().to_string(),
			question_en: en(&faq.question),
			question_pt: pt(&faq.question),
			answer: faq.answer.base().to_string(),
			answer_en: en(&faq.answer),
			answer_pt: pt(&faq.answer),
			order: faq.order,
			is_active: faq.is_active,
			created_at: faq.created_at,
			updated_at: faq.updated_at,
		}
	}
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct PublicFaqResponse {
	pub id: String,
	pub question: String,
	pub answer: String,
}

impl PublicFaqResponse {
	pub fn localized(faq: &Faq, lang: Option<&str>) -> Self {
		let faq = localize(faq, lang);
		Self {
			id: faq.id.to_string(),
			question: faq.question.base().to_string(),
			answer: faq.answer.base().to_string(),
		}
	}
}

fn default_active() -> bool {
	true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct CreateFaqRequest {
	pub question: String,
	pub question_en: Option<String>,
	pub question_pt: Option<String>,
	pub answer: String,
	pub answer_en: Option<String>,
	pub answer_pt: Option<String>,
	#[serde(default)]
	pub order: i64,
	#[serde(default = "default_active")]
	pub is_active: bool,
}

impl CreateFaqRequest {
	pub fn into_faq(self) -> Result<Faq, ContentError> {
		require_non_empty("question", &self.question)?;
		require_non_empty("answer", &self.answer)?;

		let mut faq = Faq::new(
			translated(self.question, self.question_en, self.question_pt),
			translated(self.answer, self.answer_en, self.answer_pt),
		);
		faq.order = self.order;
		faq.is_active = self.is_active;
		Ok(faq)
	}
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct UpdateFaqRequest {
	pub question: Option<String>,
	pub question_en: Option<String>,
	pub question_pt: Option<String>,
	pub answer: Option<String>,
	pub answer_en: Option<String>,
	pub answer_pt: Option<String>,
	pub order: Option<i64>,
	pub is_active: Option<bool>,
}

impl UpdateFaqRequest {
	pub fn apply(self, faq: &mut Faq) -> Result<(), ContentError> {
		if let Some(question) = &self.question {
			require_non_empty("question", question)?;
		}
		if let Some(answer) = &self.answer {
			require_non_empty("answer", answer)?;
		}

		patch_translated(&mut faq.question, self.question, self.question_en, self.question_pt);
		patch_translated(&mut faq.answer, self.answer, self.answer_en, self.answer_pt);
		if let Some(order) = self.order {
			faq.order = order;
		}
		if let Some(is_active) = self.is_active {
			faq.is_active = is_active;
		}
		Ok(())
	}
}
