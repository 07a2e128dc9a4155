// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use vitrine_common_i18n::localize;
use vitrine_content_core::{require_non_empty, ContentError, Testimonial};

use crate::common::{en, patch_translated, pt, translated};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct TestimonialResponse {
	pub id: String,
	pub name: String,
	pub role: String,
	pub role_en: Option<String>,
	pub role_pt: Option<String>,
	pub company: String,
	pub company_en: Option<String>,
	pub company_pt: Option<String>,
	pub content: String,
	pub content_en: Option<String>,
	pub content_pt: Option<String>,
	pub image_url: Option<String>,
	pub order: i64,
	pub is_active: bool,
	pub created_at: DateTime<Utc>,
	pub updated_at: DateTime<Utc>,
}

impl From<&Testimonial> for TestimonialResponse {
	fn from(t: &Testimonial) -> Self {
		Self {
			id: t.id.to_string(),
			name: t.name.clone(),
			role: t.role.base().to_string(),
			role_en: en(&t.role),
			role_pt: pt(&t.role),
			company: t.company.base().to_string(),
			company_en: en(&t.company),
			company_pt: pt(&t.company),
			content: t.content.base().to_string(),
			content_en: en(&t.content),
			content_pt: pt(&t.content),
			image_url: t.image_url.clone(),
			order: t.order,
			is_active: t.is_active,
			created_at: t.created_at,
			updated_at: t.updated_at,
		}
	}
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct PublicTestimonialResponse {
	pub id: String,
	pub name: String,
	pub role: String,
	pub company: String,
	pub content: String,
	pub image_url: Option<String>,
}

impl PublicTestimonialResponse {
	pub fn localized(testimonial: &Testimonial, lang: Option<&str>) -> Self {
		let t = localize(testimonial, lang);
		Self {
			id: t.id.to_string(),
			name: t.name.clone(),
			role: t.role.base().to_string(),
			company: t.company.base().to_string(),
			content: t.content.base().to_string(),
			image_url: t.image_url.clone(),
		}
	}
}

fn default_active() -> bool {
	true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct CreateTestimonialRequest {
	pub name: String,
	#[serde(default)]
	pub role: String,
	pub role_en: Option<String>,
	pub role_pt: Option<String>,
	#[serde(default)]
	pub company: String,
	pub company_en: Option<String>,
	pub company_pt: Option<String>,
	pub content: String,
	pub content_en: Option<String>,
	pub content_pt: Option<String>,
	pub image_url: Option<String>,
	#[serde(default)]
	pub order: i64,
	#[serde(default = "default_active")]
	pub is_active: bool,
}

impl CreateTestimonialRequest {
	pub fn into_testimonial(self) -> Result<Testimonial, ContentError> {
		require_non_empty("name", &self.name)?;
		require_non_empty("content", &self.content)?;

		let mut testimonial = Testimonial::new(
			self.name.trim(),
			translated(self.content, self.content_en, self.content_pt),
		);
		testimonial.role = translated(self.role, self.role_en, self.role_pt);
		testimonial.company = translated(self.company, self.company_en, self.company_pt);
		testimonial.image_url = self.image_url.filter(|url| !url.is_empty());
		testimonial.order = self.order;
		testimonial.is_active = self.is_active;
		Ok(testimonial)
	}
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct UpdateTestimonialRequest {
	pub name: Option<String>,
	pub role: Option<String>,
	pub role_en: Option<String>,
	pub role_pt: Option<String>,
	pub company: Option<String>,
	pub company_en: Option<String>,
	pub company_pt: Option<String>,
	pub content: Option<String>,
	pub content_en: Option<String>,
	pub content_pt: Option<String>,
	pub image_url: Option<String>,
	pub order: Option<i64>,
	pub is_active: Option<bool>,
}

impl UpdateTestimonialRequest {
	pub fn apply(self, testimonial: &mut Testimonial) -> Result<(), ContentError> {
		if let Some(name) = &self.name {
			require_non_empty("name", name)?;
		}
		if let Some(content) = &self.content {
			require_non_empty("content", content)?;
		}

		if let Some(name) = self.name {
			testimonial.name = name.trim().to_string();
		}
		patch_translated(&mut testimonial.role, self.role, self.role_en, self.role_pt);
		patch_translated(
			&mut testimonial.company,
			self.company,
			self.company_en,
			self.company_pt,
		);
		patch_translated(
			&mut testimonial.content,
			self.content,
			self.content_en,
			self.content_pt,
		);
		if let Some(url) = self.image_url {
			testimonial.image_url = (!url.is_empty()).then_some(url);
		}
		if let Some(order) = self.order {
			testimonial.order = order;
		}
		if let Some(is_active) = self.is_active {
			testimonial.is_active = is_active;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_public_testimonial_falls_back_per_field() {
		let testimonial: CreateTestimonialRequest = serde_json::from_value(serde_json::json!({
			"name": "Dana Levi",
			"role": "מנכ\"לית",
			"role_en": "CEO",
			"company": "לוי בע\"מ",
			"content": "שירות מצוין",
			"content_pt": "Excelente serviço",
		}))
		.unwrap();
		let testimonial = testimonial.into_testimonial().unwrap();

		let en = PublicTestimonialResponse::localized(&testimonial, Some("en"));
		assert_eq!(en.role, "CEO");
		assert_eq!(en.company, "לוי בע\"מ");
		assert_eq!(en.content, "שירות מצוין");

		let pt = PublicTestimonialResponse::localized(&testimonial, Some("pt"));
		assert_eq!(pt.role, "מנכ\"לית");
		assert_eq!(pt.content, "Excelente serviço");
	}

	#[test]
	fn test_content_is_required() {
		let request: CreateTestimonialRequest =
			serde_json::from_value(serde_json::json!({ "name": "Dana", "content": "" })).unwrap();
		assert_eq!(request.into_testimonial(), Err(ContentError::Required("content")));
	}
}
