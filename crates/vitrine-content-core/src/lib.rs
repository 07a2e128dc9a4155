// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Content records for the Vitrine CMS.
//!
//! Every record with translatable attributes implements
//! [`vitrine_common_i18n::Localizable`], so public read paths localize them
//! with the same field list they were authored with. Site settings live here
//! too, together with the key and group lookups the branding resolver and the
//! admin editors build on.

mod localizable;

pub mod category;
pub mod contact;
pub mod error;
pub mod faq;
pub mod ids;
pub mod lookup;
pub mod media;
pub mod page;
pub mod service;
pub mod setting;
pub mod testimonial;
pub mod validation;

pub use category::Category;
pub use contact::ContactMessage;
pub use error::ContentError;
pub use faq::Faq;
pub use ids::{CategoryId, ContactId, FaqId, MediaId, PageId, ServiceId, SettingId, TestimonialId};
pub use lookup::{
	branding_value, find_branding_setting, find_setting_by_id, find_setting_by_key, get_value,
	localized_map, settings_for_group, BrandingKey, UnknownBrandingKey, BRANDING_GROUP,
};
pub use media::{MediaAsset, ALLOWED_MIME_TYPES, DEFAULT_MAX_UPLOAD_BYTES, UPLOADS_URL_PREFIX};
pub use page::{Page, PageStatus, PAGE_LIST_FIELDS};
pub use service::{Service, DEFAULT_SERVICE_ICON, SERVICE_LIST_FIELDS};
pub use setting::{default_settings, SettingDefinition, SettingType, SiteSetting, SETTING_DEFINITIONS};
pub use testimonial::Testimonial;
pub use validation::{require_non_empty, sanitize_email, validate_email, validate_slug};
