// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Request and response types of the Vitrine HTTP API.
//!
//! Admin responses carry every language column of a translatable field
//! (`title`, `title_en`, `title_pt`); public responses carry one value,
//! already localized for the `?lang=` of the request.

pub mod audit;
pub mod categories;
pub mod common;
pub mod contacts;
pub mod dashboard;
pub mod faq;
pub mod health;
pub mod media;
pub mod pages;
pub mod services;
pub mod settings;
pub mod testimonials;

pub use audit::{AuditLogEntryResponse, ListAuditLogsParams, ListAuditLogsResponse};
pub use categories::{CategoryResponse, CreateCategoryRequest, UpdateCategoryRequest};
pub use common::{patch_translated, translated, ErrorResponse, LangQuery, SuccessResponse};
pub use contacts::{ContactResponse, SubmitContactRequest};
pub use dashboard::{DashboardCountsResponse, DashboardResponse};
pub use faq::{CreateFaqRequest, FaqResponse, PublicFaqResponse, UpdateFaqRequest};
pub use health::{DatabaseHealth, HealthResponse, HealthStatus};
#[cfg(feature = "openapi")]
pub use media::UploadMediaForm;
pub use media::{MediaListQuery, MediaResponse, UpdateMediaRequest};
pub use pages::{
	CreatePageRequest, PageResponse, PublicPageResponse, PublicPageSummary, UpdatePageRequest,
};
pub use services::{
	CreateServiceRequest, PublicServiceResponse, PublicServiceSummary, ServiceResponse,
	UpdateServiceRequest,
};
pub use settings::{
	BrandingResponse, BulkSettingItem, BulkUpdateSettingsRequest, BulkUpdateSettingsResponse,
	ContextLogo, GroupQuery, LogoQuery, SettingResponse, UpdateSettingRequest,
};
pub use testimonials::{
	CreateTestimonialRequest, PublicTestimonialResponse, TestimonialResponse,
	UpdateTestimonialRequest,
};
