// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! OpenAPI documentation for vitrine-server.
//!
//! Served as JSON at `/api-docs/openapi.json` with Swagger UI at
//! `/swagger-ui`.

use utoipa::OpenApi;
use vitrine_branding_core::{BrandingConfig, LogoPresentation, LogoSettings, RenderContext};
use vitrine_content_core::{PageStatus, SettingType};
use vitrine_server_api::{
	AuditLogEntryResponse, BrandingResponse, BulkSettingItem, BulkUpdateSettingsRequest,
	BulkUpdateSettingsResponse, CategoryResponse, ContactResponse, ContextLogo,
	CreateCategoryRequest, CreateFaqRequest, CreatePageRequest, CreateServiceRequest,
	CreateTestimonialRequest, DashboardCountsResponse, DashboardResponse, DatabaseHealth,
	ErrorResponse, FaqResponse, HealthResponse, HealthStatus, ListAuditLogsResponse,
	MediaResponse, PageResponse, PublicFaqResponse, PublicPageResponse, PublicPageSummary,
	PublicServiceResponse, PublicServiceSummary, PublicTestimonialResponse, ServiceResponse,
	SettingResponse, SubmitContactRequest, SuccessResponse, TestimonialResponse,
	UpdateCategoryRequest, UpdateFaqRequest, UpdateMediaRequest, UpdatePageRequest,
	UpdateServiceRequest, UpdateSettingRequest, UpdateTestimonialRequest, UploadMediaForm,
};

use crate::routes;

#[derive(OpenApi)]
#[openapi(
	info(
		title = "Vitrine Server API",
		version = "1.0.0",
		description = "Trilingual site content and CMS admin API. Public endpoints accept `?lang=he|en|pt` and fall back to Hebrew.",
		license(name = "Proprietary")
	),
	servers(
		(url = "/", description = "Local server")
	),
	tags(
		(name = "health", description = "Health checks"),
		(name = "pages", description = "Site pages"),
		(name = "services", description = "Service offerings"),
		(name = "categories", description = "Media categories"),
		(name = "media", description = "Uploaded media library"),
		(name = "testimonials", description = "Customer testimonials"),
		(name = "faq", description = "Frequently asked questions"),
		(name = "contacts", description = "Contact form submissions"),
		(name = "settings", description = "Site settings and branding"),
		(name = "audit", description = "Audit log of content changes"),
		(name = "dashboard", description = "Admin dashboard summary")
	),
	paths(
		routes::health::health_check,
		routes::pages::list_public_pages,
		routes::pages::get_public_page,
		routes::pages::list_pages,
		routes::pages::get_page,
		routes::pages::create_page,
		routes::pages::update_page,
		routes::pages::delete_page,
		routes::services::list_public_services,
		routes::services::get_public_service,
		routes::services::list_services,
		routes::services::get_service,
		routes::services::create_service,
		routes::services::update_service,
		routes::services::delete_service,
		routes::categories::list_categories,
		routes::categories::get_category,
		routes::categories::create_category,
		routes::categories::update_category,
		routes::categories::delete_category,
		routes::media::list_media,
		routes::media::get_media,
		routes::media::upload_media,
		routes::media::update_media,
		routes::media::delete_media,
		routes::testimonials::list_public_testimonials,
		routes::testimonials::list_testimonials,
		routes::testimonials::get_testimonial,
		routes::testimonials::create_testimonial,
		routes::testimonials::update_testimonial,
		routes::testimonials::delete_testimonial,
		routes::faq::list_public_faq,
		routes::faq::list_faq,
		routes::faq::get_faq,
		routes::faq::create_faq,
		routes::faq::update_faq,
		routes::faq::delete_faq,
		routes::contacts::submit_contact,
		routes::contacts::list_contacts,
		routes::contacts::get_contact,
		routes::contacts::mark_contact_read,
		routes::contacts::delete_contact,
		routes::settings::get_public_settings,
		routes::settings::get_public_logo,
		routes::settings::list_settings,
		routes::settings::list_settings_group,
		routes::settings::get_branding,
		routes::settings::update_setting,
		routes::settings::bulk_update_settings,
		routes::audit::list_audit_logs,
		routes::dashboard::get_dashboard,
	),
	components(schemas(
		ErrorResponse,
		SuccessResponse,
		HealthResponse,
		HealthStatus,
		DatabaseHealth,
		PageStatus,
		PageResponse,
		PublicPageResponse,
		PublicPageSummary,
		CreatePageRequest,
		UpdatePageRequest,
		ServiceResponse,
		PublicServiceResponse,
		PublicServiceSummary,
		CreateServiceRequest,
		UpdateServiceRequest,
		CategoryResponse,
		CreateCategoryRequest,
		UpdateCategoryRequest,
		MediaResponse,
		UpdateMediaRequest,
		UploadMediaForm,
		TestimonialResponse,
		PublicTestimonialResponse,
		CreateTestimonialRequest,
		UpdateTestimonialRequest,
		FaqResponse,
		PublicFaqResponse,
		CreateFaqRequest,
		UpdateFaqRequest,
		ContactResponse,
		SubmitContactRequest,
		SettingType,
		SettingResponse,
		UpdateSettingRequest,
		BulkSettingItem,
		BulkUpdateSettingsRequest,
		BulkUpdateSettingsResponse,
		BrandingResponse,
		BrandingConfig,
		LogoSettings,
		LogoPresentation,
		RenderContext,
		ContextLogo,
		AuditLogEntryResponse,
		ListAuditLogsResponse,
		DashboardCountsResponse,
		DashboardResponse,
	))
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_openapi_lists_public_and_admin_paths() {
		let doc = ApiDoc::openapi();
		for path in [
			"/health",
			"/api/pages/public/{slug}",
			"/api/settings/public/logo",
			"/api/settings/bulk/update",
			"/api/media/{id}",
		] {
			assert!(doc.paths.paths.contains_key(path), "missing {path}");
		}
	}
}
