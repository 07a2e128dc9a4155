// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Application state and HTTP routing.

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
	extract::DefaultBodyLimit,
	middleware::from_fn_with_state,
	routing::{get, post, put},
	Router,
};
use sqlx::SqlitePool;
use tower_http::services::ServeDir;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use vitrine_server_audit::{AuditLogEntry, AuditService, AuditSink, SqliteAuditSink, TracingAuditSink};
use vitrine_server_auth::AuthConfig;
use vitrine_server_config::ServerConfig;
use vitrine_server_db::{
	AuditLogRepository, CategoryRepository, ContactRepository, DashboardRepository, FaqRepository,
	MediaRepository, PageRepository, ServiceRepository, SettingsRepository, TestimonialRepository,
};

use crate::{api_docs::ApiDoc, auth_middleware::auth_layer, routes};

/// Multipart framing on top of the file itself.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Where uploaded files live and how large they may be.
#[derive(Debug, Clone)]
pub struct UploadSettings {
	pub dir: PathBuf,
	pub max_bytes: u64,
}

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
	pub pool: SqlitePool,
	pub page_repo: Arc<PageRepository>,
	pub service_repo: Arc<ServiceRepository>,
	pub category_repo: Arc<CategoryRepository>,
	pub media_repo: Arc<MediaRepository>,
	pub testimonial_repo: Arc<TestimonialRepository>,
	pub faq_repo: Arc<FaqRepository>,
	pub contact_repo: Arc<ContactRepository>,
	pub settings_repo: Arc<SettingsRepository>,
	pub audit_repo: Arc<AuditLogRepository>,
	pub dashboard_repo: Arc<DashboardRepository>,
	/// `None` when auditing is disabled in config.
	pub audit_service: Option<Arc<AuditService>>,
	pub auth_config: AuthConfig,
	pub uploads: UploadSettings,
}

impl AppState {
	/// Hand an entry to the audit pipeline. Never blocks the request.
	pub fn audit(&self, entry: AuditLogEntry) {
		if let Some(service) = &self.audit_service {
			service.log(entry);
		}
	}
}

/// Creates the application state. Must be called inside a tokio runtime
/// when auditing is enabled.
pub async fn create_app_state(pool: SqlitePool, config: &ServerConfig) -> AppState {
	let audit_service = if config.audit.enabled {
		let sinks: Vec<Arc<dyn AuditSink>> = vec![
			Arc::new(SqliteAuditSink::new(pool.clone())),
			Arc::new(TracingAuditSink::new()),
		];
		Some(Arc::new(AuditService::new(
			config.audit.queue_capacity,
			config.audit.queue_overflow_policy,
			sinks,
		)))
	} else {
		tracing::info!("audit logging disabled");
		None
	};

	AppState {
		page_repo: Arc::new(PageRepository::new(pool.clone())),
		service_repo: Arc::new(ServiceRepository::new(pool.clone())),
		category_repo: Arc::new(CategoryRepository::new(pool.clone())),
		media_repo: Arc::new(MediaRepository::new(pool.clone())),
		testimonial_repo: Arc::new(TestimonialRepository::new(pool.clone())),
		faq_repo: Arc::new(FaqRepository::new(pool.clone())),
		contact_repo: Arc::new(ContactRepository::new(pool.clone())),
		settings_repo: Arc::new(SettingsRepository::new(pool.clone())),
		audit_repo: Arc::new(AuditLogRepository::new(pool.clone())),
		dashboard_repo: Arc::new(DashboardRepository::new(pool.clone())),
		pool,
		audit_service,
		auth_config: AuthConfig::new().with_dev_mode(config.auth.dev_mode),
		uploads: UploadSettings {
			dir: config.uploads.dir.clone(),
			max_bytes: config.uploads.max_bytes,
		},
	}
}

pub fn create_router(state: AppState) -> Router {
	let upload_limit = usize::try_from(state.uploads.max_bytes)
		.unwrap_or(usize::MAX)
		.saturating_add(MULTIPART_OVERHEAD_BYTES);

	let public = Router::new()
		.route("/health", get(routes::health::health_check))
		.route("/api/pages/public", get(routes::pages::list_public_pages))
		.route("/api/pages/public/{slug}", get(routes::pages::get_public_page))
		.route("/api/services/public", get(routes::services::list_public_services))
		.route(
			"/api/services/public/{slug}",
			get(routes::services::get_public_service),
		)
		.route(
			"/api/testimonials/public",
			get(routes::testimonials::list_public_testimonials),
		)
		.route("/api/faq/public", get(routes::faq::list_public_faq))
		.route("/api/settings/public", get(routes::settings::get_public_settings))
		.route("/api/settings/public/logo", get(routes::settings::get_public_logo))
		.route("/api/contacts/public", post(routes::contacts::submit_contact));

	let admin = Router::new()
		.route(
			"/api/pages",
			get(routes::pages::list_pages).post(routes::pages::create_page),
		)
		.route(
			"/api/pages/{id}",
			get(routes::pages::get_page)
				.put(routes::pages::update_page)
				.delete(routes::pages::delete_page),
		)
		.route(
			"/api/services",
			get(routes::services::list_services).post(routes::services::create_service),
		)
		.route(
			"/api/services/{id}",
			get(routes::services::get_service)
				.put(routes::services::update_service)
				.delete(routes::services::delete_service),
		)
		.route(
			"/api/categories",
			get(routes::categories::list_categories).post(routes::categories::create_category),
		)
		.route(
			"/api/categories/{id}",
			get(routes::categories::get_category)
				.put(routes::categories::update_category)
				.delete(routes::categories::delete_category),
		)
		.route(
			"/api/media",
			get(routes::media::list_media)
				.post(routes::media::upload_media)
				.layer(DefaultBodyLimit::max(upload_limit)),
		)
		.route(
			"/api/media/{id}",
			get(routes::media::get_media)
				.put(routes::media::update_media)
				.delete(routes::media::delete_media),
		)
		.route(
			"/api/testimonials",
			get(routes::testimonials::list_testimonials)
				.post(routes::testimonials::create_testimonial),
		)
		.route(
			"/api/testimonials/{id}",
			get(routes::testimonials::get_testimonial)
				.put(routes::testimonials::update_testimonial)
				.delete(routes::testimonials::delete_testimonial),
		)
		.route(
			"/api/faq",
			get(routes::faq::list_faq).post(routes::faq::create_faq),
		)
		.route(
			"/api/faq/{id}",
			get(routes::faq::get_faq)
				.put(routes::faq::update_faq)
				.delete(routes::faq::delete_faq),
		)
		.route("/api/contacts", get(routes::contacts::list_contacts))
		.route(
			"/api/contacts/{id}",
			get(routes::contacts::get_contact).delete(routes::contacts::delete_contact),
		)
		.route("/api/contacts/{id}/read", put(routes::contacts::mark_contact_read))
		.route("/api/settings", get(routes::settings::list_settings))
		.route(
			"/api/settings/group/{group}",
			get(routes::settings::list_settings_group),
		)
		.route("/api/settings/branding", get(routes::settings::get_branding))
		.route(
			"/api/settings/bulk/update",
			put(routes::settings::bulk_update_settings),
		)
		.route("/api/settings/{id}", put(routes::settings::update_setting))
		.route("/api/audit", get(routes::audit::list_audit_logs))
		.route("/api/dashboard", get(routes::dashboard::get_dashboard));

	Router::new()
		.merge(public)
		.merge(admin)
		.nest_service("/uploads", ServeDir::new(&state.uploads.dir))
		.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
		.layer(from_fn_with_state(state.clone(), auth_layer))
		.with_state(state)
}
