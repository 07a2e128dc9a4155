// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! SQLite persistence for the Vitrine server.
//!
//! Every translatable attribute is stored as three columns (`<field>`,
//! `<field>_en`, `<field>_pt`) so a record is always loaded whole, base and
//! variants together, before it is localized. Content tables are soft
//! deleted; every read filters on `deleted_at IS NULL`.

pub mod audit;
pub mod category;
pub mod contact;
pub mod dashboard;
pub mod error;
pub mod faq;
pub mod media;
pub mod page;
pub mod pool;
pub mod seed;
pub mod service;
pub mod setting;
pub mod testimonial;
pub mod testing;

mod row;

pub use audit::{AuditLogPage, AuditLogQuery, AuditLogRepository, DEFAULT_AUDIT_LIMIT, MAX_AUDIT_LIMIT};
pub use category::{CategoryRepository, CategoryWithCount};
pub use contact::ContactRepository;
pub use dashboard::{DashboardCounts, DashboardRepository, DashboardStats};
pub use error::{DbError, Result};
pub use faq::FaqRepository;
pub use media::MediaRepository;
pub use page::PageRepository;
pub use pool::{create_pool, ping, run_migrations};
pub use seed::{seed_demo_content, seed_settings, SeedSummary};
pub use service::ServiceRepository;
pub use setting::{SettingValueUpdate, SettingsRepository};
pub use testimonial::TestimonialRepository;
