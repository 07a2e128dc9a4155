// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use sqlx::sqlite::SqlitePool;
use vitrine_server_audit::AuditLogEntry;

use crate::audit::AuditLogRepository;
use crate::error::Result;

const RECENT_ACTIVITY_LIMIT: i64 = 10;

/// Record counts shown on the admin dashboard. Soft-deleted rows are not
/// counted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardCounts {
	pub pages: i64,
	pub published_pages: i64,
	pub services: i64,
	pub categories: i64,
	pub media: i64,
	pub unread_contacts: i64,
	pub testimonials: i64,
	pub faq: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardStats {
	pub counts: DashboardCounts,
	pub recent_activity: Vec<AuditLogEntry>,
}

#[derive(Clone)]
pub struct DashboardRepository {
	pool: SqlitePool,
}

impl DashboardRepository {
	pub fn new(pool: SqlitePool) -> Self {
		Self { pool }
	}

	#[tracing::instrument(skip(self))]
	pub async fn stats(&self) -> Result<DashboardStats> {
		let counts = DashboardCounts {
			pages: self.count("SELECT COUNT(*) FROM pages WHERE deleted_at IS NULL").await?,
			published_pages: self
				.count("SELECT COUNT(*) FROM pages WHERE deleted_at IS NULL AND status = 'published'")
				.await?,
			services: self.count("SELECT COUNT(*) FROM services WHERE deleted_at IS NULL").await?,
			categories: self.count("SELECT COUNT(*) FROM categories WHERE deleted_at IS NULL").await?,
			media: self.count("SELECT COUNT(*) FROM media_assets WHERE deleted_at IS NULL").await?,
			unread_contacts: self
				.count("SELECT COUNT(*) FROM contact_messages WHERE is_read = 0")
				.await?,
			testimonials: self
				.count("SELECT COUNT(*) FROM testimonials WHERE deleted_at IS NULL")
				.await?,
			faq: self.count("SELECT COUNT(*) FROM faqs WHERE deleted_at IS NULL").await?,
		};

		let recent_activity = AuditLogRepository::new(self.pool.clone())
			.recent(RECENT_ACTIVITY_LIMIT)
			.await?;

		Ok(DashboardStats {
			counts,
			recent_activity,
		})
	}

	async fn count(&self, sql: &str) -> Result<i64> {
		let count: i64 = sqlx::query_scalar(sql).fetch_one(&self.pool).await?;
		Ok(count)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::contact::ContactRepository;
	use crate::page::PageRepository;
	use crate::testing::create_test_pool;
	use vitrine_common_i18n::Translated;
	use vitrine_content_core::{ContactMessage, Page, PageStatus};

	#[tokio::test]
	async fn test_empty_database() {
		let repo = DashboardRepository::new(create_test_pool().await);
		let stats = repo.stats().await.unwrap();
		assert_eq!(stats.counts, DashboardCounts::default());
		assert!(stats.recent_activity.is_empty());
	}

	#[tokio::test]
	async fn test_counts_exclude_deleted_and_read() {
		let pool = create_test_pool().await;
		let pages = PageRepository::new(pool.clone());
		let contacts = ContactRepository::new(pool.clone());

		let mut live = Page::new("home", Translated::new("בית"));
		live.status = PageStatus::Published;
		let draft = Page::new("draft", Translated::new("טיוטה"));
		let gone = Page::new("gone", Translated::new("נמחק"));
		for page in [&live, &draft, &gone] {
			pages.create(page).await.unwrap();
		}
		pages.soft_delete(&gone.id).await.unwrap();

		let read = ContactMessage::submit("A", "a@example.com", None, "hi").unwrap();
		let unread = ContactMessage::submit("B", "b@example.com", None, "hi").unwrap();
		contacts.create(&read).await.unwrap();
		contacts.create(&unread).await.unwrap();
		contacts.mark_read(&read.id).await.unwrap();

		let counts = DashboardRepository::new(pool).stats().await.unwrap().counts;
		assert_eq!(counts.pages, 2);
		assert_eq!(counts.published_pages, 1);
		assert_eq!(counts.unread_contacts, 1);
	}
}
