// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use serde::{Deserialize, Serialize};
use vitrine_server_db::DashboardStats;

use crate::audit::AuditLogEntryResponse;

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct DashboardCountsResponse {
	pub pages: i64,
	pub published_pages: i64,
	pub services: i64,
	pub categories: i64,
	pub media: i64,
	pub unread_contacts: i64,
	pub testimonials: i64,
	pub faq: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct DashboardResponse {
	pub counts: DashboardCountsResponse,
	pub recent_activity: Vec<AuditLogEntryResponse>,
}

impl From<&DashboardStats> for DashboardResponse {
	fn from(stats: &DashboardStats) -> Self {
		let c = &stats.counts;
		Self {
			counts: DashboardCountsResponse {
				pages: c.pages,
				published_pages: c.published_pages,
				services: c.services,
				categories: c.categories,
				media: c.media,
				unread_contacts: c.unread_contacts,
				testimonials: c.testimonials,
				faq: c.faq,
			},
			recent_activity: stats
				.recent_activity
				.iter()
				.map(AuditLogEntryResponse::from)
				.collect(),
		}
	}
}
