// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use vitrine_server_audit::AuditLogEntry;
use vitrine_server_db::{AuditLogPage, AuditLogQuery};

#[cfg(feature = "openapi")]
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct AuditLogEntryResponse {
	pub id: String,
	pub timestamp: DateTime<Utc>,
	pub user_id: String,
	pub user_name: String,
	pub user_role: Option<String>,
	pub action: String,
	pub entity_type: String,
	pub entity_id: String,
	pub entity_name: Option<String>,
	pub details: Option<String>,
}

impl From<&AuditLogEntry> for AuditLogEntryResponse {
	fn from(entry: &AuditLogEntry) -> Self {
		Self {
			id: entry.id.to_string(),
			timestamp: entry.timestamp,
			user_id: entry.user_id.clone(),
			user_name: entry.user_name.clone(),
			user_role: entry.user_role.clone(),
			action: entry.action.to_string(),
			entity_type: entry.entity_type.to_string(),
			entity_id: entry.entity_id.clone(),
			entity_name: entry.entity_name.clone(),
			details: entry.details.clone(),
		}
	}
}

/// Paginated list of audit logs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct ListAuditLogsResponse {
	pub logs: Vec<AuditLogEntryResponse>,
	pub total: i64,
	pub limit: i64,
	pub offset: i64,
}

impl From<&AuditLogPage> for ListAuditLogsResponse {
	fn from(page: &AuditLogPage) -> Self {
		Self {
			logs: page.logs.iter().map(AuditLogEntryResponse::from).collect(),
			total: page.total,
			limit: page.limit,
			offset: page.offset,
		}
	}
}

/// Query parameters for listing audit logs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(IntoParams))]
pub struct ListAuditLogsParams {
	pub limit: Option<i64>,
	pub offset: Option<i64>,
	/// `page`, `service`, `category`, `media`, `testimonial`, `faq`,
	/// `contact` or `setting`. Unknown values are ignored.
	pub entity_type: Option<String>,
}

impl ListAuditLogsParams {
	pub fn to_query(&self) -> AuditLogQuery {
		AuditLogQuery {
			limit: self.limit,
			offset: self.offset,
			entity_type: self
				.entity_type
				.as_deref()
				.filter(|s| !s.is_empty())
				.and_then(|s| s.parse().ok()),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use vitrine_server_audit::{AuditAction, AuditEntityType};

	#[test]
	fn test_params_parse_entity_type() {
		let params = ListAuditLogsParams {
			limit: Some(10),
			offset: None,
			entity_type: Some("faq".to_string()),
		};
		let query = params.to_query();
		assert_eq!(query.entity_type, Some(AuditEntityType::Faq));
		assert_eq!(query.limit, Some(10));

		let unknown = ListAuditLogsParams {
			entity_type: Some("user".to_string()),
			..Default::default()
		};
		assert_eq!(unknown.to_query().entity_type, None);
	}

	#[test]
	fn test_entry_response_uses_wire_names() {
		let entry = AuditLogEntry::builder(AuditAction::Update, AuditEntityType::Setting, "bulk")
			.entity_name("עדכון הגדרות")
			.build();
		let response = AuditLogEntryResponse::from(&entry);
		assert_eq!(response.action, "update");
		assert_eq!(response.entity_type, "setting");
		assert_eq!(response.user_id, "system");
	}
}
