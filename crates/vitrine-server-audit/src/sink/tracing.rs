// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::AuditSinkError;
use crate::event::AuditLogEntry;
use crate::sink::AuditSink;

/// Writes audit entries to the application log under the `audit` target.
#[derive(Debug, Default)]
pub struct TracingAuditSink;

impl TracingAuditSink {
	pub fn new() -> Self {
		Self
	}
}

#[async_trait]
impl AuditSink for TracingAuditSink {
	fn name(&self) -> &str {
		"tracing"
	}

	async fn publish(&self, entry: Arc<AuditLogEntry>) -> Result<(), AuditSinkError> {
		::tracing::info!(
			target: "audit",
			audit_id = %entry.id,
			user_id = %entry.user_id,
			user_role = entry.user_role.as_deref().unwrap_or(""),
			action = %entry.action,
			entity_type = %entry.entity_type,
			entity_id = %entry.entity_id,
			entity_name = entry.entity_name.as_deref().unwrap_or(""),
			"audit event"
		);
		Ok(())
	}
}
