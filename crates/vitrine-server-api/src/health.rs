// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use serde::{Deserialize, Serialize};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
	Healthy,
	Unhealthy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct DatabaseHealth {
	pub status: HealthStatus,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct HealthResponse {
	pub status: HealthStatus,
	pub version: String,
	pub database: DatabaseHealth,
}

impl HealthResponse {
	pub fn new(version: impl Into<String>, database_error: Option<String>) -> Self {
		let status = if database_error.is_some() {
			HealthStatus::Unhealthy
		} else {
			HealthStatus::Healthy
		};
		Self {
			status,
			version: version.into(),
			database: DatabaseHealth {
				status,
				error: database_error,
			},
		}
	}

	pub fn is_healthy(&self) -> bool {
		self.status == HealthStatus::Healthy
	}
}
