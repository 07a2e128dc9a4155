// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sections. Each has a fully resolved `*Config` and a partial
//! `*ConfigLayer` used while merging sources.

mod audit;
mod auth;
mod database;
mod http;
mod logging;
mod uploads;

pub use audit::{AuditConfig, AuditConfigLayer, QueueOverflowPolicy};
pub use auth::{AuthConfig, AuthConfigLayer};
pub use database::{DatabaseConfig, DatabaseConfigLayer};
pub use http::{HttpConfig, HttpConfigLayer};
pub use logging::{LoggingConfig, LoggingConfigLayer};
pub use uploads::{UploadsConfig, UploadsConfigLayer};
