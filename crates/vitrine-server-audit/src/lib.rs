// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Audit logging for Vitrine content changes.
//!
//! Handlers build an [`AuditLogEntry`] for every create, update and delete
//! and hand it to the [`AuditService`], which queues it and publishes it to
//! each configured [`AuditSink`].

pub mod error;
pub mod event;
pub mod pipeline;
pub mod sink;

pub use error::{AuditError, AuditResult, AuditSinkError};
pub use event::{AuditAction, AuditEntityType, AuditLogBuilder, AuditLogEntry};
pub use pipeline::AuditService;
pub use sink::AuditSink;

pub use vitrine_server_config::{AuditConfig, QueueOverflowPolicy};

#[cfg(feature = "sink-sqlite")]
pub use sink::sqlite::SqliteAuditSink;

#[cfg(feature = "sink-tracing")]
pub use sink::tracing::TracingAuditSink;
