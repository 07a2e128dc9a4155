// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{instrument, warn};
use vitrine_server_config::QueueOverflowPolicy;

use crate::event::AuditLogEntry;
use crate::sink::AuditSink;

/// Queues audit entries and fans them out to sinks on a background task, so
/// request handlers never wait on sink I/O.
pub struct AuditService {
	tx: mpsc::Sender<AuditLogEntry>,
	overflow_policy: QueueOverflowPolicy,
}

impl AuditService {
	/// Must be called inside a tokio runtime.
	pub fn new(
		queue_capacity: usize,
		overflow_policy: QueueOverflowPolicy,
		sinks: Vec<Arc<dyn AuditSink>>,
	) -> Self {
		let (tx, rx) = mpsc::channel(queue_capacity.max(1));

		tokio::spawn(Self::background_task(rx, sinks));

		Self {
			tx,
			overflow_policy,
		}
	}

	async fn background_task(
		mut rx: mpsc::Receiver<AuditLogEntry>,
		sinks: Vec<Arc<dyn AuditSink>>,
	) {
		while let Some(entry) = rx.recv().await {
			let entry = Arc::new(entry);

			for sink in &sinks {
				let sink = Arc::clone(sink);
				let entry = Arc::clone(&entry);

				tokio::spawn(async move {
					if let Err(e) = sink.publish(entry).await {
						warn!(sink = sink.name(), error = %e, "audit sink publish failed");
					}
				});
			}
		}
	}

	/// Queue an entry. Returns `false` when it was dropped.
	///
	/// With `Block` the send happens on a spawned task and always reports
	/// success. Both drop policies reject the incoming entry when the queue is
	/// full; the bounded channel cannot evict what it already holds.
	#[instrument(skip(self, entry), fields(action = %entry.action, entity_type = %entry.entity_type))]
	pub fn log(&self, entry: AuditLogEntry) -> bool {
		match self.overflow_policy {
			QueueOverflowPolicy::Block => {
				let tx = self.tx.clone();
				tokio::spawn(async move {
					let _ = tx.send(entry).await;
				});
				true
			}
			QueueOverflowPolicy::DropNewest | QueueOverflowPolicy::DropOldest => {
				let queued = self.tx.try_send(entry).is_ok();
				if !queued {
					warn!("audit queue full, dropping entry");
				}
				queued
			}
		}
	}
}
