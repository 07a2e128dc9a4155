// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Audit logging configuration section.

use serde::{Deserialize, Serialize};

const DEFAULT_QUEUE_CAPACITY: usize = 1024;

/// What the audit queue does when it is full.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum QueueOverflowPolicy {
	#[default]
	DropNewest,
	DropOldest,
	Block,
}

impl QueueOverflowPolicy {
	/// Lenient parse used for environment values; unknown names drop newest.
	pub fn from_name(name: &str) -> Self {
		match name.to_lowercase().as_str() {
			"drop_oldest" => QueueOverflowPolicy::DropOldest,
			"block" => QueueOverflowPolicy::Block,
			_ => QueueOverflowPolicy::DropNewest,
		}
	}
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AuditConfigLayer {
	pub enabled: Option<bool>,
	pub queue_capacity: Option<usize>,
	pub queue_overflow_policy: Option<QueueOverflowPolicy>,
}

impl AuditConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.enabled.is_some() {
			self.enabled = other.enabled;
		}
		if other.queue_capacity.is_some() {
			self.queue_capacity = other.queue_capacity;
		}
		if other.queue_overflow_policy.is_some() {
			self.queue_overflow_policy = other.queue_overflow_policy;
		}
	}

	pub fn finalize(self) -> AuditConfig {
		AuditConfig {
			enabled: self.enabled.unwrap_or(true),
			queue_capacity: self
				.queue_capacity
				.filter(|c| *c > 0)
				.unwrap_or(DEFAULT_QUEUE_CAPACITY),
			queue_overflow_policy: self.queue_overflow_policy.unwrap_or_default(),
		}
	}
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuditConfig {
	pub enabled: bool,
	pub queue_capacity: usize,
	pub queue_overflow_policy: QueueOverflowPolicy,
}

impl Default for AuditConfig {
	fn default() -> Self {
		AuditConfigLayer::default().finalize()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_defaults() {
		let config = AuditConfig::default();
		assert!(config.enabled);
		assert_eq!(config.queue_capacity, 1024);
		assert_eq!(config.queue_overflow_policy, QueueOverflowPolicy::DropNewest);
	}

	#[test]
	fn test_zero_capacity_uses_default() {
		let config = AuditConfigLayer {
			queue_capacity: Some(0),
			..Default::default()
		}
		.finalize();
		assert_eq!(config.queue_capacity, 1024);
	}

	#[test]
	fn test_policy_from_name() {
		assert_eq!(QueueOverflowPolicy::from_name("BLOCK"), QueueOverflowPolicy::Block);
		assert_eq!(
			QueueOverflowPolicy::from_name("drop_oldest"),
			QueueOverflowPolicy::DropOldest
		);
		assert_eq!(QueueOverflowPolicy::from_name("???"), QueueOverflowPolicy::DropNewest);
	}

	#[test]
	fn test_policy_deserializes_snake_case() {
		let layer: AuditConfigLayer = toml::from_str("queue_overflow_policy = \"drop_oldest\"").unwrap();
		assert_eq!(layer.queue_overflow_policy, Some(QueueOverflowPolicy::DropOldest));
	}
}
