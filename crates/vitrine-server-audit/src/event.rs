// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Audit log entries and their builder.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use vitrine_server_auth::CurrentUser;

use crate::error::AuditError;

/// Kind of change recorded by an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditAction {
	Create,
	Update,
	Delete,
}

impl AuditAction {
	pub fn as_str(self) -> &'static str {
		match self {
			AuditAction::Create => "create",
			AuditAction::Update => "update",
			AuditAction::Delete => "delete",
		}
	}
}

impl fmt::Display for AuditAction {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for AuditAction {
	type Err = AuditError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"create" => Ok(AuditAction::Create),
			"update" => Ok(AuditAction::Update),
			"delete" => Ok(AuditAction::Delete),
			other => Err(AuditError::InvalidValue(format!("unknown action '{other}'"))),
		}
	}
}

/// Kind of record an entry refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditEntityType {
	Page,
	Service,
	Category,
	Media,
	Testimonial,
	Faq,
	Contact,
	Setting,
}

impl AuditEntityType {
	pub fn as_str(self) -> &'static str {
		match self {
			AuditEntityType::Page => "page",
			AuditEntityType::Service => "service",
			AuditEntityType::Category => "category",
			AuditEntityType::Media => "media",
			AuditEntityType::Testimonial => "testimonial",
			AuditEntityType::Faq => "faq",
			AuditEntityType::Contact => "contact",
			AuditEntityType::Setting => "setting",
		}
	}
}

impl fmt::Display for AuditEntityType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for AuditEntityType {
	type Err = AuditError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"page" => Ok(AuditEntityType::Page),
			"service" => Ok(AuditEntityType::Service),
			"category" => Ok(AuditEntityType::Category),
			"media" => Ok(AuditEntityType::Media),
			"testimonial" => Ok(AuditEntityType::Testimonial),
			"faq" => Ok(AuditEntityType::Faq),
			"contact" => Ok(AuditEntityType::Contact),
			"setting" => Ok(AuditEntityType::Setting),
			other => Err(AuditError::InvalidValue(format!("unknown entity type '{other}'"))),
		}
	}
}

/// One recorded content change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditLogEntry {
	pub id: Uuid,
	pub timestamp: DateTime<Utc>,
	pub user_id: String,
	pub user_name: String,
	pub user_role: Option<String>,
	pub action: AuditAction,
	pub entity_type: AuditEntityType,
	pub entity_id: String,
	/// Human-readable label of the record at the time of the change.
	pub entity_name: Option<String>,
	pub details: Option<String>,
}

impl AuditLogEntry {
	pub fn builder(
		action: AuditAction,
		entity_type: AuditEntityType,
		entity_id: impl Into<String>,
	) -> AuditLogBuilder {
		AuditLogBuilder::new(action, entity_type, entity_id)
	}
}

#[derive(Debug, Clone)]
pub struct AuditLogBuilder {
	action: AuditAction,
	entity_type: AuditEntityType,
	entity_id: String,
	user_id: Option<String>,
	user_name: Option<String>,
	user_role: Option<String>,
	entity_name: Option<String>,
	details: Option<String>,
}

impl AuditLogBuilder {
	pub fn new(
		action: AuditAction,
		entity_type: AuditEntityType,
		entity_id: impl Into<String>,
	) -> Self {
		Self {
			action,
			entity_type,
			entity_id: entity_id.into(),
			user_id: None,
			user_name: None,
			user_role: None,
			entity_name: None,
			details: None,
		}
	}

	/// Record who made the change.
	pub fn actor(mut self, user: &CurrentUser) -> Self {
		self.user_id = Some(user.id.clone());
		self.user_name = Some(user.name.clone());
		self.user_role = Some(user.role.to_string());
		self
	}

	pub fn entity_name(mut self, name: impl Into<String>) -> Self {
		self.entity_name = Some(name.into());
		self
	}

	pub fn details(mut self, details: impl Into<String>) -> Self {
		self.details = Some(details.into());
		self
	}

	/// Entries without an actor are attributed to `system`.
	pub fn build(self) -> AuditLogEntry {
		let user_id = self.user_id.unwrap_or_else(|| "system".to_string());
		AuditLogEntry {
			id: Uuid::new_v4(),
			timestamp: Utc::now(),
			user_name: self.user_name.unwrap_or_else(|| user_id.clone()),
			user_id,
			user_role: self.user_role,
			action: self.action,
			entity_type: self.entity_type,
			entity_id: self.entity_id,
			entity_name: self.entity_name,
			details: self.details,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use vitrine_server_auth::Role;

	#[test]
	fn test_builder_records_actor() {
		let user = CurrentUser::new("u-1", "Dana", Role::Admin);
		let entry = AuditLogEntry::builder(AuditAction::Delete, AuditEntityType::Page, "p-1")
			.actor(&user)
			.entity_name("About")
			.build();

		assert_eq!(entry.user_id, "u-1");
		assert_eq!(entry.user_name, "Dana");
		assert_eq!(entry.user_role.as_deref(), Some("admin"));
		assert_eq!(entry.action, AuditAction::Delete);
		assert_eq!(entry.entity_type, AuditEntityType::Page);
		assert_eq!(entry.entity_id, "p-1");
		assert_eq!(entry.entity_name.as_deref(), Some("About"));
	}

	#[test]
	fn test_builder_without_actor_is_system() {
		let entry =
			AuditLogEntry::builder(AuditAction::Update, AuditEntityType::Setting, "bulk").build();
		assert_eq!(entry.user_id, "system");
		assert_eq!(entry.user_name, "system");
		assert!(entry.user_role.is_none());
	}

	#[test]
	fn test_entity_type_round_trip() {
		for ty in [
			AuditEntityType::Page,
			AuditEntityType::Service,
			AuditEntityType::Category,
			AuditEntityType::Media,
			AuditEntityType::Testimonial,
			AuditEntityType::Faq,
			AuditEntityType::Contact,
			AuditEntityType::Setting,
		] {
			assert_eq!(ty.as_str().parse::<AuditEntityType>().unwrap(), ty);
		}
		assert!("user".parse::<AuditEntityType>().is_err());
	}

	#[test]
	fn test_action_serializes_lowercase() {
		assert_eq!(serde_json::to_string(&AuditAction::Create).unwrap(), "\"create\"");
		assert_eq!("delete".parse::<AuditAction>().unwrap(), AuditAction::Delete);
	}
}
