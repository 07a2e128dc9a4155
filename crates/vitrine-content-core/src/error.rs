// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContentError {
	#[error("field '{0}' is required")]
	Required(&'static str),

	#[error("invalid slug '{0}'")]
	InvalidSlug(String),

	#[error("invalid email address '{0}'")]
	InvalidEmail(String),

	#[error("invalid page status '{0}'")]
	InvalidStatus(String),

	#[error("invalid setting type '{0}'")]
	InvalidSettingType(String),

	#[error("unsupported media type '{0}'")]
	UnsupportedMediaType(String),

	#[error("file of {size} bytes exceeds the {limit} byte limit")]
	FileTooLarge { size: u64, limit: u64 },
}
