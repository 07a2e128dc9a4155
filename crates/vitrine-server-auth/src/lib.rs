// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Request identity for the Vitrine server.
//!
//! Credentials are verified by an upstream identity provider; this crate only
//! turns the forwarded identity into a [`CurrentUser`] and answers role
//! questions about it.

pub mod middleware;
pub mod types;

pub use middleware::{
	authenticate, extract_identity, AdminRequired, AuthConfig, AuthContext, AuthRequired,
	CurrentUser, DEV_USER_ID, USER_ID_HEADER, USER_NAME_HEADER, USER_ROLE_HEADER,
};
pub use types::Role;
