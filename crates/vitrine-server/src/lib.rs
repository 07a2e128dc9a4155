// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Vitrine server library.
//!
//! Serves the public, localized site content and the authenticated CMS
//! admin API over one axum router.

pub mod api;
pub mod api_docs;
pub mod auth_middleware;
pub mod error;
pub mod i18n;
pub mod routes;

pub use api::{create_app_state, create_router, AppState, UploadSettings};
pub use api_docs::ApiDoc;
pub use error::{Resource, ServerError};
