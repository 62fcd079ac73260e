// SPDX-License-Identifier: MPL-2.0
//! HTTP clients for the SmartChef service.
//!
//! Two wire contracts live here: the settings endpoint
//! (`POST /settings/update/`, form-encoded, CSRF-guarded) and the read-mostly
//! recipe endpoints (`GET /api/recipes/`, `POST /like/{id}/`). Everything is
//! fire-and-forget from the UI's perspective: no retries beyond what the
//! failure policy asks for, no timeouts, no cancellation.

pub mod recipes;
pub mod settings;

/// Name of the CSRF field expected by the server.
pub const CSRF_FIELD: &str = "csrfmiddlewaretoken";
