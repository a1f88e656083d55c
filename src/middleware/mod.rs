// ABOUTME: HTTP middleware for the diet plan API
// ABOUTME: CORS configuration and request-id propagation layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dietplan Contributors

/// Cross-origin resource sharing
pub mod cors;

pub use cors::setup_cors;

/// Header carrying the per-request identifier
pub const REQUEST_ID_HEADER: &str = "x-request-id";
