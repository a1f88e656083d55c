// ABOUTME: Error handling re-exports from the dietplan-core crate
// ABOUTME: Keeps crate::errors paths stable for handlers and calculators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dietplan Contributors

//! Unified error types. `AppError` renders as a JSON error response through
//! the `http-response` feature of `dietplan-core`.

pub use dietplan_core::errors::{
    AppError, AppResult, ErrorCode, ErrorResponse, ErrorResponseDetails,
};
