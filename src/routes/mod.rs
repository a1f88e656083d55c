// ABOUTME: Route module organization for the diet plan HTTP API
// ABOUTME: Groups route definitions by domain with thin handlers over the library core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dietplan Contributors

//! HTTP routes, one module per domain

/// Macro targets and meal plan generation
pub mod diet_plan;
/// Food catalog browsing and portions
pub mod foods;
/// Health check and readiness
pub mod health;

use crate::errors::AppError;
use crate::middleware::REQUEST_ID_HEADER;
use axum::http::HeaderMap;

pub use diet_plan::{DietPlanRequest, DietPlanRoutes};
pub use foods::{FoodListResponse, FoodRoutes, PortionResponse};
pub use health::{HealthResponse, HealthRoutes, ReadinessResponse};

/// Tag an error with the request id assigned by the request-id middleware
pub(crate) fn with_request_id(error: AppError, headers: &HeaderMap) -> AppError {
    match headers
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
    {
        Some(request_id) => error.with_request_id(request_id),
        None => error,
    }
}
