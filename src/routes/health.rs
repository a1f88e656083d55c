// ABOUTME: Liveness and readiness endpoints for load balancers and orchestrators
// ABOUTME: Readiness reports the loaded food catalog and diet rules and fails when the catalog is empty
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dietplan Contributors

//! Health check routes

use crate::constants::service_names;
use crate::server::ServerResources;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use dietplan_core::models::Cuisine;
use serde::Serialize;
use std::sync::Arc;

/// Liveness response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `healthy` while the process serves requests
    pub status: &'static str,
    /// Service name
    pub service: &'static str,
    /// Crate version
    pub version: &'static str,
    /// RFC 3339 timestamp
    pub timestamp: String,
}

/// Readiness response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadinessResponse {
    /// `ready` or `unavailable`
    pub status: &'static str,
    /// Foods in the catalog
    pub catalog_size: usize,
    /// Cuisines with at least one food
    pub cuisines: Vec<Cuisine>,
    /// Tagged diet rules plus the fallback
    pub diet_rules: usize,
    /// RFC 3339 timestamp
    pub timestamp: String,
}

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/health", get(Self::handle_health))
            .route("/ready", get(Self::handle_ready))
            .with_state(resources)
    }

    async fn handle_health() -> Json<HealthResponse> {
        Json(HealthResponse {
            status: "healthy",
            service: service_names::DIETPLAN_SERVER,
            version: env!("CARGO_PKG_VERSION"),
            timestamp: chrono::Utc::now().to_rfc3339(),
        })
    }

    /// Ready once the catalog can serve meal plans
    async fn handle_ready(State(resources): State<Arc<ServerResources>>) -> Response {
        let catalog = &resources.catalog;
        let cuisines: Vec<Cuisine> = Cuisine::ALL
            .into_iter()
            .filter(|&cuisine| catalog.all().iter().any(|food| food.cuisine == cuisine))
            .collect();

        let ready = !catalog.is_empty();
        let body = ReadinessResponse {
            status: if ready { "ready" } else { "unavailable" },
            catalog_size: catalog.len(),
            cuisines,
            diet_rules: resources.config.nutrition.diet_rules.rules.len() + 1,
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        let status = if ready {
            StatusCode::OK
        } else {
            StatusCode::SERVICE_UNAVAILABLE
        };
        (status, Json(body)).into_response()
    }
}
