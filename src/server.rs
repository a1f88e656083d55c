// ABOUTME: HTTP server assembly: shared resources, router composition, and the serve loop
// ABOUTME: Merges domain routes and applies tracing, request-id, timeout, and CORS layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dietplan Contributors

//! HTTP server for the diet plan API

use crate::catalog::FoodCatalog;
use crate::config::environment::ServerConfig;
use crate::middleware::{setup_cors, REQUEST_ID_HEADER};
use crate::routes::{DietPlanRoutes, FoodRoutes, HealthRoutes};
use anyhow::{Context, Result};
use axum::Router;
use http::HeaderName;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Immutable state shared by every request handler
#[derive(Debug, Clone)]
pub struct ServerResources {
    /// Server and nutrition configuration
    pub config: Arc<ServerConfig>,
    /// Food catalog
    pub catalog: FoodCatalog,
}

impl ServerResources {
    /// Resources over the compiled-in food catalog
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
            catalog: FoodCatalog::default(),
        }
    }
}

/// Compose every route with the standard middleware stack
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);
    let timeout = Duration::from_secs(resources.config.request_timeout_secs);
    let cors = setup_cors(&resources.config);

    Router::new()
        .merge(HealthRoutes::routes(Arc::clone(&resources)))
        .merge(DietPlanRoutes::routes(Arc::clone(&resources)))
        .merge(FoodRoutes::routes(resources))
        .layer(TimeoutLayer::new(timeout))
        .layer(cors)
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
}

/// Bind the configured address and serve until Ctrl-C
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails
pub async fn run(resources: Arc<ServerResources>) -> Result<()> {
    let addr = format!("{}:{}", resources.config.host, resources.config.http_port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("HTTP server listening on {}", addr);

    axum::serve(listener, build_router(resources))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
