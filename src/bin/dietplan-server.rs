// ABOUTME: HTTP server binary for the diet plan API
// ABOUTME: Loads configuration, initializes logging, and serves until interrupted
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dietplan Contributors

//! # Diet Plan API Server Binary
//!
//! Serves macro target calculation, meal plan generation, and catalog
//! browsing over JSON HTTP.

use anyhow::Result;
use clap::Parser;
use dietplan_server::{
    config::environment::ServerConfig,
    logging::LoggingConfig,
    server::{self, ServerResources},
};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "dietplan-server")]
#[command(about = "Diet plan API - calorie and macro targets with catalog-based meal suggestions")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override bind host
    #[arg(long)]
    host: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    LoggingConfig::for_server(&config).init()?;

    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(host) = args.host {
        config.host = host;
    }

    info!("Starting diet plan server");
    info!("{}", config.summary());

    display_available_endpoints(&config);

    let resources = Arc::new(ServerResources::new(config));
    if let Err(e) = server::run(resources).await {
        error!("Server error: {}", e);
        return Err(e);
    }

    Ok(())
}

/// Display the available API endpoints
#[allow(clippy::cognitive_complexity)]
fn display_available_endpoints(config: &ServerConfig) {
    let host = &config.host;
    let port = config.http_port;

    info!("=== Available API Endpoints ===");
    info!("   Diet Targets:   POST http://{host}:{port}/api/diet-plan/targets");
    info!("   Diet Plan:      POST http://{host}:{port}/api/diet-plan");
    info!("   Foods:          GET  http://{host}:{port}/api/foods?cuisine=&category=");
    info!("   Food Portion:   GET  http://{host}:{port}/api/foods/{{name}}/portion?calories=");
    info!("   Health Check:   GET  http://{host}:{port}/health");
    info!("   Readiness:      GET  http://{host}:{port}/ready");
    info!("=== End of Endpoint List ===");
}
