// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, reference profiles, and router construction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dietplan Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `dietplan_server`

use dietplan_server::{
    config::environment::ServerConfig,
    models::{ActivityLevel, Gender, Goal, PlanDuration, UserProfile},
    server::{build_router, ServerResources},
};
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// 70 kg, 175 cm, 30 year old moderately active male maintaining weight
pub fn reference_profile() -> UserProfile {
    UserProfile {
        weight: 70.0,
        height: 175.0,
        age: 30,
        gender: Gender::Male,
        activity_level: ActivityLevel::Moderate,
        goal: Goal::Maintain,
        dietary_preferences: Vec::new(),
        plan_duration: PlanDuration::Day,
    }
}

/// Reference profile with the given preference tags
pub fn profile_with_preferences(tags: &[&str]) -> UserProfile {
    UserProfile {
        dietary_preferences: tags.iter().map(|&tag| tag.to_owned()).collect(),
        ..reference_profile()
    }
}

/// Server resources over default configuration
pub fn create_test_server_resources() -> Arc<ServerResources> {
    init_test_logging();
    Arc::new(ServerResources::new(ServerConfig::default()))
}

/// Full application router with middleware
pub fn create_test_router() -> axum::Router {
    build_router(create_test_server_resources())
}
