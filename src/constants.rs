// ABOUTME: System-wide constants and environment-backed configuration values
// ABOUTME: Re-exports core nutrition constants and adds server ports, limits, and env lookups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dietplan Contributors

//! # Constants Module
//!
//! Application constants and environment-based configuration values.

pub use dietplan_core::constants::{energy, meal_plan, preferences, profile_limits, service_names};

/// Network ports
pub mod ports {
    /// Default HTTP API port
    pub const DEFAULT_HTTP_PORT: u16 = 8081;
}

/// Fallback values for string settings
pub mod defaults {
    /// Default bind interface
    pub const DEFAULT_HOST: &str = "127.0.0.1";
}

/// Request limits
pub mod limits {
    /// Default per-request timeout
    pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
    /// Largest accepted per-request timeout
    pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;
}

/// Environment-based configuration
pub mod env_config {
    use std::env;

    /// Get HTTP port from environment or default
    #[must_use]
    pub fn http_port() -> u16 {
        env::var("HTTP_PORT")
            .ok()
            .and_then(|port| port.parse().ok())
            .unwrap_or(super::ports::DEFAULT_HTTP_PORT)
    }

    /// Get bind host from environment or default
    #[must_use]
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| super::defaults::DEFAULT_HOST.into())
    }

    /// Get log level from environment or default
    #[must_use]
    pub fn log_level() -> String {
        env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into())
    }

    /// Get deployment environment name from environment or default
    #[must_use]
    pub fn environment() -> String {
        env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into())
    }

    /// Get comma-separated CORS origins from environment or default
    #[must_use]
    pub fn cors_allowed_origins() -> String {
        env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| "*".into())
    }

    /// Get request timeout (raw string, parsed by `ServerConfig`)
    #[must_use]
    pub fn request_timeout_secs() -> String {
        env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| super::limits::DEFAULT_REQUEST_TIMEOUT_SECS.to_string())
    }
}
