// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, deployment modes, and runtime configuration parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dietplan Contributors

//! Environment-based configuration management for production deployment

use crate::config::intelligence::NutritionConfig;
use crate::constants::{env_config, limits};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational (default)
    #[default]
    Info,
    /// Debug output
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,
    /// HTTP API port
    pub http_port: u16,
    /// Log level
    pub log_level: LogLevel,
    /// Deployment environment
    pub environment: Environment,
    /// CORS allowed origins (`*` for any)
    pub cors_origins: Vec<String>,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
    /// Nutrition coefficients and meal plan limits
    pub nutrition: NutritionConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable holds an unparseable value or the
    /// nutrition configuration fails validation
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            host: env_config::host(),
            http_port: env_config::http_port(),
            log_level: LogLevel::from_str_or_default(&env_config::log_level()),
            environment: Environment::from_str_or_default(&env_config::environment()),
            cors_origins: parse_origins(&env_config::cors_allowed_origins()),
            request_timeout_secs: env_config::request_timeout_secs()
                .parse()
                .context("Invalid REQUEST_TIMEOUT_SECS value")?,
            nutrition: NutritionConfig::load().context("Invalid nutrition configuration")?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error for a zero port or timeout, or an empty origin list
    pub fn validate(&self) -> Result<()> {
        if self.http_port == 0 {
            return Err(anyhow::anyhow!("HTTP_PORT must be non-zero"));
        }
        if self.request_timeout_secs == 0 || self.request_timeout_secs > limits::MAX_REQUEST_TIMEOUT_SECS
        {
            return Err(anyhow::anyhow!(
                "REQUEST_TIMEOUT_SECS must be between 1 and {}",
                limits::MAX_REQUEST_TIMEOUT_SECS
            ));
        }
        if self.cors_origins.is_empty() {
            return Err(anyhow::anyhow!("CORS_ALLOWED_ORIGINS must not be empty"));
        }
        self.nutrition
            .validate()
            .context("Invalid nutrition configuration")?;
        Ok(())
    }

    /// Get a summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Diet Plan Server Configuration:\n\
             - Bind Address: {}:{}\n\
             - Log Level: {}\n\
             - Environment: {}\n\
             - CORS Origins: {}\n\
             - Request Timeout: {}s\n\
             - Default Meal Frequency: {}",
            self.host,
            self.http_port,
            self.log_level,
            self.environment,
            self.cors_origins.join(", "),
            self.request_timeout_secs,
            self.nutrition.meal_plan.default_meal_frequency,
        )
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: crate::constants::defaults::DEFAULT_HOST.to_owned(),
            http_port: crate::constants::ports::DEFAULT_HTTP_PORT,
            log_level: LogLevel::default(),
            environment: Environment::default(),
            cors_origins: vec!["*".to_owned()],
            request_timeout_secs: limits::DEFAULT_REQUEST_TIMEOUT_SECS,
            nutrition: NutritionConfig::default(),
        }
    }
}

/// Parse comma-separated CORS origins
fn parse_origins(origins_str: &str) -> Vec<String> {
    if origins_str == "*" {
        vec!["*".to_owned()]
    } else {
        origins_str
            .split(',')
            .map(|s| s.trim().to_owned())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins() {
        assert_eq!(parse_origins("*"), vec!["*"]);
        assert_eq!(
            parse_origins("https://a.example, https://b.example,"),
            vec!["https://a.example", "https://b.example"]
        );
        assert!(parse_origins(" , ").is_empty());
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str_or_default("DEBUG"), LogLevel::Debug);
        assert_eq!(LogLevel::from_str_or_default("bogus"), LogLevel::Info);
        assert_eq!(LogLevel::Warn.to_string(), "warn");
    }

    #[test]
    fn test_environment_parsing() {
        assert_eq!(
            Environment::from_str_or_default("prod"),
            Environment::Production
        );
        assert!(Environment::from_str_or_default("production").is_production());
        assert_eq!(
            Environment::from_str_or_default("anything"),
            Environment::Development
        );
    }

    #[test]
    fn test_config_validation() {
        let mut config = ServerConfig::default();
        assert!(config.validate().is_ok());

        config.http_port = 0;
        assert!(config.validate().is_err());

        config.http_port = 8081;
        config.cors_origins.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_summary_mentions_bind_address() {
        let config = ServerConfig::default();
        assert!(config.summary().contains("127.0.0.1:8081"));
    }
}
