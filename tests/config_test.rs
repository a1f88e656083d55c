// ABOUTME: Integration tests for environment-driven server and nutrition configuration
// ABOUTME: Verifies defaults, DIETPLAN_* overrides, and validation of bad values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dietplan Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use dietplan_server::config::environment::{Environment, LogLevel, ServerConfig};
use dietplan_server::config::intelligence::{ConfigError, NutritionConfig};
use serial_test::serial;
use std::env;

const SERVER_VARS: &[&str] = &[
    "HTTP_PORT",
    "HOST",
    "LOG_LEVEL",
    "ENVIRONMENT",
    "CORS_ALLOWED_ORIGINS",
    "REQUEST_TIMEOUT_SECS",
];

const NUTRITION_VARS: &[&str] = &[
    "DIETPLAN_ACTIVITY_FACTOR_SEDENTARY",
    "DIETPLAN_ACTIVITY_FACTOR_LIGHT",
    "DIETPLAN_ACTIVITY_FACTOR_MODERATE",
    "DIETPLAN_ACTIVITY_FACTOR_ACTIVE",
    "DIETPLAN_ACTIVITY_FACTOR_VERY_ACTIVE",
    "DIETPLAN_GOAL_DEFICIT_KCAL",
    "DIETPLAN_GOAL_SURPLUS_KCAL",
    "DIETPLAN_PROTEIN_G_PER_KG",
    "DIETPLAN_DEFAULT_MEAL_FREQUENCY",
    "DIETPLAN_MAX_MEAL_FREQUENCY",
];

fn clear_env() {
    for var in SERVER_VARS.iter().chain(NUTRITION_VARS) {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_server_config_defaults() {
    clear_env();

    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.http_port, 8081);
    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.log_level, LogLevel::Info);
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.cors_origins, vec!["*"]);
    assert_eq!(config.request_timeout_secs, 30);
    assert_eq!(config.nutrition.meal_plan.default_meal_frequency, 3);
}

#[test]
#[serial]
fn test_server_config_from_env() {
    clear_env();
    env::set_var("HTTP_PORT", "9090");
    env::set_var("HOST", "0.0.0.0");
    env::set_var("LOG_LEVEL", "debug");
    env::set_var("ENVIRONMENT", "production");
    env::set_var(
        "CORS_ALLOWED_ORIGINS",
        "https://app.example.com, https://admin.example.com",
    );

    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.http_port, 9090);
    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.log_level, LogLevel::Debug);
    assert!(config.environment.is_production());
    assert_eq!(
        config.cors_origins,
        vec!["https://app.example.com", "https://admin.example.com"]
    );
    assert!(config.summary().contains("0.0.0.0:9090"));

    clear_env();
}

#[test]
#[serial]
fn test_invalid_timeout_rejected() {
    clear_env();
    env::set_var("REQUEST_TIMEOUT_SECS", "soon");
    assert!(ServerConfig::from_env().is_err());

    env::set_var("REQUEST_TIMEOUT_SECS", "0");
    assert!(ServerConfig::from_env().is_err());

    clear_env();
}

#[test]
#[serial]
fn test_nutrition_overrides_applied() {
    clear_env();
    env::set_var("DIETPLAN_PROTEIN_G_PER_KG", "2.0");
    env::set_var("DIETPLAN_GOAL_DEFICIT_KCAL", "300");
    env::set_var("DIETPLAN_DEFAULT_MEAL_FREQUENCY", "4");

    let config = NutritionConfig::load().unwrap();
    assert!((config.macronutrients.protein_g_per_kg - 2.0).abs() < f64::EPSILON);
    assert!((config.goal_adjustments.deficit_kcal - 300.0).abs() < f64::EPSILON);
    assert_eq!(config.meal_plan.default_meal_frequency, 4);

    clear_env();
}

#[test]
#[serial]
fn test_unparseable_override_rejected() {
    clear_env();
    env::set_var("DIETPLAN_ACTIVITY_FACTOR_MODERATE", "fast");

    assert!(matches!(NutritionConfig::load(), Err(ConfigError::Parse(_))));

    clear_env();
}

#[test]
#[serial]
fn test_out_of_order_activity_factors_rejected() {
    clear_env();
    env::set_var("DIETPLAN_ACTIVITY_FACTOR_LIGHT", "1.8");

    assert!(matches!(
        NutritionConfig::load(),
        Err(ConfigError::InvalidRange(_))
    ));

    clear_env();
}

#[test]
#[serial]
fn test_default_frequency_above_max_rejected() {
    clear_env();
    env::set_var("DIETPLAN_MAX_MEAL_FREQUENCY", "2");

    assert!(NutritionConfig::load().is_err());

    clear_env();
}

#[test]
#[serial]
fn test_non_finite_overrides_rejected() {
    for (var, value) in [
        ("DIETPLAN_GOAL_DEFICIT_KCAL", "NaN"),
        ("DIETPLAN_ACTIVITY_FACTOR_MODERATE", "NaN"),
        ("DIETPLAN_PROTEIN_G_PER_KG", "inf"),
    ] {
        clear_env();
        env::set_var(var, value);

        assert!(
            matches!(
                NutritionConfig::load(),
                Err(ConfigError::ValueOutOfRange(_))
            ),
            "{var}={value}"
        );
        assert!(ServerConfig::from_env().is_err(), "{var}={value}");
    }

    clear_env();
}
