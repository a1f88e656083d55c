// ABOUTME: Main library entry point for the diet plan generator
// ABOUTME: Exposes the macro calculator, food catalog, meal suggestions, and HTTP API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dietplan Contributors

#![deny(unsafe_code)]

//! # Dietplan Server
//!
//! Computes daily calorie and macronutrient targets with the Mifflin-St Jeor
//! equation and builds illustrative meals from a compiled-in food catalog.
//!
//! ## Architecture
//!
//! - **Intelligence**: macro calculator, diet rules, meal suggestions
//! - **Catalog**: static food table and portion helpers
//! - **Config**: nutrition constants and server settings from the environment
//! - **Routes / Server**: axum HTTP API over the library
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use dietplan_server::config::intelligence::NutritionConfig;
//! use dietplan_server::errors::AppResult;
//! use dietplan_server::intelligence::generate_diet_plan;
//! use dietplan_server::models::{ActivityLevel, Gender, Goal, PlanDuration, UserProfile};
//!
//! fn main() -> AppResult<()> {
//!     let profile = UserProfile {
//!         weight: 70.0,
//!         height: 175.0,
//!         age: 30,
//!         gender: Gender::Male,
//!         activity_level: ActivityLevel::Moderate,
//!         goal: Goal::Maintain,
//!         dietary_preferences: vec!["indian".to_owned()],
//!         plan_duration: PlanDuration::Day,
//!     };
//!
//!     let targets = generate_diet_plan(&profile, &NutritionConfig::default())?;
//!     println!("{} kcal, {} g protein", targets.target_calories, targets.protein);
//!     Ok(())
//! }
//! ```

/// Static food catalog and portion scaling
pub mod catalog;

/// Configuration management
pub mod config;

/// Application constants and environment lookups
pub mod constants;

/// Unified error handling
pub mod errors;

/// Macro calculation, diet rules, and meal suggestions
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// HTTP middleware
pub mod middleware;

/// HTTP route handlers
pub mod routes;

/// HTTP server assembly
pub mod server;

/// Domain models shared with `dietplan-core`
pub mod models {
    pub use dietplan_core::models::*;
}
