// ABOUTME: Intelligence configuration for nutrition target and meal plan calculation
// ABOUTME: Groups the nutrition config types and their validation error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dietplan Contributors

//! Intelligence Configuration Module
//!
//! Configuration is loaded once at startup and passed by reference to the
//! calculators; nothing here is a process-wide singleton.

pub mod error;
pub mod nutrition;

pub use error::ConfigError;
pub use nutrition::{
    ActivityFactorsConfig, BmrConfig, GoalAdjustmentConfig, MacronutrientConfig, MealPlanConfig,
    NutritionConfig,
};
