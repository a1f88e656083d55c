// ABOUTME: Nutrition intelligence: macro target calculation, diet rules, and meal suggestions
// ABOUTME: Pure functions over user profiles, nutrition configuration, and the food catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dietplan Contributors

//! # Intelligence Module
//!
//! Everything that turns a user profile into numbers and meals. Nothing here
//! performs I/O; configuration and catalog are passed in by the caller.

/// Ordered diet-type rules selecting the macro split
pub mod diet_rules;
/// Example meal plans scaled to macro targets
pub mod meal_suggestions;
/// Mifflin-St Jeor calorie and macronutrient targets
pub mod nutrition_calculator;

pub use diet_rules::{DietRule, DietRules, MacroSplit};
pub use meal_suggestions::build_meal_plan;
pub use nutrition_calculator::{generate_diet_plan, MacroGrams};
