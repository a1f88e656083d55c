// ABOUTME: Core data models for the diet plan generator
// ABOUTME: Re-exports profile, nutrition target, food catalog, and meal plan types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dietplan Contributors

/// Food catalog entries and macro targets
pub mod nutrition;

/// Generated meal plans
pub mod meal_plan;

/// User body metrics and preferences
pub mod profile;

pub use meal_plan::{DayPlan, DietPlan, MealSlot, MealSuggestion, NutrientTotals, PortionedFood};
pub use nutrition::{Cuisine, FoodCategory, FoodItem, MacroTargets};
pub use profile::{ActivityLevel, Gender, Goal, PlanDuration, UserProfile};
