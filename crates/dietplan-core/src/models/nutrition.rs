// ABOUTME: Nutrition target and food catalog models
// ABOUTME: MacroTargets, FoodItem, Cuisine, and FoodCategory definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dietplan Contributors

use super::profile::PlanDuration;
use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Daily calorie and macronutrient targets derived from a profile
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MacroTargets {
    /// Daily calorie target (kcal, rounded)
    pub target_calories: i32,
    /// Daily protein (grams, rounded)
    pub protein: i32,
    /// Daily carbohydrates (grams, rounded)
    pub carbs: i32,
    /// Daily fat (grams, rounded)
    pub fat: i32,
    /// Meals per day
    pub meal_frequency: u8,
    /// Dietary preference tags exactly as supplied
    pub dietary_preferences: Vec<String>,
    /// Cuisine tags found in the preferences, or `["versatile"]`
    pub cuisine_preferences: Vec<String>,
    /// Requested plan length
    pub plan_duration: PlanDuration,
}

impl MacroTargets {
    /// Override the meal frequency
    #[must_use]
    pub fn with_meal_frequency(mut self, meal_frequency: u8) -> Self {
        self.meal_frequency = meal_frequency;
        self
    }
}

/// Cuisine a catalog food belongs to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Cuisine {
    /// Indian dishes and staples
    Indian,
    /// East and south-east Asian dishes
    Asian,
    /// Cuisine-neutral staples
    General,
}

/// Dominant macronutrient of a catalog food
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FoodCategory {
    /// Protein source
    Protein,
    /// Carbohydrate source
    Carb,
    /// Fat source
    Fat,
    /// Balanced dish
    Mixed,
}

impl Cuisine {
    /// All cuisines in catalog order
    pub const ALL: [Self; 3] = [Self::Indian, Self::Asian, Self::General];

    /// Wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Indian => "indian",
            Self::Asian => "asian",
            Self::General => "general",
        }
    }

    /// Map a cuisine preference tag onto a catalog cuisine
    ///
    /// Regional tags fold into their family; cuisines without catalog
    /// coverage (mexican, italian, ...) return `None`.
    #[must_use]
    pub fn from_preference_tag(tag: &str) -> Option<Self> {
        match tag {
            "indian" | "north-indian" | "south-indian" => Some(Self::Indian),
            "asian" | "chinese" | "japanese" | "thai" => Some(Self::Asian),
            _ => None,
        }
    }
}

impl FoodCategory {
    /// All categories in catalog order
    pub const ALL: [Self; 4] = [Self::Protein, Self::Carb, Self::Fat, Self::Mixed];

    /// Wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Protein => "protein",
            Self::Carb => "carb",
            Self::Fat => "fat",
            Self::Mixed => "mixed",
        }
    }
}

impl FromStr for Cuisine {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|cuisine| cuisine.as_str() == s)
            .ok_or_else(|| AppError::invalid_input(format!("Unknown cuisine '{s}'")))
    }
}

impl FromStr for FoodCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| AppError::invalid_input(format!("Unknown food category '{s}'")))
    }
}

impl fmt::Display for Cuisine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl fmt::Display for FoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Reference food with nutrition facts per serving
///
/// Values describe the food as eaten (post-preparation), so nutrients are
/// treated as scaling linearly with mass.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct FoodItem {
    /// Display name
    pub name: &'static str,
    /// Energy per serving (kcal)
    pub calories: f64,
    /// Protein per serving (grams)
    pub protein_g: f64,
    /// Total carbohydrates per serving (grams)
    pub carbohydrates_total_g: f64,
    /// Total fat per serving (grams)
    pub fat_total_g: f64,
    /// Reference serving mass (grams)
    pub serving_size_g: f64,
    /// Cuisine
    pub cuisine: Cuisine,
    /// Dominant macronutrient
    pub category: FoodCategory,
    /// Short description
    pub description: &'static str,
    /// Household measure for one serving
    pub portion_description: &'static str,
}
