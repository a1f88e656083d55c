// ABOUTME: Generated meal plan models
// ABOUTME: DietPlan, DayPlan, MealSuggestion, MealSlot, PortionedFood, and NutrientTotals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dietplan Contributors

use super::nutrition::MacroTargets;
use serde::{Deserialize, Serialize};
use std::ops::AddAssign;

/// Position of a meal within the day
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    /// First meal
    Breakfast,
    /// Midday meal
    Lunch,
    /// Evening meal
    Dinner,
    /// Any additional meal
    Snack,
}

impl MealSlot {
    /// Slots for a day with `meal_frequency` meals
    ///
    /// One meal is lunch, two are breakfast and dinner, three or more start
    /// with breakfast/lunch/dinner and fill the rest with snacks.
    #[must_use]
    pub fn for_frequency(meal_frequency: u8) -> Vec<Self> {
        match meal_frequency {
            0 => Vec::new(),
            1 => vec![Self::Lunch],
            2 => vec![Self::Breakfast, Self::Dinner],
            n => {
                let mut slots = vec![Self::Breakfast, Self::Lunch, Self::Dinner];
                slots.extend(std::iter::repeat(Self::Snack).take(usize::from(n - 3)));
                slots
            }
        }
    }
}

/// Summed nutrients of one or more portioned foods
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct NutrientTotals {
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (grams)
    pub protein_g: f64,
    /// Carbohydrates (grams)
    pub carbs_g: f64,
    /// Fat (grams)
    pub fat_g: f64,
}

impl AddAssign for NutrientTotals {
    fn add_assign(&mut self, rhs: Self) {
        self.calories += rhs.calories;
        self.protein_g += rhs.protein_g;
        self.carbs_g += rhs.carbs_g;
        self.fat_g += rhs.fat_g;
    }
}

/// A catalog food scaled to a target portion
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PortionedFood {
    /// Catalog food name
    pub name: String,
    /// Portion mass (grams)
    pub grams: f64,
    /// Nutrients contained in the portion
    pub nutrients: NutrientTotals,
    /// Human-readable portion, e.g. "1.5× (150g) of 1 cup"
    pub portion_description: String,
}

/// Suggested foods for one meal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealSuggestion {
    /// Meal slot
    pub meal: MealSlot,
    /// Calories this meal aims for
    pub target_calories: f64,
    /// Portioned foods
    pub items: Vec<PortionedFood>,
}

/// All meals for one plan day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DayPlan {
    /// Day number, starting at 1
    pub day: u8,
    /// Meals in slot order
    pub meals: Vec<MealSuggestion>,
    /// Sum over every item of every meal
    pub totals: NutrientTotals,
}

/// Targets plus example meals covering the requested duration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DietPlan {
    /// Targets the meals were scaled to
    pub targets: MacroTargets,
    /// One entry per plan day
    pub days: Vec<DayPlan>,
}
