// ABOUTME: Read-only food catalog with cuisine/category queries and portion scaling
// ABOUTME: Wraps the static food table and produces portioned foods for meal suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dietplan Contributors

//! Food Catalog
//!
//! The catalog is a compiled-in table that never changes for the lifetime of
//! the process. Queries preserve declaration order.

/// Static food table
pub mod data;
/// Portion math
pub mod portions;

pub use data::FOOD_DATABASE;
pub use portions::{calculate_portion, get_portion_description};

use dietplan_core::models::{Cuisine, FoodCategory, FoodItem, NutrientTotals, PortionedFood};

/// Wildcard accepted for either filter axis
pub const ALL_FILTER: &str = "all";

/// Filter the static catalog by cuisine and category wire names
///
/// `"all"` matches anything on its axis; unknown names match nothing.
#[must_use]
pub fn get_foods_by_category(cuisine: &str, category: &str) -> Vec<&'static FoodItem> {
    FoodCatalog::default().get_foods_by_category(cuisine, category)
}

/// Queryable view over a food table
#[derive(Debug, Clone, Copy)]
pub struct FoodCatalog {
    foods: &'static [FoodItem],
}

impl Default for FoodCatalog {
    fn default() -> Self {
        Self::new(FOOD_DATABASE)
    }
}

impl FoodCatalog {
    /// Catalog over an arbitrary static table
    #[must_use]
    pub const fn new(foods: &'static [FoodItem]) -> Self {
        Self { foods }
    }

    /// Every food in declaration order
    #[must_use]
    pub const fn all(&self) -> &'static [FoodItem] {
        self.foods
    }

    /// Number of foods
    #[must_use]
    pub const fn len(&self) -> usize {
        self.foods.len()
    }

    /// Whether the table is empty
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }

    /// Filter by cuisine and category wire names, `"all"` being a wildcard
    #[must_use]
    pub fn get_foods_by_category(&self, cuisine: &str, category: &str) -> Vec<&'static FoodItem> {
        self.foods
            .iter()
            .filter(|food| cuisine == ALL_FILTER || food.cuisine.as_str() == cuisine)
            .filter(|food| category == ALL_FILTER || food.category.as_str() == category)
            .collect()
    }

    /// Foods of one cuisine and category
    #[must_use]
    pub fn foods_for(&self, cuisine: Cuisine, category: FoodCategory) -> Vec<&'static FoodItem> {
        self.foods
            .iter()
            .filter(|food| food.cuisine == cuisine && food.category == category)
            .collect()
    }

    /// Look up a food by name, ignoring ASCII case
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&'static FoodItem> {
        self.foods
            .iter()
            .find(|food| food.name.eq_ignore_ascii_case(name.trim()))
    }

    /// Nutrients in `grams` of `food`
    #[must_use]
    pub fn scale(food: &FoodItem, grams: f64) -> NutrientTotals {
        let factor = grams / food.serving_size_g;
        NutrientTotals {
            calories: food.calories * factor,
            protein_g: food.protein_g * factor,
            carbs_g: food.carbohydrates_total_g * factor,
            fat_g: food.fat_total_g * factor,
        }
    }

    /// Portion `food` to `target_calories` and describe it
    #[must_use]
    pub fn portion(food: &FoodItem, target_calories: f64) -> PortionedFood {
        let grams = calculate_portion(food, target_calories);
        PortionedFood {
            name: food.name.to_owned(),
            grams,
            nutrients: Self::scale(food, grams),
            portion_description: get_portion_description(food, grams),
        }
    }
}
