// ABOUTME: Portion scaling helpers for catalog foods
// ABOUTME: Converts calorie targets to grams and renders household portion descriptions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dietplan Contributors

use dietplan_core::models::FoodItem;

/// Grams of `food` needed to supply `target_calories`
///
/// Assumes every nutrient scales linearly with mass. `food.calories` must be
/// positive, which holds for every catalog entry.
#[must_use]
pub fn calculate_portion(food: &FoodItem, target_calories: f64) -> f64 {
    (target_calories / food.calories) * food.serving_size_g
}

/// Describe `portion_g` grams of `food` relative to its reference serving
///
/// A ratio that rounds to 1.0 returns the stored description verbatim;
/// anything else reads like `"2.5× (250g) of 1 cup cooked"`.
#[must_use]
pub fn get_portion_description(food: &FoodItem, portion_g: f64) -> String {
    let ratio = (portion_g / food.serving_size_g * 10.0).round() / 10.0;

    if (ratio - 1.0).abs() < f64::EPSILON {
        return food.portion_description.to_owned();
    }

    format!(
        "{ratio:.1}× ({grams:.0}g) of {desc}",
        grams = portion_g.round(),
        desc = food.portion_description
    )
}
