// ABOUTME: Builds example meal plans from the food catalog scaled to macro targets
// ABOUTME: Splits each meal over protein, carb, and fat foods and rotates choices across days
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dietplan Contributors

//! Meal Suggestions
//!
//! Turns [`MacroTargets`] into a day or a week of illustrative meals. Each
//! meal gets an equal share of the daily calories, divided over one protein,
//! one carbohydrate and one fat food in proportion to the targets' macro
//! energy. Choices rotate through the cuisine's foods so consecutive meals
//! and days differ, and the same targets always produce the same plan.

use crate::catalog::FoodCatalog;
use crate::config::intelligence::MealPlanConfig;
use crate::errors::AppError;
use dietplan_core::constants::energy::{
    KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN,
};
use dietplan_core::constants::meal_plan::DAYS_PER_WEEK;
use dietplan_core::models::{
    Cuisine, DayPlan, DietPlan, FoodCategory, FoodItem, MacroTargets, MealSlot, MealSuggestion,
    NutrientTotals, PlanDuration,
};
use tracing::{debug, info};

/// Categories each meal draws from
const MEAL_CATEGORIES: [FoodCategory; 3] =
    [FoodCategory::Protein, FoodCategory::Carb, FoodCategory::Fat];

/// Catalog cuisine for the first cuisine preference the catalog covers
///
/// Falls back to [`Cuisine::General`].
#[must_use]
pub fn resolve_cuisine(cuisine_preferences: &[String]) -> Cuisine {
    cuisine_preferences
        .iter()
        .find_map(|tag| Cuisine::from_preference_tag(tag))
        .unwrap_or(Cuisine::General)
}

/// Share of energy for protein, carbohydrate and fat foods, summing to 1
///
/// Negative macro targets contribute nothing.
///
/// # Errors
///
/// Returns an error if no macro contributes energy
pub fn category_shares(targets: &MacroTargets) -> Result<[f64; 3], AppError> {
    let kcal = [
        f64::from(targets.protein.max(0)) * KCAL_PER_GRAM_PROTEIN,
        f64::from(targets.carbs.max(0)) * KCAL_PER_GRAM_CARBS,
        f64::from(targets.fat.max(0)) * KCAL_PER_GRAM_FAT,
    ];
    let total: f64 = kcal.iter().sum();
    if total <= 0.0 {
        return Err(AppError::value_out_of_range(
            "Macro targets contain no energy to distribute",
        ));
    }
    Ok(kcal.map(|k| k / total))
}

/// Build example meals covering the targets' plan duration
///
/// # Errors
///
/// Returns `VALUE_OUT_OF_RANGE` when the meal frequency is outside
/// `1..=max_meal_frequency` or the targets hold no energy, and
/// `INTERNAL_ERROR` when the catalog lacks foods for a meal category
pub fn build_meal_plan(
    targets: &MacroTargets,
    catalog: &FoodCatalog,
    config: &MealPlanConfig,
) -> Result<DietPlan, AppError> {
    let frequency = targets.meal_frequency;
    if frequency == 0 || frequency > config.max_meal_frequency {
        return Err(AppError::value_out_of_range(format!(
            "Meal frequency must be between 1 and {}",
            config.max_meal_frequency
        )));
    }
    if targets.target_calories <= 0 {
        return Err(AppError::value_out_of_range(
            "Target calories must be positive",
        ));
    }

    let shares = category_shares(targets)?;
    let cuisine = resolve_cuisine(&targets.cuisine_preferences);
    let pools = MEAL_CATEGORIES
        .iter()
        .map(|&category| category_pool(catalog, cuisine, category))
        .collect::<Result<Vec<_>, _>>()?;

    let slots = MealSlot::for_frequency(frequency);
    let meal_kcal = f64::from(targets.target_calories) / f64::from(frequency);
    let day_count = match targets.plan_duration {
        PlanDuration::Day => 1,
        PlanDuration::Week => DAYS_PER_WEEK,
    };

    info!(
        cuisine = %cuisine,
        days = day_count,
        meal_frequency = frequency,
        "Building meal plan"
    );

    let days = (0..day_count)
        .map(|day_index| {
            let meals: Vec<MealSuggestion> = slots
                .iter()
                .enumerate()
                .map(|(slot_index, &meal)| {
                    let rotation = usize::from(day_index) * slots.len() + slot_index;
                    let items = pools
                        .iter()
                        .zip(shares)
                        .filter(|(_, share)| *share > 0.0)
                        .map(|(pool, share)| {
                            let food = pool[rotation % pool.len()];
                            FoodCatalog::portion(food, meal_kcal * share)
                        })
                        .collect();
                    MealSuggestion {
                        meal,
                        target_calories: meal_kcal,
                        items,
                    }
                })
                .collect();

            let mut totals = NutrientTotals::default();
            for item in meals.iter().flat_map(|meal| &meal.items) {
                totals += item.nutrients;
            }

            DayPlan {
                day: day_index + 1,
                meals,
                totals,
            }
        })
        .collect();

    Ok(DietPlan {
        targets: targets.clone(),
        days,
    })
}

/// Foods for a category in the chosen cuisine, or general foods if it has none
fn category_pool(
    catalog: &FoodCatalog,
    cuisine: Cuisine,
    category: FoodCategory,
) -> Result<Vec<&'static FoodItem>, AppError> {
    let pool = catalog.foods_for(cuisine, category);
    if !pool.is_empty() {
        return Ok(pool);
    }

    debug!(cuisine = %cuisine, category = %category, "Falling back to general foods");
    let fallback = catalog.foods_for(Cuisine::General, category);
    if fallback.is_empty() {
        return Err(AppError::internal(format!(
            "Food catalog has no {category} foods"
        )));
    }
    Ok(fallback)
}
