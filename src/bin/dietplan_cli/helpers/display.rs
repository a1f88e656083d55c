// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dietplan Contributors
// ABOUTME: Output formatting helpers for dietplan-cli
// ABOUTME: Renders targets, meal plans, and catalog listings as plain text

use dietplan_server::errors::AppResult;
use dietplan_server::models::{DietPlan, FoodItem, MacroTargets};
use serde::Serialize;

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Display daily targets
pub fn display_targets(targets: &MacroTargets) {
    println!("\nDaily Targets");
    println!("{}", "=".repeat(40));
    println!("   Calories:  {} kcal", targets.target_calories);
    println!("   Protein:   {} g", targets.protein);
    println!("   Carbs:     {} g", targets.carbs);
    println!("   Fat:       {} g", targets.fat);
    println!("   Meals/day: {}", targets.meal_frequency);
    println!("   Cuisines:  {}", targets.cuisine_preferences.join(", "));
    if !targets.dietary_preferences.is_empty() {
        println!("   Preferences: {}", targets.dietary_preferences.join(", "));
    }
}

/// Display every day of a meal plan
pub fn display_plan(plan: &DietPlan) {
    for day in &plan.days {
        println!("\nDay {}", day.day);
        println!("{}", "-".repeat(40));
        for meal in &day.meals {
            println!("  {:?} (~{:.0} kcal)", meal.meal, meal.target_calories);
            for item in &meal.items {
                println!(
                    "     {:<24} {:>6.0} kcal  {}",
                    item.name, item.nutrients.calories, item.portion_description
                );
            }
        }
        println!(
            "  Total: {:.0} kcal, {:.0} g protein, {:.0} g carbs, {:.0} g fat",
            day.totals.calories, day.totals.protein_g, day.totals.carbs_g, day.totals.fat_g
        );
    }
}

/// Display catalog foods as a table
pub fn display_foods(foods: &[&FoodItem]) {
    if foods.is_empty() {
        println!("No foods match the given filters.");
        return;
    }

    println!(
        "{:<24} {:<8} {:<8} {:>6} {:>7} {:>7} {:>7}  Serving",
        "Name", "Cuisine", "Category", "kcal", "Prot g", "Carb g", "Fat g"
    );
    for food in foods {
        println!(
            "{:<24} {:<8} {:<8} {:>6.0} {:>7.1} {:>7.1} {:>7.1}  {} ({}g)",
            food.name,
            food.cuisine,
            food.category,
            food.calories,
            food.protein_g,
            food.carbohydrates_total_g,
            food.fat_total_g,
            food.portion_description,
            food.serving_size_g
        );
    }
    println!("\n{} foods", foods.len());
}
