// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dietplan Contributors
// ABOUTME: Target and meal plan commands for dietplan-cli
// ABOUTME: Runs the calculator and meal builder and prints the result

use crate::helpers::display::{display_plan, display_targets, print_json};
use dietplan_server::{
    catalog::FoodCatalog, config::intelligence::NutritionConfig, errors::AppResult,
    intelligence::build_meal_plan, routes::DietPlanRequest,
};

/// Print daily targets
pub fn targets(request: &DietPlanRequest, config: &NutritionConfig, json: bool) -> AppResult<()> {
    let targets = request.targets(config)?;

    if json {
        print_json(&targets)
    } else {
        display_targets(&targets);
        Ok(())
    }
}

/// Print targets followed by example meals
pub fn plan(request: &DietPlanRequest, config: &NutritionConfig, json: bool) -> AppResult<()> {
    let targets = request.targets(config)?;
    let plan = build_meal_plan(&targets, &FoodCatalog::default(), &config.meal_plan)?;

    if json {
        print_json(&plan)
    } else {
        display_targets(&plan.targets);
        display_plan(&plan);
        Ok(())
    }
}
