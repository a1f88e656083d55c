// ABOUTME: Calorie and macronutrient target calculation using the Mifflin-St Jeor equation
// ABOUTME: BMR, TDEE, goal adjustment, protein needs, diet-rule macro split, and cuisine extraction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dietplan Contributors

//! Nutrition Calculator Module
//!
//! Maps a [`UserProfile`] to daily [`MacroTargets`]. Every step is a pure
//! function over the profile and a [`NutritionConfig`]; intermediate values
//! stay unrounded and only the final targets are rounded to whole numbers.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - Phillips, S.M., & Van Loon, L.J. (2011). Dietary protein for athletes.
//!   *Journal of Sports Sciences*, 29(sup1), S29-S38.
//!   <https://doi.org/10.1080/02640414.2011.619204>

use crate::config::intelligence::{
    ActivityFactorsConfig, BmrConfig, GoalAdjustmentConfig, MacronutrientConfig, NutritionConfig,
};
use crate::errors::AppError;
use crate::intelligence::diet_rules::{DietRules, MacroSplit};
use dietplan_core::constants::energy::{
    KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN,
};
use dietplan_core::constants::preferences::{CUISINE_TAGS, VERSATILE_CUISINE};
use dietplan_core::constants::profile_limits::{
    MAX_AGE_YEARS, MAX_HEIGHT_CM, MAX_WEIGHT_KG, MIN_AGE_YEARS,
};
use dietplan_core::models::{ActivityLevel, Gender, Goal, MacroTargets, UserProfile};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Unrounded daily macronutrient amounts in grams
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MacroGrams {
    /// Protein (grams)
    pub protein_g: f64,
    /// Fat (grams)
    pub fat_g: f64,
    /// Carbohydrates (grams); negative when protein and fat exceed the target
    pub carbs_g: f64,
}

/// Check the profile's numeric fields are usable by the formulas
///
/// # Errors
///
/// Returns `INVALID_INPUT` for non-finite or non-positive weight/height and
/// `VALUE_OUT_OF_RANGE` for values beyond the accepted human range
pub fn validate_profile(profile: &UserProfile) -> Result<(), AppError> {
    if !profile.weight.is_finite() || profile.weight <= 0.0 {
        return Err(AppError::invalid_input("Weight must be a positive number"));
    }
    if !profile.height.is_finite() || profile.height <= 0.0 {
        return Err(AppError::invalid_input("Height must be a positive number"));
    }
    if profile.weight > MAX_WEIGHT_KG {
        return Err(AppError::value_out_of_range(format!(
            "Weight must not exceed {MAX_WEIGHT_KG} kg"
        )));
    }
    if profile.height > MAX_HEIGHT_CM {
        return Err(AppError::value_out_of_range(format!(
            "Height must not exceed {MAX_HEIGHT_CM} cm"
        )));
    }
    if !(MIN_AGE_YEARS..=MAX_AGE_YEARS).contains(&profile.age) {
        return Err(AppError::value_out_of_range(format!(
            "Age must be between {MIN_AGE_YEARS} and {MAX_AGE_YEARS} years"
        )));
    }
    Ok(())
}

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation
///
/// Formula:
/// - Men: BMR = 10 x weight(kg) + 6.25 x height(cm) - 5 x age(y) + 5
/// - Women: BMR = 10 x weight(kg) + 6.25 x height(cm) - 5 x age(y) - 161
///
/// Inputs are expected to have passed [`validate_profile`].
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
#[must_use]
pub fn calculate_mifflin_st_jeor(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    gender: Gender,
    config: &BmrConfig,
) -> f64 {
    let weight_component = config.msj_weight_coef * weight_kg;
    let height_component = config.msj_height_coef * height_cm;
    let age_component = config.msj_age_coef * f64::from(age);

    weight_component + height_component + age_component + config.gender_constant(gender)
}

/// Calculate Total Daily Energy Expenditure
///
/// Formula: TDEE = BMR x Activity Factor
#[must_use]
pub fn calculate_tdee(
    bmr: f64,
    activity_level: ActivityLevel,
    config: &ActivityFactorsConfig,
) -> f64 {
    bmr * config.factor(activity_level)
}

/// Shift TDEE by the goal's calorie offset
#[must_use]
pub fn apply_goal_adjustment(tdee: f64, goal: Goal, config: &GoalAdjustmentConfig) -> f64 {
    tdee + config.offset(goal)
}

/// Daily protein in grams: weight x protein factor
///
/// Independent of goal and diet type.
///
/// # Reference
/// Phillips & Van Loon (2011) DOI: 10.1080/02640414.2011.619204
#[must_use]
pub fn calculate_protein_needs(weight_kg: f64, config: &MacronutrientConfig) -> f64 {
    weight_kg * config.protein_g_per_kg
}

/// Pick the fat/carb split for a preference list
#[must_use]
pub fn select_macro_split(preferences: &[String], rules: &DietRules) -> MacroSplit {
    let rule = rules.select(preferences);
    debug!(rule = %rule.name, "Selected diet rule");
    rule.split
}

/// Convert a split into grams of each macronutrient
///
/// Fixed splits take their percentages of `target_calories` directly. A
/// remainder split gives carbohydrates the energy left after protein and fat,
/// which is negative when protein and fat alone exceed the target.
#[must_use]
pub fn calculate_macro_grams(target_calories: f64, protein_g: f64, split: MacroSplit) -> MacroGrams {
    let fat_kcal = target_calories * split.fat_percent() / 100.0;
    let carbs_kcal = match split {
        MacroSplit::Fixed { carbs_percent, .. } => target_calories * carbs_percent / 100.0,
        MacroSplit::Remainder { .. } => {
            target_calories - protein_g * KCAL_PER_GRAM_PROTEIN - fat_kcal
        }
    };

    MacroGrams {
        protein_g,
        fat_g: fat_kcal / KCAL_PER_GRAM_FAT,
        carbs_g: carbs_kcal / KCAL_PER_GRAM_CARBS,
    }
}

/// Preferences that name a known cuisine, in input order
///
/// Returns `["versatile"]` when none match. Duplicates are kept.
#[must_use]
pub fn extract_cuisine_preferences(preferences: &[String]) -> Vec<String> {
    let cuisines: Vec<String> = preferences
        .iter()
        .filter(|pref| CUISINE_TAGS.contains(&pref.as_str()))
        .cloned()
        .collect();

    if cuisines.is_empty() {
        vec![VERSATILE_CUISINE.to_owned()]
    } else {
        cuisines
    }
}

/// Compute daily calorie and macronutrient targets for a profile
///
/// # Errors
///
/// Returns an error if the profile fails [`validate_profile`] or the
/// resulting calorie target is not a positive finite number
pub fn generate_diet_plan(
    profile: &UserProfile,
    config: &NutritionConfig,
) -> Result<MacroTargets, AppError> {
    validate_profile(profile)?;

    let bmr = calculate_mifflin_st_jeor(
        profile.weight,
        profile.height,
        profile.age,
        profile.gender,
        &config.bmr,
    );
    let tdee = calculate_tdee(bmr, profile.activity_level, &config.activity_factors);
    let target_calories = apply_goal_adjustment(tdee, profile.goal, &config.goal_adjustments);

    if !target_calories.is_finite() || target_calories <= 0.0 {
        return Err(AppError::value_out_of_range(format!(
            "Profile yields a non-positive calorie target ({target_calories:.0} kcal)"
        )));
    }

    let protein_g = calculate_protein_needs(profile.weight, &config.macronutrients);
    let split = select_macro_split(&profile.dietary_preferences, &config.diet_rules);
    let grams = calculate_macro_grams(target_calories, protein_g, split);

    debug!(
        bmr,
        tdee,
        target_calories,
        protein_g = grams.protein_g,
        fat_g = grams.fat_g,
        carbs_g = grams.carbs_g,
        "Calculated nutrition targets"
    );

    Ok(MacroTargets {
        target_calories: round_to_i32(target_calories),
        protein: round_to_i32(grams.protein_g),
        carbs: round_to_i32(grams.carbs_g),
        fat: round_to_i32(grams.fat_g),
        meal_frequency: config.meal_plan.default_meal_frequency,
        dietary_preferences: profile.dietary_preferences.clone(),
        cuisine_preferences: extract_cuisine_preferences(&profile.dietary_preferences),
        plan_duration: profile.plan_duration,
    })
}

// Validated profiles keep every value far inside i32.
#[allow(clippy::cast_possible_truncation)]
fn round_to_i32(value: f64) -> i32 {
    value.round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use dietplan_core::models::PlanDuration;

    fn profile() -> UserProfile {
        UserProfile {
            weight: 70.0,
            height: 175.0,
            age: 30,
            gender: Gender::Male,
            activity_level: ActivityLevel::Moderate,
            goal: Goal::Maintain,
            dietary_preferences: Vec::new(),
            plan_duration: PlanDuration::Day,
        }
    }

    #[test]
    fn test_mifflin_st_jeor_male_and_female() {
        let config = BmrConfig::default();
        let male = calculate_mifflin_st_jeor(70.0, 175.0, 30, Gender::Male, &config);
        let female = calculate_mifflin_st_jeor(70.0, 175.0, 30, Gender::Female, &config);
        assert!((male - 1648.75).abs() < 1e-9);
        assert!((male - female - 166.0).abs() < 1e-9);
    }

    #[test]
    fn test_tdee_uses_activity_factor() {
        let config = ActivityFactorsConfig::default();
        let tdee = calculate_tdee(1648.75, ActivityLevel::Moderate, &config);
        assert!((tdee - 2555.5625).abs() < 1e-9);
    }

    #[test]
    fn test_remainder_split_fills_carbs() {
        let grams = calculate_macro_grams(
            2555.5625,
            112.0,
            MacroSplit::Remainder { fat_percent: 30.0 },
        );
        let total_kcal = grams.protein_g * 4.0 + grams.fat_g * 9.0 + grams.carbs_g * 4.0;
        assert!((total_kcal - 2555.5625).abs() < 1e-9);
    }

    #[test]
    fn test_remainder_carbs_can_go_negative() {
        let grams = calculate_macro_grams(
            1000.0,
            250.0,
            MacroSplit::Remainder { fat_percent: 30.0 },
        );
        assert!(grams.carbs_g < 0.0);
    }

    #[test]
    fn test_cuisine_extraction_keeps_order_and_duplicates() {
        let prefs: Vec<String> = ["thai", "keto", "indian", "thai"]
            .iter()
            .map(|&s| s.to_owned())
            .collect();
        assert_eq!(
            extract_cuisine_preferences(&prefs),
            vec!["thai", "indian", "thai"]
        );
        assert_eq!(extract_cuisine_preferences(&[]), vec!["versatile"]);
    }

    #[test]
    fn test_generate_diet_plan_reference_profile() {
        let targets = generate_diet_plan(&profile(), &NutritionConfig::default()).unwrap();
        assert_eq!(targets.target_calories, 2556);
        assert_eq!(targets.protein, 112);
        assert_eq!(targets.fat, 85);
        assert_eq!(targets.carbs, 335);
        assert_eq!(targets.meal_frequency, 3);
        assert_eq!(targets.cuisine_preferences, vec!["versatile"]);
    }

    #[test]
    fn test_invalid_profiles_rejected() {
        let config = NutritionConfig::default();

        let mut bad = profile();
        bad.weight = 0.0;
        assert!(generate_diet_plan(&bad, &config).is_err());

        let mut bad = profile();
        bad.height = f64::NAN;
        assert!(generate_diet_plan(&bad, &config).is_err());

        let mut bad = profile();
        bad.age = 0;
        assert!(generate_diet_plan(&bad, &config).is_err());
    }

    #[test]
    fn test_non_positive_target_rejected() {
        let tiny = UserProfile {
            weight: 1.0,
            height: 1.0,
            age: 120,
            gender: Gender::Female,
            activity_level: ActivityLevel::Sedentary,
            goal: Goal::Lose,
            ..profile()
        };
        let err = generate_diet_plan(&tiny, &NutritionConfig::default()).unwrap_err();
        assert_eq!(err.code, dietplan_core::errors::ErrorCode::ValueOutOfRange);
    }

    #[test]
    fn test_nan_target_rejected() {
        let mut config = NutritionConfig::default();
        config.goal_adjustments.deficit_kcal = f64::NAN;
        let lose = UserProfile {
            goal: Goal::Lose,
            ..profile()
        };
        let err = generate_diet_plan(&lose, &config).unwrap_err();
        assert_eq!(err.code, dietplan_core::errors::ErrorCode::ValueOutOfRange);
    }
}
