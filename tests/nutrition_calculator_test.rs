// ABOUTME: Integration tests for calorie and macronutrient target calculation
// ABOUTME: Covers Mifflin-St Jeor targets, goal offsets, diet-rule splits, and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dietplan Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{profile_with_preferences, reference_profile};
use dietplan_server::config::intelligence::NutritionConfig;
use dietplan_server::errors::ErrorCode;
use dietplan_server::intelligence::diet_rules::{DietRule, MacroSplit};
use dietplan_server::intelligence::nutrition_calculator::{
    apply_goal_adjustment, calculate_mifflin_st_jeor, calculate_protein_needs, calculate_tdee,
    generate_diet_plan, select_macro_split,
};
use dietplan_server::models::{ActivityLevel, Gender, Goal, PlanDuration, UserProfile};

fn config() -> NutritionConfig {
    NutritionConfig::default()
}

// ============================================================================
// Reference Profile
// ============================================================================

#[test]
fn test_reference_profile_targets() {
    let targets = generate_diet_plan(&reference_profile(), &config()).unwrap();

    assert_eq!(targets.target_calories, 2556);
    assert_eq!(targets.protein, 112);
    assert_eq!(targets.fat, 85);
    assert_eq!(targets.carbs, 335);
    assert_eq!(targets.meal_frequency, 3);
    assert_eq!(targets.cuisine_preferences, vec!["versatile"]);
    assert!(targets.dietary_preferences.is_empty());
    assert_eq!(targets.plan_duration, PlanDuration::Day);
}

#[test]
fn test_goal_offsets_shift_target_by_500() {
    let lose = UserProfile {
        goal: Goal::Lose,
        ..reference_profile()
    };
    let gain = UserProfile {
        goal: Goal::Gain,
        ..reference_profile()
    };

    assert_eq!(generate_diet_plan(&lose, &config()).unwrap().target_calories, 2056);
    assert_eq!(generate_diet_plan(&gain, &config()).unwrap().target_calories, 3056);
}

#[test]
fn test_target_matches_formula_for_every_activity_level() {
    let cfg = config();
    for level in ActivityLevel::ALL {
        let profile = UserProfile {
            activity_level: level,
            ..reference_profile()
        };
        let bmr = calculate_mifflin_st_jeor(70.0, 175.0, 30, Gender::Male, &cfg.bmr);
        let expected = calculate_tdee(bmr, level, &cfg.activity_factors).round() as i32;

        let targets = generate_diet_plan(&profile, &cfg).unwrap();
        assert_eq!(targets.target_calories, expected, "{level}");
    }
}

#[test]
fn test_female_constant() {
    let cfg = config();
    let bmr = calculate_mifflin_st_jeor(60.0, 165.0, 40, Gender::Female, &cfg.bmr);
    // 600 + 1031.25 - 200 - 161
    assert!((bmr - 1270.25).abs() < 1e-9);
}

#[test]
fn test_goal_adjustment_is_unrounded() {
    let cfg = config();
    let adjusted = apply_goal_adjustment(2555.5625, Goal::Lose, &cfg.goal_adjustments);
    assert!((adjusted - 2055.5625).abs() < 1e-9);
}

// ============================================================================
// Protein
// ============================================================================

#[test]
fn test_protein_ignores_goal_and_diet() {
    let cfg = config();
    assert!((calculate_protein_needs(70.0, &cfg.macronutrients) - 112.0).abs() < 1e-9);

    for tags in [&["keto"][..], &["vegan"], &["paleo", "indian"], &[]] {
        for goal in [Goal::Lose, Goal::Maintain, Goal::Gain] {
            let profile = UserProfile {
                goal,
                ..profile_with_preferences(tags)
            };
            assert_eq!(generate_diet_plan(&profile, &cfg).unwrap().protein, 112);
        }
    }
}

// ============================================================================
// Diet Rules
// ============================================================================

#[test]
fn test_keto_split() {
    let targets = generate_diet_plan(&profile_with_preferences(&["keto"]), &config()).unwrap();

    assert_eq!(targets.target_calories, 2556);
    assert_eq!(targets.fat, 213);
    assert_eq!(targets.carbs, 32);

    let fat_share = f64::from(targets.fat * 9) / f64::from(targets.target_calories);
    let carb_share = f64::from(targets.carbs * 4) / f64::from(targets.target_calories);
    assert!((fat_share - 0.75).abs() < 0.01);
    assert!((carb_share - 0.05).abs() < 0.01);
}

#[test]
fn test_fixed_splits_per_diet() {
    let cfg = config();
    let tdee = 2555.5625_f64;
    let cases = [
        ("low-carb", 60.0, 10.0),
        ("paleo", 40.0, 30.0),
        ("mediterranean", 35.0, 45.0),
        ("vegan", 25.0, 50.0),
        ("vegetarian", 25.0, 50.0),
    ];

    for (tag, fat_pct, carb_pct) in cases {
        let targets = generate_diet_plan(&profile_with_preferences(&[tag]), &cfg).unwrap();
        assert_eq!(
            targets.fat,
            (tdee * fat_pct / 100.0 / 9.0).round() as i32,
            "{tag} fat"
        );
        assert_eq!(
            targets.carbs,
            (tdee * carb_pct / 100.0 / 4.0).round() as i32,
            "{tag} carbs"
        );
    }
}

#[test]
fn test_first_declared_rule_wins() {
    let cfg = config();
    let mixed = generate_diet_plan(&profile_with_preferences(&["vegan", "keto"]), &cfg).unwrap();
    let keto = generate_diet_plan(&profile_with_preferences(&["keto"]), &cfg).unwrap();
    assert_eq!(mixed.fat, keto.fat);
    assert_eq!(mixed.carbs, keto.carbs);
}

#[test]
fn test_custom_rule_order_is_honored() {
    let mut cfg = config();
    cfg.diet_rules.rules.insert(
        0,
        DietRule {
            name: "zone".to_owned(),
            tags: vec!["zone".to_owned()],
            split: MacroSplit::Fixed {
                fat_percent: 30.0,
                carbs_percent: 40.0,
            },
        },
    );
    assert!(cfg.validate().is_ok());

    let prefs = vec!["keto".to_owned(), "zone".to_owned()];
    assert_eq!(
        select_macro_split(&prefs, &cfg.diet_rules),
        MacroSplit::Fixed {
            fat_percent: 30.0,
            carbs_percent: 40.0
        }
    );
}

// ============================================================================
// Preferences
// ============================================================================

#[test]
fn test_cuisine_preferences_extracted_in_order() {
    let profile = profile_with_preferences(&["keto", "thai", "spicy", "south-indian"]);
    let targets = generate_diet_plan(&profile, &config()).unwrap();

    assert_eq!(targets.cuisine_preferences, vec!["thai", "south-indian"]);
    assert_eq!(
        targets.dietary_preferences,
        vec!["keto", "thai", "spicy", "south-indian"]
    );
}

#[test]
fn test_mediterranean_is_both_diet_and_cuisine() {
    let targets =
        generate_diet_plan(&profile_with_preferences(&["mediterranean"]), &config()).unwrap();
    assert_eq!(targets.cuisine_preferences, vec!["mediterranean"]);
    assert_eq!(targets.fat, (2555.5625_f64 * 0.35 / 9.0).round() as i32);
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_out_of_range_profiles_rejected() {
    let cfg = config();
    let cases = [
        UserProfile {
            weight: -70.0,
            ..reference_profile()
        },
        UserProfile {
            weight: f64::INFINITY,
            ..reference_profile()
        },
        UserProfile {
            height: 0.0,
            ..reference_profile()
        },
        UserProfile {
            weight: 900.0,
            ..reference_profile()
        },
        UserProfile {
            age: 200,
            ..reference_profile()
        },
    ];

    for profile in cases {
        let err = generate_diet_plan(&profile, &cfg).unwrap_err();
        assert!(
            matches!(err.code, ErrorCode::InvalidInput | ErrorCode::ValueOutOfRange),
            "{err}"
        );
    }
}

#[test]
fn test_week_duration_is_passed_through() {
    let profile = UserProfile {
        plan_duration: PlanDuration::Week,
        ..reference_profile()
    };
    assert_eq!(
        generate_diet_plan(&profile, &config()).unwrap().plan_duration,
        PlanDuration::Week
    );
}
