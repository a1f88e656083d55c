// ABOUTME: Nutrition configuration for calorie and macronutrient target calculation
// ABOUTME: Configures BMR coefficients, activity factors, goal offsets, macro splits, and meal plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dietplan Contributors

//! Nutrition Configuration
//!
//! Every constant used by the macro calculator and the meal suggestion
//! builder lives here, so alternative coefficient sets can be injected in
//! tests or through environment overrides.
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, Katch & Katch (2010), Exercise Physiology

use super::error::ConfigError;
use crate::intelligence::diet_rules::DietRules;
use dietplan_core::constants::meal_plan::DEFAULT_MEAL_FREQUENCY;
use dietplan_core::models::{ActivityLevel, Gender, Goal};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Nutrition configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Basal Metabolic Rate (BMR) formula coefficients
    pub bmr: BmrConfig,
    /// Activity factor multipliers for TDEE calculation
    pub activity_factors: ActivityFactorsConfig,
    /// Calorie offsets applied per goal
    pub goal_adjustments: GoalAdjustmentConfig,
    /// Protein factor and default fat share
    pub macronutrients: MacronutrientConfig,
    /// Ordered diet-tag rules selecting the fat/carb split
    pub diet_rules: DietRules,
    /// Meal plan generation settings
    pub meal_plan: MealPlanConfig,
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
}

impl BmrConfig {
    /// Sex-specific constant
    #[must_use]
    pub const fn gender_constant(&self, gender: Gender) -> f64 {
        match gender {
            Gender::Male => self.msj_male_constant,
            Gender::Female => self.msj_female_constant,
        }
    }
}

/// Activity factor multipliers for TDEE calculation
///
/// Reference: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Lightly active (1-3 days/week): 1.375
    pub light: f64,
    /// Moderately active (3-5 days/week): 1.55
    pub moderate: f64,
    /// Active (6-7 days/week): 1.725
    pub active: f64,
    /// Very active (physical job or training twice a day): 1.9
    pub very_active: f64,
}

impl ActivityFactorsConfig {
    /// Multiplier for an activity level
    #[must_use]
    pub const fn factor(&self, level: ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::Light => self.light,
            ActivityLevel::Moderate => self.moderate,
            ActivityLevel::Active => self.active,
            ActivityLevel::VeryActive => self.very_active,
        }
    }
}

/// Calorie offsets per goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalAdjustmentConfig {
    /// Deficit subtracted for weight loss (kcal): 500
    pub deficit_kcal: f64,
    /// Surplus added for weight gain (kcal): 500
    pub surplus_kcal: f64,
}

impl GoalAdjustmentConfig {
    /// Signed offset for a goal
    #[must_use]
    pub fn offset(&self, goal: Goal) -> f64 {
        match goal {
            Goal::Lose => -self.deficit_kcal,
            Goal::Maintain => 0.0,
            Goal::Gain => self.surplus_kcal,
        }
    }
}

/// Macronutrient factors shared by every diet rule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacronutrientConfig {
    /// Protein per kilogram bodyweight, independent of goal and diet: 1.6
    pub protein_g_per_kg: f64,
}

/// Meal plan generation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealPlanConfig {
    /// Meals per day in computed targets: 3
    pub default_meal_frequency: u8,
    /// Largest meal frequency a caller may request: 6
    pub max_meal_frequency: u8,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
        }
    }
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            light: 1.375,
            moderate: 1.55,
            active: 1.725,
            very_active: 1.9,
        }
    }
}

impl Default for GoalAdjustmentConfig {
    fn default() -> Self {
        Self {
            deficit_kcal: 500.0,
            surplus_kcal: 500.0,
        }
    }
}

impl Default for MacronutrientConfig {
    fn default() -> Self {
        Self {
            protein_g_per_kg: 1.6,
        }
    }
}

impl Default for MealPlanConfig {
    fn default() -> Self {
        Self {
            default_meal_frequency: DEFAULT_MEAL_FREQUENCY,
            max_meal_frequency: 6,
        }
    }
}

impl NutritionConfig {
    /// Load defaults, apply `DIETPLAN_*` environment overrides, then validate
    ///
    /// # Errors
    ///
    /// Returns an error if an override cannot be parsed or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate coefficient sanity
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid setting
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.coefficients().iter().any(|value| !value.is_finite()) {
            return Err(ConfigError::ValueOutOfRange(
                "Nutrition coefficients must be finite numbers",
            ));
        }

        if self.bmr.msj_weight_coef <= 0.0 || self.bmr.msj_height_coef <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "BMR weight and height coefficients must be positive",
            ));
        }

        let factors = &self.activity_factors;
        if factors.sedentary < 1.0 || factors.very_active > 2.5 {
            return Err(ConfigError::ValueOutOfRange(
                "Activity factors must be between 1.0 and 2.5",
            ));
        }
        if factors.sedentary >= factors.light
            || factors.light >= factors.moderate
            || factors.moderate >= factors.active
            || factors.active >= factors.very_active
        {
            return Err(ConfigError::InvalidRange(
                "Activity factors must be in ascending order",
            ));
        }

        if self.goal_adjustments.deficit_kcal < 0.0 || self.goal_adjustments.surplus_kcal < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Goal deficit and surplus must be non-negative",
            ));
        }

        if !(0.5..=3.0).contains(&self.macronutrients.protein_g_per_kg) {
            return Err(ConfigError::ValueOutOfRange(
                "Protein factor must be between 0.5 and 3.0 g/kg",
            ));
        }

        self.diet_rules.validate()?;

        if self.meal_plan.default_meal_frequency == 0
            || self.meal_plan.default_meal_frequency > self.meal_plan.max_meal_frequency
        {
            return Err(ConfigError::InvalidRange(
                "Default meal frequency must be between 1 and the maximum meal frequency",
            ));
        }

        Ok(())
    }

    /// Every floating-point coefficient, for finiteness checks
    const fn coefficients(&self) -> [f64; 13] {
        [
            self.bmr.msj_weight_coef,
            self.bmr.msj_height_coef,
            self.bmr.msj_age_coef,
            self.bmr.msj_male_constant,
            self.bmr.msj_female_constant,
            self.activity_factors.sedentary,
            self.activity_factors.light,
            self.activity_factors.moderate,
            self.activity_factors.active,
            self.activity_factors.very_active,
            self.goal_adjustments.deficit_kcal,
            self.goal_adjustments.surplus_kcal,
            self.macronutrients.protein_g_per_kg,
        ]
    }

    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(
            "DIETPLAN_ACTIVITY_FACTOR_SEDENTARY",
            &mut self.activity_factors.sedentary,
        )?;
        Self::apply_env_var(
            "DIETPLAN_ACTIVITY_FACTOR_LIGHT",
            &mut self.activity_factors.light,
        )?;
        Self::apply_env_var(
            "DIETPLAN_ACTIVITY_FACTOR_MODERATE",
            &mut self.activity_factors.moderate,
        )?;
        Self::apply_env_var(
            "DIETPLAN_ACTIVITY_FACTOR_ACTIVE",
            &mut self.activity_factors.active,
        )?;
        Self::apply_env_var(
            "DIETPLAN_ACTIVITY_FACTOR_VERY_ACTIVE",
            &mut self.activity_factors.very_active,
        )?;

        Self::apply_env_var(
            "DIETPLAN_GOAL_DEFICIT_KCAL",
            &mut self.goal_adjustments.deficit_kcal,
        )?;
        Self::apply_env_var(
            "DIETPLAN_GOAL_SURPLUS_KCAL",
            &mut self.goal_adjustments.surplus_kcal,
        )?;

        Self::apply_env_var(
            "DIETPLAN_PROTEIN_G_PER_KG",
            &mut self.macronutrients.protein_g_per_kg,
        )?;

        Self::apply_env_var(
            "DIETPLAN_DEFAULT_MEAL_FREQUENCY",
            &mut self.meal_plan.default_meal_frequency,
        )?;
        Self::apply_env_var(
            "DIETPLAN_MAX_MEAL_FREQUENCY",
            &mut self.meal_plan.max_meal_frequency,
        )?;

        Ok(self)
    }
}
