// ABOUTME: User profile model with body metrics, activity level, goal, and preferences
// ABOUTME: Gender, ActivityLevel, Goal, and PlanDuration enums with strict string parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dietplan Contributors

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Biological sex used for the BMR offset
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male (+5 kcal offset)
    Male,
    /// Female (-161 kcal offset)
    Female,
}

/// Activity level for the TDEE multiplier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Physical job or training twice a day
    VeryActive,
}

/// Weight goal shifting the calorie target
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    /// Caloric deficit
    Lose,
    /// Caloric balance
    Maintain,
    /// Caloric surplus
    Gain,
}

/// Length of the generated plan
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum PlanDuration {
    /// Single day
    #[default]
    Day,
    /// Seven days
    Week,
}

impl Gender {
    /// Wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl ActivityLevel {
    /// All levels, least to most active
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::Light,
        Self::Moderate,
        Self::Active,
        Self::VeryActive,
    ];

    /// Wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Active => "active",
            Self::VeryActive => "very_active",
        }
    }
}

impl Goal {
    /// Wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lose => "lose",
            Self::Maintain => "maintain",
            Self::Gain => "gain",
        }
    }
}

impl PlanDuration {
    /// Wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
        }
    }
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            other => Err(AppError::invalid_input(format!(
                "Unknown gender '{other}' (expected male or female)"
            ))),
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == normalized)
            .ok_or_else(|| {
                AppError::invalid_input(format!(
                    "Unknown activity level '{s}' (expected sedentary, light, moderate, active or very_active)"
                ))
            })
    }
}

impl FromStr for Goal {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lose" => Ok(Self::Lose),
            "maintain" => Ok(Self::Maintain),
            "gain" => Ok(Self::Gain),
            other => Err(AppError::invalid_input(format!(
                "Unknown goal '{other}' (expected lose, maintain or gain)"
            ))),
        }
    }
}

impl FromStr for PlanDuration {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "day" => Ok(Self::Day),
            "week" => Ok(Self::Week),
            other => Err(AppError::invalid_input(format!(
                "Unknown plan duration '{other}' (expected day or week)"
            ))),
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(self.as_str())
            }
        })*
    };
}

display_as_str!(Gender, ActivityLevel, Goal, PlanDuration);

/// Body metrics and preferences collected for one generation request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Body weight in kilograms
    pub weight: f64,
    /// Height in centimeters
    pub height: f64,
    /// Age in years
    pub age: u32,
    /// Sex used for the BMR offset
    pub gender: Gender,
    /// Activity level for the TDEE multiplier
    pub activity_level: ActivityLevel,
    /// Weight goal
    pub goal: Goal,
    /// Diet type and cuisine tags, intermixed, in user order
    #[serde(default)]
    pub dietary_preferences: Vec<String>,
    /// Length of the generated plan
    #[serde(default)]
    pub plan_duration: PlanDuration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_level_parsing_accepts_hyphen() {
        assert_eq!(
            "very-active".parse::<ActivityLevel>().unwrap(),
            ActivityLevel::VeryActive
        );
        assert_eq!(
            "Moderate".parse::<ActivityLevel>().unwrap(),
            ActivityLevel::Moderate
        );
        assert!("couch".parse::<ActivityLevel>().is_err());
    }

    #[test]
    fn test_profile_deserializes_camel_case() {
        let profile: UserProfile = serde_json::from_value(serde_json::json!({
            "weight": 70.0,
            "height": 175.0,
            "age": 30,
            "gender": "male",
            "activityLevel": "very_active",
            "goal": "gain",
            "dietaryPreferences": ["keto", "indian"],
            "planDuration": "week"
        }))
        .unwrap();

        assert_eq!(profile.activity_level, ActivityLevel::VeryActive);
        assert_eq!(profile.plan_duration, PlanDuration::Week);
        assert_eq!(profile.dietary_preferences, vec!["keto", "indian"]);
    }

    #[test]
    fn test_profile_defaults_optional_fields() {
        let profile: UserProfile = serde_json::from_value(serde_json::json!({
            "weight": 60.0,
            "height": 165.0,
            "age": 25,
            "gender": "female",
            "activityLevel": "light",
            "goal": "lose"
        }))
        .unwrap();

        assert!(profile.dietary_preferences.is_empty());
        assert_eq!(profile.plan_duration, PlanDuration::Day);
    }

    #[test]
    fn test_unknown_enum_value_rejected() {
        let result: Result<UserProfile, _> = serde_json::from_value(serde_json::json!({
            "weight": 60.0,
            "height": 165.0,
            "age": 25,
            "gender": "female",
            "activityLevel": "extreme",
            "goal": "lose"
        }));
        assert!(result.is_err());
    }
}
