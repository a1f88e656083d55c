// ABOUTME: Ordered diet-type rules mapping preference tags to fat/carbohydrate splits
// ABOUTME: First matching rule wins; a remainder rule covers profiles with no diet tag
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dietplan Contributors

//! Diet Rules
//!
//! A diet rule pairs a set of preference tags with a macro split. Rules are
//! evaluated in declaration order and the first rule sharing a tag with the
//! user's preferences decides the split. The fallback rule has no tags and
//! gives carbohydrates whatever energy protein and fat leave over.

use crate::config::intelligence::ConfigError;
use serde::{Deserialize, Serialize};

/// How the non-protein energy is divided between fat and carbohydrates
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MacroSplit {
    /// Fat and carbohydrates each take a fixed share of target calories
    Fixed {
        /// Percent of target calories from fat
        fat_percent: f64,
        /// Percent of target calories from carbohydrates
        carbs_percent: f64,
    },
    /// Fat takes a fixed share, carbohydrates take what protein and fat leave
    Remainder {
        /// Percent of target calories from fat
        fat_percent: f64,
    },
}

impl MacroSplit {
    /// Percent of target calories assigned to fat
    #[must_use]
    pub const fn fat_percent(&self) -> f64 {
        match *self {
            Self::Fixed { fat_percent, .. } | Self::Remainder { fat_percent } => fat_percent,
        }
    }
}

/// One diet type and its macro split
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DietRule {
    /// Rule name used in logs
    pub name: String,
    /// Preference tags that activate the rule; empty matches everything
    pub tags: Vec<String>,
    /// Split applied when the rule matches
    pub split: MacroSplit,
}

impl DietRule {
    fn fixed(name: &str, tags: &[&str], fat_percent: f64, carbs_percent: f64) -> Self {
        Self {
            name: name.to_owned(),
            tags: tags.iter().map(|&tag| tag.to_owned()).collect(),
            split: MacroSplit::Fixed {
                fat_percent,
                carbs_percent,
            },
        }
    }

    /// Whether any preference equals one of this rule's tags
    #[must_use]
    pub fn matches(&self, preferences: &[String]) -> bool {
        self.tags.is_empty() || preferences.iter().any(|pref| self.tags.contains(pref))
    }
}

/// Rules in precedence order, followed by the fallback
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DietRules {
    /// Tagged rules, checked first to last
    pub rules: Vec<DietRule>,
    /// Rule used when no tagged rule matches
    pub fallback: DietRule,
}

impl Default for DietRules {
    fn default() -> Self {
        Self {
            rules: vec![
                DietRule::fixed("keto", &["keto"], 75.0, 5.0),
                DietRule::fixed("low-carb", &["low-carb"], 60.0, 10.0),
                DietRule::fixed("paleo", &["paleo"], 40.0, 30.0),
                DietRule::fixed("mediterranean", &["mediterranean"], 35.0, 45.0),
                DietRule::fixed("plant-based", &["vegan", "vegetarian"], 25.0, 50.0),
            ],
            fallback: DietRule {
                name: "balanced".to_owned(),
                tags: Vec::new(),
                split: MacroSplit::Remainder { fat_percent: 30.0 },
            },
        }
    }
}

impl DietRules {
    /// First rule matching the preferences, or the fallback
    ///
    /// Only rule membership matters, not tag position: with `["vegan", "keto"]`
    /// the keto rule wins because it is declared first.
    #[must_use]
    pub fn select(&self, preferences: &[String]) -> &DietRule {
        self.rules
            .iter()
            .find(|rule| !rule.tags.is_empty() && rule.matches(preferences))
            .unwrap_or(&self.fallback)
    }

    /// Check every split fits within 100% and the fallback is untagged
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid rule
    pub fn validate(&self) -> Result<(), ConfigError> {
        for rule in self.rules.iter().chain(std::iter::once(&self.fallback)) {
            let finite = match rule.split {
                MacroSplit::Fixed {
                    fat_percent,
                    carbs_percent,
                } => fat_percent.is_finite() && carbs_percent.is_finite(),
                MacroSplit::Remainder { fat_percent } => fat_percent.is_finite(),
            };
            if !finite {
                return Err(ConfigError::ValueOutOfRange(
                    "Diet rule percentages must be finite numbers",
                ));
            }

            match rule.split {
                MacroSplit::Fixed {
                    fat_percent,
                    carbs_percent,
                } => {
                    if !(0.0..=100.0).contains(&fat_percent)
                        || !(0.0..=100.0).contains(&carbs_percent)
                    {
                        return Err(ConfigError::ValueOutOfRange(
                            "Diet rule percentages must be between 0 and 100",
                        ));
                    }
                    if fat_percent + carbs_percent > 100.0 {
                        return Err(ConfigError::InvalidPercentages(
                            "Fat and carbohydrate percentages exceed 100%",
                        ));
                    }
                }
                MacroSplit::Remainder { fat_percent } => {
                    if !(0.0..=100.0).contains(&fat_percent) {
                        return Err(ConfigError::ValueOutOfRange(
                            "Diet rule percentages must be between 0 and 100",
                        ));
                    }
                }
            }
        }

        if self.rules.iter().any(|rule| rule.tags.is_empty()) {
            return Err(ConfigError::InvalidRange(
                "Only the fallback diet rule may be untagged",
            ));
        }
        if !self.fallback.tags.is_empty() {
            return Err(ConfigError::InvalidRange(
                "The fallback diet rule must not carry tags",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefs(tags: &[&str]) -> Vec<String> {
        tags.iter().map(|&tag| tag.to_owned()).collect()
    }

    #[test]
    fn test_default_rules_are_valid() {
        assert!(DietRules::default().validate().is_ok());
    }

    #[test]
    fn test_no_preferences_uses_fallback() {
        let rules = DietRules::default();
        assert_eq!(rules.select(&[]).name, "balanced");
        assert_eq!(
            rules.select(&[]).split,
            MacroSplit::Remainder { fat_percent: 30.0 }
        );
    }

    #[test]
    fn test_declaration_order_beats_tag_order() {
        let rules = DietRules::default();
        assert_eq!(rules.select(&prefs(&["vegan", "keto"])).name, "keto");
        assert_eq!(
            rules.select(&prefs(&["vegetarian", "paleo"])).name,
            "paleo"
        );
    }

    #[test]
    fn test_vegetarian_and_vegan_share_split() {
        let rules = DietRules::default();
        assert_eq!(
            rules.select(&prefs(&["vegan"])).split,
            rules.select(&prefs(&["vegetarian"])).split
        );
    }

    #[test]
    fn test_tags_match_exactly() {
        let rules = DietRules::default();
        assert_eq!(rules.select(&prefs(&["Keto"])).name, "balanced");
        assert_eq!(rules.select(&prefs(&["lowcarb"])).name, "balanced");
    }

    #[test]
    fn test_overfull_split_rejected() {
        let mut rules = DietRules::default();
        rules.rules[0].split = MacroSplit::Fixed {
            fat_percent: 80.0,
            carbs_percent: 30.0,
        };
        assert!(matches!(
            rules.validate(),
            Err(ConfigError::InvalidPercentages(_))
        ));
    }

    #[test]
    fn test_nan_percentage_rejected() {
        let mut rules = DietRules::default();
        rules.fallback.split = MacroSplit::Remainder {
            fat_percent: f64::NAN,
        };
        assert!(matches!(
            rules.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));

        let mut rules = DietRules::default();
        rules.rules[2].split = MacroSplit::Fixed {
            fat_percent: 40.0,
            carbs_percent: f64::INFINITY,
        };
        assert!(rules.validate().is_err());
    }

    #[test]
    fn test_tagged_fallback_rejected() {
        let mut rules = DietRules::default();
        rules.fallback.tags.push("balanced".to_owned());
        assert!(rules.validate().is_err());
    }
}
