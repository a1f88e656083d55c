// ABOUTME: Application constants organized by domain
// ABOUTME: Energy densities, profile bounds, cuisine vocabulary, and service names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dietplan Contributors

/// Energy density of macronutrients (Atwater general factors)
pub mod energy {
    /// Kilocalories per gram of protein
    pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
    /// Kilocalories per gram of carbohydrate
    pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;
    /// Kilocalories per gram of fat
    pub const KCAL_PER_GRAM_FAT: f64 = 9.0;
}

/// Accepted ranges for user profile input
pub mod profile_limits {
    /// Maximum accepted body weight (kg)
    pub const MAX_WEIGHT_KG: f64 = 500.0;
    /// Maximum accepted height (cm)
    pub const MAX_HEIGHT_CM: f64 = 300.0;
    /// Minimum accepted age (years)
    pub const MIN_AGE_YEARS: u32 = 1;
    /// Maximum accepted age (years)
    pub const MAX_AGE_YEARS: u32 = 120;
}

/// Dietary preference tags with special meaning
pub mod preferences {
    /// Cuisine tags recognized when extracting cuisine preferences, in no particular order
    pub const CUISINE_TAGS: &[&str] = &[
        "indian",
        "north-indian",
        "south-indian",
        "asian",
        "chinese",
        "japanese",
        "thai",
        "mexican",
        "mediterranean",
        "italian",
        "middle-eastern",
    ];

    /// Reported when no cuisine tag is present
    pub const VERSATILE_CUISINE: &str = "versatile";
}

/// Meal plan defaults
pub mod meal_plan {
    /// Meals per day unless the caller overrides it
    pub const DEFAULT_MEAL_FREQUENCY: u8 = 3;
    /// Days covered by a weekly plan
    pub const DAYS_PER_WEEK: u8 = 7;
}

/// Service identity used in logs and health responses
pub mod service_names {
    /// HTTP server binary
    pub const DIETPLAN_SERVER: &str = "dietplan-server";
}
