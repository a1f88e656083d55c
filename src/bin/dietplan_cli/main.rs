// ABOUTME: Dietplan CLI - command-line access to macro targets, meal plans, and the food catalog
// ABOUTME: Parses profile arguments and prints results as text or JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dietplan Contributors
//!
//! Usage:
//! ```bash
//! # Daily targets for a moderately active 30 year old
//! dietplan-cli targets --weight 70 --height 175 --age 30 --gender male \
//!     --activity-level moderate --goal maintain --pref indian
//!
//! # A week of example meals, four per day, as JSON
//! dietplan-cli plan --weight 62 --height 165 --age 41 --gender female \
//!     --activity-level light --goal lose --duration week --meal-frequency 4 --json
//!
//! # Browse the catalog
//! dietplan-cli foods --cuisine asian --category protein
//! ```

mod commands;
mod helpers;

use clap::{Args, Parser, Subcommand};
use dietplan_server::{
    config::intelligence::NutritionConfig,
    errors::AppResult,
    logging::LoggingConfig,
    models::{ActivityLevel, Gender, Goal, PlanDuration, UserProfile},
    routes::DietPlanRequest,
};
use tracing::{debug, warn};

#[derive(Parser)]
#[command(
    name = "dietplan-cli",
    about = "Diet plan generator CLI",
    long_about = "Compute calorie and macronutrient targets, build example meal plans, and browse the food catalog."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Compute daily calorie and macro targets
    Targets(ProfileArgs),

    /// Compute targets and build example meals
    Plan(ProfileArgs),

    /// List catalog foods
    Foods {
        /// Cuisine filter (indian, asian, general, all)
        #[arg(long, default_value = "all")]
        cuisine: String,

        /// Category filter (protein, carb, fat, mixed, all)
        #[arg(long, default_value = "all")]
        category: String,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

/// Profile arguments shared by `targets` and `plan`
#[derive(Args)]
struct ProfileArgs {
    /// Body weight in kilograms
    #[arg(long)]
    weight: f64,

    /// Height in centimeters
    #[arg(long)]
    height: f64,

    /// Age in years
    #[arg(long)]
    age: u32,

    /// male or female
    #[arg(long)]
    gender: Gender,

    /// sedentary, light, moderate, active or very_active
    #[arg(long)]
    activity_level: ActivityLevel,

    /// lose, maintain or gain
    #[arg(long)]
    goal: Goal,

    /// Dietary preference tag (repeatable), e.g. keto, vegan, indian
    #[arg(long = "pref")]
    preferences: Vec<String>,

    /// day or week
    #[arg(long, default_value = "day")]
    duration: PlanDuration,

    /// Meals per day
    #[arg(long)]
    meal_frequency: Option<u8>,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

impl ProfileArgs {
    fn into_request(self) -> (DietPlanRequest, bool) {
        let request = DietPlanRequest {
            profile: UserProfile {
                weight: self.weight,
                height: self.height,
                age: self.age,
                gender: self.gender,
                activity_level: self.activity_level,
                goal: self.goal,
                dietary_preferences: self.preferences,
                plan_duration: self.duration,
            },
            meal_frequency: self.meal_frequency,
        };
        (request, self.json)
    }
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();

    if let Err(e) = LoggingConfig::for_cli(cli.verbose).init() {
        eprintln!("Logging unavailable: {e}");
    }

    let config = NutritionConfig::load().inspect_err(|e| warn!("Invalid configuration: {e}"))?;
    debug!("Nutrition configuration loaded");

    match cli.command {
        Command::Targets(args) => {
            let (request, json) = args.into_request();
            commands::plan::targets(&request, &config, json)?;
        }
        Command::Plan(args) => {
            let (request, json) = args.into_request();
            commands::plan::plan(&request, &config, json)?;
        }
        Command::Foods {
            cuisine,
            category,
            json,
        } => {
            commands::foods::list(&cuisine, &category, json)?;
        }
    }

    Ok(())
}
