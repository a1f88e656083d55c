// ABOUTME: Diet plan route handlers computing macro targets and catalog-based meal plans
// ABOUTME: Thin JSON handlers delegating to the nutrition calculator and meal suggestion builder
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dietplan Contributors

//! Diet plan routes
//!
//! Both endpoints accept a user profile plus an optional meal frequency.
//! `/api/diet-plan/targets` returns the computed targets; `/api/diet-plan`
//! also builds example meals for the requested plan duration.

use crate::config::intelligence::NutritionConfig;
use crate::errors::AppError;
use crate::intelligence::{build_meal_plan, generate_diet_plan};
use crate::logging::AppLogger;
use crate::routes::with_request_id;
use crate::server::ServerResources;
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use dietplan_core::models::{MacroTargets, UserProfile};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

/// Profile plus optional overrides for target generation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DietPlanRequest {
    /// Body metrics and preferences
    #[serde(flatten)]
    pub profile: UserProfile,
    /// Meals per day, replacing the configured default
    #[serde(default)]
    pub meal_frequency: Option<u8>,
}

impl DietPlanRequest {
    /// Compute targets, applying the meal frequency override if present
    ///
    /// # Errors
    ///
    /// Returns an error for an invalid profile or a meal frequency outside
    /// `1..=max_meal_frequency`
    pub fn targets(&self, config: &NutritionConfig) -> Result<MacroTargets, AppError> {
        let targets = generate_diet_plan(&self.profile, config)?;

        match self.meal_frequency {
            None => Ok(targets),
            Some(n) if (1..=config.meal_plan.max_meal_frequency).contains(&n) => {
                Ok(targets.with_meal_frequency(n))
            }
            Some(n) => Err(AppError::value_out_of_range(format!(
                "Meal frequency {n} must be between 1 and {}",
                config.meal_plan.max_meal_frequency
            ))),
        }
    }
}

/// Diet plan routes
pub struct DietPlanRoutes;

impl DietPlanRoutes {
    /// Create all diet plan routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/diet-plan/targets", post(Self::handle_targets))
            .route("/api/diet-plan", post(Self::handle_plan))
            .with_state(resources)
    }

    /// Handle target computation
    async fn handle_targets(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(request): Json<DietPlanRequest>,
    ) -> Result<Response, AppError> {
        let targets = request
            .targets(&resources.config.nutrition)
            .map_err(|e| with_request_id(e, &headers))?;
        AppLogger::log_targets_computed(&targets);

        Ok((StatusCode::OK, Json(targets)).into_response())
    }

    /// Handle full plan generation
    async fn handle_plan(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(request): Json<DietPlanRequest>,
    ) -> Result<Response, AppError> {
        let started = Instant::now();
        let nutrition = &resources.config.nutrition;

        let targets = request
            .targets(nutrition)
            .map_err(|e| with_request_id(e, &headers))?;
        AppLogger::log_targets_computed(&targets);

        let plan = build_meal_plan(&targets, &resources.catalog, &nutrition.meal_plan)
            .map_err(|e| with_request_id(e, &headers))?;
        AppLogger::log_plan_built(
            plan.days.len(),
            targets.meal_frequency,
            started.elapsed().as_millis(),
        );

        Ok((StatusCode::OK, Json(plan)).into_response())
    }
}
