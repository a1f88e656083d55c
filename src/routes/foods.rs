// ABOUTME: Food catalog route handlers for browsing foods and computing portions
// ABOUTME: Filters by cuisine/category and scales a named food to a calorie target
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dietplan Contributors

//! Food catalog routes

use crate::catalog::{FoodCatalog, ALL_FILTER};
use crate::errors::AppError;
use crate::routes::with_request_id;
use crate::server::ServerResources;
use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use dietplan_core::models::{FoodItem, NutrientTotals};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Query parameters for catalog listing
#[derive(Debug, Deserialize, Default)]
struct FoodQuery {
    #[serde(default)]
    cuisine: Option<String>,
    #[serde(default)]
    category: Option<String>,
}

/// Query parameters for portion calculation
#[derive(Debug, Deserialize)]
struct PortionQuery {
    calories: f64,
}

/// Catalog listing response
#[derive(Debug, Serialize)]
pub struct FoodListResponse {
    /// Matching foods in catalog order
    pub foods: Vec<FoodItem>,
    /// Number of matches
    pub total: usize,
}

/// Portion calculation response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortionResponse {
    /// Catalog entry
    pub food: FoodItem,
    /// Requested calories
    pub target_calories: f64,
    /// Portion mass in grams
    pub grams: f64,
    /// Household description of the portion
    pub portion_description: String,
    /// Nutrients in the portion
    pub nutrients: NutrientTotals,
}

/// Food catalog routes
pub struct FoodRoutes;

impl FoodRoutes {
    /// Create all food catalog routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/foods", get(Self::handle_list))
            .route("/api/foods/:name/portion", get(Self::handle_portion))
            .with_state(resources)
    }

    /// Handle catalog listing
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        Query(params): Query<FoodQuery>,
    ) -> Result<Response, AppError> {
        let cuisine = params.cuisine.as_deref().unwrap_or(ALL_FILTER);
        let category = params.category.as_deref().unwrap_or(ALL_FILTER);

        let foods: Vec<FoodItem> = resources
            .catalog
            .get_foods_by_category(cuisine, category)
            .into_iter()
            .copied()
            .collect();
        debug!(cuisine, category, matches = foods.len(), "Catalog query");

        let total = foods.len();
        Ok((StatusCode::OK, Json(FoodListResponse { foods, total })).into_response())
    }

    /// Handle portion calculation for one food
    async fn handle_portion(
        State(resources): State<Arc<ServerResources>>,
        Path(name): Path<String>,
        Query(params): Query<PortionQuery>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        if !params.calories.is_finite() || params.calories <= 0.0 {
            return Err(with_request_id(
                AppError::invalid_input("calories must be a positive number"),
                &headers,
            ));
        }

        let food = resources.catalog.find_by_name(&name).ok_or_else(|| {
            with_request_id(AppError::not_found(format!("Food '{name}'")), &headers)
        })?;

        let portioned = FoodCatalog::portion(food, params.calories);
        let response = PortionResponse {
            food: *food,
            target_calories: params.calories,
            grams: portioned.grams,
            portion_description: portioned.portion_description,
            nutrients: portioned.nutrients,
        };

        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
