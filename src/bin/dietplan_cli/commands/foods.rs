// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dietplan Contributors
// ABOUTME: Catalog browsing command for dietplan-cli
// ABOUTME: Filters the static food table by cuisine and category

use crate::helpers::display::{display_foods, print_json};
use dietplan_server::{catalog::get_foods_by_category, errors::AppResult};

/// Print catalog foods matching the filters
pub fn list(cuisine: &str, category: &str, json: bool) -> AppResult<()> {
    let foods = get_foods_by_category(cuisine, category);

    if json {
        print_json(&foods)
    } else {
        display_foods(&foods);
        Ok(())
    }
}
