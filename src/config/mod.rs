// ABOUTME: Configuration management module for server settings and nutrition parameters
// ABOUTME: Handles environment-driven server config and typed nutrition constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dietplan Contributors

//! Configuration module for the diet plan server
//!
//! - **Environment**: Server configuration from environment variables
//! - **Intelligence**: Nutrition coefficients, diet rules, and meal plan limits

/// Environment and server configuration
pub mod environment;
/// Nutrition calculation configuration
pub mod intelligence;
