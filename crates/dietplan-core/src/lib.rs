// ABOUTME: Core types and constants for the diet plan generator
// ABOUTME: Foundation crate with error handling, domain models, and nutrition constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dietplan Contributors

#![deny(unsafe_code)]

//! # Dietplan Core
//!
//! Foundation crate providing shared types and constants for the diet plan
//! generator. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Nutrition and service constants
//! - **models**: User profile, macro targets, and food catalog types

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`UserProfile`, `MacroTargets`, `FoodItem`, etc.)
pub mod models;
