// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dietplan Contributors
// ABOUTME: Re-exports command modules for dietplan-cli
// ABOUTME: Provides access to target, plan, and catalog commands

pub mod foods;
pub mod plan;
