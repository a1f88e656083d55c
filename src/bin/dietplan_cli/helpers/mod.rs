// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dietplan Contributors
// ABOUTME: Re-exports helper modules for dietplan-cli
// ABOUTME: Provides access to output formatting utilities

pub mod display;
