//! Command implementations for the CLI
//!
//! This module contains the implementation of all CLI commands:
//! - quote: Compare plan costs for a headcount (default)
//! - tiers: Show the tier price table
//! - config: Configuration display and validation

pub mod config;
pub mod quote;
pub mod tiers;
