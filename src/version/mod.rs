//! Version analysis for upgrade discovery
//!
//! This module contains the pure logic that decides which of a component's
//! available versions are worth reporting as upgrades.
//!
//! # Modules
//!
//! - [`classify`]: version string tokenization and qualifier extraction
//! - [`selector`]: upgrade-ladder selection over a descending candidate pool
//! - [`micro`]: same-minor ("micro") upgrade detection
//! - [`order`]: total order used to sort fetched candidate pools
//!
//! Everything here is synchronous and allocation-light; candidate pools are
//! fetched and ordered by the [`crate::resolver`] layer before they reach
//! these functions.

pub mod classify;
pub mod micro;
pub mod order;
pub mod selector;
