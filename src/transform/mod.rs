//! Layout conversion from the 3.4.3 tile order to the 3.6.0 one
//!
//! This module contains:
//! - Per-pixel derivation of statues, darkened floor and scroll appearances
//! - The insertion plan describing the 3.6.0 layout
//! - Splicing the plan into a tile grid

/// Tiles derived from existing tiles
pub mod derive;
/// Fixed description of the 3.6.0 layout
pub mod plan;
/// Plan application
pub mod splice;

pub use plan::InsertionPlan;
pub use splice::{convert, splice};
