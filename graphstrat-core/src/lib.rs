//! Core functionality for graphstrat constrained graph generation.
//!
//! This crate draws randomized graphs under three simultaneous structural
//! constraints — total node count, number of disjoint connected components,
//! and size per component — for use as property-based test inputs, with
//! shrinking toward the minimal graph satisfying the constraints.

pub mod constraints;
pub mod data;
pub mod error;
pub mod gen;
pub mod graph;
pub mod partition;
pub mod property;
pub mod strategy;
pub mod tree;

// Re-export the main types
pub use constraints::*;
pub use data::*;
pub use error::*;
pub use gen::*;
pub use graph::*;
pub use partition::*;
pub use property::*;
pub use strategy::*;
pub use tree::*;
