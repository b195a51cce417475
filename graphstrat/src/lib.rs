//! Constrained random-graph strategies for property-based testing.
//!
//! This is the main entry point for the graphstrat library: build a
//! [`Constraints`] value, turn it into a [`GraphStrategy`] (or call
//! [`graphs`] directly), and draw [`Graph`] values whose connected
//! components satisfy the constraints, shrinking toward the minimal graph.

pub use graphstrat_core::*;
