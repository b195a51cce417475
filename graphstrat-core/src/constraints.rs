//! Constraint sets for graph strategies.

use crate::error::{GraphStratError, Result};

/// Structural constraints a drawn graph must satisfy.
///
/// Supplied once at strategy construction and immutable afterwards. Every
/// maximum, when present, must be at least the corresponding minimum, and the
/// set as a whole must admit at least one size sequence; both are checked by
/// [`Constraints::validate`] before any draw happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraints {
    /// Minimum total node count.
    pub min_nodes: usize,
    /// Maximum total node count, if bounded.
    pub max_nodes: Option<usize>,
    /// Minimum number of connected components.
    pub min_num_components: usize,
    /// Maximum number of connected components, if bounded.
    pub max_num_components: Option<usize>,
    /// Minimum size of any connected component.
    pub min_component_size: usize,
    /// Maximum size of any connected component, if bounded.
    pub max_component_size: Option<usize>,
}

impl Default for Constraints {
    fn default() -> Self {
        Constraints {
            min_nodes: 0,
            max_nodes: None,
            min_num_components: 1,
            max_num_components: None,
            min_component_size: 1,
            max_component_size: None,
        }
    }
}

impl Constraints {
    /// Constraints with all defaults: at least one component of at least one
    /// node, everything else unbounded.
    pub fn new() -> Self {
        Constraints::default()
    }

    pub fn with_min_nodes(mut self, n: usize) -> Self {
        self.min_nodes = n;
        self
    }

    pub fn with_max_nodes(mut self, n: usize) -> Self {
        self.max_nodes = Some(n);
        self
    }

    pub fn with_min_num_components(mut self, k: usize) -> Self {
        self.min_num_components = k;
        self
    }

    pub fn with_max_num_components(mut self, k: usize) -> Self {
        self.max_num_components = Some(k);
        self
    }

    pub fn with_min_component_size(mut self, s: usize) -> Self {
        self.min_component_size = s;
        self
    }

    pub fn with_max_component_size(mut self, s: usize) -> Self {
        self.max_component_size = Some(s);
        self
    }

    /// Check the constraint set once, at strategy-construction time.
    ///
    /// Ill-formed bounds yield [`GraphStratError::InvalidConstraints`];
    /// well-formed but mutually unsatisfiable bounds yield
    /// [`GraphStratError::InfeasibleConstraints`]. Draws never re-check.
    pub fn validate(&self) -> Result<()> {
        if self.min_num_components == 0 {
            return Err(invalid("`min_num_components` must be at least 1"));
        }
        if self.min_component_size == 0 {
            return Err(invalid("`min_component_size` must be at least 1"));
        }
        if let Some(max) = self.max_nodes {
            if max < self.min_nodes {
                return Err(invalid("`max_nodes` must not be below `min_nodes`"));
            }
        }
        if let Some(max) = self.max_num_components {
            if max < self.min_num_components {
                return Err(invalid(
                    "`max_num_components` must not be below `min_num_components`",
                ));
            }
        }
        if let Some(max) = self.max_component_size {
            if max < self.min_component_size {
                return Err(invalid(
                    "`max_component_size` must not be below `min_component_size`",
                ));
            }
        }

        let k = self.component_floor();
        if let Some(max_k) = self.max_num_components {
            if k > max_k {
                return Err(self.infeasible(k));
            }
        }
        if let Some(max_nodes) = self.max_nodes {
            if self.node_floor(k) > max_nodes {
                return Err(self.infeasible(k));
            }
        }
        Ok(())
    }

    /// The fewest components any valid partition can have: the declared
    /// minimum, lifted when `max_component_size` alone cannot hold
    /// `min_nodes` within that many components.
    pub(crate) fn component_floor(&self) -> usize {
        let mut k = self.min_num_components;
        if let Some(cap) = self.max_component_size {
            if cap > 0 {
                k = k.max(self.min_nodes.div_ceil(cap));
            }
        }
        k
    }

    /// The fewest nodes a partition into `k` components can have.
    pub(crate) fn node_floor(&self, k: usize) -> usize {
        self.min_nodes.max(k * self.min_component_size)
    }

    fn infeasible(&self, k: usize) -> GraphStratError {
        GraphStratError::InfeasibleConstraints {
            details: format!(
                "no size sequence satisfies {} components of at least {} nodes each \
                 within max_nodes={:?}, max_num_components={:?}, max_component_size={:?} \
                 (min_nodes={}, needs at least {} components totalling {} nodes)",
                self.min_num_components,
                self.min_component_size,
                self.max_nodes,
                self.max_num_components,
                self.max_component_size,
                self.min_nodes,
                k,
                self.node_floor(k),
            ),
        }
    }
}

fn invalid(message: &str) -> GraphStratError {
    GraphStratError::InvalidConstraints {
        message: message.to_string(),
    }
}
