//! Component-size sequences: sampling and shrinking.

use crate::constraints::Constraints;
use crate::data::{Seed, Size};
use crate::error::Result;
use crate::gen::halving_path;

/// Base width of the sampling window above the constraint floors, in nodes,
/// before size and calibration scaling. Mirrors the `max_nodes = min_nodes +
/// 10` default of the unbounded case.
pub(crate) const DEFAULT_SPAN: f64 = 10.0;

/// An ordered sequence of positive component sizes.
///
/// The sole artifact between sampling and assembly: component `i` of the
/// assembled graph gets the `i`-th size, so the order is deterministic even
/// though components are unordered as a mathematical object. Immutable once
/// produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    sizes: Vec<usize>,
}

impl Partition {
    /// Build a partition from explicit sizes.
    ///
    /// Panics on an empty sequence or a zero size: both indicate a sampler
    /// defect, not a recoverable condition.
    pub fn from_sizes(sizes: Vec<usize>) -> Self {
        assert!(!sizes.is_empty(), "a partition needs at least one component");
        assert!(
            sizes.iter().all(|&s| s > 0),
            "component sizes must be positive"
        );
        Partition { sizes }
    }

    /// The component sizes, in assembly order.
    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Total node count.
    pub fn total(&self) -> usize {
        self.sizes.iter().sum()
    }

    /// Whether this partition satisfies every bound in `constraints`.
    pub fn satisfies(&self, constraints: &Constraints) -> bool {
        let k = self.len();
        let total = self.total();
        k >= constraints.min_num_components
            && constraints.max_num_components.map_or(true, |max| k <= max)
            && total >= constraints.min_nodes
            && constraints.max_nodes.map_or(true, |max| total <= max)
            && self.sizes.iter().all(|&s| {
                s >= constraints.min_component_size
                    && constraints.max_component_size.map_or(true, |max| s <= max)
            })
    }

    /// The unique minimal partition: fewest components, then fewest nodes,
    /// extras spread round-robin. This is the terminus of every shrink chain.
    pub fn floor(constraints: &Constraints) -> Result<Self> {
        constraints.validate()?;
        let k = constraints.component_floor();
        Ok(canonical(constraints, k, constraints.node_floor(k)))
    }

    /// Sample a partition satisfying `constraints`, skewed toward the floors
    /// as `size` decreases. Pure in its inputs: the same constraint set,
    /// size, and seed reproduce the same partition.
    ///
    /// Only reachable through a validated strategy, so infeasibility never
    /// surfaces here.
    pub fn sample(constraints: &Constraints, size: Size, seed: Seed) -> Self {
        Self::sample_scaled(constraints, size, seed, 1.0)
    }

    /// [`Partition::sample`] with the calibrated span scale applied.
    pub(crate) fn sample_scaled(
        constraints: &Constraints,
        size: Size,
        seed: Seed,
        span_scale: f64,
    ) -> Self {
        let min = constraints.min_component_size;
        let span = (DEFAULT_SPAN * span_scale * size.fraction()).round() as usize;

        // How many components: floor plus a size-scaled window, an extra
        // component costing `min` nodes out of the span.
        let k_lo = constraints.component_floor();
        let mut k_hi = k_lo + span / min;
        if let Some(max_k) = constraints.max_num_components {
            k_hi = k_hi.min(max_k);
        }
        if let Some(max_nodes) = constraints.max_nodes {
            k_hi = k_hi.min(max_nodes / min);
        }
        k_hi = k_hi.max(k_lo);
        let (k, seed) = seed.next_range(k_lo as u64, k_hi as u64);
        let k = k as usize;

        // How many nodes: floor for this k plus the size-scaled window.
        let n_lo = constraints.node_floor(k);
        let mut n_hi = n_lo + span;
        if let Some(max_nodes) = constraints.max_nodes {
            n_hi = n_hi.min(max_nodes);
        }
        if let Some(cap) = constraints.max_component_size {
            n_hi = n_hi.min(k * cap);
        }
        n_hi = n_hi.max(n_lo);
        let (n, seed) = seed.next_range(n_lo as u64, n_hi as u64);
        let n = n as usize;

        // Distribute the extra units one at a time, each to an independently
        // chosen component, skipping components already at their cap. No
        // positional bias toward the first or last component.
        let mut sizes = vec![min; k];
        let mut extras = n - k * min;
        let mut seed = seed;
        while extras > 0 {
            let chosen = match constraints.max_component_size {
                None => {
                    let (i, next) = seed.next_bounded(k as u64);
                    seed = next;
                    i as usize
                }
                Some(cap) => {
                    let open: Vec<usize> =
                        (0..k).filter(|&i| sizes[i] < cap).collect();
                    let (i, next) = seed.next_bounded(open.len() as u64);
                    seed = next;
                    open[i as usize]
                }
            };
            sizes[chosen] += 1;
            extras -= 1;
        }

        Partition::from_sizes(sizes)
    }

    /// A finite chain of strictly smaller valid partitions ending at
    /// [`Partition::floor`], ordered least-shrunk first.
    ///
    /// Two stages: halve the node surplus at the current component count,
    /// then halve the component surplus with each step at its node floor.
    /// The runner keeps the last failing candidate, so a fully failing chain
    /// lands exactly on the floor.
    pub fn shrink_chain(&self, constraints: &Constraints) -> Vec<Partition> {
        let k = self.len();
        let mut chain = Vec::new();

        for total in halving_path(constraints.node_floor(k), self.total()) {
            chain.push(canonical(constraints, k, total));
        }
        for smaller_k in halving_path(constraints.component_floor(), k) {
            chain.push(canonical(
                constraints,
                smaller_k,
                constraints.node_floor(smaller_k),
            ));
        }

        chain.dedup();
        chain
    }
}

/// The deterministic partition of `total` into `k` components: every
/// component starts at the minimum size, extras go round-robin up to the cap.
/// Callers guarantee `k * cap >= total`.
fn canonical(constraints: &Constraints, k: usize, total: usize) -> Partition {
    let min = constraints.min_component_size;
    let mut sizes = vec![min; k];
    let mut extras = total.saturating_sub(k * min);
    if let Some(cap) = constraints.max_component_size {
        extras = extras.min(k * (cap - min));
    }
    let mut idx = 0;
    while extras > 0 {
        sizes[idx] += 1;
        extras -= 1;
        idx = (idx + 1) % k;
    }
    Partition::from_sizes(sizes)
}
