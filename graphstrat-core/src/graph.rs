//! Graph assembly from a component-size sequence.

use std::collections::HashMap;
use std::fmt;
use std::ops::Range;

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::unionfind::UnionFind;
use petgraph::visit::EdgeRef;

use crate::data::Seed;
use crate::partition::Partition;

/// An undirected graph whose connected components match a sampled partition.
///
/// Node labels are the contiguous range `0..n`, partitioned into one label
/// range per component in partition order. Edges never cross ranges, so the
/// declared ranges are exactly the connected components. Produced fresh per
/// draw and owned by the caller.
#[derive(Clone)]
pub struct Graph {
    graph: UnGraph<(), ()>,
    components: Vec<Range<usize>>,
}

impl Graph {
    /// Assemble a graph with exactly the component structure of `partition`.
    ///
    /// Each label range first gets a uniform random-attachment spanning tree
    /// (connected with the minimum edge count), then up to one extra
    /// in-range edge per node. A size-1 component is an isolated node.
    pub fn assemble(partition: &Partition, seed: Seed) -> Self {
        let total = partition.total();
        let mut graph = UnGraph::with_capacity(total, 2 * total);
        for _ in 0..total {
            graph.add_node(());
        }

        let mut components = Vec::with_capacity(partition.len());
        let mut offset = 0;
        let mut seed = seed;
        for &size in partition.sizes() {
            // Spanning tree: node j attaches to a uniformly chosen earlier
            // node in the same range.
            for j in 1..size {
                let (parent, next) = seed.next_bounded(j as u64);
                seed = next;
                graph.update_edge(
                    NodeIndex::new(offset + parent as usize),
                    NodeIndex::new(offset + j),
                    (),
                );
            }

            // Extra in-range edges; duplicates collapse via update_edge and
            // self-loops are skipped, so the component stays simple.
            if size >= 2 {
                let (extra, next) = seed.next_bounded(size as u64 + 1);
                seed = next;
                for _ in 0..extra {
                    let (a, next) = seed.next_bounded(size as u64);
                    let (b, next) = next.next_bounded(size as u64);
                    seed = next;
                    if a != b {
                        graph.update_edge(
                            NodeIndex::new(offset + a as usize),
                            NodeIndex::new(offset + b as usize),
                            (),
                        );
                    }
                }
            }

            components.push(offset..offset + size);
            offset += size;
        }

        Graph { graph, components }
    }

    /// Number of nodes; labels are `0..node_count()`.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// The undirected edges as node-label pairs.
    pub fn edges(&self) -> Vec<(usize, usize)> {
        self.graph
            .edge_references()
            .map(|e| (e.source().index(), e.target().index()))
            .collect()
    }

    /// The declared component label ranges, in partition order.
    pub fn components(&self) -> &[Range<usize>] {
        &self.components
    }

    /// The declared component sizes, in partition order.
    pub fn declared_sizes(&self) -> Vec<usize> {
        self.components.iter().map(|r| r.len()).collect()
    }

    /// The actual connected-component sizes, computed from the edge set by
    /// union-find, in descending order.
    pub fn connected_component_sizes(&self) -> Vec<usize> {
        let mut uf = UnionFind::<usize>::new(self.graph.node_count());
        for edge in self.graph.edge_references() {
            uf.union(edge.source().index(), edge.target().index());
        }
        let mut counts: HashMap<usize, usize> = HashMap::new();
        for node in 0..self.graph.node_count() {
            *counts.entry(uf.find(node)).or_insert(0) += 1;
        }
        let mut sizes: Vec<usize> = counts.into_values().collect();
        sizes.sort_unstable_by(|a, b| b.cmp(a));
        sizes
    }

    /// The underlying petgraph graph, for standard connectivity queries.
    pub fn as_petgraph(&self) -> &UnGraph<(), ()> {
        &self.graph
    }
}

impl fmt::Debug for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("components", &self.components)
            .field("edges", &self.edges())
            .finish()
    }
}
