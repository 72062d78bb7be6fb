//! Undirected graphs and the random graph provider.
//!
//! A [`Graph`] is immutable once built and is shared read-only by every
//! candidate coloring evaluated against it. Adjacency is stored as one
//! sorted neighbor set per node, so it is symmetric and loop-free by
//! construction.

use crate::error::{Error, Result};
use rand::Rng;
use std::collections::BTreeSet;

/// A simple undirected graph on nodes `0..n_nodes`.
///
/// # Examples
///
/// ```
/// use chromagen::graph::Graph;
///
/// // Path 0 - 1 - 2 - 3
/// let graph = Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3)]).unwrap();
/// assert_eq!(graph.edge_count(), 3);
/// assert!(graph.is_adjacent(2, 1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Graph {
    adjacency: Vec<BTreeSet<usize>>,
    edge_count: usize,
}

impl Graph {
    /// Creates a graph with `n_nodes` nodes and no edges.
    pub fn empty(n_nodes: usize) -> Result<Self> {
        if n_nodes == 0 {
            return Err(Error::invalid("graph must have at least one node"));
        }
        Ok(Self {
            adjacency: vec![BTreeSet::new(); n_nodes],
            edge_count: 0,
        })
    }

    /// Builds a graph from an undirected edge list.
    ///
    /// Duplicate edges (in either orientation) collapse into one.
    /// Self-loops and out-of-range endpoints are rejected.
    pub fn from_edges(n_nodes: usize, edges: &[(usize, usize)]) -> Result<Self> {
        let mut graph = Self::empty(n_nodes)?;
        for &(u, v) in edges {
            graph.insert_edge(u, v)?;
        }
        Ok(graph)
    }

    /// Builds a graph from an adjacency list, one neighbor list per node.
    ///
    /// The relation must already be symmetric: if `v` is listed under `u`,
    /// `u` must be listed under `v`.
    pub fn from_adjacency(adjacency: Vec<Vec<usize>>) -> Result<Self> {
        let n_nodes = adjacency.len();
        let mut graph = Self::empty(n_nodes)?;
        for (u, neighbors) in adjacency.iter().enumerate() {
            for &v in neighbors {
                if v >= n_nodes {
                    return Err(Error::invalid(format!(
                        "node {u} lists neighbor {v}, but the graph has {n_nodes} nodes"
                    )));
                }
                if !adjacency[v].contains(&u) {
                    return Err(Error::invalid(format!(
                        "adjacency is not symmetric: {u} -> {v} has no reverse entry"
                    )));
                }
                graph.insert_edge(u, v)?;
            }
        }
        Ok(graph)
    }

    /// Samples an Erdős–Rényi G(n, p) graph.
    ///
    /// Every unordered pair `u < v` is connected independently with
    /// probability `edge_probability`.
    pub fn random<R: Rng>(n_nodes: usize, edge_probability: f64, rng: &mut R) -> Result<Self> {
        check_probability(edge_probability)?;
        let mut graph = Self::empty(n_nodes)?;
        for u in 0..n_nodes {
            for v in (u + 1)..n_nodes {
                if rng.random_bool(edge_probability) {
                    graph.insert_edge(u, v)?;
                }
            }
        }
        Ok(graph)
    }

    fn insert_edge(&mut self, u: usize, v: usize) -> Result<()> {
        let n = self.n_nodes();
        if u >= n || v >= n {
            return Err(Error::invalid(format!(
                "edge ({u}, {v}) is out of range for {n} nodes"
            )));
        }
        if u == v {
            return Err(Error::invalid(format!("self-loop on node {u}")));
        }
        if self.adjacency[u].insert(v) {
            self.adjacency[v].insert(u);
            self.edge_count += 1;
        }
        Ok(())
    }

    /// Number of nodes.
    pub fn n_nodes(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Neighbors of `node`, ascending.
    ///
    /// # Panics
    /// Panics if `node >= n_nodes()`.
    pub fn neighbors(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        self.adjacency[node].iter().copied()
    }

    /// Number of neighbors of `node`.
    pub fn degree(&self, node: usize) -> usize {
        self.adjacency[node].len()
    }

    pub fn is_adjacent(&self, u: usize, v: usize) -> bool {
        self.adjacency.get(u).is_some_and(|set| set.contains(&v))
    }

    /// Every edge exactly once as `(u, v)` with `u < v`, in ascending order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(u, neighbors)| {
            neighbors.range((u + 1)..).map(move |&v| (u, v))
        })
    }
}

fn check_probability(p: f64) -> Result<()> {
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(Error::invalid(format!(
            "edge probability must be in [0, 1], got {p}"
        )))
    }
}

/// Source of the graph an evolution run colors.
///
/// The engine only consumes the finished [`Graph`]; how it is produced
/// (random sampling, a file, a fixed benchmark) is up to the provider.
pub trait GraphProvider {
    /// Produces a graph, drawing any randomness from `rng`.
    fn generate<R: Rng>(&self, rng: &mut R) -> Result<Graph>;
}

/// Provider for random G(n, p) graphs.
///
/// ```
/// use chromagen::graph::{GraphProvider, RandomGraph};
/// use chromagen::random::create_rng;
///
/// let provider = RandomGraph::new(18, 0.35).unwrap();
/// let graph = provider.generate(&mut create_rng(42)).unwrap();
/// assert_eq!(graph.n_nodes(), 18);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RandomGraph {
    n_nodes: usize,
    edge_probability: f64,
}

impl RandomGraph {
    /// Validates the parameters and creates the provider.
    pub fn new(n_nodes: usize, edge_probability: f64) -> Result<Self> {
        if n_nodes == 0 {
            return Err(Error::invalid("n_nodes must be at least 1"));
        }
        check_probability(edge_probability)?;
        Ok(Self {
            n_nodes,
            edge_probability,
        })
    }

    pub fn n_nodes(&self) -> usize {
        self.n_nodes
    }

    pub fn edge_probability(&self) -> f64 {
        self.edge_probability
    }
}

impl GraphProvider for RandomGraph {
    fn generate<R: Rng>(&self, rng: &mut R) -> Result<Graph> {
        Graph::random(self.n_nodes, self.edge_probability, rng)
    }
}
