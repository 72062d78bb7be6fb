//! Color palette and candidate colorings.
//!
//! A [`Candidate`] is one complete assignment of palette colors to graph
//! nodes. Its fitness is computed once, at construction, from the colors
//! and the shared [`Graph`]; genetic operators never modify a candidate,
//! they build new ones.

use crate::error::{Error, Result};
use crate::graph::Graph;
use rand::Rng;
use std::fmt;

/// One of the three palette colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    Red,
    Green,
    Blue,
}

impl Color {
    /// The full palette.
    pub const ALL: [Color; 3] = [Color::Red, Color::Green, Color::Blue];

    /// The two palette colors different from `self`.
    pub fn others(self) -> [Color; 2] {
        match self {
            Color::Red => [Color::Green, Color::Blue],
            Color::Green => [Color::Red, Color::Blue],
            Color::Blue => [Color::Red, Color::Green],
        }
    }

    /// Draws a palette color uniformly at random.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    /// Single-character symbol: `r`, `g` or `b`.
    pub fn symbol(self) -> char {
        match self {
            Color::Red => 'r',
            Color::Green => 'g',
            Color::Blue => 'b',
        }
    }

    /// Lowercase color name, as understood by Graphviz.
    pub fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
        }
    }
}

impl TryFrom<char> for Color {
    type Error = Error;

    fn try_from(c: char) -> Result<Self> {
        match c.to_ascii_lowercase() {
            'r' => Ok(Color::Red),
            'g' => Ok(Color::Green),
            'b' => Ok(Color::Blue),
            other => Err(Error::invalid(format!(
                "unknown color symbol '{other}', expected one of r, g, b"
            ))),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A colored assignment over all nodes of a graph.
///
/// Fitness is `edge_count - conflicting_edges`, where an edge conflicts
/// when both endpoints share a color. Higher is better; a proper coloring
/// reaches `graph.edge_count()`.
///
/// # Examples
///
/// ```
/// use chromagen::ga::Candidate;
/// use chromagen::graph::Graph;
///
/// let graph = Graph::from_edges(3, &[(0, 1), (1, 2)]).unwrap();
/// let proper = Candidate::parse("rgr", &graph).unwrap();
/// assert_eq!(proper.fitness(), 2);
///
/// let clash = Candidate::parse("rrg", &graph).unwrap();
/// assert_eq!(clash.fitness(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate {
    colors: Vec<Color>,
    fitness: usize,
}

impl Candidate {
    /// Builds a candidate and evaluates it against `graph`.
    ///
    /// Fails with [`Error::ColorCountMismatch`] unless there is exactly
    /// one color per node.
    pub fn new(colors: Vec<Color>, graph: &Graph) -> Result<Self> {
        if colors.len() != graph.n_nodes() {
            return Err(Error::ColorCountMismatch {
                expected: graph.n_nodes(),
                actual: colors.len(),
            });
        }
        Ok(Self::evaluated(colors, graph))
    }

    /// Builds a candidate from a color string such as `"rgbbr"`.
    pub fn parse(colors: &str, graph: &Graph) -> Result<Self> {
        let colors = colors
            .chars()
            .map(Color::try_from)
            .collect::<Result<Vec<_>>>()?;
        Self::new(colors, graph)
    }

    /// Builds a candidate with an independent uniform color per node.
    pub fn random<R: Rng>(graph: &Graph, rng: &mut R) -> Self {
        let colors = (0..graph.n_nodes()).map(|_| Color::random(rng)).collect();
        Self::evaluated(colors, graph)
    }

    /// Construction path for colors whose length is already known to match.
    pub(crate) fn evaluated(colors: Vec<Color>, graph: &Graph) -> Self {
        debug_assert_eq!(colors.len(), graph.n_nodes());
        let illegal = graph
            .edges()
            .filter(|&(u, v)| colors[u] == colors[v])
            .count();
        Self {
            colors,
            fitness: graph.edge_count() - illegal,
        }
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn fitness(&self) -> usize {
        self.fitness
    }

    pub fn n_nodes(&self) -> usize {
        self.colors.len()
    }

    /// Edges whose endpoints share a color, as `(u, v)` with `u < v`.
    pub fn conflicts(&self, graph: &Graph) -> Vec<(usize, usize)> {
        graph
            .edges()
            .filter(|&(u, v)| self.colors[u] == self.colors[v])
            .collect()
    }

    /// Whether no two adjacent nodes of `graph` share a color.
    ///
    /// Checked against `graph` edge by edge, so it is `false` for a graph
    /// with a different node count.
    pub fn is_proper(&self, graph: &Graph) -> bool {
        self.n_nodes() == graph.n_nodes()
            && graph.edges().all(|(u, v)| self.colors[u] != self.colors[v])
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for color in &self.colors {
            write!(f, "{color}")?;
        }
        Ok(())
    }
}
