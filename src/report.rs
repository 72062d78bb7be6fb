//! Rendering of evolution results.
//!
//! The engine only produces an [`EvolutionHistory`]; this module turns
//! selected generations of it into something a person can read: a text
//! report with fitness histograms, and Graphviz drawings of the fittest
//! colorings.

use crate::ga::{Candidate, EvolutionHistory, GenerationStats};
use crate::graph::Graph;
use rand::Rng;
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::io::{self, Write};

/// Widest histogram bar, in characters.
const BAR_WIDTH: usize = 40;

/// Picks which generations to render.
///
/// Always includes the first and the last generation, plus
/// `requested - 2` distinct generations drawn at random from the middle.
/// The result is sorted ascending. A request below 2 is raised to 2, and a
/// request of at least `total` returns every generation.
pub fn sample_generations<R: Rng>(total: usize, requested: usize, rng: &mut R) -> Vec<usize> {
    let requested = requested.max(2);
    if requested >= total {
        return (0..total).collect();
    }
    let mut picked: Vec<usize> = rand::seq::index::sample(rng, total - 2, requested - 2)
        .into_iter()
        .map(|i| i + 1)
        .collect();
    picked.push(0);
    picked.push(total - 1);
    picked.sort_unstable();
    picked
}

/// Consumer of a run's history.
pub trait Reporter {
    /// Renders the listed generations. Indices past the end of the history
    /// are skipped.
    fn report(
        &mut self,
        history: &EvolutionHistory,
        graph: &Graph,
        generations: &[usize],
    ) -> io::Result<()>;
}

/// Plain-text reporter.
///
/// For each generation it writes the fittest coloring, its conflicting
/// edges, summary statistics, and a histogram of the population's fitness.
pub struct TextReporter<W: Write> {
    out: W,
}

impl<W: Write> TextReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for TextReporter<W> {
    fn report(
        &mut self,
        history: &EvolutionHistory,
        graph: &Graph,
        generations: &[usize],
    ) -> io::Result<()> {
        writeln!(
            self.out,
            "graph: {} nodes, {} edges",
            graph.n_nodes(),
            graph.edge_count()
        )?;
        for &gen in generations {
            let (Some(values), Some(fittest)) = (
                history.fitness_history.get(gen),
                history.fittest_history.get(gen),
            ) else {
                continue;
            };
            writeln!(self.out)?;
            writeln!(
                self.out,
                "generation: {}, fitness: {}",
                gen + 1,
                fittest.fitness()
            )?;
            writeln!(self.out, "fittest: {fittest}")?;
            let conflicts = fittest.conflicts(graph);
            if conflicts.is_empty() {
                writeln!(self.out, "conflicts: none")?;
            } else {
                let list: Vec<String> = conflicts.iter().map(|(u, v)| format!("{u}-{v}")).collect();
                writeln!(self.out, "conflicts: {}", list.join(", "))?;
            }
            if let Some(stats) = GenerationStats::from_fitness(values) {
                writeln!(
                    self.out,
                    "population: best {}, worst {}, mean {:.2}",
                    stats.best, stats.worst, stats.mean
                )?;
            }
            self.out.write_all(histogram(values).as_bytes())?;
        }
        Ok(())
    }
}

/// ASCII histogram with one row per distinct fitness value.
pub fn histogram(values: &[usize]) -> String {
    let mut counts: BTreeMap<usize, usize> = BTreeMap::new();
    for &v in values {
        *counts.entry(v).or_default() += 1;
    }
    let max_count = counts.values().copied().max().unwrap_or(0);
    let label_width = counts
        .keys()
        .last()
        .map_or(1, |k| k.to_string().len());

    let mut out = String::new();
    for (value, count) in &counts {
        let bar = (count * BAR_WIDTH).div_ceil(max_count);
        let _ = writeln!(out, "{value:>label_width$} | {} {count}", "#".repeat(bar));
    }
    out
}

/// Renders a coloring as a Graphviz `graph`.
///
/// Nodes are filled with their color. Conflicting edges are drawn red and
/// bold, the rest green.
pub fn to_dot(candidate: &Candidate, graph: &Graph) -> String {
    let mut out = String::from("graph coloring {\n    node [style=filled, fontcolor=white];\n");
    for (node, color) in candidate.colors().iter().enumerate() {
        let _ = writeln!(out, "    {node} [fillcolor={}];", color.name());
    }
    for (u, v) in graph.edges() {
        if candidate.colors()[u] == candidate.colors()[v] {
            let _ = writeln!(out, "    {u} -- {v} [color=red, style=bold];");
        } else {
            let _ = writeln!(out, "    {u} -- {v} [color=green];");
        }
    }
    out.push_str("}\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn path4() -> Graph {
        Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3)]).unwrap()
    }

    #[test]
    fn test_sample_includes_first_and_last() {
        let mut rng = create_rng(42);
        for requested in 2..10 {
            let picked = sample_generations(20, requested, &mut rng);
            assert_eq!(picked.len(), requested);
            assert_eq!(picked[0], 0);
            assert_eq!(*picked.last().unwrap(), 19);
            assert!(picked.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_sample_clamps() {
        let mut rng = create_rng(42);
        assert_eq!(sample_generations(3, 10, &mut rng), vec![0, 1, 2]);
        assert_eq!(sample_generations(5, 0, &mut rng), vec![0, 4]);
        assert_eq!(sample_generations(1, 2, &mut rng), vec![0]);
        assert!(sample_generations(0, 4, &mut rng).is_empty());
    }

    #[test]
    fn test_histogram_rows() {
        let text = histogram(&[2, 3, 3, 3, 10]);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with(" 2 | "));
        assert!(lines[1].ends_with(" 3"));
        assert!(lines[1].contains(&"#".repeat(BAR_WIDTH)));
        assert!(histogram(&[]).is_empty());
    }

    #[test]
    fn test_dot_marks_conflicts() {
        let g = path4();
        let c = Candidate::parse("rrgb", &g).unwrap();
        let dot = to_dot(&c, &g);
        assert!(dot.starts_with("graph coloring {"));
        assert!(dot.contains("0 [fillcolor=red];"));
        assert!(dot.contains("3 [fillcolor=blue];"));
        assert!(dot.contains("0 -- 1 [color=red, style=bold];"));
        assert!(dot.contains("1 -- 2 [color=green];"));
        assert!(dot.trim_end().ends_with('}'));
    }

    #[test]
    fn test_text_report() {
        let g = path4();
        let history = EvolutionHistory {
            fitness_history: vec![vec![1, 2, 2], vec![3, 2, 1]],
            fittest_history: vec![
                Candidate::parse("rrgb", &g).unwrap(),
                Candidate::parse("rgrg", &g).unwrap(),
            ],
        };
        let mut reporter = TextReporter::new(Vec::new());
        reporter.report(&history, &g, &[0, 1, 7]).unwrap();
        let text = String::from_utf8(reporter.into_inner()).unwrap();

        assert!(text.contains("graph: 4 nodes, 3 edges"));
        assert!(text.contains("generation: 1, fitness: 2"));
        assert!(text.contains("conflicts: 0-1"));
        assert!(text.contains("generation: 2, fitness: 3"));
        assert!(text.contains("conflicts: none"));
        assert!(text.contains("population: best 3, worst 1, mean 2.00"));
        assert!(!text.contains("generation: 8"));
    }
}
