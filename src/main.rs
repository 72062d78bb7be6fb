use anyhow::{Context, Result};
use chromagen::ga::{EvolutionConfig, EvolutionRunner, GeneticOperator};
use chromagen::graph::{GraphProvider, RandomGraph};
use chromagen::random::{create_rng, random_seed};
use chromagen::report::{sample_generations, to_dot, Reporter, TextReporter};
use clap::Parser;
use rand::Rng;
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing::Level;

/// Searches for low-conflict 3-colorings of a random graph with a genetic algorithm.
#[derive(Parser, Debug)]
#[command(name = "chromagen", author, version, about, long_about = None)]
struct Cli {
    /// Number of nodes in the random graph
    #[arg(short, long, default_value_t = 18)]
    nodes: usize,

    /// Probability that any two nodes are connected, in [0, 1]
    #[arg(short, long, default_value_t = 0.35)]
    edge_probability: f64,

    /// Candidates per generation
    #[arg(short, long, default_value_t = 100)]
    population: usize,

    /// Number of generations to run
    #[arg(short, long, default_value_t = 100)]
    generations: usize,

    /// Fraction of the best candidates carried into the next generation, in (0, 1)
    #[arg(short, long, default_value_t = 0.1)]
    keep: f64,

    /// Genetic operator: `mutation` or `crossover`
    #[arg(short, long, default_value = "mutation")]
    operator: GeneticOperator,

    /// Seed for the graph and the evolution; random when omitted
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of generations to render in the report (first and last included)
    #[arg(long, default_value_t = 2)]
    visualize: usize,

    /// Directory for Graphviz drawings of the rendered generations
    #[arg(long, value_name = "DIR")]
    dot_dir: Option<PathBuf>,

    /// Write the full history as JSON
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,

    /// Log every generation
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(io::stderr)
        .init();

    let provider = RandomGraph::new(cli.nodes, cli.edge_probability)
        .context("invalid graph parameters")?;
    let config = EvolutionConfig::default()
        .with_population_size(cli.population)
        .with_n_generations(cli.generations)
        .with_percentage_to_keep(cli.keep)
        .with_operator(cli.operator);
    config.validate().context("invalid evolution parameters")?;

    let seed = cli.seed.unwrap_or_else(random_seed);
    let mut rng = create_rng(seed);
    let graph = provider.generate(&mut rng)?;
    tracing::info!(seed, edges = graph.edge_count(), "generated graph");
    let config = config.with_seed(rng.random());

    let result = EvolutionRunner::run(&graph, &config).context("evolution failed")?;
    let history = &result.history;

    let shown = sample_generations(history.generations(), cli.visualize, &mut rng);
    let mut reporter = TextReporter::new(io::stdout().lock());
    reporter.report(history, &graph, &shown)?;

    if let Some(dir) = &cli.dot_dir {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
        for &gen in &shown {
            let path = dir.join(format!("generation_{:04}.dot", gen + 1));
            fs::write(&path, to_dot(&history.fittest_history[gen], &graph))
                .with_context(|| format!("writing {}", path.display()))?;
        }
        tracing::info!(dir = %dir.display(), files = shown.len(), "wrote Graphviz drawings");
    }

    if let Some(path) = &cli.json {
        let json = serde_json::to_string_pretty(history)?;
        fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
        tracing::info!(path = %path.display(), "wrote history");
    }

    Ok(())
}
