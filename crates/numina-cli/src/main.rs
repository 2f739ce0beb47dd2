use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use numina_core::graph::{self, TraversalQuery};
use numina_core::ontology::{NodeKey, NodeKind, Relationship};
use numina_core::synthesis::{check_token_budget_with, synthesize_with_config, Narrative};
use numina_core::tables::Element;
use numina_core::{ChartProfile, Config, Pattern};
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "numina")]
#[command(about = "Correspondence graph of numbers, planets, elements and signs", long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the default locations
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Synthesize a numeric pattern into correspondences and a narrative
    Synthesize {
        /// Digits to synthesize, e.g. 1234
        pattern: Pattern,
        /// Dominant element of a personal chart
        #[arg(long)]
        element: Option<Element>,
        /// Sun sign of the chart
        #[arg(long, requires = "element")]
        sun: Option<String>,
        /// Moon sign of the chart
        #[arg(long, requires = "element")]
        moon: Option<String>,
        /// Rising sign of the chart
        #[arg(long, requires = "element")]
        rising: Option<String>,
        /// Print only the narrative
        #[arg(long)]
        text: bool,
        /// Drop optional narrative sections to meet the token budget
        #[arg(long)]
        fit: bool,
    },
    /// Traverse the graph from one or more seed nodes
    Query {
        /// Seed node as kind:id, e.g. number:1 or sign:leo
        #[arg(long = "seed", required = true)]
        seeds: Vec<NodeKey>,
        /// Maximum hops from a seed
        #[arg(long)]
        depth: Option<usize>,
        /// Minimum edge weight to follow
        #[arg(long)]
        min_weight: Option<u8>,
        /// Only follow these relationships
        #[arg(long = "edge-type")]
        edge_types: Vec<Relationship>,
        /// Only discover nodes of these kinds
        #[arg(long = "target-kind")]
        target_kinds: Vec<NodeKind>,
    },
    /// Show node and edge counts
    Stats,
    /// Show the effective configuration
    Config,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Commands::Synthesize {
            pattern,
            element,
            sun,
            moon,
            rising,
            text,
            fit,
        } => {
            let profile = element.map(|element| ChartProfile {
                dominant_element: element,
                sun_sign: sun,
                moon_sign: moon,
                rising_sign: rising,
            });

            let graph = graph::shared();
            let mut result =
                synthesize_with_config(&graph, pattern.as_str(), profile.as_ref(), &config.synthesis);

            if fit {
                result.narrative = Narrative::compose(&result.metadata, result.personal.as_ref())
                    .fit_to_budget(&config.narrative)
                    .render();
            }
            let budget = check_token_budget_with(&result.narrative, &config.narrative);
            if !budget.within_budget {
                warn!(
                    estimated = budget.estimated_tokens,
                    budget = budget.budget,
                    "narrative exceeds token budget"
                );
            }

            if text {
                println!("{}", result.narrative);
            } else {
                println!("{}", serde_json::to_string_pretty(&result)?);
            }
        }
        Commands::Query {
            seeds,
            depth,
            min_weight,
            edge_types,
            target_kinds,
        } => {
            let mut query = TraversalQuery::from_config(&config.traversal, seeds);
            if let Some(depth) = depth {
                query = query.max_depth(depth);
            }
            if let Some(weight) = min_weight {
                query = query.min_weight(weight);
            }
            if !edge_types.is_empty() {
                query = query.edge_types(edge_types);
            }
            if !target_kinds.is_empty() {
                query = query.target_kinds(target_kinds);
            }

            let result = graph::shared().traverse(&query);
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Commands::Stats => {
            let stats = graph::shared().stats();
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        Commands::Config => {
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }

    Ok(())
}
