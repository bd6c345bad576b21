//! NameMatch - Name Similarity from the Command Line
//!
//! Thin front end over the `namematch` library.

use anyhow::Result;
use clap::{Parser, Subcommand};
use namematch::config::Config;
use namematch::levenshtein_distance;
use namematch::utils::{
    find_matches_with, fuzzy_match_multiple_and_combined_with, fuzzy_match_with,
};
use serde_json::json;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Config file (defaults to the user config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Edit distance between two strings, without normalization
    Distance { a: String, b: String },

    /// Canonical comparison form of a name
    Normalize { text: String },

    /// Similarity of two names in [0, 1]
    Score { a: String, b: String },

    /// Best single candidate and the score against all candidates combined
    Best {
        query: String,
        candidates: Vec<String>,
    },

    /// Candidates ranked by similarity
    Rank {
        query: String,
        candidates: Vec<String>,

        /// Maximum number of results
        #[arg(short, long)]
        limit: Option<usize>,

        /// Minimum similarity in [0, 1]
        #[arg(long)]
        cutoff: Option<f64>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Setup logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    debug!("Using config: {:?}", config);
    let normalizer = config.normalizer();

    match args.command {
        Command::Distance { a, b } => {
            let distance = levenshtein_distance(&a, &b);
            if args.json {
                println!("{}", json!({ "distance": distance }));
            } else {
                println!("{}", distance);
            }
        }
        Command::Normalize { text } => {
            let normalized = normalizer.normalize(&text);
            if args.json {
                println!("{}", json!({ "normalized": normalized }));
            } else {
                println!("{}", normalized);
            }
        }
        Command::Score { a, b } => {
            let similarity = fuzzy_match_with(&normalizer, &a, &b);
            if args.json {
                println!("{}", json!({ "similarity": similarity }));
            } else {
                println!("{:.4}", similarity);
            }
        }
        Command::Best { query, candidates } => {
            let result = fuzzy_match_multiple_and_combined_with(&normalizer, &query, &candidates);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!(
                    "best:     '{}' ({:.4})",
                    result.best_single_match, result.single_similarity
                );
                println!(
                    "combined: '{}' ({:.4})",
                    result.combined_match, result.combined_similarity
                );
            }
        }
        Command::Rank {
            query,
            candidates,
            limit,
            cutoff,
        } => {
            let mut config = config;
            if let Some(limit) = limit {
                config.limit = limit;
            }
            if let Some(cutoff) = cutoff {
                config.cutoff = cutoff;
            }
            config.validate()?;

            let matches =
                find_matches_with(&normalizer, &query, &candidates, config.limit, config.cutoff);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&matches)?);
            } else if matches.is_empty() {
                info!("No candidate reached {:.2} for '{}'", config.cutoff, query);
            } else {
                for m in &matches {
                    println!("{:.4}  {}", m.score, m.value);
                }
            }
        }
    }

    Ok(())
}
