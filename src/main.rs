use clap::{Parser, Subcommand};
use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Instant;

use serif_coverage::{catalog, config, coverage, edges, output, scoring};

const EXIT_SUCCESS: i32 = 0;
const EXIT_DATA: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rank candidate sources by marginal value (default if no subcommand)
    Rank {
        /// Output tab-separated values for scripting
        #[arg(long)]
        tsv: bool,
    },
    /// Show mechanism coverage with the currently available columns
    Coverage,
    /// Explain one candidate's score factor by factor
    Explain {
        /// Candidate source id (see `sources`)
        source: String,
    },
    /// List the candidate source catalog
    Sources,
    /// List every mechanism with its testability
    Mechanisms,
}

#[derive(Parser, Debug)]
#[command(name = "serif-coverage")]
#[command(about = "Ranks candidate health data sources by mechanism coverage", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/serif-coverage/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Rank { tsv: false });
    let start_time = Instant::now();

    let config_path = cli.config.map(PathBuf::from);
    let config = match config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Owned sources must exist in the catalog; a typo here would silently
    // shrink the available column set.
    let unknown: Vec<&String> = config
        .sources
        .iter()
        .filter(|id| catalog::candidate_source(id).is_none())
        .collect();
    if !unknown.is_empty() {
        eprintln!("Config error: unknown source ids:");
        for id in unknown {
            eprintln!("  - {}", id);
        }
        eprintln!("Run `serif-coverage sources` for the catalog.");
        std::process::exit(EXIT_CONFIG);
    }

    // Validate scoring weights at startup
    let weights = config.scoring.clone().unwrap_or_default();
    if let Err(errors) = scoring::validate_weights(&weights) {
        eprintln!("Scoring config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    // Available columns: everything the owned sources provide, plus any
    // extra columns declared directly.
    let mut available: HashSet<String> = HashSet::new();
    for id in &config.sources {
        if let Some(source) = catalog::candidate_source(id) {
            for col in source.columns {
                available.insert(col.to_string());
            }
        }
    }
    for col in &config.columns {
        available.insert(col.clone());
    }

    if cli.verbose {
        eprintln!(
            "Loaded {} owned sources, {} extra columns ({} columns available)",
            config.sources.len(),
            config.columns.len(),
            available.len()
        );
    }

    // An explicitly configured edge summary must load; without one the
    // boost factor simply contributes nothing.
    let summaries = match &config.edge_summary {
        Some(path) => match edges::load_edge_summaries(&PathBuf::from(path)) {
            Ok(s) => {
                if cli.verbose {
                    eprintln!("Loaded {} fitted edges from {}", s.len(), path);
                }
                s
            }
            Err(e) => {
                eprintln!("Edge summary error: {}", e);
                std::process::exit(EXIT_DATA);
            }
        },
        None => {
            if cli.verbose {
                eprintln!("No edge summary configured; boost factor contributes nothing");
            }
            Vec::new()
        }
    };

    let owned: HashSet<String> = config.sources.iter().cloned().collect();
    let use_colors = output::should_use_colors();

    match command {
        Commands::Rank { tsv } => {
            let ranked = scoring::rank_candidates(&available, &owned, &summaries, &weights);

            if tsv {
                let out = output::format_tsv(&ranked);
                if !out.is_empty() {
                    println!("{}", out);
                }
            } else {
                println!("{}", output::format_ranked_table(&ranked, use_colors));
            }

            if cli.verbose {
                eprintln!();
                eprintln!(
                    "Ranked {} candidates in {:?}",
                    ranked.len(),
                    start_time.elapsed()
                );
            }
        }
        Commands::Coverage => {
            let statuses = coverage::classify(&available);
            let report = coverage::coverage_report(&statuses);
            println!("{}", output::format_coverage_report(&report, use_colors));
        }
        Commands::Explain { source } => {
            let Some(candidate) = catalog::candidate_source(&source) else {
                eprintln!(
                    "Unknown source '{}'. Run `serif-coverage sources` for the catalog.",
                    source
                );
                std::process::exit(EXIT_CONFIG);
            };

            let result = scoring::evaluate_candidate(candidate, &available, &summaries, &weights);
            println!(
                "{}",
                output::format_candidate_detail(&result, &summaries, use_colors)
            );
        }
        Commands::Sources => {
            println!("{}", output::format_source_list(&config.sources, use_colors));
        }
        Commands::Mechanisms => {
            let statuses = coverage::classify(&available);
            println!("{}", output::format_mechanism_table(&statuses, use_colors));
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
