//! AI Simulator CLI - fast in-memory match simulation for strategy evaluation.
//!
//! Runs matches entirely in memory through the public engine API, pitting
//! any two difficulty tiers against each other without UI or delays.

mod metrics;
mod output;
mod simulator;
mod types;

use std::time::Instant;

use clap::Parser;
use engine::ai::create_ai;
use engine::{AiConfig, MatchConfig};
use metrics::build_match_metrics;
use output::OutputWriter;
use rand::Rng;
use simulator::{MatchResult, Simulator};
use tracing::{info, warn};
use types::{OutputFormat, Tier};

#[derive(Parser)]
#[command(name = "ai-simulator")]
#[command(about = "Fast in-memory dominoes match simulator for AI evaluation")]
struct Args {
    /// Number of matches to simulate
    #[arg(short, long, default_value = "1")]
    matches: u32,

    /// Strategy tier driving the human seat
    #[arg(long, default_value = "medium")]
    human: Tier,

    /// Strategy tier for the computer seat (the engine opponent)
    #[arg(long, default_value = "hard")]
    computer: Tier,

    /// Match target score (25, 50, or 100)
    #[arg(long, default_value = "100")]
    target: u32,

    /// Base seed for deterministic matches; match N uses seed + N - 1
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Show output summary and file paths
    #[arg(long)]
    show_output: bool,

    /// Output directory for results
    #[arg(long, default_value = "./simulation-results")]
    output_dir: String,

    /// Output format
    #[arg(long, default_value = "jsonl")]
    output_format: OutputFormat,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Silent by default, only show warnings/errors
    let filter = if args.verbose {
        "debug"
    } else if args.show_output {
        "info"
    } else {
        "warn"
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if args.show_output {
        info!("Starting AI simulator");
        info!(
            "Configuration: {} matches, human={}, computer={}, target={}",
            args.matches,
            args.human.name(),
            args.computer.name(),
            args.target
        );
    }

    let mut output_writer = OutputWriter::new(&args.output_dir, &args.output_format)?;
    if args.show_output {
        info!("Output directory: {}", args.output_dir);
    }

    let start = Instant::now();
    let mut results = Vec::new();
    let mut errors = 0u32;

    for match_num in 1..=args.matches {
        let match_start = Instant::now();
        let match_seed = match args.seed {
            Some(base) => base.wrapping_add(match_num as u64 - 1),
            None => rand::rng().random(),
        };

        let match_res = run_match(&args, match_seed);

        match match_res {
            Ok(result) => {
                let duration_ms = match_start.elapsed().as_secs_f64() * 1000.0;
                let timestamp = time::OffsetDateTime::now_utc()
                    .format(&time::format_description::well_known::Iso8601::DEFAULT)
                    .unwrap_or_else(|_| "unknown".to_string());

                let match_metrics = build_match_metrics(
                    match_num,
                    match_seed,
                    timestamp,
                    args.human.name(),
                    args.computer.name(),
                    args.target,
                    args.matches,
                    &result,
                    duration_ms,
                );

                if let Err(e) = output_writer.write_match(&match_metrics) {
                    warn!("Failed to write metrics for match {}: {}", match_num, e);
                }

                if args.verbose {
                    info!(
                        "Match {} completed: scores={:?}",
                        match_num, result.final_scores
                    );
                }
                results.push(result);
            }
            Err(e) => {
                errors += 1;
                warn!("Match {} failed: {}", match_num, e);
            }
        }
    }

    let elapsed = start.elapsed();

    let (jsonl_path, csv_path) = output_writer.output_paths();
    let jsonl_path = jsonl_path.cloned();
    let csv_path = csv_path.cloned();
    output_writer.finish()?;

    if args.show_output {
        if let Some(path) = jsonl_path {
            info!("Detailed results written to: {}", path.display());
        }
        if let Some(path) = csv_path {
            info!("Summary CSV written to: {}", path.display());
        }
        print_summary(&results, errors, elapsed, args.matches);
    }

    Ok(())
}

fn run_match(args: &Args, match_seed: u64) -> Result<MatchResult, Box<dyn std::error::Error>> {
    let config = MatchConfig::new(args.computer.difficulty(), args.target)?.with_seed(match_seed);

    // The human-seat driver gets its own derived seed so both seats replay
    // deterministically from the match seed.
    let driver = create_ai(
        args.human.difficulty(),
        &AiConfig::with_seed(match_seed.wrapping_mul(7).wrapping_add(3)),
    );

    let simulator = Simulator::new(config, driver);
    simulator.run().map_err(|e| e.into())
}

fn print_summary(
    results: &[MatchResult],
    errors: u32,
    elapsed: std::time::Duration,
    total: u32,
) {
    println!("\n=== Simulation Summary ===");
    println!("Matches completed: {}/{}", results.len(), total);
    if errors > 0 {
        println!("Errors: {}", errors);
    }
    println!("Total time: {:?}", elapsed);
    if !results.is_empty() {
        println!(
            "Average time per match: {:?}",
            elapsed / results.len() as u32
        );
    }

    if results.is_empty() {
        return;
    }

    let mut wins = [0u32; 2];
    let mut total_scores = [0u64; 2];
    let mut total_rounds = 0u64;

    for result in results {
        wins[result.winner.index()] += 1;
        for seat in 0..2 {
            total_scores[seat] += result.final_scores[seat] as u64;
        }
        total_rounds += result.rounds_played as u64;
    }

    println!("\n=== Results by Seat ===");
    for (seat, label) in ["human", "computer"].iter().enumerate() {
        let avg_score = total_scores[seat] as f64 / results.len() as f64;
        let win_rate = (wins[seat] as f64 / results.len() as f64) * 100.0;
        println!(
            "{}: avg={:.1}, wins={} ({:.1}%)",
            label, avg_score, wins[seat], win_rate
        );
    }
    println!(
        "Average rounds per match: {:.1}",
        total_rounds as f64 / results.len() as f64
    );
}
