//! Free-distance translation prefetcher CLI.
//!
//! This binary drives the predictor from recorded page-walk traces. It performs:
//! 1. **Replay:** Feed a trace through a TLB-fronted predictor and report statistics.
//! 2. **Config:** Print the effective configuration (defaults merged with a JSON file).

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sbfp_core::config::Config;
use sbfp_core::core::units::prefetch::FreeDistance;
use sbfp_core::sim::{TraceUnits, load_trace};
use sbfp_core::stats::{self, PrefetcherStats, ReplayStats};
use sbfp_core::{FreeDistancePredictor, TraceReplay};

#[derive(Parser, Debug)]
#[command(
    name = "sbfp",
    author,
    version,
    about = "Sampling-based free-page translation prefetcher",
    long_about = "Replay page-walk traces through the free-distance predictor.\n\nTraces hold one `<virtual> <physical>` page pair per line (decimal or 0x hex).\n\nExamples:\n  sbfp replay walks.trace\n  sbfp replay walks.trace --config sbfp.json --json\n  sbfp replay addrs.trace --bytes --stats replay"
)]
struct Cli {
    /// Log at debug level (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Replay a page-walk trace and print statistics.
    Replay {
        /// Trace file to replay.
        trace: PathBuf,

        /// JSON configuration file (defaults are used for omitted fields).
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Trace fields are byte addresses rather than page numbers.
        #[arg(long)]
        bytes: bool,

        /// Emit statistics as JSON instead of text.
        #[arg(long)]
        json: bool,

        /// Statistics sections to print (prefetcher, replay). Default: all.
        #[arg(long, num_args = 1..)]
        stats: Vec<String>,
    },

    /// Print the effective configuration as JSON.
    Config {
        /// JSON configuration file to merge over the defaults.
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

/// JSON report for `replay --json`.
#[derive(Serialize)]
struct Report<'a> {
    config: &'a Config,
    prefetcher: &'a PrefetcherStats,
    replay: &'a ReplayStats,
    confidence: Vec<(i32, u16)>,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Replay {
            trace,
            config,
            bytes,
            json,
            stats,
        } => cmd_replay(&trace, config.as_deref(), bytes, json, &stats),
        Commands::Config { config } => cmd_config(config.as_deref()),
    }
}

/// Installs a `fmt` subscriber on stderr; `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Loads the configuration file if given, otherwise the defaults. Exits on error.
fn load_config(path: Option<&Path>) -> Config {
    let Some(path) = path else {
        return Config::default();
    };
    Config::load(path).unwrap_or_else(|e| {
        eprintln!("Error loading config {}: {}", path.display(), e);
        process::exit(1);
    })
}

/// Replays `trace` through a fresh predictor and prints the resulting statistics.
fn cmd_replay(
    trace: &Path,
    config: Option<&Path>,
    bytes: bool,
    json: bool,
    sections: &[String],
) {
    let config = load_config(config);
    let units = if bytes {
        TraceUnits::Bytes
    } else {
        TraceUnits::Pages
    };

    let events = load_trace(trace, units).unwrap_or_else(|e| {
        eprintln!("Error loading trace {}: {}", trace.display(), e);
        process::exit(1);
    });
    info!(events = events.len(), trace = %trace.display(), "trace loaded");

    if let Some(bad) = sections
        .iter()
        .find(|s| !stats::STATS_SECTIONS.contains(&s.as_str()))
    {
        eprintln!(
            "Unknown stats section `{}` (expected one of: {})",
            bad,
            stats::STATS_SECTIONS.join(", ")
        );
        process::exit(1);
    }

    let mut replay = TraceReplay::from_config(&config);
    let replay_stats = *replay.run(events);
    let predictor: FreeDistancePredictor = replay.into_prefetcher();

    if json {
        let report = Report {
            config: &config,
            prefetcher: predictor.stats(),
            replay: &replay_stats,
            confidence: FreeDistance::all()
                .map(|fd| (fd.get(), predictor.confidence_table().get(fd)))
                .collect(),
        };
        match serde_json::to_string_pretty(&report) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("Error serializing report: {e}");
                process::exit(1);
            }
        }
        return;
    }

    println!("[*] Trace: {}", trace.display());
    stats::print_sections(predictor.stats(), &replay_stats, sections);
    println!("CONFIDENCE");
    for fd in FreeDistance::all() {
        let c = predictor.confidence_table().get(fd);
        let marker = if c > predictor.threshold() { "pq" } else { "sampler" };
        println!("  fdt[{fd}]                {c:<5} {marker}");
    }
}

/// Prints the effective configuration.
fn cmd_config(config: Option<&Path>) {
    let config = load_config(config);
    match serde_json::to_string_pretty(&config) {
        Ok(text) => println!("{text}"),
        Err(e) => {
            eprintln!("Error serializing config: {e}");
            process::exit(1);
        }
    }
}
