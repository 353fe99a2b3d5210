//! insilicut-frags CLI entry point
//!
//! Extracts non-overlapping fragments in a given size range from a BED file
//! containing restriction sites from an in silico digest.

use anyhow::Context;
use clap::{CommandFactory, Parser};
use insilicut_frags::core::{Config, DEFAULT_MAX_SIZE, DEFAULT_MIN_SIZE, DEFAULT_VERBOSE};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "insilicut-frags")]
#[command(about = "Extract non-overlapping fragments in a given size range from a BED file of restriction sites")]
#[command(
    after_help = "Two output files are written next to the input, one with all fragments and one with the size-selected fragments."
)]
#[command(version)]
#[command(author = "insilicut-frags Contributors")]
struct Cli {
    /// Verbosity level (0/1/2/3)
    #[arg(short = 'v', long = "verbose", default_value_t = DEFAULT_VERBOSE,
          value_parser = clap::value_parser!(u8).range(0..=3))]
    verbose: u8,

    /// Input file with the cut sites (BED format, gzipped);
    /// coordinates should span the whole motif (e.g. 7-11 instead of 9)
    #[arg(short = 'i', value_name = "FILE")]
    input: Option<PathBuf>,

    /// Min size of the fragments to select
    #[arg(short = 's', value_name = "MIN", default_value_t = DEFAULT_MIN_SIZE)]
    min_size: u64,

    /// Max size of the fragments to select
    #[arg(short = 'S', value_name = "MAX", default_value_t = DEFAULT_MAX_SIZE)]
    max_size: u64,
}

/// Peak resident set size in kB, from `VmHWM`
#[cfg(target_os = "linux")]
fn peak_memory_kb() -> Option<u64> {
    let status = std::fs::read_to_string("/proc/self/status").ok()?;
    status
        .lines()
        .find(|line| line.starts_with("VmHWM:"))
        .and_then(|line| line.split_whitespace().nth(1))
        .and_then(|kb| kb.parse().ok())
}

#[cfg(not(target_os = "linux"))]
fn peak_memory_kb() -> Option<u64> {
    None
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match Config::new(cli.input, cli.min_size, cli.max_size, cli.verbose) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("ERROR: {}\n", e);
            eprintln!("{}", Cli::command().render_help());
            std::process::exit(1);
        }
    };

    env_logger::Builder::new()
        .filter_level(config.log_level())
        .parse_default_env()
        .init();

    let start = Instant::now();
    log::info!("START {} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    log::info!("cmd-line: {}", std::env::args().collect::<Vec<_>>().join(" "));
    if let Ok(cwd) = std::env::current_dir() {
        log::info!("cwd: {}", cwd.display());
    }

    let summary = insilicut_frags::run(&config)
        .with_context(|| format!("failed to extract fragments from {}", config.input.display()))?;

    log::debug!(
        "{} sites -> {} fragments ({} kept) in {} and {}",
        summary.sites,
        summary.outputs.stats.total,
        summary.outputs.stats.kept,
        summary.outputs.all.display(),
        summary.outputs.selected.display()
    );

    let elapsed = start.elapsed().as_secs_f64();
    match peak_memory_kb() {
        Some(kb) => log::info!("END {} ({:.2}s; {} kB)", env!("CARGO_PKG_NAME"), elapsed, kb),
        None => log::info!("END {} ({:.2}s)", env!("CARGO_PKG_NAME"), elapsed),
    }

    Ok(())
}
