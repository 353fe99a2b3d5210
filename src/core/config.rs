//! Run configuration
//!
//! Built once from the command line and passed by reference to every stage.

use super::error::ConfigError;
use log::LevelFilter;
use std::path::{Path, PathBuf};

/// Default minimum fragment size
pub const DEFAULT_MIN_SIZE: u64 = 1;

/// Default maximum fragment size
pub const DEFAULT_MAX_SIZE: u64 = 500;

/// Default verbosity level
pub const DEFAULT_VERBOSE: u8 = 1;

/// Input suffixes stripped to derive the output prefix, tried in order
const INPUT_SUFFIXES: [&str; 4] = [".bed.gz", ".bed.bz2", ".bed", ".gz"];

/// Immutable settings for one extraction run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Cut-site BED file
    pub input: PathBuf,
    /// Minimum fragment length kept by size selection (inclusive)
    pub min_size: u64,
    /// Maximum fragment length kept by size selection (inclusive)
    pub max_size: u64,
    /// Verbosity level (0-3)
    pub verbose: u8,
}

impl Config {
    /// Validate raw settings and build the configuration
    ///
    /// Fails when the input is missing or does not exist, or when
    /// `min_size > max_size`.
    pub fn new(
        input: Option<PathBuf>,
        min_size: u64,
        max_size: u64,
        verbose: u8,
    ) -> Result<Self, ConfigError> {
        let input = input.ok_or(ConfigError::MissingInput)?;
        if !input.exists() {
            return Err(ConfigError::InputNotFound(input));
        }
        if min_size > max_size {
            return Err(ConfigError::InvalidSizeRange {
                min: min_size,
                max: max_size,
            });
        }
        Ok(Self {
            input,
            min_size,
            max_size,
            verbose,
        })
    }

    /// Log filter for the verbosity level: 0 warn, 1 info, 2 debug, 3 trace
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    /// Output prefix: the input path without its BED/compression suffix
    pub fn output_prefix(&self) -> String {
        output_prefix(&self.input)
    }

    /// `<prefix>_frags.bed.gz`
    pub fn all_fragments_path(&self) -> PathBuf {
        PathBuf::from(format!("{}_frags.bed.gz", self.output_prefix()))
    }

    /// `<prefix>_frags_s-<min>_S-<max>.bed.gz`
    pub fn selected_fragments_path(&self) -> PathBuf {
        PathBuf::from(format!(
            "{}_frags_s-{}_S-{}.bed.gz",
            self.output_prefix(),
            self.min_size,
            self.max_size
        ))
    }
}

/// Strip the first recognized input suffix from a path
pub fn output_prefix(input: &Path) -> String {
    let path = input.to_string_lossy();
    INPUT_SUFFIXES
        .iter()
        .find_map(|suffix| path.strip_suffix(suffix))
        .unwrap_or(&*path)
        .to_string()
}
