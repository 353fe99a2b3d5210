//! Core fragment extraction functionality
//!
//! This module contains cut-site loading, gap extraction, length
//! statistics and the gzip fragment writers.

pub mod config;
mod error;
pub mod extract;
pub mod io;
mod pipeline;
pub mod sites;
pub mod stats;
pub mod writer;

pub use config::{Config, DEFAULT_MAX_SIZE, DEFAULT_MIN_SIZE, DEFAULT_VERBOSE};
pub use error::{ConfigError, FragmentError, Result};
pub use extract::{extract_fragments, fragments_between, sort_sites, ChromSummary, Extraction};
pub use io::{
    create_gz_writer, detect_compression, finish_gz, open_input, ByteLineIterator,
    CompressionFormat, DEFAULT_BUFFER_SIZE,
};
pub use pipeline::{run, RunSummary};
pub use sites::{load_sites, parse_sites, read_sites, SiteMap};
pub use stats::FragmentStats;
pub use writer::{save_fragments, write_fragments, FragmentOutputs, WriteStats};
