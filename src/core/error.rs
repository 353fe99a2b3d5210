//! Error types for insilicut-frags
//!
//! Defines all error types used throughout the library.

use crate::formats::bed::BedParseError;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for fragment extraction
#[derive(Debug, Error)]
pub enum FragmentError {
    /// Invalid run configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Malformed cut-site line
    #[error("Invalid BED format at line {line}: {source}")]
    InvalidBed {
        line: usize,
        #[source]
        source: BedParseError,
    },

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while validating the run configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No input file was given
    #[error("missing compulsory option -i")]
    MissingInput,

    /// Input file does not exist
    #[error("can't find '{}'", .0.display())]
    InputNotFound(PathBuf),

    /// Size bounds are inverted
    #[error("min fragment size ({min}) is larger than max fragment size ({max})")]
    InvalidSizeRange { min: u64, max: u64 },
}

/// Result type alias for fragment extraction
pub type Result<T> = std::result::Result<T, FragmentError>;
