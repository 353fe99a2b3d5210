//! insilicut-frags - restriction fragments from in silico digests
//!
//! Reads a BED file of restriction-enzyme cut sites (each interval spanning
//! the whole motif), extracts the fragments lying between adjacent sites on
//! each chromosome, and writes all fragments plus a size-selected subset.
//!
//! # Example
//!
//! ```
//! use insilicut_frags::{extract_fragments, parse_sites, write_fragments};
//!
//! let mut sites = parse_sites(["1\t0\t4\tA", "1\t10\t14\tB", "1\t14\t20\tC"])?;
//! let extraction = extract_fragments(&mut sites);
//! assert_eq!(extraction.fragments.len(), 1);
//! assert_eq!(extraction.fragments[0].to_string(), "1\t4\t10\tA_B");
//!
//! let (mut all, mut selected) = (Vec::<u8>::new(), Vec::<u8>::new());
//! let stats = write_fragments(&extraction.fragments, 1, 5, &mut all, &mut selected)?;
//! assert_eq!((stats.total, stats.kept), (1, 0));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod core;
pub mod formats;

// Re-export commonly used types
pub use crate::core::{
    extract_fragments, load_sites, parse_sites, run, save_fragments, write_fragments, Config,
    ConfigError, Extraction, FragmentError, FragmentStats, RunSummary, SiteMap, WriteStats,
};
pub use crate::formats::{BedParseError, BedRecord, Strand};
