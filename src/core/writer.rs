//! Fragment output
//!
//! One pass over the fragments feeds two sinks: every fragment, and the
//! fragments whose length is inside the configured size range.

use super::config::Config;
use super::io::{create_gz_writer, finish_gz};
use crate::formats::bed::BedRecord;
use std::io::{self, Write};
use std::path::PathBuf;

/// Write statistics
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WriteStats {
    pub total: usize,
    pub kept: usize,
}

/// Where the two fragment files were written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentOutputs {
    pub all: PathBuf,
    pub selected: PathBuf,
    pub stats: WriteStats,
}

/// Write all fragments to `all` and size-selected ones to `selected`
///
/// Both bounds are inclusive. Relative order is preserved in both sinks.
pub fn write_fragments<W1: Write, W2: Write>(
    fragments: &[BedRecord],
    min_size: u64,
    max_size: u64,
    all: &mut W1,
    selected: &mut W2,
) -> io::Result<WriteStats> {
    let mut stats = WriteStats::default();
    for frag in fragments {
        writeln!(all, "{}", frag)?;
        stats.total += 1;

        let len = frag.len();
        if min_size <= len && len <= max_size {
            writeln!(selected, "{}", frag)?;
            stats.kept += 1;
        }
    }
    Ok(stats)
}

/// Write both gzip fragment files next to the input
pub fn save_fragments(fragments: &[BedRecord], config: &Config) -> io::Result<FragmentOutputs> {
    log::info!("save fragments of the good size ...");

    let all_path = config.all_fragments_path();
    let selected_path = config.selected_fragments_path();

    let mut all = create_gz_writer(&all_path)?;
    let mut selected = create_gz_writer(&selected_path)?;

    let stats = write_fragments(
        fragments,
        config.min_size,
        config.max_size,
        &mut all,
        &mut selected,
    )?;
    finish_gz(all)?;
    finish_gz(selected)?;

    log::debug!("wrote {} and {}", all_path.display(), selected_path.display());
    log::info!("nb of kept fragments: {}", stats.kept);

    Ok(FragmentOutputs {
        all: all_path,
        selected: selected_path,
        stats,
    })
}
