//! End-to-end run: load → sort/extract → write

use super::config::Config;
use super::error::Result;
use super::extract::{extract_fragments, ChromSummary};
use super::sites::load_sites;
use super::stats::FragmentStats;
use super::writer::{save_fragments, FragmentOutputs};

/// Outcome of one run
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub sites: usize,
    pub per_chrom: Vec<ChromSummary>,
    /// `None` when no chromosome had two separated sites
    pub stats: Option<FragmentStats>,
    pub outputs: FragmentOutputs,
}

/// Extract fragments from `config.input` and write both output files
pub fn run(config: &Config) -> Result<RunSummary> {
    let mut sites = load_sites(&config.input)?;
    let num_sites = sites.num_sites();

    let extraction = extract_fragments(&mut sites);
    drop(sites);

    let outputs = save_fragments(&extraction.fragments, config)?;

    Ok(RunSummary {
        sites: num_sites,
        per_chrom: extraction.per_chrom,
        stats: extraction.stats,
        outputs,
    })
}
