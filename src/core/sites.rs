//! Cut-site loading
//!
//! Groups BED records by chromosome, keeping input order within each
//! chromosome.

use super::error::{FragmentError, Result};
use super::io::{open_input, ByteLineIterator};
use crate::formats::bed::{is_header_line, BedRecord, BedRecordView};
use std::collections::BTreeMap;
use std::io::BufRead;
use std::path::Path;

/// Chromosome name -> cut sites on that chromosome
///
/// Keys iterate in lexicographic order so downstream output is reproducible.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SiteMap {
    sites: BTreeMap<String, Vec<BedRecord>>,
}

impl SiteMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a site to its chromosome's list
    pub fn push(&mut self, site: BedRecord) {
        if let Some(list) = self.sites.get_mut(&site.chrom) {
            list.push(site);
        } else {
            self.sites.insert(site.chrom.clone(), vec![site]);
        }
    }

    pub fn get(&self, chrom: &str) -> Option<&[BedRecord]> {
        self.sites.get(chrom).map(Vec::as_slice)
    }

    /// Number of chromosomes
    pub fn num_chroms(&self) -> usize {
        self.sites.len()
    }

    /// Total number of sites over all chromosomes
    pub fn num_sites(&self) -> usize {
        self.sites.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    pub fn chroms(&self) -> impl Iterator<Item = &str> {
        self.sites.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[BedRecord])> {
        self.sites.iter().map(|(c, s)| (c.as_str(), s.as_slice()))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut Vec<BedRecord>)> {
        self.sites.iter_mut().map(|(c, s)| (c.as_str(), s))
    }
}

impl FromIterator<BedRecord> for SiteMap {
    fn from_iter<I: IntoIterator<Item = BedRecord>>(iter: I) -> Self {
        let mut map = SiteMap::new();
        for site in iter {
            map.push(site);
        }
        map
    }
}

/// Parse raw BED lines into a [`SiteMap`]
///
/// Header and blank lines are skipped. Any other line must carry at least
/// chrom/start/end/name with integer coordinates; the first bad line aborts
/// the load with its 1-based line number.
pub fn parse_sites<I, S>(lines: I) -> Result<SiteMap>
where
    I: IntoIterator<Item = S>,
    S: AsRef<[u8]>,
{
    let mut map = SiteMap::new();
    for (idx, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        if let Some(site) = parse_site_line(line, idx + 1)? {
            map.push(site);
        }
    }
    Ok(map)
}

/// Read cut sites from any buffered reader
pub fn read_sites<R: BufRead>(reader: R) -> Result<SiteMap> {
    let mut map = SiteMap::new();
    let mut lines = ByteLineIterator::new(reader);
    let mut line_no = 0;

    while let Some(line) = lines.next_line() {
        let line = line?;
        line_no += 1;
        if let Some(site) = parse_site_line(line, line_no)? {
            map.push(site);
        }
    }

    log::debug!("read {} lines", line_no);
    Ok(map)
}

/// Load cut sites from a (possibly compressed) BED file
pub fn load_sites<P: AsRef<Path>>(path: P) -> Result<SiteMap> {
    let path = path.as_ref();
    log::info!("read file {} ...", path.display());

    let map = read_sites(open_input(path)?)?;

    log::info!(
        "loaded {} sites on {} chromosomes",
        map.num_sites(),
        map.num_chroms()
    );
    Ok(map)
}

fn parse_site_line(line: &[u8], line_no: usize) -> Result<Option<BedRecord>> {
    if is_header_line(line) {
        return Ok(None);
    }
    let view = BedRecordView::parse(line).map_err(|source| FragmentError::InvalidBed {
        line: line_no,
        source,
    })?;
    Ok(Some(view.to_record()))
}
