//! Fragment extraction
//!
//! A fragment is the gap between two adjacent cut sites on the same
//! chromosome. Sites that touch or overlap produce no fragment.

use super::sites::SiteMap;
use super::stats::FragmentStats;
use crate::formats::bed::BedRecord;

/// Per-chromosome extraction counts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChromSummary {
    pub chrom: String,
    pub cuts: usize,
    pub fragments: usize,
}

/// Fragments from one extraction pass, plus per-chromosome counts
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    /// Fragments grouped by chromosome (lexicographic), then by position
    pub fragments: Vec<BedRecord>,
    pub per_chrom: Vec<ChromSummary>,
    /// Pooled length statistics; `None` when there are no fragments
    pub stats: Option<FragmentStats>,
}

impl Extraction {
    /// Fragment lengths in extraction order
    pub fn lengths(&self) -> Vec<u64> {
        self.fragments.iter().map(BedRecord::len).collect()
    }
}

/// Sort sites ascending by start
///
/// The sort is stable: sites sharing a start keep their input order.
pub fn sort_sites(sites: &mut [BedRecord]) {
    sites.sort_by_key(|site| site.start);
}

/// Fragments between adjacent sites of one chromosome
///
/// `sites` must already be sorted by start.
pub fn fragments_between(sites: &[BedRecord]) -> Vec<BedRecord> {
    sites
        .windows(2)
        .filter(|pair| pair[0].end < pair[1].start)
        .map(|pair| {
            let (left, right) = (&pair[0], &pair[1]);
            BedRecord::new(
                left.chrom.clone(),
                left.end,
                right.start,
                format!("{}_{}", left.name, right.name),
            )
        })
        .collect()
}

/// Sort every chromosome's sites in place and collect all fragments
pub fn extract_fragments(sites: &mut SiteMap) -> Extraction {
    log::info!("get non-overlapping fragments ...");

    let mut extraction = Extraction::default();
    for (chrom, chrom_sites) in sites.iter_mut() {
        sort_sites(chrom_sites);
        let fragments = fragments_between(chrom_sites);

        log::info!("{}: {} cuts and {} fragments", chrom, chrom_sites.len(), fragments.len());
        extraction.per_chrom.push(ChromSummary {
            chrom: chrom.to_string(),
            cuts: chrom_sites.len(),
            fragments: fragments.len(),
        });
        extraction.fragments.extend(fragments);
    }

    extraction.stats = FragmentStats::from_lengths(&extraction.lengths());
    match &extraction.stats {
        Some(stats) => log::info!("{}", stats),
        None => log::warn!("no fragments"),
    }
    extraction
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sites::parse_sites;

    fn site(chrom: &str, start: u64, end: u64, name: &str) -> BedRecord {
        BedRecord::new(chrom, start, end, name)
    }

    #[test]
    fn test_touching_sites_yield_no_fragment() {
        let mut map: SiteMap = vec![
            site("1", 14, 20, "C"),
            site("1", 0, 4, "A"),
            site("1", 10, 14, "B"),
        ]
        .into_iter()
        .collect();

        let extraction = extract_fragments(&mut map);

        assert_eq!(extraction.fragments, vec![site("1", 4, 10, "A_B")]);
        assert_eq!(extraction.fragments[0].len(), 6);
        assert_eq!(extraction.stats.as_ref().map(|s| s.count), Some(1));
        assert_eq!(
            extraction.per_chrom,
            vec![ChromSummary { chrom: "1".to_string(), cuts: 3, fragments: 1 }]
        );
    }

    #[test]
    fn test_overlapping_sites_yield_no_fragment() {
        let sites = vec![site("1", 0, 10, "A"), site("1", 5, 12, "B")];
        assert!(fragments_between(&sites).is_empty());
    }

    #[test]
    fn test_single_site_has_no_fragments() {
        let mut map = parse_sites(["chr1\t100\t105\tonly"]).unwrap();
        let extraction = extract_fragments(&mut map);

        assert!(extraction.fragments.is_empty());
        assert!(extraction.stats.is_none());
        assert_eq!(extraction.per_chrom[0].cuts, 1);
    }

    #[test]
    fn test_empty_map() {
        let mut map = SiteMap::new();
        let extraction = extract_fragments(&mut map);
        assert!(extraction.fragments.is_empty());
        assert!(extraction.per_chrom.is_empty());
        assert!(extraction.stats.is_none());
    }

    #[test]
    fn test_chromosome_order_is_lexicographic() {
        let lines = [
            "chr2\t0\t4\ta",
            "chr2\t10\t14\tb",
            "chr10\t0\t4\tc",
            "chr10\t20\t24\td",
            "chr1\t0\t4\te",
            "chr1\t8\t12\tf",
        ];
        let mut map = parse_sites(lines).unwrap();
        let extraction = extract_fragments(&mut map);

        let chroms: Vec<&str> = extraction.fragments.iter().map(|f| f.chrom.as_str()).collect();
        assert_eq!(chroms, vec!["chr1", "chr10", "chr2"]);
        let names: Vec<&str> = extraction.fragments.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["e_f", "c_d", "a_b"]);
    }

    #[test]
    fn test_stable_sort_on_equal_starts() {
        let mut sites = vec![
            site("1", 10, 14, "late"),
            site("1", 0, 4, "first"),
            site("1", 0, 6, "second"),
        ];
        sort_sites(&mut sites);
        let names: Vec<&str> = sites.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "late"]);

        // "second" ends at 6, so the gap is [6, 10)
        assert_eq!(fragments_between(&sites), vec![site("1", 6, 10, "second_late")]);
    }

    #[test]
    fn test_sites_are_sorted_in_place() {
        let mut map = parse_sites(["1\t30\t34\tB", "1\t0\t4\tA"]).unwrap();
        extract_fragments(&mut map);
        let starts: Vec<u64> = map.get("1").unwrap().iter().map(|s| s.start).collect();
        assert_eq!(starts, vec![0, 30]);
    }
}
