//! Fragment length statistics

use std::fmt;

/// Summary of a fragment length distribution
#[derive(Debug, Clone, PartialEq)]
pub struct FragmentStats {
    pub count: usize,
    pub mean: f64,
    /// Population standard deviation (divisor n)
    pub std_dev: f64,
    /// `std_dev / sqrt(n)`
    pub std_err: f64,
    pub min: u64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: u64,
}

impl FragmentStats {
    /// Compute statistics over fragment lengths
    ///
    /// Returns `None` for an empty slice: there is nothing to summarize.
    pub fn from_lengths(lengths: &[u64]) -> Option<Self> {
        if lengths.is_empty() {
            return None;
        }

        let mut sorted = lengths.to_vec();
        sorted.sort_unstable();

        let n = sorted.len() as f64;
        let mean = sorted.iter().map(|&x| x as f64).sum::<f64>() / n;
        let variance = sorted
            .iter()
            .map(|&x| (x as f64 - mean).powi(2))
            .sum::<f64>()
            / n;
        let std_dev = variance.sqrt();

        Some(Self {
            count: sorted.len(),
            mean,
            std_dev,
            std_err: std_dev / n.sqrt(),
            min: sorted[0],
            q25: quantile_sorted(&sorted, 0.25),
            median: quantile_sorted(&sorted, 0.5),
            q75: quantile_sorted(&sorted, 0.75),
            max: sorted[sorted.len() - 1],
        })
    }
}

impl fmt::Display for FragmentStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "nb of fragments: {} (mean-len={:.2} std-err={:.6} std-dev={:.2} min={} Q25={:.2} med={:.2} Q75={:.2} max={})",
            self.count,
            self.mean,
            self.std_err,
            self.std_dev,
            self.min,
            self.q25,
            self.median,
            self.q75,
            self.max
        )
    }
}

/// Quantile of an ascending, non-empty slice
///
/// Linear interpolation between closest ranks at position `(n - 1) * p`.
pub fn quantile_sorted(sorted: &[u64], p: f64) -> f64 {
    debug_assert!(!sorted.is_empty());
    let pos = (sorted.len() - 1) as f64 * p.clamp(0.0, 1.0);
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] as f64 + (sorted[hi] as f64 - sorted[lo] as f64) * frac
}
