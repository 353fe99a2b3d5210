//! BED interval records
//!
//! Cut sites and fragments are both plain BED4/BED5/BED6 records. Lines are
//! first split into a zero-copy [`BedRecordView`] and only then turned into
//! an owned [`BedRecord`].

use memchr::memchr;
use std::fmt;

/// Strand orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strand {
    Plus,
    Minus,
}

impl Strand {
    /// Parse strand from a BED field
    ///
    /// # Examples
    /// ```
    /// use insilicut_frags::formats::bed::Strand;
    /// assert_eq!(Strand::from_field("+"), Some(Strand::Plus));
    /// assert_eq!(Strand::from_field("-"), Some(Strand::Minus));
    /// assert_eq!(Strand::from_field("."), None);
    /// ```
    pub fn from_field(s: &str) -> Option<Self> {
        match s {
            "+" => Some(Strand::Plus),
            "-" => Some(Strand::Minus),
            _ => None,
        }
    }

    /// Convert to char
    pub fn to_char(&self) -> char {
        match self {
            Strand::Plus => '+',
            Strand::Minus => '-',
        }
    }
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// One genomic interval: a cut site or a fragment
///
/// Coordinates are half-open and 0-based. Callers assume `start < end`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BedRecord {
    pub chrom: String,
    pub start: u64,
    pub end: u64,
    pub name: String,
    pub score: Option<i64>,
    pub strand: Option<Strand>,
}

impl BedRecord {
    pub fn new(chrom: impl Into<String>, start: u64, end: u64, name: impl Into<String>) -> Self {
        Self {
            chrom: chrom.into(),
            start,
            end,
            name: name.into(),
            score: None,
            strand: None,
        }
    }

    /// Interval length (`end - start`)
    pub fn len(&self) -> u64 {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Parse a single BED line into an owned record
    pub fn parse(line: &str) -> Result<Self, BedParseError> {
        BedRecordView::parse(line.as_bytes()).map(|view| view.to_record())
    }
}

impl fmt::Display for BedRecord {
    /// Tab-separated, trailing optional fields omitted.
    /// A strand without a score gets a `.` score so columns stay aligned.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}\t{}", self.chrom, self.start, self.end, self.name)?;
        match (self.score, self.strand) {
            (Some(score), Some(strand)) => write!(f, "\t{}\t{}", score, strand),
            (Some(score), None) => write!(f, "\t{}", score),
            (None, Some(strand)) => write!(f, "\t.\t{}", strand),
            (None, None) => Ok(()),
        }
    }
}

/// Minimum number of fields in a cut-site line (chrom, start, end, name)
pub const MIN_FIELDS: usize = 4;

/// Zero-copy BED line view
/// Only chrom/start/end/name are parsed eagerly, other fields are sliced on demand
pub struct BedRecordView<'a> {
    line: &'a [u8],
    pub chrom: &'a str,
    pub start: u64,
    pub end: u64,
    pub name: &'a str,
    field_bounds: Vec<(usize, usize)>,
}

impl<'a> BedRecordView<'a> {
    /// Parse a BED line with minimal allocation
    pub fn parse(line: &'a [u8]) -> Result<Self, BedParseError> {
        let line = trim_line_end(line);
        if line.is_empty() {
            return Err(BedParseError::EmptyLine);
        }

        let mut field_bounds = Vec::with_capacity(6);
        let mut start_pos = 0;
        while let Some(tab_pos) = memchr(b'\t', &line[start_pos..]) {
            let end_pos = start_pos + tab_pos;
            field_bounds.push((start_pos, end_pos));
            start_pos = end_pos + 1;
        }
        field_bounds.push((start_pos, line.len()));

        if field_bounds.len() < MIN_FIELDS {
            return Err(BedParseError::TooFewFields {
                expected: MIN_FIELDS,
                found: field_bounds.len(),
            });
        }

        let field_str = |index: usize, field: &'static str| -> Result<&'a str, BedParseError> {
            let (s, e) = field_bounds[index];
            std::str::from_utf8(&line[s..e]).map_err(|_| BedParseError::InvalidUtf8(field))
        };

        let chrom = field_str(0, "chrom")?;
        let start_str = field_str(1, "start")?;
        let start: u64 = start_str
            .parse()
            .map_err(|_| BedParseError::InvalidNumber("start", start_str.to_string()))?;
        let end_str = field_str(2, "end")?;
        let end: u64 = end_str
            .parse()
            .map_err(|_| BedParseError::InvalidNumber("end", end_str.to_string()))?;
        let name = field_str(3, "name")?;

        Ok(Self {
            line,
            chrom,
            start,
            end,
            name,
            field_bounds,
        })
    }

    /// Get the number of fields
    pub fn field_count(&self) -> usize {
        self.field_bounds.len()
    }

    /// Get field as string slice (lazy access)
    pub fn field(&self, index: usize) -> Option<&'a str> {
        self.field_bounds
            .get(index)
            .and_then(|(start, end)| std::str::from_utf8(&self.line[*start..*end]).ok())
    }

    /// Score (field 4), absent when missing or not an integer
    pub fn score(&self) -> Option<i64> {
        self.field(4).and_then(|s| s.parse().ok())
    }

    /// Strand (field 5), absent when missing or not `+`/`-`
    pub fn strand(&self) -> Option<Strand> {
        self.field(5).and_then(Strand::from_field)
    }

    pub fn to_record(&self) -> BedRecord {
        BedRecord {
            chrom: self.chrom.to_string(),
            start: self.start,
            end: self.end,
            name: self.name.to_string(),
            score: self.score(),
            strand: self.strand(),
        }
    }
}

/// True for lines that carry no record: blank, `#` comments, `track`/`browser` headers
///
/// `track`/`browser` only count as keywords when followed by whitespace or the
/// end of the line, so chromosomes such as `track1` are still sites.
pub fn is_header_line(line: &[u8]) -> bool {
    let line = trim_line_end(line);
    line.is_empty()
        || line.starts_with(b"#")
        || starts_with_keyword(line, b"track")
        || starts_with_keyword(line, b"browser")
}

fn starts_with_keyword(line: &[u8], keyword: &[u8]) -> bool {
    match line.strip_prefix(keyword) {
        Some(rest) => rest.first().map_or(true, |b| b.is_ascii_whitespace()),
        None => false,
    }
}

fn trim_line_end(mut line: &[u8]) -> &[u8] {
    while let Some((&last, rest)) = line.split_last() {
        if last == b'\n' || last == b'\r' {
            line = rest;
        } else {
            break;
        }
    }
    line
}

/// BED parsing error
#[derive(Debug, thiserror::Error)]
pub enum BedParseError {
    #[error("Empty line")]
    EmptyLine,

    #[error("Too few fields: expected at least {expected}, found {found}")]
    TooFewFields { expected: usize, found: usize },

    #[error("Invalid UTF-8 in field: {0}")]
    InvalidUtf8(&'static str),

    #[error("Invalid number in field {0}: {1}")]
    InvalidNumber(&'static str, String),
}
