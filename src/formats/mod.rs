//! File format adapters
//!
//! Cut sites and fragments are both read and written as BED.

pub mod bed;

pub use bed::{is_header_line, BedParseError, BedRecord, BedRecordView, Strand};
