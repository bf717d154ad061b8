// alignment.rs - BLAST tabular alignment records

use serde::Serialize;
use std::fmt;

/// Number of columns in BLAST `-outfmt 6` tabular output
pub const BLAST_TABULAR_COLUMNS: usize = 12;

/// One row of a 12-column tabular BLAST report
///
/// Columns: qseqid sseqid pident length mismatch gapopen qstart qend
/// sstart send evalue bitscore.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignmentRecord {
    pub query_id: String,
    pub subject_id: String,
    pub identity_percent: f64,
    pub alignment_length: u64,
    pub mismatches: u64,
    pub gap_opens: u64,
    pub query_start: u64,
    pub query_end: u64,
    pub subject_start: u64,
    pub subject_end: u64,
    pub e_value: f64,
    pub bit_score: f64,
}

impl AlignmentRecord {
    /// Subject coordinates run backwards for minus-strand hits
    pub fn is_subject_reversed(&self) -> bool {
        self.subject_start > self.subject_end
    }
}

/// A report row dropped during loading. Never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowSkipped {
    /// 1-based line number in the report
    pub line_number: u64,
    /// Raw line content, tab-joined
    pub line: String,
    pub reason: String,
}

impl fmt::Display for RowSkipped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {} ({})", self.line_number, self.reason, self.line)
    }
}

/// Loaded report: well-formed records in input order and the rows that were dropped
#[derive(Debug, Clone, Default)]
pub struct AlignmentReport {
    pub records: Vec<AlignmentRecord>,
    pub skipped: Vec<RowSkipped>,
}
