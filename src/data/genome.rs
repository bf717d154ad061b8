// genome.rs - Genome layout and gene feature types

use std::fmt;

/// Orientation of a gene on its sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strand {
    Forward,
    Reverse,
}

impl Strand {
    pub fn sign(&self) -> char {
        match self {
            Strand::Forward => '+',
            Strand::Reverse => '-',
        }
    }
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.sign())
    }
}

/// Full extent of one genome record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceSpan {
    /// Display name given on the command line, used as the Circos chromosome id
    pub genome_label: String,
    /// LOCUS name of the source record
    pub sequence_id: String,
    pub length: u64,
}

/// One gene-like annotation with 1-based inclusive coordinates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneFeature {
    pub genome_label: String,
    pub sequence_id: String,
    pub name: String,
    pub start: u64,
    pub end: u64,
    pub strand: Strand,
}

impl GeneFeature {
    /// True when `1 <= start <= end <= length`
    pub fn fits_within(&self, span: &SequenceSpan) -> bool {
        self.start >= 1 && self.start <= self.end && self.end <= span.length
    }
}

/// Loaded genome: its layout span plus genes in source order
#[derive(Debug, Clone)]
pub struct Genome {
    pub span: SequenceSpan,
    pub genes: Vec<GeneFeature>,
}

impl Genome {
    pub fn label(&self) -> &str {
        &self.span.genome_label
    }

    /// First gene carrying the given name
    pub fn find_gene(&self, name: &str) -> Option<&GeneFeature> {
        self.genes.iter().find(|gene| gene.name == name)
    }
}
