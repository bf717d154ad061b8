// links.rs - Alignment filtering and link coordinate resolution

use crate::data::{AlignmentRecord, Genome};
use std::str::FromStr;

/// Default minimum alignment length for a link
pub const DEFAULT_MIN_ALIGNMENT_LENGTH: u64 = 50;

/// How alignment coordinates relate to the genomes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoordinateMode {
    /// Coordinates are positions on the whole genome records
    #[default]
    Genome,
    /// Query/subject ids are gene names; coordinates are offsets within those genes
    Gene,
}

impl FromStr for CoordinateMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "genome" => Ok(CoordinateMode::Genome),
            "gene" => Ok(CoordinateMode::Gene),
            _ => Err(format!("Invalid coordinate mode: {}. Use: genome, gene", s)),
        }
    }
}

impl CoordinateMode {
    pub fn description(&self) -> &str {
        match self {
            CoordinateMode::Genome => "genome coordinates",
            CoordinateMode::Gene => "gene-relative coordinates",
        }
    }
}

/// Which alignments become links
#[derive(Debug, Clone, PartialEq)]
pub struct LinkFilter {
    /// Inclusive lower bound on alignment length
    pub min_alignment_length: u64,
    /// Inclusive lower bound on percent identity; 0.0 keeps everything
    pub min_identity: f64,
    pub coordinates: CoordinateMode,
}

impl Default for LinkFilter {
    fn default() -> Self {
        Self {
            min_alignment_length: DEFAULT_MIN_ALIGNMENT_LENGTH,
            min_identity: 0.0,
            coordinates: CoordinateMode::Genome,
        }
    }
}

impl LinkFilter {
    pub fn accepts(&self, record: &AlignmentRecord) -> bool {
        record.alignment_length >= self.min_alignment_length
            && record.identity_percent >= self.min_identity
    }
}

/// A ribbon between a query span and a subject span
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub query_label: String,
    pub query_start: u64,
    pub query_end: u64,
    pub subject_label: String,
    pub subject_start: u64,
    pub subject_end: u64,
}

/// Links in report order plus counts of what was dropped
#[derive(Debug, Clone, Default)]
pub struct LinkSet {
    pub links: Vec<Link>,
    pub filtered_out: usize,
    pub unresolved: usize,
    /// Kept links whose subject span runs backwards (minus-strand hits)
    pub reversed: usize,
}

/// Apply the filter and map each surviving record onto genome coordinates
pub fn build_links(
    query: &Genome,
    subject: &Genome,
    records: &[AlignmentRecord],
    filter: &LinkFilter,
) -> LinkSet {
    let mut set = LinkSet::default();

    for record in records {
        if !filter.accepts(record) {
            set.filtered_out += 1;
            continue;
        }

        let link = match filter.coordinates {
            CoordinateMode::Genome => Some(Link {
                query_label: query.label().to_string(),
                query_start: record.query_start,
                query_end: record.query_end,
                subject_label: subject.label().to_string(),
                subject_start: record.subject_start,
                subject_end: record.subject_end,
            }),
            CoordinateMode::Gene => resolve_gene_relative(query, subject, record),
        };

        match link {
            Some(link) => {
                if record.is_subject_reversed() {
                    set.reversed += 1;
                }
                set.links.push(link);
            }
            None => set.unresolved += 1,
        }
    }
    set
}

/// Offset gene-relative alignment positions by the start of the named genes
fn resolve_gene_relative(
    query: &Genome,
    subject: &Genome,
    record: &AlignmentRecord,
) -> Option<Link> {
    let Some(query_gene) = query.find_gene(&record.query_id) else {
        eprintln!(
            "⚠️  Query gene {} not found in {}, link dropped",
            record.query_id,
            query.label()
        );
        return None;
    };
    let Some(subject_gene) = subject.find_gene(&record.subject_id) else {
        eprintln!(
            "⚠️  Subject gene {} not found in {}, link dropped",
            record.subject_id,
            subject.label()
        );
        return None;
    };

    let shifted = (
        shift_into(query, query_gene.start, record.query_start),
        shift_into(query, query_gene.start, record.query_end),
        shift_into(subject, subject_gene.start, record.subject_start),
        shift_into(subject, subject_gene.start, record.subject_end),
    );
    let (Some(query_start), Some(query_end), Some(subject_start), Some(subject_end)) = shifted else {
        eprintln!(
            "⚠️  Alignment {} {}..{} / {} {}..{} falls outside its genomes, link dropped",
            record.query_id,
            record.query_start,
            record.query_end,
            record.subject_id,
            record.subject_start,
            record.subject_end
        );
        return None;
    };

    Some(Link {
        query_label: query.label().to_string(),
        query_start,
        query_end,
        subject_label: subject.label().to_string(),
        subject_start,
        subject_end,
    })
}

/// Map a 1-based position inside a gene starting at `gene_start` onto the
/// genome; `None` when the result leaves `1..=length`
fn shift_into(genome: &Genome, gene_start: u64, position: u64) -> Option<u64> {
    let shifted = (gene_start - 1).checked_add(position)?;
    (1..=genome.span.length).contains(&shifted).then_some(shifted)
}
