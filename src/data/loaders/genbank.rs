// genbank.rs - GenBank loader for gene annotations

use crate::data::genome::{GeneFeature, Genome, SequenceSpan, Strand};
use crate::error::{CircosError, Result};
use gb_io::reader::SeqReader;
use gb_io::seq::{Feature, Location, Seq};
use regex::Regex;
use std::fs::File;
use std::path::Path;

/// Selects which annotations become genes
#[derive(Debug, Clone)]
pub struct GeneFilter {
    /// Feature keys treated as gene-like, compared case-insensitively
    pub feature_kinds: Vec<String>,
    pub include_names: Option<Regex>,
    pub exclude_names: Option<Regex>,
}

impl Default for GeneFilter {
    fn default() -> Self {
        Self {
            feature_kinds: vec!["CDS".to_string()],
            include_names: None,
            exclude_names: None,
        }
    }
}

impl GeneFilter {
    fn accepts_kind(&self, feature: &Feature) -> bool {
        let kind = feature.kind.to_string();
        self.feature_kinds
            .iter()
            .any(|wanted| wanted.eq_ignore_ascii_case(&kind))
    }

    fn accepts_name(&self, name: &str) -> bool {
        if let Some(include) = &self.include_names {
            if !include.is_match(name) {
                return false;
            }
        }
        if let Some(exclude) = &self.exclude_names {
            if exclude.is_match(name) {
                return false;
            }
        }
        true
    }
}

/// Load the first record of a GenBank file as a genome with its genes.
///
/// Coordinates are converted from the parser's 0-based half-open bounds to
/// 1-based inclusive. Genes whose bounds do not fit inside the record are
/// dropped with a warning.
pub fn load_genome(path: &Path, genome_label: &str, filter: &GeneFilter) -> Result<Genome> {
    let file = File::open(path).map_err(|e| CircosError::file(path, e))?;
    let mut reader = SeqReader::new(file);

    let record = match reader.next() {
        Some(Ok(record)) => record,
        Some(Err(e)) => return Err(CircosError::parse(path, e.to_string())),
        None => return Err(CircosError::parse(path, "no GenBank records found")),
    };

    let mut ignored_records = 0;
    for extra in reader {
        extra.map_err(|e| CircosError::parse(path, e.to_string()))?;
        ignored_records += 1;
    }
    if ignored_records > 0 {
        eprintln!(
            "⚠️  {}: using the first record only, {} further record(s) ignored",
            path.display(),
            ignored_records
        );
    }

    let length = record_length(&record);
    if length == 0 {
        return Err(CircosError::parse(path, "record contains no sequence"));
    }

    let span = SequenceSpan {
        genome_label: genome_label.to_string(),
        sequence_id: record.name.clone().unwrap_or_else(|| genome_label.to_string()),
        length,
    };

    let mut genes = Vec::new();
    for feature in record.features.iter().filter(|f| filter.accepts_kind(f)) {
        let Some(gene) = extract_gene(feature, &span) else {
            eprintln!(
                "⚠️  {}: skipping {} with unresolvable location {:?}",
                path.display(),
                feature.kind,
                feature.location
            );
            continue;
        };
        if !gene.fits_within(&span) {
            eprintln!(
                "⚠️  {}: skipping {} {} at {}..{} (outside 1..{})",
                path.display(),
                feature.kind,
                gene.name,
                gene.start,
                gene.end,
                span.length
            );
            continue;
        }
        if filter.accepts_name(&gene.name) {
            genes.push(gene);
        }
    }

    println!(
        "🧬 Parsed {} genes from {} ({}, {} bp)",
        genes.len(),
        path.display(),
        span.sequence_id,
        span.length
    );
    Ok(Genome { span, genes })
}

/// Sequence length, falling back to the LOCUS length when no ORIGIN block is present
fn record_length(record: &Seq) -> u64 {
    if !record.seq.is_empty() {
        record.seq.len() as u64
    } else {
        record.len.unwrap_or(0) as u64
    }
}

/// Build a gene from one annotation. Returns `None` when the location has no bounds.
fn extract_gene(feature: &Feature, span: &SequenceSpan) -> Option<GeneFeature> {
    let (from, to) = feature.location.find_bounds().ok()?;
    // Negative bounds cannot map to 1-based coordinates; report them as position 0
    let start = u64::try_from(from).map(|f| f + 1).unwrap_or(0);
    let end = u64::try_from(to).unwrap_or(0);

    let name = gene_name(feature).unwrap_or_else(|| format!("{}..{}", start, end));
    let strand = if location_is_reverse(&feature.location) {
        Strand::Reverse
    } else {
        Strand::Forward
    };

    Some(GeneFeature {
        genome_label: span.genome_label.clone(),
        sequence_id: span.sequence_id.clone(),
        name,
        start,
        end,
        strand,
    })
}

/// Display name: `gene` qualifier, else `locus_tag`. Whitespace becomes `_`
/// since Circos splits fields on whitespace.
pub fn gene_name(feature: &Feature) -> Option<String> {
    for key in ["gene", "locus_tag"] {
        if let Some(value) = feature.qualifier_values(key.into()).next() {
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                return Some(sanitize_label(trimmed));
            }
        }
    }
    None
}

pub fn sanitize_label(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join("_")
}

/// Majority vote over the strands of all location parts
fn location_is_reverse(location: &Location) -> bool {
    let mut strands = Vec::new();
    collect_strands(location, false, &mut strands);
    let reverse = strands.iter().filter(|is_reverse| **is_reverse).count();
    !strands.is_empty() && reverse > strands.len() / 2
}

fn collect_strands(location: &Location, reverse: bool, strands: &mut Vec<bool>) {
    match location {
        Location::Range(_, _) | Location::Between(_, _) => strands.push(reverse),
        Location::Complement(inner) => collect_strands(inner, !reverse, strands),
        Location::Join(parts)
        | Location::Order(parts)
        | Location::Bond(parts)
        | Location::OneOf(parts) => {
            for part in parts {
                collect_strands(part, reverse, strands);
            }
        }
        Location::External(_, inner) => {
            if let Some(inner) = inner {
                collect_strands(inner, reverse, strands);
            }
        }
        Location::Gap(_) => {}
    }
}
