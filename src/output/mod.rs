// mod.rs - Circos input file writers

use crate::core::{build_links, Link, LinkFilter};
use crate::data::{AlignmentReport, Genome, RowSkipped, SequenceSpan};
use crate::error::{CircosError, Result};
use serde::Serialize;
use std::fs::{create_dir_all, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

pub const KARYOTYPE_FILE: &str = "karyotype.txt";
pub const LABELS_FILE: &str = "labels.txt";
pub const LINKS_FILE: &str = "links.txt";

/// Settings for one emission pass
#[derive(Debug, Clone)]
pub struct EmitOptions {
    pub output_dir: PathBuf,
    pub query_color: String,
    pub subject_color: String,
    pub link_filter: LinkFilter,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            query_color: "green".to_string(),
            subject_color: "blue".to_string(),
            link_filter: LinkFilter::default(),
        }
    }
}

/// Paths of the three written files
#[derive(Debug, Clone, Serialize)]
pub struct CircosFiles {
    pub karyotype: PathBuf,
    pub labels: PathBuf,
    pub links: PathBuf,
}

impl CircosFiles {
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            karyotype: dir.join(KARYOTYPE_FILE),
            labels: dir.join(LABELS_FILE),
            links: dir.join(LINKS_FILE),
        }
    }
}

/// Counts reported after a run
#[derive(Debug, Clone, Serialize)]
pub struct EmitSummary {
    pub query_genes: usize,
    pub subject_genes: usize,
    pub alignments: usize,
    pub skipped_rows: usize,
    pub filtered_out: usize,
    pub unresolved: usize,
    pub links: usize,
    /// Links drawn from minus-strand hits (subject start > end)
    pub reversed_links: usize,
    pub files: CircosFiles,
    /// Report rows dropped while loading, listed in the JSON summary
    pub skipped: Vec<RowSkipped>,
}

impl EmitSummary {
    pub fn summary_line(&self) -> String {
        format!(
            "Parsed {} query genes, {} subject genes, {} alignments; {} links after filtering",
            self.query_genes, self.subject_genes, self.alignments, self.links
        )
    }
}

/// Karyotype lines: `chr - ID LABEL 0 LENGTH COLOR`
pub fn render_karyotype<W: Write>(out: &mut W, spans: &[(&SequenceSpan, &str)]) -> io::Result<()> {
    for (span, color) in spans {
        writeln!(
            out,
            "chr - {} {} 0 {} {}",
            span.genome_label, span.genome_label, span.length, color
        )?;
    }
    Ok(())
}

/// Label lines: `ID START END NAME`, genomes in the given order, genes in source order
pub fn render_labels<W: Write>(out: &mut W, genomes: &[&Genome]) -> io::Result<()> {
    for genome in genomes {
        for gene in &genome.genes {
            writeln!(out, "{} {} {} {}", gene.genome_label, gene.start, gene.end, gene.name)?;
        }
    }
    Ok(())
}

/// Link lines: `QID QSTART QEND SID SSTART SEND`
pub fn render_links<W: Write>(out: &mut W, links: &[Link]) -> io::Result<()> {
    for link in links {
        writeln!(
            out,
            "{} {} {} {} {} {}",
            link.query_label,
            link.query_start,
            link.query_end,
            link.subject_label,
            link.subject_start,
            link.subject_end
        )?;
    }
    Ok(())
}

/// Create (or truncate) `path` and fill it with `render`
fn write_file<F>(path: &Path, render: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    let file = File::create(path).map_err(|e| CircosError::write(path, e))?;
    let mut writer = BufWriter::new(file);
    render(&mut writer).map_err(|e| CircosError::write(path, e))?;
    writer.flush().map_err(|e| CircosError::write(path, e))?;
    Ok(())
}

/// Filter alignments into links and write karyotype, labels and links files.
///
/// Existing files with the same names are overwritten.
pub fn write_circos_inputs(
    query: &Genome,
    subject: &Genome,
    report: &AlignmentReport,
    options: &EmitOptions,
) -> Result<EmitSummary> {
    create_dir_all(&options.output_dir).map_err(|e| CircosError::write(&options.output_dir, e))?;
    let files = CircosFiles::in_dir(&options.output_dir);

    let filter = &options.link_filter;
    let link_set = build_links(query, subject, &report.records, filter);
    println!(
        "🔗 {} links after filtering (min length {}, min identity {:.1}%, {}), {} reversed",
        link_set.links.len(),
        filter.min_alignment_length,
        filter.min_identity,
        filter.coordinates.description(),
        link_set.reversed
    );

    write_file(&files.karyotype, |out| {
        render_karyotype(
            out,
            &[
                (&query.span, options.query_color.as_str()),
                (&subject.span, options.subject_color.as_str()),
            ],
        )
    })?;
    println!("✅ Karyotype file written to: {}", files.karyotype.display());

    write_file(&files.labels, |out| render_labels(out, &[query, subject]))?;
    println!("✅ Labels file written to: {}", files.labels.display());

    write_file(&files.links, |out| render_links(out, &link_set.links))?;
    println!("✅ Links file written to: {}", files.links.display());

    Ok(EmitSummary {
        query_genes: query.genes.len(),
        subject_genes: subject.genes.len(),
        alignments: report.records.len(),
        skipped_rows: report.skipped.len(),
        filtered_out: link_set.filtered_out,
        unresolved: link_set.unresolved,
        links: link_set.links.len(),
        reversed_links: link_set.reversed,
        files,
        skipped: report.skipped.clone(),
    })
}

#[derive(Serialize)]
struct SummaryDocument<'a> {
    tool: &'static str,
    version: &'static str,
    generated: String,
    command: &'a str,
    #[serde(flatten)]
    summary: &'a EmitSummary,
}

/// Write the run summary as pretty JSON
pub fn write_summary_json(path: &Path, summary: &EmitSummary, command_line: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        create_dir_all(parent).map_err(|e| CircosError::write(parent, e))?;
    }
    let document = SummaryDocument {
        tool: "gbk2circos",
        version: env!("CARGO_PKG_VERSION"),
        generated: chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        command: command_line,
        summary,
    };
    write_file(path, |out| {
        serde_json::to_writer_pretty(&mut *out, &document).map_err(io::Error::from)?;
        writeln!(out)
    })?;
    println!("📄 Summary written to: {}", path.display());
    Ok(())
}
