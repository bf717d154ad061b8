// pipeline.rs - Load, filter and emit in one pass

use crate::cli::RunConfig;
use crate::core::build_links;
use crate::data::{load_alignments, load_genome};
use crate::error::Result;
use crate::output::{write_circos_inputs, EmitSummary};

/// Run the whole conversion. Returns `None` for a dry run, which loads and
/// filters but writes nothing.
pub fn run(config: &RunConfig) -> Result<Option<EmitSummary>> {
    let query = load_genome(&config.query.path, &config.query.label, &config.gene_filter)?;
    let subject = load_genome(&config.subject.path, &config.subject.label, &config.gene_filter)?;
    let report = load_alignments(&config.blast_report)?;

    if config.dry_run {
        let link_set = build_links(&query, &subject, &report.records, &config.emit.link_filter);
        println!("✅ Dry run completed successfully");
        println!(
            "📊 {} query genes, {} subject genes, {} alignments, {} links ({} reversed)",
            query.genes.len(),
            subject.genes.len(),
            report.records.len(),
            link_set.links.len(),
            link_set.reversed
        );
        return Ok(None);
    }

    let summary = write_circos_inputs(&query, &subject, &report, &config.emit)?;
    Ok(Some(summary))
}
