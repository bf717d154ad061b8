// lib.rs - gbk2circos library root

//! # gbk2circos - Circos input generator for pairwise genome comparisons
//!
//! Reads two GenBank records and a 12-column tabular BLAST report, and writes
//! the three plain-text data files Circos needs to draw them: a karyotype
//! (one chromosome per genome), gene labels, and alignment links.
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use gbk2circos::prelude::*;
//! use std::path::Path;
//!
//! let filter = GeneFilter::default();
//! let query = load_genome(Path::new("plastome.gbk"), "plastome", &filter)?;
//! let subject = load_genome(Path::new("mito.gbk"), "mitochondrion", &filter)?;
//! let report = load_alignments(Path::new("blast.tsv"))?;
//!
//! let summary = write_circos_inputs(&query, &subject, &report, &EmitOptions::default())?;
//! println!("{}", summary.summary_line());
//! # Ok::<(), gbk2circos::CircosError>(())
//! ```

pub mod cli;
pub mod core;
pub mod data;
pub mod error;
pub mod output;
pub mod pipeline;

// Convenience prelude for common imports
pub mod prelude {
    pub use crate::cli::{validate_args, Args, RunConfig};
    pub use crate::core::{build_links, CoordinateMode, Link, LinkFilter};
    pub use crate::data::{load_alignments, load_genome, GeneFilter};
    pub use crate::data::{AlignmentRecord, AlignmentReport, GeneFeature, Genome, SequenceSpan};
    pub use crate::error::CircosError;
    pub use crate::output::{write_circos_inputs, EmitOptions, EmitSummary};
}

// Re-export main types at the root level for convenience
pub use cli::{Args, RunConfig};
pub use error::CircosError;
pub use output::EmitSummary;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library information
pub fn get_info() -> String {
    format!(
        "gbk2circos v{} - Circos input generator for GenBank + BLAST comparisons",
        VERSION
    )
}
