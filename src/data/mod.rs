// mod.rs - Data structures module

pub mod alignment;
pub mod genome;
pub mod loaders;

// Re-export main types for convenience
pub use alignment::{AlignmentRecord, AlignmentReport, RowSkipped, BLAST_TABULAR_COLUMNS};
pub use genome::{GeneFeature, Genome, SequenceSpan, Strand};
pub use loaders::{load_alignments, load_genome, GeneFilter};
