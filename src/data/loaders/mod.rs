// mod.rs - Input file loaders

pub mod blast;
pub mod genbank;

pub use blast::load_alignments;
pub use genbank::{load_genome, GeneFilter};
