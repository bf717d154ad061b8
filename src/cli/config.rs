// config.rs - Configuration file support

use crate::error::{CircosError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    // Inputs
    pub query_gbk: Option<String>,
    pub subject_gbk: Option<String>,
    pub blast_report: Option<String>,
    pub query_name: Option<String>,
    pub subject_name: Option<String>,

    // Output
    pub output_dir: Option<String>,
    pub summary_json: Option<String>,

    // Link filtering
    pub min_length: Option<u64>,
    pub min_identity: Option<f64>,
    pub coordinates: Option<String>,

    // Gene extraction
    pub feature_kinds: Option<Vec<String>>,
    pub include_genes: Option<String>,
    pub exclude_genes: Option<String>,

    // Appearance
    pub query_color: Option<String>,
    pub subject_color: Option<String>,

    // Flags
    pub dry_run: Option<bool>,
}

impl Config {
    /// Create a new empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            CircosError::config(format!("Failed to read config file '{}': {}", path.display(), e))
        })?;

        let config = Self::from_toml(&content).map_err(|e| {
            CircosError::config(format!("Failed to parse config file '{}': {}", path.display(), e))
        })?;

        println!("📄 Loaded configuration from: {}", path.display());
        Ok(config)
    }

    pub fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Generate a sample configuration file with comments
    pub fn generate_sample() -> String {
        r#"# gbk2circos.toml - Configuration file for gbk2circos
# Command line arguments will override these settings

# =============================================================================
# INPUTS
# =============================================================================

# Query GenBank file (e.g. plastome)
query_gbk = "/path/to/plastome.gbk"

# Subject GenBank file (e.g. mitochondrion)
subject_gbk = "/path/to/mitochondrion.gbk"

# BLAST report, 12-column tabular (-outfmt 6 or 7)
blast_report = "/path/to/blast.tsv"

# Display names, used as Circos chromosome ids
query_name = "plastome"
subject_name = "mitochondrion"

# =============================================================================
# OUTPUT
# =============================================================================

# Directory receiving karyotype.txt, labels.txt and links.txt
output_dir = "circos"

# JSON run summary
# summary_json = "circos/summary.json"

# =============================================================================
# LINK FILTERING
# =============================================================================

# Minimum alignment length for a link (inclusive)
min_length = 50

# Minimum percent identity for a link (inclusive, 0.0 = no filter)
min_identity = 0.0

# Alignment coordinates: genome, gene
# gene: query/subject ids are gene names and positions are offsets within them
coordinates = "genome"

# =============================================================================
# GENE EXTRACTION
# =============================================================================

# GenBank feature keys treated as genes
feature_kinds = ["CDS"]

# Include only genes matching regex pattern
# include_genes = "^(psb|atp).*"

# Exclude genes matching regex pattern
# exclude_genes = "^ycf"

# =============================================================================
# APPEARANCE
# =============================================================================

query_color = "green"
subject_color = "blue"

# =============================================================================
# FLAGS
# =============================================================================

# Validate inputs without writing output files
dry_run = false
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_config_parses() {
        let config = Config::from_toml(&Config::generate_sample()).unwrap();
        assert_eq!(config.query_name.as_deref(), Some("plastome"));
        assert_eq!(config.min_length, Some(50));
        assert_eq!(config.feature_kinds, Some(vec!["CDS".to_string()]));
        assert_eq!(config.coordinates.as_deref(), Some("genome"));
        assert!(config.summary_json.is_none());
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        assert!(Config::from_toml("min_lenght = 10\n").is_err());
    }

    #[test]
    fn test_round_trip_through_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("run.toml");
        let config = Config {
            query_gbk: Some("q.gbk".to_string()),
            min_identity: Some(80.0),
            ..Config::new()
        };
        fs::write(&path, toml::to_string_pretty(&config).unwrap()).unwrap();
        assert_eq!(Config::from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_bad_config_file_is_config_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("bad.toml");
        fs::write(&path, "min_length = \"fifty\"\n").unwrap();
        let err = Config::from_file(&path).unwrap_err();
        assert!(matches!(err, CircosError::Config(_)));
        assert!(err.to_string().contains("bad.toml"));

        let err = Config::from_file(tmp.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, CircosError::Config(_)));
    }
}
