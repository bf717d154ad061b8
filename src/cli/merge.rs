// merge.rs - Merge configuration file with CLI arguments

use crate::cli::{Args, Config};
use crate::error::Result;

impl Args {
    /// Merge with configuration from file
    /// CLI arguments take precedence over config file values
    pub fn merge_with_config(mut self, config: Config) -> Self {
        // Inputs
        if self.query_gbk.is_none() {
            self.query_gbk = config.query_gbk;
        }
        if self.subject_gbk.is_none() {
            self.subject_gbk = config.subject_gbk;
        }
        if self.blast_report.is_none() {
            self.blast_report = config.blast_report;
        }
        if self.query_name.is_none() {
            self.query_name = config.query_name;
        }
        if self.subject_name.is_none() {
            self.subject_name = config.subject_name;
        }

        // Output (only override defaults, not explicit CLI values)
        if self.output_dir == "." {
            if let Some(output_dir) = config.output_dir {
                self.output_dir = output_dir;
            }
        }
        if self.summary_json.is_none() {
            self.summary_json = config.summary_json;
        }

        // Link filtering
        if self.min_length == 50 {
            if let Some(min_length) = config.min_length {
                self.min_length = min_length;
            }
        }
        if self.min_identity == 0.0 {
            if let Some(min_identity) = config.min_identity {
                self.min_identity = min_identity;
            }
        }
        if self.coordinates == "genome" {
            if let Some(coordinates) = config.coordinates {
                self.coordinates = coordinates;
            }
        }

        // Gene extraction
        if self.feature_kinds == "CDS" {
            if let Some(kinds) = config.feature_kinds {
                self.feature_kinds = kinds.join(",");
            }
        }
        if self.include_genes.is_none() {
            self.include_genes = config.include_genes;
        }
        if self.exclude_genes.is_none() {
            self.exclude_genes = config.exclude_genes;
        }

        // Appearance
        if self.query_color == "green" {
            if let Some(color) = config.query_color {
                self.query_color = color;
            }
        }
        if self.subject_color == "blue" {
            if let Some(color) = config.subject_color {
                self.subject_color = color;
            }
        }

        // Flags (CLI flags take precedence, config only sets if not explicitly set)
        if !self.dry_run && config.dry_run.unwrap_or(false) {
            self.dry_run = true;
        }

        self
    }

    /// Load configuration and merge with CLI args
    pub fn with_config_file(self, config_path: &str) -> Result<Self> {
        let config = Config::from_file(config_path)?;
        Ok(self.merge_with_config(config))
    }
}
