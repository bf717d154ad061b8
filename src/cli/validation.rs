// validation.rs - Argument validation into a run configuration

use crate::cli::args::Args;
use crate::core::{CoordinateMode, LinkFilter};
use crate::data::GeneFilter;
use crate::error::{CircosError, Result};
use crate::output::EmitOptions;
use regex::Regex;
use std::path::PathBuf;
use std::str::FromStr;

/// One genome side of a run
#[derive(Debug, Clone)]
pub struct GenomeInput {
    pub path: PathBuf,
    pub label: String,
}

/// Everything a run needs, validated
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub query: GenomeInput,
    pub subject: GenomeInput,
    pub blast_report: PathBuf,
    pub gene_filter: GeneFilter,
    pub emit: EmitOptions,
    pub summary_json: Option<PathBuf>,
    pub dry_run: bool,
}

/// Validate all command line arguments
pub fn validate_args(args: &Args) -> Result<RunConfig> {
    let query_gbk = required(&args.query_gbk, "--query-gbk")?;
    let subject_gbk = required(&args.subject_gbk, "--subject-gbk")?;
    let blast_report = required(&args.blast_report, "--blast-report")?;
    let query_name = required(&args.query_name, "--query-name")?;
    let subject_name = required(&args.subject_name, "--subject-name")?;

    // Circos splits fields on whitespace
    for (flag, value) in [
        ("--query-name", query_name),
        ("--subject-name", subject_name),
        ("--query-color", &args.query_color),
        ("--subject-color", &args.subject_color),
    ] {
        if value.is_empty() || value.chars().any(char::is_whitespace) {
            return Err(CircosError::config(format!(
                "{} must be a non-empty word without spaces, got '{}'",
                flag, value
            )));
        }
    }
    if query_name == subject_name {
        return Err(CircosError::config(format!(
            "--query-name and --subject-name must differ (both are '{}')",
            query_name
        )));
    }

    if !(0.0..=100.0).contains(&args.min_identity) {
        return Err(CircosError::config("Minimum identity must be between 0.0 and 100.0"));
    }

    let coordinates = CoordinateMode::from_str(&args.coordinates).map_err(CircosError::Config)?;

    let feature_kinds: Vec<String> = args
        .feature_kinds
        .split(',')
        .map(str::trim)
        .filter(|kind| !kind.is_empty())
        .map(str::to_string)
        .collect();
    if feature_kinds.is_empty() {
        return Err(CircosError::config("--feature-kinds must name at least one feature key"));
    }

    // Compile regex patterns
    let include_names = if let Some(pattern) = &args.include_genes {
        Some(Regex::new(pattern).map_err(|e| CircosError::config(format!("Invalid include_genes regex: {}", e)))?)
    } else {
        None
    };

    let exclude_names = if let Some(pattern) = &args.exclude_genes {
        Some(Regex::new(pattern).map_err(|e| CircosError::config(format!("Invalid exclude_genes regex: {}", e)))?)
    } else {
        None
    };

    Ok(RunConfig {
        query: GenomeInput {
            path: PathBuf::from(query_gbk),
            label: query_name.clone(),
        },
        subject: GenomeInput {
            path: PathBuf::from(subject_gbk),
            label: subject_name.clone(),
        },
        blast_report: PathBuf::from(blast_report),
        gene_filter: GeneFilter {
            feature_kinds,
            include_names,
            exclude_names,
        },
        emit: EmitOptions {
            output_dir: PathBuf::from(&args.output_dir),
            query_color: args.query_color.clone(),
            subject_color: args.subject_color.clone(),
            link_filter: LinkFilter {
                min_alignment_length: args.min_length,
                min_identity: args.min_identity,
                coordinates,
            },
        },
        summary_json: args.summary_json.as_ref().map(PathBuf::from),
        dry_run: args.dry_run,
    })
}

fn required<'a>(value: &'a Option<String>, flag: &str) -> Result<&'a String> {
    value
        .as_ref()
        .ok_or_else(|| CircosError::config(format!("{} is required", flag)))
}
