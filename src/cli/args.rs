// args.rs - Command line arguments definition

use argh::FromArgs;

#[derive(FromArgs)]
/// gbk2circos - Generate Circos input files from two GenBank records and a BLAST report
pub struct Args {
    /// query GenBank file (e.g. plastome)
    #[argh(option)]
    pub query_gbk: Option<String>,

    /// subject GenBank file (e.g. mitochondrion)
    #[argh(option)]
    pub subject_gbk: Option<String>,

    /// BLAST report in 12-column tabular format (-outfmt 6 or 7)
    #[argh(option)]
    pub blast_report: Option<String>,

    /// display name for the query genome, used as its Circos chromosome id
    #[argh(option)]
    pub query_name: Option<String>,

    /// display name for the subject genome, used as its Circos chromosome id
    #[argh(option)]
    pub subject_name: Option<String>,

    /// minimum alignment length for a link (default: 50)
    #[argh(option, default = "50")]
    pub min_length: u64,

    /// minimum percent identity for a link (default: 0.0 = no filter)
    #[argh(option, default = "0.0")]
    pub min_identity: f64,

    /// output directory for karyotype.txt, labels.txt, links.txt (default: .)
    #[argh(option, default = "String::from(\".\")")]
    pub output_dir: String,

    /// alignment coordinates: genome, gene (default: genome)
    #[argh(option, default = "String::from(\"genome\")")]
    pub coordinates: String,

    /// comma-separated GenBank feature keys treated as genes (default: CDS)
    #[argh(option, default = "String::from(\"CDS\")")]
    pub feature_kinds: String,

    /// karyotype color of the query genome (default: green)
    #[argh(option, default = "String::from(\"green\")")]
    pub query_color: String,

    /// karyotype color of the subject genome (default: blue)
    #[argh(option, default = "String::from(\"blue\")")]
    pub subject_color: String,

    /// include only genes whose name matches regex pattern
    #[argh(option)]
    pub include_genes: Option<String>,

    /// exclude genes whose name matches regex pattern
    #[argh(option)]
    pub exclude_genes: Option<String>,

    /// write a JSON run summary to this file
    #[argh(option)]
    pub summary_json: Option<String>,

    /// load and validate inputs without writing output files
    #[argh(switch)]
    pub dry_run: bool,

    /// path to TOML configuration file
    #[argh(option)]
    pub config: Option<String>,

    /// generate sample configuration file and exit
    #[argh(switch)]
    pub generate_config: bool,
}
