// main.rs - CLI entry point

use gbk2circos::cli::Config;
use gbk2circos::output::write_summary_json;
use gbk2circos::pipeline;
use gbk2circos::prelude::*;

fn main() {
    if let Err(e) = run_main() {
        eprintln!("❌ ERROR: {}", e);
        std::process::exit(1);
    }
}

fn run_main() -> Result<(), String> {
    let mut args: Args = argh::from_env();
    let command_line = std::env::args().collect::<Vec<String>>().join(" ");

    // Handle generate config first
    if args.generate_config {
        let sample_config = Config::generate_sample();
        println!("{}", sample_config);
        println!("\n💡 Save this content to a .toml file and use --config /path/to/config.toml");
        return Ok(());
    }

    // Load configuration file if specified
    if let Some(config_path) = args.config.clone() {
        args = args.with_config_file(&config_path).map_err(|e| e.to_string())?;
    }

    let run_config = validate_args(&args).map_err(|e| e.to_string())?;

    println!("🚀 {}", gbk2circos::get_info());
    println!(
        "📏 Minimum alignment length: {}",
        run_config.emit.link_filter.min_alignment_length
    );

    let summary = match pipeline::run(&run_config).map_err(|e| e.to_string())? {
        Some(summary) => summary,
        None => return Ok(()),
    };

    if let Some(path) = &run_config.summary_json {
        write_summary_json(path, &summary, &command_line).map_err(|e| e.to_string())?;
    }

    println!("\n✅ Circos input files generated successfully!");
    println!("{}", summary.summary_line());
    Ok(())
}
