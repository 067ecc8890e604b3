//! Batch color extraction tool
//!
//! Reads the plain catalog, samples every image in the samples directory,
//! writes annotated copies and the filled-in catalog.

use copic_wheel::{extract_directory, Catalog, ExtractionConfig};
use std::{env, path::PathBuf, process};

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut config_path: Option<PathBuf> = None;
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                if i + 1 >= args.len() {
                    eprintln!("Error: --config requires a file path");
                    process::exit(1);
                }
                config_path = Some(PathBuf::from(&args[i + 1]));
                i += 1;
            }
            "--help" | "-h" => {
                print_help(&args[0]);
                process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Use --help for usage information");
                process::exit(1);
            }
        }
        i += 1;
    }

    let config = match config_path {
        Some(path) => match ExtractionConfig::from_json_file(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading config {}: {}", path.display(), e);
                process::exit(1);
            }
        },
        None => ExtractionConfig::default_copic(),
    };

    if let Err(e) = run(&config) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(config: &ExtractionConfig) -> copic_wheel::Result<()> {
    let mut catalog = Catalog::from_json_file(&config.catalog_in)?;
    println!(
        "Extracting {} samples from {}...",
        catalog.len(),
        config.samples_dir.display()
    );

    let report = extract_directory(config, &mut catalog)?;
    for code in &report.processed {
        println!("Extracted {}", code);
    }

    catalog.to_json_file(&config.catalog_out)?;
    println!(
        "Wrote {} entries to {}",
        catalog.len(),
        config.catalog_out.display()
    );

    if !report.all_ok() {
        eprintln!("{} sample(s) failed:", report.failures.len());
        for failure in &report.failures {
            eprintln!("  {}: {}", failure.code, failure.error);
        }
        process::exit(1);
    }
    Ok(())
}

fn print_help(program: &str) {
    println!("Usage: {} [--config <file>]", program);
    println!();
    println!("Sample swatch colors from the images in the samples directory");
    println!("and write the filled-in catalog plus annotated image copies.");
    println!();
    println!("Options:");
    println!("  --config <file>  JSON extraction config (default: standard layout)");
    println!("  -h, --help       Show this help");
}
