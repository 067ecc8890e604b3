//! Color wheel chart generator
//!
//! Renders one SVG chart per intensity step from an extracted catalog.

use copic_wheel::{Catalog, CodeScheme, ColorWheel, Intensity};
use std::{env, path::PathBuf, process};

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut catalog_path = PathBuf::from("colors_auto.json");
    let mut output_dir = PathBuf::from("img");
    let mut pen: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--catalog" => {
                catalog_path = PathBuf::from(require_value(&args, &mut i, "--catalog"));
            }
            "--out" => {
                output_dir = PathBuf::from(require_value(&args, &mut i, "--out"));
            }
            "--pen" => {
                pen = Some(require_value(&args, &mut i, "--pen"));
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

    if let Err(e) = run(&catalog_path, &output_dir, pen.as_deref()) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn require_value(args: &[String], i: &mut usize, flag: &str) -> String {
    if *i + 1 >= args.len() {
        eprintln!("Error: {} requires a value", flag);
        process::exit(1);
    }
    *i += 1;
    args[*i].clone()
}

fn run(
    catalog_path: &std::path::Path,
    output_dir: &std::path::Path,
    pen: Option<&str>,
) -> copic_wheel::Result<()> {
    let scheme = CodeScheme::copic();
    let mut catalog = Catalog::from_json_file(catalog_path)?;
    if let Some(pen) = pen {
        catalog = scheme.filter_by_pen(&catalog, pen);
    }
    std::fs::create_dir_all(output_dir)?;

    let wheel = ColorWheel::new(&scheme);
    for intensity in Intensity::SCALE {
        let filtered = scheme.filter_by_intensity(&catalog, intensity)?;
        if filtered.is_empty() {
            continue;
        }
        let name = format!("copic_circles_intensity_{}.svg", intensity);
        let path = output_dir.join(&name);
        println!("Generating {}...", name);
        wheel.save_svg(&path, &filtered)?;
    }
    Ok(())
}

fn print_help(program: &str) {
    println!("Usage: {} [--catalog <file>] [--out <dir>] [--pen <tag>]", program);
    println!();
    println!("Render one circular color wheel chart per intensity step.");
    println!();
    println!("Options:");
    println!("  --catalog <file>  Extracted catalog JSON (default: colors_auto.json)");
    println!("  --out <dir>       Output directory for SVG files (default: img)");
    println!("  --pen <tag>       Only include codes available in this pen line");
    println!("  -h, --help        Show this help");
}
