// src/main.rs

use std::env;
use std::error::Error;
use std::path::Path;

use log::info;

use wave_graphics::{crate_version, plot_chakrabarti, Axes, WaveData};

const DEFAULT_OUTPUT: &str = "chakrabarti.png";

fn print_usage(program: &str) {
    eprintln!("wave-graphics {}", crate_version());
    eprintln!(
        "Usage: {} chakrabarti <H> <lambda_w> <D> [output.png|output.svg]",
        program
    );
    eprintln!("  H, lambda_w, D: one number, or several separated by commas");
}

/// Parses "8" as a scalar and "8,8.5" as a 1-D array.
fn parse_wave_values(name: &str, arg: &str) -> Result<WaveData, Box<dyn Error>> {
    let values = arg
        .split(',')
        .map(|s| {
            s.trim()
                .parse::<f64>()
                .map_err(|e| format!("Invalid value '{}' for {}: {}", s.trim(), name, e))
        })
        .collect::<Result<Vec<f64>, String>>()?;

    match values.as_slice() {
        [value] => Ok(WaveData::Scalar(*value)),
        _ => Ok(WaveData::from(values)),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // --- Argument Parsing ---
    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("wave-graphics");
    if args.len() < 5 || args.len() > 6 || args[1] != "chakrabarti" {
        print_usage(program);
        std::process::exit(1);
    }

    let h = parse_wave_values("H", &args[2])?;
    let lambda_w = parse_wave_values("lambda_w", &args[3])?;
    let d = parse_wave_values("D", &args[4])?;
    let output = Path::new(args.get(5).map(String::as_str).unwrap_or(DEFAULT_OUTPUT));

    let mut ax = Axes::new();
    plot_chakrabarti(&h, &lambda_w, &d, &mut ax)?;

    let is_svg = output
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("svg"))
        .unwrap_or(false);
    if is_svg {
        ax.save_svg(output)?;
    } else {
        ax.save_png(output)?;
    }

    info!("Done: {}", output.display());
    Ok(())
}
