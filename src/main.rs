//! Project Balance entry point — CLI wiring for the single-day pipeline.

use std::path::{Path, PathBuf};
use std::process;

use balance_sim::config::RunConfig;
use balance_sim::pipeline;
use chrono::NaiveDate;

/// Parsed CLI arguments.
struct CliArgs {
    config_path: Option<String>,
    data_path: Option<PathBuf>,
    day: Option<NaiveDate>,
    out_path: Option<PathBuf>,
    seed_override: Option<u64>,
}

fn print_help() {
    eprintln!("balance-sim — single-day household energy simulation dataset builder");
    eprintln!();
    eprintln!("Usage: balance-sim [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config <path>   Load run settings from a TOML file");
    eprintln!("  --data <path>     Demand data file (default: household_power_consumption.txt)");
    eprintln!("  --day <date>      Calendar day to simulate, YYYY-MM-DD (default: 2008-06-01)");
    eprintln!("  --out <path>      Output image path (default: project_balance_simulation.png)");
    eprintln!("  --seed <u64>      Override the master random seed");
    eprintln!("  --help            Show this help message");
    eprintln!();
    eprintln!("CLI flags override config-file values; config-file values override defaults.");
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        config_path: None,
        data_path: None,
        day: None,
        out_path: None,
        seed_override: None,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                process::exit(0);
            }
            "--config" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --config requires a path argument");
                    process::exit(1);
                }
                cli.config_path = Some(args[i].clone());
            }
            "--data" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --data requires a path argument");
                    process::exit(1);
                }
                cli.data_path = Some(PathBuf::from(&args[i]));
            }
            "--day" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --day requires a YYYY-MM-DD argument");
                    process::exit(1);
                }
                match NaiveDate::parse_from_str(&args[i], "%Y-%m-%d") {
                    Ok(d) => cli.day = Some(d),
                    Err(_) => {
                        eprintln!("error: --day value \"{}\" is not a valid date", args[i]);
                        process::exit(1);
                    }
                }
            }
            "--out" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --out requires a path argument");
                    process::exit(1);
                }
                cli.out_path = Some(PathBuf::from(&args[i]));
            }
            "--seed" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --seed requires a u64 argument");
                    process::exit(1);
                }
                if let Ok(s) = args[i].parse::<u64>() {
                    cli.seed_override = Some(s);
                } else {
                    eprintln!("error: --seed value \"{}\" is not a valid u64", args[i]);
                    process::exit(1);
                }
            }
            other => {
                eprintln!("error: unknown argument \"{other}\"");
                print_help();
                process::exit(1);
            }
        }
        i += 1;
    }

    cli
}

fn main() {
    let cli = parse_args();

    // Load config: --config file first, then built-in defaults
    let mut config = if let Some(ref path) = cli.config_path {
        match RunConfig::from_toml_file(Path::new(path)) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else {
        RunConfig::default()
    };

    // Apply CLI overrides
    if let Some(path) = cli.data_path {
        config.input.data_path = path;
    }
    if let Some(day) = cli.day {
        config.input.day = day;
    }
    if let Some(path) = cli.out_path {
        config.output.image_path = path;
    }
    if let Some(seed) = cli.seed_override {
        config.simulation.seed = seed;
    }

    // Validate
    let errors = config.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }

    println!(
        "--- Initializing Project Balance simulation pipeline for {} ---",
        config.input.day
    );

    let frame = match pipeline::run(&config) {
        Ok(frame) => frame,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    };

    println!();
    println!("--- Simulation environment ready ---");
    println!(
        "{} rows merged ({} grid events), chart written to \"{}\"",
        frame.len(),
        frame.event_count(),
        config.output.image_path.display()
    );
}
