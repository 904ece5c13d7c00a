/// Headless runner: evaluate scenario files and export the field for plotting
use sphere_field::export::{export_csv, export_json};
use sphere_field::scenario::{default_shell_scenario, Scenario};
use sphere_field::{evaluate, ConfigResult};
use std::env;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        print_usage();
        return ExitCode::FAILURE;
    }

    let result = match args[1].as_str() {
        "run" => run(&args[2..]),
        "stats" => stats(&args[2..]),
        "preset" => preset(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            error!(command = other, "unknown command");
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    #[cfg(feature = "profiling")]
    sphere_field::PROFILER.lock().log_and_clear();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn print_usage() {
    println!("Usage: sphere_field <command> [options]\n");
    println!("Commands:");
    println!("  run <scenario.toml> [--csv <out.csv>] [--json <out.json>]");
    println!("                       Evaluate a scenario and optionally export the field");
    println!("  stats <scenario.toml>");
    println!("                       Print min/max/mean of the field magnitude");
    println!("  preset <four-point|shell> <out.toml>");
    println!("                       Write a starting scenario file\n");
    println!("Set RUST_LOG=debug for per-evaluation details.");
}

/// Value following `flag` in `args`, if present.
fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

fn missing(what: &str) -> sphere_field::ConfigError {
    sphere_field::ConfigError::Invalid {
        message: format!("missing {}", what),
    }
}

fn run(args: &[String]) -> ConfigResult<()> {
    let path = args.first().ok_or_else(|| missing("scenario path"))?;
    let scenario = Scenario::load_from_file(path)?;
    let report = evaluate(&scenario)?;
    println!("{}", report.stats);

    if let Some(csv) = flag_value(args, "--csv") {
        export_csv(&report, csv)?;
    }
    if let Some(json) = flag_value(args, "--json") {
        export_json(&report, json)?;
    }
    Ok(())
}

fn stats(args: &[String]) -> ConfigResult<()> {
    let path = args.first().ok_or_else(|| missing("scenario path"))?;
    let report = evaluate(&Scenario::load_from_file(path)?)?;
    println!("{}", report.stats);
    for marker in &report.markers {
        println!(
            "{:<10} q={:+} at ({:.4}, {:.4}, {:.4})",
            marker.label, marker.magnitude, marker.position.x, marker.position.y, marker.position.z
        );
    }
    Ok(())
}

fn preset(args: &[String]) -> ConfigResult<()> {
    let kind = args.first().ok_or_else(|| missing("preset name"))?;
    let out = args.get(1).ok_or_else(|| missing("output path"))?;

    let scenario = match kind.as_str() {
        "four-point" => Scenario::default(),
        "shell" => default_shell_scenario(),
        other => {
            return Err(sphere_field::ConfigError::Invalid {
                message: format!("unknown preset '{}', expected four-point or shell", other),
            })
        }
    };
    scenario.save_to_file(out)?;
    println!("Wrote {} preset to {}", kind, out);
    Ok(())
}
