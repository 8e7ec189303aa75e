//! CLI for running benchmark sweeps.
//!
//! Usage:
//!   micro-sweep                      # Sweep all families, CSV to stdout
//!   micro-sweep sorting              # Sweep one family
//!   micro-sweep --list               # List families and candidates
//!   micro-sweep --config sweep.toml  # Load the trial matrix from TOML
//!   micro-sweep --help               # Show help

use std::env;
use std::process::ExitCode;
use std::str::FromStr;

use micro_sweep_algo::config::SweepConfig;
use micro_sweep_algo::registry::{Candidate, CandidateRegistry};
use micro_sweep_algo::utils::{export_csv, logging, write_csv, FamilyFilter};
use tracing::{error, info, warn};

/// Parsed command line
#[derive(Debug, Default)]
struct CliArgs {
    show_list: bool,
    show_help: bool,
    config_path: Option<String>,
    sizes: Option<Vec<usize>>,
    max_n: Option<i64>,
    samples: Option<usize>,
    seed: Option<u64>,
    csv_path: Option<String>,
    family: FamilyFilter,
}

/// Parse the value following `flag`, rejecting a missing or malformed one
fn flag_value<T: FromStr>(flag: &str, value: Option<&str>) -> Result<T, String> {
    let value = value.ok_or_else(|| format!("{} requires a value", flag))?;
    value
        .trim()
        .parse()
        .map_err(|_| format!("Invalid value for {}: '{}'", flag, value))
}

fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    let mut cli = CliArgs::default();

    let mut i = 1;
    while i < args.len() {
        let value = args.get(i + 1).map(String::as_str);
        match args[i].as_str() {
            "--list" | "-l" => cli.show_list = true,
            "--help" | "-h" => cli.show_help = true,
            "--config" => {
                cli.config_path = Some(flag_value("--config", value)?);
                i += 1;
            }
            "--sizes" => {
                let list: String = flag_value("--sizes", value)?;
                let sizes = list
                    .split(',')
                    .map(|s| flag_value("--sizes", Some(s)))
                    .collect::<Result<Vec<usize>, _>>()?;
                cli.sizes = Some(sizes);
                i += 1;
            }
            "--max-n" => {
                cli.max_n = Some(flag_value("--max-n", value)?);
                i += 1;
            }
            "--samples" => {
                cli.samples = Some(flag_value("--samples", value)?);
                i += 1;
            }
            "--seed" => {
                cli.seed = Some(flag_value("--seed", value)?);
                i += 1;
            }
            "--csv" => {
                cli.csv_path = Some(flag_value("--csv", value)?);
                i += 1;
            }
            arg if !arg.starts_with('-') => {
                cli.family = FamilyFilter::from_name(arg).ok_or_else(|| {
                    format!("Unknown family '{}'. Available: sorting, fibonacci", arg)
                })?;
            }
            other => return Err(format!("Unknown option: {}", other)),
        }
        i += 1;
    }

    Ok(cli)
}

fn main() -> ExitCode {
    logging::init();
    let args: Vec<String> = env::args().collect();

    let cli = match parse_args(&args) {
        Ok(cli) => cli,
        Err(msg) => {
            eprintln!("{}", msg);
            eprintln!("Run with --help for usage");
            return ExitCode::FAILURE;
        }
    };
    let CliArgs {
        show_list,
        show_help,
        config_path,
        sizes,
        max_n,
        samples,
        seed,
        csv_path,
        family,
    } = cli;

    if show_help {
        print_help();
        return ExitCode::SUCCESS;
    }

    let mut config = match config_path {
        Some(path) => match SweepConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                error!(event = "config_error", path = %path, error = %e);
                return ExitCode::FAILURE;
            }
        },
        None => SweepConfig::default(),
    };

    // Command-line values win over the file
    if let Some(sizes) = sizes {
        config.sorting.sizes = sizes;
    }
    if let Some(max_n) = max_n {
        config.fibonacci.upper_bound = max_n;
    }
    if let Some(samples) = samples {
        config.fibonacci.samples = samples;
    }
    if seed.is_some() {
        config.seed = seed;
    }
    if let Some(path) = csv_path {
        config.output.csv_path = Some(path.into());
    }

    let mut registry = CandidateRegistry::new(config.fibonacci.modulus);

    if show_list {
        print_available(&registry);
        return ExitCode::SUCCESS;
    }

    let report = match micro_sweep_algo::run_sweep(&mut registry, &config, family) {
        Ok(report) => report,
        Err(e) => {
            error!(event = "sweep_error", error = %e);
            return ExitCode::FAILURE;
        }
    };

    let written = match &config.output.csv_path {
        Some(path) => export_csv(path, &report.results).map(|_| {
            info!(event = "csv_written", path = %path.display(), rows = report.results.len());
        }),
        None => write_csv(std::io::stdout().lock(), &report.results),
    };
    if let Err(e) = written {
        error!(event = "export_error", error = %e);
        return ExitCode::FAILURE;
    }

    if !report.is_complete() {
        warn!(
            event = "sweep_incomplete",
            failed = report.failures.len(),
            total = report.trial_count(),
        );
    }

    ExitCode::SUCCESS
}

fn print_help() {
    println!("Usage: micro-sweep [OPTIONS] [FAMILY]");
    println!();
    println!("Options:");
    println!("  --list, -l       List all families and candidates");
    println!("  --help, -h       Show this help message");
    println!("  --config FILE    Load sweep configuration from a TOML file");
    println!("  --sizes SIZES    Comma-separated sequence sizes (default: 100,1000,5000,10000)");
    println!("  --max-n N        Upper bound of Fibonacci sample points (default: 180)");
    println!("  --samples N      Number of Fibonacci sample points (default: 40)");
    println!("  --seed N         Random seed for reproducible datasets (default: time-based)");
    println!("  --csv FILE       Write results to FILE instead of stdout");
    println!();
    println!("Arguments:");
    println!("  FAMILY           sorting | fibonacci (omit for all)");
    println!();
    println!("Environment:");
    println!("  RUST_LOG         Log filter, e.g. RUST_LOG=debug to log every trial");
}

fn print_available(registry: &CandidateRegistry) {
    println!("Available families:");
    println!();
    for family in registry.families() {
        println!(
            "  {:<12} [{}] - {}",
            family.name(),
            family.category(),
            family.description()
        );
    }
    println!();
    println!("Candidates:");
    println!();
    for candidate in registry.candidates() {
        let description = match candidate {
            Candidate::Sort(a) => a.info().description,
            Candidate::Fibonacci(a) => a.info().description,
        };
        println!("  {:<20} - {}", candidate.name(), description);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("micro-sweep")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_parse_flags() {
        let cli = parse_args(&args(&[
            "fibonacci", "--sizes", "10, 50", "--max-n", "16000", "--samples", "40", "--seed",
            "42", "--csv", "out.csv",
        ]))
        .unwrap();
        assert_eq!(cli.family, FamilyFilter::Fibonacci);
        assert_eq!(cli.sizes, Some(vec![10, 50]));
        assert_eq!(cli.max_n, Some(16000));
        assert_eq!(cli.samples, Some(40));
        assert_eq!(cli.seed, Some(42));
        assert_eq!(cli.csv_path.as_deref(), Some("out.csv"));
        assert!(!cli.show_list && !cli.show_help);
    }

    #[test]
    fn test_bad_values_are_errors() {
        assert!(parse_args(&args(&["--seed", "abc"])).is_err());
        assert!(parse_args(&args(&["--seed"])).is_err());
        assert!(parse_args(&args(&["--sizes", "10,abc"])).is_err());
        assert!(parse_args(&args(&["--samples", "-1"])).is_err());
        assert!(parse_args(&args(&["--config"])).is_err());
        assert!(parse_args(&args(&["graphs"])).is_err());
        assert!(parse_args(&args(&["--verbose"])).is_err());
    }

    #[test]
    fn test_no_args_uses_defaults() {
        let cli = parse_args(&args(&[])).unwrap();
        assert_eq!(cli.family, FamilyFilter::All);
        assert!(cli.seed.is_none() && cli.config_path.is_none());
    }
}
