/// Pipeline harness.
///
/// Runs the numeric and record pipelines, checks that both reach the same
/// sum and that reruns hash identically.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use higher_order::config::PipelineConfig;
use higher_order::engine::PipelineEngine;
use higher_order::hashing::canonical_hash;
use higher_order::Result;

#[derive(Debug, Parser)]
#[command(name = "higher_order", version, about = "Run the square → filter → sum pipelines")]
struct Cli {
    /// JSON config file (threshold, initial, values)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Keep squares strictly greater than this
    #[arg(long)]
    threshold: Option<i64>,

    /// Starting fold accumulator
    #[arg(long)]
    initial: Option<i64>,

    /// Debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn build_config(cli: &Cli) -> Result<PipelineConfig> {
    PipelineConfig::resolve(cli.config.as_deref(), cli.threshold, cli.initial)
}

fn run(cli: &Cli) -> Result<bool> {
    let engine = PipelineEngine::new(build_config(cli)?)?;
    let config = engine.config();
    println!(
        "config: threshold={}, initial={}, values={:?}",
        config.threshold, config.initial, config.values
    );

    let outcome = engine.run_both()?;
    for (name, report) in [("numbers", &outcome.numbers), ("records", &outcome.records)] {
        println!(
            "  {}: squares={:?}, retained={:?}, sum={}, hash={}",
            name,
            report.squares,
            report.retained,
            report.sum,
            canonical_hash(report)?
        );
    }

    let mut all_passed = true;
    if outcome.agree() {
        println!("[PASS] agreement: both pipelines sum to {}", outcome.numbers.sum);
    } else {
        all_passed = false;
        println!(
            "[FAIL] agreement: numbers={} records={}",
            outcome.numbers.sum, outcome.records.sum
        );
    }

    match engine.verify_determinism() {
        Ok(()) => println!("[PASS] determinism: reruns hash identically"),
        Err(e) => {
            all_passed = false;
            println!("[FAIL] {}", e);
        }
    }
    Ok(all_passed)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    println!("===========================================");
    match run(&cli) {
        Ok(true) => {
            println!("[OK] All pipeline checks PASSED.");
            ExitCode::SUCCESS
        }
        Ok(false) => {
            println!("[FAIL] Some checks failed.");
            ExitCode::FAILURE
        }
        Err(e) => {
            error!(error = %e, "pipeline run failed");
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use higher_order::PipelineError;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("higher_order").chain(args.iter().copied())).unwrap()
    }

    fn config_file(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_run_passes() {
        assert!(run(&parse(&[])).unwrap());
    }

    #[test]
    fn test_flags_override_config_file() {
        let file = config_file(r#"{"threshold": 1, "initial": 2}"#);
        let path = file.path().to_str().unwrap();
        let cli = parse(&["--config", path, "--threshold", "10", "--initial", "100"]);
        let config = build_config(&cli).unwrap();
        assert_eq!((config.threshold, config.initial), (10, 100));

        let outcome = PipelineEngine::new(config).unwrap().run_both().unwrap();
        assert_eq!(outcome.numbers.retained, vec![16, 25]);
        assert_eq!(outcome.numbers.sum, 141);
        assert!(run(&cli).unwrap());
    }

    #[test]
    fn test_config_file_used_without_flags() {
        let file = config_file(r#"{"threshold": 1, "initial": 2, "values": [3]}"#);
        let cli = parse(&["-c", file.path().to_str().unwrap()]);
        let engine = PipelineEngine::new(build_config(&cli).unwrap()).unwrap();
        assert_eq!(engine.config().values, vec![3]);
        assert_eq!(engine.run_numbers().unwrap().sum, 11);
    }

    #[test]
    fn test_empty_values_fails_run() {
        let file = config_file(r#"{"values": []}"#);
        let cli = parse(&["--config", file.path().to_str().unwrap()]);
        assert!(matches!(run(&cli), Err(PipelineError::InvalidConfig(_))));
    }

    #[test]
    fn test_malformed_config_fails_run() {
        let file = config_file("{not json");
        let cli = parse(&["--config", file.path().to_str().unwrap()]);
        assert!(matches!(run(&cli), Err(PipelineError::Json(_))));
    }

    #[test]
    fn test_missing_config_fails_run() {
        let cli = parse(&["--config", "/nonexistent/higher_order.json"]);
        assert!(matches!(run(&cli), Err(PipelineError::Io(_))));
    }
}
