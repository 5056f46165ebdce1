//! student-record binary
//!
//! Reads `<age> <first> <last> <standard>` from stdin and prints the
//! record back as a short report.

use std::io::{self, IsTerminal};

use clap::Parser;
use student_record::{read_record, write_report, Config};
use tracing_subscriber::{fmt, EnvFilter};

/// Student record demo
#[derive(Parser, Debug)]
#[command(name = "student-record")]
#[command(about = "Read a student record from stdin and print it back")]
#[command(version)]
struct Args {
    /// Reject malformed or missing input instead of using defaults
    #[arg(long)]
    strict: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,

    /// Log filter directive used when RUST_LOG is unset (overrides --verbose)
    #[arg(long, value_name = "DIRECTIVE")]
    log_filter: Option<String>,
}

fn main() {
    let args = Args::parse();

    let config = Config::builder()
        .strict(args.strict)
        .log_filter(args.log_filter.unwrap_or_else(|| {
            let level = if args.verbose { "debug" } else { "warn" };
            level.to_string()
        }))
        .build();

    if let Err(e) = config.validate() {
        eprintln!("error: {}", e);
        std::process::exit(2);
    }

    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr)
        .init();

    tracing::debug!("student-record v{}", student_record::VERSION);
    tracing::debug!("Input mode: {:?}", config.input_mode);

    let stdin = io::stdin();
    let record = match read_record(&mut stdin.lock(), &config) {
        Ok((record, _outcome)) => record,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = write_report(&mut out, &record) {
        tracing::error!("Failed to write report: {}", e);
        std::process::exit(1);
    }
}
