//! hashish command line
//!
//! Fingerprints one input and prints the result to stdout.
//!
//! ## Configuration
//!
//! Precedence, highest first: flags, `--config` file, environment, defaults.
//!
//! Environment variables:
//! - `HASHISH_LENGTH`: fingerprint length (default: 12)
//! - `HASHISH_ALPHABET`: alphabet text, at least 64 distinct symbols
//! - `RUST_LOG`: log level filter (default: hashish=warn)
//! - `LOG_FORMAT`: "json" for structured logs, "pretty" for development (default: pretty)
//!
//! Logs go to stderr.
//!
//! ## Usage
//!
//! ```bash
//! echo '{"b":2,"a":1}' | hashish --kind object --profile
//! hashish --length 24 "feat: Implemented the good stuff"
//! ```

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use hashish::{
    Alphabet, ConfigOverrides, FingerprintConfig, FingerprintProfile, InputKind,
};

#[derive(Debug, Parser)]
#[command(name = "hashish", version, about = "Deterministic short fingerprints for structured values")]
struct Cli {
    /// Input text. Read from stdin when omitted.
    input: Option<String>,

    /// How to read the input. `number` must be a complete decimal literal
    /// (surrounding whitespace allowed); anything else exits with status 2.
    #[arg(short, long, value_enum, default_value_t = InputKind::String)]
    kind: InputKind,

    /// Fingerprint length in symbols.
    #[arg(short, long)]
    length: Option<usize>,

    /// Alphabet text (at least 64 distinct symbols).
    #[arg(short, long)]
    alphabet: Option<String>,

    /// JSON config file with optional `length` and `alphabet`.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print size, timing and collision tier after the fingerprint.
    #[arg(short, long)]
    profile: bool,

    /// Print the full profile as JSON.
    #[arg(long)]
    json: bool,
}

/// Initialize the tracing subscriber with JSON or pretty format
fn init_tracing() {
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "hashish=warn".into());

    if log_format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(std::io::stderr)
                    .flatten_event(true),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init();
    }
}

fn resolve_config(cli: &Cli) -> Result<FingerprintConfig, Box<dyn std::error::Error>> {
    let mut config = FingerprintConfig::from_env()?;

    if let Some(path) = &cli.config {
        config = config.apply(ConfigOverrides::from_json_file(path)?)?;
    }
    if let Some(length) = cli.length {
        config = config.with_length(length);
    }
    if let Some(symbols) = &cli.alphabet {
        config = config.with_alphabet(Alphabet::new(symbols)?);
    }

    debug!(length = config.length, alphabet = %config.alphabet, "resolved config");
    Ok(config)
}

fn read_input(cli: &Cli) -> std::io::Result<String> {
    match &cli.input {
        Some(text) => Ok(text.clone()),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            // Drop the newline a shell pipe appends.
            if buf.ends_with('\n') {
                buf.pop();
                if buf.ends_with('\r') {
                    buf.pop();
                }
            }
            Ok(buf)
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = resolve_config(cli)?;
    let raw = read_input(cli)?;
    let value = cli.kind.parse(&raw)?;

    let profile = FingerprintProfile::measure(&value, &config);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&profile)?);
        return Ok(());
    }

    println!("{}", profile.fingerprint);
    if cli.profile {
        println!("speed:     {}", profile.elapsed_display());
        println!("collision: {}", profile.collision);
        println!("kind:      {}", cli.kind);
        println!("size:      {}", profile.size);
        println!("length:    {}", profile.length);
    }
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!(error = ?e, "fingerprint failed");
            eprintln!("hashish: {}", e);
            ExitCode::from(2)
        }
    }
}
