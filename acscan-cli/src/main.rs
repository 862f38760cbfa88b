//! acscan CLI
//!
//! Command-line interface for the acscan multi-pattern matcher.

mod config;

use acscan_core::{AcConfig, Alphabet, Automaton, TextPolicy};
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::io::Read;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "acscan")]
#[command(about = "acscan - report which dictionary patterns occur in a text", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a text and report matching pattern identifiers
    Match {
        #[command(flatten)]
        build: BuildArgs,

        /// Text to scan
        #[arg(short, long, conflicts_with = "input")]
        text: Option<String>,

        /// File to scan (defaults to stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Print only the number of reported identifiers
        #[arg(long, conflicts_with = "json")]
        count: bool,

        /// Print the identifier list as JSON
        #[arg(long)]
        json: bool,

        /// Treat out-of-alphabet text symbols as breaks instead of errors
        #[arg(long)]
        skip_invalid: bool,
    },

    /// Print automaton statistics as JSON
    Stats {
        #[command(flatten)]
        build: BuildArgs,
    },

    /// Print every state with its failure link and outputs
    Dump {
        #[command(flatten)]
        build: BuildArgs,
    },
}

#[derive(Args)]
struct BuildArgs {
    /// Pattern file, one pattern per line
    #[arg(short, long)]
    patterns: PathBuf,

    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Alphabet override
    #[arg(short, long, value_enum)]
    alphabet: Option<AlphabetArg>,

    /// Keep blank lines as empty patterns
    #[arg(long)]
    keep_empty: bool,

    /// Log level, overridden by the ACSCAN_LOG environment filter
    #[arg(short, long, default_value = "warn")]
    log_level: String,
}

#[derive(Clone, Copy, ValueEnum)]
enum AlphabetArg {
    Byte,
    Ascii,
    Unicode,
}

impl From<AlphabetArg> for Alphabet {
    fn from(arg: AlphabetArg) -> Self {
        match arg {
            AlphabetArg::Byte => Alphabet::Byte,
            AlphabetArg::Ascii => Alphabet::Ascii,
            AlphabetArg::Unicode => Alphabet::Unicode,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Match {
            build,
            text,
            input,
            count,
            json,
            skip_invalid,
        } => {
            setup_logging(&build.log_level)?;
            let (automaton, patterns) = load_automaton(&build, skip_invalid)?;
            let text = read_text(text, input)?;
            run_match(&automaton, &patterns, &text, count, json)?;
        }
        Commands::Stats { build } => {
            setup_logging(&build.log_level)?;
            let (automaton, _) = load_automaton(&build, false)?;
            println!("{}", serde_json::to_string_pretty(&automaton.stats())?);
        }
        Commands::Dump { build } => {
            setup_logging(&build.log_level)?;
            let (automaton, _) = load_automaton(&build, false)?;
            print!("{}", automaton.dump());
        }
    }

    Ok(())
}

fn setup_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_env("ACSCAN_LOG").unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to set tracing subscriber: {}", e))?;

    Ok(())
}

/// Resolve the effective configuration: file first, then flags
fn resolve_config(args: &BuildArgs, skip_invalid: bool) -> Result<AcConfig> {
    let mut config = match &args.config {
        Some(path) => config::load_config(path)?,
        None => AcConfig::default(),
    };

    if let Some(alphabet) = args.alphabet {
        config.alphabet = alphabet.into();
    }
    if skip_invalid {
        config.text_policy = TextPolicy::Skip;
    }

    Ok(config)
}

fn load_automaton(args: &BuildArgs, skip_invalid: bool) -> Result<(Automaton, Vec<Vec<u8>>)> {
    let config = resolve_config(args, skip_invalid)?;
    let patterns = config::load_patterns(&args.patterns, args.keep_empty)?;

    info!(
        patterns = patterns.len(),
        alphabet = %config.alphabet,
        "Building automaton"
    );

    let automaton = Automaton::build_with_config(&patterns, config)
        .with_context(|| format!("Failed to build automaton from {}", args.patterns.display()))?;

    debug!(?automaton, "Automaton ready");

    Ok((automaton, patterns))
}

/// Text to scan as raw bytes; whether they must be UTF-8 is up to the alphabet
fn read_text(text: Option<String>, input: Option<PathBuf>) -> Result<Vec<u8>> {
    if let Some(text) = text {
        return Ok(text.into_bytes());
    }

    match input {
        Some(path) => {
            std::fs::read(&path).with_context(|| format!("Failed to read {}", path.display()))
        }
        None => {
            let mut text = Vec::new();
            std::io::stdin()
                .read_to_end(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

fn run_match(
    automaton: &Automaton,
    patterns: &[Vec<u8>],
    text: &[u8],
    count: bool,
    json: bool,
) -> Result<()> {
    if count {
        println!("{}", automaton.match_count_bytes(text)?);
        return Ok(());
    }

    let hits = automaton.matches_bytes(text)?;
    info!(hits = hits.len(), "Scan complete");

    if json {
        println!("{}", serde_json::to_string(&hits)?);
        return Ok(());
    }

    for id in hits {
        let pattern = patterns.get(id as usize).map(Vec::as_slice).unwrap_or_default();
        println!("{}\t{}", id, String::from_utf8_lossy(pattern));
    }

    Ok(())
}
