use std::io::Stderr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use typedline::utils::ReedlineReader;
use typedline::{Question, QuestionConfig};

/// Asks a few typed questions and prints the answers.
#[derive(Parser, Debug)]
#[command(name = "typedline", version)]
struct Cli {
    /// TOML file with prompt settings (prefix, tokens, float format, extra literals)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Restores the terminal when dropped, whatever way `main` exits.
struct Session(Question<ReedlineReader, Stderr>);

impl Drop for Session {
    fn drop(&mut self) {
        if let Err(e) = self.0.restore_terminal() {
            warn!(error = %e, "could not restore the terminal");
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        _ => EnvFilter::new("debug"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = QuestionConfig::load(cli.config.as_deref())
        .context("failed to load prompt configuration")?;
    info!(?config, "configuration loaded");

    let mut session = Session(Question::new(config)?);
    let question = &mut session.0;

    println!("-------------------------------------------");
    println!(" typedline demo  (Ctrl-D skips a question)");
    println!("-------------------------------------------");

    let name = question.read_string_default("Your name", "anonymous");
    let age = question.read_int("Your age");
    let height = question.read_float_default("Height in meters", 1.75);
    let confirmed = question.read_bool("Is this correct?", true);

    println!();
    println!("Name:      {}", name);
    println!("Age:       {}", age);
    println!("Height:    {}", height);
    println!("Confirmed: {}", confirmed);

    Ok(())
}
