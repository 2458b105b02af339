//! AKHQ ACL Mapper - command line runner
//!
//! Runs the mapper offline against a subject document and prints the
//! resulting token claims, for checking group attributes before they reach
//! the identity provider.

use akhq_acl_mapper::{AclMapper, TokenClaims, TokenKind};
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

mod config;

use config::{load_subject, CliConfig};

/// AKHQ ACL Mapper CLI
#[derive(Parser)]
#[command(name = "akhq-acl-mapper")]
#[command(about = "Derive AKHQ group claims from directory group attributes")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, env = "AKHQ_MAPPER_CONFIG")]
    config: Option<PathBuf>,

    /// Path to the subject document (JSON)
    #[arg(short, long)]
    subject: PathBuf,

    /// Token type to build claims for (id, access, lightweight, userinfo)
    #[arg(short, long, default_value = "id")]
    token: TokenKind,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Report the number of groups processed
    #[arg(long)]
    debug: bool,
}

/// Default log filter when `RUST_LOG` is not set. The mapper's debug flag
/// needs debug level for its diagnostic to reach stderr.
fn default_log_level(verbose: bool, mapper_debug: bool) -> &'static str {
    if verbose || mapper_debug { "debug" } else { "warn" }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => CliConfig::load(path)?,
        None => CliConfig::default(),
    };
    if cli.debug {
        config.mapper.debug = true;
    }

    // Initialize logging
    let log_level = default_log_level(cli.verbose, config.mapper.debug);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let subject = load_subject(&cli.subject)?;
    let mapper = AclMapper::new(config.mapper);

    let mut token = TokenClaims::new();
    let applied = mapper
        .transform(cli.token, &subject, &mut token)
        .context("Failed to build token claims")?;

    info!(token = %cli.token, applied, "Mapper finished");

    println!("{}", token.to_json()?);

    Ok(())
}
