//! `probe`: collect the provider capability dataset.
//!
//! Probes every configured (provider, chain) pair over HTTP and writes the
//! dataset JSON. Pairs already present in the output file are replaced;
//! other pairs are kept.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

use std::path::PathBuf;
use std::time::Duration;

use atlas_probe::{Credentials, ProbeError, Prober};
use clap::Parser;
use providers::ProviderRegistry;
use types::{Chain, Provider};

/// Command-line interface configuration for the probe.
#[derive(Parser, Debug)]
#[command(name = "probe", about = "Collect provider capability data for Atlas", version)]
struct Cli {
    /// Dataset file to write (merged if it already exists)
    #[arg(long, default_value = "primitives/providers/resources/providers.json")]
    out: PathBuf,
    /// Chains to probe, by slug or id (default: every chain)
    #[arg(long = "chain", value_parser = parse_chain)]
    chains: Vec<Chain>,
    /// Providers to probe (default: every provider)
    #[arg(long = "provider", value_parser = parse_provider)]
    providers: Vec<Provider>,
    /// Provider credential as `<provider>=<key>`; overrides the environment
    #[arg(long = "key")]
    keys: Vec<String>,
    /// Per-call timeout in seconds
    #[arg(long, default_value_t = 60)]
    timeout_secs: u64,
    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn parse_chain(s: &str) -> Result<Chain, String> { s.parse() }

fn parse_provider(s: &str) -> Result<Provider, String> { s.parse() }

#[tokio::main]
async fn main() -> Result<(), ProbeError> {
    let cli = Cli::parse();
    logging::init(&cli.log_level)?;

    let mut credentials = Credentials::from_env();
    for pair in &cli.keys {
        credentials.insert_pair(pair)?;
    }

    let chains = if cli.chains.is_empty() { Chain::ALL.to_vec() } else { cli.chains };
    let providers = if cli.providers.is_empty() { Provider::ALL.to_vec() } else { cli.providers };

    let mut registry =
        if cli.out.exists() { ProviderRegistry::from_file(&cli.out)? } else { ProviderRegistry::new() };

    let prober = Prober::new(Duration::from_secs(cli.timeout_secs));
    let probed = prober.collect(&chains, &providers, &credentials, &mut registry).await;

    registry.save(&cli.out)?;
    tracing::info!("probed {} endpoints, wrote {}", probed, cli.out.display());
    println!("Wrote {} ({} endpoints probed)", cli.out.display(), probed);
    Ok(())
}
