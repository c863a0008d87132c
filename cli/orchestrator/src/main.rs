//! Atlas CLI
//!
//! Browse the EVM JSON-RPC method catalog, validate parameter values, render
//! call snippets and look up provider support.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

use std::path::PathBuf;
use std::process::ExitCode;

use analysis::ParamValidator;
use atlas_cli::{
    find_method, list_methods, load_registry, parse_value, render, show_defaults, support_report, CliError,
    ValidationReport,
};
use catalog::MethodCatalog;
use clap::{Parser, Subcommand};
use codegen::CodeGenerator;
use config::{Config, Preferences};
use ir::MethodGroup;
use types::{Chain, Language, Library, Provider};

/// Command-line interface configuration for atlas.
#[derive(Parser, Debug)]
#[command(name = "atlas", about = "EVM JSON-RPC method reference", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
    /// Config file (default: the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

/// Available atlas commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// List methods by group
    Methods {
        #[arg(long)]
        chain: Option<Chain>,
        #[arg(long)]
        group: Option<MethodGroup>,
    },
    /// Print the sample values used to pre-fill forms
    Defaults {
        #[arg(long)]
        chain: Option<Chain>,
    },
    /// Check values against a method's params
    Validate {
        #[arg(long)]
        method: String,
        #[arg(long)]
        chain: Option<Chain>,
        /// Positional param values; JSON booleans, arrays and objects are parsed
        values: Vec<String>,
    },
    /// Render a call snippet
    Render {
        #[arg(long)]
        method: String,
        #[arg(long)]
        language: Option<Language>,
        #[arg(long)]
        library: Option<Library>,
        #[arg(long)]
        chain: Option<Chain>,
        /// Positional param values; missing ones use the defaults
        values: Vec<String>,
    },
    /// Show what a provider supports
    Support {
        #[arg(long)]
        provider: Option<Provider>,
        #[arg(long)]
        chain: Option<Chain>,
        /// Capability dataset (default: the bundled one)
        #[arg(long)]
        data: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, CliError> {
    let config = Config::load_or_default(cli.config.as_deref())?;
    match &config.logging.file {
        Some(file) => logging::init_with_file(&config.logging.level, file)?,
        None => logging::init(&config.logging.level)?,
    }
    let chain_or_pref = |chain: Option<Chain>| {
        let resolved = chain.or(config.preferences.chain).unwrap_or(Chain::BASELINE);
        if chain.is_none() {
            tracing::debug!("No --chain given, using {}", resolved);
        }
        resolved
    };

    match cli.cmd {
        Commands::Methods { chain, group } => {
            let catalog = MethodCatalog::for_chain(Some(chain_or_pref(chain)))?;
            print!("{}", list_methods(&catalog, group));
        }
        Commands::Defaults { chain } => println!("{}", show_defaults(chain_or_pref(chain))?),
        Commands::Validate { method, chain, values } => {
            let catalog = MethodCatalog::for_chain(Some(chain_or_pref(chain)))?;
            let validator = ParamValidator::new()?;
            let values: Vec<_> = values.iter().map(|v| parse_value(v)).collect();
            let report = ValidationReport::new(&validator, find_method(&catalog, &method)?, &values);
            print!("{}", report);
            if !report.is_valid() {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Render { method, language, library, chain, values } => {
            let target = if language.is_some() || library.is_some() {
                Preferences { language, library, ..Preferences::default() }.target()?
            } else {
                config.target()?
            };
            tracing::debug!("Rendering {} for {}", method, target);
            let catalog = MethodCatalog::for_chain(Some(chain_or_pref(chain)))?;
            let generator = CodeGenerator::new(&catalog)?;
            let validator = ParamValidator::new()?;
            let values: Vec<_> = values.iter().map(|v| parse_value(v)).collect();
            println!("{}", render(&generator, &validator, target, &method, &values)?);
        }
        Commands::Support { provider, chain, data } => {
            let Some(provider) = provider.or(config.preferences.provider) else {
                eprintln!("Error: no provider given and none configured");
                return Ok(ExitCode::FAILURE);
            };
            let registry = load_registry(data.as_deref().or(config.data.providers.as_deref()))?;
            print!("{}", support_report(&registry, provider, chain_or_pref(chain)));
        }
    }
    Ok(ExitCode::SUCCESS)
}
