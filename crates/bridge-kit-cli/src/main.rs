//! bridge-kit CLI: scaffold and inspect USDC bridge demo apps.
//!
//! Provides three commands: `new` scaffolds a wallet-connect bridge demo web
//! app into a fresh directory, `balance` queries a USDC balance over the
//! configured public RPC endpoints, and `chains` prints the wired-up
//! networks.

mod commands;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use bridge_kit_core::chains::{usdc_for_chain, TokenInfo, ARC_CHAIN_ID, SEPOLIA_CHAIN_ID};

#[derive(Parser)]
#[command(
    name = "bridge-kit",
    about = "Scaffold and drive USDC bridge demo apps: Sepolia <-> Arc Testnet",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Scaffold a new bridge demo project
    New {
        /// Project name (creates a directory with this name)
        #[arg(default_value = "bridge-kit-app")]
        name: String,

        /// Copy an on-disk template root instead of the embedded template
        #[arg(long)]
        template: Option<PathBuf>,
    },

    /// Query a USDC balance on one of the configured networks
    Balance {
        /// Account address (0x...)
        #[arg(long)]
        address: String,

        /// Network to query (prompts interactively if omitted)
        #[arg(long, value_enum)]
        chain: Option<ChainChoice>,

        /// Token to query
        #[arg(long, value_enum, default_value = "usdc")]
        token: TokenChoice,
    },

    /// Print the configured networks, token contracts, and RPC endpoints
    Chains,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum ChainChoice {
    Sepolia,
    Arc,
}

impl ChainChoice {
    pub fn chain_id(&self) -> u64 {
        match self {
            Self::Sepolia => SEPOLIA_CHAIN_ID,
            Self::Arc => ARC_CHAIN_ID,
        }
    }
}

/// Tokens the balance command knows how to query. USDC is the only one the
/// bridging kit moves today.
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum TokenChoice {
    Usdc,
}

impl TokenChoice {
    /// Deployment of this token on `chain_id`, if any.
    pub fn for_chain(&self, chain_id: u64) -> Option<&'static TokenInfo> {
        match self {
            Self::Usdc => usdc_for_chain(chain_id),
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if let Err(err) = run(cli.command).await {
        output::print_error(&format!("{err:#}"));
        std::process::exit(1);
    }
}

async fn run(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::New { name, template } => {
            commands::new::run(&name, template.as_deref())?;
        }
        Commands::Balance {
            address,
            chain,
            token,
        } => {
            commands::balance::run(&address, chain, token).await?;
        }
        Commands::Chains => {
            commands::chains::run();
        }
    }
    Ok(())
}
