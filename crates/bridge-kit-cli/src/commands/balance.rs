use std::time::Duration;

use anyhow::Result;
use dialoguer::Select;
use indicatif::{ProgressBar, ProgressStyle};

use bridge_kit_core::balance::BalanceClient;
use bridge_kit_core::chains::chain_name;

use crate::output;
use crate::{ChainChoice, TokenChoice};

/// Query a token balance on one of the configured networks.
///
/// Prompts for the network when `--chain` is omitted. Endpoint failures are
/// non-fatal: the command prints a zero balance plus the warning and still
/// exits 0.
pub async fn run(address: &str, chain: Option<ChainChoice>, token: TokenChoice) -> Result<()> {
    let chain = match chain {
        Some(c) => c,
        None => {
            let options = [ChainChoice::Sepolia, ChainChoice::Arc];
            let descriptions = &[
                "Ethereum Sepolia — USDC at the kit's Sepolia contract",
                "Arc Testnet — USDC as the native-denominated token",
            ];
            let selection = Select::new()
                .with_prompt("Select network")
                .items(descriptions)
                .default(0)
                .interact()?;
            options[selection]
        }
    };

    let chain_id = chain.chain_id();
    let token = token
        .for_chain(chain_id)
        .ok_or_else(|| anyhow::anyhow!("no token configured for chain {chain_id}"))?;

    output::print_header(&format!(
        "{} balance on {}",
        token.symbol,
        chain_name(chain_id)
    ));

    // Decorative elapsed ticker while the RPC round-trips run.
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg} ({elapsed})")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("querying RPC endpoints...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let client = BalanceClient::new();
    let lookup = client.token_balance(address, token, chain_id).await;

    spinner.finish_and_clear();

    output::print_key_value("address", address);
    output::print_key_value("token", &format!("{} ({})", token.symbol, token.contract_address));
    output::print_key_value("balance", &format!("{} {}", lookup.balance, token.symbol));

    if let Some(warning) = lookup.warning {
        output::print_warning(&warning);
    }

    Ok(())
}
