use bridge_kit_core::chains::{
    chain_name, explorer_base_url, rpc_urls_for_chain, usdc_for_chain, ARC_CHAIN_ID,
    SEPOLIA_CHAIN_ID,
};

use crate::output;

/// Print the configured networks, token contracts, and RPC fallback lists.
pub fn run() {
    for chain_id in [SEPOLIA_CHAIN_ID, ARC_CHAIN_ID] {
        output::print_header(chain_name(chain_id));
        output::print_key_value("chain id", &chain_id.to_string());

        if let Some(token) = usdc_for_chain(chain_id) {
            output::print_key_value(
                "token",
                &format!("{} ({} decimals)", token.symbol, token.decimals),
            );
            output::print_key_value("contract", token.contract_address);
        }

        if let Some(urls) = rpc_urls_for_chain(chain_id) {
            for (index, url) in urls.iter().enumerate() {
                output::print_key_value(&format!("rpc[{index}]"), url);
            }
        }

        if let Some(explorer) = explorer_base_url(chain_id) {
            output::print_key_value("explorer", explorer);
        }
    }
    println!();
}
