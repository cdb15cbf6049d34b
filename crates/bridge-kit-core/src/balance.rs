//! Read-only ERC-20 balance lookup over plain JSON-RPC.
//!
//! Balance display is a side concern: it must never block or fail the bridge
//! action. Each chain carries a short ordered list of public endpoints; they
//! are tried in turn and exhausting them yields a `"0"` balance plus a
//! non-fatal warning instead of an error.

use std::time::Duration;

use serde_json::{json, Value};

use crate::chains::{rpc_urls_for_chain, TokenInfo};
use crate::error::{BridgeKitError, Result};

/// `balanceOf(address)` selector.
const BALANCE_OF_SELECTOR: &str = "70a08231";

/// Outcome of a balance query. Always usable for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceLookup {
    /// Decimal string formatted with the token's decimal count, `"0"` on failure.
    pub balance: String,
    /// Non-fatal diagnostic when the lookup degraded.
    pub warning: Option<String>,
}

/// JSON-RPC client for token balance queries with endpoint fallback.
pub struct BalanceClient {
    http: reqwest::Client,
}

impl BalanceClient {
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(8))
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();
        Self { http }
    }

    /// Fetch and format the token balance of `address` on `chain_id`.
    ///
    /// Never returns an error: unknown chains and exhausted endpoints come
    /// back as a zero balance with a warning.
    pub async fn token_balance(
        &self,
        address: &str,
        token: &TokenInfo,
        chain_id: u64,
    ) -> BalanceLookup {
        let Some(urls) = rpc_urls_for_chain(chain_id) else {
            return BalanceLookup {
                balance: "0".into(),
                warning: Some(format!("chain {chain_id} not supported for balance lookup")),
            };
        };
        self.token_balance_at(urls, address, token).await
    }

    /// Same as [`token_balance`](Self::token_balance) with an explicit
    /// endpoint list.
    pub async fn token_balance_at(
        &self,
        urls: &[&str],
        address: &str,
        token: &TokenInfo,
    ) -> BalanceLookup {
        let calldata = match balance_of_calldata(address) {
            Ok(data) => data,
            Err(err) => {
                return BalanceLookup {
                    balance: "0".into(),
                    warning: Some(err.to_string()),
                }
            }
        };

        let mut last_error = String::new();
        let mut timed_out = false;

        for &url in urls {
            match self.query_endpoint(url, token.contract_address, &calldata).await {
                Ok(raw) => {
                    tracing::debug!(url, %raw, "balance fetched");
                    return BalanceLookup {
                        balance: format_units(raw, token.decimals),
                        warning: None,
                    };
                }
                Err(err) => {
                    tracing::warn!(url, %err, "balance endpoint failed, trying next");
                    if let BridgeKitError::Other(ref inner) = err {
                        if inner
                            .downcast_ref::<reqwest::Error>()
                            .is_some_and(reqwest::Error::is_timeout)
                        {
                            timed_out = true;
                        }
                    }
                    last_error = err.to_string();
                }
            }
        }

        tracing::warn!(%last_error, "all balance endpoints failed");
        let warning = if timed_out {
            "RPC timeout - balance may not be accurate.".to_string()
        } else {
            "Unable to fetch balance.".to_string()
        };
        BalanceLookup {
            balance: "0".into(),
            warning: Some(warning),
        }
    }

    async fn query_endpoint(&self, url: &str, contract: &str, calldata: &str) -> Result<u128> {
        let request = json!({
            "jsonrpc": "2.0",
            "method": "eth_call",
            "params": [{ "to": contract, "data": calldata }, "latest"],
            "id": 1,
        });

        let response = self
            .http
            .post(url)
            .json(&request)
            .send()
            .await
            .map_err(anyhow::Error::from)?;

        if !response.status().is_success() {
            return Err(BridgeKitError::RpcMalformed(format!(
                "bad HTTP status {} from {url}",
                response.status()
            )));
        }

        let body: Value = response.json().await.map_err(anyhow::Error::from)?;
        if let Some(err) = body.get("error") {
            return Err(BridgeKitError::RpcMalformed(err.to_string()));
        }
        let result = body
            .get("result")
            .and_then(Value::as_str)
            .ok_or_else(|| BridgeKitError::RpcMalformed(body.to_string()))?;

        parse_hex_quantity(result)
    }
}

impl Default for BalanceClient {
    fn default() -> Self {
        Self::new()
    }
}

/// ABI-encode `balanceOf(address)`: 4-byte selector + left-padded address.
fn balance_of_calldata(address: &str) -> Result<String> {
    let stripped = address.trim_start_matches("0x");
    let bytes = hex::decode(stripped)
        .map_err(|e| BridgeKitError::RpcMalformed(format!("bad address {address}: {e}")))?;
    if bytes.len() != 20 {
        return Err(BridgeKitError::RpcMalformed(format!(
            "bad address length {} for {address}",
            bytes.len()
        )));
    }
    Ok(format!(
        "0x{BALANCE_OF_SELECTOR}{:0>64}",
        stripped.to_lowercase()
    ))
}

/// Parse an `0x`-prefixed hex quantity as returned by `eth_call`.
fn parse_hex_quantity(result: &str) -> Result<u128> {
    let stripped = result.trim_start_matches("0x");
    if stripped.is_empty() {
        return Ok(0);
    }
    // eth_call returns a full 32-byte word; the high bytes must be zero for
    // the value to fit a u128.
    let significant = stripped.trim_start_matches('0');
    if significant.len() > 32 {
        return Err(BridgeKitError::RpcMalformed(format!(
            "balance too large: {result}"
        )));
    }
    u128::from_str_radix(stripped, 16)
        .map_err(|e| BridgeKitError::RpcMalformed(format!("bad quantity {result}: {e}")))
}

/// Format a raw integer amount using the token's decimal count.
///
/// Trailing fractional zeros are trimmed: `1500000` with 6 decimals is
/// `"1.5"`, and `1000000` is `"1"`.
pub fn format_units(raw: u128, decimals: u32) -> String {
    let scale = 10u128.pow(decimals);
    let whole = raw / scale;
    let frac = raw % scale;
    if frac == 0 {
        return whole.to_string();
    }
    let frac_str = format!("{frac:0>width$}", width = decimals as usize);
    let trimmed = frac_str.trim_end_matches('0');
    format!("{whole}.{trimmed}")
}
