//! Wallet provider capability.
//!
//! The engine never reaches for an ambient, process-wide wallet object; the
//! wallet is an explicit capability passed in. Implementations wrap whatever
//! actually signs (a browser-injected provider behind a bridge, a hardware
//! wallet daemon, a test double); this layer only consumes connection state
//! and the chain-switch request.

use async_trait::async_trait;

use crate::error::Result;

/// Connection state and chain control of the user's wallet.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Currently selected account address, if connected.
    fn address(&self) -> Option<String>;

    /// Chain id the wallet is currently on, if known.
    fn chain_id(&self) -> Option<u64>;

    /// True when an account is available for signing.
    fn is_connected(&self) -> bool {
        self.address().is_some()
    }

    /// Ask the wallet to switch to `chain_id`.
    ///
    /// Acknowledgment does not mean the switch has settled; the wallet emits
    /// no further event this layer could await.
    async fn switch_chain(&self, chain_id: u64) -> Result<()>;
}
