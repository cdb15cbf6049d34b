//! One bridge attempt, end to end.
//!
//! The engine owns the attempt state and drives it through the observable
//! phases: precondition guards, chain resolution, an optional wallet network
//! switch, and the single opaque kit call. Wallet and kit are injected
//! capabilities; the engine performs no signing and no chain logic of its
//! own. Progress is reported through an observer callback invoked on every
//! transition.

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;

use crate::chains::{Direction, TokenInfo};
use crate::kit::{resolve_chain, BridgeKit, BridgeRequest, Endpoint};
use crate::receipt::extract_tx_hashes;
use crate::state::{AttemptTracker, BridgeState};
use crate::wallet::WalletProvider;

/// Drives bridge attempts against an injected wallet and kit.
pub struct BridgeEngine {
    wallet: Arc<dyn WalletProvider>,
    kit: Arc<dyn BridgeKit>,
    tracker: AttemptTracker,
    /// Settling delay after a chain-switch request. The wallet's
    /// acknowledgment carries no completion event this layer could await, so
    /// this is a timed heuristic and a known race: a slow wallet may still be
    /// mid-switch when the bridge call goes out.
    switch_settle: Duration,
}

impl BridgeEngine {
    pub fn new(wallet: Arc<dyn WalletProvider>, kit: Arc<dyn BridgeKit>) -> Self {
        Self {
            wallet,
            kit,
            tracker: AttemptTracker::new(),
            switch_settle: Duration::from_secs(2),
        }
    }

    /// Override the post-switch settling delay (tests set this to zero).
    pub fn with_switch_settle(mut self, settle: Duration) -> Self {
        self.switch_settle = settle;
        self
    }

    /// Current attempt state.
    pub fn state(&self) -> &BridgeState {
        self.tracker.state()
    }

    /// Discard the previous attempt's outcome and return to `Idle`.
    pub fn reset(&mut self) {
        self.tracker.reset();
    }

    /// Run one attempt. Returns the terminal state (`Success` or `Error`).
    ///
    /// Must be called from `Idle`; a call while a previous outcome is still
    /// held is a no-op until [`reset`](Self::reset). Once the kit call is
    /// issued there is no cancellation: the attempt runs to resolution or
    /// rejection.
    pub async fn run(
        &mut self,
        token: &TokenInfo,
        amount: &str,
        direction: Direction,
        observer: &mut dyn FnMut(&BridgeState),
    ) -> &BridgeState {
        if self.tracker.state().is_terminal() {
            tracing::debug!("bridge attempt requested before reset, ignoring");
            return self.tracker.state();
        }

        // Precondition guards: no external call happens past a failed guard.
        if !self.wallet.is_connected() {
            return self.fail("Please connect your wallet first".into(), observer);
        }
        if !is_positive_amount(amount) {
            return self.fail(
                format!("Please enter a valid {} amount", token.symbol),
                observer,
            );
        }

        let source = match resolve_chain(self.kit.as_ref(), direction.source()) {
            Ok(chain) => chain,
            Err(err) => return self.fail(err.to_string(), observer),
        };
        let destination = match resolve_chain(self.kit.as_ref(), direction.destination()) {
            Ok(chain) => chain,
            Err(err) => return self.fail(err.to_string(), observer),
        };

        tracing::info!(
            from = %source.name,
            to = %destination.name,
            amount,
            direction = direction.as_str(),
            "starting bridge attempt"
        );

        // Switch to the source chain if the wallet is elsewhere, then settle.
        if self.wallet.chain_id() != Some(direction.source()) {
            self.advance(BridgeState::SwitchingNetwork { direction }, observer);
            let wallet = Arc::clone(&self.wallet);
            let switched = wallet.switch_chain(direction.source()).await;
            if let Err(err) = switched {
                return self.fail(err.to_string(), observer);
            }
            tokio::time::sleep(self.switch_settle).await;
        }

        // The kit performs approve, burn/transfer, attestation fetch, and
        // mint/receive inside this one call; its sub-steps are unobservable
        // here. It resolves only after all of them are done.
        self.advance(BridgeState::Approving { direction }, observer);
        let request = BridgeRequest {
            from: Endpoint { chain: source },
            to: Endpoint { chain: destination },
            amount: amount.to_string(),
        };

        let kit = Arc::clone(&self.kit);
        let outcome = kit.bridge(request).await;
        match outcome {
            Ok(result) => self.succeed(direction, result, observer),
            Err(err) => {
                let message = map_bridge_error(&err.to_string(), token);
                self.fail(message, observer)
            }
        }
    }

    fn succeed(
        &mut self,
        direction: Direction,
        result: Value,
        observer: &mut dyn FnMut(&BridgeState),
    ) -> &BridgeState {
        let hashes = extract_tx_hashes(&result);
        tracing::info!(
            source_tx = hashes.source.as_deref().unwrap_or("<none>"),
            receive_tx = hashes.receive.as_deref().unwrap_or("<none>"),
            "bridge attempt succeeded"
        );
        self.advance(
            BridgeState::Success {
                direction,
                source_tx_hash: hashes.source,
                receive_tx_hash: hashes.receive,
                result,
            },
            observer,
        )
    }

    fn fail(
        &mut self,
        message: String,
        observer: &mut dyn FnMut(&BridgeState),
    ) -> &BridgeState {
        tracing::warn!(%message, "bridge attempt failed");
        self.advance(BridgeState::Error { message }, observer)
    }

    fn advance(
        &mut self,
        next: BridgeState,
        observer: &mut dyn FnMut(&BridgeState),
    ) -> &BridgeState {
        let state = self.tracker.transition(next);
        observer(state);
        state
    }
}

/// Amount guard: a parseable, positive, finite decimal.
fn is_positive_amount(amount: &str) -> bool {
    amount
        .trim()
        .parse::<f64>()
        .map(|v| v.is_finite() && v > 0.0)
        .unwrap_or(false)
}

/// Pass external error messages through verbatim, with one special case: the
/// kit reports a wrong-contract balance as "Insufficient funds", which gets
/// expanded into the contract-address diagnostic users actually need.
fn map_bridge_error(raw: &str, token: &TokenInfo) -> String {
    if raw.contains("Insufficient funds") {
        return format!(
            "Wrong {symbol} contract address.\n\
             \n\
             The bridging kit requires {symbol} at:\n\
             {contract}\n\
             \n\
             Your {symbol} is held at a different contract address, which the\n\
             kit cannot bridge. To fix this:\n\
             1. Get {symbol} from the official kit contract, or\n\
             2. Swap your current {symbol} to the correct contract, or\n\
             3. Use a faucet that mints the correct contract's {symbol}.",
            symbol = token.symbol,
            contract = token.contract_address,
        );
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;
    use serde_json::json;

    use super::*;
    use crate::chains::{ARC_CHAIN_ID, SEPOLIA_CHAIN_ID, SEPOLIA_USDC};
    use crate::error::{BridgeKitError, Result};
    use crate::kit::ChainRef;

    struct FakeWallet {
        address: Option<String>,
        chain_id: Option<u64>,
        switches: AtomicUsize,
        switch_fails: bool,
    }

    impl FakeWallet {
        fn connected_on(chain_id: u64) -> Self {
            Self {
                address: Some("0x1c7D4B196Cb0C7B01d743Fbc6116a902379C7238".into()),
                chain_id: Some(chain_id),
                switches: AtomicUsize::new(0),
                switch_fails: false,
            }
        }

        fn disconnected() -> Self {
            Self {
                address: None,
                chain_id: None,
                switches: AtomicUsize::new(0),
                switch_fails: false,
            }
        }

        fn refusing_switch(chain_id: u64) -> Self {
            Self {
                switch_fails: true,
                ..Self::connected_on(chain_id)
            }
        }
    }

    #[async_trait]
    impl WalletProvider for FakeWallet {
        fn address(&self) -> Option<String> {
            self.address.clone()
        }

        fn chain_id(&self) -> Option<u64> {
            self.chain_id
        }

        async fn switch_chain(&self, chain_id: u64) -> Result<()> {
            self.switches.fetch_add(1, Ordering::SeqCst);
            if self.switch_fails {
                return Err(BridgeKitError::SwitchFailed(format!(
                    "wallet refused chain {chain_id}"
                )));
            }
            Ok(())
        }
    }

    struct FakeKit {
        outcome: Mutex<Option<anyhow::Result<Value>>>,
        calls: AtomicUsize,
    }

    impl FakeKit {
        fn resolving(result: Value) -> Self {
            Self {
                outcome: Mutex::new(Some(Ok(result))),
                calls: AtomicUsize::new(0),
            }
        }

        fn rejecting(message: &str) -> Self {
            Self {
                outcome: Mutex::new(Some(Err(anyhow::anyhow!("{message}")))),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl BridgeKit for FakeKit {
        fn supported_chains(&self) -> Vec<ChainRef> {
            vec![
                ChainRef {
                    chain_id: Some(SEPOLIA_CHAIN_ID),
                    name: "Ethereum Sepolia".into(),
                },
                ChainRef {
                    chain_id: Some(ARC_CHAIN_ID),
                    name: "Arc Testnet".into(),
                },
            ]
        }

        async fn bridge(&self, _request: BridgeRequest) -> anyhow::Result<Value> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.outcome
                .lock()
                .unwrap()
                .take()
                .expect("bridge called more than once")
        }
    }

    fn engine(wallet: FakeWallet, kit: FakeKit) -> (BridgeEngine, Arc<FakeWallet>, Arc<FakeKit>) {
        let wallet = Arc::new(wallet);
        let kit = Arc::new(kit);
        let engine = BridgeEngine::new(wallet.clone(), kit.clone())
            .with_switch_settle(Duration::ZERO);
        (engine, wallet, kit)
    }

    #[tokio::test]
    async fn test_disconnected_wallet_errors_without_external_calls() {
        let (mut engine, wallet, kit) =
            engine(FakeWallet::disconnected(), FakeKit::resolving(json!({})));
        let state = engine
            .run(&SEPOLIA_USDC, "1.0", Direction::SepoliaToArc, &mut |_| {})
            .await;
        assert_eq!(state.step(), "error");
        assert!(state.error().unwrap().contains("connect your wallet"));
        assert_eq!(wallet.switches.load(Ordering::SeqCst), 0);
        assert_eq!(kit.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_invalid_amounts_error_without_external_calls() {
        for amount in ["", "0", "-1", "abc", "0.0"] {
            let (mut engine, wallet, kit) = engine(
                FakeWallet::connected_on(SEPOLIA_CHAIN_ID),
                FakeKit::resolving(json!({})),
            );
            let state = engine
                .run(&SEPOLIA_USDC, amount, Direction::SepoliaToArc, &mut |_| {})
                .await;
            assert_eq!(state.step(), "error", "amount {amount:?}");
            assert!(state.error().unwrap().contains("valid USDC amount"));
            assert_eq!(wallet.switches.load(Ordering::SeqCst), 0);
            assert_eq!(kit.calls.load(Ordering::SeqCst), 0);
        }
    }

    #[tokio::test]
    async fn test_success_extracts_step_hashes() {
        let result = json!({
            "steps": [
                { "name": "burn", "txHash": "0xAA" },
                { "name": "mint", "txHash": "0xBB" },
            ]
        });
        let (mut engine, _, _) = engine(
            FakeWallet::connected_on(SEPOLIA_CHAIN_ID),
            FakeKit::resolving(result),
        );
        let state = engine
            .run(&SEPOLIA_USDC, "1.5", Direction::SepoliaToArc, &mut |_| {})
            .await;
        assert_eq!(state.step(), "success");
        assert_eq!(state.source_tx_hash(), Some("0xAA"));
        assert_eq!(state.receive_tx_hash(), Some("0xBB"));
    }

    #[tokio::test]
    async fn test_no_switch_when_already_on_source_chain() {
        let (mut engine, wallet, _) = engine(
            FakeWallet::connected_on(SEPOLIA_CHAIN_ID),
            FakeKit::resolving(json!({})),
        );
        let mut steps = Vec::new();
        engine
            .run(&SEPOLIA_USDC, "1", Direction::SepoliaToArc, &mut |s| {
                steps.push(s.step())
            })
            .await;
        assert_eq!(wallet.switches.load(Ordering::SeqCst), 0);
        assert_eq!(steps, vec!["approving", "success"]);
    }

    #[tokio::test]
    async fn test_switch_requested_when_on_other_chain() {
        let (mut engine, wallet, _) = engine(
            FakeWallet::connected_on(ARC_CHAIN_ID),
            FakeKit::resolving(json!({})),
        );
        let mut steps = Vec::new();
        let state = engine
            .run(&SEPOLIA_USDC, "1", Direction::SepoliaToArc, &mut |s| {
                steps.push(s.step())
            })
            .await;
        assert_eq!(wallet.switches.load(Ordering::SeqCst), 1);
        assert_eq!(steps, vec!["switching-network", "approving", "success"]);
        assert_eq!(state.step(), "success");
        // No hashes in an empty result, still a success.
        assert!(state.source_tx_hash().is_none());
    }

    #[tokio::test]
    async fn test_switch_failure_errors_before_the_kit_call() {
        let (mut engine, wallet, kit) = engine(
            FakeWallet::refusing_switch(ARC_CHAIN_ID),
            FakeKit::resolving(json!({})),
        );
        let mut steps = Vec::new();
        let state = engine
            .run(&SEPOLIA_USDC, "1", Direction::SepoliaToArc, &mut |s| {
                steps.push(s.step())
            })
            .await;
        assert_eq!(steps, vec!["switching-network", "error"]);
        assert!(state.error().unwrap().contains("network switch failed"));
        assert_eq!(wallet.switches.load(Ordering::SeqCst), 1);
        assert_eq!(kit.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_insufficient_funds_is_rewritten() {
        let (mut engine, _, _) = engine(
            FakeWallet::connected_on(SEPOLIA_CHAIN_ID),
            FakeKit::rejecting("Insufficient funds for transfer"),
        );
        let state = engine
            .run(&SEPOLIA_USDC, "5", Direction::SepoliaToArc, &mut |_| {})
            .await;
        let message = state.error().unwrap();
        assert!(message.contains(SEPOLIA_USDC.contract_address));
        assert!(message.contains("Wrong USDC contract address"));
    }

    #[tokio::test]
    async fn test_other_errors_pass_through_verbatim() {
        let (mut engine, _, _) = engine(
            FakeWallet::connected_on(SEPOLIA_CHAIN_ID),
            FakeKit::rejecting("user rejected the request"),
        );
        let state = engine
            .run(&SEPOLIA_USDC, "5", Direction::SepoliaToArc, &mut |_| {})
            .await;
        assert_eq!(state.error(), Some("user rejected the request"));
    }

    #[tokio::test]
    async fn test_run_after_terminal_state_is_a_noop_until_reset() {
        let (mut engine, _, kit) = engine(
            FakeWallet::connected_on(SEPOLIA_CHAIN_ID),
            FakeKit::rejecting("user rejected the request"),
        );
        engine
            .run(&SEPOLIA_USDC, "1", Direction::SepoliaToArc, &mut |_| {})
            .await;
        assert_eq!(engine.state().step(), "error");
        assert_eq!(kit.calls.load(Ordering::SeqCst), 1);

        // Still in error: a second run does not touch the kit again.
        engine
            .run(&SEPOLIA_USDC, "1", Direction::SepoliaToArc, &mut |_| {})
            .await;
        assert_eq!(kit.calls.load(Ordering::SeqCst), 1);

        engine.reset();
        assert_eq!(engine.state().step(), "idle");
    }
}
