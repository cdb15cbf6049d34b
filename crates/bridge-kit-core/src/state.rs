//! Observable state of one bridge attempt.
//!
//! [`BridgeState`] is a tagged variant per step rather than one wide record
//! with optional fields: transaction hashes exist only on `Success`, an error
//! message exists only on `Error`, and the in-progress variants carry the
//! direction that was fixed when the attempt started.
//!
//! [`AttemptTracker`] owns the current state and enforces monotonicity within
//! an attempt: once a terminal state (`Success` or `Error`) is reached, the
//! only way out is an explicit [`AttemptTracker::reset`] back to `Idle`.

use serde_json::Value;

use crate::chains::Direction;

/// Current step of a bridge attempt, with step-specific payloads.
#[derive(Debug, Clone)]
pub enum BridgeState {
    /// No attempt in flight. The modal just opened, or was reset.
    Idle,
    /// Asked the wallet to switch to the source chain; settling.
    SwitchingNetwork { direction: Direction },
    /// The single opaque bridge call is running. The kit performs the whole
    /// approve/burn/attestation/mint sequence inside this one call.
    Approving { direction: Direction },
    /// Waiting on the source-chain signature (reported by kits that expose it).
    SigningBridge { direction: Direction },
    /// Waiting on the destination-chain receive message (likewise optional).
    WaitingReceiveMessage { direction: Direction },
    /// The bridge call resolved. Hashes are best-effort; a missing receive
    /// hash is still a success.
    Success {
        direction: Direction,
        source_tx_hash: Option<String>,
        receive_tx_hash: Option<String>,
        result: Value,
    },
    /// The attempt failed before or during the bridge call.
    Error { message: String },
}

impl BridgeState {
    /// Stable step identifier used in logs and progress displays.
    pub fn step(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::SwitchingNetwork { .. } => "switching-network",
            Self::Approving { .. } => "approving",
            Self::SigningBridge { .. } => "signing-bridge",
            Self::WaitingReceiveMessage { .. } => "waiting-receive-message",
            Self::Success { .. } => "success",
            Self::Error { .. } => "error",
        }
    }

    /// True while an attempt is in flight (the UI disables the trigger).
    pub fn is_loading(&self) -> bool {
        matches!(
            self,
            Self::SwitchingNetwork { .. }
                | Self::Approving { .. }
                | Self::SigningBridge { .. }
                | Self::WaitingReceiveMessage { .. }
        )
    }

    /// True once the attempt has concluded, either way.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Success { .. } | Self::Error { .. })
    }

    /// Direction fixed for this attempt, if one has started.
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Self::Idle | Self::Error { .. } => None,
            Self::SwitchingNetwork { direction }
            | Self::Approving { direction }
            | Self::SigningBridge { direction }
            | Self::WaitingReceiveMessage { direction }
            | Self::Success { direction, .. } => Some(*direction),
        }
    }

    /// Error message, present iff the state is `Error`.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error { message } => Some(message),
            _ => None,
        }
    }

    /// Source-chain transaction hash, present only on `Success`.
    pub fn source_tx_hash(&self) -> Option<&str> {
        match self {
            Self::Success { source_tx_hash, .. } => source_tx_hash.as_deref(),
            _ => None,
        }
    }

    /// Destination-chain receive transaction hash, present only on `Success`.
    pub fn receive_tx_hash(&self) -> Option<&str> {
        match self {
            Self::Success { receive_tx_hash, .. } => receive_tx_hash.as_deref(),
            _ => None,
        }
    }
}

impl Default for BridgeState {
    fn default() -> Self {
        Self::Idle
    }
}

/// Owns the state of the current attempt and guards its transitions.
#[derive(Debug, Default)]
pub struct AttemptTracker {
    state: BridgeState,
}

impl AttemptTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &BridgeState {
        &self.state
    }

    /// Apply a transition. Terminal states are sticky: transitions out of
    /// `Success` or `Error` are dropped (only `reset` leaves them), keeping
    /// `step` monotonic within one attempt.
    pub fn transition(&mut self, next: BridgeState) -> &BridgeState {
        if self.state.is_terminal() {
            tracing::debug!(
                from = self.state.step(),
                to = next.step(),
                "ignoring transition out of terminal state"
            );
            return &self.state;
        }
        tracing::debug!(from = self.state.step(), to = next.step(), "bridge step");
        self.state = next;
        &self.state
    }

    /// Return to `Idle`, discarding the previous attempt's outcome.
    pub fn reset(&mut self) {
        self.state = BridgeState::Idle;
    }
}
