//! Core library for the bridge-kit toolkit.
//!
//! Two independent halves share this crate:
//!
//! - **Scaffolding**: [`scaffold`] creates new demo-app projects from the
//!   compile-time embedded template set in [`templates`], guarded against
//!   pre-existing destinations.
//! - **Bridging**: [`engine::BridgeEngine`] drives one USDC bridge attempt
//!   through its observable state machine ([`state::BridgeState`]), against
//!   an injected wallet capability ([`wallet::WalletProvider`]) and an opaque
//!   bridging SDK ([`kit::BridgeKit`]). [`balance`] adds the read-only
//!   token-balance lookup over JSON-RPC.
//!
//! All cross-chain protocol work (signing, attestation, mint/burn
//! sequencing) happens inside the injected kit; this crate only reflects its
//! progress and interprets its result shape ([`receipt`]).

pub mod balance;
pub mod chains;
pub mod engine;
pub mod error;
pub mod kit;
pub mod receipt;
pub mod scaffold;
pub mod state;
pub mod templates;
pub mod version;
pub mod wallet;
