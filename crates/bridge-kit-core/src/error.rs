//! Unified error types for the bridge-kit toolkit.

use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur during bridge-kit operations.
#[derive(Error, Debug)]
pub enum BridgeKitError {
    // --- Scaffolding ---

    /// Attempted to create a project in a directory that already exists.
    #[error("project directory already exists: {0}")]
    ProjectExists(PathBuf),

    /// The user-supplied template root does not exist or is not a directory.
    #[error("template directory not found: {0}")]
    TemplateNotFound(PathBuf),

    /// Handlebars template rendering failed (invalid template or missing variables).
    #[error("template rendering failed: {0}")]
    TemplateRender(String),

    // --- Chain resolution ---

    /// The requested chain is not in the kit's supported-chain list.
    #[error("{name} (chain ID {chain_id}) is not supported by the bridging kit")]
    ChainNotSupported { name: String, chain_id: u64 },

    /// Name-substring lookup resolved to a chain with the wrong numeric id.
    #[error("incorrect source chain selected: expected chain ID {expected}, got {name} ({actual})")]
    ChainMismatch {
        expected: u64,
        actual: u64,
        name: String,
    },

    // --- External calls ---

    /// The wallet rejected or failed the chain-switch request.
    /// Constructed by [`crate::wallet::WalletProvider`] implementations.
    #[error("network switch failed: {0}")]
    SwitchFailed(String),

    // --- Balance RPC ---

    /// The RPC endpoint answered with something other than a hex quantity.
    #[error("malformed RPC response: {0}")]
    RpcMalformed(String),

    // --- General ---

    /// A filesystem I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A catch-all for errors from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Alias for `Result<T, BridgeKitError>`.
pub type Result<T> = std::result::Result<T, BridgeKitError>;
