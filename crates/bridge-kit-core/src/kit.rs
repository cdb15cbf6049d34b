//! Bridging SDK collaborator.
//!
//! The kit is an opaque black box: one asynchronous entry point performs the
//! entire approve -> burn -> attestation -> mint sequence and resolves only
//! after every step is done (or rejects). This layer cannot observe or
//! control the sub-steps; it only interprets the final result shape
//! heuristically (see [`crate::receipt`]).

use async_trait::async_trait;
use serde_json::Value;

use crate::chains::{chain_name, ARC_CHAIN_ID, SEPOLIA_CHAIN_ID};
use crate::error::{BridgeKitError, Result};

/// One entry of the kit's supported-chain list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainRef {
    /// Numeric EVM chain id, when the entry is an EVM chain.
    pub chain_id: Option<u64>,
    /// Kit-assigned display name, e.g. "Ethereum Sepolia".
    pub name: String,
}

/// One side of a bridge request: a resolved supported chain.
#[derive(Debug, Clone)]
pub struct Endpoint {
    pub chain: ChainRef,
}

/// Input to the kit's single bridge-execution entry point.
#[derive(Debug, Clone)]
pub struct BridgeRequest {
    pub from: Endpoint,
    pub to: Endpoint,
    /// Decimal string as the user typed it, e.g. "1.5".
    pub amount: String,
}

/// The external bridging SDK.
#[async_trait]
pub trait BridgeKit: Send + Sync {
    /// Chains the kit can bridge between.
    fn supported_chains(&self) -> Vec<ChainRef>;

    /// Execute the whole bridge sequence as one indivisible call.
    ///
    /// Resolves to an opaque result payload, or rejects with the kit's own
    /// error message. There is no cancellation once issued.
    async fn bridge(&self, request: BridgeRequest) -> anyhow::Result<Value>;
}

/// Resolve a chain id against the kit's supported list.
///
/// Primary lookup is by numeric chain id. When that misses, fall back to a
/// name-substring search: "sepolia" entries that are really Base Sepolia
/// (84532) or Arbitrum Sepolia (421614) are excluded, and Arc is matched on
/// the "arc" substring. A fallback hit with the wrong numeric id is an error
/// rather than a silently wrong source chain.
pub fn resolve_chain(kit: &dyn BridgeKit, wanted_chain_id: u64) -> Result<ChainRef> {
    let supported = kit.supported_chains();

    if let Some(found) = supported
        .iter()
        .find(|c| c.chain_id == Some(wanted_chain_id))
    {
        return Ok(found.clone());
    }

    let by_name = supported.iter().find(|c| {
        let Some(id) = c.chain_id else { return false };
        let name = c.name.to_lowercase();
        match wanted_chain_id {
            SEPOLIA_CHAIN_ID => {
                if id == 84_532 || id == 421_614 {
                    return false;
                }
                (name.contains("ethereum") && name.contains("sepolia"))
                    || (name.contains("sepolia")
                        && !name.contains("base")
                        && !name.contains("arbitrum"))
            }
            ARC_CHAIN_ID => name.contains("arc"),
            _ => false,
        }
    });

    match by_name {
        Some(found) => {
            let actual = found.chain_id.unwrap_or_default();
            if actual != wanted_chain_id {
                return Err(BridgeKitError::ChainMismatch {
                    expected: wanted_chain_id,
                    actual,
                    name: found.name.clone(),
                });
            }
            Ok(found.clone())
        }
        None => Err(BridgeKitError::ChainNotSupported {
            name: chain_name(wanted_chain_id).to_string(),
            chain_id: wanted_chain_id,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ListKit(Vec<ChainRef>);

    #[async_trait]
    impl BridgeKit for ListKit {
        fn supported_chains(&self) -> Vec<ChainRef> {
            self.0.clone()
        }

        async fn bridge(&self, _request: BridgeRequest) -> anyhow::Result<Value> {
            unreachable!("resolution tests never bridge")
        }
    }

    fn chain(id: u64, name: &str) -> ChainRef {
        ChainRef {
            chain_id: Some(id),
            name: name.into(),
        }
    }

    #[test]
    fn test_resolve_by_numeric_id() {
        let kit = ListKit(vec![
            chain(84_532, "Base Sepolia"),
            chain(SEPOLIA_CHAIN_ID, "Ethereum Sepolia"),
        ]);
        let found = resolve_chain(&kit, SEPOLIA_CHAIN_ID).unwrap();
        assert_eq!(found.chain_id, Some(SEPOLIA_CHAIN_ID));
    }

    #[test]
    fn test_fallback_excludes_base_and_arbitrum_sepolia() {
        let kit = ListKit(vec![
            chain(84_532, "Base Sepolia"),
            chain(421_614, "Arbitrum Sepolia"),
        ]);
        let err = resolve_chain(&kit, SEPOLIA_CHAIN_ID).unwrap_err();
        assert!(matches!(err, BridgeKitError::ChainNotSupported { .. }));
    }

    #[test]
    fn test_sepolia_name_fallback_reports_the_wrong_id() {
        // An entry that reads like Ethereum Sepolia but carries another id is
        // surfaced as a mismatch, not silently used as the source chain.
        let kit = ListKit(vec![chain(11_155_420, "Ethereum Sepolia Fork")]);
        let err = resolve_chain(&kit, SEPOLIA_CHAIN_ID).unwrap_err();
        assert!(matches!(
            err,
            BridgeKitError::ChainMismatch {
                expected: SEPOLIA_CHAIN_ID,
                ..
            }
        ));
    }

    #[test]
    fn test_fallback_with_wrong_id_is_mismatch() {
        // Name matches "arc" but the numeric id is not the Arc testnet.
        let kit = ListKit(vec![chain(7777, "Arcadia Chain")]);
        let err = resolve_chain(&kit, ARC_CHAIN_ID).unwrap_err();
        assert!(matches!(err, BridgeKitError::ChainMismatch { actual: 7777, .. }));
    }

    #[test]
    fn test_non_evm_entries_skipped() {
        let kit = ListKit(vec![ChainRef {
            chain_id: None,
            name: "Solana Devnet".into(),
        }]);
        assert!(resolve_chain(&kit, SEPOLIA_CHAIN_ID).is_err());
    }
}
