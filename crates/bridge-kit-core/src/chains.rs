//! Network and token configuration constants.
//!
//! Chain ids, USDC contract addresses, RPC fallback lists, and explorer URLs
//! are fixed configuration, not computed. Only two networks are wired up:
//! Ethereum Sepolia and Arc Testnet.

use serde::Serialize;

/// Ethereum Sepolia chain id.
pub const SEPOLIA_CHAIN_ID: u64 = 11_155_111;

/// Arc Testnet chain id.
pub const ARC_CHAIN_ID: u64 = 5_042_002;

/// Ordered RPC fallback endpoints for Sepolia balance queries.
pub const SEPOLIA_RPC_URLS: &[&str] = &[
    "https://ethereum-sepolia-rpc.publicnode.com",
    "https://rpc.sepolia.org",
    "https://sepolia.infura.io/v3/9aa3d95b3bc440fa88ea12eaa4456161",
];

/// Ordered RPC fallback endpoints for Arc Testnet balance queries.
pub const ARC_RPC_URLS: &[&str] = &[
    "https://rpc.testnet.arc.network/",
    "https://rpc.testnet.arc.network",
];

/// A bridgeable token's on-chain description.
#[derive(Debug, Clone, Serialize)]
pub struct TokenInfo {
    pub symbol: &'static str,
    pub name: &'static str,
    pub decimals: u32,
    pub contract_address: &'static str,
}

/// USDC as deployed on Sepolia for the bridging kit.
pub const SEPOLIA_USDC: TokenInfo = TokenInfo {
    symbol: "USDC",
    name: "USD Coin",
    decimals: 6,
    contract_address: "0x1c7D4B196Cb0C7B01d743Fbc6116a902379C7238",
};

/// USDC as deployed on Arc Testnet.
pub const ARC_USDC: TokenInfo = TokenInfo {
    symbol: "USDC",
    name: "USD Coin",
    decimals: 6,
    contract_address: "0x3600000000000000000000000000000000000000",
};

/// Look up the USDC token description for a chain id.
pub fn usdc_for_chain(chain_id: u64) -> Option<&'static TokenInfo> {
    match chain_id {
        SEPOLIA_CHAIN_ID => Some(&SEPOLIA_USDC),
        ARC_CHAIN_ID => Some(&ARC_USDC),
        _ => None,
    }
}

/// RPC fallback list for a chain id.
pub fn rpc_urls_for_chain(chain_id: u64) -> Option<&'static [&'static str]> {
    match chain_id {
        SEPOLIA_CHAIN_ID => Some(SEPOLIA_RPC_URLS),
        ARC_CHAIN_ID => Some(ARC_RPC_URLS),
        _ => None,
    }
}

/// Human-readable network name for a chain id.
pub fn chain_name(chain_id: u64) -> &'static str {
    match chain_id {
        SEPOLIA_CHAIN_ID => "Ethereum Sepolia",
        ARC_CHAIN_ID => "Arc Testnet",
        _ => "Unknown",
    }
}

/// Block-explorer base URL for a chain id.
pub fn explorer_base_url(chain_id: u64) -> Option<&'static str> {
    match chain_id {
        SEPOLIA_CHAIN_ID => Some("https://sepolia.etherscan.io"),
        ARC_CHAIN_ID => Some("https://testnet.arcscan.app"),
        _ => None,
    }
}

/// Direction of one bridge attempt. Fixed once a transfer starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Direction {
    SepoliaToArc,
    ArcToSepolia,
}

impl Direction {
    /// Source chain id for this direction.
    pub fn source(&self) -> u64 {
        match self {
            Self::SepoliaToArc => SEPOLIA_CHAIN_ID,
            Self::ArcToSepolia => ARC_CHAIN_ID,
        }
    }

    /// Destination chain id for this direction.
    pub fn destination(&self) -> u64 {
        match self {
            Self::SepoliaToArc => ARC_CHAIN_ID,
            Self::ArcToSepolia => SEPOLIA_CHAIN_ID,
        }
    }

    pub fn reverse(&self) -> Self {
        match self {
            Self::SepoliaToArc => Self::ArcToSepolia,
            Self::ArcToSepolia => Self::SepoliaToArc,
        }
    }

    /// Pick the direction whose source matches the wallet's connected chain,
    /// if the chain is one of the two configured networks.
    pub fn detect(connected_chain_id: u64) -> Option<Self> {
        match connected_chain_id {
            SEPOLIA_CHAIN_ID => Some(Self::SepoliaToArc),
            ARC_CHAIN_ID => Some(Self::ArcToSepolia),
            _ => None,
        }
    }

    /// Stable identifier used in logs and CLI arguments.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SepoliaToArc => "sepolia-to-arc",
            Self::ArcToSepolia => "arc-to-sepolia",
        }
    }

    /// Resolve a direction by its stable identifier.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sepolia-to-arc" => Some(Self::SepoliaToArc),
            "arc-to-sepolia" => Some(Self::ArcToSepolia),
            _ => None,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} -> {}",
            chain_name(self.source()),
            chain_name(self.destination())
        )
    }
}
