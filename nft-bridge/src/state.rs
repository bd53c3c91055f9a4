//! State definitions for the NFT bridge contract
//!
//! Endpoint configuration, the chain registry, counters and the outbound intent
//! records live here. The token registry and the transfer ledger keep their own
//! storage in `registry.rs` and `ledger.rs`.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Timestamp, Uint128};
use cw_storage_plus::{Item, Map};

use common::TransferIntent;

use crate::error::ContractError;

// ============================================================================
// Core Configuration
// ============================================================================

/// Minting policy of this endpoint
#[cw_serde]
#[derive(Copy, Eq)]
pub enum EndpointRole {
    /// Tokens are created here; genesis mint is open to any caller
    Origin,
    /// Tokens only arrive through completed inbound transfers
    Connected,
}

impl EndpointRole {
    pub fn allows_genesis_mint(&self) -> bool {
        matches!(self, EndpointRole::Origin)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EndpointRole::Origin => "origin",
            EndpointRole::Connected => "connected",
        }
    }
}

/// Contract configuration
#[cw_serde]
pub struct Config {
    /// Admin address for contract management
    pub admin: Addr,
    /// Collection name
    pub name: String,
    /// Collection symbol
    pub symbol: String,
    /// Chain id of the chain this instance runs on
    pub this_chain_id: u64,
    /// Minting policy
    pub role: EndpointRole,
    /// Gateway contract receiving outbound intents
    pub gateway: Addr,
    /// Contract judging inbound proofs
    pub verifier: Addr,
    /// Denom the relay fee is paid in
    pub fee_denom: String,
    /// Default minimum relay fee per outbound transfer
    pub min_fee: Uint128,
    /// Whether bridging is currently paused
    pub paused: bool,
}

impl Config {
    pub fn ensure_admin(&self, sender: &Addr) -> Result<(), ContractError> {
        if *sender != self.admin {
            return Err(ContractError::unauthorized("admin only"));
        }
        Ok(())
    }

    /// Relay verdicts arrive through the configured gateway; the admin may
    /// stand in for it.
    pub fn ensure_relay(&self, sender: &Addr) -> Result<(), ContractError> {
        if *sender != self.gateway && *sender != self.admin {
            return Err(ContractError::unauthorized("gateway or admin only"));
        }
        Ok(())
    }
}

/// Pending admin change proposal
#[cw_serde]
pub struct PendingAdmin {
    /// Proposed new admin address
    pub new_address: Addr,
    /// Block time when the change can be executed
    pub execute_after: Timestamp,
}

/// Registered counterpart chain
#[cw_serde]
pub struct ChainConfig {
    /// Chain id
    pub chain_id: u64,
    /// Human-readable chain name
    pub name: String,
    /// Whether transfers to this chain are accepted
    pub enabled: bool,
    /// Fee override for transfers to this chain (None = use the default)
    pub min_fee: Option<Uint128>,
}

impl ChainConfig {
    pub fn required_fee(&self, default_fee: Uint128) -> Uint128 {
        self.min_fee.unwrap_or(default_fee)
    }
}

/// Bridge statistics
#[cw_serde]
#[derive(Default)]
pub struct Stats {
    /// Tokens created by genesis mint
    pub genesis_mints: u64,
    /// Tokens burned for outbound transfers
    pub outbound_transfers: u64,
    /// Tokens minted by completed inbound transfers
    pub inbound_completions: u64,
    /// Inbound transfers recorded as failed
    pub rejected_transfers: u64,
}

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:universal-nft-bridge";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// 7 days in seconds for admin change timelock
pub const ADMIN_TIMELOCK_DURATION: u64 = 604_800;

// ============================================================================
// Storage
// ============================================================================

/// Primary config storage
pub const CONFIG: Item<Config> = Item::new("config");

/// Pending admin proposal (if any)
pub const PENDING_ADMIN: Item<PendingAdmin> = Item::new("pending_admin");

/// Bridge statistics
pub const STATS: Item<Stats> = Item::new("stats");

/// Registered counterpart chains
/// Key: chain id, Value: ChainConfig
pub const CHAINS: Map<u64, ChainConfig> = Map::new("chains");

/// Next token id handed out by genesis mint
pub const NEXT_TOKEN_ID: Item<u64> = Item::new("next_token_id");

/// Next outbound nonce (global to this chain)
pub const NEXT_NONCE: Item<u64> = Item::new("next_nonce");

/// Outbound transfer intents created on this chain
/// Key: nonce, Value: TransferIntent
pub const OUTBOUND_INTENTS: Map<u64, TransferIntent> = Map::new("outbound_intents");
