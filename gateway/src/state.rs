use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Binary, Coin, Timestamp};
use cw_storage_plus::{Item, Map};

use common::TransferIntent;

pub const CONTRACT_NAME: &str = "crates.io:nft-bridge-gateway";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Intent handed over by a bridge instance
#[cw_serde]
pub struct OutboundMessage {
    /// Bridge contract that dispatched the intent
    pub sender: Addr,
    pub intent: TransferIntent,
    pub transfer_hash: Binary,
    /// Relay fee attached to the dispatch
    pub fee: Vec<Coin>,
    pub dispatched_at: Timestamp,
}

/// Attester's statement that a transfer happened on its source chain
#[cw_serde]
pub struct Attestation {
    /// Source chain transaction the proof must reference
    pub source_tx_hash: Binary,
    pub attester: Addr,
    pub attested_at: Timestamp,
}

pub const ADMIN: Item<Addr> = Item::new("admin");

pub const PAUSED: Item<bool> = Item::new("paused");

/// attester address => enabled
pub const ATTESTERS: Map<&Addr, bool> = Map::new("attesters");

/// bridge contract => chain id it serves. Only these may dispatch.
pub const BRIDGES: Map<&Addr, u64> = Map::new("bridges");

/// transfer hash => attestation
pub const ATTESTATIONS: Map<&[u8], Attestation> = Map::new("attestations");

/// Next outbound sequence number
pub const OUTBOUND_SEQ: Item<u64> = Item::new("outbound_seq");

/// sequence => outbound message
pub const OUTBOUND: Map<u64, OutboundMessage> = Map::new("outbound");
