//! Universal NFT Bridge Contract - Burn-and-Mint NFT Transfers Between Chains
//!
//! Every chain runs one instance of this contract. A token moves between chains
//! by being burned here and minted on the destination instance, keeping its
//! global identity `(origin_chain_id, token_id)` and its owner.
//!
//! # Outbound Flow (Burn)
//! 1. Holder calls `InitiateTransfer` with the relay fee attached
//! 2. Token is burned and a `Pending` transfer intent is recorded
//! 3. Intent and fee are dispatched to the gateway for the relay to pick up
//!
//! # Inbound Flow (Mint)
//! 1. Relay calls `CompleteTransfer` on the destination with the intent and a proof
//! 2. Proof is checked by the verifier contract before anything is written
//! 3. Transfer ledger is consulted; duplicates are reported as `replayed`
//! 4. Token is minted to the recipient and the ledger entry is written
//!
//! # Endpoint Roles
//! - `Origin` - anyone may genesis-mint new tokens with fresh ids
//! - `Connected` - tokens only arrive through completed transfers
//!
//! # Security
//! - Burn + intent record and mint + ledger record are each a single call
//! - Append-only transfer ledger keyed by (source chain, nonce) blocks replays
//! - Pluggable proof verifier, queried before any mutation
//! - Emergency pause and timelocked admin transfer

pub mod contract;
pub mod controller;
pub mod error;
mod execute;
pub mod ledger;
pub mod msg;
mod query;
pub mod registry;
pub mod state;
pub mod verifier;

pub use crate::error::ContractError;
pub use crate::state::EndpointRole;
pub use common::{TokenKey, TransferIntent, TransferStatus};
