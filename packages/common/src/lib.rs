//! Common - Shared Types for the Universal NFT Bridge Contracts
//!
//! This package holds the pieces both sides of a transfer must agree on:
//! the transfer intent, its canonical hash, and the message interface
//! between the bridge contract and the relay gateway.

pub mod gateway;
pub mod hash;
pub mod intent;

pub use gateway::{BridgeRelayMsg, GatewayExecuteMsg, VerifierQueryMsg, VerifyProofResponse};
pub use hash::{bytes32_to_hex, compute_transfer_hash, keccak256};
pub use intent::{TokenKey, TransferIntent, TransferOutcome, TransferStatus};
