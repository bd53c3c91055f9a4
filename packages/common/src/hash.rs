//! Canonical transfer hash.
//!
//! Both chains and the gateway must derive the same 32-byte commitment for an
//! intent, since proofs attest to this value and the relay indexes by it.
//!
//! # Byte Layout (192 bytes total)
//! - Bytes 0-31:    origin_chain_id (uint256, big-endian, left-padded)
//! - Bytes 32-63:   token_id
//! - Bytes 64-95:   source_chain_id
//! - Bytes 96-127:  destination_chain_id
//! - Bytes 128-159: nonce
//! - Bytes 160-191: keccak256(recipient as UTF-8)
//!
//! The status field is not committed to.

use tiny_keccak::{Hasher, Keccak};

use crate::intent::TransferIntent;

/// Compute keccak256 hash of arbitrary data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

fn put_u64_slot(data: &mut [u8], slot: usize, value: u64) {
    // u64 goes into the last 8 bytes of the 32-byte slot
    let end = (slot + 1) * 32;
    data[end - 8..end].copy_from_slice(&value.to_be_bytes());
}

/// Compute the transfer hash of an intent.
pub fn compute_transfer_hash(intent: &TransferIntent) -> [u8; 32] {
    let mut data = [0u8; 192];

    put_u64_slot(&mut data, 0, intent.origin_chain_id);
    put_u64_slot(&mut data, 1, intent.token_id);
    put_u64_slot(&mut data, 2, intent.source_chain_id);
    put_u64_slot(&mut data, 3, intent.destination_chain_id);
    put_u64_slot(&mut data, 4, intent.nonce);
    data[160..192].copy_from_slice(&keccak256(intent.recipient.as_bytes()));

    keccak256(&data)
}

/// Convert bytes32 to hex string with 0x prefix
pub fn bytes32_to_hex(bytes: &[u8; 32]) -> String {
    format!("0x{}", hex::encode(bytes))
}
