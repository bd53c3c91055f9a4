use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Binary, Uint128};

use common::{TransferIntent, TransferOutcome, VerifyProofResponse};

use crate::state::{Attestation, OutboundMessage};

#[cw_serde]
pub struct InstantiateMsg {
    /// Admin who manages attesters and pausing
    pub admin: String,
    /// Initial set of attesters
    pub attesters: Vec<String>,
}

/// Execute messages. `Dispatch` must stay wire-compatible with
/// `common::GatewayExecuteMsg`, which is what bridge instances send.
#[cw_serde]
pub enum ExecuteMsg {
    /// Registered bridge: record an outbound intent, with the relay fee attached
    Dispatch { intent: TransferIntent },
    /// Attester: vouch for an inbound transfer
    Attest {
        transfer_hash: Binary,
        source_tx_hash: Binary,
    },
    /// Attester: forward the destination's verdict to the source bridge
    RelayAcknowledgement {
        bridge: String,
        nonce: u64,
        outcome: TransferOutcome,
    },
    /// Attester: mark an inbound intent as never completable on `bridge`
    RelayRejection {
        bridge: String,
        intent: TransferIntent,
        reason: String,
    },
    /// Admin: allow a bridge instance serving `chain_id` to dispatch
    RegisterBridge { address: String, chain_id: u64 },
    /// Admin: revoke a bridge instance
    RemoveBridge { address: String },
    /// Admin: add an attester
    AddAttester { address: String },
    /// Admin: remove an attester
    RemoveAttester { address: String },
    /// Admin: stop accepting dispatches, attestations and relays
    SetPaused { paused: bool },
    /// Admin: send collected relay fees out (whole balance when `amount` is unset)
    WithdrawFees {
        denom: String,
        amount: Option<Uint128>,
        recipient: String,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Proof check used by bridge instances. Must stay wire-compatible with
    /// `common::VerifierQueryMsg`.
    #[returns(VerifyProofResponse)]
    VerifyProof {
        transfer_hash: Binary,
        proof: Binary,
    },
    /// Returns the outbound message with this sequence number
    #[returns(OutboundMessage)]
    Outbound { sequence: u64 },
    /// Returns outbound messages in dispatch order
    #[returns(OutboundListResponse)]
    OutboundList {
        start_after: Option<u64>,
        limit: Option<u32>,
    },
    /// Returns the attestation for a transfer hash, if any
    #[returns(Option<Attestation>)]
    Attestation { transfer_hash: Binary },
    /// Returns the registered bridge instances
    #[returns(BridgesResponse)]
    Bridges {},
    /// Returns the admin address
    #[returns(AdminResponse)]
    Admin {},
    /// Returns whether the gateway is paused
    #[returns(PausedResponse)]
    Paused {},
}

#[cw_serde]
pub struct OutboundEntry {
    pub sequence: u64,
    pub message: OutboundMessage,
}

#[cw_serde]
pub struct OutboundListResponse {
    pub messages: Vec<OutboundEntry>,
}

#[cw_serde]
pub struct BridgeEntry {
    pub address: String,
    pub chain_id: u64,
}

#[cw_serde]
pub struct BridgesResponse {
    pub bridges: Vec<BridgeEntry>,
}

#[cw_serde]
pub struct AdminResponse {
    pub admin: String,
}

#[cw_serde]
pub struct PausedResponse {
    pub paused: bool,
}
