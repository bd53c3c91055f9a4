//! Interface between the bridge contract and the relay gateway.
//!
//! The bridge only ever talks to the gateway through these messages:
//! - outbound: `GatewayExecuteMsg::Dispatch` carrying the burned intent and fee
//! - verification: `VerifierQueryMsg::VerifyProof` before any inbound mint
//! - relay verdicts: `BridgeRelayMsg`, sent by the gateway back into a bridge
//!
//! Any contract that accepts these JSON shapes can serve as gateway or verifier.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Binary;

use crate::intent::{TransferIntent, TransferOutcome};

/// Execute messages the bridge sends to the gateway
#[cw_serde]
pub enum GatewayExecuteMsg {
    /// Hand a burned intent to the relay. The fee is attached as funds.
    Dispatch { intent: TransferIntent },
}

/// Execute messages the gateway relays into a bridge. Wire-compatible with the
/// matching variants of the bridge's own `ExecuteMsg`.
#[cw_serde]
pub enum BridgeRelayMsg {
    /// Final outcome of an intent the bridge dispatched
    AcknowledgeTransfer {
        nonce: u64,
        outcome: TransferOutcome,
    },
    /// Inbound intent that can never complete on the bridge's chain
    RejectTransfer {
        intent: TransferIntent,
        reason: String,
    },
}

/// Queries the bridge issues against its proof verifier
#[cw_serde]
#[derive(QueryResponses)]
pub enum VerifierQueryMsg {
    /// Judge whether `proof` attests the intent committed to by `transfer_hash`
    #[returns(VerifyProofResponse)]
    VerifyProof {
        /// 32-byte transfer hash
        transfer_hash: Binary,
        /// Opaque proof supplied by the relay
        proof: Binary,
    },
}

/// Verifier verdict
#[cw_serde]
pub struct VerifyProofResponse {
    pub valid: bool,
    /// Why the proof was rejected, when it was
    pub reason: Option<String>,
}

impl VerifyProofResponse {
    pub fn valid() -> Self {
        Self {
            valid: true,
            reason: None,
        }
    }

    pub fn invalid(reason: impl Into<String>) -> Self {
        Self {
            valid: false,
            reason: Some(reason.into()),
        }
    }
}
