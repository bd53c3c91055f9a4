//! Proof verification seam.
//!
//! The bridge does not know how proofs are built. It hands the transfer hash
//! and the relay's proof to the configured verifier contract and accepts the
//! verdict. A verifier that cannot be queried counts as a rejection.

use cosmwasm_std::{Addr, Binary, QuerierWrapper};

use common::{VerifierQueryMsg, VerifyProofResponse};

use crate::error::ContractError;

pub fn verify_proof(
    querier: &QuerierWrapper,
    verifier: &Addr,
    transfer_hash: &[u8; 32],
    proof: &Binary,
) -> Result<(), ContractError> {
    if proof.is_empty() {
        return Err(ContractError::ProofInvalid {
            reason: "empty proof".to_string(),
        });
    }

    let verdict: VerifyProofResponse = querier
        .query_wasm_smart(
            verifier,
            &VerifierQueryMsg::VerifyProof {
                transfer_hash: Binary::from(transfer_hash.to_vec()),
                proof: proof.clone(),
            },
        )
        .map_err(|e| ContractError::ProofInvalid {
            reason: format!("verifier query failed: {}", e),
        })?;

    if !verdict.valid {
        return Err(ContractError::ProofInvalid {
            reason: verdict
                .reason
                .unwrap_or_else(|| "rejected by verifier".to_string()),
        });
    }

    Ok(())
}
