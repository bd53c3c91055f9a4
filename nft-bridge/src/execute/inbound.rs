//! Inbound transfer handlers (mint on this chain).
//!
//! Preconditions for completing a transfer are checked in a fixed order:
//! proof, ledger status, pause, destination, recipient. Nothing is written
//! until all of them hold. A completed transfer reports `replayed` even while
//! the bridge is paused.

use cosmwasm_std::{Binary, DepsMut, Env, MessageInfo, Response};

use common::{bytes32_to_hex, TransferIntent, TransferStatus};

use crate::controller::{validate_recipient, Controller, InboundMint, MintAuthority};
use crate::error::ContractError;
use crate::ledger;
use crate::state::{CONFIG, STATS};
use crate::verifier::verify_proof;

/// Complete an inbound transfer.
///
/// Resubmitting a completed transfer succeeds without side effects and is
/// marked with `outcome = replayed`, so relays can retry blindly.
pub fn execute_complete_transfer(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    intent: TransferIntent,
    proof: Binary,
) -> Result<Response, ContractError> {
    match complete_transfer(deps, env, info, &intent, &proof) {
        Err(ContractError::ReplayedTransfer {
            source_chain_id,
            nonce,
        }) => Ok(Response::new()
            .add_attribute("method", "complete_transfer")
            .add_attribute("outcome", "replayed")
            .add_attribute("source_chain_id", source_chain_id.to_string())
            .add_attribute("nonce", nonce.to_string())),
        other => other,
    }
}

fn complete_transfer(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    intent: &TransferIntent,
    proof: &Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    let transfer_hash = intent.transfer_hash();
    verify_proof(&deps.querier, &config.verifier, &transfer_hash, proof)?;

    if let Some(entry) = ledger::load_entry(deps.storage, intent.source_chain_id, intent.nonce)? {
        return Err(match entry.status {
            TransferStatus::Failed => ContractError::TransferFailed {
                source_chain_id: intent.source_chain_id,
                nonce: intent.nonce,
            },
            _ => ContractError::ReplayedTransfer {
                source_chain_id: intent.source_chain_id,
                nonce: intent.nonce,
            },
        });
    }

    if config.paused {
        return Err(ContractError::BridgePaused);
    }

    if intent.destination_chain_id != config.this_chain_id {
        return Err(ContractError::WrongDestination {
            expected: config.this_chain_id,
            got: intent.destination_chain_id,
        });
    }

    let recipient = validate_recipient(deps.api, &intent.recipient)?;

    let token = Controller::new(&config).mint(
        deps.storage,
        &recipient,
        MintAuthority::InboundCompletion(InboundMint::new(intent.token_key())),
    )?;
    ledger::record_completed(deps.storage, env.block.time, intent)?;

    let mut stats = STATS.load(deps.storage)?;
    stats.inbound_completions += 1;
    STATS.save(deps.storage, &stats)?;

    Ok(Response::new()
        .add_attribute("method", "complete_transfer")
        .add_attribute("outcome", "completed")
        .add_attribute("relayer", info.sender)
        .add_attribute("recipient", recipient)
        .add_attribute("token_id", token.token_id.to_string())
        .add_attribute("origin_chain_id", token.origin_chain_id.to_string())
        .add_attribute("source_chain_id", intent.source_chain_id.to_string())
        .add_attribute("nonce", intent.nonce.to_string())
        .add_attribute("transfer_hash", bytes32_to_hex(&transfer_hash)))
}

/// Record an inbound transfer as permanently failed.
///
/// Used for intents that can never complete here (forged, misrouted, bad
/// recipient). Later completion attempts fail with `TransferFailed`.
pub fn execute_reject_transfer(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    intent: TransferIntent,
    reason: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    config.ensure_relay(&info.sender)?;

    let entry = ledger::record_failed(deps.storage, env.block.time, &intent, reason.clone())?;

    let mut stats = STATS.load(deps.storage)?;
    stats.rejected_transfers += 1;
    STATS.save(deps.storage, &stats)?;

    Ok(Response::new()
        .add_attribute("method", "reject_transfer")
        .add_attribute("source_chain_id", entry.source_chain_id.to_string())
        .add_attribute("nonce", entry.nonce.to_string())
        .add_attribute("reason", reason))
}
