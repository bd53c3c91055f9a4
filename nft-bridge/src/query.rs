//! Query handlers for the NFT bridge contract.
//!
//! This module contains all query message handlers for retrieving contract state.

use cosmwasm_std::{Binary, Deps, Order, StdError, StdResult, Uint128};
use cw_storage_plus::Bound;

use common::{bytes32_to_hex, TokenKey, TransferIntent, TransferStatus};

use crate::error::ContractError;
use crate::ledger;
use crate::msg::{
    ChainsResponse, ConfigResponse, ContractInfoResponse, HasCompletedResponse, IntentResponse,
    IntentsResponse, LedgerEntriesResponse, LedgerEntryResponse, OwnerOfResponse,
    PendingAdminResponse, RequiredFeeResponse, StatusResponse, TokensResponse,
    TransferHashResponse,
};
use crate::registry;
use crate::state::{
    ChainConfig, CHAINS, CONFIG, NEXT_NONCE, NEXT_TOKEN_ID, OUTBOUND_INTENTS, PENDING_ADMIN,
    STATS,
};

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 50;

fn to_std(err: ContractError) -> StdError {
    match err {
        ContractError::Std(e) => e,
        other => StdError::generic_err(other.to_string()),
    }
}

// ============================================================================
// Core Queries
// ============================================================================

/// Query contract configuration.
pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        admin: config.admin,
        this_chain_id: config.this_chain_id,
        role: config.role,
        gateway: config.gateway,
        verifier: config.verifier,
        fee_denom: config.fee_denom,
        min_fee: config.min_fee,
        paused: config.paused,
    })
}

pub fn query_contract_info(deps: Deps) -> StdResult<ContractInfoResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ContractInfoResponse {
        name: config.name,
        symbol: config.symbol,
    })
}

/// Query contract status summary.
pub fn query_status(deps: Deps) -> StdResult<StatusResponse> {
    let config = CONFIG.load(deps.storage)?;
    let stats = STATS.load(deps.storage)?;

    Ok(StatusResponse {
        paused: config.paused,
        role: config.role,
        this_chain_id: config.this_chain_id,
        token_counter: NEXT_TOKEN_ID.load(deps.storage)?,
        next_nonce: NEXT_NONCE.load(deps.storage)?,
        genesis_mints: stats.genesis_mints,
        outbound_transfers: stats.outbound_transfers,
        inbound_completions: stats.inbound_completions,
        rejected_transfers: stats.rejected_transfers,
    })
}

/// Query pending admin change.
pub fn query_pending_admin(deps: Deps) -> StdResult<Option<PendingAdminResponse>> {
    let pending = PENDING_ADMIN.may_load(deps.storage)?;
    Ok(pending.map(|p| PendingAdminResponse {
        new_address: p.new_address,
        execute_after: p.execute_after,
    }))
}

// ============================================================================
// Token Registry Queries
// ============================================================================

pub fn query_owner_of(
    deps: Deps,
    token_id: u64,
    origin_chain_id: Option<u64>,
) -> StdResult<OwnerOfResponse> {
    let config = CONFIG.load(deps.storage)?;
    let token = TokenKey::new(origin_chain_id.unwrap_or(config.this_chain_id), token_id);
    let owner = registry::owner_of(deps.storage, token).map_err(to_std)?;
    Ok(OwnerOfResponse { token, owner })
}

pub fn query_tokens_of_owner(
    deps: Deps,
    owner: String,
    start_after: Option<TokenKey>,
    limit: Option<u32>,
) -> StdResult<TokensResponse> {
    let owner = deps.api.addr_validate(&owner)?;
    let tokens = registry::tokens_of_owner(deps.storage, &owner, start_after, limit)?;
    Ok(TokensResponse { tokens })
}

pub fn query_all_tokens(
    deps: Deps,
    start_after: Option<TokenKey>,
    limit: Option<u32>,
) -> StdResult<TokensResponse> {
    let tokens = registry::all_tokens(deps.storage, start_after, limit)?;
    Ok(TokensResponse { tokens })
}

// ============================================================================
// Outbound Intent Queries
// ============================================================================

fn intent_response(intent: TransferIntent) -> IntentResponse {
    let transfer_hash = bytes32_to_hex(&intent.transfer_hash());
    IntentResponse {
        intent,
        transfer_hash,
    }
}

pub fn query_outbound_intent(deps: Deps, nonce: u64) -> StdResult<IntentResponse> {
    let intent = OUTBOUND_INTENTS
        .may_load(deps.storage, nonce)?
        .ok_or_else(|| to_std(ContractError::IntentNotFound { nonce }))?;
    Ok(intent_response(intent))
}

pub fn query_outbound_intents(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<IntentsResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);

    let intents = OUTBOUND_INTENTS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(_, intent)| intent_response(intent)))
        .collect::<StdResult<Vec<_>>>()?;

    Ok(IntentsResponse { intents })
}

// ============================================================================
// Ledger Queries
// ============================================================================

pub fn query_ledger_entry(
    deps: Deps,
    source_chain_id: u64,
    nonce: u64,
) -> StdResult<LedgerEntryResponse> {
    let entry = ledger::load_entry(deps.storage, source_chain_id, nonce)?;
    let status = entry
        .as_ref()
        .map(|e| e.status)
        .unwrap_or(TransferStatus::Pending);
    Ok(LedgerEntryResponse { entry, status })
}

pub fn query_ledger_entries(
    deps: Deps,
    source_chain_id: Option<u64>,
    start_after: Option<(u64, u64)>,
    limit: Option<u32>,
) -> StdResult<LedgerEntriesResponse> {
    let entries = ledger::entries(deps.storage, source_chain_id, start_after, limit)?;
    Ok(LedgerEntriesResponse { entries })
}

pub fn query_has_completed(
    deps: Deps,
    source_chain_id: u64,
    nonce: u64,
) -> StdResult<HasCompletedResponse> {
    Ok(HasCompletedResponse {
        completed: ledger::has_completed(deps.storage, source_chain_id, nonce)?,
    })
}

// ============================================================================
// Helper Queries
// ============================================================================

/// Compute the transfer hash of an arbitrary intent (relay tooling).
pub fn query_transfer_hash(intent: TransferIntent) -> StdResult<TransferHashResponse> {
    let hash = intent.transfer_hash();
    Ok(TransferHashResponse {
        transfer_hash: Binary::from(hash.to_vec()),
        hex: bytes32_to_hex(&hash),
    })
}

/// Fee required to initiate a transfer to `destination_chain_id`.
pub fn query_required_fee(deps: Deps, destination_chain_id: u64) -> StdResult<RequiredFeeResponse> {
    let config = CONFIG.load(deps.storage)?;
    let chain = CHAINS
        .may_load(deps.storage, destination_chain_id)?
        .ok_or_else(|| {
            to_std(ContractError::ChainNotRegistered {
                chain_id: destination_chain_id,
            })
        })?;
    let amount: Uint128 = chain.required_fee(config.min_fee);
    Ok(RequiredFeeResponse {
        denom: config.fee_denom,
        amount,
    })
}

// ============================================================================
// Chain Queries
// ============================================================================

pub fn query_chain(deps: Deps, chain_id: u64) -> StdResult<ChainConfig> {
    CHAINS
        .may_load(deps.storage, chain_id)?
        .ok_or_else(|| to_std(ContractError::ChainNotRegistered { chain_id }))
}

pub fn query_chains(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<ChainsResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);

    let chains = CHAINS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(_, chain)| chain))
        .collect::<StdResult<Vec<_>>>()?;

    Ok(ChainsResponse { chains })
}
