//! Universal NFT Bridge Contract - Entry Points
//!
//! One instance runs per chain. The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_accept_admin, execute_acknowledge_transfer, execute_cancel_admin_proposal,
    execute_complete_transfer, execute_initiate_transfer, execute_mint, execute_pause,
    execute_propose_admin, execute_register_chain, execute_reject_transfer, execute_transfer_nft,
    execute_unpause, execute_update_chain, execute_update_config, register_chain,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_all_tokens, query_chain, query_chains, query_config, query_contract_info,
    query_has_completed, query_ledger_entries, query_ledger_entry, query_outbound_intent,
    query_outbound_intents, query_owner_of, query_pending_admin, query_required_fee,
    query_status, query_tokens_of_owner, query_transfer_hash,
};
use crate::state::{
    Config, Stats, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, NEXT_NONCE, NEXT_TOKEN_ID, STATS,
};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if msg.this_chain_id == 0 {
        return Err(ContractError::InvalidChainId { chain_id: 0 });
    }
    if msg.fee_denom.is_empty() {
        return Err(ContractError::InvalidFunds {
            reason: "fee denom cannot be empty".to_string(),
        });
    }

    // Validate addresses; the gateway doubles as verifier unless one is given
    let admin = deps.api.addr_validate(&msg.admin)?;
    let gateway = deps.api.addr_validate(&msg.gateway)?;
    let verifier = match msg.verifier {
        Some(verifier) => deps.api.addr_validate(&verifier)?,
        None => gateway.clone(),
    };

    let config = Config {
        admin,
        name: msg.name,
        symbol: msg.symbol,
        this_chain_id: msg.this_chain_id,
        role: msg.role,
        gateway,
        verifier,
        fee_denom: msg.fee_denom,
        min_fee: msg.min_fee,
        paused: false,
    };
    CONFIG.save(deps.storage, &config)?;

    let chain_count = msg.chains.len();
    for chain in msg.chains {
        register_chain(
            deps.storage,
            config.this_chain_id,
            chain.chain_id,
            chain.name,
            chain.min_fee,
        )?;
    }

    NEXT_TOKEN_ID.save(deps.storage, &0u64)?;
    NEXT_NONCE.save(deps.storage, &0u64)?;
    STATS.save(deps.storage, &Stats::default())?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("admin", config.admin)
        .add_attribute("this_chain_id", config.this_chain_id.to_string())
        .add_attribute("role", config.role.as_str())
        .add_attribute("gateway", config.gateway)
        .add_attribute("chain_count", chain_count.to_string()))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Token registry
        ExecuteMsg::Mint { owner } => execute_mint(deps, info, owner),
        ExecuteMsg::TransferNft {
            recipient,
            token_id,
            origin_chain_id,
        } => execute_transfer_nft(deps, info, recipient, token_id, origin_chain_id),

        // Outbound transfers
        ExecuteMsg::InitiateTransfer {
            token_id,
            origin_chain_id,
            destination_chain_id,
            recipient,
        } => execute_initiate_transfer(
            deps,
            env,
            info,
            token_id,
            origin_chain_id,
            destination_chain_id,
            recipient,
        ),
        ExecuteMsg::AcknowledgeTransfer { nonce, outcome } => {
            execute_acknowledge_transfer(deps, info, nonce, outcome)
        }

        // Inbound transfers
        ExecuteMsg::CompleteTransfer { intent, proof } => {
            execute_complete_transfer(deps, env, info, intent, proof)
        }
        ExecuteMsg::RejectTransfer { intent, reason } => {
            execute_reject_transfer(deps, env, info, intent, reason)
        }

        // Chain registry
        ExecuteMsg::RegisterChain {
            chain_id,
            name,
            min_fee,
        } => execute_register_chain(deps, info, chain_id, name, min_fee),
        ExecuteMsg::UpdateChain {
            chain_id,
            enabled,
            min_fee,
        } => execute_update_chain(deps, info, chain_id, enabled, min_fee),

        // Configuration
        ExecuteMsg::UpdateConfig {
            gateway,
            verifier,
            fee_denom,
            min_fee,
        } => execute_update_config(deps, info, gateway, verifier, fee_denom, min_fee),

        // Admin operations
        ExecuteMsg::Pause {} => execute_pause(deps, info),
        ExecuteMsg::Unpause {} => execute_unpause(deps, info),
        ExecuteMsg::ProposeAdmin { new_admin } => execute_propose_admin(deps, env, info, new_admin),
        ExecuteMsg::AcceptAdmin {} => execute_accept_admin(deps, env, info),
        ExecuteMsg::CancelAdminProposal {} => execute_cancel_admin_proposal(deps, info),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        // Core queries
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::ContractInfo {} => to_json_binary(&query_contract_info(deps)?),
        QueryMsg::Status {} => to_json_binary(&query_status(deps)?),
        QueryMsg::PendingAdmin {} => to_json_binary(&query_pending_admin(deps)?),

        // Token registry
        QueryMsg::OwnerOf {
            token_id,
            origin_chain_id,
        } => to_json_binary(&query_owner_of(deps, token_id, origin_chain_id)?),
        QueryMsg::TokensOfOwner {
            owner,
            start_after,
            limit,
        } => to_json_binary(&query_tokens_of_owner(deps, owner, start_after, limit)?),
        QueryMsg::AllTokens { start_after, limit } => {
            to_json_binary(&query_all_tokens(deps, start_after, limit)?)
        }

        // Outbound intents
        QueryMsg::OutboundIntent { nonce } => to_json_binary(&query_outbound_intent(deps, nonce)?),
        QueryMsg::OutboundIntents { start_after, limit } => {
            to_json_binary(&query_outbound_intents(deps, start_after, limit)?)
        }

        // Transfer ledger
        QueryMsg::LedgerEntry {
            source_chain_id,
            nonce,
        } => to_json_binary(&query_ledger_entry(deps, source_chain_id, nonce)?),
        QueryMsg::LedgerEntries {
            source_chain_id,
            start_after,
            limit,
        } => to_json_binary(&query_ledger_entries(
            deps,
            source_chain_id,
            start_after,
            limit,
        )?),
        QueryMsg::HasCompleted {
            source_chain_id,
            nonce,
        } => to_json_binary(&query_has_completed(deps, source_chain_id, nonce)?),

        // Helpers
        QueryMsg::TransferHash { intent } => to_json_binary(&query_transfer_hash(intent)?),
        QueryMsg::RequiredFee {
            destination_chain_id,
        } => to_json_binary(&query_required_fee(deps, destination_chain_id)?),

        // Chains
        QueryMsg::Chain { chain_id } => to_json_binary(&query_chain(deps, chain_id)?),
        QueryMsg::Chains { start_after, limit } => {
            to_json_binary(&query_chains(deps, start_after, limit)?)
        }
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("method", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
