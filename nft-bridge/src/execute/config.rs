//! Configuration management handlers.
//!
//! This module handles:
//! - Chain registry (register/update)
//! - Gateway, verifier and fee parameters

use cosmwasm_std::{DepsMut, MessageInfo, Response, Storage, Uint128};

use crate::error::ContractError;
use crate::state::{ChainConfig, CHAINS, CONFIG};

// ============================================================================
// Chain Management
// ============================================================================

/// Store a new counterpart chain. Shared with instantiate.
pub(crate) fn register_chain(
    storage: &mut dyn Storage,
    this_chain_id: u64,
    chain_id: u64,
    name: String,
    min_fee: Option<Uint128>,
) -> Result<ChainConfig, ContractError> {
    if chain_id == 0 || chain_id == this_chain_id {
        return Err(ContractError::InvalidChainId { chain_id });
    }
    if CHAINS.has(storage, chain_id) {
        return Err(ContractError::ChainAlreadyRegistered { chain_id });
    }

    let chain = ChainConfig {
        chain_id,
        name,
        enabled: true,
        min_fee,
    };
    CHAINS.save(storage, chain_id, &chain)?;
    Ok(chain)
}

/// Register a counterpart chain.
pub fn execute_register_chain(
    deps: DepsMut,
    info: MessageInfo,
    chain_id: u64,
    name: String,
    min_fee: Option<Uint128>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    config.ensure_admin(&info.sender)?;

    let chain = register_chain(deps.storage, config.this_chain_id, chain_id, name, min_fee)?;

    Ok(Response::new()
        .add_attribute("method", "register_chain")
        .add_attribute("chain_id", chain_id.to_string())
        .add_attribute("name", chain.name))
}

/// Update an existing chain configuration.
pub fn execute_update_chain(
    deps: DepsMut,
    info: MessageInfo,
    chain_id: u64,
    enabled: Option<bool>,
    min_fee: Option<Uint128>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    config.ensure_admin(&info.sender)?;

    let mut chain = CHAINS
        .may_load(deps.storage, chain_id)?
        .ok_or(ContractError::ChainNotRegistered { chain_id })?;

    if let Some(e) = enabled {
        chain.enabled = e;
    }
    if let Some(fee) = min_fee {
        chain.min_fee = Some(fee);
    }

    CHAINS.save(deps.storage, chain_id, &chain)?;

    Ok(Response::new()
        .add_attribute("method", "update_chain")
        .add_attribute("chain_id", chain_id.to_string())
        .add_attribute("enabled", chain.enabled.to_string()))
}

// ============================================================================
// Bridge Configuration
// ============================================================================

/// Update gateway, verifier and fee parameters.
pub fn execute_update_config(
    deps: DepsMut,
    info: MessageInfo,
    gateway: Option<String>,
    verifier: Option<String>,
    fee_denom: Option<String>,
    min_fee: Option<Uint128>,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    config.ensure_admin(&info.sender)?;

    if let Some(gateway) = gateway {
        config.gateway = deps.api.addr_validate(&gateway)?;
    }
    if let Some(verifier) = verifier {
        config.verifier = deps.api.addr_validate(&verifier)?;
    }
    if let Some(denom) = fee_denom {
        if denom.is_empty() {
            return Err(ContractError::InvalidFunds {
                reason: "fee denom cannot be empty".to_string(),
            });
        }
        config.fee_denom = denom;
    }
    if let Some(fee) = min_fee {
        config.min_fee = fee;
    }

    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "update_config")
        .add_attribute("gateway", config.gateway)
        .add_attribute("verifier", config.verifier)
        .add_attribute("fee_denom", config.fee_denom)
        .add_attribute("min_fee", config.min_fee.to_string()))
}
