//! Token handlers that stay on this chain.

use cosmwasm_std::{DepsMut, MessageInfo, Response};

use common::TokenKey;

use crate::controller::{validate_recipient, Controller, MintAuthority};
use crate::error::ContractError;
use crate::registry;
use crate::state::{CONFIG, STATS};

/// Genesis mint. Open to any caller on origin endpoints.
pub fn execute_mint(
    deps: DepsMut,
    info: MessageInfo,
    owner: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if config.paused {
        return Err(ContractError::BridgePaused);
    }

    let owner = validate_recipient(deps.api, &owner)?;
    let token = Controller::new(&config).mint(deps.storage, &owner, MintAuthority::Genesis)?;

    let mut stats = STATS.load(deps.storage)?;
    stats.genesis_mints += 1;
    STATS.save(deps.storage, &stats)?;

    Ok(Response::new()
        .add_attribute("method", "mint")
        .add_attribute("minter", info.sender)
        .add_attribute("owner", token.owner)
        .add_attribute("token_id", token.token_id.to_string())
        .add_attribute("origin_chain_id", token.origin_chain_id.to_string()))
}

/// Move a token between owners on this chain. Allowed while paused.
pub fn execute_transfer_nft(
    deps: DepsMut,
    info: MessageInfo,
    recipient: String,
    token_id: u64,
    origin_chain_id: Option<u64>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    let recipient = validate_recipient(deps.api, &recipient)?;
    let key = TokenKey::new(origin_chain_id.unwrap_or(config.this_chain_id), token_id);
    registry::transfer(deps.storage, key, &info.sender, &recipient)?;

    Ok(Response::new()
        .add_attribute("method", "transfer_nft")
        .add_attribute("sender", info.sender)
        .add_attribute("recipient", recipient)
        .add_attribute("token", key.to_string()))
}
