//! Outbound transfer handlers (burn on this chain).
//!
//! An outbound transfer burns the token here, records the intent under the
//! next nonce and hands it to the gateway together with the relay fee. The
//! gateway call is a plain message, so a gateway failure reverts the burn.

use cosmwasm_std::{
    to_json_binary, Coin, CosmosMsg, DepsMut, Env, Event, MessageInfo, Response, StdError, Uint128,
    WasmMsg,
};

use common::{bytes32_to_hex, GatewayExecuteMsg, TokenKey, TransferIntent, TransferStatus};

use crate::controller::{BurnAuthority, Controller};
use crate::error::ContractError;
use crate::msg::TransferOutcome;
use crate::registry::is_null_address;
use crate::state::{Config, CHAINS, CONFIG, NEXT_NONCE, OUTBOUND_INTENTS, STATS};

/// Burn a token and emit a transfer intent for `destination_chain_id`.
pub fn execute_initiate_transfer(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    token_id: u64,
    origin_chain_id: Option<u64>,
    destination_chain_id: u64,
    recipient: Option<String>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if config.paused {
        return Err(ContractError::BridgePaused);
    }

    let controller = Controller::new(&config);
    let key = TokenKey::new(origin_chain_id.unwrap_or(config.this_chain_id), token_id);
    controller.ensure_holder(deps.storage, &info.sender, key)?;

    // Check destination chain
    if destination_chain_id == config.this_chain_id {
        return Err(ContractError::InvalidDestination {
            chain_id: destination_chain_id,
            reason: "destination is this chain".to_string(),
        });
    }
    let chain = CHAINS
        .may_load(deps.storage, destination_chain_id)?
        .ok_or(ContractError::InvalidDestination {
            chain_id: destination_chain_id,
            reason: "chain is not registered".to_string(),
        })?;
    if !chain.enabled {
        return Err(ContractError::InvalidDestination {
            chain_id: destination_chain_id,
            reason: "chain is disabled".to_string(),
        });
    }

    // The recipient lives on another chain, so only the null check applies here
    let recipient = recipient.unwrap_or_else(|| info.sender.to_string());
    if is_null_address(&recipient) {
        return Err(ContractError::InvalidRecipient {
            reason: "recipient is the null address".to_string(),
        });
    }

    let fee = collect_fee(&config, &info, chain.required_fee(config.min_fee))?;

    let nonce = NEXT_NONCE.load(deps.storage)?;
    let next_nonce = nonce
        .checked_add(1)
        .ok_or_else(|| StdError::generic_err("nonce space exhausted"))?;
    NEXT_NONCE.save(deps.storage, &next_nonce)?;
    if OUTBOUND_INTENTS.has(deps.storage, nonce) {
        return Err(ContractError::AlreadyRecorded {
            source_chain_id: config.this_chain_id,
            nonce,
        });
    }

    controller.burn(deps.storage, key, BurnAuthority::Holder(&info.sender))?;

    let intent = TransferIntent {
        token_id: key.token_id,
        origin_chain_id: key.origin_chain_id,
        source_chain_id: config.this_chain_id,
        destination_chain_id,
        recipient: recipient.clone(),
        nonce,
        status: TransferStatus::Pending,
    };
    OUTBOUND_INTENTS.save(deps.storage, nonce, &intent)?;

    let mut stats = STATS.load(deps.storage)?;
    stats.outbound_transfers += 1;
    STATS.save(deps.storage, &stats)?;

    let funds = if fee.is_zero() {
        vec![]
    } else {
        vec![Coin {
            denom: config.fee_denom.clone(),
            amount: fee,
        }]
    };
    let dispatch = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: config.gateway.to_string(),
        msg: to_json_binary(&GatewayExecuteMsg::Dispatch {
            intent: intent.clone(),
        })?,
        funds,
    });

    let transfer_hash = bytes32_to_hex(&intent.transfer_hash());
    let event = Event::new("nft_transfer_initiated")
        .add_attribute("nonce", nonce.to_string())
        .add_attribute("token_id", intent.token_id.to_string())
        .add_attribute("origin_chain_id", intent.origin_chain_id.to_string())
        .add_attribute("source_chain_id", intent.source_chain_id.to_string())
        .add_attribute("destination_chain_id", destination_chain_id.to_string())
        .add_attribute("recipient", recipient.clone())
        .add_attribute("transfer_hash", transfer_hash.clone());

    Ok(Response::new()
        .add_message(dispatch)
        .add_event(event)
        .add_attribute("method", "initiate_transfer")
        .add_attribute("nonce", nonce.to_string())
        .add_attribute("sender", info.sender)
        .add_attribute("recipient", recipient)
        .add_attribute("token_id", key.token_id.to_string())
        .add_attribute("origin_chain_id", key.origin_chain_id.to_string())
        .add_attribute("destination_chain_id", destination_chain_id.to_string())
        .add_attribute("fee", fee.to_string())
        .add_attribute("transfer_hash", transfer_hash))
}

/// Check the attached funds against the required fee and return the amount
/// forwarded to the gateway. Overpayment is forwarded as-is.
fn collect_fee(
    config: &Config,
    info: &MessageInfo,
    required: Uint128,
) -> Result<Uint128, ContractError> {
    let mut attached = Uint128::zero();
    for coin in &info.funds {
        if coin.denom != config.fee_denom {
            return Err(ContractError::InvalidFunds {
                reason: format!(
                    "fee must be paid in {}, got {}",
                    config.fee_denom, coin.denom
                ),
            });
        }
        attached = attached.checked_add(coin.amount)?;
    }

    if attached < required {
        return Err(ContractError::InsufficientFee {
            required,
            attached,
            denom: config.fee_denom.clone(),
        });
    }

    Ok(attached)
}

/// Record the destination's verdict on an outbound intent.
///
/// A failed transfer is final; the burned token is not restored here.
pub fn execute_acknowledge_transfer(
    deps: DepsMut,
    info: MessageInfo,
    nonce: u64,
    outcome: TransferOutcome,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    config.ensure_relay(&info.sender)?;

    let mut intent = OUTBOUND_INTENTS
        .may_load(deps.storage, nonce)?
        .ok_or(ContractError::IntentNotFound { nonce })?;
    if intent.status.is_terminal() {
        return Err(ContractError::IntentFinalized {
            nonce,
            status: intent.status.as_str().to_string(),
        });
    }

    let mut response = Response::new()
        .add_attribute("method", "acknowledge_transfer")
        .add_attribute("nonce", nonce.to_string());

    intent.status = match outcome {
        TransferOutcome::Completed => TransferStatus::Completed,
        TransferOutcome::Failed { reason } => {
            response = response.add_attribute("reason", reason);
            TransferStatus::Failed
        }
    };
    OUTBOUND_INTENTS.save(deps.storage, nonce, &intent)?;

    Ok(response.add_attribute("status", intent.status.as_str()))
}
