use cosmwasm_std::{
    entry_point, to_json_binary, Addr, BankMsg, Binary, Coin, Deps, DepsMut, Env, MessageInfo,
    Order, Response, StdError, StdResult, Uint128, WasmMsg,
};
use cw2::set_contract_version;
use cw_storage_plus::Bound;

use common::{bytes32_to_hex, BridgeRelayMsg, TransferIntent, VerifyProofResponse};

use crate::error::ContractError;
use crate::msg::{
    AdminResponse, BridgeEntry, BridgesResponse, ExecuteMsg, InstantiateMsg, OutboundEntry,
    OutboundListResponse, PausedResponse, QueryMsg,
};
use crate::state::{
    Attestation, OutboundMessage, ADMIN, ATTESTATIONS, ATTESTERS, BRIDGES, CONTRACT_NAME,
    CONTRACT_VERSION, OUTBOUND, OUTBOUND_SEQ, PAUSED,
};

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 50;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let admin = deps.api.addr_validate(&msg.admin)?;
    ADMIN.save(deps.storage, &admin)?;
    PAUSED.save(deps.storage, &false)?;
    OUTBOUND_SEQ.save(deps.storage, &0u64)?;

    for a in &msg.attesters {
        let attester = deps.api.addr_validate(a)?;
        ATTESTERS.save(deps.storage, &attester, &true)?;
    }

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("admin", admin)
        .add_attribute("attester_count", msg.attesters.len().to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Dispatch { intent } => execute_dispatch(deps, env, info, intent),
        ExecuteMsg::Attest {
            transfer_hash,
            source_tx_hash,
        } => execute_attest(deps, env, info, transfer_hash, source_tx_hash),
        ExecuteMsg::RelayAcknowledgement {
            bridge,
            nonce,
            outcome,
        } => execute_relay(
            deps,
            info,
            bridge,
            "relay_acknowledgement",
            BridgeRelayMsg::AcknowledgeTransfer { nonce, outcome },
        ),
        ExecuteMsg::RelayRejection {
            bridge,
            intent,
            reason,
        } => execute_relay(
            deps,
            info,
            bridge,
            "relay_rejection",
            BridgeRelayMsg::RejectTransfer { intent, reason },
        ),
        ExecuteMsg::RegisterBridge { address, chain_id } => {
            execute_register_bridge(deps, info, address, chain_id)
        }
        ExecuteMsg::RemoveBridge { address } => execute_remove_bridge(deps, info, address),
        ExecuteMsg::AddAttester { address } => execute_set_attester(deps, info, address, true),
        ExecuteMsg::RemoveAttester { address } => execute_set_attester(deps, info, address, false),
        ExecuteMsg::SetPaused { paused } => execute_set_paused(deps, info, paused),
        ExecuteMsg::WithdrawFees {
            denom,
            amount,
            recipient,
        } => execute_withdraw_fees(deps, env, info, denom, amount, recipient),
    }
}

fn ensure_admin(deps: Deps, sender: &Addr) -> Result<(), ContractError> {
    if *sender != ADMIN.load(deps.storage)? {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

fn ensure_attester(deps: Deps, sender: &Addr) -> Result<(), ContractError> {
    let is_attester = ATTESTERS.may_load(deps.storage, sender)?.unwrap_or(false);
    if !is_attester {
        return Err(ContractError::NotAttester {
            sender: sender.to_string(),
        });
    }
    Ok(())
}

fn ensure_not_paused(deps: Deps) -> Result<(), ContractError> {
    if PAUSED.load(deps.storage)? {
        return Err(ContractError::Paused);
    }
    Ok(())
}

fn execute_dispatch(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    intent: TransferIntent,
) -> Result<Response, ContractError> {
    ensure_not_paused(deps.as_ref())?;

    let chain_id = BRIDGES
        .may_load(deps.storage, &info.sender)?
        .ok_or_else(|| ContractError::UnknownBridge {
            sender: info.sender.to_string(),
        })?;
    if intent.source_chain_id != chain_id {
        return Err(ContractError::SourceChainMismatch {
            expected: chain_id,
            got: intent.source_chain_id,
        });
    }

    let sequence = OUTBOUND_SEQ.load(deps.storage)?;
    let next_sequence = sequence
        .checked_add(1)
        .ok_or_else(|| StdError::generic_err("outbound sequence exhausted"))?;
    OUTBOUND_SEQ.save(deps.storage, &next_sequence)?;

    let transfer_hash = intent.transfer_hash();
    let message = OutboundMessage {
        sender: info.sender.clone(),
        intent,
        transfer_hash: Binary::from(transfer_hash.to_vec()),
        fee: info.funds,
        dispatched_at: env.block.time,
    };
    OUTBOUND.save(deps.storage, sequence, &message)?;

    Ok(Response::new()
        .add_attribute("action", "dispatch")
        .add_attribute("sequence", sequence.to_string())
        .add_attribute("sender", info.sender)
        .add_attribute(
            "destination_chain_id",
            message.intent.destination_chain_id.to_string(),
        )
        .add_attribute("nonce", message.intent.nonce.to_string())
        .add_attribute("transfer_hash", bytes32_to_hex(&transfer_hash)))
}

fn execute_attest(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    transfer_hash: Binary,
    source_tx_hash: Binary,
) -> Result<Response, ContractError> {
    ensure_not_paused(deps.as_ref())?;
    ensure_attester(deps.as_ref(), &info.sender)?;

    if transfer_hash.len() != 32 {
        return Err(ContractError::InvalidTransferHash {
            len: transfer_hash.len(),
        });
    }
    if ATTESTATIONS.has(deps.storage, transfer_hash.as_slice()) {
        return Err(ContractError::AlreadyAttested {
            transfer_hash: transfer_hash.to_base64(),
        });
    }

    ATTESTATIONS.save(
        deps.storage,
        transfer_hash.as_slice(),
        &Attestation {
            source_tx_hash,
            attester: info.sender.clone(),
            attested_at: env.block.time,
        },
    )?;

    Ok(Response::new()
        .add_attribute("action", "attest")
        .add_attribute("attester", info.sender)
        .add_attribute("transfer_hash", transfer_hash.to_base64()))
}

/// Forward a relay verdict to a registered bridge. The bridge accepts it
/// because this gateway is its configured gateway.
fn execute_relay(
    deps: DepsMut,
    info: MessageInfo,
    bridge: String,
    action: &str,
    msg: BridgeRelayMsg,
) -> Result<Response, ContractError> {
    ensure_not_paused(deps.as_ref())?;
    ensure_attester(deps.as_ref(), &info.sender)?;

    let bridge = deps.api.addr_validate(&bridge)?;
    if !BRIDGES.has(deps.storage, &bridge) {
        return Err(ContractError::UnknownBridge {
            sender: bridge.to_string(),
        });
    }

    Ok(Response::new()
        .add_message(WasmMsg::Execute {
            contract_addr: bridge.to_string(),
            msg: to_json_binary(&msg)?,
            funds: vec![],
        })
        .add_attribute("action", action)
        .add_attribute("attester", info.sender)
        .add_attribute("bridge", bridge))
}

fn execute_register_bridge(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
    chain_id: u64,
) -> Result<Response, ContractError> {
    ensure_admin(deps.as_ref(), &info.sender)?;

    let bridge = deps.api.addr_validate(&address)?;
    BRIDGES.save(deps.storage, &bridge, &chain_id)?;

    Ok(Response::new()
        .add_attribute("action", "register_bridge")
        .add_attribute("bridge", bridge)
        .add_attribute("chain_id", chain_id.to_string()))
}

fn execute_remove_bridge(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    ensure_admin(deps.as_ref(), &info.sender)?;

    let bridge = deps.api.addr_validate(&address)?;
    BRIDGES.remove(deps.storage, &bridge);

    Ok(Response::new()
        .add_attribute("action", "remove_bridge")
        .add_attribute("bridge", bridge))
}

fn execute_set_attester(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
    enabled: bool,
) -> Result<Response, ContractError> {
    ensure_admin(deps.as_ref(), &info.sender)?;

    let attester = deps.api.addr_validate(&address)?;
    if enabled {
        ATTESTERS.save(deps.storage, &attester, &true)?;
    } else {
        ATTESTERS.remove(deps.storage, &attester);
    }

    Ok(Response::new()
        .add_attribute(
            "action",
            if enabled { "add_attester" } else { "remove_attester" },
        )
        .add_attribute("attester", attester))
}

fn execute_set_paused(
    deps: DepsMut,
    info: MessageInfo,
    paused: bool,
) -> Result<Response, ContractError> {
    ensure_admin(deps.as_ref(), &info.sender)?;

    PAUSED.save(deps.storage, &paused)?;

    Ok(Response::new()
        .add_attribute("action", "set_paused")
        .add_attribute("paused", paused.to_string()))
}

fn execute_withdraw_fees(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    denom: String,
    amount: Option<Uint128>,
    recipient: String,
) -> Result<Response, ContractError> {
    ensure_admin(deps.as_ref(), &info.sender)?;

    let recipient = deps.api.addr_validate(&recipient)?;
    let amount = match amount {
        Some(amount) => amount,
        None => {
            deps.querier
                .query_balance(&env.contract.address, &denom)?
                .amount
        }
    };
    if amount.is_zero() {
        return Err(ContractError::NothingToWithdraw { denom });
    }

    Ok(Response::new()
        .add_message(BankMsg::Send {
            to_address: recipient.to_string(),
            amount: vec![Coin {
                denom: denom.clone(),
                amount,
            }],
        })
        .add_attribute("action", "withdraw_fees")
        .add_attribute("recipient", recipient)
        .add_attribute("amount", format!("{}{}", amount, denom)))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::VerifyProof {
            transfer_hash,
            proof,
        } => to_json_binary(&query_verify_proof(deps, transfer_hash, proof)?),
        QueryMsg::Outbound { sequence } => to_json_binary(&OUTBOUND.load(deps.storage, sequence)?),
        QueryMsg::OutboundList { start_after, limit } => {
            to_json_binary(&query_outbound_list(deps, start_after, limit)?)
        }
        QueryMsg::Attestation { transfer_hash } => {
            to_json_binary(&ATTESTATIONS.may_load(deps.storage, transfer_hash.as_slice())?)
        }
        QueryMsg::Bridges {} => to_json_binary(&query_bridges(deps)?),
        QueryMsg::Admin {} => to_json_binary(&query_admin(deps)?),
        QueryMsg::Paused {} => to_json_binary(&PausedResponse {
            paused: PAUSED.load(deps.storage)?,
        }),
    }
}

/// A proof is valid when the transfer was attested and the proof names the
/// same source transaction the attester saw.
fn query_verify_proof(
    deps: Deps,
    transfer_hash: Binary,
    proof: Binary,
) -> StdResult<VerifyProofResponse> {
    let attestation = match ATTESTATIONS.may_load(deps.storage, transfer_hash.as_slice())? {
        Some(a) => a,
        None => return Ok(VerifyProofResponse::invalid("transfer not attested")),
    };

    if attestation.source_tx_hash != proof {
        return Ok(VerifyProofResponse::invalid(
            "proof does not match attested source transaction",
        ));
    }

    Ok(VerifyProofResponse::valid())
}

fn query_outbound_list(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<OutboundListResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);

    let messages = OUTBOUND
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(sequence, message)| OutboundEntry { sequence, message }))
        .collect::<StdResult<Vec<_>>>()?;

    Ok(OutboundListResponse { messages })
}

fn query_bridges(deps: Deps) -> StdResult<BridgesResponse> {
    let bridges = BRIDGES
        .range(deps.storage, None, None, Order::Ascending)
        .map(|item| {
            item.map(|(address, chain_id)| BridgeEntry {
                address: address.to_string(),
                chain_id,
            })
        })
        .collect::<StdResult<Vec<_>>>()?;
    Ok(BridgesResponse { bridges })
}

fn query_admin(deps: Deps) -> StdResult<AdminResponse> {
    let admin = ADMIN.load(deps.storage)?;
    Ok(AdminResponse {
        admin: admin.to_string(),
    })
}
