//! Token Registry
//!
//! Authoritative `token -> owner` mapping for this chain plus the
//! `owner -> tokens` index used for enumeration. Tokens are keyed by their
//! global identity `(origin_chain_id, token_id)`.
//!
//! The functions here perform no authorization; callers go through the
//! controller.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Empty, Order, StdResult, Storage};
use cw_storage_plus::{Bound, Map};

use common::TokenKey;

use crate::error::ContractError;

// ============================================================================
// Data Structures
// ============================================================================

/// A token resident on this chain
#[cw_serde]
pub struct Token {
    pub token_id: u64,
    pub origin_chain_id: u64,
    pub owner: Addr,
}

impl Token {
    pub fn key(&self) -> TokenKey {
        TokenKey::new(self.origin_chain_id, self.token_id)
    }
}

// ============================================================================
// Storage
// ============================================================================

/// Resident tokens
/// Key: (origin_chain_id, token_id), Value: Token
pub const TOKENS: Map<(u64, u64), Token> = Map::new("tokens");

/// Enumeration index
/// Key: (owner, (origin_chain_id, token_id))
pub const OWNER_TOKENS: Map<(&Addr, (u64, u64)), Empty> = Map::new("owner_tokens");

const DEFAULT_LIMIT: u32 = 30;
const MAX_LIMIT: u32 = 100;

// ============================================================================
// Operations
// ============================================================================

/// True for blank strings and for `0x` followed only by zeros.
pub fn is_null_address(addr: &str) -> bool {
    let trimmed = addr.trim();
    if trimmed.is_empty() {
        return true;
    }
    match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(digits) => digits.chars().all(|c| c == '0'),
        None => false,
    }
}

/// Create a registry entry for `key` owned by `to`.
pub fn mint(storage: &mut dyn Storage, to: &Addr, key: TokenKey) -> Result<Token, ContractError> {
    if is_null_address(to.as_str()) {
        return Err(ContractError::InvalidRecipient {
            reason: "recipient is the null address".to_string(),
        });
    }
    if TOKENS.has(storage, key.as_tuple()) {
        return Err(ContractError::already_exists(key));
    }

    let token = Token {
        token_id: key.token_id,
        origin_chain_id: key.origin_chain_id,
        owner: to.clone(),
    };
    TOKENS.save(storage, key.as_tuple(), &token)?;
    OWNER_TOKENS.save(storage, (to, key.as_tuple()), &Empty {})?;

    Ok(token)
}

/// Remove the registry entry for `key`, returning its previous owner.
pub fn burn(storage: &mut dyn Storage, key: TokenKey) -> Result<Addr, ContractError> {
    let token = load_token(storage, key)?;

    TOKENS.remove(storage, key.as_tuple());
    OWNER_TOKENS.remove(storage, (&token.owner, key.as_tuple()));

    Ok(token.owner)
}

/// Move `key` from `from` to `to` without leaving the chain.
pub fn transfer(
    storage: &mut dyn Storage,
    key: TokenKey,
    from: &Addr,
    to: &Addr,
) -> Result<Token, ContractError> {
    let mut token = load_token(storage, key)?;
    if token.owner != *from {
        return Err(ContractError::unauthorized(format!(
            "{} does not own token {}",
            from, key
        )));
    }
    if is_null_address(to.as_str()) {
        return Err(ContractError::InvalidRecipient {
            reason: "recipient is the null address".to_string(),
        });
    }

    OWNER_TOKENS.remove(storage, (&token.owner, key.as_tuple()));
    token.owner = to.clone();
    TOKENS.save(storage, key.as_tuple(), &token)?;
    OWNER_TOKENS.save(storage, (to, key.as_tuple()), &Empty {})?;

    Ok(token)
}

pub fn load_token(storage: &dyn Storage, key: TokenKey) -> Result<Token, ContractError> {
    TOKENS
        .may_load(storage, key.as_tuple())?
        .ok_or_else(|| ContractError::not_found(key))
}

pub fn owner_of(storage: &dyn Storage, key: TokenKey) -> Result<Addr, ContractError> {
    Ok(load_token(storage, key)?.owner)
}

/// Tokens held by `owner`, ascending by key.
pub fn tokens_of_owner(
    storage: &dyn Storage,
    owner: &Addr,
    start_after: Option<TokenKey>,
    limit: Option<u32>,
) -> StdResult<Vec<TokenKey>> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(|key| Bound::exclusive(key.as_tuple()));

    OWNER_TOKENS
        .prefix(owner)
        .keys(storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(TokenKey::from))
        .collect()
}

/// All tokens resident on this chain, ascending by key.
pub fn all_tokens(
    storage: &dyn Storage,
    start_after: Option<TokenKey>,
    limit: Option<u32>,
) -> StdResult<Vec<TokenKey>> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(|key| Bound::exclusive(key.as_tuple()));

    TOKENS
        .keys(storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(TokenKey::from))
        .collect()
}
