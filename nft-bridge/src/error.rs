//! Error types for the NFT bridge contract
//!
//! Every rejection names the precondition that failed so operators can tell
//! "resubmit with more fee" from "already completed" from "forged".

use cosmwasm_std::{OverflowError, StdError, Uint128};
use thiserror::Error;

use common::TokenKey;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    // ========================================================================
    // Registry Errors
    // ========================================================================

    #[error("Token not found: {origin_chain_id}:{token_id}")]
    NotFound { origin_chain_id: u64, token_id: u64 },

    #[error("Token already exists: {origin_chain_id}:{token_id}")]
    AlreadyExists { origin_chain_id: u64, token_id: u64 },

    #[error("Invalid recipient: {reason}")]
    InvalidRecipient { reason: String },

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: {reason}")]
    Unauthorized { reason: String },

    #[error("Unauthorized: only pending admin can accept")]
    UnauthorizedPendingAdmin,

    #[error("No pending admin change")]
    NoPendingAdmin,

    #[error("Timelock not expired: {remaining_seconds} seconds remaining")]
    TimelockNotExpired { remaining_seconds: u64 },

    #[error("Bridge is paused")]
    BridgePaused,

    // ========================================================================
    // Outbound Errors
    // ========================================================================

    #[error("Invalid destination chain {chain_id}: {reason}")]
    InvalidDestination { chain_id: u64, reason: String },

    #[error("Insufficient fee: required {required}{denom}, attached {attached}{denom}")]
    InsufficientFee {
        required: Uint128,
        attached: Uint128,
        denom: String,
    },

    #[error("Invalid funds: {reason}")]
    InvalidFunds { reason: String },

    #[error("Transfer intent not found: nonce {nonce}")]
    IntentNotFound { nonce: u64 },

    #[error("Transfer intent {nonce} is already {status}")]
    IntentFinalized { nonce: u64, status: String },

    // ========================================================================
    // Inbound Errors
    // ========================================================================

    #[error("Invalid proof: {reason}")]
    ProofInvalid { reason: String },

    #[error("Transfer already completed: source chain {source_chain_id}, nonce {nonce}")]
    ReplayedTransfer { source_chain_id: u64, nonce: u64 },

    #[error("Transfer was rejected: source chain {source_chain_id}, nonce {nonce}")]
    TransferFailed { source_chain_id: u64, nonce: u64 },

    #[error("Wrong destination: this chain is {expected}, intent targets {got}")]
    WrongDestination { expected: u64, got: u64 },

    // ========================================================================
    // Ledger Errors
    // ========================================================================

    #[error("Transfer already recorded: source chain {source_chain_id}, nonce {nonce}")]
    AlreadyRecorded { source_chain_id: u64, nonce: u64 },

    // ========================================================================
    // Chain Registry Errors
    // ========================================================================

    #[error("Invalid chain ID: {chain_id}")]
    InvalidChainId { chain_id: u64 },

    #[error("Chain already registered: {chain_id}")]
    ChainAlreadyRegistered { chain_id: u64 },

    #[error("Chain not registered: {chain_id}")]
    ChainNotRegistered { chain_id: u64 },
}

impl ContractError {
    pub fn not_found(key: TokenKey) -> Self {
        ContractError::NotFound {
            origin_chain_id: key.origin_chain_id,
            token_id: key.token_id,
        }
    }

    pub fn already_exists(key: TokenKey) -> Self {
        ContractError::AlreadyExists {
            origin_chain_id: key.origin_chain_id,
            token_id: key.token_id,
        }
    }

    pub fn unauthorized(reason: impl Into<String>) -> Self {
        ContractError::Unauthorized {
            reason: reason.into(),
        }
    }

    /// Errors that mean "this was already done". Automated retriers must treat
    /// these as success and stop resubmitting.
    pub fn is_idempotent_success(&self) -> bool {
        matches!(
            self,
            ContractError::ReplayedTransfer { .. } | ContractError::AlreadyRecorded { .. }
        )
    }
}
