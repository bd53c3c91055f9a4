//! Message types for the NFT bridge contract
//!
//! This module defines all messages for instantiation, execution, and queries.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Timestamp, Uint128};

use common::{TokenKey, TransferIntent, TransferStatus};

pub use common::TransferOutcome;

use crate::ledger::LedgerEntry;
use crate::state::{ChainConfig, EndpointRole};

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Counterpart chain to register at instantiation
#[cw_serde]
pub struct ChainRegistration {
    /// Chain id of the counterpart chain
    pub chain_id: u64,
    /// Human-readable name (e.g. "sepolia")
    pub name: String,
    /// Fee override for transfers to this chain
    pub min_fee: Option<Uint128>,
}

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// Admin address for contract management
    pub admin: String,
    /// Collection name
    pub name: String,
    /// Collection symbol
    pub symbol: String,
    /// Chain id of the chain this instance is deployed on (must not be 0)
    pub this_chain_id: u64,
    /// Minting policy of this endpoint
    pub role: EndpointRole,
    /// Gateway contract that receives outbound intents
    pub gateway: String,
    /// Proof verifier contract (defaults to the gateway)
    pub verifier: Option<String>,
    /// Denom the relay fee is paid in
    pub fee_denom: String,
    /// Default minimum relay fee per outbound transfer
    pub min_fee: Uint128,
    /// Counterpart chains accepted as destinations
    pub chains: Vec<ChainRegistration>,
}

// ============================================================================
// Execute Messages
// ============================================================================

/// Execute messages
#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Token Registry
    // ========================================================================
    /// Create a new token with the next chain-local id
    ///
    /// Authorization: Anyone, on `Origin` endpoints only
    Mint {
        /// Owner of the new token
        owner: String,
    },

    /// Move a token to another owner on this chain
    ///
    /// Authorization: Current owner
    TransferNft {
        recipient: String,
        token_id: u64,
        /// Defaults to this chain
        origin_chain_id: Option<u64>,
    },

    // ========================================================================
    // Outbound Transfers (Burn)
    // ========================================================================
    /// Burn a token here and emit a transfer intent for the destination chain
    ///
    /// Authorization: Current owner
    ///
    /// The relay fee is attached as funds in the configured fee denom.
    InitiateTransfer {
        token_id: u64,
        /// Defaults to this chain
        origin_chain_id: Option<u64>,
        /// Registered, enabled chain other than this one
        destination_chain_id: u64,
        /// Owner on the destination chain (defaults to the caller)
        recipient: Option<String>,
    },

    /// Record the final outcome of an outbound transfer
    ///
    /// Authorization: Gateway or admin
    AcknowledgeTransfer {
        nonce: u64,
        outcome: TransferOutcome,
    },

    // ========================================================================
    // Inbound Transfers (Mint)
    // ========================================================================
    /// Mint a token delivered by the relay
    ///
    /// Authorization: Anyone holding a proof the verifier accepts
    ///
    /// A transfer that was already completed is acknowledged with
    /// `outcome = replayed` and changes nothing.
    CompleteTransfer {
        intent: TransferIntent,
        /// Opaque proof supplied by the relay
        proof: Binary,
    },

    /// Permanently reject an inbound transfer (forged, malformed, misrouted)
    ///
    /// Authorization: Gateway or admin
    RejectTransfer {
        intent: TransferIntent,
        reason: String,
    },

    // ========================================================================
    // Chain Registry
    // ========================================================================
    /// Register a counterpart chain
    ///
    /// Authorization: Admin only
    RegisterChain {
        chain_id: u64,
        name: String,
        min_fee: Option<Uint128>,
    },

    /// Enable/disable a chain or change its fee override
    ///
    /// Authorization: Admin only
    UpdateChain {
        chain_id: u64,
        enabled: Option<bool>,
        min_fee: Option<Uint128>,
    },

    // ========================================================================
    // Configuration
    // ========================================================================
    /// Update collaborator addresses and fee parameters
    ///
    /// Authorization: Admin only
    UpdateConfig {
        gateway: Option<String>,
        verifier: Option<String>,
        fee_denom: Option<String>,
        min_fee: Option<Uint128>,
    },

    // ========================================================================
    // Admin Operations
    // ========================================================================
    /// Pause genesis mint and all bridge transfers
    Pause {},
    /// Resume operations
    Unpause {},
    /// Propose a new admin (7-day timelock)
    ProposeAdmin { new_admin: String },
    /// Accept the admin role after the timelock
    AcceptAdmin {},
    /// Cancel a pending admin proposal
    CancelAdminProposal {},
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    // Core
    #[returns(ConfigResponse)]
    Config {},
    #[returns(ContractInfoResponse)]
    ContractInfo {},
    #[returns(StatusResponse)]
    Status {},
    #[returns(Option<PendingAdminResponse>)]
    PendingAdmin {},

    // Token registry
    #[returns(OwnerOfResponse)]
    OwnerOf {
        token_id: u64,
        origin_chain_id: Option<u64>,
    },
    #[returns(TokensResponse)]
    TokensOfOwner {
        owner: String,
        start_after: Option<TokenKey>,
        limit: Option<u32>,
    },
    #[returns(TokensResponse)]
    AllTokens {
        start_after: Option<TokenKey>,
        limit: Option<u32>,
    },

    // Outbound intents
    #[returns(IntentResponse)]
    OutboundIntent { nonce: u64 },
    #[returns(IntentsResponse)]
    OutboundIntents {
        start_after: Option<u64>,
        limit: Option<u32>,
    },

    // Transfer ledger
    #[returns(LedgerEntryResponse)]
    LedgerEntry { source_chain_id: u64, nonce: u64 },
    #[returns(LedgerEntriesResponse)]
    LedgerEntries {
        source_chain_id: Option<u64>,
        start_after: Option<(u64, u64)>,
        limit: Option<u32>,
    },
    #[returns(HasCompletedResponse)]
    HasCompleted { source_chain_id: u64, nonce: u64 },

    // Helpers
    #[returns(TransferHashResponse)]
    TransferHash { intent: TransferIntent },
    #[returns(RequiredFeeResponse)]
    RequiredFee { destination_chain_id: u64 },

    // Chains
    #[returns(ChainConfig)]
    Chain { chain_id: u64 },
    #[returns(ChainsResponse)]
    Chains {
        start_after: Option<u64>,
        limit: Option<u32>,
    },
}

// ============================================================================
// Query Responses
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    pub admin: Addr,
    pub this_chain_id: u64,
    pub role: EndpointRole,
    pub gateway: Addr,
    pub verifier: Addr,
    pub fee_denom: String,
    pub min_fee: Uint128,
    pub paused: bool,
}

#[cw_serde]
pub struct ContractInfoResponse {
    pub name: String,
    pub symbol: String,
}

#[cw_serde]
pub struct StatusResponse {
    pub paused: bool,
    pub role: EndpointRole,
    pub this_chain_id: u64,
    /// Number of ids handed out by genesis mint
    pub token_counter: u64,
    pub next_nonce: u64,
    pub genesis_mints: u64,
    pub outbound_transfers: u64,
    pub inbound_completions: u64,
    pub rejected_transfers: u64,
}

#[cw_serde]
pub struct PendingAdminResponse {
    pub new_address: Addr,
    pub execute_after: Timestamp,
}

#[cw_serde]
pub struct OwnerOfResponse {
    pub token: TokenKey,
    pub owner: Addr,
}

#[cw_serde]
pub struct TokensResponse {
    pub tokens: Vec<TokenKey>,
}

#[cw_serde]
pub struct IntentResponse {
    pub intent: TransferIntent,
    /// 0x-prefixed transfer hash
    pub transfer_hash: String,
}

#[cw_serde]
pub struct IntentsResponse {
    pub intents: Vec<IntentResponse>,
}

#[cw_serde]
pub struct LedgerEntryResponse {
    pub entry: Option<LedgerEntry>,
    /// Status as seen by this chain (Pending when no entry exists)
    pub status: TransferStatus,
}

#[cw_serde]
pub struct LedgerEntriesResponse {
    pub entries: Vec<LedgerEntry>,
}

#[cw_serde]
pub struct HasCompletedResponse {
    pub completed: bool,
}

#[cw_serde]
pub struct TransferHashResponse {
    pub transfer_hash: Binary,
    pub hex: String,
}

#[cw_serde]
pub struct RequiredFeeResponse {
    pub denom: String,
    pub amount: Uint128,
}

#[cw_serde]
pub struct ChainsResponse {
    pub chains: Vec<ChainConfig>,
}
