//! Transfer intent types.
//!
//! A `TransferIntent` is created on the source chain when a token is burned for
//! bridging, observed by the relay, and delivered to the destination chain where
//! it is completed exactly once.

use cosmwasm_schema::cw_serde;

/// Global identity of a token: the chain it was first minted on plus the id
/// that chain assigned it.
#[cw_serde]
#[derive(Copy, Eq, PartialOrd, Ord, Hash)]
pub struct TokenKey {
    pub origin_chain_id: u64,
    pub token_id: u64,
}

impl TokenKey {
    pub fn new(origin_chain_id: u64, token_id: u64) -> Self {
        Self {
            origin_chain_id,
            token_id,
        }
    }

    /// Storage key form, `(origin_chain_id, token_id)`
    pub fn as_tuple(&self) -> (u64, u64) {
        (self.origin_chain_id, self.token_id)
    }
}

impl From<(u64, u64)> for TokenKey {
    fn from((origin_chain_id, token_id): (u64, u64)) -> Self {
        Self::new(origin_chain_id, token_id)
    }
}

impl std::fmt::Display for TokenKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.origin_chain_id, self.token_id)
    }
}

/// Lifecycle of a transfer intent. `Completed` and `Failed` are terminal.
#[cw_serde]
#[derive(Copy, Eq)]
pub enum TransferStatus {
    Pending,
    Completed,
    Failed,
}

impl TransferStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransferStatus::Pending => "pending",
            TransferStatus::Completed => "completed",
            TransferStatus::Failed => "failed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, TransferStatus::Pending)
    }
}

/// Verdict on an outbound intent, relayed back to its source chain
#[cw_serde]
pub enum TransferOutcome {
    Completed,
    Failed { reason: String },
}

/// An in-flight cross-chain move of one token.
#[cw_serde]
pub struct TransferIntent {
    /// Token id as assigned by the origin chain
    pub token_id: u64,
    /// Chain where the token was first minted
    pub origin_chain_id: u64,
    /// Chain where the token was burned for this transfer
    pub source_chain_id: u64,
    /// Chain that must mint the token
    pub destination_chain_id: u64,
    /// Owner on the destination chain
    pub recipient: String,
    /// Outbound nonce of the source chain, unique per source chain
    pub nonce: u64,
    /// Current status as known to the holder of this record
    pub status: TransferStatus,
}

impl TransferIntent {
    pub fn token_key(&self) -> TokenKey {
        TokenKey::new(self.origin_chain_id, self.token_id)
    }

    /// Ledger key on the destination chain, `(source_chain_id, nonce)`
    pub fn ledger_key(&self) -> (u64, u64) {
        (self.source_chain_id, self.nonce)
    }

    /// Canonical commitment over the identity fields (status excluded).
    pub fn transfer_hash(&self) -> [u8; 32] {
        crate::hash::compute_transfer_hash(self)
    }
}
