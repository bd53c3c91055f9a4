use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized: only admin can perform this action")]
    Unauthorized,

    #[error("Unauthorized: {sender} is not an attester")]
    NotAttester { sender: String },

    #[error("Unauthorized: {sender} is not a registered bridge")]
    UnknownBridge { sender: String },

    #[error("Intent source chain {got} does not match bridge chain {expected}")]
    SourceChainMismatch { expected: u64, got: u64 },

    #[error("No {denom} fees to withdraw")]
    NothingToWithdraw { denom: String },

    #[error("Gateway is paused")]
    Paused,

    #[error("Transfer hash must be 32 bytes, got {len}")]
    InvalidTransferHash { len: usize },

    #[error("Transfer {transfer_hash} already attested")]
    AlreadyAttested { transfer_hash: String },
}
