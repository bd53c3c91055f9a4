//! Reference Relay Gateway
//!
//! Sits between bridge instances and the off-chain relay. Registered bridges
//! dispatch outbound intents, which are recorded in order for the relay to pick
//! up. Trusted attesters vouch for inbound intents, and the gateway answers the
//! bridge's proof queries from those attestations. Attesters also push
//! acknowledgements and rejections back into bridges through the gateway.

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
