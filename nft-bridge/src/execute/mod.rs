//! Execute handlers for the NFT bridge contract.
//!
//! This module contains all execute message handlers, organized by category:
//! - `token` - Genesis mint and local transfers
//! - `outbound` - Burn-and-dispatch and acknowledgements from the gateway
//! - `inbound` - Proof-checked completion and rejection
//! - `config` - Chain registry and bridge parameters
//! - `admin` - Pause, unpause and admin transfer

mod admin;
mod config;
mod inbound;
mod outbound;
mod token;

pub(crate) use config::register_chain;

pub use admin::*;
pub use config::{execute_register_chain, execute_update_chain, execute_update_config};
pub use inbound::*;
pub use outbound::*;
pub use token::*;
