//! Mint/Burn Controller
//!
//! Gatekeeper in front of the token registry. One controller serves both
//! endpoint roles; the role only decides whether genesis mint is open.
//!
//! | Path               | Origin endpoint | Connected endpoint |
//! |--------------------|-----------------|--------------------|
//! | Genesis mint       | any caller      | rejected           |
//! | Inbound mint       | completer only  | completer only     |
//! | Burn for bridging  | holder only     | holder only        |

use cosmwasm_std::{Addr, Api, StdError, Storage};

use common::TokenKey;

use crate::error::ContractError;
use crate::registry::{self, is_null_address, Token};
use crate::state::{Config, NEXT_TOKEN_ID};

/// Who is asking for a mint.
pub enum MintAuthority {
    /// Fresh token with the next chain-local id
    Genesis,
    /// Token delivered by a verified inbound transfer
    InboundCompletion(InboundMint),
}

/// Witness that the inbound completer accepted a transfer of `key`.
/// Only constructible inside this crate.
pub struct InboundMint {
    key: TokenKey,
}

impl InboundMint {
    pub(crate) fn new(key: TokenKey) -> Self {
        Self { key }
    }
}

/// Who is asking for a burn.
pub enum BurnAuthority<'a> {
    Holder(&'a Addr),
}

pub struct Controller<'a> {
    config: &'a Config,
}

impl<'a> Controller<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    pub fn mint(
        &self,
        storage: &mut dyn Storage,
        to: &Addr,
        authority: MintAuthority,
    ) -> Result<Token, ContractError> {
        match authority {
            MintAuthority::Genesis => self.genesis_mint(storage, to),
            MintAuthority::InboundCompletion(InboundMint { key }) => {
                registry::mint(storage, to, key)
            }
        }
    }

    pub fn burn(
        &self,
        storage: &mut dyn Storage,
        key: TokenKey,
        authority: BurnAuthority,
    ) -> Result<Addr, ContractError> {
        match authority {
            BurnAuthority::Holder(caller) => {
                self.ensure_holder(storage, caller, key)?;
                registry::burn(storage, key)
            }
        }
    }

    /// Fails unless `caller` currently holds `key`.
    pub fn ensure_holder(
        &self,
        storage: &dyn Storage,
        caller: &Addr,
        key: TokenKey,
    ) -> Result<Token, ContractError> {
        let token = registry::load_token(storage, key)?;
        if token.owner != *caller {
            return Err(ContractError::unauthorized(format!(
                "{} does not own token {}",
                caller, key
            )));
        }
        Ok(token)
    }

    fn genesis_mint(&self, storage: &mut dyn Storage, to: &Addr) -> Result<Token, ContractError> {
        if !self.config.role.allows_genesis_mint() {
            return Err(ContractError::unauthorized(
                "genesis mint is disabled on connected endpoints",
            ));
        }

        let token_id = NEXT_TOKEN_ID.load(storage)?;
        let next = token_id
            .checked_add(1)
            .ok_or_else(|| StdError::generic_err("token id space exhausted"))?;
        NEXT_TOKEN_ID.save(storage, &next)?;

        registry::mint(
            storage,
            to,
            TokenKey::new(self.config.this_chain_id, token_id),
        )
    }
}

/// Validate a recipient string for this chain.
pub fn validate_recipient(api: &dyn Api, recipient: &str) -> Result<Addr, ContractError> {
    if is_null_address(recipient) {
        return Err(ContractError::InvalidRecipient {
            reason: "recipient is the null address".to_string(),
        });
    }
    api.addr_validate(recipient)
        .map_err(|e| ContractError::InvalidRecipient {
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::EndpointRole;
    use cosmwasm_std::testing::{MockApi, MockStorage};
    use cosmwasm_std::Uint128;

    fn config(role: EndpointRole) -> Config {
        Config {
            admin: Addr::unchecked("admin"),
            name: "Universal NFT".to_string(),
            symbol: "UNFT".to_string(),
            this_chain_id: 7001,
            role,
            gateway: Addr::unchecked("gateway"),
            verifier: Addr::unchecked("gateway"),
            fee_denom: "uzeta".to_string(),
            min_fee: Uint128::zero(),
            paused: false,
        }
    }

    #[test]
    fn test_genesis_mint_assigns_sequential_ids() {
        let mut storage = MockStorage::new();
        NEXT_TOKEN_ID.save(&mut storage, &0).unwrap();
        let cfg = config(EndpointRole::Origin);
        let controller = Controller::new(&cfg);
        let alice = Addr::unchecked("alice");

        let first = controller.mint(&mut storage, &alice, MintAuthority::Genesis).unwrap();
        let second = controller.mint(&mut storage, &alice, MintAuthority::Genesis).unwrap();

        assert_eq!(first.key(), TokenKey::new(7001, 0));
        assert_eq!(second.key(), TokenKey::new(7001, 1));
        assert_eq!(NEXT_TOKEN_ID.load(&storage).unwrap(), 2);
    }

    #[test]
    fn test_connected_endpoint_rejects_genesis_mint() {
        let mut storage = MockStorage::new();
        NEXT_TOKEN_ID.save(&mut storage, &0).unwrap();
        let cfg = config(EndpointRole::Connected);
        let controller = Controller::new(&cfg);

        let err = controller
            .mint(&mut storage, &Addr::unchecked("alice"), MintAuthority::Genesis)
            .unwrap_err();
        assert!(matches!(err, ContractError::Unauthorized { .. }));
        assert_eq!(NEXT_TOKEN_ID.load(&storage).unwrap(), 0);
    }

    #[test]
    fn test_burn_requires_holder() {
        let mut storage = MockStorage::new();
        NEXT_TOKEN_ID.save(&mut storage, &0).unwrap();
        let cfg = config(EndpointRole::Origin);
        let controller = Controller::new(&cfg);
        let alice = Addr::unchecked("alice");
        let mallory = Addr::unchecked("mallory");

        let token = controller.mint(&mut storage, &alice, MintAuthority::Genesis).unwrap();

        let err = controller
            .burn(&mut storage, token.key(), BurnAuthority::Holder(&mallory))
            .unwrap_err();
        assert!(matches!(err, ContractError::Unauthorized { .. }));
        assert_eq!(registry::owner_of(&storage, token.key()).unwrap(), alice);

        assert_eq!(
            controller
                .burn(&mut storage, token.key(), BurnAuthority::Holder(&alice))
                .unwrap(),
            alice
        );
        assert_eq!(
            controller
                .burn(&mut storage, token.key(), BurnAuthority::Holder(&alice))
                .unwrap_err(),
            ContractError::not_found(token.key())
        );
    }

    #[test]
    fn test_inbound_mint_keeps_identity() {
        let mut storage = MockStorage::new();
        NEXT_TOKEN_ID.save(&mut storage, &0).unwrap();
        let cfg = config(EndpointRole::Connected);
        let controller = Controller::new(&cfg);
        let bob = Addr::unchecked("bob");
        let key = TokenKey::new(7001, 5);

        let token = controller
            .mint(
                &mut storage,
                &bob,
                MintAuthority::InboundCompletion(InboundMint::new(key)),
            )
            .unwrap();
        assert_eq!(token.key(), key);
        // Inbound mints do not consume genesis ids
        assert_eq!(NEXT_TOKEN_ID.load(&storage).unwrap(), 0);

        let err = controller
            .mint(
                &mut storage,
                &bob,
                MintAuthority::InboundCompletion(InboundMint::new(key)),
            )
            .unwrap_err();
        assert_eq!(err, ContractError::already_exists(key));
    }

    #[test]
    fn test_validate_recipient() {
        let api = MockApi::default();
        assert!(matches!(
            validate_recipient(&api, "").unwrap_err(),
            ContractError::InvalidRecipient { .. }
        ));
        assert!(matches!(
            validate_recipient(&api, "0x0000000000000000000000000000000000000000").unwrap_err(),
            ContractError::InvalidRecipient { .. }
        ));
        assert_eq!(
            validate_recipient(&api, "recipient").unwrap(),
            Addr::unchecked("recipient")
        );
    }
}
