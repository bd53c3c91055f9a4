//! Two-chain harness: an origin endpoint and a connected endpoint, each with
//! its own gateway, living in one `App`. The relay is played by the test.
#![allow(dead_code)]

use anyhow::Result as AnyResult;
use cosmwasm_std::{coin, coins, Addr, Binary, Empty, Uint128};
use cw_multi_test::{App, AppResponse, Contract, ContractWrapper, Executor};

use gateway::msg::{
    ExecuteMsg as GatewayExecuteMsg, InstantiateMsg as GatewayInstantiateMsg,
    OutboundListResponse, QueryMsg as GatewayQueryMsg,
};
use nft_bridge::msg::{
    ChainRegistration, ExecuteMsg, InstantiateMsg, OwnerOfResponse, QueryMsg, StatusResponse,
    TokensResponse, TransferOutcome,
};
use nft_bridge::{EndpointRole, TokenKey, TransferIntent};

pub const ORIGIN_CHAIN: u64 = 7001;
pub const CONNECTED_CHAIN: u64 = 11155111;
pub const FEE_DENOM: &str = "uzeta";
pub const MIN_FEE: u128 = 100;
pub const NULL_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

pub fn admin() -> Addr {
    Addr::unchecked("admin")
}

pub fn alice() -> Addr {
    Addr::unchecked("alice")
}

pub fn bob() -> Addr {
    Addr::unchecked("bob")
}

pub fn attester() -> Addr {
    Addr::unchecked("attester")
}

pub fn relayer() -> Addr {
    Addr::unchecked("relayer")
}

fn contract_bridge() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        nft_bridge::contract::execute,
        nft_bridge::contract::instantiate,
        nft_bridge::contract::query,
    );
    Box::new(contract)
}

fn contract_gateway() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        gateway::contract::execute,
        gateway::contract::instantiate,
        gateway::contract::query,
    );
    Box::new(contract)
}

#[derive(Clone, Debug)]
pub struct Endpoint {
    pub chain_id: u64,
    pub bridge: Addr,
    pub gateway: Addr,
}

pub struct Harness {
    pub app: App,
    pub origin: Endpoint,
    pub connected: Endpoint,
}

pub fn setup() -> Harness {
    let mut app = App::default();

    app.init_modules(|router, _, storage| {
        for user in [admin(), alice(), bob()] {
            router
                .bank
                .init_balance(
                    storage,
                    &user,
                    vec![coin(1_000_000, "uatom"), coin(1_000_000, FEE_DENOM)],
                )
                .unwrap();
        }
    });

    let bridge_code = app.store_code(contract_bridge());
    let gateway_code = app.store_code(contract_gateway());

    let origin = deploy(
        &mut app,
        bridge_code,
        gateway_code,
        ORIGIN_CHAIN,
        EndpointRole::Origin,
        CONNECTED_CHAIN,
    );
    let connected = deploy(
        &mut app,
        bridge_code,
        gateway_code,
        CONNECTED_CHAIN,
        EndpointRole::Connected,
        ORIGIN_CHAIN,
    );

    Harness {
        app,
        origin,
        connected,
    }
}

fn deploy(
    app: &mut App,
    bridge_code: u64,
    gateway_code: u64,
    chain_id: u64,
    role: EndpointRole,
    peer_chain_id: u64,
) -> Endpoint {
    let gateway = app
        .instantiate_contract(
            gateway_code,
            admin(),
            &GatewayInstantiateMsg {
                admin: admin().to_string(),
                attesters: vec![attester().to_string()],
            },
            &[],
            format!("gateway-{}", chain_id),
            Some(admin().to_string()),
        )
        .unwrap();

    let bridge = app
        .instantiate_contract(
            bridge_code,
            admin(),
            &InstantiateMsg {
                admin: admin().to_string(),
                name: "Universal NFT".to_string(),
                symbol: "UNFT".to_string(),
                this_chain_id: chain_id,
                role,
                gateway: gateway.to_string(),
                verifier: None,
                fee_denom: FEE_DENOM.to_string(),
                min_fee: Uint128::new(MIN_FEE),
                chains: vec![ChainRegistration {
                    chain_id: peer_chain_id,
                    name: format!("chain-{}", peer_chain_id),
                    min_fee: None,
                }],
            },
            &[],
            format!("nft-bridge-{}", chain_id),
            Some(admin().to_string()),
        )
        .unwrap();

    app.execute_contract(
        admin(),
        gateway.clone(),
        &GatewayExecuteMsg::RegisterBridge {
            address: bridge.to_string(),
            chain_id,
        },
        &[],
    )
    .unwrap();

    Endpoint {
        chain_id,
        bridge,
        gateway,
    }
}

/// Proof the attester vouches for: a stand-in for the source transaction hash.
pub fn source_tx_hash(intent: &TransferIntent) -> Binary {
    Binary::from(format!("tx-{}-{}", intent.source_chain_id, intent.nonce).into_bytes())
}

/// First attribute named `key` across all events of a response.
pub fn attr(res: &AppResponse, key: &str) -> String {
    res.events
        .iter()
        .flat_map(|e| &e.attributes)
        .find(|a| a.key == key)
        .map(|a| a.value.clone())
        .unwrap()
}

impl Harness {
    /// Genesis mint on the origin endpoint.
    pub fn mint(&mut self, owner: &Addr) -> TokenKey {
        let res = self
            .app
            .execute_contract(
                owner.clone(),
                self.origin.bridge.clone(),
                &ExecuteMsg::Mint {
                    owner: owner.to_string(),
                },
                &[],
            )
            .unwrap();
        TokenKey::new(ORIGIN_CHAIN, attr(&res, "token_id").parse().unwrap())
    }

    pub fn initiate(
        &mut self,
        src: &Endpoint,
        sender: &Addr,
        token: TokenKey,
        destination_chain_id: u64,
        recipient: Option<&str>,
        fee: u128,
    ) -> AnyResult<AppResponse> {
        let funds = if fee == 0 {
            vec![]
        } else {
            coins(fee, FEE_DENOM)
        };
        self.app.execute_contract(
            sender.clone(),
            src.bridge.clone(),
            &ExecuteMsg::InitiateTransfer {
                token_id: token.token_id,
                origin_chain_id: Some(token.origin_chain_id),
                destination_chain_id,
                recipient: recipient.map(|r| r.to_string()),
            },
            &funds,
        )
    }

    /// Intents recorded by the gateway of `src`, in dispatch order.
    pub fn dispatched(&self, src: &Endpoint) -> Vec<TransferIntent> {
        let res: OutboundListResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                &src.gateway,
                &GatewayQueryMsg::OutboundList {
                    start_after: None,
                    limit: Some(50),
                },
            )
            .unwrap();
        res.messages.into_iter().map(|m| m.message.intent).collect()
    }

    pub fn last_dispatched(&self, src: &Endpoint) -> TransferIntent {
        self.dispatched(src).pop().unwrap()
    }

    /// Attester on the destination gateway vouches for `intent`.
    pub fn attest(&mut self, dest: &Endpoint, intent: &TransferIntent) -> Binary {
        let proof = source_tx_hash(intent);
        self.app
            .execute_contract(
                attester(),
                dest.gateway.clone(),
                &GatewayExecuteMsg::Attest {
                    transfer_hash: Binary::from(intent.transfer_hash().to_vec()),
                    source_tx_hash: proof.clone(),
                },
                &[],
            )
            .unwrap();
        proof
    }

    pub fn complete(
        &mut self,
        dest: &Endpoint,
        intent: &TransferIntent,
        proof: Binary,
    ) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            relayer(),
            dest.bridge.clone(),
            &ExecuteMsg::CompleteTransfer {
                intent: intent.clone(),
                proof,
            },
            &[],
        )
    }

    /// Deliver the latest intent dispatched on `src` to `dest`.
    pub fn relay(&mut self, src: &Endpoint, dest: &Endpoint) -> (TransferIntent, Binary) {
        let intent = self.last_dispatched(src);
        let proof = self.attest(dest, &intent);
        let res = self.complete(dest, &intent, proof.clone()).unwrap();
        assert_eq!(attr(&res, "outcome"), "completed");
        (intent, proof)
    }

    /// Attester reports the destination's verdict back through `src`'s gateway.
    pub fn acknowledge(
        &mut self,
        src: &Endpoint,
        nonce: u64,
        outcome: TransferOutcome,
    ) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            attester(),
            src.gateway.clone(),
            &GatewayExecuteMsg::RelayAcknowledgement {
                bridge: src.bridge.to_string(),
                nonce,
                outcome,
            },
            &[],
        )
    }

    /// Attester rejects `intent` on `dest` through its gateway.
    pub fn reject(
        &mut self,
        dest: &Endpoint,
        intent: &TransferIntent,
        reason: &str,
    ) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            attester(),
            dest.gateway.clone(),
            &GatewayExecuteMsg::RelayRejection {
                bridge: dest.bridge.to_string(),
                intent: intent.clone(),
                reason: reason.to_string(),
            },
            &[],
        )
    }

    pub fn owner_of(&self, endpoint: &Endpoint, token: TokenKey) -> Option<Addr> {
        self.app
            .wrap()
            .query_wasm_smart::<OwnerOfResponse>(
                &endpoint.bridge,
                &QueryMsg::OwnerOf {
                    token_id: token.token_id,
                    origin_chain_id: Some(token.origin_chain_id),
                },
            )
            .ok()
            .map(|res| res.owner)
    }

    pub fn tokens_of(&self, endpoint: &Endpoint, owner: &Addr) -> Vec<TokenKey> {
        let res: TokensResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                &endpoint.bridge,
                &QueryMsg::TokensOfOwner {
                    owner: owner.to_string(),
                    start_after: None,
                    limit: None,
                },
            )
            .unwrap();
        res.tokens
    }

    pub fn all_tokens(&self, endpoint: &Endpoint) -> Vec<TokenKey> {
        let res: TokensResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                &endpoint.bridge,
                &QueryMsg::AllTokens {
                    start_after: None,
                    limit: None,
                },
            )
            .unwrap();
        res.tokens
    }

    pub fn status(&self, endpoint: &Endpoint) -> StatusResponse {
        self.app
            .wrap()
            .query_wasm_smart(&endpoint.bridge, &QueryMsg::Status {})
            .unwrap()
    }

    pub fn balance(&self, addr: &Addr) -> u128 {
        self.app
            .wrap()
            .query_balance(addr, FEE_DENOM)
            .unwrap()
            .amount
            .u128()
    }
}
