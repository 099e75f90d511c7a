//! Bridge gateway interface
//!
//! The gateway exposes exactly two capabilities to the initiator:
//! - `Submit` - accept a transfer request together with attached native funds
//! - `RegisteredToken` - resolve an asset identifier to the local token contract

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{
    to_json_binary, Addr, Binary, Coin, CosmosMsg, QuerierWrapper, StdResult, Uint128, WasmMsg,
};

/// Structured transfer request forwarded to the gateway
#[cw_serde]
pub struct TransferRequest {
    /// Amount of the bridged token (always > 0)
    pub amount: Uint128,
    /// Fee offered to the relayer, paid in the gateway's fee token
    pub relayer_fee: Uint128,
    /// 32-byte asset identifier
    pub asset_id: Binary,
    /// Redeem the underlying asset on the destination (true) or mint a wrapped one (false)
    pub redeem: bool,
    /// 32-byte destination holder (left-padded recipient)
    pub to: Binary,
    /// Opaque destination chain identifier
    pub dest: Binary,
    /// Relative request validity in seconds
    pub timeout: u64,
    /// Native funds attached for gateway fees
    pub native_cost: Uint128,
    /// Opaque payload (empty for simple transfers)
    pub data: Binary,
}

#[cw_serde]
pub enum GatewayExecuteMsg {
    /// Submit a transfer request for relay
    Submit { request: TransferRequest },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum GatewayQueryMsg {
    /// Resolve an asset identifier to its registered local token
    #[returns(RegisteredTokenResponse)]
    RegisteredToken { asset_id: Binary },
}

/// `token` is `None` when the gateway has no registration for the asset
#[cw_serde]
pub struct RegisteredTokenResponse {
    pub token: Option<Addr>,
}

/// Typed handle to a deployed gateway contract
#[cw_serde]
pub struct GatewayContract(pub Addr);

impl GatewayContract {
    pub fn addr(&self) -> Addr {
        self.0.clone()
    }

    /// Build the submit message, forwarding `funds` unchanged
    pub fn submit(&self, request: TransferRequest, funds: Vec<Coin>) -> StdResult<CosmosMsg> {
        Ok(WasmMsg::Execute {
            contract_addr: self.addr().into_string(),
            msg: to_json_binary(&GatewayExecuteMsg::Submit { request })?,
            funds,
        }
        .into())
    }

    pub fn registered_token(
        &self,
        querier: &QuerierWrapper,
        asset_id: Binary,
    ) -> StdResult<RegisteredTokenResponse> {
        querier.query_wasm_smart(self.addr(), &GatewayQueryMsg::RegisteredToken { asset_id })
    }
}
