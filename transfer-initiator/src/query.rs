//! Query handlers for the transfer initiator contract.

use common::{GatewayContract, RegisteredTokenResponse, TransferRequest};
use cosmwasm_std::{Binary, Deps, StdError, StdResult, Uint128};

use crate::error::ContractError;
use crate::execute::{build_request, RequestParams};
use crate::hash::{bytes32_to_hex, compute_asset_id, parse_asset_id};
use crate::msg::{
    AssetIdResponse, AssetRef, ConfigResponse, DefaultRelayerFeeResponse, StatsResponse,
};
use crate::state::{CONFIG, DEFAULT_RELAYER_FEE, STATS};

/// Query contract configuration.
pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        gateway: config.gateway,
        fee_token: config.fee_token,
        native_denom: config.native_denom,
        admin: config.admin,
        default_relayer_fee: DEFAULT_RELAYER_FEE.load(deps.storage)?,
    })
}

pub fn query_default_relayer_fee(deps: Deps) -> StdResult<DefaultRelayerFeeResponse> {
    Ok(DefaultRelayerFeeResponse {
        fee: DEFAULT_RELAYER_FEE.load(deps.storage)?,
    })
}

pub fn query_stats(deps: Deps) -> StdResult<StatsResponse> {
    let stats = STATS.load(deps.storage)?;
    Ok(StatsResponse {
        total_transfers: stats.total_transfers,
    })
}

/// Compute the asset id for a symbol. Pure.
pub fn query_asset_id(symbol: String) -> StdResult<AssetIdResponse> {
    let asset_id = compute_asset_id(&symbol);
    Ok(AssetIdResponse {
        asset_id: Binary::from(asset_id.to_vec()),
        hex: bytes32_to_hex(&asset_id),
    })
}

/// Resolve an asset id through the gateway registry, passing its answer through.
pub fn query_registered_token(deps: Deps, asset_id: Binary) -> StdResult<RegisteredTokenResponse> {
    let config = CONFIG.load(deps.storage)?;
    GatewayContract(config.gateway).registered_token(&deps.querier, asset_id)
}

/// Build the request an initiation would submit, without side effects.
#[allow(clippy::too_many_arguments)]
pub fn query_simulate_transfer(
    deps: Deps,
    asset: AssetRef,
    amount: Uint128,
    recipient: String,
    dest_chain: Binary,
    relayer_fee: Option<Uint128>,
    timeout: Option<u64>,
    redeem: bool,
    native_cost: Option<Uint128>,
) -> StdResult<TransferRequest> {
    let asset_id = match asset {
        AssetRef::Symbol(symbol) => compute_asset_id(&symbol),
        AssetRef::Id(id) => parse_asset_id(&id).map_err(into_std)?,
    };
    let params = RequestParams {
        asset_id,
        amount,
        recipient,
        dest_chain,
        relayer_fee,
        timeout,
        redeem,
    };
    let default_relayer_fee = DEFAULT_RELAYER_FEE.load(deps.storage)?;

    build_request(
        &params,
        default_relayer_fee,
        native_cost.unwrap_or_default(),
    )
    .map_err(into_std)
}

fn into_std(err: ContractError) -> StdError {
    match err {
        ContractError::Std(e) => e,
        other => StdError::generic_err(other.to_string()),
    }
}
