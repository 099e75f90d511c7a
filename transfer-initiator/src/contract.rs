//! Transfer Initiator - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response,
    StdError, StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_initiate, execute_initiate_simple, execute_initiate_with_asset_id,
    execute_set_default_relayer_fee, reply_custody_transfer,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_asset_id, query_config, query_default_relayer_fee, query_registered_token,
    query_simulate_transfer, query_stats,
};
use crate::state::{
    Config, Stats, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, DEFAULT_RELAYER_FEE,
    REPLY_CUSTODY_TRANSFER, STATS,
};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if msg.gateway.trim().is_empty() {
        return Err(ContractError::ZeroAddress {
            field: "gateway".to_string(),
        });
    }
    if msg.fee_token.trim().is_empty() {
        return Err(ContractError::ZeroAddress {
            field: "fee_token".to_string(),
        });
    }
    if msg.native_denom.trim().is_empty() {
        return Err(ContractError::InvalidNativeFunds {
            reason: "native_denom must be set".to_string(),
        });
    }

    let gateway = deps.api.addr_validate(&msg.gateway)?;
    let fee_token = deps.api.addr_validate(&msg.fee_token)?;
    let admin = msg
        .admin
        .map(|admin| deps.api.addr_validate(&admin))
        .transpose()?;

    let config = Config {
        gateway,
        fee_token,
        native_denom: msg.native_denom,
        admin,
    };
    CONFIG.save(deps.storage, &config)?;
    DEFAULT_RELAYER_FEE.save(deps.storage, &msg.default_relayer_fee)?;
    STATS.save(deps.storage, &Stats { total_transfers: 0 })?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("gateway", config.gateway)
        .add_attribute("fee_token", config.fee_token)
        .add_attribute("native_denom", config.native_denom)
        .add_attribute(
            "admin",
            config
                .admin
                .map(|a| a.into_string())
                .unwrap_or_else(|| "none".to_string()),
        )
        .add_attribute("default_relayer_fee", msg.default_relayer_fee))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Initiate {
            token,
            symbol,
            amount,
            recipient,
            dest_chain,
            relayer_fee,
            timeout,
            redeem,
        } => execute_initiate(
            deps,
            env,
            info,
            token,
            symbol,
            amount,
            recipient,
            dest_chain,
            relayer_fee,
            timeout,
            redeem,
        ),
        ExecuteMsg::InitiateSimple {
            token,
            symbol,
            amount,
            recipient,
            dest_chain,
        } => execute_initiate_simple(deps, env, info, token, symbol, amount, recipient, dest_chain),
        ExecuteMsg::InitiateWithAssetId {
            token,
            asset_id,
            amount,
            recipient,
            dest_chain,
            relayer_fee,
            timeout,
            redeem,
        } => execute_initiate_with_asset_id(
            deps,
            env,
            info,
            token,
            asset_id,
            amount,
            recipient,
            dest_chain,
            relayer_fee,
            timeout,
            redeem,
        ),

        // Configuration
        ExecuteMsg::SetDefaultRelayerFee { fee } => {
            execute_set_default_relayer_fee(deps, info, fee)
        }
    }
}

// ============================================================================
// Reply
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(_deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.id {
        REPLY_CUSTODY_TRANSFER => reply_custody_transfer(msg),
        id => Err(StdError::generic_err(format!("Unknown reply id: {}", id)).into()),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::DefaultRelayerFee {} => to_json_binary(&query_default_relayer_fee(deps)?),
        QueryMsg::Stats {} => to_json_binary(&query_stats(deps)?),
        QueryMsg::AssetId { symbol } => to_json_binary(&query_asset_id(symbol)?),
        QueryMsg::RegisteredToken { asset_id } => {
            to_json_binary(&query_registered_token(deps, asset_id)?)
        }
        QueryMsg::SimulateTransfer {
            asset,
            amount,
            recipient,
            dest_chain,
            relayer_fee,
            timeout,
            redeem,
            native_cost,
        } => to_json_binary(&query_simulate_transfer(
            deps,
            asset,
            amount,
            recipient,
            dest_chain,
            relayer_fee,
            timeout,
            redeem,
            native_cost,
        )?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
