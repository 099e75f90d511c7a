use common::TransferRequest;
use cosmwasm_std::{
    entry_point, to_json_binary, Addr, Binary, CosmosMsg, Deps, DepsMut, Env, MessageInfo,
    Response, StdResult, Uint128, WasmMsg,
};
use cw2::set_contract_version;
use cw20::Cw20ExecuteMsg;

use crate::error::ContractError;
use crate::msg::{
    ExecuteMsg, InstantiateMsg, LastSubmissionResponse, QueryMsg, RegisteredTokenResponse,
    SubmissionCountResponse,
};
use crate::state::{
    Config, Submission, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, LAST_SUBMISSION, REGISTRY,
    REJECTION, SUBMISSION_COUNT,
};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let fee_token = msg
        .fee_token
        .map(|t| deps.api.addr_validate(&t))
        .transpose()?;
    CONFIG.save(
        deps.storage,
        &Config {
            fee_token,
            pull_funds: msg.pull_funds,
        },
    )?;
    SUBMISSION_COUNT.save(deps.storage, &0)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("pull_funds", msg.pull_funds.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Submit { request } => execute_submit(deps, env, info, request),
        ExecuteMsg::RegisterAsset { asset_id, token } => {
            execute_register_asset(deps, asset_id, token)
        }
        ExecuteMsg::SetRejection { reason } => execute_set_rejection(deps, reason),
    }
}

fn execute_submit(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    request: TransferRequest,
) -> Result<Response, ContractError> {
    if let Some(reason) = REJECTION.may_load(deps.storage)? {
        return Err(ContractError::Rejected { reason });
    }

    let config = CONFIG.load(deps.storage)?;
    let mut messages: Vec<CosmosMsg> = vec![];

    if config.pull_funds {
        let token = REGISTRY
            .may_load(deps.storage, request.asset_id.as_slice())?
            .ok_or_else(|| ContractError::UnknownAsset {
                asset_id: request.asset_id.to_base64(),
            })?;
        messages.push(pull_msg(&token, &info.sender, &env.contract.address, request.amount)?);

        if let Some(fee_token) = &config.fee_token {
            if !request.relayer_fee.is_zero() {
                messages.push(pull_msg(
                    fee_token,
                    &info.sender,
                    &env.contract.address,
                    request.relayer_fee,
                )?);
            }
        }
    }

    LAST_SUBMISSION.save(
        deps.storage,
        &Submission {
            sender: info.sender.clone(),
            request: request.clone(),
            funds: info.funds,
        },
    )?;
    SUBMISSION_COUNT.update(deps.storage, |count| -> StdResult<_> { Ok(count + 1) })?;

    Ok(Response::new()
        .add_messages(messages)
        .add_attribute("action", "submit")
        .add_attribute("sender", info.sender)
        .add_attribute("amount", request.amount)
        .add_attribute("relayer_fee", request.relayer_fee))
}

fn execute_register_asset(
    deps: DepsMut,
    asset_id: Binary,
    token: String,
) -> Result<Response, ContractError> {
    if asset_id.len() != 32 {
        return Err(ContractError::InvalidAssetId {
            got: asset_id.len(),
        });
    }
    let token = deps.api.addr_validate(&token)?;
    REGISTRY.save(deps.storage, asset_id.as_slice(), &token)?;

    Ok(Response::new()
        .add_attribute("action", "register_asset")
        .add_attribute("token", token))
}

fn execute_set_rejection(
    deps: DepsMut,
    reason: Option<String>,
) -> Result<Response, ContractError> {
    match &reason {
        Some(reason) => REJECTION.save(deps.storage, reason)?,
        None => REJECTION.remove(deps.storage),
    }

    Ok(Response::new()
        .add_attribute("action", "set_rejection")
        .add_attribute("rejecting", reason.is_some().to_string()))
}

fn pull_msg(token: &Addr, owner: &Addr, recipient: &Addr, amount: Uint128) -> StdResult<CosmosMsg> {
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::TransferFrom {
            owner: owner.to_string(),
            recipient: recipient.to_string(),
            amount,
        })?,
        funds: vec![],
    }))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::RegisteredToken { asset_id } => {
            to_json_binary(&query_registered_token(deps, asset_id)?)
        }
        QueryMsg::LastSubmission {} => to_json_binary(&LastSubmissionResponse {
            submission: LAST_SUBMISSION.may_load(deps.storage)?,
        }),
        QueryMsg::SubmissionCount {} => to_json_binary(&SubmissionCountResponse {
            count: SUBMISSION_COUNT.load(deps.storage)?,
        }),
    }
}

fn query_registered_token(deps: Deps, asset_id: Binary) -> StdResult<RegisteredTokenResponse> {
    Ok(RegisteredTokenResponse {
        token: REGISTRY.may_load(deps.storage, asset_id.as_slice())?,
    })
}
