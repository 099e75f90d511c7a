//! Transfer initiation handlers.
//!
//! All three entry points funnel into `initiate_transfer`, which builds the
//! whole protocol into a single response so the chain executes it as one
//! transaction:
//!
//! 1. Validate amount, recipient and attached funds (no state touched yet)
//! 2. Take custody: `TransferFrom` caller -> contract, reply on error
//! 3. Approve the gateway on the token, and on the fee token when it differs
//! 4. Apply relayer fee / timeout defaults
//! 5. Submit the request to the gateway, forwarding the attached funds
//! 6. Emit the `transfer_initiated` record
//!
//! Messages run in order, so the allowance grants only happen once custody
//! has been taken. A gateway error aborts the transaction with the gateway's
//! own error, reverting the custody debit and the grants.

use common::{GatewayContract, TransferRequest};
use cosmwasm_std::{
    to_json_binary, Addr, Binary, Coin, CosmosMsg, DepsMut, Env, Event, MessageInfo,
    QuerierWrapper, Reply, Response, StdResult, SubMsg, SubMsgResult, Uint128,
};

use crate::address_codec::encode_recipient;
use crate::custody::{approve_msgs, ensure_can_debit, query_allowance, transfer_from_msg};
use crate::error::ContractError;
use crate::hash::{
    bytes32_to_hex, bytes_to_hex, compute_asset_id, parse_asset_id, COMMITMENT_PLACEHOLDER,
};
use crate::state::{
    Config, CONFIG, DEFAULT_RELAYER_FEE, DEFAULT_TIMEOUT_SECONDS, REPLY_CUSTODY_TRANSFER, STATS,
};

/// Caller-controlled parts of a transfer request
#[derive(Clone, Debug, PartialEq)]
pub struct RequestParams {
    pub asset_id: [u8; 32],
    pub amount: Uint128,
    pub recipient: String,
    pub dest_chain: Binary,
    /// None = use the configured default
    pub relayer_fee: Option<Uint128>,
    /// None = use `DEFAULT_TIMEOUT_SECONDS`
    pub timeout: Option<u64>,
    pub redeem: bool,
}

// ============================================================================
// Entry Points
// ============================================================================

/// Initiate a transfer, deriving the asset id from `symbol`
#[allow(clippy::too_many_arguments)]
pub fn execute_initiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    token: String,
    symbol: String,
    amount: Uint128,
    recipient: String,
    dest_chain: Binary,
    relayer_fee: Option<Uint128>,
    timeout: Option<u64>,
    redeem: bool,
) -> Result<Response, ContractError> {
    let params = RequestParams {
        asset_id: compute_asset_id(&symbol),
        amount,
        recipient,
        dest_chain,
        relayer_fee,
        timeout,
        redeem,
    };
    initiate_transfer(deps, env, info, token, params)
}

/// Initiate a transfer with default fee, default timeout and `redeem = true`
#[allow(clippy::too_many_arguments)]
pub fn execute_initiate_simple(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    token: String,
    symbol: String,
    amount: Uint128,
    recipient: String,
    dest_chain: Binary,
) -> Result<Response, ContractError> {
    execute_initiate(
        deps, env, info, token, symbol, amount, recipient, dest_chain, None, None, true,
    )
}

/// Initiate a transfer with a caller-supplied asset id
#[allow(clippy::too_many_arguments)]
pub fn execute_initiate_with_asset_id(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    token: String,
    asset_id: Binary,
    amount: Uint128,
    recipient: String,
    dest_chain: Binary,
    relayer_fee: Option<Uint128>,
    timeout: Option<u64>,
    redeem: bool,
) -> Result<Response, ContractError> {
    let params = RequestParams {
        asset_id: parse_asset_id(&asset_id)?,
        amount,
        recipient,
        dest_chain,
        relayer_fee,
        timeout,
        redeem,
    };
    initiate_transfer(deps, env, info, token, params)
}

// ============================================================================
// Protocol
// ============================================================================

fn initiate_transfer(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    token: String,
    params: RequestParams,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let default_relayer_fee = DEFAULT_RELAYER_FEE.load(deps.storage)?;

    // Validation and defaulting, before any message is produced:
    // amount, then recipient, then attached funds
    let mut request = build_request(&params, default_relayer_fee, Uint128::zero())?;
    request.native_cost = native_cost_from_funds(&info.funds, &config.native_denom)?;
    let token = deps.api.addr_validate(&token)?;
    let this = env.contract.address.clone();

    // Custody acquisition
    ensure_can_debit(
        &deps.querier,
        &env.block,
        &token,
        &info.sender,
        &this,
        request.amount,
    )?;
    let custody_msg = SubMsg::reply_on_error(
        transfer_from_msg(&token, &info.sender, &this, request.amount)?,
        REPLY_CUSTODY_TRANSFER,
    );

    // Gateway allowance
    let (allowance_msgs, grants) =
        gateway_allowance_msgs(&deps.querier, &this, &config, &token, request.amount)?;

    // Dispatch
    let submit_msg =
        GatewayContract(config.gateway.clone()).submit(request.clone(), info.funds.clone())?;

    STATS.update(deps.storage, |mut stats| -> StdResult<_> {
        stats.total_transfers += 1;
        Ok(stats)
    })?;

    let record = transfer_initiated_event(&token, &request, &info.sender);

    Ok(Response::new()
        .add_submessage(custody_msg)
        .add_messages(allowance_msgs)
        .add_message(submit_msg)
        .add_event(record)
        .add_attribute("method", "initiate_transfer")
        .add_attribute("relayer_fee", request.relayer_fee)
        .add_attribute("timeout", request.timeout.to_string())
        .add_attribute("native_cost", request.native_cost)
        .add_attribute("allowance_grants", grants.to_string())
        .set_data(to_json_binary(&request)?))
}

/// Handle a failed custody `TransferFrom`.
///
/// Returning an error here aborts the whole transaction, so no allowance is
/// granted and the gateway is never called.
pub fn reply_custody_transfer(msg: Reply) -> Result<Response, ContractError> {
    match msg.result {
        SubMsgResult::Err(reason) => Err(ContractError::TokenTransferFailed { reason }),
        SubMsgResult::Ok(_) => Ok(Response::new()),
    }
}

/// Validate parameters, apply defaults and encode the recipient
pub fn build_request(
    params: &RequestParams,
    default_relayer_fee: Uint128,
    native_cost: Uint128,
) -> Result<TransferRequest, ContractError> {
    if params.amount.is_zero() {
        return Err(ContractError::InvalidAmount);
    }

    let to = encode_recipient(&params.recipient)?;

    Ok(TransferRequest {
        amount: params.amount,
        relayer_fee: params.relayer_fee.unwrap_or(default_relayer_fee),
        asset_id: Binary::from(params.asset_id.to_vec()),
        redeem: params.redeem,
        to: Binary::from(to.to_vec()),
        dest: params.dest_chain.clone(),
        timeout: params.timeout.unwrap_or(DEFAULT_TIMEOUT_SECONDS),
        native_cost,
        data: Binary::default(),
    })
}

/// Amount of native funds attached for gateway costs
pub(crate) fn native_cost_from_funds(
    funds: &[Coin],
    native_denom: &str,
) -> Result<Uint128, ContractError> {
    match funds {
        [] => Ok(Uint128::zero()),
        [coin] if coin.denom == native_denom => Ok(coin.amount),
        [coin] => Err(ContractError::InvalidNativeFunds {
            reason: format!("expected {}, got {}", native_denom, coin.denom),
        }),
        _ => Err(ContractError::InvalidNativeFunds {
            reason: "only one coin may be attached".to_string(),
        }),
    }
}

/// Approve the gateway for `amount` of `token`, plus an unbounded fee-token
/// allowance when fees are paid in a different token.
///
/// Returns the messages and the number of grants performed.
fn gateway_allowance_msgs(
    querier: &QuerierWrapper,
    this: &Addr,
    config: &Config,
    token: &Addr,
    amount: Uint128,
) -> StdResult<(Vec<CosmosMsg>, u32)> {
    let current = query_allowance(querier, token, this, &config.gateway)?;
    let mut msgs = approve_msgs(token, &config.gateway, current.allowance, amount)?;
    let mut grants = 1;

    if config.fee_token != *token {
        let current_fee = query_allowance(querier, &config.fee_token, this, &config.gateway)?;
        msgs.extend(approve_msgs(
            &config.fee_token,
            &config.gateway,
            current_fee.allowance,
            Uint128::MAX,
        )?);
        grants += 1;
    }

    Ok((msgs, grants))
}

/// Local record of a submitted request, indexed off-chain.
///
/// Attribute keys are part of the external contract and must not change.
fn transfer_initiated_event(token: &Addr, request: &TransferRequest, caller: &Addr) -> Event {
    Event::new("transfer_initiated")
        .add_attribute("token", token)
        .add_attribute("asset_id", bytes_to_hex(&request.asset_id))
        .add_attribute("amount", request.amount)
        .add_attribute("caller", caller)
        .add_attribute("recipient", bytes_to_hex(&request.to))
        .add_attribute("dest_chain", bytes_to_hex(&request.dest))
        .add_attribute("commitment", bytes32_to_hex(&COMMITMENT_PLACEHOLDER))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::coins;

    const RECIPIENT: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

    fn params() -> RequestParams {
        RequestParams {
            asset_id: compute_asset_id("TEST"),
            amount: Uint128::new(100),
            recipient: RECIPIENT.to_string(),
            dest_chain: Binary::from(b"EVM-97".to_vec()),
            relayer_fee: None,
            timeout: None,
            redeem: true,
        }
    }

    #[test]
    fn test_unset_fee_and_timeout_take_defaults() {
        let request = build_request(&params(), Uint128::new(25), Uint128::zero()).unwrap();

        assert_eq!(request.relayer_fee, Uint128::new(25));
        assert_eq!(request.timeout, DEFAULT_TIMEOUT_SECONDS);
        assert_eq!(request.timeout, 86_400);
        assert_eq!(request.asset_id.as_slice(), &compute_asset_id("TEST"));
        assert!(request.redeem);
        assert!(request.data.is_empty());
    }

    #[test]
    fn test_explicit_values_are_kept_exactly() {
        let mut p = params();
        p.relayer_fee = Some(Uint128::new(7));
        p.timeout = Some(3_600);
        p.redeem = false;

        let request = build_request(&p, Uint128::new(25), Uint128::new(3)).unwrap();
        assert_eq!(request.relayer_fee, Uint128::new(7));
        assert_eq!(request.timeout, 3_600);
        assert!(!request.redeem);
        assert_eq!(request.native_cost, Uint128::new(3));
    }

    #[test]
    fn test_explicit_zero_is_not_overridden() {
        let mut p = params();
        p.relayer_fee = Some(Uint128::zero());
        p.timeout = Some(0);

        let request = build_request(&p, Uint128::new(25), Uint128::zero()).unwrap();
        assert_eq!(request.relayer_fee, Uint128::zero());
        assert_eq!(request.timeout, 0);
    }

    #[test]
    fn test_zero_amount_rejected() {
        let mut p = params();
        p.amount = Uint128::zero();
        assert_eq!(
            build_request(&p, Uint128::zero(), Uint128::zero()),
            Err(ContractError::InvalidAmount)
        );
    }

    #[test]
    fn test_recipient_is_left_padded() {
        let request = build_request(&params(), Uint128::zero(), Uint128::zero()).unwrap();
        let mut expected = [0u8; 32];
        expected[12..].copy_from_slice(&hex::decode(&RECIPIENT[2..]).unwrap());
        assert_eq!(request.to.as_slice(), &expected);
    }

    #[test]
    fn test_invalid_recipient_rejected() {
        let mut p = params();
        p.recipient = format!("0x{}", "0".repeat(40));
        assert!(matches!(
            build_request(&p, Uint128::zero(), Uint128::zero()),
            Err(ContractError::InvalidRecipient { .. })
        ));
    }

    #[test]
    fn test_native_cost_from_funds() {
        assert_eq!(
            native_cost_from_funds(&[], "uluna").unwrap(),
            Uint128::zero()
        );
        assert_eq!(
            native_cost_from_funds(&coins(500, "uluna"), "uluna").unwrap(),
            Uint128::new(500)
        );
        assert!(matches!(
            native_cost_from_funds(&coins(500, "uusd"), "uluna"),
            Err(ContractError::InvalidNativeFunds { .. })
        ));

        let two = vec![Coin::new(1, "uluna"), Coin::new(1, "uusd")];
        assert!(matches!(
            native_cost_from_funds(&two, "uluna"),
            Err(ContractError::InvalidNativeFunds { .. })
        ));
    }

    #[test]
    fn test_reply_maps_failure_to_token_transfer_failed() {
        let reply = Reply {
            id: REPLY_CUSTODY_TRANSFER,
            result: SubMsgResult::Err("insufficient funds".to_string()),
        };
        assert_eq!(
            reply_custody_transfer(reply),
            Err(ContractError::TokenTransferFailed {
                reason: "insufficient funds".to_string()
            })
        );
    }
}
