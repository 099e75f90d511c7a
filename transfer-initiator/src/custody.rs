//! CW20 custody primitives
//!
//! The initiator touches tokens only through these helpers: an explicit
//! balance/allowance check before the custody debit, the `TransferFrom`
//! debit itself, and approve-style allowance grants to the gateway.

use cosmwasm_std::{
    to_json_binary, Addr, BlockInfo, CosmosMsg, QuerierWrapper, StdResult, Uint128, WasmMsg,
};
use cw20::{AllowanceResponse, BalanceResponse, Cw20ExecuteMsg, Cw20QueryMsg, Expiration};

use crate::error::ContractError;

/// Query the CW20 balance of `account`
pub fn query_balance(querier: &QuerierWrapper, token: &Addr, account: &Addr) -> StdResult<Uint128> {
    let res: BalanceResponse = querier.query_wasm_smart(
        token,
        &Cw20QueryMsg::Balance {
            address: account.to_string(),
        },
    )?;
    Ok(res.balance)
}

/// Query the raw CW20 allowance from `owner` to `spender`
pub fn query_allowance(
    querier: &QuerierWrapper,
    token: &Addr,
    owner: &Addr,
    spender: &Addr,
) -> StdResult<AllowanceResponse> {
    querier.query_wasm_smart(
        token,
        &Cw20QueryMsg::Allowance {
            owner: owner.to_string(),
            spender: spender.to_string(),
        },
    )
}

/// Check that `spender` can debit `amount` of `token` from `owner`.
///
/// CW20 reports a refused debit only when the `TransferFrom` executes, so the
/// balance and the unexpired allowance are checked before any message is sent.
pub fn ensure_can_debit(
    querier: &QuerierWrapper,
    block: &BlockInfo,
    token: &Addr,
    owner: &Addr,
    spender: &Addr,
    amount: Uint128,
) -> Result<(), ContractError> {
    let balance =
        query_balance(querier, token, owner).map_err(|e| ContractError::TokenTransferFailed {
            reason: format!("balance query failed: {}", e),
        })?;
    if balance < amount {
        return Err(ContractError::TokenTransferFailed {
            reason: format!("insufficient balance: have {}, need {}", balance, amount),
        });
    }

    let allowance = query_allowance(querier, token, owner, spender).map_err(|e| {
        ContractError::TokenTransferFailed {
            reason: format!("allowance query failed: {}", e),
        }
    })?;
    let usable = if allowance.expires.is_expired(block) {
        Uint128::zero()
    } else {
        allowance.allowance
    };
    if usable < amount {
        return Err(ContractError::TokenTransferFailed {
            reason: format!("insufficient allowance: have {}, need {}", usable, amount),
        });
    }

    Ok(())
}

/// Debit `amount` of `token` from `owner` into `recipient`
pub fn transfer_from_msg(
    token: &Addr,
    owner: &Addr,
    recipient: &Addr,
    amount: Uint128,
) -> StdResult<CosmosMsg> {
    Ok(WasmMsg::Execute {
        contract_addr: token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::TransferFrom {
            owner: owner.to_string(),
            recipient: recipient.to_string(),
            amount,
        })?,
        funds: vec![],
    }
    .into())
}

/// Set the allowance for `spender` to exactly `target`.
///
/// CW20 only offers relative increase/decrease, so the delta against the
/// current allowance is sent. Returns no message when nothing changes.
pub fn approve_msgs(
    token: &Addr,
    spender: &Addr,
    current: Uint128,
    target: Uint128,
) -> StdResult<Vec<CosmosMsg>> {
    let msg = if target > current {
        Cw20ExecuteMsg::IncreaseAllowance {
            spender: spender.to_string(),
            amount: target - current,
            expires: Some(Expiration::Never {}),
        }
    } else if target < current {
        Cw20ExecuteMsg::DecreaseAllowance {
            spender: spender.to_string(),
            amount: current - target,
            expires: Some(Expiration::Never {}),
        }
    } else {
        return Ok(vec![]);
    };

    Ok(vec![WasmMsg::Execute {
        contract_addr: token.to_string(),
        msg: to_json_binary(&msg)?,
        funds: vec![],
    }
    .into()])
}
