//! Configuration handlers.

use cosmwasm_std::{DepsMut, MessageInfo, Response, Uint128};

use crate::error::ContractError;
use crate::state::{CONFIG, DEFAULT_RELAYER_FEE};

/// Overwrite the default relayer fee.
///
/// No bounds are applied. When the contract has no admin the setter is open
/// to any sender.
pub fn execute_set_default_relayer_fee(
    deps: DepsMut,
    info: MessageInfo,
    fee: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if let Some(admin) = &config.admin {
        if info.sender != *admin {
            return Err(ContractError::Unauthorized);
        }
    }

    let previous = DEFAULT_RELAYER_FEE.load(deps.storage)?;
    DEFAULT_RELAYER_FEE.save(deps.storage, &fee)?;

    Ok(Response::new()
        .add_attribute("method", "set_default_relayer_fee")
        .add_attribute("sender", info.sender)
        .add_attribute("previous_fee", previous)
        .add_attribute("fee", fee))
}
