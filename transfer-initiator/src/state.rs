//! State definitions for the transfer initiator contract

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::Item;

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:transfer-initiator";
/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Timeout applied when the caller leaves it unset (24 hours)
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 86_400;

/// Reply id for the custody `TransferFrom` submessage
pub const REPLY_CUSTODY_TRANSFER: u64 = 1;

/// Bridge configuration. Everything here is fixed at instantiation.
#[cw_serde]
pub struct Config {
    /// Gateway contract that receives transfer requests
    pub gateway: Addr,
    /// CW20 token the gateway charges relayer fees in
    pub fee_token: Addr,
    /// Denom of the native coin attached to pay gateway costs
    pub native_denom: String,
    /// Admin allowed to change the default relayer fee (None = anyone)
    pub admin: Option<Addr>,
}

#[cw_serde]
pub struct Stats {
    /// Number of successfully initiated transfers
    pub total_transfers: u64,
}

pub const CONFIG: Item<Config> = Item::new("config");

/// The only configuration value that may change after instantiation
pub const DEFAULT_RELAYER_FEE: Item<Uint128> = Item::new("default_relayer_fee");

pub const STATS: Item<Stats> = Item::new("stats");
