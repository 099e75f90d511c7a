use common::TransferRequest;
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Coin};
use cw_storage_plus::{Item, Map};

pub const CONTRACT_NAME: &str = "crates.io:mock-gateway";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cw_serde]
pub struct Config {
    /// Token relayer fees are pulled in (None = fees are not collected)
    pub fee_token: Option<Addr>,
    /// Pull `amount` of the registered token from the submitter
    pub pull_funds: bool,
}

/// A request as the gateway received it
#[cw_serde]
pub struct Submission {
    pub sender: Addr,
    pub request: TransferRequest,
    pub funds: Vec<Coin>,
}

pub const CONFIG: Item<Config> = Item::new("config");

/// asset_id (32 bytes) => local token
pub const REGISTRY: Map<&[u8], Addr> = Map::new("registry");

/// Set while the gateway should refuse submissions
pub const REJECTION: Item<String> = Item::new("rejection");

pub const LAST_SUBMISSION: Item<Submission> = Item::new("last_submission");

pub const SUBMISSION_COUNT: Item<u64> = Item::new("submission_count");
