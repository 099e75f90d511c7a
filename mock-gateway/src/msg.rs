use common::TransferRequest;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Binary;

pub use common::RegisteredTokenResponse;

use crate::state::Submission;

#[cw_serde]
pub struct InstantiateMsg {
    /// CW20 token relayer fees are collected in
    pub fee_token: Option<String>,
    /// Pull the bridged tokens from the submitter, like a real gateway
    pub pull_funds: bool,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Gateway interface: accept a transfer request
    Submit { request: TransferRequest },
    /// Register the local token for an asset id
    RegisterAsset { asset_id: Binary, token: String },
    /// Refuse every submission with `reason` (None = accept again)
    SetRejection { reason: Option<String> },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Gateway interface: resolve an asset id to its registered token
    #[returns(RegisteredTokenResponse)]
    RegisteredToken { asset_id: Binary },
    /// The most recent accepted submission, if any
    #[returns(LastSubmissionResponse)]
    LastSubmission {},
    /// Number of accepted submissions
    #[returns(SubmissionCountResponse)]
    SubmissionCount {},
}

#[cw_serde]
pub struct LastSubmissionResponse {
    pub submission: Option<Submission>,
}

#[cw_serde]
pub struct SubmissionCountResponse {
    pub count: u64,
}
