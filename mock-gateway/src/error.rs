use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Gateway rejected request: {reason}")]
    Rejected { reason: String },

    #[error("Unknown asset: {asset_id}")]
    UnknownAsset { asset_id: String },

    #[error("Invalid asset id: expected 32 bytes, got {got}")]
    InvalidAssetId { got: usize },
}
