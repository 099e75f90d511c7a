//! Error types for the transfer initiator contract
//!
//! There is no variant for gateway failures: an error raised by the gateway
//! during submission reaches the caller unchanged.

use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Instantiation Errors
    // ========================================================================

    #[error("Zero address: {field} must be set")]
    ZeroAddress { field: String },

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: only admin can perform this action")]
    Unauthorized,

    // ========================================================================
    // Request Validation Errors
    // ========================================================================

    #[error("Invalid amount: must be greater than zero")]
    InvalidAmount,

    #[error("Invalid recipient: {reason}")]
    InvalidRecipient { reason: String },

    #[error("Invalid asset id: expected 32 bytes, got {got}")]
    InvalidAssetId { got: usize },

    #[error("Invalid native funds: {reason}")]
    InvalidNativeFunds { reason: String },

    // ========================================================================
    // Custody Errors
    // ========================================================================

    #[error("Token transfer failed: {reason}")]
    TokenTransferFailed { reason: String },
}
