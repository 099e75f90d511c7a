//! Asset identifier hashing
//!
//! Asset identifiers are the keccak256 hash of the asset's human-readable
//! symbol, matching the gateway's `keccak256(bytes(symbol))` convention.
//! The mapping is shared with the gateway and is not enforced locally.

use cosmwasm_std::Binary;
use tiny_keccak::{Hasher, Keccak};

use crate::error::ContractError;

/// Commitment reported in the local transfer record.
///
/// The authoritative commitment is emitted by the gateway itself.
pub const COMMITMENT_PLACEHOLDER: [u8; 32] = [0u8; 32];

/// Compute keccak256 hash of arbitrary data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Derive the 32-byte asset identifier for a symbol
pub fn compute_asset_id(symbol: &str) -> [u8; 32] {
    keccak256(symbol.as_bytes())
}

/// Validate a caller-supplied asset identifier
pub fn parse_asset_id(asset_id: &Binary) -> Result<[u8; 32], ContractError> {
    let bytes = asset_id.as_slice();
    if bytes.len() != 32 {
        return Err(ContractError::InvalidAssetId { got: bytes.len() });
    }
    let mut result = [0u8; 32];
    result.copy_from_slice(bytes);
    Ok(result)
}

/// Convert 32-byte hash to hex string (for attributes)
pub fn bytes32_to_hex(bytes: &[u8; 32]) -> String {
    bytes_to_hex(bytes)
}

/// 0x-prefixed hex of arbitrary bytes
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}
