//! Destination Holder Encoding
//!
//! The gateway expects the recipient as a chain-agnostic 32-byte holder
//! identifier. Raw account bytes are left-padded with zeros, which matches
//! EVM's `bytes32(uint256(uint160(addr)))` encoding.
//!
//! ## Accepted Recipient Forms
//!
//! - `0x` + 40 hex chars: EVM address (20 bytes)
//! - `0x` + 64 hex chars: 32-byte account (e.g. substrate), used as-is
//! - bech32 (`terra1...`, `cosmos1...`): 20 or 32 byte payload
//!
//! The all-zero account is rejected in every form.

use bech32::{FromBase32, Variant};
use cosmwasm_std::{StdError, StdResult};

use crate::error::ContractError;

/// Encode a recipient string into the 32-byte destination holder format
pub fn encode_recipient(recipient: &str) -> Result<[u8; 32], ContractError> {
    let raw = parse_account(recipient.trim()).map_err(|e| ContractError::InvalidRecipient {
        reason: e.to_string(),
    })?;

    if raw.iter().all(|b| *b == 0) {
        return Err(ContractError::InvalidRecipient {
            reason: "zero address".to_string(),
        });
    }

    Ok(left_pad(&raw))
}

/// Left-pad up to 32 raw bytes into a 32-byte word
pub fn left_pad(raw: &[u8]) -> [u8; 32] {
    let mut result = [0u8; 32];
    let start = 32 - raw.len().min(32);
    result[start..].copy_from_slice(&raw[raw.len() - (32 - start)..]);
    result
}

fn parse_account(addr: &str) -> StdResult<Vec<u8>> {
    if addr.is_empty() {
        return Err(StdError::generic_err("empty address"));
    }

    match addr.strip_prefix("0x").or_else(|| addr.strip_prefix("0X")) {
        Some(hex_str) => parse_hex_account(hex_str),
        None => decode_bech32_address(addr),
    }
}

/// Parse the hex body of an EVM address (20 bytes) or a 32-byte account
fn parse_hex_account(hex_str: &str) -> StdResult<Vec<u8>> {
    if hex_str.len() != 40 && hex_str.len() != 64 {
        return Err(StdError::generic_err(format!(
            "Invalid hex account length: expected 40 or 64 hex chars, got {}",
            hex_str.len()
        )));
    }

    hex::decode(hex_str).map_err(|e| StdError::generic_err(format!("Invalid hex: {}", e)))
}

/// Decode a bech32 address to its raw 20 or 32 byte payload
///
/// Only the original bech32 checksum is accepted; bech32m is rejected.
pub fn decode_bech32_address(addr: &str) -> StdResult<Vec<u8>> {
    let (_hrp, data, variant) = bech32::decode(addr)
        .map_err(|e| StdError::generic_err(format!("Invalid bech32 address: {}", e)))?;

    if variant != Variant::Bech32 {
        return Err(StdError::generic_err("Invalid bech32 variant: bech32m"));
    }

    let bytes = Vec::<u8>::from_base32(&data)
        .map_err(|e| StdError::generic_err(format!("Invalid base32 data: {}", e)))?;

    if bytes.len() != 20 && bytes.len() != 32 {
        return Err(StdError::generic_err(format!(
            "Invalid address length: expected 20 or 32 bytes, got {}",
            bytes.len()
        )));
    }

    Ok(bytes)
}
