use alloy::primitives::U256;

use crate::error::ExplorerError;

// ============================================================================
// Helper Functions
// ============================================================================

/// Decimals between wei and the native display unit
pub const NATIVE_DECIMALS: u8 = 18;

/// Encode an integer as a JSON-RPC quantity (`0x` + minimal hex, 10 -> "0xa")
pub fn encode_quantity(value: u64) -> String {
    format!("0x{value:x}")
}

/// Strip the mandatory `0x` prefix and check the remaining digits
fn hex_digits(quantity: &str) -> Result<&str, ExplorerError> {
    let digits = quantity
        .strip_prefix("0x")
        .or_else(|| quantity.strip_prefix("0X"))
        .ok_or_else(|| ExplorerError::Rpc(format!("quantity without 0x prefix: {quantity:?}")))?;

    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ExplorerError::Rpc(format!(
            "invalid hex quantity: {quantity:?}"
        )));
    }

    Ok(digits)
}

/// Decode a hex quantity that fits in 64 bits (block numbers, timestamps)
pub fn decode_quantity_u64(quantity: &str) -> Result<u64, ExplorerError> {
    let digits = hex_digits(quantity)?;
    if digits.is_empty() {
        return Ok(0);
    }
    u64::from_str_radix(digits, 16)
        .map_err(|e| ExplorerError::Rpc(format!("quantity {quantity:?} out of range: {e}")))
}

/// Decode a hex quantity of up to 256 bits (wei amounts)
pub fn decode_quantity_u256(quantity: &str) -> Result<U256, ExplorerError> {
    let digits = hex_digits(quantity)?;
    if digits.is_empty() {
        return Ok(U256::ZERO);
    }
    U256::from_str_radix(digits, 16)
        .map_err(|e| ExplorerError::Rpc(format!("quantity {quantity:?} out of range: {e}")))
}

/// Format an integer amount scaled down by `10^decimals`, exactly.
/// Trailing fractional zeros are dropped.
pub fn format_units(value: U256, decimals: u8) -> String {
    let scale = U256::from(10u64).pow(U256::from(decimals));
    let (whole, fraction) = value.div_rem(scale);

    let fraction = format!("{:0>width$}", fraction.to_string(), width = usize::from(decimals));
    match fraction.trim_end_matches('0') {
        "" => whole.to_string(),
        digits => format!("{whole}.{digits}"),
    }
}

/// Wei to the native unit (10^18 wei = 1)
pub fn wei_to_native(wei: U256) -> String {
    format_units(wei, NATIVE_DECIMALS)
}
