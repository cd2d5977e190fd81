//! Unit conversion and number formatting.
//!
//! Quantities are parsed into [`U256`] so total supply in wei and 256-bit
//! JSON-RPC values convert without going through a float. Rounding happens
//! once, at the final fixed-point step, and is half-up.

use alloy_primitives::U256;

/// Decimals of ether in wei.
pub const ETHER_DECIMALS: usize = 18;

/// Decimals of gwei in wei.
pub const GWEI_DECIMALS: usize = 9;

fn pow10(exponent: usize) -> Option<U256> {
    U256::from(10u64).checked_pow(U256::from(exponent as u64))
}

/// Parse a base-unit integer given as a run of ASCII digits.
pub fn parse_decimal_u256(value: &str) -> Option<U256> {
    let value = value.trim();
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    U256::from_str_radix(value, 10).ok()
}

/// Parse a JSON-RPC hex quantity (`0x…`).
pub fn parse_hex_u256(hex: &str) -> Option<U256> {
    let hex = hex.trim();
    let digits = hex.strip_prefix("0x").or_else(|| hex.strip_prefix("0X"))?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    U256::from_str_radix(digits, 16).ok()
}

/// Convert a base-unit integer string to a fixed-point major-unit string.
///
/// Returns `None` if `value` is not a non-empty run of ASCII digits or does
/// not fit in 256 bits.
///
/// ```
/// use explorer_tools::units::base_units_to_major;
///
/// assert_eq!(base_units_to_major("1500000000", 9, 2).as_deref(), Some("1.50"));
/// ```
pub fn base_units_to_major(value: &str, decimals: usize, fraction_digits: usize) -> Option<String> {
    format_fixed(parse_decimal_u256(value)?, decimals, fraction_digits)
}

/// Render `amount / 10^decimals` with exactly `fraction_digits` digits.
pub fn format_fixed(amount: U256, decimals: usize, fraction_digits: usize) -> Option<String> {
    let scaled = if fraction_digits < decimals {
        let divisor = pow10(decimals - fraction_digits)?;
        let (quotient, remainder) = amount.div_rem(divisor);
        // half-up: remainder * 2 >= divisor
        if remainder >= divisor - remainder {
            quotient.checked_add(U256::from(1u64))?
        } else {
            quotient
        }
    } else {
        amount.checked_mul(pow10(fraction_digits - decimals)?)?
    };

    if fraction_digits == 0 {
        return Some(scaled.to_string());
    }
    let (integer, fraction) = scaled.div_rem(pow10(fraction_digits)?);
    Some(format!(
        "{}.{:0>width$}",
        integer,
        fraction.to_string(),
        width = fraction_digits
    ))
}

/// Wei to ether with 6 fractional digits.
pub fn wei_to_ether(wei: &str) -> Option<String> {
    base_units_to_major(wei, ETHER_DECIMALS, 6)
}

/// Wei to gwei with 2 fractional digits.
pub fn wei_to_gwei(wei: &str) -> Option<String> {
    base_units_to_major(wei, GWEI_DECIMALS, 2)
}

/// Convert a JSON-RPC hex quantity (`0x…`) to a decimal string.
pub fn hex_quantity_to_decimal(hex: &str) -> Option<String> {
    parse_hex_u256(hex).map(|value| value.to_string())
}

/// Convert a JSON-RPC hex quantity to `u64`, for values known to be small.
pub fn hex_quantity_to_u64(hex: &str) -> Option<u64> {
    let hex = hex.trim();
    let digits = hex.strip_prefix("0x").or_else(|| hex.strip_prefix("0X"))?;
    u64::from_str_radix(digits, 16).ok()
}

/// Insert `,` between groups of three integer digits.
///
/// Any fractional part is passed through untouched.
pub fn group_thousands(number: &str) -> String {
    let (sign, unsigned) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3 + 1);
    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match fraction {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

/// Drop trailing fractional zeros (and a bare trailing `.`).
pub fn trim_fraction_zeros(number: &str) -> &str {
    if !number.contains('.') {
        return number;
    }
    number.trim_end_matches('0').trim_end_matches('.')
}
