//! Utility functions and helpers

use ethereum_types::{U256, U512};

/// `10^exp`, or `None` when it does not fit into 256 bits
pub fn pow10(exp: u8) -> Option<U256> {
    let ten = U256::from(10u8);
    (0..exp).try_fold(U256::one(), |acc, _| acc.checked_mul(ten))
}

/// Format a base-unit quantity as an exact decimal string.
/// Trailing fractional zeros are dropped: `1500000` with 6 decimals is `"1.5"`.
pub fn format_units(quantity: U256, decimals: u8) -> String {
    let digits = quantity.to_string();
    let decimals = decimals as usize;

    let (int_part, frac_part) = if digits.len() > decimals {
        let split = digits.len() - decimals;
        (digits[..split].to_string(), digits[split..].to_string())
    } else {
        ("0".to_string(), format!("{}{}", "0".repeat(decimals - digits.len()), digits))
    };

    let frac_part = frac_part.trim_end_matches('0');
    if frac_part.is_empty() {
        int_part
    } else {
        format!("{}.{}", int_part, frac_part)
    }
}

/// Format a base-unit quantity keeping `significant` digits, rounding down.
pub fn format_significant(quantity: U256, decimals: u8, significant: usize) -> String {
    let digits = quantity.to_string();
    if quantity.is_zero() || digits.len() <= significant {
        return format_units(quantity, decimals);
    }

    let kept = significant.max(1);
    let truncated = format!("{}{}", &digits[..kept], "0".repeat(digits.len() - kept));
    // `truncated` only holds ASCII digits that came from a valid U256
    match U256::from_dec_str(&truncated) {
        Ok(value) => format_units(value, decimals),
        Err(_) => format_units(quantity, decimals),
    }
}

/// Whole-token part of a quantity with `,` thousands separators: `2,500,000`
pub fn format_whole_with_separators(quantity: U256, decimals: u8) -> String {
    let whole = match pow10(decimals) {
        Some(scale) => quantity / scale,
        None => U256::zero(),
    };

    let digits = whole.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn pow10_wide(exp: u32) -> Option<U512> {
    let ten = U512::from(10u8);
    (0..exp).try_fold(U512::one(), |acc, _| acc.checked_mul(ten))
}

/// `numerator / denominator` with `significant` digits, rounding half up.
///
/// Trailing fractional zeros are dropped: `2/3` at 5 digits is `"0.66667"`,
/// `3/2` is `"1.5"`. `None` for a zero denominator.
pub fn format_fraction_significant(numerator: U512, denominator: U512, significant: usize) -> Option<String> {
    if denominator.is_zero() {
        return None;
    }
    if numerator.is_zero() {
        return Some("0".to_string());
    }
    let significant = significant.max(1) as i64;
    let ten = U512::from(10u8);

    // digits before the point; zero or negative below 1
    let whole = numerator / denominator;
    let magnitude = if whole.is_zero() {
        let mut shifted = numerator;
        let mut magnitude = 1i64;
        while shifted < denominator {
            shifted = shifted.checked_mul(ten)?;
            magnitude -= 1;
        }
        magnitude
    } else {
        whole.to_string().len() as i64
    };

    let places = significant - magnitude;
    let (scaled_num, scaled_den) = if places >= 0 {
        (numerator.checked_mul(pow10_wide(places as u32)?)?, denominator)
    } else {
        (numerator, denominator.checked_mul(pow10_wide((-places) as u32)?)?)
    };
    let two = U512::from(2u8);
    let rounded = (scaled_num.checked_mul(two)?.checked_add(scaled_den)?) / scaled_den.checked_mul(two)?;

    if places <= 0 {
        return Some(rounded.checked_mul(pow10_wide((-places) as u32)?)?.to_string());
    }

    let places = places as usize;
    let digits = rounded.to_string();
    let digits = if digits.len() <= places {
        format!("{}{}", "0".repeat(places + 1 - digits.len()), digits)
    } else {
        digits
    };
    let (int_part, frac_part) = digits.split_at(digits.len() - places);
    let frac_part = frac_part.trim_end_matches('0');
    if frac_part.is_empty() {
        Some(int_part.to_string())
    } else {
        Some(format!("{}.{}", int_part, frac_part))
    }
}

/// Generate unique ID
pub fn generate_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Serde helper: byte vectors as `0x`-prefixed hex strings
pub mod hex_bytes {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("0x{}", hex::encode(bytes)))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let s = String::deserialize(deserializer)?;
        let digits = s.strip_prefix("0x").unwrap_or(&s);
        hex::decode(digits).map_err(serde::de::Error::custom)
    }
}

/// Serde helper: lists of byte vectors as hex strings
pub mod hex_bytes_vec {
    use serde::ser::SerializeSeq;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(items: &[Vec<u8>], serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(items.len()))?;
        for item in items {
            seq.serialize_element(&format!("0x{}", hex::encode(item)))?;
        }
        seq.end()
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Vec<u8>>, D::Error> {
        let items = Vec::<String>::deserialize(deserializer)?;
        items
            .iter()
            .map(|s| hex::decode(s.strip_prefix("0x").unwrap_or(s)).map_err(serde::de::Error::custom))
            .collect()
    }
}
