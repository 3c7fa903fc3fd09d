//! Account address validation and EIP-55 checksum formatting

use ethereum_types::Address;
use ethers::utils::{parse_checksummed, to_checksum};

use crate::shared::errors::EncodingError;

/// Parse a `0x`-prefixed, 40 hex digit account address.
///
/// All-lowercase and all-uppercase inputs are accepted as is. Mixed-case input
/// is treated as checksummed and must match its EIP-55 checksum.
pub fn parse_address(input: &str) -> Result<Address, EncodingError> {
    let invalid = || EncodingError::InvalidAddress(input.to_string());

    let digits = input.strip_prefix("0x").ok_or_else(invalid)?;
    if digits.len() != 40 {
        return Err(invalid());
    }

    let has_lower = digits.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = digits.chars().any(|c| c.is_ascii_uppercase());
    if has_lower && has_upper {
        parse_checksummed(input, None).map_err(|_| invalid())
    } else {
        digits.parse::<Address>().map_err(|_| invalid())
    }
}

/// Classify a string as a well-formed account address.
pub fn is_address(input: &str) -> bool {
    parse_address(input).is_ok()
}

/// Render an address in EIP-55 mixed-case checksum form.
pub fn to_checksum_address(address: &Address) -> String {
    to_checksum(address, None)
}

/// Shorten an address for log lines: `0x5aAe...eAed`
pub fn shorten_address(address: &Address) -> String {
    let full = to_checksum_address(address);
    format!("{}...{}", &full[..6], &full[full.len() - 4..])
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHECKSUMMED: [&str; 4] = [
        "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
        "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359",
        "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB",
        "0xD1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb",
    ];

    #[test]
    fn test_checksum_vectors() {
        for expected in CHECKSUMMED {
            let address = parse_address(&expected.to_lowercase()).unwrap();
            assert_eq!(to_checksum_address(&address), expected);
        }
    }

    #[test]
    fn test_accepts_valid_checksum_and_single_case() {
        for addr in CHECKSUMMED {
            assert!(is_address(addr));
            assert!(is_address(&addr.to_lowercase()));
            assert!(is_address(&format!("0x{}", addr[2..].to_uppercase())));
        }
    }

    #[test]
    fn test_rejects_bad_checksum() {
        // flip the case of one letter
        let bad = "0x5aaeb6053F3E94C9b9A09f33669435E7Ef1BeAed";
        assert!(!is_address(bad));
    }

    #[test]
    fn test_rejects_malformed() {
        assert!(!is_address(""));
        assert!(!is_address("0x"));
        assert!(!is_address("5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"));
        assert!(!is_address("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAe"));
        assert!(!is_address("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAedd"));
        assert!(!is_address("0xzzAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"));
    }

    #[test]
    fn test_shorten_address() {
        let address = parse_address(CHECKSUMMED[0]).unwrap();
        assert_eq!(shorten_address(&address), "0x5aAe...eAed");
    }
}
