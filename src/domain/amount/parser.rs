//! Decimal text to fixed-point amount parsing

use ethereum_types::U256;
use tracing::debug;

use crate::shared::errors::AmountError;
use crate::shared::types::{CurrencyAmount, Token};

/// Parses user input into base-unit amounts for a given token
pub struct AmountParser;

impl AmountParser {
    pub fn new() -> Self {
        Self
    }

    /// Scale `text` by `10^token.decimals`.
    ///
    /// Fractional digits beyond the token's decimals are truncated, never
    /// rounded up.
    pub fn parse(&self, text: &str, token: &Token) -> Result<CurrencyAmount, AmountError> {
        let input = text.trim();
        if input.is_empty() {
            return Err(AmountError::Empty);
        }
        if input.starts_with('-') {
            return Err(AmountError::Negative(input.to_string()));
        }

        let (int_part, frac_part) = match input.split_once('.') {
            Some((int_part, frac_part)) => (int_part, frac_part),
            None => (input, ""),
        };

        let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
        if !all_digits(int_part) || !all_digits(frac_part) || (int_part.is_empty() && frac_part.is_empty()) {
            return Err(AmountError::NotNumeric(input.to_string()));
        }

        let decimals = token.decimals as usize;
        let kept_frac = &frac_part[..frac_part.len().min(decimals)];
        if kept_frac.len() < frac_part.len() {
            debug!(
                "Truncating {} to {} decimals for {}",
                input, token.decimals, token.symbol
            );
        }

        let mut digits = String::with_capacity(int_part.len() + decimals);
        digits.push_str(int_part);
        digits.push_str(kept_frac);
        digits.push_str(&"0".repeat(decimals - kept_frac.len()));

        let digits = digits.trim_start_matches('0');
        if digits.is_empty() {
            return Ok(CurrencyAmount::zero(token.clone()));
        }

        let quantity = U256::from_dec_str(digits).map_err(|_| AmountError::Overflow {
            input: input.to_string(),
            decimals: token.decimals,
        })?;

        Ok(CurrencyAmount::from_raw(token.clone(), quantity))
    }
}

impl Default for AmountParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse `text` as an amount of `token`
pub fn parse_amount(text: &str, token: &Token) -> Result<CurrencyAmount, AmountError> {
    AmountParser::new().parse(text, token)
}

/// Lenient variant for live form input: anything unparsable or zero is `None`
pub fn try_parse_amount(text: &str, token: &Token) -> Option<CurrencyAmount> {
    parse_amount(text, token).ok().filter(|amount| !amount.is_zero())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ethereum_types::Address;
    use proptest::prelude::*;

    fn token(decimals: u8) -> Token {
        Token::new(1, Address::repeat_byte(0xfe), decimals, "FESW")
    }

    #[test]
    fn test_parse_scales_by_decimals() {
        let amount = parse_amount("10", &token(18)).unwrap();
        assert_eq!(amount.quotient(), U256::from(10u64) * U256::exp10(18));

        let amount = parse_amount("1.5", &token(6)).unwrap();
        assert_eq!(amount.quotient(), U256::from(1_500_000u64));

        let amount = parse_amount(".25", &token(2)).unwrap();
        assert_eq!(amount.quotient(), U256::from(25u64));

        let amount = parse_amount("7.", &token(0)).unwrap();
        assert_eq!(amount.quotient(), U256::from(7u64));

        let amount = parse_amount("  3 ", &token(0)).unwrap();
        assert_eq!(amount.quotient(), U256::from(3u64));
    }

    #[test]
    fn test_parse_truncates_excess_fraction() {
        let amount = parse_amount("1.23456789", &token(6)).unwrap();
        assert_eq!(amount.quotient(), U256::from(1_234_567u64));

        let amount = parse_amount("0.0000009", &token(6)).unwrap();
        assert!(amount.is_zero());
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(parse_amount("", &token(18)), Err(AmountError::Empty));
        assert_eq!(parse_amount("   ", &token(18)), Err(AmountError::Empty));
        assert!(matches!(parse_amount("-1", &token(18)), Err(AmountError::Negative(_))));
        for bad in [".", "abc", "1.2.3", "1e18", "+1", "1,000", "0x10"] {
            assert!(
                matches!(parse_amount(bad, &token(18)), Err(AmountError::NotNumeric(_))),
                "{} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_parse_rejects_overflow() {
        let huge = "1".repeat(70);
        assert!(matches!(
            parse_amount(&huge, &token(18)),
            Err(AmountError::Overflow { decimals: 18, .. })
        ));
        // fits without scaling
        assert!(parse_amount(&huge, &token(0)).is_ok());
    }

    #[test]
    fn test_try_parse_amount_drops_zero() {
        assert!(try_parse_amount("0", &token(18)).is_none());
        assert!(try_parse_amount("0.000", &token(18)).is_none());
        assert!(try_parse_amount("nope", &token(18)).is_none());
        assert!(try_parse_amount("0.1", &token(18)).is_some());
    }

    proptest! {
        #[test]
        fn prop_exact_form_round_trips(
            int_part in "[0-9]{1,20}",
            frac_part in "[0-9]{0,24}",
            decimals in 0u8..=30,
        ) {
            let token = token(decimals);
            let text = if frac_part.is_empty() { int_part } else { format!("{}.{}", int_part, frac_part) };
            let parsed = parse_amount(&text, &token).unwrap();
            let reparsed = parse_amount(&parsed.to_exact(), &token).unwrap();
            prop_assert_eq!(reparsed, parsed);
        }
    }
}
