//! Amount domain - turning typed text into token amounts

mod parser;

pub use parser::{parse_amount, try_parse_amount, AmountParser};
