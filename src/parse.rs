use num_bigint::BigInt;

use crate::{error::InvalidNumeralError, parse::numeral::Numeral, radix::Radix};

/// The lexer module tokenizes display numerals.
///
/// It drops spaces, separates signs and `_` separators from runs of letters
/// and digits, and rejects every other character.
pub mod lexer;
/// The lexed form of a numeral and the rules for reading its value.
///
/// # Responsibilities
/// - Tracks the sign and the byte offset of every body character.
/// - Recognises a radix prefix (`0b`, `0o`, `0x`, either case).
/// - Validates digits and `_` separators and builds the `BigInt` value.
pub mod numeral;

/// Parses a binary numeral such as `0b 1111 1111`.
///
/// Spaces are ignored wherever they appear and the `0b` prefix is optional.
///
/// ## Errors
/// Returns an `InvalidNumeralError` if the input is empty or is not a binary
/// numeral once spaces are removed.
///
/// ## Example
/// ```
/// use basefmt::parse_binary;
/// use num_bigint::BigInt;
///
/// assert_eq!(parse_binary("0b 1111 1111").unwrap(), BigInt::from(255));
/// assert_eq!(parse_binary("1 0 1").unwrap(), BigInt::from(5));
/// assert_eq!(parse_binary("-0b 0101").unwrap(), BigInt::from(-5));
/// assert!(parse_binary("").is_err());
/// ```
pub fn parse_binary(s: &str) -> Result<BigInt, InvalidNumeralError> {
    parse_radix(s, Radix::Binary)
}

/// Parses a hexadecimal numeral such as `0x FF`. Digits and prefix are case
/// insensitive.
///
/// ## Errors
/// Returns an `InvalidNumeralError` if the input is empty or is not a
/// hexadecimal numeral once spaces are removed.
///
/// ## Example
/// ```
/// use basefmt::parse_hex;
/// use num_bigint::BigInt;
///
/// assert_eq!(parse_hex("0x FF").unwrap(), BigInt::from(255));
/// assert_eq!(parse_hex("0X ff").unwrap(), BigInt::from(255));
/// assert!(parse_hex("zz").is_err());
/// ```
pub fn parse_hex(s: &str) -> Result<BigInt, InvalidNumeralError> {
    parse_radix(s, Radix::Hexadecimal)
}

/// Parses an octal numeral such as `0o 377`.
///
/// ## Errors
/// Returns an `InvalidNumeralError` if the input is empty or is not an octal
/// numeral once spaces are removed.
///
/// ## Example
/// ```
/// use basefmt::parse_octal;
/// use num_bigint::BigInt;
///
/// assert_eq!(parse_octal("0o 377").unwrap(), BigInt::from(255));
/// assert!(parse_octal("0o 8").is_err());
/// ```
pub fn parse_octal(s: &str) -> Result<BigInt, InvalidNumeralError> {
    parse_radix(s, Radix::Octal)
}

/// Parses a numeral in `radix`. The prefix for `radix` is optional.
///
/// ## Errors
/// Returns an `InvalidNumeralError` describing the first problem found.
pub fn parse_radix(s: &str, radix: Radix) -> Result<BigInt, InvalidNumeralError> {
    let result = Numeral::lex(s).and_then(|numeral| numeral.value(radix));
    log_outcome(s, Some(radix), &result);
    result
}

/// Parses a numeral whose radix is given by its own `0b`, `0o` or `0x`
/// prefix.
///
/// ## Errors
/// Returns `InvalidNumeralError::MissingPrefix` when the numeral has no
/// prefix, or any other `InvalidNumeralError` from reading its digits.
///
/// ## Example
/// ```
/// use basefmt::{error::InvalidNumeralError, parse_prefixed};
/// use num_bigint::BigInt;
///
/// assert_eq!(parse_prefixed("0o 17").unwrap(), BigInt::from(15));
/// assert_eq!(parse_prefixed("-0x 1F").unwrap(), BigInt::from(-31));
/// assert_eq!(parse_prefixed("255"), Err(InvalidNumeralError::MissingPrefix));
/// ```
pub fn parse_prefixed(s: &str) -> Result<BigInt, InvalidNumeralError> {
    let numeral = Numeral::lex(s);
    let radix = numeral.as_ref().ok().and_then(Numeral::prefix);
    let result = numeral.and_then(|numeral| {
                            radix.ok_or(InvalidNumeralError::MissingPrefix)
                                 .and_then(|radix| numeral.value(radix))
                        });
    log_outcome(s, radix, &result);
    result
}

fn log_outcome(input: &str, radix: Option<Radix>, result: &Result<BigInt, InvalidNumeralError>) {
    match result {
        Ok(value) => tracing::trace!(?radix, input, %value, "parsed numeral"),
        Err(error) => tracing::debug!(?radix, input, %error, "rejected numeral"),
    }
}
