//! # basefmt
//!
//! basefmt renders integers as human readable binary, octal and hexadecimal
//! numerals and parses such numerals back into integers.
//!
//! Output takes the form `<prefix> <digits>`, with binary digits zero padded
//! and grouped in clusters of four:
//!
//! ```
//! use basefmt::{parse_binary, to_binary, to_hex, to_octal};
//! use num_bigint::BigInt;
//!
//! assert_eq!(to_binary(255), "0b 1111 1111");
//! assert_eq!(to_hex(255), "0x FF");
//! assert_eq!(to_octal(255), "0o 377");
//! assert_eq!(parse_binary(&to_binary(255)).unwrap(), BigInt::from(255));
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    clippy::unwrap_used,
    clippy::expect_used,
    missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::error::Error;

use num_bigint::BigInt;

/// Provides the error types raised by parsing and radix selection.
///
/// # Responsibilities
/// - Describes every way a numeral can be rejected, with the byte offset of
///   the offending character where there is one.
/// - Implements `std::error::Error` and `Display` for reporting.
pub mod error;
/// Turns integers into prefixed, grouped display strings.
///
/// # Responsibilities
/// - Provides `to_binary`, `to_hex` and `to_octal`.
/// - Provides the configurable `Formatter`, including a compatibility mode
///   for the legacy rendering of negative values and hexadecimal prefixes.
pub mod format;
/// Reads display strings back into integers.
///
/// # Responsibilities
/// - Ignores spaces anywhere in the input.
/// - Accepts an optional sign and an optional radix prefix.
/// - Reports invalid input through `InvalidNumeralError`.
pub mod parse;
/// Declares the supported radixes and their prefixes.
pub mod radix;

pub use error::{InvalidNumeralError, UnknownRadixError};
pub use format::{
    formatter::Formatter,
    options::{LetterCase, SignStyle},
    to_binary, to_hex, to_octal,
};
pub use parse::{parse_binary, parse_hex, parse_octal, parse_prefixed, parse_radix};
pub use radix::Radix;

/// Which way `convert` translates its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Decimal integer in, display numeral out.
    Format,
    /// Display numeral in, decimal integer out.
    Parse,
}

/// Translates `input` between decimal and a display numeral.
///
/// When formatting, `radix` defaults to binary and `compat` selects the
/// legacy rendering (see [`Formatter::compat`]). When parsing, `radix` is
/// taken from the numeral's prefix if it is not given, and `compat` has no
/// effect.
///
/// # Errors
/// Returns an error if the decimal input is not an integer, or if the numeral
/// cannot be parsed.
///
/// # Examples
/// ```
/// use basefmt::{Direction, Radix, convert};
///
/// let out = convert("255", Direction::Format, Some(Radix::Hexadecimal), false).unwrap();
/// assert_eq!(out, "0x FF");
///
/// let out = convert("0b 1111 1111", Direction::Parse, None, false).unwrap();
/// assert_eq!(out, "255");
///
/// // Not a hexadecimal numeral.
/// assert!(convert("zz", Direction::Parse, Some(Radix::Hexadecimal), false).is_err());
/// ```
pub fn convert(input: &str,
               direction: Direction,
               radix: Option<Radix>,
               compat: bool)
               -> Result<String, Box<dyn Error>> {
    tracing::debug!(?direction, ?radix, compat, input, "converting");

    match direction {
        Direction::Format => {
            let value: BigInt = input.trim().parse()?;
            let radix = radix.unwrap_or(Radix::Binary);
            let formatter = if compat { Formatter::compat(radix) } else { Formatter::new(radix) };
            Ok(formatter.format(&value))
        },
        Direction::Parse => {
            let value = match radix {
                Some(radix) => parse_radix(input, radix)?,
                None => parse_prefixed(input)?,
            };
            Ok(value.to_string())
        },
    }
}
