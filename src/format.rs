use num_bigint::BigInt;

use crate::{format::formatter::Formatter, radix::Radix};

/// The configurable renderer behind the `to_*` functions.
///
/// A `Formatter` is bound to one radix and decides how digits are grouped,
/// which letter case is used for digits and prefix, and where the sign of a
/// negative value goes.
///
/// # Responsibilities
/// - Converts a `BigInt` into its digit string in the target radix.
/// - Applies padding, grouping, casing and sign placement.
/// - Offers a compatibility mode that reproduces the legacy output exactly.
pub mod formatter;
/// Zero padding and fixed width digit clustering.
pub mod grouping;
/// Rendering options shared by every radix.
pub mod options;

/// Renders `n` as a prefixed binary numeral grouped in clusters of four.
///
/// The digits are left padded with zeros to a multiple of four. Negative
/// values carry a leading `-` before the prefix.
///
/// # Example
/// ```
/// use basefmt::to_binary;
///
/// assert_eq!(to_binary(255), "0b 1111 1111");
/// assert_eq!(to_binary(5), "0b 0101");
/// assert_eq!(to_binary(0), "0b 0000");
/// assert_eq!(to_binary(-5), "-0b 0101");
/// ```
pub fn to_binary(n: impl Into<BigInt>) -> String {
    Formatter::new(Radix::Binary).format(&n.into())
}

/// Renders `n` as a prefixed hexadecimal numeral with uppercase digits.
///
/// # Example
/// ```
/// use basefmt::to_hex;
///
/// assert_eq!(to_hex(255), "0x FF");
/// assert_eq!(to_hex(-255), "-0x FF");
/// ```
pub fn to_hex(n: impl Into<BigInt>) -> String {
    Formatter::new(Radix::Hexadecimal).format(&n.into())
}

/// Renders `n` as a prefixed octal numeral.
///
/// # Example
/// ```
/// use basefmt::to_octal;
///
/// assert_eq!(to_octal(255), "0o 377");
/// assert_eq!(to_octal(8), "0o 10");
/// ```
pub fn to_octal(n: impl Into<BigInt>) -> String {
    Formatter::new(Radix::Octal).format(&n.into())
}
