/// Numeral parsing errors.
///
/// Defines the error raised when a display string cannot be read back as an
/// integer: empty input, characters outside the numeral alphabet, digits that
/// do not belong to the requested radix, or misplaced signs and separators.
pub mod numeral_error;
/// Radix selection errors.
///
/// Raised when a radix name given on the command line or through `FromStr`
/// does not name a supported base.
pub mod radix_error;

pub use numeral_error::InvalidNumeralError;
pub use radix_error::UnknownRadixError;
