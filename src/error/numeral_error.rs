use thiserror::Error;

use crate::radix::Radix;

/// Represents all the ways a display string can fail to parse as an integer.
///
/// Offsets are byte offsets into the string the caller passed in, before any
/// whitespace was removed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidNumeralError {
    /// The input held no digits at all once whitespace was removed.
    #[error("Cannot parse an empty numeral.")]
    Empty,
    /// A character outside the numeral alphabet (signs, letters, digits and
    /// `_`) was found.
    #[error("Invalid character {character:?} at offset {offset}.")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Where the character starts in the input.
        offset:    usize,
    },
    /// A sign appeared after another sign or after the first digit.
    #[error("Misplaced sign at offset {offset}.")]
    MisplacedSign {
        /// Where the sign starts in the input.
        offset: usize,
    },
    /// A radix prefix was not followed by any digit.
    #[error("The {radix} prefix at offset {offset} is not followed by any digits.")]
    MissingDigits {
        /// The radix the prefix introduces.
        radix:  Radix,
        /// Where the prefix starts in the input.
        offset: usize,
    },
    /// A character is not a digit of the requested radix.
    #[error("Invalid {radix} digit {digit:?} at offset {offset}.")]
    InvalidDigit {
        /// The offending character.
        digit:  char,
        /// Where the character starts in the input.
        offset: usize,
        /// The radix the digits were read in.
        radix:  Radix,
    },
    /// A `_` separator was leading, trailing or doubled.
    #[error("Misplaced digit separator '_' at offset {offset}.")]
    MisplacedSeparator {
        /// Where the separator starts in the input.
        offset: usize,
    },
    /// The radix had to be taken from the numeral, but it has no prefix.
    #[error("Numeral has no radix prefix; expected one of 0b, 0o or 0x.")]
    MissingPrefix,
}
