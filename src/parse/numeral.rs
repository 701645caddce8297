use logos::Logos;
use num_bigint::{BigInt, BigUint, Sign};

use crate::{error::InvalidNumeralError, parse::lexer::Token, radix::Radix};

/// A numeral with whitespace removed, split into its sign and its body.
///
/// Each body character keeps the byte offset it had in the original input so
/// that errors can point at it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Numeral {
    negative: bool,
    body:     Vec<(usize, char)>,
}

impl Numeral {
    /// Lexes `input` into a numeral.
    ///
    /// Leading and trailing whitespace is trimmed and spaces anywhere in
    /// between are dropped. At most one sign is allowed, and only before the
    /// first body character.
    ///
    /// ## Errors
    /// - `InvalidCharacter` for anything that is not a sign, `_`, an ASCII
    ///   letter or a digit.
    /// - `MisplacedSign` for a second sign or a sign after the body started.
    /// - `Empty` when no body character is left.
    ///
    /// ## Example
    /// ```
    /// use basefmt::parse::numeral::Numeral;
    ///
    /// let numeral = Numeral::lex(" -0b 0101 ").unwrap();
    /// assert!(numeral.is_negative());
    /// assert_eq!(numeral.body(), "0b0101");
    /// ```
    pub fn lex(input: &str) -> Result<Self, InvalidNumeralError> {
        let leading = input.len() - input.trim_start().len();
        let mut lexer = Token::lexer(input.trim());

        let mut negative = false;
        let mut signed = false;
        let mut body = Vec::new();

        while let Some(token) = lexer.next() {
            let offset = leading + lexer.span().start;
            match token {
                Ok(Token::Plus | Token::Minus) if signed || !body.is_empty() => {
                    return Err(InvalidNumeralError::MisplacedSign { offset });
                },
                Ok(Token::Plus) => signed = true,
                Ok(Token::Minus) => {
                    signed = true;
                    negative = true;
                },
                Ok(Token::Underscore | Token::Alphanumeric) => {
                    body.extend(lexer.slice().char_indices().map(|(i, c)| (offset + i, c)));
                },
                Err(()) => {
                    let character = lexer.slice().chars().next().unwrap_or_default();
                    return Err(InvalidNumeralError::InvalidCharacter { character, offset });
                },
            }
        }

        if body.is_empty() {
            return Err(InvalidNumeralError::Empty);
        }

        Ok(Self { negative, body })
    }

    /// Whether the numeral carried a `-` sign.
    pub const fn is_negative(&self) -> bool {
        self.negative
    }

    /// The body characters, prefix and separators included, without the sign.
    pub fn body(&self) -> String {
        self.body.iter().map(|&(_, c)| c).collect()
    }

    /// Returns the radix named by the numeral's prefix, if it has one.
    ///
    /// ## Example
    /// ```
    /// use basefmt::{Radix, parse::numeral::Numeral};
    ///
    /// assert_eq!(Numeral::lex("0X ff").unwrap().prefix(), Some(Radix::Hexadecimal));
    /// assert_eq!(Numeral::lex("ff").unwrap().prefix(), None);
    /// ```
    pub fn prefix(&self) -> Option<Radix> {
        match self.body.as_slice() {
            [(_, '0'), (_, marker), ..] => Radix::from_marker(*marker),
            _ => None,
        }
    }

    /// Reads the numeral's value in `radix`.
    ///
    /// A prefix is only recognised when it matches `radix`; otherwise its
    /// characters are read as digits, so `0b1` is a valid hexadecimal numeral.
    /// Digits are case insensitive. A single `_` may separate two digits or
    /// directly follow the prefix.
    ///
    /// ## Errors
    /// - `MissingDigits` when a prefix has nothing after it.
    /// - `InvalidDigit` for a character that is not a digit of `radix`.
    /// - `MisplacedSeparator` for a leading, trailing or doubled `_`.
    ///
    /// ## Example
    /// ```
    /// use basefmt::{Radix, parse::numeral::Numeral};
    /// use num_bigint::BigInt;
    ///
    /// let numeral = Numeral::lex("0b1").unwrap();
    /// assert_eq!(numeral.value(Radix::Binary).unwrap(), BigInt::from(1));
    /// assert_eq!(numeral.value(Radix::Hexadecimal).unwrap(), BigInt::from(0xb1));
    /// assert!(numeral.value(Radix::Octal).is_err());
    /// ```
    pub fn value(&self, radix: Radix) -> Result<BigInt, InvalidNumeralError> {
        let (prefixed, rest) = match self.body.as_slice() {
            [(offset, '0'), (_, marker), rest @ ..] if radix.is_marker(*marker) => {
                (Some(*offset), rest)
            },
            all => (None, all),
        };

        if let Some(offset) = prefixed
           && rest.is_empty()
        {
            return Err(InvalidNumeralError::MissingDigits { radix, offset });
        }

        let mut digits = Vec::with_capacity(rest.len());
        let mut after_separator = prefixed.is_none();
        let mut last_offset = 0;

        for &(offset, c) in rest {
            last_offset = offset;
            if c == '_' {
                if after_separator {
                    return Err(InvalidNumeralError::MisplacedSeparator { offset });
                }
                after_separator = true;
                continue;
            }

            let digit = c.to_digit(radix.base())
                         .and_then(|d| u8::try_from(d).ok())
                         .ok_or(InvalidNumeralError::InvalidDigit { digit: c,
                                                                    offset,
                                                                    radix })?;
            digits.push(digit);
            after_separator = false;
        }

        if after_separator {
            return Err(InvalidNumeralError::MisplacedSeparator { offset: last_offset });
        }

        let magnitude =
            BigUint::from_radix_be(&digits, radix.base()).ok_or(InvalidNumeralError::Empty)?;
        let sign = if self.negative { Sign::Minus } else { Sign::Plus };

        Ok(BigInt::from_biguint(sign, magnitude))
    }
}
