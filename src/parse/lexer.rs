use logos::Logos;

/// Represents a lexical token of a display numeral.
///
/// Spaces are skipped wherever they appear, which is what makes parsing
/// insensitive to digit grouping. Letters and digits are kept together as one
/// run; the numeral parser decides which of them are prefix and which are
/// digits once the radix is known.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r" +")]
pub enum Token {
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `_`, the digit separator.
    #[token("_")]
    Underscore,
    /// A run of ASCII letters and digits, such as `0b1111` or `FF`.
    #[regex(r"[0-9A-Za-z]+")]
    Alphanumeric,
}
