/// Letter case applied to a rendered token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LetterCase {
    /// `0x ff`
    #[default]
    Lower,
    /// `0X FF`
    Upper,
}

impl LetterCase {
    /// Returns `text` converted to this case. Only ASCII letters change.
    pub fn apply(self, text: &str) -> String {
        match self {
            Self::Lower => text.to_ascii_lowercase(),
            Self::Upper => text.to_ascii_uppercase(),
        }
    }
}

/// Where the sign of a negative value ends up in the rendered string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignStyle {
    /// The sign goes in front of the prefix and only the magnitude is padded
    /// and grouped: `-0b 0101`. Output always parses back.
    #[default]
    Leading,
    /// Legacy rendering. The payload is the signed native numeral (`-0b101`)
    /// with its first two characters cut off, so the marker letter lands in
    /// the digits and is padded and grouped with them: `0b b101`.
    ///
    /// Output for negative values does not parse back.
    Truncated,
}
