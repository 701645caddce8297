use std::num::NonZeroUsize;

use num_bigint::{BigInt, Sign};

use crate::{
    format::{
        grouping::pad_and_group,
        options::{LetterCase, SignStyle},
    },
    radix::Radix,
};

/// Cluster width used for binary output.
pub const BINARY_GROUP_WIDTH: usize = 4;

/// Renders integers as `<prefix> <digits>` numerals in one radix.
///
/// The defaults match [`crate::to_binary`], [`crate::to_hex`] and
/// [`crate::to_octal`]: binary digits are zero padded and grouped by four,
/// hexadecimal digits are uppercase, hexadecimal and octal are not grouped,
/// and negative values get a leading `-`.
///
/// # Example
/// ```
/// use basefmt::{Formatter, LetterCase, Radix};
///
/// let lower_hex = Formatter::new(Radix::Hexadecimal).with_digit_case(LetterCase::Lower);
/// assert_eq!(lower_hex.format(&0xbeef.into()), "0x beef");
///
/// let wide = Formatter::new(Radix::Binary).with_group_width(8);
/// assert_eq!(wide.format(&5.into()), "0b 00000101");
///
/// let ungrouped = Formatter::new(Radix::Binary).with_group_width(0);
/// assert_eq!(ungrouped.format(&5.into()), "0b 101");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Formatter {
    radix:       Radix,
    group_width: Option<NonZeroUsize>,
    digit_case:  LetterCase,
    prefix_case: LetterCase,
    sign:        SignStyle,
}

impl Formatter {
    /// Creates the default formatter for `radix`.
    pub const fn new(radix: Radix) -> Self {
        let (group_width, digit_case) = match radix {
            Radix::Binary => (NonZeroUsize::new(BINARY_GROUP_WIDTH), LetterCase::Lower),
            Radix::Octal => (None, LetterCase::Lower),
            Radix::Hexadecimal => (None, LetterCase::Upper),
        };

        Self { radix,
               group_width,
               digit_case,
               prefix_case: LetterCase::Lower,
               sign: SignStyle::Leading }
    }

    /// Creates a formatter that reproduces the legacy output character for
    /// character.
    ///
    /// Negative values use [`SignStyle::Truncated`], and hexadecimal output is
    /// uppercased as a whole, prefix included.
    ///
    /// # Example
    /// ```
    /// use basefmt::{Formatter, Radix};
    ///
    /// let bin = Formatter::compat(Radix::Binary);
    /// assert_eq!(bin.format(&255.into()), "0b 1111 1111");
    /// assert_eq!(bin.format(&(-5).into()), "0b b101");
    /// assert_eq!(bin.format(&(-12).into()), "0b 000b 1100");
    ///
    /// let hex = Formatter::compat(Radix::Hexadecimal);
    /// assert_eq!(hex.format(&255.into()), "0X FF");
    /// assert_eq!(hex.format(&(-255).into()), "0X XFF");
    ///
    /// let oct = Formatter::compat(Radix::Octal);
    /// assert_eq!(oct.format(&(-8).into()), "0o o10");
    /// ```
    pub const fn compat(radix: Radix) -> Self {
        let formatter = Self::new(radix).with_sign(SignStyle::Truncated);
        match radix {
            Radix::Hexadecimal => formatter.with_prefix_case(LetterCase::Upper),
            Radix::Binary | Radix::Octal => formatter,
        }
    }

    /// Sets the cluster width. A width of `0` disables padding and grouping.
    #[must_use]
    pub const fn with_group_width(mut self, width: usize) -> Self {
        self.group_width = NonZeroUsize::new(width);
        self
    }

    /// Sets the case of digit letters.
    #[must_use]
    pub const fn with_digit_case(mut self, case: LetterCase) -> Self {
        self.digit_case = case;
        self
    }

    /// Sets the case of the prefix token.
    #[must_use]
    pub const fn with_prefix_case(mut self, case: LetterCase) -> Self {
        self.prefix_case = case;
        self
    }

    /// Sets where the sign of negative values goes.
    #[must_use]
    pub const fn with_sign(mut self, sign: SignStyle) -> Self {
        self.sign = sign;
        self
    }

    /// The radix this formatter renders in.
    pub const fn radix(&self) -> Radix {
        self.radix
    }

    /// The cluster width, if digits are grouped.
    pub const fn group_width(&self) -> Option<NonZeroUsize> {
        self.group_width
    }

    /// Renders `value`.
    pub fn format(&self, value: &BigInt) -> String {
        let digits = value.magnitude().to_str_radix(self.radix.base());

        let (sign, payload) = match (value.sign(), self.sign) {
            (Sign::Minus, SignStyle::Leading) => ("-", digits),
            (Sign::Minus, SignStyle::Truncated) => ("", format!("{}{digits}", self.radix.marker())),
            (Sign::NoSign | Sign::Plus, _) => ("", digits),
        };

        let payload = match self.group_width {
            Some(width) => pad_and_group(&payload, width),
            None => payload,
        };

        let rendered = format!("{sign}{} {}",
                               self.prefix_case.apply(self.radix.prefix()),
                               self.digit_case.apply(&payload));

        tracing::trace!(radix = %self.radix, %value, %rendered, "formatted integer");

        rendered
    }
}
