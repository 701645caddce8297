use std::{fmt, str::FromStr};

use crate::error::UnknownRadixError;

/// A numeral base supported by the formatter and the parser.
///
/// Every radix has a two character prefix made of a `0` followed by a marker
/// letter, such as `0x` for hexadecimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Radix {
    /// Base 2, prefix `0b`.
    Binary,
    /// Base 8, prefix `0o`.
    Octal,
    /// Base 16, prefix `0x`.
    Hexadecimal,
}

impl Radix {
    /// All supported radixes, in ascending order of base.
    pub const ALL: [Self; 3] = [Self::Binary, Self::Octal, Self::Hexadecimal];

    /// Returns the numeric base.
    ///
    /// # Example
    /// ```
    /// use basefmt::Radix;
    ///
    /// assert_eq!(Radix::Binary.base(), 2);
    /// assert_eq!(Radix::Octal.base(), 8);
    /// assert_eq!(Radix::Hexadecimal.base(), 16);
    /// ```
    pub const fn base(self) -> u32 {
        match self {
            Self::Binary => 2,
            Self::Octal => 8,
            Self::Hexadecimal => 16,
        }
    }

    /// Returns the lowercase marker letter that follows the `0` of the prefix.
    pub const fn marker(self) -> char {
        match self {
            Self::Binary => 'b',
            Self::Octal => 'o',
            Self::Hexadecimal => 'x',
        }
    }

    /// Returns the lowercase prefix token, e.g. `"0b"`.
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Binary => "0b",
            Self::Octal => "0o",
            Self::Hexadecimal => "0x",
        }
    }

    /// Returns the human readable name used in messages.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Binary => "binary",
            Self::Octal => "octal",
            Self::Hexadecimal => "hexadecimal",
        }
    }

    /// Checks whether `c` is this radix's marker letter, in either case.
    pub const fn is_marker(self, c: char) -> bool {
        c.to_ascii_lowercase() == self.marker()
    }

    /// Looks up the radix whose marker letter is `c`, ignoring case.
    ///
    /// # Example
    /// ```
    /// use basefmt::Radix;
    ///
    /// assert_eq!(Radix::from_marker('X'), Some(Radix::Hexadecimal));
    /// assert_eq!(Radix::from_marker('d'), None);
    /// ```
    pub fn from_marker(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|radix| radix.is_marker(c))
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Radix {
    type Err = UnknownRadixError;

    /// Parses a radix from a base number, a marker letter or a name.
    ///
    /// # Example
    /// ```
    /// use basefmt::Radix;
    ///
    /// assert_eq!("hex".parse::<Radix>().unwrap(), Radix::Hexadecimal);
    /// assert_eq!("2".parse::<Radix>().unwrap(), Radix::Binary);
    /// assert!("decimal".parse::<Radix>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "2" | "b" | "bin" | "binary" => Ok(Self::Binary),
            "8" | "o" | "oct" | "octal" => Ok(Self::Octal),
            "16" | "x" | "h" | "hex" | "hexadecimal" => Ok(Self::Hexadecimal),
            _ => Err(UnknownRadixError { name: s.to_string() }),
        }
    }
}
