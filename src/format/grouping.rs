use std::num::NonZeroUsize;

/// Left pads `digits` with `0` up to the next multiple of `width` characters.
///
/// Strings whose length is already a multiple of `width` are returned as is.
///
/// # Example
/// ```
/// use std::num::NonZeroUsize;
///
/// use basefmt::format::grouping::zero_pad;
///
/// let four = NonZeroUsize::new(4).unwrap();
/// assert_eq!(zero_pad("101", four), "0101");
/// assert_eq!(zero_pad("11111", four), "00011111");
/// assert_eq!(zero_pad("1010", four), "1010");
/// ```
pub fn zero_pad(digits: &str, width: NonZeroUsize) -> String {
    let padded = digits.chars().count().div_ceil(width.get()) * width.get();
    format!("{digits:0>padded$}")
}

/// Splits `digits` into clusters of `width` characters counted from the left,
/// joined by single spaces.
///
/// Only the last cluster can be shorter, so callers that want even clusters
/// pad first (see [`pad_and_group`]).
///
/// # Example
/// ```
/// use std::num::NonZeroUsize;
///
/// use basefmt::format::grouping::group;
///
/// let four = NonZeroUsize::new(4).unwrap();
/// assert_eq!(group("11111111", four), "1111 1111");
/// assert_eq!(group("101", four), "101");
/// ```
pub fn group(digits: &str, width: NonZeroUsize) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / width.get());
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && i % width.get() == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }
    grouped
}

/// Zero pads `digits` to a multiple of `width` and clusters the result.
///
/// # Example
/// ```
/// use std::num::NonZeroUsize;
///
/// use basefmt::format::grouping::pad_and_group;
///
/// let four = NonZeroUsize::new(4).unwrap();
/// assert_eq!(pad_and_group("100000000", four), "0001 0000 0000");
/// ```
pub fn pad_and_group(digits: &str, width: NonZeroUsize) -> String {
    group(&zero_pad(digits, width), width)
}
