//! Utility module with this crate's error types.

/// An out-of-bounds error.
///
/// This error indicates an index value that is out of bounds for some range,
/// notably `0..=15` for index values of [`AnsiColor`](crate::color::AnsiColor).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutOfBoundsError {
    pub value: usize,
    pub expected: std::ops::RangeInclusive<usize>,
}

impl OutOfBoundsError {
    /// Create a new out-of-bounds error.
    pub fn new(value: impl Into<usize>, expected: std::ops::RangeInclusive<usize>) -> Self {
        Self {
            value: value.into(),
            expected,
        }
    }
}

impl std::fmt::Display for OutOfBoundsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "{} does not fit into range {}..={}",
            self.value,
            self.expected.start(),
            self.expected.end()
        ))
    }
}

impl std::error::Error for OutOfBoundsError {}

// ====================================================================================================================

/// An erroneous color format.
///
/// This error covers the hashed hexadecimal notation accepted by
/// [`Rgb::try_from`](crate::color::Rgb), i.e., `#RGB` and `#RRGGBB`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorFormatError {
    /// A color format that does not start with the `#` prefix.
    UnknownFormat,

    /// A color format with an unexpected number of characters. For example,
    /// `#12` is missing a hexadecimal digit and `#12345` has one too many.
    UnexpectedCharacters,

    /// A color format with a malformed hexadecimal digit. For example, `#efg`
    /// has a malformed third coordinate.
    MalformedHex,
}

impl std::fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use ColorFormatError::*;

        match self {
            UnknownFormat => f.write_str("color format should start with `#` but does not"),
            UnexpectedCharacters => {
                f.write_str("color format should be `#RGB` or `#RRGGBB` but has another length")
            }
            MalformedHex => {
                f.write_str("color format coordinates should be hexadecimal digits but are not")
            }
        }
    }
}

impl std::error::Error for ColorFormatError {}
