//! Error types for norm16.

use std::fmt;

/// Result type alias for norm16 operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for norm16 operations.
///
/// The normalization engines themselves never fail: every code point has a
/// well-defined (possibly degenerate) property lookup. The only fallible
/// surface is constructing a [`CodePoint`](crate::CodePoint) from an
/// arbitrary integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Value is above U+10FFFF and cannot be a Unicode code point.
    CodePointOutOfRange(u32),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CodePointOutOfRange(value) => {
                write!(f, "value {value:#x} is not a valid Unicode code point")
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::CodePointOutOfRange(0x0011_0000);
        assert!(err.to_string().contains("0x110000"));
        assert!(err.to_string().contains("not a valid"));
    }
}
