//! Validated code point type and surrogate-pair arithmetic.

use std::fmt;

use crate::error::Error;

/// Highest valid Unicode code point.
pub const MAX_CODE_POINT: u32 = 0x10_FFFF;

/// A Unicode code point: an unsigned scalar value in `0..=0x10FFFF`.
///
/// Unlike [`char`], lone surrogate values (U+D800..=U+DFFF) are
/// representable. The engines walk arbitrary UTF-16 and must treat a
/// dangling surrogate unit as an isolated, stable code point rather than
/// reject the buffer. Values above U+10FFFF are rejected at construction,
/// so "code point out of range" is unrepresentable past this boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CodePoint(u32);

impl CodePoint {
    /// The highest valid code point, U+10FFFF.
    pub const MAX: Self = Self(MAX_CODE_POINT);

    /// Create a code point, rejecting values above U+10FFFF.
    #[must_use]
    pub const fn new(value: u32) -> Option<Self> {
        if value <= MAX_CODE_POINT {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Create a code point from a value already known to be in range.
    ///
    /// Used for values produced by in-range arithmetic (Hangul composition,
    /// surrogate decoding) and for entries of the generated property table.
    pub(crate) const fn from_valid(value: u32) -> Self {
        debug_assert!(value <= MAX_CODE_POINT);
        Self(value)
    }

    /// The scalar value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Whether this code point needs a surrogate pair in UTF-16.
    #[must_use]
    pub const fn requires_surrogates(self) -> bool {
        self.0 >= 0x1_0000
    }

    /// Number of UTF-16 code units this code point occupies (1 or 2).
    #[must_use]
    pub const fn len_utf16(self) -> usize {
        if self.requires_surrogates() { 2 } else { 1 }
    }

    /// High (leading) surrogate for a supplementary-plane code point.
    #[must_use]
    pub const fn high_surrogate(self) -> u16 {
        debug_assert!(self.requires_surrogates());
        (0xD7C0 + (self.0 >> 10)) as u16
    }

    /// Low (trailing) surrogate for a supplementary-plane code point.
    #[must_use]
    pub const fn low_surrogate(self) -> u16 {
        debug_assert!(self.requires_surrogates());
        (0xDC00 + (self.0 & 0x3FF)) as u16
    }

    /// Combine a UTF-16 surrogate pair into the code point it encodes.
    #[must_use]
    pub const fn from_surrogates(high: u16, low: u16) -> Self {
        debug_assert!(is_high_surrogate(high) && is_low_surrogate(low));
        Self((((high as u32) - 0xD800) << 10) + ((low as u32) - 0xDC00) + 0x1_0000)
    }
}

/// Whether `unit` is a UTF-16 high (leading) surrogate.
#[must_use]
pub const fn is_high_surrogate(unit: u16) -> bool {
    unit & 0xFC00 == 0xD800
}

/// Whether `unit` is a UTF-16 low (trailing) surrogate.
#[must_use]
pub const fn is_low_surrogate(unit: u16) -> bool {
    unit & 0xFC00 == 0xDC00
}

impl TryFrom<u32> for CodePoint {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self, Error> {
        Self::new(value).ok_or(Error::CodePointOutOfRange(value))
    }
}

impl From<char> for CodePoint {
    fn from(c: char) -> Self {
        Self(c as u32)
    }
}

impl From<u16> for CodePoint {
    fn from(unit: u16) -> Self {
        Self(u32::from(unit))
    }
}

impl fmt::Display for CodePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U+{:04X}", self.0)
    }
}
