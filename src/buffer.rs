//! Mutable UTF-16 buffer with code-point level primitives.
//!
//! [`Utf16Buffer`] is an index-based arena over UTF-16 code units. The four
//! normalization engines manipulate logical code points exclusively through
//! its primitives — [`code_point_at`](Utf16Buffer::code_point_at),
//! [`splice`](Utf16Buffer::splice), [`swap_adjacent`](Utf16Buffer::swap_adjacent) —
//! so surrogate-pair arithmetic lives in exactly one place.
//!
//! Every mutating primitive leaves the buffer without a split surrogate pair
//! that was not already split in the input; a dangling surrogate unit decodes
//! as an isolated code point of width 1.

use tinyvec::TinyVec;

use crate::codepoint::{CodePoint, is_high_surrogate, is_low_surrogate};

/// A mutable sequence of UTF-16 code units under normalization.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Utf16Buffer {
    units: Vec<u16>,
}

impl Utf16Buffer {
    /// Create an empty buffer.
    #[must_use]
    pub const fn new() -> Self {
        Self { units: Vec::new() }
    }

    /// Create an empty buffer with room for `capacity` code units.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            units: Vec::with_capacity(capacity),
        }
    }

    /// Number of code units (not code points).
    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Whether the buffer holds no code units.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// The underlying code units.
    #[must_use]
    pub fn as_units(&self) -> &[u16] {
        &self.units
    }

    /// The code unit at `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is out of bounds.
    #[must_use]
    pub fn unit(&self, idx: usize) -> u16 {
        self.units[idx]
    }

    /// Decode the code point starting at `idx`, returning it with its width
    /// in code units.
    ///
    /// A high surrogate followed by an in-bounds low surrogate decodes as a
    /// pair (width 2). Any other unit, including a dangling surrogate half,
    /// decodes as itself (width 1).
    ///
    /// # Panics
    ///
    /// Panics if `idx` is out of bounds.
    #[must_use]
    pub fn code_point_at(&self, idx: usize) -> (CodePoint, usize) {
        let unit = self.units[idx];
        if is_high_surrogate(unit) && idx + 1 < self.units.len() {
            let low = self.units[idx + 1];
            if is_low_surrogate(low) {
                return (CodePoint::from_surrogates(unit, low), 2);
            }
        }
        (CodePoint::from(unit), 1)
    }

    /// Start index of the code point covering `idx`.
    ///
    /// Returns `idx - 1` when `idx` sits on the low half of a surrogate pair
    /// whose high half is at or after `floor`, otherwise `idx`. Backward
    /// scans use this to step over a whole code point at a time.
    #[must_use]
    pub fn start_of_code_point(&self, idx: usize, floor: usize) -> usize {
        if idx > floor
            && is_low_surrogate(self.units[idx])
            && is_high_surrogate(self.units[idx - 1])
        {
            idx - 1
        } else {
            idx
        }
    }

    /// Append a code point, encoding it as one or two units.
    pub fn push(&mut self, cp: CodePoint) {
        if cp.requires_surrogates() {
            self.units.push(cp.high_surrogate());
            self.units.push(cp.low_surrogate());
        } else {
            self.units.push(cp.value() as u16);
        }
    }

    /// Replace the units in `start..end` with the UTF-16 encoding of
    /// `replacement`, shifting the tail. Returns the number of units
    /// written.
    ///
    /// # Panics
    ///
    /// Panics if `start..end` is not a valid unit range.
    pub fn splice<I>(&mut self, start: usize, end: usize, replacement: I) -> usize
    where
        I: IntoIterator<Item = CodePoint>,
    {
        let mut encoded: TinyVec<[u16; 8]> = TinyVec::new();
        for cp in replacement {
            if cp.requires_surrogates() {
                encoded.push(cp.high_surrogate());
                encoded.push(cp.low_surrogate());
            } else {
                encoded.push(cp.value() as u16);
            }
        }
        let written = encoded.len();
        self.units.splice(start..end, encoded);
        written
    }

    /// Swap the code point starting at `pos` with the one immediately after
    /// it, rewriting units in place. Returns the new start index of the
    /// code point that was first.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is not followed by two decodable code points.
    pub fn swap_adjacent(&mut self, pos: usize) -> usize {
        let (first, w1) = self.code_point_at(pos);
        let (second, w2) = self.code_point_at(pos + w1);
        let mut cursor = pos;
        cursor += self.write_at(cursor, second);
        let written = self.write_at(cursor, first);
        debug_assert_eq!(cursor + written, pos + w1 + w2);
        cursor
    }

    /// Iterate over the decoded code points.
    pub fn code_points(&self) -> impl Iterator<Item = CodePoint> + '_ {
        let mut idx = 0;
        std::iter::from_fn(move || {
            if idx >= self.units.len() {
                return None;
            }
            let (cp, width) = self.code_point_at(idx);
            idx += width;
            Some(cp)
        })
    }

    /// Decode to a `String`, mapping dangling surrogates to U+FFFD.
    #[must_use]
    pub fn to_string_lossy(&self) -> String {
        String::from_utf16_lossy(&self.units)
    }

    fn write_at(&mut self, pos: usize, cp: CodePoint) -> usize {
        if cp.requires_surrogates() {
            self.units[pos] = cp.high_surrogate();
            self.units[pos + 1] = cp.low_surrogate();
            2
        } else {
            self.units[pos] = cp.value() as u16;
            1
        }
    }
}

impl From<&str> for Utf16Buffer {
    fn from(s: &str) -> Self {
        Self {
            units: s.encode_utf16().collect(),
        }
    }
}

impl From<Vec<u16>> for Utf16Buffer {
    fn from(units: Vec<u16>) -> Self {
        Self { units }
    }
}
