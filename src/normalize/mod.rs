//! UAX #15 normalization over UTF-16 buffers.
//!
//! [`normalize`] orchestrates the four engines: a quick-check scan first;
//! when it cannot prove the buffer normalized, decomposition runs from the
//! last stable offset, then canonical ordering, then (for composed forms)
//! composition. The property table is injected via
//! [`PropertySource`](crate::PropertySource), and a Unicode version ceiling
//! is threaded through every lookup so output is reproducible regardless of
//! which data release is bundled.

mod compose;
mod decompose;
mod order;
mod quick_check;

use crate::buffer::Utf16Buffer;
use crate::codepoint::CodePoint;
use crate::properties::{PropertySource, TableProperties, UnicodeVersion};

/// Target normalization form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NormalizationForm {
    /// Canonical decomposition.
    Nfd,
    /// Canonical decomposition followed by canonical composition.
    Nfc,
    /// Compatibility decomposition.
    Nfkd,
    /// Compatibility decomposition followed by canonical composition.
    Nfkc,
}

impl NormalizationForm {
    /// Whether the form ends with canonical composition (C, KC).
    #[must_use]
    pub const fn is_composed(self) -> bool {
        matches!(self, Self::Nfc | Self::Nfkc)
    }

    /// Whether the form applies compatibility mappings (KD, KC).
    #[must_use]
    pub const fn is_compat(self) -> bool {
        matches!(self, Self::Nfkd | Self::Nfkc)
    }

    /// Index of the form's 2-bit field in the packed quick-check flags.
    pub(crate) const fn index(self) -> u8 {
        match self {
            Self::Nfd => 0,
            Self::Nfc => 1,
            Self::Nfkd => 2,
            Self::Nfkc => 3,
        }
    }
}

/// Normalize `buf[from..]` in place to the requested form, pinned to
/// `version`. `buf[..from]` is left untouched.
///
/// Requesting [`UnicodeVersion::Unassigned`] pins to the latest bundled
/// data version. A `from` at or past the end of the buffer is a no-op.
/// The call never fails for well-formed UTF-16, and malformed
/// input (dangling surrogates) passes through as isolated stable units
/// without ever producing a split pair that was not already in the input.
pub fn normalize<P: PropertySource>(
    props: &P,
    buf: &mut Utf16Buffer,
    form: NormalizationForm,
    version: UnicodeVersion,
    from: usize,
) {
    let Some(tail) = buf.as_units().get(from..) else {
        // offset past the end: nothing to normalize
        return;
    };
    if tail.iter().all(|&unit| unit < 0x80) {
        return;
    }

    let version = if version == UnicodeVersion::Unassigned {
        UnicodeVersion::LATEST
    } else {
        version
    };

    let (normalized, last_stable) = quick_check::quick_check(props, buf, form, from);
    if normalized {
        return;
    }

    decompose::decompose(props, buf, last_stable, !form.is_compat(), version);
    order::canonical_order(props, buf, last_stable, version);
    if form.is_composed() {
        compose::compose(props, buf, last_stable, version);
    }
}

/// Normalize a string using the bundled property table.
#[must_use]
pub fn normalized(s: &str, form: NormalizationForm) -> String {
    let mut buf = Utf16Buffer::from(s);
    normalize(
        &TableProperties::new(),
        &mut buf,
        form,
        UnicodeVersion::Unassigned,
        0,
    );
    buf.to_string_lossy()
}

/// Whether the quick-check scan can prove `s` is already normalized.
///
/// Conservative: a `false` answer means "cannot guarantee", not "definitely
/// not normalized". A `true` answer guarantees [`normalized`] returns the
/// input unchanged.
#[must_use]
pub fn is_normalized(s: &str, form: NormalizationForm) -> bool {
    let buf = Utf16Buffer::from(s);
    quick_check::quick_check(&TableProperties::new(), &buf, form, 0).0
}

/// Combining class under a version ceiling: code points newer than the
/// ceiling count as stable anchors (class 0).
pub(crate) fn versioned_combining_class<P: PropertySource>(
    props: &P,
    cp: CodePoint,
    version: UnicodeVersion,
) -> u8 {
    if props.introduced_in(cp) > version {
        0
    } else {
        props.combining_class(cp)
    }
}
