//! Quick-check engine: a single forward scan deciding "already normalized".

use crate::buffer::Utf16Buffer;
use crate::codepoint::{is_high_surrogate, is_low_surrogate};
use crate::properties::{PropertySource, QuickCheck};

use super::NormalizationForm;

/// Scan `buf[from..]` and report whether it can be proven normalized to
/// `form`, together with the offset of the last code point known to be
/// stable — the safe restart point for the other engines.
///
/// ASCII units are always stable. Dangling surrogate halves are treated as
/// stable units. A combining class lower than its predecessor's proves the
/// canonical order violated; any quick-check flag other than `Yes` ends the
/// scan with "cannot guarantee" (`Maybe` is conservatively treated the same
/// as `No`, trading fast-path hits for a simpler scan; output is
/// unaffected). A trailing unpaired high surrogate clamps the reported
/// offset so a restart can never split a pair.
pub(super) fn quick_check<P: PropertySource>(
    props: &P,
    buf: &Utf16Buffer,
    form: NormalizationForm,
    from: usize,
) -> (bool, usize) {
    let mut last_stable = from;
    let mut last_class = 0u8;

    let mut pos = from;
    while pos < buf.len() {
        let unit = buf.unit(pos);
        if unit < 0x80 {
            last_class = 0;
            last_stable = pos;
            pos += 1;
            continue;
        }

        let (cp, width) = buf.code_point_at(pos);
        if width == 1 && (is_high_surrogate(unit) || is_low_surrogate(unit)) {
            last_class = 0;
            last_stable = pos;
            pos += 1;
            continue;
        }

        let class = props.combining_class(cp);
        if class != 0 && class < last_class {
            return (false, last_stable);
        }
        if props.quick_check(cp, form) != QuickCheck::Yes {
            return (false, last_stable);
        }

        last_class = class;
        if class == 0 {
            last_stable = pos;
        }
        pos += width;
    }

    let len = buf.len();
    if len > from && is_high_surrogate(buf.unit(len - 1)) {
        return (true, len - 1);
    }
    (true, len)
}
