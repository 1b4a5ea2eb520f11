//! Decomposition engine: canonical or compatibility, applied to a fixpoint.

use crate::buffer::Utf16Buffer;
use crate::hangul;
use crate::properties::{PropertySource, UnicodeVersion};

/// Rewrite `buf[from..]` in place, replacing every decomposable code point
/// with its mapping until no further decomposition applies.
///
/// The scan runs backward from the end so a splice never invalidates
/// not-yet-visited indices. After a splice the cursor resumes just after
/// the spliced-in text, so newly introduced code points decompose in turn;
/// that rescans the mapping without any explicit recursion and yields the
/// fixpoint the Unicode algorithm requires (the decomposition graph is
/// acyclic, so this terminates).
///
/// `canonical_only` selects NFD/NFC behavior; compatibility tags are then
/// terminal. Code points introduced after `version` are terminal as well.
pub(super) fn decompose<P: PropertySource>(
    props: &P,
    buf: &mut Utf16Buffer,
    from: usize,
    canonical_only: bool,
    version: UnicodeVersion,
) {
    let mut i = buf.len();
    while i > from {
        i -= 1;
        let pos = buf.start_of_code_point(i, from);
        let (cp, width) = buf.code_point_at(pos);

        // Hangul syllables decompose arithmetically; the mapping is always
        // canonical, so it applies under every form.
        if let Some(jamo) = hangul::decompose(cp) {
            let written = match jamo {
                hangul::Decomposed::Pair(l, v) => buf.splice(pos, pos + width, [l, v]),
                hangul::Decomposed::Triple(l, v, t) => buf.splice(pos, pos + width, [l, v, t]),
            };
            i = pos + written;
            continue;
        }

        if props.introduced_in(cp) > version {
            i = pos;
            continue;
        }
        let Some(mapping) = props.decomposition(cp) else {
            i = pos;
            continue;
        };
        if !mapping.applies(canonical_only) {
            i = pos;
            continue;
        }

        let written = buf.splice(pos, pos + width, mapping.code_points());
        i = pos + written;
    }
}
