//! Composition engine: canonical recomposition onto preceding starters.

use crate::buffer::Utf16Buffer;
use crate::codepoint::CodePoint;
use crate::hangul;
use crate::properties::{PropertySource, UnicodeVersion};

/// Class tracking sentinel: no class can exceed it, so composition is only
/// reachable through starter adjacency until a mark has been seen.
const NO_CLASS: u16 = 255;

/// Fold combining code points in `buf[from..]` back onto their nearest
/// preceding starter. Only meaningful after decomposition and canonical
/// ordering have run on the same range.
///
/// A code point may attempt composition when it immediately follows the
/// starter, or when its combining class strictly exceeds the highest class
/// seen since the starter (the UAX #15 non-blocked rule). Hangul arithmetic
/// is tried before the composition table. On success the starter is
/// rewritten in place, the combining code point is deleted, and the scan
/// resumes at the code point that shifted into its slot, which is what
/// makes multi-step recomposition (base plus several marks) work. Code
/// points introduced after `version` reset the starter state and are never
/// composed.
pub(super) fn compose<P: PropertySource>(
    props: &P,
    buf: &mut Utf16Buffer,
    from: usize,
    version: UnicodeVersion,
) {
    // (start index, current value); the value tracks prior compositions
    let mut starter: Option<(usize, CodePoint)> = None;
    let mut starter_end = usize::MAX;
    let mut last_class = NO_CLASS;

    let mut pos = from;
    while pos < buf.len() {
        let (cp, width) = buf.code_point_at(pos);

        if props.introduced_in(cp) > version {
            starter = None;
            starter_end = usize::MAX;
            last_class = NO_CLASS;
            pos += width;
            continue;
        }

        let class = props.combining_class(cp);

        if let Some((start, value)) = starter {
            let unblocked = pos == starter_end || u16::from(class) > last_class;
            if unblocked {
                let composed =
                    hangul::compose(value, cp).or_else(|| props.compose_pair(value, cp));
                if let Some(composed) = composed {
                    let old_width = value.len_utf16();
                    let new_width = buf.splice(start, start + old_width, [composed]);
                    // the tail shifted when the starter changed width
                    pos = pos + new_width - old_width;
                    buf.splice(pos, pos + width, []);
                    starter = Some((start, composed));
                    starter_end = start + new_width;
                    // re-examine whatever shifted into the deleted slot
                    continue;
                }
            }
        }

        if class == 0 {
            starter = Some((pos, cp));
            starter_end = pos + width;
        }
        last_class = u16::from(class);
        pos += width;
    }
}
