//! Canonical ordering engine: stable reordering of combining marks.

use crate::buffer::Utf16Buffer;
use crate::properties::{PropertySource, UnicodeVersion};

use super::versioned_combining_class;

/// Reorder `buf[from..]` so every maximal run of non-zero combining
/// classes is non-decreasing, leaving starters (class 0) as fixed anchors.
///
/// The reordering is bubble-style adjacent transposition: compare each
/// adjacent pair, swap on strict `>`, and step the cursor back one code
/// point after a swap to re-examine the newly exposed left neighbor. Ties
/// are never swapped, so the sort is stable and relative order within a
/// class is preserved. Code points introduced after `version` count as
/// class-0 anchors.
pub(super) fn canonical_order<P: PropertySource>(
    props: &P,
    buf: &mut Utf16Buffer,
    from: usize,
    version: UnicodeVersion,
) {
    let mut pos = from;
    while pos < buf.len() {
        let (first, w1) = buf.code_point_at(pos);
        let next = pos + w1;
        if next >= buf.len() {
            break;
        }
        let (second, w2) = buf.code_point_at(next);

        let second_class = versioned_combining_class(props, second, version);
        if second_class == 0 {
            // second is a new anchor; no pair ending at it can ever swap
            pos = next + w2;
            continue;
        }

        let first_class = versioned_combining_class(props, first, version);
        if first_class > second_class {
            buf.swap_adjacent(pos);
            if pos > from {
                pos = buf.start_of_code_point(pos - 1, from);
            }
        } else {
            pos = next;
        }
    }
}
