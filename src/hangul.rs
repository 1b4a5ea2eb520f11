//! Algorithmic Hangul syllable decomposition and composition.
//!
//! Hangul syllables (U+AC00..U+D7A3) decompose into Lead/Vowel/\[Tail\] jamo
//! by pure arithmetic; no table is involved. The constants and formulas are
//! those of the Unicode Standard, chapter 3.12. The composition engine tries
//! these routines before consulting the generic composition table.

use crate::codepoint::CodePoint;

/// First Hangul syllable, U+AC00.
pub const S_BASE: u32 = 0xAC00;
/// First lead consonant jamo, U+1100.
pub const L_BASE: u32 = 0x1100;
/// First vowel jamo, U+1161.
pub const V_BASE: u32 = 0x1161;
/// One before the first tail consonant jamo, U+11A7.
pub const T_BASE: u32 = 0x11A7;
/// Number of lead consonants.
pub const L_COUNT: u32 = 19;
/// Number of vowels.
pub const V_COUNT: u32 = 21;
/// Number of tail slots per LV pair (no-tail slot included).
pub const T_COUNT: u32 = 28;
/// Number of syllables per lead consonant.
pub const N_COUNT: u32 = V_COUNT * T_COUNT;
/// Number of Hangul syllables.
pub const S_COUNT: u32 = L_COUNT * N_COUNT;

/// Jamo sequence a Hangul syllable decomposes into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decomposed {
    /// LV syllable: lead consonant plus vowel.
    Pair(CodePoint, CodePoint),
    /// LVT syllable: lead consonant, vowel, tail consonant.
    Triple(CodePoint, CodePoint, CodePoint),
}

/// Decompose a Hangul syllable into its jamo.
///
/// Returns `None` for anything outside U+AC00..U+AC00+`S_COUNT`. The
/// decomposition is always canonical.
#[must_use]
pub fn decompose(cp: CodePoint) -> Option<Decomposed> {
    let s = cp.value().wrapping_sub(S_BASE);
    if s >= S_COUNT {
        return None;
    }
    let lead = CodePoint::from_valid(L_BASE + s / N_COUNT);
    let vowel = CodePoint::from_valid(V_BASE + (s % N_COUNT) / T_COUNT);
    let tail = s % T_COUNT;
    if tail == 0 {
        Some(Decomposed::Pair(lead, vowel))
    } else {
        Some(Decomposed::Triple(
            lead,
            vowel,
            CodePoint::from_valid(T_BASE + tail),
        ))
    }
}

/// Compose two adjacent code points into a Hangul syllable.
///
/// Two cases compose: a lead consonant followed by a vowel yields an LV
/// syllable, and an LV syllable (tail slot empty) followed by a tail
/// consonant yields the LVT syllable. Everything else, including U+11A7
/// itself (the tail slot placeholder, not a real jamo), returns `None`.
#[must_use]
pub fn compose(starter: CodePoint, next: CodePoint) -> Option<CodePoint> {
    let s = starter.value();
    let n = next.value();

    let l = s.wrapping_sub(L_BASE);
    let v = n.wrapping_sub(V_BASE);
    if l < L_COUNT && v < V_COUNT {
        return Some(CodePoint::from_valid(S_BASE + l * N_COUNT + v * T_COUNT));
    }

    let lv = s.wrapping_sub(S_BASE);
    let t = n.wrapping_sub(T_BASE);
    if lv < S_COUNT && lv % T_COUNT == 0 && t > 0 && t < T_COUNT {
        return Some(CodePoint::from_valid(s + t));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cp(value: u32) -> CodePoint {
        CodePoint::new(value).unwrap()
    }

    #[test]
    fn decomposes_lv_syllable() {
        // U+AC00 HANGUL SYLLABLE GA -> L, V, no tail
        assert_eq!(
            decompose(cp(0xAC00)),
            Some(Decomposed::Pair(cp(0x1100), cp(0x1161)))
        );
    }

    #[test]
    fn decomposes_lvt_syllable() {
        // U+AC01 HANGUL SYLLABLE GAG -> L, V, T
        assert_eq!(
            decompose(cp(0xAC01)),
            Some(Decomposed::Triple(cp(0x1100), cp(0x1161), cp(0x11A8)))
        );
        // U+D55C HANGUL SYLLABLE HAN
        assert_eq!(
            decompose(cp(0xD55C)),
            Some(Decomposed::Triple(cp(0x1112), cp(0x1161), cp(0x11AB)))
        );
    }

    #[test]
    fn rejects_non_syllables() {
        assert_eq!(decompose(cp(0xABFF)), None);
        assert_eq!(decompose(cp(0xD7A4)), None); // one past the last syllable
        assert_eq!(decompose(cp(0x1100)), None); // jamo, not a syllable
        assert_eq!(decompose(cp(0x0041)), None);
    }

    #[test]
    fn composes_lead_and_vowel() {
        assert_eq!(compose(cp(0x1100), cp(0x1161)), Some(cp(0xAC00)));
        // U+1112 + U+1161 -> U+D558 HANGUL SYLLABLE HA
        assert_eq!(compose(cp(0x1112), cp(0x1161)), Some(cp(0xD558)));
    }

    #[test]
    fn composes_lv_and_tail() {
        assert_eq!(compose(cp(0xAC00), cp(0x11A8)), Some(cp(0xAC01)));
    }

    #[test]
    fn rejects_invalid_compositions() {
        // LVT syllable has no empty tail slot
        assert_eq!(compose(cp(0xAC01), cp(0x11A8)), None);
        // U+11A7 is not a tail consonant
        assert_eq!(compose(cp(0xAC00), cp(0x11A7)), None);
        // vowel cannot follow a vowel
        assert_eq!(compose(cp(0x1161), cp(0x1161)), None);
        // tail cannot follow a bare lead
        assert_eq!(compose(cp(0x1100), cp(0x11A8)), None);
        assert_eq!(compose(cp(0x0041), cp(0x1161)), None);
    }

    #[test]
    fn every_syllable_round_trips() {
        for value in S_BASE..S_BASE + S_COUNT {
            let syllable = cp(value);
            let recomposed = match decompose(syllable).unwrap() {
                Decomposed::Pair(l, v) => compose(l, v).unwrap(),
                Decomposed::Triple(l, v, t) => {
                    let lv = compose(l, v).unwrap();
                    compose(lv, t).unwrap()
                }
            };
            assert_eq!(recomposed, syllable);
        }
    }
}
