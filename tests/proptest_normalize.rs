//! Property-based tests for the normalization engine.
//!
//! Uses proptest to verify invariants that must hold across all valid inputs:
//! idempotence, canonical equivalence between forms, combining-class
//! monotonicity after decomposition, and quick-check soundness.

use norm16::buffer::Utf16Buffer;
use norm16::normalize::{NormalizationForm, is_normalized, normalize, normalized};
use norm16::properties::{PropertySource, TableProperties, UnicodeVersion};
use proptest::prelude::*;

const FORMS: [NormalizationForm; 4] = [
    NormalizationForm::Nfd,
    NormalizationForm::Nfc,
    NormalizationForm::Nfkd,
    NormalizationForm::Nfkc,
];

// ============================================================================
// Strategies
// ============================================================================

/// Characters the bundled property table carries full data for: ASCII,
/// Latin-1, combining marks, compatibility ligatures, Hangul, and a few
/// supplementary-plane entries. Strings built from these exercise every
/// engine stage.
fn covered_char() -> impl Strategy<Value = char> {
    prop::sample::select(vec![
        'a', 'Z', ' ', '0', '!', '\u{00C0}', '\u{00C5}', '\u{00C7}', '\u{00E9}', '\u{00F1}',
        '\u{00BD}', '\u{0300}', '\u{0301}', '\u{0302}', '\u{0308}', '\u{030A}', '\u{0323}',
        '\u{0327}', '\u{0345}', '\u{1EA6}', '\u{2000}', '\u{2044}', '\u{212B}', '\u{FB01}',
        '\u{1100}', '\u{1161}', '\u{11A8}', '\u{AC00}', '\u{D55C}', '\u{D7A3}', '\u{1D15E}',
        '\u{2F800}',
    ])
}

fn covered_string() -> impl Strategy<Value = String> {
    prop::collection::vec(covered_char(), 0..40).prop_map(|chars| chars.into_iter().collect())
}

/// Arbitrary UTF-16 unit sequences, including dangling surrogates. The
/// engine must treat those as inert width-1 units rather than panic.
fn raw_units() -> impl Strategy<Value = Vec<u16>> {
    prop::collection::vec(any::<u16>(), 0..60)
}

fn apply(units: &[u16], form: NormalizationForm) -> Vec<u16> {
    let props = TableProperties::new();
    let mut buf = Utf16Buffer::from(units.to_vec());
    normalize(&props, &mut buf, form, UnicodeVersion::Unassigned, 0);
    buf.as_units().to_vec()
}

// ============================================================================
// Idempotence and Canonical Equivalence
// ============================================================================

proptest! {
    /// Normalizing twice produces the same result as normalizing once,
    /// for every form.
    #[test]
    fn normalization_is_idempotent(s in covered_string()) {
        for form in FORMS {
            let once = normalized(&s, form);
            let twice = normalized(&once, form);
            prop_assert_eq!(&twice, &once, "form {:?} not idempotent", form);
        }
    }

    /// Idempotence holds even on ill-formed UTF-16: dangling surrogates
    /// are stable units and never merge or split.
    #[test]
    fn idempotent_on_arbitrary_units(units in raw_units()) {
        for form in FORMS {
            let once = apply(&units, form);
            let twice = apply(&once, form);
            prop_assert_eq!(&twice, &once, "form {:?} not idempotent on raw units", form);
        }
    }

    /// NFC is reachable through NFD: composing a decomposed string gives
    /// the same result as composing the original.
    #[test]
    fn nfc_of_nfd_equals_nfc(s in covered_string()) {
        let direct = normalized(&s, NormalizationForm::Nfc);
        let via_nfd = normalized(
            &normalized(&s, NormalizationForm::Nfd),
            NormalizationForm::Nfc,
        );
        prop_assert_eq!(via_nfd, direct);
    }

    /// Likewise for the compatibility forms.
    #[test]
    fn nfkc_of_nfkd_equals_nfkc(s in covered_string()) {
        let direct = normalized(&s, NormalizationForm::Nfkc);
        let via_nfkd = normalized(
            &normalized(&s, NormalizationForm::Nfkd),
            NormalizationForm::Nfkc,
        );
        prop_assert_eq!(via_nfkd, direct);
    }

    /// NFD and NFC of the same input are canonically equivalent: they
    /// share a single NFD image.
    #[test]
    fn nfd_and_nfc_are_canonically_equivalent(s in covered_string()) {
        let nfd = normalized(&s, NormalizationForm::Nfd);
        let nfc = normalized(&s, NormalizationForm::Nfc);
        prop_assert_eq!(normalized(&nfc, NormalizationForm::Nfd), nfd);
    }

    /// Compatibility decomposition subsumes canonical decomposition:
    /// NFKD of an NFD string equals NFKD of the original.
    #[test]
    fn nfkd_absorbs_nfd(s in covered_string()) {
        let direct = normalized(&s, NormalizationForm::Nfkd);
        let via_nfd = normalized(
            &normalized(&s, NormalizationForm::Nfd),
            NormalizationForm::Nfkd,
        );
        prop_assert_eq!(via_nfd, direct);
    }
}

// ============================================================================
// Structural Invariants
// ============================================================================

proptest! {
    /// After NFD, combining classes between starters are non-decreasing.
    #[test]
    fn nfd_output_is_canonically_ordered(s in covered_string()) {
        let props = TableProperties::new();
        let mut buf = Utf16Buffer::from(s.as_str());
        normalize(&props, &mut buf, NormalizationForm::Nfd, UnicodeVersion::Unassigned, 0);

        let mut last_class = 0u8;
        for cp in buf.code_points() {
            let class = props.combining_class(cp);
            if class != 0 {
                prop_assert!(
                    class >= last_class,
                    "class {} follows {} at U+{:04X}", class, last_class, cp.value()
                );
            }
            last_class = class;
        }
    }

    /// Normalizing well-formed UTF-16 never produces dangling surrogates.
    #[test]
    fn valid_input_stays_well_formed(s in covered_string()) {
        for form in FORMS {
            let out = normalized(&s, form);
            // String construction already guarantees well-formedness; the
            // interesting check is that the unit stream decodes cleanly.
            let units: Vec<u16> = out.encode_utf16().collect();
            let decoded = String::from_utf16(&units).ok();
            prop_assert_eq!(decoded.as_deref(), Some(out.as_str()));
        }
    }

    /// Normalization never touches units before the requested offset.
    #[test]
    fn from_offset_is_respected(s in covered_string(), form in prop::sample::select(FORMS.to_vec())) {
        let props = TableProperties::new();
        let units: Vec<u16> = s.encode_utf16().collect();
        prop_assume!(!units.is_empty());
        let from = units.len() / 2;
        let mut buf = Utf16Buffer::from(units.clone());
        normalize(&props, &mut buf, form, UnicodeVersion::Unassigned, from);
        prop_assert_eq!(&buf.as_units()[..from], &units[..from]);
    }
}

// ============================================================================
// Quick-Check Soundness
// ============================================================================

proptest! {
    /// is_normalized is conservative: when it reports true, normalizing
    /// really changes nothing.
    #[test]
    fn is_normalized_is_sound(s in covered_string(), form in prop::sample::select(FORMS.to_vec())) {
        if is_normalized(&s, form) {
            prop_assert_eq!(normalized(&s, form), s);
        }
    }

    /// The output of normalization always satisfies its own quick check
    /// or at least re-normalizes to itself, and for decomposed forms the
    /// scan should accept the output outright.
    #[test]
    fn nfd_output_passes_quick_check(s in covered_string()) {
        let out = normalized(&s, NormalizationForm::Nfd);
        prop_assert!(is_normalized(&out, NormalizationForm::Nfd), "NFD output rejected: {out:?}");
    }
}
