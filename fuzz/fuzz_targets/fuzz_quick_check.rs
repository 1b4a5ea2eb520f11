//! Fuzz target for quick-check soundness.
//!
//! When `is_normalized` reports true for a string, a full normalization of
//! that string must be a no-op.

#![no_main]

use libfuzzer_sys::fuzz_target;
use norm16::normalize::{NormalizationForm, is_normalized, normalized};

fuzz_target!(|data: &str| {
    for form in [
        NormalizationForm::Nfd,
        NormalizationForm::Nfc,
        NormalizationForm::Nfkd,
        NormalizationForm::Nfkc,
    ] {
        if is_normalized(data, form) {
            assert_eq!(normalized(data, form), data, "quick check accepted a non-fixed-point");
        }
    }
});
