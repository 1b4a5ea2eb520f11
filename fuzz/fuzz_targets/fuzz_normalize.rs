//! Fuzz target for the normalization pipeline.
//!
//! Feeds arbitrary UTF-16 unit sequences, including dangling surrogates,
//! through every form and checks that normalization never panics and is
//! idempotent.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use norm16::buffer::Utf16Buffer;
use norm16::normalize::{NormalizationForm, normalize};
use norm16::properties::{TableProperties, UnicodeVersion};

#[derive(Arbitrary, Debug)]
struct Input {
    units: Vec<u16>,
    form: u8,
    version: u8,
}

fn pick_form(tag: u8) -> NormalizationForm {
    match tag % 4 {
        0 => NormalizationForm::Nfd,
        1 => NormalizationForm::Nfc,
        2 => NormalizationForm::Nfkd,
        _ => NormalizationForm::Nfkc,
    }
}

fuzz_target!(|input: Input| {
    let props = TableProperties::new();
    let form = pick_form(input.form);
    let version = if input.version % 2 == 0 {
        UnicodeVersion::Unassigned
    } else {
        UnicodeVersion::Unicode3_2
    };

    let mut buf = Utf16Buffer::from(input.units);
    normalize(&props, &mut buf, form, version, 0);
    let once = buf.clone();

    normalize(&props, &mut buf, form, version, 0);
    assert_eq!(buf, once, "normalization must be idempotent");

    // Decoding must not panic either; dangling surrogates become U+FFFD.
    let _ = buf.to_string_lossy();
});
