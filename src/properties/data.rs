//! Unicode 15.1.0 property data, abridged.
//!
//! Sorted range records covering the blocks this crate ships data for; gaps
//! between records resolve to the unassigned defaults. The layout mirrors
//! the upstream generator output: general category, canonical combining
//! class, quick-check flags packed two bits per form (D, C, KD, KC),
//! introducing Unicode version, and an optional decomposition tag plus
//! mapping. Composition pairs are pre-filtered against the composition
//! exclusion list (singletons, non-starter decompositions, and the explicit
//! exclusion set never appear) and sorted by (second, starter) for binary
//! search.
//!
//! Hangul syllables U+AC00..U+D7A3 carry no mapping here; their
//! decomposition is arithmetic and handled by [`crate::hangul`].

use super::{DecompositionTag as DT, GeneralCategory as GC, UnicodeVersion as V};

/// One contiguous run of code points sharing the same properties.
pub(super) struct Record {
    pub first: u32,
    pub last: u32,
    pub category: GC,
    pub combining_class: u8,
    pub quick_check: u8,
    pub version: V,
    pub decomposition: Option<(DT, &'static [u32])>,
}

/// One canonical composition pair.
pub(super) struct Pair {
    pub second: u32,
    pub starter: u32,
    pub composed: u32,
}

pub(super) const QC_YES: u8 = 0;
pub(super) const QC_NO: u8 = 1;
pub(super) const QC_MAYBE: u8 = 3;

const fn qc(d: u8, c: u8, kd: u8, kc: u8) -> u8 {
    d | (c << 2) | (kd << 4) | (kc << 6)
}

/// Stable under every form.
const QC_ALL_Y: u8 = qc(QC_YES, QC_YES, QC_YES, QC_YES);
/// Canonically decomposable, recomposes under C/KC.
const QC_DECOMP: u8 = qc(QC_NO, QC_YES, QC_NO, QC_YES);
/// Canonically decomposable, composition-excluded.
const QC_DECOMP_EXCL: u8 = qc(QC_NO, QC_NO, QC_NO, QC_NO);
/// Compatibility mapping only.
const QC_COMPAT: u8 = qc(QC_YES, QC_YES, QC_NO, QC_NO);
/// May compose with a preceding starter (second of a canonical pair).
const QC_NFC_MAYBE: u8 = qc(QC_YES, QC_MAYBE, QC_YES, QC_MAYBE);

const fn range(first: u32, last: u32, category: GC, ccc: u8, quick_check: u8, version: V) -> Record {
    Record {
        first,
        last,
        category,
        combining_class: ccc,
        quick_check,
        version,
        decomposition: None,
    }
}

const fn single(
    cp: u32,
    category: GC,
    ccc: u8,
    quick_check: u8,
    version: V,
    tag: DT,
    mapping: &'static [u32],
) -> Record {
    Record {
        first: cp,
        last: cp,
        category,
        combining_class: ccc,
        quick_check,
        version,
        decomposition: Some((tag, mapping)),
    }
}

/// Property records, sorted by `first`, non-overlapping.
pub(super) static RECORDS: &[Record] = &[
    // Basic Latin
    range(0x0000, 0x001F, GC::Control, 0, QC_ALL_Y, V::Unicode1_1),
    range(0x0020, 0x0020, GC::SpaceSeparator, 0, QC_ALL_Y, V::Unicode1_1),
    range(0x0021, 0x0023, GC::OtherPunctuation, 0, QC_ALL_Y, V::Unicode1_1),
    range(0x0024, 0x0024, GC::CurrencySymbol, 0, QC_ALL_Y, V::Unicode1_1),
    range(0x0025, 0x0027, GC::OtherPunctuation, 0, QC_ALL_Y, V::Unicode1_1),
    range(0x0028, 0x0028, GC::OpenPunctuation, 0, QC_ALL_Y, V::Unicode1_1),
    range(0x0029, 0x0029, GC::ClosePunctuation, 0, QC_ALL_Y, V::Unicode1_1),
    range(0x002A, 0x002A, GC::OtherPunctuation, 0, QC_ALL_Y, V::Unicode1_1),
    range(0x002B, 0x002B, GC::MathSymbol, 0, QC_ALL_Y, V::Unicode1_1),
    range(0x002C, 0x002C, GC::OtherPunctuation, 0, QC_ALL_Y, V::Unicode1_1),
    range(0x002D, 0x002D, GC::DashPunctuation, 0, QC_ALL_Y, V::Unicode1_1),
    range(0x002E, 0x002F, GC::OtherPunctuation, 0, QC_ALL_Y, V::Unicode1_1),
    range(0x0030, 0x0039, GC::DecimalNumber, 0, QC_ALL_Y, V::Unicode1_1),
    range(0x003A, 0x003B, GC::OtherPunctuation, 0, QC_ALL_Y, V::Unicode1_1),
    range(0x003C, 0x003E, GC::MathSymbol, 0, QC_ALL_Y, V::Unicode1_1),
    range(0x003F, 0x0040, GC::OtherPunctuation, 0, QC_ALL_Y, V::Unicode1_1),
    range(0x0041, 0x005A, GC::UppercaseLetter, 0, QC_ALL_Y, V::Unicode1_1),
    range(0x005B, 0x005B, GC::OpenPunctuation, 0, QC_ALL_Y, V::Unicode1_1),
    range(0x005C, 0x005C, GC::OtherPunctuation, 0, QC_ALL_Y, V::Unicode1_1),
    range(0x005D, 0x005D, GC::ClosePunctuation, 0, QC_ALL_Y, V::Unicode1_1),
    range(0x005E, 0x005E, GC::ModifierSymbol, 0, QC_ALL_Y, V::Unicode1_1),
    range(0x005F, 0x005F, GC::ConnectorPunctuation, 0, QC_ALL_Y, V::Unicode1_1),
    range(0x0060, 0x0060, GC::ModifierSymbol, 0, QC_ALL_Y, V::Unicode1_1),
    range(0x0061, 0x007A, GC::LowercaseLetter, 0, QC_ALL_Y, V::Unicode1_1),
    range(0x007B, 0x007B, GC::OpenPunctuation, 0, QC_ALL_Y, V::Unicode1_1),
    range(0x007C, 0x007C, GC::MathSymbol, 0, QC_ALL_Y, V::Unicode1_1),
    range(0x007D, 0x007D, GC::ClosePunctuation, 0, QC_ALL_Y, V::Unicode1_1),
    range(0x007E, 0x007E, GC::MathSymbol, 0, QC_ALL_Y, V::Unicode1_1),
    range(0x007F, 0x009F, GC::Control, 0, QC_ALL_Y, V::Unicode1_1),
    // Latin-1 Supplement
    single(0x00A0, GC::SpaceSeparator, 0, QC_COMPAT, V::Unicode1_1, DT::NoBreak, &[0x0020]),
    single(0x00A8, GC::ModifierSymbol, 0, QC_COMPAT, V::Unicode1_1, DT::Compat, &[0x0020, 0x0308]),
    single(0x00AA, GC::OtherLetter, 0, QC_COMPAT, V::Unicode1_1, DT::Super, &[0x0061]),
    single(0x00AF, GC::ModifierSymbol, 0, QC_COMPAT, V::Unicode1_1, DT::Compat, &[0x0020, 0x0304]),
    single(0x00B2, GC::OtherNumber, 0, QC_COMPAT, V::Unicode1_1, DT::Super, &[0x0032]),
    single(0x00B3, GC::OtherNumber, 0, QC_COMPAT, V::Unicode1_1, DT::Super, &[0x0033]),
    single(0x00B4, GC::ModifierSymbol, 0, QC_COMPAT, V::Unicode1_1, DT::Compat, &[0x0020, 0x0301]),
    single(0x00B5, GC::LowercaseLetter, 0, QC_COMPAT, V::Unicode1_1, DT::Compat, &[0x03BC]),
    single(0x00B8, GC::ModifierSymbol, 0, QC_COMPAT, V::Unicode1_1, DT::Compat, &[0x0020, 0x0327]),
    single(0x00B9, GC::OtherNumber, 0, QC_COMPAT, V::Unicode1_1, DT::Super, &[0x0031]),
    single(0x00BA, GC::OtherLetter, 0, QC_COMPAT, V::Unicode1_1, DT::Super, &[0x006F]),
    single(0x00BC, GC::OtherNumber, 0, QC_COMPAT, V::Unicode1_1, DT::Fraction, &[0x0031, 0x2044, 0x0034]),
    single(0x00BD, GC::OtherNumber, 0, QC_COMPAT, V::Unicode1_1, DT::Fraction, &[0x0031, 0x2044, 0x0032]),
    single(0x00BE, GC::OtherNumber, 0, QC_COMPAT, V::Unicode1_1, DT::Fraction, &[0x0033, 0x2044, 0x0034]),
    single(0x00C0, GC::UppercaseLetter, 0, QC_DECOMP, V::Unicode1_1, DT::Canonical, &[0x0041, 0x0300]),
    single(0x00C1, GC::UppercaseLetter, 0, QC_DECOMP, V::Unicode1_1, DT::Canonical, &[0x0041, 0x0301]),
    single(0x00C2, GC::UppercaseLetter, 0, QC_DECOMP, V::Unicode1_1, DT::Canonical, &[0x0041, 0x0302]),
    single(0x00C3, GC::UppercaseLetter, 0, QC_DECOMP, V::Unicode1_1, DT::Canonical, &[0x0041, 0x0303]),
    single(0x00C4, GC::UppercaseLetter, 0, QC_DECOMP, V::Unicode1_1, DT::Canonical, &[0x0041, 0x0308]),
    single(0x00C5, GC::UppercaseLetter, 0, QC_DECOMP, V::Unicode1_1, DT::Canonical, &[0x0041, 0x030A]),
    range(0x00C6, 0x00C6, GC::UppercaseLetter, 0, QC_ALL_Y, V::Unicode1_1),
    single(0x00C7, GC::UppercaseLetter, 0, QC_DECOMP, V::Unicode1_1, DT::Canonical, &[0x0043, 0x0327]),
    single(0x00C8, GC::UppercaseLetter, 0, QC_DECOMP, V::Unicode1_1, DT::Canonical, &[0x0045, 0x0300]),
    single(0x00C9, GC::UppercaseLetter, 0, QC_DECOMP, V::Unicode1_1, DT::Canonical, &[0x0045, 0x0301]),
    single(0x00CA, GC::UppercaseLetter, 0, QC_DECOMP, V::Unicode1_1, DT::Canonical, &[0x0045, 0x0302]),
    single(0x00CB, GC::UppercaseLetter, 0, QC_DECOMP, V::Unicode1_1, DT::Canonical, &[0x0045, 0x0308]),
    single(0x00CC, GC::UppercaseLetter, 0, QC_DECOMP, V::Unicode1_1, DT::Canonical, &[0x0049, 0x0300]),
    single(0x00CD, GC::UppercaseLetter, 0, QC_DECOMP, V::Unicode1_1, DT::Canonical, &[0x0049, 0x0301]),
    single(0x00CE, GC::UppercaseLetter, 0, QC_DECOMP, V::Unicode1_1, DT::Canonical, &[0x0049, 0x0302]),
    single(0x00CF, GC::UppercaseLetter, 0, QC_DECOMP, V::Unicode1_1, DT::Canonical, &[0x0049, 0x0308]),
    range(0x00D0, 0x00D0, GC::UppercaseLetter, 0, QC_ALL_Y, V::Unicode1_1),
    single(0x00D1, GC::UppercaseLetter, 0, QC_DECOMP, V::Unicode1_1, DT::Canonical, &[0x004E, 0x0303]),
    single(0x00D2, GC::UppercaseLetter, 0, QC_DECOMP, V::Unicode1_1, DT::Canonical, &[0x004F, 0x0300]),
    single(0x00D3, GC::UppercaseLetter, 0, QC_DECOMP, V::Unicode1_1, DT::Canonical, &[0x004F, 0x0301]),
    single(0x00D4, GC::UppercaseLetter, 0, QC_DECOMP, V::Unicode1_1, DT::Canonical, &[0x004F, 0x0302]),
    single(0x00D5, GC::UppercaseLetter, 0, QC_DECOMP, V::Unicode1_1, DT::Canonical, &[0x004F, 0x0303]),
    single(0x00D6, GC::UppercaseLetter, 0, QC_DECOMP, V::Unicode1_1, DT::Canonical, &[0x004F, 0x0308]),
    range(0x00D7, 0x00D7, GC::MathSymbol, 0, QC_ALL_Y, V::Unicode1_1),
    range(0x00D8, 0x00D8, GC::UppercaseLetter, 0, QC_ALL_Y, V::Unicode1_1),
    single(0x00D9, GC::UppercaseLetter, 0, QC_DECOMP, V::Unicode1_1, DT::Canonical, &[0x0055, 0x0300]),
    single(0x00DA, GC::UppercaseLetter, 0, QC_DECOMP, V::Unicode1_1, DT::Canonical, &[0x0055, 0x0301]),
    single(0x00DB, GC::UppercaseLetter, 0, QC_DECOMP, V::Unicode1_1, DT::Canonical, &[0x0055, 0x0302]),
    single(0x00DC, GC::UppercaseLetter, 0, QC_DECOMP, V::Unicode1_1, DT::Canonical, &[0x0055, 0x0308]),
    single(0x00DD, GC::UppercaseLetter, 0, QC_DECOMP, V::Unicode1_1, DT::Canonical, &[0x0059, 0x0301]),
    range(0x00DE, 0x00DE, GC::UppercaseLetter, 0, QC_ALL_Y, V::Unicode1_1),
    range(0x00DF, 0x00DF, GC::LowercaseLetter, 0, QC_ALL_Y, V::Unicode1_1),
    single(0x00E0, GC::LowercaseLetter, 0, QC_DECOMP, V::Unicode1_1, DT::Canonical, &[0x0061, 0x0300]),
    single(0x00E1, GC::LowercaseLetter, 0, QC_DECOMP, V::Unicode1_1, DT::Canonical, &[0x0061, 0x0301]),
    single(0x00E2, GC::LowercaseLetter, 0, QC_DECOMP, V::Unicode1_1, DT::Canonical, &[0x0061, 0x0302]),
    single(0x00E3, GC::LowercaseLetter, 0, QC_DECOMP, V::Unicode1_1, DT::Canonical, &[0x0061, 0x0303]),
    single(0x00E4, GC::LowercaseLetter, 0, QC_DECOMP, V::Unicode1_1, DT::Canonical, &[0x0061, 0x0308]),
    single(0x00E5, GC::LowercaseLetter, 0, QC_DECOMP, V::Unicode1_1, DT::Canonical, &[0x0061, 0x030A]),
    range(0x00E6, 0x00E6, GC::LowercaseLetter, 0, QC_ALL_Y, V::Unicode1_1),
    single(0x00E7, GC::LowercaseLetter, 0, QC_DECOMP, V::Unicode1_1, DT::Canonical, &[0x0063, 0x0327]),
    single(0x00E8, GC::LowercaseLetter, 0, QC_DECOMP, V::Unicode1_1, DT::Canonical, &[0x0065, 0x0300]),
    single(0x00E9, GC::LowercaseLetter, 0, QC_DECOMP, V::Unicode1_1, DT::Canonical, &[0x0065, 0x0301]),
    single(0x00EA, GC::LowercaseLetter, 0, QC_DECOMP, V::Unicode1_1, DT::Canonical, &[0x0065, 0x0302]),
    single(0x00EB, GC::LowercaseLetter, 0, QC_DECOMP, V::Unicode1_1, DT::Canonical, &[0x0065, 0x0308]),
    single(0x00EC, GC::LowercaseLetter, 0, QC_DECOMP, V::Unicode1_1, DT::Canonical, &[0x0069, 0x0300]),
    single(0x00ED, GC::LowercaseLetter, 0, QC_DECOMP, V::Unicode1_1, DT::Canonical, &[0x0069, 0x0301]),
    single(0x00EE, GC::LowercaseLetter, 0, QC_DECOMP, V::Unicode1_1, DT::Canonical, &[0x0069, 0x0302]),
    single(0x00EF, GC::LowercaseLetter, 0, QC_DECOMP, V::Unicode1_1, DT::Canonical, &[0x0069, 0x0308]),
    range(0x00F0, 0x00F0, GC::LowercaseLetter, 0, QC_ALL_Y, V::Unicode1_1),
    single(0x00F1, GC::LowercaseLetter, 0, QC_DECOMP, V::Unicode1_1, DT::Canonical, &[0x006E, 0x0303]),
    single(0x00F2, GC::LowercaseLetter, 0, QC_DECOMP, V::Unicode1_1, DT::Canonical, &[0x006F, 0x0300]),
    single(0x00F3, GC::LowercaseLetter, 0, QC_DECOMP, V::Unicode1_1, DT::Canonical, &[0x006F, 0x0301]),
    single(0x00F4, GC::LowercaseLetter, 0, QC_DECOMP, V::Unicode1_1, DT::Canonical, &[0x006F, 0x0302]),
    single(0x00F5, GC::LowercaseLetter, 0, QC_DECOMP, V::Unicode1_1, DT::Canonical, &[0x006F, 0x0303]),
    single(0x00F6, GC::LowercaseLetter, 0, QC_DECOMP, V::Unicode1_1, DT::Canonical, &[0x006F, 0x0308]),
    range(0x00F7, 0x00F7, GC::MathSymbol, 0, QC_ALL_Y, V::Unicode1_1),
    range(0x00F8, 0x00F8, GC::LowercaseLetter, 0, QC_ALL_Y, V::Unicode1_1),
    single(0x00F9, GC::LowercaseLetter, 0, QC_DECOMP, V::Unicode1_1, DT::Canonical, &[0x0075, 0x0300]),
    single(0x00FA, GC::LowercaseLetter, 0, QC_DECOMP, V::Unicode1_1, DT::Canonical, &[0x0075, 0x0301]),
    single(0x00FB, GC::LowercaseLetter, 0, QC_DECOMP, V::Unicode1_1, DT::Canonical, &[0x0075, 0x0302]),
    single(0x00FC, GC::LowercaseLetter, 0, QC_DECOMP, V::Unicode1_1, DT::Canonical, &[0x0075, 0x0308]),
    single(0x00FD, GC::LowercaseLetter, 0, QC_DECOMP, V::Unicode1_1, DT::Canonical, &[0x0079, 0x0301]),
    range(0x00FE, 0x00FE, GC::LowercaseLetter, 0, QC_ALL_Y, V::Unicode1_1),
    single(0x00FF, GC::LowercaseLetter, 0, QC_DECOMP, V::Unicode1_1, DT::Canonical, &[0x0079, 0x0308]),
    // Combining Diacritical Marks
    range(0x0300, 0x0304, GC::NonspacingMark, 230, QC_NFC_MAYBE, V::Unicode1_1),
    range(0x0305, 0x0305, GC::NonspacingMark, 230, QC_ALL_Y, V::Unicode1_1),
    range(0x0306, 0x030C, GC::NonspacingMark, 230, QC_NFC_MAYBE, V::Unicode1_1),
    range(0x030D, 0x030E, GC::NonspacingMark, 230, QC_ALL_Y, V::Unicode1_1),
    range(0x030F, 0x030F, GC::NonspacingMark, 230, QC_NFC_MAYBE, V::Unicode1_1),
    range(0x0310, 0x0310, GC::NonspacingMark, 230, QC_ALL_Y, V::Unicode1_1),
    range(0x0311, 0x0311, GC::NonspacingMark, 230, QC_NFC_MAYBE, V::Unicode1_1),
    range(0x0312, 0x0312, GC::NonspacingMark, 230, QC_ALL_Y, V::Unicode1_1),
    range(0x0313, 0x0314, GC::NonspacingMark, 230, QC_NFC_MAYBE, V::Unicode1_1),
    range(0x0315, 0x0315, GC::NonspacingMark, 232, QC_ALL_Y, V::Unicode1_1),
    range(0x0316, 0x0319, GC::NonspacingMark, 220, QC_ALL_Y, V::Unicode1_1),
    range(0x031A, 0x031A, GC::NonspacingMark, 232, QC_ALL_Y, V::Unicode1_1),
    range(0x031B, 0x031B, GC::NonspacingMark, 216, QC_NFC_MAYBE, V::Unicode1_1),
    range(0x031C, 0x0320, GC::NonspacingMark, 220, QC_ALL_Y, V::Unicode1_1),
    range(0x0321, 0x0322, GC::NonspacingMark, 202, QC_ALL_Y, V::Unicode1_1),
    range(0x0323, 0x0326, GC::NonspacingMark, 220, QC_NFC_MAYBE, V::Unicode1_1),
    range(0x0327, 0x0328, GC::NonspacingMark, 202, QC_NFC_MAYBE, V::Unicode1_1),
    range(0x0329, 0x032C, GC::NonspacingMark, 220, QC_ALL_Y, V::Unicode1_1),
    range(0x032D, 0x032E, GC::NonspacingMark, 220, QC_NFC_MAYBE, V::Unicode1_1),
    range(0x032F, 0x032F, GC::NonspacingMark, 220, QC_ALL_Y, V::Unicode1_1),
    range(0x0330, 0x0331, GC::NonspacingMark, 220, QC_NFC_MAYBE, V::Unicode1_1),
    range(0x0332, 0x0333, GC::NonspacingMark, 220, QC_ALL_Y, V::Unicode1_1),
    range(0x0334, 0x0337, GC::NonspacingMark, 1, QC_ALL_Y, V::Unicode1_1),
    range(0x0338, 0x0338, GC::NonspacingMark, 1, QC_NFC_MAYBE, V::Unicode1_1),
    range(0x0339, 0x033C, GC::NonspacingMark, 220, QC_ALL_Y, V::Unicode1_1),
    range(0x033D, 0x033F, GC::NonspacingMark, 230, QC_ALL_Y, V::Unicode1_1),
    single(0x0340, GC::NonspacingMark, 230, QC_DECOMP_EXCL, V::Unicode1_1, DT::Canonical, &[0x0300]),
    single(0x0341, GC::NonspacingMark, 230, QC_DECOMP_EXCL, V::Unicode1_1, DT::Canonical, &[0x0301]),
    range(0x0342, 0x0342, GC::NonspacingMark, 230, QC_NFC_MAYBE, V::Unicode1_1),
    single(0x0343, GC::NonspacingMark, 230, QC_DECOMP_EXCL, V::Unicode1_1, DT::Canonical, &[0x0313]),
    single(0x0344, GC::NonspacingMark, 230, QC_DECOMP_EXCL, V::Unicode1_1, DT::Canonical, &[0x0308, 0x0301]),
    range(0x0345, 0x0345, GC::NonspacingMark, 240, QC_NFC_MAYBE, V::Unicode1_1),
    // Greek (decomposition target of U+00B5 MICRO SIGN)
    range(0x03BC, 0x03BC, GC::LowercaseLetter, 0, QC_ALL_Y, V::Unicode1_1),
    // Hangul Jamo
    range(0x1100, 0x1112, GC::OtherLetter, 0, QC_ALL_Y, V::Unicode1_1),
    range(0x1161, 0x1175, GC::OtherLetter, 0, QC_NFC_MAYBE, V::Unicode1_1),
    range(0x11A8, 0x11C2, GC::OtherLetter, 0, QC_NFC_MAYBE, V::Unicode1_1),
    // Latin Extended Additional
    single(0x1EA6, GC::UppercaseLetter, 0, QC_DECOMP, V::Unicode1_1, DT::Canonical, &[0x00C2, 0x0300]),
    single(0x1EA7, GC::LowercaseLetter, 0, QC_DECOMP, V::Unicode1_1, DT::Canonical, &[0x00E2, 0x0300]),
    // General Punctuation
    single(0x2000, GC::SpaceSeparator, 0, QC_DECOMP_EXCL, V::Unicode1_1, DT::Canonical, &[0x2002]),
    single(0x2001, GC::SpaceSeparator, 0, QC_DECOMP_EXCL, V::Unicode1_1, DT::Canonical, &[0x2003]),
    single(0x2002, GC::SpaceSeparator, 0, QC_COMPAT, V::Unicode1_1, DT::Compat, &[0x0020]),
    single(0x2003, GC::SpaceSeparator, 0, QC_COMPAT, V::Unicode1_1, DT::Compat, &[0x0020]),
    range(0x2044, 0x2044, GC::MathSymbol, 0, QC_ALL_Y, V::Unicode1_1),
    // Letterlike Symbols
    single(0x212B, GC::UppercaseLetter, 0, QC_DECOMP_EXCL, V::Unicode1_1, DT::Canonical, &[0x00C5]),
    // Supplemental Mathematical Operators
    single(0x2ADC, GC::MathSymbol, 0, QC_DECOMP_EXCL, V::Unicode3_2, DT::Canonical, &[0x2ADD, 0x0338]),
    range(0x2ADD, 0x2ADD, GC::MathSymbol, 0, QC_ALL_Y, V::Unicode3_2),
    // CJK Unified Ideographs (decomposition target of U+2F800)
    range(0x4E3D, 0x4E3D, GC::OtherLetter, 0, QC_ALL_Y, V::Unicode1_1),
    // Hangul Syllables: decomposition is algorithmic, no mapping stored
    range(0xAC00, 0xD7A3, GC::OtherLetter, 0, QC_DECOMP, V::Unicode2_0),
    // Surrogates and private use
    range(0xD800, 0xDFFF, GC::Surrogate, 0, QC_ALL_Y, V::Unicode1_1),
    range(0xE000, 0xF8FF, GC::PrivateUse, 0, QC_ALL_Y, V::Unicode1_1),
    // Alphabetic Presentation Forms
    single(0xFB01, GC::LowercaseLetter, 0, QC_COMPAT, V::Unicode1_1, DT::Compat, &[0x0066, 0x0069]),
    single(0xFB02, GC::LowercaseLetter, 0, QC_COMPAT, V::Unicode1_1, DT::Compat, &[0x0066, 0x006C]),
    // Musical Symbols
    range(0x1D157, 0x1D157, GC::OtherSymbol, 0, QC_ALL_Y, V::Unicode3_1),
    single(0x1D15E, GC::OtherSymbol, 0, QC_DECOMP_EXCL, V::Unicode3_1, DT::Canonical, &[0x1D157, 0x1D165]),
    range(0x1D165, 0x1D165, GC::SpacingMark, 216, QC_ALL_Y, V::Unicode3_1),
    // CJK Compatibility Ideographs Supplement
    single(0x2F800, GC::OtherLetter, 0, QC_DECOMP_EXCL, V::Unicode3_1, DT::Canonical, &[0x4E3D]),
];

/// Canonical composition pairs, exclusions pre-filtered, sorted by
/// (second, starter).
pub(super) static COMPOSITIONS: &[Pair] = &[
    Pair { second: 0x0300, starter: 0x0041, composed: 0x00C0 },
    Pair { second: 0x0300, starter: 0x0045, composed: 0x00C8 },
    Pair { second: 0x0300, starter: 0x0049, composed: 0x00CC },
    Pair { second: 0x0300, starter: 0x004F, composed: 0x00D2 },
    Pair { second: 0x0300, starter: 0x0055, composed: 0x00D9 },
    Pair { second: 0x0300, starter: 0x0061, composed: 0x00E0 },
    Pair { second: 0x0300, starter: 0x0065, composed: 0x00E8 },
    Pair { second: 0x0300, starter: 0x0069, composed: 0x00EC },
    Pair { second: 0x0300, starter: 0x006F, composed: 0x00F2 },
    Pair { second: 0x0300, starter: 0x0075, composed: 0x00F9 },
    Pair { second: 0x0300, starter: 0x00C2, composed: 0x1EA6 },
    Pair { second: 0x0300, starter: 0x00E2, composed: 0x1EA7 },
    Pair { second: 0x0301, starter: 0x0041, composed: 0x00C1 },
    Pair { second: 0x0301, starter: 0x0045, composed: 0x00C9 },
    Pair { second: 0x0301, starter: 0x0049, composed: 0x00CD },
    Pair { second: 0x0301, starter: 0x004F, composed: 0x00D3 },
    Pair { second: 0x0301, starter: 0x0055, composed: 0x00DA },
    Pair { second: 0x0301, starter: 0x0059, composed: 0x00DD },
    Pair { second: 0x0301, starter: 0x0061, composed: 0x00E1 },
    Pair { second: 0x0301, starter: 0x0065, composed: 0x00E9 },
    Pair { second: 0x0301, starter: 0x0069, composed: 0x00ED },
    Pair { second: 0x0301, starter: 0x006F, composed: 0x00F3 },
    Pair { second: 0x0301, starter: 0x0075, composed: 0x00FA },
    Pair { second: 0x0301, starter: 0x0079, composed: 0x00FD },
    Pair { second: 0x0302, starter: 0x0041, composed: 0x00C2 },
    Pair { second: 0x0302, starter: 0x0045, composed: 0x00CA },
    Pair { second: 0x0302, starter: 0x0049, composed: 0x00CE },
    Pair { second: 0x0302, starter: 0x004F, composed: 0x00D4 },
    Pair { second: 0x0302, starter: 0x0055, composed: 0x00DB },
    Pair { second: 0x0302, starter: 0x0061, composed: 0x00E2 },
    Pair { second: 0x0302, starter: 0x0065, composed: 0x00EA },
    Pair { second: 0x0302, starter: 0x0069, composed: 0x00EE },
    Pair { second: 0x0302, starter: 0x006F, composed: 0x00F4 },
    Pair { second: 0x0302, starter: 0x0075, composed: 0x00FB },
    Pair { second: 0x0303, starter: 0x0041, composed: 0x00C3 },
    Pair { second: 0x0303, starter: 0x004E, composed: 0x00D1 },
    Pair { second: 0x0303, starter: 0x004F, composed: 0x00D5 },
    Pair { second: 0x0303, starter: 0x0061, composed: 0x00E3 },
    Pair { second: 0x0303, starter: 0x006E, composed: 0x00F1 },
    Pair { second: 0x0303, starter: 0x006F, composed: 0x00F5 },
    Pair { second: 0x0308, starter: 0x0041, composed: 0x00C4 },
    Pair { second: 0x0308, starter: 0x0045, composed: 0x00CB },
    Pair { second: 0x0308, starter: 0x0049, composed: 0x00CF },
    Pair { second: 0x0308, starter: 0x004F, composed: 0x00D6 },
    Pair { second: 0x0308, starter: 0x0055, composed: 0x00DC },
    Pair { second: 0x0308, starter: 0x0061, composed: 0x00E4 },
    Pair { second: 0x0308, starter: 0x0065, composed: 0x00EB },
    Pair { second: 0x0308, starter: 0x0069, composed: 0x00EF },
    Pair { second: 0x0308, starter: 0x006F, composed: 0x00F6 },
    Pair { second: 0x0308, starter: 0x0075, composed: 0x00FC },
    Pair { second: 0x0308, starter: 0x0079, composed: 0x00FF },
    Pair { second: 0x030A, starter: 0x0041, composed: 0x00C5 },
    Pair { second: 0x030A, starter: 0x0061, composed: 0x00E5 },
    Pair { second: 0x0327, starter: 0x0043, composed: 0x00C7 },
    Pair { second: 0x0327, starter: 0x0063, composed: 0x00E7 },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_are_sorted_and_disjoint() {
        for window in RECORDS.windows(2) {
            assert!(window[0].last < window[1].first, "overlap near {:#x}", window[1].first);
        }
        for record in RECORDS {
            assert!(record.first <= record.last);
        }
    }

    #[test]
    fn compositions_are_sorted_by_second_then_starter() {
        for window in COMPOSITIONS.windows(2) {
            let a = (window[0].second, window[0].starter);
            let b = (window[1].second, window[1].starter);
            assert!(a < b, "out of order near {b:?}");
        }
    }

    #[test]
    fn every_composed_pair_round_trips_through_the_records() {
        // Each composed character must carry the canonical decomposition
        // that produced its pair entry.
        for pair in COMPOSITIONS {
            let record = RECORDS
                .iter()
                .find(|r| r.first <= pair.composed && pair.composed <= r.last)
                .expect("composed code point has a record");
            let (tag, mapping) = record.decomposition.expect("composed code point decomposes");
            assert_eq!(tag, DT::Canonical);
            assert_eq!(mapping, &[pair.starter, pair.second]);
        }
    }
}
