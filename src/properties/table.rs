//! Property lookup backed by the bundled static tables.

use std::cmp::Ordering;

use super::data::{self, Record};
use super::{Decomposition, GeneralCategory, PropertySource, QuickCheck, UnicodeVersion};
use crate::codepoint::CodePoint;
use crate::normalize::NormalizationForm;

/// [`PropertySource`] implementation over the generated data in
/// [`data`](super::data).
///
/// The tables are process-wide immutable statics; `TableProperties` is a
/// zero-sized handle over them and can be freely copied and shared across
/// threads.
#[derive(Clone, Copy, Debug, Default)]
pub struct TableProperties;

impl TableProperties {
    /// Create a handle over the bundled tables.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn record(cp: CodePoint) -> Option<&'static Record> {
        let value = cp.value();
        let idx = data::RECORDS
            .binary_search_by(|record| {
                if record.last < value {
                    Ordering::Less
                } else if record.first > value {
                    Ordering::Greater
                } else {
                    Ordering::Equal
                }
            })
            .ok()?;
        Some(&data::RECORDS[idx])
    }
}

impl PropertySource for TableProperties {
    fn general_category(&self, cp: CodePoint) -> GeneralCategory {
        Self::record(cp).map_or(GeneralCategory::Unassigned, |r| r.category)
    }

    fn combining_class(&self, cp: CodePoint) -> u8 {
        Self::record(cp).map_or(0, |r| r.combining_class)
    }

    fn decomposition(&self, cp: CodePoint) -> Option<Decomposition<'_>> {
        let (tag, mapping) = Self::record(cp)?.decomposition?;
        Some(Decomposition { tag, mapping })
    }

    fn quick_check(&self, cp: CodePoint, form: NormalizationForm) -> QuickCheck {
        let Some(record) = Self::record(cp) else {
            return QuickCheck::Yes;
        };
        let bits = (record.quick_check >> (form.index() * 2)) & 0b11;
        match bits {
            data::QC_NO => QuickCheck::No,
            data::QC_MAYBE => QuickCheck::Maybe,
            _ => QuickCheck::Yes,
        }
    }

    fn introduced_in(&self, cp: CodePoint) -> UnicodeVersion {
        Self::record(cp).map_or(UnicodeVersion::Unassigned, |r| r.version)
    }

    fn compose_pair(&self, starter: CodePoint, second: CodePoint) -> Option<CodePoint> {
        let key = (second.value(), starter.value());
        let idx = data::COMPOSITIONS
            .binary_search_by(|pair| (pair.second, pair.starter).cmp(&key))
            .ok()?;
        Some(CodePoint::from_valid(data::COMPOSITIONS[idx].composed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cp(value: u32) -> CodePoint {
        CodePoint::new(value).unwrap()
    }

    #[test]
    fn looks_up_combining_classes() {
        let props = TableProperties::new();
        assert_eq!(props.combining_class(cp(0x0041)), 0);
        assert_eq!(props.combining_class(cp(0x0300)), 230);
        assert_eq!(props.combining_class(cp(0x0323)), 220);
        assert_eq!(props.combining_class(cp(0x0327)), 202);
        assert_eq!(props.combining_class(cp(0x0345)), 240);
        assert_eq!(props.combining_class(cp(0x1D165)), 216);
    }

    #[test]
    fn looks_up_decompositions() {
        let props = TableProperties::new();

        let d = props.decomposition(cp(0x00E9)).unwrap();
        assert_eq!(d.tag, crate::properties::DecompositionTag::Canonical);
        assert_eq!(d.mapping, &[0x0065, 0x0301]);

        let d = props.decomposition(cp(0x00BD)).unwrap();
        assert_eq!(d.tag, crate::properties::DecompositionTag::Fraction);
        assert_eq!(d.mapping, &[0x0031, 0x2044, 0x0032]);

        assert!(props.decomposition(cp(0x0041)).is_none());
        // Hangul syllables decompose arithmetically, not via the table
        assert!(props.decomposition(cp(0xAC00)).is_none());
    }

    #[test]
    fn quick_check_flags_per_form() {
        let props = TableProperties::new();

        // é: decomposable, recomposes
        assert_eq!(props.quick_check(cp(0x00E9), NormalizationForm::Nfd), QuickCheck::No);
        assert_eq!(props.quick_check(cp(0x00E9), NormalizationForm::Nfc), QuickCheck::Yes);
        assert_eq!(props.quick_check(cp(0x00E9), NormalizationForm::Nfkd), QuickCheck::No);
        assert_eq!(props.quick_check(cp(0x00E9), NormalizationForm::Nfkc), QuickCheck::Yes);

        // combining acute: maybe composable
        assert_eq!(props.quick_check(cp(0x0301), NormalizationForm::Nfd), QuickCheck::Yes);
        assert_eq!(props.quick_check(cp(0x0301), NormalizationForm::Nfc), QuickCheck::Maybe);

        // ligature fi: compatibility only
        assert_eq!(props.quick_check(cp(0xFB01), NormalizationForm::Nfd), QuickCheck::Yes);
        assert_eq!(props.quick_check(cp(0xFB01), NormalizationForm::Nfkd), QuickCheck::No);
        assert_eq!(props.quick_check(cp(0xFB01), NormalizationForm::Nfkc), QuickCheck::No);

        // unassigned defaults to yes
        assert_eq!(props.quick_check(cp(0x0250), NormalizationForm::Nfc), QuickCheck::Yes);
    }

    #[test]
    fn composes_pairs_by_binary_search() {
        let props = TableProperties::new();
        assert_eq!(props.compose_pair(cp(0x0065), cp(0x0301)), Some(cp(0x00E9)));
        assert_eq!(props.compose_pair(cp(0x0041), cp(0x030A)), Some(cp(0x00C5)));
        assert_eq!(props.compose_pair(cp(0x00C2), cp(0x0300)), Some(cp(0x1EA6)));
        assert_eq!(props.compose_pair(cp(0x0041), cp(0x0327)), None);
        // excluded compositions are not in the table
        assert_eq!(props.compose_pair(cp(0x0308), cp(0x0301)), None);
        assert_eq!(props.compose_pair(cp(0x1D157), cp(0x1D165)), None);
        assert_eq!(props.compose_pair(cp(0x2ADD), cp(0x0338)), None);
    }

    #[test]
    fn unassigned_defaults() {
        let props = TableProperties::new();
        let unknown = cp(0xE01EF + 1); // far outside the bundled blocks
        assert_eq!(props.general_category(unknown), GeneralCategory::Unassigned);
        assert_eq!(props.combining_class(unknown), 0);
        assert!(props.decomposition(unknown).is_none());
        assert_eq!(props.introduced_in(unknown), UnicodeVersion::Unassigned);
    }

    #[test]
    fn versioned_introductions() {
        let props = TableProperties::new();
        assert_eq!(props.introduced_in(cp(0x00E9)), UnicodeVersion::Unicode1_1);
        assert_eq!(props.introduced_in(cp(0x2ADC)), UnicodeVersion::Unicode3_2);
        assert_eq!(props.introduced_in(cp(0xAC00)), UnicodeVersion::Unicode2_0);
        assert_eq!(props.introduced_in(cp(0x1D15E)), UnicodeVersion::Unicode3_1);
    }
}
