//! Per-code-point Unicode properties consumed by the normalization engines.
//!
//! The engines depend only on the [`PropertySource`] trait, so how the
//! property table is generated or stored stays out of the core. The bundled
//! [`TableProperties`] implementation is backed by sorted static range
//! records plus binary search; see [`table`] and the generated [`data`].
//!
//! All lookups are pure and total: unassigned code points (and anything
//! outside the bundled table) return well-defined defaults — category
//! [`GeneralCategory::Unassigned`], combining class 0, no decomposition,
//! quick-check [`QuickCheck::Yes`], version [`UnicodeVersion::Unassigned`],
//! no composition.

mod data;
mod table;

pub use table::TableProperties;

use crate::codepoint::CodePoint;
use crate::normalize::NormalizationForm;

/// Unicode general categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeneralCategory {
    UppercaseLetter,
    LowercaseLetter,
    TitlecaseLetter,
    ModifierLetter,
    OtherLetter,
    NonspacingMark,
    SpacingMark,
    EnclosingMark,
    DecimalNumber,
    LetterNumber,
    OtherNumber,
    ConnectorPunctuation,
    DashPunctuation,
    OpenPunctuation,
    ClosePunctuation,
    InitialPunctuation,
    FinalPunctuation,
    OtherPunctuation,
    MathSymbol,
    CurrencySymbol,
    ModifierSymbol,
    OtherSymbol,
    SpaceSeparator,
    LineSeparator,
    ParagraphSeparator,
    Control,
    Format,
    Surrogate,
    PrivateUse,
    Unassigned,
}

/// How a decomposition mapping may be applied.
///
/// `Canonical` mappings apply under every form; all other tags are
/// compatibility mappings and apply under NFKD/NFKC only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecompositionTag {
    Canonical,
    Font,
    NoBreak,
    Initial,
    Medial,
    Final,
    Isolated,
    Circle,
    Super,
    Sub,
    Vertical,
    Wide,
    Narrow,
    Small,
    Square,
    Fraction,
    Compat,
}

/// A decomposition mapping borrowed from the property table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decomposition<'a> {
    /// Tag governing which forms the mapping applies under.
    pub tag: DecompositionTag,
    /// The mapping sequence, one or more code points.
    pub mapping: &'a [u32],
}

impl Decomposition<'_> {
    /// Whether the mapping applies given a canonical-only policy.
    #[must_use]
    pub fn applies(&self, canonical_only: bool) -> bool {
        !canonical_only || self.tag == DecompositionTag::Canonical
    }

    /// The mapping sequence as code points.
    pub fn code_points(&self) -> impl Iterator<Item = CodePoint> + '_ {
        self.mapping.iter().map(|&value| CodePoint::from_valid(value))
    }
}

/// Tri-state quick-check verdict, stored 2 bits per form in the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuickCheck {
    /// The code point is stable under the form.
    Yes,
    /// The code point is never present in text normalized to the form.
    No,
    /// Stability depends on context (composable combining marks).
    Maybe,
}

/// Unicode versions the engine can pin to.
///
/// `Unassigned` sorts first: a code point the bundled data does not know is
/// never newer than a requested ceiling, and as a *requested* version it
/// means "use the latest bundled data" (resolved before the engines run).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum UnicodeVersion {
    Unassigned,
    Unicode1_1,
    Unicode2_0,
    Unicode2_1,
    Unicode3_0,
    Unicode3_1,
    Unicode3_2,
    Unicode4_0,
    Unicode4_1,
    Unicode5_0,
    Unicode5_1,
    Unicode5_2,
    Unicode6_0,
    Unicode6_1,
    Unicode6_2,
    Unicode6_3,
    Unicode7_0,
    Unicode8_0,
    Unicode9_0,
    Unicode10_0,
    Unicode11_0,
    Unicode12_0,
    Unicode12_1,
    Unicode13_0,
    Unicode14_0,
    Unicode15_0,
    Unicode15_1,
}

impl UnicodeVersion {
    /// The newest version covered by the bundled property data.
    pub const LATEST: Self = Self::Unicode15_1;
}

/// Read-only per-code-point property lookups.
///
/// Implementations must be pure: the same input always yields the same
/// output, with no interior mutation. A `&P` may therefore be shared across
/// arbitrarily many concurrent normalization calls.
pub trait PropertySource {
    /// Unicode general category.
    fn general_category(&self, cp: CodePoint) -> GeneralCategory;

    /// Canonical combining class (0 for starters).
    fn combining_class(&self, cp: CodePoint) -> u8;

    /// Decomposition mapping, if any. Hangul syllables decompose
    /// algorithmically and are not expected to appear here.
    fn decomposition(&self, cp: CodePoint) -> Option<Decomposition<'_>>;

    /// Quick-check flag for the given normalization form.
    fn quick_check(&self, cp: CodePoint, form: NormalizationForm) -> QuickCheck;

    /// Unicode version that introduced the code point.
    fn introduced_in(&self, cp: CodePoint) -> UnicodeVersion;

    /// Canonical composition of a starter/combiner pair, if the pair
    /// composes and is not composition-excluded. Exclusions are baked into
    /// the table; implementations do not re-derive them.
    fn compose_pair(&self, starter: CodePoint, second: CodePoint) -> Option<CodePoint>;
}
