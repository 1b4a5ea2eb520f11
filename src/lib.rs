//! `norm16` - Unicode normalization over UTF-16 buffers
//!
//! An implementation of the UAX #15 normalization algorithm (NFD, NFC,
//! NFKD, NFKC) that mutates UTF-16 buffers in place: canonical and
//! compatibility decomposition, canonical ordering of combining marks,
//! canonical composition, and a quick-check fast path, with algorithmic
//! Hangul handling and the ability to pin behavior to an older Unicode
//! version.
//!
//! The per-code-point property table is injected through the
//! [`PropertySource`] trait; [`TableProperties`] is the bundled
//! implementation backed by static tables and binary search.
//!
//! # Examples
//!
//! ```
//! use norm16::{NormalizationForm, is_normalized, normalized};
//!
//! // e + combining acute composes to é
//! assert_eq!(normalized("e\u{0301}", NormalizationForm::Nfc), "é");
//! // and é decomposes back
//! assert_eq!(normalized("é", NormalizationForm::Nfd), "e\u{0301}");
//!
//! assert!(is_normalized("é", NormalizationForm::Nfc));
//! ```
//!
//! In-place normalization over a caller-owned buffer:
//!
//! ```
//! use norm16::{NormalizationForm, TableProperties, UnicodeVersion, Utf16Buffer, normalize};
//!
//! let mut buf = Utf16Buffer::from("한국");
//! normalize(
//!     &TableProperties::new(),
//!     &mut buf,
//!     NormalizationForm::Nfd,
//!     UnicodeVersion::Unassigned,
//!     0,
//! );
//! assert_eq!(buf.to_string_lossy(), "\u{1112}\u{1161}\u{11AB}\u{1100}\u{116E}\u{11A8}");
//! ```

// Crate-level lint configuration
#![warn(unsafe_code)]
#![allow(clippy::module_name_repetitions)] // NormalizationForm etc. read better qualified
#![allow(clippy::cast_possible_truncation)] // Intentional u32 -> u16 casts after range checks
#![allow(clippy::missing_panics_doc)] // Buffer index contracts are documented inline
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer

pub mod buffer;
pub mod codepoint;
pub mod error;
pub mod hangul;
pub mod normalize;
pub mod properties;

// Re-export core types at crate root
pub use buffer::Utf16Buffer;
pub use codepoint::{CodePoint, MAX_CODE_POINT, is_high_surrogate, is_low_surrogate};
pub use error::{Error, Result};
pub use normalize::{NormalizationForm, is_normalized, normalize, normalized};
pub use properties::{
    Decomposition, DecompositionTag, GeneralCategory, PropertySource, QuickCheck,
    TableProperties, UnicodeVersion,
};
