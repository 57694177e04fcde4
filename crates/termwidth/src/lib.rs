//! Termwidth - terminal column width of Unicode text.
//!
//! Termwidth answers one question: how many fixed-width terminal cells does
//! a string occupy? It is the POSIX `wcwidth`/`wcswidth` pair, extended with
//! the emoji rules terminals actually follow:
//!
//! - East Asian wide and fullwidth characters take two columns
//! - Combining marks, format characters and tag characters take none
//! - VS-16 (`U+FE0F`) turns a text-presentation character into a 2-column emoji
//! - A skin-tone modifier on a modifier base does not add a cell
//! - A ZWJ sequence is as wide as its first element
//! - Control characters make the whole string non-printable
//!
//! # Quick Start
//!
//! ```rust
//! use termwidth::{char_width, codepoint_width, str_width, Width};
//!
//! assert_eq!(str_width("Hello!"), Some(6));
//! assert_eq!(str_width("コンニチハ, セカイ!"), Some(19));
//! assert_eq!(str_width("cafe\u{301}"), Some(4));
//!
//! // Emoji sequences
//! assert_eq!(str_width("\u{26A0}"), Some(1));
//! assert_eq!(str_width("\u{26A0}\u{FE0F}"), Some(2));
//! assert_eq!(str_width("\u{1F469}\u{1F3FF}"), Some(2));
//! assert_eq!(str_width("\u{1F469}\u{200D}\u{1F9AF}"), Some(2));
//! assert_eq!(str_width("\u{1F1F5}\u{1F1EB}"), Some(2));
//!
//! // Non-printable input
//! assert_eq!(str_width("Hi\tthere"), None);
//!
//! // Single codepoints
//! assert_eq!(codepoint_width(0x3041), Width::Wide);
//! assert_eq!(char_width("a").unwrap(), Width::Narrow);
//! assert!(char_width("ab").is_err());
//! ```
//!
//! # Width Semantics
//!
//! | Input | Width |
//! |-------|-------|
//! | NUL | 0 |
//! | other C0/C1 controls, non-characters | non-printable |
//! | `Mn`, `Me`, `Cf`, Hangul medial/final jamo | 0 |
//! | East Asian `W`/`F`, plane 2 and 3 | 2 |
//! | `U+E0001`, `U+E0020..=U+E007F`, `U+E0100..=U+E01EF` | 0 |
//! | everything else, including unassigned codepoints | 1 |
//!
//! The tables are generated from Unicode [`UNICODE_VERSION`].
//!
//! This is not grapheme segmentation. Where terminals render differently
//! from grapheme rules, the scanner follows the terminals.

mod classify;
mod cluster;
mod emoji;
mod error;
mod ext;
mod fit;
mod scan;
mod tables;
mod width;

pub use classify::{char_width, codepoint_width, wcwidth};
pub use cluster::{clusters, Cluster, Clusters};
pub use emoji::{
    char_is_emoji_modifier_base, is_emoji_modifier_base, is_modifier_sequence,
    is_skin_tone_modifier, SKIN_TONE_FIRST, SKIN_TONE_LAST,
};
pub use error::{Result, WidthError};
pub use ext::{CharWidthExt, WidthExt};
pub use fit::{pad_to_width, truncate_to_width, ELLIPSIS};
pub use scan::{
    codepoints_width, scan, str_width, str_width_prefix, wcswidth, ScanState, Step, VS15, VS16,
    ZWJ,
};
pub use tables::{
    OffsetBitmap, PagedBitmap, MODIFIER_BASE, PAGED_LIMIT, PAGE_BYTES, UNICODE_VERSION, WIDE,
    ZERO_WIDTH,
};
pub use width::Width;
