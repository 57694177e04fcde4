//! The `wcswidth` scanner.
//!
//! A string's width is the sum of its codepoint widths after three override
//! rules, applied in a single left-to-right pass:
//!
//! 1. **ZWJ** (U+200D): the joiner and the element it joins contribute
//!    nothing, as does a skin-tone modifier or VS-16 directly after the
//!    joined element. A ZWJ sequence is as wide as its first element.
//! 2. **VS-16** (U+FE0F): forces the pending cluster to two columns.
//! 3. **Skin-tone modifiers** after a modifier base top the pair up to two
//!    columns in total.
//!
//! Everything else is [`codepoint_width`]. A non-printable codepoint makes
//! the whole result non-printable, as with POSIX `wcswidth`.
//!
//! The scanner state is the explicit [`ScanState`] record, advanced one
//! codepoint at a time by the pure [`ScanState::step`].

use crate::classify::codepoint_width;
use crate::emoji::{is_modifier_sequence, is_skin_tone_modifier};
use crate::width::Width;

/// Zero width joiner.
pub const ZWJ: u32 = 0x200D;
/// Variation selector 15, text presentation.
pub const VS15: u32 = 0xFE0E;
/// Variation selector 16, emoji presentation.
pub const VS16: u32 = 0xFE0F;

/// What the scanner swallows next, after a ZWJ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Skip {
    #[default]
    Nothing,
    /// The element right after the joiner.
    Joined,
    /// A skin-tone modifier or VS-16 trailing the joined element.
    Decoration,
}

/// Scanner state carried between codepoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanState {
    last: u32,
    pending: usize,
    skip: Skip,
}

/// Outcome of feeding one codepoint to the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The codepoint was consumed and added `columns` to the total.
    Advance {
        /// State for the next codepoint.
        state: ScanState,
        /// Columns contributed by this codepoint.
        columns: usize,
    },
    /// The codepoint is not printable; the scan is over.
    NonPrintable,
}

impl ScanState {
    /// State at the start of a string.
    pub fn new() -> Self {
        Self::default()
    }

    /// The last codepoint consumed as a base (or the last ZWJ / VS-16).
    pub fn last(&self) -> u32 {
        self.last
    }

    /// Width of the pending cluster, in columns.
    pub fn pending(&self) -> usize {
        self.pending
    }

    /// Returns `true` while the scanner is inside a ZWJ sequence and will
    /// swallow `cp` without counting it.
    fn swallows(&self, cp: u32) -> bool {
        match self.skip {
            Skip::Nothing => false,
            Skip::Joined => true,
            Skip::Decoration => is_skin_tone_modifier(cp) || cp == VS16,
        }
    }

    /// Returns `true` if `cp` belongs to the cluster currently being
    /// scanned rather than starting a new one.
    ///
    /// Joined elements, joiners, VS-16, skin-tone modifiers on a base and
    /// zero-width codepoints all extend the cluster.
    pub fn extends_cluster(&self, cp: u32) -> bool {
        self.swallows(cp)
            || cp == ZWJ
            || cp == VS16
            || is_modifier_sequence(self.last, cp)
            || codepoint_width(cp) == Width::Zero
    }

    /// Feeds one codepoint to the scanner.
    pub fn step(self, cp: u32) -> Step {
        if self.swallows(cp) {
            let skip = match self.skip {
                Skip::Joined => Skip::Decoration,
                _ => Skip::Nothing,
            };
            return Step::Advance {
                state: ScanState { skip, ..self },
                columns: 0,
            };
        }

        if cp == ZWJ {
            return Step::Advance {
                state: ScanState {
                    last: ZWJ,
                    pending: self.pending,
                    skip: Skip::Joined,
                },
                columns: 0,
            };
        }

        if cp == VS16 {
            // Text-presentation width 1 becomes emoji width 2.
            let columns = usize::from(self.pending == 1);
            return Step::Advance {
                state: ScanState {
                    last: VS16,
                    pending: 2,
                    skip: Skip::Nothing,
                },
                columns,
            };
        }

        let columns = if is_modifier_sequence(self.last, cp) {
            2usize.saturating_sub(self.pending)
        } else {
            match codepoint_width(cp).columns() {
                Some(columns) => columns,
                None => return Step::NonPrintable,
            }
        };

        Step::Advance {
            state: ScanState {
                last: cp,
                pending: columns,
                skip: Skip::Nothing,
            },
            columns,
        }
    }
}

/// Total width of a codepoint sequence, or `None` if any is non-printable.
pub fn scan<I>(codepoints: I) -> Option<usize>
where
    I: IntoIterator<Item = u32>,
{
    codepoints
        .into_iter()
        .try_fold((ScanState::new(), 0usize), |(state, sum), cp| {
            match state.step(cp) {
                Step::Advance { state, columns } => Some((state, sum + columns)),
                Step::NonPrintable => None,
            }
        })
        .map(|(_, sum)| sum)
}

/// Width of the first `limit` codepoints of a decoded sequence.
///
/// `limit` is clamped to the sequence length; `None` scans everything.
pub fn codepoints_width(codepoints: &[u32], limit: Option<usize>) -> Option<usize> {
    let end = limit.map_or(codepoints.len(), |n| n.min(codepoints.len()));
    scan(codepoints[..end].iter().copied())
}

/// Display width of `text` in terminal columns.
///
/// Returns `None` if any codepoint is non-printable (a control character or
/// a non-character).
///
/// # Example
///
/// ```
/// use termwidth::str_width;
///
/// assert_eq!(str_width("Hello!"), Some(6));
/// assert_eq!(str_width("コンニチハ"), Some(10));
/// assert_eq!(str_width("\u{26A0}\u{FE0F}"), Some(2));
/// assert_eq!(str_width("\u{1F468}\u{200D}\u{1F468}\u{200D}\u{1F467}"), Some(2));
/// assert_eq!(str_width("Hi\tthere"), None);
/// ```
pub fn str_width(text: &str) -> Option<usize> {
    scan(text.chars().map(u32::from))
}

/// Display width of the first `limit` scalar values of `text`.
///
/// ```
/// use termwidth::str_width_prefix;
///
/// assert_eq!(str_width_prefix("コンニチハ, セカイ!", 7), Some(12));
/// assert_eq!(str_width_prefix("abc", 10), Some(3));
/// ```
pub fn str_width_prefix(text: &str, limit: usize) -> Option<usize> {
    scan(text.chars().take(limit).map(u32::from))
}

/// POSIX `wcswidth`: the width of the first `limit` scalar values, or `-1`.
///
/// Totals above `i32::MAX` are clamped to `i32::MAX`.
pub fn wcswidth(text: &str, limit: Option<usize>) -> i32 {
    let width = match limit {
        Some(limit) => str_width_prefix(text, limit),
        None => str_width(text),
    };
    match width {
        Some(width) => clamp_to_i32(width),
        None => -1,
    }
}

fn clamp_to_i32(width: usize) -> i32 {
    i32::try_from(width).unwrap_or(i32::MAX)
}
