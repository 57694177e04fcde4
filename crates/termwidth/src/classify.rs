//! Intrinsic width of a single codepoint.
//!
//! The rules follow musl's `wcwidth`: a fast arithmetic test for Latin-1,
//! bitmap lookups for planes 0 and 1, and fixed ranges for the rest.

use crate::error::{single_codepoint, Result};
use crate::tables::{WIDE, ZERO_WIDTH};
use crate::width::Width;

/// Returns the display width of one codepoint, without sequence rules.
///
/// Total: every `u32` maps to exactly one [`Width`]. Unassigned codepoints
/// outside the tabulated planes are [`Width::Narrow`].
///
/// # Example
///
/// ```
/// use termwidth::{codepoint_width, Width};
///
/// assert_eq!(codepoint_width(0), Width::Zero);
/// assert_eq!(codepoint_width(0x01), Width::NonPrintable);
/// assert_eq!(codepoint_width(0x0301), Width::Zero);
/// assert_eq!(codepoint_width(0x4E54), Width::Wide);
/// ```
pub fn codepoint_width(cp: u32) -> Width {
    if cp < 0xFF {
        return if (cp + 1) & 0x7F >= 0x21 {
            Width::Narrow
        } else if cp == 0 {
            Width::Zero
        } else {
            Width::NonPrintable
        };
    }

    // Planes 0 and 1, minus their last two codepoints.
    if cp & 0xFFFE_FFFF < 0xFFFE {
        if ZERO_WIDTH.contains(cp) {
            return Width::Zero;
        }
        if WIDE.contains(cp) {
            return Width::Wide;
        }
        return Width::Narrow;
    }

    if cp & 0xFFFE == 0xFFFE {
        return Width::NonPrintable;
    }

    match cp {
        // CJK Unified Ideographs Extension B onward, and the TIP.
        0x2_0000..=0x3_FFFF => Width::Wide,
        // Language tag, tag characters, variation selectors 17-256.
        0xE_0001 | 0xE_0020..=0xE_007F | 0xE_0100..=0xE_01EF => Width::Zero,
        _ => Width::Narrow,
    }
}

/// Width of a string holding exactly one scalar value.
///
/// # Errors
///
/// [`WidthError::InvalidInput`](crate::WidthError::InvalidInput) when `text`
/// is empty or holds more than one scalar value.
///
/// # Example
///
/// ```
/// use termwidth::{char_width, Width};
///
/// assert_eq!(char_width("ア").unwrap(), Width::Wide);
/// assert!(char_width("ab").is_err());
/// ```
pub fn char_width(text: &str) -> Result<Width> {
    single_codepoint(text).map(codepoint_width)
}

/// POSIX `wcwidth`: `-1`, `0`, `1` or `2`.
pub fn wcwidth(cp: u32) -> i32 {
    codepoint_width(cp).as_i32()
}
