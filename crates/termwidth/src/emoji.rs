//! Emoji modifier sequences (UTS #51).
//!
//! A modifier base followed by one of the five Fitzpatrick skin-tone
//! modifiers renders as a single emoji. The handful of bases below U+1F385
//! are listed explicitly; the rest come from the modifier-base bitmap.

use crate::error::{single_codepoint, Result};
use crate::tables::MODIFIER_BASE;

/// First Fitzpatrick skin-tone modifier (type 1-2).
pub const SKIN_TONE_FIRST: u32 = 0x1F3FB;
/// Last Fitzpatrick skin-tone modifier (type 6).
pub const SKIN_TONE_LAST: u32 = 0x1F3FF;

/// Returns `true` for U+1F3FB..=U+1F3FF.
pub fn is_skin_tone_modifier(cp: u32) -> bool {
    (SKIN_TONE_FIRST..=SKIN_TONE_LAST).contains(&cp)
}

/// Returns `true` if `preceding` followed by `modifier` is an emoji
/// modifier sequence.
///
/// # Example
///
/// ```
/// use termwidth::is_modifier_sequence;
///
/// // woman + dark skin tone
/// assert!(is_modifier_sequence(0x1F469, 0x1F3FF));
/// // postbox does not take a skin tone
/// assert!(!is_modifier_sequence(0x1F4EE, 0x1F3FE));
/// ```
pub fn is_modifier_sequence(preceding: u32, modifier: u32) -> bool {
    if !is_skin_tone_modifier(modifier) {
        return false;
    }
    if preceding < MODIFIER_BASE.base() {
        return matches!(preceding, 0x261D | 0x26F9 | 0x270A..=0x270D);
    }
    MODIFIER_BASE.contains(preceding)
}

/// Returns `true` if `cp` accepts a skin-tone modifier.
pub fn is_emoji_modifier_base(cp: u32) -> bool {
    is_modifier_sequence(cp, SKIN_TONE_FIRST)
}

/// Arity-checked [`is_emoji_modifier_base`] for a one-scalar string.
///
/// # Errors
///
/// [`WidthError::InvalidInput`](crate::WidthError::InvalidInput) unless
/// `text` holds exactly one scalar value.
pub fn char_is_emoji_modifier_base(text: &str) -> Result<bool> {
    single_codepoint(text).map(is_emoji_modifier_base)
}
