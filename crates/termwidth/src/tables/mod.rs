//! Compiled-in Unicode property bitmaps.
//!
//! Two page-indexed bitmaps cover planes 0 and 1 (`U+0000..=U+1FFFF`): the
//! high bits of a codepoint (`cp >> 8`) select a page through a 512-entry
//! index, and the low byte selects a bit within the 32-byte page. Pages with
//! identical contents are stored once, so the long runs of plain letters
//! share the all-clear page 0.
//!
//! The emoji-modifier-base set is small and lives near the top of plane 1,
//! so it is a flat bitmap starting at U+1F385.

mod data;

pub use data::UNICODE_VERSION;

/// Bytes per bitmap page (256 codepoints, one bit each).
pub const PAGE_BYTES: usize = 32;

/// Number of codepoints addressable by a [`PagedBitmap`].
pub const PAGED_LIMIT: u32 = 0x2_0000;

/// A set of codepoints stored as a two-level bitmap.
#[derive(Debug, Clone, Copy)]
pub struct PagedBitmap {
    index: &'static [u8],
    pages: &'static [[u8; PAGE_BYTES]],
}

impl PagedBitmap {
    /// Page number holding `cp`, or `None` past the end of the index.
    pub fn page_of(&self, cp: u32) -> Option<usize> {
        self.index.get((cp >> 8) as usize).map(|&page| page as usize)
    }

    /// Returns `true` if `cp` is in the set.
    ///
    /// Codepoints outside the indexed range are never in the set.
    pub fn contains(&self, cp: u32) -> bool {
        let Some(page) = self.page_of(cp).and_then(|page| self.pages.get(page)) else {
            return false;
        };
        let byte = page[((cp & 0xFF) >> 3) as usize];
        (byte >> (cp & 7)) & 1 != 0
    }

    /// The page index, one entry per 256 codepoints.
    pub fn index(&self) -> &'static [u8] {
        self.index
    }

    /// The distinct pages referenced by the index.
    pub fn pages(&self) -> &'static [[u8; PAGE_BYTES]] {
        self.pages
    }
}

/// A set of codepoints stored as a flat bitmap starting at `base`.
#[derive(Debug, Clone, Copy)]
pub struct OffsetBitmap {
    base: u32,
    bits: &'static [u8],
}

impl OffsetBitmap {
    /// First codepoint the bitmap can describe.
    pub fn base(&self) -> u32 {
        self.base
    }

    /// One past the last codepoint the bitmap can describe.
    pub fn end(&self) -> u32 {
        self.base + (self.bits.len() as u32) * 8
    }

    /// Returns `true` if `cp` is in the set. Codepoints outside
    /// `base()..end()` are never in the set.
    pub fn contains(&self, cp: u32) -> bool {
        let Some(offset) = cp.checked_sub(self.base) else {
            return false;
        };
        match self.bits.get((offset >> 3) as usize) {
            Some(byte) => (byte >> (offset & 7)) & 1 != 0,
            None => false,
        }
    }
}

/// Nonspacing marks, enclosing marks, format characters and conjoining
/// Hangul jungseong/jongseong (U+1160..U+11FF, U+D7B0..U+D7FF).
pub static ZERO_WIDTH: PagedBitmap = PagedBitmap {
    index: &data::ZERO_WIDTH_INDEX,
    pages: &data::ZERO_WIDTH_PAGES,
};

/// East Asian Wide (W) and Fullwidth (F) characters.
pub static WIDE: PagedBitmap = PagedBitmap {
    index: &data::WIDE_INDEX,
    pages: &data::WIDE_PAGES,
};

/// Emoji_Modifier_Base characters from U+1F385 upward.
pub static MODIFIER_BASE: OffsetBitmap = OffsetBitmap {
    base: 0x1F385,
    bits: &data::MODIFIER_BASE_BITS,
};
