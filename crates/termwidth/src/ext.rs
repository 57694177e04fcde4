//! Method syntax for the width functions.

use crate::classify::codepoint_width;
use crate::scan::str_width;
use crate::width::Width;

/// Display width as a method on text types.
///
/// ```
/// use termwidth::{CharWidthExt, Width, WidthExt};
///
/// assert_eq!("안녕하세요".columns(), Some(10));
/// assert_eq!('\u{1F600}'.width(), Width::Wide);
/// ```
pub trait WidthExt {
    /// Total columns, or `None` if the value holds a non-printable codepoint.
    fn columns(&self) -> Option<usize>;
}

impl WidthExt for str {
    fn columns(&self) -> Option<usize> {
        str_width(self)
    }
}

impl WidthExt for char {
    fn columns(&self) -> Option<usize> {
        self.width().columns()
    }
}

/// Per-codepoint [`Width`] for `char`.
pub trait CharWidthExt {
    /// The intrinsic width, without sequence rules.
    fn width(&self) -> Width;
}

impl CharWidthExt for char {
    fn width(&self) -> Width {
        codepoint_width(*self as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn str_and_string_share_the_impl() {
        let owned = String::from("ノード.js");
        assert_eq!(owned.columns(), Some(9));
        assert_eq!("\x1b[31m".columns(), None);
    }

    #[test]
    fn char_columns() {
        assert_eq!('a'.columns(), Some(1));
        assert_eq!('\u{301}'.columns(), Some(0));
        assert_eq!('\n'.columns(), None);
    }
}
