//! Fitting text into a column budget.
//!
//! Both helpers work on [`clusters`], so a ZWJ sequence, a skin-toned emoji
//! or a base with its combining marks is kept or dropped as a whole.
//! Non-printable clusters count as zero columns here: a renderer that gets
//! this far has already decided to print the text.

use crate::cluster::clusters;

/// Marker appended by [`truncate_to_width`].
pub const ELLIPSIS: char = '…';

fn measured_width(s: &str) -> usize {
    clusters(s).map(|c| c.columns.unwrap_or(0)).sum()
}

/// Truncates a string to fit within a maximum display width, adding an
/// ellipsis if needed.
///
/// If the string fits within `max_width`, it is returned unchanged.
/// Otherwise whole clusters are kept while they fit in `max_width - 1`
/// columns, and `…` takes the last column.
///
/// # Example
///
/// ```
/// use termwidth::truncate_to_width;
///
/// assert_eq!(truncate_to_width("Hello", 10), "Hello");
/// assert_eq!(truncate_to_width("Hello World", 6), "Hello…");
/// // A wide character that does not fit is dropped whole.
/// assert_eq!(truncate_to_width("日本語", 4), "日…");
/// ```
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if measured_width(s) <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for cluster in clusters(s) {
        let width = cluster.columns.unwrap_or(0);
        if current_width + width > limit {
            break;
        }
        result.push_str(cluster.text);
        current_width += width;
    }

    result.push(ELLIPSIS);
    result
}

/// Pads a string with trailing spaces to `width` columns.
///
/// Strings already at least `width` columns wide are returned unchanged.
///
/// ```
/// use termwidth::pad_to_width;
///
/// assert_eq!(pad_to_width("ab", 4), "ab  ");
/// assert_eq!(pad_to_width("日本", 5), "日本 ");
/// assert_eq!(pad_to_width("toolong", 3), "toolong");
/// ```
pub fn pad_to_width(s: &str, width: usize) -> String {
    let current = measured_width(s);
    let mut result = String::with_capacity(s.len() + width.saturating_sub(current));
    result.push_str(s);
    for _ in current..width {
        result.push(' ');
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_to_width_no_truncation() {
        assert_eq!(truncate_to_width("Hello", 10), "Hello");
        assert_eq!(truncate_to_width("Hello", 5), "Hello");
    }

    #[test]
    fn test_truncate_to_width_with_truncation() {
        assert_eq!(truncate_to_width("Hello World", 6), "Hello…");
        assert_eq!(truncate_to_width("Hello World", 7), "Hello …");
    }

    #[test]
    fn test_truncate_to_width_empty() {
        assert_eq!(truncate_to_width("", 5), "");
    }

    #[test]
    fn test_truncate_to_width_one_over() {
        assert_eq!(truncate_to_width("123456", 5), "1234…");
    }

    #[test]
    fn test_truncate_to_width_zero_and_one() {
        assert_eq!(truncate_to_width("Hello", 0), "…");
        assert_eq!(truncate_to_width("Hello", 1), "…");
    }

    #[test]
    fn test_truncate_keeps_zwj_sequence_whole() {
        let family = "\u{1F468}\u{200D}\u{1F468}\u{200D}\u{1F467}\u{200D}\u{1F467}";
        let text = format!("{family}{family}x");
        assert_eq!(truncate_to_width(&text, 4), format!("{family}…"));
    }

    #[test]
    fn test_truncate_keeps_skin_tone_with_base() {
        let thumbs = "\u{1F44D}\u{1F3FF}";
        let text = format!("a{thumbs}bc");
        assert_eq!(truncate_to_width(&text, 4), format!("a{thumbs}…"));
        assert_eq!(truncate_to_width(&text, 3), "a…");
    }

    #[test]
    fn test_truncate_keeps_combining_marks() {
        assert_eq!(truncate_to_width("cafe\u{301}s!", 5), "cafe\u{301}…");
    }

    #[test]
    fn test_pad_to_width() {
        assert_eq!(pad_to_width("", 3), "   ");
        assert_eq!(pad_to_width("\u{26A0}\u{FE0F}", 3), "\u{26A0}\u{FE0F} ");
        assert_eq!(pad_to_width("cafe\u{301}", 5), "cafe\u{301} ");
        assert_eq!(pad_to_width("exact", 5), "exact");
    }
}
