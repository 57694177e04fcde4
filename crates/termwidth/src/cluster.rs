//! Splitting text into the pieces the scanner measures together.
//!
//! These are not grapheme clusters. A cluster here is a base codepoint plus
//! everything the scanner folds into it: zero-width marks and tags, VS-16,
//! a skin-tone modifier on a modifier base, and ZWJ-joined elements.

use std::iter::Peekable;
use std::str::CharIndices;

use crate::scan::{ScanState, Step};

/// A slice of text measured as one unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cluster<'a> {
    /// The source text of the cluster.
    pub text: &'a str,
    /// Columns occupied, or `None` if the cluster holds a non-printable
    /// codepoint.
    pub columns: Option<usize>,
}

/// Iterator over the [`Cluster`]s of a string. Created by [`clusters`].
#[derive(Debug, Clone)]
pub struct Clusters<'a> {
    text: &'a str,
    chars: Peekable<CharIndices<'a>>,
    state: ScanState,
}

/// Splits `text` into width clusters.
///
/// The columns of all clusters add up to [`str_width`](crate::str_width)
/// when the text is printable. After a non-printable codepoint the scanner
/// starts over, so the remaining clusters are still measured.
///
/// # Example
///
/// ```
/// use termwidth::clusters;
///
/// let pieces: Vec<_> = clusters("a\u{1F469}\u{200D}\u{1F9AF}b")
///     .map(|c| (c.text, c.columns))
///     .collect();
/// assert_eq!(
///     pieces,
///     vec![("a", Some(1)), ("\u{1F469}\u{200D}\u{1F9AF}", Some(2)), ("b", Some(1))]
/// );
/// ```
pub fn clusters(text: &str) -> Clusters<'_> {
    Clusters {
        text,
        chars: text.char_indices().peekable(),
        state: ScanState::new(),
    }
}

impl Clusters<'_> {
    fn feed(&mut self, cp: u32) -> Option<usize> {
        match self.state.step(cp) {
            Step::Advance { state, columns } => {
                self.state = state;
                Some(columns)
            }
            Step::NonPrintable => {
                self.state = ScanState::new();
                None
            }
        }
    }
}

impl<'a> Iterator for Clusters<'a> {
    type Item = Cluster<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (start, first) = self.chars.next()?;
        let mut columns = self.feed(first as u32);
        let mut end = start + first.len_utf8();

        while let Some(&(offset, c)) = self.chars.peek() {
            if !self.state.extends_cluster(c as u32) {
                break;
            }
            self.chars.next();
            let step = self.feed(c as u32);
            columns = columns.zip(step).map(|(a, b)| a + b);
            end = offset + c.len_utf8();
        }

        Some(Cluster {
            text: &self.text[start..end],
            columns,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pieces(text: &str) -> Vec<(&str, Option<usize>)> {
        clusters(text).map(|c| (c.text, c.columns)).collect()
    }

    #[test]
    fn empty_text_has_no_clusters() {
        assert!(pieces("").is_empty());
    }

    #[test]
    fn combining_marks_attach_to_base() {
        assert_eq!(pieces("cafe\u{301}!")[3], ("e\u{301}", Some(1)));
    }

    #[test]
    fn vs16_and_keycap_stay_together() {
        assert_eq!(
            pieces("5\u{FE0F}\u{20E3}x"),
            vec![("5\u{FE0F}\u{20E3}", Some(2)), ("x", Some(1))]
        );
    }

    #[test]
    fn skin_tone_attaches_only_to_modifier_bases() {
        assert_eq!(
            pieces("\u{1F44D}\u{1F3FF}"),
            vec![("\u{1F44D}\u{1F3FF}", Some(2))]
        );
        assert_eq!(
            pieces("\u{1F4EE}\u{1F3FE}"),
            vec![("\u{1F4EE}", Some(2)), ("\u{1F3FE}", Some(2))]
        );
    }

    #[test]
    fn subdivision_flag_is_one_cluster() {
        let flag = "\u{1F3F4}\u{E0067}\u{E0062}\u{E0073}\u{E0063}\u{E0074}\u{E007F}";
        assert_eq!(pieces(flag), vec![(flag, Some(2))]);
    }

    #[test]
    fn non_printable_cluster_then_recovery() {
        assert_eq!(
            pieces("a\tb"),
            vec![("a", Some(1)), ("\t", None), ("b", Some(1))]
        );
    }

    #[test]
    fn leading_joiner_starts_a_cluster() {
        assert_eq!(
            pieces("\u{200D}ab"),
            vec![("\u{200D}a", Some(0)), ("b", Some(1))]
        );
    }
}
