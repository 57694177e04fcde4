//! The display width of a single codepoint.

use std::fmt;

/// Number of terminal columns a codepoint occupies.
///
/// Mirrors the POSIX `wcwidth` return values: `-1` for non-printable
/// codepoints, otherwise `0`, `1` or `2` columns.
///
/// # Example
///
/// ```
/// use termwidth::{codepoint_width, Width};
///
/// assert_eq!(codepoint_width('a' as u32), Width::Narrow);
/// assert_eq!(codepoint_width(0x1F600), Width::Wide);
/// assert_eq!(i32::from(codepoint_width(0x1B)), -1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Width {
    /// Control characters and non-characters.
    NonPrintable,
    /// Combining marks, format characters, NUL.
    Zero,
    /// One column.
    Narrow,
    /// Two columns: East Asian wide/fullwidth, emoji presentation.
    Wide,
}

impl Width {
    /// Columns occupied, or `None` for [`Width::NonPrintable`].
    pub fn columns(self) -> Option<usize> {
        match self {
            Width::NonPrintable => None,
            Width::Zero => Some(0),
            Width::Narrow => Some(1),
            Width::Wide => Some(2),
        }
    }

    /// Returns `true` unless this is [`Width::NonPrintable`].
    pub fn is_printable(self) -> bool {
        !matches!(self, Width::NonPrintable)
    }

    /// The `wcwidth` value: `-1`, `0`, `1` or `2`.
    pub fn as_i32(self) -> i32 {
        match self {
            Width::NonPrintable => -1,
            Width::Zero => 0,
            Width::Narrow => 1,
            Width::Wide => 2,
        }
    }

    /// Inverse of [`Width::as_i32`]. Values outside `-1..=2` yield `None`.
    pub fn from_i32(value: i32) -> Option<Self> {
        match value {
            -1 => Some(Width::NonPrintable),
            0 => Some(Width::Zero),
            1 => Some(Width::Narrow),
            2 => Some(Width::Wide),
            _ => None,
        }
    }
}

impl From<Width> for i32 {
    fn from(width: Width) -> Self {
        width.as_i32()
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_i32())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Width {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.as_i32())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Width {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = i32::deserialize(deserializer)?;
        Width::from_i32(value).ok_or_else(|| {
            serde::de::Error::invalid_value(
                serde::de::Unexpected::Signed(value as i64),
                &"a width between -1 and 2",
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_and_sentinel() {
        assert_eq!(Width::NonPrintable.columns(), None);
        assert_eq!(Width::Zero.columns(), Some(0));
        assert_eq!(Width::Narrow.columns(), Some(1));
        assert_eq!(Width::Wide.columns(), Some(2));
        assert!(!Width::NonPrintable.is_printable());
        assert!(Width::Zero.is_printable());
    }

    #[test]
    fn i32_round_trip_covers_every_variant() {
        for width in [Width::NonPrintable, Width::Zero, Width::Narrow, Width::Wide] {
            assert_eq!(Width::from_i32(width.as_i32()), Some(width));
        }
        assert_eq!(Width::from_i32(3), None);
        assert_eq!(Width::from_i32(-2), None);
    }

    #[test]
    fn display_uses_wcwidth_value() {
        assert_eq!(Width::NonPrintable.to_string(), "-1");
        assert_eq!(Width::Wide.to_string(), "2");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_integer_form() {
        assert_eq!(serde_json::to_string(&Width::Wide).unwrap(), "2");
        assert_eq!(
            serde_json::from_str::<Width>("-1").unwrap(),
            Width::NonPrintable
        );
        assert!(serde_json::from_str::<Width>("7").is_err());
    }
}
