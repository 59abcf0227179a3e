use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ShioriError};

/// Raw value stored for a chapter whose number could not be determined.
pub const UNKNOWN_SENTINEL: f64 = -1.0;

/// Raw value stored for a chapter explicitly marked as unnumbered.
pub const UNNUMBERED_SENTINEL: f64 = -2.0;

/// Canonical chapter number.
///
/// Stored chapter metadata uses a bare `f64` where `-1.0` means "unknown"
/// and `-2.0` means "unnumbered, keep as is". This enum makes both states
/// explicit while (de)serializing to the same raw values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub enum ChapterNumber {
    /// No number could be derived from the title.
    Unknown,

    /// Explicitly unnumbered (specials, one-shots); never re-derived.
    Unnumbered,

    /// A concrete number: integer main part plus fractional sub part.
    Value(f64),
}

impl ChapterNumber {
    /// Interprets a raw stored value, mapping the two sentinels.
    #[must_use]
    pub fn from_raw(raw: f64) -> Self {
        if raw == UNKNOWN_SENTINEL {
            Self::Unknown
        } else if raw == UNNUMBERED_SENTINEL {
            Self::Unnumbered
        } else {
            Self::Value(raw)
        }
    }

    /// Strict variant of [`from_raw`](Self::from_raw) that rejects NaN and
    /// infinities.
    ///
    /// # Errors
    ///
    /// Returns `ShioriError::InvalidChapterNumber` for non-finite input.
    pub fn try_from_raw(raw: f64) -> Result<Self> {
        if raw.is_finite() {
            Ok(Self::from_raw(raw))
        } else {
            Err(ShioriError::InvalidChapterNumber { value: raw })
        }
    }

    /// Returns the raw value, sentinels included.
    #[must_use]
    pub fn to_raw(self) -> f64 {
        match self {
            Self::Unknown => UNKNOWN_SENTINEL,
            Self::Unnumbered => UNNUMBERED_SENTINEL,
            Self::Value(v) => v,
        }
    }

    /// Returns `true` if this number must be kept instead of re-derived
    /// from the title: the unnumbered marker, or any value above `-1.0`.
    #[must_use]
    pub fn is_authoritative(self) -> bool {
        match self {
            Self::Unnumbered => true,
            Self::Unknown => false,
            Self::Value(v) => v == UNNUMBERED_SENTINEL || v > UNKNOWN_SENTINEL,
        }
    }

    /// Returns `true` for a concrete, non-negative number.
    #[must_use]
    pub fn is_known(self) -> bool {
        matches!(self, Self::Value(v) if v >= 0.0)
    }

    /// The concrete value, if any.
    #[must_use]
    pub fn value(self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Integer main part of a known number.
    #[must_use]
    pub fn main(self) -> Option<u64> {
        self.value()
            .filter(|v| v.is_finite() && *v >= 0.0)
            .map(|v| v.trunc() as u64)
    }

    /// Fractional sub part of a known number, in `[0, 1)`.
    #[must_use]
    pub fn sub(self) -> Option<f64> {
        self.value()
            .filter(|v| v.is_finite() && *v >= 0.0)
            .map(f64::fract)
    }
}

impl From<f64> for ChapterNumber {
    fn from(raw: f64) -> Self {
        Self::from_raw(raw)
    }
}

impl From<ChapterNumber> for f64 {
    fn from(number: ChapterNumber) -> Self {
        number.to_raw()
    }
}

impl fmt::Display for ChapterNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown => write!(f, "unknown"),
            Self::Unnumbered => write!(f, "unnumbered"),
            Self::Value(v) => write!(f, "{v}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinels_map_to_variants() {
        assert_eq!(ChapterNumber::from_raw(-1.0), ChapterNumber::Unknown);
        assert_eq!(ChapterNumber::from_raw(-2.0), ChapterNumber::Unnumbered);
        assert_eq!(ChapterNumber::from_raw(12.5), ChapterNumber::Value(12.5));
    }

    #[test]
    fn raw_values_survive_a_round_trip() {
        for raw in [-2.0, -1.0, -0.5, 0.0, 4.0, 12.99] {
            assert_eq!(ChapterNumber::from_raw(raw).to_raw(), raw);
        }
    }

    #[test]
    fn authoritative_numbers() {
        assert!(ChapterNumber::Unnumbered.is_authoritative());
        assert!(ChapterNumber::Value(0.0).is_authoritative());
        assert!(ChapterNumber::Value(-0.5).is_authoritative());
        assert!(!ChapterNumber::Unknown.is_authoritative());
        assert!(!ChapterNumber::Value(-1.5).is_authoritative());
        assert!(!ChapterNumber::Value(f64::NAN).is_authoritative());
    }

    #[test]
    fn main_and_sub_parts() {
        let n = ChapterNumber::Value(12.5);
        assert_eq!(n.main(), Some(12));
        assert_eq!(n.sub(), Some(0.5));
        assert_eq!(ChapterNumber::Unknown.main(), None);
        assert_eq!(ChapterNumber::Unnumbered.sub(), None);
        assert!(!ChapterNumber::Value(-0.5).is_known());
    }

    #[test]
    fn strict_conversion_rejects_non_finite() {
        assert!(matches!(
            ChapterNumber::try_from_raw(f64::NAN),
            Err(ShioriError::InvalidChapterNumber { .. })
        ));
        assert!(ChapterNumber::try_from_raw(f64::NEG_INFINITY).is_err());
        assert_eq!(
            ChapterNumber::try_from_raw(-2.0).unwrap(),
            ChapterNumber::Unnumbered
        );
    }

    #[test]
    fn display() {
        assert_eq!(ChapterNumber::Value(12.5).to_string(), "12.5");
        assert_eq!(ChapterNumber::Value(4.0).to_string(), "4");
        assert_eq!(ChapterNumber::Unknown.to_string(), "unknown");
        assert_eq!(ChapterNumber::Unnumbered.to_string(), "unnumbered");
    }

    #[test]
    fn serializes_as_raw_number() {
        assert_eq!(serde_json::to_string(&ChapterNumber::Unknown).unwrap(), "-1.0");
        assert_eq!(
            serde_json::to_string(&ChapterNumber::Unnumbered).unwrap(),
            "-2.0"
        );
        let back: ChapterNumber = serde_json::from_str("8.0").unwrap();
        assert_eq!(back, ChapterNumber::Value(8.0));
        let back: ChapterNumber = serde_json::from_str("-2").unwrap();
        assert_eq!(back, ChapterNumber::Unnumbered);
    }
}
