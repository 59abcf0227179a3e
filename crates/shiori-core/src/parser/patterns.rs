//! # Pattern Set
//!
//! Every regex used by chapter recognition, compiled once per process.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::Result;

/// Chapter number with optional decimal part and optional alpha suffix:
/// `12`, `12.5`, `12a`, `12.b`, `12extra`.
const NUMBER_PATTERN: &str = r"([0-9]+)(\.[0-9]+)?(\.?[a-z]+)?";

/// Volume, version and season tags, e.g. `v.1`, `vol004`, `version1243`, `s2`.
const NOISE_TAG_PATTERN: &str = r"\b(?:v|ver|vol|version|volume|season|s)[^a-z]?[0-9]+";

/// ASCII whitespace in front of a special-release keyword. The keyword is
/// captured so the replacement can put it back without the space. Unicode
/// spaces such as NBSP are not collapsed.
const PRE_KEYWORD_SPACE_PATTERN: &str = r"(?-u:\s)(extra|special|omake)";

/// Marker pair recognized by one of the volume/chapter patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VolumeMarker {
    /// "Том 2 Глава 3"
    TomGlava,
    /// "Vol.2 Ch.3"
    VolCh,
    /// "Volume 2 Chapter 3"
    VolumeChapter,
    /// "Vol. 2 Chapter 3"
    VolChapter,
    /// "Volume 2 Глава 3"
    VolumeGlava,
    /// "Том 2 Chapter 3"
    TomChapter,
}

/// Volume/chapter patterns in priority order. The first one that matches
/// a title decides its volume and chapter, so this order is observable.
///
/// Gaps around numbers are ASCII whitespace only, and CRLF mode keeps `.`
/// from running across a `\r`.
const VOLUME_CHAPTER_PATTERNS: [(VolumeMarker, &str); 6] = [
    (VolumeMarker::TomGlava, r"(?iR)том(?-u:\s)*([0-9]+).*?глава(?-u:\s)*([0-9]+)"),
    (VolumeMarker::VolCh, r"(?iR)vol\.?(?-u:\s)*([0-9]+).*?ch\.?(?-u:\s)*([0-9]+)"),
    (VolumeMarker::VolumeChapter, r"(?iR)volume(?-u:\s)*([0-9]+).*?chapter(?-u:\s)*([0-9]+)"),
    (VolumeMarker::VolChapter, r"(?iR)vol\.?(?-u:\s)*([0-9]+).*?chapter(?-u:\s)*([0-9]+)"),
    (VolumeMarker::VolumeGlava, r"(?iR)volume(?-u:\s)*([0-9]+).*?глава(?-u:\s)*([0-9]+)"),
    (VolumeMarker::TomChapter, r"(?iR)том(?-u:\s)*([0-9]+).*?chapter(?-u:\s)*([0-9]+)"),
];

static SHARED: LazyLock<PatternSet> =
    LazyLock::new(|| PatternSet::new().expect("built-in chapter patterns must compile"));

/// Compiled patterns shared by every recognition step.
///
/// Number-shaped patterns expose the same three groups: integer part,
/// decimal part (with its dot), alpha suffix.
#[derive(Debug, Clone)]
pub struct PatternSet {
    pub(crate) number: Regex,
    pub(crate) ch_anchored: Regex,
    pub(crate) noise_tag: Regex,
    pub(crate) pre_keyword_space: Regex,
    pub(crate) volume_chapter: Vec<(VolumeMarker, Regex)>,
}

impl PatternSet {
    /// Compiles a fresh pattern set.
    ///
    /// # Errors
    ///
    /// Returns `ShioriError::RegexError` if any pattern fails to compile
    /// (should never happen with the static patterns defined here).
    pub fn new() -> Result<Self> {
        let volume_chapter = VOLUME_CHAPTER_PATTERNS
            .iter()
            .map(|(marker, pattern)| -> Result<(VolumeMarker, Regex)> {
                Ok((*marker, Regex::new(pattern)?))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            number: Regex::new(NUMBER_PATTERN)?,
            ch_anchored: Regex::new(&format!(r"ch\. *{NUMBER_PATTERN}"))?,
            noise_tag: Regex::new(NOISE_TAG_PATTERN)?,
            pre_keyword_space: Regex::new(PRE_KEYWORD_SPACE_PATTERN)?,
            volume_chapter,
        })
    }

    /// The process-wide pattern set, compiled on first use.
    ///
    /// # Panics
    ///
    /// Panics on first use if a built-in pattern does not compile.
    #[must_use]
    pub fn shared() -> &'static PatternSet {
        &SHARED
    }

    /// Volume/chapter patterns in the order they are tried.
    pub fn volume_chapter_patterns(&self) -> impl Iterator<Item = (VolumeMarker, &Regex)> {
        self.volume_chapter.iter().map(|(marker, re)| (*marker, re))
    }
}
