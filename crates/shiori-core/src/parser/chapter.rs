//! # Chapter Number Parser
//!
//! Extracts one canonical chapter number from a free-text chapter title.
//!
//! Titles are normalized first (lowercased, manga title removed, `,`/`-`
//! read as decimal points, "12 extra" merged into "12extra"). When more
//! than one number remains, volume/version/season tags are dropped and an
//! explicit `ch.` marker is preferred.

use regex::Captures;
use tracing::trace;

use crate::parser::patterns::PatternSet;
use crate::parser::suffix::resolve_suffix;
use crate::types::ChapterNumber;

/// Chapter-number recognizer over a borrowed [`PatternSet`].
///
/// Cheap to copy; every method is a pure function of its arguments.
#[derive(Debug, Clone, Copy)]
pub struct ChapterParser<'p> {
    pub(crate) patterns: &'p PatternSet,
}

impl ChapterParser<'static> {
    /// Parser backed by the process-wide pattern set.
    #[must_use]
    pub fn shared() -> Self {
        Self {
            patterns: PatternSet::shared(),
        }
    }
}

impl Default for ChapterParser<'static> {
    fn default() -> Self {
        Self::shared()
    }
}

impl<'p> ChapterParser<'p> {
    #[must_use]
    pub fn with_patterns(patterns: &'p PatternSet) -> Self {
        Self { patterns }
    }

    /// Parses the chapter number out of `chapter_name`.
    ///
    /// An `existing` number that is [authoritative](ChapterNumber::is_authoritative)
    /// is returned as is. Otherwise the title is parsed; if it holds no
    /// number at all, `existing` (or [`ChapterNumber::Unknown`]) is returned.
    ///
    /// # Examples
    /// ```
    /// use shiori_core::parser::ChapterParser;
    /// use shiori_core::types::ChapterNumber;
    ///
    /// let parser = ChapterParser::shared();
    /// let number = parser.parse_chapter_number(
    ///     "Mokushiroku Alice",
    ///     "Mokushiroku Alice Vol.1 Ch. 4: Misrepresentation",
    ///     None,
    /// );
    /// assert_eq!(number, ChapterNumber::Value(4.0));
    /// ```
    #[must_use]
    pub fn parse_chapter_number(
        &self,
        manga_title: &str,
        chapter_name: &str,
        existing: Option<ChapterNumber>,
    ) -> ChapterNumber {
        if let Some(number) = existing.filter(|n| n.is_authoritative()) {
            return number;
        }

        let name = self.normalize(manga_title, chapter_name);
        let matches: Vec<Captures<'_>> = self.patterns.number.captures_iter(&name).collect();

        match matches.as_slice() {
            [] => {
                trace!(chapter_name, "no number in chapter title");
                existing.unwrap_or(ChapterNumber::Unknown)
            }
            [only] => Self::number_from_match(only),
            [first, ..] => {
                let stripped = self.patterns.noise_tag.replace_all(&name, "");

                if let Some(caps) = self.patterns.ch_anchored.captures(&stripped) {
                    trace!(chapter_name, "resolved by ch. marker");
                    return Self::number_from_match(&caps);
                }

                // The first number may have been a tag, so search again.
                if let Some(caps) = self.patterns.number.captures(&stripped) {
                    trace!(chapter_name, "resolved after stripping tags");
                    return Self::number_from_match(&caps);
                }

                trace!(chapter_name, "tags consumed every number, using first match");
                Self::number_from_match(first)
            }
        }
    }

    /// Lowercases the title, removes the manga title from it and rewrites
    /// separators so the number pattern sees "12.1" and "12extra".
    fn normalize(&self, manga_title: &str, chapter_name: &str) -> String {
        let cleaned = chapter_name
            .to_lowercase()
            .replace(&manga_title.to_lowercase(), "")
            .trim()
            .replace([',', '-'], ".");

        self.patterns
            .pre_keyword_space
            .replace_all(&cleaned, "$1")
            .into_owned()
    }

    /// Integer part plus the fraction encoded by the suffix groups.
    fn number_from_match(caps: &Captures<'_>) -> ChapterNumber {
        let main: f64 = caps[1].parse().unwrap_or(0.0);
        let fraction = resolve_suffix(
            caps.get(2).map(|m| m.as_str()),
            caps.get(3).map(|m| m.as_str()),
        );
        ChapterNumber::Value(main + fraction)
    }
}
