//! # Chapter Recognizer
//!
//! Batch interface for the ingestion pipeline: compute the volume table
//! once per manga, then resolve every chapter against it.

use tracing::debug;

use crate::error::Result;
use crate::parser::chapter::ChapterParser;
use crate::parser::patterns::PatternSet;
use crate::types::{ChapterInput, RecognizedChapter, VolumeOffsetTable};

/// How chapters of one manga are numbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberingMode {
    /// Use volume-cumulative numbers when the manga has volume structure.
    #[default]
    Cumulative,
    /// Ignore volumes and parse every title on its own.
    Flat,
}

/// Configuration for the recognizer.
#[derive(Debug, Clone)]
pub struct RecognizerConfig {
    /// Numbering scheme.
    pub numbering: NumberingMode,
    /// Whether the manga title is removed from chapter titles before parsing.
    pub strip_manga_title: bool,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            numbering: NumberingMode::Cumulative,
            strip_manga_title: true,
        }
    }
}

impl RecognizerConfig {
    /// Create a new recognizer configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the numbering mode.
    pub fn with_numbering(mut self, numbering: NumberingMode) -> Self {
        self.numbering = numbering;
        self
    }

    /// Enable or disable removing the manga title from chapter titles.
    pub fn with_strip_manga_title(mut self, enabled: bool) -> Self {
        self.strip_manga_title = enabled;
        self
    }
}

/// Where the recognizer's patterns live.
#[derive(Debug)]
enum Patterns {
    Shared,
    Owned(PatternSet),
}

/// Chapter recognizer with a fixed configuration.
#[derive(Debug)]
pub struct ChapterRecognizer {
    config: RecognizerConfig,
    patterns: Patterns,
}

impl Default for ChapterRecognizer {
    /// Default configuration over the process-wide pattern set.
    fn default() -> Self {
        Self::with_shared_patterns(RecognizerConfig::default())
    }
}

impl ChapterRecognizer {
    /// Create a recognizer that compiles its own pattern set.
    ///
    /// # Errors
    ///
    /// Returns `ShioriError::RegexError` if a pattern fails to compile.
    pub fn new(config: RecognizerConfig) -> Result<Self> {
        Ok(Self {
            config,
            patterns: Patterns::Owned(PatternSet::new()?),
        })
    }

    /// Create a recognizer over the process-wide pattern set.
    pub fn with_shared_patterns(config: RecognizerConfig) -> Self {
        Self {
            config,
            patterns: Patterns::Shared,
        }
    }

    /// Get the recognizer configuration.
    pub fn config(&self) -> &RecognizerConfig {
        &self.config
    }

    fn parser(&self) -> ChapterParser<'_> {
        match &self.patterns {
            Patterns::Shared => ChapterParser::shared(),
            Patterns::Owned(patterns) => ChapterParser::with_patterns(patterns),
        }
    }

    /// Volume table for a manga's complete, ordered chapter list.
    ///
    /// Always empty in [`NumberingMode::Flat`].
    pub fn volume_offsets<I, S>(&self, chapter_names: I) -> VolumeOffsetTable
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        match self.config.numbering {
            NumberingMode::Cumulative => {
                self.parser().calculate_volume_start_chapters(chapter_names)
            }
            NumberingMode::Flat => VolumeOffsetTable::new(),
        }
    }

    /// Recognize one chapter against a table from [`volume_offsets`](Self::volume_offsets).
    pub fn recognize(
        &self,
        manga_title: &str,
        input: &ChapterInput,
        volume_starts: &VolumeOffsetTable,
    ) -> RecognizedChapter {
        let parser = self.parser();
        let title = if self.config.strip_manga_title {
            manga_title
        } else {
            ""
        };

        let volume = parser.parse_volume_and_chapter(&input.name);
        let number = match self.config.numbering {
            NumberingMode::Cumulative => parser.parse_chapter_number_with_volumes(
                title,
                &input.name,
                input.number,
                volume_starts,
            ),
            NumberingMode::Flat => parser.parse_chapter_number(title, &input.name, input.number),
        };

        RecognizedChapter {
            name: input.name.clone(),
            number,
            volume,
        }
    }

    /// Recognize every chapter of one manga, in input order.
    ///
    /// # Examples
    /// ```
    /// use shiori_core::parser::ChapterRecognizer;
    /// use shiori_core::types::{ChapterInput, ChapterNumber};
    ///
    /// let recognizer = ChapterRecognizer::default();
    /// let chapters: Vec<ChapterInput> = ["Том 1 Глава 1", "Том 1 Глава 2", "Том 2 Глава 1"]
    ///     .into_iter()
    ///     .map(ChapterInput::new)
    ///     .collect();
    ///
    /// let numbers: Vec<_> = recognizer
    ///     .recognize_all("Manga", &chapters)
    ///     .into_iter()
    ///     .map(|c| c.number)
    ///     .collect();
    /// assert_eq!(
    ///     numbers,
    ///     vec![ChapterNumber::Value(1.0), ChapterNumber::Value(2.0), ChapterNumber::Value(3.0)]
    /// );
    /// ```
    pub fn recognize_all(
        &self,
        manga_title: &str,
        chapters: &[ChapterInput],
    ) -> Vec<RecognizedChapter> {
        let volume_starts = self.volume_offsets(chapters.iter().map(|c| c.name.as_str()));
        debug!(
            manga_title,
            chapters = chapters.len(),
            volumes = volume_starts.len(),
            "recognizing chapters"
        );

        chapters
            .iter()
            .map(|chapter| self.recognize(manga_title, chapter, &volume_starts))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ChapterNumber, VolumeChapterInfo};

    fn inputs(names: &[&str]) -> Vec<ChapterInput> {
        names.iter().copied().map(ChapterInput::new).collect()
    }

    fn numbers(chapters: &[RecognizedChapter]) -> Vec<ChapterNumber> {
        chapters.iter().map(|c| c.number).collect()
    }

    #[test]
    fn test_recognizer_config() {
        let config = RecognizerConfig::new()
            .with_numbering(NumberingMode::Flat)
            .with_strip_manga_title(false);

        assert_eq!(config.numbering, NumberingMode::Flat);
        assert!(!config.strip_manga_title);
        assert_eq!(RecognizerConfig::default().numbering, NumberingMode::Cumulative);
    }

    #[test]
    fn test_recognizer_with_owned_patterns() {
        let recognizer = ChapterRecognizer::new(RecognizerConfig::default()).unwrap();
        let chapters = inputs(&["Vol.1 Ch.1", "Vol.1 Ch.4", "Vol.2 Ch.2", "Manga 7.5"]);

        let expected: VolumeOffsetTable = [(1, 1), (2, 5)].into_iter().collect();
        assert_eq!(
            recognizer.volume_offsets(chapters.iter().map(|c| c.name.as_str())),
            expected
        );
        let result = recognizer.recognize_all("Manga", &chapters);
        assert_eq!(
            numbers(&result),
            vec![
                ChapterNumber::Value(1.0),
                ChapterNumber::Value(4.0),
                ChapterNumber::Value(6.0),
                ChapterNumber::Value(7.5),
            ]
        );
        assert_eq!(result[2].volume, Some(VolumeChapterInfo::new(2, 2)));
    }

    #[test]
    fn test_cumulative_batch() {
        let recognizer = ChapterRecognizer::default();
        let chapters = inputs(&[
            "Том 1 Глава 1",
            "Том 1 Глава 5",
            "Том 2 Глава 1",
            "Том 2 Глава 3",
            "Том 2 Глава 5",
        ]);

        let result = recognizer.recognize_all("Manga", &chapters);
        assert_eq!(
            numbers(&result),
            vec![
                ChapterNumber::Value(1.0),
                ChapterNumber::Value(5.0),
                ChapterNumber::Value(6.0),
                ChapterNumber::Value(8.0),
                ChapterNumber::Value(10.0),
            ]
        );
        assert_eq!(result[3].volume, Some(VolumeChapterInfo::new(2, 3)));
        assert_eq!(result[3].name, "Том 2 Глава 3");
    }

    #[test]
    fn test_flat_mode_ignores_volumes() {
        let recognizer = ChapterRecognizer::with_shared_patterns(
            RecognizerConfig::new().with_numbering(NumberingMode::Flat),
        );
        let chapters = inputs(&["Vol.1 Ch. 5", "Vol.2 Ch. 3"]);

        assert!(recognizer.volume_offsets(["Vol.1 Ch. 5"]).is_empty());
        let result = recognizer.recognize_all("Manga", &chapters);
        assert_eq!(
            numbers(&result),
            vec![ChapterNumber::Value(5.0), ChapterNumber::Value(3.0)]
        );
        // Volume info is still reported.
        assert!(result.iter().all(RecognizedChapter::has_volume));
    }

    #[test]
    fn test_mixed_batch_keeps_existing_numbers() {
        let recognizer = ChapterRecognizer::default();
        let chapters = vec![
            ChapterInput::new("Bleach 567: Down With Snowwhite"),
            ChapterInput::new("Bleach Oneshot").with_number(ChapterNumber::Unnumbered),
            ChapterInput::new("Bleach Colour Pages"),
        ];

        let result = recognizer.recognize_all("Bleach", &chapters);
        assert_eq!(
            numbers(&result),
            vec![
                ChapterNumber::Value(567.0),
                ChapterNumber::Unnumbered,
                ChapterNumber::Unknown,
            ]
        );
    }

    #[test]
    fn test_keep_manga_title() {
        let recognizer = ChapterRecognizer::with_shared_patterns(
            RecognizerConfig::new().with_strip_manga_title(false),
        );
        let result = recognizer.recognize_all("Zombie 100", &inputs(&["Zombie 100 Chapter 22"]));
        assert_eq!(result[0].number, ChapterNumber::Value(100.0));

        let result = ChapterRecognizer::default()
            .recognize_all("Zombie 100", &inputs(&["Zombie 100 Chapter 22"]));
        assert_eq!(result[0].number, ChapterNumber::Value(22.0));
    }

    #[test]
    fn test_empty_batch() {
        let recognizer = ChapterRecognizer::default();
        assert!(recognizer.recognize_all("Manga", &[]).is_empty());
    }
}
