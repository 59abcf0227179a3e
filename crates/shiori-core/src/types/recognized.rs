use serde::{Deserialize, Serialize};

use super::chapter::ChapterNumber;
use super::volume::VolumeChapterInfo;

/// One chapter as handed over by the ingestion pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChapterInput {
    /// Chapter title as published by the source.
    pub name: String,

    /// Number already stored for this chapter, if any.
    #[serde(default)]
    pub number: Option<ChapterNumber>,
}

impl ChapterInput {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            number: None,
        }
    }

    #[must_use]
    pub fn with_number(mut self, number: ChapterNumber) -> Self {
        self.number = Some(number);
        self
    }
}

/// Output of chapter recognition for a single title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognizedChapter {
    /// Original chapter title.
    pub name: String,

    /// Canonical chapter number.
    pub number: ChapterNumber,

    /// Volume structure found in the title, if any.
    pub volume: Option<VolumeChapterInfo>,
}

impl RecognizedChapter {
    /// Returns `true` if the title carried a volume/chapter marker pair.
    #[must_use]
    pub fn has_volume(&self) -> bool {
        self.volume.is_some()
    }
}

impl std::fmt::Display for RecognizedChapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RecognizedChapter(name={:?}, number={}", self.name, self.number)?;
        if let Some(ref volume) = self.volume {
            write!(f, ", volume={volume}")?;
        }
        write!(f, ")")
    }
}
