//! # Volume-Cumulative Numbering
//!
//! Some sources restart chapter numbers in every volume ("Том 2 Глава 3",
//! "Vol.2 Ch.3"). These helpers read the volume/chapter pair from a title,
//! derive where each volume starts in a continuous numbering, and resolve
//! a title against that table.

use std::collections::BTreeMap;

use tracing::{debug, trace};

use crate::parser::chapter::ChapterParser;
use crate::types::{ChapterNumber, VolumeChapterInfo, VolumeOffsetTable};

impl ChapterParser<'_> {
    /// Reads a `(volume, chapter)` pair from `chapter_name`.
    ///
    /// Patterns are tried in their fixed priority order; the first one that
    /// matches with two integer captures wins.
    #[must_use]
    pub fn parse_volume_and_chapter(&self, chapter_name: &str) -> Option<VolumeChapterInfo> {
        let clean_name = chapter_name.to_lowercase();
        let clean_name = clean_name.trim();

        for (marker, pattern) in self.patterns.volume_chapter_patterns() {
            let Some(caps) = pattern.captures(clean_name) else {
                continue;
            };
            let volume = parse_capture(&caps[1]);
            let chapter = parse_capture(&caps[2]);
            if let (Some(volume), Some(chapter)) = (volume, chapter) {
                trace!(chapter_name, ?marker, volume, chapter, "volume pattern matched");
                return Some(VolumeChapterInfo::new(volume, chapter));
            }
        }

        None
    }

    /// Computes the global starting chapter of every volume seen in
    /// `chapter_names`.
    ///
    /// The highest chapter number per volume is taken as that volume's
    /// length; volumes are then laid out back to back in ascending order,
    /// the first one starting at chapter 1.
    pub fn calculate_volume_start_chapters<I, S>(&self, chapter_names: I) -> VolumeOffsetTable
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut last_chapter: BTreeMap<u32, u32> = BTreeMap::new();

        for name in chapter_names {
            if let Some(info) = self.parse_volume_and_chapter(name.as_ref()) {
                let last = last_chapter.entry(info.volume_number).or_insert(0);
                *last = (*last).max(info.chapter_number);
            }
        }

        // BTreeMap iterates volumes in ascending order.
        let mut next_start: u32 = 1;
        let table: VolumeOffsetTable = last_chapter
            .into_iter()
            .map(|(volume, last)| {
                let start = next_start;
                next_start = next_start.saturating_add(last);
                (volume, start)
            })
            .collect();

        debug!(volumes = table.len(), "computed volume start chapters");
        table
    }

    /// Parses a chapter number, preferring the volume-cumulative reading.
    ///
    /// If the title has a volume/chapter pair and `volume_starts` is not
    /// empty, the result is `start(volume) + chapter - 1`, with unseen
    /// volumes starting at 1. Otherwise this is
    /// [`parse_chapter_number`](Self::parse_chapter_number).
    #[must_use]
    pub fn parse_chapter_number_with_volumes(
        &self,
        manga_title: &str,
        chapter_name: &str,
        existing: Option<ChapterNumber>,
        volume_starts: &VolumeOffsetTable,
    ) -> ChapterNumber {
        if !volume_starts.is_empty() {
            if let Some(info) = self.parse_volume_and_chapter(chapter_name) {
                return cumulative_number(info, volume_starts);
            }
        }

        self.parse_chapter_number(manga_title, chapter_name, existing)
    }
}

/// Captures above `i32::MAX` are rejected so the next pattern gets a try.
fn parse_capture(digits: &str) -> Option<u32> {
    digits
        .parse::<i32>()
        .ok()
        .and_then(|v| u32::try_from(v).ok())
}

/// `start(volume) + chapter - 1`, computed in `f64` so it cannot overflow.
fn cumulative_number(
    info: VolumeChapterInfo,
    volume_starts: &VolumeOffsetTable,
) -> ChapterNumber {
    let start = volume_starts.start_of(info.volume_number);
    ChapterNumber::Value(f64::from(start) + f64::from(info.chapter_number) - 1.0)
}
