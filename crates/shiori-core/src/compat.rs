//! # Raw-Value Interface
//!
//! The same operations as [`ChapterParser`] over the representation stored
//! in chapter metadata: plain `f64` numbers with `-1.0` (unknown) and
//! `-2.0` (unnumbered) sentinels, and a plain `volume -> start` map.
//!
//! Intended calling order for one manga: [`calculate_volume_start_chapters`]
//! over the complete, ordered chapter list, then
//! [`parse_chapter_number_with_volumes`] for each chapter.

use std::collections::BTreeMap;

use crate::parser::ChapterParser;
use crate::types::{ChapterNumber, VolumeChapterInfo, VolumeOffsetTable};

/// Parses a chapter number; see [`ChapterParser::parse_chapter_number`].
///
/// ```
/// use shiori_core::compat::parse_chapter_number;
///
/// assert_eq!(parse_chapter_number("Bleach", "Bleach 567: Down With Snowwhite", None), 567.0);
/// assert_eq!(parse_chapter_number("Bleach", "Bleach 567", Some(-2.0)), -2.0);
/// assert_eq!(parse_chapter_number("Bleach", "Prologue", None), -1.0);
/// ```
#[must_use]
pub fn parse_chapter_number(
    manga_title: &str,
    chapter_name: &str,
    chapter_number: Option<f64>,
) -> f64 {
    ChapterParser::shared()
        .parse_chapter_number(
            manga_title,
            chapter_name,
            chapter_number.map(ChapterNumber::from_raw),
        )
        .to_raw()
}

/// Parses a chapter number, preferring the volume-cumulative reading; see
/// [`ChapterParser::parse_chapter_number_with_volumes`].
#[must_use]
pub fn parse_chapter_number_with_volumes(
    manga_title: &str,
    chapter_name: &str,
    chapter_number: Option<f64>,
    volume_start_chapters: &BTreeMap<u32, u32>,
) -> f64 {
    let table = VolumeOffsetTable::from(volume_start_chapters.clone());
    ChapterParser::shared()
        .parse_chapter_number_with_volumes(
            manga_title,
            chapter_name,
            chapter_number.map(ChapterNumber::from_raw),
            &table,
        )
        .to_raw()
}

/// Reads a `(volume, chapter)` pair from a chapter title.
#[must_use]
pub fn parse_volume_and_chapter(chapter_name: &str) -> Option<VolumeChapterInfo> {
    ChapterParser::shared().parse_volume_and_chapter(chapter_name)
}

/// Global starting chapter of every volume seen in `chapter_names`.
pub fn calculate_volume_start_chapters<I, S>(chapter_names: I) -> BTreeMap<u32, u32>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    ChapterParser::shared()
        .calculate_volume_start_chapters(chapter_names)
        .into_inner()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn documented_titles() {
        assert_close(
            parse_chapter_number(
                "Mokushiroku Alice",
                "Mokushiroku Alice Vol.1 Ch. 4: Misrepresentation",
                None,
            ),
            4.0,
        );
        assert_close(
            parse_chapter_number("Bleach", "Bleach 567: Down With Snowwhite", None),
            567.0,
        );
        assert_close(
            parse_chapter_number(
                "Prison School",
                "Prison School 12 v.1 vol004 version1243 volume64",
                None,
            ),
            12.0,
        );
        assert_close(parse_chapter_number("One Piece", "One Piece 12.5", None), 12.5);
        assert_close(parse_chapter_number("One Piece", "One Piece 12 extra", None), 12.99);
        assert_close(parse_chapter_number("One Piece", "One Piece 12 special", None), 12.97);
        assert_close(parse_chapter_number("One Piece", "Chapter 12a", None), 12.1);
        assert_close(parse_chapter_number("One Piece", "Chapter 12b", None), 12.2);
        assert_close(parse_chapter_number("One Piece", "Chapter 12j", None), 12.0);
    }

    #[test]
    fn sentinels_pass_through() {
        assert_eq!(parse_chapter_number("Bleach", "Bleach 567", Some(-2.0)), -2.0);
        assert_eq!(parse_chapter_number("Bleach", "Bleach 567", Some(3.0)), 3.0);
        assert_eq!(parse_chapter_number("Bleach", "Bleach 567", Some(0.0)), 0.0);
        assert_close(parse_chapter_number("Bleach", "Bleach 567", Some(-1.0)), 567.0);
    }

    #[test]
    fn no_digits_returns_existing_or_unknown() {
        assert_eq!(parse_chapter_number("Bleach", "Bleach: Prologue", None), -1.0);
        assert_eq!(parse_chapter_number("Bleach", "Bleach: Prologue", Some(-1.0)), -1.0);
        assert_eq!(parse_chapter_number("Bleach", "Bleach: Prologue", Some(-1.5)), -1.5);
    }

    #[test]
    fn raw_volume_flow() {
        let names = [
            "Том 1 Глава 1",
            "Том 1 Глава 5",
            "Том 2 Глава 1",
            "Том 2 Глава 5",
        ];
        let starts = calculate_volume_start_chapters(names);
        assert_eq!(starts, BTreeMap::from([(1, 1), (2, 6)]));
        assert_eq!(
            parse_chapter_number_with_volumes("Manga", "Том 2 Глава 3", None, &starts),
            8.0
        );
        assert_eq!(
            parse_volume_and_chapter("Том 2 Глава 3"),
            Some(VolumeChapterInfo::new(2, 3))
        );
    }

    #[test]
    fn caller_supplied_map_is_used_as_is() {
        let starts = BTreeMap::from([(3, 40)]);
        assert_eq!(
            parse_chapter_number_with_volumes("Manga", "Vol.3 Ch.2", None, &starts),
            41.0
        );
        assert_eq!(
            parse_chapter_number_with_volumes("Manga", "Vol.1 Ch.2", None, &starts),
            2.0
        );
        assert_eq!(
            parse_chapter_number_with_volumes("Manga", "Bonus", Some(-2.0), &starts),
            -2.0
        );
    }
}
