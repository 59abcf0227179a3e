//! # Shiori Core
//!
//! Chapter-number recognition for manga libraries. Turns free-text chapter
//! titles ("Vol.1 Ch. 4: Misrepresentation", "Bleach 567", "Том 2 Глава 3")
//! into canonical chapter numbers, and renumbers volume-relative chapters
//! into one continuous sequence.
//!
//! ## Quick Start
//!
//! ```rust
//! use shiori_core::parser::ChapterParser;
//! use shiori_core::types::ChapterNumber;
//!
//! let parser = ChapterParser::shared();
//!
//! let number = parser.parse_chapter_number("One Piece", "One Piece 12.5", None);
//! assert_eq!(number, ChapterNumber::Value(12.5));
//!
//! let starts = parser.calculate_volume_start_chapters([
//!     "Том 1 Глава 1", "Том 1 Глава 5", "Том 2 Глава 1", "Том 2 Глава 5",
//! ]);
//! let number = parser.parse_chapter_number_with_volumes("Manga", "Том 2 Глава 3", None, &starts);
//! assert_eq!(number, ChapterNumber::Value(8.0));
//! ```
pub mod compat;
pub mod error;
pub mod parser;
pub mod types;

// Re-export primary API
pub use error::{Result, ShioriError};
pub use parser::{
    ChapterParser, ChapterRecognizer, NumberingMode, PatternSet, RecognizerConfig, VolumeMarker,
};
pub use types::{
    ChapterInput, ChapterNumber, RecognizedChapter, VolumeChapterInfo, VolumeOffsetTable,
};
