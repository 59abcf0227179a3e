pub mod chapter;
pub mod recognized;
pub mod volume;

pub use chapter::{ChapterNumber, UNKNOWN_SENTINEL, UNNUMBERED_SENTINEL};
pub use recognized::{ChapterInput, RecognizedChapter};
pub use volume::{VolumeChapterInfo, VolumeOffsetTable};
