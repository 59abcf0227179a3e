pub mod chapter;
pub mod patterns;
pub mod suffix;
pub mod unified;
pub mod volume;

pub use chapter::ChapterParser;
pub use patterns::{PatternSet, VolumeMarker};
pub use suffix::resolve_suffix;
pub use unified::{ChapterRecognizer, NumberingMode, RecognizerConfig};
