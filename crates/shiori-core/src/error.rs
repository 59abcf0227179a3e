use thiserror::Error;

/// Errors that can occur during Shiori core operations.
///
/// Chapter recognition itself never fails: an unrecognizable title yields
/// [`ChapterNumber::Unknown`](crate::types::ChapterNumber::Unknown). These
/// errors only surface when building patterns on demand or when validating
/// raw numbers handed in by a caller.
#[derive(Debug, Error)]
pub enum ShioriError {
    /// A regex pattern failed to compile (should not happen with static patterns).
    #[error("regex compilation error: {0}")]
    RegexError(#[from] regex::Error),

    /// A raw chapter number is NaN or infinite.
    #[error("invalid chapter number: {value}")]
    InvalidChapterNumber {
        /// The rejected value.
        value: f64,
    },
}

/// Result type alias for Shiori operations.
pub type Result<T> = std::result::Result<T, ShioriError>;
