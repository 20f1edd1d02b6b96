//! Result type alias for Shroud

use super::errors::ShroudError;

/// Result type alias for Shroud operations
///
/// Convenience alias that uses [`ShroudError`] as the error type.
/// Use this throughout the codebase for fallible operations.
pub type Result<T> = std::result::Result<T, ShroudError>;
