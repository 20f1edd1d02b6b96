//! Domain models and types for Shroud.
//!
//! This module contains the core domain types shared across the protection
//! layer:
//!
//! - **PII categories** ([`PiiCategory`]) and their masking markers
//! - **Error types** ([`ShroudError`])
//! - **Result type alias** ([`Result`])
//!
//! All fallible operations in the library return [`Result<T, ShroudError>`];
//! masking functions are deliberately infallible (see
//! [`crate::masking`]).

pub mod category;
pub mod errors;
pub mod result;

// Re-export commonly used types for convenience
pub use category::PiiCategory;
pub use errors::ShroudError;
pub use result::Result;
