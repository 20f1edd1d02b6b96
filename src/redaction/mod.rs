//! Redaction pipeline
//!
//! Three consumers of the shared masking rules:
//!
//! - [`RecordRedactor`] for structured key/value records (drop pass, then
//!   mask pass)
//! - [`TextSanitizer`] for free-form text (ordered pattern scan)
//! - [`PiiFieldCodec`] for persistence (field-list encryption via
//!   [`FieldCipher`](crate::cipher::FieldCipher))

pub mod codec;
pub mod record;
pub mod text;

pub use codec::PiiFieldCodec;
pub use record::{RecordRedactor, RedactionAction, RedactionEvent, MAX_DEPTH};
pub use text::TextSanitizer;
