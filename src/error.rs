//! Error taxonomy of the crate.
//!
//! Type and encoding problems are reported before any structure is built;
//! a failing suffix-sort oracle aborts the whole call. All operations are
//! deterministic, so nothing here is ever retried.

/// Errors reported by the fallible operations of this crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Text input contained a character outside the 7-bit range.
    #[error("text input must only contain 7-bit characters, found {0:?}")]
    UnsupportedTextEncoding(char),
    /// The operation cannot handle symbols of this encoded byte width.
    #[error("symbols of encoded width {0} are not supported by this operation")]
    UnsupportedElementType(usize),
    /// The suffix-sort oracle reported a nonzero status, or the input
    /// exceeds what the 32-bit oracle can address.
    #[error("suffix sort oracle failed with status {0}")]
    OracleFailure(i32),
}

pub type Result<T> = std::result::Result<T, Error>;
