use std::fmt;

/// Errors raised by [`SuccinctBitVector`](crate::SuccinctBitVector)'s public operations.
///
/// Only the façade raises these: every internal layer (`BitVector`, `RankIndex`,
/// `SelectIndex`) assumes its inputs were already validated and falls back to
/// `debug_assert!` for the same preconditions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A query or `build()` was attempted before `init()`.
    NotInitialized,
    /// A query was attempted before `build()`.
    NotBuilt,
    /// An argument outside its domain was passed (e.g. `bit` not in `{0, 1}`,
    /// or a length argument of `0`).
    InvalidArgument {
        /// Human-readable description of why the argument was rejected.
        reason: String,
    },
    /// `pos >= N` for `lookup`/`rank`, or `k >= P_b` for `select`.
    OutOfRange {
        /// The offending index.
        index: u64,
        /// The exclusive upper bound the index was checked against.
        bound: u64,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotInitialized => {
                write!(f, "SuccinctBitVector::init() must be called first")
            }
            Error::NotBuilt => {
                write!(f, "SuccinctBitVector::build() must be called first")
            }
            Error::InvalidArgument { reason } => write!(f, "invalid argument: {}", reason),
            Error::OutOfRange { index, bound } => {
                write!(f, "index {} out of range (must be < {})", index, bound)
            }
        }
    }
}

impl std::error::Error for Error {}

/// Convenience alias used throughout this crate's public API.
pub type Result<T> = std::result::Result<T, Error>;
