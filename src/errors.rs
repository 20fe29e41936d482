//! Error types for the entropass library.

use thiserror::Error;

/// All failure modes of pool construction and password generation.
///
/// Minima under-satisfaction is deliberately not represented here:
/// distribution enforcement is best-effort and degrades silently when the
/// requested length or pool cannot accommodate it.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PassError {
    #[error("no characters remain in the pool after applying the configuration")]
    EmptyPool,

    #[error("unsupported generation algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("failed to read from the entropy source: {0}")]
    EntropySource(#[from] std::io::Error),
}
