//! Randomness sources for password generation.
//!
//! Every generation path draws through the [`RandomSource`] trait so tests
//! can substitute deterministic sources. Production callers use
//! [`DevUrandom`] for the secure algorithm and [`SplitMix`] for everything
//! that only needs a fast non-cryptographic stream.

mod splitmix;
mod urandom;

pub use splitmix::SplitMix;
pub use urandom::DevUrandom;

use std::io;

/// A stream of random values.
///
/// Callers map draws into a range with `% bound`; no implementation
/// performs range reduction itself.
pub trait RandomSource {
    /// Fill `buf` with random bytes.
    fn fill_bytes(&mut self, buf: &mut [u8]) -> io::Result<()>;

    /// Draw a single random `u64`.
    fn next_u64(&mut self) -> io::Result<u64> {
        let mut buf = [0u8; 8];
        self.fill_bytes(&mut buf)?;
        Ok(u64::from_le_bytes(buf))
    }
}
