//! entropass - password generation with entropy scoring.
//!
//! The library is a pure function-call API: a configuration resolves to an
//! ordered character pool, a generator produces candidates over the pool,
//! and each candidate is scored (theoretical entropy bits + strength tier)
//! and screened for weak structural patterns. The only external resource is
//! the randomness source, injected through [`rand::RandomSource`].
//!
//! ```no_run
//! use entropass::{build_pool, generate_batch, Algorithm, GenerationRequest, Minima, PoolConfig};
//! use entropass::rand::DevUrandom;
//!
//! let pool = build_pool(&PoolConfig::default())?;
//! let request = GenerationRequest {
//!     length: 24,
//!     count: 3,
//!     algorithm: Algorithm::Secure,
//!     minima: Minima { digits: 2, ..Default::default() },
//! };
//! let mut rng = DevUrandom::open()?;
//! for item in generate_batch(&pool, &request, &mut rng)? {
//!     println!("{} ({} bits, {})", item.value, item.entropy_bits, item.strength.label());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod entropy;
pub mod errors;
pub mod history;
pub mod pass;
pub mod patterns;
pub mod rand;

pub use entropy::{entropy_bits, format_bits, shannon_entropy, StrengthTier};
pub use errors::PassError;
pub use history::{GenerationHistory, HistoryEntry};
pub use pass::charset::build as build_pool;
pub use pass::generate::{enforce_minima, generate, generate_batch};
pub use pass::{Algorithm, CharacterClass, GeneratedPassword, GenerationRequest, Minima, PoolConfig};
pub use patterns::{detect as detect_patterns, PatternKind, PatternWarning};
