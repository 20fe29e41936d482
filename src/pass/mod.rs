//! Pool construction, password generation, and batch output.

pub mod charset;
pub mod generate;
pub mod output;

pub use charset::{CharacterClass, CoarseClass, PoolConfig};
pub use generate::{Algorithm, GeneratedPassword, GenerationRequest, Minima};
