//! Password generation.
//!
//! Four algorithms over a shared pool, followed by best-effort minimum
//! distribution enforcement. The secure path maps each random byte to
//! `pool[byte % pool.len()]`; when the pool length does not divide 256 this
//! is slightly biased toward the front of the pool. The bias is a documented
//! compatibility property of the output distribution, so it is kept rather
//! than replaced with rejection sampling.

use log::debug;
use zeroize::Zeroize;

use super::charset::{self, CoarseClass};
use crate::entropy::{self, StrengthTier};
use crate::errors::PassError;
use crate::patterns::{self, PatternWarning};
use crate::rand::RandomSource;

/// Random bytes are drawn in chunks of at most this many to bound memory
/// for very long passwords.
const SECURE_CHUNK: usize = 1000;

const CONSONANTS: &str = "bcdfghjklmnpqrstvwxyzBCDFGHJKLMNPQRSTVWXYZ";
const VOWELS: &str = "aeiouAEIOU";

const SYLLABLES: [&str; 15] = [
    "ba", "be", "bi", "bo", "bu", "ca", "ce", "ci", "co", "cu", "da", "de", "di", "do", "du",
];

/// Generation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// Cryptographically secure draws; the only algorithm that requires a
    /// CSPRNG source.
    Secure,
    /// Same mapping from a non-cryptographic stream. Demo quality only.
    Pseudo,
    /// Consonant/vowel alternation by position parity. Ignores the pool.
    Pattern,
    /// Fixed-table syllable concatenation. Ignores the pool.
    Pronounceable,
}

impl Algorithm {
    pub fn parse(name: &str) -> Result<Self, PassError> {
        match name {
            "secure" => Ok(Algorithm::Secure),
            "pseudo" => Ok(Algorithm::Pseudo),
            "pattern" => Ok(Algorithm::Pattern),
            "pronounceable" => Ok(Algorithm::Pronounceable),
            other => Err(PassError::UnsupportedAlgorithm(other.to_string())),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Secure => "secure",
            Algorithm::Pseudo => "pseudo",
            Algorithm::Pattern => "pattern",
            Algorithm::Pronounceable => "pronounceable",
        }
    }
}

/// Per-class minimum occurrence counts. Best-effort: never validated
/// against the requested length.
#[derive(Debug, Clone, Copy, Default)]
pub struct Minima {
    pub lowercase: usize,
    pub uppercase: usize,
    pub digits: usize,
    pub symbols: usize,
}

/// One generation batch request.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub length: usize,
    pub count: usize,
    pub algorithm: Algorithm,
    pub minima: Minima,
}

/// A generated candidate with its evaluation report.
#[derive(Debug, Clone)]
pub struct GeneratedPassword {
    pub value: String,
    pub entropy_bits: f64,
    pub strength: StrengthTier,
    pub warnings: Vec<PatternWarning>,
}

/// Generate a single candidate string. Minima are not applied here; the
/// batch path runs [`enforce_minima`] on every candidate.
pub fn generate(
    pool: &[char],
    length: usize,
    algorithm: Algorithm,
    rng: &mut dyn RandomSource,
) -> Result<String, PassError> {
    if pool.is_empty() {
        return Err(PassError::EmptyPool);
    }

    match algorithm {
        Algorithm::Secure => generate_secure(pool, length, rng),
        Algorithm::Pseudo => generate_pseudo(pool, length, rng),
        Algorithm::Pattern => generate_pattern(length, rng),
        Algorithm::Pronounceable => generate_pronounceable(length, rng),
    }
}

fn generate_secure(
    pool: &[char],
    length: usize,
    rng: &mut dyn RandomSource,
) -> Result<String, PassError> {
    let mut out = String::with_capacity(length);
    let mut chunk = [0u8; SECURE_CHUNK];

    let mut remaining = length;
    while remaining > 0 {
        let take = remaining.min(SECURE_CHUNK);
        let buf = &mut chunk[..take];
        rng.fill_bytes(buf)?;
        for &byte in buf.iter() {
            out.push(pool[byte as usize % pool.len()]);
        }
        remaining -= take;
    }

    chunk.zeroize();
    Ok(out)
}

fn generate_pseudo(
    pool: &[char],
    length: usize,
    rng: &mut dyn RandomSource,
) -> Result<String, PassError> {
    let mut out = String::with_capacity(length);
    for _ in 0..length {
        let idx = rng.next_u64()? as usize % pool.len();
        out.push(pool[idx]);
    }
    Ok(out)
}

fn generate_pattern(length: usize, rng: &mut dyn RandomSource) -> Result<String, PassError> {
    let consonants = CONSONANTS.as_bytes();
    let vowels = VOWELS.as_bytes();

    let mut out = String::with_capacity(length);
    for i in 0..length {
        let table = if i % 2 == 0 { consonants } else { vowels };
        let idx = rng.next_u64()? as usize % table.len();
        out.push(table[idx] as char);
    }
    Ok(out)
}

fn generate_pronounceable(length: usize, rng: &mut dyn RandomSource) -> Result<String, PassError> {
    let mut out = String::with_capacity(length + 1);
    while out.len() < length {
        let idx = rng.next_u64()? as usize % SYLLABLES.len();
        out.push_str(SYLLABLES[idx]);
    }
    out.truncate(length);
    Ok(out)
}

/// Enforce per-class minima on a candidate, best-effort.
///
/// Classes run in a fixed order and each deficit overwrites a uniformly
/// random position with the next class member in pool order. There is no
/// re-validation pass, so a later class can push an earlier one back below
/// its minimum, and nothing is reported when the length cannot fit all
/// minima. Both behaviors are intentional.
pub fn enforce_minima(
    chars: &mut [char],
    minima: &Minima,
    pool: &[char],
    rng: &mut dyn RandomSource,
) -> Result<(), PassError> {
    ensure_minimum(chars, CoarseClass::Lower, minima.lowercase, pool, rng)?;
    ensure_minimum(chars, CoarseClass::Upper, minima.uppercase, pool, rng)?;
    ensure_minimum(chars, CoarseClass::Digit, minima.digits, pool, rng)?;
    ensure_minimum(chars, CoarseClass::Symbol, minima.symbols, pool, rng)?;
    Ok(())
}

fn ensure_minimum(
    chars: &mut [char],
    class: CoarseClass,
    min: usize,
    pool: &[char],
    rng: &mut dyn RandomSource,
) -> Result<(), PassError> {
    if chars.is_empty() {
        return Ok(());
    }

    let current = charset::count_of(chars, class);
    if current >= min {
        return Ok(());
    }

    let needed = min - current;
    let members = charset::members_of(pool, class);
    for member in members.iter().take(needed) {
        let at = rng.next_u64()? as usize % chars.len();
        chars[at] = *member;
    }
    Ok(())
}

/// Generate `count` independent candidates and evaluate each one.
///
/// Entropy is scored against the configured pool size for every algorithm,
/// including the two that ignore the pool for character choice.
pub fn generate_batch(
    pool: &[char],
    request: &GenerationRequest,
    rng: &mut dyn RandomSource,
) -> Result<Vec<GeneratedPassword>, PassError> {
    debug!(
        "generating {} x {} chars via {}",
        request.count,
        request.length,
        request.algorithm.name()
    );

    let mut out = Vec::with_capacity(request.count);
    for _ in 0..request.count {
        let candidate = generate(pool, request.length, request.algorithm, rng)?;
        let mut chars: Vec<char> = candidate.chars().collect();
        enforce_minima(&mut chars, &request.minima, pool, rng)?;
        let value: String = chars.into_iter().collect();

        let entropy_bits = entropy::entropy_bits(&value, pool.len());
        out.push(GeneratedPassword {
            strength: StrengthTier::classify(entropy_bits),
            warnings: patterns::detect(&value),
            entropy_bits,
            value,
        });
    }
    Ok(out)
}
