//! Entropy scoring and strength classification.
//!
//! [`entropy_bits`] is the theoretical maximum for uniform independent
//! draws: `length × log2(pool_size)`. It never inspects the string content,
//! so two different passwords of equal length over the same pool score
//! identically. The empirical byte-level measure lives in
//! [`shannon_entropy`] and is a separate operation, not a substitute.

mod shannon;

pub use shannon::shannon_entropy;

/// Theoretical entropy of a password drawn from a pool of `pool_size`
/// symbols, in bits.
pub fn entropy_bits(password: &str, pool_size: usize) -> f64 {
    if pool_size == 0 {
        return 0.0;
    }
    password.chars().count() as f64 * (pool_size as f64).log2()
}

/// Strength buckets derived from entropy bits via fixed thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StrengthTier {
    VeryWeak,
    Weak,
    Medium,
    Strong,
    VeryStrong,
    ExtremelyStrong,
    Unbreakable,
}

impl StrengthTier {
    /// Classify entropy bits. Boundaries are lower-bound inclusive:
    /// 33 bits is already `Weak`, 1024 bits is already `Unbreakable`.
    pub fn classify(bits: f64) -> Self {
        if bits < 33.0 {
            StrengthTier::VeryWeak
        } else if bits < 65.0 {
            StrengthTier::Weak
        } else if bits < 129.0 {
            StrengthTier::Medium
        } else if bits < 257.0 {
            StrengthTier::Strong
        } else if bits < 513.0 {
            StrengthTier::VeryStrong
        } else if bits < 1024.0 {
            StrengthTier::ExtremelyStrong
        } else {
            StrengthTier::Unbreakable
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StrengthTier::VeryWeak => "Very Weak",
            StrengthTier::Weak => "Weak",
            StrengthTier::Medium => "Medium",
            StrengthTier::Strong => "Strong",
            StrengthTier::VeryStrong => "Very Strong",
            StrengthTier::ExtremelyStrong => "Extremely Strong",
            StrengthTier::Unbreakable => "Unbreakable",
        }
    }
}

/// Format entropy bits for display: `"42 bits"`, `"1.5K bits"`, `"2.1M bits"`.
pub fn format_bits(bits: f64) -> String {
    if bits >= 1_000_000.0 {
        format!("{:.1}M bits", bits / 1_000_000.0)
    } else if bits >= 1000.0 {
        format!("{:.1}K bits", bits / 1000.0)
    } else {
        format!("{} bits", bits.round() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entropy_is_length_times_log2_pool() {
        let bits = entropy_bits("abcdefgh", 26);
        assert!((bits - 8.0 * (26.0f64).log2()).abs() < 1e-9);
        assert!((bits - 37.6).abs() < 0.1);
    }

    #[test]
    fn entropy_ignores_content() {
        assert_eq!(entropy_bits("aaaaaaaa", 64), entropy_bits("Xk9#mQ2!", 64));
    }

    #[test]
    fn entropy_of_empty_inputs() {
        assert_eq!(entropy_bits("", 26), 0.0);
        assert_eq!(entropy_bits("password", 0), 0.0);
    }

    #[test]
    fn entropy_counts_chars_not_bytes() {
        // Five zero-width characters are five symbols.
        let bits = entropy_bits("\u{200B}\u{200C}\u{200D}\u{2060}\u{FEFF}", 4);
        assert!((bits - 10.0).abs() < 1e-9);
    }

    #[test]
    fn classification_boundaries() {
        assert_eq!(StrengthTier::classify(0.0), StrengthTier::VeryWeak);
        assert_eq!(StrengthTier::classify(32.999), StrengthTier::VeryWeak);
        assert_eq!(StrengthTier::classify(33.0), StrengthTier::Weak);
        assert_eq!(StrengthTier::classify(64.999), StrengthTier::Weak);
        assert_eq!(StrengthTier::classify(65.0), StrengthTier::Medium);
        assert_eq!(StrengthTier::classify(128.999), StrengthTier::Medium);
        assert_eq!(StrengthTier::classify(129.0), StrengthTier::Strong);
        assert_eq!(StrengthTier::classify(256.999), StrengthTier::Strong);
        assert_eq!(StrengthTier::classify(257.0), StrengthTier::VeryStrong);
        assert_eq!(StrengthTier::classify(512.999), StrengthTier::VeryStrong);
        assert_eq!(StrengthTier::classify(513.0), StrengthTier::ExtremelyStrong);
        assert_eq!(StrengthTier::classify(1023.999), StrengthTier::ExtremelyStrong);
        assert_eq!(StrengthTier::classify(1024.0), StrengthTier::Unbreakable);
    }

    #[test]
    fn classification_is_monotonic() {
        let mut prev = StrengthTier::classify(0.0);
        for i in 0..2100 {
            let tier = StrengthTier::classify(i as f64);
            assert!(tier >= prev);
            prev = tier;
        }
    }

    #[test]
    fn weak_tier_for_short_lowercase() {
        let bits = entropy_bits("abcdefgh", 26);
        assert_eq!(StrengthTier::classify(bits), StrengthTier::Weak);
    }

    #[test]
    fn bit_formatting() {
        assert_eq!(format_bits(37.6), "38 bits");
        assert_eq!(format_bits(999.4), "999 bits");
        assert_eq!(format_bits(1500.0), "1.5K bits");
        assert_eq!(format_bits(2_100_000.0), "2.1M bits");
    }
}
