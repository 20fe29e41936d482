//! End-to-end tests over the public API.

use std::io;

use entropass::pass::output;
use entropass::rand::{RandomSource, SplitMix};
use entropass::{
    build_pool, detect_patterns, entropy_bits, generate_batch, shannon_entropy, Algorithm,
    GenerationHistory, GenerationRequest, HistoryEntry, Minima, PassError, PatternKind,
    PoolConfig, StrengthTier,
};

/// Plays back fixed u64 draws.
struct ScriptedDraws {
    script: Vec<u64>,
    pos: usize,
}

impl ScriptedDraws {
    fn new(script: &[u64]) -> Self {
        Self {
            script: script.to_vec(),
            pos: 0,
        }
    }
}

impl RandomSource for ScriptedDraws {
    fn fill_bytes(&mut self, buf: &mut [u8]) -> io::Result<()> {
        for b in buf.iter_mut() {
            *b = self.script[self.pos % self.script.len()] as u8;
            self.pos += 1;
        }
        Ok(())
    }

    fn next_u64(&mut self) -> io::Result<u64> {
        let v = self.script[self.pos % self.script.len()];
        self.pos += 1;
        Ok(v)
    }
}

fn lowercase_digits() -> PoolConfig {
    PoolConfig {
        uppercase: false,
        basic_symbols: false,
        ..Default::default()
    }
}

#[test]
fn full_pipeline_scores_and_screens_each_candidate() {
    let pool = build_pool(&PoolConfig::default()).unwrap();
    let request = GenerationRequest {
        length: 24,
        count: 5,
        algorithm: Algorithm::Pseudo,
        minima: Minima {
            lowercase: 1,
            digits: 1,
            ..Default::default()
        },
    };

    let mut rng = SplitMix::seeded(0xdecafbad);
    let batch = generate_batch(&pool, &request, &mut rng).unwrap();

    assert_eq!(batch.len(), 5);
    let expected_bits = 24.0 * (pool.len() as f64).log2();
    for item in &batch {
        assert_eq!(item.value.chars().count(), 24);
        assert!((item.entropy_bits - expected_bits).abs() < 1e-9);
        assert_eq!(item.strength, StrengthTier::classify(item.entropy_bits));
        assert_eq!(item.warnings, detect_patterns(&item.value));
        for c in item.value.chars() {
            assert!(pool.contains(&c));
        }
    }
}

#[test]
fn identical_seeds_reproduce_the_batch() {
    let pool = build_pool(&lowercase_digits()).unwrap();
    let request = GenerationRequest {
        length: 20,
        count: 3,
        algorithm: Algorithm::Pseudo,
        minima: Minima::default(),
    };

    let mut a = SplitMix::seeded(99);
    let mut b = SplitMix::seeded(99);
    let first = generate_batch(&pool, &request, &mut a).unwrap();
    let second = generate_batch(&pool, &request, &mut b).unwrap();

    for (x, y) in first.iter().zip(second.iter()) {
        assert_eq!(x.value, y.value);
        assert_eq!(x.entropy_bits, y.entropy_bits);
    }
}

#[test]
fn minima_overwrite_lands_scripted_positions() {
    let pool: Vec<char> = "ab12".chars().collect();
    let request = GenerationRequest {
        length: 4,
        count: 1,
        algorithm: Algorithm::Pseudo,
        minima: Minima {
            digits: 2,
            ..Default::default()
        },
    };

    // Four generation draws then two placement draws.
    let mut rng = ScriptedDraws::new(&[0, 1, 0, 1, 2, 3]);
    let batch = generate_batch(&pool, &request, &mut rng).unwrap();
    assert_eq!(batch[0].value, "ab12");
}

#[test]
fn secure_generation_over_tiny_pool_is_exact() {
    let pool: Vec<char> = "AB".chars().collect();
    let request = GenerationRequest {
        length: 6,
        count: 1,
        algorithm: Algorithm::Secure,
        minima: Minima::default(),
    };
    let mut rng = ScriptedDraws::new(&[0, 1, 0, 1, 0, 1]);
    let batch = generate_batch(&pool, &request, &mut rng).unwrap();
    assert_eq!(batch[0].value, "ABABAB");
}

#[test]
fn empty_configuration_fails_loudly() {
    let config = PoolConfig {
        lowercase: false,
        uppercase: false,
        digits: false,
        basic_symbols: false,
        ..Default::default()
    };
    assert!(matches!(build_pool(&config), Err(PassError::EmptyPool)));
}

#[test]
fn weak_structures_survive_generation_and_get_flagged() {
    // A pool of one character forces a repeated run.
    let pool: Vec<char> = "a".chars().collect();
    let request = GenerationRequest {
        length: 8,
        count: 1,
        algorithm: Algorithm::Secure,
        minima: Minima::default(),
    };
    let mut rng = SplitMix::seeded(7);
    let batch = generate_batch(&pool, &request, &mut rng).unwrap();
    assert_eq!(batch[0].value, "aaaaaaaa");
    assert!(batch[0]
        .warnings
        .iter()
        .any(|w| w.kind == PatternKind::Repeated));
}

#[test]
fn export_and_history_round_out_the_flow() {
    let pool = build_pool(&lowercase_digits()).unwrap();
    let request = GenerationRequest {
        length: 12,
        count: 2,
        algorithm: Algorithm::Pseudo,
        minima: Minima::default(),
    };
    let mut rng = SplitMix::seeded(2024);
    let batch = generate_batch(&pool, &request, &mut rng).unwrap();

    let export = output::render_export(&batch);
    assert!(export.contains("Total Passwords: 2\n"));
    assert!(export.contains(&format!("1. {} (12 chars)\n", batch[0].value)));
    assert!(export.contains(&format!("2. {} (12 chars)\n", batch[1].value)));

    let mut history = GenerationHistory::new();
    history.record(HistoryEntry::new(
        batch.iter().map(|p| p.value.clone()).collect(),
        request.length,
        request.algorithm,
    ));
    let latest = history.iter().next().unwrap();
    assert_eq!(latest.passwords.len(), 2);
    assert_eq!(latest.length, 12);
}

#[test]
fn the_two_entropy_measures_disagree_on_purpose() {
    // Theoretical entropy only sees length and pool size; the empirical
    // measure only sees content.
    assert!(entropy_bits("aaaaaaaa", 26) > 37.0);
    assert_eq!(shannon_entropy(b"aaaaaaaa"), 0.0);
}
