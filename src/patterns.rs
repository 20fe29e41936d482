//! Structural weakness detection.
//!
//! Three independent checks flag patterns that entropy scoring cannot see.
//! Warnings are informational only and never feed back into the entropy
//! score. All checks run; a password can collect several warnings at once.

/// Fixed ascending runs checked as case-insensitive substrings.
const SEQUENCES: [&str; 10] = [
    "123", "234", "345", "456", "789", "abc", "bcd", "cde", "def", "xyz",
];

/// Keyboard-adjacency walks checked as case-insensitive substrings.
const KEYBOARD_WALKS: [&str; 5] = ["qwerty", "asdfgh", "zxcvbn", "123456", "654321"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    Sequential,
    Repeated,
    KeyboardWalk,
}

/// One detected structural weakness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternWarning {
    pub kind: PatternKind,
    pub description: String,
}

/// Run all pattern checks against a password.
pub fn detect(password: &str) -> Vec<PatternWarning> {
    let lowered = password.to_lowercase();
    let mut warnings = Vec::new();

    if let Some(seq) = SEQUENCES.iter().find(|s| lowered.contains(*s)) {
        warnings.push(PatternWarning {
            kind: PatternKind::Sequential,
            description: format!("contains the sequential run \"{seq}\""),
        });
    }

    if let Some(c) = repeated_run(password) {
        warnings.push(PatternWarning {
            kind: PatternKind::Repeated,
            description: format!("character {c:?} repeated three or more times in a row"),
        });
    }

    if let Some(walk) = KEYBOARD_WALKS.iter().find(|w| lowered.contains(*w)) {
        warnings.push(PatternWarning {
            kind: PatternKind::KeyboardWalk,
            description: format!("contains the keyboard walk \"{walk}\""),
        });
    }

    warnings
}

/// First character repeated 3+ times consecutively, if any.
fn repeated_run(s: &str) -> Option<char> {
    let mut prev: Option<char> = None;
    let mut run = 0usize;
    for c in s.chars() {
        if prev == Some(c) {
            run += 1;
            if run >= 3 {
                return Some(c);
            }
        } else {
            prev = Some(c);
            run = 1;
        }
    }
    None
}
