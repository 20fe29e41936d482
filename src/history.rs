//! Caller-owned generation history.
//!
//! A bounded, newest-first list of generation batches. The history is a
//! plain value passed around by the caller; the library holds no global
//! state.

use std::collections::VecDeque;

use chrono::{DateTime, Local};

use crate::pass::generate::Algorithm;

/// One recorded generation batch.
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub passwords: Vec<String>,
    pub length: usize,
    pub algorithm: Algorithm,
    pub recorded_at: DateTime<Local>,
}

impl HistoryEntry {
    pub fn new(passwords: Vec<String>, length: usize, algorithm: Algorithm) -> Self {
        Self {
            passwords,
            length,
            algorithm,
            recorded_at: Local::now(),
        }
    }
}

/// Bounded history, newest first.
#[derive(Debug, Clone)]
pub struct GenerationHistory {
    entries: VecDeque<HistoryEntry>,
    cap: usize,
}

impl GenerationHistory {
    pub const DEFAULT_CAP: usize = 20;

    pub fn new() -> Self {
        Self::with_cap(Self::DEFAULT_CAP)
    }

    pub fn with_cap(cap: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            cap,
        }
    }

    /// Record a batch; the oldest entries fall off past the cap.
    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.push_front(entry);
        self.entries.truncate(self.cap);
    }

    /// Entries, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for GenerationHistory {
    fn default() -> Self {
        Self::new()
    }
}
