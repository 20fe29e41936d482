//! Terminal output utilities.
//!
//! Box drawing, ANSI helpers, and the single-key overwrite prompt.

use std::io::{self, Write};

use crossterm::event::{self, Event, KeyCode};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

use entropass::{format_bits, GeneratedPassword};

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const RED: &str = "\x1b[38;5;9m";
pub const YELLOW: &str = "\x1b[38;5;11m";

/// Print error message in red to stderr.
pub fn print_error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

/// Print warning message in yellow to stderr.
pub fn print_warn(msg: &str) {
    eprintln!("{YELLOW}{msg}{RESET}");
}

/// Flush stdout.
pub fn flush() {
    let _ = io::stdout().flush();
}

// ============================================================================
// Raw Mode Guard (RAII pattern)
// ============================================================================

/// Guard that ensures raw mode is disabled when dropped.
pub struct RawModeGuard {
    was_enabled: bool,
}

impl RawModeGuard {
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self { was_enabled: true })
    }

    pub fn disable(&mut self) {
        if self.was_enabled {
            let _ = disable_raw_mode();
            self.was_enabled = false;
        }
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        self.disable();
    }
}

// ============================================================================
// Box Drawing (74 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 74;

/// Print box top with optional title: ┌─ Title ──────────────────────────┐
pub fn box_top(title: &str) {
    if title.is_empty() {
        println!("┌{}┐", "─".repeat(BOX_WIDTH - 2));
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = BOX_WIDTH - 2 - title_part.chars().count();
        println!("┌{}{}┐", title_part, "─".repeat(remaining));
    }
}

/// Print box content line: │ content                                │
pub fn box_line(content: &str) {
    let inner_width = BOX_WIDTH - 4;
    let display_len = content.chars().count();

    if display_len <= inner_width {
        let padding = inner_width - display_len;
        println!("│ {}{} │", content, " ".repeat(padding));
    } else {
        println!("│ {} │", content);
    }
}

/// Print box bottom: └──────────────────────────────────────────┘
pub fn box_bottom() {
    println!("└{}┘", "─".repeat(BOX_WIDTH - 2));
}

// ============================================================================
// Entropy Header
// ============================================================================

/// Draw the entropy summary box for a batch.
pub fn entropy_header(first: &GeneratedPassword, pool_len: usize, algorithm: &str) {
    box_top("Entropy");
    box_line(&format!(
        "{} ({})",
        format_bits(first.entropy_bits),
        first.strength.label()
    ));
    box_line(&format!(
        "Algorithm: {} • Pool: {} chars",
        algorithm, pool_len
    ));
    box_bottom();
    println!();
}

// ============================================================================
// Prompts
// ============================================================================

/// Ask before clobbering an existing output file. Returns true on 'y'.
pub fn confirm_overwrite(path: &str) -> bool {
    println!("Output file '{}' exists. Overwrite? [y/N] ", path);
    flush();

    let Ok(mut guard) = RawModeGuard::new() else {
        return false;
    };

    loop {
        match event::read() {
            Ok(Event::Key(key)) => {
                guard.disable();
                return matches!(key.code, KeyCode::Char('y') | KeyCode::Char('Y'));
            }
            Ok(_) => continue,
            Err(_) => {
                guard.disable();
                return false;
            }
        }
    }
}
