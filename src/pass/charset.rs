//! Character pool construction.
//!
//! A pool is an ordered `Vec<char>` assembled from the enabled character
//! classes, filtered, and extended with custom characters. Duplicates are
//! kept on purpose: sampling is uniform over positions, so a character that
//! appears twice is twice as likely to be drawn.

use log::debug;

use crate::errors::PassError;

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const BASIC_SYMBOLS: &str = "!@#$%^&*";
const EXTENDED_SYMBOLS: &str = "~`!@#$%^&*()_+-={}[]|\\:;\"'<>?,./";
const NON_KEYBOARD: &str = "§±!@#$%^&*()_+-=[]{}|;:,.<>?/~`¡¢£¤¥¦§¨©ª«¬®¯°±²³´µ¶·¸¹º»¼½¾¿ÀÁÂÃÄÅÆÇÈÉÊËÌÍÎÏÐÑÒÓÔÕÖ×ØÙÚÛÜÝÞßàáâãäåæçèéêëìíîïðñòóôõö÷øùúûüýþÿ";
const INVISIBLE: &str = "\u{200B}\u{200C}\u{200D}\u{2060}\u{FEFF}";

/// Look-alike characters removed by `exclude_similar`.
const SIMILAR: &str = "l1IO0";
/// Characters removed by `exclude_ambiguous`.
const AMBIGUOUS: &str = "{}[]()/\\|`'\"";

/// A character class with a canonical, ordered alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Digit,
    BasicSymbol,
    ExtendedSymbol,
    NonKeyboard,
    Invisible,
}

impl CharacterClass {
    /// Fixed concatenation order for pool assembly.
    pub const ALL: [CharacterClass; 7] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Digit,
        CharacterClass::BasicSymbol,
        CharacterClass::ExtendedSymbol,
        CharacterClass::NonKeyboard,
        CharacterClass::Invisible,
    ];

    pub fn alphabet(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Digit => DIGITS,
            CharacterClass::BasicSymbol => BASIC_SYMBOLS,
            CharacterClass::ExtendedSymbol => EXTENDED_SYMBOLS,
            CharacterClass::NonKeyboard => NON_KEYBOARD,
            CharacterClass::Invisible => INVISIBLE,
        }
    }
}

/// Pool configuration: enabled classes, exclusion filters, custom edits.
#[derive(Debug, Clone)]
pub struct PoolConfig {
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
    pub basic_symbols: bool,
    pub extended_symbols: bool,
    pub non_keyboard: bool,
    pub invisible: bool,
    pub exclude_similar: bool,
    pub exclude_ambiguous: bool,
    /// Appended verbatim after the exclusion filters, duplicates kept.
    pub custom_include: String,
    /// Removed from the pool last, after custom inclusion.
    pub custom_exclude: String,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            lowercase: true,
            uppercase: true,
            digits: true,
            basic_symbols: true,
            extended_symbols: false,
            non_keyboard: false,
            invisible: false,
            exclude_similar: false,
            exclude_ambiguous: false,
            custom_include: String::new(),
            custom_exclude: String::new(),
        }
    }
}

impl PoolConfig {
    fn class_enabled(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Lowercase => self.lowercase,
            CharacterClass::Uppercase => self.uppercase,
            CharacterClass::Digit => self.digits,
            CharacterClass::BasicSymbol => self.basic_symbols,
            CharacterClass::ExtendedSymbol => self.extended_symbols,
            CharacterClass::NonKeyboard => self.non_keyboard,
            CharacterClass::Invisible => self.invisible,
        }
    }

    pub fn enabled_classes(&self) -> Vec<CharacterClass> {
        CharacterClass::ALL
            .into_iter()
            .filter(|&c| self.class_enabled(c))
            .collect()
    }
}

/// Build the character pool for a configuration.
///
/// Classes are concatenated in the fixed [`CharacterClass::ALL`] order, the
/// similar/ambiguous filters run next, custom characters are appended after
/// the filters (so they are never filtered out themselves), and custom
/// exclusions are applied last.
pub fn build(config: &PoolConfig) -> Result<Vec<char>, PassError> {
    let mut pool: Vec<char> = Vec::new();

    for class in config.enabled_classes() {
        pool.extend(class.alphabet().chars());
    }

    if config.exclude_similar {
        pool.retain(|c| !SIMILAR.contains(*c));
    }

    if config.exclude_ambiguous {
        pool.retain(|c| !AMBIGUOUS.contains(*c));
    }

    pool.extend(config.custom_include.chars());

    if !config.custom_exclude.is_empty() {
        pool.retain(|c| !config.custom_exclude.contains(*c));
    }

    if pool.is_empty() {
        return Err(PassError::EmptyPool);
    }

    debug!("resolved pool of {} characters", pool.len());
    Ok(pool)
}

/// Coarse buckets used for distribution counting and minima enforcement.
///
/// Symbol means anything that is not ASCII alphanumeric, so non-keyboard
/// and invisible characters all count as symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoarseClass {
    Lower,
    Upper,
    Digit,
    Symbol,
}

impl CoarseClass {
    pub fn matches(self, c: char) -> bool {
        match self {
            CoarseClass::Lower => c.is_ascii_lowercase(),
            CoarseClass::Upper => c.is_ascii_uppercase(),
            CoarseClass::Digit => c.is_ascii_digit(),
            CoarseClass::Symbol => !c.is_ascii_alphanumeric(),
        }
    }
}

/// Pool members belonging to a coarse class, in pool order.
pub fn members_of(pool: &[char], class: CoarseClass) -> Vec<char> {
    pool.iter().copied().filter(|&c| class.matches(c)).collect()
}

/// Occurrences of a coarse class within a candidate string.
pub fn count_of(chars: &[char], class: CoarseClass) -> usize {
    chars.iter().filter(|&&c| class.matches(c)).count()
}
