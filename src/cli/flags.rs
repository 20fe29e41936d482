//! Parsed command-line flags.

#[derive(Debug, Default)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub clipboard: bool,
    pub analyze: bool,

    // Character classes
    pub no_lower: bool,
    pub no_upper: bool,
    pub no_digits: bool,
    pub no_symbols: bool,
    pub extended: bool,
    pub non_keyboard: bool,
    pub invisible: bool,

    // Filters and custom edits
    pub exclude_similar: bool,
    pub exclude_ambiguous: bool,
    pub include: Option<String>,
    pub exclude: Option<String>,

    // Generation parameters
    pub length: Option<usize>,
    pub count: Option<usize>,
    pub algorithm: Option<String>,

    // Distribution minima
    pub min_lower: Option<usize>,
    pub min_upper: Option<usize>,
    pub min_digits: Option<usize>,
    pub min_symbols: Option<usize>,

    pub output: Option<String>,
}
