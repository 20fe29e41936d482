//! Hand-rolled flag parsing.

use super::CliFlags;

#[derive(Debug)]
pub enum ParseError {
    InvalidNumber(String),
    MissingValue(String),
    UnknownArg(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidNumber(s) => write!(f, "Invalid number: {}", s),
            ParseError::MissingValue(s) => write!(f, "Missing value for: {}", s),
            ParseError::UnknownArg(s) => write!(f, "Unknown argument: {}", s),
        }
    }
}

fn take_value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str, ParseError> {
    *i += 1;
    args.get(*i)
        .map(|s| s.as_str())
        .ok_or_else(|| ParseError::MissingValue(flag.to_string()))
}

fn take_number(args: &[String], i: &mut usize, flag: &str) -> Result<usize, ParseError> {
    let raw = take_value(args, i, flag)?;
    raw.parse()
        .map_err(|_| ParseError::InvalidNumber(raw.to_string()))
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-b" | "--board" => flags.clipboard = true,
            "--analyze" => flags.analyze = true,
            "--no-lower" => flags.no_lower = true,
            "--no-upper" => flags.no_upper = true,
            "--no-digits" => flags.no_digits = true,
            "--no-symbols" => flags.no_symbols = true,
            "--extended" => flags.extended = true,
            "--non-keyboard" => flags.non_keyboard = true,
            "--invisible" => flags.invisible = true,
            "--exclude-similar" => flags.exclude_similar = true,
            "--exclude-ambiguous" => flags.exclude_ambiguous = true,
            "-l" | "--length" => flags.length = Some(take_number(args, &mut i, "--length")?),
            "-n" | "--number" => flags.count = Some(take_number(args, &mut i, "--number")?),
            "-a" | "--algorithm" => {
                flags.algorithm = Some(take_value(args, &mut i, "--algorithm")?.to_string())
            }
            "--include" => flags.include = Some(take_value(args, &mut i, "--include")?.to_string()),
            "--exclude" => flags.exclude = Some(take_value(args, &mut i, "--exclude")?.to_string()),
            "--min-lower" => flags.min_lower = Some(take_number(args, &mut i, "--min-lower")?),
            "--min-upper" => flags.min_upper = Some(take_number(args, &mut i, "--min-upper")?),
            "--min-digits" => flags.min_digits = Some(take_number(args, &mut i, "--min-digits")?),
            "--min-symbols" => flags.min_symbols = Some(take_number(args, &mut i, "--min-symbols")?),
            "-o" | "--output" => flags.output = Some(take_value(args, &mut i, "--output")?.to_string()),
            arg => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}
