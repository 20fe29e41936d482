//! CLI driver: flags to config, generation, output fan-out.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use entropass::pass::output;
use entropass::rand::{DevUrandom, RandomSource, SplitMix};
use entropass::{
    build_pool, generate_batch, Algorithm, GeneratedPassword, GenerationRequest, Minima,
    PassError, PoolConfig,
};

use crate::terminal;

use super::{parse, CliFlags};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const DEFAULT_LENGTH: usize = 16;

pub fn run(args: Vec<String>) -> i32 {
    let flags = match parse(&args) {
        Ok(flags) => flags,
        Err(e) => {
            terminal::print_error(&e.to_string());
            return 2;
        }
    };

    if flags.help {
        print_help();
        return 0;
    }
    if flags.version {
        println!("entropass {VERSION}");
        return 0;
    }

    let request = match build_request(&flags) {
        Ok(request) => request,
        Err(e) => {
            terminal::print_error(&e.to_string());
            return 2;
        }
    };

    let pool = match build_pool(&pool_config(&flags)) {
        Ok(pool) => pool,
        Err(e) => {
            terminal::print_error(&e.to_string());
            return 1;
        }
    };

    let mut rng: Box<dyn RandomSource> = match secure_source(request.algorithm) {
        Ok(rng) => rng,
        Err(e) => {
            terminal::print_error(&format!("entropy source unavailable: {e}"));
            return 1;
        }
    };

    let batch = match generate_batch(&pool, &request, rng.as_mut()) {
        Ok(batch) => batch,
        Err(e) => {
            terminal::print_error(&e.to_string());
            return 1;
        }
    };

    if let Some(first) = batch.first()
        && !flags.quiet
    {
        terminal::entropy_header(first, pool.len(), request.algorithm.name());
    }

    if flags.clipboard {
        to_clipboard(&batch)
    } else if let Some(path) = &flags.output {
        to_file(&batch, path, &flags)
    } else {
        to_stdout(&batch, &flags);
        0
    }
}

fn pool_config(flags: &CliFlags) -> PoolConfig {
    PoolConfig {
        lowercase: !flags.no_lower,
        uppercase: !flags.no_upper,
        digits: !flags.no_digits,
        basic_symbols: !flags.no_symbols,
        extended_symbols: flags.extended,
        non_keyboard: flags.non_keyboard,
        invisible: flags.invisible,
        exclude_similar: flags.exclude_similar,
        exclude_ambiguous: flags.exclude_ambiguous,
        custom_include: flags.include.clone().unwrap_or_default(),
        custom_exclude: flags.exclude.clone().unwrap_or_default(),
    }
}

fn build_request(flags: &CliFlags) -> Result<GenerationRequest, PassError> {
    let algorithm = match &flags.algorithm {
        Some(name) => Algorithm::parse(name)?,
        None => Algorithm::Secure,
    };

    Ok(GenerationRequest {
        length: flags.length.unwrap_or(DEFAULT_LENGTH),
        count: flags.count.unwrap_or(1),
        algorithm,
        minima: Minima {
            lowercase: flags.min_lower.unwrap_or(0),
            uppercase: flags.min_upper.unwrap_or(0),
            digits: flags.min_digits.unwrap_or(0),
            symbols: flags.min_symbols.unwrap_or(0),
        },
    })
}

/// Secure generation requires the kernel CSPRNG; the other algorithms get a
/// SplitMix stream seeded from it.
fn secure_source(algorithm: Algorithm) -> std::io::Result<Box<dyn RandomSource>> {
    match algorithm {
        Algorithm::Secure => Ok(Box::new(DevUrandom::open()?)),
        _ => Ok(Box::new(SplitMix::from_entropy()?)),
    }
}

fn stdin_is_tty() -> bool {
    unsafe { libc::isatty(0) == 1 }
}

fn to_stdout(batch: &[GeneratedPassword], flags: &CliFlags) {
    for item in batch {
        println!("{}", item.value);
        if flags.analyze {
            print_analysis(item);
        }
    }
    terminal::flush();
}

fn print_analysis(item: &GeneratedPassword) {
    println!(
        "  {} • {}",
        entropass::format_bits(item.entropy_bits),
        item.strength.label()
    );
    for warning in &item.warnings {
        terminal::print_warn(&format!("  warning: {}", warning.description));
    }
}

fn to_clipboard(batch: &[GeneratedPassword]) -> i32 {
    let mut text = output::clipboard_text(batch);

    let mut ctx = match ClipboardContext::new() {
        Ok(ctx) => ctx,
        Err(e) => {
            terminal::print_error(&format!("clipboard unavailable: {e}"));
            text.zeroize();
            return 1;
        }
    };

    let result = ctx.set_contents(text.clone());
    text.zeroize();
    match result {
        Ok(()) => {
            println!("{} password(s) copied to clipboard", batch.len());
            0
        }
        Err(e) => {
            terminal::print_error(&format!("clipboard write failed: {e}"));
            1
        }
    }
}

fn to_file(batch: &[GeneratedPassword], path: &str, flags: &CliFlags) -> i32 {
    // Prompt before clobbering, but only when someone is there to answer.
    if Path::new(path).exists()
        && !flags.quiet
        && stdin_is_tty()
        && !terminal::confirm_overwrite(path)
    {
        println!("Aborted.");
        return 1;
    }

    let mut text = output::render_export(batch);
    let result = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .and_then(|mut file| file.write_all(text.as_bytes()));
    text.zeroize();

    match result {
        Ok(()) => {
            if !flags.quiet {
                println!("Wrote {} password(s) to {}", batch.len(), path);
            }
            0
        }
        Err(e) => {
            terminal::print_error(&format!("failed to write {path}: {e}"));
            1
        }
    }
}

fn print_help() {
    println!("entropass {VERSION} - password generation with entropy scoring");
    println!();
    println!("Usage: entropass [OPTIONS]");
    println!();
    println!("Generation:");
    println!("  -l, --length <N>        password length (default {DEFAULT_LENGTH})");
    println!("  -n, --number <N>        how many passwords to generate (default 1)");
    println!("  -a, --algorithm <NAME>  secure | pseudo | pattern | pronounceable");
    println!();
    println!("Character pool:");
    println!("      --no-lower          drop lowercase letters");
    println!("      --no-upper          drop uppercase letters");
    println!("      --no-digits         drop digits");
    println!("      --no-symbols        drop basic symbols");
    println!("      --extended          add extended symbols");
    println!("      --non-keyboard      add non-keyboard characters");
    println!("      --invisible         add zero-width characters");
    println!("      --exclude-similar   drop look-alikes (l 1 I O 0)");
    println!("      --exclude-ambiguous drop ambiguous punctuation");
    println!("      --include <CHARS>   append custom characters");
    println!("      --exclude <CHARS>   remove characters from the pool");
    println!();
    println!("Distribution minima (best-effort):");
    println!("      --min-lower <N>  --min-upper <N>  --min-digits <N>  --min-symbols <N>");
    println!();
    println!("Output:");
    println!("  -o, --output <PATH>     write a numbered plain-text export");
    println!("  -b, --board             copy to clipboard instead of stdout");
    println!("      --analyze           print entropy and pattern warnings per password");
    println!("  -q, --quiet             suppress headers and prompts");
    println!("  -h, --help  -v, --version");
}
