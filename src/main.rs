//! # transcriptor CLI
//!
//! Command-line interface for the transcriptor library.

use std::fs;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;

use transcriptor::cli::{Args, OutputFormat};
use transcriptor::output::{to_json, to_jsonl};
use transcriptor::parser::{Source, create_tokenizer};
use transcriptor::{Message, TranscriptError, parse_transcript};

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), TranscriptError> {
    let args = <Args as ClapParser>::parse();

    let text = fs::read_to_string(&args.input)?;

    let parse_start = Instant::now();
    let (source, messages) = parse_with_source(&text, args.source);
    let parse_time = parse_start.elapsed();

    if !args.quiet {
        eprintln!("📜 transcriptor v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("📂 Input:   {}", args.input);
        eprintln!("🔎 Source:  {}", source);
        eprintln!("📄 Format:  {}", args.format);
        eprintln!(
            "✅ Parsed {} messages ({:.3}s)",
            messages.len(),
            parse_time.as_secs_f64()
        );
    }

    let rendered = match args.format {
        OutputFormat::Json => to_json(&messages)?,
        OutputFormat::Jsonl => to_jsonl(&messages)?,
    };

    match &args.output {
        Some(path) => {
            fs::write(path, rendered)?;
            if !args.quiet {
                eprintln!("💾 Output saved to {}", path);
            }
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

/// Parses with a forced tokenizer when `--source` is given, otherwise runs
/// detection and the full fallback chain.
fn parse_with_source(text: &str, forced: Option<Source>) -> (Source, Vec<Message>) {
    match forced {
        Some(source) => (source, create_tokenizer(source).tokenize(text)),
        None => (Source::detect(text), parse_transcript(text)),
    }
}
