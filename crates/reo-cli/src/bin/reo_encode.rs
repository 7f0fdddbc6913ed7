// reo-encode: Encode text from stdin with a named scheme.
//
// Reads stdin line by line and writes the encoded lines to stdout.
//
// Usage:
//   reo-encode --scheme NAME [-d DATA_DIR] [-v]
//
// Schemes: identity, base, vowel_length, diphthong, syllable, table_vowel,
// table_syllable.

use std::io::{self, BufRead, BufWriter, Write};

use clap::Parser;
use reo_cli::CommonArgs;
use reo_mi::Encoder;
use reo_mi::schemes::{Scheme, SchemeKind, VowelType};

#[derive(Parser, Debug)]
#[command(name = "reo-encode", about = "Encode te reo Māori text from stdin")]
struct Args {
    /// Scheme name.
    #[arg(short, long)]
    scheme: String,

    /// With the syllable scheme, spell long vowels as doubled short vowels.
    #[arg(long)]
    short_vowels: bool,

    #[command(flatten)]
    common: CommonArgs,
}

fn main() {
    let args = Args::parse();
    let handle = args.common.init();

    let kind: SchemeKind = args
        .scheme
        .parse()
        .unwrap_or_else(|e: reo_mi::ReoError| reo_cli::fatal(&e.to_string()));
    let scheme = match kind {
        SchemeKind::Syllable if args.short_vowels => {
            Scheme::Syllable(handle.syllable_scheme(VowelType::Short))
        }
        _ => handle.scheme_of_kind(kind),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = line.unwrap_or_else(|e| reo_cli::fatal(&format!("failed to read stdin: {e}")));
        if let Err(e) = writeln!(out, "{}", scheme.encode(&line)) {
            reo_cli::fatal(&format!("failed to write stdout: {e}"));
        }
    }
    if let Err(e) = out.flush() {
        reo_cli::fatal(&format!("failed to write stdout: {e}"));
    }
}
