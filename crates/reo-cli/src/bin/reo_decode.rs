// reo-decode: Decode text from stdin with a named scheme.
//
// The inverse of reo-encode. Decoding never fails: characters the scheme
// does not produce pass through unchanged.
//
// Usage:
//   reo-decode --scheme NAME [-d DATA_DIR] [-v]

use std::io::{self, BufRead, BufWriter, Write};

use clap::Parser;
use reo_cli::CommonArgs;
use reo_mi::Encoder;

#[derive(Parser, Debug)]
#[command(name = "reo-decode", about = "Decode encoded te reo Māori text from stdin")]
struct Args {
    /// Scheme name.
    #[arg(short, long)]
    scheme: String,

    #[command(flatten)]
    common: CommonArgs,
}

fn main() {
    let args = Args::parse();
    let handle = args.common.init();
    let scheme = handle
        .scheme(&args.scheme)
        .unwrap_or_else(|e| reo_cli::fatal(&e.to_string()));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = line.unwrap_or_else(|e| reo_cli::fatal(&format!("failed to read stdin: {e}")));
        if let Err(e) = writeln!(out, "{}", scheme.decode(&line)) {
            reo_cli::fatal(&format!("failed to write stdout: {e}"));
        }
    }
    if let Err(e) = out.flush() {
        reo_cli::fatal(&format!("failed to write stdout: {e}"));
    }
}
