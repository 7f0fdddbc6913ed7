// reo-numbers: Spell out the numbers in stdin lines in te reo Māori.
//
// Handles plain numbers below 1,000,000 (one `,` thousands group allowed),
// `$`/`£` amounts, `N-M` ranges and percentages. Larger numbers are left as
// digits with a warning.
//
// Usage:
//   reo-numbers [-v]

use std::io::{self, BufRead, BufWriter, Write};

use clap::Parser;
use reo_mi::numbers::convert_numbers;

#[derive(Parser, Debug)]
#[command(name = "reo-numbers", about = "Spell out numbers in te reo Māori")]
struct Args {
    /// Log more to stderr.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();
    reo_cli::init_logging(args.verbose);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = line.unwrap_or_else(|e| reo_cli::fatal(&format!("failed to read stdin: {e}")));
        if let Err(e) = writeln!(out, "{}", convert_numbers(&line)) {
            reo_cli::fatal(&format!("failed to write stdout: {e}"));
        }
    }
    if let Err(e) = out.flush() {
        reo_cli::fatal(&format!("failed to write stdout: {e}"));
    }
}
