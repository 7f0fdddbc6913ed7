// reo-classify: Classify lines from stdin as Māori orthography or not.
//
// Output format:
//   M: text    (valid)
//   X: text    (not valid)
// With -v, each rule-trace line follows as "   > reason".
//
// Usage:
//   reo-classify [--lenient] [-v] [-d DATA_DIR]

use std::io::{self, BufRead, BufWriter, Write};

use clap::Parser;
use reo_cli::CommonArgs;
use reo_mi::ClassifyOptions;

#[derive(Parser, Debug)]
#[command(name = "reo-classify", about = "Classify text from stdin as te reo Māori")]
struct Args {
    /// Also reject words found in the ambiguous and non-Māori word lists.
    #[arg(short, long)]
    lenient: bool,

    /// Disable the verdict cache.
    #[arg(long)]
    no_cache: bool,

    #[command(flatten)]
    common: CommonArgs,
}

fn main() {
    let args = Args::parse();
    let mut handle = args.common.init();
    if args.no_cache {
        handle.set_cache_size(None);
    }
    let options = ClassifyOptions {
        strict: !args.lenient,
        verbose: args.common.verbose > 0,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = line.unwrap_or_else(|e| reo_cli::fatal(&format!("failed to read stdin: {e}")));
        let text = line.trim();
        if text.is_empty() {
            continue;
        }

        let (valid, trace) = if options.verbose {
            let result = handle.classify(text, options);
            (result.valid, result.trace)
        } else {
            (handle.is_maori(text, options.strict, false), Vec::new())
        };

        let written = writeln!(out, "{}: {text}", if valid { 'M' } else { 'X' }).and_then(|()| {
            trace
                .iter()
                .try_for_each(|reason| writeln!(out, "   > {reason}"))
        });
        if let Err(e) = written {
            reo_cli::fatal(&format!("failed to write stdout: {e}"));
        }
    }
    if let Err(e) = out.flush() {
        reo_cli::fatal(&format!("failed to write stdout: {e}"));
    }
}
