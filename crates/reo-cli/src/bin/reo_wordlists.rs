// reo-wordlists: Compile the word lists into an automaton image.
//
// Reads the ambiguous and non-Māori word lists (from DATA_DIR or the
// built-in copies) and writes the compiled automaton to OUT. Place the
// result in a data directory as `wordlists.bin` to skip building the
// automaton at startup.
//
// Usage:
//   reo-wordlists OUT [-d DATA_DIR] [-v]

use std::path::PathBuf;

use clap::Parser;
use reo_automata::WordlistAutomaton;
use reo_cli::CommonArgs;

#[derive(Parser, Debug)]
#[command(name = "reo-wordlists", about = "Compile word lists into an automaton image")]
struct Args {
    /// Output file.
    out: PathBuf,

    #[command(flatten)]
    common: CommonArgs,
}

fn main() {
    let args = Args::parse();
    let handle = args.common.init();
    let wordlists = handle.resources().wordlists();
    let image = wordlists.to_bytes();

    // refuse to write an image that would not load back
    if let Err(e) = WordlistAutomaton::from_bytes(&image) {
        reo_cli::fatal(&format!("compiled image failed validation: {e}"));
    }

    std::fs::write(&args.out, &image)
        .unwrap_or_else(|e| reo_cli::fatal(&format!("failed to write {}: {e}", args.out.display())));
    log::info!(
        "wrote {} terms ({} states, {} transitions, {} bytes) to {}",
        wordlists.term_count(),
        wordlists.state_count(),
        wordlists.transition_count(),
        image.len(),
        args.out.display()
    );
}
