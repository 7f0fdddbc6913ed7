// reo-cli: shared utilities for CLI tools.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process;

use clap::Args;
use log::{Level, LevelFilter, Log, Metadata, Record};
use reo_automata::WordlistAutomaton;
use reo_core::ReoError;
use reo_mi::ReoHandle;
use reo_mi::resources::{
    AMBIGUOUS_TERMS_FILE, NON_MAORI_TERMS_FILE, ResourceSources, Resources, TABLE_SYLLABLE_FILE,
    TABLE_VOWEL_FILE,
};

/// Environment variable naming a data directory.
pub const DATA_PATH_ENV: &str = "REO_DATA_PATH";

/// Precompiled word-list automaton, written by `reo-wordlists`.
pub const WORDLISTS_BIN: &str = "wordlists.bin";

const RESOURCE_FILES: [&str; 4] = [
    AMBIGUOUS_TERMS_FILE,
    NON_MAORI_TERMS_FILE,
    TABLE_VOWEL_FILE,
    TABLE_SYLLABLE_FILE,
];

/// Options shared by every tool.
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Directory with resource files overriding the built-in ones.
    #[arg(short = 'd', long)]
    pub data_dir: Option<PathBuf>,

    /// Log more to stderr; repeat for debug output.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl CommonArgs {
    /// Install the logger and load the handle, exiting on failure.
    pub fn init(&self) -> ReoHandle {
        init_logging(self.verbose);
        load_handle(self.data_dir.as_deref()).unwrap_or_else(|e| fatal(&e))
    }
}

/// Load resources and create a ReoHandle.
///
/// Search order:
/// 1. `data_dir` argument (if provided)
/// 2. `REO_DATA_PATH` environment variable
/// 3. `~/.reo`
/// 4. The resources built into the library
///
/// The first directory holding at least one resource file wins. Files it
/// lacks fall back to the built-in text. A `wordlists.bin` there replaces the
/// word lists.
pub fn load_handle(data_dir: Option<&Path>) -> Result<ReoHandle, String> {
    if let Some(dir) = data_dir {
        if !dir.is_dir() {
            return Err(format!("data directory {} does not exist", dir.display()));
        }
    }
    let search_paths = build_search_paths(
        data_dir,
        std::env::var_os(DATA_PATH_ENV),
        home_dir(),
    );

    match search_paths.iter().find(|dir| has_resources(dir)) {
        Some(dir) => {
            log::info!("loading resources from {}", dir.display());
            load_resources(dir)
                .map(ReoHandle::new)
                .map_err(|e| format!("failed to load resources from {}: {e}", dir.display()))
        }
        None => {
            log::debug!("no data directory found, using built-in resources");
            ReoHandle::embedded().map_err(|e| format!("failed to load built-in resources: {e}"))
        }
    }
}

/// Build the list of directories to search for resource files.
fn build_search_paths(
    data_dir: Option<&Path>,
    env_path: Option<OsString>,
    home: Option<PathBuf>,
) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(dir) = data_dir {
        paths.push(dir.to_path_buf());
    }
    if let Some(env_path) = env_path {
        paths.push(PathBuf::from(env_path));
    }
    if let Some(home) = home {
        paths.push(home.join(".reo"));
    }
    paths
}

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME").map(PathBuf::from)
}

fn has_resources(dir: &Path) -> bool {
    RESOURCE_FILES
        .iter()
        .chain([&WORDLISTS_BIN])
        .any(|name| dir.join(name).is_file())
}

fn read_optional(dir: &Path, name: &str) -> Result<Option<String>, ReoError> {
    let path = dir.join(name);
    if !path.is_file() {
        return Ok(None);
    }
    std::fs::read_to_string(&path)
        .map(Some)
        .map_err(|e| ReoError::malformed(name, 0, e.to_string()))
}

/// Parse the resources in `dir`, with built-in text for missing files.
pub fn load_resources(dir: &Path) -> Result<Resources, ReoError> {
    let embedded = ResourceSources::embedded();
    let ambiguous = read_optional(dir, AMBIGUOUS_TERMS_FILE)?;
    let non_maori = read_optional(dir, NON_MAORI_TERMS_FILE)?;
    let table_vowel = read_optional(dir, TABLE_VOWEL_FILE)?;
    let table_syllable = read_optional(dir, TABLE_SYLLABLE_FILE)?;

    let sources = ResourceSources {
        ambiguous_terms: ambiguous.as_deref().unwrap_or(embedded.ambiguous_terms),
        non_maori_terms: non_maori.as_deref().unwrap_or(embedded.non_maori_terms),
        table_vowel: table_vowel.as_deref().unwrap_or(embedded.table_vowel),
        table_syllable: table_syllable.as_deref().unwrap_or(embedded.table_syllable),
    };
    let resources = Resources::from_sources(&sources)?;

    let image_path = dir.join(WORDLISTS_BIN);
    if !image_path.is_file() {
        return Ok(resources);
    }
    let image = std::fs::read(&image_path)
        .map_err(|e| ReoError::malformed(WORDLISTS_BIN, 0, e.to_string()))?;
    let wordlists = WordlistAutomaton::from_bytes(&image)?;
    log::info!(
        "using precompiled word lists ({} terms) from {}",
        wordlists.term_count(),
        image_path.display()
    );
    Ok(resources.with_wordlists(wordlists))
}

/// Writes log records to stderr.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let level = match record.level() {
                Level::Error => "error",
                Level::Warn => "warning",
                Level::Info => "info",
                Level::Debug => "debug",
                Level::Trace => "trace",
            };
            eprintln!("{level}: {}", record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Map a `-v` count to a level filter.
pub fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the stderr logger. Calling it again only changes the level.
pub fn init_logging(verbose: u8) {
    // a second set_logger fails harmlessly
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level_for(verbose));
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}
