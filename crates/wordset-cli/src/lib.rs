// wordset-cli: shared utilities and program bodies for the demo tools.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing_subscriber::EnvFilter;
use wordset_core::{SetError, StringSet};
use wordset_text::distinct::collect_distinct;
use wordset_text::speller::{DictionarySpeller, misspelled};
use wordset_text::wordlist;

/// Environment variable naming the directory that holds the data files.
pub const DATA_DIR_ENV: &str = "WORDSET_DATA_DIR";

/// Environment variable holding the log filter.
pub const LOG_FILTER: &str = "RUST_LOG";

/// Dictionary word list, one entry per line.
pub const DICTIONARY_FILE: &str = "dictionary.txt";

/// Text checked by the spell checker.
pub const TEST_FILE: &str = "test.txt";

/// Text whose distinct words are collected.
pub const STORY_FILE: &str = "greenEggs.txt";

/// Letters inserted by the driver. "E" appears twice on purpose.
pub const DRIVER_LETTERS: [&str; 20] = [
    "C", "b", "c", "Q", "z", "D", "E", "P", "j", "F", "E", "I", "y", "f", "i", "U", "V", "m", "e",
    "W",
];

/// Letters the driver removes, in order. The second "i" finds nothing.
pub const DRIVER_REMOVALS: [&str; 5] = ["e", "P", "i", "D", "i"];

/// Command-line options shared by every tool.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// `-d/--data-dir`: directory searched first for data files.
    pub data_dir: Option<PathBuf>,
    /// `-c/--capacity`: bucket count overriding the program default.
    pub capacity: Option<i64>,
    /// `-s/--seed`: seed for random picks.
    pub seed: Option<u64>,
    /// `-h/--help` was given.
    pub help: bool,
    /// Everything that is not an option, in order.
    pub positional: Vec<String>,
}

impl Options {
    /// Bucket count: the `--capacity` override, or `default`.
    pub fn capacity_or(&self, default: usize) -> Result<usize, String> {
        match self.capacity {
            Some(capacity) => usize::try_from(capacity).map_err(|_| {
                format!("invalid --capacity: {}", SetError::NegativeCapacity(capacity))
            }),
            None => Ok(default),
        }
    }

    /// Empty set sized by [`capacity_or`](Self::capacity_or).
    pub fn new_set(&self, default: usize) -> Result<StringSet, String> {
        self.capacity_or(default).map(StringSet::new)
    }

    /// Random generator seeded once for the whole run.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Resolve data file `name`.
    ///
    /// The first positional argument at `index`, if given, is used as-is.
    pub fn data_file(&self, index: usize, name: &str) -> Result<PathBuf, String> {
        match self.positional.get(index) {
            Some(path) => Ok(PathBuf::from(path)),
            None => find_data_file(name, self.data_dir.as_deref()),
        }
    }
}

/// Parse the shared options out of `args` (program name excluded).
pub fn parse_options(args: &[String]) -> Result<Options, String> {
    let mut options = Options::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => (flag, Some(value.to_string())),
            _ => (arg.as_str(), None),
        };
        let mut value = |flag: &str| -> Result<String, String> {
            match inline.clone() {
                Some(value) => Ok(value),
                None => iter
                    .next()
                    .cloned()
                    .ok_or_else(|| format!("{flag} requires a value")),
            }
        };

        match flag {
            "-h" | "--help" => options.help = true,
            "-d" | "--data-dir" => options.data_dir = Some(PathBuf::from(value(flag)?)),
            "-c" | "--capacity" => {
                let raw = value(flag)?;
                let capacity = raw
                    .parse()
                    .map_err(|_| format!("{flag} expects an integer, got {raw:?}"))?;
                options.capacity = Some(capacity);
            }
            "-s" | "--seed" => {
                let raw = value(flag)?;
                let seed = raw
                    .parse()
                    .map_err(|_| format!("{flag} expects an unsigned integer, got {raw:?}"))?;
                options.seed = Some(seed);
            }
            _ if flag.starts_with('-') && flag.len() > 1 => {
                return Err(format!("unknown option: {arg}"));
            }
            _ => options.positional.push(arg.clone()),
        }
    }

    Ok(options)
}

/// Search for a data file.
///
/// Search order:
/// 1. `data_dir` argument (if provided)
/// 2. `WORDSET_DATA_DIR` environment variable
/// 3. `./data`
/// 4. Current working directory
pub fn find_data_file(name: &str, data_dir: Option<&Path>) -> Result<PathBuf, String> {
    let search_paths = build_search_paths(data_dir);
    for dir in &search_paths {
        let candidate = dir.join(name);
        if candidate.is_file() {
            tracing::debug!(path = %candidate.display(), "found data file");
            return Ok(candidate);
        }
    }

    Err(format!(
        "could not find {} in any of the search paths:\n{}",
        name,
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// Build the list of directories to search for data files.
fn build_search_paths(data_dir: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(dir) = data_dir {
        paths.push(dir.to_path_buf());
    }

    if let Ok(env_dir) = std::env::var(DATA_DIR_ENV) {
        paths.push(PathBuf::from(env_dir));
    }

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join("data"));
        paths.push(cwd);
    }

    paths
}

/// Install the stderr log subscriber. `RUST_LOG` overrides the default
/// `warn` level.
pub fn init_logging() -> Result<(), String> {
    let filter = match std::env::var_os(LOG_FILTER) {
        Some(_) => EnvFilter::try_from_default_env()
            .map_err(|e| format!("invalid {LOG_FILTER}: {e}"))?,
        None => EnvFilter::new("warn"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| format!("failed to install logger: {e}"))
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Banner printed before each program in the combined demo.
pub fn write_banner<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    const RULE: &str = "******************************************";
    writeln!(out)?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "*\tRunning {title}...")?;
    writeln!(out, "{RULE}")?;
    writeln!(out)
}

// ---------------------------------------------------------------------------
// Program bodies
// ---------------------------------------------------------------------------

/// Walk a set through the letter scenario and print each step.
pub fn run_driver<W, R>(out: &mut W, letters: &mut StringSet, rng: &mut R) -> io::Result<()>
where
    W: Write,
    R: Rng + ?Sized,
{
    letters.extend(DRIVER_LETTERS);

    writeln!(out, "Printing letters")?;
    writeln!(out, "{letters}")?;

    for probe in ["e", "a"] {
        let answer = if letters.contains(probe) { "yes" } else { "no" };
        writeln!(out, "Does the set contain '{probe}'? {answer}")?;
    }

    writeln!(out, "After removing e, P, i, D, and i:")?;
    for letter in DRIVER_REMOVALS {
        if !letters.remove_item(letter) {
            tracing::debug!(letter, "letter was not present");
        }
    }
    writeln!(out, "{letters}")?;

    writeln!(out, "Size: {}", letters.len())?;
    if let Some(picked) = letters.get_random(rng) {
        writeln!(out, "Random pick: {picked}")?;
    }
    if let Some(removed) = letters.remove_random(rng) {
        writeln!(out, "Removed at random: {removed}")?;
        writeln!(out, "Size: {}", letters.len())?;
    }
    Ok(())
}

/// Collect the distinct words of `story` into `words` and print the set.
pub fn run_distinct<W: Write>(
    out: &mut W,
    story: &Path,
    words: &mut StringSet,
) -> Result<(), String> {
    let reader = wordlist::open(story).map_err(|e| e.to_string())?;
    collect_distinct(reader, words).map_err(|e| e.at(story).to_string())?;
    writeln!(out, "{words}").map_err(|e| format!("failed to write output: {e}"))
}

/// Print every word of `text` missing from the dictionary at `dictionary`.
pub fn run_spell<W: Write>(
    out: &mut W,
    dictionary: &Path,
    text: &Path,
    capacity: usize,
) -> Result<(), String> {
    let speller = DictionarySpeller::new(
        wordlist::load_dictionary(dictionary, capacity).map_err(|e| e.to_string())?,
    );
    let words = wordlist::load_tokens(text).map_err(|e| e.to_string())?;
    tracing::info!(
        dictionary_entries = speller.dictionary().len(),
        words = words.len(),
        "spell checking"
    );

    for word in misspelled(&speller, words.iter().map(String::as_str)) {
        writeln!(out, "{word}").map_err(|e| format!("failed to write output: {e}"))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("wordset-cli-{name}-{}", process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn parses_short_and_long_flags() {
        let options =
            parse_options(&args(&["-d", "words", "--capacity=7", "--seed", "3", "text.txt"]))
                .unwrap();
        assert_eq!(options.data_dir, Some(PathBuf::from("words")));
        assert_eq!(options.capacity, Some(7));
        assert_eq!(options.seed, Some(3));
        assert!(!options.help);
        assert_eq!(options.positional, ["text.txt"]);
    }

    #[test]
    fn help_flag() {
        assert!(parse_options(&args(&["-h"])).unwrap().help);
        assert!(parse_options(&args(&["--help"])).unwrap().help);
    }

    #[test]
    fn missing_value_is_an_error() {
        let err = parse_options(&args(&["--seed"])).unwrap_err();
        assert_eq!(err, "--seed requires a value");
    }

    #[test]
    fn bad_numbers_are_errors() {
        assert!(parse_options(&args(&["-c", "many"])).is_err());
        assert!(parse_options(&args(&["-s", "-4"])).is_err());
    }

    #[test]
    fn unknown_option_is_an_error() {
        let err = parse_options(&args(&["--verbose"])).unwrap_err();
        assert_eq!(err, "unknown option: --verbose");
    }

    #[test]
    fn lone_dash_is_positional() {
        assert_eq!(parse_options(&args(&["-"])).unwrap().positional, ["-"]);
    }

    #[test]
    fn negative_capacity_is_rejected() {
        let options = parse_options(&args(&["-c", "-1"])).unwrap();
        assert_eq!(options.capacity, Some(-1));
        let err = options.new_set(19).unwrap_err();
        assert!(err.contains("must not be negative"), "{err}");
    }

    #[test]
    fn capacity_defaults_and_overrides() {
        assert_eq!(Options::default().capacity_or(51).unwrap(), 51);
        let options = parse_options(&args(&["-c", "0"])).unwrap();
        assert_eq!(options.new_set(51).unwrap().capacity(), 0);
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let options = parse_options(&args(&["-s", "99"])).unwrap();
        let a: u64 = options.rng().r#gen();
        let b: u64 = options.rng().r#gen();
        assert_eq!(a, b);
    }

    #[test]
    fn positional_path_wins() {
        let options = parse_options(&args(&["custom.txt"])).unwrap();
        assert_eq!(
            options.data_file(0, STORY_FILE).unwrap(),
            PathBuf::from("custom.txt")
        );
    }

    #[test]
    fn data_dir_is_searched_first() {
        let dir = scratch_dir("search");
        std::fs::write(dir.join("words.txt"), "x\n").unwrap();
        let found = find_data_file("words.txt", Some(&dir)).unwrap();
        assert_eq!(found, dir.join("words.txt"));
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_data_file_lists_search_paths() {
        let dir = scratch_dir("missing");
        let err = find_data_file("no-such-file.txt", Some(&dir)).unwrap_err();
        assert!(err.starts_with("could not find no-such-file.txt"));
        assert!(err.contains(&dir.display().to_string()));
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn banner_layout() {
        let mut out = Vec::new();
        write_banner(&mut out, "driver function").unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\n******************************************\n\
             *\tRunning driver function...\n\
             ******************************************\n\n"
        );
    }

    #[test]
    fn driver_output() {
        let mut out = Vec::new();
        let mut letters = StringSet::default();
        let mut rng = StdRng::seed_from_u64(0);
        run_driver(&mut out, &mut letters, &mut rng).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("Printing letters\n3\tb\n4\tP c\n"));
        assert!(text.contains("Does the set contain 'e'? yes\n"));
        assert!(text.contains("Does the set contain 'a'? no\n"));
        assert!(text.contains(
            "After removing e, P, i, D, and i:\n3\tb\n4\tc\n5\tQ\n7\tf y\n"
        ));
        assert!(text.contains("Size: 16\n"));
        assert!(text.contains("Random pick: "));
        assert!(text.ends_with("Size: 15\n"));
        assert_eq!(letters.len(), 15);
    }

    #[test]
    fn distinct_and_spell_programs() {
        let dir = scratch_dir("programs");
        let story = dir.join(STORY_FILE);
        let dictionary = dir.join(DICTIONARY_FILE);
        let text = dir.join(TEST_FILE);
        std::fs::write(&story, "Eggs and ham.\nHam and eggs!\n").unwrap();
        std::fs::write(&dictionary, "eggs\nand\nham\n").unwrap();
        std::fs::write(&text, "Eggs and spam,\nham and speggs.\n").unwrap();

        let mut out = Vec::new();
        let mut words = StringSet::new(1);
        run_distinct(&mut out, &story, &mut words).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "0\tham and eggs\n\n");

        let mut out = Vec::new();
        run_spell(&mut out, &dictionary, &text, 101).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "spam\nspeggs\n");

        let err = run_spell(&mut Vec::new(), &dir.join("nope.txt"), &text, 101).unwrap_err();
        assert!(err.contains("nope.txt"));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
