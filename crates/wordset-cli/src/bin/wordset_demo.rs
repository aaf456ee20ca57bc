// wordset-demo: Run the driver, distinct-word and spell programs in turn.
//
// Each program is preceded by a banner. Data files (greenEggs.txt,
// dictionary.txt, test.txt) are looked up in the data directory.
//
// Usage:
//   wordset-demo [-d DATA_DIR] [OPTIONS]
//
// Options:
//   -d, --data-dir PATH   Directory containing the data files
//   -s, --seed N          Seed for the driver's random pick
//   -h, --help            Print help

use std::io::{self, Write};

use wordset_core::{DEFAULT_CAPACITY, StringSet};
use wordset_text::distinct::DISTINCT_CAPACITY;
use wordset_text::wordlist::DEFAULT_DICTIONARY_CAPACITY;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = wordset_cli::parse_options(&args).unwrap_or_else(|e| wordset_cli::fatal(&e));

    if options.help {
        println!("wordset-demo: Run the driver, distinct-word and spell programs in turn.");
        println!();
        println!("Usage: wordset-demo [-d DATA_DIR] [OPTIONS]");
        println!();
        println!("Options:");
        println!("  -d, --data-dir PATH   Directory containing the data files");
        println!("  -s, --seed N          Seed for the driver's random pick");
        println!("  -h, --help            Print this help");
        return;
    }
    if options.capacity.is_some() {
        wordset_cli::fatal("wordset-demo uses fixed bucket counts; --capacity is not supported");
    }

    wordset_cli::init_logging().unwrap_or_else(|e| wordset_cli::fatal(&e));

    let story = wordset_cli::find_data_file(wordset_cli::STORY_FILE, options.data_dir.as_deref())
        .unwrap_or_else(|e| wordset_cli::fatal(&e));
    let text = wordset_cli::find_data_file(wordset_cli::TEST_FILE, options.data_dir.as_deref())
        .unwrap_or_else(|e| wordset_cli::fatal(&e));
    let dictionary =
        wordset_cli::find_data_file(wordset_cli::DICTIONARY_FILE, options.data_dir.as_deref())
            .unwrap_or_else(|e| wordset_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    wordset_cli::write_banner(&mut out, "driver function").unwrap_or_else(write_failed);
    let mut letters = StringSet::new(DEFAULT_CAPACITY);
    let mut rng = options.rng();
    wordset_cli::run_driver(&mut out, &mut letters, &mut rng).unwrap_or_else(write_failed);

    wordset_cli::write_banner(&mut out, "seuss function").unwrap_or_else(write_failed);
    let mut words = StringSet::new(DISTINCT_CAPACITY);
    wordset_cli::run_distinct(&mut out, &story, &mut words)
        .unwrap_or_else(|e| wordset_cli::fatal(&e));

    wordset_cli::write_banner(&mut out, "spell function").unwrap_or_else(write_failed);
    wordset_cli::run_spell(&mut out, &dictionary, &text, DEFAULT_DICTIONARY_CAPACITY)
        .unwrap_or_else(|e| wordset_cli::fatal(&e));

    out.flush().unwrap_or_else(write_failed);
}

fn write_failed(e: io::Error) {
    wordset_cli::fatal(&format!("failed to write output: {e}"));
}
