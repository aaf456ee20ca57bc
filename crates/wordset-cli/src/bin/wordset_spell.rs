// wordset-spell: Report words of a text that are not in the dictionary.
//
// Loads dictionary.txt (one word per line, non-letters stripped, case
// kept) into a 10 000-bucket set, then prints every word of TEXT, stripped
// and lowercased, that the dictionary does not contain. Words are printed
// in text order, once per occurrence.
//
// Usage:
//   wordset-spell [-d DATA_DIR] [OPTIONS] [TEXT] [DICTIONARY]
//
// TEXT defaults to test.txt and DICTIONARY to dictionary.txt in the data
// directory.
//
// Options:
//   -d, --data-dir PATH   Directory containing the data files
//   -c, --capacity N      Dictionary bucket count (default 10000)
//   -h, --help            Print help

use std::io::{self, Write};

use wordset_text::wordlist::DEFAULT_DICTIONARY_CAPACITY;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = wordset_cli::parse_options(&args).unwrap_or_else(|e| wordset_cli::fatal(&e));

    if options.help {
        println!("wordset-spell: Report words of a text that are not in the dictionary.");
        println!();
        println!("Usage: wordset-spell [-d DATA_DIR] [OPTIONS] [TEXT] [DICTIONARY]");
        println!();
        println!(
            "TEXT defaults to {} and DICTIONARY to {} in the data directory.",
            wordset_cli::TEST_FILE,
            wordset_cli::DICTIONARY_FILE
        );
        println!();
        println!("Options:");
        println!("  -d, --data-dir PATH   Directory containing the data files");
        println!(
            "  -c, --capacity N      Dictionary bucket count (default {DEFAULT_DICTIONARY_CAPACITY})"
        );
        println!("  -h, --help            Print this help");
        return;
    }

    wordset_cli::init_logging().unwrap_or_else(|e| wordset_cli::fatal(&e));

    let text = options
        .data_file(0, wordset_cli::TEST_FILE)
        .unwrap_or_else(|e| wordset_cli::fatal(&e));
    let dictionary = options
        .data_file(1, wordset_cli::DICTIONARY_FILE)
        .unwrap_or_else(|e| wordset_cli::fatal(&e));
    let capacity = options
        .capacity_or(DEFAULT_DICTIONARY_CAPACITY)
        .unwrap_or_else(|e| wordset_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    wordset_cli::run_spell(&mut out, &dictionary, &text, capacity)
        .unwrap_or_else(|e| wordset_cli::fatal(&e));
    let _ = out.flush();
}
