// wordset-distinct: Print the distinct words of a text as a hash set.
//
// Every word of FILE is stripped of non-letters and lowercased, then added
// to a 51-bucket set unless already present. The set is printed one
// bucket per line:
//   <bucket>\t<word> <word> ...
//
// Usage:
//   wordset-distinct [-d DATA_DIR] [OPTIONS] [FILE]
//
// FILE defaults to greenEggs.txt in the data directory.
//
// Options:
//   -d, --data-dir PATH   Directory containing the data files
//   -c, --capacity N      Bucket count (default 51)
//   -h, --help            Print help

use std::io::{self, Write};

use wordset_text::distinct::DISTINCT_CAPACITY;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = wordset_cli::parse_options(&args).unwrap_or_else(|e| wordset_cli::fatal(&e));

    if options.help {
        println!("wordset-distinct: Print the distinct words of a text as a hash set.");
        println!();
        println!("Usage: wordset-distinct [-d DATA_DIR] [OPTIONS] [FILE]");
        println!();
        println!("FILE defaults to {} in the data directory.", wordset_cli::STORY_FILE);
        println!();
        println!("Options:");
        println!("  -d, --data-dir PATH   Directory containing the data files");
        println!("  -c, --capacity N      Bucket count (default {DISTINCT_CAPACITY})");
        println!("  -h, --help            Print this help");
        return;
    }

    wordset_cli::init_logging().unwrap_or_else(|e| wordset_cli::fatal(&e));

    let story = options
        .data_file(0, wordset_cli::STORY_FILE)
        .unwrap_or_else(|e| wordset_cli::fatal(&e));
    let mut words = options
        .new_set(DISTINCT_CAPACITY)
        .unwrap_or_else(|e| wordset_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    wordset_cli::run_distinct(&mut out, &story, &mut words)
        .unwrap_or_else(|e| wordset_cli::fatal(&e));
    let _ = out.flush();
}
