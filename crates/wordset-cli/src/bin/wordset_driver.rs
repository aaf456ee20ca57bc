// wordset-driver: Walk a string set through the letter scenario.
//
// Adds twenty letters ("E" twice) to a 19-bucket set, prints the bucket
// layout, answers two membership questions, removes e, P, i, D and i
// (the second "i" is already gone), prints the layout again and finally
// picks and removes one letter at random.
//
// Usage:
//   wordset-driver [OPTIONS]
//
// Options:
//   -c, --capacity N   Bucket count (default 19)
//   -s, --seed N       Seed for the random pick
//   -h, --help         Print help

use std::io::{self, Write};

use wordset_core::DEFAULT_CAPACITY;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = wordset_cli::parse_options(&args).unwrap_or_else(|e| wordset_cli::fatal(&e));

    if options.help {
        println!("wordset-driver: Walk a string set through the letter scenario.");
        println!();
        println!("Usage: wordset-driver [OPTIONS]");
        println!();
        println!("Options:");
        println!("  -c, --capacity N   Bucket count (default {DEFAULT_CAPACITY})");
        println!("  -s, --seed N       Seed for the random pick");
        println!("  -h, --help         Print this help");
        return;
    }

    wordset_cli::init_logging().unwrap_or_else(|e| wordset_cli::fatal(&e));

    let mut letters = options
        .new_set(DEFAULT_CAPACITY)
        .unwrap_or_else(|e| wordset_cli::fatal(&e));
    let mut rng = options.rng();

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    wordset_cli::run_driver(&mut out, &mut letters, &mut rng)
        .and_then(|()| out.flush())
        .unwrap_or_else(|e| wordset_cli::fatal(&format!("failed to write output: {e}")));
}
