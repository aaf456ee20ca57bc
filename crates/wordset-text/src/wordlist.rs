// Reading word sources into vectors and sets

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use wordset_core::StringSet;

use crate::TextError;
use crate::normalize::{strip_non_letters, tokens};

/// Bucket count used for dictionaries when the caller has no preference.
pub const DEFAULT_DICTIONARY_CAPACITY: usize = 10_000;

/// Collect every normalized token of every line, in reading order.
///
/// Duplicates are kept; each occurrence is a separate word to check.
pub fn read_tokens<R: BufRead>(reader: R) -> Result<Vec<String>, TextError> {
    let mut words = Vec::new();
    for line in reader.lines() {
        words.extend(tokens(&line?));
    }
    Ok(words)
}

/// Build a dictionary set with one entry per line.
///
/// Non-letters are stripped but case is preserved. Lines with no letters
/// are skipped. Entries are added without a duplicate check.
pub fn read_dictionary<R: BufRead>(reader: R, capacity: usize) -> Result<StringSet, TextError> {
    let mut dictionary = StringSet::new(capacity);
    for line in reader.lines() {
        let word = strip_non_letters(&line?);
        if word.is_empty() {
            continue;
        }
        dictionary.add(word);
    }
    tracing::debug!(
        entries = dictionary.len(),
        occupied = dictionary.occupied_buckets(),
        capacity,
        "dictionary loaded"
    );
    Ok(dictionary)
}

/// Open `path` for buffered line reading.
pub fn open(path: &Path) -> Result<BufReader<File>, TextError> {
    tracing::debug!(path = %path.display(), "opening word list");
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| TextError::Io {
            path: path.to_path_buf(),
            source,
        })
}

/// [`read_tokens`] on the file at `path`.
pub fn load_tokens(path: &Path) -> Result<Vec<String>, TextError> {
    read_tokens(open(path)?).map_err(|e| e.at(path))
}

/// [`read_dictionary`] on the file at `path`.
pub fn load_dictionary(path: &Path, capacity: usize) -> Result<StringSet, TextError> {
    read_dictionary(open(path)?, capacity).map_err(|e| e.at(path))
}
