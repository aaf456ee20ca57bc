// Collecting the distinct words of a text into a set

use std::io::BufRead;

use wordset_core::StringSet;

use crate::TextError;
use crate::normalize::tokens;

/// Bucket count for distinct-word collection in the demo programs.
pub const DISTINCT_CAPACITY: usize = 51;

/// Add every normalized token of `reader` to `set` unless it is already
/// present. Returns how many words were newly added.
pub fn collect_distinct<R: BufRead>(reader: R, set: &mut StringSet) -> Result<usize, TextError> {
    let mut added = 0;
    for line in reader.lines() {
        for word in tokens(&line?) {
            if set.add_unique(word) {
                added += 1;
            }
        }
    }
    tracing::debug!(added, total = set.len(), "distinct words collected");
    Ok(added)
}
