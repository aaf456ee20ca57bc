// Token cleanup: letter filtering and case folding

/// Whether `c` survives cleanup. Only ASCII letters are kept; digits,
/// punctuation, apostrophes and non-ASCII letters are all dropped.
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Remove every character that is not an ASCII letter, keeping case.
///
/// Used for dictionary entries, which are stored exactly as listed.
pub fn strip_non_letters(text: &str) -> String {
    text.chars().filter(|&c| is_word_char(c)).collect()
}

/// Remove every non-letter and lowercase what is left.
///
/// Returns `None` if no letters remain, so callers never hand an empty
/// string to a set.
pub fn normalize_token(token: &str) -> Option<String> {
    let word: String = token
        .chars()
        .filter(|&c| is_word_char(c))
        .map(|c| c.to_ascii_lowercase())
        .collect();
    if word.is_empty() { None } else { Some(word) }
}

/// Split `line` on single spaces and normalize each piece.
///
/// Pieces with no letters (runs of spaces, bare punctuation, numbers) are
/// skipped.
pub fn tokens(line: &str) -> impl Iterator<Item = String> + '_ {
    line.split(' ').filter_map(normalize_token)
}
