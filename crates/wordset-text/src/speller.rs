// Dictionary-backed spell checking

use wordset_core::StringSet;

/// Outcome of checking one word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpellResult {
    /// The word is in the dictionary.
    Ok,
    /// The word is not in the dictionary.
    Failed,
}

/// Trait for spell checkers.
///
/// Words are expected to be normalized already (see
/// [`normalize_token`](crate::normalize::normalize_token)); implementations
/// do no case folding of their own.
pub trait Speller {
    fn spell(&self, word: &str) -> SpellResult;

    fn is_misspelled(&self, word: &str) -> bool {
        self.spell(word) == SpellResult::Failed
    }
}

/// Spell checker that accepts exactly the entries of a [`StringSet`].
pub struct DictionarySpeller {
    dictionary: StringSet,
}

impl DictionarySpeller {
    pub fn new(dictionary: StringSet) -> Self {
        Self { dictionary }
    }

    pub fn dictionary(&self) -> &StringSet {
        &self.dictionary
    }

    pub fn into_dictionary(self) -> StringSet {
        self.dictionary
    }
}

impl Speller for DictionarySpeller {
    fn spell(&self, word: &str) -> SpellResult {
        if self.dictionary.contains(word) {
            SpellResult::Ok
        } else {
            SpellResult::Failed
        }
    }
}

/// Every word of `words` the speller rejects, in input order.
///
/// Repeated misspellings are reported once per occurrence.
pub fn misspelled<'a, S, I>(speller: &S, words: I) -> Vec<&'a str>
where
    S: Speller + ?Sized,
    I: IntoIterator<Item = &'a str>,
{
    words
        .into_iter()
        .filter(|word| speller.is_misspelled(word))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn speller(words: &[&str]) -> DictionarySpeller {
        let mut dictionary = StringSet::new(31);
        dictionary.extend(words.iter().copied());
        DictionarySpeller::new(dictionary)
    }

    #[test]
    fn known_word_is_ok() {
        let speller = speller(&["green", "eggs", "ham"]);
        assert_eq!(speller.spell("eggs"), SpellResult::Ok);
        assert!(!speller.is_misspelled("ham"));
    }

    #[test]
    fn unknown_word_fails() {
        let speller = speller(&["green", "eggs", "ham"]);
        assert_eq!(speller.spell("spam"), SpellResult::Failed);
        assert!(speller.is_misspelled("spam"));
    }

    #[test]
    fn empty_word_is_misspelled() {
        // The dictionary never stores "", so it can never be found.
        assert!(speller(&["a"]).is_misspelled(""));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let speller = speller(&["Sam"]);
        assert!(speller.is_misspelled("sam"));
        assert!(!speller.is_misspelled("Sam"));
    }

    #[test]
    fn misspelled_keeps_order_and_repeats() {
        let speller = speller(&["i", "do", "not", "like", "them"]);
        let words = ["i", "do", "nto", "like", "thme", "nto"];
        assert_eq!(misspelled(&speller, words), ["nto", "thme", "nto"]);
    }

    #[test]
    fn works_through_trait_object() {
        let speller = speller(&["ok"]);
        let dyn_speller: &dyn Speller = &speller;
        assert_eq!(misspelled(dyn_speller, ["ok", "ko"]), ["ko"]);
    }

    #[test]
    fn dictionary_round_trip() {
        let speller = speller(&["x", "y"]);
        assert_eq!(speller.dictionary().len(), 2);
        assert_eq!(speller.into_dictionary().len(), 2);
    }
}
