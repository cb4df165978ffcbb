//! Ingredient-text tokenizer used for filter-term ranking and query merging.

use log::trace;
use regex::{NoExpand, Regex, RegexBuilder};

use crate::types::{CatalogueError, CatalogueResult, WordLists};

/// Joiner placed between the words of a merged phrase so that the phrase
/// survives whitespace splitting as one unit. The dataset uses the same
/// representation, so merged query text matches raw ingredient text.
pub const PHRASE_JOINER: char = '_';

const PARENTHETICAL: &str = r"\([^)]*\)";

/// A configured phrase compiled for case-insensitive literal replacement.
struct Phrase {
    pattern: Regex,
    /// Phrase text with internal spaces replaced by [`PHRASE_JOINER`].
    merged: String,
}

impl Phrase {
    fn compile(phrase: &str) -> CatalogueResult<Self> {
        let pattern = RegexBuilder::new(&regex::escape(phrase))
            .case_insensitive(true)
            .build()
            .map_err(|source| CatalogueError::Pattern {
                phrase: phrase.to_string(),
                source,
            })?;
        Ok(Self {
            pattern,
            merged: phrase.replace(' ', &PHRASE_JOINER.to_string()),
        })
    }
}

/// Restore merged phrases to their natural spelling.
pub fn split_tokens(text: &str) -> String {
    text.replace(PHRASE_JOINER, " ")
}

/// Tokenizer configured with an explicit lexicon.
///
/// Per ingredient line: drop the line if it contains a blacklist word,
/// merge configured phrases, split on single spaces, then clean each word
/// (parentheticals removed, phrase joiners restored, non-letters stripped,
/// lower-cased) and drop it if it contains a quantity word.
pub struct Tokenizer {
    /// `combined` phrases first, then brands. Order is significant when
    /// phrases overlap.
    phrases: Vec<Phrase>,
    /// How many leading entries of `phrases` came from `combined`.
    combined_len: usize,
    blacklist: Vec<String>,
    quantity: Vec<String>,
    parenthetical: Regex,
}

impl Tokenizer {
    pub fn new(words: &WordLists) -> CatalogueResult<Self> {
        let merge_phrases = words.merge_phrases();
        let combined_len = merge_phrases
            .iter()
            .take_while(|p| words.combined.iter().any(|c| c == *p))
            .count();
        let phrases = merge_phrases
            .into_iter()
            .map(Phrase::compile)
            .collect::<CatalogueResult<Vec<_>>>()?;
        let parenthetical = Regex::new(PARENTHETICAL).map_err(|source| CatalogueError::Pattern {
            phrase: PARENTHETICAL.to_string(),
            source,
        })?;

        Ok(Self {
            phrases,
            combined_len,
            blacklist: words.blacklist.clone(),
            quantity: words.quantity.iter().map(|q| q.to_lowercase()).collect(),
            parenthetical,
        })
    }

    /// Tokenize a full ingredient list (newline-separated lines).
    pub fn tokenize(&self, ingredients: &str) -> Vec<String> {
        ingredients
            .split('\n')
            .flat_map(|line| self.tokenize_line(line))
            .collect()
    }

    /// Tokenize a single ingredient line.
    pub fn tokenize_line(&self, line: &str) -> Vec<String> {
        if self.is_blacklisted(line) {
            trace!("dropping blacklisted line {:?}", line);
            return Vec::new();
        }

        Self::merge_with(&self.phrases, line)
            .split(' ')
            .filter_map(|raw| self.clean_word(raw))
            .filter(|word| !self.is_quantity(word))
            .collect()
    }

    /// Merge every configured phrase (combined and brands) in `text`.
    pub fn merge_phrases(&self, text: &str) -> String {
        Self::merge_with(&self.phrases, text)
    }

    /// Merge only the `combined` phrases. Applied to user-typed search text
    /// before it is stored in the UI state.
    pub fn merge_query(&self, text: &str) -> String {
        Self::merge_with(&self.phrases[..self.combined_len], text)
    }

    pub fn is_blacklisted(&self, line: &str) -> bool {
        self.blacklist.iter().any(|w| line.contains(w.as_str()))
    }

    fn is_quantity(&self, word: &str) -> bool {
        self.quantity.iter().any(|q| word.contains(q.as_str()))
    }

    fn merge_with(phrases: &[Phrase], text: &str) -> String {
        let mut merged = text.to_string();
        for phrase in phrases {
            merged = phrase
                .pattern
                .replace_all(&merged, NoExpand(&phrase.merged))
                .into_owned();
        }
        merged
    }

    fn clean_word(&self, raw: &str) -> Option<String> {
        let without_parens = self.parenthetical.replace_all(raw, "");
        let word: String = split_tokens(&without_parens)
            .chars()
            .filter(|c| c.is_ascii_alphabetic() || *c == ' ')
            .collect();
        if word.is_empty() {
            None
        } else {
            Some(word.to_ascii_lowercase())
        }
    }
}
