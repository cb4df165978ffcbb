//! Term frequency table over a recipe collection.

use std::collections::HashMap;

use log::debug;

use crate::engine::tokenizer::Tokenizer;
use crate::types::Recipe;

/// Occurrence counts of every token produced by the tokenizer across a
/// recipe collection, remembering the order in which terms were first seen.
pub struct TermFrequencies {
    /// term → index into `entries`
    positions: HashMap<String, usize>,
    /// (term, count) in first-seen order
    entries: Vec<(String, u32)>,
    /// Total number of tokens counted.
    token_count: u64,
}

impl TermFrequencies {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            positions: HashMap::new(),
            entries: Vec::new(),
            token_count: 0,
        }
    }

    /// Tokenize every recipe's ingredients and count the tokens.
    pub fn build(recipes: &[Recipe], tokenizer: &Tokenizer) -> Self {
        let mut table = Self::new();
        for recipe in recipes {
            for token in tokenizer.tokenize(&recipe.ingredients) {
                table.add(token);
            }
        }
        debug!(
            "counted {} tokens ({} distinct) over {} recipes",
            table.token_count,
            table.term_count(),
            recipes.len()
        );
        table
    }

    /// Count one occurrence of `term`.
    pub fn add(&mut self, term: String) {
        self.token_count += 1;
        if let Some(&pos) = self.positions.get(&term) {
            self.entries[pos].1 += 1;
            return;
        }
        self.positions.insert(term.clone(), self.entries.len());
        self.entries.push((term, 1));
    }

    /// Occurrence count of a term.
    pub fn get(&self, term: &str) -> u32 {
        self.positions
            .get(term)
            .map(|&pos| self.entries[pos].1)
            .unwrap_or(0)
    }

    /// Number of distinct terms.
    pub fn term_count(&self) -> usize {
        self.entries.len()
    }

    /// Total number of tokens counted.
    pub fn token_count(&self) -> u64 {
        self.token_count
    }

    /// The `k` most frequent terms, most frequent first. Ties keep
    /// first-seen order. Fewer than `k` are returned when the table is small.
    pub fn most_common(&self, k: usize) -> Vec<String> {
        let mut ranked: Vec<&(String, u32)> = self.entries.iter().collect();
        // Stable sort keeps first-seen order among equal counts.
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
            .into_iter()
            .take(k)
            .map(|(term, _)| term.clone())
            .collect()
    }
}

impl Default for TermFrequencies {
    fn default() -> Self {
        Self::new()
    }
}

/// Rank the `top_k` most frequent ingredient terms across `recipes`.
pub fn rank(recipes: &[Recipe], tokenizer: &Tokenizer, top_k: usize) -> Vec<String> {
    TermFrequencies::build(recipes, tokenizer).most_common(top_k)
}
