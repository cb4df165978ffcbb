//! Lexicon and engine configuration.
//!
//! The word lists are plain data handed in by the caller. Nothing here reads
//! files; documents are parsed from strings the caller already loaded.

use serde::{Deserialize, Serialize};

use super::{CatalogueError, CatalogueResult};

/// Default number of candidate filter terms offered to the user.
pub const DEFAULT_NUM_FILTERS: usize = 10;

/// The configured lexicon used by the tokenizer and the brand aggregator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WordLists {
    /// Multi-word phrases kept together as one token (e.g. "dry gin").
    #[serde(default)]
    pub combined: Vec<String>,
    /// Known brand names. Also merged as phrases.
    #[serde(default)]
    pub brands: Vec<String>,
    /// An ingredient line containing any of these is discarded.
    #[serde(default)]
    pub blacklist: Vec<String>,
    /// Unit and quantity words; any token containing one is discarded.
    #[serde(default)]
    pub quantity: Vec<String>,
}

impl WordLists {
    /// Phrases to merge, `combined` first then `brands`, without duplicates.
    pub fn merge_phrases(&self) -> Vec<&str> {
        let mut phrases: Vec<&str> = Vec::with_capacity(self.combined.len() + self.brands.len());
        for phrase in self.combined.iter().chain(self.brands.iter()) {
            if !phrases.contains(&phrase.as_str()) {
                phrases.push(phrase);
            }
        }
        phrases
    }

    /// Reject blank entries. A blank blacklist or quantity word would match
    /// everything, and a blank phrase cannot be merged.
    pub fn validate(&self) -> CatalogueResult<()> {
        let lists = [
            ("combined", &self.combined),
            ("brands", &self.brands),
            ("blacklist", &self.blacklist),
            ("quantity", &self.quantity),
        ];
        for (name, list) in lists {
            if let Some(pos) = list.iter().position(|w| w.trim().is_empty()) {
                return Err(CatalogueError::Config(format!(
                    "{} entry {} is blank",
                    name, pos
                )));
            }
        }
        Ok(())
    }
}

/// Engine configuration: how many filter terms to offer and the lexicon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogueConfig {
    #[serde(default = "default_num_filters")]
    pub num_filters: usize,
    #[serde(default)]
    pub words: WordLists,
}

fn default_num_filters() -> usize {
    DEFAULT_NUM_FILTERS
}

impl Default for CatalogueConfig {
    fn default() -> Self {
        Self {
            num_filters: DEFAULT_NUM_FILTERS,
            words: WordLists::default(),
        }
    }
}

impl CatalogueConfig {
    /// Parse and validate a TOML configuration document.
    pub fn from_toml_str(doc: &str) -> CatalogueResult<Self> {
        let config: Self =
            toml::from_str(doc).map_err(|e| CatalogueError::ConfigFormat(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON configuration document.
    pub fn from_json_str(doc: &str) -> CatalogueResult<Self> {
        let config: Self =
            serde_json::from_str(doc).map_err(|e| CatalogueError::ConfigFormat(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> CatalogueResult<()> {
        self.words.validate()
    }
}
