//! Recipe records as supplied by the dataset loader.

use serde::{Deserialize, Serialize};

use super::{CatalogueError, CatalogueResult};

/// A single cocktail recipe.
///
/// Field names on the wire are capitalised to match the loader's records.
/// Identity is not unique: two records may share a name and ingredient text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(rename = "Name")]
    pub name: String,
    /// Newline-separated ingredient lines.
    #[serde(rename = "Ingredients")]
    pub ingredients: String,
    #[serde(rename = "Rating")]
    pub rating: f64,
}

impl Recipe {
    pub fn new(name: impl Into<String>, ingredients: impl Into<String>, rating: f64) -> Self {
        Self {
            name: name.into(),
            ingredients: ingredients.into(),
            rating,
        }
    }

    /// Iterate over the ingredient lines of this recipe.
    pub fn ingredient_lines(&self) -> impl Iterator<Item = &str> {
        self.ingredients.split('\n')
    }

    /// Parse a JSON array of loader records.
    pub fn list_from_json(json: &str) -> CatalogueResult<Vec<Recipe>> {
        serde_json::from_str(json).map_err(|e| CatalogueError::Records(e.to_string()))
    }
}
