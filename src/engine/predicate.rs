//! Recipe predicates (enabled filter terms and free-text query) and sorting.

use std::cmp::Ordering;

use crate::engine::tokenizer::split_tokens;
use crate::types::{FilterTermSet, Recipe, SortOrder, UiState};

/// Separator between AND-ed pieces of a recipe search query.
pub const AND_SEPARATOR: &str = "&&";

/// True when every enabled filter term occurs in the recipe's ingredients
/// (merged phrases restored, lower-cased). Vacuously true with nothing enabled.
pub fn has_all_filter_terms(recipe: &Recipe, filter_terms: &FilterTermSet) -> bool {
    let mut enabled = filter_terms.enabled().peekable();
    if enabled.peek().is_none() {
        return true;
    }
    let corpus = split_tokens(&recipe.ingredients).to_lowercase();
    enabled.all(|term| corpus.contains(&term.to_lowercase()))
}

/// Split a free-text query into its lower-cased AND pieces.
///
/// Stray `&` characters and surrounding whitespace are removed from each
/// piece; empty pieces are dropped.
pub fn query_pieces(filter_text: &str) -> Vec<String> {
    filter_text
        .split(AND_SEPARATOR)
        .map(|piece| piece.replace('&', "").trim().to_lowercase())
        .filter(|piece| !piece.is_empty())
        .collect()
}

/// True when every piece of the query occurs in `"{name} {ingredients}"`.
/// An empty query matches everything.
pub fn has_filter_text(recipe: &Recipe, filter_text: &str) -> bool {
    if filter_text.is_empty() {
        return true;
    }
    let corpus = format!("{} {}", recipe.name, recipe.ingredients).to_lowercase();
    query_pieces(filter_text)
        .iter()
        .all(|piece| corpus.contains(piece.as_str()))
}

/// Combined recipe predicate.
pub fn matches(recipe: &Recipe, filter_terms: &FilterTermSet, filter_text: &str) -> bool {
    has_all_filter_terms(recipe, filter_terms) && has_filter_text(recipe, filter_text)
}

/// Order recipes in place. `Date` keeps input order; `Rating` is a stable
/// descending sort.
pub fn sort_recipes(recipes: &mut [&Recipe], order: SortOrder) {
    match order {
        SortOrder::Date => {}
        SortOrder::Rating => recipes.sort_by(|a, b| {
            b.rating
                .partial_cmp(&a.rating)
                .unwrap_or(Ordering::Equal)
        }),
    }
}

/// Recipes visible under `state`, filtered then sorted.
pub fn visible_recipes<'a>(recipes: &'a [Recipe], state: &UiState) -> Vec<&'a Recipe> {
    let mut visible: Vec<&Recipe> = recipes
        .iter()
        .filter(|r| matches(r, &state.filter_terms, &state.filter_text))
        .collect();
    sort_recipes(&mut visible, state.sort_order);
    visible
}
