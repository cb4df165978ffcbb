//! Recipe and brand views over a fixed recipe collection.
//!
//! Both views are read-only over their recipes. The recipe view's UI state
//! is held by the caller and threaded through explicitly.

use log::warn;

use crate::engine::brands::{aggregate, filter_aggregates, BrandAggregate};
use crate::engine::predicate::visible_recipes;
use crate::engine::state_codec::{decode_fragment, share_fragment};
use crate::engine::tokenizer::Tokenizer;
use crate::index::rank;
use crate::types::{
    CatalogueConfig, CatalogueResult, FilterTermSet, Recipe, SortOrder, UiState, WordLists,
};

/// Outcome of restoring state from a location fragment at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Restored {
    pub state: UiState,
    /// The fragment held an undecodable token and should be cleared.
    pub clear_fragment: bool,
}

/// Recipe view: ranked filter terms, free-text search and sorting.
pub struct RecipeCatalogue {
    recipes: Vec<Recipe>,
    tokenizer: Tokenizer,
    num_filters: usize,
}

impl RecipeCatalogue {
    pub fn new(recipes: Vec<Recipe>, config: &CatalogueConfig) -> CatalogueResult<Self> {
        Ok(Self {
            recipes,
            tokenizer: Tokenizer::new(&config.words)?,
            num_filters: config.num_filters,
        })
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// The most frequent ingredient terms, most frequent first.
    pub fn ranked_terms(&self) -> Vec<String> {
        rank(&self.recipes, &self.tokenizer, self.num_filters)
    }

    /// Initial state derived from the recipes: every ranked term disabled,
    /// no search text, dataset order.
    pub fn fresh_state(&self) -> UiState {
        UiState::new(FilterTermSet::initialize(self.ranked_terms()))
    }

    /// Restore state from the location fragment read at startup.
    ///
    /// No fragment yields fresh state. An undecodable fragment also yields
    /// fresh state and asks the caller to clear the fragment.
    pub fn restore(&self, fragment: Option<&str>) -> Restored {
        let Some(fragment) = fragment.filter(|f| !f.is_empty()) else {
            return Restored {
                state: self.fresh_state(),
                clear_fragment: false,
            };
        };

        match decode_fragment(fragment) {
            Ok(decoded) => Restored {
                state: decoded
                    .complete(|| FilterTermSet::initialize(self.ranked_terms())),
                clear_fragment: false,
            },
            Err(e) => {
                warn!("discarding share token: {}", e);
                Restored {
                    state: self.fresh_state(),
                    clear_fragment: true,
                }
            }
        }
    }

    pub fn toggle_term(&self, state: &UiState, term: &str) -> UiState {
        state.toggle_term(term)
    }

    /// Store user-typed search text, merging configured phrases first.
    pub fn search(&self, state: &UiState, text: &str) -> UiState {
        state.with_filter_text(self.tokenizer.merge_query(text))
    }

    pub fn sort_by(&self, state: &UiState, sort_order: SortOrder) -> UiState {
        state.with_sort_order(sort_order)
    }

    /// Recipes matching `state`, in `state`'s sort order.
    pub fn visible(&self, state: &UiState) -> Vec<&Recipe> {
        visible_recipes(&self.recipes, state)
    }

    /// Location fragment to publish after a state transition.
    pub fn share_fragment(&self, state: &UiState) -> CatalogueResult<String> {
        share_fragment(state)
    }
}

/// Brand view: mean rating and support per configured brand.
pub struct BrandCatalogue {
    recipes: Vec<Recipe>,
    brands: Vec<String>,
}

impl BrandCatalogue {
    pub fn new(recipes: Vec<Recipe>, words: &WordLists) -> Self {
        Self {
            recipes,
            brands: words.brands.clone(),
        }
    }

    /// Aggregates matching the brand search `query`, best mean first.
    /// Recomputed on every call.
    pub fn ratings(&self, query: &str) -> Vec<BrandAggregate> {
        filter_aggregates(aggregate(&self.recipes, &self.brands), query)
    }
}
