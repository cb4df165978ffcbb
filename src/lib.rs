//! Cocktail catalogue engine.
//!
//! Tokenizes free-text ingredient lists, ranks the most frequent terms as
//! candidate filters, evaluates recipe search predicates, aggregates
//! per-brand ratings and encodes the recipe view state as a share token.

pub mod engine;
pub mod index;
pub mod types;

pub use engine::brands::{aggregate, filter_aggregates, BrandAggregate, BrandFilter};
pub use engine::catalogue::{BrandCatalogue, RecipeCatalogue, Restored};
pub use engine::predicate::{
    has_all_filter_terms, has_filter_text, matches, query_pieces, sort_recipes, visible_recipes,
};
pub use engine::state_codec::{decode, decode_fragment, encode, share_fragment, SHARE_PREFIX};
pub use engine::tokenizer::{split_tokens, Tokenizer, PHRASE_JOINER};
pub use index::{rank, TermFrequencies};
pub use types::{
    CatalogueConfig, CatalogueError, CatalogueResult, DecodeError, DecodedState, FilterTerm,
    FilterTermSet, Recipe, SortOrder, UiState, WordLists, DEFAULT_NUM_FILTERS,
};
