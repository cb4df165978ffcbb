//! Data model: recipes, lexicon configuration, UI state and errors.

pub mod config;
pub mod error;
pub mod recipe;
pub mod state;

pub use config::{CatalogueConfig, WordLists, DEFAULT_NUM_FILTERS};
pub use error::{CatalogueError, CatalogueResult, DecodeError};
pub use recipe::Recipe;
pub use state::{DecodedState, FilterTerm, FilterTermSet, SortOrder, UiState};
