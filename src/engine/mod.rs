//! Text analysis, filtering, aggregation and state encoding.

pub mod brands;
pub mod catalogue;
pub mod predicate;
pub mod state_codec;
pub mod tokenizer;
