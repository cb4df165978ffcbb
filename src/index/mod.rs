//! Frequency index over recipe ingredient tokens.

pub mod term_frequency;

pub use term_frequency::{rank, TermFrequencies};
