//! UI filter/sort state and its transitions.
//!
//! State is an immutable value: every transition returns a new [`UiState`]
//! and leaves the old one untouched, so change detection is a plain `==`.

use serde::{Deserialize, Deserializer, Serialize};

/// A ranked term offered as a toggleable filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterTerm {
    pub term: String,
    pub enabled: bool,
}

impl FilterTerm {
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            enabled: false,
        }
    }
}

/// Ordered set of filter terms. Order is the frequency rank at creation
/// time and never changes; toggling only flips flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterTermSet {
    terms: Vec<FilterTerm>,
}

impl FilterTermSet {
    /// Every ranked term starts disabled.
    pub fn initialize<I, S>(ranked: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            terms: ranked.into_iter().map(FilterTerm::new).collect(),
        }
    }

    /// Return a copy with `term`'s flag flipped. Unknown terms are a no-op.
    pub fn toggle(&self, term: &str) -> Self {
        Self {
            terms: self
                .terms
                .iter()
                .map(|t| FilterTerm {
                    term: t.term.clone(),
                    enabled: if t.term == term { !t.enabled } else { t.enabled },
                })
                .collect(),
        }
    }

    pub fn terms(&self) -> &[FilterTerm] {
        &self.terms
    }

    /// Enabled terms, in rank order.
    pub fn enabled(&self) -> impl Iterator<Item = &str> {
        self.terms
            .iter()
            .filter(|t| t.enabled)
            .map(|t| t.term.as_str())
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Recipe ordering offered by the recipe view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Dataset order.
    #[default]
    Date,
    /// Highest rating first.
    Rating,
}

impl SortOrder {
    pub const ALL: [SortOrder; 2] = [SortOrder::Date, SortOrder::Rating];

    /// The key used on the wire and in the UI.
    pub fn key(&self) -> &'static str {
        match self {
            SortOrder::Date => "date",
            SortOrder::Rating => "rating",
        }
    }

    pub fn from_key(key: &str) -> Option<SortOrder> {
        Self::ALL.into_iter().find(|o| o.key() == key)
    }
}

/// Full recipe-view state: filter terms, free-text query and sort order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiState {
    pub filter_terms: FilterTermSet,
    /// Free-text query, already phrase-merged.
    pub filter_text: String,
    pub sort_order: SortOrder,
}

impl UiState {
    pub fn new(filter_terms: FilterTermSet) -> Self {
        Self {
            filter_terms,
            filter_text: String::new(),
            sort_order: SortOrder::Date,
        }
    }

    pub fn toggle_term(&self, term: &str) -> Self {
        Self {
            filter_terms: self.filter_terms.toggle(term),
            ..self.clone()
        }
    }

    /// Replace the free-text query. The caller passes text that has already
    /// been through the phrase merge (see `Tokenizer::merge_query`).
    pub fn with_filter_text(&self, merged_text: impl Into<String>) -> Self {
        Self {
            filter_text: merged_text.into(),
            ..self.clone()
        }
    }

    pub fn with_sort_order(&self, sort_order: SortOrder) -> Self {
        Self {
            sort_order,
            ..self.clone()
        }
    }
}

/// A decoded share token. Every field may have been absent from the
/// token; absent text and sort order take their defaults, absent filter
/// terms are derived afresh by [`DecodedState::complete`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodedState {
    #[serde(default)]
    pub filter_terms: Option<FilterTermSet>,
    #[serde(default)]
    pub filter_text: Option<String>,
    #[serde(default, deserialize_with = "sort_order_or_empty")]
    pub sort_order: Option<SortOrder>,
}

/// An empty sort order key reads as absent.
fn sort_order_or_empty<'de, D>(deserializer: D) -> Result<Option<SortOrder>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)?.as_deref() {
        None | Some("") => Ok(None),
        Some(key) => SortOrder::from_key(key).map(Some).ok_or_else(|| {
            serde::de::Error::unknown_variant(key, &["date", "rating"])
        }),
    }
}

impl DecodedState {
    /// Fill in absent fields. `fresh_terms` runs only when the token carried
    /// no filter terms.
    pub fn complete<F>(self, fresh_terms: F) -> UiState
    where
        F: FnOnce() -> FilterTermSet,
    {
        UiState {
            filter_terms: self.filter_terms.unwrap_or_else(fresh_terms),
            filter_text: self.filter_text.unwrap_or_default(),
            sort_order: self.sort_order.unwrap_or_default(),
        }
    }
}
