//! Per-brand rating statistics and the brand search mini-language.

use std::cmp::Ordering;

use log::debug;
use serde::Serialize;

use crate::types::Recipe;

/// Query prefix keeping brands backed by fewer than N recipes.
pub const FEWER_THAN_PREFIX: &str = "#<";
/// Query prefix keeping brands backed by more than N recipes.
pub const MORE_THAN_PREFIX: &str = "#>";
/// Separator between OR-ed brand name pieces.
pub const OR_SEPARATOR: &str = "||";

/// Mean rating and support for one brand.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrandAggregate {
    pub brand: String,
    pub mean: f64,
    /// Number of recipes mentioning the brand. Always at least 1.
    pub support: usize,
}

impl BrandAggregate {
    /// Location of the recipe view pre-filtered on this brand.
    pub fn recipes_path(&self) -> String {
        format!("/recipes/{}", self.brand)
    }
}

/// Aggregate recipe ratings per brand.
///
/// A recipe counts towards a brand when its ingredient text contains the
/// brand name verbatim. Brands with no recipe are omitted. The result is
/// sorted by descending mean; the order among equal means is unspecified.
pub fn aggregate(recipes: &[Recipe], brands: &[String]) -> Vec<BrandAggregate> {
    let mut seen: Vec<&str> = Vec::with_capacity(brands.len());
    let mut aggregates = Vec::new();

    for brand in brands {
        if seen.contains(&brand.as_str()) {
            continue;
        }
        seen.push(brand.as_str());

        let ratings: Vec<f64> = recipes
            .iter()
            .filter(|r| r.ingredients.contains(brand.as_str()))
            .map(|r| r.rating)
            .collect();
        if ratings.is_empty() {
            continue;
        }

        aggregates.push(BrandAggregate {
            brand: brand.clone(),
            mean: ratings.iter().sum::<f64>() / ratings.len() as f64,
            support: ratings.len(),
        });
    }

    aggregates.sort_by(|a, b| b.mean.partial_cmp(&a.mean).unwrap_or(Ordering::Equal));
    debug!(
        "aggregated {} of {} brands over {} recipes",
        aggregates.len(),
        brands.len(),
        recipes.len()
    );
    aggregates
}

/// Parsed brand search query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrandFilter {
    /// `#<N`. `None` when N is not a number, which excludes every brand.
    FewerThan(Option<i64>),
    /// `#>N`. `None` when N is not a number, which excludes every brand.
    MoreThan(Option<i64>),
    /// Lower-cased pieces; a brand is kept if its name contains any of them.
    AnyOf(Vec<String>),
    /// Empty query.
    All,
}

impl BrandFilter {
    pub fn parse(query: &str) -> Self {
        if let Some(rest) = query.strip_prefix(FEWER_THAN_PREFIX) {
            return BrandFilter::FewerThan(parse_leading_int(rest));
        }
        if let Some(rest) = query.strip_prefix(MORE_THAN_PREFIX) {
            return BrandFilter::MoreThan(parse_leading_int(rest));
        }
        if query.is_empty() {
            return BrandFilter::All;
        }
        BrandFilter::AnyOf(
            query
                .to_lowercase()
                .split(OR_SEPARATOR)
                .map(|piece| piece.trim().to_string())
                .collect(),
        )
    }

    pub fn keep(&self, aggregate: &BrandAggregate) -> bool {
        let support = aggregate.support as i64;
        match self {
            BrandFilter::FewerThan(Some(max)) => support < *max,
            BrandFilter::MoreThan(Some(min)) => support > *min,
            BrandFilter::FewerThan(None) | BrandFilter::MoreThan(None) => false,
            BrandFilter::AnyOf(pieces) => {
                let brand = aggregate.brand.to_lowercase();
                pieces.iter().any(|piece| brand.contains(piece.as_str()))
            }
            BrandFilter::All => true,
        }
    }
}

/// Keep the aggregates matching `query`, preserving their order.
pub fn filter_aggregates(aggregates: Vec<BrandAggregate>, query: &str) -> Vec<BrandAggregate> {
    let filter = BrandFilter::parse(query);
    aggregates.into_iter().filter(|a| filter.keep(a)).collect()
}

/// Leading base-10 integer of `s`, after optional whitespace and sign.
/// Trailing garbage is ignored; no digits at all yields `None`. Values past
/// the `i64` range saturate.
fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits_len = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits_len == 0 {
        return None;
    }
    let value = rest[..digits_len].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}
