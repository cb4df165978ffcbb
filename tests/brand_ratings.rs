//! Brand aggregation and brand search tests.

use cocktail_catalogue::{aggregate, filter_aggregates, BrandAggregate, BrandFilter, Recipe};

// ==================== Helpers ====================

fn brands(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn sample_recipes() -> Vec<Recipe> {
    vec![
        Recipe::new("A", "Acme Gin", 4.0),
        Recipe::new("B", "Acme Gin Tonic", 2.0),
        Recipe::new("C", "Other", 5.0),
        Recipe::new("D", "2 oz Bolt Rum\n1 oz Acme Gin", 5.0),
        Recipe::new("E", "Bolt Rum", 5.0),
        Recipe::new("F", "Corvo Vermouth", 1.0),
    ]
}

fn agg(brand: &str, mean: f64, support: usize) -> BrandAggregate {
    BrandAggregate {
        brand: brand.to_string(),
        mean,
        support,
    }
}

// ==================== Aggregation Tests ====================

#[test]
fn test_aggregate_single_brand() {
    let recipes = vec![
        Recipe::new("A", "Acme Gin", 4.0),
        Recipe::new("B", "Acme Gin Tonic", 2.0),
        Recipe::new("C", "Other", 5.0),
    ];
    let result = aggregate(&recipes, &brands(&["Acme"]));
    assert_eq!(result, vec![agg("Acme", 3.0, 2)]);
}

#[test]
fn test_aggregate_omits_unsupported_brands() {
    let result = aggregate(&sample_recipes(), &brands(&["Acme", "Zed"]));
    assert_eq!(result.len(), 1);
    assert!(result.iter().all(|a| a.support >= 1));
}

#[test]
fn test_aggregate_match_is_case_sensitive() {
    let recipes = vec![Recipe::new("A", "acme gin", 4.0)];
    assert!(aggregate(&recipes, &brands(&["Acme"])).is_empty());
}

#[test]
fn test_aggregate_sorted_by_mean_descending() {
    let result = aggregate(&sample_recipes(), &brands(&["Corvo", "Acme", "Bolt"]));
    // Acme: 4, 2, 5 -> 11/3; Bolt: 5, 5 -> 5; Corvo: 1.
    let names: Vec<&str> = result.iter().map(|a| a.brand.as_str()).collect();
    assert_eq!(names, vec!["Bolt", "Acme", "Corvo"]);
    assert_eq!(result[0], agg("Bolt", 5.0, 2));
    assert_eq!(result[1].support, 3);
    assert!((result[1].mean - 11.0 / 3.0).abs() < 1e-9);
}

#[test]
fn test_aggregate_equal_means_grouped() {
    let recipes = vec![
        Recipe::new("A", "Acme", 4.0),
        Recipe::new("B", "Bolt", 4.0),
        Recipe::new("C", "Corvo", 2.0),
    ];
    let result = aggregate(&recipes, &brands(&["Corvo", "Bolt", "Acme"]));
    assert_eq!(result.len(), 3);

    let mut top: Vec<&str> = result[..2].iter().map(|a| a.brand.as_str()).collect();
    top.sort();
    assert_eq!(top, vec!["Acme", "Bolt"]);
    assert_eq!(result[2].brand, "Corvo");
}

#[test]
fn test_aggregate_duplicate_brand_counted_once() {
    let result = aggregate(&sample_recipes(), &brands(&["Bolt", "Bolt"]));
    assert_eq!(result, vec![agg("Bolt", 5.0, 2)]);
}

#[test]
fn test_recipes_path() {
    assert_eq!(agg("Acme", 3.0, 2).recipes_path(), "/recipes/Acme");
}

// ==================== Brand Filter Tests ====================

fn ranked() -> Vec<BrandAggregate> {
    vec![
        agg("Bolt", 5.0, 2),
        agg("Acme", 11.0 / 3.0, 3),
        agg("Corvo", 1.0, 1),
    ]
}

fn names(aggregates: &[BrandAggregate]) -> Vec<&str> {
    aggregates.iter().map(|a| a.brand.as_str()).collect()
}

#[test]
fn test_filter_more_than() {
    assert_eq!(names(&filter_aggregates(ranked(), "#>1")), vec!["Bolt", "Acme"]);
    assert_eq!(names(&filter_aggregates(ranked(), "#>2")), vec!["Acme"]);
}

#[test]
fn test_filter_fewer_than() {
    assert_eq!(names(&filter_aggregates(ranked(), "#<3")), vec!["Bolt", "Corvo"]);
}

#[test]
fn test_filter_malformed_threshold_keeps_none() {
    assert!(filter_aggregates(ranked(), "#>abc").is_empty());
    assert!(filter_aggregates(ranked(), "#<").is_empty());
    assert_eq!(BrandFilter::parse("#>abc"), BrandFilter::MoreThan(None));
}

#[test]
fn test_filter_threshold_ignores_trailing_garbage() {
    assert_eq!(names(&filter_aggregates(ranked(), "#>2x")), vec!["Acme"]);
}

#[test]
fn test_filter_by_name_is_or_and_case_insensitive() {
    assert_eq!(
        names(&filter_aggregates(ranked(), "ACME || corv")),
        vec!["Acme", "Corvo"]
    );
    assert_eq!(names(&filter_aggregates(ranked(), "olt")), vec!["Bolt"]);
    assert!(filter_aggregates(ranked(), "zed").is_empty());
}

#[test]
fn test_filter_empty_query_keeps_all() {
    assert_eq!(filter_aggregates(ranked(), ""), ranked());
    assert_eq!(BrandFilter::parse(""), BrandFilter::All);
}
