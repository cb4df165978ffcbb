//! Recipe predicate and sort tests.

use cocktail_catalogue::{
    has_all_filter_terms, has_filter_text, matches, query_pieces, sort_recipes, visible_recipes,
    FilterTermSet, Recipe, SortOrder, UiState,
};

// ==================== Helpers ====================

fn gimlet() -> Recipe {
    Recipe::new("Gimlet", "2 oz dry_gin\n3/4 oz lime juice\n1/2 oz simple syrup", 4.0)
}

fn mojito() -> Recipe {
    Recipe::new("Mojito", "2 oz white rum\n1 oz lime juice\n8 mint leaves", 3.5)
}

fn terms_enabled(terms: &[&str], enabled: &[&str]) -> FilterTermSet {
    enabled
        .iter()
        .fold(FilterTermSet::initialize(terms.iter().copied()), |set, t| {
            set.toggle(t)
        })
}

// ==================== Filter Term Tests ====================

#[test]
fn test_no_enabled_terms_matches_everything() {
    let terms = FilterTermSet::initialize(["mint", "rum"]);
    assert!(has_all_filter_terms(&gimlet(), &terms));
    assert!(has_all_filter_terms(&mojito(), &terms));
}

#[test]
fn test_enabled_terms_are_conjunctive() {
    let terms = terms_enabled(&["lime", "mint", "rum"], &["lime", "mint"]);
    assert!(has_all_filter_terms(&mojito(), &terms));
    assert!(
        !has_all_filter_terms(&gimlet(), &terms),
        "gimlet has lime but no mint"
    );
}

#[test]
fn test_single_absent_term_fails_regardless_of_text() {
    let terms = terms_enabled(&["lime", "mint"], &["mint"]);
    assert!(!matches(&gimlet(), &terms, ""));
    assert!(!matches(&gimlet(), &terms, "gimlet"));
}

#[test]
fn test_filter_terms_match_merged_phrases() {
    let terms = terms_enabled(&["Dry Gin"], &["Dry Gin"]);
    assert!(has_all_filter_terms(&gimlet(), &terms));
}

// ==================== Free Text Tests ====================

#[test]
fn test_empty_text_matches_everything() {
    assert!(has_filter_text(&gimlet(), ""));
}

#[test]
fn test_text_pieces_are_and_ed() {
    assert!(has_filter_text(&mojito(), "rum && mint"));
    assert!(!has_filter_text(&mojito(), "rum && gin"));
}

#[test]
fn test_text_matches_name_and_is_case_insensitive() {
    assert!(has_filter_text(&gimlet(), "GIMLET"));
    assert!(has_filter_text(&gimlet(), "gimlet && Lime Juice"));
}

#[test]
fn test_stray_ampersands_stripped() {
    assert_eq!(query_pieces(" rum & && &mint "), vec!["rum", "mint"]);
    assert!(has_filter_text(&mojito(), "rum & && &mint"));
    assert_eq!(query_pieces("&&"), Vec::<String>::new());
    assert!(has_filter_text(&mojito(), "&&"));
}

#[test]
fn test_text_matches_raw_ingredient_representation() {
    // Merged query text carries the joiner, like the dataset does.
    assert!(has_filter_text(&gimlet(), "dry_gin"));
    assert!(!has_filter_text(&gimlet(), "dry gin"));
}

// ==================== Sort Tests ====================

#[test]
fn test_sort_by_rating_is_stable_descending() {
    let recipes = vec![
        Recipe::new("A", "gin", 3.0),
        Recipe::new("B", "gin", 5.0),
        Recipe::new("C", "gin", 3.0),
        Recipe::new("D", "gin", 5.0),
    ];
    let mut refs: Vec<&Recipe> = recipes.iter().collect();
    sort_recipes(&mut refs, SortOrder::Rating);

    let names: Vec<&str> = refs.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["B", "D", "A", "C"]);
    assert!(refs.windows(2).all(|w| w[0].rating >= w[1].rating));
}

#[test]
fn test_sort_by_date_keeps_input_order() {
    let recipes = vec![
        Recipe::new("A", "gin", 3.0),
        Recipe::new("B", "gin", 5.0),
        Recipe::new("C", "gin", 1.0),
    ];
    let mut refs: Vec<&Recipe> = recipes.iter().collect();
    sort_recipes(&mut refs, SortOrder::Date);

    let names: Vec<&str> = refs.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B", "C"]);
}

// ==================== Visible Recipes Tests ====================

#[test]
fn test_visible_recipes_filters_then_sorts() {
    let recipes = vec![
        gimlet(),
        mojito(),
        Recipe::new("Daiquiri", "2 oz white rum\n1 oz lime juice", 4.5),
    ];
    let state = UiState::new(terms_enabled(&["rum", "lime"], &["lime"]))
        .with_filter_text("rum")
        .with_sort_order(SortOrder::Rating);

    let names: Vec<&str> = visible_recipes(&recipes, &state)
        .iter()
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(names, vec!["Daiquiri", "Mojito"]);
}
