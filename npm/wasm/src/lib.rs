//! WebAssembly bindings for the cocktail catalogue.
//!
//! Wraps the recipe and brand views for use from the browser. Lists come
//! back as JSON strings; the recipe view state lives inside the wrapper and
//! is replaced on every transition.

use wasm_bindgen::prelude::*;

use cocktail_catalogue::{
    BrandAggregate, BrandCatalogue, CatalogueConfig, Recipe, RecipeCatalogue, SortOrder, UiState,
};

use serde::Serialize;

/// Serializable recipe card data.
#[derive(Serialize)]
struct RecipeView<'a> {
    name: &'a str,
    /// Ingredients with merged phrases restored, one line per ingredient.
    ingredients: String,
    rating: f64,
}

/// Serializable brand statistic.
#[derive(Serialize)]
struct BrandView<'a> {
    brand: &'a str,
    mean: f64,
    support: usize,
    recipes_path: String,
}

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn load(recipes_json: &str, config_json: &str) -> Result<(Vec<Recipe>, CatalogueConfig), JsValue> {
    let recipes = Recipe::list_from_json(recipes_json).map_err(js_err)?;
    let config = CatalogueConfig::from_json_str(config_json).map_err(js_err)?;
    Ok((recipes, config))
}

/// JavaScript-facing recipe view.
///
/// Usage:
/// ```js
/// const view = new WasmRecipeCatalogue(recipesJson, configJson, location.hash);
/// if (view.clear_fragment()) location.hash = '';
/// view.toggle_term("dry gin");
/// location.hash = view.share_fragment();
/// ```
#[wasm_bindgen]
pub struct WasmRecipeCatalogue {
    catalogue: RecipeCatalogue,
    state: UiState,
    clear_fragment: bool,
}

#[wasm_bindgen]
impl WasmRecipeCatalogue {
    /// Build the view and restore state from the current location fragment.
    #[wasm_bindgen(constructor)]
    pub fn new(
        recipes_json: &str,
        config_json: &str,
        fragment: Option<String>,
    ) -> Result<WasmRecipeCatalogue, JsValue> {
        let (recipes, config) = load(recipes_json, config_json)?;
        let catalogue = RecipeCatalogue::new(recipes, &config).map_err(js_err)?;
        let restored = catalogue.restore(fragment.as_deref());
        Ok(Self {
            catalogue,
            state: restored.state,
            clear_fragment: restored.clear_fragment,
        })
    }

    /// Whether the fragment given at construction was invalid and should be cleared.
    pub fn clear_fragment(&self) -> bool {
        self.clear_fragment
    }

    pub fn toggle_term(&mut self, term: &str) {
        self.state = self.catalogue.toggle_term(&self.state, term);
    }

    pub fn search(&mut self, text: &str) {
        self.state = self.catalogue.search(&self.state, text);
    }

    /// `sort_order` must be "date" or "rating".
    pub fn sort_by(&mut self, sort_order: &str) -> Result<(), JsValue> {
        let order = SortOrder::from_key(sort_order)
            .ok_or_else(|| JsValue::from_str(&format!("unknown sort order: {}", sort_order)))?;
        self.state = self.catalogue.sort_by(&self.state, order);
        Ok(())
    }

    /// Current state as a JSON string.
    pub fn state(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.state).map_err(js_err)
    }

    /// Location fragment to publish for the current state.
    pub fn share_fragment(&self) -> Result<String, JsValue> {
        self.catalogue.share_fragment(&self.state).map_err(js_err)
    }

    /// Visible recipes as a JSON array string.
    pub fn visible_recipes(&self) -> Result<String, JsValue> {
        let views: Vec<RecipeView> = self
            .catalogue
            .visible(&self.state)
            .into_iter()
            .map(|r| RecipeView {
                name: &r.name,
                ingredients: cocktail_catalogue::split_tokens(&r.ingredients),
                rating: r.rating,
            })
            .collect();
        serde_json::to_string(&views).map_err(js_err)
    }
}

/// JavaScript-facing brand view.
#[wasm_bindgen]
pub struct WasmBrandCatalogue {
    catalogue: BrandCatalogue,
}

#[wasm_bindgen]
impl WasmBrandCatalogue {
    #[wasm_bindgen(constructor)]
    pub fn new(recipes_json: &str, config_json: &str) -> Result<WasmBrandCatalogue, JsValue> {
        let (recipes, config) = load(recipes_json, config_json)?;
        Ok(Self {
            catalogue: BrandCatalogue::new(recipes, &config.words),
        })
    }

    /// Brand statistics matching `query` as a JSON array string.
    ///
    /// `query` is `#<N`, `#>N`, or brand name pieces joined by `||`.
    pub fn ratings(&self, query: &str) -> Result<String, JsValue> {
        let ratings: Vec<BrandAggregate> = self.catalogue.ratings(query);
        let views: Vec<BrandView> = ratings
            .iter()
            .map(|a| BrandView {
                brand: &a.brand,
                mean: a.mean,
                support: a.support,
                recipes_path: a.recipes_path(),
            })
            .collect();
        serde_json::to_string(&views).map_err(js_err)
    }
}
