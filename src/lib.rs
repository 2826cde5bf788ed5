//! Breaks recipe instructions into steps and tracks, step by step, which
//! ingredients are used and what is left.
//!
//! ```
//! use recipe_steps::{Ingredient, Quantity, StepParser};
//!
//! let parser = StepParser::default();
//! let recipe = parser.build_recipe(
//!     "Batter",
//!     vec![
//!         Ingredient::new("flour").with_quantity(Quantity::from_integer(2)).with_unit("cup"),
//!         Ingredient::new("egg").with_quantity(Quantity::from_integer(3)),
//!     ],
//!     &["Whisk 2 eggs; add 1 cup flour."],
//! );
//! assert_eq!(recipe.steps.len(), 2);
//! assert_eq!(recipe.steps[0].methods, vec!["whisk"]);
//! ```

pub mod config;
pub mod error;
pub mod fetch;
pub mod model;
pub mod nlp;
pub mod parser;
pub mod quantity;
pub mod resolver;
pub mod scrape;
pub mod sites;

use log::{debug, error};

pub use config::ParserConfig;
pub use error::RecipeError;
pub use model::{Ingredient, IngredientState, IntermediateIngredient, Recipe, Step};
pub use parser::StepParser;
pub use quantity::Quantity;
pub use resolver::find_ingredient;
pub use scrape::RecipePage;
pub use sites::{HtmlTag, RecipeSource};

use crate::fetch::{normalize_url, RequestFetcher};

/// Fetches a page of a known site and builds the recipe from it.
///
/// `url` is used as given; the source decides how the markup is read.
pub fn fetch_recipe(
    url: &str,
    source: RecipeSource,
    config: &ParserConfig,
) -> Result<Recipe, RecipeError> {
    let fetcher = RequestFetcher::new(&config.fetch)?;
    let html = fetcher.fetch(url)?;

    let page = RecipePage::parse(source, &html);
    if page.is_empty() {
        error!("No recipe found on {}", url);
        return Err(RecipeError::NoRecipeFound(url.to_string()));
    }

    let recipe = page.into_recipe(&StepParser::from_config(config));
    debug!("{:#?}", recipe);
    Ok(recipe)
}

/// Retrieves and parses a recipe from a supported site.
///
/// The site is detected from the URL, which is then normalised to
/// `https://www.` form before fetching.
pub fn get_recipe_from_url(url: &str, config: &ParserConfig) -> Result<Recipe, RecipeError> {
    let source = RecipeSource::from_url(url)
        .ok_or_else(|| RecipeError::UnsupportedSource(url.to_string()))?;
    fetch_recipe(&normalize_url(url), source, config)
}
