use thiserror::Error;

/// Errors that can occur while fetching and scraping a recipe
#[derive(Error, Debug)]
pub enum RecipeError {
    /// Failed to fetch recipe from URL
    #[error("Failed to fetch URL: {0}")]
    FetchError(#[from] reqwest::Error),

    /// The URL does not belong to a supported recipe site
    #[error("Unsupported recipe source: {0}")]
    UnsupportedSource(String),

    /// Failed to parse recipe from webpage
    #[error("Failed to parse recipe: {0}")]
    ParseError(String),

    /// The page was fetched but held no recognisable recipe
    #[error("No recipe found at {0}")]
    NoRecipeFound(String),

    /// Error parsing HTTP headers
    #[error("Header parse error: {0}")]
    HeaderError(#[from] reqwest::header::InvalidHeaderValue),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
