use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Main parser configuration structure
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ParserConfig {
    /// Extra words for the built-in classifier and tagger
    #[serde(default)]
    pub lexicon: LexiconConfig,
    /// HTTP settings used when fetching recipe pages
    #[serde(default)]
    pub fetch: FetchConfig,
}

/// Words appended to the built-in word lists
#[derive(Debug, Deserialize, Clone, Default)]
pub struct LexiconConfig {
    #[serde(default)]
    pub food: Vec<String>,
    #[serde(default)]
    pub measure: Vec<String>,
    #[serde(default)]
    pub tool: Vec<String>,
    #[serde(default)]
    pub temperature: Vec<String>,
    /// Cooking verbs recognised at the start of a clause
    #[serde(default)]
    pub verbs: Vec<String>,
}

/// Configuration for page fetching
#[derive(Debug, Deserialize, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

// Default value functions
fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36".to_string()
}

impl ParserConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_STEPS__ prefix
    /// 2. recipe-steps.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_STEPS__FETCH__TIMEOUT
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
///
/// See [`ParserConfig::load`] for the source priority.
pub fn load_config() -> Result<ParserConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("recipe-steps").required(false))
        // Use double underscore for nested: RECIPE_STEPS__FETCH__TIMEOUT
        .add_source(
            Environment::with_prefix("RECIPE_STEPS")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
