use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Generator settings
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// TOML catalog to use instead of the built-in one
    #[serde(default)]
    pub catalog_path: Option<String>,
    /// Servings used when a request does not specify any
    #[serde(default = "default_servings")]
    pub default_servings: u32,
    /// Shortest prompt (in characters, after trimming) accepted
    #[serde(default = "default_min_prompt_length")]
    pub min_prompt_length: usize,
    /// Fixed seed for the fallback draw; random when unset
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            default_servings: default_servings(),
            min_prompt_length: default_min_prompt_length(),
            seed: None,
        }
    }
}

// Default value functions
fn default_servings() -> u32 {
    4
}

fn default_min_prompt_length() -> usize {
    10
}

impl GeneratorConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_FORGE__ prefix
    /// 2. recipe-forge.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_FORGE__CATALOG_PATH
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
///
/// See [`GeneratorConfig::load`] for the lookup order.
pub fn load_config() -> Result<GeneratorConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("recipe-forge").required(false))
        // Use double underscore for nested: RECIPE_FORGE__SEED
        .add_source(
            Environment::with_prefix("RECIPE_FORGE")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
