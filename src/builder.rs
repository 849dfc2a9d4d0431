use std::sync::Arc;

use log::debug;

use crate::{
    customize::customize, matcher::TemplateMatcher, Catalog, Difficulty, GeneratedRecipe,
    GenerationRequest, GeneratorConfig, GeneratorError, RandomSource, SeededRandom, ThreadRandom,
};

pub const MIN_SERVINGS: u32 = 1;
pub const MAX_SERVINGS: u32 = 20;
pub const MIN_TOTAL_MINUTES: u32 = 5;
pub const MAX_TOTAL_MINUTES: u32 = 480;

/// Validates requests and runs them through the matcher. Cheap to clone;
/// the catalog is shared.
#[derive(Debug, Clone)]
pub struct RecipeGenerator {
    catalog: Arc<Catalog>,
    config: GeneratorConfig,
}

impl RecipeGenerator {
    /// Use `catalog` with default settings
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            config: GeneratorConfig::default(),
        }
    }

    /// Build from settings, loading `catalog_path` when one is given
    pub fn with_config(config: GeneratorConfig) -> Result<Self, GeneratorError> {
        check_config(&config)?;
        let catalog = match &config.catalog_path {
            Some(path) => Catalog::load(path)?,
            None => Catalog::builtin(),
        };

        Ok(Self {
            catalog: Arc::new(catalog),
            config,
        })
    }

    /// Creates a new builder for a single generation
    ///
    /// # Example
    /// ```
    /// use recipe_forge::RecipeGenerator;
    ///
    /// let builder = RecipeGenerator::builder();
    /// ```
    pub fn builder() -> RecipeGeneratorBuilder {
        RecipeGeneratorBuilder::default()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Check caller-side preconditions and fill defaults. The matcher
    /// assumes everything checked here already holds.
    pub fn validate(&self, request: &GenerationRequest) -> Result<GenerationRequest, GeneratorError> {
        let prompt = request.prompt_text.trim();
        if prompt.chars().count() < self.config.min_prompt_length {
            return Err(GeneratorError::InvalidRequest(format!(
                "Please provide a more detailed description (at least {} characters)",
                self.config.min_prompt_length
            )));
        }

        if let Some(servings) = request.servings {
            if !(MIN_SERVINGS..=MAX_SERVINGS).contains(&servings) {
                return Err(GeneratorError::InvalidRequest(format!(
                    "servings must be between {} and {}, got {}",
                    MIN_SERVINGS, MAX_SERVINGS, servings
                )));
            }
        }

        if let Some(minutes) = request.max_total_minutes {
            if !(MIN_TOTAL_MINUTES..=MAX_TOTAL_MINUTES).contains(&minutes) {
                return Err(GeneratorError::InvalidRequest(format!(
                    "cooking time must be between {} and {} minutes, got {}",
                    MIN_TOTAL_MINUTES, MAX_TOTAL_MINUTES, minutes
                )));
            }
        }

        let cuisine = request
            .cuisine
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string);

        let dietary_tags = request
            .dietary_tags
            .iter()
            .map(|tag| tag.trim())
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect();

        Ok(GenerationRequest {
            prompt_text: prompt.to_string(),
            cuisine,
            difficulty: request.difficulty,
            servings: Some(request.servings.unwrap_or(self.config.default_servings)),
            dietary_tags,
            max_total_minutes: request.max_total_minutes,
        })
    }

    /// Validate, match and customize
    pub fn generate(
        &self,
        request: &GenerationRequest,
        rng: &mut dyn RandomSource,
    ) -> Result<GeneratedRecipe, GeneratorError> {
        let request = self.validate(request)?;
        let outcome = TemplateMatcher::new(&self.catalog).select(&request, rng);
        debug!(
            "Customizing '{}' (strategy {:?}, score {})",
            outcome.template.id, outcome.strategy, outcome.score
        );
        Ok(customize(outcome.template, &request))
    }

    /// Generate with the configured seed, or a thread-local generator when
    /// none is set
    pub fn generate_with_default_rng(
        &self,
        request: &GenerationRequest,
    ) -> Result<GeneratedRecipe, GeneratorError> {
        match self.config.seed {
            Some(seed) => self.generate(request, &mut SeededRandom::new(seed)),
            None => self.generate(request, &mut ThreadRandom::new()),
        }
    }
}

/// Settings the request validation relies on
fn check_config(config: &GeneratorConfig) -> Result<(), GeneratorError> {
    if !(MIN_SERVINGS..=MAX_SERVINGS).contains(&config.default_servings) {
        return Err(GeneratorError::Configuration(format!(
            "default_servings must be between {} and {}, got {}",
            MIN_SERVINGS, MAX_SERVINGS, config.default_servings
        )));
    }
    if config.min_prompt_length == 0 {
        return Err(GeneratorError::Configuration(
            "min_prompt_length must be at least 1".to_string(),
        ));
    }
    Ok(())
}

/// Builder for configuring and executing one recipe generation
#[derive(Debug, Default)]
pub struct RecipeGeneratorBuilder {
    catalog: Option<Arc<Catalog>>,
    config: Option<GeneratorConfig>,
    request: GenerationRequest,
    seed: Option<u64>,
}

impl RecipeGeneratorBuilder {
    /// Set the free-text description of the dish
    ///
    /// # Example
    /// ```
    /// use recipe_forge::RecipeGenerator;
    ///
    /// let builder = RecipeGenerator::builder()
    ///     .prompt("a creamy pasta with mushrooms");
    /// ```
    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.request.prompt_text = prompt.into();
        self
    }

    /// Prefer templates with an affinity for this cuisine
    pub fn cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.request.cuisine = Some(cuisine.into());
        self
    }

    pub fn difficulty(mut self, difficulty: Difficulty) -> Self {
        self.request.difficulty = Some(difficulty);
        self
    }

    pub fn servings(mut self, servings: u32) -> Self {
        self.request.servings = Some(servings);
        self
    }

    /// Add one dietary label. Labels are recorded, not applied to the
    /// ingredients.
    pub fn dietary(mut self, tag: impl Into<String>) -> Self {
        self.request.dietary_tags.push(tag.into());
        self
    }

    /// Fit prep and cook time into this many minutes
    pub fn max_total_minutes(mut self, minutes: u32) -> Self {
        self.request.max_total_minutes = Some(minutes);
        self
    }

    /// Make the fallback draw reproducible
    ///
    /// # Example
    /// ```
    /// use recipe_forge::RecipeGenerator;
    ///
    /// let first = RecipeGenerator::builder()
    ///     .prompt("something tasty tonight")
    ///     .seed(7)
    ///     .build()
    ///     .unwrap();
    /// let second = RecipeGenerator::builder()
    ///     .prompt("something tasty tonight")
    ///     .seed(7)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(first.template_id, second.template_id);
    /// ```
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Use this catalog instead of the built-in one
    pub fn catalog(mut self, catalog: Arc<Catalog>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Use these settings instead of the defaults
    pub fn config(mut self, config: GeneratorConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Build and execute the generation
    ///
    /// # Errors
    /// Returns `GeneratorError` if:
    /// - The prompt is too short
    /// - Servings or cooking time are out of range
    /// - A configured catalog file cannot be loaded
    pub fn build(self) -> Result<GeneratedRecipe, GeneratorError> {
        let config = self.config.unwrap_or_default();
        let seed = self.seed.or(config.seed);

        let generator = match self.catalog {
            Some(catalog) => {
                check_config(&config)?;
                RecipeGenerator { catalog, config }
            }
            None => RecipeGenerator::with_config(config)?,
        };

        match seed {
            Some(seed) => generator.generate(&self.request, &mut SeededRandom::new(seed)),
            None => generator.generate(&self.request, &mut ThreadRandom::new()),
        }
    }
}
