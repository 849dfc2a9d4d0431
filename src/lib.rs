//! Prompt-driven recipe generation.
//!
//! A free-text prompt is scored against a fixed catalog of recipe
//! templates; the best match is copied and adjusted for servings,
//! difficulty, cuisine, dietary labels and a time budget.
//!
//! ```
//! use recipe_forge::RecipeGenerator;
//!
//! let recipe = RecipeGenerator::builder()
//!     .prompt("a creamy pasta with mushrooms")
//!     .servings(2)
//!     .build()
//!     .unwrap();
//! assert_eq!(recipe.template_id, "creamy_mushroom_pasta");
//! ```

pub mod analytics;
pub mod builder;
pub mod card;
pub mod catalog;
pub mod config;
pub mod customize;
pub mod enhance;
pub mod error;
pub mod matcher;
pub mod model;
pub mod random;
pub mod search;
pub mod shopping;

pub use analytics::CollectionStats;
pub use builder::{RecipeGenerator, RecipeGeneratorBuilder};
pub use catalog::{Catalog, CategoryRule};
pub use config::GeneratorConfig;
pub use customize::customize;
pub use enhance::{enhance, Enhancement};
pub use error::GeneratorError;
pub use matcher::{MatchOutcome, MatchStrategy, TemplateMatcher};
pub use model::{Difficulty, GeneratedRecipe, GenerationRequest, Ingredient, RecipeTemplate};
pub use random::{RandomSource, SeededRandom, ThreadRandom};
pub use search::RecipeFilter;
pub use shopping::{ShoppingItem, ShoppingList};

/// Generate a recipe from a prompt alone, using the built-in catalog
///
/// # Example
/// ```
/// let recipe = recipe_forge::generate_from_prompt("fried rice please").unwrap();
/// assert_eq!(recipe.template_id, "fried_rice");
/// ```
pub fn generate_from_prompt(prompt: &str) -> Result<GeneratedRecipe, GeneratorError> {
    RecipeGenerator::builder().prompt(prompt).build()
}

/// Pick a template for `request` and customize it, without caller-side
/// validation
pub fn match_and_customize(
    catalog: &Catalog,
    request: &GenerationRequest,
    rng: &mut dyn RandomSource,
) -> GeneratedRecipe {
    let outcome = TemplateMatcher::new(catalog).select(request, rng);
    customize(outcome.template, request)
}
