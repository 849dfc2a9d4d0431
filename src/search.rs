use crate::model::{Difficulty, GeneratedRecipe};

/// Criteria for narrowing a recipe collection. Unset criteria match
/// everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeFilter {
    /// Case-insensitive; searched in title, description and ingredient names
    pub term: Option<String>,
    /// Exact match on `cuisine_type`
    pub cuisine: Option<String>,
    pub difficulty: Option<Difficulty>,
    /// Every listed tag must be present on the recipe
    pub dietary: Vec<String>,
    /// Upper bound on prep plus cook time
    pub max_total_minutes: Option<u32>,
}

impl RecipeFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn term(mut self, term: impl Into<String>) -> Self {
        self.term = Some(term.into());
        self
    }

    pub fn cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisine = Some(cuisine.into());
        self
    }

    pub fn difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    pub fn dietary(mut self, tag: impl Into<String>) -> Self {
        self.dietary.push(tag.into());
        self
    }

    pub fn max_total_minutes(mut self, minutes: u32) -> Self {
        self.max_total_minutes = Some(minutes);
        self
    }

    pub fn matches(&self, recipe: &GeneratedRecipe) -> bool {
        if let Some(term) = self.term.as_deref().filter(|t| !t.is_empty()) {
            let term = term.to_lowercase();
            let found = recipe.title.to_lowercase().contains(&term)
                || recipe.description.to_lowercase().contains(&term)
                || recipe
                    .ingredients
                    .iter()
                    .any(|ing| ing.name.to_lowercase().contains(&term));
            if !found {
                return false;
            }
        }

        if let Some(cuisine) = &self.cuisine {
            if recipe.cuisine_type.as_ref() != Some(cuisine) {
                return false;
            }
        }

        if let Some(difficulty) = self.difficulty {
            if recipe.difficulty != difficulty {
                return false;
            }
        }

        if !self
            .dietary
            .iter()
            .all(|tag| recipe.dietary_restrictions.contains(tag))
        {
            return false;
        }

        match self.max_total_minutes {
            Some(max) => recipe.total_time_minutes() <= max,
            None => true,
        }
    }

    /// Matching recipes, in their original order
    pub fn apply<'a>(&self, recipes: &'a [GeneratedRecipe]) -> Vec<&'a GeneratedRecipe> {
        recipes.iter().filter(|recipe| self.matches(recipe)).collect()
    }
}
