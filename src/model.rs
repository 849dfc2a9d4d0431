use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single ingredient line. Every field is display text; `amount` may be
/// something like "1/2" or "to".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub amount: String,
    pub unit: String,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, amount: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount: amount.into(),
            unit: unit.into(),
        }
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.amount, self.unit, self.name)
    }
}

/// A pre-authored recipe in the catalog. Never mutated after the catalog
/// is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeTemplate {
    pub id: String,
    pub title: String,
    pub description: String,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<String>,
    pub prep_time_minutes: u32,
    pub cook_time_minutes: u32,
    pub narrative_note: String,
    /// Matched as case-insensitive substrings of the prompt. Entries
    /// containing a space count as phrases.
    pub keywords: Vec<String>,
}

impl RecipeTemplate {
    pub fn total_time_minutes(&self) -> u32 {
        self.prep_time_minutes.saturating_add(self.cook_time_minutes)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!(
                "unknown difficulty '{}', expected easy, medium or hard",
                other
            )),
        }
    }
}

/// What the user asked for. Validation happens before this reaches the
/// matcher.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub prompt_text: String,
    #[serde(default)]
    pub cuisine: Option<String>,
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    pub servings: Option<u32>,
    #[serde(default)]
    pub dietary_tags: Vec<String>,
    #[serde(default)]
    pub max_total_minutes: Option<u32>,
}

impl GenerationRequest {
    pub fn new(prompt_text: impl Into<String>) -> Self {
        Self {
            prompt_text: prompt_text.into(),
            ..Default::default()
        }
    }
}

/// A customized copy of a template. Carries no identifier, status or
/// timestamps; whoever stores it assigns those.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedRecipe {
    pub template_id: String,
    pub title: String,
    pub description: String,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<String>,
    pub prep_time_minutes: u32,
    pub cook_time_minutes: u32,
    pub servings: u32,
    pub difficulty: Difficulty,
    pub cuisine_type: Option<String>,
    pub dietary_restrictions: Vec<String>,
    pub narrative_note: String,
}

impl GeneratedRecipe {
    pub fn total_time_minutes(&self) -> u32 {
        self.prep_time_minutes.saturating_add(self.cook_time_minutes)
    }
}
