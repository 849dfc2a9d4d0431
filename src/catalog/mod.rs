mod builtin;

use crate::error::GeneratorError;
use crate::model::RecipeTemplate;
use config::{Config, File, FileFormat};
use log::debug;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// Longest prep plus cook time a template may declare (one day)
pub const MAX_TEMPLATE_MINUTES: u32 = 24 * 60;

/// Fallback rule used when no keyword matches the prompt. The first rule
/// with a cue found in the prompt wins and one of its members is drawn at
/// random.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CategoryRule {
    pub name: String,
    pub cues: Vec<String>,
    pub members: Vec<String>,
}

impl CategoryRule {
    pub fn new(name: &str, cues: &[&str], members: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            cues: cues.iter().map(|c| c.to_string()).collect(),
            members: members.iter().map(|m| m.to_string()).collect(),
        }
    }

    /// `prompt` must already be lowercased.
    pub fn is_cued_by(&self, prompt: &str) -> bool {
        self.cues.iter().any(|cue| prompt.contains(cue.as_str()))
    }
}

/// On-disk shape of a catalog file
#[derive(Debug, Deserialize)]
struct CatalogFile {
    templates: Vec<RecipeTemplate>,
    #[serde(default)]
    affinity: HashMap<String, Vec<String>>,
    #[serde(default)]
    categories: Vec<CategoryRule>,
}

/// Immutable set of recipe templates plus the tables the matcher scores
/// against. Order of `templates` is significant: it breaks score ties.
#[derive(Debug, Clone)]
pub struct Catalog {
    templates: Vec<RecipeTemplate>,
    affinity: HashMap<String, Vec<String>>,
    categories: Vec<CategoryRule>,
}

impl Catalog {
    /// Build and validate a catalog. Affinity keys are lowercased so
    /// lookups can use the lowercased request cuisine.
    pub fn new(
        templates: Vec<RecipeTemplate>,
        affinity: HashMap<String, Vec<String>>,
        categories: Vec<CategoryRule>,
    ) -> Result<Self, GeneratorError> {
        let affinity = affinity
            .into_iter()
            .map(|(cuisine, ids)| (cuisine.to_lowercase(), ids))
            .collect();

        let categories = categories
            .into_iter()
            .map(|rule| CategoryRule {
                cues: rule.cues.iter().map(|c| c.to_lowercase()).collect(),
                ..rule
            })
            .collect();

        let catalog = Self {
            templates,
            affinity,
            categories,
        };
        catalog.validate()?;

        debug!(
            "Catalog ready: {} templates, {} cuisines, {} categories",
            catalog.templates.len(),
            catalog.affinity.len(),
            catalog.categories.len()
        );
        Ok(catalog)
    }

    /// The catalog that ships with the crate
    pub fn builtin() -> Self {
        Self {
            templates: builtin::templates(),
            affinity: builtin::affinity(),
            categories: builtin::categories(),
        }
    }

    /// Parse a TOML catalog. Expected layout:
    ///
    /// ```toml
    /// [[templates]]
    /// id = "tomato_soup"
    /// # ...
    ///
    /// [affinity]
    /// italian = ["creamy_mushroom_pasta"]
    ///
    /// [[categories]]
    /// name = "soup"
    /// cues = ["soup"]
    /// members = ["tomato_soup"]
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self, GeneratorError> {
        let parsed: CatalogFile = Config::builder()
            .add_source(File::from_str(content, FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        Self::new(parsed.templates, parsed.affinity, parsed.categories)
    }

    /// Read and parse a TOML catalog from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GeneratorError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        debug!("Loading catalog from {}", path.as_ref().display());
        Self::from_toml_str(&content)
    }

    pub fn templates(&self) -> &[RecipeTemplate] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&RecipeTemplate> {
        self.templates.iter().find(|t| t.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.templates.iter().position(|t| t.id == id)
    }

    pub fn categories(&self) -> &[CategoryRule] {
        &self.categories
    }

    /// Template ids that earn the cuisine bonus. `cuisine` must already be
    /// lowercased.
    pub fn affinity_for(&self, cuisine: &str) -> &[String] {
        self.affinity
            .get(cuisine)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn validate(&self) -> Result<(), GeneratorError> {
        if self.templates.is_empty() {
            return Err(GeneratorError::Configuration(
                "catalog contains no templates".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for template in &self.templates {
            if template.id.trim().is_empty() {
                return Err(GeneratorError::Configuration(
                    "template with a blank id".to_string(),
                ));
            }
            if !seen.insert(template.id.as_str()) {
                return Err(GeneratorError::Configuration(format!(
                    "duplicate template id '{}'",
                    template.id
                )));
            }
            if template.title.trim().is_empty() {
                return Err(missing_field(&template.id, "title"));
            }
            if template.ingredients.is_empty() {
                return Err(missing_field(&template.id, "ingredients"));
            }
            if template.instructions.is_empty() {
                return Err(missing_field(&template.id, "instructions"));
            }
            if template.keywords.iter().all(|k| k.trim().is_empty()) {
                return Err(missing_field(&template.id, "keywords"));
            }
            let total = template
                .prep_time_minutes
                .checked_add(template.cook_time_minutes)
                .filter(|total| *total <= MAX_TEMPLATE_MINUTES);
            if total.is_none() {
                return Err(GeneratorError::Configuration(format!(
                    "template '{}' takes longer than {} minutes",
                    template.id, MAX_TEMPLATE_MINUTES
                )));
            }
        }

        for (cuisine, ids) in &self.affinity {
            for id in ids {
                if !seen.contains(id.as_str()) {
                    return Err(GeneratorError::Configuration(format!(
                        "cuisine '{}' refers to unknown template '{}'",
                        cuisine, id
                    )));
                }
            }
        }

        for rule in &self.categories {
            if rule.cues.is_empty() || rule.members.is_empty() {
                return Err(GeneratorError::Configuration(format!(
                    "category '{}' needs at least one cue and one member",
                    rule.name
                )));
            }
            if let Some(id) = rule.members.iter().find(|id| !seen.contains(id.as_str())) {
                return Err(GeneratorError::Configuration(format!(
                    "category '{}' refers to unknown template '{}'",
                    rule.name, id
                )));
            }
        }

        Ok(())
    }
}

fn missing_field(id: &str, field: &str) -> GeneratorError {
    GeneratorError::Configuration(format!("template '{}' is missing {}", id, field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Ingredient;

    fn sample_template(id: &str) -> RecipeTemplate {
        RecipeTemplate {
            id: id.to_string(),
            title: format!("Sample {}", id),
            description: "A sample".to_string(),
            ingredients: vec![Ingredient::new("Water", "1", "cup")],
            instructions: vec!["Boil it.".to_string()],
            prep_time_minutes: 5,
            cook_time_minutes: 10,
            narrative_note: "Simple.".to_string(),
            keywords: vec!["water".to_string()],
        }
    }

    #[test]
    fn test_builtin_catalog_is_valid() {
        let builtin = Catalog::builtin();
        let rebuilt = Catalog::new(
            builtin.templates.clone(),
            builtin.affinity.clone(),
            builtin.categories.clone(),
        );
        assert!(rebuilt.is_ok());
        assert_eq!(builtin.len(), 16);
    }

    #[test]
    fn test_builtin_catalog_order() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.templates()[0].id, "creamy_mushroom_pasta");
        assert_eq!(catalog.templates()[15].id, "butter_chicken");
        assert_eq!(catalog.position("fried_rice"), Some(13));
    }

    #[test]
    fn test_empty_catalog_rejected() {
        let result = Catalog::new(Vec::new(), HashMap::new(), Vec::new());
        assert!(matches!(result, Err(GeneratorError::Configuration(_))));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = Catalog::new(
            vec![sample_template("a"), sample_template("a")],
            HashMap::new(),
            Vec::new(),
        );
        match result {
            Err(GeneratorError::Configuration(msg)) => assert!(msg.contains("duplicate")),
            other => panic!("expected configuration error, got {:?}", other),
        }
    }

    #[test]
    fn test_template_without_ingredients_rejected() {
        let mut template = sample_template("a");
        template.ingredients.clear();
        let result = Catalog::new(vec![template], HashMap::new(), Vec::new());
        match result {
            Err(GeneratorError::Configuration(msg)) => assert!(msg.contains("ingredients")),
            other => panic!("expected configuration error, got {:?}", other),
        }
    }

    #[test]
    fn test_overflowing_times_rejected() {
        let mut template = sample_template("a");
        template.prep_time_minutes = u32::MAX;
        template.cook_time_minutes = 1;
        let result = Catalog::new(vec![template], HashMap::new(), Vec::new());
        match result {
            Err(GeneratorError::Configuration(msg)) => assert!(msg.contains("longer than")),
            other => panic!("expected configuration error, got {:?}", other),
        }
    }

    #[test]
    fn test_times_over_a_day_rejected() {
        let mut template = sample_template("a");
        template.prep_time_minutes = MAX_TEMPLATE_MINUTES;
        template.cook_time_minutes = 1;
        assert!(Catalog::new(vec![template.clone()], HashMap::new(), Vec::new()).is_err());

        template.cook_time_minutes = 0;
        assert!(Catalog::new(vec![template], HashMap::new(), Vec::new()).is_ok());
    }

    #[test]
    fn test_dangling_affinity_rejected() {
        let mut affinity = HashMap::new();
        affinity.insert("thai".to_string(), vec!["pad_thai".to_string()]);
        let result = Catalog::new(vec![sample_template("a")], affinity, Vec::new());
        assert!(matches!(result, Err(GeneratorError::Configuration(_))));
    }

    #[test]
    fn test_dangling_category_member_rejected() {
        let rule = CategoryRule::new("soup", &["soup"], &["missing"]);
        let result = Catalog::new(vec![sample_template("a")], HashMap::new(), vec![rule]);
        assert!(matches!(result, Err(GeneratorError::Configuration(_))));
    }

    #[test]
    fn test_affinity_keys_are_lowercased() {
        let mut affinity = HashMap::new();
        affinity.insert("Italian".to_string(), vec!["a".to_string()]);
        let catalog = Catalog::new(vec![sample_template("a")], affinity, Vec::new()).unwrap();
        assert_eq!(catalog.affinity_for("italian"), &["a".to_string()]);
        assert!(catalog.affinity_for("french").is_empty());
    }

    #[test]
    fn test_category_cue_matching() {
        let rule = CategoryRule::new("dessert", &["dessert", "cake"], &["a"]);
        assert!(rule.is_cued_by("a birthday cake"));
        assert!(!rule.is_cued_by("a quick soup"));
    }

    #[test]
    fn test_from_toml_str() {
        let toml = r#"
            [[templates]]
            id = "tomato_soup"
            title = "Tomato Soup"
            description = "Smooth and warm"
            instructions = ["Roast the tomatoes.", "Blend."]
            prep_time_minutes = 15
            cook_time_minutes = 60
            narrative_note = "Comfort in a bowl."
            keywords = ["tomato", "soup"]

            [[templates.ingredients]]
            name = "Roma tomatoes"
            amount = "3"
            unit = "lbs"

            [affinity]
            italian = ["tomato_soup"]

            [[categories]]
            name = "soup"
            cues = ["soup"]
            members = ["tomato_soup"]
        "#;

        let catalog = Catalog::from_toml_str(toml).unwrap();
        assert_eq!(catalog.len(), 1);
        let soup = catalog.get("tomato_soup").unwrap();
        assert_eq!(soup.ingredients[0].unit, "lbs");
        assert_eq!(soup.total_time_minutes(), 75);
        assert_eq!(catalog.affinity_for("italian").len(), 1);
        assert_eq!(catalog.categories()[0].name, "soup");
    }

    #[test]
    fn test_from_toml_str_without_templates_fails() {
        let result = Catalog::from_toml_str("[affinity]\nitalian = []\n");
        assert!(result.is_err());
    }
}
